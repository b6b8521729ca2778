/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use std::process;

use imagebuilder::model::Ownership;
use imagebuilder::Region;

use structopt::StructOpt;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Debug, StructOpt)]
struct Opt {
    #[structopt(default_value = "us-west-2", short, long)]
    region: String,

    /// Whose images to list: Self, Shared or Amazon
    #[structopt(default_value = "Self", short, long)]
    owner: String,

    #[structopt(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let opt = Opt::from_args();

    if opt.verbose {
        println!("Image Builder client version: {}\n", imagebuilder::PKG_VERSION);
        println!("Region: {}", opt.region);

        SubscriberBuilder::default()
            .with_env_filter("info")
            .with_span_events(FmtSpan::CLOSE)
            .init();
    }

    let config = imagebuilder::Config::builder()
        .region(Region::new(opt.region.clone()))
        .build();

    let client = imagebuilder::Client::from_conf_conn(config, aws_hyper::conn::Standard::https());

    let mut next_token = None;
    let mut found = 0;
    loop {
        let resp = client
            .list_images()
            .owner(Ownership::from(opt.owner.as_str()))
            .set_next_token(next_token.take())
            .send()
            .await;
        match resp {
            Ok(resp) => {
                for image in resp.image_version_list.unwrap_or_default() {
                    found += 1;
                    println!(
                        "    {} {} ({})",
                        image.name.unwrap_or_default(),
                        image.version.unwrap_or_default(),
                        image.platform.as_ref().map(|p| p.as_str()).unwrap_or("unknown"),
                    );
                }
                next_token = resp.next_token;
                if next_token.is_none() {
                    break;
                }
            }
            Err(e) => {
                println!("Got an error listing images:");
                println!("{}", e);
                process::exit(1);
            }
        }
    }

    println!("\nFound {} images in {} region.\n", found, opt.region);
}
