/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use std::process;

use snowball::Region;

use structopt::StructOpt;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Debug, StructOpt)]
struct Opt {
    #[structopt(default_value = "us-east-1", short, long)]
    region: String,

    #[structopt(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let opt = Opt::from_args();

    if opt.verbose {
        println!("Snowball client version: {}\n", snowball::PKG_VERSION);
        println!("Region: {}", opt.region);

        SubscriberBuilder::default()
            .with_env_filter("info")
            .with_span_events(FmtSpan::CLOSE)
            .init();
    }

    let config = snowball::Config::builder()
        .region(Region::new(opt.region.clone()))
        .build();

    let client = snowball::Client::from_conf_conn(config, aws_hyper::conn::Standard::https());

    match client.list_jobs().send().await {
        Ok(resp) => {
            let jobs = resp.job_list_entries.unwrap_or_default();
            for job in jobs.iter() {
                println!(
                    "    {} {}",
                    job.job_id.as_deref().unwrap_or_default(),
                    job.job_state.as_ref().map(|s| s.as_str()).unwrap_or("unknown"),
                );
            }
            println!("\nFound {} jobs in {} region.\n", jobs.len(), opt.region);
        }
        Err(e) => {
            println!("Got an error listing jobs:");
            println!("{}", e);
            process::exit(1);
        }
    };
}
