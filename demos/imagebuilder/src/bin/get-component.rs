/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use imagebuilder::Region;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
struct Opt {
    #[structopt(default_value = "us-west-2", short, long)]
    region: String,

    /// The component build version ARN, eg. arn:aws:imagebuilder:us-west-2:aws:component/update-linux/1.0.0/1
    #[structopt(short, long)]
    arn: String,
}

#[tokio::main]
async fn main() -> Result<(), imagebuilder::Error> {
    let opt = Opt::from_args();
    let conf = imagebuilder::Config::builder()
        .region(Region::new(opt.region))
        .build();
    let client = imagebuilder::Client::from_conf(conf);
    let resp = client
        .get_component()
        .component_build_version_arn(opt.arn)
        .send()
        .await?;
    match resp.component {
        Some(component) => println!("{:#?}", component),
        None => println!("No component returned"),
    }

    Ok(())
}
