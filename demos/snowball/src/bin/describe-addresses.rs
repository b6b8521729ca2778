/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use snowball::{Config, Region};

#[tokio::main]
async fn main() -> Result<(), snowball::Error> {
    let region = Region::new("us-east-1");
    let conf = Config::builder().region(region).build();
    let client = snowball::Client::from_conf(conf);
    let addresses = client.describe_addresses().send().await?;
    for address in addresses.addresses.unwrap_or_default() {
        println!("Address: {:?}", address);
    }

    Ok(())
}
