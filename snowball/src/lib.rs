/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

#![allow(clippy::module_inception)]
#![allow(clippy::upper_case_acronyms)]
#![allow(clippy::large_enum_variant)]
#![allow(clippy::wrong_self_convention)]
#![allow(clippy::should_implement_trait)]
#![allow(clippy::new_without_default)]
//! AWS Snow Family is a petabyte-scale data transport solution that uses secure devices to
//! transfer large amounts of data between your on-premises data centers and Amazon Simple Storage
//! Service (Amazon S3).
//!
//! The API is served over `awsJson1.1`: every operation is a `POST /` whose target is named by the
//! `X-Amz-Target` header, with the input as the JSON body.

pub use error_meta::Error;

pub use config::Config;

#[cfg(feature = "client")]
pub mod client;
pub mod config;
pub mod error;
mod error_meta;
pub mod input;
mod json_errors;
pub mod model;
pub mod operation;
mod operation_deser;
pub mod output;
mod serde_util;
pub static PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
pub use aws_types::region::Region;
#[cfg(feature = "client")]
pub use client::Client;
pub use smithy_http::endpoint::Endpoint;
static API_METADATA: aws_http::user_agent::ApiMetadata =
    aws_http::user_agent::ApiMetadata::new("snowball", env!("CARGO_PKG_VERSION"));
