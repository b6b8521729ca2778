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
//! EC2 Image Builder is a fully managed AWS service that makes it easier to automate the
//! creation, management, and deployment of customized, secure, and up-to-date "golden" server
//! images that are pre-installed and pre-configured with software and settings to meet specific
//! IT standards.
//!
//! The API is served over `restJson1`: each operation is an HTTP method and path, with URI-bound
//! members in the path or the query string and the rest in a JSON body.

pub use error_meta::Error;

pub use config::Config;

#[cfg(feature = "client")]
pub mod client;
pub mod config;
pub mod error;
mod error_meta;
mod idempotency_token;
pub mod input;
mod json_errors;
pub mod model;
pub mod operation;
mod operation_deser;
pub mod output;
pub static PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
pub use aws_types::region::Region;
#[cfg(feature = "client")]
pub use client::Client;
pub use idempotency_token::{default_provider as default_token_provider, MakeIdempotencyToken};
pub use smithy_http::endpoint::Endpoint;
static API_METADATA: aws_http::user_agent::ApiMetadata =
    aws_http::user_agent::ApiMetadata::new("imagebuilder", env!("CARGO_PKG_VERSION"));
