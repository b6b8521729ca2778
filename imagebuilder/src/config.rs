/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::idempotency_token::MakeIdempotencyToken;
use aws_endpoint::ResolveAwsEndpoint;
use aws_types::region::ProvideRegion;
use std::sync::Arc;

/// Service configuration for EC2 Image Builder
///
/// ```no_run
/// use imagebuilder::{Config, Region};
/// let conf = Config::builder().region(Region::new("us-west-2")).build();
/// ```
pub struct Config {
    pub(crate) token_provider: Box<dyn MakeIdempotencyToken>,
    pub(crate) endpoint_resolver: Arc<dyn ResolveAwsEndpoint>,
    pub(crate) region: Option<aws_types::region::Region>,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut config = f.debug_struct("Config");
        config.field("region", &self.region);
        config.finish()
    }
}

impl Config {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Configuration with the region from the environment and the default endpoint resolver
    pub fn from_env() -> Self {
        Builder::default().build()
    }

    pub fn region(&self) -> Option<&aws_types::region::Region> {
        self.region.as_ref()
    }
}

#[derive(Default)]
pub struct Builder {
    token_provider: Option<Box<dyn MakeIdempotencyToken>>,
    endpoint_resolver: Option<Arc<dyn ResolveAwsEndpoint>>,
    region: Option<aws_types::region::Region>,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Source of the `clientToken` values filled into requests that leave it unset
    pub fn token_provider(mut self, token_provider: impl MakeIdempotencyToken + 'static) -> Self {
        self.token_provider = Some(Box::new(token_provider));
        self
    }

    pub fn endpoint_resolver(mut self, endpoint_resolver: impl ResolveAwsEndpoint + 'static) -> Self {
        self.endpoint_resolver = Some(Arc::new(endpoint_resolver));
        self
    }

    pub fn region(mut self, region_provider: impl ProvideRegion) -> Self {
        self.region = region_provider.region();
        self
    }

    pub fn build(self) -> Config {
        Config {
            token_provider: self
                .token_provider
                .unwrap_or_else(|| Box::new(crate::idempotency_token::default_provider())),
            endpoint_resolver: self.endpoint_resolver.unwrap_or_else(|| {
                Arc::new(aws_endpoint::DefaultAwsEndpointResolver::for_service(
                    "imagebuilder",
                ))
            }),
            region: self
                .region
                .or_else(|| aws_types::region::default_provider().region()),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::Config;
    use aws_types::region::Region;

    #[test]
    fn explicit_region_wins() {
        let conf = Config::builder().region(Region::new("eu-central-1")).build();
        assert_eq!(conf.region(), Some(&Region::new("eu-central-1")));
        assert!(format!("{:?}", conf).contains("eu-central-1"));
    }

    #[test]
    fn token_provider_is_used() {
        let conf = Config::builder()
            .region("us-east-1")
            .token_provider(|| "fixed-token".to_string())
            .build();
        assert_eq!(conf.token_provider.make_idempotency_token(), "fixed-token");
    }
}
