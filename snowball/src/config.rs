/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_endpoint::ResolveAwsEndpoint;
use aws_types::region::ProvideRegion;
use std::sync::Arc;

/// Service configuration for AWS Snowball
///
/// ```no_run
/// use snowball::{Config, Region};
/// let conf = Config::builder().region(Region::new("us-west-2")).build();
/// ```
pub struct Config {
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
    endpoint_resolver: Option<Arc<dyn ResolveAwsEndpoint>>,
    region: Option<aws_types::region::Region>,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
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
            endpoint_resolver: self.endpoint_resolver.unwrap_or_else(|| {
                Arc::new(aws_endpoint::DefaultAwsEndpointResolver::for_service(
                    "snowball",
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
    fn static_endpoint_replaces_default_resolver() {
        let endpoint = crate::Endpoint::from_uri(http::Uri::from_static("http://localhost:8080"))
            .expect("valid uri");
        let conf = Config::builder()
            .region("us-east-1")
            .endpoint_resolver(endpoint)
            .build();
        let resolved = conf
            .endpoint_resolver
            .endpoint(&Region::new("us-east-1"))
            .expect("static endpoints always resolve");
        assert_eq!(resolved.endpoint().uri(), "http://localhost:8080/");
    }
}
