/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::sync::Arc;

use aws_types::region::Region;
use http::Uri;
use smithy_http::endpoint::{Endpoint, InvalidEndpoint};
use smithy_http::middleware::MapRequest;
use smithy_http::operation::Request;
use smithy_http::property_bag::PropertyBag;

pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Endpoint to send a request to, as resolved for a region
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AwsEndpoint {
    endpoint: Endpoint,
}

impl AwsEndpoint {
    pub fn from_endpoint(endpoint: Endpoint) -> Self {
        AwsEndpoint { endpoint }
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    pub fn set_endpoint(&self, uri: &mut Uri) -> Result<(), InvalidEndpoint> {
        self.endpoint.set_endpoint(uri)
    }
}

/// Resolve the AWS Endpoint for a given region
///
/// To provide a static endpoint, [`Endpoint`](smithy_http::endpoint::Endpoint) implements this trait.
/// Example usage:
/// ```rust
/// # fn wrapper() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
/// use aws_endpoint::ResolveAwsEndpoint;
/// use aws_types::region::Region;
/// use smithy_http::endpoint::Endpoint;
/// let endpoint = Endpoint::from_uri(http::Uri::from_static("http://localhost:8000"))?;
/// let resolved = endpoint.endpoint(&Region::new("us-east-1"))?;
/// assert_eq!(resolved.endpoint().uri(), "http://localhost:8000/");
/// # Ok(())
/// # }
/// ```
pub trait ResolveAwsEndpoint: Send + Sync {
    fn endpoint(&self, region: &Region) -> Result<AwsEndpoint, BoxError>;
}

/// Default endpoint resolver: `https://{service}.{region}.amazonaws.com`
///
/// Regions of the `aws-cn` partition (`cn-north-1`, `cn-northwest-1`) resolve under
/// `amazonaws.com.cn`.
#[derive(Clone, Debug)]
pub struct DefaultAwsEndpointResolver {
    service: &'static str,
}

impl DefaultAwsEndpointResolver {
    pub fn for_service(service: &'static str) -> Self {
        Self { service }
    }
}

impl ResolveAwsEndpoint for DefaultAwsEndpointResolver {
    fn endpoint(&self, region: &Region) -> Result<AwsEndpoint, BoxError> {
        let dns_suffix = if region.as_ref().starts_with("cn-") {
            "amazonaws.com.cn"
        } else {
            "amazonaws.com"
        };
        let uri = Uri::from_str(&format!(
            "https://{}.{}.{}",
            self.service,
            region.as_ref(),
            dns_suffix
        ))?;
        Ok(AwsEndpoint::from_endpoint(Endpoint::from_uri(uri)?))
    }
}

impl ResolveAwsEndpoint for Endpoint {
    fn endpoint(&self, _region: &Region) -> Result<AwsEndpoint, BoxError> {
        Ok(AwsEndpoint::from_endpoint(self.clone()))
    }
}

type AwsEndpointResolver = Arc<dyn ResolveAwsEndpoint>;

pub fn get_endpoint_resolver(config: &PropertyBag) -> Option<&AwsEndpointResolver> {
    config.get()
}

pub fn set_endpoint_resolver(config: &mut PropertyBag, provider: AwsEndpointResolver) {
    config.insert(provider);
}

/// Middleware Stage to Add an Endpoint to a Request
///
/// AwsEndpointStage implements [`MapRequest`](smithy_http::middleware::MapRequest). It will:
/// 1. Load an endpoint provider from the property bag.
/// 2. Load an endpoint given the [`Region`](aws_types::region::Region) in the property bag.
/// 3. Apply the endpoint to the URI in the request
#[derive(Clone, Copy, Debug, Default)]
pub struct AwsEndpointStage;

#[derive(Debug)]
pub enum AwsEndpointStageError {
    NoEndpointResolver,
    NoRegion,
    EndpointResolutionError(BoxError),
    InvalidEndpoint(InvalidEndpoint),
}

impl Display for AwsEndpointStageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            AwsEndpointStageError::NoEndpointResolver => {
                write!(f, "no endpoint resolver was set on the request")
            }
            AwsEndpointStageError::NoRegion => write!(
                f,
                "no region was set; configure one on the client or set AWS_REGION"
            ),
            AwsEndpointStageError::EndpointResolutionError(err) => {
                write!(f, "failed to resolve endpoint: {}", err)
            }
            AwsEndpointStageError::InvalidEndpoint(err) => write!(f, "{}", err),
        }
    }
}

impl Error for AwsEndpointStageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AwsEndpointStageError::EndpointResolutionError(err) => Some(err.as_ref()),
            AwsEndpointStageError::InvalidEndpoint(err) => Some(err),
            _ => None,
        }
    }
}

impl MapRequest for AwsEndpointStage {
    type Error = AwsEndpointStageError;

    fn apply(&self, request: Request) -> Result<Request, Self::Error> {
        request.augment(|mut http_req, config| {
            let provider =
                get_endpoint_resolver(config).ok_or(AwsEndpointStageError::NoEndpointResolver)?;
            let region = config
                .get::<Region>()
                .ok_or(AwsEndpointStageError::NoRegion)?;
            let endpoint = provider
                .endpoint(region)
                .map_err(AwsEndpointStageError::EndpointResolutionError)?;
            tracing::debug!(endpoint = ?endpoint, base_region = ?region, "resolved endpoint");
            endpoint
                .set_endpoint(http_req.uri_mut())
                .map_err(AwsEndpointStageError::InvalidEndpoint)?;
            Ok(http_req)
        })
    }
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use http::Uri;

    use aws_types::region::Region;
    use smithy_http::body::SdkBody;
    use smithy_http::endpoint::Endpoint;
    use smithy_http::middleware::MapRequest;
    use smithy_http::operation;

    use crate::{
        set_endpoint_resolver, AwsEndpointStage, AwsEndpointStageError,
        DefaultAwsEndpointResolver, ResolveAwsEndpoint,
    };

    fn request(uri: &'static str) -> operation::Request {
        operation::Request::new(
            http::Request::builder()
                .uri(Uri::from_static(uri))
                .body(SdkBody::empty())
                .unwrap(),
        )
    }

    #[test]
    fn default_endpoint_updates_request() {
        let mut req = request("/ListImages");
        {
            let mut props = req.properties_mut();
            props.insert(Region::new("us-west-2"));
            set_endpoint_resolver(
                &mut props,
                Arc::new(DefaultAwsEndpointResolver::for_service("imagebuilder")),
            );
        };
        let req = AwsEndpointStage.apply(req).expect("should succeed");
        let (req, _conf) = req.into_parts();
        assert_eq!(
            req.uri(),
            &Uri::from_static("https://imagebuilder.us-west-2.amazonaws.com/ListImages")
        );
    }

    #[test]
    fn china_regions_use_their_own_suffix() {
        let endpoint = DefaultAwsEndpointResolver::for_service("snowball")
            .endpoint(&Region::new("cn-north-1"))
            .expect("valid region");
        assert_eq!(
            endpoint.endpoint().uri(),
            &Uri::from_static("https://snowball.cn-north-1.amazonaws.com.cn")
        );
    }

    #[test]
    fn static_endpoint_ignores_region() {
        let mut req = request("/");
        {
            let mut props = req.properties_mut();
            props.insert(Region::new("us-east-1"));
            set_endpoint_resolver(
                &mut props,
                Arc::new(
                    Endpoint::from_uri(Uri::from_static("http://localhost:8000")).unwrap(),
                ),
            );
        };
        let (req, _) = AwsEndpointStage.apply(req).expect("valid").into_parts();
        assert_eq!(req.uri(), &Uri::from_static("http://localhost:8000/"));
    }

    #[test]
    fn missing_region_is_an_error() {
        let mut req = request("/");
        set_endpoint_resolver(
            &mut req.properties_mut(),
            Arc::new(DefaultAwsEndpointResolver::for_service("snowball")),
        );
        match AwsEndpointStage.apply(req) {
            Err(AwsEndpointStageError::NoRegion) => {}
            other => panic!("expected NoRegion, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn invalid_region_fails_resolution() {
        DefaultAwsEndpointResolver::for_service("snowball")
            .endpoint(&Region::new("not a region"))
            .expect_err("spaces are not valid in a host");
    }
}
