/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

pub mod conn;
pub mod test_connection;

use crate::conn::Standard;
use aws_endpoint::AwsEndpointStage;
use aws_http::user_agent::UserAgentStage;
use smithy_http::operation::Operation;
use smithy_http::response::ParseHttpResponse;
use smithy_http_tower::dispatch::DispatchLayer;
use smithy_http_tower::map_request::MapRequestLayer;
use smithy_http_tower::parse_response::ParseResponseLayer;
use std::error::Error;
use tower::{Service, ServiceBuilder, ServiceExt};
use tracing::{info_span, Instrument};

type BoxError = Box<dyn Error + Send + Sync>;
pub type StandardClient = Client<conn::Standard>;

pub type SdkError<E> = smithy_http::result::SdkError<E, hyper::Body>;
pub type SdkSuccess<T> = smithy_http::result::SdkSuccess<T, hyper::Body>;

/// Short-hands for the trait bounds required by [`Client::call`](Client::call)
///
/// These are traits with blanket implementations. The associated types repeat the bounds of the
/// `Service` associated types so that callers do not have to restate them.
pub mod bounds {
    use super::BoxError;
    use smithy_http::body::SdkBody;
    use tower::Service;

    /// A connector that maps an [`http::Request`] to an [`http::Response`].
    ///
    /// This trait has a blanket implementation for all compatible types, and should never need to
    /// be implemented.
    pub trait SmithyConnector:
        Service<
            http::Request<SdkBody>,
            Response = http::Response<hyper::Body>,
            Error = <Self as SmithyConnector>::Error,
            Future = <Self as SmithyConnector>::Future,
        > + Send
        + Clone
        + 'static
    {
        /// Forwarding type to `<Self as Service>::Error` for bound inference.
        type Error: Into<BoxError> + Send + Sync + 'static;

        /// Forwarding type to `<Self as Service>::Future` for bound inference.
        type Future: Send + 'static;
    }

    impl<T> SmithyConnector for T
    where
        T: Service<http::Request<SdkBody>, Response = http::Response<hyper::Body>>
            + Send
            + Clone
            + 'static,
        T::Error: Into<BoxError> + Send + Sync + 'static,
        T::Future: Send + 'static,
    {
        type Error = T::Error;
        type Future = T::Future;
    }
}

/// AWS Service Client
///
/// Hyper-based AWS Service Client. Most customers will want to construct a client with
/// [`Client::https()`](Client::https). For testing & other more advanced use cases, a custom
/// connector may be used via [`Client::new(connector)`](Client::new).
///
/// The connector must implement [`SmithyConnector`](bounds::SmithyConnector) to dispatch requests.
#[derive(Debug)]
pub struct Client<S> {
    inner: S,
}

impl<S> Client<S> {
    /// Construct a new `Client` with a custom connector
    pub fn new(connector: S) -> Self {
        Client { inner: connector }
    }
}

impl Client<Standard> {
    /// Construct an `https` based client
    pub fn https() -> StandardClient {
        Client {
            inner: Standard::https(),
        }
    }
}

impl<S> Client<S>
where
    S: bounds::SmithyConnector,
{
    /// Dispatch this request to the network
    ///
    /// For ergonomics, this does not include the raw response for successful responses. To
    /// access the raw response use `call_raw`.
    pub async fn call<O, T, E>(&self, input: Operation<O>) -> Result<T, SdkError<E>>
    where
        O: ParseHttpResponse<hyper::Body, Output = Result<T, E>> + Send + 'static,
    {
        self.call_raw(input).await.map(|res| res.parsed)
    }

    /// Dispatch this request to the network
    ///
    /// The returned result contains the raw HTTP response which can be useful for debugging or
    /// implementing unsupported features.
    pub async fn call_raw<O, T, E>(
        &self,
        input: Operation<O>,
    ) -> Result<SdkSuccess<T>, SdkError<E>>
    where
        O: ParseHttpResponse<hyper::Body, Output = Result<T, E>> + Send + 'static,
    {
        let span = match input.metadata() {
            Some(metadata) => info_span!(
                "send_operation",
                operation = metadata.name(),
                service = metadata.service()
            ),
            None => info_span!("send_operation", operation = "unknown", service = "unknown"),
        };
        let endpoint_resolver = MapRequestLayer::for_mapper(AwsEndpointStage);
        let user_agent = MapRequestLayer::for_mapper(UserAgentStage::new());
        let inner = self.inner.clone();
        let mut svc = ServiceBuilder::new()
            .layer(ParseResponseLayer::<O>::new())
            .layer(endpoint_resolver)
            .layer(user_agent)
            .layer(DispatchLayer::new())
            .service(inner);
        ServiceExt::<Operation<O>>::ready(&mut svc)
            .instrument(span.clone())
            .await?
            .call(input)
            .instrument(span)
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::conn::Standard;
    use crate::Client;

    #[test]
    fn construct_default_client() {
        let c = Client::https();
        fn is_send_sync<T: Send + Sync>(_c: T) {}
        is_send_sync(c);
    }

    #[test]
    fn client_debug_includes_connector() {
        let client = Client::new(Standard::https());
        assert!(format!("{:?}", client).contains("Https"));
    }
}
