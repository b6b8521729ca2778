/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::test_connection::TestConnection;
use crate::BoxError;
use hyper::client::{HttpConnector, ResponseFuture};
use hyper_tls::HttpsConnector;
use smithy_http::body::SdkBody;
use std::fmt;
use std::future::{Future, Ready};
use std::pin::Pin;
use std::task::{Context, Poll};
use tower::Service;

type BoxFuture = Pin<Box<dyn Future<Output = Result<http::Response<hyper::Body>, BoxError>> + Send>>;

/// A good base connection type for most use cases
///
/// This supports three options:
/// 1. HTTPS
/// 2. A `TestConnection`
/// 3. Any implementation of the `HttpService` trait
///
/// This is designed to be used with [`aws_hyper::Client`](crate::Client) as a connector.
#[derive(Clone)]
pub struct Standard(Connector);

impl Standard {
    /// An https connection
    pub fn https() -> Self {
        let https = HttpsConnector::new();
        Self(Connector::Https(
            hyper::Client::builder().build::<_, SdkBody>(https),
        ))
    }

    /// A connection based on the provided `impl HttpService`
    ///
    /// Generally, [`Standard::https()`](Standard::https) should be used. This constructor is intended to support
    /// using things like [`TestConnection`](crate::test_connection::TestConnection) or alternative
    /// http implementations.
    pub fn new(connector: impl HttpService + 'static) -> Self {
        Self(Connector::Dyn(Box::new(connector)))
    }
}

impl From<TestConnection<hyper::Body>> for Standard {
    fn from(conn: TestConnection<hyper::Body>) -> Self {
        Self(Connector::Test(conn))
    }
}

impl fmt::Debug for Standard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match &self.0 {
            Connector::Https(_) => "Https",
            Connector::Test(_) => "Test",
            Connector::Dyn(_) => "Dyn",
        };
        f.debug_tuple("Standard").field(&name).finish()
    }
}

#[derive(Clone)]
enum Connector {
    /// An Https Connection
    ///
    /// This is the correct connection for use cases talking to real AWS services.
    Https(hyper::Client<HttpsConnector<HttpConnector>, SdkBody>),

    /// A Test connection
    ///
    /// Responds with recorded responses. See [`TestConnection`](crate::test_connection::TestConnection)
    Test(TestConnection<hyper::Body>),

    /// A generic escape hatch
    Dyn(Box<dyn HttpService>),
}

impl Clone for Box<dyn HttpService> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Object-safe connector used by [`Standard::new`](Standard::new)
///
/// Any cloneable tower `Service` from `http::Request<SdkBody>` to `http::Response<hyper::Body>`
/// implements this trait.
pub trait HttpService: Send + Sync {
    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), BoxError>>;

    fn call(&mut self, req: http::Request<SdkBody>) -> BoxFuture;

    fn clone_box(&self) -> Box<dyn HttpService>;
}

impl<S> HttpService for S
where
    S: Service<http::Request<SdkBody>, Response = http::Response<hyper::Body>>
        + Clone
        + Send
        + Sync
        + 'static,
    S::Error: Into<BoxError>,
    S::Future: Send + 'static,
{
    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), BoxError>> {
        Service::poll_ready(self, cx).map_err(|err| err.into())
    }

    fn call(&mut self, req: http::Request<SdkBody>) -> BoxFuture {
        let fut = Service::call(self, req);
        Box::pin(async move { fut.await.map_err(|err| err.into()) })
    }

    fn clone_box(&self) -> Box<dyn HttpService> {
        Box::new(self.clone())
    }
}

impl Service<http::Request<SdkBody>> for Standard {
    type Response = http::Response<hyper::Body>;
    type Error = BoxError;
    type Future = StandardFuture;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        match &mut self.0 {
            Connector::Https(https) => Service::poll_ready(https, cx).map_err(|err| err.into()),
            Connector::Dyn(conn) => conn.poll_ready(cx),
            Connector::Test(_) => Poll::Ready(Ok(())),
        }
    }

    fn call(&mut self, req: http::Request<SdkBody>) -> Self::Future {
        match &mut self.0 {
            Connector::Https(https) => StandardFuture::Https(Service::call(https, req)),
            Connector::Dyn(conn) => StandardFuture::Dyn(conn.call(req)),
            Connector::Test(conn) => StandardFuture::TestConn(Service::call(conn, req)),
        }
    }
}

/// Future returned by [`Standard`](Standard)
#[pin_project::pin_project(project = FutProj)]
pub enum StandardFuture {
    Https(#[pin] ResponseFuture),
    TestConn(#[pin] Ready<Result<http::Response<hyper::Body>, BoxError>>),
    Dyn(#[pin] BoxFuture),
}

impl Future for StandardFuture {
    type Output = Result<http::Response<hyper::Body>, BoxError>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match self.project() {
            FutProj::TestConn(ready_fut) => ready_fut.poll(cx),
            FutProj::Https(fut) => fut.poll(cx).map_err(|err| err.into()),
            FutProj::Dyn(dyn_fut) => dyn_fut.poll(cx),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::conn::Standard;
    use crate::test_connection::TestConnection;
    use smithy_http::body::SdkBody;
    use tower::{Service, ServiceExt};

    #[tokio::test]
    async fn test_connection_is_used_as_a_standard_connector() {
        let conn = TestConnection::new(vec![(
            http::Request::new(SdkBody::from("request")),
            http::Response::new(hyper::Body::from("response")),
        )]);
        let mut standard = Standard::from(conn.clone());
        let resp = standard
            .ready()
            .await
            .expect("test connections are always ready")
            .call(http::Request::new(SdkBody::from("request")))
            .await
            .expect("one response was recorded");
        assert_eq!(resp.status(), 200);
        assert_eq!(conn.requests().len(), 1);
    }

    #[tokio::test]
    async fn dyn_connector_dispatches() {
        let svc = tower::service_fn(|_req: http::Request<SdkBody>| async {
            Ok::<_, std::convert::Infallible>(
                http::Response::builder()
                    .status(404)
                    .body(hyper::Body::empty())
                    .unwrap(),
            )
        });
        let standard = Standard::new(svc);
        for mut conn in vec![standard.clone(), standard] {
            let resp = conn
                .ready()
                .await
                .unwrap()
                .call(http::Request::new(SdkBody::empty()))
                .await
                .unwrap();
            assert_eq!(resp.status(), 404);
        }
    }
}
