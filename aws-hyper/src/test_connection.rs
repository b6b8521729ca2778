/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use http::header::HeaderName;
use http::Request;
use smithy_http::body::SdkBody;
use std::future::Ready;
use std::ops::Deref;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use tower::BoxError;

type ConnectVec<B> = Vec<(http::Request<SdkBody>, http::Response<B>)>;

/// A request the connection received, paired with the request it expected
#[derive(Debug)]
pub struct ValidateRequest {
    pub expected: http::Request<SdkBody>,
    pub actual: http::Request<SdkBody>,
}

impl ValidateRequest {
    /// Assert that the actual request matches the expected request
    ///
    /// Every expected header must be present unless it is listed in `ignore_headers`. Headers
    /// that only the actual request carries are not checked. JSON bodies compare structurally.
    #[cfg(feature = "test-util")]
    #[track_caller]
    pub fn assert_matches(&self, ignore_headers: Vec<HeaderName>) {
        use protocol_test_helpers::{assert_ok, validate_body, MediaType};

        let (actual, expected) = (&self.actual, &self.expected);
        for (name, value) in expected.headers() {
            if !ignore_headers.contains(name) {
                let actual_header = actual
                    .headers()
                    .get(name)
                    .unwrap_or_else(|| panic!("Header {:?} missing", name));
                assert_eq!(actual_header, value, "Header mismatch for {:?}", name);
            }
        }
        let actual_str = std::str::from_utf8(actual.body().bytes().unwrap_or(&[]));
        let expected_str = std::str::from_utf8(expected.body().bytes().unwrap_or(&[]));
        let media_type = expected
            .headers()
            .get(http::header::CONTENT_TYPE)
            .and_then(|content_type| content_type.to_str().ok())
            .map(MediaType::from)
            .unwrap_or_else(|| MediaType::Other("unknown".to_string()));
        match (actual_str, expected_str) {
            (Ok(actual), Ok(expected)) => assert_ok(validate_body(actual, expected, media_type)),
            _ => assert_eq!(actual.body().bytes(), expected.body().bytes()),
        };
        assert_eq!(actual.uri(), expected.uri());
        assert_eq!(actual.method(), expected.method());
    }
}

/// TestConnection for use with a [`aws_hyper::Client`](crate::Client)
///
/// A basic test connection. It will:
/// - Respond to requests with a preloaded series of responses
/// - Record requests for future examination
///
/// For more complex use cases, see [Tower Test](https://docs.rs/tower-test/0.4.0/tower_test/)
/// Usage example:
/// ```rust
/// use aws_hyper::test_connection::TestConnection;
/// use smithy_http::body::SdkBody;
/// let events = vec![(
///    http::Request::new(SdkBody::from("request body")),
///    http::Response::builder()
///        .status(200)
///        .body("response body")
///        .unwrap(),
/// )];
/// let conn = TestConnection::new(events);
/// let client = aws_hyper::Client::new(conn);
/// ```
#[derive(Debug)]
pub struct TestConnection<B> {
    data: Arc<Mutex<ConnectVec<B>>>,
    requests: Arc<Mutex<Vec<ValidateRequest>>>,
}

// Clones share the recorded requests and remaining responses, so `B` need not be `Clone`
impl<B> Clone for TestConnection<B> {
    fn clone(&self) -> Self {
        TestConnection {
            data: self.data.clone(),
            requests: self.requests.clone(),
        }
    }
}

impl<B> TestConnection<B> {
    pub fn new(mut data: ConnectVec<B>) -> Self {
        data.reverse();
        TestConnection {
            data: Arc::new(Mutex::new(data)),
            requests: Default::default(),
        }
    }

    pub fn requests(&self) -> impl Deref<Target = Vec<ValidateRequest>> + '_ {
        self.requests.lock().unwrap()
    }

    /// Assert that every recorded request matched its expectation and that no responses are left
    #[cfg(feature = "test-util")]
    #[track_caller]
    pub fn assert_requests_match(&self, ignore_headers: &[HeaderName]) {
        for req in self.requests().iter() {
            req.assert_matches(ignore_headers.to_vec());
        }
        let remaining = self.data.lock().unwrap().len();
        assert_eq!(remaining, 0, "{} responses were never requested", remaining);
    }
}

impl<B: Into<hyper::Body>> tower::Service<http::Request<SdkBody>> for TestConnection<B> {
    type Response = http::Response<hyper::Body>;
    type Error = BoxError;
    type Future = Ready<Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, actual: Request<SdkBody>) -> Self::Future {
        if let Some((expected, resp)) = self.data.lock().unwrap().pop() {
            self.requests
                .lock()
                .unwrap()
                .push(ValidateRequest { expected, actual });
            std::future::ready(Ok(resp.map(|body| body.into())))
        } else {
            std::future::ready(Err("No more data".into()))
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::test_connection::TestConnection;
    use smithy_http::body::SdkBody;
    use tower::BoxError;

    /// Validate that the `TestConnection` meets the required trait bounds to be used with a aws-hyper service
    #[test]
    fn meets_trait_bounds() {
        fn check() -> impl tower::Service<
            http::Request<SdkBody>,
            Response = http::Response<hyper::Body>,
            Error = BoxError,
            Future = impl Send,
        > + Clone {
            TestConnection::<String>::new(vec![])
        }
        let _ = check();
    }

    #[tokio::test]
    async fn clones_share_responses_with_non_clone_bodies() {
        use tower::{Service, ServiceExt};

        let conn = TestConnection::<hyper::Body>::new(vec![(
            http::Request::new(SdkBody::from("request")),
            http::Response::new(hyper::Body::from("response")),
        )]);
        let mut clone = conn.clone();
        let response = clone
            .ready()
            .await
            .unwrap()
            .call(http::Request::new(SdkBody::from("request")))
            .await
            .expect("one response was recorded");
        assert_eq!(response.status(), 200);
        assert_eq!(conn.requests().len(), 1);
    }

    #[cfg(feature = "test-util")]
    #[test]
    fn json_bodies_match_structurally() {
        let validate = crate::test_connection::ValidateRequest {
            expected: http::Request::builder()
                .uri("https://snowball.us-east-1.amazonaws.com/")
                .method("POST")
                .header("content-type", "application/x-amz-json-1.1")
                .body(SdkBody::from(r#"{"MaxResults": 5, "NextToken": "abc"}"#))
                .unwrap(),
            actual: http::Request::builder()
                .uri("https://snowball.us-east-1.amazonaws.com/")
                .method("POST")
                .header("content-type", "application/x-amz-json-1.1")
                .header("user-agent", "ignored because it is not expected")
                .body(SdkBody::from(r#"{"NextToken":"abc","MaxResults":5}"#))
                .unwrap(),
        };
        validate.assert_matches(vec![]);
    }
}
