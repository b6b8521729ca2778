/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::SendOperationError;
use bytes::Bytes;
use smithy_http::middleware::load_response;
use smithy_http::operation;
use smithy_http::operation::Operation;
use smithy_http::response::ParseHttpResponse;
use smithy_http::result::{SdkError, SdkSuccess};
use std::future::Future;
use std::marker::PhantomData;
use std::pin::Pin;
use std::task::{Context, Poll};
use tower::{BoxError, Layer, Service};
use tracing::debug;

/// Sends the request half of an [`Operation`](smithy_http::operation::Operation) and hands the
/// response to the operation's parser
///
/// The inner service takes [`operation::Request`](smithy_http::operation::Request)s. Transport
/// failures become `SdkError::DispatchFailure` or `ConstructionFailure`. Everything else is
/// decided by the parser.
#[derive(Clone)]
pub struct ParseResponseService<S, O> {
    inner: S,
    _output_type: PhantomData<O>,
}

#[derive(Default)]
pub struct ParseResponseLayer<O> {
    _output_type: PhantomData<O>,
}

impl<O> ParseResponseLayer<O> {
    pub fn new() -> Self {
        ParseResponseLayer {
            _output_type: Default::default(),
        }
    }
}

impl<S, O> Layer<S> for ParseResponseLayer<O>
where
    S: Service<operation::Request>,
{
    type Service = ParseResponseService<S, O>;

    fn layer(&self, inner: S) -> Self::Service {
        ParseResponseService {
            inner,
            _output_type: Default::default(),
        }
    }
}

type BoxedResultFuture<T, E> = Pin<Box<dyn Future<Output = Result<T, E>>>>;

/// ParseResponseService
///
/// Generic Parameter Listing:
/// `S`: The inner service
/// `O`: The type of the response parser whose output type is `Result<T, E>`
/// `T`: The happy path return of the response parser
/// `E`: The error path return of the response parser
/// `B`: The HTTP Body type returned by the inner service
impl<S, O, T, E, B> Service<Operation<O>> for ParseResponseService<S, O>
where
    S: Service<operation::Request, Response = http::Response<B>, Error = SendOperationError>,
    S::Future: 'static,
    B: http_body::Body + Unpin + From<Bytes> + 'static,
    B::Error: Into<BoxError>,
    O: ParseHttpResponse<B, Output = Result<T, E>> + 'static,
{
    type Response = SdkSuccess<T, B>;
    type Error = SdkError<E, B>;
    type Future = BoxedResultFuture<Self::Response, Self::Error>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx).map_err(|err| err.into())
    }

    fn call(&mut self, req: Operation<O>) -> Self::Future {
        let (req, parts) = req.into_request_response();
        let handler = parts.response_handler;
        let resp = self.inner.call(req);
        let fut = async move {
            match resp.await {
                Err(e) => Err(e.into()),
                Ok(resp) => {
                    debug!(status = %resp.status(), "received response");
                    load_response(resp, &handler).await
                }
            }
        };
        Box::pin(fut)
    }
}

#[cfg(test)]
mod test {
    use crate::parse_response::ParseResponseLayer;
    use crate::SendOperationError;
    use bytes::Bytes;
    use smithy_http::body::SdkBody;
    use smithy_http::operation::{self, Operation};
    use smithy_http::response::ParseStrictResponse;
    use smithy_http::result::SdkError;
    use tower::{service_fn, Layer, Service, ServiceExt};

    struct StatusText;

    impl ParseStrictResponse for StatusText {
        type Output = Result<String, String>;

        fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
            let body = String::from_utf8_lossy(response.body()).into_owned();
            if response.status().is_success() {
                Ok(body)
            } else {
                Err(body)
            }
        }
    }

    fn operation() -> Operation<StatusText> {
        Operation::new(
            operation::Request::new(http::Request::new(SdkBody::empty())),
            StatusText,
        )
    }

    #[tokio::test]
    async fn parser_sees_the_loaded_body() {
        let inner = service_fn(|_req: operation::Request| async {
            Ok::<_, SendOperationError>(
                http::Response::builder()
                    .status(404)
                    .body(SdkBody::from("not found"))
                    .unwrap(),
            )
        });
        let mut svc = ParseResponseLayer::<StatusText>::new().layer(inner);
        let result = ServiceExt::<Operation<StatusText>>::ready(&mut svc)
            .await
            .unwrap()
            .call(operation())
            .await;
        match result {
            Err(SdkError::ServiceError { err, raw }) => {
                assert_eq!(err, "not found");
                assert_eq!(raw.status(), 404);
            }
            other => panic!("expected a service error, got {:?}", other.map(|s| s.parsed)),
        }
    }

    #[tokio::test]
    async fn transport_errors_are_dispatch_failures() {
        let inner = service_fn(|_req: operation::Request| async {
            Err::<http::Response<SdkBody>, _>(SendOperationError::RequestDispatchError(
                "connection reset".into(),
            ))
        });
        let mut svc = ParseResponseLayer::<StatusText>::new().layer(inner);
        let result = ServiceExt::<Operation<StatusText>>::ready(&mut svc)
            .await
            .unwrap()
            .call(operation())
            .await;
        assert!(matches!(result, Err(SdkError::DispatchFailure(_))));
    }
}
