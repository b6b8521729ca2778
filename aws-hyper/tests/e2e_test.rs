/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_endpoint::{set_endpoint_resolver, DefaultAwsEndpointResolver};
use aws_http::user_agent::AwsUserAgent;
use aws_hyper::test_connection::TestConnection;
use aws_hyper::{Client, SdkError};
use aws_types::region::Region;
use bytes::Bytes;
use http::header::USER_AGENT;
use http::{Response, Uri};
use smithy_http::body::SdkBody;
use smithy_http::operation;
use smithy_http::operation::{Metadata, Operation};
use smithy_http::response::ParseHttpResponse;
use std::convert::Infallible;
use std::sync::Arc;

#[derive(Clone)]
struct TestOperationParser;

impl<B> ParseHttpResponse<B> for TestOperationParser
where
    B: http_body::Body,
{
    type Output = Result<String, String>;

    fn parse_unloaded(&self, _response: &mut Response<B>) -> Option<Self::Output> {
        None
    }

    fn parse_loaded(&self, response: &Response<Bytes>) -> Self::Output {
        let body = String::from_utf8_lossy(response.body()).into_owned();
        if response.status().is_success() {
            Ok(body)
        } else {
            Err(body)
        }
    }
}

fn test_operation(region: Option<&'static str>) -> Operation<TestOperationParser> {
    let req = operation::Request::new(
        http::Request::builder()
            .method("POST")
            .uri("/")
            .body(SdkBody::from("request body"))
            .unwrap(),
    )
    .augment(|req, mut conf| {
        set_endpoint_resolver(
            &mut conf,
            Arc::new(DefaultAwsEndpointResolver::for_service("test-service")),
        );
        if let Some(region) = region {
            conf.insert(Region::from_static(region));
        }
        conf.insert(AwsUserAgent::for_tests());
        Result::<_, Infallible>::Ok(req)
    })
    .unwrap();
    Operation::new(req, TestOperationParser).with_metadata(Metadata::new("TestOp", "test-service"))
}

#[tokio::test]
async fn e2e_test() {
    let expected_req = http::Request::builder()
        .header(
            USER_AGENT,
            "aws-sdk-rust/0.123.test os/windows/XPSP3 lang/rust/1.50.0",
        )
        .header(
            "x-amz-user-agent",
            "aws-sdk-rust/0.123.test api/test-service/0.123 os/windows/XPSP3 lang/rust/1.50.0",
        )
        .uri(Uri::from_static(
            "https://test-service.test-region.amazonaws.com/",
        ))
        .method("POST")
        .body(SdkBody::from("request body"))
        .unwrap();
    let events = vec![(
        expected_req,
        http::Response::builder()
            .status(200)
            .body("response body")
            .unwrap(),
    )];
    let conn = TestConnection::new(events);
    let client = Client::new(conn.clone());
    let resp = client
        .call(test_operation(Some("test-region")))
        .await
        .expect("successful operation");
    assert_eq!(resp, "response body");

    assert_eq!(conn.requests().len(), 1);
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn error_responses_are_service_errors() {
    let conn = TestConnection::new(vec![(
        http::Request::new(SdkBody::empty()),
        http::Response::builder()
            .status(400)
            .body("bad request")
            .unwrap(),
    )]);
    let client = Client::new(conn);
    match client.call_raw(test_operation(Some("test-region"))).await {
        Err(SdkError::ServiceError { err, raw }) => {
            assert_eq!(err, "bad request");
            assert_eq!(raw.status(), 400);
        }
        other => panic!("expected a service error, got {:?}", other.map(|r| r.parsed)),
    }
}

#[tokio::test]
async fn missing_region_is_a_construction_failure() {
    let conn = TestConnection::<&str>::new(vec![]);
    let client = Client::new(conn.clone());
    match client.call(test_operation(None)).await {
        Err(SdkError::ConstructionFailure(err)) => {
            assert!(err.to_string().contains("region"), "{}", err)
        }
        other => panic!("expected a construction failure, got {:?}", other),
    }
    assert!(conn.requests().is_empty(), "nothing should be sent");
}

#[tokio::test]
async fn connector_errors_are_dispatch_failures() {
    let (svc, mut handle) = tower_test::mock::pair::<http::Request<SdkBody>, http::Response<hyper::Body>>();
    let client = Client::new(svc);
    let call = client.call(test_operation(Some("us-west-2")));
    let respond = async move {
        let (req, send_response) = handle.next_request().await.expect("one request is sent");
        assert_eq!(
            req.uri(),
            &Uri::from_static("https://test-service.us-west-2.amazonaws.com/")
        );
        send_response.send_error("connection reset");
    };
    let (result, _) = tokio::join!(call, respond);
    match result {
        Err(SdkError::DispatchFailure(err)) => assert!(err.to_string().contains("connection reset")),
        other => panic!("expected a dispatch failure, got {:?}", other),
    }
}
