/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_hyper::test_connection::TestConnection;
use aws_hyper::SdkError;
use http::header::{HeaderName, USER_AGENT};
use imagebuilder::error::GetImagePolicyErrorKind;
use imagebuilder::model::{Ownership, Platform};
use imagebuilder::{Client, Config, Region};
use smithy_http::body::SdkBody;

fn config() -> Config {
    Config::builder()
        .region(Region::new("us-west-2"))
        .token_provider(|| "00000000-0000-4000-8000-000000000000".to_string())
        .build()
}

fn ignored_headers() -> Vec<HeaderName> {
    vec![USER_AGENT, HeaderName::from_static("x-amz-user-agent")]
}

#[tokio::test]
async fn list_images_round_trip() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .method("POST")
            .uri("https://imagebuilder.us-west-2.amazonaws.com/ListImages")
            .header("content-type", "application/json")
            .body(SdkBody::from(r#"{"owner":"Self"}"#))
            .unwrap(),
        http::Response::builder()
            .status(200)
            .body(
                r#"{
                    "requestId": "a1b2",
                    "imageVersionList": [{
                        "arn": "arn:aws:imagebuilder:us-west-2:123456789012:image/web/1.0.0",
                        "name": "web",
                        "version": "1.0.0",
                        "platform": "Linux",
                        "dateCreated": "2020-02-14T01:52:33.000Z"
                    }],
                    "nextToken": "page-2"
                }"#,
            )
            .unwrap(),
    )]);
    let client = Client::from_conf_conn(config(), conn.clone());
    let output = client
        .list_images()
        .owner(Ownership::SelfValue)
        .send()
        .await
        .expect("request succeeds");
    assert_eq!(output.request_id.as_deref(), Some("a1b2"));
    assert_eq!(output.next_token.as_deref(), Some("page-2"));
    let images = output.image_version_list.unwrap_or_default();
    assert_eq!(images.len(), 1);
    assert_eq!(images[0].name.as_deref(), Some("web"));
    assert_eq!(images[0].platform, Some(Platform::Linux));
    assert_eq!(
        images[0].date_created.as_deref(),
        Some("2020-02-14T01:52:33.000Z")
    );
    conn.assert_requests_match(&ignored_headers());
}

#[tokio::test]
async fn empty_success_body_is_an_empty_output() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .method("DELETE")
            .uri("https://imagebuilder.us-west-2.amazonaws.com/tags/arn%3Aaws%3Aimagebuilder%3Aus-west-2%3A123456789012%3Aimage%2Fweb?tagKeys=team")
            .body(SdkBody::empty())
            .unwrap(),
        http::Response::builder().status(200).body("").unwrap(),
    )]);
    let client = Client::from_conf_conn(config(), conn.clone());
    client
        .untag_resource()
        .resource_arn("arn:aws:imagebuilder:us-west-2:123456789012:image/web")
        .tag_keys("team")
        .send()
        .await
        .expect("request succeeds");
    conn.assert_requests_match(&ignored_headers());
}

#[tokio::test]
async fn modeled_errors_are_matched_by_code() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .method("GET")
            .uri("https://imagebuilder.us-west-2.amazonaws.com/GetImagePolicy?imageArn=missing")
            .body(SdkBody::empty())
            .unwrap(),
        http::Response::builder()
            .status(404)
            .header(
                "x-amzn-errortype",
                "ResourceNotFoundException:http://internal.amazon.com/coral/com.amazon.imagebuilder/",
            )
            .header("x-amzn-requestid", "req-404")
            .body(r#"{"message":"Image policy not found"}"#)
            .unwrap(),
    )]);
    let client = Client::from_conf_conn(config(), conn.clone());
    let err = client
        .get_image_policy()
        .image_arn("missing")
        .send()
        .await
        .expect_err("the service returned an error");
    match &err {
        SdkError::ServiceError { err, raw } => {
            assert_eq!(raw.status(), 404);
            assert!(err.is_resource_not_found_exception());
            assert_eq!(err.code(), Some("ResourceNotFoundException"));
            assert_eq!(err.message(), Some("Image policy not found"));
            assert_eq!(err.request_id(), Some("req-404"));
            match &err.kind {
                GetImagePolicyErrorKind::ResourceNotFoundException(inner) => {
                    assert_eq!(inner.message(), Some("Image policy not found"))
                }
                other => panic!("unexpected kind: {:?}", other),
            }
        }
        other => panic!("expected a service error, got {:?}", other),
    }
    match imagebuilder::Error::from(err) {
        imagebuilder::Error::ResourceNotFoundException(inner) => {
            assert_eq!(
                inner.to_string(),
                "ResourceNotFoundException: Image policy not found"
            )
        }
        other => panic!("unexpected error: {}", other),
    }
    conn.assert_requests_match(&ignored_headers());
}

#[tokio::test]
async fn unknown_error_codes_are_unhandled() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .method("GET")
            .uri("https://imagebuilder.us-west-2.amazonaws.com/GetImagePolicy?imageArn=throttled")
            .body(SdkBody::empty())
            .unwrap(),
        http::Response::builder()
            .status(400)
            .body(r#"{"code":"SomethingNewException","message":"not in the model"}"#)
            .unwrap(),
    )]);
    let client = Client::from_conf_conn(config(), conn.clone());
    let err = client
        .get_image_policy()
        .image_arn("throttled")
        .send()
        .await
        .expect_err("the service returned an error");
    let err = match err {
        SdkError::ServiceError { err, .. } => err,
        other => panic!("expected a service error, got {:?}", other),
    };
    assert!(matches!(err.kind, GetImagePolicyErrorKind::Unhandled(_)));
    assert_eq!(err.code(), Some("SomethingNewException"));
    assert_eq!(err.message(), Some("not in the model"));
}

#[tokio::test]
async fn missing_required_members_never_dispatch() {
    let conn = TestConnection::<&'static str>::new(vec![]);
    let client = Client::from_conf_conn(config(), conn.clone());
    let err = client
        .get_image_policy()
        .send()
        .await
        .expect_err("image_arn is required");
    assert!(matches!(err, SdkError::ConstructionFailure(_)));
    assert!(conn.requests().is_empty());
}
