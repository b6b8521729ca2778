/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use imagebuilder::input::{
    CreateComponentInput, GetComponentInput, ListImagesInput, ListTagsForResourceInput,
    TagResourceInput, UntagResourceInput,
};
use imagebuilder::model::{Filter, Ownership, Platform};
use imagebuilder::{Config, Region};
use protocol_test_helpers::{
    assert_ok, forbid_query_params, validate_body, validate_headers, validate_query_string,
    MediaType,
};
use smithy_http::operation::BuildError;

const COMPONENT_ARN: &str = "arn:aws:imagebuilder:us-west-2:123456789012:component/hello/1.0.0/1";

fn config() -> Config {
    Config::builder()
        .region(Region::new("us-west-2"))
        .token_provider(|| "00000000-0000-4000-8000-000000000000".to_string())
        .build()
}

fn body(op: &smithy_http::operation::Request) -> &str {
    std::str::from_utf8(op.http().body().bytes().expect("body is buffered")).expect("utf-8 body")
}

#[test]
fn query_members_are_percent_encoded() {
    let op = GetComponentInput::builder()
        .component_build_version_arn(COMPONENT_ARN)
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    let request = op.request().http();
    assert_eq!(request.method(), "GET");
    assert_eq!(request.uri().path(), "/GetComponent");
    assert_ok(validate_query_string(
        request,
        &["componentBuildVersionArn=arn%3Aaws%3Aimagebuilder%3Aus-west-2%3A123456789012%3Acomponent%2Fhello%2F1.0.0%2F1"],
    ));
    assert_eq!(request.body().bytes(), Some(&b""[..]));
    assert!(request.headers().get(http::header::CONTENT_TYPE).is_none());
    assert_eq!(op.metadata().map(|m| m.name()), Some("GetComponent"));
    assert_eq!(op.metadata().map(|m| m.service()), Some("imagebuilder"));
    assert_eq!(
        op.properties().get::<Region>(),
        Some(&Region::new("us-west-2"))
    );
}

#[test]
fn required_query_members_fail_the_build() {
    let err = GetComponentInput::builder().build().unwrap_err();
    match err {
        BuildError::MissingField { field, .. } => assert_eq!(field, "component_build_version_arn"),
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn idempotency_token_is_filled_in() {
    let op = CreateComponentInput::builder()
        .name("hello")
        .semantic_version("1.0.0")
        .platform(Platform::Linux)
        .supported_os_versions("Amazon Linux 2")
        .uri("s3://bucket/hello.yml")
        .tags("team", "platform")
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    let request = op.request();
    assert_eq!(request.http().method(), "PUT");
    assert_eq!(request.http().uri(), "/CreateComponent");
    assert_ok(validate_headers(
        request.http(),
        &[("content-type", "application/json")],
    ));
    assert_ok(validate_body(
        body(request),
        r#"{
            "name": "hello",
            "semanticVersion": "1.0.0",
            "platform": "Linux",
            "supportedOsVersions": ["Amazon Linux 2"],
            "uri": "s3://bucket/hello.yml",
            "tags": { "team": "platform" },
            "clientToken": "00000000-0000-4000-8000-000000000000"
        }"#,
        MediaType::Json,
    ));
}

#[test]
fn explicit_idempotency_token_is_kept() {
    let op = CreateComponentInput::builder()
        .name("hello")
        .client_token("caller-token")
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    let sent: serde_json::Value = serde_json::from_str(body(op.request())).unwrap();
    assert_eq!(sent["clientToken"], "caller-token");
}

#[test]
fn list_filters_are_sent_in_the_body() {
    let op = ListImagesInput::builder()
        .owner(Ownership::SelfValue)
        .filters(Filter::builder().name("platform").values("Linux").build())
        .max_results(25)
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    assert_eq!(op.request().http().method(), "POST");
    assert_ok(validate_body(
        body(op.request()),
        r#"{"owner": "Self", "filters": [{"name": "platform", "values": ["Linux"]}], "maxResults": 25}"#,
        MediaType::Json,
    ));
}

#[test]
fn resource_arn_is_a_single_path_segment() {
    let op = ListTagsForResourceInput::builder()
        .resource_arn(COMPONENT_ARN)
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    assert_eq!(
        op.request().http().uri().path(),
        "/tags/arn%3Aaws%3Aimagebuilder%3Aus-west-2%3A123456789012%3Acomponent%2Fhello%2F1.0.0%2F1"
    );
}

#[test]
fn empty_labels_are_rejected() {
    let input = TagResourceInput::builder()
        .resource_arn("")
        .tags("team", "platform")
        .build()
        .unwrap();
    match input.make_operation(&config()) {
        Err(BuildError::MissingField { field, .. }) => assert_eq!(field, "resource_arn"),
        other => panic!("expected a missing field error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn tag_resource_body_excludes_the_label() {
    let op = TagResourceInput::builder()
        .resource_arn(COMPONENT_ARN)
        .tags("team", "platform")
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    assert_eq!(op.request().http().method(), "POST");
    assert_ok(validate_body(
        body(op.request()),
        r#"{"tags": {"team": "platform"}}"#,
        MediaType::Json,
    ));
}

#[test]
fn untag_resource_repeats_tag_keys() {
    let op = UntagResourceInput::builder()
        .resource_arn(COMPONENT_ARN)
        .tag_keys("team")
        .tag_keys("cost center")
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    let request = op.request().http();
    assert_eq!(request.method(), "DELETE");
    assert_ok(validate_query_string(
        request,
        &["tagKeys=team", "tagKeys=cost%20center"],
    ));
    assert_ok(forbid_query_params(request, &["resourceArn"]));
}
