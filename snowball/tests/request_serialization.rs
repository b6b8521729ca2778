/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use protocol_test_helpers::{assert_ok, validate_body, validate_headers, MediaType};
use snowball::input::{CreateJobInput, GetSnowballUsageInput};
use snowball::model::{JobResource, JobType, KeyRange, S3Resource, ShippingOption, SnowballCapacity};
use snowball::{Config, Region};

fn config() -> Config {
    Config::builder().region(Region::new("us-east-1")).build()
}

#[test]
fn empty_input_is_an_empty_object() {
    let op = GetSnowballUsageInput::builder()
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    let request = op.request().http();
    assert_eq!(request.method(), "POST");
    assert_eq!(request.uri(), "/");
    assert_ok(validate_headers(
        request,
        &[
            ("content-type", "application/x-amz-json-1.1"),
            ("x-amz-target", "AWSIESnowballJobManagementService.GetSnowballUsage"),
            ("content-length", "2"),
        ],
    ));
    assert_eq!(request.body().bytes(), Some(&b"{}"[..]));
    assert_eq!(op.metadata().map(|m| m.service()), Some("snowball"));
}

#[test]
fn nested_members_use_pascal_case() {
    let op = CreateJobInput::builder()
        .job_type(JobType::Import)
        .resources(
            JobResource::builder()
                .s3_resources(
                    S3Resource::builder()
                        .bucket_arn("arn:aws:s3:::my-bucket")
                        .key_range(KeyRange::builder().begin_marker("a").end_marker("m").build())
                        .build(),
                )
                .build(),
        )
        .address_id("ADID1234ab12-3eec-4eb3-9be6-9374c10eb51b")
        .kms_key_arn("arn:aws:kms:us-east-1:123456789012:key/abcd")
        .role_arn("arn:aws:iam::123456789012:role/snowball-import")
        .snowball_capacity_preference(SnowballCapacity::T80)
        .shipping_option(ShippingOption::SecondDay)
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    let body = op.request().http().body().bytes().expect("body is buffered");
    assert_ok(validate_body(
        body,
        r#"{
            "JobType": "IMPORT",
            "Resources": {
                "S3Resources": [{
                    "BucketArn": "arn:aws:s3:::my-bucket",
                    "KeyRange": {"BeginMarker": "a", "EndMarker": "m"}
                }]
            },
            "AddressId": "ADID1234ab12-3eec-4eb3-9be6-9374c10eb51b",
            "KmsKeyARN": "arn:aws:kms:us-east-1:123456789012:key/abcd",
            "RoleARN": "arn:aws:iam::123456789012:role/snowball-import",
            "SnowballCapacityPreference": "T80",
            "ShippingOption": "SECOND_DAY"
        }"#,
        MediaType::Json,
    ));
}
