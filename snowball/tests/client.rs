/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_hyper::test_connection::TestConnection;
use aws_hyper::SdkError;
use http::header::{HeaderName, USER_AGENT};
use smithy_http::body::SdkBody;
use smithy_types::Instant;
use snowball::error::{CancelClusterErrorKind, DescribeJobErrorKind};
use snowball::model::{JobState, JobType, SnowballType};
use snowball::{Client, Config, Region};

const ENDPOINT: &str = "https://snowball.us-east-1.amazonaws.com/";

fn config() -> Config {
    Config::builder().region(Region::new("us-east-1")).build()
}

fn request(target: &str, body: &'static str) -> http::Request<SdkBody> {
    http::Request::builder()
        .method("POST")
        .uri(ENDPOINT)
        .header("content-type", "application/x-amz-json-1.1")
        .header("x-amz-target", target)
        .body(SdkBody::from(body))
        .unwrap()
}

fn ignored_headers() -> Vec<HeaderName> {
    vec![USER_AGENT, HeaderName::from_static("x-amz-user-agent")]
}

#[tokio::test]
async fn list_jobs() {
    let conn = TestConnection::new(vec![(
        request("AWSIESnowballJobManagementService.ListJobs", "{}"),
        http::Response::builder()
            .status(200)
            .header("content-type", "application/x-amz-json-1.1")
            .body(
                r#"{
                    "JobListEntries": [{
                        "JobId": "JID123e4567-e89b-12d3-a456-426655440000",
                        "JobState": "InTransitToCustomer",
                        "IsMaster": false,
                        "JobType": "IMPORT",
                        "SnowballType": "EDGE",
                        "CreationDate": 1.4754226E9,
                        "Description": "backup"
                    }]
                }"#,
            )
            .unwrap(),
    )]);
    let client = Client::from_conf_conn(config(), conn.clone());
    let jobs = client.list_jobs().send().await.expect("request succeeds");
    assert_eq!(jobs.next_token, None);
    let entries = jobs.job_list_entries.unwrap_or_default();
    assert_eq!(entries.len(), 1);
    let job = &entries[0];
    assert_eq!(
        job.job_id.as_deref(),
        Some("JID123e4567-e89b-12d3-a456-426655440000")
    );
    assert_eq!(job.job_state, Some(JobState::InTransitToCustomer));
    assert_eq!(job.is_master, Some(false));
    assert_eq!(job.job_type, Some(JobType::Import));
    assert_eq!(job.snowball_type, Some(SnowballType::Edge));
    assert_eq!(
        job.creation_date,
        Some(Instant::from_epoch_seconds(1_475_422_600))
    );
    conn.assert_requests_match(&ignored_headers());
}

#[tokio::test]
async fn snowball_usage() {
    let conn = TestConnection::new(vec![(
        request("AWSIESnowballJobManagementService.GetSnowballUsage", "{}"),
        http::Response::builder()
            .status(200)
            .body(r#"{"SnowballLimit": 1, "SnowballsInUse": 0}"#)
            .unwrap(),
    )]);
    let client = Client::from_conf_conn(config(), conn.clone());
    let usage = client
        .get_snowball_usage()
        .send()
        .await
        .expect("request succeeds");
    assert_eq!(usage.snowball_limit, Some(1));
    assert_eq!(usage.snowballs_in_use, Some(0));
    conn.assert_requests_match(&ignored_headers());
}

#[tokio::test]
async fn type_member_selects_the_exception() {
    let conn = TestConnection::new(vec![(
        request(
            "AWSIESnowballJobManagementService.DescribeJob",
            r#"{"JobId": "JID-missing"}"#,
        ),
        http::Response::builder()
            .status(400)
            .body(
                r#"{
                    "__type": "com.amazonaws.snowball.v20160630#InvalidResourceException",
                    "Message": "The job JID-missing does not exist",
                    "ResourceType": "JOB"
                }"#,
            )
            .unwrap(),
    )]);
    let client = Client::from_conf_conn(config(), conn.clone());
    let err = client
        .describe_job()
        .job_id("JID-missing")
        .send()
        .await
        .expect_err("the job does not exist");
    let err = match err {
        SdkError::ServiceError { err, .. } => err,
        other => panic!("expected a service error, got {:?}", other),
    };
    assert_eq!(err.code(), Some("InvalidResourceException"));
    match err.kind {
        DescribeJobErrorKind::InvalidResourceException(inner) => {
            assert_eq!(inner.message(), Some("The job JID-missing does not exist"));
            assert_eq!(inner.resource_type.as_deref(), Some("JOB"));
        }
        other => panic!("unexpected kind: {:?}", other),
    }
    conn.assert_requests_match(&ignored_headers());
}

#[tokio::test]
async fn kms_failures_use_the_service_spelling() {
    let conn = TestConnection::new(vec![(
        request(
            "AWSIESnowballJobManagementService.CancelCluster",
            r#"{"ClusterId": "CID123e4567-e89b-12d3-a456-426655440000"}"#,
        ),
        http::Response::builder()
            .status(400)
            .header("x-amzn-errortype", "KMSRequestFailedException")
            .body(r#"{"Message": "key is disabled"}"#)
            .unwrap(),
    )]);
    let client = Client::from_conf_conn(config(), conn.clone());
    let err = client
        .cancel_cluster()
        .cluster_id("CID123e4567-e89b-12d3-a456-426655440000")
        .send()
        .await
        .expect_err("kms rejected the request");
    let err = match err {
        SdkError::ServiceError { err, .. } => err,
        other => panic!("expected a service error, got {:?}", other),
    };
    assert!(err.is_kms_request_failed_exception());
    assert!(matches!(
        err.kind,
        CancelClusterErrorKind::KmsRequestFailedException(_)
    ));
    assert_eq!(
        err.to_string(),
        "KmsRequestFailedException: key is disabled"
    );
    match snowball::Error::from(smithy_http::result::SdkError::<_, ()>::ServiceError {
        err,
        raw: http::Response::new(()),
    }) {
        snowball::Error::KmsRequestFailedException(inner) => {
            assert_eq!(inner.message(), Some("key is disabled"))
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[tokio::test]
async fn dispatch_failures_are_reported() {
    let conn = TestConnection::<&'static str>::new(vec![]);
    let client = Client::from_conf_conn(config(), conn);
    let err = client
        .list_clusters()
        .send()
        .await
        .expect_err("the connection has no responses");
    assert!(matches!(err, SdkError::DispatchFailure(_)));
    assert!(matches!(snowball::Error::from(err), snowball::Error::Unhandled(_)));
}
