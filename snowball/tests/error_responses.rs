/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use smithy_http::response::ParseStrictResponse;
use snowball::error::CancelJobErrorKind;
use snowball::operation::CancelJob;

fn response(status: u16, body: &'static [u8]) -> http::Response<Bytes> {
    http::Response::builder()
        .status(status)
        .header("X-Amzn-Requestid", "req-1")
        .body(Bytes::from_static(body))
        .unwrap()
}

#[test]
fn errors_without_a_code_keep_their_metadata() {
    let err = CancelJob::new()
        .parse(&response(500, br#"{"message":"boom"}"#))
        .expect_err("500 is an error");
    assert!(matches!(err.kind, CancelJobErrorKind::Unhandled(_)));
    assert_eq!(err.code(), None);
    assert_eq!(err.message(), Some("boom"));
    assert_eq!(err.request_id(), Some("req-1"));
}

#[test]
fn modeled_errors_read_either_message_casing() {
    let err = CancelJob::new()
        .parse(&response(
            400,
            br#"{"__type":"InvalidJobStateException","message":"not now"}"#,
        ))
        .expect_err("400 is an error");
    match err.kind {
        CancelJobErrorKind::InvalidJobStateException(ref e) => {
            assert_eq!(e.message(), Some("not now"))
        }
        ref other => panic!("unexpected kind: {:?}", other),
    }
    assert_eq!(err.request_id(), Some("req-1"));
}

#[test]
fn exception_with_both_message_keys_is_unhandled_but_keeps_metadata() {
    let err = CancelJob::new()
        .parse(&response(
            400,
            br#"{"__type":"InvalidJobStateException","Message":"upper","message":"lower"}"#,
        ))
        .expect_err("400 is an error");
    assert!(matches!(err.kind, CancelJobErrorKind::Unhandled(_)));
    assert_eq!(err.code(), Some("InvalidJobStateException"));
    assert_eq!(err.message(), Some("lower"));
    assert_eq!(err.request_id(), Some("req-1"));
}
