/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use imagebuilder::error::CancelImageCreationErrorKind;
use imagebuilder::operation::CancelImageCreation;
use smithy_http::response::ParseStrictResponse;

fn response(status: u16, headers: &[(&str, &str)], body: &'static [u8]) -> http::Response<Bytes> {
    let mut builder = http::Response::builder()
        .status(status)
        .header("X-Amzn-Requestid", "req-1");
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    builder.body(Bytes::from_static(body)).unwrap()
}

#[test]
fn errors_without_a_code_keep_their_metadata() {
    let err = CancelImageCreation::new()
        .parse(&response(503, &[], br#"{"message":"try later"}"#))
        .expect_err("503 is an error");
    assert!(matches!(err.kind, CancelImageCreationErrorKind::Unhandled(_)));
    assert_eq!(err.code(), None);
    assert_eq!(err.message(), Some("try later"));
    assert_eq!(err.request_id(), Some("req-1"));
}

#[test]
fn error_type_header_selects_the_exception() {
    let err = CancelImageCreation::new()
        .parse(&response(
            500,
            &[("X-Amzn-Errortype", "ServiceException:http://internal.amazon.com/")],
            br#"{"message":"internal"}"#,
        ))
        .expect_err("500 is an error");
    match err.kind {
        CancelImageCreationErrorKind::ServiceException(ref e) => {
            assert_eq!(e.message(), Some("internal"))
        }
        ref other => panic!("unexpected kind: {:?}", other),
    }
    assert_eq!(err.code(), Some("ServiceException"));
}

#[test]
fn exception_with_both_message_keys_is_unhandled_but_keeps_metadata() {
    let err = CancelImageCreation::new()
        .parse(&response(
            500,
            &[("X-Amzn-Errortype", "ServiceException")],
            br#"{"message":"lower","Message":"upper"}"#,
        ))
        .expect_err("500 is an error");
    assert!(matches!(err.kind, CancelImageCreationErrorKind::Unhandled(_)));
    assert_eq!(err.code(), Some("ServiceException"));
    assert_eq!(err.message(), Some("lower"));
    assert_eq!(err.request_id(), Some("req-1"));
}
