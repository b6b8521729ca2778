/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use http::header::ToStrError;
use http::{HeaderMap, Response};
use serde_json::{Map, Value};

fn sanitize_error_code(error_code: &str) -> &str {
    // Trim a trailing URL from the error code, beginning with a `:`
    let error_code = match error_code.find(':') {
        Some(idx) => &error_code[..idx],
        None => error_code,
    };

    // Trim a prefixing namespace from the error code, beginning with a `#`
    match error_code.find('#') {
        Some(idx) => &error_code[idx + 1..],
        None => error_code,
    }
}

fn error_type_from_header(headers: &HeaderMap) -> Result<Option<&str>, ToStrError> {
    headers
        .get("X-Amzn-Errortype")
        .map(|v| v.to_str())
        .transpose()
}

fn request_id(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("X-Amzn-Requestid")
        .and_then(|v| v.to_str().ok())
}

fn body_str<'a>(body: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a str> {
    keys.iter()
        .find_map(|key| body.get(*key).and_then(Value::as_str))
}

/// Error metadata from a failed response
///
/// The code comes from the `X-Amzn-Errortype` header, then the body's `code` or `__type`
/// member. An empty body is allowed. A body that is not a JSON object is an error.
pub fn parse_generic_error(response: &Response<Bytes>) -> Result<smithy_types::Error, serde_json::Error> {
    let body: Map<String, Value> = if response.body().is_empty() {
        Map::new()
    } else {
        serde_json::from_slice(response.body().as_ref())?
    };
    let code = error_type_from_header(response.headers())
        .ok()
        .flatten()
        .or_else(|| body_str(&body, &["code", "__type"]));
    let mut err_builder = smithy_types::Error::builder();
    if let Some(code) = code {
        err_builder.code(sanitize_error_code(code));
    }
    if let Some(message) = body_str(&body, &["message", "Message", "errorMessage"]) {
        err_builder.message(message);
    }
    if let Some(request_id) = request_id(response.headers()) {
        err_builder.request_id(request_id);
    }
    Ok(err_builder.build())
}

#[cfg(test)]
mod test {
    use crate::json_errors::{error_type_from_header, parse_generic_error, sanitize_error_code};
    use bytes::Bytes;

    #[test]
    fn generic_error() {
        let response = http::Response::builder()
            .header("X-Amzn-Requestid", "1234")
            .body(Bytes::from_static(
                br#"{ "__type": "FooError", "message": "Go to foo" }"#,
            ))
            .unwrap();
        assert_eq!(
            parse_generic_error(&response).unwrap(),
            smithy_types::Error::builder()
                .code("FooError")
                .message("Go to foo")
                .request_id("1234")
                .build()
        )
    }

    #[test]
    fn error_type() {
        let response = http::Response::builder()
            .header(
                "X-Amzn-Errortype",
                "aws.protocoltests.restjson#FooError:http://internal.amazon.com/coral/com.amazon.coral.validate/",
            )
            .body(Bytes::from_static(br#"{ "code": "BarError" }"#))
            .unwrap();
        assert_eq!(
            error_type_from_header(response.headers()).expect("valid header"),
            Some(
                "aws.protocoltests.restjson#FooError:http://internal.amazon.com/coral/com.amazon.coral.validate/"
            )
        );
        assert_eq!(
            parse_generic_error(&response).unwrap().code(),
            Some("FooError")
        );
    }

    #[test]
    fn code_member_is_preferred_over_type() {
        let response = http::Response::builder()
            .status(400)
            .body(Bytes::from_static(
                br#"{ "code": "ResourceNotFoundException", "__type": "Other", "Message": "nope" }"#,
            ))
            .unwrap();
        let err = parse_generic_error(&response).unwrap();
        assert_eq!(err.code(), Some("ResourceNotFoundException"));
        assert_eq!(err.message(), Some("nope"));
        assert_eq!(err.request_id(), None);
    }

    #[test]
    fn empty_body_has_no_code() {
        let response = http::Response::builder()
            .status(500)
            .body(Bytes::new())
            .unwrap();
        assert_eq!(
            parse_generic_error(&response).unwrap(),
            smithy_types::Error::builder().build()
        );
    }

    #[test]
    fn non_object_bodies_fail() {
        let response = http::Response::builder()
            .status(502)
            .body(Bytes::from_static(b"<html>Bad Gateway</html>"))
            .unwrap();
        assert!(parse_generic_error(&response).is_err());
    }

    #[test]
    fn sanitize_namespace_and_url() {
        assert_eq!(sanitize_error_code("aws.protocoltests.restjson#FooError"), "FooError");
        assert_eq!(
            sanitize_error_code("FooError:http://internal.amazon.com/coral/com.amazon.coral.validate/"),
            "FooError"
        );
        assert_eq!(
            sanitize_error_code("com.amazonaws.snowball.v20160630#InvalidJobStateException"),
            "InvalidJobStateException"
        );
        assert_eq!(sanitize_error_code("ServiceException"), "ServiceException");
    }
}
