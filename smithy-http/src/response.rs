/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use http::Response;

/// `ParseHttpResponse` is a generic trait for parsing structured data from HTTP responses.
///
/// The split between `parse_unloaded` and `parse_loaded` keeps the parsing code pure and sync.
/// Reading the body is left to the caller (see [`load_response`](crate::middleware::load_response))
/// when the required behavior is simply "read to the end."
pub trait ParseHttpResponse<B> {
    /// Output type of the HttpResponse.
    ///
    /// For the JSON protocols this is `Result<ListJobsOutput, ListJobsError>` or similar.
    type Output;

    /// Parse an HTTP request without reading the body. If the body must be provided to proceed,
    /// return `None`
    fn parse_unloaded(&self, response: &mut http::Response<B>) -> Option<Self::Output>;

    /// Parse an HTTP request from a fully loaded body.
    fn parse_loaded(&self, response: &http::Response<Bytes>) -> Self::Output;
}

/// Convenience Trait for non-streaming APIs
///
/// Every Image Builder and Snowball operation is non-streaming, so generated operations implement
/// this trait and pick up `ParseHttpResponse` through the blanket implementation.
pub trait ParseStrictResponse {
    type Output;
    fn parse(&self, response: &Response<Bytes>) -> Self::Output;
}

impl<B, T> ParseHttpResponse<B> for T
where
    T: ParseStrictResponse,
{
    type Output = T::Output;

    fn parse_unloaded(&self, _response: &mut Response<B>) -> Option<Self::Output> {
        None
    }

    fn parse_loaded(&self, response: &Response<Bytes>) -> Self::Output {
        self.parse(response)
    }
}

#[cfg(test)]
mod test {
    use crate::response::{ParseHttpResponse, ParseStrictResponse};
    use bytes::Bytes;
    use http::Response;

    struct StatusParser;

    impl ParseStrictResponse for StatusParser {
        type Output = Result<u16, String>;

        fn parse(&self, response: &Response<Bytes>) -> Self::Output {
            if response.status().is_success() {
                Ok(response.status().as_u16())
            } else {
                Err(String::from_utf8_lossy(response.body()).into_owned())
            }
        }
    }

    #[test]
    fn strict_parsers_always_need_the_body() {
        let mut unloaded = Response::new(());
        assert!(ParseHttpResponse::<()>::parse_unloaded(&StatusParser, &mut unloaded).is_none());

        let failed = Response::builder()
            .status(400)
            .body(Bytes::from_static(b"bad request"))
            .unwrap();
        assert_eq!(
            ParseHttpResponse::<()>::parse_loaded(&StatusParser, &failed),
            Err("bad request".to_string())
        );
    }
}
