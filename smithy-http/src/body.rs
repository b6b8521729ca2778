/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use http::{HeaderMap, HeaderValue};
use http_body::SizeHint;
use std::error::Error;
use std::fmt;
use std::pin::Pin;
use std::task::{Context, Poll};

type BodyError = Box<dyn Error + Send + Sync>;

/// SdkBody type
///
/// This is the Body used for dispatching all HTTP Requests.
/// For handling responses, the type of the body will be controlled
/// by the HTTP stack.
///
/// Every request made by the JSON protocols is fully buffered, so the body is a single chunk
/// that is yielded once.
pub enum SdkBody {
    Once(Option<Bytes>),
}

impl SdkBody {
    pub fn empty() -> Self {
        SdkBody::Once(None)
    }

    fn poll_inner(&mut self) -> Poll<Option<Result<Bytes, BodyError>>> {
        match self {
            SdkBody::Once(ref mut opt) => {
                let data = opt.take();
                match data {
                    Some(bytes) if !bytes.is_empty() => Poll::Ready(Some(Ok(bytes))),
                    _ => Poll::Ready(None),
                }
            }
        }
    }

    /// Return a reference to this body as `&[u8]`. Once polled, the body is empty.
    pub fn bytes(&self) -> Option<&[u8]> {
        match self {
            SdkBody::Once(Some(bytes)) => Some(bytes),
            SdkBody::Once(None) => Some(&[]),
        }
    }

    pub fn try_clone(&self) -> Option<Self> {
        match self {
            SdkBody::Once(bytes) => Some(SdkBody::Once(bytes.clone())),
        }
    }

    fn content_length(&self) -> u64 {
        match self {
            SdkBody::Once(Some(bytes)) => bytes.len() as u64,
            SdkBody::Once(None) => 0,
        }
    }
}

impl fmt::Debug for SdkBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SdkBody::Once(Some(bytes)) => match std::str::from_utf8(bytes) {
                Ok(s) => f.debug_tuple("SdkBody").field(&s).finish(),
                Err(_) => f.debug_tuple("SdkBody").field(bytes).finish(),
            },
            SdkBody::Once(None) => f.write_str("SdkBody(<empty>)"),
        }
    }
}

impl From<&str> for SdkBody {
    fn from(s: &str) -> Self {
        SdkBody::Once(Some(Bytes::copy_from_slice(s.as_bytes())))
    }
}

impl From<String> for SdkBody {
    fn from(s: String) -> Self {
        SdkBody::from(Bytes::from(s))
    }
}

impl From<Bytes> for SdkBody {
    fn from(bytes: Bytes) -> Self {
        SdkBody::Once(Some(bytes))
    }
}

impl From<Vec<u8>> for SdkBody {
    fn from(data: Vec<u8>) -> SdkBody {
        Self::from(Bytes::from(data))
    }
}

impl http_body::Body for SdkBody {
    type Data = Bytes;
    type Error = BodyError;

    fn poll_data(
        mut self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
    ) -> Poll<Option<Result<Self::Data, Self::Error>>> {
        self.poll_inner()
    }

    fn poll_trailers(
        self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
    ) -> Poll<Result<Option<HeaderMap<HeaderValue>>, Self::Error>> {
        Poll::Ready(Ok(None))
    }

    fn is_end_stream(&self) -> bool {
        self.content_length() == 0
    }

    fn size_hint(&self) -> SizeHint {
        SizeHint::with_exact(self.content_length())
    }
}

#[cfg(test)]
mod test {
    use crate::body::SdkBody;
    use http_body::Body;

    #[tokio::test]
    async fn once_body_yields_data_exactly_once() {
        let mut body = SdkBody::from("hello");
        assert_eq!(body.size_hint().exact(), Some(5));
        let data = body.data().await;
        assert_eq!(data.expect("one chunk").expect("no error"), "hello");
        assert!(body.data().await.is_none());
    }

    #[test]
    fn empty_body_is_end_of_stream() {
        let body = SdkBody::empty();
        assert!(body.is_end_stream());
        assert_eq!(body.bytes(), Some(&b""[..]));
    }

    #[test]
    fn clone_keeps_contents() {
        let body = SdkBody::from(vec![1, 2, 3]);
        let cloned = body.try_clone().expect("buffered bodies can be cloned");
        assert_eq!(cloned.bytes(), Some(&[1u8, 2, 3][..]));
    }
}
