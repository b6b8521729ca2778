/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use http::uri::{InvalidUri, PathAndQuery, Uri};
use std::str::FromStr;
use thiserror::Error;

/// API Endpoint
///
/// This implements an API endpoint as specified in the
/// [Smithy Endpoint Specification](https://awslabs.github.io/smithy/1.0/spec/core/endpoint-traits.html)
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Endpoint {
    uri: http::Uri,
}

#[derive(Debug, Error)]
pub enum InvalidEndpoint {
    #[error("endpoint `{0}` must include a scheme and an authority")]
    MissingSchemeOrAuthority(Uri),
    #[error("endpoint produced an invalid URI: {0}")]
    InvalidUri(#[from] InvalidUri),
    #[error("endpoint produced an invalid URI: {0}")]
    Http(#[from] http::Error),
}

impl Endpoint {
    /// Create a new endpoint from a URI
    ///
    /// The URI's path is kept as a prefix of every request path, so
    /// `http://localhost:8000/proxy` turns `/CreateImage` into `/proxy/CreateImage`.
    pub fn from_uri(uri: Uri) -> Result<Self, InvalidEndpoint> {
        if uri.scheme().is_none() || uri.authority().is_none() {
            return Err(InvalidEndpoint::MissingSchemeOrAuthority(uri));
        }
        Ok(Endpoint { uri })
    }

    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    /// Replace the scheme and authority of `uri` with this endpoint's, prefixing the path.
    pub fn set_endpoint(&self, uri: &mut Uri) -> Result<(), InvalidEndpoint> {
        let authority = self
            .uri
            .authority()
            .cloned()
            .ok_or_else(|| InvalidEndpoint::MissingSchemeOrAuthority(self.uri.clone()))?;
        let scheme = self
            .uri
            .scheme()
            .cloned()
            .ok_or_else(|| InvalidEndpoint::MissingSchemeOrAuthority(self.uri.clone()))?;
        let path_and_query = merge_paths(&self.uri, uri)?;
        *uri = Uri::builder()
            .scheme(scheme)
            .authority(authority)
            .path_and_query(path_and_query)
            .build()?;
        Ok(())
    }
}

fn merge_paths(endpoint: &Uri, uri: &Uri) -> Result<PathAndQuery, InvalidUri> {
    let request_path = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/");
    let prefix = endpoint.path().trim_end_matches('/');
    if prefix.is_empty() {
        return PathAndQuery::from_str(request_path);
    }
    let request_path = request_path.trim_start_matches('/');
    PathAndQuery::from_str(&format!("{}/{}", prefix, request_path))
}

#[cfg(test)]
mod test {
    use crate::endpoint::Endpoint;
    use http::Uri;

    #[test]
    fn endpoint_replaces_scheme_and_authority() {
        let endpoint =
            Endpoint::from_uri(Uri::from_static("https://imagebuilder.us-west-2.amazonaws.com"))
                .expect("valid endpoint");
        let mut uri = Uri::from_static("/GetImage?imageBuildVersionArn=abc");
        endpoint.set_endpoint(&mut uri).expect("valid uri");
        assert_eq!(
            uri,
            Uri::from_static(
                "https://imagebuilder.us-west-2.amazonaws.com/GetImage?imageBuildVersionArn=abc"
            )
        );
    }

    #[test]
    fn endpoint_path_is_a_prefix() {
        let endpoint = Endpoint::from_uri(Uri::from_static("http://localhost:8000/proxy/"))
            .expect("valid endpoint");
        let mut uri = Uri::from_static("/");
        endpoint.set_endpoint(&mut uri).expect("valid uri");
        assert_eq!(uri, Uri::from_static("http://localhost:8000/proxy/"));

        let mut uri = Uri::from_static("/tags/abc");
        endpoint.set_endpoint(&mut uri).expect("valid uri");
        assert_eq!(uri, Uri::from_static("http://localhost:8000/proxy/tags/abc"));
    }

    #[test]
    fn relative_endpoints_are_rejected() {
        Endpoint::from_uri(Uri::from_static("/just/a/path")).expect_err("no authority");
    }
}
