/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_types::build_metadata::{OsFamily, BUILD_METADATA};
use aws_types::os_shim_internal::Env;
use http::header::{HeaderName, InvalidHeaderValue, USER_AGENT};
use http::HeaderValue;
use smithy_http::middleware::MapRequest;
use smithy_http::operation::Request;
use std::borrow::Cow;
use std::convert::TryFrom;
use std::fmt;
use std::fmt::{Display, Formatter};
use thiserror::Error;

const X_AMZ_USER_AGENT: &str = "x-amz-user-agent";

/// Client identification sent with every request
///
/// Operations insert an `AwsUserAgent` into the property bag when they are built.
/// [`UserAgentStage`](UserAgentStage) reads it back and sets the `User-Agent` and
/// `x-amz-user-agent` headers.
#[derive(Clone, Debug)]
pub struct AwsUserAgent {
    sdk_version: &'static str,
    api: ApiMetadata,
    os_family: OsFamily,
    os_version: Option<String>,
    rust_version: &'static str,
    exec_env: Option<String>,
}

impl AwsUserAgent {
    /// User agent for the running process, using [`BUILD_METADATA`](const@aws_types::build_metadata::BUILD_METADATA)
    pub fn new_from_environment(api_metadata: ApiMetadata) -> Self {
        Self::from_env(Env::real(), api_metadata)
    }

    /// `AWS_EXECUTION_ENV`, when set in `env`, is reported as `exec-env/<name>`
    pub fn from_env(env: Env, api_metadata: ApiMetadata) -> Self {
        AwsUserAgent {
            sdk_version: BUILD_METADATA.core_pkg_version,
            api: api_metadata,
            os_family: BUILD_METADATA.os_family,
            os_version: None,
            rust_version: BUILD_METADATA.rust_version,
            exec_env: env.get("AWS_EXECUTION_ENV").ok(),
        }
    }

    /// A fixed user agent, identical on every platform
    pub fn for_tests() -> Self {
        AwsUserAgent {
            sdk_version: "0.123.test",
            api: ApiMetadata::new("test-service", "0.123"),
            os_family: OsFamily::Windows,
            os_version: Some("XPSP3".to_string()),
            rust_version: "1.50.0",
            exec_env: None,
        }
    }

    fn write_os(&self, out: &mut String) {
        out.push_str(" os/");
        out.push_str(self.os_family.as_str());
        if let Some(version) = &self.os_version {
            out.push('/');
            out.push_str(version);
        }
    }

    /// Value of `x-amz-user-agent`: sdk, api, os, language and (optionally) execution environment
    pub fn aws_ua_header(&self) -> String {
        let mut ua = format!("aws-sdk-rust/{} {}", self.sdk_version, self.api);
        self.write_os(&mut ua);
        ua.push_str(" lang/rust/");
        ua.push_str(self.rust_version);
        if let Some(exec_env) = &self.exec_env {
            ua.push_str(" exec-env/");
            ua.push_str(exec_env);
        }
        ua
    }

    /// Value of `User-Agent`. It leaves out the api and execution environment.
    pub fn ua_header(&self) -> String {
        let mut ua = format!("aws-sdk-rust/{}", self.sdk_version);
        self.write_os(&mut ua);
        ua.push_str(" lang/rust/");
        ua.push_str(self.rust_version);
        ua
    }
}

/// Name and version of the service API an operation belongs to
#[derive(Clone, Debug)]
pub struct ApiMetadata {
    service_id: Cow<'static, str>,
    version: &'static str,
}

impl ApiMetadata {
    pub const fn new(service_id: &'static str, version: &'static str) -> Self {
        Self {
            service_id: Cow::Borrowed(service_id),
            version,
        }
    }
}

impl Display for ApiMetadata {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "api/{}/{}", self.service_id, self.version)
    }
}

#[non_exhaustive]
#[derive(Default, Clone, Debug)]
pub struct UserAgentStage;

impl UserAgentStage {
    pub fn new() -> Self {
        Self
    }
}

#[derive(Debug, Error)]
pub enum UserAgentStageError {
    #[error("User agent missing from property bag")]
    UserAgentMissing,
    #[error("Provided user agent header was invalid")]
    InvalidHeader(#[from] InvalidHeaderValue),
}

impl MapRequest for UserAgentStage {
    type Error = UserAgentStageError;

    fn apply(&self, request: Request) -> Result<Request, Self::Error> {
        request.augment(|mut req, conf| {
            let ua = conf
                .get::<AwsUserAgent>()
                .ok_or(UserAgentStageError::UserAgentMissing)?;
            req.headers_mut()
                .append(USER_AGENT, HeaderValue::try_from(ua.ua_header())?);
            req.headers_mut().append(
                HeaderName::from_static(X_AMZ_USER_AGENT),
                HeaderValue::try_from(ua.aws_ua_header())?,
            );
            Ok(req)
        })
    }
}

#[cfg(test)]
mod test {
    use crate::user_agent::{ApiMetadata, AwsUserAgent, UserAgentStage, X_AMZ_USER_AGENT};
    use aws_types::os_shim_internal::Env;
    use http::header::USER_AGENT;
    use smithy_http::body::SdkBody;
    use smithy_http::middleware::MapRequest;
    use smithy_http::operation;

    #[test]
    fn generate_a_valid_ua() {
        let ua = AwsUserAgent::for_tests();
        assert_eq!(
            ua.aws_ua_header(),
            "aws-sdk-rust/0.123.test api/test-service/0.123 os/windows/XPSP3 lang/rust/1.50.0"
        );
        assert_eq!(
            ua.ua_header(),
            "aws-sdk-rust/0.123.test os/windows/XPSP3 lang/rust/1.50.0"
        );
    }

    #[test]
    fn execution_env_is_reported() {
        let ua = AwsUserAgent::from_env(
            Env::from_slice(&[("AWS_EXECUTION_ENV", "lambda")]),
            ApiMetadata::new("snowball", "0.0.1"),
        );
        let header = ua.aws_ua_header();
        assert!(header.contains("api/snowball/0.0.1"), "{}", header);
        assert!(header.ends_with(" exec-env/lambda"), "{}", header);
    }

    #[test]
    fn ua_stage_adds_headers() {
        let stage = UserAgentStage::new();
        let req = operation::Request::new(http::Request::new(SdkBody::from("some body")));
        stage
            .apply(req)
            .expect_err("adding UA should fail without a UA set");
        let mut req = operation::Request::new(http::Request::new(SdkBody::from("some body")));
        req.properties_mut().insert(AwsUserAgent::from_env(
            Env::from_slice(&[]),
            ApiMetadata::new("imagebuilder", "0.0.1"),
        ));
        let req = stage.apply(req).expect("setting user agent should succeed");
        let (req, _) = req.into_parts();
        req.headers()
            .get(USER_AGENT)
            .expect("UA header should be set");
        req.headers()
            .get(X_AMZ_USER_AGENT)
            .expect("UA header should be set");
    }
}
