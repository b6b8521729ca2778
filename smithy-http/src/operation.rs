/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::body::SdkBody;
use crate::property_bag::PropertyBag;
use std::borrow::Cow;
use std::error::Error;
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Metadata {
    operation: Cow<'static, str>,
    service: Cow<'static, str>,
}

impl Metadata {
    pub fn name(&self) -> &str {
        &self.operation
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn new(
        operation: impl Into<Cow<'static, str>>,
        service: impl Into<Cow<'static, str>>,
    ) -> Self {
        Metadata {
            operation: operation.into(),
            service: service.into(),
        }
    }
}

#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct Parts<H> {
    pub response_handler: H,
    pub metadata: Option<Metadata>,
}

/// An HTTP request paired with the handler that parses its response
#[derive(Debug)]
pub struct Operation<H> {
    request: Request,
    parts: Parts<H>,
}

impl<H> Operation<H> {
    pub fn new(request: Request, response_handler: H) -> Self {
        Operation {
            request,
            parts: Parts {
                response_handler,
                metadata: None,
            },
        }
    }

    pub fn into_request_response(self) -> (Request, Parts<H>) {
        (self.request, self.parts)
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.parts.metadata = Some(metadata);
        self
    }

    pub fn metadata(&self) -> Option<&Metadata> {
        self.parts.metadata.as_ref()
    }

    pub fn request(&self) -> &Request {
        &self.request
    }

    pub fn request_mut(&mut self) -> &mut Request {
        &mut self.request
    }

    pub fn properties(&self) -> MutexGuard<'_, PropertyBag> {
        self.request.properties()
    }

    pub fn properties_mut(&mut self) -> MutexGuard<'_, PropertyBag> {
        self.request.properties_mut()
    }
}

/// Error returned while turning an input into an [`Operation`]
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("`{field}` was missing. {details}")]
    MissingField {
        field: &'static str,
        details: &'static str,
    },
    #[error("`{field}` was invalid: {details}")]
    InvalidField { field: &'static str, details: String },
    #[error("failed to serialize input: {0}")]
    SerializationError(#[source] Box<dyn Error + Send + Sync + 'static>),
    #[error("failed to construct the HTTP request: {0}")]
    InvalidRequest(#[from] http::Error),
}

#[derive(Debug)]
pub struct Request {
    /// The underlying HTTP Request
    inner: http::Request<SdkBody>,

    /// Property bag of configuration options
    ///
    /// Middleware can read and write from the property bag and use its
    /// contents to augment the request (see `Request::augment`)
    properties: Arc<Mutex<PropertyBag>>,
}

impl Request {
    pub fn new(base: http::Request<SdkBody>) -> Self {
        Request {
            inner: base,
            properties: Arc::new(Mutex::new(PropertyBag::new())),
        }
    }

    pub fn from_parts(inner: http::Request<SdkBody>, properties: Arc<Mutex<PropertyBag>>) -> Self {
        Request { inner, properties }
    }

    /// Transform the inner HTTP request, with access to the property bag
    ///
    /// The closure receives the owned `http::Request` and a mutable borrow of the properties.
    pub fn augment<T>(
        self,
        f: impl FnOnce(http::Request<SdkBody>, &mut PropertyBag) -> Result<http::Request<SdkBody>, T>,
    ) -> Result<Request, T> {
        let inner = {
            let properties: &mut PropertyBag = &mut self.properties.lock().unwrap();
            f(self.inner, properties)?
        };
        Ok(Request {
            inner,
            properties: self.properties,
        })
    }

    pub fn properties_mut(&mut self) -> MutexGuard<'_, PropertyBag> {
        self.properties.lock().unwrap()
    }

    pub fn properties(&self) -> MutexGuard<'_, PropertyBag> {
        self.properties.lock().unwrap()
    }

    pub fn http(&self) -> &http::Request<SdkBody> {
        &self.inner
    }

    pub fn http_mut(&mut self) -> &mut http::Request<SdkBody> {
        &mut self.inner
    }

    /// Clone the request if its body can be cloned. The property bag is shared with the clone.
    pub fn try_clone(&self) -> Option<Request> {
        let cloned_body = self.inner.body().try_clone()?;
        let mut cloned_request = http::Request::builder()
            .uri(self.inner.uri().clone())
            .method(self.inner.method());
        *cloned_request.headers_mut()? = self.inner.headers().clone();
        let inner = cloned_request.body(cloned_body).ok()?;
        Some(Request {
            inner,
            properties: self.properties.clone(),
        })
    }

    pub fn into_parts(self) -> (http::Request<SdkBody>, Arc<Mutex<PropertyBag>>) {
        (self.inner, self.properties)
    }
}

#[cfg(test)]
mod test {
    use crate::body::SdkBody;
    use crate::operation::{BuildError, Metadata, Operation, Request};
    use http::header::{CONTENT_LENGTH, CONTENT_TYPE};
    use http::Uri;
    use std::convert::Infallible;

    #[test]
    fn try_clone_clones_all_data() {
        let mut request = Request::new(
            http::Request::builder()
                .uri(Uri::from_static("http://www.amazon.com"))
                .method("POST")
                .header(CONTENT_LENGTH, 456)
                .header(CONTENT_TYPE, "application/x-amz-json-1.1")
                .body(SdkBody::from("hello world!"))
                .expect("valid request"),
        );
        request.properties_mut().insert("hello");
        let cloned = request.try_clone().expect("request is cloneable");

        let (request, config) = cloned.into_parts();
        assert_eq!(request.uri(), &Uri::from_static("http://www.amazon.com"));
        assert_eq!(request.method(), "POST");
        assert_eq!(request.headers().len(), 2);
        assert_eq!(
            request.headers().get(CONTENT_TYPE).unwrap(),
            "application/x-amz-json-1.1"
        );
        assert_eq!(request.headers().get(CONTENT_LENGTH).unwrap(), "456");
        assert_eq!(request.body().bytes().unwrap(), "hello world!".as_bytes());
        assert_eq!(config.lock().unwrap().get::<&str>(), Some(&"hello"));
    }

    #[test]
    fn augment_shares_properties() {
        let request = Request::new(http::Request::new(SdkBody::empty()));
        let request = request
            .augment(|mut req, props| {
                props.insert(7u32);
                req.headers_mut()
                    .insert("x-amz-target", "Service.Op".parse().unwrap());
                Result::<_, Infallible>::Ok(req)
            })
            .unwrap();
        assert_eq!(request.properties().get::<u32>(), Some(&7));
        assert_eq!(request.http().headers()["x-amz-target"], "Service.Op");
    }

    #[test]
    fn operation_metadata() {
        let op = Operation::new(Request::new(http::Request::new(SdkBody::empty())), ())
            .with_metadata(Metadata::new("ListJobs", "snowball"));
        let metadata = op.metadata().expect("metadata was set");
        assert_eq!(metadata.name(), "ListJobs");
        assert_eq!(metadata.service(), "snowball");
    }

    #[test]
    fn build_error_messages() {
        let err = BuildError::MissingField {
            field: "image_arn",
            details: "image_arn was not specified but it is required when building GetImagePolicyInput",
        };
        assert_eq!(
            err.to_string(),
            "`image_arn` was missing. image_arn was not specified but it is required when building GetImagePolicyInput"
        );
    }
}
