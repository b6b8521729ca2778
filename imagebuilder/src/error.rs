/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Operation errors and the modeled exceptions they wrap
//!
//! Exception bodies read their message from `message` or `Message`. A body carrying both keys is
//! rejected as a duplicate field, so the operation error falls back to `Unhandled` while
//! `code()`, `message()` and `request_id()` still report what the response carried.

/// Error type for the `CancelImageCreation` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct CancelImageCreationError {
    /// Kind of error that occurred.
    pub kind: CancelImageCreationErrorKind,
    /// Additional metadata about the error, including error code, message, and request ID.
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `CancelImageCreation` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum CancelImageCreationErrorKind {
    ServiceException(crate::error::ServiceException),
    ClientException(crate::error::ClientException),
    ServiceUnavailableException(crate::error::ServiceUnavailableException),
    InvalidRequestException(crate::error::InvalidRequestException),
    ForbiddenException(crate::error::ForbiddenException),
    CallRateLimitExceededException(crate::error::CallRateLimitExceededException),
    IdempotentParameterMismatchException(crate::error::IdempotentParameterMismatchException),
    ResourceInUseException(crate::error::ResourceInUseException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for CancelImageCreationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            CancelImageCreationErrorKind::ServiceException(_inner) => std::fmt::Display::fmt(_inner, f),
            CancelImageCreationErrorKind::ClientException(_inner) => std::fmt::Display::fmt(_inner, f),
            CancelImageCreationErrorKind::ServiceUnavailableException(_inner) => std::fmt::Display::fmt(_inner, f),
            CancelImageCreationErrorKind::InvalidRequestException(_inner) => std::fmt::Display::fmt(_inner, f),
            CancelImageCreationErrorKind::ForbiddenException(_inner) => std::fmt::Display::fmt(_inner, f),
            CancelImageCreationErrorKind::CallRateLimitExceededException(_inner) => std::fmt::Display::fmt(_inner, f),
            CancelImageCreationErrorKind::IdempotentParameterMismatchException(_inner) => std::fmt::Display::fmt(_inner, f),
            CancelImageCreationErrorKind::ResourceInUseException(_inner) => std::fmt::Display::fmt(_inner, f),
            CancelImageCreationErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl CancelImageCreationError {
    pub fn new(kind: CancelImageCreationErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: CancelImageCreationErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: CancelImageCreationErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_service_exception(&self) -> bool {
        matches!(&self.kind, CancelImageCreationErrorKind::ServiceException(_))
    }
    pub fn is_client_exception(&self) -> bool {
        matches!(&self.kind, CancelImageCreationErrorKind::ClientException(_))
    }
    pub fn is_service_unavailable_exception(&self) -> bool {
        matches!(&self.kind, CancelImageCreationErrorKind::ServiceUnavailableException(_))
    }
    pub fn is_invalid_request_exception(&self) -> bool {
        matches!(&self.kind, CancelImageCreationErrorKind::InvalidRequestException(_))
    }
    pub fn is_forbidden_exception(&self) -> bool {
        matches!(&self.kind, CancelImageCreationErrorKind::ForbiddenException(_))
    }
    pub fn is_call_rate_limit_exceeded_exception(&self) -> bool {
        matches!(&self.kind, CancelImageCreationErrorKind::CallRateLimitExceededException(_))
    }
    pub fn is_idempotent_parameter_mismatch_exception(&self) -> bool {
        matches!(&self.kind, CancelImageCreationErrorKind::IdempotentParameterMismatchException(_))
    }
    pub fn is_resource_in_use_exception(&self) -> bool {
        matches!(&self.kind, CancelImageCreationErrorKind::ResourceInUseException(_))
    }
}
impl std::error::Error for CancelImageCreationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            CancelImageCreationErrorKind::ServiceException(_inner) => Some(_inner),
            CancelImageCreationErrorKind::ClientException(_inner) => Some(_inner),
            CancelImageCreationErrorKind::ServiceUnavailableException(_inner) => Some(_inner),
            CancelImageCreationErrorKind::InvalidRequestException(_inner) => Some(_inner),
            CancelImageCreationErrorKind::ForbiddenException(_inner) => Some(_inner),
            CancelImageCreationErrorKind::CallRateLimitExceededException(_inner) => Some(_inner),
            CancelImageCreationErrorKind::IdempotentParameterMismatchException(_inner) => Some(_inner),
            CancelImageCreationErrorKind::ResourceInUseException(_inner) => Some(_inner),
            CancelImageCreationErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `CreateComponent` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct CreateComponentError {
    /// Kind of error that occurred.
    pub kind: CreateComponentErrorKind,
    /// Additional metadata about the error, including error code, message, and request ID.
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `CreateComponent` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum CreateComponentErrorKind {
    ServiceException(crate::error::ServiceException),
    ClientException(crate::error::ClientException),
    ServiceUnavailableException(crate::error::ServiceUnavailableException),
    InvalidRequestException(crate::error::InvalidRequestException),
    ForbiddenException(crate::error::ForbiddenException),
    CallRateLimitExceededException(crate::error::CallRateLimitExceededException),
    IdempotentParameterMismatchException(crate::error::IdempotentParameterMismatchException),
    ResourceInUseException(crate::error::ResourceInUseException),
    InvalidVersionNumberException(crate::error::InvalidVersionNumberException),
    InvalidParameterCombinationException(crate::error::InvalidParameterCombinationException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for CreateComponentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            CreateComponentErrorKind::ServiceException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateComponentErrorKind::ClientException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateComponentErrorKind::ServiceUnavailableException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateComponentErrorKind::InvalidRequestException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateComponentErrorKind::ForbiddenException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateComponentErrorKind::CallRateLimitExceededException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateComponentErrorKind::IdempotentParameterMismatchException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateComponentErrorKind::ResourceInUseException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateComponentErrorKind::InvalidVersionNumberException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateComponentErrorKind::InvalidParameterCombinationException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateComponentErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl CreateComponentError {
    pub fn new(kind: CreateComponentErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: CreateComponentErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: CreateComponentErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_service_exception(&self) -> bool {
        matches!(&self.kind, CreateComponentErrorKind::ServiceException(_))
    }
    pub fn is_client_exception(&self) -> bool {
        matches!(&self.kind, CreateComponentErrorKind::ClientException(_))
    }
    pub fn is_service_unavailable_exception(&self) -> bool {
        matches!(&self.kind, CreateComponentErrorKind::ServiceUnavailableException(_))
    }
    pub fn is_invalid_request_exception(&self) -> bool {
        matches!(&self.kind, CreateComponentErrorKind::InvalidRequestException(_))
    }
    pub fn is_forbidden_exception(&self) -> bool {
        matches!(&self.kind, CreateComponentErrorKind::ForbiddenException(_))
    }
    pub fn is_call_rate_limit_exceeded_exception(&self) -> bool {
        matches!(&self.kind, CreateComponentErrorKind::CallRateLimitExceededException(_))
    }
    pub fn is_idempotent_parameter_mismatch_exception(&self) -> bool {
        matches!(&self.kind, CreateComponentErrorKind::IdempotentParameterMismatchException(_))
    }
    pub fn is_resource_in_use_exception(&self) -> bool {
        matches!(&self.kind, CreateComponentErrorKind::ResourceInUseException(_))
    }
    pub fn is_invalid_version_number_exception(&self) -> bool {
        matches!(&self.kind, CreateComponentErrorKind::InvalidVersionNumberException(_))
    }
    pub fn is_invalid_parameter_combination_exception(&self) -> bool {
        matches!(&self.kind, CreateComponentErrorKind::InvalidParameterCombinationException(_))
    }
}
impl std::error::Error for CreateComponentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            CreateComponentErrorKind::ServiceException(_inner) => Some(_inner),
            CreateComponentErrorKind::ClientException(_inner) => Some(_inner),
            CreateComponentErrorKind::ServiceUnavailableException(_inner) => Some(_inner),
            CreateComponentErrorKind::InvalidRequestException(_inner) => Some(_inner),
            CreateComponentErrorKind::ForbiddenException(_inner) => Some(_inner),
            CreateComponentErrorKind::CallRateLimitExceededException(_inner) => Some(_inner),
            CreateComponentErrorKind::IdempotentParameterMismatchException(_inner) => Some(_inner),
            CreateComponentErrorKind::ResourceInUseException(_inner) => Some(_inner),
            CreateComponentErrorKind::InvalidVersionNumberException(_inner) => Some(_inner),
            CreateComponentErrorKind::InvalidParameterCombinationException(_inner) => Some(_inner),
            CreateComponentErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `CreateDistributionConfiguration` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct CreateDistributionConfigurationError {
    /// Kind of error that occurred.
    pub kind: CreateDistributionConfigurationErrorKind,
    /// Additional metadata about the error, including error code, message, and request ID.
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `CreateDistributionConfiguration` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum CreateDistributionConfigurationErrorKind {
    ServiceException(crate::error::ServiceException),
    ClientException(crate::error::ClientException),
    ServiceUnavailableException(crate::error::ServiceUnavailableException),
    InvalidRequestException(crate::error::InvalidRequestException),
    ForbiddenException(crate::error::ForbiddenException),
    CallRateLimitExceededException(crate::error::CallRateLimitExceededException),
    IdempotentParameterMismatchException(crate::error::IdempotentParameterMismatchException),
    ResourceInUseException(crate::error::ResourceInUseException),
    ResourceAlreadyExistsException(crate::error::ResourceAlreadyExistsException),
    InvalidParameterCombinationException(crate::error::InvalidParameterCombinationException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for CreateDistributionConfigurationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            CreateDistributionConfigurationErrorKind::ServiceException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateDistributionConfigurationErrorKind::ClientException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateDistributionConfigurationErrorKind::ServiceUnavailableException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateDistributionConfigurationErrorKind::InvalidRequestException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateDistributionConfigurationErrorKind::ForbiddenException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateDistributionConfigurationErrorKind::CallRateLimitExceededException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateDistributionConfigurationErrorKind::IdempotentParameterMismatchException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateDistributionConfigurationErrorKind::ResourceInUseException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateDistributionConfigurationErrorKind::ResourceAlreadyExistsException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateDistributionConfigurationErrorKind::InvalidParameterCombinationException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateDistributionConfigurationErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl CreateDistributionConfigurationError {
    pub fn new(kind: CreateDistributionConfigurationErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: CreateDistributionConfigurationErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: CreateDistributionConfigurationErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_service_exception(&self) -> bool {
        matches!(&self.kind, CreateDistributionConfigurationErrorKind::ServiceException(_))
    }
    pub fn is_client_exception(&self) -> bool {
        matches!(&self.kind, CreateDistributionConfigurationErrorKind::ClientException(_))
    }
    pub fn is_service_unavailable_exception(&self) -> bool {
        matches!(&self.kind, CreateDistributionConfigurationErrorKind::ServiceUnavailableException(_))
    }
    pub fn is_invalid_request_exception(&self) -> bool {
        matches!(&self.kind, CreateDistributionConfigurationErrorKind::InvalidRequestException(_))
    }
    pub fn is_forbidden_exception(&self) -> bool {
        matches!(&self.kind, CreateDistributionConfigurationErrorKind::ForbiddenException(_))
    }
    pub fn is_call_rate_limit_exceeded_exception(&self) -> bool {
        matches!(&self.kind, CreateDistributionConfigurationErrorKind::CallRateLimitExceededException(_))
    }
    pub fn is_idempotent_parameter_mismatch_exception(&self) -> bool {
        matches!(&self.kind, CreateDistributionConfigurationErrorKind::IdempotentParameterMismatchException(_))
    }
    pub fn is_resource_in_use_exception(&self) -> bool {
        matches!(&self.kind, CreateDistributionConfigurationErrorKind::ResourceInUseException(_))
    }
    pub fn is_resource_already_exists_exception(&self) -> bool {
        matches!(&self.kind, CreateDistributionConfigurationErrorKind::ResourceAlreadyExistsException(_))
    }
    pub fn is_invalid_parameter_combination_exception(&self) -> bool {
        matches!(&self.kind, CreateDistributionConfigurationErrorKind::InvalidParameterCombinationException(_))
    }
}
impl std::error::Error for CreateDistributionConfigurationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            CreateDistributionConfigurationErrorKind::ServiceException(_inner) => Some(_inner),
            CreateDistributionConfigurationErrorKind::ClientException(_inner) => Some(_inner),
            CreateDistributionConfigurationErrorKind::ServiceUnavailableException(_inner) => Some(_inner),
            CreateDistributionConfigurationErrorKind::InvalidRequestException(_inner) => Some(_inner),
            CreateDistributionConfigurationErrorKind::ForbiddenException(_inner) => Some(_inner),
            CreateDistributionConfigurationErrorKind::CallRateLimitExceededException(_inner) => Some(_inner),
            CreateDistributionConfigurationErrorKind::IdempotentParameterMismatchException(_inner) => Some(_inner),
            CreateDistributionConfigurationErrorKind::ResourceInUseException(_inner) => Some(_inner),
            CreateDistributionConfigurationErrorKind::ResourceAlreadyExistsException(_inner) => Some(_inner),
            CreateDistributionConfigurationErrorKind::InvalidParameterCombinationException(_inner) => Some(_inner),
            CreateDistributionConfigurationErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `CreateImage` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct CreateImageError {
    /// Kind of error that occurred.
    pub kind: CreateImageErrorKind,
    /// Additional metadata about the error, including error code, message, and request ID.
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `CreateImage` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum CreateImageErrorKind {
    ServiceException(crate::error::ServiceException),
    ClientException(crate::error::ClientException),
    ServiceUnavailableException(crate::error::ServiceUnavailableException),
    InvalidRequestException(crate::error::InvalidRequestException),
    ForbiddenException(crate::error::ForbiddenException),
    CallRateLimitExceededException(crate::error::CallRateLimitExceededException),
    IdempotentParameterMismatchException(crate::error::IdempotentParameterMismatchException),
    ResourceInUseException(crate::error::ResourceInUseException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for CreateImageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            CreateImageErrorKind::ServiceException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateImageErrorKind::ClientException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateImageErrorKind::ServiceUnavailableException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateImageErrorKind::InvalidRequestException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateImageErrorKind::ForbiddenException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateImageErrorKind::CallRateLimitExceededException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateImageErrorKind::IdempotentParameterMismatchException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateImageErrorKind::ResourceInUseException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateImageErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl CreateImageError {
    pub fn new(kind: CreateImageErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: CreateImageErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: CreateImageErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_service_exception(&self) -> bool {
        matches!(&self.kind, CreateImageErrorKind::ServiceException(_))
    }
    pub fn is_client_exception(&self) -> bool {
        matches!(&self.kind, CreateImageErrorKind::ClientException(_))
    }
    pub fn is_service_unavailable_exception(&self) -> bool {
        matches!(&self.kind, CreateImageErrorKind::ServiceUnavailableException(_))
    }
    pub fn is_invalid_request_exception(&self) -> bool {
        matches!(&self.kind, CreateImageErrorKind::InvalidRequestException(_))
    }
    pub fn is_forbidden_exception(&self) -> bool {
        matches!(&self.kind, CreateImageErrorKind::ForbiddenException(_))
    }
    pub fn is_call_rate_limit_exceeded_exception(&self) -> bool {
        matches!(&self.kind, CreateImageErrorKind::CallRateLimitExceededException(_))
    }
    pub fn is_idempotent_parameter_mismatch_exception(&self) -> bool {
        matches!(&self.kind, CreateImageErrorKind::IdempotentParameterMismatchException(_))
    }
    pub fn is_resource_in_use_exception(&self) -> bool {
        matches!(&self.kind, CreateImageErrorKind::ResourceInUseException(_))
    }
}
impl std::error::Error for CreateImageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            CreateImageErrorKind::ServiceException(_inner) => Some(_inner),
            CreateImageErrorKind::ClientException(_inner) => Some(_inner),
            CreateImageErrorKind::ServiceUnavailableException(_inner) => Some(_inner),
            CreateImageErrorKind::InvalidRequestException(_inner) => Some(_inner),
            CreateImageErrorKind::ForbiddenException(_inner) => Some(_inner),
            CreateImageErrorKind::CallRateLimitExceededException(_inner) => Some(_inner),
            CreateImageErrorKind::IdempotentParameterMismatchException(_inner) => Some(_inner),
            CreateImageErrorKind::ResourceInUseException(_inner) => Some(_inner),
            CreateImageErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `CreateImagePipeline` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct CreateImagePipelineError {
    /// Kind of error that occurred.
    pub kind: CreateImagePipelineErrorKind,
    /// Additional metadata about the error, including error code, message, and request ID.
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `CreateImagePipeline` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum CreateImagePipelineErrorKind {
    ServiceException(crate::error::ServiceException),
    ClientException(crate::error::ClientException),
    ServiceUnavailableException(crate::error::ServiceUnavailableException),
    InvalidRequestException(crate::error::InvalidRequestException),
    ForbiddenException(crate::error::ForbiddenException),
    CallRateLimitExceededException(crate::error::CallRateLimitExceededException),
    IdempotentParameterMismatchException(crate::error::IdempotentParameterMismatchException),
    ResourceInUseException(crate::error::ResourceInUseException),
    ResourceAlreadyExistsException(crate::error::ResourceAlreadyExistsException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for CreateImagePipelineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            CreateImagePipelineErrorKind::ServiceException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateImagePipelineErrorKind::ClientException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateImagePipelineErrorKind::ServiceUnavailableException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateImagePipelineErrorKind::InvalidRequestException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateImagePipelineErrorKind::ForbiddenException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateImagePipelineErrorKind::CallRateLimitExceededException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateImagePipelineErrorKind::IdempotentParameterMismatchException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateImagePipelineErrorKind::ResourceInUseException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateImagePipelineErrorKind::ResourceAlreadyExistsException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateImagePipelineErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl CreateImagePipelineError {
    pub fn new(kind: CreateImagePipelineErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: CreateImagePipelineErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: CreateImagePipelineErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_service_exception(&self) -> bool {
        matches!(&self.kind, CreateImagePipelineErrorKind::ServiceException(_))
    }
    pub fn is_client_exception(&self) -> bool {
        matches!(&self.kind, CreateImagePipelineErrorKind::ClientException(_))
    }
    pub fn is_service_unavailable_exception(&self) -> bool {
        matches!(&self.kind, CreateImagePipelineErrorKind::ServiceUnavailableException(_))
    }
    pub fn is_invalid_request_exception(&self) -> bool {
        matches!(&self.kind, CreateImagePipelineErrorKind::InvalidRequestException(_))
    }
    pub fn is_forbidden_exception(&self) -> bool {
        matches!(&self.kind, CreateImagePipelineErrorKind::ForbiddenException(_))
    }
    pub fn is_call_rate_limit_exceeded_exception(&self) -> bool {
        matches!(&self.kind, CreateImagePipelineErrorKind::CallRateLimitExceededException(_))
    }
    pub fn is_idempotent_parameter_mismatch_exception(&self) -> bool {
        matches!(&self.kind, CreateImagePipelineErrorKind::IdempotentParameterMismatchException(_))
    }
    pub fn is_resource_in_use_exception(&self) -> bool {
        matches!(&self.kind, CreateImagePipelineErrorKind::ResourceInUseException(_))
    }
    pub fn is_resource_already_exists_exception(&self) -> bool {
        matches!(&self.kind, CreateImagePipelineErrorKind::ResourceAlreadyExistsException(_))
    }
}
impl std::error::Error for CreateImagePipelineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            CreateImagePipelineErrorKind::ServiceException(_inner) => Some(_inner),
            CreateImagePipelineErrorKind::ClientException(_inner) => Some(_inner),
            CreateImagePipelineErrorKind::ServiceUnavailableException(_inner) => Some(_inner),
            CreateImagePipelineErrorKind::InvalidRequestException(_inner) => Some(_inner),
            CreateImagePipelineErrorKind::ForbiddenException(_inner) => Some(_inner),
            CreateImagePipelineErrorKind::CallRateLimitExceededException(_inner) => Some(_inner),
            CreateImagePipelineErrorKind::IdempotentParameterMismatchException(_inner) => Some(_inner),
            CreateImagePipelineErrorKind::ResourceInUseException(_inner) => Some(_inner),
            CreateImagePipelineErrorKind::ResourceAlreadyExistsException(_inner) => Some(_inner),
            CreateImagePipelineErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `CreateImageRecipe` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct CreateImageRecipeError {
    /// Kind of error that occurred.
    pub kind: CreateImageRecipeErrorKind,
    /// Additional metadata about the error, including error code, message, and request ID.
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `CreateImageRecipe` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum CreateImageRecipeErrorKind {
    ServiceException(crate::error::ServiceException),
    ClientException(crate::error::ClientException),
    ServiceUnavailableException(crate::error::ServiceUnavailableException),
    InvalidRequestException(crate::error::InvalidRequestException),
    ForbiddenException(crate::error::ForbiddenException),
    CallRateLimitExceededException(crate::error::CallRateLimitExceededException),
    IdempotentParameterMismatchException(crate::error::IdempotentParameterMismatchException),
    ResourceInUseException(crate::error::ResourceInUseException),
    InvalidVersionNumberException(crate::error::InvalidVersionNumberException),
    ResourceAlreadyExistsException(crate::error::ResourceAlreadyExistsException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for CreateImageRecipeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            CreateImageRecipeErrorKind::ServiceException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateImageRecipeErrorKind::ClientException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateImageRecipeErrorKind::ServiceUnavailableException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateImageRecipeErrorKind::InvalidRequestException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateImageRecipeErrorKind::ForbiddenException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateImageRecipeErrorKind::CallRateLimitExceededException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateImageRecipeErrorKind::IdempotentParameterMismatchException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateImageRecipeErrorKind::ResourceInUseException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateImageRecipeErrorKind::InvalidVersionNumberException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateImageRecipeErrorKind::ResourceAlreadyExistsException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateImageRecipeErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl CreateImageRecipeError {
    pub fn new(kind: CreateImageRecipeErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: CreateImageRecipeErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: CreateImageRecipeErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_service_exception(&self) -> bool {
        matches!(&self.kind, CreateImageRecipeErrorKind::ServiceException(_))
    }
    pub fn is_client_exception(&self) -> bool {
        matches!(&self.kind, CreateImageRecipeErrorKind::ClientException(_))
    }
    pub fn is_service_unavailable_exception(&self) -> bool {
        matches!(&self.kind, CreateImageRecipeErrorKind::ServiceUnavailableException(_))
    }
    pub fn is_invalid_request_exception(&self) -> bool {
        matches!(&self.kind, CreateImageRecipeErrorKind::InvalidRequestException(_))
    }
    pub fn is_forbidden_exception(&self) -> bool {
        matches!(&self.kind, CreateImageRecipeErrorKind::ForbiddenException(_))
    }
    pub fn is_call_rate_limit_exceeded_exception(&self) -> bool {
        matches!(&self.kind, CreateImageRecipeErrorKind::CallRateLimitExceededException(_))
    }
    pub fn is_idempotent_parameter_mismatch_exception(&self) -> bool {
        matches!(&self.kind, CreateImageRecipeErrorKind::IdempotentParameterMismatchException(_))
    }
    pub fn is_resource_in_use_exception(&self) -> bool {
        matches!(&self.kind, CreateImageRecipeErrorKind::ResourceInUseException(_))
    }
    pub fn is_invalid_version_number_exception(&self) -> bool {
        matches!(&self.kind, CreateImageRecipeErrorKind::InvalidVersionNumberException(_))
    }
    pub fn is_resource_already_exists_exception(&self) -> bool {
        matches!(&self.kind, CreateImageRecipeErrorKind::ResourceAlreadyExistsException(_))
    }
}
impl std::error::Error for CreateImageRecipeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            CreateImageRecipeErrorKind::ServiceException(_inner) => Some(_inner),
            CreateImageRecipeErrorKind::ClientException(_inner) => Some(_inner),
            CreateImageRecipeErrorKind::ServiceUnavailableException(_inner) => Some(_inner),
            CreateImageRecipeErrorKind::InvalidRequestException(_inner) => Some(_inner),
            CreateImageRecipeErrorKind::ForbiddenException(_inner) => Some(_inner),
            CreateImageRecipeErrorKind::CallRateLimitExceededException(_inner) => Some(_inner),
            CreateImageRecipeErrorKind::IdempotentParameterMismatchException(_inner) => Some(_inner),
            CreateImageRecipeErrorKind::ResourceInUseException(_inner) => Some(_inner),
            CreateImageRecipeErrorKind::InvalidVersionNumberException(_inner) => Some(_inner),
            CreateImageRecipeErrorKind::ResourceAlreadyExistsException(_inner) => Some(_inner),
            CreateImageRecipeErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `CreateInfrastructureConfiguration` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct CreateInfrastructureConfigurationError {
    /// Kind of error that occurred.
    pub kind: CreateInfrastructureConfigurationErrorKind,
    /// Additional metadata about the error, including error code, message, and request ID.
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `CreateInfrastructureConfiguration` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum CreateInfrastructureConfigurationErrorKind {
    ServiceException(crate::error::ServiceException),
    ClientException(crate::error::ClientException),
    ServiceUnavailableException(crate::error::ServiceUnavailableException),
    InvalidRequestException(crate::error::InvalidRequestException),
    ForbiddenException(crate::error::ForbiddenException),
    CallRateLimitExceededException(crate::error::CallRateLimitExceededException),
    IdempotentParameterMismatchException(crate::error::IdempotentParameterMismatchException),
    ResourceInUseException(crate::error::ResourceInUseException),
    ResourceAlreadyExistsException(crate::error::ResourceAlreadyExistsException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for CreateInfrastructureConfigurationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            CreateInfrastructureConfigurationErrorKind::ServiceException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateInfrastructureConfigurationErrorKind::ClientException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateInfrastructureConfigurationErrorKind::ServiceUnavailableException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateInfrastructureConfigurationErrorKind::InvalidRequestException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateInfrastructureConfigurationErrorKind::ForbiddenException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateInfrastructureConfigurationErrorKind::CallRateLimitExceededException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateInfrastructureConfigurationErrorKind::IdempotentParameterMismatchException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateInfrastructureConfigurationErrorKind::ResourceInUseException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateInfrastructureConfigurationErrorKind::ResourceAlreadyExistsException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateInfrastructureConfigurationErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl CreateInfrastructureConfigurationError {
    pub fn new(kind: CreateInfrastructureConfigurationErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: CreateInfrastructureConfigurationErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: CreateInfrastructureConfigurationErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_service_exception(&self) -> bool {
        matches!(&self.kind, CreateInfrastructureConfigurationErrorKind::ServiceException(_))
    }
    pub fn is_client_exception(&self) -> bool {
        matches!(&self.kind, CreateInfrastructureConfigurationErrorKind::ClientException(_))
    }
    pub fn is_service_unavailable_exception(&self) -> bool {
        matches!(&self.kind, CreateInfrastructureConfigurationErrorKind::ServiceUnavailableException(_))
    }
    pub fn is_invalid_request_exception(&self) -> bool {
        matches!(&self.kind, CreateInfrastructureConfigurationErrorKind::InvalidRequestException(_))
    }
    pub fn is_forbidden_exception(&self) -> bool {
        matches!(&self.kind, CreateInfrastructureConfigurationErrorKind::ForbiddenException(_))
    }
    pub fn is_call_rate_limit_exceeded_exception(&self) -> bool {
        matches!(&self.kind, CreateInfrastructureConfigurationErrorKind::CallRateLimitExceededException(_))
    }
    pub fn is_idempotent_parameter_mismatch_exception(&self) -> bool {
        matches!(&self.kind, CreateInfrastructureConfigurationErrorKind::IdempotentParameterMismatchException(_))
    }
    pub fn is_resource_in_use_exception(&self) -> bool {
        matches!(&self.kind, CreateInfrastructureConfigurationErrorKind::ResourceInUseException(_))
    }
    pub fn is_resource_already_exists_exception(&self) -> bool {
        matches!(&self.kind, CreateInfrastructureConfigurationErrorKind::ResourceAlreadyExistsException(_))
    }
}
impl std::error::Error for CreateInfrastructureConfigurationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            CreateInfrastructureConfigurationErrorKind::ServiceException(_inner) => Some(_inner),
            CreateInfrastructureConfigurationErrorKind::ClientException(_inner) => Some(_inner),
            CreateInfrastructureConfigurationErrorKind::ServiceUnavailableException(_inner) => Some(_inner),
            CreateInfrastructureConfigurationErrorKind::InvalidRequestException(_inner) => Some(_inner),
            CreateInfrastructureConfigurationErrorKind::ForbiddenException(_inner) => Some(_inner),
            CreateInfrastructureConfigurationErrorKind::CallRateLimitExceededException(_inner) => Some(_inner),
            CreateInfrastructureConfigurationErrorKind::IdempotentParameterMismatchException(_inner) => Some(_inner),
            CreateInfrastructureConfigurationErrorKind::ResourceInUseException(_inner) => Some(_inner),
            CreateInfrastructureConfigurationErrorKind::ResourceAlreadyExistsException(_inner) => Some(_inner),
            CreateInfrastructureConfigurationErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `DeleteComponent` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct DeleteComponentError {
    /// Kind of error that occurred.
    pub kind: DeleteComponentErrorKind,
    /// Additional metadata about the error, including error code, message, and request ID.
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `DeleteComponent` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum DeleteComponentErrorKind {
    ServiceException(crate::error::ServiceException),
    ClientException(crate::error::ClientException),
    ServiceUnavailableException(crate::error::ServiceUnavailableException),
    InvalidRequestException(crate::error::InvalidRequestException),
    ForbiddenException(crate::error::ForbiddenException),
    CallRateLimitExceededException(crate::error::CallRateLimitExceededException),
    ResourceDependencyException(crate::error::ResourceDependencyException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for DeleteComponentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DeleteComponentErrorKind::ServiceException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteComponentErrorKind::ClientException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteComponentErrorKind::ServiceUnavailableException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteComponentErrorKind::InvalidRequestException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteComponentErrorKind::ForbiddenException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteComponentErrorKind::CallRateLimitExceededException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteComponentErrorKind::ResourceDependencyException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteComponentErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl DeleteComponentError {
    pub fn new(kind: DeleteComponentErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DeleteComponentErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DeleteComponentErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_service_exception(&self) -> bool {
        matches!(&self.kind, DeleteComponentErrorKind::ServiceException(_))
    }
    pub fn is_client_exception(&self) -> bool {
        matches!(&self.kind, DeleteComponentErrorKind::ClientException(_))
    }
    pub fn is_service_unavailable_exception(&self) -> bool {
        matches!(&self.kind, DeleteComponentErrorKind::ServiceUnavailableException(_))
    }
    pub fn is_invalid_request_exception(&self) -> bool {
        matches!(&self.kind, DeleteComponentErrorKind::InvalidRequestException(_))
    }
    pub fn is_forbidden_exception(&self) -> bool {
        matches!(&self.kind, DeleteComponentErrorKind::ForbiddenException(_))
    }
    pub fn is_call_rate_limit_exceeded_exception(&self) -> bool {
        matches!(&self.kind, DeleteComponentErrorKind::CallRateLimitExceededException(_))
    }
    pub fn is_resource_dependency_exception(&self) -> bool {
        matches!(&self.kind, DeleteComponentErrorKind::ResourceDependencyException(_))
    }
}
impl std::error::Error for DeleteComponentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DeleteComponentErrorKind::ServiceException(_inner) => Some(_inner),
            DeleteComponentErrorKind::ClientException(_inner) => Some(_inner),
            DeleteComponentErrorKind::ServiceUnavailableException(_inner) => Some(_inner),
            DeleteComponentErrorKind::InvalidRequestException(_inner) => Some(_inner),
            DeleteComponentErrorKind::ForbiddenException(_inner) => Some(_inner),
            DeleteComponentErrorKind::CallRateLimitExceededException(_inner) => Some(_inner),
            DeleteComponentErrorKind::ResourceDependencyException(_inner) => Some(_inner),
            DeleteComponentErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `DeleteDistributionConfiguration` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct DeleteDistributionConfigurationError {
    /// Kind of error that occurred.
    pub kind: DeleteDistributionConfigurationErrorKind,
    /// Additional metadata about the error, including error code, message, and request ID.
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `DeleteDistributionConfiguration` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum DeleteDistributionConfigurationErrorKind {
    ServiceException(crate::error::ServiceException),
    ClientException(crate::error::ClientException),
    ServiceUnavailableException(crate::error::ServiceUnavailableException),
    InvalidRequestException(crate::error::InvalidRequestException),
    ForbiddenException(crate::error::ForbiddenException),
    CallRateLimitExceededException(crate::error::CallRateLimitExceededException),
    ResourceDependencyException(crate::error::ResourceDependencyException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for DeleteDistributionConfigurationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DeleteDistributionConfigurationErrorKind::ServiceException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteDistributionConfigurationErrorKind::ClientException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteDistributionConfigurationErrorKind::ServiceUnavailableException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteDistributionConfigurationErrorKind::InvalidRequestException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteDistributionConfigurationErrorKind::ForbiddenException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteDistributionConfigurationErrorKind::CallRateLimitExceededException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteDistributionConfigurationErrorKind::ResourceDependencyException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteDistributionConfigurationErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl DeleteDistributionConfigurationError {
    pub fn new(kind: DeleteDistributionConfigurationErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DeleteDistributionConfigurationErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DeleteDistributionConfigurationErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_service_exception(&self) -> bool {
        matches!(&self.kind, DeleteDistributionConfigurationErrorKind::ServiceException(_))
    }
    pub fn is_client_exception(&self) -> bool {
        matches!(&self.kind, DeleteDistributionConfigurationErrorKind::ClientException(_))
    }
    pub fn is_service_unavailable_exception(&self) -> bool {
        matches!(&self.kind, DeleteDistributionConfigurationErrorKind::ServiceUnavailableException(_))
    }
    pub fn is_invalid_request_exception(&self) -> bool {
        matches!(&self.kind, DeleteDistributionConfigurationErrorKind::InvalidRequestException(_))
    }
    pub fn is_forbidden_exception(&self) -> bool {
        matches!(&self.kind, DeleteDistributionConfigurationErrorKind::ForbiddenException(_))
    }
    pub fn is_call_rate_limit_exceeded_exception(&self) -> bool {
        matches!(&self.kind, DeleteDistributionConfigurationErrorKind::CallRateLimitExceededException(_))
    }
    pub fn is_resource_dependency_exception(&self) -> bool {
        matches!(&self.kind, DeleteDistributionConfigurationErrorKind::ResourceDependencyException(_))
    }
}
impl std::error::Error for DeleteDistributionConfigurationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DeleteDistributionConfigurationErrorKind::ServiceException(_inner) => Some(_inner),
            DeleteDistributionConfigurationErrorKind::ClientException(_inner) => Some(_inner),
            DeleteDistributionConfigurationErrorKind::ServiceUnavailableException(_inner) => Some(_inner),
            DeleteDistributionConfigurationErrorKind::InvalidRequestException(_inner) => Some(_inner),
            DeleteDistributionConfigurationErrorKind::ForbiddenException(_inner) => Some(_inner),
            DeleteDistributionConfigurationErrorKind::CallRateLimitExceededException(_inner) => Some(_inner),
            DeleteDistributionConfigurationErrorKind::ResourceDependencyException(_inner) => Some(_inner),
            DeleteDistributionConfigurationErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `DeleteImage` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct DeleteImageError {
    /// Kind of error that occurred.
    pub kind: DeleteImageErrorKind,
    /// Additional metadata about the error, including error code, message, and request ID.
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `DeleteImage` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum DeleteImageErrorKind {
    ServiceException(crate::error::ServiceException),
    ClientException(crate::error::ClientException),
    ServiceUnavailableException(crate::error::ServiceUnavailableException),
    InvalidRequestException(crate::error::InvalidRequestException),
    ForbiddenException(crate::error::ForbiddenException),
    CallRateLimitExceededException(crate::error::CallRateLimitExceededException),
    ResourceDependencyException(crate::error::ResourceDependencyException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for DeleteImageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DeleteImageErrorKind::ServiceException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteImageErrorKind::ClientException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteImageErrorKind::ServiceUnavailableException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteImageErrorKind::InvalidRequestException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteImageErrorKind::ForbiddenException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteImageErrorKind::CallRateLimitExceededException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteImageErrorKind::ResourceDependencyException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteImageErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl DeleteImageError {
    pub fn new(kind: DeleteImageErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DeleteImageErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DeleteImageErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_service_exception(&self) -> bool {
        matches!(&self.kind, DeleteImageErrorKind::ServiceException(_))
    }
    pub fn is_client_exception(&self) -> bool {
        matches!(&self.kind, DeleteImageErrorKind::ClientException(_))
    }
    pub fn is_service_unavailable_exception(&self) -> bool {
        matches!(&self.kind, DeleteImageErrorKind::ServiceUnavailableException(_))
    }
    pub fn is_invalid_request_exception(&self) -> bool {
        matches!(&self.kind, DeleteImageErrorKind::InvalidRequestException(_))
    }
    pub fn is_forbidden_exception(&self) -> bool {
        matches!(&self.kind, DeleteImageErrorKind::ForbiddenException(_))
    }
    pub fn is_call_rate_limit_exceeded_exception(&self) -> bool {
        matches!(&self.kind, DeleteImageErrorKind::CallRateLimitExceededException(_))
    }
    pub fn is_resource_dependency_exception(&self) -> bool {
        matches!(&self.kind, DeleteImageErrorKind::ResourceDependencyException(_))
    }
}
impl std::error::Error for DeleteImageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DeleteImageErrorKind::ServiceException(_inner) => Some(_inner),
            DeleteImageErrorKind::ClientException(_inner) => Some(_inner),
            DeleteImageErrorKind::ServiceUnavailableException(_inner) => Some(_inner),
            DeleteImageErrorKind::InvalidRequestException(_inner) => Some(_inner),
            DeleteImageErrorKind::ForbiddenException(_inner) => Some(_inner),
            DeleteImageErrorKind::CallRateLimitExceededException(_inner) => Some(_inner),
            DeleteImageErrorKind::ResourceDependencyException(_inner) => Some(_inner),
            DeleteImageErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `DeleteImagePipeline` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct DeleteImagePipelineError {
    /// Kind of error that occurred.
    pub kind: DeleteImagePipelineErrorKind,
    /// Additional metadata about the error, including error code, message, and request ID.
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `DeleteImagePipeline` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum DeleteImagePipelineErrorKind {
    ServiceException(crate::error::ServiceException),
    ClientException(crate::error::ClientException),
    ServiceUnavailableException(crate::error::ServiceUnavailableException),
    InvalidRequestException(crate::error::InvalidRequestException),
    ForbiddenException(crate::error::ForbiddenException),
    CallRateLimitExceededException(crate::error::CallRateLimitExceededException),
    ResourceDependencyException(crate::error::ResourceDependencyException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for DeleteImagePipelineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DeleteImagePipelineErrorKind::ServiceException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteImagePipelineErrorKind::ClientException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteImagePipelineErrorKind::ServiceUnavailableException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteImagePipelineErrorKind::InvalidRequestException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteImagePipelineErrorKind::ForbiddenException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteImagePipelineErrorKind::CallRateLimitExceededException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteImagePipelineErrorKind::ResourceDependencyException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteImagePipelineErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl DeleteImagePipelineError {
    pub fn new(kind: DeleteImagePipelineErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DeleteImagePipelineErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DeleteImagePipelineErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_service_exception(&self) -> bool {
        matches!(&self.kind, DeleteImagePipelineErrorKind::ServiceException(_))
    }
    pub fn is_client_exception(&self) -> bool {
        matches!(&self.kind, DeleteImagePipelineErrorKind::ClientException(_))
    }
    pub fn is_service_unavailable_exception(&self) -> bool {
        matches!(&self.kind, DeleteImagePipelineErrorKind::ServiceUnavailableException(_))
    }
    pub fn is_invalid_request_exception(&self) -> bool {
        matches!(&self.kind, DeleteImagePipelineErrorKind::InvalidRequestException(_))
    }
    pub fn is_forbidden_exception(&self) -> bool {
        matches!(&self.kind, DeleteImagePipelineErrorKind::ForbiddenException(_))
    }
    pub fn is_call_rate_limit_exceeded_exception(&self) -> bool {
        matches!(&self.kind, DeleteImagePipelineErrorKind::CallRateLimitExceededException(_))
    }
    pub fn is_resource_dependency_exception(&self) -> bool {
        matches!(&self.kind, DeleteImagePipelineErrorKind::ResourceDependencyException(_))
    }
}
impl std::error::Error for DeleteImagePipelineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DeleteImagePipelineErrorKind::ServiceException(_inner) => Some(_inner),
            DeleteImagePipelineErrorKind::ClientException(_inner) => Some(_inner),
            DeleteImagePipelineErrorKind::ServiceUnavailableException(_inner) => Some(_inner),
            DeleteImagePipelineErrorKind::InvalidRequestException(_inner) => Some(_inner),
            DeleteImagePipelineErrorKind::ForbiddenException(_inner) => Some(_inner),
            DeleteImagePipelineErrorKind::CallRateLimitExceededException(_inner) => Some(_inner),
            DeleteImagePipelineErrorKind::ResourceDependencyException(_inner) => Some(_inner),
            DeleteImagePipelineErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `DeleteImageRecipe` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct DeleteImageRecipeError {
    /// Kind of error that occurred.
    pub kind: DeleteImageRecipeErrorKind,
    /// Additional metadata about the error, including error code, message, and request ID.
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `DeleteImageRecipe` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum DeleteImageRecipeErrorKind {
    ServiceException(crate::error::ServiceException),
    ClientException(crate::error::ClientException),
    ServiceUnavailableException(crate::error::ServiceUnavailableException),
    InvalidRequestException(crate::error::InvalidRequestException),
    ForbiddenException(crate::error::ForbiddenException),
    CallRateLimitExceededException(crate::error::CallRateLimitExceededException),
    ResourceDependencyException(crate::error::ResourceDependencyException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for DeleteImageRecipeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DeleteImageRecipeErrorKind::ServiceException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteImageRecipeErrorKind::ClientException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteImageRecipeErrorKind::ServiceUnavailableException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteImageRecipeErrorKind::InvalidRequestException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteImageRecipeErrorKind::ForbiddenException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteImageRecipeErrorKind::CallRateLimitExceededException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteImageRecipeErrorKind::ResourceDependencyException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteImageRecipeErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl DeleteImageRecipeError {
    pub fn new(kind: DeleteImageRecipeErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DeleteImageRecipeErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DeleteImageRecipeErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_service_exception(&self) -> bool {
        matches!(&self.kind, DeleteImageRecipeErrorKind::ServiceException(_))
    }
    pub fn is_client_exception(&self) -> bool {
        matches!(&self.kind, DeleteImageRecipeErrorKind::ClientException(_))
    }
    pub fn is_service_unavailable_exception(&self) -> bool {
        matches!(&self.kind, DeleteImageRecipeErrorKind::ServiceUnavailableException(_))
    }
    pub fn is_invalid_request_exception(&self) -> bool {
        matches!(&self.kind, DeleteImageRecipeErrorKind::InvalidRequestException(_))
    }
    pub fn is_forbidden_exception(&self) -> bool {
        matches!(&self.kind, DeleteImageRecipeErrorKind::ForbiddenException(_))
    }
    pub fn is_call_rate_limit_exceeded_exception(&self) -> bool {
        matches!(&self.kind, DeleteImageRecipeErrorKind::CallRateLimitExceededException(_))
    }
    pub fn is_resource_dependency_exception(&self) -> bool {
        matches!(&self.kind, DeleteImageRecipeErrorKind::ResourceDependencyException(_))
    }
}
impl std::error::Error for DeleteImageRecipeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DeleteImageRecipeErrorKind::ServiceException(_inner) => Some(_inner),
            DeleteImageRecipeErrorKind::ClientException(_inner) => Some(_inner),
            DeleteImageRecipeErrorKind::ServiceUnavailableException(_inner) => Some(_inner),
            DeleteImageRecipeErrorKind::InvalidRequestException(_inner) => Some(_inner),
            DeleteImageRecipeErrorKind::ForbiddenException(_inner) => Some(_inner),
            DeleteImageRecipeErrorKind::CallRateLimitExceededException(_inner) => Some(_inner),
            DeleteImageRecipeErrorKind::ResourceDependencyException(_inner) => Some(_inner),
            DeleteImageRecipeErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `DeleteInfrastructureConfiguration` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct DeleteInfrastructureConfigurationError {
    /// Kind of error that occurred.
    pub kind: DeleteInfrastructureConfigurationErrorKind,
    /// Additional metadata about the error, including error code, message, and request ID.
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `DeleteInfrastructureConfiguration` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum DeleteInfrastructureConfigurationErrorKind {
    ServiceException(crate::error::ServiceException),
    ClientException(crate::error::ClientException),
    ServiceUnavailableException(crate::error::ServiceUnavailableException),
    InvalidRequestException(crate::error::InvalidRequestException),
    ForbiddenException(crate::error::ForbiddenException),
    CallRateLimitExceededException(crate::error::CallRateLimitExceededException),
    ResourceDependencyException(crate::error::ResourceDependencyException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for DeleteInfrastructureConfigurationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DeleteInfrastructureConfigurationErrorKind::ServiceException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteInfrastructureConfigurationErrorKind::ClientException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteInfrastructureConfigurationErrorKind::ServiceUnavailableException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteInfrastructureConfigurationErrorKind::InvalidRequestException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteInfrastructureConfigurationErrorKind::ForbiddenException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteInfrastructureConfigurationErrorKind::CallRateLimitExceededException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteInfrastructureConfigurationErrorKind::ResourceDependencyException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteInfrastructureConfigurationErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl DeleteInfrastructureConfigurationError {
    pub fn new(kind: DeleteInfrastructureConfigurationErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DeleteInfrastructureConfigurationErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DeleteInfrastructureConfigurationErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_service_exception(&self) -> bool {
        matches!(&self.kind, DeleteInfrastructureConfigurationErrorKind::ServiceException(_))
    }
    pub fn is_client_exception(&self) -> bool {
        matches!(&self.kind, DeleteInfrastructureConfigurationErrorKind::ClientException(_))
    }
    pub fn is_service_unavailable_exception(&self) -> bool {
        matches!(&self.kind, DeleteInfrastructureConfigurationErrorKind::ServiceUnavailableException(_))
    }
    pub fn is_invalid_request_exception(&self) -> bool {
        matches!(&self.kind, DeleteInfrastructureConfigurationErrorKind::InvalidRequestException(_))
    }
    pub fn is_forbidden_exception(&self) -> bool {
        matches!(&self.kind, DeleteInfrastructureConfigurationErrorKind::ForbiddenException(_))
    }
    pub fn is_call_rate_limit_exceeded_exception(&self) -> bool {
        matches!(&self.kind, DeleteInfrastructureConfigurationErrorKind::CallRateLimitExceededException(_))
    }
    pub fn is_resource_dependency_exception(&self) -> bool {
        matches!(&self.kind, DeleteInfrastructureConfigurationErrorKind::ResourceDependencyException(_))
    }
}
impl std::error::Error for DeleteInfrastructureConfigurationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DeleteInfrastructureConfigurationErrorKind::ServiceException(_inner) => Some(_inner),
            DeleteInfrastructureConfigurationErrorKind::ClientException(_inner) => Some(_inner),
            DeleteInfrastructureConfigurationErrorKind::ServiceUnavailableException(_inner) => Some(_inner),
            DeleteInfrastructureConfigurationErrorKind::InvalidRequestException(_inner) => Some(_inner),
            DeleteInfrastructureConfigurationErrorKind::ForbiddenException(_inner) => Some(_inner),
            DeleteInfrastructureConfigurationErrorKind::CallRateLimitExceededException(_inner) => Some(_inner),
            DeleteInfrastructureConfigurationErrorKind::ResourceDependencyException(_inner) => Some(_inner),
            DeleteInfrastructureConfigurationErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `GetComponent` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct GetComponentError {
    /// Kind of error that occurred.
    pub kind: GetComponentErrorKind,
    /// Additional metadata about the error, including error code, message, and request ID.
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `GetComponent` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum GetComponentErrorKind {
    ServiceException(crate::error::ServiceException),
    ClientException(crate::error::ClientException),
    ServiceUnavailableException(crate::error::ServiceUnavailableException),
    InvalidRequestException(crate::error::InvalidRequestException),
    ForbiddenException(crate::error::ForbiddenException),
    CallRateLimitExceededException(crate::error::CallRateLimitExceededException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for GetComponentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            GetComponentErrorKind::ServiceException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetComponentErrorKind::ClientException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetComponentErrorKind::ServiceUnavailableException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetComponentErrorKind::InvalidRequestException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetComponentErrorKind::ForbiddenException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetComponentErrorKind::CallRateLimitExceededException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetComponentErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl GetComponentError {
    pub fn new(kind: GetComponentErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: GetComponentErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: GetComponentErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_service_exception(&self) -> bool {
        matches!(&self.kind, GetComponentErrorKind::ServiceException(_))
    }
    pub fn is_client_exception(&self) -> bool {
        matches!(&self.kind, GetComponentErrorKind::ClientException(_))
    }
    pub fn is_service_unavailable_exception(&self) -> bool {
        matches!(&self.kind, GetComponentErrorKind::ServiceUnavailableException(_))
    }
    pub fn is_invalid_request_exception(&self) -> bool {
        matches!(&self.kind, GetComponentErrorKind::InvalidRequestException(_))
    }
    pub fn is_forbidden_exception(&self) -> bool {
        matches!(&self.kind, GetComponentErrorKind::ForbiddenException(_))
    }
    pub fn is_call_rate_limit_exceeded_exception(&self) -> bool {
        matches!(&self.kind, GetComponentErrorKind::CallRateLimitExceededException(_))
    }
}
impl std::error::Error for GetComponentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            GetComponentErrorKind::ServiceException(_inner) => Some(_inner),
            GetComponentErrorKind::ClientException(_inner) => Some(_inner),
            GetComponentErrorKind::ServiceUnavailableException(_inner) => Some(_inner),
            GetComponentErrorKind::InvalidRequestException(_inner) => Some(_inner),
            GetComponentErrorKind::ForbiddenException(_inner) => Some(_inner),
            GetComponentErrorKind::CallRateLimitExceededException(_inner) => Some(_inner),
            GetComponentErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `GetComponentPolicy` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct GetComponentPolicyError {
    /// Kind of error that occurred.
    pub kind: GetComponentPolicyErrorKind,
    /// Additional metadata about the error, including error code, message, and request ID.
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `GetComponentPolicy` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum GetComponentPolicyErrorKind {
    ServiceException(crate::error::ServiceException),
    ServiceUnavailableException(crate::error::ServiceUnavailableException),
    ResourceNotFoundException(crate::error::ResourceNotFoundException),
    InvalidRequestException(crate::error::InvalidRequestException),
    ForbiddenException(crate::error::ForbiddenException),
    CallRateLimitExceededException(crate::error::CallRateLimitExceededException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for GetComponentPolicyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            GetComponentPolicyErrorKind::ServiceException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetComponentPolicyErrorKind::ServiceUnavailableException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetComponentPolicyErrorKind::ResourceNotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetComponentPolicyErrorKind::InvalidRequestException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetComponentPolicyErrorKind::ForbiddenException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetComponentPolicyErrorKind::CallRateLimitExceededException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetComponentPolicyErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl GetComponentPolicyError {
    pub fn new(kind: GetComponentPolicyErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: GetComponentPolicyErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: GetComponentPolicyErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_service_exception(&self) -> bool {
        matches!(&self.kind, GetComponentPolicyErrorKind::ServiceException(_))
    }
    pub fn is_service_unavailable_exception(&self) -> bool {
        matches!(&self.kind, GetComponentPolicyErrorKind::ServiceUnavailableException(_))
    }
    pub fn is_resource_not_found_exception(&self) -> bool {
        matches!(&self.kind, GetComponentPolicyErrorKind::ResourceNotFoundException(_))
    }
    pub fn is_invalid_request_exception(&self) -> bool {
        matches!(&self.kind, GetComponentPolicyErrorKind::InvalidRequestException(_))
    }
    pub fn is_forbidden_exception(&self) -> bool {
        matches!(&self.kind, GetComponentPolicyErrorKind::ForbiddenException(_))
    }
    pub fn is_call_rate_limit_exceeded_exception(&self) -> bool {
        matches!(&self.kind, GetComponentPolicyErrorKind::CallRateLimitExceededException(_))
    }
}
impl std::error::Error for GetComponentPolicyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            GetComponentPolicyErrorKind::ServiceException(_inner) => Some(_inner),
            GetComponentPolicyErrorKind::ServiceUnavailableException(_inner) => Some(_inner),
            GetComponentPolicyErrorKind::ResourceNotFoundException(_inner) => Some(_inner),
            GetComponentPolicyErrorKind::InvalidRequestException(_inner) => Some(_inner),
            GetComponentPolicyErrorKind::ForbiddenException(_inner) => Some(_inner),
            GetComponentPolicyErrorKind::CallRateLimitExceededException(_inner) => Some(_inner),
            GetComponentPolicyErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `GetDistributionConfiguration` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct GetDistributionConfigurationError {
    /// Kind of error that occurred.
    pub kind: GetDistributionConfigurationErrorKind,
    /// Additional metadata about the error, including error code, message, and request ID.
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `GetDistributionConfiguration` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum GetDistributionConfigurationErrorKind {
    ServiceException(crate::error::ServiceException),
    ClientException(crate::error::ClientException),
    ServiceUnavailableException(crate::error::ServiceUnavailableException),
    InvalidRequestException(crate::error::InvalidRequestException),
    ForbiddenException(crate::error::ForbiddenException),
    CallRateLimitExceededException(crate::error::CallRateLimitExceededException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for GetDistributionConfigurationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            GetDistributionConfigurationErrorKind::ServiceException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetDistributionConfigurationErrorKind::ClientException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetDistributionConfigurationErrorKind::ServiceUnavailableException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetDistributionConfigurationErrorKind::InvalidRequestException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetDistributionConfigurationErrorKind::ForbiddenException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetDistributionConfigurationErrorKind::CallRateLimitExceededException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetDistributionConfigurationErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl GetDistributionConfigurationError {
    pub fn new(kind: GetDistributionConfigurationErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: GetDistributionConfigurationErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: GetDistributionConfigurationErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_service_exception(&self) -> bool {
        matches!(&self.kind, GetDistributionConfigurationErrorKind::ServiceException(_))
    }
    pub fn is_client_exception(&self) -> bool {
        matches!(&self.kind, GetDistributionConfigurationErrorKind::ClientException(_))
    }
    pub fn is_service_unavailable_exception(&self) -> bool {
        matches!(&self.kind, GetDistributionConfigurationErrorKind::ServiceUnavailableException(_))
    }
    pub fn is_invalid_request_exception(&self) -> bool {
        matches!(&self.kind, GetDistributionConfigurationErrorKind::InvalidRequestException(_))
    }
    pub fn is_forbidden_exception(&self) -> bool {
        matches!(&self.kind, GetDistributionConfigurationErrorKind::ForbiddenException(_))
    }
    pub fn is_call_rate_limit_exceeded_exception(&self) -> bool {
        matches!(&self.kind, GetDistributionConfigurationErrorKind::CallRateLimitExceededException(_))
    }
}
impl std::error::Error for GetDistributionConfigurationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            GetDistributionConfigurationErrorKind::ServiceException(_inner) => Some(_inner),
            GetDistributionConfigurationErrorKind::ClientException(_inner) => Some(_inner),
            GetDistributionConfigurationErrorKind::ServiceUnavailableException(_inner) => Some(_inner),
            GetDistributionConfigurationErrorKind::InvalidRequestException(_inner) => Some(_inner),
            GetDistributionConfigurationErrorKind::ForbiddenException(_inner) => Some(_inner),
            GetDistributionConfigurationErrorKind::CallRateLimitExceededException(_inner) => Some(_inner),
            GetDistributionConfigurationErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `GetImage` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct GetImageError {
    /// Kind of error that occurred.
    pub kind: GetImageErrorKind,
    /// Additional metadata about the error, including error code, message, and request ID.
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `GetImage` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum GetImageErrorKind {
    ServiceException(crate::error::ServiceException),
    ClientException(crate::error::ClientException),
    ServiceUnavailableException(crate::error::ServiceUnavailableException),
    InvalidRequestException(crate::error::InvalidRequestException),
    ForbiddenException(crate::error::ForbiddenException),
    CallRateLimitExceededException(crate::error::CallRateLimitExceededException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for GetImageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            GetImageErrorKind::ServiceException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetImageErrorKind::ClientException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetImageErrorKind::ServiceUnavailableException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetImageErrorKind::InvalidRequestException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetImageErrorKind::ForbiddenException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetImageErrorKind::CallRateLimitExceededException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetImageErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl GetImageError {
    pub fn new(kind: GetImageErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: GetImageErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: GetImageErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_service_exception(&self) -> bool {
        matches!(&self.kind, GetImageErrorKind::ServiceException(_))
    }
    pub fn is_client_exception(&self) -> bool {
        matches!(&self.kind, GetImageErrorKind::ClientException(_))
    }
    pub fn is_service_unavailable_exception(&self) -> bool {
        matches!(&self.kind, GetImageErrorKind::ServiceUnavailableException(_))
    }
    pub fn is_invalid_request_exception(&self) -> bool {
        matches!(&self.kind, GetImageErrorKind::InvalidRequestException(_))
    }
    pub fn is_forbidden_exception(&self) -> bool {
        matches!(&self.kind, GetImageErrorKind::ForbiddenException(_))
    }
    pub fn is_call_rate_limit_exceeded_exception(&self) -> bool {
        matches!(&self.kind, GetImageErrorKind::CallRateLimitExceededException(_))
    }
}
impl std::error::Error for GetImageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            GetImageErrorKind::ServiceException(_inner) => Some(_inner),
            GetImageErrorKind::ClientException(_inner) => Some(_inner),
            GetImageErrorKind::ServiceUnavailableException(_inner) => Some(_inner),
            GetImageErrorKind::InvalidRequestException(_inner) => Some(_inner),
            GetImageErrorKind::ForbiddenException(_inner) => Some(_inner),
            GetImageErrorKind::CallRateLimitExceededException(_inner) => Some(_inner),
            GetImageErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `GetImagePipeline` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct GetImagePipelineError {
    /// Kind of error that occurred.
    pub kind: GetImagePipelineErrorKind,
    /// Additional metadata about the error, including error code, message, and request ID.
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `GetImagePipeline` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum GetImagePipelineErrorKind {
    ServiceException(crate::error::ServiceException),
    ClientException(crate::error::ClientException),
    ServiceUnavailableException(crate::error::ServiceUnavailableException),
    InvalidRequestException(crate::error::InvalidRequestException),
    ForbiddenException(crate::error::ForbiddenException),
    CallRateLimitExceededException(crate::error::CallRateLimitExceededException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for GetImagePipelineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            GetImagePipelineErrorKind::ServiceException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetImagePipelineErrorKind::ClientException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetImagePipelineErrorKind::ServiceUnavailableException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetImagePipelineErrorKind::InvalidRequestException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetImagePipelineErrorKind::ForbiddenException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetImagePipelineErrorKind::CallRateLimitExceededException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetImagePipelineErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl GetImagePipelineError {
    pub fn new(kind: GetImagePipelineErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: GetImagePipelineErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: GetImagePipelineErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_service_exception(&self) -> bool {
        matches!(&self.kind, GetImagePipelineErrorKind::ServiceException(_))
    }
    pub fn is_client_exception(&self) -> bool {
        matches!(&self.kind, GetImagePipelineErrorKind::ClientException(_))
    }
    pub fn is_service_unavailable_exception(&self) -> bool {
        matches!(&self.kind, GetImagePipelineErrorKind::ServiceUnavailableException(_))
    }
    pub fn is_invalid_request_exception(&self) -> bool {
        matches!(&self.kind, GetImagePipelineErrorKind::InvalidRequestException(_))
    }
    pub fn is_forbidden_exception(&self) -> bool {
        matches!(&self.kind, GetImagePipelineErrorKind::ForbiddenException(_))
    }
    pub fn is_call_rate_limit_exceeded_exception(&self) -> bool {
        matches!(&self.kind, GetImagePipelineErrorKind::CallRateLimitExceededException(_))
    }
}
impl std::error::Error for GetImagePipelineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            GetImagePipelineErrorKind::ServiceException(_inner) => Some(_inner),
            GetImagePipelineErrorKind::ClientException(_inner) => Some(_inner),
            GetImagePipelineErrorKind::ServiceUnavailableException(_inner) => Some(_inner),
            GetImagePipelineErrorKind::InvalidRequestException(_inner) => Some(_inner),
            GetImagePipelineErrorKind::ForbiddenException(_inner) => Some(_inner),
            GetImagePipelineErrorKind::CallRateLimitExceededException(_inner) => Some(_inner),
            GetImagePipelineErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `GetImagePolicy` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct GetImagePolicyError {
    /// Kind of error that occurred.
    pub kind: GetImagePolicyErrorKind,
    /// Additional metadata about the error, including error code, message, and request ID.
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `GetImagePolicy` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum GetImagePolicyErrorKind {
    ServiceException(crate::error::ServiceException),
    ServiceUnavailableException(crate::error::ServiceUnavailableException),
    ResourceNotFoundException(crate::error::ResourceNotFoundException),
    InvalidRequestException(crate::error::InvalidRequestException),
    ForbiddenException(crate::error::ForbiddenException),
    CallRateLimitExceededException(crate::error::CallRateLimitExceededException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for GetImagePolicyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            GetImagePolicyErrorKind::ServiceException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetImagePolicyErrorKind::ServiceUnavailableException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetImagePolicyErrorKind::ResourceNotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetImagePolicyErrorKind::InvalidRequestException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetImagePolicyErrorKind::ForbiddenException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetImagePolicyErrorKind::CallRateLimitExceededException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetImagePolicyErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl GetImagePolicyError {
    pub fn new(kind: GetImagePolicyErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: GetImagePolicyErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: GetImagePolicyErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_service_exception(&self) -> bool {
        matches!(&self.kind, GetImagePolicyErrorKind::ServiceException(_))
    }
    pub fn is_service_unavailable_exception(&self) -> bool {
        matches!(&self.kind, GetImagePolicyErrorKind::ServiceUnavailableException(_))
    }
    pub fn is_resource_not_found_exception(&self) -> bool {
        matches!(&self.kind, GetImagePolicyErrorKind::ResourceNotFoundException(_))
    }
    pub fn is_invalid_request_exception(&self) -> bool {
        matches!(&self.kind, GetImagePolicyErrorKind::InvalidRequestException(_))
    }
    pub fn is_forbidden_exception(&self) -> bool {
        matches!(&self.kind, GetImagePolicyErrorKind::ForbiddenException(_))
    }
    pub fn is_call_rate_limit_exceeded_exception(&self) -> bool {
        matches!(&self.kind, GetImagePolicyErrorKind::CallRateLimitExceededException(_))
    }
}
impl std::error::Error for GetImagePolicyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            GetImagePolicyErrorKind::ServiceException(_inner) => Some(_inner),
            GetImagePolicyErrorKind::ServiceUnavailableException(_inner) => Some(_inner),
            GetImagePolicyErrorKind::ResourceNotFoundException(_inner) => Some(_inner),
            GetImagePolicyErrorKind::InvalidRequestException(_inner) => Some(_inner),
            GetImagePolicyErrorKind::ForbiddenException(_inner) => Some(_inner),
            GetImagePolicyErrorKind::CallRateLimitExceededException(_inner) => Some(_inner),
            GetImagePolicyErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `GetImageRecipe` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct GetImageRecipeError {
    /// Kind of error that occurred.
    pub kind: GetImageRecipeErrorKind,
    /// Additional metadata about the error, including error code, message, and request ID.
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `GetImageRecipe` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum GetImageRecipeErrorKind {
    ServiceException(crate::error::ServiceException),
    ClientException(crate::error::ClientException),
    ServiceUnavailableException(crate::error::ServiceUnavailableException),
    InvalidRequestException(crate::error::InvalidRequestException),
    ForbiddenException(crate::error::ForbiddenException),
    CallRateLimitExceededException(crate::error::CallRateLimitExceededException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for GetImageRecipeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            GetImageRecipeErrorKind::ServiceException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetImageRecipeErrorKind::ClientException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetImageRecipeErrorKind::ServiceUnavailableException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetImageRecipeErrorKind::InvalidRequestException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetImageRecipeErrorKind::ForbiddenException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetImageRecipeErrorKind::CallRateLimitExceededException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetImageRecipeErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl GetImageRecipeError {
    pub fn new(kind: GetImageRecipeErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: GetImageRecipeErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: GetImageRecipeErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_service_exception(&self) -> bool {
        matches!(&self.kind, GetImageRecipeErrorKind::ServiceException(_))
    }
    pub fn is_client_exception(&self) -> bool {
        matches!(&self.kind, GetImageRecipeErrorKind::ClientException(_))
    }
    pub fn is_service_unavailable_exception(&self) -> bool {
        matches!(&self.kind, GetImageRecipeErrorKind::ServiceUnavailableException(_))
    }
    pub fn is_invalid_request_exception(&self) -> bool {
        matches!(&self.kind, GetImageRecipeErrorKind::InvalidRequestException(_))
    }
    pub fn is_forbidden_exception(&self) -> bool {
        matches!(&self.kind, GetImageRecipeErrorKind::ForbiddenException(_))
    }
    pub fn is_call_rate_limit_exceeded_exception(&self) -> bool {
        matches!(&self.kind, GetImageRecipeErrorKind::CallRateLimitExceededException(_))
    }
}
impl std::error::Error for GetImageRecipeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            GetImageRecipeErrorKind::ServiceException(_inner) => Some(_inner),
            GetImageRecipeErrorKind::ClientException(_inner) => Some(_inner),
            GetImageRecipeErrorKind::ServiceUnavailableException(_inner) => Some(_inner),
            GetImageRecipeErrorKind::InvalidRequestException(_inner) => Some(_inner),
            GetImageRecipeErrorKind::ForbiddenException(_inner) => Some(_inner),
            GetImageRecipeErrorKind::CallRateLimitExceededException(_inner) => Some(_inner),
            GetImageRecipeErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `GetImageRecipePolicy` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct GetImageRecipePolicyError {
    /// Kind of error that occurred.
    pub kind: GetImageRecipePolicyErrorKind,
    /// Additional metadata about the error, including error code, message, and request ID.
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `GetImageRecipePolicy` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum GetImageRecipePolicyErrorKind {
    ServiceException(crate::error::ServiceException),
    ServiceUnavailableException(crate::error::ServiceUnavailableException),
    ResourceNotFoundException(crate::error::ResourceNotFoundException),
    InvalidRequestException(crate::error::InvalidRequestException),
    ForbiddenException(crate::error::ForbiddenException),
    CallRateLimitExceededException(crate::error::CallRateLimitExceededException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for GetImageRecipePolicyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            GetImageRecipePolicyErrorKind::ServiceException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetImageRecipePolicyErrorKind::ServiceUnavailableException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetImageRecipePolicyErrorKind::ResourceNotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetImageRecipePolicyErrorKind::InvalidRequestException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetImageRecipePolicyErrorKind::ForbiddenException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetImageRecipePolicyErrorKind::CallRateLimitExceededException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetImageRecipePolicyErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl GetImageRecipePolicyError {
    pub fn new(kind: GetImageRecipePolicyErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: GetImageRecipePolicyErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: GetImageRecipePolicyErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_service_exception(&self) -> bool {
        matches!(&self.kind, GetImageRecipePolicyErrorKind::ServiceException(_))
    }
    pub fn is_service_unavailable_exception(&self) -> bool {
        matches!(&self.kind, GetImageRecipePolicyErrorKind::ServiceUnavailableException(_))
    }
    pub fn is_resource_not_found_exception(&self) -> bool {
        matches!(&self.kind, GetImageRecipePolicyErrorKind::ResourceNotFoundException(_))
    }
    pub fn is_invalid_request_exception(&self) -> bool {
        matches!(&self.kind, GetImageRecipePolicyErrorKind::InvalidRequestException(_))
    }
    pub fn is_forbidden_exception(&self) -> bool {
        matches!(&self.kind, GetImageRecipePolicyErrorKind::ForbiddenException(_))
    }
    pub fn is_call_rate_limit_exceeded_exception(&self) -> bool {
        matches!(&self.kind, GetImageRecipePolicyErrorKind::CallRateLimitExceededException(_))
    }
}
impl std::error::Error for GetImageRecipePolicyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            GetImageRecipePolicyErrorKind::ServiceException(_inner) => Some(_inner),
            GetImageRecipePolicyErrorKind::ServiceUnavailableException(_inner) => Some(_inner),
            GetImageRecipePolicyErrorKind::ResourceNotFoundException(_inner) => Some(_inner),
            GetImageRecipePolicyErrorKind::InvalidRequestException(_inner) => Some(_inner),
            GetImageRecipePolicyErrorKind::ForbiddenException(_inner) => Some(_inner),
            GetImageRecipePolicyErrorKind::CallRateLimitExceededException(_inner) => Some(_inner),
            GetImageRecipePolicyErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `GetInfrastructureConfiguration` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct GetInfrastructureConfigurationError {
    /// Kind of error that occurred.
    pub kind: GetInfrastructureConfigurationErrorKind,
    /// Additional metadata about the error, including error code, message, and request ID.
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `GetInfrastructureConfiguration` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum GetInfrastructureConfigurationErrorKind {
    ServiceException(crate::error::ServiceException),
    ClientException(crate::error::ClientException),
    ServiceUnavailableException(crate::error::ServiceUnavailableException),
    InvalidRequestException(crate::error::InvalidRequestException),
    ForbiddenException(crate::error::ForbiddenException),
    CallRateLimitExceededException(crate::error::CallRateLimitExceededException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for GetInfrastructureConfigurationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            GetInfrastructureConfigurationErrorKind::ServiceException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetInfrastructureConfigurationErrorKind::ClientException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetInfrastructureConfigurationErrorKind::ServiceUnavailableException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetInfrastructureConfigurationErrorKind::InvalidRequestException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetInfrastructureConfigurationErrorKind::ForbiddenException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetInfrastructureConfigurationErrorKind::CallRateLimitExceededException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetInfrastructureConfigurationErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl GetInfrastructureConfigurationError {
    pub fn new(kind: GetInfrastructureConfigurationErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: GetInfrastructureConfigurationErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: GetInfrastructureConfigurationErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_service_exception(&self) -> bool {
        matches!(&self.kind, GetInfrastructureConfigurationErrorKind::ServiceException(_))
    }
    pub fn is_client_exception(&self) -> bool {
        matches!(&self.kind, GetInfrastructureConfigurationErrorKind::ClientException(_))
    }
    pub fn is_service_unavailable_exception(&self) -> bool {
        matches!(&self.kind, GetInfrastructureConfigurationErrorKind::ServiceUnavailableException(_))
    }
    pub fn is_invalid_request_exception(&self) -> bool {
        matches!(&self.kind, GetInfrastructureConfigurationErrorKind::InvalidRequestException(_))
    }
    pub fn is_forbidden_exception(&self) -> bool {
        matches!(&self.kind, GetInfrastructureConfigurationErrorKind::ForbiddenException(_))
    }
    pub fn is_call_rate_limit_exceeded_exception(&self) -> bool {
        matches!(&self.kind, GetInfrastructureConfigurationErrorKind::CallRateLimitExceededException(_))
    }
}
impl std::error::Error for GetInfrastructureConfigurationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            GetInfrastructureConfigurationErrorKind::ServiceException(_inner) => Some(_inner),
            GetInfrastructureConfigurationErrorKind::ClientException(_inner) => Some(_inner),
            GetInfrastructureConfigurationErrorKind::ServiceUnavailableException(_inner) => Some(_inner),
            GetInfrastructureConfigurationErrorKind::InvalidRequestException(_inner) => Some(_inner),
            GetInfrastructureConfigurationErrorKind::ForbiddenException(_inner) => Some(_inner),
            GetInfrastructureConfigurationErrorKind::CallRateLimitExceededException(_inner) => Some(_inner),
            GetInfrastructureConfigurationErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `ImportComponent` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct ImportComponentError {
    /// Kind of error that occurred.
    pub kind: ImportComponentErrorKind,
    /// Additional metadata about the error, including error code, message, and request ID.
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `ImportComponent` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum ImportComponentErrorKind {
    ServiceException(crate::error::ServiceException),
    ClientException(crate::error::ClientException),
    ServiceUnavailableException(crate::error::ServiceUnavailableException),
    InvalidRequestException(crate::error::InvalidRequestException),
    ForbiddenException(crate::error::ForbiddenException),
    CallRateLimitExceededException(crate::error::CallRateLimitExceededException),
    IdempotentParameterMismatchException(crate::error::IdempotentParameterMismatchException),
    ResourceInUseException(crate::error::ResourceInUseException),
    InvalidVersionNumberException(crate::error::InvalidVersionNumberException),
    InvalidParameterCombinationException(crate::error::InvalidParameterCombinationException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for ImportComponentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ImportComponentErrorKind::ServiceException(_inner) => std::fmt::Display::fmt(_inner, f),
            ImportComponentErrorKind::ClientException(_inner) => std::fmt::Display::fmt(_inner, f),
            ImportComponentErrorKind::ServiceUnavailableException(_inner) => std::fmt::Display::fmt(_inner, f),
            ImportComponentErrorKind::InvalidRequestException(_inner) => std::fmt::Display::fmt(_inner, f),
            ImportComponentErrorKind::ForbiddenException(_inner) => std::fmt::Display::fmt(_inner, f),
            ImportComponentErrorKind::CallRateLimitExceededException(_inner) => std::fmt::Display::fmt(_inner, f),
            ImportComponentErrorKind::IdempotentParameterMismatchException(_inner) => std::fmt::Display::fmt(_inner, f),
            ImportComponentErrorKind::ResourceInUseException(_inner) => std::fmt::Display::fmt(_inner, f),
            ImportComponentErrorKind::InvalidVersionNumberException(_inner) => std::fmt::Display::fmt(_inner, f),
            ImportComponentErrorKind::InvalidParameterCombinationException(_inner) => std::fmt::Display::fmt(_inner, f),
            ImportComponentErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl ImportComponentError {
    pub fn new(kind: ImportComponentErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: ImportComponentErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: ImportComponentErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_service_exception(&self) -> bool {
        matches!(&self.kind, ImportComponentErrorKind::ServiceException(_))
    }
    pub fn is_client_exception(&self) -> bool {
        matches!(&self.kind, ImportComponentErrorKind::ClientException(_))
    }
    pub fn is_service_unavailable_exception(&self) -> bool {
        matches!(&self.kind, ImportComponentErrorKind::ServiceUnavailableException(_))
    }
    pub fn is_invalid_request_exception(&self) -> bool {
        matches!(&self.kind, ImportComponentErrorKind::InvalidRequestException(_))
    }
    pub fn is_forbidden_exception(&self) -> bool {
        matches!(&self.kind, ImportComponentErrorKind::ForbiddenException(_))
    }
    pub fn is_call_rate_limit_exceeded_exception(&self) -> bool {
        matches!(&self.kind, ImportComponentErrorKind::CallRateLimitExceededException(_))
    }
    pub fn is_idempotent_parameter_mismatch_exception(&self) -> bool {
        matches!(&self.kind, ImportComponentErrorKind::IdempotentParameterMismatchException(_))
    }
    pub fn is_resource_in_use_exception(&self) -> bool {
        matches!(&self.kind, ImportComponentErrorKind::ResourceInUseException(_))
    }
    pub fn is_invalid_version_number_exception(&self) -> bool {
        matches!(&self.kind, ImportComponentErrorKind::InvalidVersionNumberException(_))
    }
    pub fn is_invalid_parameter_combination_exception(&self) -> bool {
        matches!(&self.kind, ImportComponentErrorKind::InvalidParameterCombinationException(_))
    }
}
impl std::error::Error for ImportComponentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ImportComponentErrorKind::ServiceException(_inner) => Some(_inner),
            ImportComponentErrorKind::ClientException(_inner) => Some(_inner),
            ImportComponentErrorKind::ServiceUnavailableException(_inner) => Some(_inner),
            ImportComponentErrorKind::InvalidRequestException(_inner) => Some(_inner),
            ImportComponentErrorKind::ForbiddenException(_inner) => Some(_inner),
            ImportComponentErrorKind::CallRateLimitExceededException(_inner) => Some(_inner),
            ImportComponentErrorKind::IdempotentParameterMismatchException(_inner) => Some(_inner),
            ImportComponentErrorKind::ResourceInUseException(_inner) => Some(_inner),
            ImportComponentErrorKind::InvalidVersionNumberException(_inner) => Some(_inner),
            ImportComponentErrorKind::InvalidParameterCombinationException(_inner) => Some(_inner),
            ImportComponentErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `ListComponentBuildVersions` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct ListComponentBuildVersionsError {
    /// Kind of error that occurred.
    pub kind: ListComponentBuildVersionsErrorKind,
    /// Additional metadata about the error, including error code, message, and request ID.
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `ListComponentBuildVersions` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum ListComponentBuildVersionsErrorKind {
    ServiceException(crate::error::ServiceException),
    ClientException(crate::error::ClientException),
    ServiceUnavailableException(crate::error::ServiceUnavailableException),
    InvalidRequestException(crate::error::InvalidRequestException),
    ForbiddenException(crate::error::ForbiddenException),
    CallRateLimitExceededException(crate::error::CallRateLimitExceededException),
    InvalidPaginationTokenException(crate::error::InvalidPaginationTokenException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for ListComponentBuildVersionsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ListComponentBuildVersionsErrorKind::ServiceException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListComponentBuildVersionsErrorKind::ClientException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListComponentBuildVersionsErrorKind::ServiceUnavailableException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListComponentBuildVersionsErrorKind::InvalidRequestException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListComponentBuildVersionsErrorKind::ForbiddenException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListComponentBuildVersionsErrorKind::CallRateLimitExceededException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListComponentBuildVersionsErrorKind::InvalidPaginationTokenException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListComponentBuildVersionsErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl ListComponentBuildVersionsError {
    pub fn new(kind: ListComponentBuildVersionsErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: ListComponentBuildVersionsErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: ListComponentBuildVersionsErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_service_exception(&self) -> bool {
        matches!(&self.kind, ListComponentBuildVersionsErrorKind::ServiceException(_))
    }
    pub fn is_client_exception(&self) -> bool {
        matches!(&self.kind, ListComponentBuildVersionsErrorKind::ClientException(_))
    }
    pub fn is_service_unavailable_exception(&self) -> bool {
        matches!(&self.kind, ListComponentBuildVersionsErrorKind::ServiceUnavailableException(_))
    }
    pub fn is_invalid_request_exception(&self) -> bool {
        matches!(&self.kind, ListComponentBuildVersionsErrorKind::InvalidRequestException(_))
    }
    pub fn is_forbidden_exception(&self) -> bool {
        matches!(&self.kind, ListComponentBuildVersionsErrorKind::ForbiddenException(_))
    }
    pub fn is_call_rate_limit_exceeded_exception(&self) -> bool {
        matches!(&self.kind, ListComponentBuildVersionsErrorKind::CallRateLimitExceededException(_))
    }
    pub fn is_invalid_pagination_token_exception(&self) -> bool {
        matches!(&self.kind, ListComponentBuildVersionsErrorKind::InvalidPaginationTokenException(_))
    }
}
impl std::error::Error for ListComponentBuildVersionsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ListComponentBuildVersionsErrorKind::ServiceException(_inner) => Some(_inner),
            ListComponentBuildVersionsErrorKind::ClientException(_inner) => Some(_inner),
            ListComponentBuildVersionsErrorKind::ServiceUnavailableException(_inner) => Some(_inner),
            ListComponentBuildVersionsErrorKind::InvalidRequestException(_inner) => Some(_inner),
            ListComponentBuildVersionsErrorKind::ForbiddenException(_inner) => Some(_inner),
            ListComponentBuildVersionsErrorKind::CallRateLimitExceededException(_inner) => Some(_inner),
            ListComponentBuildVersionsErrorKind::InvalidPaginationTokenException(_inner) => Some(_inner),
            ListComponentBuildVersionsErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `ListComponents` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct ListComponentsError {
    /// Kind of error that occurred.
    pub kind: ListComponentsErrorKind,
    /// Additional metadata about the error, including error code, message, and request ID.
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `ListComponents` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum ListComponentsErrorKind {
    ServiceException(crate::error::ServiceException),
    ClientException(crate::error::ClientException),
    ServiceUnavailableException(crate::error::ServiceUnavailableException),
    InvalidRequestException(crate::error::InvalidRequestException),
    ForbiddenException(crate::error::ForbiddenException),
    CallRateLimitExceededException(crate::error::CallRateLimitExceededException),
    InvalidPaginationTokenException(crate::error::InvalidPaginationTokenException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for ListComponentsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ListComponentsErrorKind::ServiceException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListComponentsErrorKind::ClientException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListComponentsErrorKind::ServiceUnavailableException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListComponentsErrorKind::InvalidRequestException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListComponentsErrorKind::ForbiddenException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListComponentsErrorKind::CallRateLimitExceededException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListComponentsErrorKind::InvalidPaginationTokenException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListComponentsErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl ListComponentsError {
    pub fn new(kind: ListComponentsErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: ListComponentsErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: ListComponentsErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_service_exception(&self) -> bool {
        matches!(&self.kind, ListComponentsErrorKind::ServiceException(_))
    }
    pub fn is_client_exception(&self) -> bool {
        matches!(&self.kind, ListComponentsErrorKind::ClientException(_))
    }
    pub fn is_service_unavailable_exception(&self) -> bool {
        matches!(&self.kind, ListComponentsErrorKind::ServiceUnavailableException(_))
    }
    pub fn is_invalid_request_exception(&self) -> bool {
        matches!(&self.kind, ListComponentsErrorKind::InvalidRequestException(_))
    }
    pub fn is_forbidden_exception(&self) -> bool {
        matches!(&self.kind, ListComponentsErrorKind::ForbiddenException(_))
    }
    pub fn is_call_rate_limit_exceeded_exception(&self) -> bool {
        matches!(&self.kind, ListComponentsErrorKind::CallRateLimitExceededException(_))
    }
    pub fn is_invalid_pagination_token_exception(&self) -> bool {
        matches!(&self.kind, ListComponentsErrorKind::InvalidPaginationTokenException(_))
    }
}
impl std::error::Error for ListComponentsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ListComponentsErrorKind::ServiceException(_inner) => Some(_inner),
            ListComponentsErrorKind::ClientException(_inner) => Some(_inner),
            ListComponentsErrorKind::ServiceUnavailableException(_inner) => Some(_inner),
            ListComponentsErrorKind::InvalidRequestException(_inner) => Some(_inner),
            ListComponentsErrorKind::ForbiddenException(_inner) => Some(_inner),
            ListComponentsErrorKind::CallRateLimitExceededException(_inner) => Some(_inner),
            ListComponentsErrorKind::InvalidPaginationTokenException(_inner) => Some(_inner),
            ListComponentsErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `ListDistributionConfigurations` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct ListDistributionConfigurationsError {
    /// Kind of error that occurred.
    pub kind: ListDistributionConfigurationsErrorKind,
    /// Additional metadata about the error, including error code, message, and request ID.
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `ListDistributionConfigurations` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum ListDistributionConfigurationsErrorKind {
    ServiceException(crate::error::ServiceException),
    ClientException(crate::error::ClientException),
    ServiceUnavailableException(crate::error::ServiceUnavailableException),
    InvalidRequestException(crate::error::InvalidRequestException),
    ForbiddenException(crate::error::ForbiddenException),
    CallRateLimitExceededException(crate::error::CallRateLimitExceededException),
    InvalidPaginationTokenException(crate::error::InvalidPaginationTokenException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for ListDistributionConfigurationsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ListDistributionConfigurationsErrorKind::ServiceException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListDistributionConfigurationsErrorKind::ClientException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListDistributionConfigurationsErrorKind::ServiceUnavailableException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListDistributionConfigurationsErrorKind::InvalidRequestException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListDistributionConfigurationsErrorKind::ForbiddenException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListDistributionConfigurationsErrorKind::CallRateLimitExceededException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListDistributionConfigurationsErrorKind::InvalidPaginationTokenException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListDistributionConfigurationsErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl ListDistributionConfigurationsError {
    pub fn new(kind: ListDistributionConfigurationsErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: ListDistributionConfigurationsErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: ListDistributionConfigurationsErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_service_exception(&self) -> bool {
        matches!(&self.kind, ListDistributionConfigurationsErrorKind::ServiceException(_))
    }
    pub fn is_client_exception(&self) -> bool {
        matches!(&self.kind, ListDistributionConfigurationsErrorKind::ClientException(_))
    }
    pub fn is_service_unavailable_exception(&self) -> bool {
        matches!(&self.kind, ListDistributionConfigurationsErrorKind::ServiceUnavailableException(_))
    }
    pub fn is_invalid_request_exception(&self) -> bool {
        matches!(&self.kind, ListDistributionConfigurationsErrorKind::InvalidRequestException(_))
    }
    pub fn is_forbidden_exception(&self) -> bool {
        matches!(&self.kind, ListDistributionConfigurationsErrorKind::ForbiddenException(_))
    }
    pub fn is_call_rate_limit_exceeded_exception(&self) -> bool {
        matches!(&self.kind, ListDistributionConfigurationsErrorKind::CallRateLimitExceededException(_))
    }
    pub fn is_invalid_pagination_token_exception(&self) -> bool {
        matches!(&self.kind, ListDistributionConfigurationsErrorKind::InvalidPaginationTokenException(_))
    }
}
impl std::error::Error for ListDistributionConfigurationsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ListDistributionConfigurationsErrorKind::ServiceException(_inner) => Some(_inner),
            ListDistributionConfigurationsErrorKind::ClientException(_inner) => Some(_inner),
            ListDistributionConfigurationsErrorKind::ServiceUnavailableException(_inner) => Some(_inner),
            ListDistributionConfigurationsErrorKind::InvalidRequestException(_inner) => Some(_inner),
            ListDistributionConfigurationsErrorKind::ForbiddenException(_inner) => Some(_inner),
            ListDistributionConfigurationsErrorKind::CallRateLimitExceededException(_inner) => Some(_inner),
            ListDistributionConfigurationsErrorKind::InvalidPaginationTokenException(_inner) => Some(_inner),
            ListDistributionConfigurationsErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `ListImageBuildVersions` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct ListImageBuildVersionsError {
    /// Kind of error that occurred.
    pub kind: ListImageBuildVersionsErrorKind,
    /// Additional metadata about the error, including error code, message, and request ID.
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `ListImageBuildVersions` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum ListImageBuildVersionsErrorKind {
    ServiceException(crate::error::ServiceException),
    ClientException(crate::error::ClientException),
    ServiceUnavailableException(crate::error::ServiceUnavailableException),
    InvalidRequestException(crate::error::InvalidRequestException),
    ForbiddenException(crate::error::ForbiddenException),
    CallRateLimitExceededException(crate::error::CallRateLimitExceededException),
    InvalidPaginationTokenException(crate::error::InvalidPaginationTokenException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for ListImageBuildVersionsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ListImageBuildVersionsErrorKind::ServiceException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListImageBuildVersionsErrorKind::ClientException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListImageBuildVersionsErrorKind::ServiceUnavailableException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListImageBuildVersionsErrorKind::InvalidRequestException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListImageBuildVersionsErrorKind::ForbiddenException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListImageBuildVersionsErrorKind::CallRateLimitExceededException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListImageBuildVersionsErrorKind::InvalidPaginationTokenException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListImageBuildVersionsErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl ListImageBuildVersionsError {
    pub fn new(kind: ListImageBuildVersionsErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: ListImageBuildVersionsErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: ListImageBuildVersionsErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_service_exception(&self) -> bool {
        matches!(&self.kind, ListImageBuildVersionsErrorKind::ServiceException(_))
    }
    pub fn is_client_exception(&self) -> bool {
        matches!(&self.kind, ListImageBuildVersionsErrorKind::ClientException(_))
    }
    pub fn is_service_unavailable_exception(&self) -> bool {
        matches!(&self.kind, ListImageBuildVersionsErrorKind::ServiceUnavailableException(_))
    }
    pub fn is_invalid_request_exception(&self) -> bool {
        matches!(&self.kind, ListImageBuildVersionsErrorKind::InvalidRequestException(_))
    }
    pub fn is_forbidden_exception(&self) -> bool {
        matches!(&self.kind, ListImageBuildVersionsErrorKind::ForbiddenException(_))
    }
    pub fn is_call_rate_limit_exceeded_exception(&self) -> bool {
        matches!(&self.kind, ListImageBuildVersionsErrorKind::CallRateLimitExceededException(_))
    }
    pub fn is_invalid_pagination_token_exception(&self) -> bool {
        matches!(&self.kind, ListImageBuildVersionsErrorKind::InvalidPaginationTokenException(_))
    }
}
impl std::error::Error for ListImageBuildVersionsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ListImageBuildVersionsErrorKind::ServiceException(_inner) => Some(_inner),
            ListImageBuildVersionsErrorKind::ClientException(_inner) => Some(_inner),
            ListImageBuildVersionsErrorKind::ServiceUnavailableException(_inner) => Some(_inner),
            ListImageBuildVersionsErrorKind::InvalidRequestException(_inner) => Some(_inner),
            ListImageBuildVersionsErrorKind::ForbiddenException(_inner) => Some(_inner),
            ListImageBuildVersionsErrorKind::CallRateLimitExceededException(_inner) => Some(_inner),
            ListImageBuildVersionsErrorKind::InvalidPaginationTokenException(_inner) => Some(_inner),
            ListImageBuildVersionsErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `ListImagePipelineImages` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct ListImagePipelineImagesError {
    /// Kind of error that occurred.
    pub kind: ListImagePipelineImagesErrorKind,
    /// Additional metadata about the error, including error code, message, and request ID.
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `ListImagePipelineImages` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum ListImagePipelineImagesErrorKind {
    ServiceException(crate::error::ServiceException),
    ClientException(crate::error::ClientException),
    ServiceUnavailableException(crate::error::ServiceUnavailableException),
    InvalidRequestException(crate::error::InvalidRequestException),
    ForbiddenException(crate::error::ForbiddenException),
    CallRateLimitExceededException(crate::error::CallRateLimitExceededException),
    InvalidPaginationTokenException(crate::error::InvalidPaginationTokenException),
    ResourceNotFoundException(crate::error::ResourceNotFoundException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for ListImagePipelineImagesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ListImagePipelineImagesErrorKind::ServiceException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListImagePipelineImagesErrorKind::ClientException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListImagePipelineImagesErrorKind::ServiceUnavailableException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListImagePipelineImagesErrorKind::InvalidRequestException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListImagePipelineImagesErrorKind::ForbiddenException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListImagePipelineImagesErrorKind::CallRateLimitExceededException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListImagePipelineImagesErrorKind::InvalidPaginationTokenException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListImagePipelineImagesErrorKind::ResourceNotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListImagePipelineImagesErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl ListImagePipelineImagesError {
    pub fn new(kind: ListImagePipelineImagesErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: ListImagePipelineImagesErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: ListImagePipelineImagesErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_service_exception(&self) -> bool {
        matches!(&self.kind, ListImagePipelineImagesErrorKind::ServiceException(_))
    }
    pub fn is_client_exception(&self) -> bool {
        matches!(&self.kind, ListImagePipelineImagesErrorKind::ClientException(_))
    }
    pub fn is_service_unavailable_exception(&self) -> bool {
        matches!(&self.kind, ListImagePipelineImagesErrorKind::ServiceUnavailableException(_))
    }
    pub fn is_invalid_request_exception(&self) -> bool {
        matches!(&self.kind, ListImagePipelineImagesErrorKind::InvalidRequestException(_))
    }
    pub fn is_forbidden_exception(&self) -> bool {
        matches!(&self.kind, ListImagePipelineImagesErrorKind::ForbiddenException(_))
    }
    pub fn is_call_rate_limit_exceeded_exception(&self) -> bool {
        matches!(&self.kind, ListImagePipelineImagesErrorKind::CallRateLimitExceededException(_))
    }
    pub fn is_invalid_pagination_token_exception(&self) -> bool {
        matches!(&self.kind, ListImagePipelineImagesErrorKind::InvalidPaginationTokenException(_))
    }
    pub fn is_resource_not_found_exception(&self) -> bool {
        matches!(&self.kind, ListImagePipelineImagesErrorKind::ResourceNotFoundException(_))
    }
}
impl std::error::Error for ListImagePipelineImagesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ListImagePipelineImagesErrorKind::ServiceException(_inner) => Some(_inner),
            ListImagePipelineImagesErrorKind::ClientException(_inner) => Some(_inner),
            ListImagePipelineImagesErrorKind::ServiceUnavailableException(_inner) => Some(_inner),
            ListImagePipelineImagesErrorKind::InvalidRequestException(_inner) => Some(_inner),
            ListImagePipelineImagesErrorKind::ForbiddenException(_inner) => Some(_inner),
            ListImagePipelineImagesErrorKind::CallRateLimitExceededException(_inner) => Some(_inner),
            ListImagePipelineImagesErrorKind::InvalidPaginationTokenException(_inner) => Some(_inner),
            ListImagePipelineImagesErrorKind::ResourceNotFoundException(_inner) => Some(_inner),
            ListImagePipelineImagesErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `ListImagePipelines` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct ListImagePipelinesError {
    /// Kind of error that occurred.
    pub kind: ListImagePipelinesErrorKind,
    /// Additional metadata about the error, including error code, message, and request ID.
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `ListImagePipelines` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum ListImagePipelinesErrorKind {
    ServiceException(crate::error::ServiceException),
    ClientException(crate::error::ClientException),
    ServiceUnavailableException(crate::error::ServiceUnavailableException),
    InvalidRequestException(crate::error::InvalidRequestException),
    ForbiddenException(crate::error::ForbiddenException),
    CallRateLimitExceededException(crate::error::CallRateLimitExceededException),
    InvalidPaginationTokenException(crate::error::InvalidPaginationTokenException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for ListImagePipelinesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ListImagePipelinesErrorKind::ServiceException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListImagePipelinesErrorKind::ClientException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListImagePipelinesErrorKind::ServiceUnavailableException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListImagePipelinesErrorKind::InvalidRequestException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListImagePipelinesErrorKind::ForbiddenException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListImagePipelinesErrorKind::CallRateLimitExceededException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListImagePipelinesErrorKind::InvalidPaginationTokenException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListImagePipelinesErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl ListImagePipelinesError {
    pub fn new(kind: ListImagePipelinesErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: ListImagePipelinesErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: ListImagePipelinesErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_service_exception(&self) -> bool {
        matches!(&self.kind, ListImagePipelinesErrorKind::ServiceException(_))
    }
    pub fn is_client_exception(&self) -> bool {
        matches!(&self.kind, ListImagePipelinesErrorKind::ClientException(_))
    }
    pub fn is_service_unavailable_exception(&self) -> bool {
        matches!(&self.kind, ListImagePipelinesErrorKind::ServiceUnavailableException(_))
    }
    pub fn is_invalid_request_exception(&self) -> bool {
        matches!(&self.kind, ListImagePipelinesErrorKind::InvalidRequestException(_))
    }
    pub fn is_forbidden_exception(&self) -> bool {
        matches!(&self.kind, ListImagePipelinesErrorKind::ForbiddenException(_))
    }
    pub fn is_call_rate_limit_exceeded_exception(&self) -> bool {
        matches!(&self.kind, ListImagePipelinesErrorKind::CallRateLimitExceededException(_))
    }
    pub fn is_invalid_pagination_token_exception(&self) -> bool {
        matches!(&self.kind, ListImagePipelinesErrorKind::InvalidPaginationTokenException(_))
    }
}
impl std::error::Error for ListImagePipelinesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ListImagePipelinesErrorKind::ServiceException(_inner) => Some(_inner),
            ListImagePipelinesErrorKind::ClientException(_inner) => Some(_inner),
            ListImagePipelinesErrorKind::ServiceUnavailableException(_inner) => Some(_inner),
            ListImagePipelinesErrorKind::InvalidRequestException(_inner) => Some(_inner),
            ListImagePipelinesErrorKind::ForbiddenException(_inner) => Some(_inner),
            ListImagePipelinesErrorKind::CallRateLimitExceededException(_inner) => Some(_inner),
            ListImagePipelinesErrorKind::InvalidPaginationTokenException(_inner) => Some(_inner),
            ListImagePipelinesErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `ListImageRecipes` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct ListImageRecipesError {
    /// Kind of error that occurred.
    pub kind: ListImageRecipesErrorKind,
    /// Additional metadata about the error, including error code, message, and request ID.
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `ListImageRecipes` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum ListImageRecipesErrorKind {
    ServiceException(crate::error::ServiceException),
    ClientException(crate::error::ClientException),
    ServiceUnavailableException(crate::error::ServiceUnavailableException),
    InvalidRequestException(crate::error::InvalidRequestException),
    ForbiddenException(crate::error::ForbiddenException),
    CallRateLimitExceededException(crate::error::CallRateLimitExceededException),
    InvalidPaginationTokenException(crate::error::InvalidPaginationTokenException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for ListImageRecipesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ListImageRecipesErrorKind::ServiceException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListImageRecipesErrorKind::ClientException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListImageRecipesErrorKind::ServiceUnavailableException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListImageRecipesErrorKind::InvalidRequestException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListImageRecipesErrorKind::ForbiddenException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListImageRecipesErrorKind::CallRateLimitExceededException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListImageRecipesErrorKind::InvalidPaginationTokenException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListImageRecipesErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl ListImageRecipesError {
    pub fn new(kind: ListImageRecipesErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: ListImageRecipesErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: ListImageRecipesErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_service_exception(&self) -> bool {
        matches!(&self.kind, ListImageRecipesErrorKind::ServiceException(_))
    }
    pub fn is_client_exception(&self) -> bool {
        matches!(&self.kind, ListImageRecipesErrorKind::ClientException(_))
    }
    pub fn is_service_unavailable_exception(&self) -> bool {
        matches!(&self.kind, ListImageRecipesErrorKind::ServiceUnavailableException(_))
    }
    pub fn is_invalid_request_exception(&self) -> bool {
        matches!(&self.kind, ListImageRecipesErrorKind::InvalidRequestException(_))
    }
    pub fn is_forbidden_exception(&self) -> bool {
        matches!(&self.kind, ListImageRecipesErrorKind::ForbiddenException(_))
    }
    pub fn is_call_rate_limit_exceeded_exception(&self) -> bool {
        matches!(&self.kind, ListImageRecipesErrorKind::CallRateLimitExceededException(_))
    }
    pub fn is_invalid_pagination_token_exception(&self) -> bool {
        matches!(&self.kind, ListImageRecipesErrorKind::InvalidPaginationTokenException(_))
    }
}
impl std::error::Error for ListImageRecipesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ListImageRecipesErrorKind::ServiceException(_inner) => Some(_inner),
            ListImageRecipesErrorKind::ClientException(_inner) => Some(_inner),
            ListImageRecipesErrorKind::ServiceUnavailableException(_inner) => Some(_inner),
            ListImageRecipesErrorKind::InvalidRequestException(_inner) => Some(_inner),
            ListImageRecipesErrorKind::ForbiddenException(_inner) => Some(_inner),
            ListImageRecipesErrorKind::CallRateLimitExceededException(_inner) => Some(_inner),
            ListImageRecipesErrorKind::InvalidPaginationTokenException(_inner) => Some(_inner),
            ListImageRecipesErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `ListImages` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct ListImagesError {
    /// Kind of error that occurred.
    pub kind: ListImagesErrorKind,
    /// Additional metadata about the error, including error code, message, and request ID.
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `ListImages` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum ListImagesErrorKind {
    ServiceException(crate::error::ServiceException),
    ClientException(crate::error::ClientException),
    ServiceUnavailableException(crate::error::ServiceUnavailableException),
    InvalidRequestException(crate::error::InvalidRequestException),
    ForbiddenException(crate::error::ForbiddenException),
    CallRateLimitExceededException(crate::error::CallRateLimitExceededException),
    InvalidPaginationTokenException(crate::error::InvalidPaginationTokenException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for ListImagesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ListImagesErrorKind::ServiceException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListImagesErrorKind::ClientException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListImagesErrorKind::ServiceUnavailableException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListImagesErrorKind::InvalidRequestException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListImagesErrorKind::ForbiddenException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListImagesErrorKind::CallRateLimitExceededException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListImagesErrorKind::InvalidPaginationTokenException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListImagesErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl ListImagesError {
    pub fn new(kind: ListImagesErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: ListImagesErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: ListImagesErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_service_exception(&self) -> bool {
        matches!(&self.kind, ListImagesErrorKind::ServiceException(_))
    }
    pub fn is_client_exception(&self) -> bool {
        matches!(&self.kind, ListImagesErrorKind::ClientException(_))
    }
    pub fn is_service_unavailable_exception(&self) -> bool {
        matches!(&self.kind, ListImagesErrorKind::ServiceUnavailableException(_))
    }
    pub fn is_invalid_request_exception(&self) -> bool {
        matches!(&self.kind, ListImagesErrorKind::InvalidRequestException(_))
    }
    pub fn is_forbidden_exception(&self) -> bool {
        matches!(&self.kind, ListImagesErrorKind::ForbiddenException(_))
    }
    pub fn is_call_rate_limit_exceeded_exception(&self) -> bool {
        matches!(&self.kind, ListImagesErrorKind::CallRateLimitExceededException(_))
    }
    pub fn is_invalid_pagination_token_exception(&self) -> bool {
        matches!(&self.kind, ListImagesErrorKind::InvalidPaginationTokenException(_))
    }
}
impl std::error::Error for ListImagesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ListImagesErrorKind::ServiceException(_inner) => Some(_inner),
            ListImagesErrorKind::ClientException(_inner) => Some(_inner),
            ListImagesErrorKind::ServiceUnavailableException(_inner) => Some(_inner),
            ListImagesErrorKind::InvalidRequestException(_inner) => Some(_inner),
            ListImagesErrorKind::ForbiddenException(_inner) => Some(_inner),
            ListImagesErrorKind::CallRateLimitExceededException(_inner) => Some(_inner),
            ListImagesErrorKind::InvalidPaginationTokenException(_inner) => Some(_inner),
            ListImagesErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `ListInfrastructureConfigurations` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct ListInfrastructureConfigurationsError {
    /// Kind of error that occurred.
    pub kind: ListInfrastructureConfigurationsErrorKind,
    /// Additional metadata about the error, including error code, message, and request ID.
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `ListInfrastructureConfigurations` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum ListInfrastructureConfigurationsErrorKind {
    ServiceException(crate::error::ServiceException),
    ClientException(crate::error::ClientException),
    ServiceUnavailableException(crate::error::ServiceUnavailableException),
    InvalidRequestException(crate::error::InvalidRequestException),
    ForbiddenException(crate::error::ForbiddenException),
    CallRateLimitExceededException(crate::error::CallRateLimitExceededException),
    InvalidPaginationTokenException(crate::error::InvalidPaginationTokenException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for ListInfrastructureConfigurationsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ListInfrastructureConfigurationsErrorKind::ServiceException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListInfrastructureConfigurationsErrorKind::ClientException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListInfrastructureConfigurationsErrorKind::ServiceUnavailableException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListInfrastructureConfigurationsErrorKind::InvalidRequestException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListInfrastructureConfigurationsErrorKind::ForbiddenException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListInfrastructureConfigurationsErrorKind::CallRateLimitExceededException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListInfrastructureConfigurationsErrorKind::InvalidPaginationTokenException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListInfrastructureConfigurationsErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl ListInfrastructureConfigurationsError {
    pub fn new(kind: ListInfrastructureConfigurationsErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: ListInfrastructureConfigurationsErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: ListInfrastructureConfigurationsErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_service_exception(&self) -> bool {
        matches!(&self.kind, ListInfrastructureConfigurationsErrorKind::ServiceException(_))
    }
    pub fn is_client_exception(&self) -> bool {
        matches!(&self.kind, ListInfrastructureConfigurationsErrorKind::ClientException(_))
    }
    pub fn is_service_unavailable_exception(&self) -> bool {
        matches!(&self.kind, ListInfrastructureConfigurationsErrorKind::ServiceUnavailableException(_))
    }
    pub fn is_invalid_request_exception(&self) -> bool {
        matches!(&self.kind, ListInfrastructureConfigurationsErrorKind::InvalidRequestException(_))
    }
    pub fn is_forbidden_exception(&self) -> bool {
        matches!(&self.kind, ListInfrastructureConfigurationsErrorKind::ForbiddenException(_))
    }
    pub fn is_call_rate_limit_exceeded_exception(&self) -> bool {
        matches!(&self.kind, ListInfrastructureConfigurationsErrorKind::CallRateLimitExceededException(_))
    }
    pub fn is_invalid_pagination_token_exception(&self) -> bool {
        matches!(&self.kind, ListInfrastructureConfigurationsErrorKind::InvalidPaginationTokenException(_))
    }
}
impl std::error::Error for ListInfrastructureConfigurationsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ListInfrastructureConfigurationsErrorKind::ServiceException(_inner) => Some(_inner),
            ListInfrastructureConfigurationsErrorKind::ClientException(_inner) => Some(_inner),
            ListInfrastructureConfigurationsErrorKind::ServiceUnavailableException(_inner) => Some(_inner),
            ListInfrastructureConfigurationsErrorKind::InvalidRequestException(_inner) => Some(_inner),
            ListInfrastructureConfigurationsErrorKind::ForbiddenException(_inner) => Some(_inner),
            ListInfrastructureConfigurationsErrorKind::CallRateLimitExceededException(_inner) => Some(_inner),
            ListInfrastructureConfigurationsErrorKind::InvalidPaginationTokenException(_inner) => Some(_inner),
            ListInfrastructureConfigurationsErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `ListTagsForResource` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct ListTagsForResourceError {
    /// Kind of error that occurred.
    pub kind: ListTagsForResourceErrorKind,
    /// Additional metadata about the error, including error code, message, and request ID.
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `ListTagsForResource` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum ListTagsForResourceErrorKind {
    ServiceException(crate::error::ServiceException),
    InvalidParameterException(crate::error::InvalidParameterException),
    ResourceNotFoundException(crate::error::ResourceNotFoundException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for ListTagsForResourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ListTagsForResourceErrorKind::ServiceException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListTagsForResourceErrorKind::InvalidParameterException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListTagsForResourceErrorKind::ResourceNotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListTagsForResourceErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl ListTagsForResourceError {
    pub fn new(kind: ListTagsForResourceErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: ListTagsForResourceErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: ListTagsForResourceErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_service_exception(&self) -> bool {
        matches!(&self.kind, ListTagsForResourceErrorKind::ServiceException(_))
    }
    pub fn is_invalid_parameter_exception(&self) -> bool {
        matches!(&self.kind, ListTagsForResourceErrorKind::InvalidParameterException(_))
    }
    pub fn is_resource_not_found_exception(&self) -> bool {
        matches!(&self.kind, ListTagsForResourceErrorKind::ResourceNotFoundException(_))
    }
}
impl std::error::Error for ListTagsForResourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ListTagsForResourceErrorKind::ServiceException(_inner) => Some(_inner),
            ListTagsForResourceErrorKind::InvalidParameterException(_inner) => Some(_inner),
            ListTagsForResourceErrorKind::ResourceNotFoundException(_inner) => Some(_inner),
            ListTagsForResourceErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `PutComponentPolicy` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct PutComponentPolicyError {
    /// Kind of error that occurred.
    pub kind: PutComponentPolicyErrorKind,
    /// Additional metadata about the error, including error code, message, and request ID.
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `PutComponentPolicy` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum PutComponentPolicyErrorKind {
    ServiceException(crate::error::ServiceException),
    ServiceUnavailableException(crate::error::ServiceUnavailableException),
    InvalidParameterValueException(crate::error::InvalidParameterValueException),
    ResourceNotFoundException(crate::error::ResourceNotFoundException),
    InvalidRequestException(crate::error::InvalidRequestException),
    ForbiddenException(crate::error::ForbiddenException),
    CallRateLimitExceededException(crate::error::CallRateLimitExceededException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for PutComponentPolicyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            PutComponentPolicyErrorKind::ServiceException(_inner) => std::fmt::Display::fmt(_inner, f),
            PutComponentPolicyErrorKind::ServiceUnavailableException(_inner) => std::fmt::Display::fmt(_inner, f),
            PutComponentPolicyErrorKind::InvalidParameterValueException(_inner) => std::fmt::Display::fmt(_inner, f),
            PutComponentPolicyErrorKind::ResourceNotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            PutComponentPolicyErrorKind::InvalidRequestException(_inner) => std::fmt::Display::fmt(_inner, f),
            PutComponentPolicyErrorKind::ForbiddenException(_inner) => std::fmt::Display::fmt(_inner, f),
            PutComponentPolicyErrorKind::CallRateLimitExceededException(_inner) => std::fmt::Display::fmt(_inner, f),
            PutComponentPolicyErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl PutComponentPolicyError {
    pub fn new(kind: PutComponentPolicyErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: PutComponentPolicyErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: PutComponentPolicyErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_service_exception(&self) -> bool {
        matches!(&self.kind, PutComponentPolicyErrorKind::ServiceException(_))
    }
    pub fn is_service_unavailable_exception(&self) -> bool {
        matches!(&self.kind, PutComponentPolicyErrorKind::ServiceUnavailableException(_))
    }
    pub fn is_invalid_parameter_value_exception(&self) -> bool {
        matches!(&self.kind, PutComponentPolicyErrorKind::InvalidParameterValueException(_))
    }
    pub fn is_resource_not_found_exception(&self) -> bool {
        matches!(&self.kind, PutComponentPolicyErrorKind::ResourceNotFoundException(_))
    }
    pub fn is_invalid_request_exception(&self) -> bool {
        matches!(&self.kind, PutComponentPolicyErrorKind::InvalidRequestException(_))
    }
    pub fn is_forbidden_exception(&self) -> bool {
        matches!(&self.kind, PutComponentPolicyErrorKind::ForbiddenException(_))
    }
    pub fn is_call_rate_limit_exceeded_exception(&self) -> bool {
        matches!(&self.kind, PutComponentPolicyErrorKind::CallRateLimitExceededException(_))
    }
}
impl std::error::Error for PutComponentPolicyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            PutComponentPolicyErrorKind::ServiceException(_inner) => Some(_inner),
            PutComponentPolicyErrorKind::ServiceUnavailableException(_inner) => Some(_inner),
            PutComponentPolicyErrorKind::InvalidParameterValueException(_inner) => Some(_inner),
            PutComponentPolicyErrorKind::ResourceNotFoundException(_inner) => Some(_inner),
            PutComponentPolicyErrorKind::InvalidRequestException(_inner) => Some(_inner),
            PutComponentPolicyErrorKind::ForbiddenException(_inner) => Some(_inner),
            PutComponentPolicyErrorKind::CallRateLimitExceededException(_inner) => Some(_inner),
            PutComponentPolicyErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `PutImagePolicy` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct PutImagePolicyError {
    /// Kind of error that occurred.
    pub kind: PutImagePolicyErrorKind,
    /// Additional metadata about the error, including error code, message, and request ID.
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `PutImagePolicy` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum PutImagePolicyErrorKind {
    ServiceException(crate::error::ServiceException),
    ServiceUnavailableException(crate::error::ServiceUnavailableException),
    InvalidParameterValueException(crate::error::InvalidParameterValueException),
    ResourceNotFoundException(crate::error::ResourceNotFoundException),
    InvalidRequestException(crate::error::InvalidRequestException),
    ForbiddenException(crate::error::ForbiddenException),
    CallRateLimitExceededException(crate::error::CallRateLimitExceededException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for PutImagePolicyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            PutImagePolicyErrorKind::ServiceException(_inner) => std::fmt::Display::fmt(_inner, f),
            PutImagePolicyErrorKind::ServiceUnavailableException(_inner) => std::fmt::Display::fmt(_inner, f),
            PutImagePolicyErrorKind::InvalidParameterValueException(_inner) => std::fmt::Display::fmt(_inner, f),
            PutImagePolicyErrorKind::ResourceNotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            PutImagePolicyErrorKind::InvalidRequestException(_inner) => std::fmt::Display::fmt(_inner, f),
            PutImagePolicyErrorKind::ForbiddenException(_inner) => std::fmt::Display::fmt(_inner, f),
            PutImagePolicyErrorKind::CallRateLimitExceededException(_inner) => std::fmt::Display::fmt(_inner, f),
            PutImagePolicyErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl PutImagePolicyError {
    pub fn new(kind: PutImagePolicyErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: PutImagePolicyErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: PutImagePolicyErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_service_exception(&self) -> bool {
        matches!(&self.kind, PutImagePolicyErrorKind::ServiceException(_))
    }
    pub fn is_service_unavailable_exception(&self) -> bool {
        matches!(&self.kind, PutImagePolicyErrorKind::ServiceUnavailableException(_))
    }
    pub fn is_invalid_parameter_value_exception(&self) -> bool {
        matches!(&self.kind, PutImagePolicyErrorKind::InvalidParameterValueException(_))
    }
    pub fn is_resource_not_found_exception(&self) -> bool {
        matches!(&self.kind, PutImagePolicyErrorKind::ResourceNotFoundException(_))
    }
    pub fn is_invalid_request_exception(&self) -> bool {
        matches!(&self.kind, PutImagePolicyErrorKind::InvalidRequestException(_))
    }
    pub fn is_forbidden_exception(&self) -> bool {
        matches!(&self.kind, PutImagePolicyErrorKind::ForbiddenException(_))
    }
    pub fn is_call_rate_limit_exceeded_exception(&self) -> bool {
        matches!(&self.kind, PutImagePolicyErrorKind::CallRateLimitExceededException(_))
    }
}
impl std::error::Error for PutImagePolicyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            PutImagePolicyErrorKind::ServiceException(_inner) => Some(_inner),
            PutImagePolicyErrorKind::ServiceUnavailableException(_inner) => Some(_inner),
            PutImagePolicyErrorKind::InvalidParameterValueException(_inner) => Some(_inner),
            PutImagePolicyErrorKind::ResourceNotFoundException(_inner) => Some(_inner),
            PutImagePolicyErrorKind::InvalidRequestException(_inner) => Some(_inner),
            PutImagePolicyErrorKind::ForbiddenException(_inner) => Some(_inner),
            PutImagePolicyErrorKind::CallRateLimitExceededException(_inner) => Some(_inner),
            PutImagePolicyErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `PutImageRecipePolicy` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct PutImageRecipePolicyError {
    /// Kind of error that occurred.
    pub kind: PutImageRecipePolicyErrorKind,
    /// Additional metadata about the error, including error code, message, and request ID.
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `PutImageRecipePolicy` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum PutImageRecipePolicyErrorKind {
    ServiceException(crate::error::ServiceException),
    ServiceUnavailableException(crate::error::ServiceUnavailableException),
    InvalidParameterValueException(crate::error::InvalidParameterValueException),
    ResourceNotFoundException(crate::error::ResourceNotFoundException),
    InvalidRequestException(crate::error::InvalidRequestException),
    ForbiddenException(crate::error::ForbiddenException),
    CallRateLimitExceededException(crate::error::CallRateLimitExceededException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for PutImageRecipePolicyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            PutImageRecipePolicyErrorKind::ServiceException(_inner) => std::fmt::Display::fmt(_inner, f),
            PutImageRecipePolicyErrorKind::ServiceUnavailableException(_inner) => std::fmt::Display::fmt(_inner, f),
            PutImageRecipePolicyErrorKind::InvalidParameterValueException(_inner) => std::fmt::Display::fmt(_inner, f),
            PutImageRecipePolicyErrorKind::ResourceNotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            PutImageRecipePolicyErrorKind::InvalidRequestException(_inner) => std::fmt::Display::fmt(_inner, f),
            PutImageRecipePolicyErrorKind::ForbiddenException(_inner) => std::fmt::Display::fmt(_inner, f),
            PutImageRecipePolicyErrorKind::CallRateLimitExceededException(_inner) => std::fmt::Display::fmt(_inner, f),
            PutImageRecipePolicyErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl PutImageRecipePolicyError {
    pub fn new(kind: PutImageRecipePolicyErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: PutImageRecipePolicyErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: PutImageRecipePolicyErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_service_exception(&self) -> bool {
        matches!(&self.kind, PutImageRecipePolicyErrorKind::ServiceException(_))
    }
    pub fn is_service_unavailable_exception(&self) -> bool {
        matches!(&self.kind, PutImageRecipePolicyErrorKind::ServiceUnavailableException(_))
    }
    pub fn is_invalid_parameter_value_exception(&self) -> bool {
        matches!(&self.kind, PutImageRecipePolicyErrorKind::InvalidParameterValueException(_))
    }
    pub fn is_resource_not_found_exception(&self) -> bool {
        matches!(&self.kind, PutImageRecipePolicyErrorKind::ResourceNotFoundException(_))
    }
    pub fn is_invalid_request_exception(&self) -> bool {
        matches!(&self.kind, PutImageRecipePolicyErrorKind::InvalidRequestException(_))
    }
    pub fn is_forbidden_exception(&self) -> bool {
        matches!(&self.kind, PutImageRecipePolicyErrorKind::ForbiddenException(_))
    }
    pub fn is_call_rate_limit_exceeded_exception(&self) -> bool {
        matches!(&self.kind, PutImageRecipePolicyErrorKind::CallRateLimitExceededException(_))
    }
}
impl std::error::Error for PutImageRecipePolicyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            PutImageRecipePolicyErrorKind::ServiceException(_inner) => Some(_inner),
            PutImageRecipePolicyErrorKind::ServiceUnavailableException(_inner) => Some(_inner),
            PutImageRecipePolicyErrorKind::InvalidParameterValueException(_inner) => Some(_inner),
            PutImageRecipePolicyErrorKind::ResourceNotFoundException(_inner) => Some(_inner),
            PutImageRecipePolicyErrorKind::InvalidRequestException(_inner) => Some(_inner),
            PutImageRecipePolicyErrorKind::ForbiddenException(_inner) => Some(_inner),
            PutImageRecipePolicyErrorKind::CallRateLimitExceededException(_inner) => Some(_inner),
            PutImageRecipePolicyErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `StartImagePipelineExecution` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct StartImagePipelineExecutionError {
    /// Kind of error that occurred.
    pub kind: StartImagePipelineExecutionErrorKind,
    /// Additional metadata about the error, including error code, message, and request ID.
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `StartImagePipelineExecution` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum StartImagePipelineExecutionErrorKind {
    ServiceException(crate::error::ServiceException),
    ClientException(crate::error::ClientException),
    ServiceUnavailableException(crate::error::ServiceUnavailableException),
    InvalidRequestException(crate::error::InvalidRequestException),
    ForbiddenException(crate::error::ForbiddenException),
    CallRateLimitExceededException(crate::error::CallRateLimitExceededException),
    ResourceNotFoundException(crate::error::ResourceNotFoundException),
    IdempotentParameterMismatchException(crate::error::IdempotentParameterMismatchException),
    ResourceInUseException(crate::error::ResourceInUseException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for StartImagePipelineExecutionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            StartImagePipelineExecutionErrorKind::ServiceException(_inner) => std::fmt::Display::fmt(_inner, f),
            StartImagePipelineExecutionErrorKind::ClientException(_inner) => std::fmt::Display::fmt(_inner, f),
            StartImagePipelineExecutionErrorKind::ServiceUnavailableException(_inner) => std::fmt::Display::fmt(_inner, f),
            StartImagePipelineExecutionErrorKind::InvalidRequestException(_inner) => std::fmt::Display::fmt(_inner, f),
            StartImagePipelineExecutionErrorKind::ForbiddenException(_inner) => std::fmt::Display::fmt(_inner, f),
            StartImagePipelineExecutionErrorKind::CallRateLimitExceededException(_inner) => std::fmt::Display::fmt(_inner, f),
            StartImagePipelineExecutionErrorKind::ResourceNotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            StartImagePipelineExecutionErrorKind::IdempotentParameterMismatchException(_inner) => std::fmt::Display::fmt(_inner, f),
            StartImagePipelineExecutionErrorKind::ResourceInUseException(_inner) => std::fmt::Display::fmt(_inner, f),
            StartImagePipelineExecutionErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl StartImagePipelineExecutionError {
    pub fn new(kind: StartImagePipelineExecutionErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: StartImagePipelineExecutionErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: StartImagePipelineExecutionErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_service_exception(&self) -> bool {
        matches!(&self.kind, StartImagePipelineExecutionErrorKind::ServiceException(_))
    }
    pub fn is_client_exception(&self) -> bool {
        matches!(&self.kind, StartImagePipelineExecutionErrorKind::ClientException(_))
    }
    pub fn is_service_unavailable_exception(&self) -> bool {
        matches!(&self.kind, StartImagePipelineExecutionErrorKind::ServiceUnavailableException(_))
    }
    pub fn is_invalid_request_exception(&self) -> bool {
        matches!(&self.kind, StartImagePipelineExecutionErrorKind::InvalidRequestException(_))
    }
    pub fn is_forbidden_exception(&self) -> bool {
        matches!(&self.kind, StartImagePipelineExecutionErrorKind::ForbiddenException(_))
    }
    pub fn is_call_rate_limit_exceeded_exception(&self) -> bool {
        matches!(&self.kind, StartImagePipelineExecutionErrorKind::CallRateLimitExceededException(_))
    }
    pub fn is_resource_not_found_exception(&self) -> bool {
        matches!(&self.kind, StartImagePipelineExecutionErrorKind::ResourceNotFoundException(_))
    }
    pub fn is_idempotent_parameter_mismatch_exception(&self) -> bool {
        matches!(&self.kind, StartImagePipelineExecutionErrorKind::IdempotentParameterMismatchException(_))
    }
    pub fn is_resource_in_use_exception(&self) -> bool {
        matches!(&self.kind, StartImagePipelineExecutionErrorKind::ResourceInUseException(_))
    }
}
impl std::error::Error for StartImagePipelineExecutionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            StartImagePipelineExecutionErrorKind::ServiceException(_inner) => Some(_inner),
            StartImagePipelineExecutionErrorKind::ClientException(_inner) => Some(_inner),
            StartImagePipelineExecutionErrorKind::ServiceUnavailableException(_inner) => Some(_inner),
            StartImagePipelineExecutionErrorKind::InvalidRequestException(_inner) => Some(_inner),
            StartImagePipelineExecutionErrorKind::ForbiddenException(_inner) => Some(_inner),
            StartImagePipelineExecutionErrorKind::CallRateLimitExceededException(_inner) => Some(_inner),
            StartImagePipelineExecutionErrorKind::ResourceNotFoundException(_inner) => Some(_inner),
            StartImagePipelineExecutionErrorKind::IdempotentParameterMismatchException(_inner) => Some(_inner),
            StartImagePipelineExecutionErrorKind::ResourceInUseException(_inner) => Some(_inner),
            StartImagePipelineExecutionErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `TagResource` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct TagResourceError {
    /// Kind of error that occurred.
    pub kind: TagResourceErrorKind,
    /// Additional metadata about the error, including error code, message, and request ID.
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `TagResource` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum TagResourceErrorKind {
    ServiceException(crate::error::ServiceException),
    InvalidParameterException(crate::error::InvalidParameterException),
    ResourceNotFoundException(crate::error::ResourceNotFoundException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for TagResourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            TagResourceErrorKind::ServiceException(_inner) => std::fmt::Display::fmt(_inner, f),
            TagResourceErrorKind::InvalidParameterException(_inner) => std::fmt::Display::fmt(_inner, f),
            TagResourceErrorKind::ResourceNotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            TagResourceErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl TagResourceError {
    pub fn new(kind: TagResourceErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: TagResourceErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: TagResourceErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_service_exception(&self) -> bool {
        matches!(&self.kind, TagResourceErrorKind::ServiceException(_))
    }
    pub fn is_invalid_parameter_exception(&self) -> bool {
        matches!(&self.kind, TagResourceErrorKind::InvalidParameterException(_))
    }
    pub fn is_resource_not_found_exception(&self) -> bool {
        matches!(&self.kind, TagResourceErrorKind::ResourceNotFoundException(_))
    }
}
impl std::error::Error for TagResourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            TagResourceErrorKind::ServiceException(_inner) => Some(_inner),
            TagResourceErrorKind::InvalidParameterException(_inner) => Some(_inner),
            TagResourceErrorKind::ResourceNotFoundException(_inner) => Some(_inner),
            TagResourceErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `UntagResource` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct UntagResourceError {
    /// Kind of error that occurred.
    pub kind: UntagResourceErrorKind,
    /// Additional metadata about the error, including error code, message, and request ID.
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `UntagResource` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum UntagResourceErrorKind {
    ServiceException(crate::error::ServiceException),
    InvalidParameterException(crate::error::InvalidParameterException),
    ResourceNotFoundException(crate::error::ResourceNotFoundException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for UntagResourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            UntagResourceErrorKind::ServiceException(_inner) => std::fmt::Display::fmt(_inner, f),
            UntagResourceErrorKind::InvalidParameterException(_inner) => std::fmt::Display::fmt(_inner, f),
            UntagResourceErrorKind::ResourceNotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            UntagResourceErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl UntagResourceError {
    pub fn new(kind: UntagResourceErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: UntagResourceErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: UntagResourceErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_service_exception(&self) -> bool {
        matches!(&self.kind, UntagResourceErrorKind::ServiceException(_))
    }
    pub fn is_invalid_parameter_exception(&self) -> bool {
        matches!(&self.kind, UntagResourceErrorKind::InvalidParameterException(_))
    }
    pub fn is_resource_not_found_exception(&self) -> bool {
        matches!(&self.kind, UntagResourceErrorKind::ResourceNotFoundException(_))
    }
}
impl std::error::Error for UntagResourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            UntagResourceErrorKind::ServiceException(_inner) => Some(_inner),
            UntagResourceErrorKind::InvalidParameterException(_inner) => Some(_inner),
            UntagResourceErrorKind::ResourceNotFoundException(_inner) => Some(_inner),
            UntagResourceErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `UpdateDistributionConfiguration` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct UpdateDistributionConfigurationError {
    /// Kind of error that occurred.
    pub kind: UpdateDistributionConfigurationErrorKind,
    /// Additional metadata about the error, including error code, message, and request ID.
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `UpdateDistributionConfiguration` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum UpdateDistributionConfigurationErrorKind {
    ServiceException(crate::error::ServiceException),
    ClientException(crate::error::ClientException),
    ServiceUnavailableException(crate::error::ServiceUnavailableException),
    InvalidRequestException(crate::error::InvalidRequestException),
    ForbiddenException(crate::error::ForbiddenException),
    CallRateLimitExceededException(crate::error::CallRateLimitExceededException),
    IdempotentParameterMismatchException(crate::error::IdempotentParameterMismatchException),
    ResourceInUseException(crate::error::ResourceInUseException),
    InvalidParameterCombinationException(crate::error::InvalidParameterCombinationException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for UpdateDistributionConfigurationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            UpdateDistributionConfigurationErrorKind::ServiceException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateDistributionConfigurationErrorKind::ClientException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateDistributionConfigurationErrorKind::ServiceUnavailableException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateDistributionConfigurationErrorKind::InvalidRequestException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateDistributionConfigurationErrorKind::ForbiddenException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateDistributionConfigurationErrorKind::CallRateLimitExceededException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateDistributionConfigurationErrorKind::IdempotentParameterMismatchException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateDistributionConfigurationErrorKind::ResourceInUseException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateDistributionConfigurationErrorKind::InvalidParameterCombinationException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateDistributionConfigurationErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl UpdateDistributionConfigurationError {
    pub fn new(kind: UpdateDistributionConfigurationErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: UpdateDistributionConfigurationErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: UpdateDistributionConfigurationErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_service_exception(&self) -> bool {
        matches!(&self.kind, UpdateDistributionConfigurationErrorKind::ServiceException(_))
    }
    pub fn is_client_exception(&self) -> bool {
        matches!(&self.kind, UpdateDistributionConfigurationErrorKind::ClientException(_))
    }
    pub fn is_service_unavailable_exception(&self) -> bool {
        matches!(&self.kind, UpdateDistributionConfigurationErrorKind::ServiceUnavailableException(_))
    }
    pub fn is_invalid_request_exception(&self) -> bool {
        matches!(&self.kind, UpdateDistributionConfigurationErrorKind::InvalidRequestException(_))
    }
    pub fn is_forbidden_exception(&self) -> bool {
        matches!(&self.kind, UpdateDistributionConfigurationErrorKind::ForbiddenException(_))
    }
    pub fn is_call_rate_limit_exceeded_exception(&self) -> bool {
        matches!(&self.kind, UpdateDistributionConfigurationErrorKind::CallRateLimitExceededException(_))
    }
    pub fn is_idempotent_parameter_mismatch_exception(&self) -> bool {
        matches!(&self.kind, UpdateDistributionConfigurationErrorKind::IdempotentParameterMismatchException(_))
    }
    pub fn is_resource_in_use_exception(&self) -> bool {
        matches!(&self.kind, UpdateDistributionConfigurationErrorKind::ResourceInUseException(_))
    }
    pub fn is_invalid_parameter_combination_exception(&self) -> bool {
        matches!(&self.kind, UpdateDistributionConfigurationErrorKind::InvalidParameterCombinationException(_))
    }
}
impl std::error::Error for UpdateDistributionConfigurationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            UpdateDistributionConfigurationErrorKind::ServiceException(_inner) => Some(_inner),
            UpdateDistributionConfigurationErrorKind::ClientException(_inner) => Some(_inner),
            UpdateDistributionConfigurationErrorKind::ServiceUnavailableException(_inner) => Some(_inner),
            UpdateDistributionConfigurationErrorKind::InvalidRequestException(_inner) => Some(_inner),
            UpdateDistributionConfigurationErrorKind::ForbiddenException(_inner) => Some(_inner),
            UpdateDistributionConfigurationErrorKind::CallRateLimitExceededException(_inner) => Some(_inner),
            UpdateDistributionConfigurationErrorKind::IdempotentParameterMismatchException(_inner) => Some(_inner),
            UpdateDistributionConfigurationErrorKind::ResourceInUseException(_inner) => Some(_inner),
            UpdateDistributionConfigurationErrorKind::InvalidParameterCombinationException(_inner) => Some(_inner),
            UpdateDistributionConfigurationErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `UpdateImagePipeline` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct UpdateImagePipelineError {
    /// Kind of error that occurred.
    pub kind: UpdateImagePipelineErrorKind,
    /// Additional metadata about the error, including error code, message, and request ID.
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `UpdateImagePipeline` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum UpdateImagePipelineErrorKind {
    ServiceException(crate::error::ServiceException),
    ClientException(crate::error::ClientException),
    ServiceUnavailableException(crate::error::ServiceUnavailableException),
    InvalidRequestException(crate::error::InvalidRequestException),
    ForbiddenException(crate::error::ForbiddenException),
    CallRateLimitExceededException(crate::error::CallRateLimitExceededException),
    IdempotentParameterMismatchException(crate::error::IdempotentParameterMismatchException),
    ResourceInUseException(crate::error::ResourceInUseException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for UpdateImagePipelineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            UpdateImagePipelineErrorKind::ServiceException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateImagePipelineErrorKind::ClientException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateImagePipelineErrorKind::ServiceUnavailableException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateImagePipelineErrorKind::InvalidRequestException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateImagePipelineErrorKind::ForbiddenException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateImagePipelineErrorKind::CallRateLimitExceededException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateImagePipelineErrorKind::IdempotentParameterMismatchException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateImagePipelineErrorKind::ResourceInUseException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateImagePipelineErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl UpdateImagePipelineError {
    pub fn new(kind: UpdateImagePipelineErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: UpdateImagePipelineErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: UpdateImagePipelineErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_service_exception(&self) -> bool {
        matches!(&self.kind, UpdateImagePipelineErrorKind::ServiceException(_))
    }
    pub fn is_client_exception(&self) -> bool {
        matches!(&self.kind, UpdateImagePipelineErrorKind::ClientException(_))
    }
    pub fn is_service_unavailable_exception(&self) -> bool {
        matches!(&self.kind, UpdateImagePipelineErrorKind::ServiceUnavailableException(_))
    }
    pub fn is_invalid_request_exception(&self) -> bool {
        matches!(&self.kind, UpdateImagePipelineErrorKind::InvalidRequestException(_))
    }
    pub fn is_forbidden_exception(&self) -> bool {
        matches!(&self.kind, UpdateImagePipelineErrorKind::ForbiddenException(_))
    }
    pub fn is_call_rate_limit_exceeded_exception(&self) -> bool {
        matches!(&self.kind, UpdateImagePipelineErrorKind::CallRateLimitExceededException(_))
    }
    pub fn is_idempotent_parameter_mismatch_exception(&self) -> bool {
        matches!(&self.kind, UpdateImagePipelineErrorKind::IdempotentParameterMismatchException(_))
    }
    pub fn is_resource_in_use_exception(&self) -> bool {
        matches!(&self.kind, UpdateImagePipelineErrorKind::ResourceInUseException(_))
    }
}
impl std::error::Error for UpdateImagePipelineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            UpdateImagePipelineErrorKind::ServiceException(_inner) => Some(_inner),
            UpdateImagePipelineErrorKind::ClientException(_inner) => Some(_inner),
            UpdateImagePipelineErrorKind::ServiceUnavailableException(_inner) => Some(_inner),
            UpdateImagePipelineErrorKind::InvalidRequestException(_inner) => Some(_inner),
            UpdateImagePipelineErrorKind::ForbiddenException(_inner) => Some(_inner),
            UpdateImagePipelineErrorKind::CallRateLimitExceededException(_inner) => Some(_inner),
            UpdateImagePipelineErrorKind::IdempotentParameterMismatchException(_inner) => Some(_inner),
            UpdateImagePipelineErrorKind::ResourceInUseException(_inner) => Some(_inner),
            UpdateImagePipelineErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `UpdateInfrastructureConfiguration` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct UpdateInfrastructureConfigurationError {
    /// Kind of error that occurred.
    pub kind: UpdateInfrastructureConfigurationErrorKind,
    /// Additional metadata about the error, including error code, message, and request ID.
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `UpdateInfrastructureConfiguration` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum UpdateInfrastructureConfigurationErrorKind {
    ServiceException(crate::error::ServiceException),
    ClientException(crate::error::ClientException),
    ServiceUnavailableException(crate::error::ServiceUnavailableException),
    InvalidRequestException(crate::error::InvalidRequestException),
    ForbiddenException(crate::error::ForbiddenException),
    CallRateLimitExceededException(crate::error::CallRateLimitExceededException),
    IdempotentParameterMismatchException(crate::error::IdempotentParameterMismatchException),
    ResourceInUseException(crate::error::ResourceInUseException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for UpdateInfrastructureConfigurationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            UpdateInfrastructureConfigurationErrorKind::ServiceException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateInfrastructureConfigurationErrorKind::ClientException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateInfrastructureConfigurationErrorKind::ServiceUnavailableException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateInfrastructureConfigurationErrorKind::InvalidRequestException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateInfrastructureConfigurationErrorKind::ForbiddenException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateInfrastructureConfigurationErrorKind::CallRateLimitExceededException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateInfrastructureConfigurationErrorKind::IdempotentParameterMismatchException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateInfrastructureConfigurationErrorKind::ResourceInUseException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateInfrastructureConfigurationErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl UpdateInfrastructureConfigurationError {
    pub fn new(kind: UpdateInfrastructureConfigurationErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: UpdateInfrastructureConfigurationErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: UpdateInfrastructureConfigurationErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_service_exception(&self) -> bool {
        matches!(&self.kind, UpdateInfrastructureConfigurationErrorKind::ServiceException(_))
    }
    pub fn is_client_exception(&self) -> bool {
        matches!(&self.kind, UpdateInfrastructureConfigurationErrorKind::ClientException(_))
    }
    pub fn is_service_unavailable_exception(&self) -> bool {
        matches!(&self.kind, UpdateInfrastructureConfigurationErrorKind::ServiceUnavailableException(_))
    }
    pub fn is_invalid_request_exception(&self) -> bool {
        matches!(&self.kind, UpdateInfrastructureConfigurationErrorKind::InvalidRequestException(_))
    }
    pub fn is_forbidden_exception(&self) -> bool {
        matches!(&self.kind, UpdateInfrastructureConfigurationErrorKind::ForbiddenException(_))
    }
    pub fn is_call_rate_limit_exceeded_exception(&self) -> bool {
        matches!(&self.kind, UpdateInfrastructureConfigurationErrorKind::CallRateLimitExceededException(_))
    }
    pub fn is_idempotent_parameter_mismatch_exception(&self) -> bool {
        matches!(&self.kind, UpdateInfrastructureConfigurationErrorKind::IdempotentParameterMismatchException(_))
    }
    pub fn is_resource_in_use_exception(&self) -> bool {
        matches!(&self.kind, UpdateInfrastructureConfigurationErrorKind::ResourceInUseException(_))
    }
}
impl std::error::Error for UpdateInfrastructureConfigurationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            UpdateInfrastructureConfigurationErrorKind::ServiceException(_inner) => Some(_inner),
            UpdateInfrastructureConfigurationErrorKind::ClientException(_inner) => Some(_inner),
            UpdateInfrastructureConfigurationErrorKind::ServiceUnavailableException(_inner) => Some(_inner),
            UpdateInfrastructureConfigurationErrorKind::InvalidRequestException(_inner) => Some(_inner),
            UpdateInfrastructureConfigurationErrorKind::ForbiddenException(_inner) => Some(_inner),
            UpdateInfrastructureConfigurationErrorKind::CallRateLimitExceededException(_inner) => Some(_inner),
            UpdateInfrastructureConfigurationErrorKind::IdempotentParameterMismatchException(_inner) => Some(_inner),
            UpdateInfrastructureConfigurationErrorKind::ResourceInUseException(_inner) => Some(_inner),
            UpdateInfrastructureConfigurationErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// You have exceeded the permitted request rate for the specific operation.
#[non_exhaustive]
#[derive(serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct CallRateLimitExceededException {
    #[serde(rename = "message")]
    #[serde(alias = "Message")]
    #[serde(default)]
    pub message: std::option::Option<std::string::String>,
}
impl CallRateLimitExceededException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`CallRateLimitExceededException`](crate::error::CallRateLimitExceededException)
    pub fn builder() -> crate::error::call_rate_limit_exceeded_exception::Builder {
        crate::error::call_rate_limit_exceeded_exception::Builder::default()
    }
}
impl std::fmt::Display for CallRateLimitExceededException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CallRateLimitExceededException")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for CallRateLimitExceededException {}
/// See [`CallRateLimitExceededException`](crate::error::CallRateLimitExceededException)
pub mod call_rate_limit_exceeded_exception {
    /// A builder for [`CallRateLimitExceededException`](crate::error::CallRateLimitExceededException)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        message: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        /// Consumes the builder and constructs a [`CallRateLimitExceededException`](crate::error::CallRateLimitExceededException)
        pub fn build(self) -> crate::error::CallRateLimitExceededException {
            crate::error::CallRateLimitExceededException {
                message: self.message,
            }
        }
    }
}

/// These errors are usually caused by a client action, such as using an action or resource on behalf of a user that doesn't have permissions to use the action or resource, or specifying an invalid resource identifier.
#[non_exhaustive]
#[derive(serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct ClientException {
    #[serde(rename = "message")]
    #[serde(alias = "Message")]
    #[serde(default)]
    pub message: std::option::Option<std::string::String>,
}
impl ClientException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`ClientException`](crate::error::ClientException)
    pub fn builder() -> crate::error::client_exception::Builder {
        crate::error::client_exception::Builder::default()
    }
}
impl std::fmt::Display for ClientException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ClientException")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for ClientException {}
/// See [`ClientException`](crate::error::ClientException)
pub mod client_exception {
    /// A builder for [`ClientException`](crate::error::ClientException)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        message: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        /// Consumes the builder and constructs a [`ClientException`](crate::error::ClientException)
        pub fn build(self) -> crate::error::ClientException {
            crate::error::ClientException {
                message: self.message,
            }
        }
    }
}

/// You are not authorized to perform the requested operation.
#[non_exhaustive]
#[derive(serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct ForbiddenException {
    #[serde(rename = "message")]
    #[serde(alias = "Message")]
    #[serde(default)]
    pub message: std::option::Option<std::string::String>,
}
impl ForbiddenException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`ForbiddenException`](crate::error::ForbiddenException)
    pub fn builder() -> crate::error::forbidden_exception::Builder {
        crate::error::forbidden_exception::Builder::default()
    }
}
impl std::fmt::Display for ForbiddenException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ForbiddenException")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for ForbiddenException {}
/// See [`ForbiddenException`](crate::error::ForbiddenException)
pub mod forbidden_exception {
    /// A builder for [`ForbiddenException`](crate::error::ForbiddenException)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        message: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        /// Consumes the builder and constructs a [`ForbiddenException`](crate::error::ForbiddenException)
        pub fn build(self) -> crate::error::ForbiddenException {
            crate::error::ForbiddenException {
                message: self.message,
            }
        }
    }
}

/// You have specified a client token for an operation using parameter values that differ from a previous request that used the same client token.
#[non_exhaustive]
#[derive(serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct IdempotentParameterMismatchException {
    #[serde(rename = "message")]
    #[serde(alias = "Message")]
    #[serde(default)]
    pub message: std::option::Option<std::string::String>,
}
impl IdempotentParameterMismatchException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`IdempotentParameterMismatchException`](crate::error::IdempotentParameterMismatchException)
    pub fn builder() -> crate::error::idempotent_parameter_mismatch_exception::Builder {
        crate::error::idempotent_parameter_mismatch_exception::Builder::default()
    }
}
impl std::fmt::Display for IdempotentParameterMismatchException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "IdempotentParameterMismatchException")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for IdempotentParameterMismatchException {}
/// See [`IdempotentParameterMismatchException`](crate::error::IdempotentParameterMismatchException)
pub mod idempotent_parameter_mismatch_exception {
    /// A builder for [`IdempotentParameterMismatchException`](crate::error::IdempotentParameterMismatchException)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        message: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        /// Consumes the builder and constructs a [`IdempotentParameterMismatchException`](crate::error::IdempotentParameterMismatchException)
        pub fn build(self) -> crate::error::IdempotentParameterMismatchException {
            crate::error::IdempotentParameterMismatchException {
                message: self.message,
            }
        }
    }
}

/// You have provided an invalid pagination token in your request.
#[non_exhaustive]
#[derive(serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct InvalidPaginationTokenException {
    #[serde(rename = "message")]
    #[serde(alias = "Message")]
    #[serde(default)]
    pub message: std::option::Option<std::string::String>,
}
impl InvalidPaginationTokenException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`InvalidPaginationTokenException`](crate::error::InvalidPaginationTokenException)
    pub fn builder() -> crate::error::invalid_pagination_token_exception::Builder {
        crate::error::invalid_pagination_token_exception::Builder::default()
    }
}
impl std::fmt::Display for InvalidPaginationTokenException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "InvalidPaginationTokenException")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for InvalidPaginationTokenException {}
/// See [`InvalidPaginationTokenException`](crate::error::InvalidPaginationTokenException)
pub mod invalid_pagination_token_exception {
    /// A builder for [`InvalidPaginationTokenException`](crate::error::InvalidPaginationTokenException)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        message: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        /// Consumes the builder and constructs a [`InvalidPaginationTokenException`](crate::error::InvalidPaginationTokenException)
        pub fn build(self) -> crate::error::InvalidPaginationTokenException {
            crate::error::InvalidPaginationTokenException {
                message: self.message,
            }
        }
    }
}

/// You have specified two or more mutually exclusive parameters.
#[non_exhaustive]
#[derive(serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct InvalidParameterCombinationException {
    #[serde(rename = "message")]
    #[serde(alias = "Message")]
    #[serde(default)]
    pub message: std::option::Option<std::string::String>,
}
impl InvalidParameterCombinationException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`InvalidParameterCombinationException`](crate::error::InvalidParameterCombinationException)
    pub fn builder() -> crate::error::invalid_parameter_combination_exception::Builder {
        crate::error::invalid_parameter_combination_exception::Builder::default()
    }
}
impl std::fmt::Display for InvalidParameterCombinationException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "InvalidParameterCombinationException")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for InvalidParameterCombinationException {}
/// See [`InvalidParameterCombinationException`](crate::error::InvalidParameterCombinationException)
pub mod invalid_parameter_combination_exception {
    /// A builder for [`InvalidParameterCombinationException`](crate::error::InvalidParameterCombinationException)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        message: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        /// Consumes the builder and constructs a [`InvalidParameterCombinationException`](crate::error::InvalidParameterCombinationException)
        pub fn build(self) -> crate::error::InvalidParameterCombinationException {
            crate::error::InvalidParameterCombinationException {
                message: self.message,
            }
        }
    }
}

/// The specified parameter is invalid.
#[non_exhaustive]
#[derive(serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct InvalidParameterException {
    #[serde(rename = "message")]
    #[serde(alias = "Message")]
    #[serde(default)]
    pub message: std::option::Option<std::string::String>,
}
impl InvalidParameterException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`InvalidParameterException`](crate::error::InvalidParameterException)
    pub fn builder() -> crate::error::invalid_parameter_exception::Builder {
        crate::error::invalid_parameter_exception::Builder::default()
    }
}
impl std::fmt::Display for InvalidParameterException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "InvalidParameterException")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for InvalidParameterException {}
/// See [`InvalidParameterException`](crate::error::InvalidParameterException)
pub mod invalid_parameter_exception {
    /// A builder for [`InvalidParameterException`](crate::error::InvalidParameterException)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        message: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        /// Consumes the builder and constructs a [`InvalidParameterException`](crate::error::InvalidParameterException)
        pub fn build(self) -> crate::error::InvalidParameterException {
            crate::error::InvalidParameterException {
                message: self.message,
            }
        }
    }
}

/// The value that you provided for the specified parameter is invalid.
#[non_exhaustive]
#[derive(serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct InvalidParameterValueException {
    #[serde(rename = "message")]
    #[serde(alias = "Message")]
    #[serde(default)]
    pub message: std::option::Option<std::string::String>,
}
impl InvalidParameterValueException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`InvalidParameterValueException`](crate::error::InvalidParameterValueException)
    pub fn builder() -> crate::error::invalid_parameter_value_exception::Builder {
        crate::error::invalid_parameter_value_exception::Builder::default()
    }
}
impl std::fmt::Display for InvalidParameterValueException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "InvalidParameterValueException")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for InvalidParameterValueException {}
/// See [`InvalidParameterValueException`](crate::error::InvalidParameterValueException)
pub mod invalid_parameter_value_exception {
    /// A builder for [`InvalidParameterValueException`](crate::error::InvalidParameterValueException)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        message: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        /// Consumes the builder and constructs a [`InvalidParameterValueException`](crate::error::InvalidParameterValueException)
        pub fn build(self) -> crate::error::InvalidParameterValueException {
            crate::error::InvalidParameterValueException {
                message: self.message,
            }
        }
    }
}

/// You have made a request for an action that is not supported by the service.
#[non_exhaustive]
#[derive(serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct InvalidRequestException {
    #[serde(rename = "message")]
    #[serde(alias = "Message")]
    #[serde(default)]
    pub message: std::option::Option<std::string::String>,
}
impl InvalidRequestException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`InvalidRequestException`](crate::error::InvalidRequestException)
    pub fn builder() -> crate::error::invalid_request_exception::Builder {
        crate::error::invalid_request_exception::Builder::default()
    }
}
impl std::fmt::Display for InvalidRequestException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "InvalidRequestException")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for InvalidRequestException {}
/// See [`InvalidRequestException`](crate::error::InvalidRequestException)
pub mod invalid_request_exception {
    /// A builder for [`InvalidRequestException`](crate::error::InvalidRequestException)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        message: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        /// Consumes the builder and constructs a [`InvalidRequestException`](crate::error::InvalidRequestException)
        pub fn build(self) -> crate::error::InvalidRequestException {
            crate::error::InvalidRequestException {
                message: self.message,
            }
        }
    }
}

/// Your version number is out of bounds or does not follow the required syntax.
#[non_exhaustive]
#[derive(serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct InvalidVersionNumberException {
    #[serde(rename = "message")]
    #[serde(alias = "Message")]
    #[serde(default)]
    pub message: std::option::Option<std::string::String>,
}
impl InvalidVersionNumberException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`InvalidVersionNumberException`](crate::error::InvalidVersionNumberException)
    pub fn builder() -> crate::error::invalid_version_number_exception::Builder {
        crate::error::invalid_version_number_exception::Builder::default()
    }
}
impl std::fmt::Display for InvalidVersionNumberException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "InvalidVersionNumberException")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for InvalidVersionNumberException {}
/// See [`InvalidVersionNumberException`](crate::error::InvalidVersionNumberException)
pub mod invalid_version_number_exception {
    /// A builder for [`InvalidVersionNumberException`](crate::error::InvalidVersionNumberException)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        message: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        /// Consumes the builder and constructs a [`InvalidVersionNumberException`](crate::error::InvalidVersionNumberException)
        pub fn build(self) -> crate::error::InvalidVersionNumberException {
            crate::error::InvalidVersionNumberException {
                message: self.message,
            }
        }
    }
}

/// The resource that you are trying to create already exists.
#[non_exhaustive]
#[derive(serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct ResourceAlreadyExistsException {
    #[serde(rename = "message")]
    #[serde(alias = "Message")]
    #[serde(default)]
    pub message: std::option::Option<std::string::String>,
}
impl ResourceAlreadyExistsException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`ResourceAlreadyExistsException`](crate::error::ResourceAlreadyExistsException)
    pub fn builder() -> crate::error::resource_already_exists_exception::Builder {
        crate::error::resource_already_exists_exception::Builder::default()
    }
}
impl std::fmt::Display for ResourceAlreadyExistsException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ResourceAlreadyExistsException")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for ResourceAlreadyExistsException {}
/// See [`ResourceAlreadyExistsException`](crate::error::ResourceAlreadyExistsException)
pub mod resource_already_exists_exception {
    /// A builder for [`ResourceAlreadyExistsException`](crate::error::ResourceAlreadyExistsException)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        message: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        /// Consumes the builder and constructs a [`ResourceAlreadyExistsException`](crate::error::ResourceAlreadyExistsException)
        pub fn build(self) -> crate::error::ResourceAlreadyExistsException {
            crate::error::ResourceAlreadyExistsException {
                message: self.message,
            }
        }
    }
}

/// You have attempted to mutate or delete a resource with a dependency that prohibits this action.
#[non_exhaustive]
#[derive(serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct ResourceDependencyException {
    #[serde(rename = "message")]
    #[serde(alias = "Message")]
    #[serde(default)]
    pub message: std::option::Option<std::string::String>,
}
impl ResourceDependencyException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`ResourceDependencyException`](crate::error::ResourceDependencyException)
    pub fn builder() -> crate::error::resource_dependency_exception::Builder {
        crate::error::resource_dependency_exception::Builder::default()
    }
}
impl std::fmt::Display for ResourceDependencyException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ResourceDependencyException")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for ResourceDependencyException {}
/// See [`ResourceDependencyException`](crate::error::ResourceDependencyException)
pub mod resource_dependency_exception {
    /// A builder for [`ResourceDependencyException`](crate::error::ResourceDependencyException)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        message: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        /// Consumes the builder and constructs a [`ResourceDependencyException`](crate::error::ResourceDependencyException)
        pub fn build(self) -> crate::error::ResourceDependencyException {
            crate::error::ResourceDependencyException {
                message: self.message,
            }
        }
    }
}

/// The resource that you are trying to operate on is currently in use.
#[non_exhaustive]
#[derive(serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct ResourceInUseException {
    #[serde(rename = "message")]
    #[serde(alias = "Message")]
    #[serde(default)]
    pub message: std::option::Option<std::string::String>,
}
impl ResourceInUseException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`ResourceInUseException`](crate::error::ResourceInUseException)
    pub fn builder() -> crate::error::resource_in_use_exception::Builder {
        crate::error::resource_in_use_exception::Builder::default()
    }
}
impl std::fmt::Display for ResourceInUseException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ResourceInUseException")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for ResourceInUseException {}
/// See [`ResourceInUseException`](crate::error::ResourceInUseException)
pub mod resource_in_use_exception {
    /// A builder for [`ResourceInUseException`](crate::error::ResourceInUseException)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        message: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        /// Consumes the builder and constructs a [`ResourceInUseException`](crate::error::ResourceInUseException)
        pub fn build(self) -> crate::error::ResourceInUseException {
            crate::error::ResourceInUseException {
                message: self.message,
            }
        }
    }
}

/// At least one of the resources referenced by your request does not exist.
#[non_exhaustive]
#[derive(serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct ResourceNotFoundException {
    #[serde(rename = "message")]
    #[serde(alias = "Message")]
    #[serde(default)]
    pub message: std::option::Option<std::string::String>,
}
impl ResourceNotFoundException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`ResourceNotFoundException`](crate::error::ResourceNotFoundException)
    pub fn builder() -> crate::error::resource_not_found_exception::Builder {
        crate::error::resource_not_found_exception::Builder::default()
    }
}
impl std::fmt::Display for ResourceNotFoundException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ResourceNotFoundException")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for ResourceNotFoundException {}
/// See [`ResourceNotFoundException`](crate::error::ResourceNotFoundException)
pub mod resource_not_found_exception {
    /// A builder for [`ResourceNotFoundException`](crate::error::ResourceNotFoundException)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        message: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        /// Consumes the builder and constructs a [`ResourceNotFoundException`](crate::error::ResourceNotFoundException)
        pub fn build(self) -> crate::error::ResourceNotFoundException {
            crate::error::ResourceNotFoundException {
                message: self.message,
            }
        }
    }
}

/// This exception is thrown when the service encounters an unrecoverable exception.
#[non_exhaustive]
#[derive(serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct ServiceException {
    #[serde(rename = "message")]
    #[serde(alias = "Message")]
    #[serde(default)]
    pub message: std::option::Option<std::string::String>,
}
impl ServiceException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`ServiceException`](crate::error::ServiceException)
    pub fn builder() -> crate::error::service_exception::Builder {
        crate::error::service_exception::Builder::default()
    }
}
impl std::fmt::Display for ServiceException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ServiceException")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for ServiceException {}
/// See [`ServiceException`](crate::error::ServiceException)
pub mod service_exception {
    /// A builder for [`ServiceException`](crate::error::ServiceException)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        message: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        /// Consumes the builder and constructs a [`ServiceException`](crate::error::ServiceException)
        pub fn build(self) -> crate::error::ServiceException {
            crate::error::ServiceException {
                message: self.message,
            }
        }
    }
}

/// The service is unable to process your request at this time.
#[non_exhaustive]
#[derive(serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct ServiceUnavailableException {
    #[serde(rename = "message")]
    #[serde(alias = "Message")]
    #[serde(default)]
    pub message: std::option::Option<std::string::String>,
}
impl ServiceUnavailableException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`ServiceUnavailableException`](crate::error::ServiceUnavailableException)
    pub fn builder() -> crate::error::service_unavailable_exception::Builder {
        crate::error::service_unavailable_exception::Builder::default()
    }
}
impl std::fmt::Display for ServiceUnavailableException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ServiceUnavailableException")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for ServiceUnavailableException {}
/// See [`ServiceUnavailableException`](crate::error::ServiceUnavailableException)
pub mod service_unavailable_exception {
    /// A builder for [`ServiceUnavailableException`](crate::error::ServiceUnavailableException)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        message: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        /// Consumes the builder and constructs a [`ServiceUnavailableException`](crate::error::ServiceUnavailableException)
        pub fn build(self) -> crate::error::ServiceUnavailableException {
            crate::error::ServiceUnavailableException {
                message: self.message,
            }
        }
    }
}
