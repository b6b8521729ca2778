/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Operation errors and the modeled exceptions they wrap
//!
//! Exception bodies read their message from `Message` or `message`. A body carrying both keys is
//! rejected as a duplicate field, so the operation error falls back to `Unhandled` while
//! `code()`, `message()` and `request_id()` still report what the response carried.

/// Error type for the `CancelCluster` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct CancelClusterError {
    /// Kind of error that occurred.
    pub kind: CancelClusterErrorKind,
    /// Additional metadata about the error, including error code, message, and request ID.
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `CancelCluster` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum CancelClusterErrorKind {
    KmsRequestFailedException(crate::error::KmsRequestFailedException),
    InvalidJobStateException(crate::error::InvalidJobStateException),
    InvalidResourceException(crate::error::InvalidResourceException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for CancelClusterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            CancelClusterErrorKind::KmsRequestFailedException(_inner) => std::fmt::Display::fmt(_inner, f),
            CancelClusterErrorKind::InvalidJobStateException(_inner) => std::fmt::Display::fmt(_inner, f),
            CancelClusterErrorKind::InvalidResourceException(_inner) => std::fmt::Display::fmt(_inner, f),
            CancelClusterErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl CancelClusterError {
    pub fn new(kind: CancelClusterErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: CancelClusterErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: CancelClusterErrorKind::Unhandled(err.into()),
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
    pub fn is_kms_request_failed_exception(&self) -> bool {
        matches!(&self.kind, CancelClusterErrorKind::KmsRequestFailedException(_))
    }
    pub fn is_invalid_job_state_exception(&self) -> bool {
        matches!(&self.kind, CancelClusterErrorKind::InvalidJobStateException(_))
    }
    pub fn is_invalid_resource_exception(&self) -> bool {
        matches!(&self.kind, CancelClusterErrorKind::InvalidResourceException(_))
    }
}
impl std::error::Error for CancelClusterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            CancelClusterErrorKind::KmsRequestFailedException(_inner) => Some(_inner),
            CancelClusterErrorKind::InvalidJobStateException(_inner) => Some(_inner),
            CancelClusterErrorKind::InvalidResourceException(_inner) => Some(_inner),
            CancelClusterErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `CancelJob` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct CancelJobError {
    /// Kind of error that occurred.
    pub kind: CancelJobErrorKind,
    /// Additional metadata about the error, including error code, message, and request ID.
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `CancelJob` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum CancelJobErrorKind {
    InvalidResourceException(crate::error::InvalidResourceException),
    InvalidJobStateException(crate::error::InvalidJobStateException),
    KmsRequestFailedException(crate::error::KmsRequestFailedException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for CancelJobError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            CancelJobErrorKind::InvalidResourceException(_inner) => std::fmt::Display::fmt(_inner, f),
            CancelJobErrorKind::InvalidJobStateException(_inner) => std::fmt::Display::fmt(_inner, f),
            CancelJobErrorKind::KmsRequestFailedException(_inner) => std::fmt::Display::fmt(_inner, f),
            CancelJobErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl CancelJobError {
    pub fn new(kind: CancelJobErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: CancelJobErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: CancelJobErrorKind::Unhandled(err.into()),
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
    pub fn is_invalid_resource_exception(&self) -> bool {
        matches!(&self.kind, CancelJobErrorKind::InvalidResourceException(_))
    }
    pub fn is_invalid_job_state_exception(&self) -> bool {
        matches!(&self.kind, CancelJobErrorKind::InvalidJobStateException(_))
    }
    pub fn is_kms_request_failed_exception(&self) -> bool {
        matches!(&self.kind, CancelJobErrorKind::KmsRequestFailedException(_))
    }
}
impl std::error::Error for CancelJobError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            CancelJobErrorKind::InvalidResourceException(_inner) => Some(_inner),
            CancelJobErrorKind::InvalidJobStateException(_inner) => Some(_inner),
            CancelJobErrorKind::KmsRequestFailedException(_inner) => Some(_inner),
            CancelJobErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `CreateAddress` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct CreateAddressError {
    /// Kind of error that occurred.
    pub kind: CreateAddressErrorKind,
    /// Additional metadata about the error, including error code, message, and request ID.
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `CreateAddress` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum CreateAddressErrorKind {
    InvalidAddressException(crate::error::InvalidAddressException),
    UnsupportedAddressException(crate::error::UnsupportedAddressException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for CreateAddressError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            CreateAddressErrorKind::InvalidAddressException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateAddressErrorKind::UnsupportedAddressException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateAddressErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl CreateAddressError {
    pub fn new(kind: CreateAddressErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: CreateAddressErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: CreateAddressErrorKind::Unhandled(err.into()),
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
    pub fn is_invalid_address_exception(&self) -> bool {
        matches!(&self.kind, CreateAddressErrorKind::InvalidAddressException(_))
    }
    pub fn is_unsupported_address_exception(&self) -> bool {
        matches!(&self.kind, CreateAddressErrorKind::UnsupportedAddressException(_))
    }
}
impl std::error::Error for CreateAddressError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            CreateAddressErrorKind::InvalidAddressException(_inner) => Some(_inner),
            CreateAddressErrorKind::UnsupportedAddressException(_inner) => Some(_inner),
            CreateAddressErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `CreateCluster` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct CreateClusterError {
    /// Kind of error that occurred.
    pub kind: CreateClusterErrorKind,
    /// Additional metadata about the error, including error code, message, and request ID.
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `CreateCluster` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum CreateClusterErrorKind {
    InvalidResourceException(crate::error::InvalidResourceException),
    KmsRequestFailedException(crate::error::KmsRequestFailedException),
    InvalidInputCombinationException(crate::error::InvalidInputCombinationException),
    Ec2RequestFailedException(crate::error::Ec2RequestFailedException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for CreateClusterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            CreateClusterErrorKind::InvalidResourceException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateClusterErrorKind::KmsRequestFailedException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateClusterErrorKind::InvalidInputCombinationException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateClusterErrorKind::Ec2RequestFailedException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateClusterErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl CreateClusterError {
    pub fn new(kind: CreateClusterErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: CreateClusterErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: CreateClusterErrorKind::Unhandled(err.into()),
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
    pub fn is_invalid_resource_exception(&self) -> bool {
        matches!(&self.kind, CreateClusterErrorKind::InvalidResourceException(_))
    }
    pub fn is_kms_request_failed_exception(&self) -> bool {
        matches!(&self.kind, CreateClusterErrorKind::KmsRequestFailedException(_))
    }
    pub fn is_invalid_input_combination_exception(&self) -> bool {
        matches!(&self.kind, CreateClusterErrorKind::InvalidInputCombinationException(_))
    }
    pub fn is_ec2_request_failed_exception(&self) -> bool {
        matches!(&self.kind, CreateClusterErrorKind::Ec2RequestFailedException(_))
    }
}
impl std::error::Error for CreateClusterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            CreateClusterErrorKind::InvalidResourceException(_inner) => Some(_inner),
            CreateClusterErrorKind::KmsRequestFailedException(_inner) => Some(_inner),
            CreateClusterErrorKind::InvalidInputCombinationException(_inner) => Some(_inner),
            CreateClusterErrorKind::Ec2RequestFailedException(_inner) => Some(_inner),
            CreateClusterErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `CreateJob` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct CreateJobError {
    /// Kind of error that occurred.
    pub kind: CreateJobErrorKind,
    /// Additional metadata about the error, including error code, message, and request ID.
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `CreateJob` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum CreateJobErrorKind {
    InvalidResourceException(crate::error::InvalidResourceException),
    KmsRequestFailedException(crate::error::KmsRequestFailedException),
    InvalidInputCombinationException(crate::error::InvalidInputCombinationException),
    ClusterLimitExceededException(crate::error::ClusterLimitExceededException),
    Ec2RequestFailedException(crate::error::Ec2RequestFailedException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for CreateJobError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            CreateJobErrorKind::InvalidResourceException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateJobErrorKind::KmsRequestFailedException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateJobErrorKind::InvalidInputCombinationException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateJobErrorKind::ClusterLimitExceededException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateJobErrorKind::Ec2RequestFailedException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateJobErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl CreateJobError {
    pub fn new(kind: CreateJobErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: CreateJobErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: CreateJobErrorKind::Unhandled(err.into()),
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
    pub fn is_invalid_resource_exception(&self) -> bool {
        matches!(&self.kind, CreateJobErrorKind::InvalidResourceException(_))
    }
    pub fn is_kms_request_failed_exception(&self) -> bool {
        matches!(&self.kind, CreateJobErrorKind::KmsRequestFailedException(_))
    }
    pub fn is_invalid_input_combination_exception(&self) -> bool {
        matches!(&self.kind, CreateJobErrorKind::InvalidInputCombinationException(_))
    }
    pub fn is_cluster_limit_exceeded_exception(&self) -> bool {
        matches!(&self.kind, CreateJobErrorKind::ClusterLimitExceededException(_))
    }
    pub fn is_ec2_request_failed_exception(&self) -> bool {
        matches!(&self.kind, CreateJobErrorKind::Ec2RequestFailedException(_))
    }
}
impl std::error::Error for CreateJobError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            CreateJobErrorKind::InvalidResourceException(_inner) => Some(_inner),
            CreateJobErrorKind::KmsRequestFailedException(_inner) => Some(_inner),
            CreateJobErrorKind::InvalidInputCombinationException(_inner) => Some(_inner),
            CreateJobErrorKind::ClusterLimitExceededException(_inner) => Some(_inner),
            CreateJobErrorKind::Ec2RequestFailedException(_inner) => Some(_inner),
            CreateJobErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `DescribeAddress` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct DescribeAddressError {
    /// Kind of error that occurred.
    pub kind: DescribeAddressErrorKind,
    /// Additional metadata about the error, including error code, message, and request ID.
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `DescribeAddress` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum DescribeAddressErrorKind {
    InvalidResourceException(crate::error::InvalidResourceException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for DescribeAddressError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DescribeAddressErrorKind::InvalidResourceException(_inner) => std::fmt::Display::fmt(_inner, f),
            DescribeAddressErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl DescribeAddressError {
    pub fn new(kind: DescribeAddressErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DescribeAddressErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DescribeAddressErrorKind::Unhandled(err.into()),
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
    pub fn is_invalid_resource_exception(&self) -> bool {
        matches!(&self.kind, DescribeAddressErrorKind::InvalidResourceException(_))
    }
}
impl std::error::Error for DescribeAddressError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DescribeAddressErrorKind::InvalidResourceException(_inner) => Some(_inner),
            DescribeAddressErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `DescribeAddresses` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct DescribeAddressesError {
    /// Kind of error that occurred.
    pub kind: DescribeAddressesErrorKind,
    /// Additional metadata about the error, including error code, message, and request ID.
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `DescribeAddresses` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum DescribeAddressesErrorKind {
    InvalidResourceException(crate::error::InvalidResourceException),
    InvalidNextTokenException(crate::error::InvalidNextTokenException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for DescribeAddressesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DescribeAddressesErrorKind::InvalidResourceException(_inner) => std::fmt::Display::fmt(_inner, f),
            DescribeAddressesErrorKind::InvalidNextTokenException(_inner) => std::fmt::Display::fmt(_inner, f),
            DescribeAddressesErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl DescribeAddressesError {
    pub fn new(kind: DescribeAddressesErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DescribeAddressesErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DescribeAddressesErrorKind::Unhandled(err.into()),
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
    pub fn is_invalid_resource_exception(&self) -> bool {
        matches!(&self.kind, DescribeAddressesErrorKind::InvalidResourceException(_))
    }
    pub fn is_invalid_next_token_exception(&self) -> bool {
        matches!(&self.kind, DescribeAddressesErrorKind::InvalidNextTokenException(_))
    }
}
impl std::error::Error for DescribeAddressesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DescribeAddressesErrorKind::InvalidResourceException(_inner) => Some(_inner),
            DescribeAddressesErrorKind::InvalidNextTokenException(_inner) => Some(_inner),
            DescribeAddressesErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `DescribeCluster` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct DescribeClusterError {
    /// Kind of error that occurred.
    pub kind: DescribeClusterErrorKind,
    /// Additional metadata about the error, including error code, message, and request ID.
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `DescribeCluster` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum DescribeClusterErrorKind {
    InvalidResourceException(crate::error::InvalidResourceException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for DescribeClusterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DescribeClusterErrorKind::InvalidResourceException(_inner) => std::fmt::Display::fmt(_inner, f),
            DescribeClusterErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl DescribeClusterError {
    pub fn new(kind: DescribeClusterErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DescribeClusterErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DescribeClusterErrorKind::Unhandled(err.into()),
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
    pub fn is_invalid_resource_exception(&self) -> bool {
        matches!(&self.kind, DescribeClusterErrorKind::InvalidResourceException(_))
    }
}
impl std::error::Error for DescribeClusterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DescribeClusterErrorKind::InvalidResourceException(_inner) => Some(_inner),
            DescribeClusterErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `DescribeJob` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct DescribeJobError {
    /// Kind of error that occurred.
    pub kind: DescribeJobErrorKind,
    /// Additional metadata about the error, including error code, message, and request ID.
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `DescribeJob` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum DescribeJobErrorKind {
    InvalidResourceException(crate::error::InvalidResourceException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for DescribeJobError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DescribeJobErrorKind::InvalidResourceException(_inner) => std::fmt::Display::fmt(_inner, f),
            DescribeJobErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl DescribeJobError {
    pub fn new(kind: DescribeJobErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DescribeJobErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DescribeJobErrorKind::Unhandled(err.into()),
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
    pub fn is_invalid_resource_exception(&self) -> bool {
        matches!(&self.kind, DescribeJobErrorKind::InvalidResourceException(_))
    }
}
impl std::error::Error for DescribeJobError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DescribeJobErrorKind::InvalidResourceException(_inner) => Some(_inner),
            DescribeJobErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `GetJobManifest` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct GetJobManifestError {
    /// Kind of error that occurred.
    pub kind: GetJobManifestErrorKind,
    /// Additional metadata about the error, including error code, message, and request ID.
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `GetJobManifest` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum GetJobManifestErrorKind {
    InvalidResourceException(crate::error::InvalidResourceException),
    InvalidJobStateException(crate::error::InvalidJobStateException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for GetJobManifestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            GetJobManifestErrorKind::InvalidResourceException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetJobManifestErrorKind::InvalidJobStateException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetJobManifestErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl GetJobManifestError {
    pub fn new(kind: GetJobManifestErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: GetJobManifestErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: GetJobManifestErrorKind::Unhandled(err.into()),
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
    pub fn is_invalid_resource_exception(&self) -> bool {
        matches!(&self.kind, GetJobManifestErrorKind::InvalidResourceException(_))
    }
    pub fn is_invalid_job_state_exception(&self) -> bool {
        matches!(&self.kind, GetJobManifestErrorKind::InvalidJobStateException(_))
    }
}
impl std::error::Error for GetJobManifestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            GetJobManifestErrorKind::InvalidResourceException(_inner) => Some(_inner),
            GetJobManifestErrorKind::InvalidJobStateException(_inner) => Some(_inner),
            GetJobManifestErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `GetJobUnlockCode` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct GetJobUnlockCodeError {
    /// Kind of error that occurred.
    pub kind: GetJobUnlockCodeErrorKind,
    /// Additional metadata about the error, including error code, message, and request ID.
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `GetJobUnlockCode` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum GetJobUnlockCodeErrorKind {
    InvalidResourceException(crate::error::InvalidResourceException),
    InvalidJobStateException(crate::error::InvalidJobStateException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for GetJobUnlockCodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            GetJobUnlockCodeErrorKind::InvalidResourceException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetJobUnlockCodeErrorKind::InvalidJobStateException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetJobUnlockCodeErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl GetJobUnlockCodeError {
    pub fn new(kind: GetJobUnlockCodeErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: GetJobUnlockCodeErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: GetJobUnlockCodeErrorKind::Unhandled(err.into()),
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
    pub fn is_invalid_resource_exception(&self) -> bool {
        matches!(&self.kind, GetJobUnlockCodeErrorKind::InvalidResourceException(_))
    }
    pub fn is_invalid_job_state_exception(&self) -> bool {
        matches!(&self.kind, GetJobUnlockCodeErrorKind::InvalidJobStateException(_))
    }
}
impl std::error::Error for GetJobUnlockCodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            GetJobUnlockCodeErrorKind::InvalidResourceException(_inner) => Some(_inner),
            GetJobUnlockCodeErrorKind::InvalidJobStateException(_inner) => Some(_inner),
            GetJobUnlockCodeErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `GetSnowballUsage` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct GetSnowballUsageError {
    /// Kind of error that occurred.
    pub kind: GetSnowballUsageErrorKind,
    /// Additional metadata about the error, including error code, message, and request ID.
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `GetSnowballUsage` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum GetSnowballUsageErrorKind {
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for GetSnowballUsageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            GetSnowballUsageErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl GetSnowballUsageError {
    pub fn new(kind: GetSnowballUsageErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: GetSnowballUsageErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: GetSnowballUsageErrorKind::Unhandled(err.into()),
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
}
impl std::error::Error for GetSnowballUsageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            GetSnowballUsageErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `GetSoftwareUpdates` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct GetSoftwareUpdatesError {
    /// Kind of error that occurred.
    pub kind: GetSoftwareUpdatesErrorKind,
    /// Additional metadata about the error, including error code, message, and request ID.
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `GetSoftwareUpdates` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum GetSoftwareUpdatesErrorKind {
    InvalidResourceException(crate::error::InvalidResourceException),
    InvalidJobStateException(crate::error::InvalidJobStateException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for GetSoftwareUpdatesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            GetSoftwareUpdatesErrorKind::InvalidResourceException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetSoftwareUpdatesErrorKind::InvalidJobStateException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetSoftwareUpdatesErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl GetSoftwareUpdatesError {
    pub fn new(kind: GetSoftwareUpdatesErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: GetSoftwareUpdatesErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: GetSoftwareUpdatesErrorKind::Unhandled(err.into()),
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
    pub fn is_invalid_resource_exception(&self) -> bool {
        matches!(&self.kind, GetSoftwareUpdatesErrorKind::InvalidResourceException(_))
    }
    pub fn is_invalid_job_state_exception(&self) -> bool {
        matches!(&self.kind, GetSoftwareUpdatesErrorKind::InvalidJobStateException(_))
    }
}
impl std::error::Error for GetSoftwareUpdatesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            GetSoftwareUpdatesErrorKind::InvalidResourceException(_inner) => Some(_inner),
            GetSoftwareUpdatesErrorKind::InvalidJobStateException(_inner) => Some(_inner),
            GetSoftwareUpdatesErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `ListClusterJobs` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct ListClusterJobsError {
    /// Kind of error that occurred.
    pub kind: ListClusterJobsErrorKind,
    /// Additional metadata about the error, including error code, message, and request ID.
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `ListClusterJobs` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum ListClusterJobsErrorKind {
    InvalidResourceException(crate::error::InvalidResourceException),
    InvalidNextTokenException(crate::error::InvalidNextTokenException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for ListClusterJobsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ListClusterJobsErrorKind::InvalidResourceException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListClusterJobsErrorKind::InvalidNextTokenException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListClusterJobsErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl ListClusterJobsError {
    pub fn new(kind: ListClusterJobsErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: ListClusterJobsErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: ListClusterJobsErrorKind::Unhandled(err.into()),
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
    pub fn is_invalid_resource_exception(&self) -> bool {
        matches!(&self.kind, ListClusterJobsErrorKind::InvalidResourceException(_))
    }
    pub fn is_invalid_next_token_exception(&self) -> bool {
        matches!(&self.kind, ListClusterJobsErrorKind::InvalidNextTokenException(_))
    }
}
impl std::error::Error for ListClusterJobsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ListClusterJobsErrorKind::InvalidResourceException(_inner) => Some(_inner),
            ListClusterJobsErrorKind::InvalidNextTokenException(_inner) => Some(_inner),
            ListClusterJobsErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `ListClusters` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct ListClustersError {
    /// Kind of error that occurred.
    pub kind: ListClustersErrorKind,
    /// Additional metadata about the error, including error code, message, and request ID.
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `ListClusters` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum ListClustersErrorKind {
    InvalidNextTokenException(crate::error::InvalidNextTokenException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for ListClustersError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ListClustersErrorKind::InvalidNextTokenException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListClustersErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl ListClustersError {
    pub fn new(kind: ListClustersErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: ListClustersErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: ListClustersErrorKind::Unhandled(err.into()),
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
    pub fn is_invalid_next_token_exception(&self) -> bool {
        matches!(&self.kind, ListClustersErrorKind::InvalidNextTokenException(_))
    }
}
impl std::error::Error for ListClustersError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ListClustersErrorKind::InvalidNextTokenException(_inner) => Some(_inner),
            ListClustersErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `ListCompatibleImages` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct ListCompatibleImagesError {
    /// Kind of error that occurred.
    pub kind: ListCompatibleImagesErrorKind,
    /// Additional metadata about the error, including error code, message, and request ID.
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `ListCompatibleImages` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum ListCompatibleImagesErrorKind {
    InvalidNextTokenException(crate::error::InvalidNextTokenException),
    Ec2RequestFailedException(crate::error::Ec2RequestFailedException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for ListCompatibleImagesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ListCompatibleImagesErrorKind::InvalidNextTokenException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListCompatibleImagesErrorKind::Ec2RequestFailedException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListCompatibleImagesErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl ListCompatibleImagesError {
    pub fn new(kind: ListCompatibleImagesErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: ListCompatibleImagesErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: ListCompatibleImagesErrorKind::Unhandled(err.into()),
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
    pub fn is_invalid_next_token_exception(&self) -> bool {
        matches!(&self.kind, ListCompatibleImagesErrorKind::InvalidNextTokenException(_))
    }
    pub fn is_ec2_request_failed_exception(&self) -> bool {
        matches!(&self.kind, ListCompatibleImagesErrorKind::Ec2RequestFailedException(_))
    }
}
impl std::error::Error for ListCompatibleImagesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ListCompatibleImagesErrorKind::InvalidNextTokenException(_inner) => Some(_inner),
            ListCompatibleImagesErrorKind::Ec2RequestFailedException(_inner) => Some(_inner),
            ListCompatibleImagesErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `ListJobs` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct ListJobsError {
    /// Kind of error that occurred.
    pub kind: ListJobsErrorKind,
    /// Additional metadata about the error, including error code, message, and request ID.
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `ListJobs` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum ListJobsErrorKind {
    InvalidNextTokenException(crate::error::InvalidNextTokenException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for ListJobsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ListJobsErrorKind::InvalidNextTokenException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListJobsErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl ListJobsError {
    pub fn new(kind: ListJobsErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: ListJobsErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: ListJobsErrorKind::Unhandled(err.into()),
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
    pub fn is_invalid_next_token_exception(&self) -> bool {
        matches!(&self.kind, ListJobsErrorKind::InvalidNextTokenException(_))
    }
}
impl std::error::Error for ListJobsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ListJobsErrorKind::InvalidNextTokenException(_inner) => Some(_inner),
            ListJobsErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `UpdateCluster` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct UpdateClusterError {
    /// Kind of error that occurred.
    pub kind: UpdateClusterErrorKind,
    /// Additional metadata about the error, including error code, message, and request ID.
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `UpdateCluster` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum UpdateClusterErrorKind {
    InvalidResourceException(crate::error::InvalidResourceException),
    InvalidJobStateException(crate::error::InvalidJobStateException),
    KmsRequestFailedException(crate::error::KmsRequestFailedException),
    InvalidInputCombinationException(crate::error::InvalidInputCombinationException),
    Ec2RequestFailedException(crate::error::Ec2RequestFailedException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for UpdateClusterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            UpdateClusterErrorKind::InvalidResourceException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateClusterErrorKind::InvalidJobStateException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateClusterErrorKind::KmsRequestFailedException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateClusterErrorKind::InvalidInputCombinationException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateClusterErrorKind::Ec2RequestFailedException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateClusterErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl UpdateClusterError {
    pub fn new(kind: UpdateClusterErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: UpdateClusterErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: UpdateClusterErrorKind::Unhandled(err.into()),
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
    pub fn is_invalid_resource_exception(&self) -> bool {
        matches!(&self.kind, UpdateClusterErrorKind::InvalidResourceException(_))
    }
    pub fn is_invalid_job_state_exception(&self) -> bool {
        matches!(&self.kind, UpdateClusterErrorKind::InvalidJobStateException(_))
    }
    pub fn is_kms_request_failed_exception(&self) -> bool {
        matches!(&self.kind, UpdateClusterErrorKind::KmsRequestFailedException(_))
    }
    pub fn is_invalid_input_combination_exception(&self) -> bool {
        matches!(&self.kind, UpdateClusterErrorKind::InvalidInputCombinationException(_))
    }
    pub fn is_ec2_request_failed_exception(&self) -> bool {
        matches!(&self.kind, UpdateClusterErrorKind::Ec2RequestFailedException(_))
    }
}
impl std::error::Error for UpdateClusterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            UpdateClusterErrorKind::InvalidResourceException(_inner) => Some(_inner),
            UpdateClusterErrorKind::InvalidJobStateException(_inner) => Some(_inner),
            UpdateClusterErrorKind::KmsRequestFailedException(_inner) => Some(_inner),
            UpdateClusterErrorKind::InvalidInputCombinationException(_inner) => Some(_inner),
            UpdateClusterErrorKind::Ec2RequestFailedException(_inner) => Some(_inner),
            UpdateClusterErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `UpdateJob` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct UpdateJobError {
    /// Kind of error that occurred.
    pub kind: UpdateJobErrorKind,
    /// Additional metadata about the error, including error code, message, and request ID.
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `UpdateJob` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum UpdateJobErrorKind {
    InvalidResourceException(crate::error::InvalidResourceException),
    InvalidJobStateException(crate::error::InvalidJobStateException),
    KmsRequestFailedException(crate::error::KmsRequestFailedException),
    InvalidInputCombinationException(crate::error::InvalidInputCombinationException),
    ClusterLimitExceededException(crate::error::ClusterLimitExceededException),
    Ec2RequestFailedException(crate::error::Ec2RequestFailedException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for UpdateJobError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            UpdateJobErrorKind::InvalidResourceException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateJobErrorKind::InvalidJobStateException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateJobErrorKind::KmsRequestFailedException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateJobErrorKind::InvalidInputCombinationException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateJobErrorKind::ClusterLimitExceededException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateJobErrorKind::Ec2RequestFailedException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateJobErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl UpdateJobError {
    pub fn new(kind: UpdateJobErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: UpdateJobErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: UpdateJobErrorKind::Unhandled(err.into()),
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
    pub fn is_invalid_resource_exception(&self) -> bool {
        matches!(&self.kind, UpdateJobErrorKind::InvalidResourceException(_))
    }
    pub fn is_invalid_job_state_exception(&self) -> bool {
        matches!(&self.kind, UpdateJobErrorKind::InvalidJobStateException(_))
    }
    pub fn is_kms_request_failed_exception(&self) -> bool {
        matches!(&self.kind, UpdateJobErrorKind::KmsRequestFailedException(_))
    }
    pub fn is_invalid_input_combination_exception(&self) -> bool {
        matches!(&self.kind, UpdateJobErrorKind::InvalidInputCombinationException(_))
    }
    pub fn is_cluster_limit_exceeded_exception(&self) -> bool {
        matches!(&self.kind, UpdateJobErrorKind::ClusterLimitExceededException(_))
    }
    pub fn is_ec2_request_failed_exception(&self) -> bool {
        matches!(&self.kind, UpdateJobErrorKind::Ec2RequestFailedException(_))
    }
}
impl std::error::Error for UpdateJobError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            UpdateJobErrorKind::InvalidResourceException(_inner) => Some(_inner),
            UpdateJobErrorKind::InvalidJobStateException(_inner) => Some(_inner),
            UpdateJobErrorKind::KmsRequestFailedException(_inner) => Some(_inner),
            UpdateJobErrorKind::InvalidInputCombinationException(_inner) => Some(_inner),
            UpdateJobErrorKind::ClusterLimitExceededException(_inner) => Some(_inner),
            UpdateJobErrorKind::Ec2RequestFailedException(_inner) => Some(_inner),
            UpdateJobErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Job creation failed. Currently, clusters support five nodes.
#[non_exhaustive]
#[derive(serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct ClusterLimitExceededException {
    #[serde(rename = "Message")]
    #[serde(alias = "message")]
    #[serde(default)]
    pub message: std::option::Option<std::string::String>,
}
impl ClusterLimitExceededException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`ClusterLimitExceededException`](crate::error::ClusterLimitExceededException)
    pub fn builder() -> crate::error::cluster_limit_exceeded_exception::Builder {
        crate::error::cluster_limit_exceeded_exception::Builder::default()
    }
}
impl std::fmt::Display for ClusterLimitExceededException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ClusterLimitExceededException")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for ClusterLimitExceededException {}
/// See [`ClusterLimitExceededException`](crate::error::ClusterLimitExceededException)
pub mod cluster_limit_exceeded_exception {
    /// A builder for [`ClusterLimitExceededException`](crate::error::ClusterLimitExceededException)
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
        /// Consumes the builder and constructs a [`ClusterLimitExceededException`](crate::error::ClusterLimitExceededException)
        pub fn build(self) -> crate::error::ClusterLimitExceededException {
            crate::error::ClusterLimitExceededException {
                message: self.message,
            }
        }
    }
}

/// Your IAM user lacks the necessary Amazon EC2 permissions to perform the attempted action.
#[non_exhaustive]
#[derive(serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct Ec2RequestFailedException {
    #[serde(rename = "Message")]
    #[serde(alias = "message")]
    #[serde(default)]
    pub message: std::option::Option<std::string::String>,
}
impl Ec2RequestFailedException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`Ec2RequestFailedException`](crate::error::Ec2RequestFailedException)
    pub fn builder() -> crate::error::ec2_request_failed_exception::Builder {
        crate::error::ec2_request_failed_exception::Builder::default()
    }
}
impl std::fmt::Display for Ec2RequestFailedException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Ec2RequestFailedException")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for Ec2RequestFailedException {}
/// See [`Ec2RequestFailedException`](crate::error::Ec2RequestFailedException)
pub mod ec2_request_failed_exception {
    /// A builder for [`Ec2RequestFailedException`](crate::error::Ec2RequestFailedException)
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
        /// Consumes the builder and constructs a [`Ec2RequestFailedException`](crate::error::Ec2RequestFailedException)
        pub fn build(self) -> crate::error::Ec2RequestFailedException {
            crate::error::Ec2RequestFailedException {
                message: self.message,
            }
        }
    }
}

/// The address provided was invalid.
#[non_exhaustive]
#[derive(serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct InvalidAddressException {
    #[serde(rename = "Message")]
    #[serde(alias = "message")]
    #[serde(default)]
    pub message: std::option::Option<std::string::String>,
}
impl InvalidAddressException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`InvalidAddressException`](crate::error::InvalidAddressException)
    pub fn builder() -> crate::error::invalid_address_exception::Builder {
        crate::error::invalid_address_exception::Builder::default()
    }
}
impl std::fmt::Display for InvalidAddressException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "InvalidAddressException")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for InvalidAddressException {}
/// See [`InvalidAddressException`](crate::error::InvalidAddressException)
pub mod invalid_address_exception {
    /// A builder for [`InvalidAddressException`](crate::error::InvalidAddressException)
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
        /// Consumes the builder and constructs a [`InvalidAddressException`](crate::error::InvalidAddressException)
        pub fn build(self) -> crate::error::InvalidAddressException {
            crate::error::InvalidAddressException {
                message: self.message,
            }
        }
    }
}

/// Job or cluster creation failed. One or more inputs were invalid.
#[non_exhaustive]
#[derive(serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct InvalidInputCombinationException {
    #[serde(rename = "Message")]
    #[serde(alias = "message")]
    #[serde(default)]
    pub message: std::option::Option<std::string::String>,
}
impl InvalidInputCombinationException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`InvalidInputCombinationException`](crate::error::InvalidInputCombinationException)
    pub fn builder() -> crate::error::invalid_input_combination_exception::Builder {
        crate::error::invalid_input_combination_exception::Builder::default()
    }
}
impl std::fmt::Display for InvalidInputCombinationException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "InvalidInputCombinationException")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for InvalidInputCombinationException {}
/// See [`InvalidInputCombinationException`](crate::error::InvalidInputCombinationException)
pub mod invalid_input_combination_exception {
    /// A builder for [`InvalidInputCombinationException`](crate::error::InvalidInputCombinationException)
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
        /// Consumes the builder and constructs a [`InvalidInputCombinationException`](crate::error::InvalidInputCombinationException)
        pub fn build(self) -> crate::error::InvalidInputCombinationException {
            crate::error::InvalidInputCombinationException {
                message: self.message,
            }
        }
    }
}

/// The action can't be performed because the job's current state doesn't allow that action to be performed.
#[non_exhaustive]
#[derive(serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct InvalidJobStateException {
    #[serde(rename = "Message")]
    #[serde(alias = "message")]
    #[serde(default)]
    pub message: std::option::Option<std::string::String>,
}
impl InvalidJobStateException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`InvalidJobStateException`](crate::error::InvalidJobStateException)
    pub fn builder() -> crate::error::invalid_job_state_exception::Builder {
        crate::error::invalid_job_state_exception::Builder::default()
    }
}
impl std::fmt::Display for InvalidJobStateException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "InvalidJobStateException")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for InvalidJobStateException {}
/// See [`InvalidJobStateException`](crate::error::InvalidJobStateException)
pub mod invalid_job_state_exception {
    /// A builder for [`InvalidJobStateException`](crate::error::InvalidJobStateException)
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
        /// Consumes the builder and constructs a [`InvalidJobStateException`](crate::error::InvalidJobStateException)
        pub fn build(self) -> crate::error::InvalidJobStateException {
            crate::error::InvalidJobStateException {
                message: self.message,
            }
        }
    }
}

/// The `NextToken` string was altered unexpectedly, and the operation has stopped.
#[non_exhaustive]
#[derive(serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct InvalidNextTokenException {
    #[serde(rename = "Message")]
    #[serde(alias = "message")]
    #[serde(default)]
    pub message: std::option::Option<std::string::String>,
}
impl InvalidNextTokenException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`InvalidNextTokenException`](crate::error::InvalidNextTokenException)
    pub fn builder() -> crate::error::invalid_next_token_exception::Builder {
        crate::error::invalid_next_token_exception::Builder::default()
    }
}
impl std::fmt::Display for InvalidNextTokenException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "InvalidNextTokenException")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for InvalidNextTokenException {}
/// See [`InvalidNextTokenException`](crate::error::InvalidNextTokenException)
pub mod invalid_next_token_exception {
    /// A builder for [`InvalidNextTokenException`](crate::error::InvalidNextTokenException)
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
        /// Consumes the builder and constructs a [`InvalidNextTokenException`](crate::error::InvalidNextTokenException)
        pub fn build(self) -> crate::error::InvalidNextTokenException {
            crate::error::InvalidNextTokenException {
                message: self.message,
            }
        }
    }
}

/// The specified resource can't be found.
#[non_exhaustive]
#[derive(serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct InvalidResourceException {
    #[serde(rename = "Message")]
    #[serde(alias = "message")]
    #[serde(default)]
    pub message: std::option::Option<std::string::String>,
    #[serde(rename = "ResourceType")]
    #[serde(default)]
    pub resource_type: std::option::Option<std::string::String>,
}
impl InvalidResourceException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`InvalidResourceException`](crate::error::InvalidResourceException)
    pub fn builder() -> crate::error::invalid_resource_exception::Builder {
        crate::error::invalid_resource_exception::Builder::default()
    }
}
impl std::fmt::Display for InvalidResourceException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "InvalidResourceException")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for InvalidResourceException {}
/// See [`InvalidResourceException`](crate::error::InvalidResourceException)
pub mod invalid_resource_exception {
    /// A builder for [`InvalidResourceException`](crate::error::InvalidResourceException)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        message: std::option::Option<std::string::String>,
        resource_type: std::option::Option<std::string::String>,
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
        pub fn resource_type(mut self, input: impl Into<std::string::String>) -> Self {
            self.resource_type = Some(input.into());
            self
        }
        pub fn set_resource_type(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.resource_type = input;
            self
        }
        /// Consumes the builder and constructs a [`InvalidResourceException`](crate::error::InvalidResourceException)
        pub fn build(self) -> crate::error::InvalidResourceException {
            crate::error::InvalidResourceException {
                message: self.message,
                resource_type: self.resource_type,
            }
        }
    }
}

/// The provided AWS Key Management Service key lacks the permissions to perform the specified action.
#[non_exhaustive]
#[derive(serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct KmsRequestFailedException {
    #[serde(rename = "Message")]
    #[serde(alias = "message")]
    #[serde(default)]
    pub message: std::option::Option<std::string::String>,
}
impl KmsRequestFailedException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`KmsRequestFailedException`](crate::error::KmsRequestFailedException)
    pub fn builder() -> crate::error::kms_request_failed_exception::Builder {
        crate::error::kms_request_failed_exception::Builder::default()
    }
}
impl std::fmt::Display for KmsRequestFailedException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "KmsRequestFailedException")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for KmsRequestFailedException {}
/// See [`KmsRequestFailedException`](crate::error::KmsRequestFailedException)
pub mod kms_request_failed_exception {
    /// A builder for [`KmsRequestFailedException`](crate::error::KmsRequestFailedException)
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
        /// Consumes the builder and constructs a [`KmsRequestFailedException`](crate::error::KmsRequestFailedException)
        pub fn build(self) -> crate::error::KmsRequestFailedException {
            crate::error::KmsRequestFailedException {
                message: self.message,
            }
        }
    }
}

/// The address is either outside the serviceable area for your region, or an error occurred.
#[non_exhaustive]
#[derive(serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct UnsupportedAddressException {
    #[serde(rename = "Message")]
    #[serde(alias = "message")]
    #[serde(default)]
    pub message: std::option::Option<std::string::String>,
}
impl UnsupportedAddressException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`UnsupportedAddressException`](crate::error::UnsupportedAddressException)
    pub fn builder() -> crate::error::unsupported_address_exception::Builder {
        crate::error::unsupported_address_exception::Builder::default()
    }
}
impl std::fmt::Display for UnsupportedAddressException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "UnsupportedAddressException")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for UnsupportedAddressException {}
/// See [`UnsupportedAddressException`](crate::error::UnsupportedAddressException)
pub mod unsupported_address_exception {
    /// A builder for [`UnsupportedAddressException`](crate::error::UnsupportedAddressException)
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
        /// Consumes the builder and constructs a [`UnsupportedAddressException`](crate::error::UnsupportedAddressException)
        pub fn build(self) -> crate::error::UnsupportedAddressException {
            crate::error::UnsupportedAddressException {
                message: self.message,
            }
        }
    }
}
