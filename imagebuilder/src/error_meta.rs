/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/// All possible error types for this service.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum Error {
    CallRateLimitExceededException(crate::error::CallRateLimitExceededException),
    ClientException(crate::error::ClientException),
    ForbiddenException(crate::error::ForbiddenException),
    IdempotentParameterMismatchException(crate::error::IdempotentParameterMismatchException),
    InvalidPaginationTokenException(crate::error::InvalidPaginationTokenException),
    InvalidParameterCombinationException(crate::error::InvalidParameterCombinationException),
    InvalidParameterException(crate::error::InvalidParameterException),
    InvalidParameterValueException(crate::error::InvalidParameterValueException),
    InvalidRequestException(crate::error::InvalidRequestException),
    InvalidVersionNumberException(crate::error::InvalidVersionNumberException),
    ResourceAlreadyExistsException(crate::error::ResourceAlreadyExistsException),
    ResourceDependencyException(crate::error::ResourceDependencyException),
    ResourceInUseException(crate::error::ResourceInUseException),
    ResourceNotFoundException(crate::error::ResourceNotFoundException),
    ServiceException(crate::error::ServiceException),
    ServiceUnavailableException(crate::error::ServiceUnavailableException),
    /// An unhandled error occurred.
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::CallRateLimitExceededException(inner) => std::fmt::Display::fmt(inner, f),
            Error::ClientException(inner) => std::fmt::Display::fmt(inner, f),
            Error::ForbiddenException(inner) => std::fmt::Display::fmt(inner, f),
            Error::IdempotentParameterMismatchException(inner) => std::fmt::Display::fmt(inner, f),
            Error::InvalidPaginationTokenException(inner) => std::fmt::Display::fmt(inner, f),
            Error::InvalidParameterCombinationException(inner) => std::fmt::Display::fmt(inner, f),
            Error::InvalidParameterException(inner) => std::fmt::Display::fmt(inner, f),
            Error::InvalidParameterValueException(inner) => std::fmt::Display::fmt(inner, f),
            Error::InvalidRequestException(inner) => std::fmt::Display::fmt(inner, f),
            Error::InvalidVersionNumberException(inner) => std::fmt::Display::fmt(inner, f),
            Error::ResourceAlreadyExistsException(inner) => std::fmt::Display::fmt(inner, f),
            Error::ResourceDependencyException(inner) => std::fmt::Display::fmt(inner, f),
            Error::ResourceInUseException(inner) => std::fmt::Display::fmt(inner, f),
            Error::ResourceNotFoundException(inner) => std::fmt::Display::fmt(inner, f),
            Error::ServiceException(inner) => std::fmt::Display::fmt(inner, f),
            Error::ServiceUnavailableException(inner) => std::fmt::Display::fmt(inner, f),
            Error::Unhandled(inner) => std::fmt::Display::fmt(inner, f),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::CancelImageCreationError, R>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::CancelImageCreationError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::CancelImageCreationErrorKind::ServiceException(inner) => Error::ServiceException(inner),
                crate::error::CancelImageCreationErrorKind::ClientException(inner) => Error::ClientException(inner),
                crate::error::CancelImageCreationErrorKind::ServiceUnavailableException(inner) => Error::ServiceUnavailableException(inner),
                crate::error::CancelImageCreationErrorKind::InvalidRequestException(inner) => Error::InvalidRequestException(inner),
                crate::error::CancelImageCreationErrorKind::ForbiddenException(inner) => Error::ForbiddenException(inner),
                crate::error::CancelImageCreationErrorKind::CallRateLimitExceededException(inner) => Error::CallRateLimitExceededException(inner),
                crate::error::CancelImageCreationErrorKind::IdempotentParameterMismatchException(inner) => Error::IdempotentParameterMismatchException(inner),
                crate::error::CancelImageCreationErrorKind::ResourceInUseException(inner) => Error::ResourceInUseException(inner),
                crate::error::CancelImageCreationErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            smithy_http::result::SdkError::ConstructionFailure(err)
            | smithy_http::result::SdkError::DispatchFailure(err)
            | smithy_http::result::SdkError::ResponseError { err, .. } => Error::Unhandled(err),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::CreateComponentError, R>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::CreateComponentError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::CreateComponentErrorKind::ServiceException(inner) => Error::ServiceException(inner),
                crate::error::CreateComponentErrorKind::ClientException(inner) => Error::ClientException(inner),
                crate::error::CreateComponentErrorKind::ServiceUnavailableException(inner) => Error::ServiceUnavailableException(inner),
                crate::error::CreateComponentErrorKind::InvalidRequestException(inner) => Error::InvalidRequestException(inner),
                crate::error::CreateComponentErrorKind::ForbiddenException(inner) => Error::ForbiddenException(inner),
                crate::error::CreateComponentErrorKind::CallRateLimitExceededException(inner) => Error::CallRateLimitExceededException(inner),
                crate::error::CreateComponentErrorKind::IdempotentParameterMismatchException(inner) => Error::IdempotentParameterMismatchException(inner),
                crate::error::CreateComponentErrorKind::ResourceInUseException(inner) => Error::ResourceInUseException(inner),
                crate::error::CreateComponentErrorKind::InvalidVersionNumberException(inner) => Error::InvalidVersionNumberException(inner),
                crate::error::CreateComponentErrorKind::InvalidParameterCombinationException(inner) => Error::InvalidParameterCombinationException(inner),
                crate::error::CreateComponentErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            smithy_http::result::SdkError::ConstructionFailure(err)
            | smithy_http::result::SdkError::DispatchFailure(err)
            | smithy_http::result::SdkError::ResponseError { err, .. } => Error::Unhandled(err),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::CreateDistributionConfigurationError, R>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::CreateDistributionConfigurationError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::CreateDistributionConfigurationErrorKind::ServiceException(inner) => Error::ServiceException(inner),
                crate::error::CreateDistributionConfigurationErrorKind::ClientException(inner) => Error::ClientException(inner),
                crate::error::CreateDistributionConfigurationErrorKind::ServiceUnavailableException(inner) => Error::ServiceUnavailableException(inner),
                crate::error::CreateDistributionConfigurationErrorKind::InvalidRequestException(inner) => Error::InvalidRequestException(inner),
                crate::error::CreateDistributionConfigurationErrorKind::ForbiddenException(inner) => Error::ForbiddenException(inner),
                crate::error::CreateDistributionConfigurationErrorKind::CallRateLimitExceededException(inner) => Error::CallRateLimitExceededException(inner),
                crate::error::CreateDistributionConfigurationErrorKind::IdempotentParameterMismatchException(inner) => Error::IdempotentParameterMismatchException(inner),
                crate::error::CreateDistributionConfigurationErrorKind::ResourceInUseException(inner) => Error::ResourceInUseException(inner),
                crate::error::CreateDistributionConfigurationErrorKind::ResourceAlreadyExistsException(inner) => Error::ResourceAlreadyExistsException(inner),
                crate::error::CreateDistributionConfigurationErrorKind::InvalidParameterCombinationException(inner) => Error::InvalidParameterCombinationException(inner),
                crate::error::CreateDistributionConfigurationErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            smithy_http::result::SdkError::ConstructionFailure(err)
            | smithy_http::result::SdkError::DispatchFailure(err)
            | smithy_http::result::SdkError::ResponseError { err, .. } => Error::Unhandled(err),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::CreateImageError, R>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::CreateImageError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::CreateImageErrorKind::ServiceException(inner) => Error::ServiceException(inner),
                crate::error::CreateImageErrorKind::ClientException(inner) => Error::ClientException(inner),
                crate::error::CreateImageErrorKind::ServiceUnavailableException(inner) => Error::ServiceUnavailableException(inner),
                crate::error::CreateImageErrorKind::InvalidRequestException(inner) => Error::InvalidRequestException(inner),
                crate::error::CreateImageErrorKind::ForbiddenException(inner) => Error::ForbiddenException(inner),
                crate::error::CreateImageErrorKind::CallRateLimitExceededException(inner) => Error::CallRateLimitExceededException(inner),
                crate::error::CreateImageErrorKind::IdempotentParameterMismatchException(inner) => Error::IdempotentParameterMismatchException(inner),
                crate::error::CreateImageErrorKind::ResourceInUseException(inner) => Error::ResourceInUseException(inner),
                crate::error::CreateImageErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            smithy_http::result::SdkError::ConstructionFailure(err)
            | smithy_http::result::SdkError::DispatchFailure(err)
            | smithy_http::result::SdkError::ResponseError { err, .. } => Error::Unhandled(err),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::CreateImagePipelineError, R>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::CreateImagePipelineError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::CreateImagePipelineErrorKind::ServiceException(inner) => Error::ServiceException(inner),
                crate::error::CreateImagePipelineErrorKind::ClientException(inner) => Error::ClientException(inner),
                crate::error::CreateImagePipelineErrorKind::ServiceUnavailableException(inner) => Error::ServiceUnavailableException(inner),
                crate::error::CreateImagePipelineErrorKind::InvalidRequestException(inner) => Error::InvalidRequestException(inner),
                crate::error::CreateImagePipelineErrorKind::ForbiddenException(inner) => Error::ForbiddenException(inner),
                crate::error::CreateImagePipelineErrorKind::CallRateLimitExceededException(inner) => Error::CallRateLimitExceededException(inner),
                crate::error::CreateImagePipelineErrorKind::IdempotentParameterMismatchException(inner) => Error::IdempotentParameterMismatchException(inner),
                crate::error::CreateImagePipelineErrorKind::ResourceInUseException(inner) => Error::ResourceInUseException(inner),
                crate::error::CreateImagePipelineErrorKind::ResourceAlreadyExistsException(inner) => Error::ResourceAlreadyExistsException(inner),
                crate::error::CreateImagePipelineErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            smithy_http::result::SdkError::ConstructionFailure(err)
            | smithy_http::result::SdkError::DispatchFailure(err)
            | smithy_http::result::SdkError::ResponseError { err, .. } => Error::Unhandled(err),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::CreateImageRecipeError, R>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::CreateImageRecipeError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::CreateImageRecipeErrorKind::ServiceException(inner) => Error::ServiceException(inner),
                crate::error::CreateImageRecipeErrorKind::ClientException(inner) => Error::ClientException(inner),
                crate::error::CreateImageRecipeErrorKind::ServiceUnavailableException(inner) => Error::ServiceUnavailableException(inner),
                crate::error::CreateImageRecipeErrorKind::InvalidRequestException(inner) => Error::InvalidRequestException(inner),
                crate::error::CreateImageRecipeErrorKind::ForbiddenException(inner) => Error::ForbiddenException(inner),
                crate::error::CreateImageRecipeErrorKind::CallRateLimitExceededException(inner) => Error::CallRateLimitExceededException(inner),
                crate::error::CreateImageRecipeErrorKind::IdempotentParameterMismatchException(inner) => Error::IdempotentParameterMismatchException(inner),
                crate::error::CreateImageRecipeErrorKind::ResourceInUseException(inner) => Error::ResourceInUseException(inner),
                crate::error::CreateImageRecipeErrorKind::InvalidVersionNumberException(inner) => Error::InvalidVersionNumberException(inner),
                crate::error::CreateImageRecipeErrorKind::ResourceAlreadyExistsException(inner) => Error::ResourceAlreadyExistsException(inner),
                crate::error::CreateImageRecipeErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            smithy_http::result::SdkError::ConstructionFailure(err)
            | smithy_http::result::SdkError::DispatchFailure(err)
            | smithy_http::result::SdkError::ResponseError { err, .. } => Error::Unhandled(err),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::CreateInfrastructureConfigurationError, R>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::CreateInfrastructureConfigurationError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::CreateInfrastructureConfigurationErrorKind::ServiceException(inner) => Error::ServiceException(inner),
                crate::error::CreateInfrastructureConfigurationErrorKind::ClientException(inner) => Error::ClientException(inner),
                crate::error::CreateInfrastructureConfigurationErrorKind::ServiceUnavailableException(inner) => Error::ServiceUnavailableException(inner),
                crate::error::CreateInfrastructureConfigurationErrorKind::InvalidRequestException(inner) => Error::InvalidRequestException(inner),
                crate::error::CreateInfrastructureConfigurationErrorKind::ForbiddenException(inner) => Error::ForbiddenException(inner),
                crate::error::CreateInfrastructureConfigurationErrorKind::CallRateLimitExceededException(inner) => Error::CallRateLimitExceededException(inner),
                crate::error::CreateInfrastructureConfigurationErrorKind::IdempotentParameterMismatchException(inner) => Error::IdempotentParameterMismatchException(inner),
                crate::error::CreateInfrastructureConfigurationErrorKind::ResourceInUseException(inner) => Error::ResourceInUseException(inner),
                crate::error::CreateInfrastructureConfigurationErrorKind::ResourceAlreadyExistsException(inner) => Error::ResourceAlreadyExistsException(inner),
                crate::error::CreateInfrastructureConfigurationErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            smithy_http::result::SdkError::ConstructionFailure(err)
            | smithy_http::result::SdkError::DispatchFailure(err)
            | smithy_http::result::SdkError::ResponseError { err, .. } => Error::Unhandled(err),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::DeleteComponentError, R>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::DeleteComponentError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::DeleteComponentErrorKind::ServiceException(inner) => Error::ServiceException(inner),
                crate::error::DeleteComponentErrorKind::ClientException(inner) => Error::ClientException(inner),
                crate::error::DeleteComponentErrorKind::ServiceUnavailableException(inner) => Error::ServiceUnavailableException(inner),
                crate::error::DeleteComponentErrorKind::InvalidRequestException(inner) => Error::InvalidRequestException(inner),
                crate::error::DeleteComponentErrorKind::ForbiddenException(inner) => Error::ForbiddenException(inner),
                crate::error::DeleteComponentErrorKind::CallRateLimitExceededException(inner) => Error::CallRateLimitExceededException(inner),
                crate::error::DeleteComponentErrorKind::ResourceDependencyException(inner) => Error::ResourceDependencyException(inner),
                crate::error::DeleteComponentErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            smithy_http::result::SdkError::ConstructionFailure(err)
            | smithy_http::result::SdkError::DispatchFailure(err)
            | smithy_http::result::SdkError::ResponseError { err, .. } => Error::Unhandled(err),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::DeleteDistributionConfigurationError, R>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::DeleteDistributionConfigurationError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::DeleteDistributionConfigurationErrorKind::ServiceException(inner) => Error::ServiceException(inner),
                crate::error::DeleteDistributionConfigurationErrorKind::ClientException(inner) => Error::ClientException(inner),
                crate::error::DeleteDistributionConfigurationErrorKind::ServiceUnavailableException(inner) => Error::ServiceUnavailableException(inner),
                crate::error::DeleteDistributionConfigurationErrorKind::InvalidRequestException(inner) => Error::InvalidRequestException(inner),
                crate::error::DeleteDistributionConfigurationErrorKind::ForbiddenException(inner) => Error::ForbiddenException(inner),
                crate::error::DeleteDistributionConfigurationErrorKind::CallRateLimitExceededException(inner) => Error::CallRateLimitExceededException(inner),
                crate::error::DeleteDistributionConfigurationErrorKind::ResourceDependencyException(inner) => Error::ResourceDependencyException(inner),
                crate::error::DeleteDistributionConfigurationErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            smithy_http::result::SdkError::ConstructionFailure(err)
            | smithy_http::result::SdkError::DispatchFailure(err)
            | smithy_http::result::SdkError::ResponseError { err, .. } => Error::Unhandled(err),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::DeleteImageError, R>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::DeleteImageError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::DeleteImageErrorKind::ServiceException(inner) => Error::ServiceException(inner),
                crate::error::DeleteImageErrorKind::ClientException(inner) => Error::ClientException(inner),
                crate::error::DeleteImageErrorKind::ServiceUnavailableException(inner) => Error::ServiceUnavailableException(inner),
                crate::error::DeleteImageErrorKind::InvalidRequestException(inner) => Error::InvalidRequestException(inner),
                crate::error::DeleteImageErrorKind::ForbiddenException(inner) => Error::ForbiddenException(inner),
                crate::error::DeleteImageErrorKind::CallRateLimitExceededException(inner) => Error::CallRateLimitExceededException(inner),
                crate::error::DeleteImageErrorKind::ResourceDependencyException(inner) => Error::ResourceDependencyException(inner),
                crate::error::DeleteImageErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            smithy_http::result::SdkError::ConstructionFailure(err)
            | smithy_http::result::SdkError::DispatchFailure(err)
            | smithy_http::result::SdkError::ResponseError { err, .. } => Error::Unhandled(err),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::DeleteImagePipelineError, R>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::DeleteImagePipelineError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::DeleteImagePipelineErrorKind::ServiceException(inner) => Error::ServiceException(inner),
                crate::error::DeleteImagePipelineErrorKind::ClientException(inner) => Error::ClientException(inner),
                crate::error::DeleteImagePipelineErrorKind::ServiceUnavailableException(inner) => Error::ServiceUnavailableException(inner),
                crate::error::DeleteImagePipelineErrorKind::InvalidRequestException(inner) => Error::InvalidRequestException(inner),
                crate::error::DeleteImagePipelineErrorKind::ForbiddenException(inner) => Error::ForbiddenException(inner),
                crate::error::DeleteImagePipelineErrorKind::CallRateLimitExceededException(inner) => Error::CallRateLimitExceededException(inner),
                crate::error::DeleteImagePipelineErrorKind::ResourceDependencyException(inner) => Error::ResourceDependencyException(inner),
                crate::error::DeleteImagePipelineErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            smithy_http::result::SdkError::ConstructionFailure(err)
            | smithy_http::result::SdkError::DispatchFailure(err)
            | smithy_http::result::SdkError::ResponseError { err, .. } => Error::Unhandled(err),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::DeleteImageRecipeError, R>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::DeleteImageRecipeError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::DeleteImageRecipeErrorKind::ServiceException(inner) => Error::ServiceException(inner),
                crate::error::DeleteImageRecipeErrorKind::ClientException(inner) => Error::ClientException(inner),
                crate::error::DeleteImageRecipeErrorKind::ServiceUnavailableException(inner) => Error::ServiceUnavailableException(inner),
                crate::error::DeleteImageRecipeErrorKind::InvalidRequestException(inner) => Error::InvalidRequestException(inner),
                crate::error::DeleteImageRecipeErrorKind::ForbiddenException(inner) => Error::ForbiddenException(inner),
                crate::error::DeleteImageRecipeErrorKind::CallRateLimitExceededException(inner) => Error::CallRateLimitExceededException(inner),
                crate::error::DeleteImageRecipeErrorKind::ResourceDependencyException(inner) => Error::ResourceDependencyException(inner),
                crate::error::DeleteImageRecipeErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            smithy_http::result::SdkError::ConstructionFailure(err)
            | smithy_http::result::SdkError::DispatchFailure(err)
            | smithy_http::result::SdkError::ResponseError { err, .. } => Error::Unhandled(err),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::DeleteInfrastructureConfigurationError, R>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::DeleteInfrastructureConfigurationError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::DeleteInfrastructureConfigurationErrorKind::ServiceException(inner) => Error::ServiceException(inner),
                crate::error::DeleteInfrastructureConfigurationErrorKind::ClientException(inner) => Error::ClientException(inner),
                crate::error::DeleteInfrastructureConfigurationErrorKind::ServiceUnavailableException(inner) => Error::ServiceUnavailableException(inner),
                crate::error::DeleteInfrastructureConfigurationErrorKind::InvalidRequestException(inner) => Error::InvalidRequestException(inner),
                crate::error::DeleteInfrastructureConfigurationErrorKind::ForbiddenException(inner) => Error::ForbiddenException(inner),
                crate::error::DeleteInfrastructureConfigurationErrorKind::CallRateLimitExceededException(inner) => Error::CallRateLimitExceededException(inner),
                crate::error::DeleteInfrastructureConfigurationErrorKind::ResourceDependencyException(inner) => Error::ResourceDependencyException(inner),
                crate::error::DeleteInfrastructureConfigurationErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            smithy_http::result::SdkError::ConstructionFailure(err)
            | smithy_http::result::SdkError::DispatchFailure(err)
            | smithy_http::result::SdkError::ResponseError { err, .. } => Error::Unhandled(err),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::GetComponentError, R>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::GetComponentError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::GetComponentErrorKind::ServiceException(inner) => Error::ServiceException(inner),
                crate::error::GetComponentErrorKind::ClientException(inner) => Error::ClientException(inner),
                crate::error::GetComponentErrorKind::ServiceUnavailableException(inner) => Error::ServiceUnavailableException(inner),
                crate::error::GetComponentErrorKind::InvalidRequestException(inner) => Error::InvalidRequestException(inner),
                crate::error::GetComponentErrorKind::ForbiddenException(inner) => Error::ForbiddenException(inner),
                crate::error::GetComponentErrorKind::CallRateLimitExceededException(inner) => Error::CallRateLimitExceededException(inner),
                crate::error::GetComponentErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            smithy_http::result::SdkError::ConstructionFailure(err)
            | smithy_http::result::SdkError::DispatchFailure(err)
            | smithy_http::result::SdkError::ResponseError { err, .. } => Error::Unhandled(err),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::GetComponentPolicyError, R>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::GetComponentPolicyError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::GetComponentPolicyErrorKind::ServiceException(inner) => Error::ServiceException(inner),
                crate::error::GetComponentPolicyErrorKind::ServiceUnavailableException(inner) => Error::ServiceUnavailableException(inner),
                crate::error::GetComponentPolicyErrorKind::ResourceNotFoundException(inner) => Error::ResourceNotFoundException(inner),
                crate::error::GetComponentPolicyErrorKind::InvalidRequestException(inner) => Error::InvalidRequestException(inner),
                crate::error::GetComponentPolicyErrorKind::ForbiddenException(inner) => Error::ForbiddenException(inner),
                crate::error::GetComponentPolicyErrorKind::CallRateLimitExceededException(inner) => Error::CallRateLimitExceededException(inner),
                crate::error::GetComponentPolicyErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            smithy_http::result::SdkError::ConstructionFailure(err)
            | smithy_http::result::SdkError::DispatchFailure(err)
            | smithy_http::result::SdkError::ResponseError { err, .. } => Error::Unhandled(err),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::GetDistributionConfigurationError, R>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::GetDistributionConfigurationError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::GetDistributionConfigurationErrorKind::ServiceException(inner) => Error::ServiceException(inner),
                crate::error::GetDistributionConfigurationErrorKind::ClientException(inner) => Error::ClientException(inner),
                crate::error::GetDistributionConfigurationErrorKind::ServiceUnavailableException(inner) => Error::ServiceUnavailableException(inner),
                crate::error::GetDistributionConfigurationErrorKind::InvalidRequestException(inner) => Error::InvalidRequestException(inner),
                crate::error::GetDistributionConfigurationErrorKind::ForbiddenException(inner) => Error::ForbiddenException(inner),
                crate::error::GetDistributionConfigurationErrorKind::CallRateLimitExceededException(inner) => Error::CallRateLimitExceededException(inner),
                crate::error::GetDistributionConfigurationErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            smithy_http::result::SdkError::ConstructionFailure(err)
            | smithy_http::result::SdkError::DispatchFailure(err)
            | smithy_http::result::SdkError::ResponseError { err, .. } => Error::Unhandled(err),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::GetImageError, R>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::GetImageError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::GetImageErrorKind::ServiceException(inner) => Error::ServiceException(inner),
                crate::error::GetImageErrorKind::ClientException(inner) => Error::ClientException(inner),
                crate::error::GetImageErrorKind::ServiceUnavailableException(inner) => Error::ServiceUnavailableException(inner),
                crate::error::GetImageErrorKind::InvalidRequestException(inner) => Error::InvalidRequestException(inner),
                crate::error::GetImageErrorKind::ForbiddenException(inner) => Error::ForbiddenException(inner),
                crate::error::GetImageErrorKind::CallRateLimitExceededException(inner) => Error::CallRateLimitExceededException(inner),
                crate::error::GetImageErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            smithy_http::result::SdkError::ConstructionFailure(err)
            | smithy_http::result::SdkError::DispatchFailure(err)
            | smithy_http::result::SdkError::ResponseError { err, .. } => Error::Unhandled(err),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::GetImagePipelineError, R>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::GetImagePipelineError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::GetImagePipelineErrorKind::ServiceException(inner) => Error::ServiceException(inner),
                crate::error::GetImagePipelineErrorKind::ClientException(inner) => Error::ClientException(inner),
                crate::error::GetImagePipelineErrorKind::ServiceUnavailableException(inner) => Error::ServiceUnavailableException(inner),
                crate::error::GetImagePipelineErrorKind::InvalidRequestException(inner) => Error::InvalidRequestException(inner),
                crate::error::GetImagePipelineErrorKind::ForbiddenException(inner) => Error::ForbiddenException(inner),
                crate::error::GetImagePipelineErrorKind::CallRateLimitExceededException(inner) => Error::CallRateLimitExceededException(inner),
                crate::error::GetImagePipelineErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            smithy_http::result::SdkError::ConstructionFailure(err)
            | smithy_http::result::SdkError::DispatchFailure(err)
            | smithy_http::result::SdkError::ResponseError { err, .. } => Error::Unhandled(err),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::GetImagePolicyError, R>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::GetImagePolicyError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::GetImagePolicyErrorKind::ServiceException(inner) => Error::ServiceException(inner),
                crate::error::GetImagePolicyErrorKind::ServiceUnavailableException(inner) => Error::ServiceUnavailableException(inner),
                crate::error::GetImagePolicyErrorKind::ResourceNotFoundException(inner) => Error::ResourceNotFoundException(inner),
                crate::error::GetImagePolicyErrorKind::InvalidRequestException(inner) => Error::InvalidRequestException(inner),
                crate::error::GetImagePolicyErrorKind::ForbiddenException(inner) => Error::ForbiddenException(inner),
                crate::error::GetImagePolicyErrorKind::CallRateLimitExceededException(inner) => Error::CallRateLimitExceededException(inner),
                crate::error::GetImagePolicyErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            smithy_http::result::SdkError::ConstructionFailure(err)
            | smithy_http::result::SdkError::DispatchFailure(err)
            | smithy_http::result::SdkError::ResponseError { err, .. } => Error::Unhandled(err),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::GetImageRecipeError, R>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::GetImageRecipeError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::GetImageRecipeErrorKind::ServiceException(inner) => Error::ServiceException(inner),
                crate::error::GetImageRecipeErrorKind::ClientException(inner) => Error::ClientException(inner),
                crate::error::GetImageRecipeErrorKind::ServiceUnavailableException(inner) => Error::ServiceUnavailableException(inner),
                crate::error::GetImageRecipeErrorKind::InvalidRequestException(inner) => Error::InvalidRequestException(inner),
                crate::error::GetImageRecipeErrorKind::ForbiddenException(inner) => Error::ForbiddenException(inner),
                crate::error::GetImageRecipeErrorKind::CallRateLimitExceededException(inner) => Error::CallRateLimitExceededException(inner),
                crate::error::GetImageRecipeErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            smithy_http::result::SdkError::ConstructionFailure(err)
            | smithy_http::result::SdkError::DispatchFailure(err)
            | smithy_http::result::SdkError::ResponseError { err, .. } => Error::Unhandled(err),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::GetImageRecipePolicyError, R>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::GetImageRecipePolicyError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::GetImageRecipePolicyErrorKind::ServiceException(inner) => Error::ServiceException(inner),
                crate::error::GetImageRecipePolicyErrorKind::ServiceUnavailableException(inner) => Error::ServiceUnavailableException(inner),
                crate::error::GetImageRecipePolicyErrorKind::ResourceNotFoundException(inner) => Error::ResourceNotFoundException(inner),
                crate::error::GetImageRecipePolicyErrorKind::InvalidRequestException(inner) => Error::InvalidRequestException(inner),
                crate::error::GetImageRecipePolicyErrorKind::ForbiddenException(inner) => Error::ForbiddenException(inner),
                crate::error::GetImageRecipePolicyErrorKind::CallRateLimitExceededException(inner) => Error::CallRateLimitExceededException(inner),
                crate::error::GetImageRecipePolicyErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            smithy_http::result::SdkError::ConstructionFailure(err)
            | smithy_http::result::SdkError::DispatchFailure(err)
            | smithy_http::result::SdkError::ResponseError { err, .. } => Error::Unhandled(err),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::GetInfrastructureConfigurationError, R>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::GetInfrastructureConfigurationError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::GetInfrastructureConfigurationErrorKind::ServiceException(inner) => Error::ServiceException(inner),
                crate::error::GetInfrastructureConfigurationErrorKind::ClientException(inner) => Error::ClientException(inner),
                crate::error::GetInfrastructureConfigurationErrorKind::ServiceUnavailableException(inner) => Error::ServiceUnavailableException(inner),
                crate::error::GetInfrastructureConfigurationErrorKind::InvalidRequestException(inner) => Error::InvalidRequestException(inner),
                crate::error::GetInfrastructureConfigurationErrorKind::ForbiddenException(inner) => Error::ForbiddenException(inner),
                crate::error::GetInfrastructureConfigurationErrorKind::CallRateLimitExceededException(inner) => Error::CallRateLimitExceededException(inner),
                crate::error::GetInfrastructureConfigurationErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            smithy_http::result::SdkError::ConstructionFailure(err)
            | smithy_http::result::SdkError::DispatchFailure(err)
            | smithy_http::result::SdkError::ResponseError { err, .. } => Error::Unhandled(err),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::ImportComponentError, R>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::ImportComponentError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::ImportComponentErrorKind::ServiceException(inner) => Error::ServiceException(inner),
                crate::error::ImportComponentErrorKind::ClientException(inner) => Error::ClientException(inner),
                crate::error::ImportComponentErrorKind::ServiceUnavailableException(inner) => Error::ServiceUnavailableException(inner),
                crate::error::ImportComponentErrorKind::InvalidRequestException(inner) => Error::InvalidRequestException(inner),
                crate::error::ImportComponentErrorKind::ForbiddenException(inner) => Error::ForbiddenException(inner),
                crate::error::ImportComponentErrorKind::CallRateLimitExceededException(inner) => Error::CallRateLimitExceededException(inner),
                crate::error::ImportComponentErrorKind::IdempotentParameterMismatchException(inner) => Error::IdempotentParameterMismatchException(inner),
                crate::error::ImportComponentErrorKind::ResourceInUseException(inner) => Error::ResourceInUseException(inner),
                crate::error::ImportComponentErrorKind::InvalidVersionNumberException(inner) => Error::InvalidVersionNumberException(inner),
                crate::error::ImportComponentErrorKind::InvalidParameterCombinationException(inner) => Error::InvalidParameterCombinationException(inner),
                crate::error::ImportComponentErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            smithy_http::result::SdkError::ConstructionFailure(err)
            | smithy_http::result::SdkError::DispatchFailure(err)
            | smithy_http::result::SdkError::ResponseError { err, .. } => Error::Unhandled(err),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::ListComponentBuildVersionsError, R>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::ListComponentBuildVersionsError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::ListComponentBuildVersionsErrorKind::ServiceException(inner) => Error::ServiceException(inner),
                crate::error::ListComponentBuildVersionsErrorKind::ClientException(inner) => Error::ClientException(inner),
                crate::error::ListComponentBuildVersionsErrorKind::ServiceUnavailableException(inner) => Error::ServiceUnavailableException(inner),
                crate::error::ListComponentBuildVersionsErrorKind::InvalidRequestException(inner) => Error::InvalidRequestException(inner),
                crate::error::ListComponentBuildVersionsErrorKind::ForbiddenException(inner) => Error::ForbiddenException(inner),
                crate::error::ListComponentBuildVersionsErrorKind::CallRateLimitExceededException(inner) => Error::CallRateLimitExceededException(inner),
                crate::error::ListComponentBuildVersionsErrorKind::InvalidPaginationTokenException(inner) => Error::InvalidPaginationTokenException(inner),
                crate::error::ListComponentBuildVersionsErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            smithy_http::result::SdkError::ConstructionFailure(err)
            | smithy_http::result::SdkError::DispatchFailure(err)
            | smithy_http::result::SdkError::ResponseError { err, .. } => Error::Unhandled(err),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::ListComponentsError, R>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::ListComponentsError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::ListComponentsErrorKind::ServiceException(inner) => Error::ServiceException(inner),
                crate::error::ListComponentsErrorKind::ClientException(inner) => Error::ClientException(inner),
                crate::error::ListComponentsErrorKind::ServiceUnavailableException(inner) => Error::ServiceUnavailableException(inner),
                crate::error::ListComponentsErrorKind::InvalidRequestException(inner) => Error::InvalidRequestException(inner),
                crate::error::ListComponentsErrorKind::ForbiddenException(inner) => Error::ForbiddenException(inner),
                crate::error::ListComponentsErrorKind::CallRateLimitExceededException(inner) => Error::CallRateLimitExceededException(inner),
                crate::error::ListComponentsErrorKind::InvalidPaginationTokenException(inner) => Error::InvalidPaginationTokenException(inner),
                crate::error::ListComponentsErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            smithy_http::result::SdkError::ConstructionFailure(err)
            | smithy_http::result::SdkError::DispatchFailure(err)
            | smithy_http::result::SdkError::ResponseError { err, .. } => Error::Unhandled(err),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::ListDistributionConfigurationsError, R>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::ListDistributionConfigurationsError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::ListDistributionConfigurationsErrorKind::ServiceException(inner) => Error::ServiceException(inner),
                crate::error::ListDistributionConfigurationsErrorKind::ClientException(inner) => Error::ClientException(inner),
                crate::error::ListDistributionConfigurationsErrorKind::ServiceUnavailableException(inner) => Error::ServiceUnavailableException(inner),
                crate::error::ListDistributionConfigurationsErrorKind::InvalidRequestException(inner) => Error::InvalidRequestException(inner),
                crate::error::ListDistributionConfigurationsErrorKind::ForbiddenException(inner) => Error::ForbiddenException(inner),
                crate::error::ListDistributionConfigurationsErrorKind::CallRateLimitExceededException(inner) => Error::CallRateLimitExceededException(inner),
                crate::error::ListDistributionConfigurationsErrorKind::InvalidPaginationTokenException(inner) => Error::InvalidPaginationTokenException(inner),
                crate::error::ListDistributionConfigurationsErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            smithy_http::result::SdkError::ConstructionFailure(err)
            | smithy_http::result::SdkError::DispatchFailure(err)
            | smithy_http::result::SdkError::ResponseError { err, .. } => Error::Unhandled(err),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::ListImageBuildVersionsError, R>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::ListImageBuildVersionsError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::ListImageBuildVersionsErrorKind::ServiceException(inner) => Error::ServiceException(inner),
                crate::error::ListImageBuildVersionsErrorKind::ClientException(inner) => Error::ClientException(inner),
                crate::error::ListImageBuildVersionsErrorKind::ServiceUnavailableException(inner) => Error::ServiceUnavailableException(inner),
                crate::error::ListImageBuildVersionsErrorKind::InvalidRequestException(inner) => Error::InvalidRequestException(inner),
                crate::error::ListImageBuildVersionsErrorKind::ForbiddenException(inner) => Error::ForbiddenException(inner),
                crate::error::ListImageBuildVersionsErrorKind::CallRateLimitExceededException(inner) => Error::CallRateLimitExceededException(inner),
                crate::error::ListImageBuildVersionsErrorKind::InvalidPaginationTokenException(inner) => Error::InvalidPaginationTokenException(inner),
                crate::error::ListImageBuildVersionsErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            smithy_http::result::SdkError::ConstructionFailure(err)
            | smithy_http::result::SdkError::DispatchFailure(err)
            | smithy_http::result::SdkError::ResponseError { err, .. } => Error::Unhandled(err),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::ListImagePipelineImagesError, R>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::ListImagePipelineImagesError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::ListImagePipelineImagesErrorKind::ServiceException(inner) => Error::ServiceException(inner),
                crate::error::ListImagePipelineImagesErrorKind::ClientException(inner) => Error::ClientException(inner),
                crate::error::ListImagePipelineImagesErrorKind::ServiceUnavailableException(inner) => Error::ServiceUnavailableException(inner),
                crate::error::ListImagePipelineImagesErrorKind::InvalidRequestException(inner) => Error::InvalidRequestException(inner),
                crate::error::ListImagePipelineImagesErrorKind::ForbiddenException(inner) => Error::ForbiddenException(inner),
                crate::error::ListImagePipelineImagesErrorKind::CallRateLimitExceededException(inner) => Error::CallRateLimitExceededException(inner),
                crate::error::ListImagePipelineImagesErrorKind::InvalidPaginationTokenException(inner) => Error::InvalidPaginationTokenException(inner),
                crate::error::ListImagePipelineImagesErrorKind::ResourceNotFoundException(inner) => Error::ResourceNotFoundException(inner),
                crate::error::ListImagePipelineImagesErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            smithy_http::result::SdkError::ConstructionFailure(err)
            | smithy_http::result::SdkError::DispatchFailure(err)
            | smithy_http::result::SdkError::ResponseError { err, .. } => Error::Unhandled(err),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::ListImagePipelinesError, R>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::ListImagePipelinesError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::ListImagePipelinesErrorKind::ServiceException(inner) => Error::ServiceException(inner),
                crate::error::ListImagePipelinesErrorKind::ClientException(inner) => Error::ClientException(inner),
                crate::error::ListImagePipelinesErrorKind::ServiceUnavailableException(inner) => Error::ServiceUnavailableException(inner),
                crate::error::ListImagePipelinesErrorKind::InvalidRequestException(inner) => Error::InvalidRequestException(inner),
                crate::error::ListImagePipelinesErrorKind::ForbiddenException(inner) => Error::ForbiddenException(inner),
                crate::error::ListImagePipelinesErrorKind::CallRateLimitExceededException(inner) => Error::CallRateLimitExceededException(inner),
                crate::error::ListImagePipelinesErrorKind::InvalidPaginationTokenException(inner) => Error::InvalidPaginationTokenException(inner),
                crate::error::ListImagePipelinesErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            smithy_http::result::SdkError::ConstructionFailure(err)
            | smithy_http::result::SdkError::DispatchFailure(err)
            | smithy_http::result::SdkError::ResponseError { err, .. } => Error::Unhandled(err),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::ListImageRecipesError, R>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::ListImageRecipesError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::ListImageRecipesErrorKind::ServiceException(inner) => Error::ServiceException(inner),
                crate::error::ListImageRecipesErrorKind::ClientException(inner) => Error::ClientException(inner),
                crate::error::ListImageRecipesErrorKind::ServiceUnavailableException(inner) => Error::ServiceUnavailableException(inner),
                crate::error::ListImageRecipesErrorKind::InvalidRequestException(inner) => Error::InvalidRequestException(inner),
                crate::error::ListImageRecipesErrorKind::ForbiddenException(inner) => Error::ForbiddenException(inner),
                crate::error::ListImageRecipesErrorKind::CallRateLimitExceededException(inner) => Error::CallRateLimitExceededException(inner),
                crate::error::ListImageRecipesErrorKind::InvalidPaginationTokenException(inner) => Error::InvalidPaginationTokenException(inner),
                crate::error::ListImageRecipesErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            smithy_http::result::SdkError::ConstructionFailure(err)
            | smithy_http::result::SdkError::DispatchFailure(err)
            | smithy_http::result::SdkError::ResponseError { err, .. } => Error::Unhandled(err),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::ListImagesError, R>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::ListImagesError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::ListImagesErrorKind::ServiceException(inner) => Error::ServiceException(inner),
                crate::error::ListImagesErrorKind::ClientException(inner) => Error::ClientException(inner),
                crate::error::ListImagesErrorKind::ServiceUnavailableException(inner) => Error::ServiceUnavailableException(inner),
                crate::error::ListImagesErrorKind::InvalidRequestException(inner) => Error::InvalidRequestException(inner),
                crate::error::ListImagesErrorKind::ForbiddenException(inner) => Error::ForbiddenException(inner),
                crate::error::ListImagesErrorKind::CallRateLimitExceededException(inner) => Error::CallRateLimitExceededException(inner),
                crate::error::ListImagesErrorKind::InvalidPaginationTokenException(inner) => Error::InvalidPaginationTokenException(inner),
                crate::error::ListImagesErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            smithy_http::result::SdkError::ConstructionFailure(err)
            | smithy_http::result::SdkError::DispatchFailure(err)
            | smithy_http::result::SdkError::ResponseError { err, .. } => Error::Unhandled(err),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::ListInfrastructureConfigurationsError, R>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::ListInfrastructureConfigurationsError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::ListInfrastructureConfigurationsErrorKind::ServiceException(inner) => Error::ServiceException(inner),
                crate::error::ListInfrastructureConfigurationsErrorKind::ClientException(inner) => Error::ClientException(inner),
                crate::error::ListInfrastructureConfigurationsErrorKind::ServiceUnavailableException(inner) => Error::ServiceUnavailableException(inner),
                crate::error::ListInfrastructureConfigurationsErrorKind::InvalidRequestException(inner) => Error::InvalidRequestException(inner),
                crate::error::ListInfrastructureConfigurationsErrorKind::ForbiddenException(inner) => Error::ForbiddenException(inner),
                crate::error::ListInfrastructureConfigurationsErrorKind::CallRateLimitExceededException(inner) => Error::CallRateLimitExceededException(inner),
                crate::error::ListInfrastructureConfigurationsErrorKind::InvalidPaginationTokenException(inner) => Error::InvalidPaginationTokenException(inner),
                crate::error::ListInfrastructureConfigurationsErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            smithy_http::result::SdkError::ConstructionFailure(err)
            | smithy_http::result::SdkError::DispatchFailure(err)
            | smithy_http::result::SdkError::ResponseError { err, .. } => Error::Unhandled(err),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::ListTagsForResourceError, R>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::ListTagsForResourceError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::ListTagsForResourceErrorKind::ServiceException(inner) => Error::ServiceException(inner),
                crate::error::ListTagsForResourceErrorKind::InvalidParameterException(inner) => Error::InvalidParameterException(inner),
                crate::error::ListTagsForResourceErrorKind::ResourceNotFoundException(inner) => Error::ResourceNotFoundException(inner),
                crate::error::ListTagsForResourceErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            smithy_http::result::SdkError::ConstructionFailure(err)
            | smithy_http::result::SdkError::DispatchFailure(err)
            | smithy_http::result::SdkError::ResponseError { err, .. } => Error::Unhandled(err),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::PutComponentPolicyError, R>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::PutComponentPolicyError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::PutComponentPolicyErrorKind::ServiceException(inner) => Error::ServiceException(inner),
                crate::error::PutComponentPolicyErrorKind::ServiceUnavailableException(inner) => Error::ServiceUnavailableException(inner),
                crate::error::PutComponentPolicyErrorKind::InvalidParameterValueException(inner) => Error::InvalidParameterValueException(inner),
                crate::error::PutComponentPolicyErrorKind::ResourceNotFoundException(inner) => Error::ResourceNotFoundException(inner),
                crate::error::PutComponentPolicyErrorKind::InvalidRequestException(inner) => Error::InvalidRequestException(inner),
                crate::error::PutComponentPolicyErrorKind::ForbiddenException(inner) => Error::ForbiddenException(inner),
                crate::error::PutComponentPolicyErrorKind::CallRateLimitExceededException(inner) => Error::CallRateLimitExceededException(inner),
                crate::error::PutComponentPolicyErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            smithy_http::result::SdkError::ConstructionFailure(err)
            | smithy_http::result::SdkError::DispatchFailure(err)
            | smithy_http::result::SdkError::ResponseError { err, .. } => Error::Unhandled(err),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::PutImagePolicyError, R>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::PutImagePolicyError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::PutImagePolicyErrorKind::ServiceException(inner) => Error::ServiceException(inner),
                crate::error::PutImagePolicyErrorKind::ServiceUnavailableException(inner) => Error::ServiceUnavailableException(inner),
                crate::error::PutImagePolicyErrorKind::InvalidParameterValueException(inner) => Error::InvalidParameterValueException(inner),
                crate::error::PutImagePolicyErrorKind::ResourceNotFoundException(inner) => Error::ResourceNotFoundException(inner),
                crate::error::PutImagePolicyErrorKind::InvalidRequestException(inner) => Error::InvalidRequestException(inner),
                crate::error::PutImagePolicyErrorKind::ForbiddenException(inner) => Error::ForbiddenException(inner),
                crate::error::PutImagePolicyErrorKind::CallRateLimitExceededException(inner) => Error::CallRateLimitExceededException(inner),
                crate::error::PutImagePolicyErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            smithy_http::result::SdkError::ConstructionFailure(err)
            | smithy_http::result::SdkError::DispatchFailure(err)
            | smithy_http::result::SdkError::ResponseError { err, .. } => Error::Unhandled(err),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::PutImageRecipePolicyError, R>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::PutImageRecipePolicyError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::PutImageRecipePolicyErrorKind::ServiceException(inner) => Error::ServiceException(inner),
                crate::error::PutImageRecipePolicyErrorKind::ServiceUnavailableException(inner) => Error::ServiceUnavailableException(inner),
                crate::error::PutImageRecipePolicyErrorKind::InvalidParameterValueException(inner) => Error::InvalidParameterValueException(inner),
                crate::error::PutImageRecipePolicyErrorKind::ResourceNotFoundException(inner) => Error::ResourceNotFoundException(inner),
                crate::error::PutImageRecipePolicyErrorKind::InvalidRequestException(inner) => Error::InvalidRequestException(inner),
                crate::error::PutImageRecipePolicyErrorKind::ForbiddenException(inner) => Error::ForbiddenException(inner),
                crate::error::PutImageRecipePolicyErrorKind::CallRateLimitExceededException(inner) => Error::CallRateLimitExceededException(inner),
                crate::error::PutImageRecipePolicyErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            smithy_http::result::SdkError::ConstructionFailure(err)
            | smithy_http::result::SdkError::DispatchFailure(err)
            | smithy_http::result::SdkError::ResponseError { err, .. } => Error::Unhandled(err),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::StartImagePipelineExecutionError, R>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::StartImagePipelineExecutionError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::StartImagePipelineExecutionErrorKind::ServiceException(inner) => Error::ServiceException(inner),
                crate::error::StartImagePipelineExecutionErrorKind::ClientException(inner) => Error::ClientException(inner),
                crate::error::StartImagePipelineExecutionErrorKind::ServiceUnavailableException(inner) => Error::ServiceUnavailableException(inner),
                crate::error::StartImagePipelineExecutionErrorKind::InvalidRequestException(inner) => Error::InvalidRequestException(inner),
                crate::error::StartImagePipelineExecutionErrorKind::ForbiddenException(inner) => Error::ForbiddenException(inner),
                crate::error::StartImagePipelineExecutionErrorKind::CallRateLimitExceededException(inner) => Error::CallRateLimitExceededException(inner),
                crate::error::StartImagePipelineExecutionErrorKind::ResourceNotFoundException(inner) => Error::ResourceNotFoundException(inner),
                crate::error::StartImagePipelineExecutionErrorKind::IdempotentParameterMismatchException(inner) => Error::IdempotentParameterMismatchException(inner),
                crate::error::StartImagePipelineExecutionErrorKind::ResourceInUseException(inner) => Error::ResourceInUseException(inner),
                crate::error::StartImagePipelineExecutionErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            smithy_http::result::SdkError::ConstructionFailure(err)
            | smithy_http::result::SdkError::DispatchFailure(err)
            | smithy_http::result::SdkError::ResponseError { err, .. } => Error::Unhandled(err),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::TagResourceError, R>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::TagResourceError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::TagResourceErrorKind::ServiceException(inner) => Error::ServiceException(inner),
                crate::error::TagResourceErrorKind::InvalidParameterException(inner) => Error::InvalidParameterException(inner),
                crate::error::TagResourceErrorKind::ResourceNotFoundException(inner) => Error::ResourceNotFoundException(inner),
                crate::error::TagResourceErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            smithy_http::result::SdkError::ConstructionFailure(err)
            | smithy_http::result::SdkError::DispatchFailure(err)
            | smithy_http::result::SdkError::ResponseError { err, .. } => Error::Unhandled(err),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::UntagResourceError, R>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::UntagResourceError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::UntagResourceErrorKind::ServiceException(inner) => Error::ServiceException(inner),
                crate::error::UntagResourceErrorKind::InvalidParameterException(inner) => Error::InvalidParameterException(inner),
                crate::error::UntagResourceErrorKind::ResourceNotFoundException(inner) => Error::ResourceNotFoundException(inner),
                crate::error::UntagResourceErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            smithy_http::result::SdkError::ConstructionFailure(err)
            | smithy_http::result::SdkError::DispatchFailure(err)
            | smithy_http::result::SdkError::ResponseError { err, .. } => Error::Unhandled(err),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::UpdateDistributionConfigurationError, R>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::UpdateDistributionConfigurationError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::UpdateDistributionConfigurationErrorKind::ServiceException(inner) => Error::ServiceException(inner),
                crate::error::UpdateDistributionConfigurationErrorKind::ClientException(inner) => Error::ClientException(inner),
                crate::error::UpdateDistributionConfigurationErrorKind::ServiceUnavailableException(inner) => Error::ServiceUnavailableException(inner),
                crate::error::UpdateDistributionConfigurationErrorKind::InvalidRequestException(inner) => Error::InvalidRequestException(inner),
                crate::error::UpdateDistributionConfigurationErrorKind::ForbiddenException(inner) => Error::ForbiddenException(inner),
                crate::error::UpdateDistributionConfigurationErrorKind::CallRateLimitExceededException(inner) => Error::CallRateLimitExceededException(inner),
                crate::error::UpdateDistributionConfigurationErrorKind::IdempotentParameterMismatchException(inner) => Error::IdempotentParameterMismatchException(inner),
                crate::error::UpdateDistributionConfigurationErrorKind::ResourceInUseException(inner) => Error::ResourceInUseException(inner),
                crate::error::UpdateDistributionConfigurationErrorKind::InvalidParameterCombinationException(inner) => Error::InvalidParameterCombinationException(inner),
                crate::error::UpdateDistributionConfigurationErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            smithy_http::result::SdkError::ConstructionFailure(err)
            | smithy_http::result::SdkError::DispatchFailure(err)
            | smithy_http::result::SdkError::ResponseError { err, .. } => Error::Unhandled(err),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::UpdateImagePipelineError, R>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::UpdateImagePipelineError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::UpdateImagePipelineErrorKind::ServiceException(inner) => Error::ServiceException(inner),
                crate::error::UpdateImagePipelineErrorKind::ClientException(inner) => Error::ClientException(inner),
                crate::error::UpdateImagePipelineErrorKind::ServiceUnavailableException(inner) => Error::ServiceUnavailableException(inner),
                crate::error::UpdateImagePipelineErrorKind::InvalidRequestException(inner) => Error::InvalidRequestException(inner),
                crate::error::UpdateImagePipelineErrorKind::ForbiddenException(inner) => Error::ForbiddenException(inner),
                crate::error::UpdateImagePipelineErrorKind::CallRateLimitExceededException(inner) => Error::CallRateLimitExceededException(inner),
                crate::error::UpdateImagePipelineErrorKind::IdempotentParameterMismatchException(inner) => Error::IdempotentParameterMismatchException(inner),
                crate::error::UpdateImagePipelineErrorKind::ResourceInUseException(inner) => Error::ResourceInUseException(inner),
                crate::error::UpdateImagePipelineErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            smithy_http::result::SdkError::ConstructionFailure(err)
            | smithy_http::result::SdkError::DispatchFailure(err)
            | smithy_http::result::SdkError::ResponseError { err, .. } => Error::Unhandled(err),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::UpdateInfrastructureConfigurationError, R>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::UpdateInfrastructureConfigurationError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::UpdateInfrastructureConfigurationErrorKind::ServiceException(inner) => Error::ServiceException(inner),
                crate::error::UpdateInfrastructureConfigurationErrorKind::ClientException(inner) => Error::ClientException(inner),
                crate::error::UpdateInfrastructureConfigurationErrorKind::ServiceUnavailableException(inner) => Error::ServiceUnavailableException(inner),
                crate::error::UpdateInfrastructureConfigurationErrorKind::InvalidRequestException(inner) => Error::InvalidRequestException(inner),
                crate::error::UpdateInfrastructureConfigurationErrorKind::ForbiddenException(inner) => Error::ForbiddenException(inner),
                crate::error::UpdateInfrastructureConfigurationErrorKind::CallRateLimitExceededException(inner) => Error::CallRateLimitExceededException(inner),
                crate::error::UpdateInfrastructureConfigurationErrorKind::IdempotentParameterMismatchException(inner) => Error::IdempotentParameterMismatchException(inner),
                crate::error::UpdateInfrastructureConfigurationErrorKind::ResourceInUseException(inner) => Error::ResourceInUseException(inner),
                crate::error::UpdateInfrastructureConfigurationErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            smithy_http::result::SdkError::ConstructionFailure(err)
            | smithy_http::result::SdkError::DispatchFailure(err)
            | smithy_http::result::SdkError::ResponseError { err, .. } => Error::Unhandled(err),
        }
    }
}
impl std::error::Error for Error {}
