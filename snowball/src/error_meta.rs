/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/// All possible error types for this service.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum Error {
    ClusterLimitExceededException(crate::error::ClusterLimitExceededException),
    Ec2RequestFailedException(crate::error::Ec2RequestFailedException),
    InvalidAddressException(crate::error::InvalidAddressException),
    InvalidInputCombinationException(crate::error::InvalidInputCombinationException),
    InvalidJobStateException(crate::error::InvalidJobStateException),
    InvalidNextTokenException(crate::error::InvalidNextTokenException),
    InvalidResourceException(crate::error::InvalidResourceException),
    KmsRequestFailedException(crate::error::KmsRequestFailedException),
    UnsupportedAddressException(crate::error::UnsupportedAddressException),
    /// An unhandled error occurred.
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::ClusterLimitExceededException(inner) => std::fmt::Display::fmt(inner, f),
            Error::Ec2RequestFailedException(inner) => std::fmt::Display::fmt(inner, f),
            Error::InvalidAddressException(inner) => std::fmt::Display::fmt(inner, f),
            Error::InvalidInputCombinationException(inner) => std::fmt::Display::fmt(inner, f),
            Error::InvalidJobStateException(inner) => std::fmt::Display::fmt(inner, f),
            Error::InvalidNextTokenException(inner) => std::fmt::Display::fmt(inner, f),
            Error::InvalidResourceException(inner) => std::fmt::Display::fmt(inner, f),
            Error::KmsRequestFailedException(inner) => std::fmt::Display::fmt(inner, f),
            Error::UnsupportedAddressException(inner) => std::fmt::Display::fmt(inner, f),
            Error::Unhandled(inner) => std::fmt::Display::fmt(inner, f),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::CancelClusterError, R>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::CancelClusterError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::CancelClusterErrorKind::KmsRequestFailedException(inner) => Error::KmsRequestFailedException(inner),
                crate::error::CancelClusterErrorKind::InvalidJobStateException(inner) => Error::InvalidJobStateException(inner),
                crate::error::CancelClusterErrorKind::InvalidResourceException(inner) => Error::InvalidResourceException(inner),
                crate::error::CancelClusterErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            smithy_http::result::SdkError::ConstructionFailure(err)
            | smithy_http::result::SdkError::DispatchFailure(err)
            | smithy_http::result::SdkError::ResponseError { err, .. } => Error::Unhandled(err),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::CancelJobError, R>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::CancelJobError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::CancelJobErrorKind::InvalidResourceException(inner) => Error::InvalidResourceException(inner),
                crate::error::CancelJobErrorKind::InvalidJobStateException(inner) => Error::InvalidJobStateException(inner),
                crate::error::CancelJobErrorKind::KmsRequestFailedException(inner) => Error::KmsRequestFailedException(inner),
                crate::error::CancelJobErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            smithy_http::result::SdkError::ConstructionFailure(err)
            | smithy_http::result::SdkError::DispatchFailure(err)
            | smithy_http::result::SdkError::ResponseError { err, .. } => Error::Unhandled(err),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::CreateAddressError, R>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::CreateAddressError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::CreateAddressErrorKind::InvalidAddressException(inner) => Error::InvalidAddressException(inner),
                crate::error::CreateAddressErrorKind::UnsupportedAddressException(inner) => Error::UnsupportedAddressException(inner),
                crate::error::CreateAddressErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            smithy_http::result::SdkError::ConstructionFailure(err)
            | smithy_http::result::SdkError::DispatchFailure(err)
            | smithy_http::result::SdkError::ResponseError { err, .. } => Error::Unhandled(err),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::CreateClusterError, R>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::CreateClusterError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::CreateClusterErrorKind::InvalidResourceException(inner) => Error::InvalidResourceException(inner),
                crate::error::CreateClusterErrorKind::KmsRequestFailedException(inner) => Error::KmsRequestFailedException(inner),
                crate::error::CreateClusterErrorKind::InvalidInputCombinationException(inner) => Error::InvalidInputCombinationException(inner),
                crate::error::CreateClusterErrorKind::Ec2RequestFailedException(inner) => Error::Ec2RequestFailedException(inner),
                crate::error::CreateClusterErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            smithy_http::result::SdkError::ConstructionFailure(err)
            | smithy_http::result::SdkError::DispatchFailure(err)
            | smithy_http::result::SdkError::ResponseError { err, .. } => Error::Unhandled(err),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::CreateJobError, R>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::CreateJobError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::CreateJobErrorKind::InvalidResourceException(inner) => Error::InvalidResourceException(inner),
                crate::error::CreateJobErrorKind::KmsRequestFailedException(inner) => Error::KmsRequestFailedException(inner),
                crate::error::CreateJobErrorKind::InvalidInputCombinationException(inner) => Error::InvalidInputCombinationException(inner),
                crate::error::CreateJobErrorKind::ClusterLimitExceededException(inner) => Error::ClusterLimitExceededException(inner),
                crate::error::CreateJobErrorKind::Ec2RequestFailedException(inner) => Error::Ec2RequestFailedException(inner),
                crate::error::CreateJobErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            smithy_http::result::SdkError::ConstructionFailure(err)
            | smithy_http::result::SdkError::DispatchFailure(err)
            | smithy_http::result::SdkError::ResponseError { err, .. } => Error::Unhandled(err),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::DescribeAddressError, R>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::DescribeAddressError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::DescribeAddressErrorKind::InvalidResourceException(inner) => Error::InvalidResourceException(inner),
                crate::error::DescribeAddressErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            smithy_http::result::SdkError::ConstructionFailure(err)
            | smithy_http::result::SdkError::DispatchFailure(err)
            | smithy_http::result::SdkError::ResponseError { err, .. } => Error::Unhandled(err),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::DescribeAddressesError, R>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::DescribeAddressesError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::DescribeAddressesErrorKind::InvalidResourceException(inner) => Error::InvalidResourceException(inner),
                crate::error::DescribeAddressesErrorKind::InvalidNextTokenException(inner) => Error::InvalidNextTokenException(inner),
                crate::error::DescribeAddressesErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            smithy_http::result::SdkError::ConstructionFailure(err)
            | smithy_http::result::SdkError::DispatchFailure(err)
            | smithy_http::result::SdkError::ResponseError { err, .. } => Error::Unhandled(err),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::DescribeClusterError, R>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::DescribeClusterError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::DescribeClusterErrorKind::InvalidResourceException(inner) => Error::InvalidResourceException(inner),
                crate::error::DescribeClusterErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            smithy_http::result::SdkError::ConstructionFailure(err)
            | smithy_http::result::SdkError::DispatchFailure(err)
            | smithy_http::result::SdkError::ResponseError { err, .. } => Error::Unhandled(err),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::DescribeJobError, R>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::DescribeJobError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::DescribeJobErrorKind::InvalidResourceException(inner) => Error::InvalidResourceException(inner),
                crate::error::DescribeJobErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            smithy_http::result::SdkError::ConstructionFailure(err)
            | smithy_http::result::SdkError::DispatchFailure(err)
            | smithy_http::result::SdkError::ResponseError { err, .. } => Error::Unhandled(err),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::GetJobManifestError, R>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::GetJobManifestError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::GetJobManifestErrorKind::InvalidResourceException(inner) => Error::InvalidResourceException(inner),
                crate::error::GetJobManifestErrorKind::InvalidJobStateException(inner) => Error::InvalidJobStateException(inner),
                crate::error::GetJobManifestErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            smithy_http::result::SdkError::ConstructionFailure(err)
            | smithy_http::result::SdkError::DispatchFailure(err)
            | smithy_http::result::SdkError::ResponseError { err, .. } => Error::Unhandled(err),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::GetJobUnlockCodeError, R>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::GetJobUnlockCodeError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::GetJobUnlockCodeErrorKind::InvalidResourceException(inner) => Error::InvalidResourceException(inner),
                crate::error::GetJobUnlockCodeErrorKind::InvalidJobStateException(inner) => Error::InvalidJobStateException(inner),
                crate::error::GetJobUnlockCodeErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            smithy_http::result::SdkError::ConstructionFailure(err)
            | smithy_http::result::SdkError::DispatchFailure(err)
            | smithy_http::result::SdkError::ResponseError { err, .. } => Error::Unhandled(err),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::GetSnowballUsageError, R>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::GetSnowballUsageError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::GetSnowballUsageErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            smithy_http::result::SdkError::ConstructionFailure(err)
            | smithy_http::result::SdkError::DispatchFailure(err)
            | smithy_http::result::SdkError::ResponseError { err, .. } => Error::Unhandled(err),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::GetSoftwareUpdatesError, R>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::GetSoftwareUpdatesError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::GetSoftwareUpdatesErrorKind::InvalidResourceException(inner) => Error::InvalidResourceException(inner),
                crate::error::GetSoftwareUpdatesErrorKind::InvalidJobStateException(inner) => Error::InvalidJobStateException(inner),
                crate::error::GetSoftwareUpdatesErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            smithy_http::result::SdkError::ConstructionFailure(err)
            | smithy_http::result::SdkError::DispatchFailure(err)
            | smithy_http::result::SdkError::ResponseError { err, .. } => Error::Unhandled(err),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::ListClusterJobsError, R>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::ListClusterJobsError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::ListClusterJobsErrorKind::InvalidResourceException(inner) => Error::InvalidResourceException(inner),
                crate::error::ListClusterJobsErrorKind::InvalidNextTokenException(inner) => Error::InvalidNextTokenException(inner),
                crate::error::ListClusterJobsErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            smithy_http::result::SdkError::ConstructionFailure(err)
            | smithy_http::result::SdkError::DispatchFailure(err)
            | smithy_http::result::SdkError::ResponseError { err, .. } => Error::Unhandled(err),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::ListClustersError, R>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::ListClustersError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::ListClustersErrorKind::InvalidNextTokenException(inner) => Error::InvalidNextTokenException(inner),
                crate::error::ListClustersErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            smithy_http::result::SdkError::ConstructionFailure(err)
            | smithy_http::result::SdkError::DispatchFailure(err)
            | smithy_http::result::SdkError::ResponseError { err, .. } => Error::Unhandled(err),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::ListCompatibleImagesError, R>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::ListCompatibleImagesError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::ListCompatibleImagesErrorKind::InvalidNextTokenException(inner) => Error::InvalidNextTokenException(inner),
                crate::error::ListCompatibleImagesErrorKind::Ec2RequestFailedException(inner) => Error::Ec2RequestFailedException(inner),
                crate::error::ListCompatibleImagesErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            smithy_http::result::SdkError::ConstructionFailure(err)
            | smithy_http::result::SdkError::DispatchFailure(err)
            | smithy_http::result::SdkError::ResponseError { err, .. } => Error::Unhandled(err),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::ListJobsError, R>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::ListJobsError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::ListJobsErrorKind::InvalidNextTokenException(inner) => Error::InvalidNextTokenException(inner),
                crate::error::ListJobsErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            smithy_http::result::SdkError::ConstructionFailure(err)
            | smithy_http::result::SdkError::DispatchFailure(err)
            | smithy_http::result::SdkError::ResponseError { err, .. } => Error::Unhandled(err),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::UpdateClusterError, R>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::UpdateClusterError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::UpdateClusterErrorKind::InvalidResourceException(inner) => Error::InvalidResourceException(inner),
                crate::error::UpdateClusterErrorKind::InvalidJobStateException(inner) => Error::InvalidJobStateException(inner),
                crate::error::UpdateClusterErrorKind::KmsRequestFailedException(inner) => Error::KmsRequestFailedException(inner),
                crate::error::UpdateClusterErrorKind::InvalidInputCombinationException(inner) => Error::InvalidInputCombinationException(inner),
                crate::error::UpdateClusterErrorKind::Ec2RequestFailedException(inner) => Error::Ec2RequestFailedException(inner),
                crate::error::UpdateClusterErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            smithy_http::result::SdkError::ConstructionFailure(err)
            | smithy_http::result::SdkError::DispatchFailure(err)
            | smithy_http::result::SdkError::ResponseError { err, .. } => Error::Unhandled(err),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::UpdateJobError, R>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::UpdateJobError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::UpdateJobErrorKind::InvalidResourceException(inner) => Error::InvalidResourceException(inner),
                crate::error::UpdateJobErrorKind::InvalidJobStateException(inner) => Error::InvalidJobStateException(inner),
                crate::error::UpdateJobErrorKind::KmsRequestFailedException(inner) => Error::KmsRequestFailedException(inner),
                crate::error::UpdateJobErrorKind::InvalidInputCombinationException(inner) => Error::InvalidInputCombinationException(inner),
                crate::error::UpdateJobErrorKind::ClusterLimitExceededException(inner) => Error::ClusterLimitExceededException(inner),
                crate::error::UpdateJobErrorKind::Ec2RequestFailedException(inner) => Error::Ec2RequestFailedException(inner),
                crate::error::UpdateJobErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            smithy_http::result::SdkError::ConstructionFailure(err)
            | smithy_http::result::SdkError::DispatchFailure(err)
            | smithy_http::result::SdkError::ResponseError { err, .. } => Error::Unhandled(err),
        }
    }
}
impl std::error::Error for Error {}
