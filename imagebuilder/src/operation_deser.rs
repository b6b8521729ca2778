/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/// Bodies of successful responses, with an empty body read as `{}`
fn json_body(response: &http::Response<bytes::Bytes>) -> &[u8] {
    let body = response.body().as_ref();
    if body.is_empty() {
        b"{}"
    } else {
        body
    }
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_cancel_image_creation_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::CancelImageCreationOutput, crate::error::CancelImageCreationError> {
    let generic = crate::json_errors::parse_generic_error(response)
        .map_err(crate::error::CancelImageCreationError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code.to_string(),
        None => return Err(crate::error::CancelImageCreationError::generic(generic)),
    };
    Err(match error_code.as_str() {
        "ServiceException" => match serde_json::from_slice::<crate::error::ServiceException>(json_body(response)) {
            Ok(body) => crate::error::CancelImageCreationError::new(crate::error::CancelImageCreationErrorKind::ServiceException(body), generic),
            Err(e) => crate::error::CancelImageCreationError::new(crate::error::CancelImageCreationErrorKind::Unhandled(e.into()), generic),
        },
        "ClientException" => match serde_json::from_slice::<crate::error::ClientException>(json_body(response)) {
            Ok(body) => crate::error::CancelImageCreationError::new(crate::error::CancelImageCreationErrorKind::ClientException(body), generic),
            Err(e) => crate::error::CancelImageCreationError::new(crate::error::CancelImageCreationErrorKind::Unhandled(e.into()), generic),
        },
        "ServiceUnavailableException" => match serde_json::from_slice::<crate::error::ServiceUnavailableException>(json_body(response)) {
            Ok(body) => crate::error::CancelImageCreationError::new(crate::error::CancelImageCreationErrorKind::ServiceUnavailableException(body), generic),
            Err(e) => crate::error::CancelImageCreationError::new(crate::error::CancelImageCreationErrorKind::Unhandled(e.into()), generic),
        },
        "InvalidRequestException" => match serde_json::from_slice::<crate::error::InvalidRequestException>(json_body(response)) {
            Ok(body) => crate::error::CancelImageCreationError::new(crate::error::CancelImageCreationErrorKind::InvalidRequestException(body), generic),
            Err(e) => crate::error::CancelImageCreationError::new(crate::error::CancelImageCreationErrorKind::Unhandled(e.into()), generic),
        },
        "ForbiddenException" => match serde_json::from_slice::<crate::error::ForbiddenException>(json_body(response)) {
            Ok(body) => crate::error::CancelImageCreationError::new(crate::error::CancelImageCreationErrorKind::ForbiddenException(body), generic),
            Err(e) => crate::error::CancelImageCreationError::new(crate::error::CancelImageCreationErrorKind::Unhandled(e.into()), generic),
        },
        "CallRateLimitExceededException" => match serde_json::from_slice::<crate::error::CallRateLimitExceededException>(json_body(response)) {
            Ok(body) => crate::error::CancelImageCreationError::new(crate::error::CancelImageCreationErrorKind::CallRateLimitExceededException(body), generic),
            Err(e) => crate::error::CancelImageCreationError::new(crate::error::CancelImageCreationErrorKind::Unhandled(e.into()), generic),
        },
        "IdempotentParameterMismatchException" => match serde_json::from_slice::<crate::error::IdempotentParameterMismatchException>(json_body(response)) {
            Ok(body) => crate::error::CancelImageCreationError::new(crate::error::CancelImageCreationErrorKind::IdempotentParameterMismatchException(body), generic),
            Err(e) => crate::error::CancelImageCreationError::new(crate::error::CancelImageCreationErrorKind::Unhandled(e.into()), generic),
        },
        "ResourceInUseException" => match serde_json::from_slice::<crate::error::ResourceInUseException>(json_body(response)) {
            Ok(body) => crate::error::CancelImageCreationError::new(crate::error::CancelImageCreationErrorKind::ResourceInUseException(body), generic),
            Err(e) => crate::error::CancelImageCreationError::new(crate::error::CancelImageCreationErrorKind::Unhandled(e.into()), generic),
        },
        _ => crate::error::CancelImageCreationError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_cancel_image_creation_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::CancelImageCreationOutput, crate::error::CancelImageCreationError> {
    serde_json::from_slice(json_body(response)).map_err(crate::error::CancelImageCreationError::unhandled)
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_create_component_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::CreateComponentOutput, crate::error::CreateComponentError> {
    let generic = crate::json_errors::parse_generic_error(response)
        .map_err(crate::error::CreateComponentError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code.to_string(),
        None => return Err(crate::error::CreateComponentError::generic(generic)),
    };
    Err(match error_code.as_str() {
        "ServiceException" => match serde_json::from_slice::<crate::error::ServiceException>(json_body(response)) {
            Ok(body) => crate::error::CreateComponentError::new(crate::error::CreateComponentErrorKind::ServiceException(body), generic),
            Err(e) => crate::error::CreateComponentError::new(crate::error::CreateComponentErrorKind::Unhandled(e.into()), generic),
        },
        "ClientException" => match serde_json::from_slice::<crate::error::ClientException>(json_body(response)) {
            Ok(body) => crate::error::CreateComponentError::new(crate::error::CreateComponentErrorKind::ClientException(body), generic),
            Err(e) => crate::error::CreateComponentError::new(crate::error::CreateComponentErrorKind::Unhandled(e.into()), generic),
        },
        "ServiceUnavailableException" => match serde_json::from_slice::<crate::error::ServiceUnavailableException>(json_body(response)) {
            Ok(body) => crate::error::CreateComponentError::new(crate::error::CreateComponentErrorKind::ServiceUnavailableException(body), generic),
            Err(e) => crate::error::CreateComponentError::new(crate::error::CreateComponentErrorKind::Unhandled(e.into()), generic),
        },
        "InvalidRequestException" => match serde_json::from_slice::<crate::error::InvalidRequestException>(json_body(response)) {
            Ok(body) => crate::error::CreateComponentError::new(crate::error::CreateComponentErrorKind::InvalidRequestException(body), generic),
            Err(e) => crate::error::CreateComponentError::new(crate::error::CreateComponentErrorKind::Unhandled(e.into()), generic),
        },
        "ForbiddenException" => match serde_json::from_slice::<crate::error::ForbiddenException>(json_body(response)) {
            Ok(body) => crate::error::CreateComponentError::new(crate::error::CreateComponentErrorKind::ForbiddenException(body), generic),
            Err(e) => crate::error::CreateComponentError::new(crate::error::CreateComponentErrorKind::Unhandled(e.into()), generic),
        },
        "CallRateLimitExceededException" => match serde_json::from_slice::<crate::error::CallRateLimitExceededException>(json_body(response)) {
            Ok(body) => crate::error::CreateComponentError::new(crate::error::CreateComponentErrorKind::CallRateLimitExceededException(body), generic),
            Err(e) => crate::error::CreateComponentError::new(crate::error::CreateComponentErrorKind::Unhandled(e.into()), generic),
        },
        "IdempotentParameterMismatchException" => match serde_json::from_slice::<crate::error::IdempotentParameterMismatchException>(json_body(response)) {
            Ok(body) => crate::error::CreateComponentError::new(crate::error::CreateComponentErrorKind::IdempotentParameterMismatchException(body), generic),
            Err(e) => crate::error::CreateComponentError::new(crate::error::CreateComponentErrorKind::Unhandled(e.into()), generic),
        },
        "ResourceInUseException" => match serde_json::from_slice::<crate::error::ResourceInUseException>(json_body(response)) {
            Ok(body) => crate::error::CreateComponentError::new(crate::error::CreateComponentErrorKind::ResourceInUseException(body), generic),
            Err(e) => crate::error::CreateComponentError::new(crate::error::CreateComponentErrorKind::Unhandled(e.into()), generic),
        },
        "InvalidVersionNumberException" => match serde_json::from_slice::<crate::error::InvalidVersionNumberException>(json_body(response)) {
            Ok(body) => crate::error::CreateComponentError::new(crate::error::CreateComponentErrorKind::InvalidVersionNumberException(body), generic),
            Err(e) => crate::error::CreateComponentError::new(crate::error::CreateComponentErrorKind::Unhandled(e.into()), generic),
        },
        "InvalidParameterCombinationException" => match serde_json::from_slice::<crate::error::InvalidParameterCombinationException>(json_body(response)) {
            Ok(body) => crate::error::CreateComponentError::new(crate::error::CreateComponentErrorKind::InvalidParameterCombinationException(body), generic),
            Err(e) => crate::error::CreateComponentError::new(crate::error::CreateComponentErrorKind::Unhandled(e.into()), generic),
        },
        _ => crate::error::CreateComponentError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_create_component_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::CreateComponentOutput, crate::error::CreateComponentError> {
    serde_json::from_slice(json_body(response)).map_err(crate::error::CreateComponentError::unhandled)
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_create_distribution_configuration_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::CreateDistributionConfigurationOutput, crate::error::CreateDistributionConfigurationError> {
    let generic = crate::json_errors::parse_generic_error(response)
        .map_err(crate::error::CreateDistributionConfigurationError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code.to_string(),
        None => return Err(crate::error::CreateDistributionConfigurationError::generic(generic)),
    };
    Err(match error_code.as_str() {
        "ServiceException" => match serde_json::from_slice::<crate::error::ServiceException>(json_body(response)) {
            Ok(body) => crate::error::CreateDistributionConfigurationError::new(crate::error::CreateDistributionConfigurationErrorKind::ServiceException(body), generic),
            Err(e) => crate::error::CreateDistributionConfigurationError::new(crate::error::CreateDistributionConfigurationErrorKind::Unhandled(e.into()), generic),
        },
        "ClientException" => match serde_json::from_slice::<crate::error::ClientException>(json_body(response)) {
            Ok(body) => crate::error::CreateDistributionConfigurationError::new(crate::error::CreateDistributionConfigurationErrorKind::ClientException(body), generic),
            Err(e) => crate::error::CreateDistributionConfigurationError::new(crate::error::CreateDistributionConfigurationErrorKind::Unhandled(e.into()), generic),
        },
        "ServiceUnavailableException" => match serde_json::from_slice::<crate::error::ServiceUnavailableException>(json_body(response)) {
            Ok(body) => crate::error::CreateDistributionConfigurationError::new(crate::error::CreateDistributionConfigurationErrorKind::ServiceUnavailableException(body), generic),
            Err(e) => crate::error::CreateDistributionConfigurationError::new(crate::error::CreateDistributionConfigurationErrorKind::Unhandled(e.into()), generic),
        },
        "InvalidRequestException" => match serde_json::from_slice::<crate::error::InvalidRequestException>(json_body(response)) {
            Ok(body) => crate::error::CreateDistributionConfigurationError::new(crate::error::CreateDistributionConfigurationErrorKind::InvalidRequestException(body), generic),
            Err(e) => crate::error::CreateDistributionConfigurationError::new(crate::error::CreateDistributionConfigurationErrorKind::Unhandled(e.into()), generic),
        },
        "ForbiddenException" => match serde_json::from_slice::<crate::error::ForbiddenException>(json_body(response)) {
            Ok(body) => crate::error::CreateDistributionConfigurationError::new(crate::error::CreateDistributionConfigurationErrorKind::ForbiddenException(body), generic),
            Err(e) => crate::error::CreateDistributionConfigurationError::new(crate::error::CreateDistributionConfigurationErrorKind::Unhandled(e.into()), generic),
        },
        "CallRateLimitExceededException" => match serde_json::from_slice::<crate::error::CallRateLimitExceededException>(json_body(response)) {
            Ok(body) => crate::error::CreateDistributionConfigurationError::new(crate::error::CreateDistributionConfigurationErrorKind::CallRateLimitExceededException(body), generic),
            Err(e) => crate::error::CreateDistributionConfigurationError::new(crate::error::CreateDistributionConfigurationErrorKind::Unhandled(e.into()), generic),
        },
        "IdempotentParameterMismatchException" => match serde_json::from_slice::<crate::error::IdempotentParameterMismatchException>(json_body(response)) {
            Ok(body) => crate::error::CreateDistributionConfigurationError::new(crate::error::CreateDistributionConfigurationErrorKind::IdempotentParameterMismatchException(body), generic),
            Err(e) => crate::error::CreateDistributionConfigurationError::new(crate::error::CreateDistributionConfigurationErrorKind::Unhandled(e.into()), generic),
        },
        "ResourceInUseException" => match serde_json::from_slice::<crate::error::ResourceInUseException>(json_body(response)) {
            Ok(body) => crate::error::CreateDistributionConfigurationError::new(crate::error::CreateDistributionConfigurationErrorKind::ResourceInUseException(body), generic),
            Err(e) => crate::error::CreateDistributionConfigurationError::new(crate::error::CreateDistributionConfigurationErrorKind::Unhandled(e.into()), generic),
        },
        "ResourceAlreadyExistsException" => match serde_json::from_slice::<crate::error::ResourceAlreadyExistsException>(json_body(response)) {
            Ok(body) => crate::error::CreateDistributionConfigurationError::new(crate::error::CreateDistributionConfigurationErrorKind::ResourceAlreadyExistsException(body), generic),
            Err(e) => crate::error::CreateDistributionConfigurationError::new(crate::error::CreateDistributionConfigurationErrorKind::Unhandled(e.into()), generic),
        },
        "InvalidParameterCombinationException" => match serde_json::from_slice::<crate::error::InvalidParameterCombinationException>(json_body(response)) {
            Ok(body) => crate::error::CreateDistributionConfigurationError::new(crate::error::CreateDistributionConfigurationErrorKind::InvalidParameterCombinationException(body), generic),
            Err(e) => crate::error::CreateDistributionConfigurationError::new(crate::error::CreateDistributionConfigurationErrorKind::Unhandled(e.into()), generic),
        },
        _ => crate::error::CreateDistributionConfigurationError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_create_distribution_configuration_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::CreateDistributionConfigurationOutput, crate::error::CreateDistributionConfigurationError> {
    serde_json::from_slice(json_body(response)).map_err(crate::error::CreateDistributionConfigurationError::unhandled)
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_create_image_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::CreateImageOutput, crate::error::CreateImageError> {
    let generic = crate::json_errors::parse_generic_error(response)
        .map_err(crate::error::CreateImageError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code.to_string(),
        None => return Err(crate::error::CreateImageError::generic(generic)),
    };
    Err(match error_code.as_str() {
        "ServiceException" => match serde_json::from_slice::<crate::error::ServiceException>(json_body(response)) {
            Ok(body) => crate::error::CreateImageError::new(crate::error::CreateImageErrorKind::ServiceException(body), generic),
            Err(e) => crate::error::CreateImageError::new(crate::error::CreateImageErrorKind::Unhandled(e.into()), generic),
        },
        "ClientException" => match serde_json::from_slice::<crate::error::ClientException>(json_body(response)) {
            Ok(body) => crate::error::CreateImageError::new(crate::error::CreateImageErrorKind::ClientException(body), generic),
            Err(e) => crate::error::CreateImageError::new(crate::error::CreateImageErrorKind::Unhandled(e.into()), generic),
        },
        "ServiceUnavailableException" => match serde_json::from_slice::<crate::error::ServiceUnavailableException>(json_body(response)) {
            Ok(body) => crate::error::CreateImageError::new(crate::error::CreateImageErrorKind::ServiceUnavailableException(body), generic),
            Err(e) => crate::error::CreateImageError::new(crate::error::CreateImageErrorKind::Unhandled(e.into()), generic),
        },
        "InvalidRequestException" => match serde_json::from_slice::<crate::error::InvalidRequestException>(json_body(response)) {
            Ok(body) => crate::error::CreateImageError::new(crate::error::CreateImageErrorKind::InvalidRequestException(body), generic),
            Err(e) => crate::error::CreateImageError::new(crate::error::CreateImageErrorKind::Unhandled(e.into()), generic),
        },
        "ForbiddenException" => match serde_json::from_slice::<crate::error::ForbiddenException>(json_body(response)) {
            Ok(body) => crate::error::CreateImageError::new(crate::error::CreateImageErrorKind::ForbiddenException(body), generic),
            Err(e) => crate::error::CreateImageError::new(crate::error::CreateImageErrorKind::Unhandled(e.into()), generic),
        },
        "CallRateLimitExceededException" => match serde_json::from_slice::<crate::error::CallRateLimitExceededException>(json_body(response)) {
            Ok(body) => crate::error::CreateImageError::new(crate::error::CreateImageErrorKind::CallRateLimitExceededException(body), generic),
            Err(e) => crate::error::CreateImageError::new(crate::error::CreateImageErrorKind::Unhandled(e.into()), generic),
        },
        "IdempotentParameterMismatchException" => match serde_json::from_slice::<crate::error::IdempotentParameterMismatchException>(json_body(response)) {
            Ok(body) => crate::error::CreateImageError::new(crate::error::CreateImageErrorKind::IdempotentParameterMismatchException(body), generic),
            Err(e) => crate::error::CreateImageError::new(crate::error::CreateImageErrorKind::Unhandled(e.into()), generic),
        },
        "ResourceInUseException" => match serde_json::from_slice::<crate::error::ResourceInUseException>(json_body(response)) {
            Ok(body) => crate::error::CreateImageError::new(crate::error::CreateImageErrorKind::ResourceInUseException(body), generic),
            Err(e) => crate::error::CreateImageError::new(crate::error::CreateImageErrorKind::Unhandled(e.into()), generic),
        },
        _ => crate::error::CreateImageError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_create_image_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::CreateImageOutput, crate::error::CreateImageError> {
    serde_json::from_slice(json_body(response)).map_err(crate::error::CreateImageError::unhandled)
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_create_image_pipeline_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::CreateImagePipelineOutput, crate::error::CreateImagePipelineError> {
    let generic = crate::json_errors::parse_generic_error(response)
        .map_err(crate::error::CreateImagePipelineError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code.to_string(),
        None => return Err(crate::error::CreateImagePipelineError::generic(generic)),
    };
    Err(match error_code.as_str() {
        "ServiceException" => match serde_json::from_slice::<crate::error::ServiceException>(json_body(response)) {
            Ok(body) => crate::error::CreateImagePipelineError::new(crate::error::CreateImagePipelineErrorKind::ServiceException(body), generic),
            Err(e) => crate::error::CreateImagePipelineError::new(crate::error::CreateImagePipelineErrorKind::Unhandled(e.into()), generic),
        },
        "ClientException" => match serde_json::from_slice::<crate::error::ClientException>(json_body(response)) {
            Ok(body) => crate::error::CreateImagePipelineError::new(crate::error::CreateImagePipelineErrorKind::ClientException(body), generic),
            Err(e) => crate::error::CreateImagePipelineError::new(crate::error::CreateImagePipelineErrorKind::Unhandled(e.into()), generic),
        },
        "ServiceUnavailableException" => match serde_json::from_slice::<crate::error::ServiceUnavailableException>(json_body(response)) {
            Ok(body) => crate::error::CreateImagePipelineError::new(crate::error::CreateImagePipelineErrorKind::ServiceUnavailableException(body), generic),
            Err(e) => crate::error::CreateImagePipelineError::new(crate::error::CreateImagePipelineErrorKind::Unhandled(e.into()), generic),
        },
        "InvalidRequestException" => match serde_json::from_slice::<crate::error::InvalidRequestException>(json_body(response)) {
            Ok(body) => crate::error::CreateImagePipelineError::new(crate::error::CreateImagePipelineErrorKind::InvalidRequestException(body), generic),
            Err(e) => crate::error::CreateImagePipelineError::new(crate::error::CreateImagePipelineErrorKind::Unhandled(e.into()), generic),
        },
        "ForbiddenException" => match serde_json::from_slice::<crate::error::ForbiddenException>(json_body(response)) {
            Ok(body) => crate::error::CreateImagePipelineError::new(crate::error::CreateImagePipelineErrorKind::ForbiddenException(body), generic),
            Err(e) => crate::error::CreateImagePipelineError::new(crate::error::CreateImagePipelineErrorKind::Unhandled(e.into()), generic),
        },
        "CallRateLimitExceededException" => match serde_json::from_slice::<crate::error::CallRateLimitExceededException>(json_body(response)) {
            Ok(body) => crate::error::CreateImagePipelineError::new(crate::error::CreateImagePipelineErrorKind::CallRateLimitExceededException(body), generic),
            Err(e) => crate::error::CreateImagePipelineError::new(crate::error::CreateImagePipelineErrorKind::Unhandled(e.into()), generic),
        },
        "IdempotentParameterMismatchException" => match serde_json::from_slice::<crate::error::IdempotentParameterMismatchException>(json_body(response)) {
            Ok(body) => crate::error::CreateImagePipelineError::new(crate::error::CreateImagePipelineErrorKind::IdempotentParameterMismatchException(body), generic),
            Err(e) => crate::error::CreateImagePipelineError::new(crate::error::CreateImagePipelineErrorKind::Unhandled(e.into()), generic),
        },
        "ResourceInUseException" => match serde_json::from_slice::<crate::error::ResourceInUseException>(json_body(response)) {
            Ok(body) => crate::error::CreateImagePipelineError::new(crate::error::CreateImagePipelineErrorKind::ResourceInUseException(body), generic),
            Err(e) => crate::error::CreateImagePipelineError::new(crate::error::CreateImagePipelineErrorKind::Unhandled(e.into()), generic),
        },
        "ResourceAlreadyExistsException" => match serde_json::from_slice::<crate::error::ResourceAlreadyExistsException>(json_body(response)) {
            Ok(body) => crate::error::CreateImagePipelineError::new(crate::error::CreateImagePipelineErrorKind::ResourceAlreadyExistsException(body), generic),
            Err(e) => crate::error::CreateImagePipelineError::new(crate::error::CreateImagePipelineErrorKind::Unhandled(e.into()), generic),
        },
        _ => crate::error::CreateImagePipelineError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_create_image_pipeline_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::CreateImagePipelineOutput, crate::error::CreateImagePipelineError> {
    serde_json::from_slice(json_body(response)).map_err(crate::error::CreateImagePipelineError::unhandled)
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_create_image_recipe_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::CreateImageRecipeOutput, crate::error::CreateImageRecipeError> {
    let generic = crate::json_errors::parse_generic_error(response)
        .map_err(crate::error::CreateImageRecipeError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code.to_string(),
        None => return Err(crate::error::CreateImageRecipeError::generic(generic)),
    };
    Err(match error_code.as_str() {
        "ServiceException" => match serde_json::from_slice::<crate::error::ServiceException>(json_body(response)) {
            Ok(body) => crate::error::CreateImageRecipeError::new(crate::error::CreateImageRecipeErrorKind::ServiceException(body), generic),
            Err(e) => crate::error::CreateImageRecipeError::new(crate::error::CreateImageRecipeErrorKind::Unhandled(e.into()), generic),
        },
        "ClientException" => match serde_json::from_slice::<crate::error::ClientException>(json_body(response)) {
            Ok(body) => crate::error::CreateImageRecipeError::new(crate::error::CreateImageRecipeErrorKind::ClientException(body), generic),
            Err(e) => crate::error::CreateImageRecipeError::new(crate::error::CreateImageRecipeErrorKind::Unhandled(e.into()), generic),
        },
        "ServiceUnavailableException" => match serde_json::from_slice::<crate::error::ServiceUnavailableException>(json_body(response)) {
            Ok(body) => crate::error::CreateImageRecipeError::new(crate::error::CreateImageRecipeErrorKind::ServiceUnavailableException(body), generic),
            Err(e) => crate::error::CreateImageRecipeError::new(crate::error::CreateImageRecipeErrorKind::Unhandled(e.into()), generic),
        },
        "InvalidRequestException" => match serde_json::from_slice::<crate::error::InvalidRequestException>(json_body(response)) {
            Ok(body) => crate::error::CreateImageRecipeError::new(crate::error::CreateImageRecipeErrorKind::InvalidRequestException(body), generic),
            Err(e) => crate::error::CreateImageRecipeError::new(crate::error::CreateImageRecipeErrorKind::Unhandled(e.into()), generic),
        },
        "ForbiddenException" => match serde_json::from_slice::<crate::error::ForbiddenException>(json_body(response)) {
            Ok(body) => crate::error::CreateImageRecipeError::new(crate::error::CreateImageRecipeErrorKind::ForbiddenException(body), generic),
            Err(e) => crate::error::CreateImageRecipeError::new(crate::error::CreateImageRecipeErrorKind::Unhandled(e.into()), generic),
        },
        "CallRateLimitExceededException" => match serde_json::from_slice::<crate::error::CallRateLimitExceededException>(json_body(response)) {
            Ok(body) => crate::error::CreateImageRecipeError::new(crate::error::CreateImageRecipeErrorKind::CallRateLimitExceededException(body), generic),
            Err(e) => crate::error::CreateImageRecipeError::new(crate::error::CreateImageRecipeErrorKind::Unhandled(e.into()), generic),
        },
        "IdempotentParameterMismatchException" => match serde_json::from_slice::<crate::error::IdempotentParameterMismatchException>(json_body(response)) {
            Ok(body) => crate::error::CreateImageRecipeError::new(crate::error::CreateImageRecipeErrorKind::IdempotentParameterMismatchException(body), generic),
            Err(e) => crate::error::CreateImageRecipeError::new(crate::error::CreateImageRecipeErrorKind::Unhandled(e.into()), generic),
        },
        "ResourceInUseException" => match serde_json::from_slice::<crate::error::ResourceInUseException>(json_body(response)) {
            Ok(body) => crate::error::CreateImageRecipeError::new(crate::error::CreateImageRecipeErrorKind::ResourceInUseException(body), generic),
            Err(e) => crate::error::CreateImageRecipeError::new(crate::error::CreateImageRecipeErrorKind::Unhandled(e.into()), generic),
        },
        "InvalidVersionNumberException" => match serde_json::from_slice::<crate::error::InvalidVersionNumberException>(json_body(response)) {
            Ok(body) => crate::error::CreateImageRecipeError::new(crate::error::CreateImageRecipeErrorKind::InvalidVersionNumberException(body), generic),
            Err(e) => crate::error::CreateImageRecipeError::new(crate::error::CreateImageRecipeErrorKind::Unhandled(e.into()), generic),
        },
        "ResourceAlreadyExistsException" => match serde_json::from_slice::<crate::error::ResourceAlreadyExistsException>(json_body(response)) {
            Ok(body) => crate::error::CreateImageRecipeError::new(crate::error::CreateImageRecipeErrorKind::ResourceAlreadyExistsException(body), generic),
            Err(e) => crate::error::CreateImageRecipeError::new(crate::error::CreateImageRecipeErrorKind::Unhandled(e.into()), generic),
        },
        _ => crate::error::CreateImageRecipeError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_create_image_recipe_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::CreateImageRecipeOutput, crate::error::CreateImageRecipeError> {
    serde_json::from_slice(json_body(response)).map_err(crate::error::CreateImageRecipeError::unhandled)
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_create_infrastructure_configuration_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::CreateInfrastructureConfigurationOutput, crate::error::CreateInfrastructureConfigurationError> {
    let generic = crate::json_errors::parse_generic_error(response)
        .map_err(crate::error::CreateInfrastructureConfigurationError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code.to_string(),
        None => return Err(crate::error::CreateInfrastructureConfigurationError::generic(generic)),
    };
    Err(match error_code.as_str() {
        "ServiceException" => match serde_json::from_slice::<crate::error::ServiceException>(json_body(response)) {
            Ok(body) => crate::error::CreateInfrastructureConfigurationError::new(crate::error::CreateInfrastructureConfigurationErrorKind::ServiceException(body), generic),
            Err(e) => crate::error::CreateInfrastructureConfigurationError::new(crate::error::CreateInfrastructureConfigurationErrorKind::Unhandled(e.into()), generic),
        },
        "ClientException" => match serde_json::from_slice::<crate::error::ClientException>(json_body(response)) {
            Ok(body) => crate::error::CreateInfrastructureConfigurationError::new(crate::error::CreateInfrastructureConfigurationErrorKind::ClientException(body), generic),
            Err(e) => crate::error::CreateInfrastructureConfigurationError::new(crate::error::CreateInfrastructureConfigurationErrorKind::Unhandled(e.into()), generic),
        },
        "ServiceUnavailableException" => match serde_json::from_slice::<crate::error::ServiceUnavailableException>(json_body(response)) {
            Ok(body) => crate::error::CreateInfrastructureConfigurationError::new(crate::error::CreateInfrastructureConfigurationErrorKind::ServiceUnavailableException(body), generic),
            Err(e) => crate::error::CreateInfrastructureConfigurationError::new(crate::error::CreateInfrastructureConfigurationErrorKind::Unhandled(e.into()), generic),
        },
        "InvalidRequestException" => match serde_json::from_slice::<crate::error::InvalidRequestException>(json_body(response)) {
            Ok(body) => crate::error::CreateInfrastructureConfigurationError::new(crate::error::CreateInfrastructureConfigurationErrorKind::InvalidRequestException(body), generic),
            Err(e) => crate::error::CreateInfrastructureConfigurationError::new(crate::error::CreateInfrastructureConfigurationErrorKind::Unhandled(e.into()), generic),
        },
        "ForbiddenException" => match serde_json::from_slice::<crate::error::ForbiddenException>(json_body(response)) {
            Ok(body) => crate::error::CreateInfrastructureConfigurationError::new(crate::error::CreateInfrastructureConfigurationErrorKind::ForbiddenException(body), generic),
            Err(e) => crate::error::CreateInfrastructureConfigurationError::new(crate::error::CreateInfrastructureConfigurationErrorKind::Unhandled(e.into()), generic),
        },
        "CallRateLimitExceededException" => match serde_json::from_slice::<crate::error::CallRateLimitExceededException>(json_body(response)) {
            Ok(body) => crate::error::CreateInfrastructureConfigurationError::new(crate::error::CreateInfrastructureConfigurationErrorKind::CallRateLimitExceededException(body), generic),
            Err(e) => crate::error::CreateInfrastructureConfigurationError::new(crate::error::CreateInfrastructureConfigurationErrorKind::Unhandled(e.into()), generic),
        },
        "IdempotentParameterMismatchException" => match serde_json::from_slice::<crate::error::IdempotentParameterMismatchException>(json_body(response)) {
            Ok(body) => crate::error::CreateInfrastructureConfigurationError::new(crate::error::CreateInfrastructureConfigurationErrorKind::IdempotentParameterMismatchException(body), generic),
            Err(e) => crate::error::CreateInfrastructureConfigurationError::new(crate::error::CreateInfrastructureConfigurationErrorKind::Unhandled(e.into()), generic),
        },
        "ResourceInUseException" => match serde_json::from_slice::<crate::error::ResourceInUseException>(json_body(response)) {
            Ok(body) => crate::error::CreateInfrastructureConfigurationError::new(crate::error::CreateInfrastructureConfigurationErrorKind::ResourceInUseException(body), generic),
            Err(e) => crate::error::CreateInfrastructureConfigurationError::new(crate::error::CreateInfrastructureConfigurationErrorKind::Unhandled(e.into()), generic),
        },
        "ResourceAlreadyExistsException" => match serde_json::from_slice::<crate::error::ResourceAlreadyExistsException>(json_body(response)) {
            Ok(body) => crate::error::CreateInfrastructureConfigurationError::new(crate::error::CreateInfrastructureConfigurationErrorKind::ResourceAlreadyExistsException(body), generic),
            Err(e) => crate::error::CreateInfrastructureConfigurationError::new(crate::error::CreateInfrastructureConfigurationErrorKind::Unhandled(e.into()), generic),
        },
        _ => crate::error::CreateInfrastructureConfigurationError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_create_infrastructure_configuration_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::CreateInfrastructureConfigurationOutput, crate::error::CreateInfrastructureConfigurationError> {
    serde_json::from_slice(json_body(response)).map_err(crate::error::CreateInfrastructureConfigurationError::unhandled)
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_delete_component_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DeleteComponentOutput, crate::error::DeleteComponentError> {
    let generic = crate::json_errors::parse_generic_error(response)
        .map_err(crate::error::DeleteComponentError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code.to_string(),
        None => return Err(crate::error::DeleteComponentError::generic(generic)),
    };
    Err(match error_code.as_str() {
        "ServiceException" => match serde_json::from_slice::<crate::error::ServiceException>(json_body(response)) {
            Ok(body) => crate::error::DeleteComponentError::new(crate::error::DeleteComponentErrorKind::ServiceException(body), generic),
            Err(e) => crate::error::DeleteComponentError::new(crate::error::DeleteComponentErrorKind::Unhandled(e.into()), generic),
        },
        "ClientException" => match serde_json::from_slice::<crate::error::ClientException>(json_body(response)) {
            Ok(body) => crate::error::DeleteComponentError::new(crate::error::DeleteComponentErrorKind::ClientException(body), generic),
            Err(e) => crate::error::DeleteComponentError::new(crate::error::DeleteComponentErrorKind::Unhandled(e.into()), generic),
        },
        "ServiceUnavailableException" => match serde_json::from_slice::<crate::error::ServiceUnavailableException>(json_body(response)) {
            Ok(body) => crate::error::DeleteComponentError::new(crate::error::DeleteComponentErrorKind::ServiceUnavailableException(body), generic),
            Err(e) => crate::error::DeleteComponentError::new(crate::error::DeleteComponentErrorKind::Unhandled(e.into()), generic),
        },
        "InvalidRequestException" => match serde_json::from_slice::<crate::error::InvalidRequestException>(json_body(response)) {
            Ok(body) => crate::error::DeleteComponentError::new(crate::error::DeleteComponentErrorKind::InvalidRequestException(body), generic),
            Err(e) => crate::error::DeleteComponentError::new(crate::error::DeleteComponentErrorKind::Unhandled(e.into()), generic),
        },
        "ForbiddenException" => match serde_json::from_slice::<crate::error::ForbiddenException>(json_body(response)) {
            Ok(body) => crate::error::DeleteComponentError::new(crate::error::DeleteComponentErrorKind::ForbiddenException(body), generic),
            Err(e) => crate::error::DeleteComponentError::new(crate::error::DeleteComponentErrorKind::Unhandled(e.into()), generic),
        },
        "CallRateLimitExceededException" => match serde_json::from_slice::<crate::error::CallRateLimitExceededException>(json_body(response)) {
            Ok(body) => crate::error::DeleteComponentError::new(crate::error::DeleteComponentErrorKind::CallRateLimitExceededException(body), generic),
            Err(e) => crate::error::DeleteComponentError::new(crate::error::DeleteComponentErrorKind::Unhandled(e.into()), generic),
        },
        "ResourceDependencyException" => match serde_json::from_slice::<crate::error::ResourceDependencyException>(json_body(response)) {
            Ok(body) => crate::error::DeleteComponentError::new(crate::error::DeleteComponentErrorKind::ResourceDependencyException(body), generic),
            Err(e) => crate::error::DeleteComponentError::new(crate::error::DeleteComponentErrorKind::Unhandled(e.into()), generic),
        },
        _ => crate::error::DeleteComponentError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_delete_component_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DeleteComponentOutput, crate::error::DeleteComponentError> {
    serde_json::from_slice(json_body(response)).map_err(crate::error::DeleteComponentError::unhandled)
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_delete_distribution_configuration_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DeleteDistributionConfigurationOutput, crate::error::DeleteDistributionConfigurationError> {
    let generic = crate::json_errors::parse_generic_error(response)
        .map_err(crate::error::DeleteDistributionConfigurationError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code.to_string(),
        None => return Err(crate::error::DeleteDistributionConfigurationError::generic(generic)),
    };
    Err(match error_code.as_str() {
        "ServiceException" => match serde_json::from_slice::<crate::error::ServiceException>(json_body(response)) {
            Ok(body) => crate::error::DeleteDistributionConfigurationError::new(crate::error::DeleteDistributionConfigurationErrorKind::ServiceException(body), generic),
            Err(e) => crate::error::DeleteDistributionConfigurationError::new(crate::error::DeleteDistributionConfigurationErrorKind::Unhandled(e.into()), generic),
        },
        "ClientException" => match serde_json::from_slice::<crate::error::ClientException>(json_body(response)) {
            Ok(body) => crate::error::DeleteDistributionConfigurationError::new(crate::error::DeleteDistributionConfigurationErrorKind::ClientException(body), generic),
            Err(e) => crate::error::DeleteDistributionConfigurationError::new(crate::error::DeleteDistributionConfigurationErrorKind::Unhandled(e.into()), generic),
        },
        "ServiceUnavailableException" => match serde_json::from_slice::<crate::error::ServiceUnavailableException>(json_body(response)) {
            Ok(body) => crate::error::DeleteDistributionConfigurationError::new(crate::error::DeleteDistributionConfigurationErrorKind::ServiceUnavailableException(body), generic),
            Err(e) => crate::error::DeleteDistributionConfigurationError::new(crate::error::DeleteDistributionConfigurationErrorKind::Unhandled(e.into()), generic),
        },
        "InvalidRequestException" => match serde_json::from_slice::<crate::error::InvalidRequestException>(json_body(response)) {
            Ok(body) => crate::error::DeleteDistributionConfigurationError::new(crate::error::DeleteDistributionConfigurationErrorKind::InvalidRequestException(body), generic),
            Err(e) => crate::error::DeleteDistributionConfigurationError::new(crate::error::DeleteDistributionConfigurationErrorKind::Unhandled(e.into()), generic),
        },
        "ForbiddenException" => match serde_json::from_slice::<crate::error::ForbiddenException>(json_body(response)) {
            Ok(body) => crate::error::DeleteDistributionConfigurationError::new(crate::error::DeleteDistributionConfigurationErrorKind::ForbiddenException(body), generic),
            Err(e) => crate::error::DeleteDistributionConfigurationError::new(crate::error::DeleteDistributionConfigurationErrorKind::Unhandled(e.into()), generic),
        },
        "CallRateLimitExceededException" => match serde_json::from_slice::<crate::error::CallRateLimitExceededException>(json_body(response)) {
            Ok(body) => crate::error::DeleteDistributionConfigurationError::new(crate::error::DeleteDistributionConfigurationErrorKind::CallRateLimitExceededException(body), generic),
            Err(e) => crate::error::DeleteDistributionConfigurationError::new(crate::error::DeleteDistributionConfigurationErrorKind::Unhandled(e.into()), generic),
        },
        "ResourceDependencyException" => match serde_json::from_slice::<crate::error::ResourceDependencyException>(json_body(response)) {
            Ok(body) => crate::error::DeleteDistributionConfigurationError::new(crate::error::DeleteDistributionConfigurationErrorKind::ResourceDependencyException(body), generic),
            Err(e) => crate::error::DeleteDistributionConfigurationError::new(crate::error::DeleteDistributionConfigurationErrorKind::Unhandled(e.into()), generic),
        },
        _ => crate::error::DeleteDistributionConfigurationError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_delete_distribution_configuration_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DeleteDistributionConfigurationOutput, crate::error::DeleteDistributionConfigurationError> {
    serde_json::from_slice(json_body(response)).map_err(crate::error::DeleteDistributionConfigurationError::unhandled)
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_delete_image_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DeleteImageOutput, crate::error::DeleteImageError> {
    let generic = crate::json_errors::parse_generic_error(response)
        .map_err(crate::error::DeleteImageError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code.to_string(),
        None => return Err(crate::error::DeleteImageError::generic(generic)),
    };
    Err(match error_code.as_str() {
        "ServiceException" => match serde_json::from_slice::<crate::error::ServiceException>(json_body(response)) {
            Ok(body) => crate::error::DeleteImageError::new(crate::error::DeleteImageErrorKind::ServiceException(body), generic),
            Err(e) => crate::error::DeleteImageError::new(crate::error::DeleteImageErrorKind::Unhandled(e.into()), generic),
        },
        "ClientException" => match serde_json::from_slice::<crate::error::ClientException>(json_body(response)) {
            Ok(body) => crate::error::DeleteImageError::new(crate::error::DeleteImageErrorKind::ClientException(body), generic),
            Err(e) => crate::error::DeleteImageError::new(crate::error::DeleteImageErrorKind::Unhandled(e.into()), generic),
        },
        "ServiceUnavailableException" => match serde_json::from_slice::<crate::error::ServiceUnavailableException>(json_body(response)) {
            Ok(body) => crate::error::DeleteImageError::new(crate::error::DeleteImageErrorKind::ServiceUnavailableException(body), generic),
            Err(e) => crate::error::DeleteImageError::new(crate::error::DeleteImageErrorKind::Unhandled(e.into()), generic),
        },
        "InvalidRequestException" => match serde_json::from_slice::<crate::error::InvalidRequestException>(json_body(response)) {
            Ok(body) => crate::error::DeleteImageError::new(crate::error::DeleteImageErrorKind::InvalidRequestException(body), generic),
            Err(e) => crate::error::DeleteImageError::new(crate::error::DeleteImageErrorKind::Unhandled(e.into()), generic),
        },
        "ForbiddenException" => match serde_json::from_slice::<crate::error::ForbiddenException>(json_body(response)) {
            Ok(body) => crate::error::DeleteImageError::new(crate::error::DeleteImageErrorKind::ForbiddenException(body), generic),
            Err(e) => crate::error::DeleteImageError::new(crate::error::DeleteImageErrorKind::Unhandled(e.into()), generic),
        },
        "CallRateLimitExceededException" => match serde_json::from_slice::<crate::error::CallRateLimitExceededException>(json_body(response)) {
            Ok(body) => crate::error::DeleteImageError::new(crate::error::DeleteImageErrorKind::CallRateLimitExceededException(body), generic),
            Err(e) => crate::error::DeleteImageError::new(crate::error::DeleteImageErrorKind::Unhandled(e.into()), generic),
        },
        "ResourceDependencyException" => match serde_json::from_slice::<crate::error::ResourceDependencyException>(json_body(response)) {
            Ok(body) => crate::error::DeleteImageError::new(crate::error::DeleteImageErrorKind::ResourceDependencyException(body), generic),
            Err(e) => crate::error::DeleteImageError::new(crate::error::DeleteImageErrorKind::Unhandled(e.into()), generic),
        },
        _ => crate::error::DeleteImageError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_delete_image_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DeleteImageOutput, crate::error::DeleteImageError> {
    serde_json::from_slice(json_body(response)).map_err(crate::error::DeleteImageError::unhandled)
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_delete_image_pipeline_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DeleteImagePipelineOutput, crate::error::DeleteImagePipelineError> {
    let generic = crate::json_errors::parse_generic_error(response)
        .map_err(crate::error::DeleteImagePipelineError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code.to_string(),
        None => return Err(crate::error::DeleteImagePipelineError::generic(generic)),
    };
    Err(match error_code.as_str() {
        "ServiceException" => match serde_json::from_slice::<crate::error::ServiceException>(json_body(response)) {
            Ok(body) => crate::error::DeleteImagePipelineError::new(crate::error::DeleteImagePipelineErrorKind::ServiceException(body), generic),
            Err(e) => crate::error::DeleteImagePipelineError::new(crate::error::DeleteImagePipelineErrorKind::Unhandled(e.into()), generic),
        },
        "ClientException" => match serde_json::from_slice::<crate::error::ClientException>(json_body(response)) {
            Ok(body) => crate::error::DeleteImagePipelineError::new(crate::error::DeleteImagePipelineErrorKind::ClientException(body), generic),
            Err(e) => crate::error::DeleteImagePipelineError::new(crate::error::DeleteImagePipelineErrorKind::Unhandled(e.into()), generic),
        },
        "ServiceUnavailableException" => match serde_json::from_slice::<crate::error::ServiceUnavailableException>(json_body(response)) {
            Ok(body) => crate::error::DeleteImagePipelineError::new(crate::error::DeleteImagePipelineErrorKind::ServiceUnavailableException(body), generic),
            Err(e) => crate::error::DeleteImagePipelineError::new(crate::error::DeleteImagePipelineErrorKind::Unhandled(e.into()), generic),
        },
        "InvalidRequestException" => match serde_json::from_slice::<crate::error::InvalidRequestException>(json_body(response)) {
            Ok(body) => crate::error::DeleteImagePipelineError::new(crate::error::DeleteImagePipelineErrorKind::InvalidRequestException(body), generic),
            Err(e) => crate::error::DeleteImagePipelineError::new(crate::error::DeleteImagePipelineErrorKind::Unhandled(e.into()), generic),
        },
        "ForbiddenException" => match serde_json::from_slice::<crate::error::ForbiddenException>(json_body(response)) {
            Ok(body) => crate::error::DeleteImagePipelineError::new(crate::error::DeleteImagePipelineErrorKind::ForbiddenException(body), generic),
            Err(e) => crate::error::DeleteImagePipelineError::new(crate::error::DeleteImagePipelineErrorKind::Unhandled(e.into()), generic),
        },
        "CallRateLimitExceededException" => match serde_json::from_slice::<crate::error::CallRateLimitExceededException>(json_body(response)) {
            Ok(body) => crate::error::DeleteImagePipelineError::new(crate::error::DeleteImagePipelineErrorKind::CallRateLimitExceededException(body), generic),
            Err(e) => crate::error::DeleteImagePipelineError::new(crate::error::DeleteImagePipelineErrorKind::Unhandled(e.into()), generic),
        },
        "ResourceDependencyException" => match serde_json::from_slice::<crate::error::ResourceDependencyException>(json_body(response)) {
            Ok(body) => crate::error::DeleteImagePipelineError::new(crate::error::DeleteImagePipelineErrorKind::ResourceDependencyException(body), generic),
            Err(e) => crate::error::DeleteImagePipelineError::new(crate::error::DeleteImagePipelineErrorKind::Unhandled(e.into()), generic),
        },
        _ => crate::error::DeleteImagePipelineError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_delete_image_pipeline_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DeleteImagePipelineOutput, crate::error::DeleteImagePipelineError> {
    serde_json::from_slice(json_body(response)).map_err(crate::error::DeleteImagePipelineError::unhandled)
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_delete_image_recipe_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DeleteImageRecipeOutput, crate::error::DeleteImageRecipeError> {
    let generic = crate::json_errors::parse_generic_error(response)
        .map_err(crate::error::DeleteImageRecipeError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code.to_string(),
        None => return Err(crate::error::DeleteImageRecipeError::generic(generic)),
    };
    Err(match error_code.as_str() {
        "ServiceException" => match serde_json::from_slice::<crate::error::ServiceException>(json_body(response)) {
            Ok(body) => crate::error::DeleteImageRecipeError::new(crate::error::DeleteImageRecipeErrorKind::ServiceException(body), generic),
            Err(e) => crate::error::DeleteImageRecipeError::new(crate::error::DeleteImageRecipeErrorKind::Unhandled(e.into()), generic),
        },
        "ClientException" => match serde_json::from_slice::<crate::error::ClientException>(json_body(response)) {
            Ok(body) => crate::error::DeleteImageRecipeError::new(crate::error::DeleteImageRecipeErrorKind::ClientException(body), generic),
            Err(e) => crate::error::DeleteImageRecipeError::new(crate::error::DeleteImageRecipeErrorKind::Unhandled(e.into()), generic),
        },
        "ServiceUnavailableException" => match serde_json::from_slice::<crate::error::ServiceUnavailableException>(json_body(response)) {
            Ok(body) => crate::error::DeleteImageRecipeError::new(crate::error::DeleteImageRecipeErrorKind::ServiceUnavailableException(body), generic),
            Err(e) => crate::error::DeleteImageRecipeError::new(crate::error::DeleteImageRecipeErrorKind::Unhandled(e.into()), generic),
        },
        "InvalidRequestException" => match serde_json::from_slice::<crate::error::InvalidRequestException>(json_body(response)) {
            Ok(body) => crate::error::DeleteImageRecipeError::new(crate::error::DeleteImageRecipeErrorKind::InvalidRequestException(body), generic),
            Err(e) => crate::error::DeleteImageRecipeError::new(crate::error::DeleteImageRecipeErrorKind::Unhandled(e.into()), generic),
        },
        "ForbiddenException" => match serde_json::from_slice::<crate::error::ForbiddenException>(json_body(response)) {
            Ok(body) => crate::error::DeleteImageRecipeError::new(crate::error::DeleteImageRecipeErrorKind::ForbiddenException(body), generic),
            Err(e) => crate::error::DeleteImageRecipeError::new(crate::error::DeleteImageRecipeErrorKind::Unhandled(e.into()), generic),
        },
        "CallRateLimitExceededException" => match serde_json::from_slice::<crate::error::CallRateLimitExceededException>(json_body(response)) {
            Ok(body) => crate::error::DeleteImageRecipeError::new(crate::error::DeleteImageRecipeErrorKind::CallRateLimitExceededException(body), generic),
            Err(e) => crate::error::DeleteImageRecipeError::new(crate::error::DeleteImageRecipeErrorKind::Unhandled(e.into()), generic),
        },
        "ResourceDependencyException" => match serde_json::from_slice::<crate::error::ResourceDependencyException>(json_body(response)) {
            Ok(body) => crate::error::DeleteImageRecipeError::new(crate::error::DeleteImageRecipeErrorKind::ResourceDependencyException(body), generic),
            Err(e) => crate::error::DeleteImageRecipeError::new(crate::error::DeleteImageRecipeErrorKind::Unhandled(e.into()), generic),
        },
        _ => crate::error::DeleteImageRecipeError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_delete_image_recipe_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DeleteImageRecipeOutput, crate::error::DeleteImageRecipeError> {
    serde_json::from_slice(json_body(response)).map_err(crate::error::DeleteImageRecipeError::unhandled)
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_delete_infrastructure_configuration_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DeleteInfrastructureConfigurationOutput, crate::error::DeleteInfrastructureConfigurationError> {
    let generic = crate::json_errors::parse_generic_error(response)
        .map_err(crate::error::DeleteInfrastructureConfigurationError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code.to_string(),
        None => return Err(crate::error::DeleteInfrastructureConfigurationError::generic(generic)),
    };
    Err(match error_code.as_str() {
        "ServiceException" => match serde_json::from_slice::<crate::error::ServiceException>(json_body(response)) {
            Ok(body) => crate::error::DeleteInfrastructureConfigurationError::new(crate::error::DeleteInfrastructureConfigurationErrorKind::ServiceException(body), generic),
            Err(e) => crate::error::DeleteInfrastructureConfigurationError::new(crate::error::DeleteInfrastructureConfigurationErrorKind::Unhandled(e.into()), generic),
        },
        "ClientException" => match serde_json::from_slice::<crate::error::ClientException>(json_body(response)) {
            Ok(body) => crate::error::DeleteInfrastructureConfigurationError::new(crate::error::DeleteInfrastructureConfigurationErrorKind::ClientException(body), generic),
            Err(e) => crate::error::DeleteInfrastructureConfigurationError::new(crate::error::DeleteInfrastructureConfigurationErrorKind::Unhandled(e.into()), generic),
        },
        "ServiceUnavailableException" => match serde_json::from_slice::<crate::error::ServiceUnavailableException>(json_body(response)) {
            Ok(body) => crate::error::DeleteInfrastructureConfigurationError::new(crate::error::DeleteInfrastructureConfigurationErrorKind::ServiceUnavailableException(body), generic),
            Err(e) => crate::error::DeleteInfrastructureConfigurationError::new(crate::error::DeleteInfrastructureConfigurationErrorKind::Unhandled(e.into()), generic),
        },
        "InvalidRequestException" => match serde_json::from_slice::<crate::error::InvalidRequestException>(json_body(response)) {
            Ok(body) => crate::error::DeleteInfrastructureConfigurationError::new(crate::error::DeleteInfrastructureConfigurationErrorKind::InvalidRequestException(body), generic),
            Err(e) => crate::error::DeleteInfrastructureConfigurationError::new(crate::error::DeleteInfrastructureConfigurationErrorKind::Unhandled(e.into()), generic),
        },
        "ForbiddenException" => match serde_json::from_slice::<crate::error::ForbiddenException>(json_body(response)) {
            Ok(body) => crate::error::DeleteInfrastructureConfigurationError::new(crate::error::DeleteInfrastructureConfigurationErrorKind::ForbiddenException(body), generic),
            Err(e) => crate::error::DeleteInfrastructureConfigurationError::new(crate::error::DeleteInfrastructureConfigurationErrorKind::Unhandled(e.into()), generic),
        },
        "CallRateLimitExceededException" => match serde_json::from_slice::<crate::error::CallRateLimitExceededException>(json_body(response)) {
            Ok(body) => crate::error::DeleteInfrastructureConfigurationError::new(crate::error::DeleteInfrastructureConfigurationErrorKind::CallRateLimitExceededException(body), generic),
            Err(e) => crate::error::DeleteInfrastructureConfigurationError::new(crate::error::DeleteInfrastructureConfigurationErrorKind::Unhandled(e.into()), generic),
        },
        "ResourceDependencyException" => match serde_json::from_slice::<crate::error::ResourceDependencyException>(json_body(response)) {
            Ok(body) => crate::error::DeleteInfrastructureConfigurationError::new(crate::error::DeleteInfrastructureConfigurationErrorKind::ResourceDependencyException(body), generic),
            Err(e) => crate::error::DeleteInfrastructureConfigurationError::new(crate::error::DeleteInfrastructureConfigurationErrorKind::Unhandled(e.into()), generic),
        },
        _ => crate::error::DeleteInfrastructureConfigurationError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_delete_infrastructure_configuration_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DeleteInfrastructureConfigurationOutput, crate::error::DeleteInfrastructureConfigurationError> {
    serde_json::from_slice(json_body(response)).map_err(crate::error::DeleteInfrastructureConfigurationError::unhandled)
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_get_component_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::GetComponentOutput, crate::error::GetComponentError> {
    let generic = crate::json_errors::parse_generic_error(response)
        .map_err(crate::error::GetComponentError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code.to_string(),
        None => return Err(crate::error::GetComponentError::generic(generic)),
    };
    Err(match error_code.as_str() {
        "ServiceException" => match serde_json::from_slice::<crate::error::ServiceException>(json_body(response)) {
            Ok(body) => crate::error::GetComponentError::new(crate::error::GetComponentErrorKind::ServiceException(body), generic),
            Err(e) => crate::error::GetComponentError::new(crate::error::GetComponentErrorKind::Unhandled(e.into()), generic),
        },
        "ClientException" => match serde_json::from_slice::<crate::error::ClientException>(json_body(response)) {
            Ok(body) => crate::error::GetComponentError::new(crate::error::GetComponentErrorKind::ClientException(body), generic),
            Err(e) => crate::error::GetComponentError::new(crate::error::GetComponentErrorKind::Unhandled(e.into()), generic),
        },
        "ServiceUnavailableException" => match serde_json::from_slice::<crate::error::ServiceUnavailableException>(json_body(response)) {
            Ok(body) => crate::error::GetComponentError::new(crate::error::GetComponentErrorKind::ServiceUnavailableException(body), generic),
            Err(e) => crate::error::GetComponentError::new(crate::error::GetComponentErrorKind::Unhandled(e.into()), generic),
        },
        "InvalidRequestException" => match serde_json::from_slice::<crate::error::InvalidRequestException>(json_body(response)) {
            Ok(body) => crate::error::GetComponentError::new(crate::error::GetComponentErrorKind::InvalidRequestException(body), generic),
            Err(e) => crate::error::GetComponentError::new(crate::error::GetComponentErrorKind::Unhandled(e.into()), generic),
        },
        "ForbiddenException" => match serde_json::from_slice::<crate::error::ForbiddenException>(json_body(response)) {
            Ok(body) => crate::error::GetComponentError::new(crate::error::GetComponentErrorKind::ForbiddenException(body), generic),
            Err(e) => crate::error::GetComponentError::new(crate::error::GetComponentErrorKind::Unhandled(e.into()), generic),
        },
        "CallRateLimitExceededException" => match serde_json::from_slice::<crate::error::CallRateLimitExceededException>(json_body(response)) {
            Ok(body) => crate::error::GetComponentError::new(crate::error::GetComponentErrorKind::CallRateLimitExceededException(body), generic),
            Err(e) => crate::error::GetComponentError::new(crate::error::GetComponentErrorKind::Unhandled(e.into()), generic),
        },
        _ => crate::error::GetComponentError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_get_component_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::GetComponentOutput, crate::error::GetComponentError> {
    serde_json::from_slice(json_body(response)).map_err(crate::error::GetComponentError::unhandled)
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_get_component_policy_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::GetComponentPolicyOutput, crate::error::GetComponentPolicyError> {
    let generic = crate::json_errors::parse_generic_error(response)
        .map_err(crate::error::GetComponentPolicyError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code.to_string(),
        None => return Err(crate::error::GetComponentPolicyError::generic(generic)),
    };
    Err(match error_code.as_str() {
        "ServiceException" => match serde_json::from_slice::<crate::error::ServiceException>(json_body(response)) {
            Ok(body) => crate::error::GetComponentPolicyError::new(crate::error::GetComponentPolicyErrorKind::ServiceException(body), generic),
            Err(e) => crate::error::GetComponentPolicyError::new(crate::error::GetComponentPolicyErrorKind::Unhandled(e.into()), generic),
        },
        "ServiceUnavailableException" => match serde_json::from_slice::<crate::error::ServiceUnavailableException>(json_body(response)) {
            Ok(body) => crate::error::GetComponentPolicyError::new(crate::error::GetComponentPolicyErrorKind::ServiceUnavailableException(body), generic),
            Err(e) => crate::error::GetComponentPolicyError::new(crate::error::GetComponentPolicyErrorKind::Unhandled(e.into()), generic),
        },
        "ResourceNotFoundException" => match serde_json::from_slice::<crate::error::ResourceNotFoundException>(json_body(response)) {
            Ok(body) => crate::error::GetComponentPolicyError::new(crate::error::GetComponentPolicyErrorKind::ResourceNotFoundException(body), generic),
            Err(e) => crate::error::GetComponentPolicyError::new(crate::error::GetComponentPolicyErrorKind::Unhandled(e.into()), generic),
        },
        "InvalidRequestException" => match serde_json::from_slice::<crate::error::InvalidRequestException>(json_body(response)) {
            Ok(body) => crate::error::GetComponentPolicyError::new(crate::error::GetComponentPolicyErrorKind::InvalidRequestException(body), generic),
            Err(e) => crate::error::GetComponentPolicyError::new(crate::error::GetComponentPolicyErrorKind::Unhandled(e.into()), generic),
        },
        "ForbiddenException" => match serde_json::from_slice::<crate::error::ForbiddenException>(json_body(response)) {
            Ok(body) => crate::error::GetComponentPolicyError::new(crate::error::GetComponentPolicyErrorKind::ForbiddenException(body), generic),
            Err(e) => crate::error::GetComponentPolicyError::new(crate::error::GetComponentPolicyErrorKind::Unhandled(e.into()), generic),
        },
        "CallRateLimitExceededException" => match serde_json::from_slice::<crate::error::CallRateLimitExceededException>(json_body(response)) {
            Ok(body) => crate::error::GetComponentPolicyError::new(crate::error::GetComponentPolicyErrorKind::CallRateLimitExceededException(body), generic),
            Err(e) => crate::error::GetComponentPolicyError::new(crate::error::GetComponentPolicyErrorKind::Unhandled(e.into()), generic),
        },
        _ => crate::error::GetComponentPolicyError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_get_component_policy_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::GetComponentPolicyOutput, crate::error::GetComponentPolicyError> {
    serde_json::from_slice(json_body(response)).map_err(crate::error::GetComponentPolicyError::unhandled)
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_get_distribution_configuration_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::GetDistributionConfigurationOutput, crate::error::GetDistributionConfigurationError> {
    let generic = crate::json_errors::parse_generic_error(response)
        .map_err(crate::error::GetDistributionConfigurationError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code.to_string(),
        None => return Err(crate::error::GetDistributionConfigurationError::generic(generic)),
    };
    Err(match error_code.as_str() {
        "ServiceException" => match serde_json::from_slice::<crate::error::ServiceException>(json_body(response)) {
            Ok(body) => crate::error::GetDistributionConfigurationError::new(crate::error::GetDistributionConfigurationErrorKind::ServiceException(body), generic),
            Err(e) => crate::error::GetDistributionConfigurationError::new(crate::error::GetDistributionConfigurationErrorKind::Unhandled(e.into()), generic),
        },
        "ClientException" => match serde_json::from_slice::<crate::error::ClientException>(json_body(response)) {
            Ok(body) => crate::error::GetDistributionConfigurationError::new(crate::error::GetDistributionConfigurationErrorKind::ClientException(body), generic),
            Err(e) => crate::error::GetDistributionConfigurationError::new(crate::error::GetDistributionConfigurationErrorKind::Unhandled(e.into()), generic),
        },
        "ServiceUnavailableException" => match serde_json::from_slice::<crate::error::ServiceUnavailableException>(json_body(response)) {
            Ok(body) => crate::error::GetDistributionConfigurationError::new(crate::error::GetDistributionConfigurationErrorKind::ServiceUnavailableException(body), generic),
            Err(e) => crate::error::GetDistributionConfigurationError::new(crate::error::GetDistributionConfigurationErrorKind::Unhandled(e.into()), generic),
        },
        "InvalidRequestException" => match serde_json::from_slice::<crate::error::InvalidRequestException>(json_body(response)) {
            Ok(body) => crate::error::GetDistributionConfigurationError::new(crate::error::GetDistributionConfigurationErrorKind::InvalidRequestException(body), generic),
            Err(e) => crate::error::GetDistributionConfigurationError::new(crate::error::GetDistributionConfigurationErrorKind::Unhandled(e.into()), generic),
        },
        "ForbiddenException" => match serde_json::from_slice::<crate::error::ForbiddenException>(json_body(response)) {
            Ok(body) => crate::error::GetDistributionConfigurationError::new(crate::error::GetDistributionConfigurationErrorKind::ForbiddenException(body), generic),
            Err(e) => crate::error::GetDistributionConfigurationError::new(crate::error::GetDistributionConfigurationErrorKind::Unhandled(e.into()), generic),
        },
        "CallRateLimitExceededException" => match serde_json::from_slice::<crate::error::CallRateLimitExceededException>(json_body(response)) {
            Ok(body) => crate::error::GetDistributionConfigurationError::new(crate::error::GetDistributionConfigurationErrorKind::CallRateLimitExceededException(body), generic),
            Err(e) => crate::error::GetDistributionConfigurationError::new(crate::error::GetDistributionConfigurationErrorKind::Unhandled(e.into()), generic),
        },
        _ => crate::error::GetDistributionConfigurationError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_get_distribution_configuration_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::GetDistributionConfigurationOutput, crate::error::GetDistributionConfigurationError> {
    serde_json::from_slice(json_body(response)).map_err(crate::error::GetDistributionConfigurationError::unhandled)
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_get_image_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::GetImageOutput, crate::error::GetImageError> {
    let generic = crate::json_errors::parse_generic_error(response)
        .map_err(crate::error::GetImageError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code.to_string(),
        None => return Err(crate::error::GetImageError::generic(generic)),
    };
    Err(match error_code.as_str() {
        "ServiceException" => match serde_json::from_slice::<crate::error::ServiceException>(json_body(response)) {
            Ok(body) => crate::error::GetImageError::new(crate::error::GetImageErrorKind::ServiceException(body), generic),
            Err(e) => crate::error::GetImageError::new(crate::error::GetImageErrorKind::Unhandled(e.into()), generic),
        },
        "ClientException" => match serde_json::from_slice::<crate::error::ClientException>(json_body(response)) {
            Ok(body) => crate::error::GetImageError::new(crate::error::GetImageErrorKind::ClientException(body), generic),
            Err(e) => crate::error::GetImageError::new(crate::error::GetImageErrorKind::Unhandled(e.into()), generic),
        },
        "ServiceUnavailableException" => match serde_json::from_slice::<crate::error::ServiceUnavailableException>(json_body(response)) {
            Ok(body) => crate::error::GetImageError::new(crate::error::GetImageErrorKind::ServiceUnavailableException(body), generic),
            Err(e) => crate::error::GetImageError::new(crate::error::GetImageErrorKind::Unhandled(e.into()), generic),
        },
        "InvalidRequestException" => match serde_json::from_slice::<crate::error::InvalidRequestException>(json_body(response)) {
            Ok(body) => crate::error::GetImageError::new(crate::error::GetImageErrorKind::InvalidRequestException(body), generic),
            Err(e) => crate::error::GetImageError::new(crate::error::GetImageErrorKind::Unhandled(e.into()), generic),
        },
        "ForbiddenException" => match serde_json::from_slice::<crate::error::ForbiddenException>(json_body(response)) {
            Ok(body) => crate::error::GetImageError::new(crate::error::GetImageErrorKind::ForbiddenException(body), generic),
            Err(e) => crate::error::GetImageError::new(crate::error::GetImageErrorKind::Unhandled(e.into()), generic),
        },
        "CallRateLimitExceededException" => match serde_json::from_slice::<crate::error::CallRateLimitExceededException>(json_body(response)) {
            Ok(body) => crate::error::GetImageError::new(crate::error::GetImageErrorKind::CallRateLimitExceededException(body), generic),
            Err(e) => crate::error::GetImageError::new(crate::error::GetImageErrorKind::Unhandled(e.into()), generic),
        },
        _ => crate::error::GetImageError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_get_image_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::GetImageOutput, crate::error::GetImageError> {
    serde_json::from_slice(json_body(response)).map_err(crate::error::GetImageError::unhandled)
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_get_image_pipeline_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::GetImagePipelineOutput, crate::error::GetImagePipelineError> {
    let generic = crate::json_errors::parse_generic_error(response)
        .map_err(crate::error::GetImagePipelineError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code.to_string(),
        None => return Err(crate::error::GetImagePipelineError::generic(generic)),
    };
    Err(match error_code.as_str() {
        "ServiceException" => match serde_json::from_slice::<crate::error::ServiceException>(json_body(response)) {
            Ok(body) => crate::error::GetImagePipelineError::new(crate::error::GetImagePipelineErrorKind::ServiceException(body), generic),
            Err(e) => crate::error::GetImagePipelineError::new(crate::error::GetImagePipelineErrorKind::Unhandled(e.into()), generic),
        },
        "ClientException" => match serde_json::from_slice::<crate::error::ClientException>(json_body(response)) {
            Ok(body) => crate::error::GetImagePipelineError::new(crate::error::GetImagePipelineErrorKind::ClientException(body), generic),
            Err(e) => crate::error::GetImagePipelineError::new(crate::error::GetImagePipelineErrorKind::Unhandled(e.into()), generic),
        },
        "ServiceUnavailableException" => match serde_json::from_slice::<crate::error::ServiceUnavailableException>(json_body(response)) {
            Ok(body) => crate::error::GetImagePipelineError::new(crate::error::GetImagePipelineErrorKind::ServiceUnavailableException(body), generic),
            Err(e) => crate::error::GetImagePipelineError::new(crate::error::GetImagePipelineErrorKind::Unhandled(e.into()), generic),
        },
        "InvalidRequestException" => match serde_json::from_slice::<crate::error::InvalidRequestException>(json_body(response)) {
            Ok(body) => crate::error::GetImagePipelineError::new(crate::error::GetImagePipelineErrorKind::InvalidRequestException(body), generic),
            Err(e) => crate::error::GetImagePipelineError::new(crate::error::GetImagePipelineErrorKind::Unhandled(e.into()), generic),
        },
        "ForbiddenException" => match serde_json::from_slice::<crate::error::ForbiddenException>(json_body(response)) {
            Ok(body) => crate::error::GetImagePipelineError::new(crate::error::GetImagePipelineErrorKind::ForbiddenException(body), generic),
            Err(e) => crate::error::GetImagePipelineError::new(crate::error::GetImagePipelineErrorKind::Unhandled(e.into()), generic),
        },
        "CallRateLimitExceededException" => match serde_json::from_slice::<crate::error::CallRateLimitExceededException>(json_body(response)) {
            Ok(body) => crate::error::GetImagePipelineError::new(crate::error::GetImagePipelineErrorKind::CallRateLimitExceededException(body), generic),
            Err(e) => crate::error::GetImagePipelineError::new(crate::error::GetImagePipelineErrorKind::Unhandled(e.into()), generic),
        },
        _ => crate::error::GetImagePipelineError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_get_image_pipeline_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::GetImagePipelineOutput, crate::error::GetImagePipelineError> {
    serde_json::from_slice(json_body(response)).map_err(crate::error::GetImagePipelineError::unhandled)
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_get_image_policy_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::GetImagePolicyOutput, crate::error::GetImagePolicyError> {
    let generic = crate::json_errors::parse_generic_error(response)
        .map_err(crate::error::GetImagePolicyError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code.to_string(),
        None => return Err(crate::error::GetImagePolicyError::generic(generic)),
    };
    Err(match error_code.as_str() {
        "ServiceException" => match serde_json::from_slice::<crate::error::ServiceException>(json_body(response)) {
            Ok(body) => crate::error::GetImagePolicyError::new(crate::error::GetImagePolicyErrorKind::ServiceException(body), generic),
            Err(e) => crate::error::GetImagePolicyError::new(crate::error::GetImagePolicyErrorKind::Unhandled(e.into()), generic),
        },
        "ServiceUnavailableException" => match serde_json::from_slice::<crate::error::ServiceUnavailableException>(json_body(response)) {
            Ok(body) => crate::error::GetImagePolicyError::new(crate::error::GetImagePolicyErrorKind::ServiceUnavailableException(body), generic),
            Err(e) => crate::error::GetImagePolicyError::new(crate::error::GetImagePolicyErrorKind::Unhandled(e.into()), generic),
        },
        "ResourceNotFoundException" => match serde_json::from_slice::<crate::error::ResourceNotFoundException>(json_body(response)) {
            Ok(body) => crate::error::GetImagePolicyError::new(crate::error::GetImagePolicyErrorKind::ResourceNotFoundException(body), generic),
            Err(e) => crate::error::GetImagePolicyError::new(crate::error::GetImagePolicyErrorKind::Unhandled(e.into()), generic),
        },
        "InvalidRequestException" => match serde_json::from_slice::<crate::error::InvalidRequestException>(json_body(response)) {
            Ok(body) => crate::error::GetImagePolicyError::new(crate::error::GetImagePolicyErrorKind::InvalidRequestException(body), generic),
            Err(e) => crate::error::GetImagePolicyError::new(crate::error::GetImagePolicyErrorKind::Unhandled(e.into()), generic),
        },
        "ForbiddenException" => match serde_json::from_slice::<crate::error::ForbiddenException>(json_body(response)) {
            Ok(body) => crate::error::GetImagePolicyError::new(crate::error::GetImagePolicyErrorKind::ForbiddenException(body), generic),
            Err(e) => crate::error::GetImagePolicyError::new(crate::error::GetImagePolicyErrorKind::Unhandled(e.into()), generic),
        },
        "CallRateLimitExceededException" => match serde_json::from_slice::<crate::error::CallRateLimitExceededException>(json_body(response)) {
            Ok(body) => crate::error::GetImagePolicyError::new(crate::error::GetImagePolicyErrorKind::CallRateLimitExceededException(body), generic),
            Err(e) => crate::error::GetImagePolicyError::new(crate::error::GetImagePolicyErrorKind::Unhandled(e.into()), generic),
        },
        _ => crate::error::GetImagePolicyError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_get_image_policy_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::GetImagePolicyOutput, crate::error::GetImagePolicyError> {
    serde_json::from_slice(json_body(response)).map_err(crate::error::GetImagePolicyError::unhandled)
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_get_image_recipe_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::GetImageRecipeOutput, crate::error::GetImageRecipeError> {
    let generic = crate::json_errors::parse_generic_error(response)
        .map_err(crate::error::GetImageRecipeError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code.to_string(),
        None => return Err(crate::error::GetImageRecipeError::generic(generic)),
    };
    Err(match error_code.as_str() {
        "ServiceException" => match serde_json::from_slice::<crate::error::ServiceException>(json_body(response)) {
            Ok(body) => crate::error::GetImageRecipeError::new(crate::error::GetImageRecipeErrorKind::ServiceException(body), generic),
            Err(e) => crate::error::GetImageRecipeError::new(crate::error::GetImageRecipeErrorKind::Unhandled(e.into()), generic),
        },
        "ClientException" => match serde_json::from_slice::<crate::error::ClientException>(json_body(response)) {
            Ok(body) => crate::error::GetImageRecipeError::new(crate::error::GetImageRecipeErrorKind::ClientException(body), generic),
            Err(e) => crate::error::GetImageRecipeError::new(crate::error::GetImageRecipeErrorKind::Unhandled(e.into()), generic),
        },
        "ServiceUnavailableException" => match serde_json::from_slice::<crate::error::ServiceUnavailableException>(json_body(response)) {
            Ok(body) => crate::error::GetImageRecipeError::new(crate::error::GetImageRecipeErrorKind::ServiceUnavailableException(body), generic),
            Err(e) => crate::error::GetImageRecipeError::new(crate::error::GetImageRecipeErrorKind::Unhandled(e.into()), generic),
        },
        "InvalidRequestException" => match serde_json::from_slice::<crate::error::InvalidRequestException>(json_body(response)) {
            Ok(body) => crate::error::GetImageRecipeError::new(crate::error::GetImageRecipeErrorKind::InvalidRequestException(body), generic),
            Err(e) => crate::error::GetImageRecipeError::new(crate::error::GetImageRecipeErrorKind::Unhandled(e.into()), generic),
        },
        "ForbiddenException" => match serde_json::from_slice::<crate::error::ForbiddenException>(json_body(response)) {
            Ok(body) => crate::error::GetImageRecipeError::new(crate::error::GetImageRecipeErrorKind::ForbiddenException(body), generic),
            Err(e) => crate::error::GetImageRecipeError::new(crate::error::GetImageRecipeErrorKind::Unhandled(e.into()), generic),
        },
        "CallRateLimitExceededException" => match serde_json::from_slice::<crate::error::CallRateLimitExceededException>(json_body(response)) {
            Ok(body) => crate::error::GetImageRecipeError::new(crate::error::GetImageRecipeErrorKind::CallRateLimitExceededException(body), generic),
            Err(e) => crate::error::GetImageRecipeError::new(crate::error::GetImageRecipeErrorKind::Unhandled(e.into()), generic),
        },
        _ => crate::error::GetImageRecipeError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_get_image_recipe_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::GetImageRecipeOutput, crate::error::GetImageRecipeError> {
    serde_json::from_slice(json_body(response)).map_err(crate::error::GetImageRecipeError::unhandled)
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_get_image_recipe_policy_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::GetImageRecipePolicyOutput, crate::error::GetImageRecipePolicyError> {
    let generic = crate::json_errors::parse_generic_error(response)
        .map_err(crate::error::GetImageRecipePolicyError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code.to_string(),
        None => return Err(crate::error::GetImageRecipePolicyError::generic(generic)),
    };
    Err(match error_code.as_str() {
        "ServiceException" => match serde_json::from_slice::<crate::error::ServiceException>(json_body(response)) {
            Ok(body) => crate::error::GetImageRecipePolicyError::new(crate::error::GetImageRecipePolicyErrorKind::ServiceException(body), generic),
            Err(e) => crate::error::GetImageRecipePolicyError::new(crate::error::GetImageRecipePolicyErrorKind::Unhandled(e.into()), generic),
        },
        "ServiceUnavailableException" => match serde_json::from_slice::<crate::error::ServiceUnavailableException>(json_body(response)) {
            Ok(body) => crate::error::GetImageRecipePolicyError::new(crate::error::GetImageRecipePolicyErrorKind::ServiceUnavailableException(body), generic),
            Err(e) => crate::error::GetImageRecipePolicyError::new(crate::error::GetImageRecipePolicyErrorKind::Unhandled(e.into()), generic),
        },
        "ResourceNotFoundException" => match serde_json::from_slice::<crate::error::ResourceNotFoundException>(json_body(response)) {
            Ok(body) => crate::error::GetImageRecipePolicyError::new(crate::error::GetImageRecipePolicyErrorKind::ResourceNotFoundException(body), generic),
            Err(e) => crate::error::GetImageRecipePolicyError::new(crate::error::GetImageRecipePolicyErrorKind::Unhandled(e.into()), generic),
        },
        "InvalidRequestException" => match serde_json::from_slice::<crate::error::InvalidRequestException>(json_body(response)) {
            Ok(body) => crate::error::GetImageRecipePolicyError::new(crate::error::GetImageRecipePolicyErrorKind::InvalidRequestException(body), generic),
            Err(e) => crate::error::GetImageRecipePolicyError::new(crate::error::GetImageRecipePolicyErrorKind::Unhandled(e.into()), generic),
        },
        "ForbiddenException" => match serde_json::from_slice::<crate::error::ForbiddenException>(json_body(response)) {
            Ok(body) => crate::error::GetImageRecipePolicyError::new(crate::error::GetImageRecipePolicyErrorKind::ForbiddenException(body), generic),
            Err(e) => crate::error::GetImageRecipePolicyError::new(crate::error::GetImageRecipePolicyErrorKind::Unhandled(e.into()), generic),
        },
        "CallRateLimitExceededException" => match serde_json::from_slice::<crate::error::CallRateLimitExceededException>(json_body(response)) {
            Ok(body) => crate::error::GetImageRecipePolicyError::new(crate::error::GetImageRecipePolicyErrorKind::CallRateLimitExceededException(body), generic),
            Err(e) => crate::error::GetImageRecipePolicyError::new(crate::error::GetImageRecipePolicyErrorKind::Unhandled(e.into()), generic),
        },
        _ => crate::error::GetImageRecipePolicyError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_get_image_recipe_policy_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::GetImageRecipePolicyOutput, crate::error::GetImageRecipePolicyError> {
    serde_json::from_slice(json_body(response)).map_err(crate::error::GetImageRecipePolicyError::unhandled)
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_get_infrastructure_configuration_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::GetInfrastructureConfigurationOutput, crate::error::GetInfrastructureConfigurationError> {
    let generic = crate::json_errors::parse_generic_error(response)
        .map_err(crate::error::GetInfrastructureConfigurationError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code.to_string(),
        None => return Err(crate::error::GetInfrastructureConfigurationError::generic(generic)),
    };
    Err(match error_code.as_str() {
        "ServiceException" => match serde_json::from_slice::<crate::error::ServiceException>(json_body(response)) {
            Ok(body) => crate::error::GetInfrastructureConfigurationError::new(crate::error::GetInfrastructureConfigurationErrorKind::ServiceException(body), generic),
            Err(e) => crate::error::GetInfrastructureConfigurationError::new(crate::error::GetInfrastructureConfigurationErrorKind::Unhandled(e.into()), generic),
        },
        "ClientException" => match serde_json::from_slice::<crate::error::ClientException>(json_body(response)) {
            Ok(body) => crate::error::GetInfrastructureConfigurationError::new(crate::error::GetInfrastructureConfigurationErrorKind::ClientException(body), generic),
            Err(e) => crate::error::GetInfrastructureConfigurationError::new(crate::error::GetInfrastructureConfigurationErrorKind::Unhandled(e.into()), generic),
        },
        "ServiceUnavailableException" => match serde_json::from_slice::<crate::error::ServiceUnavailableException>(json_body(response)) {
            Ok(body) => crate::error::GetInfrastructureConfigurationError::new(crate::error::GetInfrastructureConfigurationErrorKind::ServiceUnavailableException(body), generic),
            Err(e) => crate::error::GetInfrastructureConfigurationError::new(crate::error::GetInfrastructureConfigurationErrorKind::Unhandled(e.into()), generic),
        },
        "InvalidRequestException" => match serde_json::from_slice::<crate::error::InvalidRequestException>(json_body(response)) {
            Ok(body) => crate::error::GetInfrastructureConfigurationError::new(crate::error::GetInfrastructureConfigurationErrorKind::InvalidRequestException(body), generic),
            Err(e) => crate::error::GetInfrastructureConfigurationError::new(crate::error::GetInfrastructureConfigurationErrorKind::Unhandled(e.into()), generic),
        },
        "ForbiddenException" => match serde_json::from_slice::<crate::error::ForbiddenException>(json_body(response)) {
            Ok(body) => crate::error::GetInfrastructureConfigurationError::new(crate::error::GetInfrastructureConfigurationErrorKind::ForbiddenException(body), generic),
            Err(e) => crate::error::GetInfrastructureConfigurationError::new(crate::error::GetInfrastructureConfigurationErrorKind::Unhandled(e.into()), generic),
        },
        "CallRateLimitExceededException" => match serde_json::from_slice::<crate::error::CallRateLimitExceededException>(json_body(response)) {
            Ok(body) => crate::error::GetInfrastructureConfigurationError::new(crate::error::GetInfrastructureConfigurationErrorKind::CallRateLimitExceededException(body), generic),
            Err(e) => crate::error::GetInfrastructureConfigurationError::new(crate::error::GetInfrastructureConfigurationErrorKind::Unhandled(e.into()), generic),
        },
        _ => crate::error::GetInfrastructureConfigurationError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_get_infrastructure_configuration_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::GetInfrastructureConfigurationOutput, crate::error::GetInfrastructureConfigurationError> {
    serde_json::from_slice(json_body(response)).map_err(crate::error::GetInfrastructureConfigurationError::unhandled)
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_import_component_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ImportComponentOutput, crate::error::ImportComponentError> {
    let generic = crate::json_errors::parse_generic_error(response)
        .map_err(crate::error::ImportComponentError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code.to_string(),
        None => return Err(crate::error::ImportComponentError::generic(generic)),
    };
    Err(match error_code.as_str() {
        "ServiceException" => match serde_json::from_slice::<crate::error::ServiceException>(json_body(response)) {
            Ok(body) => crate::error::ImportComponentError::new(crate::error::ImportComponentErrorKind::ServiceException(body), generic),
            Err(e) => crate::error::ImportComponentError::new(crate::error::ImportComponentErrorKind::Unhandled(e.into()), generic),
        },
        "ClientException" => match serde_json::from_slice::<crate::error::ClientException>(json_body(response)) {
            Ok(body) => crate::error::ImportComponentError::new(crate::error::ImportComponentErrorKind::ClientException(body), generic),
            Err(e) => crate::error::ImportComponentError::new(crate::error::ImportComponentErrorKind::Unhandled(e.into()), generic),
        },
        "ServiceUnavailableException" => match serde_json::from_slice::<crate::error::ServiceUnavailableException>(json_body(response)) {
            Ok(body) => crate::error::ImportComponentError::new(crate::error::ImportComponentErrorKind::ServiceUnavailableException(body), generic),
            Err(e) => crate::error::ImportComponentError::new(crate::error::ImportComponentErrorKind::Unhandled(e.into()), generic),
        },
        "InvalidRequestException" => match serde_json::from_slice::<crate::error::InvalidRequestException>(json_body(response)) {
            Ok(body) => crate::error::ImportComponentError::new(crate::error::ImportComponentErrorKind::InvalidRequestException(body), generic),
            Err(e) => crate::error::ImportComponentError::new(crate::error::ImportComponentErrorKind::Unhandled(e.into()), generic),
        },
        "ForbiddenException" => match serde_json::from_slice::<crate::error::ForbiddenException>(json_body(response)) {
            Ok(body) => crate::error::ImportComponentError::new(crate::error::ImportComponentErrorKind::ForbiddenException(body), generic),
            Err(e) => crate::error::ImportComponentError::new(crate::error::ImportComponentErrorKind::Unhandled(e.into()), generic),
        },
        "CallRateLimitExceededException" => match serde_json::from_slice::<crate::error::CallRateLimitExceededException>(json_body(response)) {
            Ok(body) => crate::error::ImportComponentError::new(crate::error::ImportComponentErrorKind::CallRateLimitExceededException(body), generic),
            Err(e) => crate::error::ImportComponentError::new(crate::error::ImportComponentErrorKind::Unhandled(e.into()), generic),
        },
        "IdempotentParameterMismatchException" => match serde_json::from_slice::<crate::error::IdempotentParameterMismatchException>(json_body(response)) {
            Ok(body) => crate::error::ImportComponentError::new(crate::error::ImportComponentErrorKind::IdempotentParameterMismatchException(body), generic),
            Err(e) => crate::error::ImportComponentError::new(crate::error::ImportComponentErrorKind::Unhandled(e.into()), generic),
        },
        "ResourceInUseException" => match serde_json::from_slice::<crate::error::ResourceInUseException>(json_body(response)) {
            Ok(body) => crate::error::ImportComponentError::new(crate::error::ImportComponentErrorKind::ResourceInUseException(body), generic),
            Err(e) => crate::error::ImportComponentError::new(crate::error::ImportComponentErrorKind::Unhandled(e.into()), generic),
        },
        "InvalidVersionNumberException" => match serde_json::from_slice::<crate::error::InvalidVersionNumberException>(json_body(response)) {
            Ok(body) => crate::error::ImportComponentError::new(crate::error::ImportComponentErrorKind::InvalidVersionNumberException(body), generic),
            Err(e) => crate::error::ImportComponentError::new(crate::error::ImportComponentErrorKind::Unhandled(e.into()), generic),
        },
        "InvalidParameterCombinationException" => match serde_json::from_slice::<crate::error::InvalidParameterCombinationException>(json_body(response)) {
            Ok(body) => crate::error::ImportComponentError::new(crate::error::ImportComponentErrorKind::InvalidParameterCombinationException(body), generic),
            Err(e) => crate::error::ImportComponentError::new(crate::error::ImportComponentErrorKind::Unhandled(e.into()), generic),
        },
        _ => crate::error::ImportComponentError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_import_component_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ImportComponentOutput, crate::error::ImportComponentError> {
    serde_json::from_slice(json_body(response)).map_err(crate::error::ImportComponentError::unhandled)
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_list_component_build_versions_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListComponentBuildVersionsOutput, crate::error::ListComponentBuildVersionsError> {
    let generic = crate::json_errors::parse_generic_error(response)
        .map_err(crate::error::ListComponentBuildVersionsError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code.to_string(),
        None => return Err(crate::error::ListComponentBuildVersionsError::generic(generic)),
    };
    Err(match error_code.as_str() {
        "ServiceException" => match serde_json::from_slice::<crate::error::ServiceException>(json_body(response)) {
            Ok(body) => crate::error::ListComponentBuildVersionsError::new(crate::error::ListComponentBuildVersionsErrorKind::ServiceException(body), generic),
            Err(e) => crate::error::ListComponentBuildVersionsError::new(crate::error::ListComponentBuildVersionsErrorKind::Unhandled(e.into()), generic),
        },
        "ClientException" => match serde_json::from_slice::<crate::error::ClientException>(json_body(response)) {
            Ok(body) => crate::error::ListComponentBuildVersionsError::new(crate::error::ListComponentBuildVersionsErrorKind::ClientException(body), generic),
            Err(e) => crate::error::ListComponentBuildVersionsError::new(crate::error::ListComponentBuildVersionsErrorKind::Unhandled(e.into()), generic),
        },
        "ServiceUnavailableException" => match serde_json::from_slice::<crate::error::ServiceUnavailableException>(json_body(response)) {
            Ok(body) => crate::error::ListComponentBuildVersionsError::new(crate::error::ListComponentBuildVersionsErrorKind::ServiceUnavailableException(body), generic),
            Err(e) => crate::error::ListComponentBuildVersionsError::new(crate::error::ListComponentBuildVersionsErrorKind::Unhandled(e.into()), generic),
        },
        "InvalidRequestException" => match serde_json::from_slice::<crate::error::InvalidRequestException>(json_body(response)) {
            Ok(body) => crate::error::ListComponentBuildVersionsError::new(crate::error::ListComponentBuildVersionsErrorKind::InvalidRequestException(body), generic),
            Err(e) => crate::error::ListComponentBuildVersionsError::new(crate::error::ListComponentBuildVersionsErrorKind::Unhandled(e.into()), generic),
        },
        "ForbiddenException" => match serde_json::from_slice::<crate::error::ForbiddenException>(json_body(response)) {
            Ok(body) => crate::error::ListComponentBuildVersionsError::new(crate::error::ListComponentBuildVersionsErrorKind::ForbiddenException(body), generic),
            Err(e) => crate::error::ListComponentBuildVersionsError::new(crate::error::ListComponentBuildVersionsErrorKind::Unhandled(e.into()), generic),
        },
        "CallRateLimitExceededException" => match serde_json::from_slice::<crate::error::CallRateLimitExceededException>(json_body(response)) {
            Ok(body) => crate::error::ListComponentBuildVersionsError::new(crate::error::ListComponentBuildVersionsErrorKind::CallRateLimitExceededException(body), generic),
            Err(e) => crate::error::ListComponentBuildVersionsError::new(crate::error::ListComponentBuildVersionsErrorKind::Unhandled(e.into()), generic),
        },
        "InvalidPaginationTokenException" => match serde_json::from_slice::<crate::error::InvalidPaginationTokenException>(json_body(response)) {
            Ok(body) => crate::error::ListComponentBuildVersionsError::new(crate::error::ListComponentBuildVersionsErrorKind::InvalidPaginationTokenException(body), generic),
            Err(e) => crate::error::ListComponentBuildVersionsError::new(crate::error::ListComponentBuildVersionsErrorKind::Unhandled(e.into()), generic),
        },
        _ => crate::error::ListComponentBuildVersionsError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_list_component_build_versions_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListComponentBuildVersionsOutput, crate::error::ListComponentBuildVersionsError> {
    serde_json::from_slice(json_body(response)).map_err(crate::error::ListComponentBuildVersionsError::unhandled)
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_list_components_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListComponentsOutput, crate::error::ListComponentsError> {
    let generic = crate::json_errors::parse_generic_error(response)
        .map_err(crate::error::ListComponentsError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code.to_string(),
        None => return Err(crate::error::ListComponentsError::generic(generic)),
    };
    Err(match error_code.as_str() {
        "ServiceException" => match serde_json::from_slice::<crate::error::ServiceException>(json_body(response)) {
            Ok(body) => crate::error::ListComponentsError::new(crate::error::ListComponentsErrorKind::ServiceException(body), generic),
            Err(e) => crate::error::ListComponentsError::new(crate::error::ListComponentsErrorKind::Unhandled(e.into()), generic),
        },
        "ClientException" => match serde_json::from_slice::<crate::error::ClientException>(json_body(response)) {
            Ok(body) => crate::error::ListComponentsError::new(crate::error::ListComponentsErrorKind::ClientException(body), generic),
            Err(e) => crate::error::ListComponentsError::new(crate::error::ListComponentsErrorKind::Unhandled(e.into()), generic),
        },
        "ServiceUnavailableException" => match serde_json::from_slice::<crate::error::ServiceUnavailableException>(json_body(response)) {
            Ok(body) => crate::error::ListComponentsError::new(crate::error::ListComponentsErrorKind::ServiceUnavailableException(body), generic),
            Err(e) => crate::error::ListComponentsError::new(crate::error::ListComponentsErrorKind::Unhandled(e.into()), generic),
        },
        "InvalidRequestException" => match serde_json::from_slice::<crate::error::InvalidRequestException>(json_body(response)) {
            Ok(body) => crate::error::ListComponentsError::new(crate::error::ListComponentsErrorKind::InvalidRequestException(body), generic),
            Err(e) => crate::error::ListComponentsError::new(crate::error::ListComponentsErrorKind::Unhandled(e.into()), generic),
        },
        "ForbiddenException" => match serde_json::from_slice::<crate::error::ForbiddenException>(json_body(response)) {
            Ok(body) => crate::error::ListComponentsError::new(crate::error::ListComponentsErrorKind::ForbiddenException(body), generic),
            Err(e) => crate::error::ListComponentsError::new(crate::error::ListComponentsErrorKind::Unhandled(e.into()), generic),
        },
        "CallRateLimitExceededException" => match serde_json::from_slice::<crate::error::CallRateLimitExceededException>(json_body(response)) {
            Ok(body) => crate::error::ListComponentsError::new(crate::error::ListComponentsErrorKind::CallRateLimitExceededException(body), generic),
            Err(e) => crate::error::ListComponentsError::new(crate::error::ListComponentsErrorKind::Unhandled(e.into()), generic),
        },
        "InvalidPaginationTokenException" => match serde_json::from_slice::<crate::error::InvalidPaginationTokenException>(json_body(response)) {
            Ok(body) => crate::error::ListComponentsError::new(crate::error::ListComponentsErrorKind::InvalidPaginationTokenException(body), generic),
            Err(e) => crate::error::ListComponentsError::new(crate::error::ListComponentsErrorKind::Unhandled(e.into()), generic),
        },
        _ => crate::error::ListComponentsError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_list_components_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListComponentsOutput, crate::error::ListComponentsError> {
    serde_json::from_slice(json_body(response)).map_err(crate::error::ListComponentsError::unhandled)
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_list_distribution_configurations_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListDistributionConfigurationsOutput, crate::error::ListDistributionConfigurationsError> {
    let generic = crate::json_errors::parse_generic_error(response)
        .map_err(crate::error::ListDistributionConfigurationsError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code.to_string(),
        None => return Err(crate::error::ListDistributionConfigurationsError::generic(generic)),
    };
    Err(match error_code.as_str() {
        "ServiceException" => match serde_json::from_slice::<crate::error::ServiceException>(json_body(response)) {
            Ok(body) => crate::error::ListDistributionConfigurationsError::new(crate::error::ListDistributionConfigurationsErrorKind::ServiceException(body), generic),
            Err(e) => crate::error::ListDistributionConfigurationsError::new(crate::error::ListDistributionConfigurationsErrorKind::Unhandled(e.into()), generic),
        },
        "ClientException" => match serde_json::from_slice::<crate::error::ClientException>(json_body(response)) {
            Ok(body) => crate::error::ListDistributionConfigurationsError::new(crate::error::ListDistributionConfigurationsErrorKind::ClientException(body), generic),
            Err(e) => crate::error::ListDistributionConfigurationsError::new(crate::error::ListDistributionConfigurationsErrorKind::Unhandled(e.into()), generic),
        },
        "ServiceUnavailableException" => match serde_json::from_slice::<crate::error::ServiceUnavailableException>(json_body(response)) {
            Ok(body) => crate::error::ListDistributionConfigurationsError::new(crate::error::ListDistributionConfigurationsErrorKind::ServiceUnavailableException(body), generic),
            Err(e) => crate::error::ListDistributionConfigurationsError::new(crate::error::ListDistributionConfigurationsErrorKind::Unhandled(e.into()), generic),
        },
        "InvalidRequestException" => match serde_json::from_slice::<crate::error::InvalidRequestException>(json_body(response)) {
            Ok(body) => crate::error::ListDistributionConfigurationsError::new(crate::error::ListDistributionConfigurationsErrorKind::InvalidRequestException(body), generic),
            Err(e) => crate::error::ListDistributionConfigurationsError::new(crate::error::ListDistributionConfigurationsErrorKind::Unhandled(e.into()), generic),
        },
        "ForbiddenException" => match serde_json::from_slice::<crate::error::ForbiddenException>(json_body(response)) {
            Ok(body) => crate::error::ListDistributionConfigurationsError::new(crate::error::ListDistributionConfigurationsErrorKind::ForbiddenException(body), generic),
            Err(e) => crate::error::ListDistributionConfigurationsError::new(crate::error::ListDistributionConfigurationsErrorKind::Unhandled(e.into()), generic),
        },
        "CallRateLimitExceededException" => match serde_json::from_slice::<crate::error::CallRateLimitExceededException>(json_body(response)) {
            Ok(body) => crate::error::ListDistributionConfigurationsError::new(crate::error::ListDistributionConfigurationsErrorKind::CallRateLimitExceededException(body), generic),
            Err(e) => crate::error::ListDistributionConfigurationsError::new(crate::error::ListDistributionConfigurationsErrorKind::Unhandled(e.into()), generic),
        },
        "InvalidPaginationTokenException" => match serde_json::from_slice::<crate::error::InvalidPaginationTokenException>(json_body(response)) {
            Ok(body) => crate::error::ListDistributionConfigurationsError::new(crate::error::ListDistributionConfigurationsErrorKind::InvalidPaginationTokenException(body), generic),
            Err(e) => crate::error::ListDistributionConfigurationsError::new(crate::error::ListDistributionConfigurationsErrorKind::Unhandled(e.into()), generic),
        },
        _ => crate::error::ListDistributionConfigurationsError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_list_distribution_configurations_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListDistributionConfigurationsOutput, crate::error::ListDistributionConfigurationsError> {
    serde_json::from_slice(json_body(response)).map_err(crate::error::ListDistributionConfigurationsError::unhandled)
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_list_image_build_versions_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListImageBuildVersionsOutput, crate::error::ListImageBuildVersionsError> {
    let generic = crate::json_errors::parse_generic_error(response)
        .map_err(crate::error::ListImageBuildVersionsError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code.to_string(),
        None => return Err(crate::error::ListImageBuildVersionsError::generic(generic)),
    };
    Err(match error_code.as_str() {
        "ServiceException" => match serde_json::from_slice::<crate::error::ServiceException>(json_body(response)) {
            Ok(body) => crate::error::ListImageBuildVersionsError::new(crate::error::ListImageBuildVersionsErrorKind::ServiceException(body), generic),
            Err(e) => crate::error::ListImageBuildVersionsError::new(crate::error::ListImageBuildVersionsErrorKind::Unhandled(e.into()), generic),
        },
        "ClientException" => match serde_json::from_slice::<crate::error::ClientException>(json_body(response)) {
            Ok(body) => crate::error::ListImageBuildVersionsError::new(crate::error::ListImageBuildVersionsErrorKind::ClientException(body), generic),
            Err(e) => crate::error::ListImageBuildVersionsError::new(crate::error::ListImageBuildVersionsErrorKind::Unhandled(e.into()), generic),
        },
        "ServiceUnavailableException" => match serde_json::from_slice::<crate::error::ServiceUnavailableException>(json_body(response)) {
            Ok(body) => crate::error::ListImageBuildVersionsError::new(crate::error::ListImageBuildVersionsErrorKind::ServiceUnavailableException(body), generic),
            Err(e) => crate::error::ListImageBuildVersionsError::new(crate::error::ListImageBuildVersionsErrorKind::Unhandled(e.into()), generic),
        },
        "InvalidRequestException" => match serde_json::from_slice::<crate::error::InvalidRequestException>(json_body(response)) {
            Ok(body) => crate::error::ListImageBuildVersionsError::new(crate::error::ListImageBuildVersionsErrorKind::InvalidRequestException(body), generic),
            Err(e) => crate::error::ListImageBuildVersionsError::new(crate::error::ListImageBuildVersionsErrorKind::Unhandled(e.into()), generic),
        },
        "ForbiddenException" => match serde_json::from_slice::<crate::error::ForbiddenException>(json_body(response)) {
            Ok(body) => crate::error::ListImageBuildVersionsError::new(crate::error::ListImageBuildVersionsErrorKind::ForbiddenException(body), generic),
            Err(e) => crate::error::ListImageBuildVersionsError::new(crate::error::ListImageBuildVersionsErrorKind::Unhandled(e.into()), generic),
        },
        "CallRateLimitExceededException" => match serde_json::from_slice::<crate::error::CallRateLimitExceededException>(json_body(response)) {
            Ok(body) => crate::error::ListImageBuildVersionsError::new(crate::error::ListImageBuildVersionsErrorKind::CallRateLimitExceededException(body), generic),
            Err(e) => crate::error::ListImageBuildVersionsError::new(crate::error::ListImageBuildVersionsErrorKind::Unhandled(e.into()), generic),
        },
        "InvalidPaginationTokenException" => match serde_json::from_slice::<crate::error::InvalidPaginationTokenException>(json_body(response)) {
            Ok(body) => crate::error::ListImageBuildVersionsError::new(crate::error::ListImageBuildVersionsErrorKind::InvalidPaginationTokenException(body), generic),
            Err(e) => crate::error::ListImageBuildVersionsError::new(crate::error::ListImageBuildVersionsErrorKind::Unhandled(e.into()), generic),
        },
        _ => crate::error::ListImageBuildVersionsError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_list_image_build_versions_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListImageBuildVersionsOutput, crate::error::ListImageBuildVersionsError> {
    serde_json::from_slice(json_body(response)).map_err(crate::error::ListImageBuildVersionsError::unhandled)
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_list_image_pipeline_images_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListImagePipelineImagesOutput, crate::error::ListImagePipelineImagesError> {
    let generic = crate::json_errors::parse_generic_error(response)
        .map_err(crate::error::ListImagePipelineImagesError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code.to_string(),
        None => return Err(crate::error::ListImagePipelineImagesError::generic(generic)),
    };
    Err(match error_code.as_str() {
        "ServiceException" => match serde_json::from_slice::<crate::error::ServiceException>(json_body(response)) {
            Ok(body) => crate::error::ListImagePipelineImagesError::new(crate::error::ListImagePipelineImagesErrorKind::ServiceException(body), generic),
            Err(e) => crate::error::ListImagePipelineImagesError::new(crate::error::ListImagePipelineImagesErrorKind::Unhandled(e.into()), generic),
        },
        "ClientException" => match serde_json::from_slice::<crate::error::ClientException>(json_body(response)) {
            Ok(body) => crate::error::ListImagePipelineImagesError::new(crate::error::ListImagePipelineImagesErrorKind::ClientException(body), generic),
            Err(e) => crate::error::ListImagePipelineImagesError::new(crate::error::ListImagePipelineImagesErrorKind::Unhandled(e.into()), generic),
        },
        "ServiceUnavailableException" => match serde_json::from_slice::<crate::error::ServiceUnavailableException>(json_body(response)) {
            Ok(body) => crate::error::ListImagePipelineImagesError::new(crate::error::ListImagePipelineImagesErrorKind::ServiceUnavailableException(body), generic),
            Err(e) => crate::error::ListImagePipelineImagesError::new(crate::error::ListImagePipelineImagesErrorKind::Unhandled(e.into()), generic),
        },
        "InvalidRequestException" => match serde_json::from_slice::<crate::error::InvalidRequestException>(json_body(response)) {
            Ok(body) => crate::error::ListImagePipelineImagesError::new(crate::error::ListImagePipelineImagesErrorKind::InvalidRequestException(body), generic),
            Err(e) => crate::error::ListImagePipelineImagesError::new(crate::error::ListImagePipelineImagesErrorKind::Unhandled(e.into()), generic),
        },
        "ForbiddenException" => match serde_json::from_slice::<crate::error::ForbiddenException>(json_body(response)) {
            Ok(body) => crate::error::ListImagePipelineImagesError::new(crate::error::ListImagePipelineImagesErrorKind::ForbiddenException(body), generic),
            Err(e) => crate::error::ListImagePipelineImagesError::new(crate::error::ListImagePipelineImagesErrorKind::Unhandled(e.into()), generic),
        },
        "CallRateLimitExceededException" => match serde_json::from_slice::<crate::error::CallRateLimitExceededException>(json_body(response)) {
            Ok(body) => crate::error::ListImagePipelineImagesError::new(crate::error::ListImagePipelineImagesErrorKind::CallRateLimitExceededException(body), generic),
            Err(e) => crate::error::ListImagePipelineImagesError::new(crate::error::ListImagePipelineImagesErrorKind::Unhandled(e.into()), generic),
        },
        "InvalidPaginationTokenException" => match serde_json::from_slice::<crate::error::InvalidPaginationTokenException>(json_body(response)) {
            Ok(body) => crate::error::ListImagePipelineImagesError::new(crate::error::ListImagePipelineImagesErrorKind::InvalidPaginationTokenException(body), generic),
            Err(e) => crate::error::ListImagePipelineImagesError::new(crate::error::ListImagePipelineImagesErrorKind::Unhandled(e.into()), generic),
        },
        "ResourceNotFoundException" => match serde_json::from_slice::<crate::error::ResourceNotFoundException>(json_body(response)) {
            Ok(body) => crate::error::ListImagePipelineImagesError::new(crate::error::ListImagePipelineImagesErrorKind::ResourceNotFoundException(body), generic),
            Err(e) => crate::error::ListImagePipelineImagesError::new(crate::error::ListImagePipelineImagesErrorKind::Unhandled(e.into()), generic),
        },
        _ => crate::error::ListImagePipelineImagesError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_list_image_pipeline_images_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListImagePipelineImagesOutput, crate::error::ListImagePipelineImagesError> {
    serde_json::from_slice(json_body(response)).map_err(crate::error::ListImagePipelineImagesError::unhandled)
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_list_image_pipelines_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListImagePipelinesOutput, crate::error::ListImagePipelinesError> {
    let generic = crate::json_errors::parse_generic_error(response)
        .map_err(crate::error::ListImagePipelinesError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code.to_string(),
        None => return Err(crate::error::ListImagePipelinesError::generic(generic)),
    };
    Err(match error_code.as_str() {
        "ServiceException" => match serde_json::from_slice::<crate::error::ServiceException>(json_body(response)) {
            Ok(body) => crate::error::ListImagePipelinesError::new(crate::error::ListImagePipelinesErrorKind::ServiceException(body), generic),
            Err(e) => crate::error::ListImagePipelinesError::new(crate::error::ListImagePipelinesErrorKind::Unhandled(e.into()), generic),
        },
        "ClientException" => match serde_json::from_slice::<crate::error::ClientException>(json_body(response)) {
            Ok(body) => crate::error::ListImagePipelinesError::new(crate::error::ListImagePipelinesErrorKind::ClientException(body), generic),
            Err(e) => crate::error::ListImagePipelinesError::new(crate::error::ListImagePipelinesErrorKind::Unhandled(e.into()), generic),
        },
        "ServiceUnavailableException" => match serde_json::from_slice::<crate::error::ServiceUnavailableException>(json_body(response)) {
            Ok(body) => crate::error::ListImagePipelinesError::new(crate::error::ListImagePipelinesErrorKind::ServiceUnavailableException(body), generic),
            Err(e) => crate::error::ListImagePipelinesError::new(crate::error::ListImagePipelinesErrorKind::Unhandled(e.into()), generic),
        },
        "InvalidRequestException" => match serde_json::from_slice::<crate::error::InvalidRequestException>(json_body(response)) {
            Ok(body) => crate::error::ListImagePipelinesError::new(crate::error::ListImagePipelinesErrorKind::InvalidRequestException(body), generic),
            Err(e) => crate::error::ListImagePipelinesError::new(crate::error::ListImagePipelinesErrorKind::Unhandled(e.into()), generic),
        },
        "ForbiddenException" => match serde_json::from_slice::<crate::error::ForbiddenException>(json_body(response)) {
            Ok(body) => crate::error::ListImagePipelinesError::new(crate::error::ListImagePipelinesErrorKind::ForbiddenException(body), generic),
            Err(e) => crate::error::ListImagePipelinesError::new(crate::error::ListImagePipelinesErrorKind::Unhandled(e.into()), generic),
        },
        "CallRateLimitExceededException" => match serde_json::from_slice::<crate::error::CallRateLimitExceededException>(json_body(response)) {
            Ok(body) => crate::error::ListImagePipelinesError::new(crate::error::ListImagePipelinesErrorKind::CallRateLimitExceededException(body), generic),
            Err(e) => crate::error::ListImagePipelinesError::new(crate::error::ListImagePipelinesErrorKind::Unhandled(e.into()), generic),
        },
        "InvalidPaginationTokenException" => match serde_json::from_slice::<crate::error::InvalidPaginationTokenException>(json_body(response)) {
            Ok(body) => crate::error::ListImagePipelinesError::new(crate::error::ListImagePipelinesErrorKind::InvalidPaginationTokenException(body), generic),
            Err(e) => crate::error::ListImagePipelinesError::new(crate::error::ListImagePipelinesErrorKind::Unhandled(e.into()), generic),
        },
        _ => crate::error::ListImagePipelinesError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_list_image_pipelines_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListImagePipelinesOutput, crate::error::ListImagePipelinesError> {
    serde_json::from_slice(json_body(response)).map_err(crate::error::ListImagePipelinesError::unhandled)
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_list_image_recipes_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListImageRecipesOutput, crate::error::ListImageRecipesError> {
    let generic = crate::json_errors::parse_generic_error(response)
        .map_err(crate::error::ListImageRecipesError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code.to_string(),
        None => return Err(crate::error::ListImageRecipesError::generic(generic)),
    };
    Err(match error_code.as_str() {
        "ServiceException" => match serde_json::from_slice::<crate::error::ServiceException>(json_body(response)) {
            Ok(body) => crate::error::ListImageRecipesError::new(crate::error::ListImageRecipesErrorKind::ServiceException(body), generic),
            Err(e) => crate::error::ListImageRecipesError::new(crate::error::ListImageRecipesErrorKind::Unhandled(e.into()), generic),
        },
        "ClientException" => match serde_json::from_slice::<crate::error::ClientException>(json_body(response)) {
            Ok(body) => crate::error::ListImageRecipesError::new(crate::error::ListImageRecipesErrorKind::ClientException(body), generic),
            Err(e) => crate::error::ListImageRecipesError::new(crate::error::ListImageRecipesErrorKind::Unhandled(e.into()), generic),
        },
        "ServiceUnavailableException" => match serde_json::from_slice::<crate::error::ServiceUnavailableException>(json_body(response)) {
            Ok(body) => crate::error::ListImageRecipesError::new(crate::error::ListImageRecipesErrorKind::ServiceUnavailableException(body), generic),
            Err(e) => crate::error::ListImageRecipesError::new(crate::error::ListImageRecipesErrorKind::Unhandled(e.into()), generic),
        },
        "InvalidRequestException" => match serde_json::from_slice::<crate::error::InvalidRequestException>(json_body(response)) {
            Ok(body) => crate::error::ListImageRecipesError::new(crate::error::ListImageRecipesErrorKind::InvalidRequestException(body), generic),
            Err(e) => crate::error::ListImageRecipesError::new(crate::error::ListImageRecipesErrorKind::Unhandled(e.into()), generic),
        },
        "ForbiddenException" => match serde_json::from_slice::<crate::error::ForbiddenException>(json_body(response)) {
            Ok(body) => crate::error::ListImageRecipesError::new(crate::error::ListImageRecipesErrorKind::ForbiddenException(body), generic),
            Err(e) => crate::error::ListImageRecipesError::new(crate::error::ListImageRecipesErrorKind::Unhandled(e.into()), generic),
        },
        "CallRateLimitExceededException" => match serde_json::from_slice::<crate::error::CallRateLimitExceededException>(json_body(response)) {
            Ok(body) => crate::error::ListImageRecipesError::new(crate::error::ListImageRecipesErrorKind::CallRateLimitExceededException(body), generic),
            Err(e) => crate::error::ListImageRecipesError::new(crate::error::ListImageRecipesErrorKind::Unhandled(e.into()), generic),
        },
        "InvalidPaginationTokenException" => match serde_json::from_slice::<crate::error::InvalidPaginationTokenException>(json_body(response)) {
            Ok(body) => crate::error::ListImageRecipesError::new(crate::error::ListImageRecipesErrorKind::InvalidPaginationTokenException(body), generic),
            Err(e) => crate::error::ListImageRecipesError::new(crate::error::ListImageRecipesErrorKind::Unhandled(e.into()), generic),
        },
        _ => crate::error::ListImageRecipesError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_list_image_recipes_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListImageRecipesOutput, crate::error::ListImageRecipesError> {
    serde_json::from_slice(json_body(response)).map_err(crate::error::ListImageRecipesError::unhandled)
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_list_images_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListImagesOutput, crate::error::ListImagesError> {
    let generic = crate::json_errors::parse_generic_error(response)
        .map_err(crate::error::ListImagesError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code.to_string(),
        None => return Err(crate::error::ListImagesError::generic(generic)),
    };
    Err(match error_code.as_str() {
        "ServiceException" => match serde_json::from_slice::<crate::error::ServiceException>(json_body(response)) {
            Ok(body) => crate::error::ListImagesError::new(crate::error::ListImagesErrorKind::ServiceException(body), generic),
            Err(e) => crate::error::ListImagesError::new(crate::error::ListImagesErrorKind::Unhandled(e.into()), generic),
        },
        "ClientException" => match serde_json::from_slice::<crate::error::ClientException>(json_body(response)) {
            Ok(body) => crate::error::ListImagesError::new(crate::error::ListImagesErrorKind::ClientException(body), generic),
            Err(e) => crate::error::ListImagesError::new(crate::error::ListImagesErrorKind::Unhandled(e.into()), generic),
        },
        "ServiceUnavailableException" => match serde_json::from_slice::<crate::error::ServiceUnavailableException>(json_body(response)) {
            Ok(body) => crate::error::ListImagesError::new(crate::error::ListImagesErrorKind::ServiceUnavailableException(body), generic),
            Err(e) => crate::error::ListImagesError::new(crate::error::ListImagesErrorKind::Unhandled(e.into()), generic),
        },
        "InvalidRequestException" => match serde_json::from_slice::<crate::error::InvalidRequestException>(json_body(response)) {
            Ok(body) => crate::error::ListImagesError::new(crate::error::ListImagesErrorKind::InvalidRequestException(body), generic),
            Err(e) => crate::error::ListImagesError::new(crate::error::ListImagesErrorKind::Unhandled(e.into()), generic),
        },
        "ForbiddenException" => match serde_json::from_slice::<crate::error::ForbiddenException>(json_body(response)) {
            Ok(body) => crate::error::ListImagesError::new(crate::error::ListImagesErrorKind::ForbiddenException(body), generic),
            Err(e) => crate::error::ListImagesError::new(crate::error::ListImagesErrorKind::Unhandled(e.into()), generic),
        },
        "CallRateLimitExceededException" => match serde_json::from_slice::<crate::error::CallRateLimitExceededException>(json_body(response)) {
            Ok(body) => crate::error::ListImagesError::new(crate::error::ListImagesErrorKind::CallRateLimitExceededException(body), generic),
            Err(e) => crate::error::ListImagesError::new(crate::error::ListImagesErrorKind::Unhandled(e.into()), generic),
        },
        "InvalidPaginationTokenException" => match serde_json::from_slice::<crate::error::InvalidPaginationTokenException>(json_body(response)) {
            Ok(body) => crate::error::ListImagesError::new(crate::error::ListImagesErrorKind::InvalidPaginationTokenException(body), generic),
            Err(e) => crate::error::ListImagesError::new(crate::error::ListImagesErrorKind::Unhandled(e.into()), generic),
        },
        _ => crate::error::ListImagesError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_list_images_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListImagesOutput, crate::error::ListImagesError> {
    serde_json::from_slice(json_body(response)).map_err(crate::error::ListImagesError::unhandled)
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_list_infrastructure_configurations_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListInfrastructureConfigurationsOutput, crate::error::ListInfrastructureConfigurationsError> {
    let generic = crate::json_errors::parse_generic_error(response)
        .map_err(crate::error::ListInfrastructureConfigurationsError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code.to_string(),
        None => return Err(crate::error::ListInfrastructureConfigurationsError::generic(generic)),
    };
    Err(match error_code.as_str() {
        "ServiceException" => match serde_json::from_slice::<crate::error::ServiceException>(json_body(response)) {
            Ok(body) => crate::error::ListInfrastructureConfigurationsError::new(crate::error::ListInfrastructureConfigurationsErrorKind::ServiceException(body), generic),
            Err(e) => crate::error::ListInfrastructureConfigurationsError::new(crate::error::ListInfrastructureConfigurationsErrorKind::Unhandled(e.into()), generic),
        },
        "ClientException" => match serde_json::from_slice::<crate::error::ClientException>(json_body(response)) {
            Ok(body) => crate::error::ListInfrastructureConfigurationsError::new(crate::error::ListInfrastructureConfigurationsErrorKind::ClientException(body), generic),
            Err(e) => crate::error::ListInfrastructureConfigurationsError::new(crate::error::ListInfrastructureConfigurationsErrorKind::Unhandled(e.into()), generic),
        },
        "ServiceUnavailableException" => match serde_json::from_slice::<crate::error::ServiceUnavailableException>(json_body(response)) {
            Ok(body) => crate::error::ListInfrastructureConfigurationsError::new(crate::error::ListInfrastructureConfigurationsErrorKind::ServiceUnavailableException(body), generic),
            Err(e) => crate::error::ListInfrastructureConfigurationsError::new(crate::error::ListInfrastructureConfigurationsErrorKind::Unhandled(e.into()), generic),
        },
        "InvalidRequestException" => match serde_json::from_slice::<crate::error::InvalidRequestException>(json_body(response)) {
            Ok(body) => crate::error::ListInfrastructureConfigurationsError::new(crate::error::ListInfrastructureConfigurationsErrorKind::InvalidRequestException(body), generic),
            Err(e) => crate::error::ListInfrastructureConfigurationsError::new(crate::error::ListInfrastructureConfigurationsErrorKind::Unhandled(e.into()), generic),
        },
        "ForbiddenException" => match serde_json::from_slice::<crate::error::ForbiddenException>(json_body(response)) {
            Ok(body) => crate::error::ListInfrastructureConfigurationsError::new(crate::error::ListInfrastructureConfigurationsErrorKind::ForbiddenException(body), generic),
            Err(e) => crate::error::ListInfrastructureConfigurationsError::new(crate::error::ListInfrastructureConfigurationsErrorKind::Unhandled(e.into()), generic),
        },
        "CallRateLimitExceededException" => match serde_json::from_slice::<crate::error::CallRateLimitExceededException>(json_body(response)) {
            Ok(body) => crate::error::ListInfrastructureConfigurationsError::new(crate::error::ListInfrastructureConfigurationsErrorKind::CallRateLimitExceededException(body), generic),
            Err(e) => crate::error::ListInfrastructureConfigurationsError::new(crate::error::ListInfrastructureConfigurationsErrorKind::Unhandled(e.into()), generic),
        },
        "InvalidPaginationTokenException" => match serde_json::from_slice::<crate::error::InvalidPaginationTokenException>(json_body(response)) {
            Ok(body) => crate::error::ListInfrastructureConfigurationsError::new(crate::error::ListInfrastructureConfigurationsErrorKind::InvalidPaginationTokenException(body), generic),
            Err(e) => crate::error::ListInfrastructureConfigurationsError::new(crate::error::ListInfrastructureConfigurationsErrorKind::Unhandled(e.into()), generic),
        },
        _ => crate::error::ListInfrastructureConfigurationsError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_list_infrastructure_configurations_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListInfrastructureConfigurationsOutput, crate::error::ListInfrastructureConfigurationsError> {
    serde_json::from_slice(json_body(response)).map_err(crate::error::ListInfrastructureConfigurationsError::unhandled)
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_list_tags_for_resource_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListTagsForResourceOutput, crate::error::ListTagsForResourceError> {
    let generic = crate::json_errors::parse_generic_error(response)
        .map_err(crate::error::ListTagsForResourceError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code.to_string(),
        None => return Err(crate::error::ListTagsForResourceError::generic(generic)),
    };
    Err(match error_code.as_str() {
        "ServiceException" => match serde_json::from_slice::<crate::error::ServiceException>(json_body(response)) {
            Ok(body) => crate::error::ListTagsForResourceError::new(crate::error::ListTagsForResourceErrorKind::ServiceException(body), generic),
            Err(e) => crate::error::ListTagsForResourceError::new(crate::error::ListTagsForResourceErrorKind::Unhandled(e.into()), generic),
        },
        "InvalidParameterException" => match serde_json::from_slice::<crate::error::InvalidParameterException>(json_body(response)) {
            Ok(body) => crate::error::ListTagsForResourceError::new(crate::error::ListTagsForResourceErrorKind::InvalidParameterException(body), generic),
            Err(e) => crate::error::ListTagsForResourceError::new(crate::error::ListTagsForResourceErrorKind::Unhandled(e.into()), generic),
        },
        "ResourceNotFoundException" => match serde_json::from_slice::<crate::error::ResourceNotFoundException>(json_body(response)) {
            Ok(body) => crate::error::ListTagsForResourceError::new(crate::error::ListTagsForResourceErrorKind::ResourceNotFoundException(body), generic),
            Err(e) => crate::error::ListTagsForResourceError::new(crate::error::ListTagsForResourceErrorKind::Unhandled(e.into()), generic),
        },
        _ => crate::error::ListTagsForResourceError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_list_tags_for_resource_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListTagsForResourceOutput, crate::error::ListTagsForResourceError> {
    serde_json::from_slice(json_body(response)).map_err(crate::error::ListTagsForResourceError::unhandled)
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_put_component_policy_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::PutComponentPolicyOutput, crate::error::PutComponentPolicyError> {
    let generic = crate::json_errors::parse_generic_error(response)
        .map_err(crate::error::PutComponentPolicyError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code.to_string(),
        None => return Err(crate::error::PutComponentPolicyError::generic(generic)),
    };
    Err(match error_code.as_str() {
        "ServiceException" => match serde_json::from_slice::<crate::error::ServiceException>(json_body(response)) {
            Ok(body) => crate::error::PutComponentPolicyError::new(crate::error::PutComponentPolicyErrorKind::ServiceException(body), generic),
            Err(e) => crate::error::PutComponentPolicyError::new(crate::error::PutComponentPolicyErrorKind::Unhandled(e.into()), generic),
        },
        "ServiceUnavailableException" => match serde_json::from_slice::<crate::error::ServiceUnavailableException>(json_body(response)) {
            Ok(body) => crate::error::PutComponentPolicyError::new(crate::error::PutComponentPolicyErrorKind::ServiceUnavailableException(body), generic),
            Err(e) => crate::error::PutComponentPolicyError::new(crate::error::PutComponentPolicyErrorKind::Unhandled(e.into()), generic),
        },
        "InvalidParameterValueException" => match serde_json::from_slice::<crate::error::InvalidParameterValueException>(json_body(response)) {
            Ok(body) => crate::error::PutComponentPolicyError::new(crate::error::PutComponentPolicyErrorKind::InvalidParameterValueException(body), generic),
            Err(e) => crate::error::PutComponentPolicyError::new(crate::error::PutComponentPolicyErrorKind::Unhandled(e.into()), generic),
        },
        "ResourceNotFoundException" => match serde_json::from_slice::<crate::error::ResourceNotFoundException>(json_body(response)) {
            Ok(body) => crate::error::PutComponentPolicyError::new(crate::error::PutComponentPolicyErrorKind::ResourceNotFoundException(body), generic),
            Err(e) => crate::error::PutComponentPolicyError::new(crate::error::PutComponentPolicyErrorKind::Unhandled(e.into()), generic),
        },
        "InvalidRequestException" => match serde_json::from_slice::<crate::error::InvalidRequestException>(json_body(response)) {
            Ok(body) => crate::error::PutComponentPolicyError::new(crate::error::PutComponentPolicyErrorKind::InvalidRequestException(body), generic),
            Err(e) => crate::error::PutComponentPolicyError::new(crate::error::PutComponentPolicyErrorKind::Unhandled(e.into()), generic),
        },
        "ForbiddenException" => match serde_json::from_slice::<crate::error::ForbiddenException>(json_body(response)) {
            Ok(body) => crate::error::PutComponentPolicyError::new(crate::error::PutComponentPolicyErrorKind::ForbiddenException(body), generic),
            Err(e) => crate::error::PutComponentPolicyError::new(crate::error::PutComponentPolicyErrorKind::Unhandled(e.into()), generic),
        },
        "CallRateLimitExceededException" => match serde_json::from_slice::<crate::error::CallRateLimitExceededException>(json_body(response)) {
            Ok(body) => crate::error::PutComponentPolicyError::new(crate::error::PutComponentPolicyErrorKind::CallRateLimitExceededException(body), generic),
            Err(e) => crate::error::PutComponentPolicyError::new(crate::error::PutComponentPolicyErrorKind::Unhandled(e.into()), generic),
        },
        _ => crate::error::PutComponentPolicyError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_put_component_policy_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::PutComponentPolicyOutput, crate::error::PutComponentPolicyError> {
    serde_json::from_slice(json_body(response)).map_err(crate::error::PutComponentPolicyError::unhandled)
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_put_image_policy_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::PutImagePolicyOutput, crate::error::PutImagePolicyError> {
    let generic = crate::json_errors::parse_generic_error(response)
        .map_err(crate::error::PutImagePolicyError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code.to_string(),
        None => return Err(crate::error::PutImagePolicyError::generic(generic)),
    };
    Err(match error_code.as_str() {
        "ServiceException" => match serde_json::from_slice::<crate::error::ServiceException>(json_body(response)) {
            Ok(body) => crate::error::PutImagePolicyError::new(crate::error::PutImagePolicyErrorKind::ServiceException(body), generic),
            Err(e) => crate::error::PutImagePolicyError::new(crate::error::PutImagePolicyErrorKind::Unhandled(e.into()), generic),
        },
        "ServiceUnavailableException" => match serde_json::from_slice::<crate::error::ServiceUnavailableException>(json_body(response)) {
            Ok(body) => crate::error::PutImagePolicyError::new(crate::error::PutImagePolicyErrorKind::ServiceUnavailableException(body), generic),
            Err(e) => crate::error::PutImagePolicyError::new(crate::error::PutImagePolicyErrorKind::Unhandled(e.into()), generic),
        },
        "InvalidParameterValueException" => match serde_json::from_slice::<crate::error::InvalidParameterValueException>(json_body(response)) {
            Ok(body) => crate::error::PutImagePolicyError::new(crate::error::PutImagePolicyErrorKind::InvalidParameterValueException(body), generic),
            Err(e) => crate::error::PutImagePolicyError::new(crate::error::PutImagePolicyErrorKind::Unhandled(e.into()), generic),
        },
        "ResourceNotFoundException" => match serde_json::from_slice::<crate::error::ResourceNotFoundException>(json_body(response)) {
            Ok(body) => crate::error::PutImagePolicyError::new(crate::error::PutImagePolicyErrorKind::ResourceNotFoundException(body), generic),
            Err(e) => crate::error::PutImagePolicyError::new(crate::error::PutImagePolicyErrorKind::Unhandled(e.into()), generic),
        },
        "InvalidRequestException" => match serde_json::from_slice::<crate::error::InvalidRequestException>(json_body(response)) {
            Ok(body) => crate::error::PutImagePolicyError::new(crate::error::PutImagePolicyErrorKind::InvalidRequestException(body), generic),
            Err(e) => crate::error::PutImagePolicyError::new(crate::error::PutImagePolicyErrorKind::Unhandled(e.into()), generic),
        },
        "ForbiddenException" => match serde_json::from_slice::<crate::error::ForbiddenException>(json_body(response)) {
            Ok(body) => crate::error::PutImagePolicyError::new(crate::error::PutImagePolicyErrorKind::ForbiddenException(body), generic),
            Err(e) => crate::error::PutImagePolicyError::new(crate::error::PutImagePolicyErrorKind::Unhandled(e.into()), generic),
        },
        "CallRateLimitExceededException" => match serde_json::from_slice::<crate::error::CallRateLimitExceededException>(json_body(response)) {
            Ok(body) => crate::error::PutImagePolicyError::new(crate::error::PutImagePolicyErrorKind::CallRateLimitExceededException(body), generic),
            Err(e) => crate::error::PutImagePolicyError::new(crate::error::PutImagePolicyErrorKind::Unhandled(e.into()), generic),
        },
        _ => crate::error::PutImagePolicyError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_put_image_policy_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::PutImagePolicyOutput, crate::error::PutImagePolicyError> {
    serde_json::from_slice(json_body(response)).map_err(crate::error::PutImagePolicyError::unhandled)
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_put_image_recipe_policy_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::PutImageRecipePolicyOutput, crate::error::PutImageRecipePolicyError> {
    let generic = crate::json_errors::parse_generic_error(response)
        .map_err(crate::error::PutImageRecipePolicyError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code.to_string(),
        None => return Err(crate::error::PutImageRecipePolicyError::generic(generic)),
    };
    Err(match error_code.as_str() {
        "ServiceException" => match serde_json::from_slice::<crate::error::ServiceException>(json_body(response)) {
            Ok(body) => crate::error::PutImageRecipePolicyError::new(crate::error::PutImageRecipePolicyErrorKind::ServiceException(body), generic),
            Err(e) => crate::error::PutImageRecipePolicyError::new(crate::error::PutImageRecipePolicyErrorKind::Unhandled(e.into()), generic),
        },
        "ServiceUnavailableException" => match serde_json::from_slice::<crate::error::ServiceUnavailableException>(json_body(response)) {
            Ok(body) => crate::error::PutImageRecipePolicyError::new(crate::error::PutImageRecipePolicyErrorKind::ServiceUnavailableException(body), generic),
            Err(e) => crate::error::PutImageRecipePolicyError::new(crate::error::PutImageRecipePolicyErrorKind::Unhandled(e.into()), generic),
        },
        "InvalidParameterValueException" => match serde_json::from_slice::<crate::error::InvalidParameterValueException>(json_body(response)) {
            Ok(body) => crate::error::PutImageRecipePolicyError::new(crate::error::PutImageRecipePolicyErrorKind::InvalidParameterValueException(body), generic),
            Err(e) => crate::error::PutImageRecipePolicyError::new(crate::error::PutImageRecipePolicyErrorKind::Unhandled(e.into()), generic),
        },
        "ResourceNotFoundException" => match serde_json::from_slice::<crate::error::ResourceNotFoundException>(json_body(response)) {
            Ok(body) => crate::error::PutImageRecipePolicyError::new(crate::error::PutImageRecipePolicyErrorKind::ResourceNotFoundException(body), generic),
            Err(e) => crate::error::PutImageRecipePolicyError::new(crate::error::PutImageRecipePolicyErrorKind::Unhandled(e.into()), generic),
        },
        "InvalidRequestException" => match serde_json::from_slice::<crate::error::InvalidRequestException>(json_body(response)) {
            Ok(body) => crate::error::PutImageRecipePolicyError::new(crate::error::PutImageRecipePolicyErrorKind::InvalidRequestException(body), generic),
            Err(e) => crate::error::PutImageRecipePolicyError::new(crate::error::PutImageRecipePolicyErrorKind::Unhandled(e.into()), generic),
        },
        "ForbiddenException" => match serde_json::from_slice::<crate::error::ForbiddenException>(json_body(response)) {
            Ok(body) => crate::error::PutImageRecipePolicyError::new(crate::error::PutImageRecipePolicyErrorKind::ForbiddenException(body), generic),
            Err(e) => crate::error::PutImageRecipePolicyError::new(crate::error::PutImageRecipePolicyErrorKind::Unhandled(e.into()), generic),
        },
        "CallRateLimitExceededException" => match serde_json::from_slice::<crate::error::CallRateLimitExceededException>(json_body(response)) {
            Ok(body) => crate::error::PutImageRecipePolicyError::new(crate::error::PutImageRecipePolicyErrorKind::CallRateLimitExceededException(body), generic),
            Err(e) => crate::error::PutImageRecipePolicyError::new(crate::error::PutImageRecipePolicyErrorKind::Unhandled(e.into()), generic),
        },
        _ => crate::error::PutImageRecipePolicyError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_put_image_recipe_policy_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::PutImageRecipePolicyOutput, crate::error::PutImageRecipePolicyError> {
    serde_json::from_slice(json_body(response)).map_err(crate::error::PutImageRecipePolicyError::unhandled)
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_start_image_pipeline_execution_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::StartImagePipelineExecutionOutput, crate::error::StartImagePipelineExecutionError> {
    let generic = crate::json_errors::parse_generic_error(response)
        .map_err(crate::error::StartImagePipelineExecutionError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code.to_string(),
        None => return Err(crate::error::StartImagePipelineExecutionError::generic(generic)),
    };
    Err(match error_code.as_str() {
        "ServiceException" => match serde_json::from_slice::<crate::error::ServiceException>(json_body(response)) {
            Ok(body) => crate::error::StartImagePipelineExecutionError::new(crate::error::StartImagePipelineExecutionErrorKind::ServiceException(body), generic),
            Err(e) => crate::error::StartImagePipelineExecutionError::new(crate::error::StartImagePipelineExecutionErrorKind::Unhandled(e.into()), generic),
        },
        "ClientException" => match serde_json::from_slice::<crate::error::ClientException>(json_body(response)) {
            Ok(body) => crate::error::StartImagePipelineExecutionError::new(crate::error::StartImagePipelineExecutionErrorKind::ClientException(body), generic),
            Err(e) => crate::error::StartImagePipelineExecutionError::new(crate::error::StartImagePipelineExecutionErrorKind::Unhandled(e.into()), generic),
        },
        "ServiceUnavailableException" => match serde_json::from_slice::<crate::error::ServiceUnavailableException>(json_body(response)) {
            Ok(body) => crate::error::StartImagePipelineExecutionError::new(crate::error::StartImagePipelineExecutionErrorKind::ServiceUnavailableException(body), generic),
            Err(e) => crate::error::StartImagePipelineExecutionError::new(crate::error::StartImagePipelineExecutionErrorKind::Unhandled(e.into()), generic),
        },
        "InvalidRequestException" => match serde_json::from_slice::<crate::error::InvalidRequestException>(json_body(response)) {
            Ok(body) => crate::error::StartImagePipelineExecutionError::new(crate::error::StartImagePipelineExecutionErrorKind::InvalidRequestException(body), generic),
            Err(e) => crate::error::StartImagePipelineExecutionError::new(crate::error::StartImagePipelineExecutionErrorKind::Unhandled(e.into()), generic),
        },
        "ForbiddenException" => match serde_json::from_slice::<crate::error::ForbiddenException>(json_body(response)) {
            Ok(body) => crate::error::StartImagePipelineExecutionError::new(crate::error::StartImagePipelineExecutionErrorKind::ForbiddenException(body), generic),
            Err(e) => crate::error::StartImagePipelineExecutionError::new(crate::error::StartImagePipelineExecutionErrorKind::Unhandled(e.into()), generic),
        },
        "CallRateLimitExceededException" => match serde_json::from_slice::<crate::error::CallRateLimitExceededException>(json_body(response)) {
            Ok(body) => crate::error::StartImagePipelineExecutionError::new(crate::error::StartImagePipelineExecutionErrorKind::CallRateLimitExceededException(body), generic),
            Err(e) => crate::error::StartImagePipelineExecutionError::new(crate::error::StartImagePipelineExecutionErrorKind::Unhandled(e.into()), generic),
        },
        "ResourceNotFoundException" => match serde_json::from_slice::<crate::error::ResourceNotFoundException>(json_body(response)) {
            Ok(body) => crate::error::StartImagePipelineExecutionError::new(crate::error::StartImagePipelineExecutionErrorKind::ResourceNotFoundException(body), generic),
            Err(e) => crate::error::StartImagePipelineExecutionError::new(crate::error::StartImagePipelineExecutionErrorKind::Unhandled(e.into()), generic),
        },
        "IdempotentParameterMismatchException" => match serde_json::from_slice::<crate::error::IdempotentParameterMismatchException>(json_body(response)) {
            Ok(body) => crate::error::StartImagePipelineExecutionError::new(crate::error::StartImagePipelineExecutionErrorKind::IdempotentParameterMismatchException(body), generic),
            Err(e) => crate::error::StartImagePipelineExecutionError::new(crate::error::StartImagePipelineExecutionErrorKind::Unhandled(e.into()), generic),
        },
        "ResourceInUseException" => match serde_json::from_slice::<crate::error::ResourceInUseException>(json_body(response)) {
            Ok(body) => crate::error::StartImagePipelineExecutionError::new(crate::error::StartImagePipelineExecutionErrorKind::ResourceInUseException(body), generic),
            Err(e) => crate::error::StartImagePipelineExecutionError::new(crate::error::StartImagePipelineExecutionErrorKind::Unhandled(e.into()), generic),
        },
        _ => crate::error::StartImagePipelineExecutionError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_start_image_pipeline_execution_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::StartImagePipelineExecutionOutput, crate::error::StartImagePipelineExecutionError> {
    serde_json::from_slice(json_body(response)).map_err(crate::error::StartImagePipelineExecutionError::unhandled)
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_tag_resource_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::TagResourceOutput, crate::error::TagResourceError> {
    let generic = crate::json_errors::parse_generic_error(response)
        .map_err(crate::error::TagResourceError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code.to_string(),
        None => return Err(crate::error::TagResourceError::generic(generic)),
    };
    Err(match error_code.as_str() {
        "ServiceException" => match serde_json::from_slice::<crate::error::ServiceException>(json_body(response)) {
            Ok(body) => crate::error::TagResourceError::new(crate::error::TagResourceErrorKind::ServiceException(body), generic),
            Err(e) => crate::error::TagResourceError::new(crate::error::TagResourceErrorKind::Unhandled(e.into()), generic),
        },
        "InvalidParameterException" => match serde_json::from_slice::<crate::error::InvalidParameterException>(json_body(response)) {
            Ok(body) => crate::error::TagResourceError::new(crate::error::TagResourceErrorKind::InvalidParameterException(body), generic),
            Err(e) => crate::error::TagResourceError::new(crate::error::TagResourceErrorKind::Unhandled(e.into()), generic),
        },
        "ResourceNotFoundException" => match serde_json::from_slice::<crate::error::ResourceNotFoundException>(json_body(response)) {
            Ok(body) => crate::error::TagResourceError::new(crate::error::TagResourceErrorKind::ResourceNotFoundException(body), generic),
            Err(e) => crate::error::TagResourceError::new(crate::error::TagResourceErrorKind::Unhandled(e.into()), generic),
        },
        _ => crate::error::TagResourceError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_tag_resource_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::TagResourceOutput, crate::error::TagResourceError> {
    serde_json::from_slice(json_body(response)).map_err(crate::error::TagResourceError::unhandled)
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_untag_resource_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::UntagResourceOutput, crate::error::UntagResourceError> {
    let generic = crate::json_errors::parse_generic_error(response)
        .map_err(crate::error::UntagResourceError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code.to_string(),
        None => return Err(crate::error::UntagResourceError::generic(generic)),
    };
    Err(match error_code.as_str() {
        "ServiceException" => match serde_json::from_slice::<crate::error::ServiceException>(json_body(response)) {
            Ok(body) => crate::error::UntagResourceError::new(crate::error::UntagResourceErrorKind::ServiceException(body), generic),
            Err(e) => crate::error::UntagResourceError::new(crate::error::UntagResourceErrorKind::Unhandled(e.into()), generic),
        },
        "InvalidParameterException" => match serde_json::from_slice::<crate::error::InvalidParameterException>(json_body(response)) {
            Ok(body) => crate::error::UntagResourceError::new(crate::error::UntagResourceErrorKind::InvalidParameterException(body), generic),
            Err(e) => crate::error::UntagResourceError::new(crate::error::UntagResourceErrorKind::Unhandled(e.into()), generic),
        },
        "ResourceNotFoundException" => match serde_json::from_slice::<crate::error::ResourceNotFoundException>(json_body(response)) {
            Ok(body) => crate::error::UntagResourceError::new(crate::error::UntagResourceErrorKind::ResourceNotFoundException(body), generic),
            Err(e) => crate::error::UntagResourceError::new(crate::error::UntagResourceErrorKind::Unhandled(e.into()), generic),
        },
        _ => crate::error::UntagResourceError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_untag_resource_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::UntagResourceOutput, crate::error::UntagResourceError> {
    serde_json::from_slice(json_body(response)).map_err(crate::error::UntagResourceError::unhandled)
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_update_distribution_configuration_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::UpdateDistributionConfigurationOutput, crate::error::UpdateDistributionConfigurationError> {
    let generic = crate::json_errors::parse_generic_error(response)
        .map_err(crate::error::UpdateDistributionConfigurationError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code.to_string(),
        None => return Err(crate::error::UpdateDistributionConfigurationError::generic(generic)),
    };
    Err(match error_code.as_str() {
        "ServiceException" => match serde_json::from_slice::<crate::error::ServiceException>(json_body(response)) {
            Ok(body) => crate::error::UpdateDistributionConfigurationError::new(crate::error::UpdateDistributionConfigurationErrorKind::ServiceException(body), generic),
            Err(e) => crate::error::UpdateDistributionConfigurationError::new(crate::error::UpdateDistributionConfigurationErrorKind::Unhandled(e.into()), generic),
        },
        "ClientException" => match serde_json::from_slice::<crate::error::ClientException>(json_body(response)) {
            Ok(body) => crate::error::UpdateDistributionConfigurationError::new(crate::error::UpdateDistributionConfigurationErrorKind::ClientException(body), generic),
            Err(e) => crate::error::UpdateDistributionConfigurationError::new(crate::error::UpdateDistributionConfigurationErrorKind::Unhandled(e.into()), generic),
        },
        "ServiceUnavailableException" => match serde_json::from_slice::<crate::error::ServiceUnavailableException>(json_body(response)) {
            Ok(body) => crate::error::UpdateDistributionConfigurationError::new(crate::error::UpdateDistributionConfigurationErrorKind::ServiceUnavailableException(body), generic),
            Err(e) => crate::error::UpdateDistributionConfigurationError::new(crate::error::UpdateDistributionConfigurationErrorKind::Unhandled(e.into()), generic),
        },
        "InvalidRequestException" => match serde_json::from_slice::<crate::error::InvalidRequestException>(json_body(response)) {
            Ok(body) => crate::error::UpdateDistributionConfigurationError::new(crate::error::UpdateDistributionConfigurationErrorKind::InvalidRequestException(body), generic),
            Err(e) => crate::error::UpdateDistributionConfigurationError::new(crate::error::UpdateDistributionConfigurationErrorKind::Unhandled(e.into()), generic),
        },
        "ForbiddenException" => match serde_json::from_slice::<crate::error::ForbiddenException>(json_body(response)) {
            Ok(body) => crate::error::UpdateDistributionConfigurationError::new(crate::error::UpdateDistributionConfigurationErrorKind::ForbiddenException(body), generic),
            Err(e) => crate::error::UpdateDistributionConfigurationError::new(crate::error::UpdateDistributionConfigurationErrorKind::Unhandled(e.into()), generic),
        },
        "CallRateLimitExceededException" => match serde_json::from_slice::<crate::error::CallRateLimitExceededException>(json_body(response)) {
            Ok(body) => crate::error::UpdateDistributionConfigurationError::new(crate::error::UpdateDistributionConfigurationErrorKind::CallRateLimitExceededException(body), generic),
            Err(e) => crate::error::UpdateDistributionConfigurationError::new(crate::error::UpdateDistributionConfigurationErrorKind::Unhandled(e.into()), generic),
        },
        "IdempotentParameterMismatchException" => match serde_json::from_slice::<crate::error::IdempotentParameterMismatchException>(json_body(response)) {
            Ok(body) => crate::error::UpdateDistributionConfigurationError::new(crate::error::UpdateDistributionConfigurationErrorKind::IdempotentParameterMismatchException(body), generic),
            Err(e) => crate::error::UpdateDistributionConfigurationError::new(crate::error::UpdateDistributionConfigurationErrorKind::Unhandled(e.into()), generic),
        },
        "ResourceInUseException" => match serde_json::from_slice::<crate::error::ResourceInUseException>(json_body(response)) {
            Ok(body) => crate::error::UpdateDistributionConfigurationError::new(crate::error::UpdateDistributionConfigurationErrorKind::ResourceInUseException(body), generic),
            Err(e) => crate::error::UpdateDistributionConfigurationError::new(crate::error::UpdateDistributionConfigurationErrorKind::Unhandled(e.into()), generic),
        },
        "InvalidParameterCombinationException" => match serde_json::from_slice::<crate::error::InvalidParameterCombinationException>(json_body(response)) {
            Ok(body) => crate::error::UpdateDistributionConfigurationError::new(crate::error::UpdateDistributionConfigurationErrorKind::InvalidParameterCombinationException(body), generic),
            Err(e) => crate::error::UpdateDistributionConfigurationError::new(crate::error::UpdateDistributionConfigurationErrorKind::Unhandled(e.into()), generic),
        },
        _ => crate::error::UpdateDistributionConfigurationError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_update_distribution_configuration_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::UpdateDistributionConfigurationOutput, crate::error::UpdateDistributionConfigurationError> {
    serde_json::from_slice(json_body(response)).map_err(crate::error::UpdateDistributionConfigurationError::unhandled)
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_update_image_pipeline_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::UpdateImagePipelineOutput, crate::error::UpdateImagePipelineError> {
    let generic = crate::json_errors::parse_generic_error(response)
        .map_err(crate::error::UpdateImagePipelineError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code.to_string(),
        None => return Err(crate::error::UpdateImagePipelineError::generic(generic)),
    };
    Err(match error_code.as_str() {
        "ServiceException" => match serde_json::from_slice::<crate::error::ServiceException>(json_body(response)) {
            Ok(body) => crate::error::UpdateImagePipelineError::new(crate::error::UpdateImagePipelineErrorKind::ServiceException(body), generic),
            Err(e) => crate::error::UpdateImagePipelineError::new(crate::error::UpdateImagePipelineErrorKind::Unhandled(e.into()), generic),
        },
        "ClientException" => match serde_json::from_slice::<crate::error::ClientException>(json_body(response)) {
            Ok(body) => crate::error::UpdateImagePipelineError::new(crate::error::UpdateImagePipelineErrorKind::ClientException(body), generic),
            Err(e) => crate::error::UpdateImagePipelineError::new(crate::error::UpdateImagePipelineErrorKind::Unhandled(e.into()), generic),
        },
        "ServiceUnavailableException" => match serde_json::from_slice::<crate::error::ServiceUnavailableException>(json_body(response)) {
            Ok(body) => crate::error::UpdateImagePipelineError::new(crate::error::UpdateImagePipelineErrorKind::ServiceUnavailableException(body), generic),
            Err(e) => crate::error::UpdateImagePipelineError::new(crate::error::UpdateImagePipelineErrorKind::Unhandled(e.into()), generic),
        },
        "InvalidRequestException" => match serde_json::from_slice::<crate::error::InvalidRequestException>(json_body(response)) {
            Ok(body) => crate::error::UpdateImagePipelineError::new(crate::error::UpdateImagePipelineErrorKind::InvalidRequestException(body), generic),
            Err(e) => crate::error::UpdateImagePipelineError::new(crate::error::UpdateImagePipelineErrorKind::Unhandled(e.into()), generic),
        },
        "ForbiddenException" => match serde_json::from_slice::<crate::error::ForbiddenException>(json_body(response)) {
            Ok(body) => crate::error::UpdateImagePipelineError::new(crate::error::UpdateImagePipelineErrorKind::ForbiddenException(body), generic),
            Err(e) => crate::error::UpdateImagePipelineError::new(crate::error::UpdateImagePipelineErrorKind::Unhandled(e.into()), generic),
        },
        "CallRateLimitExceededException" => match serde_json::from_slice::<crate::error::CallRateLimitExceededException>(json_body(response)) {
            Ok(body) => crate::error::UpdateImagePipelineError::new(crate::error::UpdateImagePipelineErrorKind::CallRateLimitExceededException(body), generic),
            Err(e) => crate::error::UpdateImagePipelineError::new(crate::error::UpdateImagePipelineErrorKind::Unhandled(e.into()), generic),
        },
        "IdempotentParameterMismatchException" => match serde_json::from_slice::<crate::error::IdempotentParameterMismatchException>(json_body(response)) {
            Ok(body) => crate::error::UpdateImagePipelineError::new(crate::error::UpdateImagePipelineErrorKind::IdempotentParameterMismatchException(body), generic),
            Err(e) => crate::error::UpdateImagePipelineError::new(crate::error::UpdateImagePipelineErrorKind::Unhandled(e.into()), generic),
        },
        "ResourceInUseException" => match serde_json::from_slice::<crate::error::ResourceInUseException>(json_body(response)) {
            Ok(body) => crate::error::UpdateImagePipelineError::new(crate::error::UpdateImagePipelineErrorKind::ResourceInUseException(body), generic),
            Err(e) => crate::error::UpdateImagePipelineError::new(crate::error::UpdateImagePipelineErrorKind::Unhandled(e.into()), generic),
        },
        _ => crate::error::UpdateImagePipelineError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_update_image_pipeline_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::UpdateImagePipelineOutput, crate::error::UpdateImagePipelineError> {
    serde_json::from_slice(json_body(response)).map_err(crate::error::UpdateImagePipelineError::unhandled)
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_update_infrastructure_configuration_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::UpdateInfrastructureConfigurationOutput, crate::error::UpdateInfrastructureConfigurationError> {
    let generic = crate::json_errors::parse_generic_error(response)
        .map_err(crate::error::UpdateInfrastructureConfigurationError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code.to_string(),
        None => return Err(crate::error::UpdateInfrastructureConfigurationError::generic(generic)),
    };
    Err(match error_code.as_str() {
        "ServiceException" => match serde_json::from_slice::<crate::error::ServiceException>(json_body(response)) {
            Ok(body) => crate::error::UpdateInfrastructureConfigurationError::new(crate::error::UpdateInfrastructureConfigurationErrorKind::ServiceException(body), generic),
            Err(e) => crate::error::UpdateInfrastructureConfigurationError::new(crate::error::UpdateInfrastructureConfigurationErrorKind::Unhandled(e.into()), generic),
        },
        "ClientException" => match serde_json::from_slice::<crate::error::ClientException>(json_body(response)) {
            Ok(body) => crate::error::UpdateInfrastructureConfigurationError::new(crate::error::UpdateInfrastructureConfigurationErrorKind::ClientException(body), generic),
            Err(e) => crate::error::UpdateInfrastructureConfigurationError::new(crate::error::UpdateInfrastructureConfigurationErrorKind::Unhandled(e.into()), generic),
        },
        "ServiceUnavailableException" => match serde_json::from_slice::<crate::error::ServiceUnavailableException>(json_body(response)) {
            Ok(body) => crate::error::UpdateInfrastructureConfigurationError::new(crate::error::UpdateInfrastructureConfigurationErrorKind::ServiceUnavailableException(body), generic),
            Err(e) => crate::error::UpdateInfrastructureConfigurationError::new(crate::error::UpdateInfrastructureConfigurationErrorKind::Unhandled(e.into()), generic),
        },
        "InvalidRequestException" => match serde_json::from_slice::<crate::error::InvalidRequestException>(json_body(response)) {
            Ok(body) => crate::error::UpdateInfrastructureConfigurationError::new(crate::error::UpdateInfrastructureConfigurationErrorKind::InvalidRequestException(body), generic),
            Err(e) => crate::error::UpdateInfrastructureConfigurationError::new(crate::error::UpdateInfrastructureConfigurationErrorKind::Unhandled(e.into()), generic),
        },
        "ForbiddenException" => match serde_json::from_slice::<crate::error::ForbiddenException>(json_body(response)) {
            Ok(body) => crate::error::UpdateInfrastructureConfigurationError::new(crate::error::UpdateInfrastructureConfigurationErrorKind::ForbiddenException(body), generic),
            Err(e) => crate::error::UpdateInfrastructureConfigurationError::new(crate::error::UpdateInfrastructureConfigurationErrorKind::Unhandled(e.into()), generic),
        },
        "CallRateLimitExceededException" => match serde_json::from_slice::<crate::error::CallRateLimitExceededException>(json_body(response)) {
            Ok(body) => crate::error::UpdateInfrastructureConfigurationError::new(crate::error::UpdateInfrastructureConfigurationErrorKind::CallRateLimitExceededException(body), generic),
            Err(e) => crate::error::UpdateInfrastructureConfigurationError::new(crate::error::UpdateInfrastructureConfigurationErrorKind::Unhandled(e.into()), generic),
        },
        "IdempotentParameterMismatchException" => match serde_json::from_slice::<crate::error::IdempotentParameterMismatchException>(json_body(response)) {
            Ok(body) => crate::error::UpdateInfrastructureConfigurationError::new(crate::error::UpdateInfrastructureConfigurationErrorKind::IdempotentParameterMismatchException(body), generic),
            Err(e) => crate::error::UpdateInfrastructureConfigurationError::new(crate::error::UpdateInfrastructureConfigurationErrorKind::Unhandled(e.into()), generic),
        },
        "ResourceInUseException" => match serde_json::from_slice::<crate::error::ResourceInUseException>(json_body(response)) {
            Ok(body) => crate::error::UpdateInfrastructureConfigurationError::new(crate::error::UpdateInfrastructureConfigurationErrorKind::ResourceInUseException(body), generic),
            Err(e) => crate::error::UpdateInfrastructureConfigurationError::new(crate::error::UpdateInfrastructureConfigurationErrorKind::Unhandled(e.into()), generic),
        },
        _ => crate::error::UpdateInfrastructureConfigurationError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_update_infrastructure_configuration_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::UpdateInfrastructureConfigurationOutput, crate::error::UpdateInfrastructureConfigurationError> {
    serde_json::from_slice(json_body(response)).map_err(crate::error::UpdateInfrastructureConfigurationError::unhandled)
}
