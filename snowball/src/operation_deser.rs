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
pub fn parse_cancel_cluster_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::CancelClusterOutput, crate::error::CancelClusterError> {
    let generic = crate::json_errors::parse_generic_error(response)
        .map_err(crate::error::CancelClusterError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code.to_string(),
        None => return Err(crate::error::CancelClusterError::generic(generic)),
    };
    Err(match error_code.as_str() {
        "KMSRequestFailedException" => match serde_json::from_slice::<crate::error::KmsRequestFailedException>(json_body(response)) {
            Ok(body) => crate::error::CancelClusterError::new(crate::error::CancelClusterErrorKind::KmsRequestFailedException(body), generic),
            Err(e) => crate::error::CancelClusterError::new(crate::error::CancelClusterErrorKind::Unhandled(e.into()), generic),
        },
        "InvalidJobStateException" => match serde_json::from_slice::<crate::error::InvalidJobStateException>(json_body(response)) {
            Ok(body) => crate::error::CancelClusterError::new(crate::error::CancelClusterErrorKind::InvalidJobStateException(body), generic),
            Err(e) => crate::error::CancelClusterError::new(crate::error::CancelClusterErrorKind::Unhandled(e.into()), generic),
        },
        "InvalidResourceException" => match serde_json::from_slice::<crate::error::InvalidResourceException>(json_body(response)) {
            Ok(body) => crate::error::CancelClusterError::new(crate::error::CancelClusterErrorKind::InvalidResourceException(body), generic),
            Err(e) => crate::error::CancelClusterError::new(crate::error::CancelClusterErrorKind::Unhandled(e.into()), generic),
        },
        _ => crate::error::CancelClusterError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_cancel_cluster_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::CancelClusterOutput, crate::error::CancelClusterError> {
    serde_json::from_slice(json_body(response)).map_err(crate::error::CancelClusterError::unhandled)
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_cancel_job_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::CancelJobOutput, crate::error::CancelJobError> {
    let generic = crate::json_errors::parse_generic_error(response)
        .map_err(crate::error::CancelJobError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code.to_string(),
        None => return Err(crate::error::CancelJobError::generic(generic)),
    };
    Err(match error_code.as_str() {
        "InvalidResourceException" => match serde_json::from_slice::<crate::error::InvalidResourceException>(json_body(response)) {
            Ok(body) => crate::error::CancelJobError::new(crate::error::CancelJobErrorKind::InvalidResourceException(body), generic),
            Err(e) => crate::error::CancelJobError::new(crate::error::CancelJobErrorKind::Unhandled(e.into()), generic),
        },
        "InvalidJobStateException" => match serde_json::from_slice::<crate::error::InvalidJobStateException>(json_body(response)) {
            Ok(body) => crate::error::CancelJobError::new(crate::error::CancelJobErrorKind::InvalidJobStateException(body), generic),
            Err(e) => crate::error::CancelJobError::new(crate::error::CancelJobErrorKind::Unhandled(e.into()), generic),
        },
        "KMSRequestFailedException" => match serde_json::from_slice::<crate::error::KmsRequestFailedException>(json_body(response)) {
            Ok(body) => crate::error::CancelJobError::new(crate::error::CancelJobErrorKind::KmsRequestFailedException(body), generic),
            Err(e) => crate::error::CancelJobError::new(crate::error::CancelJobErrorKind::Unhandled(e.into()), generic),
        },
        _ => crate::error::CancelJobError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_cancel_job_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::CancelJobOutput, crate::error::CancelJobError> {
    serde_json::from_slice(json_body(response)).map_err(crate::error::CancelJobError::unhandled)
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_create_address_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::CreateAddressOutput, crate::error::CreateAddressError> {
    let generic = crate::json_errors::parse_generic_error(response)
        .map_err(crate::error::CreateAddressError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code.to_string(),
        None => return Err(crate::error::CreateAddressError::generic(generic)),
    };
    Err(match error_code.as_str() {
        "InvalidAddressException" => match serde_json::from_slice::<crate::error::InvalidAddressException>(json_body(response)) {
            Ok(body) => crate::error::CreateAddressError::new(crate::error::CreateAddressErrorKind::InvalidAddressException(body), generic),
            Err(e) => crate::error::CreateAddressError::new(crate::error::CreateAddressErrorKind::Unhandled(e.into()), generic),
        },
        "UnsupportedAddressException" => match serde_json::from_slice::<crate::error::UnsupportedAddressException>(json_body(response)) {
            Ok(body) => crate::error::CreateAddressError::new(crate::error::CreateAddressErrorKind::UnsupportedAddressException(body), generic),
            Err(e) => crate::error::CreateAddressError::new(crate::error::CreateAddressErrorKind::Unhandled(e.into()), generic),
        },
        _ => crate::error::CreateAddressError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_create_address_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::CreateAddressOutput, crate::error::CreateAddressError> {
    serde_json::from_slice(json_body(response)).map_err(crate::error::CreateAddressError::unhandled)
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_create_cluster_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::CreateClusterOutput, crate::error::CreateClusterError> {
    let generic = crate::json_errors::parse_generic_error(response)
        .map_err(crate::error::CreateClusterError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code.to_string(),
        None => return Err(crate::error::CreateClusterError::generic(generic)),
    };
    Err(match error_code.as_str() {
        "InvalidResourceException" => match serde_json::from_slice::<crate::error::InvalidResourceException>(json_body(response)) {
            Ok(body) => crate::error::CreateClusterError::new(crate::error::CreateClusterErrorKind::InvalidResourceException(body), generic),
            Err(e) => crate::error::CreateClusterError::new(crate::error::CreateClusterErrorKind::Unhandled(e.into()), generic),
        },
        "KMSRequestFailedException" => match serde_json::from_slice::<crate::error::KmsRequestFailedException>(json_body(response)) {
            Ok(body) => crate::error::CreateClusterError::new(crate::error::CreateClusterErrorKind::KmsRequestFailedException(body), generic),
            Err(e) => crate::error::CreateClusterError::new(crate::error::CreateClusterErrorKind::Unhandled(e.into()), generic),
        },
        "InvalidInputCombinationException" => match serde_json::from_slice::<crate::error::InvalidInputCombinationException>(json_body(response)) {
            Ok(body) => crate::error::CreateClusterError::new(crate::error::CreateClusterErrorKind::InvalidInputCombinationException(body), generic),
            Err(e) => crate::error::CreateClusterError::new(crate::error::CreateClusterErrorKind::Unhandled(e.into()), generic),
        },
        "Ec2RequestFailedException" => match serde_json::from_slice::<crate::error::Ec2RequestFailedException>(json_body(response)) {
            Ok(body) => crate::error::CreateClusterError::new(crate::error::CreateClusterErrorKind::Ec2RequestFailedException(body), generic),
            Err(e) => crate::error::CreateClusterError::new(crate::error::CreateClusterErrorKind::Unhandled(e.into()), generic),
        },
        _ => crate::error::CreateClusterError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_create_cluster_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::CreateClusterOutput, crate::error::CreateClusterError> {
    serde_json::from_slice(json_body(response)).map_err(crate::error::CreateClusterError::unhandled)
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_create_job_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::CreateJobOutput, crate::error::CreateJobError> {
    let generic = crate::json_errors::parse_generic_error(response)
        .map_err(crate::error::CreateJobError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code.to_string(),
        None => return Err(crate::error::CreateJobError::generic(generic)),
    };
    Err(match error_code.as_str() {
        "InvalidResourceException" => match serde_json::from_slice::<crate::error::InvalidResourceException>(json_body(response)) {
            Ok(body) => crate::error::CreateJobError::new(crate::error::CreateJobErrorKind::InvalidResourceException(body), generic),
            Err(e) => crate::error::CreateJobError::new(crate::error::CreateJobErrorKind::Unhandled(e.into()), generic),
        },
        "KMSRequestFailedException" => match serde_json::from_slice::<crate::error::KmsRequestFailedException>(json_body(response)) {
            Ok(body) => crate::error::CreateJobError::new(crate::error::CreateJobErrorKind::KmsRequestFailedException(body), generic),
            Err(e) => crate::error::CreateJobError::new(crate::error::CreateJobErrorKind::Unhandled(e.into()), generic),
        },
        "InvalidInputCombinationException" => match serde_json::from_slice::<crate::error::InvalidInputCombinationException>(json_body(response)) {
            Ok(body) => crate::error::CreateJobError::new(crate::error::CreateJobErrorKind::InvalidInputCombinationException(body), generic),
            Err(e) => crate::error::CreateJobError::new(crate::error::CreateJobErrorKind::Unhandled(e.into()), generic),
        },
        "ClusterLimitExceededException" => match serde_json::from_slice::<crate::error::ClusterLimitExceededException>(json_body(response)) {
            Ok(body) => crate::error::CreateJobError::new(crate::error::CreateJobErrorKind::ClusterLimitExceededException(body), generic),
            Err(e) => crate::error::CreateJobError::new(crate::error::CreateJobErrorKind::Unhandled(e.into()), generic),
        },
        "Ec2RequestFailedException" => match serde_json::from_slice::<crate::error::Ec2RequestFailedException>(json_body(response)) {
            Ok(body) => crate::error::CreateJobError::new(crate::error::CreateJobErrorKind::Ec2RequestFailedException(body), generic),
            Err(e) => crate::error::CreateJobError::new(crate::error::CreateJobErrorKind::Unhandled(e.into()), generic),
        },
        _ => crate::error::CreateJobError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_create_job_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::CreateJobOutput, crate::error::CreateJobError> {
    serde_json::from_slice(json_body(response)).map_err(crate::error::CreateJobError::unhandled)
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_describe_address_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DescribeAddressOutput, crate::error::DescribeAddressError> {
    let generic = crate::json_errors::parse_generic_error(response)
        .map_err(crate::error::DescribeAddressError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code.to_string(),
        None => return Err(crate::error::DescribeAddressError::generic(generic)),
    };
    Err(match error_code.as_str() {
        "InvalidResourceException" => match serde_json::from_slice::<crate::error::InvalidResourceException>(json_body(response)) {
            Ok(body) => crate::error::DescribeAddressError::new(crate::error::DescribeAddressErrorKind::InvalidResourceException(body), generic),
            Err(e) => crate::error::DescribeAddressError::new(crate::error::DescribeAddressErrorKind::Unhandled(e.into()), generic),
        },
        _ => crate::error::DescribeAddressError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_describe_address_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DescribeAddressOutput, crate::error::DescribeAddressError> {
    serde_json::from_slice(json_body(response)).map_err(crate::error::DescribeAddressError::unhandled)
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_describe_addresses_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DescribeAddressesOutput, crate::error::DescribeAddressesError> {
    let generic = crate::json_errors::parse_generic_error(response)
        .map_err(crate::error::DescribeAddressesError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code.to_string(),
        None => return Err(crate::error::DescribeAddressesError::generic(generic)),
    };
    Err(match error_code.as_str() {
        "InvalidResourceException" => match serde_json::from_slice::<crate::error::InvalidResourceException>(json_body(response)) {
            Ok(body) => crate::error::DescribeAddressesError::new(crate::error::DescribeAddressesErrorKind::InvalidResourceException(body), generic),
            Err(e) => crate::error::DescribeAddressesError::new(crate::error::DescribeAddressesErrorKind::Unhandled(e.into()), generic),
        },
        "InvalidNextTokenException" => match serde_json::from_slice::<crate::error::InvalidNextTokenException>(json_body(response)) {
            Ok(body) => crate::error::DescribeAddressesError::new(crate::error::DescribeAddressesErrorKind::InvalidNextTokenException(body), generic),
            Err(e) => crate::error::DescribeAddressesError::new(crate::error::DescribeAddressesErrorKind::Unhandled(e.into()), generic),
        },
        _ => crate::error::DescribeAddressesError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_describe_addresses_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DescribeAddressesOutput, crate::error::DescribeAddressesError> {
    serde_json::from_slice(json_body(response)).map_err(crate::error::DescribeAddressesError::unhandled)
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_describe_cluster_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DescribeClusterOutput, crate::error::DescribeClusterError> {
    let generic = crate::json_errors::parse_generic_error(response)
        .map_err(crate::error::DescribeClusterError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code.to_string(),
        None => return Err(crate::error::DescribeClusterError::generic(generic)),
    };
    Err(match error_code.as_str() {
        "InvalidResourceException" => match serde_json::from_slice::<crate::error::InvalidResourceException>(json_body(response)) {
            Ok(body) => crate::error::DescribeClusterError::new(crate::error::DescribeClusterErrorKind::InvalidResourceException(body), generic),
            Err(e) => crate::error::DescribeClusterError::new(crate::error::DescribeClusterErrorKind::Unhandled(e.into()), generic),
        },
        _ => crate::error::DescribeClusterError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_describe_cluster_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DescribeClusterOutput, crate::error::DescribeClusterError> {
    serde_json::from_slice(json_body(response)).map_err(crate::error::DescribeClusterError::unhandled)
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_describe_job_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DescribeJobOutput, crate::error::DescribeJobError> {
    let generic = crate::json_errors::parse_generic_error(response)
        .map_err(crate::error::DescribeJobError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code.to_string(),
        None => return Err(crate::error::DescribeJobError::generic(generic)),
    };
    Err(match error_code.as_str() {
        "InvalidResourceException" => match serde_json::from_slice::<crate::error::InvalidResourceException>(json_body(response)) {
            Ok(body) => crate::error::DescribeJobError::new(crate::error::DescribeJobErrorKind::InvalidResourceException(body), generic),
            Err(e) => crate::error::DescribeJobError::new(crate::error::DescribeJobErrorKind::Unhandled(e.into()), generic),
        },
        _ => crate::error::DescribeJobError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_describe_job_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DescribeJobOutput, crate::error::DescribeJobError> {
    serde_json::from_slice(json_body(response)).map_err(crate::error::DescribeJobError::unhandled)
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_get_job_manifest_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::GetJobManifestOutput, crate::error::GetJobManifestError> {
    let generic = crate::json_errors::parse_generic_error(response)
        .map_err(crate::error::GetJobManifestError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code.to_string(),
        None => return Err(crate::error::GetJobManifestError::generic(generic)),
    };
    Err(match error_code.as_str() {
        "InvalidResourceException" => match serde_json::from_slice::<crate::error::InvalidResourceException>(json_body(response)) {
            Ok(body) => crate::error::GetJobManifestError::new(crate::error::GetJobManifestErrorKind::InvalidResourceException(body), generic),
            Err(e) => crate::error::GetJobManifestError::new(crate::error::GetJobManifestErrorKind::Unhandled(e.into()), generic),
        },
        "InvalidJobStateException" => match serde_json::from_slice::<crate::error::InvalidJobStateException>(json_body(response)) {
            Ok(body) => crate::error::GetJobManifestError::new(crate::error::GetJobManifestErrorKind::InvalidJobStateException(body), generic),
            Err(e) => crate::error::GetJobManifestError::new(crate::error::GetJobManifestErrorKind::Unhandled(e.into()), generic),
        },
        _ => crate::error::GetJobManifestError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_get_job_manifest_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::GetJobManifestOutput, crate::error::GetJobManifestError> {
    serde_json::from_slice(json_body(response)).map_err(crate::error::GetJobManifestError::unhandled)
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_get_job_unlock_code_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::GetJobUnlockCodeOutput, crate::error::GetJobUnlockCodeError> {
    let generic = crate::json_errors::parse_generic_error(response)
        .map_err(crate::error::GetJobUnlockCodeError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code.to_string(),
        None => return Err(crate::error::GetJobUnlockCodeError::generic(generic)),
    };
    Err(match error_code.as_str() {
        "InvalidResourceException" => match serde_json::from_slice::<crate::error::InvalidResourceException>(json_body(response)) {
            Ok(body) => crate::error::GetJobUnlockCodeError::new(crate::error::GetJobUnlockCodeErrorKind::InvalidResourceException(body), generic),
            Err(e) => crate::error::GetJobUnlockCodeError::new(crate::error::GetJobUnlockCodeErrorKind::Unhandled(e.into()), generic),
        },
        "InvalidJobStateException" => match serde_json::from_slice::<crate::error::InvalidJobStateException>(json_body(response)) {
            Ok(body) => crate::error::GetJobUnlockCodeError::new(crate::error::GetJobUnlockCodeErrorKind::InvalidJobStateException(body), generic),
            Err(e) => crate::error::GetJobUnlockCodeError::new(crate::error::GetJobUnlockCodeErrorKind::Unhandled(e.into()), generic),
        },
        _ => crate::error::GetJobUnlockCodeError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_get_job_unlock_code_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::GetJobUnlockCodeOutput, crate::error::GetJobUnlockCodeError> {
    serde_json::from_slice(json_body(response)).map_err(crate::error::GetJobUnlockCodeError::unhandled)
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_get_snowball_usage_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::GetSnowballUsageOutput, crate::error::GetSnowballUsageError> {
    let generic = crate::json_errors::parse_generic_error(response)
        .map_err(crate::error::GetSnowballUsageError::unhandled)?;
    Err(crate::error::GetSnowballUsageError::generic(generic))
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_get_snowball_usage_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::GetSnowballUsageOutput, crate::error::GetSnowballUsageError> {
    serde_json::from_slice(json_body(response)).map_err(crate::error::GetSnowballUsageError::unhandled)
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_get_software_updates_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::GetSoftwareUpdatesOutput, crate::error::GetSoftwareUpdatesError> {
    let generic = crate::json_errors::parse_generic_error(response)
        .map_err(crate::error::GetSoftwareUpdatesError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code.to_string(),
        None => return Err(crate::error::GetSoftwareUpdatesError::generic(generic)),
    };
    Err(match error_code.as_str() {
        "InvalidResourceException" => match serde_json::from_slice::<crate::error::InvalidResourceException>(json_body(response)) {
            Ok(body) => crate::error::GetSoftwareUpdatesError::new(crate::error::GetSoftwareUpdatesErrorKind::InvalidResourceException(body), generic),
            Err(e) => crate::error::GetSoftwareUpdatesError::new(crate::error::GetSoftwareUpdatesErrorKind::Unhandled(e.into()), generic),
        },
        "InvalidJobStateException" => match serde_json::from_slice::<crate::error::InvalidJobStateException>(json_body(response)) {
            Ok(body) => crate::error::GetSoftwareUpdatesError::new(crate::error::GetSoftwareUpdatesErrorKind::InvalidJobStateException(body), generic),
            Err(e) => crate::error::GetSoftwareUpdatesError::new(crate::error::GetSoftwareUpdatesErrorKind::Unhandled(e.into()), generic),
        },
        _ => crate::error::GetSoftwareUpdatesError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_get_software_updates_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::GetSoftwareUpdatesOutput, crate::error::GetSoftwareUpdatesError> {
    serde_json::from_slice(json_body(response)).map_err(crate::error::GetSoftwareUpdatesError::unhandled)
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_list_cluster_jobs_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListClusterJobsOutput, crate::error::ListClusterJobsError> {
    let generic = crate::json_errors::parse_generic_error(response)
        .map_err(crate::error::ListClusterJobsError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code.to_string(),
        None => return Err(crate::error::ListClusterJobsError::generic(generic)),
    };
    Err(match error_code.as_str() {
        "InvalidResourceException" => match serde_json::from_slice::<crate::error::InvalidResourceException>(json_body(response)) {
            Ok(body) => crate::error::ListClusterJobsError::new(crate::error::ListClusterJobsErrorKind::InvalidResourceException(body), generic),
            Err(e) => crate::error::ListClusterJobsError::new(crate::error::ListClusterJobsErrorKind::Unhandled(e.into()), generic),
        },
        "InvalidNextTokenException" => match serde_json::from_slice::<crate::error::InvalidNextTokenException>(json_body(response)) {
            Ok(body) => crate::error::ListClusterJobsError::new(crate::error::ListClusterJobsErrorKind::InvalidNextTokenException(body), generic),
            Err(e) => crate::error::ListClusterJobsError::new(crate::error::ListClusterJobsErrorKind::Unhandled(e.into()), generic),
        },
        _ => crate::error::ListClusterJobsError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_list_cluster_jobs_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListClusterJobsOutput, crate::error::ListClusterJobsError> {
    serde_json::from_slice(json_body(response)).map_err(crate::error::ListClusterJobsError::unhandled)
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_list_clusters_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListClustersOutput, crate::error::ListClustersError> {
    let generic = crate::json_errors::parse_generic_error(response)
        .map_err(crate::error::ListClustersError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code.to_string(),
        None => return Err(crate::error::ListClustersError::generic(generic)),
    };
    Err(match error_code.as_str() {
        "InvalidNextTokenException" => match serde_json::from_slice::<crate::error::InvalidNextTokenException>(json_body(response)) {
            Ok(body) => crate::error::ListClustersError::new(crate::error::ListClustersErrorKind::InvalidNextTokenException(body), generic),
            Err(e) => crate::error::ListClustersError::new(crate::error::ListClustersErrorKind::Unhandled(e.into()), generic),
        },
        _ => crate::error::ListClustersError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_list_clusters_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListClustersOutput, crate::error::ListClustersError> {
    serde_json::from_slice(json_body(response)).map_err(crate::error::ListClustersError::unhandled)
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_list_compatible_images_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListCompatibleImagesOutput, crate::error::ListCompatibleImagesError> {
    let generic = crate::json_errors::parse_generic_error(response)
        .map_err(crate::error::ListCompatibleImagesError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code.to_string(),
        None => return Err(crate::error::ListCompatibleImagesError::generic(generic)),
    };
    Err(match error_code.as_str() {
        "InvalidNextTokenException" => match serde_json::from_slice::<crate::error::InvalidNextTokenException>(json_body(response)) {
            Ok(body) => crate::error::ListCompatibleImagesError::new(crate::error::ListCompatibleImagesErrorKind::InvalidNextTokenException(body), generic),
            Err(e) => crate::error::ListCompatibleImagesError::new(crate::error::ListCompatibleImagesErrorKind::Unhandled(e.into()), generic),
        },
        "Ec2RequestFailedException" => match serde_json::from_slice::<crate::error::Ec2RequestFailedException>(json_body(response)) {
            Ok(body) => crate::error::ListCompatibleImagesError::new(crate::error::ListCompatibleImagesErrorKind::Ec2RequestFailedException(body), generic),
            Err(e) => crate::error::ListCompatibleImagesError::new(crate::error::ListCompatibleImagesErrorKind::Unhandled(e.into()), generic),
        },
        _ => crate::error::ListCompatibleImagesError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_list_compatible_images_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListCompatibleImagesOutput, crate::error::ListCompatibleImagesError> {
    serde_json::from_slice(json_body(response)).map_err(crate::error::ListCompatibleImagesError::unhandled)
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_list_jobs_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListJobsOutput, crate::error::ListJobsError> {
    let generic = crate::json_errors::parse_generic_error(response)
        .map_err(crate::error::ListJobsError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code.to_string(),
        None => return Err(crate::error::ListJobsError::generic(generic)),
    };
    Err(match error_code.as_str() {
        "InvalidNextTokenException" => match serde_json::from_slice::<crate::error::InvalidNextTokenException>(json_body(response)) {
            Ok(body) => crate::error::ListJobsError::new(crate::error::ListJobsErrorKind::InvalidNextTokenException(body), generic),
            Err(e) => crate::error::ListJobsError::new(crate::error::ListJobsErrorKind::Unhandled(e.into()), generic),
        },
        _ => crate::error::ListJobsError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_list_jobs_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListJobsOutput, crate::error::ListJobsError> {
    serde_json::from_slice(json_body(response)).map_err(crate::error::ListJobsError::unhandled)
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_update_cluster_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::UpdateClusterOutput, crate::error::UpdateClusterError> {
    let generic = crate::json_errors::parse_generic_error(response)
        .map_err(crate::error::UpdateClusterError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code.to_string(),
        None => return Err(crate::error::UpdateClusterError::generic(generic)),
    };
    Err(match error_code.as_str() {
        "InvalidResourceException" => match serde_json::from_slice::<crate::error::InvalidResourceException>(json_body(response)) {
            Ok(body) => crate::error::UpdateClusterError::new(crate::error::UpdateClusterErrorKind::InvalidResourceException(body), generic),
            Err(e) => crate::error::UpdateClusterError::new(crate::error::UpdateClusterErrorKind::Unhandled(e.into()), generic),
        },
        "InvalidJobStateException" => match serde_json::from_slice::<crate::error::InvalidJobStateException>(json_body(response)) {
            Ok(body) => crate::error::UpdateClusterError::new(crate::error::UpdateClusterErrorKind::InvalidJobStateException(body), generic),
            Err(e) => crate::error::UpdateClusterError::new(crate::error::UpdateClusterErrorKind::Unhandled(e.into()), generic),
        },
        "KMSRequestFailedException" => match serde_json::from_slice::<crate::error::KmsRequestFailedException>(json_body(response)) {
            Ok(body) => crate::error::UpdateClusterError::new(crate::error::UpdateClusterErrorKind::KmsRequestFailedException(body), generic),
            Err(e) => crate::error::UpdateClusterError::new(crate::error::UpdateClusterErrorKind::Unhandled(e.into()), generic),
        },
        "InvalidInputCombinationException" => match serde_json::from_slice::<crate::error::InvalidInputCombinationException>(json_body(response)) {
            Ok(body) => crate::error::UpdateClusterError::new(crate::error::UpdateClusterErrorKind::InvalidInputCombinationException(body), generic),
            Err(e) => crate::error::UpdateClusterError::new(crate::error::UpdateClusterErrorKind::Unhandled(e.into()), generic),
        },
        "Ec2RequestFailedException" => match serde_json::from_slice::<crate::error::Ec2RequestFailedException>(json_body(response)) {
            Ok(body) => crate::error::UpdateClusterError::new(crate::error::UpdateClusterErrorKind::Ec2RequestFailedException(body), generic),
            Err(e) => crate::error::UpdateClusterError::new(crate::error::UpdateClusterErrorKind::Unhandled(e.into()), generic),
        },
        _ => crate::error::UpdateClusterError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_update_cluster_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::UpdateClusterOutput, crate::error::UpdateClusterError> {
    serde_json::from_slice(json_body(response)).map_err(crate::error::UpdateClusterError::unhandled)
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_update_job_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::UpdateJobOutput, crate::error::UpdateJobError> {
    let generic = crate::json_errors::parse_generic_error(response)
        .map_err(crate::error::UpdateJobError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code.to_string(),
        None => return Err(crate::error::UpdateJobError::generic(generic)),
    };
    Err(match error_code.as_str() {
        "InvalidResourceException" => match serde_json::from_slice::<crate::error::InvalidResourceException>(json_body(response)) {
            Ok(body) => crate::error::UpdateJobError::new(crate::error::UpdateJobErrorKind::InvalidResourceException(body), generic),
            Err(e) => crate::error::UpdateJobError::new(crate::error::UpdateJobErrorKind::Unhandled(e.into()), generic),
        },
        "InvalidJobStateException" => match serde_json::from_slice::<crate::error::InvalidJobStateException>(json_body(response)) {
            Ok(body) => crate::error::UpdateJobError::new(crate::error::UpdateJobErrorKind::InvalidJobStateException(body), generic),
            Err(e) => crate::error::UpdateJobError::new(crate::error::UpdateJobErrorKind::Unhandled(e.into()), generic),
        },
        "KMSRequestFailedException" => match serde_json::from_slice::<crate::error::KmsRequestFailedException>(json_body(response)) {
            Ok(body) => crate::error::UpdateJobError::new(crate::error::UpdateJobErrorKind::KmsRequestFailedException(body), generic),
            Err(e) => crate::error::UpdateJobError::new(crate::error::UpdateJobErrorKind::Unhandled(e.into()), generic),
        },
        "InvalidInputCombinationException" => match serde_json::from_slice::<crate::error::InvalidInputCombinationException>(json_body(response)) {
            Ok(body) => crate::error::UpdateJobError::new(crate::error::UpdateJobErrorKind::InvalidInputCombinationException(body), generic),
            Err(e) => crate::error::UpdateJobError::new(crate::error::UpdateJobErrorKind::Unhandled(e.into()), generic),
        },
        "ClusterLimitExceededException" => match serde_json::from_slice::<crate::error::ClusterLimitExceededException>(json_body(response)) {
            Ok(body) => crate::error::UpdateJobError::new(crate::error::UpdateJobErrorKind::ClusterLimitExceededException(body), generic),
            Err(e) => crate::error::UpdateJobError::new(crate::error::UpdateJobErrorKind::Unhandled(e.into()), generic),
        },
        "Ec2RequestFailedException" => match serde_json::from_slice::<crate::error::Ec2RequestFailedException>(json_body(response)) {
            Ok(body) => crate::error::UpdateJobError::new(crate::error::UpdateJobErrorKind::Ec2RequestFailedException(body), generic),
            Err(e) => crate::error::UpdateJobError::new(crate::error::UpdateJobErrorKind::Unhandled(e.into()), generic),
        },
        _ => crate::error::UpdateJobError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_update_job_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::UpdateJobOutput, crate::error::UpdateJobError> {
    serde_json::from_slice(json_body(response)).map_err(crate::error::UpdateJobError::unhandled)
}
