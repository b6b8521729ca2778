/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/// Attaches the region, endpoint resolver and user agent to a request and pairs it with the
/// handler that parses its response
fn finish_operation<O>(
    config: &crate::config::Config,
    request: http::Request<smithy_http::body::SdkBody>,
    handler: O,
    operation_name: &'static str,
) -> smithy_http::operation::Operation<O> {
    let mut request = smithy_http::operation::Request::new(request);
    {
        let mut props = request.properties_mut();
        if let Some(region) = &config.region {
            props.insert(region.clone());
        }
        aws_endpoint::set_endpoint_resolver(&mut props, config.endpoint_resolver.clone());
        props.insert(aws_http::user_agent::AwsUserAgent::new_from_environment(
            crate::API_METADATA.clone(),
        ));
    }
    smithy_http::operation::Operation::new(request, handler).with_metadata(
        smithy_http::operation::Metadata::new(operation_name, "snowball"),
    )
}

fn serialization_error(err: serde_json::Error) -> smithy_http::operation::BuildError {
    smithy_http::operation::BuildError::SerializationError(err.into())
}

/// See [`CancelClusterInput`](crate::input::CancelClusterInput)
pub mod cancel_cluster_input {
    /// A builder for [`CancelClusterInput`](crate::input::CancelClusterInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        cluster_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn cluster_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.cluster_id = Some(input.into());
            self
        }
        pub fn set_cluster_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.cluster_id = input;
            self
        }
        /// Consumes the builder and constructs a [`CancelClusterInput`](crate::input::CancelClusterInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::CancelClusterInput, smithy_http::operation::BuildError> {
            Ok(crate::input::CancelClusterInput {
                cluster_id: self.cluster_id,
            })
        }
    }
}

impl CancelClusterInput {
    /// Consumes the builder and constructs an Operation<[`CancelCluster`](crate::operation::CancelCluster)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::CancelCluster>,
        smithy_http::operation::BuildError,
    > {
        let body = serde_json::to_vec(self).map_err(serialization_error)?;
        let request = http::Request::builder()
            .method("POST")
            .uri("/")
            .header(http::header::CONTENT_TYPE, "application/x-amz-json-1.1")
            .header(
                "X-Amz-Target",
                "AWSIESnowballJobManagementService.CancelCluster",
            )
            .header(http::header::CONTENT_LENGTH, body.len())
            .body(smithy_http::body::SdkBody::from(body))?;
        Ok(finish_operation(
            config,
            request,
            crate::operation::CancelCluster::new(),
            "CancelCluster",
        ))
    }
    /// Creates a new builder-style object to manufacture [`CancelClusterInput`](crate::input::CancelClusterInput)
    pub fn builder() -> crate::input::cancel_cluster_input::Builder {
        crate::input::cancel_cluster_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct CancelClusterInput {
    #[serde(rename = "ClusterId")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub cluster_id: std::option::Option<std::string::String>,
}

/// See [`CancelJobInput`](crate::input::CancelJobInput)
pub mod cancel_job_input {
    /// A builder for [`CancelJobInput`](crate::input::CancelJobInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        job_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn job_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.job_id = Some(input.into());
            self
        }
        pub fn set_job_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.job_id = input;
            self
        }
        /// Consumes the builder and constructs a [`CancelJobInput`](crate::input::CancelJobInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::CancelJobInput, smithy_http::operation::BuildError> {
            Ok(crate::input::CancelJobInput {
                job_id: self.job_id,
            })
        }
    }
}

impl CancelJobInput {
    /// Consumes the builder and constructs an Operation<[`CancelJob`](crate::operation::CancelJob)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::CancelJob>,
        smithy_http::operation::BuildError,
    > {
        let body = serde_json::to_vec(self).map_err(serialization_error)?;
        let request = http::Request::builder()
            .method("POST")
            .uri("/")
            .header(http::header::CONTENT_TYPE, "application/x-amz-json-1.1")
            .header(
                "X-Amz-Target",
                "AWSIESnowballJobManagementService.CancelJob",
            )
            .header(http::header::CONTENT_LENGTH, body.len())
            .body(smithy_http::body::SdkBody::from(body))?;
        Ok(finish_operation(
            config,
            request,
            crate::operation::CancelJob::new(),
            "CancelJob",
        ))
    }
    /// Creates a new builder-style object to manufacture [`CancelJobInput`](crate::input::CancelJobInput)
    pub fn builder() -> crate::input::cancel_job_input::Builder {
        crate::input::cancel_job_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct CancelJobInput {
    #[serde(rename = "JobId")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub job_id: std::option::Option<std::string::String>,
}

/// See [`CreateAddressInput`](crate::input::CreateAddressInput)
pub mod create_address_input {
    /// A builder for [`CreateAddressInput`](crate::input::CreateAddressInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        address: std::option::Option<crate::model::Address>,
    }
    impl Builder {
        pub fn address(mut self, input: impl Into<crate::model::Address>) -> Self {
            self.address = Some(input.into());
            self
        }
        pub fn set_address(mut self, input: std::option::Option<crate::model::Address>) -> Self {
            self.address = input;
            self
        }
        /// Consumes the builder and constructs a [`CreateAddressInput`](crate::input::CreateAddressInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::CreateAddressInput, smithy_http::operation::BuildError> {
            Ok(crate::input::CreateAddressInput {
                address: self.address,
            })
        }
    }
}

impl CreateAddressInput {
    /// Consumes the builder and constructs an Operation<[`CreateAddress`](crate::operation::CreateAddress)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::CreateAddress>,
        smithy_http::operation::BuildError,
    > {
        let body = serde_json::to_vec(self).map_err(serialization_error)?;
        let request = http::Request::builder()
            .method("POST")
            .uri("/")
            .header(http::header::CONTENT_TYPE, "application/x-amz-json-1.1")
            .header(
                "X-Amz-Target",
                "AWSIESnowballJobManagementService.CreateAddress",
            )
            .header(http::header::CONTENT_LENGTH, body.len())
            .body(smithy_http::body::SdkBody::from(body))?;
        Ok(finish_operation(
            config,
            request,
            crate::operation::CreateAddress::new(),
            "CreateAddress",
        ))
    }
    /// Creates a new builder-style object to manufacture [`CreateAddressInput`](crate::input::CreateAddressInput)
    pub fn builder() -> crate::input::create_address_input::Builder {
        crate::input::create_address_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct CreateAddressInput {
    #[serde(rename = "Address")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub address: std::option::Option<crate::model::Address>,
}

/// See [`CreateClusterInput`](crate::input::CreateClusterInput)
pub mod create_cluster_input {
    /// A builder for [`CreateClusterInput`](crate::input::CreateClusterInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        job_type: std::option::Option<crate::model::JobType>,
        resources: std::option::Option<crate::model::JobResource>,
        description: std::option::Option<std::string::String>,
        address_id: std::option::Option<std::string::String>,
        kms_key_arn: std::option::Option<std::string::String>,
        role_arn: std::option::Option<std::string::String>,
        snowball_type: std::option::Option<crate::model::SnowballType>,
        shipping_option: std::option::Option<crate::model::ShippingOption>,
        notification: std::option::Option<crate::model::Notification>,
        forwarding_address_id: std::option::Option<std::string::String>,
        tax_documents: std::option::Option<crate::model::TaxDocuments>,
    }
    impl Builder {
        pub fn job_type(mut self, input: impl Into<crate::model::JobType>) -> Self {
            self.job_type = Some(input.into());
            self
        }
        pub fn set_job_type(mut self, input: std::option::Option<crate::model::JobType>) -> Self {
            self.job_type = input;
            self
        }
        pub fn resources(mut self, input: impl Into<crate::model::JobResource>) -> Self {
            self.resources = Some(input.into());
            self
        }
        pub fn set_resources(mut self, input: std::option::Option<crate::model::JobResource>) -> Self {
            self.resources = input;
            self
        }
        pub fn description(mut self, input: impl Into<std::string::String>) -> Self {
            self.description = Some(input.into());
            self
        }
        pub fn set_description(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.description = input;
            self
        }
        pub fn address_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.address_id = Some(input.into());
            self
        }
        pub fn set_address_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.address_id = input;
            self
        }
        pub fn kms_key_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.kms_key_arn = Some(input.into());
            self
        }
        pub fn set_kms_key_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.kms_key_arn = input;
            self
        }
        pub fn role_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.role_arn = Some(input.into());
            self
        }
        pub fn set_role_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.role_arn = input;
            self
        }
        pub fn snowball_type(mut self, input: impl Into<crate::model::SnowballType>) -> Self {
            self.snowball_type = Some(input.into());
            self
        }
        pub fn set_snowball_type(mut self, input: std::option::Option<crate::model::SnowballType>) -> Self {
            self.snowball_type = input;
            self
        }
        pub fn shipping_option(mut self, input: impl Into<crate::model::ShippingOption>) -> Self {
            self.shipping_option = Some(input.into());
            self
        }
        pub fn set_shipping_option(mut self, input: std::option::Option<crate::model::ShippingOption>) -> Self {
            self.shipping_option = input;
            self
        }
        pub fn notification(mut self, input: impl Into<crate::model::Notification>) -> Self {
            self.notification = Some(input.into());
            self
        }
        pub fn set_notification(mut self, input: std::option::Option<crate::model::Notification>) -> Self {
            self.notification = input;
            self
        }
        pub fn forwarding_address_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.forwarding_address_id = Some(input.into());
            self
        }
        pub fn set_forwarding_address_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.forwarding_address_id = input;
            self
        }
        pub fn tax_documents(mut self, input: impl Into<crate::model::TaxDocuments>) -> Self {
            self.tax_documents = Some(input.into());
            self
        }
        pub fn set_tax_documents(mut self, input: std::option::Option<crate::model::TaxDocuments>) -> Self {
            self.tax_documents = input;
            self
        }
        /// Consumes the builder and constructs a [`CreateClusterInput`](crate::input::CreateClusterInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::CreateClusterInput, smithy_http::operation::BuildError> {
            Ok(crate::input::CreateClusterInput {
                job_type: self.job_type,
                resources: self.resources,
                description: self.description,
                address_id: self.address_id,
                kms_key_arn: self.kms_key_arn,
                role_arn: self.role_arn,
                snowball_type: self.snowball_type,
                shipping_option: self.shipping_option,
                notification: self.notification,
                forwarding_address_id: self.forwarding_address_id,
                tax_documents: self.tax_documents,
            })
        }
    }
}

impl CreateClusterInput {
    /// Consumes the builder and constructs an Operation<[`CreateCluster`](crate::operation::CreateCluster)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::CreateCluster>,
        smithy_http::operation::BuildError,
    > {
        let body = serde_json::to_vec(self).map_err(serialization_error)?;
        let request = http::Request::builder()
            .method("POST")
            .uri("/")
            .header(http::header::CONTENT_TYPE, "application/x-amz-json-1.1")
            .header(
                "X-Amz-Target",
                "AWSIESnowballJobManagementService.CreateCluster",
            )
            .header(http::header::CONTENT_LENGTH, body.len())
            .body(smithy_http::body::SdkBody::from(body))?;
        Ok(finish_operation(
            config,
            request,
            crate::operation::CreateCluster::new(),
            "CreateCluster",
        ))
    }
    /// Creates a new builder-style object to manufacture [`CreateClusterInput`](crate::input::CreateClusterInput)
    pub fn builder() -> crate::input::create_cluster_input::Builder {
        crate::input::create_cluster_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct CreateClusterInput {
    #[serde(rename = "JobType")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub job_type: std::option::Option<crate::model::JobType>,
    #[serde(rename = "Resources")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub resources: std::option::Option<crate::model::JobResource>,
    #[serde(rename = "Description")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,
    #[serde(rename = "AddressId")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub address_id: std::option::Option<std::string::String>,
    #[serde(rename = "KmsKeyARN")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub kms_key_arn: std::option::Option<std::string::String>,
    #[serde(rename = "RoleARN")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub role_arn: std::option::Option<std::string::String>,
    #[serde(rename = "SnowballType")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub snowball_type: std::option::Option<crate::model::SnowballType>,
    #[serde(rename = "ShippingOption")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub shipping_option: std::option::Option<crate::model::ShippingOption>,
    #[serde(rename = "Notification")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub notification: std::option::Option<crate::model::Notification>,
    #[serde(rename = "ForwardingAddressId")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub forwarding_address_id: std::option::Option<std::string::String>,
    #[serde(rename = "TaxDocuments")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub tax_documents: std::option::Option<crate::model::TaxDocuments>,
}

/// See [`CreateJobInput`](crate::input::CreateJobInput)
pub mod create_job_input {
    /// A builder for [`CreateJobInput`](crate::input::CreateJobInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        job_type: std::option::Option<crate::model::JobType>,
        resources: std::option::Option<crate::model::JobResource>,
        description: std::option::Option<std::string::String>,
        address_id: std::option::Option<std::string::String>,
        kms_key_arn: std::option::Option<std::string::String>,
        role_arn: std::option::Option<std::string::String>,
        snowball_capacity_preference: std::option::Option<crate::model::SnowballCapacity>,
        shipping_option: std::option::Option<crate::model::ShippingOption>,
        notification: std::option::Option<crate::model::Notification>,
        cluster_id: std::option::Option<std::string::String>,
        snowball_type: std::option::Option<crate::model::SnowballType>,
        forwarding_address_id: std::option::Option<std::string::String>,
        tax_documents: std::option::Option<crate::model::TaxDocuments>,
        device_configuration: std::option::Option<crate::model::DeviceConfiguration>,
    }
    impl Builder {
        pub fn job_type(mut self, input: impl Into<crate::model::JobType>) -> Self {
            self.job_type = Some(input.into());
            self
        }
        pub fn set_job_type(mut self, input: std::option::Option<crate::model::JobType>) -> Self {
            self.job_type = input;
            self
        }
        pub fn resources(mut self, input: impl Into<crate::model::JobResource>) -> Self {
            self.resources = Some(input.into());
            self
        }
        pub fn set_resources(mut self, input: std::option::Option<crate::model::JobResource>) -> Self {
            self.resources = input;
            self
        }
        pub fn description(mut self, input: impl Into<std::string::String>) -> Self {
            self.description = Some(input.into());
            self
        }
        pub fn set_description(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.description = input;
            self
        }
        pub fn address_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.address_id = Some(input.into());
            self
        }
        pub fn set_address_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.address_id = input;
            self
        }
        pub fn kms_key_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.kms_key_arn = Some(input.into());
            self
        }
        pub fn set_kms_key_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.kms_key_arn = input;
            self
        }
        pub fn role_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.role_arn = Some(input.into());
            self
        }
        pub fn set_role_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.role_arn = input;
            self
        }
        pub fn snowball_capacity_preference(mut self, input: impl Into<crate::model::SnowballCapacity>) -> Self {
            self.snowball_capacity_preference = Some(input.into());
            self
        }
        pub fn set_snowball_capacity_preference(mut self, input: std::option::Option<crate::model::SnowballCapacity>) -> Self {
            self.snowball_capacity_preference = input;
            self
        }
        pub fn shipping_option(mut self, input: impl Into<crate::model::ShippingOption>) -> Self {
            self.shipping_option = Some(input.into());
            self
        }
        pub fn set_shipping_option(mut self, input: std::option::Option<crate::model::ShippingOption>) -> Self {
            self.shipping_option = input;
            self
        }
        pub fn notification(mut self, input: impl Into<crate::model::Notification>) -> Self {
            self.notification = Some(input.into());
            self
        }
        pub fn set_notification(mut self, input: std::option::Option<crate::model::Notification>) -> Self {
            self.notification = input;
            self
        }
        pub fn cluster_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.cluster_id = Some(input.into());
            self
        }
        pub fn set_cluster_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.cluster_id = input;
            self
        }
        pub fn snowball_type(mut self, input: impl Into<crate::model::SnowballType>) -> Self {
            self.snowball_type = Some(input.into());
            self
        }
        pub fn set_snowball_type(mut self, input: std::option::Option<crate::model::SnowballType>) -> Self {
            self.snowball_type = input;
            self
        }
        pub fn forwarding_address_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.forwarding_address_id = Some(input.into());
            self
        }
        pub fn set_forwarding_address_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.forwarding_address_id = input;
            self
        }
        pub fn tax_documents(mut self, input: impl Into<crate::model::TaxDocuments>) -> Self {
            self.tax_documents = Some(input.into());
            self
        }
        pub fn set_tax_documents(mut self, input: std::option::Option<crate::model::TaxDocuments>) -> Self {
            self.tax_documents = input;
            self
        }
        pub fn device_configuration(mut self, input: impl Into<crate::model::DeviceConfiguration>) -> Self {
            self.device_configuration = Some(input.into());
            self
        }
        pub fn set_device_configuration(mut self, input: std::option::Option<crate::model::DeviceConfiguration>) -> Self {
            self.device_configuration = input;
            self
        }
        /// Consumes the builder and constructs a [`CreateJobInput`](crate::input::CreateJobInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::CreateJobInput, smithy_http::operation::BuildError> {
            Ok(crate::input::CreateJobInput {
                job_type: self.job_type,
                resources: self.resources,
                description: self.description,
                address_id: self.address_id,
                kms_key_arn: self.kms_key_arn,
                role_arn: self.role_arn,
                snowball_capacity_preference: self.snowball_capacity_preference,
                shipping_option: self.shipping_option,
                notification: self.notification,
                cluster_id: self.cluster_id,
                snowball_type: self.snowball_type,
                forwarding_address_id: self.forwarding_address_id,
                tax_documents: self.tax_documents,
                device_configuration: self.device_configuration,
            })
        }
    }
}

impl CreateJobInput {
    /// Consumes the builder and constructs an Operation<[`CreateJob`](crate::operation::CreateJob)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::CreateJob>,
        smithy_http::operation::BuildError,
    > {
        let body = serde_json::to_vec(self).map_err(serialization_error)?;
        let request = http::Request::builder()
            .method("POST")
            .uri("/")
            .header(http::header::CONTENT_TYPE, "application/x-amz-json-1.1")
            .header(
                "X-Amz-Target",
                "AWSIESnowballJobManagementService.CreateJob",
            )
            .header(http::header::CONTENT_LENGTH, body.len())
            .body(smithy_http::body::SdkBody::from(body))?;
        Ok(finish_operation(
            config,
            request,
            crate::operation::CreateJob::new(),
            "CreateJob",
        ))
    }
    /// Creates a new builder-style object to manufacture [`CreateJobInput`](crate::input::CreateJobInput)
    pub fn builder() -> crate::input::create_job_input::Builder {
        crate::input::create_job_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct CreateJobInput {
    #[serde(rename = "JobType")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub job_type: std::option::Option<crate::model::JobType>,
    #[serde(rename = "Resources")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub resources: std::option::Option<crate::model::JobResource>,
    #[serde(rename = "Description")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,
    #[serde(rename = "AddressId")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub address_id: std::option::Option<std::string::String>,
    #[serde(rename = "KmsKeyARN")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub kms_key_arn: std::option::Option<std::string::String>,
    #[serde(rename = "RoleARN")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub role_arn: std::option::Option<std::string::String>,
    #[serde(rename = "SnowballCapacityPreference")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub snowball_capacity_preference: std::option::Option<crate::model::SnowballCapacity>,
    #[serde(rename = "ShippingOption")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub shipping_option: std::option::Option<crate::model::ShippingOption>,
    #[serde(rename = "Notification")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub notification: std::option::Option<crate::model::Notification>,
    #[serde(rename = "ClusterId")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub cluster_id: std::option::Option<std::string::String>,
    #[serde(rename = "SnowballType")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub snowball_type: std::option::Option<crate::model::SnowballType>,
    #[serde(rename = "ForwardingAddressId")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub forwarding_address_id: std::option::Option<std::string::String>,
    #[serde(rename = "TaxDocuments")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub tax_documents: std::option::Option<crate::model::TaxDocuments>,
    #[serde(rename = "DeviceConfiguration")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub device_configuration: std::option::Option<crate::model::DeviceConfiguration>,
}

/// See [`DescribeAddressInput`](crate::input::DescribeAddressInput)
pub mod describe_address_input {
    /// A builder for [`DescribeAddressInput`](crate::input::DescribeAddressInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        address_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn address_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.address_id = Some(input.into());
            self
        }
        pub fn set_address_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.address_id = input;
            self
        }
        /// Consumes the builder and constructs a [`DescribeAddressInput`](crate::input::DescribeAddressInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::DescribeAddressInput, smithy_http::operation::BuildError> {
            Ok(crate::input::DescribeAddressInput {
                address_id: self.address_id,
            })
        }
    }
}

impl DescribeAddressInput {
    /// Consumes the builder and constructs an Operation<[`DescribeAddress`](crate::operation::DescribeAddress)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::DescribeAddress>,
        smithy_http::operation::BuildError,
    > {
        let body = serde_json::to_vec(self).map_err(serialization_error)?;
        let request = http::Request::builder()
            .method("POST")
            .uri("/")
            .header(http::header::CONTENT_TYPE, "application/x-amz-json-1.1")
            .header(
                "X-Amz-Target",
                "AWSIESnowballJobManagementService.DescribeAddress",
            )
            .header(http::header::CONTENT_LENGTH, body.len())
            .body(smithy_http::body::SdkBody::from(body))?;
        Ok(finish_operation(
            config,
            request,
            crate::operation::DescribeAddress::new(),
            "DescribeAddress",
        ))
    }
    /// Creates a new builder-style object to manufacture [`DescribeAddressInput`](crate::input::DescribeAddressInput)
    pub fn builder() -> crate::input::describe_address_input::Builder {
        crate::input::describe_address_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct DescribeAddressInput {
    #[serde(rename = "AddressId")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub address_id: std::option::Option<std::string::String>,
}

/// See [`DescribeAddressesInput`](crate::input::DescribeAddressesInput)
pub mod describe_addresses_input {
    /// A builder for [`DescribeAddressesInput`](crate::input::DescribeAddressesInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        max_results: std::option::Option<i32>,
        next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn max_results(mut self, input: i32) -> Self {
            self.max_results = Some(input);
            self
        }
        pub fn set_max_results(mut self, input: std::option::Option<i32>) -> Self {
            self.max_results = input;
            self
        }
        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.next_token = Some(input.into());
            self
        }
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.next_token = input;
            self
        }
        /// Consumes the builder and constructs a [`DescribeAddressesInput`](crate::input::DescribeAddressesInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::DescribeAddressesInput, smithy_http::operation::BuildError> {
            Ok(crate::input::DescribeAddressesInput {
                max_results: self.max_results,
                next_token: self.next_token,
            })
        }
    }
}

impl DescribeAddressesInput {
    /// Consumes the builder and constructs an Operation<[`DescribeAddresses`](crate::operation::DescribeAddresses)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::DescribeAddresses>,
        smithy_http::operation::BuildError,
    > {
        let body = serde_json::to_vec(self).map_err(serialization_error)?;
        let request = http::Request::builder()
            .method("POST")
            .uri("/")
            .header(http::header::CONTENT_TYPE, "application/x-amz-json-1.1")
            .header(
                "X-Amz-Target",
                "AWSIESnowballJobManagementService.DescribeAddresses",
            )
            .header(http::header::CONTENT_LENGTH, body.len())
            .body(smithy_http::body::SdkBody::from(body))?;
        Ok(finish_operation(
            config,
            request,
            crate::operation::DescribeAddresses::new(),
            "DescribeAddresses",
        ))
    }
    /// Creates a new builder-style object to manufacture [`DescribeAddressesInput`](crate::input::DescribeAddressesInput)
    pub fn builder() -> crate::input::describe_addresses_input::Builder {
        crate::input::describe_addresses_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct DescribeAddressesInput {
    #[serde(rename = "MaxResults")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub max_results: std::option::Option<i32>,
    #[serde(rename = "NextToken")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_token: std::option::Option<std::string::String>,
}

/// See [`DescribeClusterInput`](crate::input::DescribeClusterInput)
pub mod describe_cluster_input {
    /// A builder for [`DescribeClusterInput`](crate::input::DescribeClusterInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        cluster_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn cluster_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.cluster_id = Some(input.into());
            self
        }
        pub fn set_cluster_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.cluster_id = input;
            self
        }
        /// Consumes the builder and constructs a [`DescribeClusterInput`](crate::input::DescribeClusterInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::DescribeClusterInput, smithy_http::operation::BuildError> {
            Ok(crate::input::DescribeClusterInput {
                cluster_id: self.cluster_id,
            })
        }
    }
}

impl DescribeClusterInput {
    /// Consumes the builder and constructs an Operation<[`DescribeCluster`](crate::operation::DescribeCluster)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::DescribeCluster>,
        smithy_http::operation::BuildError,
    > {
        let body = serde_json::to_vec(self).map_err(serialization_error)?;
        let request = http::Request::builder()
            .method("POST")
            .uri("/")
            .header(http::header::CONTENT_TYPE, "application/x-amz-json-1.1")
            .header(
                "X-Amz-Target",
                "AWSIESnowballJobManagementService.DescribeCluster",
            )
            .header(http::header::CONTENT_LENGTH, body.len())
            .body(smithy_http::body::SdkBody::from(body))?;
        Ok(finish_operation(
            config,
            request,
            crate::operation::DescribeCluster::new(),
            "DescribeCluster",
        ))
    }
    /// Creates a new builder-style object to manufacture [`DescribeClusterInput`](crate::input::DescribeClusterInput)
    pub fn builder() -> crate::input::describe_cluster_input::Builder {
        crate::input::describe_cluster_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct DescribeClusterInput {
    #[serde(rename = "ClusterId")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub cluster_id: std::option::Option<std::string::String>,
}

/// See [`DescribeJobInput`](crate::input::DescribeJobInput)
pub mod describe_job_input {
    /// A builder for [`DescribeJobInput`](crate::input::DescribeJobInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        job_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn job_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.job_id = Some(input.into());
            self
        }
        pub fn set_job_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.job_id = input;
            self
        }
        /// Consumes the builder and constructs a [`DescribeJobInput`](crate::input::DescribeJobInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::DescribeJobInput, smithy_http::operation::BuildError> {
            Ok(crate::input::DescribeJobInput {
                job_id: self.job_id,
            })
        }
    }
}

impl DescribeJobInput {
    /// Consumes the builder and constructs an Operation<[`DescribeJob`](crate::operation::DescribeJob)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::DescribeJob>,
        smithy_http::operation::BuildError,
    > {
        let body = serde_json::to_vec(self).map_err(serialization_error)?;
        let request = http::Request::builder()
            .method("POST")
            .uri("/")
            .header(http::header::CONTENT_TYPE, "application/x-amz-json-1.1")
            .header(
                "X-Amz-Target",
                "AWSIESnowballJobManagementService.DescribeJob",
            )
            .header(http::header::CONTENT_LENGTH, body.len())
            .body(smithy_http::body::SdkBody::from(body))?;
        Ok(finish_operation(
            config,
            request,
            crate::operation::DescribeJob::new(),
            "DescribeJob",
        ))
    }
    /// Creates a new builder-style object to manufacture [`DescribeJobInput`](crate::input::DescribeJobInput)
    pub fn builder() -> crate::input::describe_job_input::Builder {
        crate::input::describe_job_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct DescribeJobInput {
    #[serde(rename = "JobId")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub job_id: std::option::Option<std::string::String>,
}

/// See [`GetJobManifestInput`](crate::input::GetJobManifestInput)
pub mod get_job_manifest_input {
    /// A builder for [`GetJobManifestInput`](crate::input::GetJobManifestInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        job_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn job_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.job_id = Some(input.into());
            self
        }
        pub fn set_job_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.job_id = input;
            self
        }
        /// Consumes the builder and constructs a [`GetJobManifestInput`](crate::input::GetJobManifestInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::GetJobManifestInput, smithy_http::operation::BuildError> {
            Ok(crate::input::GetJobManifestInput {
                job_id: self.job_id,
            })
        }
    }
}

impl GetJobManifestInput {
    /// Consumes the builder and constructs an Operation<[`GetJobManifest`](crate::operation::GetJobManifest)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::GetJobManifest>,
        smithy_http::operation::BuildError,
    > {
        let body = serde_json::to_vec(self).map_err(serialization_error)?;
        let request = http::Request::builder()
            .method("POST")
            .uri("/")
            .header(http::header::CONTENT_TYPE, "application/x-amz-json-1.1")
            .header(
                "X-Amz-Target",
                "AWSIESnowballJobManagementService.GetJobManifest",
            )
            .header(http::header::CONTENT_LENGTH, body.len())
            .body(smithy_http::body::SdkBody::from(body))?;
        Ok(finish_operation(
            config,
            request,
            crate::operation::GetJobManifest::new(),
            "GetJobManifest",
        ))
    }
    /// Creates a new builder-style object to manufacture [`GetJobManifestInput`](crate::input::GetJobManifestInput)
    pub fn builder() -> crate::input::get_job_manifest_input::Builder {
        crate::input::get_job_manifest_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct GetJobManifestInput {
    #[serde(rename = "JobId")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub job_id: std::option::Option<std::string::String>,
}

/// See [`GetJobUnlockCodeInput`](crate::input::GetJobUnlockCodeInput)
pub mod get_job_unlock_code_input {
    /// A builder for [`GetJobUnlockCodeInput`](crate::input::GetJobUnlockCodeInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        job_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn job_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.job_id = Some(input.into());
            self
        }
        pub fn set_job_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.job_id = input;
            self
        }
        /// Consumes the builder and constructs a [`GetJobUnlockCodeInput`](crate::input::GetJobUnlockCodeInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::GetJobUnlockCodeInput, smithy_http::operation::BuildError> {
            Ok(crate::input::GetJobUnlockCodeInput {
                job_id: self.job_id,
            })
        }
    }
}

impl GetJobUnlockCodeInput {
    /// Consumes the builder and constructs an Operation<[`GetJobUnlockCode`](crate::operation::GetJobUnlockCode)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::GetJobUnlockCode>,
        smithy_http::operation::BuildError,
    > {
        let body = serde_json::to_vec(self).map_err(serialization_error)?;
        let request = http::Request::builder()
            .method("POST")
            .uri("/")
            .header(http::header::CONTENT_TYPE, "application/x-amz-json-1.1")
            .header(
                "X-Amz-Target",
                "AWSIESnowballJobManagementService.GetJobUnlockCode",
            )
            .header(http::header::CONTENT_LENGTH, body.len())
            .body(smithy_http::body::SdkBody::from(body))?;
        Ok(finish_operation(
            config,
            request,
            crate::operation::GetJobUnlockCode::new(),
            "GetJobUnlockCode",
        ))
    }
    /// Creates a new builder-style object to manufacture [`GetJobUnlockCodeInput`](crate::input::GetJobUnlockCodeInput)
    pub fn builder() -> crate::input::get_job_unlock_code_input::Builder {
        crate::input::get_job_unlock_code_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct GetJobUnlockCodeInput {
    #[serde(rename = "JobId")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub job_id: std::option::Option<std::string::String>,
}

/// See [`GetSnowballUsageInput`](crate::input::GetSnowballUsageInput)
pub mod get_snowball_usage_input {
    /// A builder for [`GetSnowballUsageInput`](crate::input::GetSnowballUsageInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
    }
    impl Builder {
        /// Consumes the builder and constructs a [`GetSnowballUsageInput`](crate::input::GetSnowballUsageInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::GetSnowballUsageInput, smithy_http::operation::BuildError> {
            Ok(crate::input::GetSnowballUsageInput {})
        }
    }
}

impl GetSnowballUsageInput {
    /// Consumes the builder and constructs an Operation<[`GetSnowballUsage`](crate::operation::GetSnowballUsage)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::GetSnowballUsage>,
        smithy_http::operation::BuildError,
    > {
        let body = serde_json::to_vec(self).map_err(serialization_error)?;
        let request = http::Request::builder()
            .method("POST")
            .uri("/")
            .header(http::header::CONTENT_TYPE, "application/x-amz-json-1.1")
            .header(
                "X-Amz-Target",
                "AWSIESnowballJobManagementService.GetSnowballUsage",
            )
            .header(http::header::CONTENT_LENGTH, body.len())
            .body(smithy_http::body::SdkBody::from(body))?;
        Ok(finish_operation(
            config,
            request,
            crate::operation::GetSnowballUsage::new(),
            "GetSnowballUsage",
        ))
    }
    /// Creates a new builder-style object to manufacture [`GetSnowballUsageInput`](crate::input::GetSnowballUsageInput)
    pub fn builder() -> crate::input::get_snowball_usage_input::Builder {
        crate::input::get_snowball_usage_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct GetSnowballUsageInput {
}

/// See [`GetSoftwareUpdatesInput`](crate::input::GetSoftwareUpdatesInput)
pub mod get_software_updates_input {
    /// A builder for [`GetSoftwareUpdatesInput`](crate::input::GetSoftwareUpdatesInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        job_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn job_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.job_id = Some(input.into());
            self
        }
        pub fn set_job_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.job_id = input;
            self
        }
        /// Consumes the builder and constructs a [`GetSoftwareUpdatesInput`](crate::input::GetSoftwareUpdatesInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::GetSoftwareUpdatesInput, smithy_http::operation::BuildError> {
            Ok(crate::input::GetSoftwareUpdatesInput {
                job_id: self.job_id,
            })
        }
    }
}

impl GetSoftwareUpdatesInput {
    /// Consumes the builder and constructs an Operation<[`GetSoftwareUpdates`](crate::operation::GetSoftwareUpdates)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::GetSoftwareUpdates>,
        smithy_http::operation::BuildError,
    > {
        let body = serde_json::to_vec(self).map_err(serialization_error)?;
        let request = http::Request::builder()
            .method("POST")
            .uri("/")
            .header(http::header::CONTENT_TYPE, "application/x-amz-json-1.1")
            .header(
                "X-Amz-Target",
                "AWSIESnowballJobManagementService.GetSoftwareUpdates",
            )
            .header(http::header::CONTENT_LENGTH, body.len())
            .body(smithy_http::body::SdkBody::from(body))?;
        Ok(finish_operation(
            config,
            request,
            crate::operation::GetSoftwareUpdates::new(),
            "GetSoftwareUpdates",
        ))
    }
    /// Creates a new builder-style object to manufacture [`GetSoftwareUpdatesInput`](crate::input::GetSoftwareUpdatesInput)
    pub fn builder() -> crate::input::get_software_updates_input::Builder {
        crate::input::get_software_updates_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct GetSoftwareUpdatesInput {
    #[serde(rename = "JobId")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub job_id: std::option::Option<std::string::String>,
}

/// See [`ListClusterJobsInput`](crate::input::ListClusterJobsInput)
pub mod list_cluster_jobs_input {
    /// A builder for [`ListClusterJobsInput`](crate::input::ListClusterJobsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        cluster_id: std::option::Option<std::string::String>,
        max_results: std::option::Option<i32>,
        next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn cluster_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.cluster_id = Some(input.into());
            self
        }
        pub fn set_cluster_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.cluster_id = input;
            self
        }
        pub fn max_results(mut self, input: i32) -> Self {
            self.max_results = Some(input);
            self
        }
        pub fn set_max_results(mut self, input: std::option::Option<i32>) -> Self {
            self.max_results = input;
            self
        }
        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.next_token = Some(input.into());
            self
        }
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.next_token = input;
            self
        }
        /// Consumes the builder and constructs a [`ListClusterJobsInput`](crate::input::ListClusterJobsInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::ListClusterJobsInput, smithy_http::operation::BuildError> {
            Ok(crate::input::ListClusterJobsInput {
                cluster_id: self.cluster_id,
                max_results: self.max_results,
                next_token: self.next_token,
            })
        }
    }
}

impl ListClusterJobsInput {
    /// Consumes the builder and constructs an Operation<[`ListClusterJobs`](crate::operation::ListClusterJobs)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::ListClusterJobs>,
        smithy_http::operation::BuildError,
    > {
        let body = serde_json::to_vec(self).map_err(serialization_error)?;
        let request = http::Request::builder()
            .method("POST")
            .uri("/")
            .header(http::header::CONTENT_TYPE, "application/x-amz-json-1.1")
            .header(
                "X-Amz-Target",
                "AWSIESnowballJobManagementService.ListClusterJobs",
            )
            .header(http::header::CONTENT_LENGTH, body.len())
            .body(smithy_http::body::SdkBody::from(body))?;
        Ok(finish_operation(
            config,
            request,
            crate::operation::ListClusterJobs::new(),
            "ListClusterJobs",
        ))
    }
    /// Creates a new builder-style object to manufacture [`ListClusterJobsInput`](crate::input::ListClusterJobsInput)
    pub fn builder() -> crate::input::list_cluster_jobs_input::Builder {
        crate::input::list_cluster_jobs_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct ListClusterJobsInput {
    #[serde(rename = "ClusterId")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub cluster_id: std::option::Option<std::string::String>,
    #[serde(rename = "MaxResults")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub max_results: std::option::Option<i32>,
    #[serde(rename = "NextToken")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_token: std::option::Option<std::string::String>,
}

/// See [`ListClustersInput`](crate::input::ListClustersInput)
pub mod list_clusters_input {
    /// A builder for [`ListClustersInput`](crate::input::ListClustersInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        max_results: std::option::Option<i32>,
        next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn max_results(mut self, input: i32) -> Self {
            self.max_results = Some(input);
            self
        }
        pub fn set_max_results(mut self, input: std::option::Option<i32>) -> Self {
            self.max_results = input;
            self
        }
        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.next_token = Some(input.into());
            self
        }
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.next_token = input;
            self
        }
        /// Consumes the builder and constructs a [`ListClustersInput`](crate::input::ListClustersInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::ListClustersInput, smithy_http::operation::BuildError> {
            Ok(crate::input::ListClustersInput {
                max_results: self.max_results,
                next_token: self.next_token,
            })
        }
    }
}

impl ListClustersInput {
    /// Consumes the builder and constructs an Operation<[`ListClusters`](crate::operation::ListClusters)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::ListClusters>,
        smithy_http::operation::BuildError,
    > {
        let body = serde_json::to_vec(self).map_err(serialization_error)?;
        let request = http::Request::builder()
            .method("POST")
            .uri("/")
            .header(http::header::CONTENT_TYPE, "application/x-amz-json-1.1")
            .header(
                "X-Amz-Target",
                "AWSIESnowballJobManagementService.ListClusters",
            )
            .header(http::header::CONTENT_LENGTH, body.len())
            .body(smithy_http::body::SdkBody::from(body))?;
        Ok(finish_operation(
            config,
            request,
            crate::operation::ListClusters::new(),
            "ListClusters",
        ))
    }
    /// Creates a new builder-style object to manufacture [`ListClustersInput`](crate::input::ListClustersInput)
    pub fn builder() -> crate::input::list_clusters_input::Builder {
        crate::input::list_clusters_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct ListClustersInput {
    #[serde(rename = "MaxResults")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub max_results: std::option::Option<i32>,
    #[serde(rename = "NextToken")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_token: std::option::Option<std::string::String>,
}

/// See [`ListCompatibleImagesInput`](crate::input::ListCompatibleImagesInput)
pub mod list_compatible_images_input {
    /// A builder for [`ListCompatibleImagesInput`](crate::input::ListCompatibleImagesInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        max_results: std::option::Option<i32>,
        next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn max_results(mut self, input: i32) -> Self {
            self.max_results = Some(input);
            self
        }
        pub fn set_max_results(mut self, input: std::option::Option<i32>) -> Self {
            self.max_results = input;
            self
        }
        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.next_token = Some(input.into());
            self
        }
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.next_token = input;
            self
        }
        /// Consumes the builder and constructs a [`ListCompatibleImagesInput`](crate::input::ListCompatibleImagesInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::ListCompatibleImagesInput, smithy_http::operation::BuildError> {
            Ok(crate::input::ListCompatibleImagesInput {
                max_results: self.max_results,
                next_token: self.next_token,
            })
        }
    }
}

impl ListCompatibleImagesInput {
    /// Consumes the builder and constructs an Operation<[`ListCompatibleImages`](crate::operation::ListCompatibleImages)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::ListCompatibleImages>,
        smithy_http::operation::BuildError,
    > {
        let body = serde_json::to_vec(self).map_err(serialization_error)?;
        let request = http::Request::builder()
            .method("POST")
            .uri("/")
            .header(http::header::CONTENT_TYPE, "application/x-amz-json-1.1")
            .header(
                "X-Amz-Target",
                "AWSIESnowballJobManagementService.ListCompatibleImages",
            )
            .header(http::header::CONTENT_LENGTH, body.len())
            .body(smithy_http::body::SdkBody::from(body))?;
        Ok(finish_operation(
            config,
            request,
            crate::operation::ListCompatibleImages::new(),
            "ListCompatibleImages",
        ))
    }
    /// Creates a new builder-style object to manufacture [`ListCompatibleImagesInput`](crate::input::ListCompatibleImagesInput)
    pub fn builder() -> crate::input::list_compatible_images_input::Builder {
        crate::input::list_compatible_images_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct ListCompatibleImagesInput {
    #[serde(rename = "MaxResults")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub max_results: std::option::Option<i32>,
    #[serde(rename = "NextToken")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_token: std::option::Option<std::string::String>,
}

/// See [`ListJobsInput`](crate::input::ListJobsInput)
pub mod list_jobs_input {
    /// A builder for [`ListJobsInput`](crate::input::ListJobsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        max_results: std::option::Option<i32>,
        next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn max_results(mut self, input: i32) -> Self {
            self.max_results = Some(input);
            self
        }
        pub fn set_max_results(mut self, input: std::option::Option<i32>) -> Self {
            self.max_results = input;
            self
        }
        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.next_token = Some(input.into());
            self
        }
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.next_token = input;
            self
        }
        /// Consumes the builder and constructs a [`ListJobsInput`](crate::input::ListJobsInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::ListJobsInput, smithy_http::operation::BuildError> {
            Ok(crate::input::ListJobsInput {
                max_results: self.max_results,
                next_token: self.next_token,
            })
        }
    }
}

impl ListJobsInput {
    /// Consumes the builder and constructs an Operation<[`ListJobs`](crate::operation::ListJobs)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::ListJobs>,
        smithy_http::operation::BuildError,
    > {
        let body = serde_json::to_vec(self).map_err(serialization_error)?;
        let request = http::Request::builder()
            .method("POST")
            .uri("/")
            .header(http::header::CONTENT_TYPE, "application/x-amz-json-1.1")
            .header(
                "X-Amz-Target",
                "AWSIESnowballJobManagementService.ListJobs",
            )
            .header(http::header::CONTENT_LENGTH, body.len())
            .body(smithy_http::body::SdkBody::from(body))?;
        Ok(finish_operation(
            config,
            request,
            crate::operation::ListJobs::new(),
            "ListJobs",
        ))
    }
    /// Creates a new builder-style object to manufacture [`ListJobsInput`](crate::input::ListJobsInput)
    pub fn builder() -> crate::input::list_jobs_input::Builder {
        crate::input::list_jobs_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct ListJobsInput {
    #[serde(rename = "MaxResults")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub max_results: std::option::Option<i32>,
    #[serde(rename = "NextToken")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_token: std::option::Option<std::string::String>,
}

/// See [`UpdateClusterInput`](crate::input::UpdateClusterInput)
pub mod update_cluster_input {
    /// A builder for [`UpdateClusterInput`](crate::input::UpdateClusterInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        cluster_id: std::option::Option<std::string::String>,
        role_arn: std::option::Option<std::string::String>,
        description: std::option::Option<std::string::String>,
        resources: std::option::Option<crate::model::JobResource>,
        address_id: std::option::Option<std::string::String>,
        shipping_option: std::option::Option<crate::model::ShippingOption>,
        notification: std::option::Option<crate::model::Notification>,
        forwarding_address_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn cluster_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.cluster_id = Some(input.into());
            self
        }
        pub fn set_cluster_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.cluster_id = input;
            self
        }
        pub fn role_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.role_arn = Some(input.into());
            self
        }
        pub fn set_role_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.role_arn = input;
            self
        }
        pub fn description(mut self, input: impl Into<std::string::String>) -> Self {
            self.description = Some(input.into());
            self
        }
        pub fn set_description(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.description = input;
            self
        }
        pub fn resources(mut self, input: impl Into<crate::model::JobResource>) -> Self {
            self.resources = Some(input.into());
            self
        }
        pub fn set_resources(mut self, input: std::option::Option<crate::model::JobResource>) -> Self {
            self.resources = input;
            self
        }
        pub fn address_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.address_id = Some(input.into());
            self
        }
        pub fn set_address_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.address_id = input;
            self
        }
        pub fn shipping_option(mut self, input: impl Into<crate::model::ShippingOption>) -> Self {
            self.shipping_option = Some(input.into());
            self
        }
        pub fn set_shipping_option(mut self, input: std::option::Option<crate::model::ShippingOption>) -> Self {
            self.shipping_option = input;
            self
        }
        pub fn notification(mut self, input: impl Into<crate::model::Notification>) -> Self {
            self.notification = Some(input.into());
            self
        }
        pub fn set_notification(mut self, input: std::option::Option<crate::model::Notification>) -> Self {
            self.notification = input;
            self
        }
        pub fn forwarding_address_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.forwarding_address_id = Some(input.into());
            self
        }
        pub fn set_forwarding_address_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.forwarding_address_id = input;
            self
        }
        /// Consumes the builder and constructs a [`UpdateClusterInput`](crate::input::UpdateClusterInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::UpdateClusterInput, smithy_http::operation::BuildError> {
            Ok(crate::input::UpdateClusterInput {
                cluster_id: self.cluster_id,
                role_arn: self.role_arn,
                description: self.description,
                resources: self.resources,
                address_id: self.address_id,
                shipping_option: self.shipping_option,
                notification: self.notification,
                forwarding_address_id: self.forwarding_address_id,
            })
        }
    }
}

impl UpdateClusterInput {
    /// Consumes the builder and constructs an Operation<[`UpdateCluster`](crate::operation::UpdateCluster)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::UpdateCluster>,
        smithy_http::operation::BuildError,
    > {
        let body = serde_json::to_vec(self).map_err(serialization_error)?;
        let request = http::Request::builder()
            .method("POST")
            .uri("/")
            .header(http::header::CONTENT_TYPE, "application/x-amz-json-1.1")
            .header(
                "X-Amz-Target",
                "AWSIESnowballJobManagementService.UpdateCluster",
            )
            .header(http::header::CONTENT_LENGTH, body.len())
            .body(smithy_http::body::SdkBody::from(body))?;
        Ok(finish_operation(
            config,
            request,
            crate::operation::UpdateCluster::new(),
            "UpdateCluster",
        ))
    }
    /// Creates a new builder-style object to manufacture [`UpdateClusterInput`](crate::input::UpdateClusterInput)
    pub fn builder() -> crate::input::update_cluster_input::Builder {
        crate::input::update_cluster_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct UpdateClusterInput {
    #[serde(rename = "ClusterId")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub cluster_id: std::option::Option<std::string::String>,
    #[serde(rename = "RoleARN")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub role_arn: std::option::Option<std::string::String>,
    #[serde(rename = "Description")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,
    #[serde(rename = "Resources")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub resources: std::option::Option<crate::model::JobResource>,
    #[serde(rename = "AddressId")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub address_id: std::option::Option<std::string::String>,
    #[serde(rename = "ShippingOption")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub shipping_option: std::option::Option<crate::model::ShippingOption>,
    #[serde(rename = "Notification")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub notification: std::option::Option<crate::model::Notification>,
    #[serde(rename = "ForwardingAddressId")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub forwarding_address_id: std::option::Option<std::string::String>,
}

/// See [`UpdateJobInput`](crate::input::UpdateJobInput)
pub mod update_job_input {
    /// A builder for [`UpdateJobInput`](crate::input::UpdateJobInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        job_id: std::option::Option<std::string::String>,
        role_arn: std::option::Option<std::string::String>,
        notification: std::option::Option<crate::model::Notification>,
        resources: std::option::Option<crate::model::JobResource>,
        address_id: std::option::Option<std::string::String>,
        shipping_option: std::option::Option<crate::model::ShippingOption>,
        description: std::option::Option<std::string::String>,
        snowball_capacity_preference: std::option::Option<crate::model::SnowballCapacity>,
        forwarding_address_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn job_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.job_id = Some(input.into());
            self
        }
        pub fn set_job_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.job_id = input;
            self
        }
        pub fn role_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.role_arn = Some(input.into());
            self
        }
        pub fn set_role_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.role_arn = input;
            self
        }
        pub fn notification(mut self, input: impl Into<crate::model::Notification>) -> Self {
            self.notification = Some(input.into());
            self
        }
        pub fn set_notification(mut self, input: std::option::Option<crate::model::Notification>) -> Self {
            self.notification = input;
            self
        }
        pub fn resources(mut self, input: impl Into<crate::model::JobResource>) -> Self {
            self.resources = Some(input.into());
            self
        }
        pub fn set_resources(mut self, input: std::option::Option<crate::model::JobResource>) -> Self {
            self.resources = input;
            self
        }
        pub fn address_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.address_id = Some(input.into());
            self
        }
        pub fn set_address_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.address_id = input;
            self
        }
        pub fn shipping_option(mut self, input: impl Into<crate::model::ShippingOption>) -> Self {
            self.shipping_option = Some(input.into());
            self
        }
        pub fn set_shipping_option(mut self, input: std::option::Option<crate::model::ShippingOption>) -> Self {
            self.shipping_option = input;
            self
        }
        pub fn description(mut self, input: impl Into<std::string::String>) -> Self {
            self.description = Some(input.into());
            self
        }
        pub fn set_description(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.description = input;
            self
        }
        pub fn snowball_capacity_preference(mut self, input: impl Into<crate::model::SnowballCapacity>) -> Self {
            self.snowball_capacity_preference = Some(input.into());
            self
        }
        pub fn set_snowball_capacity_preference(mut self, input: std::option::Option<crate::model::SnowballCapacity>) -> Self {
            self.snowball_capacity_preference = input;
            self
        }
        pub fn forwarding_address_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.forwarding_address_id = Some(input.into());
            self
        }
        pub fn set_forwarding_address_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.forwarding_address_id = input;
            self
        }
        /// Consumes the builder and constructs a [`UpdateJobInput`](crate::input::UpdateJobInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::UpdateJobInput, smithy_http::operation::BuildError> {
            Ok(crate::input::UpdateJobInput {
                job_id: self.job_id,
                role_arn: self.role_arn,
                notification: self.notification,
                resources: self.resources,
                address_id: self.address_id,
                shipping_option: self.shipping_option,
                description: self.description,
                snowball_capacity_preference: self.snowball_capacity_preference,
                forwarding_address_id: self.forwarding_address_id,
            })
        }
    }
}

impl UpdateJobInput {
    /// Consumes the builder and constructs an Operation<[`UpdateJob`](crate::operation::UpdateJob)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::UpdateJob>,
        smithy_http::operation::BuildError,
    > {
        let body = serde_json::to_vec(self).map_err(serialization_error)?;
        let request = http::Request::builder()
            .method("POST")
            .uri("/")
            .header(http::header::CONTENT_TYPE, "application/x-amz-json-1.1")
            .header(
                "X-Amz-Target",
                "AWSIESnowballJobManagementService.UpdateJob",
            )
            .header(http::header::CONTENT_LENGTH, body.len())
            .body(smithy_http::body::SdkBody::from(body))?;
        Ok(finish_operation(
            config,
            request,
            crate::operation::UpdateJob::new(),
            "UpdateJob",
        ))
    }
    /// Creates a new builder-style object to manufacture [`UpdateJobInput`](crate::input::UpdateJobInput)
    pub fn builder() -> crate::input::update_job_input::Builder {
        crate::input::update_job_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct UpdateJobInput {
    #[serde(rename = "JobId")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub job_id: std::option::Option<std::string::String>,
    #[serde(rename = "RoleARN")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub role_arn: std::option::Option<std::string::String>,
    #[serde(rename = "Notification")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub notification: std::option::Option<crate::model::Notification>,
    #[serde(rename = "Resources")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub resources: std::option::Option<crate::model::JobResource>,
    #[serde(rename = "AddressId")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub address_id: std::option::Option<std::string::String>,
    #[serde(rename = "ShippingOption")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub shipping_option: std::option::Option<crate::model::ShippingOption>,
    #[serde(rename = "Description")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,
    #[serde(rename = "SnowballCapacityPreference")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub snowball_capacity_preference: std::option::Option<crate::model::SnowballCapacity>,
    #[serde(rename = "ForwardingAddressId")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub forwarding_address_id: std::option::Option<std::string::String>,
}
