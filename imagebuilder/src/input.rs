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
        smithy_http::operation::Metadata::new(operation_name, "imagebuilder"),
    )
}

fn serialization_error(err: serde_json::Error) -> smithy_http::operation::BuildError {
    smithy_http::operation::BuildError::SerializationError(err.into())
}

/// See [`CancelImageCreationInput`](crate::input::CancelImageCreationInput)
pub mod cancel_image_creation_input {
    /// A builder for [`CancelImageCreationInput`](crate::input::CancelImageCreationInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        image_build_version_arn: std::option::Option<std::string::String>,
        client_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn image_build_version_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.image_build_version_arn = Some(input.into());
            self
        }
        pub fn set_image_build_version_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.image_build_version_arn = input;
            self
        }
        pub fn client_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.client_token = Some(input.into());
            self
        }
        pub fn set_client_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.client_token = input;
            self
        }
        /// Consumes the builder and constructs a [`CancelImageCreationInput`](crate::input::CancelImageCreationInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::CancelImageCreationInput, smithy_http::operation::BuildError> {
            Ok(crate::input::CancelImageCreationInput {
                image_build_version_arn: self.image_build_version_arn,
                client_token: self.client_token,
            })
        }
    }
}

impl CancelImageCreationInput {
    /// Consumes the builder and constructs an Operation<[`CancelImageCreation`](crate::operation::CancelImageCreation)>
    pub fn make_operation(
        mut self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::CancelImageCreation>,
        smithy_http::operation::BuildError,
    > {
        if self.client_token.is_none() {
            self.client_token = Some(config.token_provider.make_idempotency_token());
        }
        let uri = std::string::String::from("/CancelImageCreation");
        let body = serde_json::to_vec(&self).map_err(serialization_error)?;
        let request = http::Request::builder()
            .method("PUT")
            .uri(uri)
            .header(http::header::CONTENT_TYPE, "application/json")
            .header(http::header::CONTENT_LENGTH, body.len())
            .body(smithy_http::body::SdkBody::from(body))?;
        Ok(finish_operation(
            config,
            request,
            crate::operation::CancelImageCreation::new(),
            "CancelImageCreation",
        ))
    }
    /// Creates a new builder-style object to manufacture [`CancelImageCreationInput`](crate::input::CancelImageCreationInput)
    pub fn builder() -> crate::input::cancel_image_creation_input::Builder {
        crate::input::cancel_image_creation_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct CancelImageCreationInput {
    #[serde(rename = "imageBuildVersionArn")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub image_build_version_arn: std::option::Option<std::string::String>,
    #[serde(rename = "clientToken")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub client_token: std::option::Option<std::string::String>,
}

/// See [`CreateComponentInput`](crate::input::CreateComponentInput)
pub mod create_component_input {
    /// A builder for [`CreateComponentInput`](crate::input::CreateComponentInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        name: std::option::Option<std::string::String>,
        semantic_version: std::option::Option<std::string::String>,
        description: std::option::Option<std::string::String>,
        change_description: std::option::Option<std::string::String>,
        platform: std::option::Option<crate::model::Platform>,
        supported_os_versions: std::option::Option<std::vec::Vec<std::string::String>>,
        data: std::option::Option<std::string::String>,
        uri: std::option::Option<std::string::String>,
        kms_key_id: std::option::Option<std::string::String>,
        tags: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
        client_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn name(mut self, input: impl Into<std::string::String>) -> Self {
            self.name = Some(input.into());
            self
        }
        pub fn set_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.name = input;
            self
        }
        pub fn semantic_version(mut self, input: impl Into<std::string::String>) -> Self {
            self.semantic_version = Some(input.into());
            self
        }
        pub fn set_semantic_version(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.semantic_version = input;
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
        pub fn change_description(mut self, input: impl Into<std::string::String>) -> Self {
            self.change_description = Some(input.into());
            self
        }
        pub fn set_change_description(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.change_description = input;
            self
        }
        pub fn platform(mut self, input: impl Into<crate::model::Platform>) -> Self {
            self.platform = Some(input.into());
            self
        }
        pub fn set_platform(mut self, input: std::option::Option<crate::model::Platform>) -> Self {
            self.platform = input;
            self
        }
        pub fn supported_os_versions(mut self, input: impl Into<std::string::String>) -> Self {
            let mut v = self.supported_os_versions.unwrap_or_default();
            v.push(input.into());
            self.supported_os_versions = Some(v);
            self
        }
        pub fn set_supported_os_versions(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.supported_os_versions = input;
            self
        }
        pub fn data(mut self, input: impl Into<std::string::String>) -> Self {
            self.data = Some(input.into());
            self
        }
        pub fn set_data(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.data = input;
            self
        }
        pub fn uri(mut self, input: impl Into<std::string::String>) -> Self {
            self.uri = Some(input.into());
            self
        }
        pub fn set_uri(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.uri = input;
            self
        }
        pub fn kms_key_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.kms_key_id = Some(input.into());
            self
        }
        pub fn set_kms_key_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.kms_key_id = input;
            self
        }
        pub fn tags(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::string::String>,
        ) -> Self {
            let mut hash_map = self.tags.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.tags = Some(hash_map);
            self
        }
        pub fn set_tags(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>) -> Self {
            self.tags = input;
            self
        }
        pub fn client_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.client_token = Some(input.into());
            self
        }
        pub fn set_client_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.client_token = input;
            self
        }
        /// Consumes the builder and constructs a [`CreateComponentInput`](crate::input::CreateComponentInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::CreateComponentInput, smithy_http::operation::BuildError> {
            Ok(crate::input::CreateComponentInput {
                name: self.name,
                semantic_version: self.semantic_version,
                description: self.description,
                change_description: self.change_description,
                platform: self.platform,
                supported_os_versions: self.supported_os_versions,
                data: self.data,
                uri: self.uri,
                kms_key_id: self.kms_key_id,
                tags: self.tags,
                client_token: self.client_token,
            })
        }
    }
}

impl CreateComponentInput {
    /// Consumes the builder and constructs an Operation<[`CreateComponent`](crate::operation::CreateComponent)>
    pub fn make_operation(
        mut self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::CreateComponent>,
        smithy_http::operation::BuildError,
    > {
        if self.client_token.is_none() {
            self.client_token = Some(config.token_provider.make_idempotency_token());
        }
        let uri = std::string::String::from("/CreateComponent");
        let body = serde_json::to_vec(&self).map_err(serialization_error)?;
        let request = http::Request::builder()
            .method("PUT")
            .uri(uri)
            .header(http::header::CONTENT_TYPE, "application/json")
            .header(http::header::CONTENT_LENGTH, body.len())
            .body(smithy_http::body::SdkBody::from(body))?;
        Ok(finish_operation(
            config,
            request,
            crate::operation::CreateComponent::new(),
            "CreateComponent",
        ))
    }
    /// Creates a new builder-style object to manufacture [`CreateComponentInput`](crate::input::CreateComponentInput)
    pub fn builder() -> crate::input::create_component_input::Builder {
        crate::input::create_component_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct CreateComponentInput {
    #[serde(rename = "name")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,
    #[serde(rename = "semanticVersion")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub semantic_version: std::option::Option<std::string::String>,
    #[serde(rename = "description")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,
    #[serde(rename = "changeDescription")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub change_description: std::option::Option<std::string::String>,
    #[serde(rename = "platform")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub platform: std::option::Option<crate::model::Platform>,
    #[serde(rename = "supportedOsVersions")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub supported_os_versions: std::option::Option<std::vec::Vec<std::string::String>>,
    #[serde(rename = "data")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub data: std::option::Option<std::string::String>,
    #[serde(rename = "uri")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub uri: std::option::Option<std::string::String>,
    #[serde(rename = "kmsKeyId")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub kms_key_id: std::option::Option<std::string::String>,
    #[serde(rename = "tags")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub tags: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
    #[serde(rename = "clientToken")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub client_token: std::option::Option<std::string::String>,
}

/// See [`CreateDistributionConfigurationInput`](crate::input::CreateDistributionConfigurationInput)
pub mod create_distribution_configuration_input {
    /// A builder for [`CreateDistributionConfigurationInput`](crate::input::CreateDistributionConfigurationInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        name: std::option::Option<std::string::String>,
        description: std::option::Option<std::string::String>,
        distributions: std::option::Option<std::vec::Vec<crate::model::Distribution>>,
        tags: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
        client_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn name(mut self, input: impl Into<std::string::String>) -> Self {
            self.name = Some(input.into());
            self
        }
        pub fn set_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.name = input;
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
        pub fn distributions(mut self, input: impl Into<crate::model::Distribution>) -> Self {
            let mut v = self.distributions.unwrap_or_default();
            v.push(input.into());
            self.distributions = Some(v);
            self
        }
        pub fn set_distributions(mut self, input: std::option::Option<std::vec::Vec<crate::model::Distribution>>) -> Self {
            self.distributions = input;
            self
        }
        pub fn tags(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::string::String>,
        ) -> Self {
            let mut hash_map = self.tags.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.tags = Some(hash_map);
            self
        }
        pub fn set_tags(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>) -> Self {
            self.tags = input;
            self
        }
        pub fn client_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.client_token = Some(input.into());
            self
        }
        pub fn set_client_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.client_token = input;
            self
        }
        /// Consumes the builder and constructs a [`CreateDistributionConfigurationInput`](crate::input::CreateDistributionConfigurationInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::CreateDistributionConfigurationInput, smithy_http::operation::BuildError> {
            Ok(crate::input::CreateDistributionConfigurationInput {
                name: self.name,
                description: self.description,
                distributions: self.distributions,
                tags: self.tags,
                client_token: self.client_token,
            })
        }
    }
}

impl CreateDistributionConfigurationInput {
    /// Consumes the builder and constructs an Operation<[`CreateDistributionConfiguration`](crate::operation::CreateDistributionConfiguration)>
    pub fn make_operation(
        mut self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::CreateDistributionConfiguration>,
        smithy_http::operation::BuildError,
    > {
        if self.client_token.is_none() {
            self.client_token = Some(config.token_provider.make_idempotency_token());
        }
        let uri = std::string::String::from("/CreateDistributionConfiguration");
        let body = serde_json::to_vec(&self).map_err(serialization_error)?;
        let request = http::Request::builder()
            .method("PUT")
            .uri(uri)
            .header(http::header::CONTENT_TYPE, "application/json")
            .header(http::header::CONTENT_LENGTH, body.len())
            .body(smithy_http::body::SdkBody::from(body))?;
        Ok(finish_operation(
            config,
            request,
            crate::operation::CreateDistributionConfiguration::new(),
            "CreateDistributionConfiguration",
        ))
    }
    /// Creates a new builder-style object to manufacture [`CreateDistributionConfigurationInput`](crate::input::CreateDistributionConfigurationInput)
    pub fn builder() -> crate::input::create_distribution_configuration_input::Builder {
        crate::input::create_distribution_configuration_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct CreateDistributionConfigurationInput {
    #[serde(rename = "name")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,
    #[serde(rename = "description")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,
    #[serde(rename = "distributions")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub distributions: std::option::Option<std::vec::Vec<crate::model::Distribution>>,
    #[serde(rename = "tags")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub tags: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
    #[serde(rename = "clientToken")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub client_token: std::option::Option<std::string::String>,
}

/// See [`CreateImageInput`](crate::input::CreateImageInput)
pub mod create_image_input {
    /// A builder for [`CreateImageInput`](crate::input::CreateImageInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        image_recipe_arn: std::option::Option<std::string::String>,
        distribution_configuration_arn: std::option::Option<std::string::String>,
        infrastructure_configuration_arn: std::option::Option<std::string::String>,
        image_tests_configuration: std::option::Option<crate::model::ImageTestsConfiguration>,
        enhanced_image_metadata_enabled: std::option::Option<bool>,
        tags: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
        client_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn image_recipe_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.image_recipe_arn = Some(input.into());
            self
        }
        pub fn set_image_recipe_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.image_recipe_arn = input;
            self
        }
        pub fn distribution_configuration_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.distribution_configuration_arn = Some(input.into());
            self
        }
        pub fn set_distribution_configuration_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.distribution_configuration_arn = input;
            self
        }
        pub fn infrastructure_configuration_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.infrastructure_configuration_arn = Some(input.into());
            self
        }
        pub fn set_infrastructure_configuration_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.infrastructure_configuration_arn = input;
            self
        }
        pub fn image_tests_configuration(mut self, input: impl Into<crate::model::ImageTestsConfiguration>) -> Self {
            self.image_tests_configuration = Some(input.into());
            self
        }
        pub fn set_image_tests_configuration(mut self, input: std::option::Option<crate::model::ImageTestsConfiguration>) -> Self {
            self.image_tests_configuration = input;
            self
        }
        pub fn enhanced_image_metadata_enabled(mut self, input: bool) -> Self {
            self.enhanced_image_metadata_enabled = Some(input);
            self
        }
        pub fn set_enhanced_image_metadata_enabled(mut self, input: std::option::Option<bool>) -> Self {
            self.enhanced_image_metadata_enabled = input;
            self
        }
        pub fn tags(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::string::String>,
        ) -> Self {
            let mut hash_map = self.tags.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.tags = Some(hash_map);
            self
        }
        pub fn set_tags(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>) -> Self {
            self.tags = input;
            self
        }
        pub fn client_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.client_token = Some(input.into());
            self
        }
        pub fn set_client_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.client_token = input;
            self
        }
        /// Consumes the builder and constructs a [`CreateImageInput`](crate::input::CreateImageInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::CreateImageInput, smithy_http::operation::BuildError> {
            Ok(crate::input::CreateImageInput {
                image_recipe_arn: self.image_recipe_arn,
                distribution_configuration_arn: self.distribution_configuration_arn,
                infrastructure_configuration_arn: self.infrastructure_configuration_arn,
                image_tests_configuration: self.image_tests_configuration,
                enhanced_image_metadata_enabled: self.enhanced_image_metadata_enabled,
                tags: self.tags,
                client_token: self.client_token,
            })
        }
    }
}

impl CreateImageInput {
    /// Consumes the builder and constructs an Operation<[`CreateImage`](crate::operation::CreateImage)>
    pub fn make_operation(
        mut self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::CreateImage>,
        smithy_http::operation::BuildError,
    > {
        if self.client_token.is_none() {
            self.client_token = Some(config.token_provider.make_idempotency_token());
        }
        let uri = std::string::String::from("/CreateImage");
        let body = serde_json::to_vec(&self).map_err(serialization_error)?;
        let request = http::Request::builder()
            .method("PUT")
            .uri(uri)
            .header(http::header::CONTENT_TYPE, "application/json")
            .header(http::header::CONTENT_LENGTH, body.len())
            .body(smithy_http::body::SdkBody::from(body))?;
        Ok(finish_operation(
            config,
            request,
            crate::operation::CreateImage::new(),
            "CreateImage",
        ))
    }
    /// Creates a new builder-style object to manufacture [`CreateImageInput`](crate::input::CreateImageInput)
    pub fn builder() -> crate::input::create_image_input::Builder {
        crate::input::create_image_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct CreateImageInput {
    #[serde(rename = "imageRecipeArn")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub image_recipe_arn: std::option::Option<std::string::String>,
    #[serde(rename = "distributionConfigurationArn")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub distribution_configuration_arn: std::option::Option<std::string::String>,
    #[serde(rename = "infrastructureConfigurationArn")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub infrastructure_configuration_arn: std::option::Option<std::string::String>,
    #[serde(rename = "imageTestsConfiguration")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub image_tests_configuration: std::option::Option<crate::model::ImageTestsConfiguration>,
    #[serde(rename = "enhancedImageMetadataEnabled")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub enhanced_image_metadata_enabled: std::option::Option<bool>,
    #[serde(rename = "tags")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub tags: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
    #[serde(rename = "clientToken")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub client_token: std::option::Option<std::string::String>,
}

/// See [`CreateImagePipelineInput`](crate::input::CreateImagePipelineInput)
pub mod create_image_pipeline_input {
    /// A builder for [`CreateImagePipelineInput`](crate::input::CreateImagePipelineInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        name: std::option::Option<std::string::String>,
        description: std::option::Option<std::string::String>,
        image_recipe_arn: std::option::Option<std::string::String>,
        infrastructure_configuration_arn: std::option::Option<std::string::String>,
        distribution_configuration_arn: std::option::Option<std::string::String>,
        image_tests_configuration: std::option::Option<crate::model::ImageTestsConfiguration>,
        enhanced_image_metadata_enabled: std::option::Option<bool>,
        schedule: std::option::Option<crate::model::Schedule>,
        status: std::option::Option<crate::model::PipelineStatus>,
        tags: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
        client_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn name(mut self, input: impl Into<std::string::String>) -> Self {
            self.name = Some(input.into());
            self
        }
        pub fn set_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.name = input;
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
        pub fn image_recipe_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.image_recipe_arn = Some(input.into());
            self
        }
        pub fn set_image_recipe_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.image_recipe_arn = input;
            self
        }
        pub fn infrastructure_configuration_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.infrastructure_configuration_arn = Some(input.into());
            self
        }
        pub fn set_infrastructure_configuration_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.infrastructure_configuration_arn = input;
            self
        }
        pub fn distribution_configuration_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.distribution_configuration_arn = Some(input.into());
            self
        }
        pub fn set_distribution_configuration_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.distribution_configuration_arn = input;
            self
        }
        pub fn image_tests_configuration(mut self, input: impl Into<crate::model::ImageTestsConfiguration>) -> Self {
            self.image_tests_configuration = Some(input.into());
            self
        }
        pub fn set_image_tests_configuration(mut self, input: std::option::Option<crate::model::ImageTestsConfiguration>) -> Self {
            self.image_tests_configuration = input;
            self
        }
        pub fn enhanced_image_metadata_enabled(mut self, input: bool) -> Self {
            self.enhanced_image_metadata_enabled = Some(input);
            self
        }
        pub fn set_enhanced_image_metadata_enabled(mut self, input: std::option::Option<bool>) -> Self {
            self.enhanced_image_metadata_enabled = input;
            self
        }
        pub fn schedule(mut self, input: impl Into<crate::model::Schedule>) -> Self {
            self.schedule = Some(input.into());
            self
        }
        pub fn set_schedule(mut self, input: std::option::Option<crate::model::Schedule>) -> Self {
            self.schedule = input;
            self
        }
        pub fn status(mut self, input: impl Into<crate::model::PipelineStatus>) -> Self {
            self.status = Some(input.into());
            self
        }
        pub fn set_status(mut self, input: std::option::Option<crate::model::PipelineStatus>) -> Self {
            self.status = input;
            self
        }
        pub fn tags(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::string::String>,
        ) -> Self {
            let mut hash_map = self.tags.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.tags = Some(hash_map);
            self
        }
        pub fn set_tags(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>) -> Self {
            self.tags = input;
            self
        }
        pub fn client_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.client_token = Some(input.into());
            self
        }
        pub fn set_client_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.client_token = input;
            self
        }
        /// Consumes the builder and constructs a [`CreateImagePipelineInput`](crate::input::CreateImagePipelineInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::CreateImagePipelineInput, smithy_http::operation::BuildError> {
            Ok(crate::input::CreateImagePipelineInput {
                name: self.name,
                description: self.description,
                image_recipe_arn: self.image_recipe_arn,
                infrastructure_configuration_arn: self.infrastructure_configuration_arn,
                distribution_configuration_arn: self.distribution_configuration_arn,
                image_tests_configuration: self.image_tests_configuration,
                enhanced_image_metadata_enabled: self.enhanced_image_metadata_enabled,
                schedule: self.schedule,
                status: self.status,
                tags: self.tags,
                client_token: self.client_token,
            })
        }
    }
}

impl CreateImagePipelineInput {
    /// Consumes the builder and constructs an Operation<[`CreateImagePipeline`](crate::operation::CreateImagePipeline)>
    pub fn make_operation(
        mut self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::CreateImagePipeline>,
        smithy_http::operation::BuildError,
    > {
        if self.client_token.is_none() {
            self.client_token = Some(config.token_provider.make_idempotency_token());
        }
        let uri = std::string::String::from("/CreateImagePipeline");
        let body = serde_json::to_vec(&self).map_err(serialization_error)?;
        let request = http::Request::builder()
            .method("PUT")
            .uri(uri)
            .header(http::header::CONTENT_TYPE, "application/json")
            .header(http::header::CONTENT_LENGTH, body.len())
            .body(smithy_http::body::SdkBody::from(body))?;
        Ok(finish_operation(
            config,
            request,
            crate::operation::CreateImagePipeline::new(),
            "CreateImagePipeline",
        ))
    }
    /// Creates a new builder-style object to manufacture [`CreateImagePipelineInput`](crate::input::CreateImagePipelineInput)
    pub fn builder() -> crate::input::create_image_pipeline_input::Builder {
        crate::input::create_image_pipeline_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct CreateImagePipelineInput {
    #[serde(rename = "name")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,
    #[serde(rename = "description")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,
    #[serde(rename = "imageRecipeArn")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub image_recipe_arn: std::option::Option<std::string::String>,
    #[serde(rename = "infrastructureConfigurationArn")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub infrastructure_configuration_arn: std::option::Option<std::string::String>,
    #[serde(rename = "distributionConfigurationArn")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub distribution_configuration_arn: std::option::Option<std::string::String>,
    #[serde(rename = "imageTestsConfiguration")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub image_tests_configuration: std::option::Option<crate::model::ImageTestsConfiguration>,
    #[serde(rename = "enhancedImageMetadataEnabled")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub enhanced_image_metadata_enabled: std::option::Option<bool>,
    #[serde(rename = "schedule")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub schedule: std::option::Option<crate::model::Schedule>,
    #[serde(rename = "status")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub status: std::option::Option<crate::model::PipelineStatus>,
    #[serde(rename = "tags")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub tags: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
    #[serde(rename = "clientToken")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub client_token: std::option::Option<std::string::String>,
}

/// See [`CreateImageRecipeInput`](crate::input::CreateImageRecipeInput)
pub mod create_image_recipe_input {
    /// A builder for [`CreateImageRecipeInput`](crate::input::CreateImageRecipeInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        name: std::option::Option<std::string::String>,
        description: std::option::Option<std::string::String>,
        semantic_version: std::option::Option<std::string::String>,
        components: std::option::Option<std::vec::Vec<crate::model::ComponentConfiguration>>,
        parent_image: std::option::Option<std::string::String>,
        block_device_mappings: std::option::Option<std::vec::Vec<crate::model::InstanceBlockDeviceMapping>>,
        tags: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
        working_directory: std::option::Option<std::string::String>,
        client_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn name(mut self, input: impl Into<std::string::String>) -> Self {
            self.name = Some(input.into());
            self
        }
        pub fn set_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.name = input;
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
        pub fn semantic_version(mut self, input: impl Into<std::string::String>) -> Self {
            self.semantic_version = Some(input.into());
            self
        }
        pub fn set_semantic_version(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.semantic_version = input;
            self
        }
        pub fn components(mut self, input: impl Into<crate::model::ComponentConfiguration>) -> Self {
            let mut v = self.components.unwrap_or_default();
            v.push(input.into());
            self.components = Some(v);
            self
        }
        pub fn set_components(mut self, input: std::option::Option<std::vec::Vec<crate::model::ComponentConfiguration>>) -> Self {
            self.components = input;
            self
        }
        pub fn parent_image(mut self, input: impl Into<std::string::String>) -> Self {
            self.parent_image = Some(input.into());
            self
        }
        pub fn set_parent_image(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.parent_image = input;
            self
        }
        pub fn block_device_mappings(mut self, input: impl Into<crate::model::InstanceBlockDeviceMapping>) -> Self {
            let mut v = self.block_device_mappings.unwrap_or_default();
            v.push(input.into());
            self.block_device_mappings = Some(v);
            self
        }
        pub fn set_block_device_mappings(mut self, input: std::option::Option<std::vec::Vec<crate::model::InstanceBlockDeviceMapping>>) -> Self {
            self.block_device_mappings = input;
            self
        }
        pub fn tags(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::string::String>,
        ) -> Self {
            let mut hash_map = self.tags.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.tags = Some(hash_map);
            self
        }
        pub fn set_tags(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>) -> Self {
            self.tags = input;
            self
        }
        pub fn working_directory(mut self, input: impl Into<std::string::String>) -> Self {
            self.working_directory = Some(input.into());
            self
        }
        pub fn set_working_directory(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.working_directory = input;
            self
        }
        pub fn client_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.client_token = Some(input.into());
            self
        }
        pub fn set_client_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.client_token = input;
            self
        }
        /// Consumes the builder and constructs a [`CreateImageRecipeInput`](crate::input::CreateImageRecipeInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::CreateImageRecipeInput, smithy_http::operation::BuildError> {
            Ok(crate::input::CreateImageRecipeInput {
                name: self.name,
                description: self.description,
                semantic_version: self.semantic_version,
                components: self.components,
                parent_image: self.parent_image,
                block_device_mappings: self.block_device_mappings,
                tags: self.tags,
                working_directory: self.working_directory,
                client_token: self.client_token,
            })
        }
    }
}

impl CreateImageRecipeInput {
    /// Consumes the builder and constructs an Operation<[`CreateImageRecipe`](crate::operation::CreateImageRecipe)>
    pub fn make_operation(
        mut self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::CreateImageRecipe>,
        smithy_http::operation::BuildError,
    > {
        if self.client_token.is_none() {
            self.client_token = Some(config.token_provider.make_idempotency_token());
        }
        let uri = std::string::String::from("/CreateImageRecipe");
        let body = serde_json::to_vec(&self).map_err(serialization_error)?;
        let request = http::Request::builder()
            .method("PUT")
            .uri(uri)
            .header(http::header::CONTENT_TYPE, "application/json")
            .header(http::header::CONTENT_LENGTH, body.len())
            .body(smithy_http::body::SdkBody::from(body))?;
        Ok(finish_operation(
            config,
            request,
            crate::operation::CreateImageRecipe::new(),
            "CreateImageRecipe",
        ))
    }
    /// Creates a new builder-style object to manufacture [`CreateImageRecipeInput`](crate::input::CreateImageRecipeInput)
    pub fn builder() -> crate::input::create_image_recipe_input::Builder {
        crate::input::create_image_recipe_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct CreateImageRecipeInput {
    #[serde(rename = "name")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,
    #[serde(rename = "description")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,
    #[serde(rename = "semanticVersion")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub semantic_version: std::option::Option<std::string::String>,
    #[serde(rename = "components")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub components: std::option::Option<std::vec::Vec<crate::model::ComponentConfiguration>>,
    #[serde(rename = "parentImage")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub parent_image: std::option::Option<std::string::String>,
    #[serde(rename = "blockDeviceMappings")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub block_device_mappings: std::option::Option<std::vec::Vec<crate::model::InstanceBlockDeviceMapping>>,
    #[serde(rename = "tags")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub tags: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
    #[serde(rename = "workingDirectory")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub working_directory: std::option::Option<std::string::String>,
    #[serde(rename = "clientToken")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub client_token: std::option::Option<std::string::String>,
}

/// See [`CreateInfrastructureConfigurationInput`](crate::input::CreateInfrastructureConfigurationInput)
pub mod create_infrastructure_configuration_input {
    /// A builder for [`CreateInfrastructureConfigurationInput`](crate::input::CreateInfrastructureConfigurationInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        name: std::option::Option<std::string::String>,
        description: std::option::Option<std::string::String>,
        instance_types: std::option::Option<std::vec::Vec<std::string::String>>,
        instance_profile_name: std::option::Option<std::string::String>,
        security_group_ids: std::option::Option<std::vec::Vec<std::string::String>>,
        subnet_id: std::option::Option<std::string::String>,
        logging: std::option::Option<crate::model::Logging>,
        key_pair: std::option::Option<std::string::String>,
        terminate_instance_on_failure: std::option::Option<bool>,
        sns_topic_arn: std::option::Option<std::string::String>,
        resource_tags: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
        tags: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
        client_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn name(mut self, input: impl Into<std::string::String>) -> Self {
            self.name = Some(input.into());
            self
        }
        pub fn set_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.name = input;
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
        pub fn instance_types(mut self, input: impl Into<std::string::String>) -> Self {
            let mut v = self.instance_types.unwrap_or_default();
            v.push(input.into());
            self.instance_types = Some(v);
            self
        }
        pub fn set_instance_types(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.instance_types = input;
            self
        }
        pub fn instance_profile_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.instance_profile_name = Some(input.into());
            self
        }
        pub fn set_instance_profile_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.instance_profile_name = input;
            self
        }
        pub fn security_group_ids(mut self, input: impl Into<std::string::String>) -> Self {
            let mut v = self.security_group_ids.unwrap_or_default();
            v.push(input.into());
            self.security_group_ids = Some(v);
            self
        }
        pub fn set_security_group_ids(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.security_group_ids = input;
            self
        }
        pub fn subnet_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.subnet_id = Some(input.into());
            self
        }
        pub fn set_subnet_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.subnet_id = input;
            self
        }
        pub fn logging(mut self, input: impl Into<crate::model::Logging>) -> Self {
            self.logging = Some(input.into());
            self
        }
        pub fn set_logging(mut self, input: std::option::Option<crate::model::Logging>) -> Self {
            self.logging = input;
            self
        }
        pub fn key_pair(mut self, input: impl Into<std::string::String>) -> Self {
            self.key_pair = Some(input.into());
            self
        }
        pub fn set_key_pair(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.key_pair = input;
            self
        }
        pub fn terminate_instance_on_failure(mut self, input: bool) -> Self {
            self.terminate_instance_on_failure = Some(input);
            self
        }
        pub fn set_terminate_instance_on_failure(mut self, input: std::option::Option<bool>) -> Self {
            self.terminate_instance_on_failure = input;
            self
        }
        pub fn sns_topic_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.sns_topic_arn = Some(input.into());
            self
        }
        pub fn set_sns_topic_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.sns_topic_arn = input;
            self
        }
        pub fn resource_tags(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::string::String>,
        ) -> Self {
            let mut hash_map = self.resource_tags.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.resource_tags = Some(hash_map);
            self
        }
        pub fn set_resource_tags(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>) -> Self {
            self.resource_tags = input;
            self
        }
        pub fn tags(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::string::String>,
        ) -> Self {
            let mut hash_map = self.tags.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.tags = Some(hash_map);
            self
        }
        pub fn set_tags(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>) -> Self {
            self.tags = input;
            self
        }
        pub fn client_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.client_token = Some(input.into());
            self
        }
        pub fn set_client_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.client_token = input;
            self
        }
        /// Consumes the builder and constructs a [`CreateInfrastructureConfigurationInput`](crate::input::CreateInfrastructureConfigurationInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::CreateInfrastructureConfigurationInput, smithy_http::operation::BuildError> {
            Ok(crate::input::CreateInfrastructureConfigurationInput {
                name: self.name,
                description: self.description,
                instance_types: self.instance_types,
                instance_profile_name: self.instance_profile_name,
                security_group_ids: self.security_group_ids,
                subnet_id: self.subnet_id,
                logging: self.logging,
                key_pair: self.key_pair,
                terminate_instance_on_failure: self.terminate_instance_on_failure,
                sns_topic_arn: self.sns_topic_arn,
                resource_tags: self.resource_tags,
                tags: self.tags,
                client_token: self.client_token,
            })
        }
    }
}

impl CreateInfrastructureConfigurationInput {
    /// Consumes the builder and constructs an Operation<[`CreateInfrastructureConfiguration`](crate::operation::CreateInfrastructureConfiguration)>
    pub fn make_operation(
        mut self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::CreateInfrastructureConfiguration>,
        smithy_http::operation::BuildError,
    > {
        if self.client_token.is_none() {
            self.client_token = Some(config.token_provider.make_idempotency_token());
        }
        let uri = std::string::String::from("/CreateInfrastructureConfiguration");
        let body = serde_json::to_vec(&self).map_err(serialization_error)?;
        let request = http::Request::builder()
            .method("PUT")
            .uri(uri)
            .header(http::header::CONTENT_TYPE, "application/json")
            .header(http::header::CONTENT_LENGTH, body.len())
            .body(smithy_http::body::SdkBody::from(body))?;
        Ok(finish_operation(
            config,
            request,
            crate::operation::CreateInfrastructureConfiguration::new(),
            "CreateInfrastructureConfiguration",
        ))
    }
    /// Creates a new builder-style object to manufacture [`CreateInfrastructureConfigurationInput`](crate::input::CreateInfrastructureConfigurationInput)
    pub fn builder() -> crate::input::create_infrastructure_configuration_input::Builder {
        crate::input::create_infrastructure_configuration_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct CreateInfrastructureConfigurationInput {
    #[serde(rename = "name")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,
    #[serde(rename = "description")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,
    #[serde(rename = "instanceTypes")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub instance_types: std::option::Option<std::vec::Vec<std::string::String>>,
    #[serde(rename = "instanceProfileName")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub instance_profile_name: std::option::Option<std::string::String>,
    #[serde(rename = "securityGroupIds")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub security_group_ids: std::option::Option<std::vec::Vec<std::string::String>>,
    #[serde(rename = "subnetId")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub subnet_id: std::option::Option<std::string::String>,
    #[serde(rename = "logging")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub logging: std::option::Option<crate::model::Logging>,
    #[serde(rename = "keyPair")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub key_pair: std::option::Option<std::string::String>,
    #[serde(rename = "terminateInstanceOnFailure")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub terminate_instance_on_failure: std::option::Option<bool>,
    #[serde(rename = "snsTopicArn")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub sns_topic_arn: std::option::Option<std::string::String>,
    #[serde(rename = "resourceTags")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub resource_tags: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
    #[serde(rename = "tags")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub tags: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
    #[serde(rename = "clientToken")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub client_token: std::option::Option<std::string::String>,
}

/// See [`DeleteComponentInput`](crate::input::DeleteComponentInput)
pub mod delete_component_input {
    /// A builder for [`DeleteComponentInput`](crate::input::DeleteComponentInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        component_build_version_arn: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn component_build_version_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.component_build_version_arn = Some(input.into());
            self
        }
        pub fn set_component_build_version_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.component_build_version_arn = input;
            self
        }
        /// Consumes the builder and constructs a [`DeleteComponentInput`](crate::input::DeleteComponentInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::DeleteComponentInput, smithy_http::operation::BuildError> {
            if self.component_build_version_arn.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "component_build_version_arn",
                    details: "component_build_version_arn was not specified but it is required when building DeleteComponentInput",
                });
            }
            Ok(crate::input::DeleteComponentInput {
                component_build_version_arn: self.component_build_version_arn,
            })
        }
    }
}

impl DeleteComponentInput {
    /// Consumes the builder and constructs an Operation<[`DeleteComponent`](crate::operation::DeleteComponent)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::DeleteComponent>,
        smithy_http::operation::BuildError,
    > {
        let mut uri = std::string::String::from("/DeleteComponent");
        let mut query = smithy_http::query::Writer::new(&mut uri);
        let component_build_version_arn = self.component_build_version_arn.as_ref().ok_or(
            smithy_http::operation::BuildError::MissingField {
                field: "component_build_version_arn",
                details: "component_build_version_arn was not specified but it is required when building DeleteComponentInput",
            }
        )?;
        query.push_kv("componentBuildVersionArn", component_build_version_arn);
        let request = http::Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(smithy_http::body::SdkBody::empty())?;
        Ok(finish_operation(
            config,
            request,
            crate::operation::DeleteComponent::new(),
            "DeleteComponent",
        ))
    }
    /// Creates a new builder-style object to manufacture [`DeleteComponentInput`](crate::input::DeleteComponentInput)
    pub fn builder() -> crate::input::delete_component_input::Builder {
        crate::input::delete_component_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct DeleteComponentInput {
    #[serde(skip)]
    pub component_build_version_arn: std::option::Option<std::string::String>,
}

/// See [`DeleteDistributionConfigurationInput`](crate::input::DeleteDistributionConfigurationInput)
pub mod delete_distribution_configuration_input {
    /// A builder for [`DeleteDistributionConfigurationInput`](crate::input::DeleteDistributionConfigurationInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        distribution_configuration_arn: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn distribution_configuration_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.distribution_configuration_arn = Some(input.into());
            self
        }
        pub fn set_distribution_configuration_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.distribution_configuration_arn = input;
            self
        }
        /// Consumes the builder and constructs a [`DeleteDistributionConfigurationInput`](crate::input::DeleteDistributionConfigurationInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::DeleteDistributionConfigurationInput, smithy_http::operation::BuildError> {
            if self.distribution_configuration_arn.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "distribution_configuration_arn",
                    details: "distribution_configuration_arn was not specified but it is required when building DeleteDistributionConfigurationInput",
                });
            }
            Ok(crate::input::DeleteDistributionConfigurationInput {
                distribution_configuration_arn: self.distribution_configuration_arn,
            })
        }
    }
}

impl DeleteDistributionConfigurationInput {
    /// Consumes the builder and constructs an Operation<[`DeleteDistributionConfiguration`](crate::operation::DeleteDistributionConfiguration)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::DeleteDistributionConfiguration>,
        smithy_http::operation::BuildError,
    > {
        let mut uri = std::string::String::from("/DeleteDistributionConfiguration");
        let mut query = smithy_http::query::Writer::new(&mut uri);
        let distribution_configuration_arn = self.distribution_configuration_arn.as_ref().ok_or(
            smithy_http::operation::BuildError::MissingField {
                field: "distribution_configuration_arn",
                details: "distribution_configuration_arn was not specified but it is required when building DeleteDistributionConfigurationInput",
            }
        )?;
        query.push_kv("distributionConfigurationArn", distribution_configuration_arn);
        let request = http::Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(smithy_http::body::SdkBody::empty())?;
        Ok(finish_operation(
            config,
            request,
            crate::operation::DeleteDistributionConfiguration::new(),
            "DeleteDistributionConfiguration",
        ))
    }
    /// Creates a new builder-style object to manufacture [`DeleteDistributionConfigurationInput`](crate::input::DeleteDistributionConfigurationInput)
    pub fn builder() -> crate::input::delete_distribution_configuration_input::Builder {
        crate::input::delete_distribution_configuration_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct DeleteDistributionConfigurationInput {
    #[serde(skip)]
    pub distribution_configuration_arn: std::option::Option<std::string::String>,
}

/// See [`DeleteImageInput`](crate::input::DeleteImageInput)
pub mod delete_image_input {
    /// A builder for [`DeleteImageInput`](crate::input::DeleteImageInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        image_build_version_arn: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn image_build_version_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.image_build_version_arn = Some(input.into());
            self
        }
        pub fn set_image_build_version_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.image_build_version_arn = input;
            self
        }
        /// Consumes the builder and constructs a [`DeleteImageInput`](crate::input::DeleteImageInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::DeleteImageInput, smithy_http::operation::BuildError> {
            if self.image_build_version_arn.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "image_build_version_arn",
                    details: "image_build_version_arn was not specified but it is required when building DeleteImageInput",
                });
            }
            Ok(crate::input::DeleteImageInput {
                image_build_version_arn: self.image_build_version_arn,
            })
        }
    }
}

impl DeleteImageInput {
    /// Consumes the builder and constructs an Operation<[`DeleteImage`](crate::operation::DeleteImage)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::DeleteImage>,
        smithy_http::operation::BuildError,
    > {
        let mut uri = std::string::String::from("/DeleteImage");
        let mut query = smithy_http::query::Writer::new(&mut uri);
        let image_build_version_arn = self.image_build_version_arn.as_ref().ok_or(
            smithy_http::operation::BuildError::MissingField {
                field: "image_build_version_arn",
                details: "image_build_version_arn was not specified but it is required when building DeleteImageInput",
            }
        )?;
        query.push_kv("imageBuildVersionArn", image_build_version_arn);
        let request = http::Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(smithy_http::body::SdkBody::empty())?;
        Ok(finish_operation(
            config,
            request,
            crate::operation::DeleteImage::new(),
            "DeleteImage",
        ))
    }
    /// Creates a new builder-style object to manufacture [`DeleteImageInput`](crate::input::DeleteImageInput)
    pub fn builder() -> crate::input::delete_image_input::Builder {
        crate::input::delete_image_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct DeleteImageInput {
    #[serde(skip)]
    pub image_build_version_arn: std::option::Option<std::string::String>,
}

/// See [`DeleteImagePipelineInput`](crate::input::DeleteImagePipelineInput)
pub mod delete_image_pipeline_input {
    /// A builder for [`DeleteImagePipelineInput`](crate::input::DeleteImagePipelineInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        image_pipeline_arn: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn image_pipeline_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.image_pipeline_arn = Some(input.into());
            self
        }
        pub fn set_image_pipeline_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.image_pipeline_arn = input;
            self
        }
        /// Consumes the builder and constructs a [`DeleteImagePipelineInput`](crate::input::DeleteImagePipelineInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::DeleteImagePipelineInput, smithy_http::operation::BuildError> {
            if self.image_pipeline_arn.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "image_pipeline_arn",
                    details: "image_pipeline_arn was not specified but it is required when building DeleteImagePipelineInput",
                });
            }
            Ok(crate::input::DeleteImagePipelineInput {
                image_pipeline_arn: self.image_pipeline_arn,
            })
        }
    }
}

impl DeleteImagePipelineInput {
    /// Consumes the builder and constructs an Operation<[`DeleteImagePipeline`](crate::operation::DeleteImagePipeline)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::DeleteImagePipeline>,
        smithy_http::operation::BuildError,
    > {
        let mut uri = std::string::String::from("/DeleteImagePipeline");
        let mut query = smithy_http::query::Writer::new(&mut uri);
        let image_pipeline_arn = self.image_pipeline_arn.as_ref().ok_or(
            smithy_http::operation::BuildError::MissingField {
                field: "image_pipeline_arn",
                details: "image_pipeline_arn was not specified but it is required when building DeleteImagePipelineInput",
            }
        )?;
        query.push_kv("imagePipelineArn", image_pipeline_arn);
        let request = http::Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(smithy_http::body::SdkBody::empty())?;
        Ok(finish_operation(
            config,
            request,
            crate::operation::DeleteImagePipeline::new(),
            "DeleteImagePipeline",
        ))
    }
    /// Creates a new builder-style object to manufacture [`DeleteImagePipelineInput`](crate::input::DeleteImagePipelineInput)
    pub fn builder() -> crate::input::delete_image_pipeline_input::Builder {
        crate::input::delete_image_pipeline_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct DeleteImagePipelineInput {
    #[serde(skip)]
    pub image_pipeline_arn: std::option::Option<std::string::String>,
}

/// See [`DeleteImageRecipeInput`](crate::input::DeleteImageRecipeInput)
pub mod delete_image_recipe_input {
    /// A builder for [`DeleteImageRecipeInput`](crate::input::DeleteImageRecipeInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        image_recipe_arn: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn image_recipe_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.image_recipe_arn = Some(input.into());
            self
        }
        pub fn set_image_recipe_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.image_recipe_arn = input;
            self
        }
        /// Consumes the builder and constructs a [`DeleteImageRecipeInput`](crate::input::DeleteImageRecipeInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::DeleteImageRecipeInput, smithy_http::operation::BuildError> {
            if self.image_recipe_arn.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "image_recipe_arn",
                    details: "image_recipe_arn was not specified but it is required when building DeleteImageRecipeInput",
                });
            }
            Ok(crate::input::DeleteImageRecipeInput {
                image_recipe_arn: self.image_recipe_arn,
            })
        }
    }
}

impl DeleteImageRecipeInput {
    /// Consumes the builder and constructs an Operation<[`DeleteImageRecipe`](crate::operation::DeleteImageRecipe)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::DeleteImageRecipe>,
        smithy_http::operation::BuildError,
    > {
        let mut uri = std::string::String::from("/DeleteImageRecipe");
        let mut query = smithy_http::query::Writer::new(&mut uri);
        let image_recipe_arn = self.image_recipe_arn.as_ref().ok_or(
            smithy_http::operation::BuildError::MissingField {
                field: "image_recipe_arn",
                details: "image_recipe_arn was not specified but it is required when building DeleteImageRecipeInput",
            }
        )?;
        query.push_kv("imageRecipeArn", image_recipe_arn);
        let request = http::Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(smithy_http::body::SdkBody::empty())?;
        Ok(finish_operation(
            config,
            request,
            crate::operation::DeleteImageRecipe::new(),
            "DeleteImageRecipe",
        ))
    }
    /// Creates a new builder-style object to manufacture [`DeleteImageRecipeInput`](crate::input::DeleteImageRecipeInput)
    pub fn builder() -> crate::input::delete_image_recipe_input::Builder {
        crate::input::delete_image_recipe_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct DeleteImageRecipeInput {
    #[serde(skip)]
    pub image_recipe_arn: std::option::Option<std::string::String>,
}

/// See [`DeleteInfrastructureConfigurationInput`](crate::input::DeleteInfrastructureConfigurationInput)
pub mod delete_infrastructure_configuration_input {
    /// A builder for [`DeleteInfrastructureConfigurationInput`](crate::input::DeleteInfrastructureConfigurationInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        infrastructure_configuration_arn: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn infrastructure_configuration_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.infrastructure_configuration_arn = Some(input.into());
            self
        }
        pub fn set_infrastructure_configuration_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.infrastructure_configuration_arn = input;
            self
        }
        /// Consumes the builder and constructs a [`DeleteInfrastructureConfigurationInput`](crate::input::DeleteInfrastructureConfigurationInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::DeleteInfrastructureConfigurationInput, smithy_http::operation::BuildError> {
            if self.infrastructure_configuration_arn.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "infrastructure_configuration_arn",
                    details: "infrastructure_configuration_arn was not specified but it is required when building DeleteInfrastructureConfigurationInput",
                });
            }
            Ok(crate::input::DeleteInfrastructureConfigurationInput {
                infrastructure_configuration_arn: self.infrastructure_configuration_arn,
            })
        }
    }
}

impl DeleteInfrastructureConfigurationInput {
    /// Consumes the builder and constructs an Operation<[`DeleteInfrastructureConfiguration`](crate::operation::DeleteInfrastructureConfiguration)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::DeleteInfrastructureConfiguration>,
        smithy_http::operation::BuildError,
    > {
        let mut uri = std::string::String::from("/DeleteInfrastructureConfiguration");
        let mut query = smithy_http::query::Writer::new(&mut uri);
        let infrastructure_configuration_arn = self.infrastructure_configuration_arn.as_ref().ok_or(
            smithy_http::operation::BuildError::MissingField {
                field: "infrastructure_configuration_arn",
                details: "infrastructure_configuration_arn was not specified but it is required when building DeleteInfrastructureConfigurationInput",
            }
        )?;
        query.push_kv("infrastructureConfigurationArn", infrastructure_configuration_arn);
        let request = http::Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(smithy_http::body::SdkBody::empty())?;
        Ok(finish_operation(
            config,
            request,
            crate::operation::DeleteInfrastructureConfiguration::new(),
            "DeleteInfrastructureConfiguration",
        ))
    }
    /// Creates a new builder-style object to manufacture [`DeleteInfrastructureConfigurationInput`](crate::input::DeleteInfrastructureConfigurationInput)
    pub fn builder() -> crate::input::delete_infrastructure_configuration_input::Builder {
        crate::input::delete_infrastructure_configuration_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct DeleteInfrastructureConfigurationInput {
    #[serde(skip)]
    pub infrastructure_configuration_arn: std::option::Option<std::string::String>,
}

/// See [`GetComponentInput`](crate::input::GetComponentInput)
pub mod get_component_input {
    /// A builder for [`GetComponentInput`](crate::input::GetComponentInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        component_build_version_arn: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn component_build_version_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.component_build_version_arn = Some(input.into());
            self
        }
        pub fn set_component_build_version_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.component_build_version_arn = input;
            self
        }
        /// Consumes the builder and constructs a [`GetComponentInput`](crate::input::GetComponentInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::GetComponentInput, smithy_http::operation::BuildError> {
            if self.component_build_version_arn.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "component_build_version_arn",
                    details: "component_build_version_arn was not specified but it is required when building GetComponentInput",
                });
            }
            Ok(crate::input::GetComponentInput {
                component_build_version_arn: self.component_build_version_arn,
            })
        }
    }
}

impl GetComponentInput {
    /// Consumes the builder and constructs an Operation<[`GetComponent`](crate::operation::GetComponent)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::GetComponent>,
        smithy_http::operation::BuildError,
    > {
        let mut uri = std::string::String::from("/GetComponent");
        let mut query = smithy_http::query::Writer::new(&mut uri);
        let component_build_version_arn = self.component_build_version_arn.as_ref().ok_or(
            smithy_http::operation::BuildError::MissingField {
                field: "component_build_version_arn",
                details: "component_build_version_arn was not specified but it is required when building GetComponentInput",
            }
        )?;
        query.push_kv("componentBuildVersionArn", component_build_version_arn);
        let request = http::Request::builder()
            .method("GET")
            .uri(uri)
            .body(smithy_http::body::SdkBody::empty())?;
        Ok(finish_operation(
            config,
            request,
            crate::operation::GetComponent::new(),
            "GetComponent",
        ))
    }
    /// Creates a new builder-style object to manufacture [`GetComponentInput`](crate::input::GetComponentInput)
    pub fn builder() -> crate::input::get_component_input::Builder {
        crate::input::get_component_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct GetComponentInput {
    #[serde(skip)]
    pub component_build_version_arn: std::option::Option<std::string::String>,
}

/// See [`GetComponentPolicyInput`](crate::input::GetComponentPolicyInput)
pub mod get_component_policy_input {
    /// A builder for [`GetComponentPolicyInput`](crate::input::GetComponentPolicyInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        component_arn: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn component_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.component_arn = Some(input.into());
            self
        }
        pub fn set_component_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.component_arn = input;
            self
        }
        /// Consumes the builder and constructs a [`GetComponentPolicyInput`](crate::input::GetComponentPolicyInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::GetComponentPolicyInput, smithy_http::operation::BuildError> {
            if self.component_arn.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "component_arn",
                    details: "component_arn was not specified but it is required when building GetComponentPolicyInput",
                });
            }
            Ok(crate::input::GetComponentPolicyInput {
                component_arn: self.component_arn,
            })
        }
    }
}

impl GetComponentPolicyInput {
    /// Consumes the builder and constructs an Operation<[`GetComponentPolicy`](crate::operation::GetComponentPolicy)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::GetComponentPolicy>,
        smithy_http::operation::BuildError,
    > {
        let mut uri = std::string::String::from("/GetComponentPolicy");
        let mut query = smithy_http::query::Writer::new(&mut uri);
        let component_arn = self.component_arn.as_ref().ok_or(
            smithy_http::operation::BuildError::MissingField {
                field: "component_arn",
                details: "component_arn was not specified but it is required when building GetComponentPolicyInput",
            }
        )?;
        query.push_kv("componentArn", component_arn);
        let request = http::Request::builder()
            .method("GET")
            .uri(uri)
            .body(smithy_http::body::SdkBody::empty())?;
        Ok(finish_operation(
            config,
            request,
            crate::operation::GetComponentPolicy::new(),
            "GetComponentPolicy",
        ))
    }
    /// Creates a new builder-style object to manufacture [`GetComponentPolicyInput`](crate::input::GetComponentPolicyInput)
    pub fn builder() -> crate::input::get_component_policy_input::Builder {
        crate::input::get_component_policy_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct GetComponentPolicyInput {
    #[serde(skip)]
    pub component_arn: std::option::Option<std::string::String>,
}

/// See [`GetDistributionConfigurationInput`](crate::input::GetDistributionConfigurationInput)
pub mod get_distribution_configuration_input {
    /// A builder for [`GetDistributionConfigurationInput`](crate::input::GetDistributionConfigurationInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        distribution_configuration_arn: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn distribution_configuration_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.distribution_configuration_arn = Some(input.into());
            self
        }
        pub fn set_distribution_configuration_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.distribution_configuration_arn = input;
            self
        }
        /// Consumes the builder and constructs a [`GetDistributionConfigurationInput`](crate::input::GetDistributionConfigurationInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::GetDistributionConfigurationInput, smithy_http::operation::BuildError> {
            if self.distribution_configuration_arn.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "distribution_configuration_arn",
                    details: "distribution_configuration_arn was not specified but it is required when building GetDistributionConfigurationInput",
                });
            }
            Ok(crate::input::GetDistributionConfigurationInput {
                distribution_configuration_arn: self.distribution_configuration_arn,
            })
        }
    }
}

impl GetDistributionConfigurationInput {
    /// Consumes the builder and constructs an Operation<[`GetDistributionConfiguration`](crate::operation::GetDistributionConfiguration)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::GetDistributionConfiguration>,
        smithy_http::operation::BuildError,
    > {
        let mut uri = std::string::String::from("/GetDistributionConfiguration");
        let mut query = smithy_http::query::Writer::new(&mut uri);
        let distribution_configuration_arn = self.distribution_configuration_arn.as_ref().ok_or(
            smithy_http::operation::BuildError::MissingField {
                field: "distribution_configuration_arn",
                details: "distribution_configuration_arn was not specified but it is required when building GetDistributionConfigurationInput",
            }
        )?;
        query.push_kv("distributionConfigurationArn", distribution_configuration_arn);
        let request = http::Request::builder()
            .method("GET")
            .uri(uri)
            .body(smithy_http::body::SdkBody::empty())?;
        Ok(finish_operation(
            config,
            request,
            crate::operation::GetDistributionConfiguration::new(),
            "GetDistributionConfiguration",
        ))
    }
    /// Creates a new builder-style object to manufacture [`GetDistributionConfigurationInput`](crate::input::GetDistributionConfigurationInput)
    pub fn builder() -> crate::input::get_distribution_configuration_input::Builder {
        crate::input::get_distribution_configuration_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct GetDistributionConfigurationInput {
    #[serde(skip)]
    pub distribution_configuration_arn: std::option::Option<std::string::String>,
}

/// See [`GetImageInput`](crate::input::GetImageInput)
pub mod get_image_input {
    /// A builder for [`GetImageInput`](crate::input::GetImageInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        image_build_version_arn: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn image_build_version_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.image_build_version_arn = Some(input.into());
            self
        }
        pub fn set_image_build_version_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.image_build_version_arn = input;
            self
        }
        /// Consumes the builder and constructs a [`GetImageInput`](crate::input::GetImageInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::GetImageInput, smithy_http::operation::BuildError> {
            if self.image_build_version_arn.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "image_build_version_arn",
                    details: "image_build_version_arn was not specified but it is required when building GetImageInput",
                });
            }
            Ok(crate::input::GetImageInput {
                image_build_version_arn: self.image_build_version_arn,
            })
        }
    }
}

impl GetImageInput {
    /// Consumes the builder and constructs an Operation<[`GetImage`](crate::operation::GetImage)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::GetImage>,
        smithy_http::operation::BuildError,
    > {
        let mut uri = std::string::String::from("/GetImage");
        let mut query = smithy_http::query::Writer::new(&mut uri);
        let image_build_version_arn = self.image_build_version_arn.as_ref().ok_or(
            smithy_http::operation::BuildError::MissingField {
                field: "image_build_version_arn",
                details: "image_build_version_arn was not specified but it is required when building GetImageInput",
            }
        )?;
        query.push_kv("imageBuildVersionArn", image_build_version_arn);
        let request = http::Request::builder()
            .method("GET")
            .uri(uri)
            .body(smithy_http::body::SdkBody::empty())?;
        Ok(finish_operation(
            config,
            request,
            crate::operation::GetImage::new(),
            "GetImage",
        ))
    }
    /// Creates a new builder-style object to manufacture [`GetImageInput`](crate::input::GetImageInput)
    pub fn builder() -> crate::input::get_image_input::Builder {
        crate::input::get_image_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct GetImageInput {
    #[serde(skip)]
    pub image_build_version_arn: std::option::Option<std::string::String>,
}

/// See [`GetImagePipelineInput`](crate::input::GetImagePipelineInput)
pub mod get_image_pipeline_input {
    /// A builder for [`GetImagePipelineInput`](crate::input::GetImagePipelineInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        image_pipeline_arn: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn image_pipeline_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.image_pipeline_arn = Some(input.into());
            self
        }
        pub fn set_image_pipeline_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.image_pipeline_arn = input;
            self
        }
        /// Consumes the builder and constructs a [`GetImagePipelineInput`](crate::input::GetImagePipelineInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::GetImagePipelineInput, smithy_http::operation::BuildError> {
            if self.image_pipeline_arn.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "image_pipeline_arn",
                    details: "image_pipeline_arn was not specified but it is required when building GetImagePipelineInput",
                });
            }
            Ok(crate::input::GetImagePipelineInput {
                image_pipeline_arn: self.image_pipeline_arn,
            })
        }
    }
}

impl GetImagePipelineInput {
    /// Consumes the builder and constructs an Operation<[`GetImagePipeline`](crate::operation::GetImagePipeline)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::GetImagePipeline>,
        smithy_http::operation::BuildError,
    > {
        let mut uri = std::string::String::from("/GetImagePipeline");
        let mut query = smithy_http::query::Writer::new(&mut uri);
        let image_pipeline_arn = self.image_pipeline_arn.as_ref().ok_or(
            smithy_http::operation::BuildError::MissingField {
                field: "image_pipeline_arn",
                details: "image_pipeline_arn was not specified but it is required when building GetImagePipelineInput",
            }
        )?;
        query.push_kv("imagePipelineArn", image_pipeline_arn);
        let request = http::Request::builder()
            .method("GET")
            .uri(uri)
            .body(smithy_http::body::SdkBody::empty())?;
        Ok(finish_operation(
            config,
            request,
            crate::operation::GetImagePipeline::new(),
            "GetImagePipeline",
        ))
    }
    /// Creates a new builder-style object to manufacture [`GetImagePipelineInput`](crate::input::GetImagePipelineInput)
    pub fn builder() -> crate::input::get_image_pipeline_input::Builder {
        crate::input::get_image_pipeline_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct GetImagePipelineInput {
    #[serde(skip)]
    pub image_pipeline_arn: std::option::Option<std::string::String>,
}

/// See [`GetImagePolicyInput`](crate::input::GetImagePolicyInput)
pub mod get_image_policy_input {
    /// A builder for [`GetImagePolicyInput`](crate::input::GetImagePolicyInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        image_arn: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn image_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.image_arn = Some(input.into());
            self
        }
        pub fn set_image_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.image_arn = input;
            self
        }
        /// Consumes the builder and constructs a [`GetImagePolicyInput`](crate::input::GetImagePolicyInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::GetImagePolicyInput, smithy_http::operation::BuildError> {
            if self.image_arn.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "image_arn",
                    details: "image_arn was not specified but it is required when building GetImagePolicyInput",
                });
            }
            Ok(crate::input::GetImagePolicyInput {
                image_arn: self.image_arn,
            })
        }
    }
}

impl GetImagePolicyInput {
    /// Consumes the builder and constructs an Operation<[`GetImagePolicy`](crate::operation::GetImagePolicy)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::GetImagePolicy>,
        smithy_http::operation::BuildError,
    > {
        let mut uri = std::string::String::from("/GetImagePolicy");
        let mut query = smithy_http::query::Writer::new(&mut uri);
        let image_arn = self.image_arn.as_ref().ok_or(
            smithy_http::operation::BuildError::MissingField {
                field: "image_arn",
                details: "image_arn was not specified but it is required when building GetImagePolicyInput",
            }
        )?;
        query.push_kv("imageArn", image_arn);
        let request = http::Request::builder()
            .method("GET")
            .uri(uri)
            .body(smithy_http::body::SdkBody::empty())?;
        Ok(finish_operation(
            config,
            request,
            crate::operation::GetImagePolicy::new(),
            "GetImagePolicy",
        ))
    }
    /// Creates a new builder-style object to manufacture [`GetImagePolicyInput`](crate::input::GetImagePolicyInput)
    pub fn builder() -> crate::input::get_image_policy_input::Builder {
        crate::input::get_image_policy_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct GetImagePolicyInput {
    #[serde(skip)]
    pub image_arn: std::option::Option<std::string::String>,
}

/// See [`GetImageRecipeInput`](crate::input::GetImageRecipeInput)
pub mod get_image_recipe_input {
    /// A builder for [`GetImageRecipeInput`](crate::input::GetImageRecipeInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        image_recipe_arn: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn image_recipe_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.image_recipe_arn = Some(input.into());
            self
        }
        pub fn set_image_recipe_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.image_recipe_arn = input;
            self
        }
        /// Consumes the builder and constructs a [`GetImageRecipeInput`](crate::input::GetImageRecipeInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::GetImageRecipeInput, smithy_http::operation::BuildError> {
            if self.image_recipe_arn.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "image_recipe_arn",
                    details: "image_recipe_arn was not specified but it is required when building GetImageRecipeInput",
                });
            }
            Ok(crate::input::GetImageRecipeInput {
                image_recipe_arn: self.image_recipe_arn,
            })
        }
    }
}

impl GetImageRecipeInput {
    /// Consumes the builder and constructs an Operation<[`GetImageRecipe`](crate::operation::GetImageRecipe)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::GetImageRecipe>,
        smithy_http::operation::BuildError,
    > {
        let mut uri = std::string::String::from("/GetImageRecipe");
        let mut query = smithy_http::query::Writer::new(&mut uri);
        let image_recipe_arn = self.image_recipe_arn.as_ref().ok_or(
            smithy_http::operation::BuildError::MissingField {
                field: "image_recipe_arn",
                details: "image_recipe_arn was not specified but it is required when building GetImageRecipeInput",
            }
        )?;
        query.push_kv("imageRecipeArn", image_recipe_arn);
        let request = http::Request::builder()
            .method("GET")
            .uri(uri)
            .body(smithy_http::body::SdkBody::empty())?;
        Ok(finish_operation(
            config,
            request,
            crate::operation::GetImageRecipe::new(),
            "GetImageRecipe",
        ))
    }
    /// Creates a new builder-style object to manufacture [`GetImageRecipeInput`](crate::input::GetImageRecipeInput)
    pub fn builder() -> crate::input::get_image_recipe_input::Builder {
        crate::input::get_image_recipe_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct GetImageRecipeInput {
    #[serde(skip)]
    pub image_recipe_arn: std::option::Option<std::string::String>,
}

/// See [`GetImageRecipePolicyInput`](crate::input::GetImageRecipePolicyInput)
pub mod get_image_recipe_policy_input {
    /// A builder for [`GetImageRecipePolicyInput`](crate::input::GetImageRecipePolicyInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        image_recipe_arn: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn image_recipe_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.image_recipe_arn = Some(input.into());
            self
        }
        pub fn set_image_recipe_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.image_recipe_arn = input;
            self
        }
        /// Consumes the builder and constructs a [`GetImageRecipePolicyInput`](crate::input::GetImageRecipePolicyInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::GetImageRecipePolicyInput, smithy_http::operation::BuildError> {
            if self.image_recipe_arn.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "image_recipe_arn",
                    details: "image_recipe_arn was not specified but it is required when building GetImageRecipePolicyInput",
                });
            }
            Ok(crate::input::GetImageRecipePolicyInput {
                image_recipe_arn: self.image_recipe_arn,
            })
        }
    }
}

impl GetImageRecipePolicyInput {
    /// Consumes the builder and constructs an Operation<[`GetImageRecipePolicy`](crate::operation::GetImageRecipePolicy)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::GetImageRecipePolicy>,
        smithy_http::operation::BuildError,
    > {
        let mut uri = std::string::String::from("/GetImageRecipePolicy");
        let mut query = smithy_http::query::Writer::new(&mut uri);
        let image_recipe_arn = self.image_recipe_arn.as_ref().ok_or(
            smithy_http::operation::BuildError::MissingField {
                field: "image_recipe_arn",
                details: "image_recipe_arn was not specified but it is required when building GetImageRecipePolicyInput",
            }
        )?;
        query.push_kv("imageRecipeArn", image_recipe_arn);
        let request = http::Request::builder()
            .method("GET")
            .uri(uri)
            .body(smithy_http::body::SdkBody::empty())?;
        Ok(finish_operation(
            config,
            request,
            crate::operation::GetImageRecipePolicy::new(),
            "GetImageRecipePolicy",
        ))
    }
    /// Creates a new builder-style object to manufacture [`GetImageRecipePolicyInput`](crate::input::GetImageRecipePolicyInput)
    pub fn builder() -> crate::input::get_image_recipe_policy_input::Builder {
        crate::input::get_image_recipe_policy_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct GetImageRecipePolicyInput {
    #[serde(skip)]
    pub image_recipe_arn: std::option::Option<std::string::String>,
}

/// See [`GetInfrastructureConfigurationInput`](crate::input::GetInfrastructureConfigurationInput)
pub mod get_infrastructure_configuration_input {
    /// A builder for [`GetInfrastructureConfigurationInput`](crate::input::GetInfrastructureConfigurationInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        infrastructure_configuration_arn: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn infrastructure_configuration_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.infrastructure_configuration_arn = Some(input.into());
            self
        }
        pub fn set_infrastructure_configuration_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.infrastructure_configuration_arn = input;
            self
        }
        /// Consumes the builder and constructs a [`GetInfrastructureConfigurationInput`](crate::input::GetInfrastructureConfigurationInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::GetInfrastructureConfigurationInput, smithy_http::operation::BuildError> {
            if self.infrastructure_configuration_arn.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "infrastructure_configuration_arn",
                    details: "infrastructure_configuration_arn was not specified but it is required when building GetInfrastructureConfigurationInput",
                });
            }
            Ok(crate::input::GetInfrastructureConfigurationInput {
                infrastructure_configuration_arn: self.infrastructure_configuration_arn,
            })
        }
    }
}

impl GetInfrastructureConfigurationInput {
    /// Consumes the builder and constructs an Operation<[`GetInfrastructureConfiguration`](crate::operation::GetInfrastructureConfiguration)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::GetInfrastructureConfiguration>,
        smithy_http::operation::BuildError,
    > {
        let mut uri = std::string::String::from("/GetInfrastructureConfiguration");
        let mut query = smithy_http::query::Writer::new(&mut uri);
        let infrastructure_configuration_arn = self.infrastructure_configuration_arn.as_ref().ok_or(
            smithy_http::operation::BuildError::MissingField {
                field: "infrastructure_configuration_arn",
                details: "infrastructure_configuration_arn was not specified but it is required when building GetInfrastructureConfigurationInput",
            }
        )?;
        query.push_kv("infrastructureConfigurationArn", infrastructure_configuration_arn);
        let request = http::Request::builder()
            .method("GET")
            .uri(uri)
            .body(smithy_http::body::SdkBody::empty())?;
        Ok(finish_operation(
            config,
            request,
            crate::operation::GetInfrastructureConfiguration::new(),
            "GetInfrastructureConfiguration",
        ))
    }
    /// Creates a new builder-style object to manufacture [`GetInfrastructureConfigurationInput`](crate::input::GetInfrastructureConfigurationInput)
    pub fn builder() -> crate::input::get_infrastructure_configuration_input::Builder {
        crate::input::get_infrastructure_configuration_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct GetInfrastructureConfigurationInput {
    #[serde(skip)]
    pub infrastructure_configuration_arn: std::option::Option<std::string::String>,
}

/// See [`ImportComponentInput`](crate::input::ImportComponentInput)
pub mod import_component_input {
    /// A builder for [`ImportComponentInput`](crate::input::ImportComponentInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        name: std::option::Option<std::string::String>,
        semantic_version: std::option::Option<std::string::String>,
        description: std::option::Option<std::string::String>,
        change_description: std::option::Option<std::string::String>,
        r#type: std::option::Option<crate::model::ComponentType>,
        format: std::option::Option<crate::model::ComponentFormat>,
        platform: std::option::Option<crate::model::Platform>,
        data: std::option::Option<std::string::String>,
        uri: std::option::Option<std::string::String>,
        kms_key_id: std::option::Option<std::string::String>,
        tags: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
        client_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn name(mut self, input: impl Into<std::string::String>) -> Self {
            self.name = Some(input.into());
            self
        }
        pub fn set_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.name = input;
            self
        }
        pub fn semantic_version(mut self, input: impl Into<std::string::String>) -> Self {
            self.semantic_version = Some(input.into());
            self
        }
        pub fn set_semantic_version(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.semantic_version = input;
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
        pub fn change_description(mut self, input: impl Into<std::string::String>) -> Self {
            self.change_description = Some(input.into());
            self
        }
        pub fn set_change_description(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.change_description = input;
            self
        }
        pub fn r#type(mut self, input: impl Into<crate::model::ComponentType>) -> Self {
            self.r#type = Some(input.into());
            self
        }
        pub fn set_type(mut self, input: std::option::Option<crate::model::ComponentType>) -> Self {
            self.r#type = input;
            self
        }
        pub fn format(mut self, input: impl Into<crate::model::ComponentFormat>) -> Self {
            self.format = Some(input.into());
            self
        }
        pub fn set_format(mut self, input: std::option::Option<crate::model::ComponentFormat>) -> Self {
            self.format = input;
            self
        }
        pub fn platform(mut self, input: impl Into<crate::model::Platform>) -> Self {
            self.platform = Some(input.into());
            self
        }
        pub fn set_platform(mut self, input: std::option::Option<crate::model::Platform>) -> Self {
            self.platform = input;
            self
        }
        pub fn data(mut self, input: impl Into<std::string::String>) -> Self {
            self.data = Some(input.into());
            self
        }
        pub fn set_data(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.data = input;
            self
        }
        pub fn uri(mut self, input: impl Into<std::string::String>) -> Self {
            self.uri = Some(input.into());
            self
        }
        pub fn set_uri(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.uri = input;
            self
        }
        pub fn kms_key_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.kms_key_id = Some(input.into());
            self
        }
        pub fn set_kms_key_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.kms_key_id = input;
            self
        }
        pub fn tags(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::string::String>,
        ) -> Self {
            let mut hash_map = self.tags.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.tags = Some(hash_map);
            self
        }
        pub fn set_tags(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>) -> Self {
            self.tags = input;
            self
        }
        pub fn client_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.client_token = Some(input.into());
            self
        }
        pub fn set_client_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.client_token = input;
            self
        }
        /// Consumes the builder and constructs a [`ImportComponentInput`](crate::input::ImportComponentInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::ImportComponentInput, smithy_http::operation::BuildError> {
            Ok(crate::input::ImportComponentInput {
                name: self.name,
                semantic_version: self.semantic_version,
                description: self.description,
                change_description: self.change_description,
                r#type: self.r#type,
                format: self.format,
                platform: self.platform,
                data: self.data,
                uri: self.uri,
                kms_key_id: self.kms_key_id,
                tags: self.tags,
                client_token: self.client_token,
            })
        }
    }
}

impl ImportComponentInput {
    /// Consumes the builder and constructs an Operation<[`ImportComponent`](crate::operation::ImportComponent)>
    pub fn make_operation(
        mut self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::ImportComponent>,
        smithy_http::operation::BuildError,
    > {
        if self.client_token.is_none() {
            self.client_token = Some(config.token_provider.make_idempotency_token());
        }
        let uri = std::string::String::from("/ImportComponent");
        let body = serde_json::to_vec(&self).map_err(serialization_error)?;
        let request = http::Request::builder()
            .method("PUT")
            .uri(uri)
            .header(http::header::CONTENT_TYPE, "application/json")
            .header(http::header::CONTENT_LENGTH, body.len())
            .body(smithy_http::body::SdkBody::from(body))?;
        Ok(finish_operation(
            config,
            request,
            crate::operation::ImportComponent::new(),
            "ImportComponent",
        ))
    }
    /// Creates a new builder-style object to manufacture [`ImportComponentInput`](crate::input::ImportComponentInput)
    pub fn builder() -> crate::input::import_component_input::Builder {
        crate::input::import_component_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct ImportComponentInput {
    #[serde(rename = "name")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,
    #[serde(rename = "semanticVersion")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub semantic_version: std::option::Option<std::string::String>,
    #[serde(rename = "description")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,
    #[serde(rename = "changeDescription")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub change_description: std::option::Option<std::string::String>,
    #[serde(rename = "type")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub r#type: std::option::Option<crate::model::ComponentType>,
    #[serde(rename = "format")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub format: std::option::Option<crate::model::ComponentFormat>,
    #[serde(rename = "platform")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub platform: std::option::Option<crate::model::Platform>,
    #[serde(rename = "data")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub data: std::option::Option<std::string::String>,
    #[serde(rename = "uri")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub uri: std::option::Option<std::string::String>,
    #[serde(rename = "kmsKeyId")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub kms_key_id: std::option::Option<std::string::String>,
    #[serde(rename = "tags")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub tags: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
    #[serde(rename = "clientToken")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub client_token: std::option::Option<std::string::String>,
}

/// See [`ListComponentBuildVersionsInput`](crate::input::ListComponentBuildVersionsInput)
pub mod list_component_build_versions_input {
    /// A builder for [`ListComponentBuildVersionsInput`](crate::input::ListComponentBuildVersionsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        component_version_arn: std::option::Option<std::string::String>,
        max_results: std::option::Option<i32>,
        next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn component_version_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.component_version_arn = Some(input.into());
            self
        }
        pub fn set_component_version_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.component_version_arn = input;
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
        /// Consumes the builder and constructs a [`ListComponentBuildVersionsInput`](crate::input::ListComponentBuildVersionsInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::ListComponentBuildVersionsInput, smithy_http::operation::BuildError> {
            Ok(crate::input::ListComponentBuildVersionsInput {
                component_version_arn: self.component_version_arn,
                max_results: self.max_results,
                next_token: self.next_token,
            })
        }
    }
}

impl ListComponentBuildVersionsInput {
    /// Consumes the builder and constructs an Operation<[`ListComponentBuildVersions`](crate::operation::ListComponentBuildVersions)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::ListComponentBuildVersions>,
        smithy_http::operation::BuildError,
    > {
        let uri = std::string::String::from("/ListComponentBuildVersions");
        let body = serde_json::to_vec(self).map_err(serialization_error)?;
        let request = http::Request::builder()
            .method("POST")
            .uri(uri)
            .header(http::header::CONTENT_TYPE, "application/json")
            .header(http::header::CONTENT_LENGTH, body.len())
            .body(smithy_http::body::SdkBody::from(body))?;
        Ok(finish_operation(
            config,
            request,
            crate::operation::ListComponentBuildVersions::new(),
            "ListComponentBuildVersions",
        ))
    }
    /// Creates a new builder-style object to manufacture [`ListComponentBuildVersionsInput`](crate::input::ListComponentBuildVersionsInput)
    pub fn builder() -> crate::input::list_component_build_versions_input::Builder {
        crate::input::list_component_build_versions_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct ListComponentBuildVersionsInput {
    #[serde(rename = "componentVersionArn")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub component_version_arn: std::option::Option<std::string::String>,
    #[serde(rename = "maxResults")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub max_results: std::option::Option<i32>,
    #[serde(rename = "nextToken")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_token: std::option::Option<std::string::String>,
}

/// See [`ListComponentsInput`](crate::input::ListComponentsInput)
pub mod list_components_input {
    /// A builder for [`ListComponentsInput`](crate::input::ListComponentsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        owner: std::option::Option<crate::model::Ownership>,
        filters: std::option::Option<std::vec::Vec<crate::model::Filter>>,
        max_results: std::option::Option<i32>,
        next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn owner(mut self, input: impl Into<crate::model::Ownership>) -> Self {
            self.owner = Some(input.into());
            self
        }
        pub fn set_owner(mut self, input: std::option::Option<crate::model::Ownership>) -> Self {
            self.owner = input;
            self
        }
        pub fn filters(mut self, input: impl Into<crate::model::Filter>) -> Self {
            let mut v = self.filters.unwrap_or_default();
            v.push(input.into());
            self.filters = Some(v);
            self
        }
        pub fn set_filters(mut self, input: std::option::Option<std::vec::Vec<crate::model::Filter>>) -> Self {
            self.filters = input;
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
        /// Consumes the builder and constructs a [`ListComponentsInput`](crate::input::ListComponentsInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::ListComponentsInput, smithy_http::operation::BuildError> {
            Ok(crate::input::ListComponentsInput {
                owner: self.owner,
                filters: self.filters,
                max_results: self.max_results,
                next_token: self.next_token,
            })
        }
    }
}

impl ListComponentsInput {
    /// Consumes the builder and constructs an Operation<[`ListComponents`](crate::operation::ListComponents)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::ListComponents>,
        smithy_http::operation::BuildError,
    > {
        let uri = std::string::String::from("/ListComponents");
        let body = serde_json::to_vec(self).map_err(serialization_error)?;
        let request = http::Request::builder()
            .method("POST")
            .uri(uri)
            .header(http::header::CONTENT_TYPE, "application/json")
            .header(http::header::CONTENT_LENGTH, body.len())
            .body(smithy_http::body::SdkBody::from(body))?;
        Ok(finish_operation(
            config,
            request,
            crate::operation::ListComponents::new(),
            "ListComponents",
        ))
    }
    /// Creates a new builder-style object to manufacture [`ListComponentsInput`](crate::input::ListComponentsInput)
    pub fn builder() -> crate::input::list_components_input::Builder {
        crate::input::list_components_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct ListComponentsInput {
    #[serde(rename = "owner")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub owner: std::option::Option<crate::model::Ownership>,
    #[serde(rename = "filters")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub filters: std::option::Option<std::vec::Vec<crate::model::Filter>>,
    #[serde(rename = "maxResults")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub max_results: std::option::Option<i32>,
    #[serde(rename = "nextToken")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_token: std::option::Option<std::string::String>,
}

/// See [`ListDistributionConfigurationsInput`](crate::input::ListDistributionConfigurationsInput)
pub mod list_distribution_configurations_input {
    /// A builder for [`ListDistributionConfigurationsInput`](crate::input::ListDistributionConfigurationsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        filters: std::option::Option<std::vec::Vec<crate::model::Filter>>,
        max_results: std::option::Option<i32>,
        next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn filters(mut self, input: impl Into<crate::model::Filter>) -> Self {
            let mut v = self.filters.unwrap_or_default();
            v.push(input.into());
            self.filters = Some(v);
            self
        }
        pub fn set_filters(mut self, input: std::option::Option<std::vec::Vec<crate::model::Filter>>) -> Self {
            self.filters = input;
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
        /// Consumes the builder and constructs a [`ListDistributionConfigurationsInput`](crate::input::ListDistributionConfigurationsInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::ListDistributionConfigurationsInput, smithy_http::operation::BuildError> {
            Ok(crate::input::ListDistributionConfigurationsInput {
                filters: self.filters,
                max_results: self.max_results,
                next_token: self.next_token,
            })
        }
    }
}

impl ListDistributionConfigurationsInput {
    /// Consumes the builder and constructs an Operation<[`ListDistributionConfigurations`](crate::operation::ListDistributionConfigurations)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::ListDistributionConfigurations>,
        smithy_http::operation::BuildError,
    > {
        let uri = std::string::String::from("/ListDistributionConfigurations");
        let body = serde_json::to_vec(self).map_err(serialization_error)?;
        let request = http::Request::builder()
            .method("POST")
            .uri(uri)
            .header(http::header::CONTENT_TYPE, "application/json")
            .header(http::header::CONTENT_LENGTH, body.len())
            .body(smithy_http::body::SdkBody::from(body))?;
        Ok(finish_operation(
            config,
            request,
            crate::operation::ListDistributionConfigurations::new(),
            "ListDistributionConfigurations",
        ))
    }
    /// Creates a new builder-style object to manufacture [`ListDistributionConfigurationsInput`](crate::input::ListDistributionConfigurationsInput)
    pub fn builder() -> crate::input::list_distribution_configurations_input::Builder {
        crate::input::list_distribution_configurations_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct ListDistributionConfigurationsInput {
    #[serde(rename = "filters")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub filters: std::option::Option<std::vec::Vec<crate::model::Filter>>,
    #[serde(rename = "maxResults")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub max_results: std::option::Option<i32>,
    #[serde(rename = "nextToken")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_token: std::option::Option<std::string::String>,
}

/// See [`ListImageBuildVersionsInput`](crate::input::ListImageBuildVersionsInput)
pub mod list_image_build_versions_input {
    /// A builder for [`ListImageBuildVersionsInput`](crate::input::ListImageBuildVersionsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        image_version_arn: std::option::Option<std::string::String>,
        filters: std::option::Option<std::vec::Vec<crate::model::Filter>>,
        max_results: std::option::Option<i32>,
        next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn image_version_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.image_version_arn = Some(input.into());
            self
        }
        pub fn set_image_version_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.image_version_arn = input;
            self
        }
        pub fn filters(mut self, input: impl Into<crate::model::Filter>) -> Self {
            let mut v = self.filters.unwrap_or_default();
            v.push(input.into());
            self.filters = Some(v);
            self
        }
        pub fn set_filters(mut self, input: std::option::Option<std::vec::Vec<crate::model::Filter>>) -> Self {
            self.filters = input;
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
        /// Consumes the builder and constructs a [`ListImageBuildVersionsInput`](crate::input::ListImageBuildVersionsInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::ListImageBuildVersionsInput, smithy_http::operation::BuildError> {
            Ok(crate::input::ListImageBuildVersionsInput {
                image_version_arn: self.image_version_arn,
                filters: self.filters,
                max_results: self.max_results,
                next_token: self.next_token,
            })
        }
    }
}

impl ListImageBuildVersionsInput {
    /// Consumes the builder and constructs an Operation<[`ListImageBuildVersions`](crate::operation::ListImageBuildVersions)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::ListImageBuildVersions>,
        smithy_http::operation::BuildError,
    > {
        let uri = std::string::String::from("/ListImageBuildVersions");
        let body = serde_json::to_vec(self).map_err(serialization_error)?;
        let request = http::Request::builder()
            .method("POST")
            .uri(uri)
            .header(http::header::CONTENT_TYPE, "application/json")
            .header(http::header::CONTENT_LENGTH, body.len())
            .body(smithy_http::body::SdkBody::from(body))?;
        Ok(finish_operation(
            config,
            request,
            crate::operation::ListImageBuildVersions::new(),
            "ListImageBuildVersions",
        ))
    }
    /// Creates a new builder-style object to manufacture [`ListImageBuildVersionsInput`](crate::input::ListImageBuildVersionsInput)
    pub fn builder() -> crate::input::list_image_build_versions_input::Builder {
        crate::input::list_image_build_versions_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct ListImageBuildVersionsInput {
    #[serde(rename = "imageVersionArn")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub image_version_arn: std::option::Option<std::string::String>,
    #[serde(rename = "filters")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub filters: std::option::Option<std::vec::Vec<crate::model::Filter>>,
    #[serde(rename = "maxResults")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub max_results: std::option::Option<i32>,
    #[serde(rename = "nextToken")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_token: std::option::Option<std::string::String>,
}

/// See [`ListImagePipelineImagesInput`](crate::input::ListImagePipelineImagesInput)
pub mod list_image_pipeline_images_input {
    /// A builder for [`ListImagePipelineImagesInput`](crate::input::ListImagePipelineImagesInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        image_pipeline_arn: std::option::Option<std::string::String>,
        filters: std::option::Option<std::vec::Vec<crate::model::Filter>>,
        max_results: std::option::Option<i32>,
        next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn image_pipeline_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.image_pipeline_arn = Some(input.into());
            self
        }
        pub fn set_image_pipeline_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.image_pipeline_arn = input;
            self
        }
        pub fn filters(mut self, input: impl Into<crate::model::Filter>) -> Self {
            let mut v = self.filters.unwrap_or_default();
            v.push(input.into());
            self.filters = Some(v);
            self
        }
        pub fn set_filters(mut self, input: std::option::Option<std::vec::Vec<crate::model::Filter>>) -> Self {
            self.filters = input;
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
        /// Consumes the builder and constructs a [`ListImagePipelineImagesInput`](crate::input::ListImagePipelineImagesInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::ListImagePipelineImagesInput, smithy_http::operation::BuildError> {
            Ok(crate::input::ListImagePipelineImagesInput {
                image_pipeline_arn: self.image_pipeline_arn,
                filters: self.filters,
                max_results: self.max_results,
                next_token: self.next_token,
            })
        }
    }
}

impl ListImagePipelineImagesInput {
    /// Consumes the builder and constructs an Operation<[`ListImagePipelineImages`](crate::operation::ListImagePipelineImages)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::ListImagePipelineImages>,
        smithy_http::operation::BuildError,
    > {
        let uri = std::string::String::from("/ListImagePipelineImages");
        let body = serde_json::to_vec(self).map_err(serialization_error)?;
        let request = http::Request::builder()
            .method("POST")
            .uri(uri)
            .header(http::header::CONTENT_TYPE, "application/json")
            .header(http::header::CONTENT_LENGTH, body.len())
            .body(smithy_http::body::SdkBody::from(body))?;
        Ok(finish_operation(
            config,
            request,
            crate::operation::ListImagePipelineImages::new(),
            "ListImagePipelineImages",
        ))
    }
    /// Creates a new builder-style object to manufacture [`ListImagePipelineImagesInput`](crate::input::ListImagePipelineImagesInput)
    pub fn builder() -> crate::input::list_image_pipeline_images_input::Builder {
        crate::input::list_image_pipeline_images_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct ListImagePipelineImagesInput {
    #[serde(rename = "imagePipelineArn")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub image_pipeline_arn: std::option::Option<std::string::String>,
    #[serde(rename = "filters")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub filters: std::option::Option<std::vec::Vec<crate::model::Filter>>,
    #[serde(rename = "maxResults")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub max_results: std::option::Option<i32>,
    #[serde(rename = "nextToken")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_token: std::option::Option<std::string::String>,
}

/// See [`ListImagePipelinesInput`](crate::input::ListImagePipelinesInput)
pub mod list_image_pipelines_input {
    /// A builder for [`ListImagePipelinesInput`](crate::input::ListImagePipelinesInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        filters: std::option::Option<std::vec::Vec<crate::model::Filter>>,
        max_results: std::option::Option<i32>,
        next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn filters(mut self, input: impl Into<crate::model::Filter>) -> Self {
            let mut v = self.filters.unwrap_or_default();
            v.push(input.into());
            self.filters = Some(v);
            self
        }
        pub fn set_filters(mut self, input: std::option::Option<std::vec::Vec<crate::model::Filter>>) -> Self {
            self.filters = input;
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
        /// Consumes the builder and constructs a [`ListImagePipelinesInput`](crate::input::ListImagePipelinesInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::ListImagePipelinesInput, smithy_http::operation::BuildError> {
            Ok(crate::input::ListImagePipelinesInput {
                filters: self.filters,
                max_results: self.max_results,
                next_token: self.next_token,
            })
        }
    }
}

impl ListImagePipelinesInput {
    /// Consumes the builder and constructs an Operation<[`ListImagePipelines`](crate::operation::ListImagePipelines)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::ListImagePipelines>,
        smithy_http::operation::BuildError,
    > {
        let uri = std::string::String::from("/ListImagePipelines");
        let body = serde_json::to_vec(self).map_err(serialization_error)?;
        let request = http::Request::builder()
            .method("POST")
            .uri(uri)
            .header(http::header::CONTENT_TYPE, "application/json")
            .header(http::header::CONTENT_LENGTH, body.len())
            .body(smithy_http::body::SdkBody::from(body))?;
        Ok(finish_operation(
            config,
            request,
            crate::operation::ListImagePipelines::new(),
            "ListImagePipelines",
        ))
    }
    /// Creates a new builder-style object to manufacture [`ListImagePipelinesInput`](crate::input::ListImagePipelinesInput)
    pub fn builder() -> crate::input::list_image_pipelines_input::Builder {
        crate::input::list_image_pipelines_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct ListImagePipelinesInput {
    #[serde(rename = "filters")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub filters: std::option::Option<std::vec::Vec<crate::model::Filter>>,
    #[serde(rename = "maxResults")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub max_results: std::option::Option<i32>,
    #[serde(rename = "nextToken")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_token: std::option::Option<std::string::String>,
}

/// See [`ListImageRecipesInput`](crate::input::ListImageRecipesInput)
pub mod list_image_recipes_input {
    /// A builder for [`ListImageRecipesInput`](crate::input::ListImageRecipesInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        owner: std::option::Option<crate::model::Ownership>,
        filters: std::option::Option<std::vec::Vec<crate::model::Filter>>,
        max_results: std::option::Option<i32>,
        next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn owner(mut self, input: impl Into<crate::model::Ownership>) -> Self {
            self.owner = Some(input.into());
            self
        }
        pub fn set_owner(mut self, input: std::option::Option<crate::model::Ownership>) -> Self {
            self.owner = input;
            self
        }
        pub fn filters(mut self, input: impl Into<crate::model::Filter>) -> Self {
            let mut v = self.filters.unwrap_or_default();
            v.push(input.into());
            self.filters = Some(v);
            self
        }
        pub fn set_filters(mut self, input: std::option::Option<std::vec::Vec<crate::model::Filter>>) -> Self {
            self.filters = input;
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
        /// Consumes the builder and constructs a [`ListImageRecipesInput`](crate::input::ListImageRecipesInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::ListImageRecipesInput, smithy_http::operation::BuildError> {
            Ok(crate::input::ListImageRecipesInput {
                owner: self.owner,
                filters: self.filters,
                max_results: self.max_results,
                next_token: self.next_token,
            })
        }
    }
}

impl ListImageRecipesInput {
    /// Consumes the builder and constructs an Operation<[`ListImageRecipes`](crate::operation::ListImageRecipes)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::ListImageRecipes>,
        smithy_http::operation::BuildError,
    > {
        let uri = std::string::String::from("/ListImageRecipes");
        let body = serde_json::to_vec(self).map_err(serialization_error)?;
        let request = http::Request::builder()
            .method("POST")
            .uri(uri)
            .header(http::header::CONTENT_TYPE, "application/json")
            .header(http::header::CONTENT_LENGTH, body.len())
            .body(smithy_http::body::SdkBody::from(body))?;
        Ok(finish_operation(
            config,
            request,
            crate::operation::ListImageRecipes::new(),
            "ListImageRecipes",
        ))
    }
    /// Creates a new builder-style object to manufacture [`ListImageRecipesInput`](crate::input::ListImageRecipesInput)
    pub fn builder() -> crate::input::list_image_recipes_input::Builder {
        crate::input::list_image_recipes_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct ListImageRecipesInput {
    #[serde(rename = "owner")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub owner: std::option::Option<crate::model::Ownership>,
    #[serde(rename = "filters")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub filters: std::option::Option<std::vec::Vec<crate::model::Filter>>,
    #[serde(rename = "maxResults")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub max_results: std::option::Option<i32>,
    #[serde(rename = "nextToken")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_token: std::option::Option<std::string::String>,
}

/// See [`ListImagesInput`](crate::input::ListImagesInput)
pub mod list_images_input {
    /// A builder for [`ListImagesInput`](crate::input::ListImagesInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        owner: std::option::Option<crate::model::Ownership>,
        filters: std::option::Option<std::vec::Vec<crate::model::Filter>>,
        max_results: std::option::Option<i32>,
        next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn owner(mut self, input: impl Into<crate::model::Ownership>) -> Self {
            self.owner = Some(input.into());
            self
        }
        pub fn set_owner(mut self, input: std::option::Option<crate::model::Ownership>) -> Self {
            self.owner = input;
            self
        }
        pub fn filters(mut self, input: impl Into<crate::model::Filter>) -> Self {
            let mut v = self.filters.unwrap_or_default();
            v.push(input.into());
            self.filters = Some(v);
            self
        }
        pub fn set_filters(mut self, input: std::option::Option<std::vec::Vec<crate::model::Filter>>) -> Self {
            self.filters = input;
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
        /// Consumes the builder and constructs a [`ListImagesInput`](crate::input::ListImagesInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::ListImagesInput, smithy_http::operation::BuildError> {
            Ok(crate::input::ListImagesInput {
                owner: self.owner,
                filters: self.filters,
                max_results: self.max_results,
                next_token: self.next_token,
            })
        }
    }
}

impl ListImagesInput {
    /// Consumes the builder and constructs an Operation<[`ListImages`](crate::operation::ListImages)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::ListImages>,
        smithy_http::operation::BuildError,
    > {
        let uri = std::string::String::from("/ListImages");
        let body = serde_json::to_vec(self).map_err(serialization_error)?;
        let request = http::Request::builder()
            .method("POST")
            .uri(uri)
            .header(http::header::CONTENT_TYPE, "application/json")
            .header(http::header::CONTENT_LENGTH, body.len())
            .body(smithy_http::body::SdkBody::from(body))?;
        Ok(finish_operation(
            config,
            request,
            crate::operation::ListImages::new(),
            "ListImages",
        ))
    }
    /// Creates a new builder-style object to manufacture [`ListImagesInput`](crate::input::ListImagesInput)
    pub fn builder() -> crate::input::list_images_input::Builder {
        crate::input::list_images_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct ListImagesInput {
    #[serde(rename = "owner")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub owner: std::option::Option<crate::model::Ownership>,
    #[serde(rename = "filters")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub filters: std::option::Option<std::vec::Vec<crate::model::Filter>>,
    #[serde(rename = "maxResults")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub max_results: std::option::Option<i32>,
    #[serde(rename = "nextToken")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_token: std::option::Option<std::string::String>,
}

/// See [`ListInfrastructureConfigurationsInput`](crate::input::ListInfrastructureConfigurationsInput)
pub mod list_infrastructure_configurations_input {
    /// A builder for [`ListInfrastructureConfigurationsInput`](crate::input::ListInfrastructureConfigurationsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        filters: std::option::Option<std::vec::Vec<crate::model::Filter>>,
        max_results: std::option::Option<i32>,
        next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn filters(mut self, input: impl Into<crate::model::Filter>) -> Self {
            let mut v = self.filters.unwrap_or_default();
            v.push(input.into());
            self.filters = Some(v);
            self
        }
        pub fn set_filters(mut self, input: std::option::Option<std::vec::Vec<crate::model::Filter>>) -> Self {
            self.filters = input;
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
        /// Consumes the builder and constructs a [`ListInfrastructureConfigurationsInput`](crate::input::ListInfrastructureConfigurationsInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::ListInfrastructureConfigurationsInput, smithy_http::operation::BuildError> {
            Ok(crate::input::ListInfrastructureConfigurationsInput {
                filters: self.filters,
                max_results: self.max_results,
                next_token: self.next_token,
            })
        }
    }
}

impl ListInfrastructureConfigurationsInput {
    /// Consumes the builder and constructs an Operation<[`ListInfrastructureConfigurations`](crate::operation::ListInfrastructureConfigurations)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::ListInfrastructureConfigurations>,
        smithy_http::operation::BuildError,
    > {
        let uri = std::string::String::from("/ListInfrastructureConfigurations");
        let body = serde_json::to_vec(self).map_err(serialization_error)?;
        let request = http::Request::builder()
            .method("POST")
            .uri(uri)
            .header(http::header::CONTENT_TYPE, "application/json")
            .header(http::header::CONTENT_LENGTH, body.len())
            .body(smithy_http::body::SdkBody::from(body))?;
        Ok(finish_operation(
            config,
            request,
            crate::operation::ListInfrastructureConfigurations::new(),
            "ListInfrastructureConfigurations",
        ))
    }
    /// Creates a new builder-style object to manufacture [`ListInfrastructureConfigurationsInput`](crate::input::ListInfrastructureConfigurationsInput)
    pub fn builder() -> crate::input::list_infrastructure_configurations_input::Builder {
        crate::input::list_infrastructure_configurations_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct ListInfrastructureConfigurationsInput {
    #[serde(rename = "filters")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub filters: std::option::Option<std::vec::Vec<crate::model::Filter>>,
    #[serde(rename = "maxResults")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub max_results: std::option::Option<i32>,
    #[serde(rename = "nextToken")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_token: std::option::Option<std::string::String>,
}

/// See [`ListTagsForResourceInput`](crate::input::ListTagsForResourceInput)
pub mod list_tags_for_resource_input {
    /// A builder for [`ListTagsForResourceInput`](crate::input::ListTagsForResourceInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        resource_arn: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn resource_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.resource_arn = Some(input.into());
            self
        }
        pub fn set_resource_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.resource_arn = input;
            self
        }
        /// Consumes the builder and constructs a [`ListTagsForResourceInput`](crate::input::ListTagsForResourceInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::ListTagsForResourceInput, smithy_http::operation::BuildError> {
            if self.resource_arn.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "resource_arn",
                    details: "resource_arn was not specified but it is required when building ListTagsForResourceInput",
                });
            }
            Ok(crate::input::ListTagsForResourceInput {
                resource_arn: self.resource_arn,
            })
        }
    }
}

impl ListTagsForResourceInput {
    /// Consumes the builder and constructs an Operation<[`ListTagsForResource`](crate::operation::ListTagsForResource)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::ListTagsForResource>,
        smithy_http::operation::BuildError,
    > {
        let resource_arn = self
            .resource_arn
            .as_ref()
            .map(|label| smithy_http::label::fmt_string(label, false))
            .filter(|label| !label.is_empty())
            .ok_or(
                smithy_http::operation::BuildError::MissingField {
                    field: "resource_arn",
                    details: "resource_arn was not specified but it is required when building ListTagsForResourceInput",
                }
            )?;
        let uri = format!("/tags/{resourceArn}", resourceArn = resource_arn);
        let request = http::Request::builder()
            .method("GET")
            .uri(uri)
            .body(smithy_http::body::SdkBody::empty())?;
        Ok(finish_operation(
            config,
            request,
            crate::operation::ListTagsForResource::new(),
            "ListTagsForResource",
        ))
    }
    /// Creates a new builder-style object to manufacture [`ListTagsForResourceInput`](crate::input::ListTagsForResourceInput)
    pub fn builder() -> crate::input::list_tags_for_resource_input::Builder {
        crate::input::list_tags_for_resource_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct ListTagsForResourceInput {
    #[serde(skip)]
    pub resource_arn: std::option::Option<std::string::String>,
}

/// See [`PutComponentPolicyInput`](crate::input::PutComponentPolicyInput)
pub mod put_component_policy_input {
    /// A builder for [`PutComponentPolicyInput`](crate::input::PutComponentPolicyInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        component_arn: std::option::Option<std::string::String>,
        policy: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn component_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.component_arn = Some(input.into());
            self
        }
        pub fn set_component_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.component_arn = input;
            self
        }
        pub fn policy(mut self, input: impl Into<std::string::String>) -> Self {
            self.policy = Some(input.into());
            self
        }
        pub fn set_policy(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.policy = input;
            self
        }
        /// Consumes the builder and constructs a [`PutComponentPolicyInput`](crate::input::PutComponentPolicyInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::PutComponentPolicyInput, smithy_http::operation::BuildError> {
            Ok(crate::input::PutComponentPolicyInput {
                component_arn: self.component_arn,
                policy: self.policy,
            })
        }
    }
}

impl PutComponentPolicyInput {
    /// Consumes the builder and constructs an Operation<[`PutComponentPolicy`](crate::operation::PutComponentPolicy)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::PutComponentPolicy>,
        smithy_http::operation::BuildError,
    > {
        let uri = std::string::String::from("/PutComponentPolicy");
        let body = serde_json::to_vec(self).map_err(serialization_error)?;
        let request = http::Request::builder()
            .method("PUT")
            .uri(uri)
            .header(http::header::CONTENT_TYPE, "application/json")
            .header(http::header::CONTENT_LENGTH, body.len())
            .body(smithy_http::body::SdkBody::from(body))?;
        Ok(finish_operation(
            config,
            request,
            crate::operation::PutComponentPolicy::new(),
            "PutComponentPolicy",
        ))
    }
    /// Creates a new builder-style object to manufacture [`PutComponentPolicyInput`](crate::input::PutComponentPolicyInput)
    pub fn builder() -> crate::input::put_component_policy_input::Builder {
        crate::input::put_component_policy_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct PutComponentPolicyInput {
    #[serde(rename = "componentArn")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub component_arn: std::option::Option<std::string::String>,
    #[serde(rename = "policy")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub policy: std::option::Option<std::string::String>,
}

/// See [`PutImagePolicyInput`](crate::input::PutImagePolicyInput)
pub mod put_image_policy_input {
    /// A builder for [`PutImagePolicyInput`](crate::input::PutImagePolicyInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        image_arn: std::option::Option<std::string::String>,
        policy: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn image_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.image_arn = Some(input.into());
            self
        }
        pub fn set_image_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.image_arn = input;
            self
        }
        pub fn policy(mut self, input: impl Into<std::string::String>) -> Self {
            self.policy = Some(input.into());
            self
        }
        pub fn set_policy(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.policy = input;
            self
        }
        /// Consumes the builder and constructs a [`PutImagePolicyInput`](crate::input::PutImagePolicyInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::PutImagePolicyInput, smithy_http::operation::BuildError> {
            Ok(crate::input::PutImagePolicyInput {
                image_arn: self.image_arn,
                policy: self.policy,
            })
        }
    }
}

impl PutImagePolicyInput {
    /// Consumes the builder and constructs an Operation<[`PutImagePolicy`](crate::operation::PutImagePolicy)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::PutImagePolicy>,
        smithy_http::operation::BuildError,
    > {
        let uri = std::string::String::from("/PutImagePolicy");
        let body = serde_json::to_vec(self).map_err(serialization_error)?;
        let request = http::Request::builder()
            .method("PUT")
            .uri(uri)
            .header(http::header::CONTENT_TYPE, "application/json")
            .header(http::header::CONTENT_LENGTH, body.len())
            .body(smithy_http::body::SdkBody::from(body))?;
        Ok(finish_operation(
            config,
            request,
            crate::operation::PutImagePolicy::new(),
            "PutImagePolicy",
        ))
    }
    /// Creates a new builder-style object to manufacture [`PutImagePolicyInput`](crate::input::PutImagePolicyInput)
    pub fn builder() -> crate::input::put_image_policy_input::Builder {
        crate::input::put_image_policy_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct PutImagePolicyInput {
    #[serde(rename = "imageArn")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub image_arn: std::option::Option<std::string::String>,
    #[serde(rename = "policy")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub policy: std::option::Option<std::string::String>,
}

/// See [`PutImageRecipePolicyInput`](crate::input::PutImageRecipePolicyInput)
pub mod put_image_recipe_policy_input {
    /// A builder for [`PutImageRecipePolicyInput`](crate::input::PutImageRecipePolicyInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        image_recipe_arn: std::option::Option<std::string::String>,
        policy: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn image_recipe_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.image_recipe_arn = Some(input.into());
            self
        }
        pub fn set_image_recipe_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.image_recipe_arn = input;
            self
        }
        pub fn policy(mut self, input: impl Into<std::string::String>) -> Self {
            self.policy = Some(input.into());
            self
        }
        pub fn set_policy(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.policy = input;
            self
        }
        /// Consumes the builder and constructs a [`PutImageRecipePolicyInput`](crate::input::PutImageRecipePolicyInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::PutImageRecipePolicyInput, smithy_http::operation::BuildError> {
            Ok(crate::input::PutImageRecipePolicyInput {
                image_recipe_arn: self.image_recipe_arn,
                policy: self.policy,
            })
        }
    }
}

impl PutImageRecipePolicyInput {
    /// Consumes the builder and constructs an Operation<[`PutImageRecipePolicy`](crate::operation::PutImageRecipePolicy)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::PutImageRecipePolicy>,
        smithy_http::operation::BuildError,
    > {
        let uri = std::string::String::from("/PutImageRecipePolicy");
        let body = serde_json::to_vec(self).map_err(serialization_error)?;
        let request = http::Request::builder()
            .method("PUT")
            .uri(uri)
            .header(http::header::CONTENT_TYPE, "application/json")
            .header(http::header::CONTENT_LENGTH, body.len())
            .body(smithy_http::body::SdkBody::from(body))?;
        Ok(finish_operation(
            config,
            request,
            crate::operation::PutImageRecipePolicy::new(),
            "PutImageRecipePolicy",
        ))
    }
    /// Creates a new builder-style object to manufacture [`PutImageRecipePolicyInput`](crate::input::PutImageRecipePolicyInput)
    pub fn builder() -> crate::input::put_image_recipe_policy_input::Builder {
        crate::input::put_image_recipe_policy_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct PutImageRecipePolicyInput {
    #[serde(rename = "imageRecipeArn")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub image_recipe_arn: std::option::Option<std::string::String>,
    #[serde(rename = "policy")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub policy: std::option::Option<std::string::String>,
}

/// See [`StartImagePipelineExecutionInput`](crate::input::StartImagePipelineExecutionInput)
pub mod start_image_pipeline_execution_input {
    /// A builder for [`StartImagePipelineExecutionInput`](crate::input::StartImagePipelineExecutionInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        image_pipeline_arn: std::option::Option<std::string::String>,
        client_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn image_pipeline_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.image_pipeline_arn = Some(input.into());
            self
        }
        pub fn set_image_pipeline_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.image_pipeline_arn = input;
            self
        }
        pub fn client_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.client_token = Some(input.into());
            self
        }
        pub fn set_client_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.client_token = input;
            self
        }
        /// Consumes the builder and constructs a [`StartImagePipelineExecutionInput`](crate::input::StartImagePipelineExecutionInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::StartImagePipelineExecutionInput, smithy_http::operation::BuildError> {
            Ok(crate::input::StartImagePipelineExecutionInput {
                image_pipeline_arn: self.image_pipeline_arn,
                client_token: self.client_token,
            })
        }
    }
}

impl StartImagePipelineExecutionInput {
    /// Consumes the builder and constructs an Operation<[`StartImagePipelineExecution`](crate::operation::StartImagePipelineExecution)>
    pub fn make_operation(
        mut self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::StartImagePipelineExecution>,
        smithy_http::operation::BuildError,
    > {
        if self.client_token.is_none() {
            self.client_token = Some(config.token_provider.make_idempotency_token());
        }
        let uri = std::string::String::from("/StartImagePipelineExecution");
        let body = serde_json::to_vec(&self).map_err(serialization_error)?;
        let request = http::Request::builder()
            .method("PUT")
            .uri(uri)
            .header(http::header::CONTENT_TYPE, "application/json")
            .header(http::header::CONTENT_LENGTH, body.len())
            .body(smithy_http::body::SdkBody::from(body))?;
        Ok(finish_operation(
            config,
            request,
            crate::operation::StartImagePipelineExecution::new(),
            "StartImagePipelineExecution",
        ))
    }
    /// Creates a new builder-style object to manufacture [`StartImagePipelineExecutionInput`](crate::input::StartImagePipelineExecutionInput)
    pub fn builder() -> crate::input::start_image_pipeline_execution_input::Builder {
        crate::input::start_image_pipeline_execution_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct StartImagePipelineExecutionInput {
    #[serde(rename = "imagePipelineArn")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub image_pipeline_arn: std::option::Option<std::string::String>,
    #[serde(rename = "clientToken")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub client_token: std::option::Option<std::string::String>,
}

/// See [`TagResourceInput`](crate::input::TagResourceInput)
pub mod tag_resource_input {
    /// A builder for [`TagResourceInput`](crate::input::TagResourceInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        resource_arn: std::option::Option<std::string::String>,
        tags: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
    }
    impl Builder {
        pub fn resource_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.resource_arn = Some(input.into());
            self
        }
        pub fn set_resource_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.resource_arn = input;
            self
        }
        pub fn tags(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::string::String>,
        ) -> Self {
            let mut hash_map = self.tags.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.tags = Some(hash_map);
            self
        }
        pub fn set_tags(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>) -> Self {
            self.tags = input;
            self
        }
        /// Consumes the builder and constructs a [`TagResourceInput`](crate::input::TagResourceInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::TagResourceInput, smithy_http::operation::BuildError> {
            if self.resource_arn.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "resource_arn",
                    details: "resource_arn was not specified but it is required when building TagResourceInput",
                });
            }
            Ok(crate::input::TagResourceInput {
                resource_arn: self.resource_arn,
                tags: self.tags,
            })
        }
    }
}

impl TagResourceInput {
    /// Consumes the builder and constructs an Operation<[`TagResource`](crate::operation::TagResource)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::TagResource>,
        smithy_http::operation::BuildError,
    > {
        let resource_arn = self
            .resource_arn
            .as_ref()
            .map(|label| smithy_http::label::fmt_string(label, false))
            .filter(|label| !label.is_empty())
            .ok_or(
                smithy_http::operation::BuildError::MissingField {
                    field: "resource_arn",
                    details: "resource_arn was not specified but it is required when building TagResourceInput",
                }
            )?;
        let uri = format!("/tags/{resourceArn}", resourceArn = resource_arn);
        let body = serde_json::to_vec(self).map_err(serialization_error)?;
        let request = http::Request::builder()
            .method("POST")
            .uri(uri)
            .header(http::header::CONTENT_TYPE, "application/json")
            .header(http::header::CONTENT_LENGTH, body.len())
            .body(smithy_http::body::SdkBody::from(body))?;
        Ok(finish_operation(
            config,
            request,
            crate::operation::TagResource::new(),
            "TagResource",
        ))
    }
    /// Creates a new builder-style object to manufacture [`TagResourceInput`](crate::input::TagResourceInput)
    pub fn builder() -> crate::input::tag_resource_input::Builder {
        crate::input::tag_resource_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct TagResourceInput {
    #[serde(skip)]
    pub resource_arn: std::option::Option<std::string::String>,
    #[serde(rename = "tags")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub tags: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
}

/// See [`UntagResourceInput`](crate::input::UntagResourceInput)
pub mod untag_resource_input {
    /// A builder for [`UntagResourceInput`](crate::input::UntagResourceInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        resource_arn: std::option::Option<std::string::String>,
        tag_keys: std::option::Option<std::vec::Vec<std::string::String>>,
    }
    impl Builder {
        pub fn resource_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.resource_arn = Some(input.into());
            self
        }
        pub fn set_resource_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.resource_arn = input;
            self
        }
        pub fn tag_keys(mut self, input: impl Into<std::string::String>) -> Self {
            let mut v = self.tag_keys.unwrap_or_default();
            v.push(input.into());
            self.tag_keys = Some(v);
            self
        }
        pub fn set_tag_keys(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.tag_keys = input;
            self
        }
        /// Consumes the builder and constructs a [`UntagResourceInput`](crate::input::UntagResourceInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::UntagResourceInput, smithy_http::operation::BuildError> {
            if self.resource_arn.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "resource_arn",
                    details: "resource_arn was not specified but it is required when building UntagResourceInput",
                });
            }
            Ok(crate::input::UntagResourceInput {
                resource_arn: self.resource_arn,
                tag_keys: self.tag_keys,
            })
        }
    }
}

impl UntagResourceInput {
    /// Consumes the builder and constructs an Operation<[`UntagResource`](crate::operation::UntagResource)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::UntagResource>,
        smithy_http::operation::BuildError,
    > {
        let resource_arn = self
            .resource_arn
            .as_ref()
            .map(|label| smithy_http::label::fmt_string(label, false))
            .filter(|label| !label.is_empty())
            .ok_or(
                smithy_http::operation::BuildError::MissingField {
                    field: "resource_arn",
                    details: "resource_arn was not specified but it is required when building UntagResourceInput",
                }
            )?;
        let mut uri = format!("/tags/{resourceArn}", resourceArn = resource_arn);
        let mut query = smithy_http::query::Writer::new(&mut uri);
        if let Some(inner) = &self.tag_keys {
            for value in inner {
                query.push_kv("tagKeys", value);
            }
        }
        let request = http::Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(smithy_http::body::SdkBody::empty())?;
        Ok(finish_operation(
            config,
            request,
            crate::operation::UntagResource::new(),
            "UntagResource",
        ))
    }
    /// Creates a new builder-style object to manufacture [`UntagResourceInput`](crate::input::UntagResourceInput)
    pub fn builder() -> crate::input::untag_resource_input::Builder {
        crate::input::untag_resource_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct UntagResourceInput {
    #[serde(skip)]
    pub resource_arn: std::option::Option<std::string::String>,
    #[serde(skip)]
    pub tag_keys: std::option::Option<std::vec::Vec<std::string::String>>,
}

/// See [`UpdateDistributionConfigurationInput`](crate::input::UpdateDistributionConfigurationInput)
pub mod update_distribution_configuration_input {
    /// A builder for [`UpdateDistributionConfigurationInput`](crate::input::UpdateDistributionConfigurationInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        distribution_configuration_arn: std::option::Option<std::string::String>,
        description: std::option::Option<std::string::String>,
        distributions: std::option::Option<std::vec::Vec<crate::model::Distribution>>,
        client_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn distribution_configuration_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.distribution_configuration_arn = Some(input.into());
            self
        }
        pub fn set_distribution_configuration_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.distribution_configuration_arn = input;
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
        pub fn distributions(mut self, input: impl Into<crate::model::Distribution>) -> Self {
            let mut v = self.distributions.unwrap_or_default();
            v.push(input.into());
            self.distributions = Some(v);
            self
        }
        pub fn set_distributions(mut self, input: std::option::Option<std::vec::Vec<crate::model::Distribution>>) -> Self {
            self.distributions = input;
            self
        }
        pub fn client_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.client_token = Some(input.into());
            self
        }
        pub fn set_client_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.client_token = input;
            self
        }
        /// Consumes the builder and constructs a [`UpdateDistributionConfigurationInput`](crate::input::UpdateDistributionConfigurationInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::UpdateDistributionConfigurationInput, smithy_http::operation::BuildError> {
            Ok(crate::input::UpdateDistributionConfigurationInput {
                distribution_configuration_arn: self.distribution_configuration_arn,
                description: self.description,
                distributions: self.distributions,
                client_token: self.client_token,
            })
        }
    }
}

impl UpdateDistributionConfigurationInput {
    /// Consumes the builder and constructs an Operation<[`UpdateDistributionConfiguration`](crate::operation::UpdateDistributionConfiguration)>
    pub fn make_operation(
        mut self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::UpdateDistributionConfiguration>,
        smithy_http::operation::BuildError,
    > {
        if self.client_token.is_none() {
            self.client_token = Some(config.token_provider.make_idempotency_token());
        }
        let uri = std::string::String::from("/UpdateDistributionConfiguration");
        let body = serde_json::to_vec(&self).map_err(serialization_error)?;
        let request = http::Request::builder()
            .method("PUT")
            .uri(uri)
            .header(http::header::CONTENT_TYPE, "application/json")
            .header(http::header::CONTENT_LENGTH, body.len())
            .body(smithy_http::body::SdkBody::from(body))?;
        Ok(finish_operation(
            config,
            request,
            crate::operation::UpdateDistributionConfiguration::new(),
            "UpdateDistributionConfiguration",
        ))
    }
    /// Creates a new builder-style object to manufacture [`UpdateDistributionConfigurationInput`](crate::input::UpdateDistributionConfigurationInput)
    pub fn builder() -> crate::input::update_distribution_configuration_input::Builder {
        crate::input::update_distribution_configuration_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct UpdateDistributionConfigurationInput {
    #[serde(rename = "distributionConfigurationArn")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub distribution_configuration_arn: std::option::Option<std::string::String>,
    #[serde(rename = "description")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,
    #[serde(rename = "distributions")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub distributions: std::option::Option<std::vec::Vec<crate::model::Distribution>>,
    #[serde(rename = "clientToken")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub client_token: std::option::Option<std::string::String>,
}

/// See [`UpdateImagePipelineInput`](crate::input::UpdateImagePipelineInput)
pub mod update_image_pipeline_input {
    /// A builder for [`UpdateImagePipelineInput`](crate::input::UpdateImagePipelineInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        image_pipeline_arn: std::option::Option<std::string::String>,
        description: std::option::Option<std::string::String>,
        image_recipe_arn: std::option::Option<std::string::String>,
        infrastructure_configuration_arn: std::option::Option<std::string::String>,
        distribution_configuration_arn: std::option::Option<std::string::String>,
        image_tests_configuration: std::option::Option<crate::model::ImageTestsConfiguration>,
        enhanced_image_metadata_enabled: std::option::Option<bool>,
        schedule: std::option::Option<crate::model::Schedule>,
        status: std::option::Option<crate::model::PipelineStatus>,
        client_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn image_pipeline_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.image_pipeline_arn = Some(input.into());
            self
        }
        pub fn set_image_pipeline_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.image_pipeline_arn = input;
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
        pub fn image_recipe_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.image_recipe_arn = Some(input.into());
            self
        }
        pub fn set_image_recipe_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.image_recipe_arn = input;
            self
        }
        pub fn infrastructure_configuration_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.infrastructure_configuration_arn = Some(input.into());
            self
        }
        pub fn set_infrastructure_configuration_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.infrastructure_configuration_arn = input;
            self
        }
        pub fn distribution_configuration_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.distribution_configuration_arn = Some(input.into());
            self
        }
        pub fn set_distribution_configuration_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.distribution_configuration_arn = input;
            self
        }
        pub fn image_tests_configuration(mut self, input: impl Into<crate::model::ImageTestsConfiguration>) -> Self {
            self.image_tests_configuration = Some(input.into());
            self
        }
        pub fn set_image_tests_configuration(mut self, input: std::option::Option<crate::model::ImageTestsConfiguration>) -> Self {
            self.image_tests_configuration = input;
            self
        }
        pub fn enhanced_image_metadata_enabled(mut self, input: bool) -> Self {
            self.enhanced_image_metadata_enabled = Some(input);
            self
        }
        pub fn set_enhanced_image_metadata_enabled(mut self, input: std::option::Option<bool>) -> Self {
            self.enhanced_image_metadata_enabled = input;
            self
        }
        pub fn schedule(mut self, input: impl Into<crate::model::Schedule>) -> Self {
            self.schedule = Some(input.into());
            self
        }
        pub fn set_schedule(mut self, input: std::option::Option<crate::model::Schedule>) -> Self {
            self.schedule = input;
            self
        }
        pub fn status(mut self, input: impl Into<crate::model::PipelineStatus>) -> Self {
            self.status = Some(input.into());
            self
        }
        pub fn set_status(mut self, input: std::option::Option<crate::model::PipelineStatus>) -> Self {
            self.status = input;
            self
        }
        pub fn client_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.client_token = Some(input.into());
            self
        }
        pub fn set_client_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.client_token = input;
            self
        }
        /// Consumes the builder and constructs a [`UpdateImagePipelineInput`](crate::input::UpdateImagePipelineInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::UpdateImagePipelineInput, smithy_http::operation::BuildError> {
            Ok(crate::input::UpdateImagePipelineInput {
                image_pipeline_arn: self.image_pipeline_arn,
                description: self.description,
                image_recipe_arn: self.image_recipe_arn,
                infrastructure_configuration_arn: self.infrastructure_configuration_arn,
                distribution_configuration_arn: self.distribution_configuration_arn,
                image_tests_configuration: self.image_tests_configuration,
                enhanced_image_metadata_enabled: self.enhanced_image_metadata_enabled,
                schedule: self.schedule,
                status: self.status,
                client_token: self.client_token,
            })
        }
    }
}

impl UpdateImagePipelineInput {
    /// Consumes the builder and constructs an Operation<[`UpdateImagePipeline`](crate::operation::UpdateImagePipeline)>
    pub fn make_operation(
        mut self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::UpdateImagePipeline>,
        smithy_http::operation::BuildError,
    > {
        if self.client_token.is_none() {
            self.client_token = Some(config.token_provider.make_idempotency_token());
        }
        let uri = std::string::String::from("/UpdateImagePipeline");
        let body = serde_json::to_vec(&self).map_err(serialization_error)?;
        let request = http::Request::builder()
            .method("PUT")
            .uri(uri)
            .header(http::header::CONTENT_TYPE, "application/json")
            .header(http::header::CONTENT_LENGTH, body.len())
            .body(smithy_http::body::SdkBody::from(body))?;
        Ok(finish_operation(
            config,
            request,
            crate::operation::UpdateImagePipeline::new(),
            "UpdateImagePipeline",
        ))
    }
    /// Creates a new builder-style object to manufacture [`UpdateImagePipelineInput`](crate::input::UpdateImagePipelineInput)
    pub fn builder() -> crate::input::update_image_pipeline_input::Builder {
        crate::input::update_image_pipeline_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct UpdateImagePipelineInput {
    #[serde(rename = "imagePipelineArn")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub image_pipeline_arn: std::option::Option<std::string::String>,
    #[serde(rename = "description")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,
    #[serde(rename = "imageRecipeArn")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub image_recipe_arn: std::option::Option<std::string::String>,
    #[serde(rename = "infrastructureConfigurationArn")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub infrastructure_configuration_arn: std::option::Option<std::string::String>,
    #[serde(rename = "distributionConfigurationArn")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub distribution_configuration_arn: std::option::Option<std::string::String>,
    #[serde(rename = "imageTestsConfiguration")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub image_tests_configuration: std::option::Option<crate::model::ImageTestsConfiguration>,
    #[serde(rename = "enhancedImageMetadataEnabled")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub enhanced_image_metadata_enabled: std::option::Option<bool>,
    #[serde(rename = "schedule")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub schedule: std::option::Option<crate::model::Schedule>,
    #[serde(rename = "status")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub status: std::option::Option<crate::model::PipelineStatus>,
    #[serde(rename = "clientToken")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub client_token: std::option::Option<std::string::String>,
}

/// See [`UpdateInfrastructureConfigurationInput`](crate::input::UpdateInfrastructureConfigurationInput)
pub mod update_infrastructure_configuration_input {
    /// A builder for [`UpdateInfrastructureConfigurationInput`](crate::input::UpdateInfrastructureConfigurationInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        infrastructure_configuration_arn: std::option::Option<std::string::String>,
        description: std::option::Option<std::string::String>,
        instance_types: std::option::Option<std::vec::Vec<std::string::String>>,
        instance_profile_name: std::option::Option<std::string::String>,
        security_group_ids: std::option::Option<std::vec::Vec<std::string::String>>,
        subnet_id: std::option::Option<std::string::String>,
        logging: std::option::Option<crate::model::Logging>,
        key_pair: std::option::Option<std::string::String>,
        terminate_instance_on_failure: std::option::Option<bool>,
        sns_topic_arn: std::option::Option<std::string::String>,
        resource_tags: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
        client_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn infrastructure_configuration_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.infrastructure_configuration_arn = Some(input.into());
            self
        }
        pub fn set_infrastructure_configuration_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.infrastructure_configuration_arn = input;
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
        pub fn instance_types(mut self, input: impl Into<std::string::String>) -> Self {
            let mut v = self.instance_types.unwrap_or_default();
            v.push(input.into());
            self.instance_types = Some(v);
            self
        }
        pub fn set_instance_types(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.instance_types = input;
            self
        }
        pub fn instance_profile_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.instance_profile_name = Some(input.into());
            self
        }
        pub fn set_instance_profile_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.instance_profile_name = input;
            self
        }
        pub fn security_group_ids(mut self, input: impl Into<std::string::String>) -> Self {
            let mut v = self.security_group_ids.unwrap_or_default();
            v.push(input.into());
            self.security_group_ids = Some(v);
            self
        }
        pub fn set_security_group_ids(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.security_group_ids = input;
            self
        }
        pub fn subnet_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.subnet_id = Some(input.into());
            self
        }
        pub fn set_subnet_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.subnet_id = input;
            self
        }
        pub fn logging(mut self, input: impl Into<crate::model::Logging>) -> Self {
            self.logging = Some(input.into());
            self
        }
        pub fn set_logging(mut self, input: std::option::Option<crate::model::Logging>) -> Self {
            self.logging = input;
            self
        }
        pub fn key_pair(mut self, input: impl Into<std::string::String>) -> Self {
            self.key_pair = Some(input.into());
            self
        }
        pub fn set_key_pair(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.key_pair = input;
            self
        }
        pub fn terminate_instance_on_failure(mut self, input: bool) -> Self {
            self.terminate_instance_on_failure = Some(input);
            self
        }
        pub fn set_terminate_instance_on_failure(mut self, input: std::option::Option<bool>) -> Self {
            self.terminate_instance_on_failure = input;
            self
        }
        pub fn sns_topic_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.sns_topic_arn = Some(input.into());
            self
        }
        pub fn set_sns_topic_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.sns_topic_arn = input;
            self
        }
        pub fn resource_tags(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::string::String>,
        ) -> Self {
            let mut hash_map = self.resource_tags.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.resource_tags = Some(hash_map);
            self
        }
        pub fn set_resource_tags(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>) -> Self {
            self.resource_tags = input;
            self
        }
        pub fn client_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.client_token = Some(input.into());
            self
        }
        pub fn set_client_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.client_token = input;
            self
        }
        /// Consumes the builder and constructs a [`UpdateInfrastructureConfigurationInput`](crate::input::UpdateInfrastructureConfigurationInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::UpdateInfrastructureConfigurationInput, smithy_http::operation::BuildError> {
            Ok(crate::input::UpdateInfrastructureConfigurationInput {
                infrastructure_configuration_arn: self.infrastructure_configuration_arn,
                description: self.description,
                instance_types: self.instance_types,
                instance_profile_name: self.instance_profile_name,
                security_group_ids: self.security_group_ids,
                subnet_id: self.subnet_id,
                logging: self.logging,
                key_pair: self.key_pair,
                terminate_instance_on_failure: self.terminate_instance_on_failure,
                sns_topic_arn: self.sns_topic_arn,
                resource_tags: self.resource_tags,
                client_token: self.client_token,
            })
        }
    }
}

impl UpdateInfrastructureConfigurationInput {
    /// Consumes the builder and constructs an Operation<[`UpdateInfrastructureConfiguration`](crate::operation::UpdateInfrastructureConfiguration)>
    pub fn make_operation(
        mut self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::UpdateInfrastructureConfiguration>,
        smithy_http::operation::BuildError,
    > {
        if self.client_token.is_none() {
            self.client_token = Some(config.token_provider.make_idempotency_token());
        }
        let uri = std::string::String::from("/UpdateInfrastructureConfiguration");
        let body = serde_json::to_vec(&self).map_err(serialization_error)?;
        let request = http::Request::builder()
            .method("PUT")
            .uri(uri)
            .header(http::header::CONTENT_TYPE, "application/json")
            .header(http::header::CONTENT_LENGTH, body.len())
            .body(smithy_http::body::SdkBody::from(body))?;
        Ok(finish_operation(
            config,
            request,
            crate::operation::UpdateInfrastructureConfiguration::new(),
            "UpdateInfrastructureConfiguration",
        ))
    }
    /// Creates a new builder-style object to manufacture [`UpdateInfrastructureConfigurationInput`](crate::input::UpdateInfrastructureConfigurationInput)
    pub fn builder() -> crate::input::update_infrastructure_configuration_input::Builder {
        crate::input::update_infrastructure_configuration_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct UpdateInfrastructureConfigurationInput {
    #[serde(rename = "infrastructureConfigurationArn")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub infrastructure_configuration_arn: std::option::Option<std::string::String>,
    #[serde(rename = "description")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,
    #[serde(rename = "instanceTypes")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub instance_types: std::option::Option<std::vec::Vec<std::string::String>>,
    #[serde(rename = "instanceProfileName")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub instance_profile_name: std::option::Option<std::string::String>,
    #[serde(rename = "securityGroupIds")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub security_group_ids: std::option::Option<std::vec::Vec<std::string::String>>,
    #[serde(rename = "subnetId")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub subnet_id: std::option::Option<std::string::String>,
    #[serde(rename = "logging")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub logging: std::option::Option<crate::model::Logging>,
    #[serde(rename = "keyPair")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub key_pair: std::option::Option<std::string::String>,
    #[serde(rename = "terminateInstanceOnFailure")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub terminate_instance_on_failure: std::option::Option<bool>,
    #[serde(rename = "snsTopicArn")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub sns_topic_arn: std::option::Option<std::string::String>,
    #[serde(rename = "resourceTags")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub resource_tags: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
    #[serde(rename = "clientToken")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub client_token: std::option::Option<std::string::String>,
}
