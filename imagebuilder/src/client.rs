/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

#[derive(std::fmt::Debug)]
pub(crate) struct Handle<C = aws_hyper::conn::Standard> {
    client: aws_hyper::Client<C>,
    conf: crate::Config,
}

/// Client for the service
///
/// Every operation is a method returning a fluent builder. Set the input members on the
/// builder, then call `send()`:
/// ```no_run
/// # async fn docs() -> Result<(), imagebuilder::Error> {
/// let client = imagebuilder::Client::from_env();
/// let output = client.list_images()
///     .send()
///     .await?;
/// # let _ = output;
/// # Ok(())
/// # }
/// ```
#[derive(std::fmt::Debug)]
pub struct Client<C = aws_hyper::conn::Standard> {
    handle: std::sync::Arc<Handle<C>>,
}

impl<C> std::clone::Clone for Client<C> {
    fn clone(&self) -> Self {
        Self {
            handle: self.handle.clone(),
        }
    }
}

impl<C> Client<C> {
    pub fn from_conf_conn(conf: crate::Config, conn: C) -> Self {
        let client = aws_hyper::Client::new(conn);
        Self {
            handle: std::sync::Arc::new(Handle { client, conf }),
        }
    }

    pub fn conf(&self) -> &crate::Config {
        &self.handle.conf
    }
}

impl Client {
    pub fn from_env() -> Self {
        Self::from_conf(crate::Config::builder().build())
    }

    pub fn from_conf(conf: crate::Config) -> Self {
        let client = aws_hyper::Client::https();
        Self {
            handle: std::sync::Arc::new(Handle { client, conf }),
        }
    }
}

impl<C> Client<C>
where
    C: aws_hyper::bounds::SmithyConnector,
{
    pub fn cancel_image_creation(&self) -> fluent_builders::CancelImageCreation<C> {
        fluent_builders::CancelImageCreation::new(self.handle.clone())
    }
    pub fn create_component(&self) -> fluent_builders::CreateComponent<C> {
        fluent_builders::CreateComponent::new(self.handle.clone())
    }
    pub fn create_distribution_configuration(&self) -> fluent_builders::CreateDistributionConfiguration<C> {
        fluent_builders::CreateDistributionConfiguration::new(self.handle.clone())
    }
    pub fn create_image(&self) -> fluent_builders::CreateImage<C> {
        fluent_builders::CreateImage::new(self.handle.clone())
    }
    pub fn create_image_pipeline(&self) -> fluent_builders::CreateImagePipeline<C> {
        fluent_builders::CreateImagePipeline::new(self.handle.clone())
    }
    pub fn create_image_recipe(&self) -> fluent_builders::CreateImageRecipe<C> {
        fluent_builders::CreateImageRecipe::new(self.handle.clone())
    }
    pub fn create_infrastructure_configuration(&self) -> fluent_builders::CreateInfrastructureConfiguration<C> {
        fluent_builders::CreateInfrastructureConfiguration::new(self.handle.clone())
    }
    pub fn delete_component(&self) -> fluent_builders::DeleteComponent<C> {
        fluent_builders::DeleteComponent::new(self.handle.clone())
    }
    pub fn delete_distribution_configuration(&self) -> fluent_builders::DeleteDistributionConfiguration<C> {
        fluent_builders::DeleteDistributionConfiguration::new(self.handle.clone())
    }
    pub fn delete_image(&self) -> fluent_builders::DeleteImage<C> {
        fluent_builders::DeleteImage::new(self.handle.clone())
    }
    pub fn delete_image_pipeline(&self) -> fluent_builders::DeleteImagePipeline<C> {
        fluent_builders::DeleteImagePipeline::new(self.handle.clone())
    }
    pub fn delete_image_recipe(&self) -> fluent_builders::DeleteImageRecipe<C> {
        fluent_builders::DeleteImageRecipe::new(self.handle.clone())
    }
    pub fn delete_infrastructure_configuration(&self) -> fluent_builders::DeleteInfrastructureConfiguration<C> {
        fluent_builders::DeleteInfrastructureConfiguration::new(self.handle.clone())
    }
    pub fn get_component(&self) -> fluent_builders::GetComponent<C> {
        fluent_builders::GetComponent::new(self.handle.clone())
    }
    pub fn get_component_policy(&self) -> fluent_builders::GetComponentPolicy<C> {
        fluent_builders::GetComponentPolicy::new(self.handle.clone())
    }
    pub fn get_distribution_configuration(&self) -> fluent_builders::GetDistributionConfiguration<C> {
        fluent_builders::GetDistributionConfiguration::new(self.handle.clone())
    }
    pub fn get_image(&self) -> fluent_builders::GetImage<C> {
        fluent_builders::GetImage::new(self.handle.clone())
    }
    pub fn get_image_pipeline(&self) -> fluent_builders::GetImagePipeline<C> {
        fluent_builders::GetImagePipeline::new(self.handle.clone())
    }
    pub fn get_image_policy(&self) -> fluent_builders::GetImagePolicy<C> {
        fluent_builders::GetImagePolicy::new(self.handle.clone())
    }
    pub fn get_image_recipe(&self) -> fluent_builders::GetImageRecipe<C> {
        fluent_builders::GetImageRecipe::new(self.handle.clone())
    }
    pub fn get_image_recipe_policy(&self) -> fluent_builders::GetImageRecipePolicy<C> {
        fluent_builders::GetImageRecipePolicy::new(self.handle.clone())
    }
    pub fn get_infrastructure_configuration(&self) -> fluent_builders::GetInfrastructureConfiguration<C> {
        fluent_builders::GetInfrastructureConfiguration::new(self.handle.clone())
    }
    pub fn import_component(&self) -> fluent_builders::ImportComponent<C> {
        fluent_builders::ImportComponent::new(self.handle.clone())
    }
    pub fn list_component_build_versions(&self) -> fluent_builders::ListComponentBuildVersions<C> {
        fluent_builders::ListComponentBuildVersions::new(self.handle.clone())
    }
    pub fn list_components(&self) -> fluent_builders::ListComponents<C> {
        fluent_builders::ListComponents::new(self.handle.clone())
    }
    pub fn list_distribution_configurations(&self) -> fluent_builders::ListDistributionConfigurations<C> {
        fluent_builders::ListDistributionConfigurations::new(self.handle.clone())
    }
    pub fn list_image_build_versions(&self) -> fluent_builders::ListImageBuildVersions<C> {
        fluent_builders::ListImageBuildVersions::new(self.handle.clone())
    }
    pub fn list_image_pipeline_images(&self) -> fluent_builders::ListImagePipelineImages<C> {
        fluent_builders::ListImagePipelineImages::new(self.handle.clone())
    }
    pub fn list_image_pipelines(&self) -> fluent_builders::ListImagePipelines<C> {
        fluent_builders::ListImagePipelines::new(self.handle.clone())
    }
    pub fn list_image_recipes(&self) -> fluent_builders::ListImageRecipes<C> {
        fluent_builders::ListImageRecipes::new(self.handle.clone())
    }
    pub fn list_images(&self) -> fluent_builders::ListImages<C> {
        fluent_builders::ListImages::new(self.handle.clone())
    }
    pub fn list_infrastructure_configurations(&self) -> fluent_builders::ListInfrastructureConfigurations<C> {
        fluent_builders::ListInfrastructureConfigurations::new(self.handle.clone())
    }
    pub fn list_tags_for_resource(&self) -> fluent_builders::ListTagsForResource<C> {
        fluent_builders::ListTagsForResource::new(self.handle.clone())
    }
    pub fn put_component_policy(&self) -> fluent_builders::PutComponentPolicy<C> {
        fluent_builders::PutComponentPolicy::new(self.handle.clone())
    }
    pub fn put_image_policy(&self) -> fluent_builders::PutImagePolicy<C> {
        fluent_builders::PutImagePolicy::new(self.handle.clone())
    }
    pub fn put_image_recipe_policy(&self) -> fluent_builders::PutImageRecipePolicy<C> {
        fluent_builders::PutImageRecipePolicy::new(self.handle.clone())
    }
    pub fn start_image_pipeline_execution(&self) -> fluent_builders::StartImagePipelineExecution<C> {
        fluent_builders::StartImagePipelineExecution::new(self.handle.clone())
    }
    pub fn tag_resource(&self) -> fluent_builders::TagResource<C> {
        fluent_builders::TagResource::new(self.handle.clone())
    }
    pub fn untag_resource(&self) -> fluent_builders::UntagResource<C> {
        fluent_builders::UntagResource::new(self.handle.clone())
    }
    pub fn update_distribution_configuration(&self) -> fluent_builders::UpdateDistributionConfiguration<C> {
        fluent_builders::UpdateDistributionConfiguration::new(self.handle.clone())
    }
    pub fn update_image_pipeline(&self) -> fluent_builders::UpdateImagePipeline<C> {
        fluent_builders::UpdateImagePipeline::new(self.handle.clone())
    }
    pub fn update_infrastructure_configuration(&self) -> fluent_builders::UpdateInfrastructureConfiguration<C> {
        fluent_builders::UpdateInfrastructureConfiguration::new(self.handle.clone())
    }
}
pub mod fluent_builders {
    /// CancelImageCreation cancels the creation of Image.
    #[derive(std::fmt::Debug)]
    pub struct CancelImageCreation<C = aws_hyper::conn::Standard> {
        handle: std::sync::Arc<super::Handle<C>>,
        inner: crate::input::cancel_image_creation_input::Builder,
    }
    impl<C> CancelImageCreation<C> {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::CancelImageCreationOutput,
            aws_hyper::SdkError<crate::error::CancelImageCreationError>,
        >
        where
            C: aws_hyper::bounds::SmithyConnector,
        {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn image_build_version_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.image_build_version_arn(input);
            self
        }
        pub fn set_image_build_version_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_image_build_version_arn(input);
            self
        }
        pub fn client_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.client_token(input);
            self
        }
        pub fn set_client_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_client_token(input);
            self
        }
    }
    /// Creates a new component that can be used to build, validate, test, and assess your image.
    #[derive(std::fmt::Debug)]
    pub struct CreateComponent<C = aws_hyper::conn::Standard> {
        handle: std::sync::Arc<super::Handle<C>>,
        inner: crate::input::create_component_input::Builder,
    }
    impl<C> CreateComponent<C> {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::CreateComponentOutput,
            aws_hyper::SdkError<crate::error::CreateComponentError>,
        >
        where
            C: aws_hyper::bounds::SmithyConnector,
        {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn name(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.name(input);
            self
        }
        pub fn set_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_name(input);
            self
        }
        pub fn semantic_version(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.semantic_version(input);
            self
        }
        pub fn set_semantic_version(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_semantic_version(input);
            self
        }
        pub fn description(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.description(input);
            self
        }
        pub fn set_description(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_description(input);
            self
        }
        pub fn change_description(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.change_description(input);
            self
        }
        pub fn set_change_description(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_change_description(input);
            self
        }
        pub fn platform(mut self, input: impl Into<crate::model::Platform>) -> Self {
            self.inner = self.inner.platform(input);
            self
        }
        pub fn set_platform(mut self, input: std::option::Option<crate::model::Platform>) -> Self {
            self.inner = self.inner.set_platform(input);
            self
        }
        pub fn supported_os_versions(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.supported_os_versions(inp);
            self
        }
        pub fn set_supported_os_versions(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.inner = self.inner.set_supported_os_versions(input);
            self
        }
        pub fn data(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.data(input);
            self
        }
        pub fn set_data(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_data(input);
            self
        }
        pub fn uri(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.uri(input);
            self
        }
        pub fn set_uri(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_uri(input);
            self
        }
        pub fn kms_key_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.kms_key_id(input);
            self
        }
        pub fn set_kms_key_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_kms_key_id(input);
            self
        }
        pub fn tags(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::string::String>,
        ) -> Self {
            self.inner = self.inner.tags(k, v);
            self
        }
        pub fn set_tags(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>) -> Self {
            self.inner = self.inner.set_tags(input);
            self
        }
        pub fn client_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.client_token(input);
            self
        }
        pub fn set_client_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_client_token(input);
            self
        }
    }
    /// Creates a new distribution configuration.
    #[derive(std::fmt::Debug)]
    pub struct CreateDistributionConfiguration<C = aws_hyper::conn::Standard> {
        handle: std::sync::Arc<super::Handle<C>>,
        inner: crate::input::create_distribution_configuration_input::Builder,
    }
    impl<C> CreateDistributionConfiguration<C> {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::CreateDistributionConfigurationOutput,
            aws_hyper::SdkError<crate::error::CreateDistributionConfigurationError>,
        >
        where
            C: aws_hyper::bounds::SmithyConnector,
        {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn name(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.name(input);
            self
        }
        pub fn set_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_name(input);
            self
        }
        pub fn description(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.description(input);
            self
        }
        pub fn set_description(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_description(input);
            self
        }
        pub fn distributions(mut self, inp: impl Into<crate::model::Distribution>) -> Self {
            self.inner = self.inner.distributions(inp);
            self
        }
        pub fn set_distributions(mut self, input: std::option::Option<std::vec::Vec<crate::model::Distribution>>) -> Self {
            self.inner = self.inner.set_distributions(input);
            self
        }
        pub fn tags(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::string::String>,
        ) -> Self {
            self.inner = self.inner.tags(k, v);
            self
        }
        pub fn set_tags(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>) -> Self {
            self.inner = self.inner.set_tags(input);
            self
        }
        pub fn client_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.client_token(input);
            self
        }
        pub fn set_client_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_client_token(input);
            self
        }
    }
    /// Creates a new image.
    #[derive(std::fmt::Debug)]
    pub struct CreateImage<C = aws_hyper::conn::Standard> {
        handle: std::sync::Arc<super::Handle<C>>,
        inner: crate::input::create_image_input::Builder,
    }
    impl<C> CreateImage<C> {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::CreateImageOutput,
            aws_hyper::SdkError<crate::error::CreateImageError>,
        >
        where
            C: aws_hyper::bounds::SmithyConnector,
        {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn image_recipe_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.image_recipe_arn(input);
            self
        }
        pub fn set_image_recipe_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_image_recipe_arn(input);
            self
        }
        pub fn distribution_configuration_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.distribution_configuration_arn(input);
            self
        }
        pub fn set_distribution_configuration_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_distribution_configuration_arn(input);
            self
        }
        pub fn infrastructure_configuration_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.infrastructure_configuration_arn(input);
            self
        }
        pub fn set_infrastructure_configuration_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_infrastructure_configuration_arn(input);
            self
        }
        pub fn image_tests_configuration(mut self, input: impl Into<crate::model::ImageTestsConfiguration>) -> Self {
            self.inner = self.inner.image_tests_configuration(input);
            self
        }
        pub fn set_image_tests_configuration(mut self, input: std::option::Option<crate::model::ImageTestsConfiguration>) -> Self {
            self.inner = self.inner.set_image_tests_configuration(input);
            self
        }
        pub fn enhanced_image_metadata_enabled(mut self, input: bool) -> Self {
            self.inner = self.inner.enhanced_image_metadata_enabled(input);
            self
        }
        pub fn set_enhanced_image_metadata_enabled(mut self, input: std::option::Option<bool>) -> Self {
            self.inner = self.inner.set_enhanced_image_metadata_enabled(input);
            self
        }
        pub fn tags(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::string::String>,
        ) -> Self {
            self.inner = self.inner.tags(k, v);
            self
        }
        pub fn set_tags(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>) -> Self {
            self.inner = self.inner.set_tags(input);
            self
        }
        pub fn client_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.client_token(input);
            self
        }
        pub fn set_client_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_client_token(input);
            self
        }
    }
    /// Creates a new image pipeline.
    #[derive(std::fmt::Debug)]
    pub struct CreateImagePipeline<C = aws_hyper::conn::Standard> {
        handle: std::sync::Arc<super::Handle<C>>,
        inner: crate::input::create_image_pipeline_input::Builder,
    }
    impl<C> CreateImagePipeline<C> {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::CreateImagePipelineOutput,
            aws_hyper::SdkError<crate::error::CreateImagePipelineError>,
        >
        where
            C: aws_hyper::bounds::SmithyConnector,
        {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn name(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.name(input);
            self
        }
        pub fn set_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_name(input);
            self
        }
        pub fn description(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.description(input);
            self
        }
        pub fn set_description(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_description(input);
            self
        }
        pub fn image_recipe_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.image_recipe_arn(input);
            self
        }
        pub fn set_image_recipe_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_image_recipe_arn(input);
            self
        }
        pub fn infrastructure_configuration_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.infrastructure_configuration_arn(input);
            self
        }
        pub fn set_infrastructure_configuration_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_infrastructure_configuration_arn(input);
            self
        }
        pub fn distribution_configuration_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.distribution_configuration_arn(input);
            self
        }
        pub fn set_distribution_configuration_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_distribution_configuration_arn(input);
            self
        }
        pub fn image_tests_configuration(mut self, input: impl Into<crate::model::ImageTestsConfiguration>) -> Self {
            self.inner = self.inner.image_tests_configuration(input);
            self
        }
        pub fn set_image_tests_configuration(mut self, input: std::option::Option<crate::model::ImageTestsConfiguration>) -> Self {
            self.inner = self.inner.set_image_tests_configuration(input);
            self
        }
        pub fn enhanced_image_metadata_enabled(mut self, input: bool) -> Self {
            self.inner = self.inner.enhanced_image_metadata_enabled(input);
            self
        }
        pub fn set_enhanced_image_metadata_enabled(mut self, input: std::option::Option<bool>) -> Self {
            self.inner = self.inner.set_enhanced_image_metadata_enabled(input);
            self
        }
        pub fn schedule(mut self, input: impl Into<crate::model::Schedule>) -> Self {
            self.inner = self.inner.schedule(input);
            self
        }
        pub fn set_schedule(mut self, input: std::option::Option<crate::model::Schedule>) -> Self {
            self.inner = self.inner.set_schedule(input);
            self
        }
        pub fn status(mut self, input: impl Into<crate::model::PipelineStatus>) -> Self {
            self.inner = self.inner.status(input);
            self
        }
        pub fn set_status(mut self, input: std::option::Option<crate::model::PipelineStatus>) -> Self {
            self.inner = self.inner.set_status(input);
            self
        }
        pub fn tags(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::string::String>,
        ) -> Self {
            self.inner = self.inner.tags(k, v);
            self
        }
        pub fn set_tags(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>) -> Self {
            self.inner = self.inner.set_tags(input);
            self
        }
        pub fn client_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.client_token(input);
            self
        }
        pub fn set_client_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_client_token(input);
            self
        }
    }
    /// Creates a new image recipe.
    #[derive(std::fmt::Debug)]
    pub struct CreateImageRecipe<C = aws_hyper::conn::Standard> {
        handle: std::sync::Arc<super::Handle<C>>,
        inner: crate::input::create_image_recipe_input::Builder,
    }
    impl<C> CreateImageRecipe<C> {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::CreateImageRecipeOutput,
            aws_hyper::SdkError<crate::error::CreateImageRecipeError>,
        >
        where
            C: aws_hyper::bounds::SmithyConnector,
        {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn name(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.name(input);
            self
        }
        pub fn set_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_name(input);
            self
        }
        pub fn description(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.description(input);
            self
        }
        pub fn set_description(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_description(input);
            self
        }
        pub fn semantic_version(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.semantic_version(input);
            self
        }
        pub fn set_semantic_version(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_semantic_version(input);
            self
        }
        pub fn components(mut self, inp: impl Into<crate::model::ComponentConfiguration>) -> Self {
            self.inner = self.inner.components(inp);
            self
        }
        pub fn set_components(mut self, input: std::option::Option<std::vec::Vec<crate::model::ComponentConfiguration>>) -> Self {
            self.inner = self.inner.set_components(input);
            self
        }
        pub fn parent_image(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.parent_image(input);
            self
        }
        pub fn set_parent_image(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_parent_image(input);
            self
        }
        pub fn block_device_mappings(mut self, inp: impl Into<crate::model::InstanceBlockDeviceMapping>) -> Self {
            self.inner = self.inner.block_device_mappings(inp);
            self
        }
        pub fn set_block_device_mappings(mut self, input: std::option::Option<std::vec::Vec<crate::model::InstanceBlockDeviceMapping>>) -> Self {
            self.inner = self.inner.set_block_device_mappings(input);
            self
        }
        pub fn tags(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::string::String>,
        ) -> Self {
            self.inner = self.inner.tags(k, v);
            self
        }
        pub fn set_tags(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>) -> Self {
            self.inner = self.inner.set_tags(input);
            self
        }
        pub fn working_directory(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.working_directory(input);
            self
        }
        pub fn set_working_directory(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_working_directory(input);
            self
        }
        pub fn client_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.client_token(input);
            self
        }
        pub fn set_client_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_client_token(input);
            self
        }
    }
    /// Creates a new infrastructure configuration.
    #[derive(std::fmt::Debug)]
    pub struct CreateInfrastructureConfiguration<C = aws_hyper::conn::Standard> {
        handle: std::sync::Arc<super::Handle<C>>,
        inner: crate::input::create_infrastructure_configuration_input::Builder,
    }
    impl<C> CreateInfrastructureConfiguration<C> {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::CreateInfrastructureConfigurationOutput,
            aws_hyper::SdkError<crate::error::CreateInfrastructureConfigurationError>,
        >
        where
            C: aws_hyper::bounds::SmithyConnector,
        {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn name(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.name(input);
            self
        }
        pub fn set_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_name(input);
            self
        }
        pub fn description(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.description(input);
            self
        }
        pub fn set_description(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_description(input);
            self
        }
        pub fn instance_types(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.instance_types(inp);
            self
        }
        pub fn set_instance_types(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.inner = self.inner.set_instance_types(input);
            self
        }
        pub fn instance_profile_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.instance_profile_name(input);
            self
        }
        pub fn set_instance_profile_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_instance_profile_name(input);
            self
        }
        pub fn security_group_ids(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.security_group_ids(inp);
            self
        }
        pub fn set_security_group_ids(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.inner = self.inner.set_security_group_ids(input);
            self
        }
        pub fn subnet_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.subnet_id(input);
            self
        }
        pub fn set_subnet_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_subnet_id(input);
            self
        }
        pub fn logging(mut self, input: impl Into<crate::model::Logging>) -> Self {
            self.inner = self.inner.logging(input);
            self
        }
        pub fn set_logging(mut self, input: std::option::Option<crate::model::Logging>) -> Self {
            self.inner = self.inner.set_logging(input);
            self
        }
        pub fn key_pair(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.key_pair(input);
            self
        }
        pub fn set_key_pair(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_key_pair(input);
            self
        }
        pub fn terminate_instance_on_failure(mut self, input: bool) -> Self {
            self.inner = self.inner.terminate_instance_on_failure(input);
            self
        }
        pub fn set_terminate_instance_on_failure(mut self, input: std::option::Option<bool>) -> Self {
            self.inner = self.inner.set_terminate_instance_on_failure(input);
            self
        }
        pub fn sns_topic_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.sns_topic_arn(input);
            self
        }
        pub fn set_sns_topic_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_sns_topic_arn(input);
            self
        }
        pub fn resource_tags(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::string::String>,
        ) -> Self {
            self.inner = self.inner.resource_tags(k, v);
            self
        }
        pub fn set_resource_tags(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>) -> Self {
            self.inner = self.inner.set_resource_tags(input);
            self
        }
        pub fn tags(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::string::String>,
        ) -> Self {
            self.inner = self.inner.tags(k, v);
            self
        }
        pub fn set_tags(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>) -> Self {
            self.inner = self.inner.set_tags(input);
            self
        }
        pub fn client_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.client_token(input);
            self
        }
        pub fn set_client_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_client_token(input);
            self
        }
    }
    /// Deletes a component build version.
    #[derive(std::fmt::Debug)]
    pub struct DeleteComponent<C = aws_hyper::conn::Standard> {
        handle: std::sync::Arc<super::Handle<C>>,
        inner: crate::input::delete_component_input::Builder,
    }
    impl<C> DeleteComponent<C> {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::DeleteComponentOutput,
            aws_hyper::SdkError<crate::error::DeleteComponentError>,
        >
        where
            C: aws_hyper::bounds::SmithyConnector,
        {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn component_build_version_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.component_build_version_arn(input);
            self
        }
        pub fn set_component_build_version_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_component_build_version_arn(input);
            self
        }
    }
    /// Deletes a distribution configuration.
    #[derive(std::fmt::Debug)]
    pub struct DeleteDistributionConfiguration<C = aws_hyper::conn::Standard> {
        handle: std::sync::Arc<super::Handle<C>>,
        inner: crate::input::delete_distribution_configuration_input::Builder,
    }
    impl<C> DeleteDistributionConfiguration<C> {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::DeleteDistributionConfigurationOutput,
            aws_hyper::SdkError<crate::error::DeleteDistributionConfigurationError>,
        >
        where
            C: aws_hyper::bounds::SmithyConnector,
        {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn distribution_configuration_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.distribution_configuration_arn(input);
            self
        }
        pub fn set_distribution_configuration_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_distribution_configuration_arn(input);
            self
        }
    }
    /// Deletes an image.
    #[derive(std::fmt::Debug)]
    pub struct DeleteImage<C = aws_hyper::conn::Standard> {
        handle: std::sync::Arc<super::Handle<C>>,
        inner: crate::input::delete_image_input::Builder,
    }
    impl<C> DeleteImage<C> {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::DeleteImageOutput,
            aws_hyper::SdkError<crate::error::DeleteImageError>,
        >
        where
            C: aws_hyper::bounds::SmithyConnector,
        {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn image_build_version_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.image_build_version_arn(input);
            self
        }
        pub fn set_image_build_version_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_image_build_version_arn(input);
            self
        }
    }
    /// Deletes an image pipeline.
    #[derive(std::fmt::Debug)]
    pub struct DeleteImagePipeline<C = aws_hyper::conn::Standard> {
        handle: std::sync::Arc<super::Handle<C>>,
        inner: crate::input::delete_image_pipeline_input::Builder,
    }
    impl<C> DeleteImagePipeline<C> {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::DeleteImagePipelineOutput,
            aws_hyper::SdkError<crate::error::DeleteImagePipelineError>,
        >
        where
            C: aws_hyper::bounds::SmithyConnector,
        {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn image_pipeline_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.image_pipeline_arn(input);
            self
        }
        pub fn set_image_pipeline_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_image_pipeline_arn(input);
            self
        }
    }
    /// Deletes an image recipe.
    #[derive(std::fmt::Debug)]
    pub struct DeleteImageRecipe<C = aws_hyper::conn::Standard> {
        handle: std::sync::Arc<super::Handle<C>>,
        inner: crate::input::delete_image_recipe_input::Builder,
    }
    impl<C> DeleteImageRecipe<C> {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::DeleteImageRecipeOutput,
            aws_hyper::SdkError<crate::error::DeleteImageRecipeError>,
        >
        where
            C: aws_hyper::bounds::SmithyConnector,
        {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn image_recipe_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.image_recipe_arn(input);
            self
        }
        pub fn set_image_recipe_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_image_recipe_arn(input);
            self
        }
    }
    /// Deletes an infrastructure configuration.
    #[derive(std::fmt::Debug)]
    pub struct DeleteInfrastructureConfiguration<C = aws_hyper::conn::Standard> {
        handle: std::sync::Arc<super::Handle<C>>,
        inner: crate::input::delete_infrastructure_configuration_input::Builder,
    }
    impl<C> DeleteInfrastructureConfiguration<C> {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::DeleteInfrastructureConfigurationOutput,
            aws_hyper::SdkError<crate::error::DeleteInfrastructureConfigurationError>,
        >
        where
            C: aws_hyper::bounds::SmithyConnector,
        {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn infrastructure_configuration_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.infrastructure_configuration_arn(input);
            self
        }
        pub fn set_infrastructure_configuration_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_infrastructure_configuration_arn(input);
            self
        }
    }
    /// Gets a component object.
    #[derive(std::fmt::Debug)]
    pub struct GetComponent<C = aws_hyper::conn::Standard> {
        handle: std::sync::Arc<super::Handle<C>>,
        inner: crate::input::get_component_input::Builder,
    }
    impl<C> GetComponent<C> {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::GetComponentOutput,
            aws_hyper::SdkError<crate::error::GetComponentError>,
        >
        where
            C: aws_hyper::bounds::SmithyConnector,
        {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn component_build_version_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.component_build_version_arn(input);
            self
        }
        pub fn set_component_build_version_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_component_build_version_arn(input);
            self
        }
    }
    /// Gets a component policy.
    #[derive(std::fmt::Debug)]
    pub struct GetComponentPolicy<C = aws_hyper::conn::Standard> {
        handle: std::sync::Arc<super::Handle<C>>,
        inner: crate::input::get_component_policy_input::Builder,
    }
    impl<C> GetComponentPolicy<C> {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::GetComponentPolicyOutput,
            aws_hyper::SdkError<crate::error::GetComponentPolicyError>,
        >
        where
            C: aws_hyper::bounds::SmithyConnector,
        {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn component_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.component_arn(input);
            self
        }
        pub fn set_component_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_component_arn(input);
            self
        }
    }
    /// Gets a distribution configuration.
    #[derive(std::fmt::Debug)]
    pub struct GetDistributionConfiguration<C = aws_hyper::conn::Standard> {
        handle: std::sync::Arc<super::Handle<C>>,
        inner: crate::input::get_distribution_configuration_input::Builder,
    }
    impl<C> GetDistributionConfiguration<C> {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::GetDistributionConfigurationOutput,
            aws_hyper::SdkError<crate::error::GetDistributionConfigurationError>,
        >
        where
            C: aws_hyper::bounds::SmithyConnector,
        {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn distribution_configuration_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.distribution_configuration_arn(input);
            self
        }
        pub fn set_distribution_configuration_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_distribution_configuration_arn(input);
            self
        }
    }
    /// Gets an image.
    #[derive(std::fmt::Debug)]
    pub struct GetImage<C = aws_hyper::conn::Standard> {
        handle: std::sync::Arc<super::Handle<C>>,
        inner: crate::input::get_image_input::Builder,
    }
    impl<C> GetImage<C> {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::GetImageOutput,
            aws_hyper::SdkError<crate::error::GetImageError>,
        >
        where
            C: aws_hyper::bounds::SmithyConnector,
        {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn image_build_version_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.image_build_version_arn(input);
            self
        }
        pub fn set_image_build_version_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_image_build_version_arn(input);
            self
        }
    }
    /// Gets an image pipeline.
    #[derive(std::fmt::Debug)]
    pub struct GetImagePipeline<C = aws_hyper::conn::Standard> {
        handle: std::sync::Arc<super::Handle<C>>,
        inner: crate::input::get_image_pipeline_input::Builder,
    }
    impl<C> GetImagePipeline<C> {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::GetImagePipelineOutput,
            aws_hyper::SdkError<crate::error::GetImagePipelineError>,
        >
        where
            C: aws_hyper::bounds::SmithyConnector,
        {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn image_pipeline_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.image_pipeline_arn(input);
            self
        }
        pub fn set_image_pipeline_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_image_pipeline_arn(input);
            self
        }
    }
    /// Gets an image policy.
    #[derive(std::fmt::Debug)]
    pub struct GetImagePolicy<C = aws_hyper::conn::Standard> {
        handle: std::sync::Arc<super::Handle<C>>,
        inner: crate::input::get_image_policy_input::Builder,
    }
    impl<C> GetImagePolicy<C> {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::GetImagePolicyOutput,
            aws_hyper::SdkError<crate::error::GetImagePolicyError>,
        >
        where
            C: aws_hyper::bounds::SmithyConnector,
        {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn image_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.image_arn(input);
            self
        }
        pub fn set_image_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_image_arn(input);
            self
        }
    }
    /// Gets an image recipe.
    #[derive(std::fmt::Debug)]
    pub struct GetImageRecipe<C = aws_hyper::conn::Standard> {
        handle: std::sync::Arc<super::Handle<C>>,
        inner: crate::input::get_image_recipe_input::Builder,
    }
    impl<C> GetImageRecipe<C> {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::GetImageRecipeOutput,
            aws_hyper::SdkError<crate::error::GetImageRecipeError>,
        >
        where
            C: aws_hyper::bounds::SmithyConnector,
        {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn image_recipe_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.image_recipe_arn(input);
            self
        }
        pub fn set_image_recipe_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_image_recipe_arn(input);
            self
        }
    }
    /// Gets an image recipe policy.
    #[derive(std::fmt::Debug)]
    pub struct GetImageRecipePolicy<C = aws_hyper::conn::Standard> {
        handle: std::sync::Arc<super::Handle<C>>,
        inner: crate::input::get_image_recipe_policy_input::Builder,
    }
    impl<C> GetImageRecipePolicy<C> {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::GetImageRecipePolicyOutput,
            aws_hyper::SdkError<crate::error::GetImageRecipePolicyError>,
        >
        where
            C: aws_hyper::bounds::SmithyConnector,
        {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn image_recipe_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.image_recipe_arn(input);
            self
        }
        pub fn set_image_recipe_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_image_recipe_arn(input);
            self
        }
    }
    /// Gets an infrastructure configuration.
    #[derive(std::fmt::Debug)]
    pub struct GetInfrastructureConfiguration<C = aws_hyper::conn::Standard> {
        handle: std::sync::Arc<super::Handle<C>>,
        inner: crate::input::get_infrastructure_configuration_input::Builder,
    }
    impl<C> GetInfrastructureConfiguration<C> {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::GetInfrastructureConfigurationOutput,
            aws_hyper::SdkError<crate::error::GetInfrastructureConfigurationError>,
        >
        where
            C: aws_hyper::bounds::SmithyConnector,
        {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn infrastructure_configuration_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.infrastructure_configuration_arn(input);
            self
        }
        pub fn set_infrastructure_configuration_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_infrastructure_configuration_arn(input);
            self
        }
    }
    /// Imports a component and transforms its data into a component document.
    #[derive(std::fmt::Debug)]
    pub struct ImportComponent<C = aws_hyper::conn::Standard> {
        handle: std::sync::Arc<super::Handle<C>>,
        inner: crate::input::import_component_input::Builder,
    }
    impl<C> ImportComponent<C> {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::ImportComponentOutput,
            aws_hyper::SdkError<crate::error::ImportComponentError>,
        >
        where
            C: aws_hyper::bounds::SmithyConnector,
        {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn name(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.name(input);
            self
        }
        pub fn set_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_name(input);
            self
        }
        pub fn semantic_version(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.semantic_version(input);
            self
        }
        pub fn set_semantic_version(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_semantic_version(input);
            self
        }
        pub fn description(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.description(input);
            self
        }
        pub fn set_description(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_description(input);
            self
        }
        pub fn change_description(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.change_description(input);
            self
        }
        pub fn set_change_description(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_change_description(input);
            self
        }
        pub fn r#type(mut self, input: impl Into<crate::model::ComponentType>) -> Self {
            self.inner = self.inner.r#type(input);
            self
        }
        pub fn set_type(mut self, input: std::option::Option<crate::model::ComponentType>) -> Self {
            self.inner = self.inner.set_type(input);
            self
        }
        pub fn format(mut self, input: impl Into<crate::model::ComponentFormat>) -> Self {
            self.inner = self.inner.format(input);
            self
        }
        pub fn set_format(mut self, input: std::option::Option<crate::model::ComponentFormat>) -> Self {
            self.inner = self.inner.set_format(input);
            self
        }
        pub fn platform(mut self, input: impl Into<crate::model::Platform>) -> Self {
            self.inner = self.inner.platform(input);
            self
        }
        pub fn set_platform(mut self, input: std::option::Option<crate::model::Platform>) -> Self {
            self.inner = self.inner.set_platform(input);
            self
        }
        pub fn data(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.data(input);
            self
        }
        pub fn set_data(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_data(input);
            self
        }
        pub fn uri(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.uri(input);
            self
        }
        pub fn set_uri(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_uri(input);
            self
        }
        pub fn kms_key_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.kms_key_id(input);
            self
        }
        pub fn set_kms_key_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_kms_key_id(input);
            self
        }
        pub fn tags(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::string::String>,
        ) -> Self {
            self.inner = self.inner.tags(k, v);
            self
        }
        pub fn set_tags(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>) -> Self {
            self.inner = self.inner.set_tags(input);
            self
        }
        pub fn client_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.client_token(input);
            self
        }
        pub fn set_client_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_client_token(input);
            self
        }
    }
    /// Returns the list of component build versions for the specified semantic version.
    #[derive(std::fmt::Debug)]
    pub struct ListComponentBuildVersions<C = aws_hyper::conn::Standard> {
        handle: std::sync::Arc<super::Handle<C>>,
        inner: crate::input::list_component_build_versions_input::Builder,
    }
    impl<C> ListComponentBuildVersions<C> {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::ListComponentBuildVersionsOutput,
            aws_hyper::SdkError<crate::error::ListComponentBuildVersionsError>,
        >
        where
            C: aws_hyper::bounds::SmithyConnector,
        {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn component_version_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.component_version_arn(input);
            self
        }
        pub fn set_component_version_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_component_version_arn(input);
            self
        }
        pub fn max_results(mut self, input: i32) -> Self {
            self.inner = self.inner.max_results(input);
            self
        }
        pub fn set_max_results(mut self, input: std::option::Option<i32>) -> Self {
            self.inner = self.inner.set_max_results(input);
            self
        }
        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.next_token(input);
            self
        }
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_next_token(input);
            self
        }
    }
    /// Returns the list of component build versions that can be filtered by name, or by using the listed filters.
    #[derive(std::fmt::Debug)]
    pub struct ListComponents<C = aws_hyper::conn::Standard> {
        handle: std::sync::Arc<super::Handle<C>>,
        inner: crate::input::list_components_input::Builder,
    }
    impl<C> ListComponents<C> {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::ListComponentsOutput,
            aws_hyper::SdkError<crate::error::ListComponentsError>,
        >
        where
            C: aws_hyper::bounds::SmithyConnector,
        {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn owner(mut self, input: impl Into<crate::model::Ownership>) -> Self {
            self.inner = self.inner.owner(input);
            self
        }
        pub fn set_owner(mut self, input: std::option::Option<crate::model::Ownership>) -> Self {
            self.inner = self.inner.set_owner(input);
            self
        }
        pub fn filters(mut self, inp: impl Into<crate::model::Filter>) -> Self {
            self.inner = self.inner.filters(inp);
            self
        }
        pub fn set_filters(mut self, input: std::option::Option<std::vec::Vec<crate::model::Filter>>) -> Self {
            self.inner = self.inner.set_filters(input);
            self
        }
        pub fn max_results(mut self, input: i32) -> Self {
            self.inner = self.inner.max_results(input);
            self
        }
        pub fn set_max_results(mut self, input: std::option::Option<i32>) -> Self {
            self.inner = self.inner.set_max_results(input);
            self
        }
        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.next_token(input);
            self
        }
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_next_token(input);
            self
        }
    }
    /// Returns a list of distribution configurations.
    #[derive(std::fmt::Debug)]
    pub struct ListDistributionConfigurations<C = aws_hyper::conn::Standard> {
        handle: std::sync::Arc<super::Handle<C>>,
        inner: crate::input::list_distribution_configurations_input::Builder,
    }
    impl<C> ListDistributionConfigurations<C> {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::ListDistributionConfigurationsOutput,
            aws_hyper::SdkError<crate::error::ListDistributionConfigurationsError>,
        >
        where
            C: aws_hyper::bounds::SmithyConnector,
        {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn filters(mut self, inp: impl Into<crate::model::Filter>) -> Self {
            self.inner = self.inner.filters(inp);
            self
        }
        pub fn set_filters(mut self, input: std::option::Option<std::vec::Vec<crate::model::Filter>>) -> Self {
            self.inner = self.inner.set_filters(input);
            self
        }
        pub fn max_results(mut self, input: i32) -> Self {
            self.inner = self.inner.max_results(input);
            self
        }
        pub fn set_max_results(mut self, input: std::option::Option<i32>) -> Self {
            self.inner = self.inner.set_max_results(input);
            self
        }
        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.next_token(input);
            self
        }
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_next_token(input);
            self
        }
    }
    /// Returns a list of image build versions.
    #[derive(std::fmt::Debug)]
    pub struct ListImageBuildVersions<C = aws_hyper::conn::Standard> {
        handle: std::sync::Arc<super::Handle<C>>,
        inner: crate::input::list_image_build_versions_input::Builder,
    }
    impl<C> ListImageBuildVersions<C> {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::ListImageBuildVersionsOutput,
            aws_hyper::SdkError<crate::error::ListImageBuildVersionsError>,
        >
        where
            C: aws_hyper::bounds::SmithyConnector,
        {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn image_version_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.image_version_arn(input);
            self
        }
        pub fn set_image_version_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_image_version_arn(input);
            self
        }
        pub fn filters(mut self, inp: impl Into<crate::model::Filter>) -> Self {
            self.inner = self.inner.filters(inp);
            self
        }
        pub fn set_filters(mut self, input: std::option::Option<std::vec::Vec<crate::model::Filter>>) -> Self {
            self.inner = self.inner.set_filters(input);
            self
        }
        pub fn max_results(mut self, input: i32) -> Self {
            self.inner = self.inner.max_results(input);
            self
        }
        pub fn set_max_results(mut self, input: std::option::Option<i32>) -> Self {
            self.inner = self.inner.set_max_results(input);
            self
        }
        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.next_token(input);
            self
        }
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_next_token(input);
            self
        }
    }
    /// Returns a list of images created by the specified pipeline.
    #[derive(std::fmt::Debug)]
    pub struct ListImagePipelineImages<C = aws_hyper::conn::Standard> {
        handle: std::sync::Arc<super::Handle<C>>,
        inner: crate::input::list_image_pipeline_images_input::Builder,
    }
    impl<C> ListImagePipelineImages<C> {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::ListImagePipelineImagesOutput,
            aws_hyper::SdkError<crate::error::ListImagePipelineImagesError>,
        >
        where
            C: aws_hyper::bounds::SmithyConnector,
        {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn image_pipeline_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.image_pipeline_arn(input);
            self
        }
        pub fn set_image_pipeline_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_image_pipeline_arn(input);
            self
        }
        pub fn filters(mut self, inp: impl Into<crate::model::Filter>) -> Self {
            self.inner = self.inner.filters(inp);
            self
        }
        pub fn set_filters(mut self, input: std::option::Option<std::vec::Vec<crate::model::Filter>>) -> Self {
            self.inner = self.inner.set_filters(input);
            self
        }
        pub fn max_results(mut self, input: i32) -> Self {
            self.inner = self.inner.max_results(input);
            self
        }
        pub fn set_max_results(mut self, input: std::option::Option<i32>) -> Self {
            self.inner = self.inner.set_max_results(input);
            self
        }
        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.next_token(input);
            self
        }
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_next_token(input);
            self
        }
    }
    /// Returns a list of image pipelines.
    #[derive(std::fmt::Debug)]
    pub struct ListImagePipelines<C = aws_hyper::conn::Standard> {
        handle: std::sync::Arc<super::Handle<C>>,
        inner: crate::input::list_image_pipelines_input::Builder,
    }
    impl<C> ListImagePipelines<C> {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::ListImagePipelinesOutput,
            aws_hyper::SdkError<crate::error::ListImagePipelinesError>,
        >
        where
            C: aws_hyper::bounds::SmithyConnector,
        {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn filters(mut self, inp: impl Into<crate::model::Filter>) -> Self {
            self.inner = self.inner.filters(inp);
            self
        }
        pub fn set_filters(mut self, input: std::option::Option<std::vec::Vec<crate::model::Filter>>) -> Self {
            self.inner = self.inner.set_filters(input);
            self
        }
        pub fn max_results(mut self, input: i32) -> Self {
            self.inner = self.inner.max_results(input);
            self
        }
        pub fn set_max_results(mut self, input: std::option::Option<i32>) -> Self {
            self.inner = self.inner.set_max_results(input);
            self
        }
        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.next_token(input);
            self
        }
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_next_token(input);
            self
        }
    }
    /// Returns a list of image recipes.
    #[derive(std::fmt::Debug)]
    pub struct ListImageRecipes<C = aws_hyper::conn::Standard> {
        handle: std::sync::Arc<super::Handle<C>>,
        inner: crate::input::list_image_recipes_input::Builder,
    }
    impl<C> ListImageRecipes<C> {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::ListImageRecipesOutput,
            aws_hyper::SdkError<crate::error::ListImageRecipesError>,
        >
        where
            C: aws_hyper::bounds::SmithyConnector,
        {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn owner(mut self, input: impl Into<crate::model::Ownership>) -> Self {
            self.inner = self.inner.owner(input);
            self
        }
        pub fn set_owner(mut self, input: std::option::Option<crate::model::Ownership>) -> Self {
            self.inner = self.inner.set_owner(input);
            self
        }
        pub fn filters(mut self, inp: impl Into<crate::model::Filter>) -> Self {
            self.inner = self.inner.filters(inp);
            self
        }
        pub fn set_filters(mut self, input: std::option::Option<std::vec::Vec<crate::model::Filter>>) -> Self {
            self.inner = self.inner.set_filters(input);
            self
        }
        pub fn max_results(mut self, input: i32) -> Self {
            self.inner = self.inner.max_results(input);
            self
        }
        pub fn set_max_results(mut self, input: std::option::Option<i32>) -> Self {
            self.inner = self.inner.set_max_results(input);
            self
        }
        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.next_token(input);
            self
        }
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_next_token(input);
            self
        }
    }
    /// Returns the list of images that you have access to.
    #[derive(std::fmt::Debug)]
    pub struct ListImages<C = aws_hyper::conn::Standard> {
        handle: std::sync::Arc<super::Handle<C>>,
        inner: crate::input::list_images_input::Builder,
    }
    impl<C> ListImages<C> {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::ListImagesOutput,
            aws_hyper::SdkError<crate::error::ListImagesError>,
        >
        where
            C: aws_hyper::bounds::SmithyConnector,
        {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn owner(mut self, input: impl Into<crate::model::Ownership>) -> Self {
            self.inner = self.inner.owner(input);
            self
        }
        pub fn set_owner(mut self, input: std::option::Option<crate::model::Ownership>) -> Self {
            self.inner = self.inner.set_owner(input);
            self
        }
        pub fn filters(mut self, inp: impl Into<crate::model::Filter>) -> Self {
            self.inner = self.inner.filters(inp);
            self
        }
        pub fn set_filters(mut self, input: std::option::Option<std::vec::Vec<crate::model::Filter>>) -> Self {
            self.inner = self.inner.set_filters(input);
            self
        }
        pub fn max_results(mut self, input: i32) -> Self {
            self.inner = self.inner.max_results(input);
            self
        }
        pub fn set_max_results(mut self, input: std::option::Option<i32>) -> Self {
            self.inner = self.inner.set_max_results(input);
            self
        }
        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.next_token(input);
            self
        }
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_next_token(input);
            self
        }
    }
    /// Returns a list of infrastructure configurations.
    #[derive(std::fmt::Debug)]
    pub struct ListInfrastructureConfigurations<C = aws_hyper::conn::Standard> {
        handle: std::sync::Arc<super::Handle<C>>,
        inner: crate::input::list_infrastructure_configurations_input::Builder,
    }
    impl<C> ListInfrastructureConfigurations<C> {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::ListInfrastructureConfigurationsOutput,
            aws_hyper::SdkError<crate::error::ListInfrastructureConfigurationsError>,
        >
        where
            C: aws_hyper::bounds::SmithyConnector,
        {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn filters(mut self, inp: impl Into<crate::model::Filter>) -> Self {
            self.inner = self.inner.filters(inp);
            self
        }
        pub fn set_filters(mut self, input: std::option::Option<std::vec::Vec<crate::model::Filter>>) -> Self {
            self.inner = self.inner.set_filters(input);
            self
        }
        pub fn max_results(mut self, input: i32) -> Self {
            self.inner = self.inner.max_results(input);
            self
        }
        pub fn set_max_results(mut self, input: std::option::Option<i32>) -> Self {
            self.inner = self.inner.set_max_results(input);
            self
        }
        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.next_token(input);
            self
        }
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_next_token(input);
            self
        }
    }
    /// Returns the list of tags for the specified resource.
    #[derive(std::fmt::Debug)]
    pub struct ListTagsForResource<C = aws_hyper::conn::Standard> {
        handle: std::sync::Arc<super::Handle<C>>,
        inner: crate::input::list_tags_for_resource_input::Builder,
    }
    impl<C> ListTagsForResource<C> {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::ListTagsForResourceOutput,
            aws_hyper::SdkError<crate::error::ListTagsForResourceError>,
        >
        where
            C: aws_hyper::bounds::SmithyConnector,
        {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn resource_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.resource_arn(input);
            self
        }
        pub fn set_resource_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_resource_arn(input);
            self
        }
    }
    /// Applies a policy to a component.
    #[derive(std::fmt::Debug)]
    pub struct PutComponentPolicy<C = aws_hyper::conn::Standard> {
        handle: std::sync::Arc<super::Handle<C>>,
        inner: crate::input::put_component_policy_input::Builder,
    }
    impl<C> PutComponentPolicy<C> {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::PutComponentPolicyOutput,
            aws_hyper::SdkError<crate::error::PutComponentPolicyError>,
        >
        where
            C: aws_hyper::bounds::SmithyConnector,
        {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn component_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.component_arn(input);
            self
        }
        pub fn set_component_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_component_arn(input);
            self
        }
        pub fn policy(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.policy(input);
            self
        }
        pub fn set_policy(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_policy(input);
            self
        }
    }
    /// Applies a policy to an image.
    #[derive(std::fmt::Debug)]
    pub struct PutImagePolicy<C = aws_hyper::conn::Standard> {
        handle: std::sync::Arc<super::Handle<C>>,
        inner: crate::input::put_image_policy_input::Builder,
    }
    impl<C> PutImagePolicy<C> {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::PutImagePolicyOutput,
            aws_hyper::SdkError<crate::error::PutImagePolicyError>,
        >
        where
            C: aws_hyper::bounds::SmithyConnector,
        {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn image_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.image_arn(input);
            self
        }
        pub fn set_image_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_image_arn(input);
            self
        }
        pub fn policy(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.policy(input);
            self
        }
        pub fn set_policy(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_policy(input);
            self
        }
    }
    /// Applies a policy to an image recipe.
    #[derive(std::fmt::Debug)]
    pub struct PutImageRecipePolicy<C = aws_hyper::conn::Standard> {
        handle: std::sync::Arc<super::Handle<C>>,
        inner: crate::input::put_image_recipe_policy_input::Builder,
    }
    impl<C> PutImageRecipePolicy<C> {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::PutImageRecipePolicyOutput,
            aws_hyper::SdkError<crate::error::PutImageRecipePolicyError>,
        >
        where
            C: aws_hyper::bounds::SmithyConnector,
        {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn image_recipe_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.image_recipe_arn(input);
            self
        }
        pub fn set_image_recipe_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_image_recipe_arn(input);
            self
        }
        pub fn policy(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.policy(input);
            self
        }
        pub fn set_policy(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_policy(input);
            self
        }
    }
    /// Manually triggers a pipeline to create an image.
    #[derive(std::fmt::Debug)]
    pub struct StartImagePipelineExecution<C = aws_hyper::conn::Standard> {
        handle: std::sync::Arc<super::Handle<C>>,
        inner: crate::input::start_image_pipeline_execution_input::Builder,
    }
    impl<C> StartImagePipelineExecution<C> {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::StartImagePipelineExecutionOutput,
            aws_hyper::SdkError<crate::error::StartImagePipelineExecutionError>,
        >
        where
            C: aws_hyper::bounds::SmithyConnector,
        {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn image_pipeline_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.image_pipeline_arn(input);
            self
        }
        pub fn set_image_pipeline_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_image_pipeline_arn(input);
            self
        }
        pub fn client_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.client_token(input);
            self
        }
        pub fn set_client_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_client_token(input);
            self
        }
    }
    /// Adds a tag to a resource.
    #[derive(std::fmt::Debug)]
    pub struct TagResource<C = aws_hyper::conn::Standard> {
        handle: std::sync::Arc<super::Handle<C>>,
        inner: crate::input::tag_resource_input::Builder,
    }
    impl<C> TagResource<C> {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::TagResourceOutput,
            aws_hyper::SdkError<crate::error::TagResourceError>,
        >
        where
            C: aws_hyper::bounds::SmithyConnector,
        {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn resource_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.resource_arn(input);
            self
        }
        pub fn set_resource_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_resource_arn(input);
            self
        }
        pub fn tags(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::string::String>,
        ) -> Self {
            self.inner = self.inner.tags(k, v);
            self
        }
        pub fn set_tags(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>) -> Self {
            self.inner = self.inner.set_tags(input);
            self
        }
    }
    /// Removes a tag from a resource.
    #[derive(std::fmt::Debug)]
    pub struct UntagResource<C = aws_hyper::conn::Standard> {
        handle: std::sync::Arc<super::Handle<C>>,
        inner: crate::input::untag_resource_input::Builder,
    }
    impl<C> UntagResource<C> {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::UntagResourceOutput,
            aws_hyper::SdkError<crate::error::UntagResourceError>,
        >
        where
            C: aws_hyper::bounds::SmithyConnector,
        {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn resource_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.resource_arn(input);
            self
        }
        pub fn set_resource_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_resource_arn(input);
            self
        }
        pub fn tag_keys(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.tag_keys(inp);
            self
        }
        pub fn set_tag_keys(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.inner = self.inner.set_tag_keys(input);
            self
        }
    }
    /// Updates a new distribution configuration.
    #[derive(std::fmt::Debug)]
    pub struct UpdateDistributionConfiguration<C = aws_hyper::conn::Standard> {
        handle: std::sync::Arc<super::Handle<C>>,
        inner: crate::input::update_distribution_configuration_input::Builder,
    }
    impl<C> UpdateDistributionConfiguration<C> {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::UpdateDistributionConfigurationOutput,
            aws_hyper::SdkError<crate::error::UpdateDistributionConfigurationError>,
        >
        where
            C: aws_hyper::bounds::SmithyConnector,
        {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn distribution_configuration_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.distribution_configuration_arn(input);
            self
        }
        pub fn set_distribution_configuration_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_distribution_configuration_arn(input);
            self
        }
        pub fn description(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.description(input);
            self
        }
        pub fn set_description(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_description(input);
            self
        }
        pub fn distributions(mut self, inp: impl Into<crate::model::Distribution>) -> Self {
            self.inner = self.inner.distributions(inp);
            self
        }
        pub fn set_distributions(mut self, input: std::option::Option<std::vec::Vec<crate::model::Distribution>>) -> Self {
            self.inner = self.inner.set_distributions(input);
            self
        }
        pub fn client_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.client_token(input);
            self
        }
        pub fn set_client_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_client_token(input);
            self
        }
    }
    /// Updates a new image pipeline.
    #[derive(std::fmt::Debug)]
    pub struct UpdateImagePipeline<C = aws_hyper::conn::Standard> {
        handle: std::sync::Arc<super::Handle<C>>,
        inner: crate::input::update_image_pipeline_input::Builder,
    }
    impl<C> UpdateImagePipeline<C> {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::UpdateImagePipelineOutput,
            aws_hyper::SdkError<crate::error::UpdateImagePipelineError>,
        >
        where
            C: aws_hyper::bounds::SmithyConnector,
        {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn image_pipeline_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.image_pipeline_arn(input);
            self
        }
        pub fn set_image_pipeline_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_image_pipeline_arn(input);
            self
        }
        pub fn description(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.description(input);
            self
        }
        pub fn set_description(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_description(input);
            self
        }
        pub fn image_recipe_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.image_recipe_arn(input);
            self
        }
        pub fn set_image_recipe_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_image_recipe_arn(input);
            self
        }
        pub fn infrastructure_configuration_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.infrastructure_configuration_arn(input);
            self
        }
        pub fn set_infrastructure_configuration_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_infrastructure_configuration_arn(input);
            self
        }
        pub fn distribution_configuration_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.distribution_configuration_arn(input);
            self
        }
        pub fn set_distribution_configuration_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_distribution_configuration_arn(input);
            self
        }
        pub fn image_tests_configuration(mut self, input: impl Into<crate::model::ImageTestsConfiguration>) -> Self {
            self.inner = self.inner.image_tests_configuration(input);
            self
        }
        pub fn set_image_tests_configuration(mut self, input: std::option::Option<crate::model::ImageTestsConfiguration>) -> Self {
            self.inner = self.inner.set_image_tests_configuration(input);
            self
        }
        pub fn enhanced_image_metadata_enabled(mut self, input: bool) -> Self {
            self.inner = self.inner.enhanced_image_metadata_enabled(input);
            self
        }
        pub fn set_enhanced_image_metadata_enabled(mut self, input: std::option::Option<bool>) -> Self {
            self.inner = self.inner.set_enhanced_image_metadata_enabled(input);
            self
        }
        pub fn schedule(mut self, input: impl Into<crate::model::Schedule>) -> Self {
            self.inner = self.inner.schedule(input);
            self
        }
        pub fn set_schedule(mut self, input: std::option::Option<crate::model::Schedule>) -> Self {
            self.inner = self.inner.set_schedule(input);
            self
        }
        pub fn status(mut self, input: impl Into<crate::model::PipelineStatus>) -> Self {
            self.inner = self.inner.status(input);
            self
        }
        pub fn set_status(mut self, input: std::option::Option<crate::model::PipelineStatus>) -> Self {
            self.inner = self.inner.set_status(input);
            self
        }
        pub fn client_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.client_token(input);
            self
        }
        pub fn set_client_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_client_token(input);
            self
        }
    }
    /// Updates a new infrastructure configuration.
    #[derive(std::fmt::Debug)]
    pub struct UpdateInfrastructureConfiguration<C = aws_hyper::conn::Standard> {
        handle: std::sync::Arc<super::Handle<C>>,
        inner: crate::input::update_infrastructure_configuration_input::Builder,
    }
    impl<C> UpdateInfrastructureConfiguration<C> {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::UpdateInfrastructureConfigurationOutput,
            aws_hyper::SdkError<crate::error::UpdateInfrastructureConfigurationError>,
        >
        where
            C: aws_hyper::bounds::SmithyConnector,
        {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn infrastructure_configuration_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.infrastructure_configuration_arn(input);
            self
        }
        pub fn set_infrastructure_configuration_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_infrastructure_configuration_arn(input);
            self
        }
        pub fn description(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.description(input);
            self
        }
        pub fn set_description(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_description(input);
            self
        }
        pub fn instance_types(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.instance_types(inp);
            self
        }
        pub fn set_instance_types(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.inner = self.inner.set_instance_types(input);
            self
        }
        pub fn instance_profile_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.instance_profile_name(input);
            self
        }
        pub fn set_instance_profile_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_instance_profile_name(input);
            self
        }
        pub fn security_group_ids(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.security_group_ids(inp);
            self
        }
        pub fn set_security_group_ids(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.inner = self.inner.set_security_group_ids(input);
            self
        }
        pub fn subnet_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.subnet_id(input);
            self
        }
        pub fn set_subnet_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_subnet_id(input);
            self
        }
        pub fn logging(mut self, input: impl Into<crate::model::Logging>) -> Self {
            self.inner = self.inner.logging(input);
            self
        }
        pub fn set_logging(mut self, input: std::option::Option<crate::model::Logging>) -> Self {
            self.inner = self.inner.set_logging(input);
            self
        }
        pub fn key_pair(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.key_pair(input);
            self
        }
        pub fn set_key_pair(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_key_pair(input);
            self
        }
        pub fn terminate_instance_on_failure(mut self, input: bool) -> Self {
            self.inner = self.inner.terminate_instance_on_failure(input);
            self
        }
        pub fn set_terminate_instance_on_failure(mut self, input: std::option::Option<bool>) -> Self {
            self.inner = self.inner.set_terminate_instance_on_failure(input);
            self
        }
        pub fn sns_topic_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.sns_topic_arn(input);
            self
        }
        pub fn set_sns_topic_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_sns_topic_arn(input);
            self
        }
        pub fn resource_tags(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::string::String>,
        ) -> Self {
            self.inner = self.inner.resource_tags(k, v);
            self
        }
        pub fn set_resource_tags(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>) -> Self {
            self.inner = self.inner.set_resource_tags(input);
            self
        }
        pub fn client_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.client_token(input);
            self
        }
        pub fn set_client_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_client_token(input);
            self
        }
    }
}
