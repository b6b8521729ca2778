/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

#[non_exhaustive]
#[derive(serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct CancelImageCreationOutput {
    #[serde(rename = "requestId")]
    pub request_id: std::option::Option<std::string::String>,
    #[serde(rename = "clientToken")]
    pub client_token: std::option::Option<std::string::String>,
    #[serde(rename = "imageBuildVersionArn")]
    pub image_build_version_arn: std::option::Option<std::string::String>,
}
/// See [`CancelImageCreationOutput`](crate::output::CancelImageCreationOutput)
pub mod cancel_image_creation_output {
    /// A builder for [`CancelImageCreationOutput`](crate::output::CancelImageCreationOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        request_id: std::option::Option<std::string::String>,
        client_token: std::option::Option<std::string::String>,
        image_build_version_arn: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn request_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.request_id = Some(input.into());
            self
        }
        pub fn set_request_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.request_id = input;
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
        pub fn image_build_version_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.image_build_version_arn = Some(input.into());
            self
        }
        pub fn set_image_build_version_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.image_build_version_arn = input;
            self
        }
        /// Consumes the builder and constructs a [`CancelImageCreationOutput`](crate::output::CancelImageCreationOutput)
        pub fn build(self) -> crate::output::CancelImageCreationOutput {
            crate::output::CancelImageCreationOutput {
                request_id: self.request_id,
                client_token: self.client_token,
                image_build_version_arn: self.image_build_version_arn,
            }
        }
    }
}

impl CancelImageCreationOutput {
    /// Creates a new builder-style object to manufacture [`CancelImageCreationOutput`](crate::output::CancelImageCreationOutput)
    pub fn builder() -> crate::output::cancel_image_creation_output::Builder {
        crate::output::cancel_image_creation_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct CreateComponentOutput {
    #[serde(rename = "requestId")]
    pub request_id: std::option::Option<std::string::String>,
    #[serde(rename = "clientToken")]
    pub client_token: std::option::Option<std::string::String>,
    #[serde(rename = "componentBuildVersionArn")]
    pub component_build_version_arn: std::option::Option<std::string::String>,
}
/// See [`CreateComponentOutput`](crate::output::CreateComponentOutput)
pub mod create_component_output {
    /// A builder for [`CreateComponentOutput`](crate::output::CreateComponentOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        request_id: std::option::Option<std::string::String>,
        client_token: std::option::Option<std::string::String>,
        component_build_version_arn: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn request_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.request_id = Some(input.into());
            self
        }
        pub fn set_request_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.request_id = input;
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
        pub fn component_build_version_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.component_build_version_arn = Some(input.into());
            self
        }
        pub fn set_component_build_version_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.component_build_version_arn = input;
            self
        }
        /// Consumes the builder and constructs a [`CreateComponentOutput`](crate::output::CreateComponentOutput)
        pub fn build(self) -> crate::output::CreateComponentOutput {
            crate::output::CreateComponentOutput {
                request_id: self.request_id,
                client_token: self.client_token,
                component_build_version_arn: self.component_build_version_arn,
            }
        }
    }
}

impl CreateComponentOutput {
    /// Creates a new builder-style object to manufacture [`CreateComponentOutput`](crate::output::CreateComponentOutput)
    pub fn builder() -> crate::output::create_component_output::Builder {
        crate::output::create_component_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct CreateDistributionConfigurationOutput {
    #[serde(rename = "requestId")]
    pub request_id: std::option::Option<std::string::String>,
    #[serde(rename = "clientToken")]
    pub client_token: std::option::Option<std::string::String>,
    #[serde(rename = "distributionConfigurationArn")]
    pub distribution_configuration_arn: std::option::Option<std::string::String>,
}
/// See [`CreateDistributionConfigurationOutput`](crate::output::CreateDistributionConfigurationOutput)
pub mod create_distribution_configuration_output {
    /// A builder for [`CreateDistributionConfigurationOutput`](crate::output::CreateDistributionConfigurationOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        request_id: std::option::Option<std::string::String>,
        client_token: std::option::Option<std::string::String>,
        distribution_configuration_arn: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn request_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.request_id = Some(input.into());
            self
        }
        pub fn set_request_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.request_id = input;
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
        pub fn distribution_configuration_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.distribution_configuration_arn = Some(input.into());
            self
        }
        pub fn set_distribution_configuration_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.distribution_configuration_arn = input;
            self
        }
        /// Consumes the builder and constructs a [`CreateDistributionConfigurationOutput`](crate::output::CreateDistributionConfigurationOutput)
        pub fn build(self) -> crate::output::CreateDistributionConfigurationOutput {
            crate::output::CreateDistributionConfigurationOutput {
                request_id: self.request_id,
                client_token: self.client_token,
                distribution_configuration_arn: self.distribution_configuration_arn,
            }
        }
    }
}

impl CreateDistributionConfigurationOutput {
    /// Creates a new builder-style object to manufacture [`CreateDistributionConfigurationOutput`](crate::output::CreateDistributionConfigurationOutput)
    pub fn builder() -> crate::output::create_distribution_configuration_output::Builder {
        crate::output::create_distribution_configuration_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct CreateImageOutput {
    #[serde(rename = "requestId")]
    pub request_id: std::option::Option<std::string::String>,
    #[serde(rename = "clientToken")]
    pub client_token: std::option::Option<std::string::String>,
    #[serde(rename = "imageBuildVersionArn")]
    pub image_build_version_arn: std::option::Option<std::string::String>,
}
/// See [`CreateImageOutput`](crate::output::CreateImageOutput)
pub mod create_image_output {
    /// A builder for [`CreateImageOutput`](crate::output::CreateImageOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        request_id: std::option::Option<std::string::String>,
        client_token: std::option::Option<std::string::String>,
        image_build_version_arn: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn request_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.request_id = Some(input.into());
            self
        }
        pub fn set_request_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.request_id = input;
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
        pub fn image_build_version_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.image_build_version_arn = Some(input.into());
            self
        }
        pub fn set_image_build_version_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.image_build_version_arn = input;
            self
        }
        /// Consumes the builder and constructs a [`CreateImageOutput`](crate::output::CreateImageOutput)
        pub fn build(self) -> crate::output::CreateImageOutput {
            crate::output::CreateImageOutput {
                request_id: self.request_id,
                client_token: self.client_token,
                image_build_version_arn: self.image_build_version_arn,
            }
        }
    }
}

impl CreateImageOutput {
    /// Creates a new builder-style object to manufacture [`CreateImageOutput`](crate::output::CreateImageOutput)
    pub fn builder() -> crate::output::create_image_output::Builder {
        crate::output::create_image_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct CreateImagePipelineOutput {
    #[serde(rename = "requestId")]
    pub request_id: std::option::Option<std::string::String>,
    #[serde(rename = "clientToken")]
    pub client_token: std::option::Option<std::string::String>,
    #[serde(rename = "imagePipelineArn")]
    pub image_pipeline_arn: std::option::Option<std::string::String>,
}
/// See [`CreateImagePipelineOutput`](crate::output::CreateImagePipelineOutput)
pub mod create_image_pipeline_output {
    /// A builder for [`CreateImagePipelineOutput`](crate::output::CreateImagePipelineOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        request_id: std::option::Option<std::string::String>,
        client_token: std::option::Option<std::string::String>,
        image_pipeline_arn: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn request_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.request_id = Some(input.into());
            self
        }
        pub fn set_request_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.request_id = input;
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
        pub fn image_pipeline_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.image_pipeline_arn = Some(input.into());
            self
        }
        pub fn set_image_pipeline_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.image_pipeline_arn = input;
            self
        }
        /// Consumes the builder and constructs a [`CreateImagePipelineOutput`](crate::output::CreateImagePipelineOutput)
        pub fn build(self) -> crate::output::CreateImagePipelineOutput {
            crate::output::CreateImagePipelineOutput {
                request_id: self.request_id,
                client_token: self.client_token,
                image_pipeline_arn: self.image_pipeline_arn,
            }
        }
    }
}

impl CreateImagePipelineOutput {
    /// Creates a new builder-style object to manufacture [`CreateImagePipelineOutput`](crate::output::CreateImagePipelineOutput)
    pub fn builder() -> crate::output::create_image_pipeline_output::Builder {
        crate::output::create_image_pipeline_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct CreateImageRecipeOutput {
    #[serde(rename = "requestId")]
    pub request_id: std::option::Option<std::string::String>,
    #[serde(rename = "clientToken")]
    pub client_token: std::option::Option<std::string::String>,
    #[serde(rename = "imageRecipeArn")]
    pub image_recipe_arn: std::option::Option<std::string::String>,
}
/// See [`CreateImageRecipeOutput`](crate::output::CreateImageRecipeOutput)
pub mod create_image_recipe_output {
    /// A builder for [`CreateImageRecipeOutput`](crate::output::CreateImageRecipeOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        request_id: std::option::Option<std::string::String>,
        client_token: std::option::Option<std::string::String>,
        image_recipe_arn: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn request_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.request_id = Some(input.into());
            self
        }
        pub fn set_request_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.request_id = input;
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
        pub fn image_recipe_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.image_recipe_arn = Some(input.into());
            self
        }
        pub fn set_image_recipe_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.image_recipe_arn = input;
            self
        }
        /// Consumes the builder and constructs a [`CreateImageRecipeOutput`](crate::output::CreateImageRecipeOutput)
        pub fn build(self) -> crate::output::CreateImageRecipeOutput {
            crate::output::CreateImageRecipeOutput {
                request_id: self.request_id,
                client_token: self.client_token,
                image_recipe_arn: self.image_recipe_arn,
            }
        }
    }
}

impl CreateImageRecipeOutput {
    /// Creates a new builder-style object to manufacture [`CreateImageRecipeOutput`](crate::output::CreateImageRecipeOutput)
    pub fn builder() -> crate::output::create_image_recipe_output::Builder {
        crate::output::create_image_recipe_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct CreateInfrastructureConfigurationOutput {
    #[serde(rename = "requestId")]
    pub request_id: std::option::Option<std::string::String>,
    #[serde(rename = "clientToken")]
    pub client_token: std::option::Option<std::string::String>,
    #[serde(rename = "infrastructureConfigurationArn")]
    pub infrastructure_configuration_arn: std::option::Option<std::string::String>,
}
/// See [`CreateInfrastructureConfigurationOutput`](crate::output::CreateInfrastructureConfigurationOutput)
pub mod create_infrastructure_configuration_output {
    /// A builder for [`CreateInfrastructureConfigurationOutput`](crate::output::CreateInfrastructureConfigurationOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        request_id: std::option::Option<std::string::String>,
        client_token: std::option::Option<std::string::String>,
        infrastructure_configuration_arn: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn request_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.request_id = Some(input.into());
            self
        }
        pub fn set_request_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.request_id = input;
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
        pub fn infrastructure_configuration_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.infrastructure_configuration_arn = Some(input.into());
            self
        }
        pub fn set_infrastructure_configuration_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.infrastructure_configuration_arn = input;
            self
        }
        /// Consumes the builder and constructs a [`CreateInfrastructureConfigurationOutput`](crate::output::CreateInfrastructureConfigurationOutput)
        pub fn build(self) -> crate::output::CreateInfrastructureConfigurationOutput {
            crate::output::CreateInfrastructureConfigurationOutput {
                request_id: self.request_id,
                client_token: self.client_token,
                infrastructure_configuration_arn: self.infrastructure_configuration_arn,
            }
        }
    }
}

impl CreateInfrastructureConfigurationOutput {
    /// Creates a new builder-style object to manufacture [`CreateInfrastructureConfigurationOutput`](crate::output::CreateInfrastructureConfigurationOutput)
    pub fn builder() -> crate::output::create_infrastructure_configuration_output::Builder {
        crate::output::create_infrastructure_configuration_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct DeleteComponentOutput {
    #[serde(rename = "requestId")]
    pub request_id: std::option::Option<std::string::String>,
    #[serde(rename = "componentBuildVersionArn")]
    pub component_build_version_arn: std::option::Option<std::string::String>,
}
/// See [`DeleteComponentOutput`](crate::output::DeleteComponentOutput)
pub mod delete_component_output {
    /// A builder for [`DeleteComponentOutput`](crate::output::DeleteComponentOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        request_id: std::option::Option<std::string::String>,
        component_build_version_arn: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn request_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.request_id = Some(input.into());
            self
        }
        pub fn set_request_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.request_id = input;
            self
        }
        pub fn component_build_version_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.component_build_version_arn = Some(input.into());
            self
        }
        pub fn set_component_build_version_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.component_build_version_arn = input;
            self
        }
        /// Consumes the builder and constructs a [`DeleteComponentOutput`](crate::output::DeleteComponentOutput)
        pub fn build(self) -> crate::output::DeleteComponentOutput {
            crate::output::DeleteComponentOutput {
                request_id: self.request_id,
                component_build_version_arn: self.component_build_version_arn,
            }
        }
    }
}

impl DeleteComponentOutput {
    /// Creates a new builder-style object to manufacture [`DeleteComponentOutput`](crate::output::DeleteComponentOutput)
    pub fn builder() -> crate::output::delete_component_output::Builder {
        crate::output::delete_component_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct DeleteDistributionConfigurationOutput {
    #[serde(rename = "requestId")]
    pub request_id: std::option::Option<std::string::String>,
    #[serde(rename = "distributionConfigurationArn")]
    pub distribution_configuration_arn: std::option::Option<std::string::String>,
}
/// See [`DeleteDistributionConfigurationOutput`](crate::output::DeleteDistributionConfigurationOutput)
pub mod delete_distribution_configuration_output {
    /// A builder for [`DeleteDistributionConfigurationOutput`](crate::output::DeleteDistributionConfigurationOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        request_id: std::option::Option<std::string::String>,
        distribution_configuration_arn: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn request_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.request_id = Some(input.into());
            self
        }
        pub fn set_request_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.request_id = input;
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
        /// Consumes the builder and constructs a [`DeleteDistributionConfigurationOutput`](crate::output::DeleteDistributionConfigurationOutput)
        pub fn build(self) -> crate::output::DeleteDistributionConfigurationOutput {
            crate::output::DeleteDistributionConfigurationOutput {
                request_id: self.request_id,
                distribution_configuration_arn: self.distribution_configuration_arn,
            }
        }
    }
}

impl DeleteDistributionConfigurationOutput {
    /// Creates a new builder-style object to manufacture [`DeleteDistributionConfigurationOutput`](crate::output::DeleteDistributionConfigurationOutput)
    pub fn builder() -> crate::output::delete_distribution_configuration_output::Builder {
        crate::output::delete_distribution_configuration_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct DeleteImageOutput {
    #[serde(rename = "requestId")]
    pub request_id: std::option::Option<std::string::String>,
    #[serde(rename = "imageBuildVersionArn")]
    pub image_build_version_arn: std::option::Option<std::string::String>,
}
/// See [`DeleteImageOutput`](crate::output::DeleteImageOutput)
pub mod delete_image_output {
    /// A builder for [`DeleteImageOutput`](crate::output::DeleteImageOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        request_id: std::option::Option<std::string::String>,
        image_build_version_arn: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn request_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.request_id = Some(input.into());
            self
        }
        pub fn set_request_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.request_id = input;
            self
        }
        pub fn image_build_version_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.image_build_version_arn = Some(input.into());
            self
        }
        pub fn set_image_build_version_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.image_build_version_arn = input;
            self
        }
        /// Consumes the builder and constructs a [`DeleteImageOutput`](crate::output::DeleteImageOutput)
        pub fn build(self) -> crate::output::DeleteImageOutput {
            crate::output::DeleteImageOutput {
                request_id: self.request_id,
                image_build_version_arn: self.image_build_version_arn,
            }
        }
    }
}

impl DeleteImageOutput {
    /// Creates a new builder-style object to manufacture [`DeleteImageOutput`](crate::output::DeleteImageOutput)
    pub fn builder() -> crate::output::delete_image_output::Builder {
        crate::output::delete_image_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct DeleteImagePipelineOutput {
    #[serde(rename = "requestId")]
    pub request_id: std::option::Option<std::string::String>,
    #[serde(rename = "imagePipelineArn")]
    pub image_pipeline_arn: std::option::Option<std::string::String>,
}
/// See [`DeleteImagePipelineOutput`](crate::output::DeleteImagePipelineOutput)
pub mod delete_image_pipeline_output {
    /// A builder for [`DeleteImagePipelineOutput`](crate::output::DeleteImagePipelineOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        request_id: std::option::Option<std::string::String>,
        image_pipeline_arn: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn request_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.request_id = Some(input.into());
            self
        }
        pub fn set_request_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.request_id = input;
            self
        }
        pub fn image_pipeline_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.image_pipeline_arn = Some(input.into());
            self
        }
        pub fn set_image_pipeline_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.image_pipeline_arn = input;
            self
        }
        /// Consumes the builder and constructs a [`DeleteImagePipelineOutput`](crate::output::DeleteImagePipelineOutput)
        pub fn build(self) -> crate::output::DeleteImagePipelineOutput {
            crate::output::DeleteImagePipelineOutput {
                request_id: self.request_id,
                image_pipeline_arn: self.image_pipeline_arn,
            }
        }
    }
}

impl DeleteImagePipelineOutput {
    /// Creates a new builder-style object to manufacture [`DeleteImagePipelineOutput`](crate::output::DeleteImagePipelineOutput)
    pub fn builder() -> crate::output::delete_image_pipeline_output::Builder {
        crate::output::delete_image_pipeline_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct DeleteImageRecipeOutput {
    #[serde(rename = "requestId")]
    pub request_id: std::option::Option<std::string::String>,
    #[serde(rename = "imageRecipeArn")]
    pub image_recipe_arn: std::option::Option<std::string::String>,
}
/// See [`DeleteImageRecipeOutput`](crate::output::DeleteImageRecipeOutput)
pub mod delete_image_recipe_output {
    /// A builder for [`DeleteImageRecipeOutput`](crate::output::DeleteImageRecipeOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        request_id: std::option::Option<std::string::String>,
        image_recipe_arn: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn request_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.request_id = Some(input.into());
            self
        }
        pub fn set_request_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.request_id = input;
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
        /// Consumes the builder and constructs a [`DeleteImageRecipeOutput`](crate::output::DeleteImageRecipeOutput)
        pub fn build(self) -> crate::output::DeleteImageRecipeOutput {
            crate::output::DeleteImageRecipeOutput {
                request_id: self.request_id,
                image_recipe_arn: self.image_recipe_arn,
            }
        }
    }
}

impl DeleteImageRecipeOutput {
    /// Creates a new builder-style object to manufacture [`DeleteImageRecipeOutput`](crate::output::DeleteImageRecipeOutput)
    pub fn builder() -> crate::output::delete_image_recipe_output::Builder {
        crate::output::delete_image_recipe_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct DeleteInfrastructureConfigurationOutput {
    #[serde(rename = "requestId")]
    pub request_id: std::option::Option<std::string::String>,
    #[serde(rename = "infrastructureConfigurationArn")]
    pub infrastructure_configuration_arn: std::option::Option<std::string::String>,
}
/// See [`DeleteInfrastructureConfigurationOutput`](crate::output::DeleteInfrastructureConfigurationOutput)
pub mod delete_infrastructure_configuration_output {
    /// A builder for [`DeleteInfrastructureConfigurationOutput`](crate::output::DeleteInfrastructureConfigurationOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        request_id: std::option::Option<std::string::String>,
        infrastructure_configuration_arn: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn request_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.request_id = Some(input.into());
            self
        }
        pub fn set_request_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.request_id = input;
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
        /// Consumes the builder and constructs a [`DeleteInfrastructureConfigurationOutput`](crate::output::DeleteInfrastructureConfigurationOutput)
        pub fn build(self) -> crate::output::DeleteInfrastructureConfigurationOutput {
            crate::output::DeleteInfrastructureConfigurationOutput {
                request_id: self.request_id,
                infrastructure_configuration_arn: self.infrastructure_configuration_arn,
            }
        }
    }
}

impl DeleteInfrastructureConfigurationOutput {
    /// Creates a new builder-style object to manufacture [`DeleteInfrastructureConfigurationOutput`](crate::output::DeleteInfrastructureConfigurationOutput)
    pub fn builder() -> crate::output::delete_infrastructure_configuration_output::Builder {
        crate::output::delete_infrastructure_configuration_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct GetComponentOutput {
    #[serde(rename = "requestId")]
    pub request_id: std::option::Option<std::string::String>,
    #[serde(rename = "component")]
    pub component: std::option::Option<crate::model::Component>,
}
/// See [`GetComponentOutput`](crate::output::GetComponentOutput)
pub mod get_component_output {
    /// A builder for [`GetComponentOutput`](crate::output::GetComponentOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        request_id: std::option::Option<std::string::String>,
        component: std::option::Option<crate::model::Component>,
    }
    impl Builder {
        pub fn request_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.request_id = Some(input.into());
            self
        }
        pub fn set_request_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.request_id = input;
            self
        }
        pub fn component(mut self, input: impl Into<crate::model::Component>) -> Self {
            self.component = Some(input.into());
            self
        }
        pub fn set_component(mut self, input: std::option::Option<crate::model::Component>) -> Self {
            self.component = input;
            self
        }
        /// Consumes the builder and constructs a [`GetComponentOutput`](crate::output::GetComponentOutput)
        pub fn build(self) -> crate::output::GetComponentOutput {
            crate::output::GetComponentOutput {
                request_id: self.request_id,
                component: self.component,
            }
        }
    }
}

impl GetComponentOutput {
    /// Creates a new builder-style object to manufacture [`GetComponentOutput`](crate::output::GetComponentOutput)
    pub fn builder() -> crate::output::get_component_output::Builder {
        crate::output::get_component_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct GetComponentPolicyOutput {
    #[serde(rename = "requestId")]
    pub request_id: std::option::Option<std::string::String>,
    #[serde(rename = "policy")]
    pub policy: std::option::Option<std::string::String>,
}
/// See [`GetComponentPolicyOutput`](crate::output::GetComponentPolicyOutput)
pub mod get_component_policy_output {
    /// A builder for [`GetComponentPolicyOutput`](crate::output::GetComponentPolicyOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        request_id: std::option::Option<std::string::String>,
        policy: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn request_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.request_id = Some(input.into());
            self
        }
        pub fn set_request_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.request_id = input;
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
        /// Consumes the builder and constructs a [`GetComponentPolicyOutput`](crate::output::GetComponentPolicyOutput)
        pub fn build(self) -> crate::output::GetComponentPolicyOutput {
            crate::output::GetComponentPolicyOutput {
                request_id: self.request_id,
                policy: self.policy,
            }
        }
    }
}

impl GetComponentPolicyOutput {
    /// Creates a new builder-style object to manufacture [`GetComponentPolicyOutput`](crate::output::GetComponentPolicyOutput)
    pub fn builder() -> crate::output::get_component_policy_output::Builder {
        crate::output::get_component_policy_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct GetDistributionConfigurationOutput {
    #[serde(rename = "requestId")]
    pub request_id: std::option::Option<std::string::String>,
    #[serde(rename = "distributionConfiguration")]
    pub distribution_configuration: std::option::Option<crate::model::DistributionConfiguration>,
}
/// See [`GetDistributionConfigurationOutput`](crate::output::GetDistributionConfigurationOutput)
pub mod get_distribution_configuration_output {
    /// A builder for [`GetDistributionConfigurationOutput`](crate::output::GetDistributionConfigurationOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        request_id: std::option::Option<std::string::String>,
        distribution_configuration: std::option::Option<crate::model::DistributionConfiguration>,
    }
    impl Builder {
        pub fn request_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.request_id = Some(input.into());
            self
        }
        pub fn set_request_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.request_id = input;
            self
        }
        pub fn distribution_configuration(mut self, input: impl Into<crate::model::DistributionConfiguration>) -> Self {
            self.distribution_configuration = Some(input.into());
            self
        }
        pub fn set_distribution_configuration(mut self, input: std::option::Option<crate::model::DistributionConfiguration>) -> Self {
            self.distribution_configuration = input;
            self
        }
        /// Consumes the builder and constructs a [`GetDistributionConfigurationOutput`](crate::output::GetDistributionConfigurationOutput)
        pub fn build(self) -> crate::output::GetDistributionConfigurationOutput {
            crate::output::GetDistributionConfigurationOutput {
                request_id: self.request_id,
                distribution_configuration: self.distribution_configuration,
            }
        }
    }
}

impl GetDistributionConfigurationOutput {
    /// Creates a new builder-style object to manufacture [`GetDistributionConfigurationOutput`](crate::output::GetDistributionConfigurationOutput)
    pub fn builder() -> crate::output::get_distribution_configuration_output::Builder {
        crate::output::get_distribution_configuration_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct GetImageOutput {
    #[serde(rename = "requestId")]
    pub request_id: std::option::Option<std::string::String>,
    #[serde(rename = "image")]
    pub image: std::option::Option<crate::model::Image>,
}
/// See [`GetImageOutput`](crate::output::GetImageOutput)
pub mod get_image_output {
    /// A builder for [`GetImageOutput`](crate::output::GetImageOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        request_id: std::option::Option<std::string::String>,
        image: std::option::Option<crate::model::Image>,
    }
    impl Builder {
        pub fn request_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.request_id = Some(input.into());
            self
        }
        pub fn set_request_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.request_id = input;
            self
        }
        pub fn image(mut self, input: impl Into<crate::model::Image>) -> Self {
            self.image = Some(input.into());
            self
        }
        pub fn set_image(mut self, input: std::option::Option<crate::model::Image>) -> Self {
            self.image = input;
            self
        }
        /// Consumes the builder and constructs a [`GetImageOutput`](crate::output::GetImageOutput)
        pub fn build(self) -> crate::output::GetImageOutput {
            crate::output::GetImageOutput {
                request_id: self.request_id,
                image: self.image,
            }
        }
    }
}

impl GetImageOutput {
    /// Creates a new builder-style object to manufacture [`GetImageOutput`](crate::output::GetImageOutput)
    pub fn builder() -> crate::output::get_image_output::Builder {
        crate::output::get_image_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct GetImagePipelineOutput {
    #[serde(rename = "requestId")]
    pub request_id: std::option::Option<std::string::String>,
    #[serde(rename = "imagePipeline")]
    pub image_pipeline: std::option::Option<crate::model::ImagePipeline>,
}
/// See [`GetImagePipelineOutput`](crate::output::GetImagePipelineOutput)
pub mod get_image_pipeline_output {
    /// A builder for [`GetImagePipelineOutput`](crate::output::GetImagePipelineOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        request_id: std::option::Option<std::string::String>,
        image_pipeline: std::option::Option<crate::model::ImagePipeline>,
    }
    impl Builder {
        pub fn request_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.request_id = Some(input.into());
            self
        }
        pub fn set_request_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.request_id = input;
            self
        }
        pub fn image_pipeline(mut self, input: impl Into<crate::model::ImagePipeline>) -> Self {
            self.image_pipeline = Some(input.into());
            self
        }
        pub fn set_image_pipeline(mut self, input: std::option::Option<crate::model::ImagePipeline>) -> Self {
            self.image_pipeline = input;
            self
        }
        /// Consumes the builder and constructs a [`GetImagePipelineOutput`](crate::output::GetImagePipelineOutput)
        pub fn build(self) -> crate::output::GetImagePipelineOutput {
            crate::output::GetImagePipelineOutput {
                request_id: self.request_id,
                image_pipeline: self.image_pipeline,
            }
        }
    }
}

impl GetImagePipelineOutput {
    /// Creates a new builder-style object to manufacture [`GetImagePipelineOutput`](crate::output::GetImagePipelineOutput)
    pub fn builder() -> crate::output::get_image_pipeline_output::Builder {
        crate::output::get_image_pipeline_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct GetImagePolicyOutput {
    #[serde(rename = "requestId")]
    pub request_id: std::option::Option<std::string::String>,
    #[serde(rename = "policy")]
    pub policy: std::option::Option<std::string::String>,
}
/// See [`GetImagePolicyOutput`](crate::output::GetImagePolicyOutput)
pub mod get_image_policy_output {
    /// A builder for [`GetImagePolicyOutput`](crate::output::GetImagePolicyOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        request_id: std::option::Option<std::string::String>,
        policy: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn request_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.request_id = Some(input.into());
            self
        }
        pub fn set_request_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.request_id = input;
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
        /// Consumes the builder and constructs a [`GetImagePolicyOutput`](crate::output::GetImagePolicyOutput)
        pub fn build(self) -> crate::output::GetImagePolicyOutput {
            crate::output::GetImagePolicyOutput {
                request_id: self.request_id,
                policy: self.policy,
            }
        }
    }
}

impl GetImagePolicyOutput {
    /// Creates a new builder-style object to manufacture [`GetImagePolicyOutput`](crate::output::GetImagePolicyOutput)
    pub fn builder() -> crate::output::get_image_policy_output::Builder {
        crate::output::get_image_policy_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct GetImageRecipeOutput {
    #[serde(rename = "requestId")]
    pub request_id: std::option::Option<std::string::String>,
    #[serde(rename = "imageRecipe")]
    pub image_recipe: std::option::Option<crate::model::ImageRecipe>,
}
/// See [`GetImageRecipeOutput`](crate::output::GetImageRecipeOutput)
pub mod get_image_recipe_output {
    /// A builder for [`GetImageRecipeOutput`](crate::output::GetImageRecipeOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        request_id: std::option::Option<std::string::String>,
        image_recipe: std::option::Option<crate::model::ImageRecipe>,
    }
    impl Builder {
        pub fn request_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.request_id = Some(input.into());
            self
        }
        pub fn set_request_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.request_id = input;
            self
        }
        pub fn image_recipe(mut self, input: impl Into<crate::model::ImageRecipe>) -> Self {
            self.image_recipe = Some(input.into());
            self
        }
        pub fn set_image_recipe(mut self, input: std::option::Option<crate::model::ImageRecipe>) -> Self {
            self.image_recipe = input;
            self
        }
        /// Consumes the builder and constructs a [`GetImageRecipeOutput`](crate::output::GetImageRecipeOutput)
        pub fn build(self) -> crate::output::GetImageRecipeOutput {
            crate::output::GetImageRecipeOutput {
                request_id: self.request_id,
                image_recipe: self.image_recipe,
            }
        }
    }
}

impl GetImageRecipeOutput {
    /// Creates a new builder-style object to manufacture [`GetImageRecipeOutput`](crate::output::GetImageRecipeOutput)
    pub fn builder() -> crate::output::get_image_recipe_output::Builder {
        crate::output::get_image_recipe_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct GetImageRecipePolicyOutput {
    #[serde(rename = "requestId")]
    pub request_id: std::option::Option<std::string::String>,
    #[serde(rename = "policy")]
    pub policy: std::option::Option<std::string::String>,
}
/// See [`GetImageRecipePolicyOutput`](crate::output::GetImageRecipePolicyOutput)
pub mod get_image_recipe_policy_output {
    /// A builder for [`GetImageRecipePolicyOutput`](crate::output::GetImageRecipePolicyOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        request_id: std::option::Option<std::string::String>,
        policy: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn request_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.request_id = Some(input.into());
            self
        }
        pub fn set_request_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.request_id = input;
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
        /// Consumes the builder and constructs a [`GetImageRecipePolicyOutput`](crate::output::GetImageRecipePolicyOutput)
        pub fn build(self) -> crate::output::GetImageRecipePolicyOutput {
            crate::output::GetImageRecipePolicyOutput {
                request_id: self.request_id,
                policy: self.policy,
            }
        }
    }
}

impl GetImageRecipePolicyOutput {
    /// Creates a new builder-style object to manufacture [`GetImageRecipePolicyOutput`](crate::output::GetImageRecipePolicyOutput)
    pub fn builder() -> crate::output::get_image_recipe_policy_output::Builder {
        crate::output::get_image_recipe_policy_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct GetInfrastructureConfigurationOutput {
    #[serde(rename = "requestId")]
    pub request_id: std::option::Option<std::string::String>,
    #[serde(rename = "infrastructureConfiguration")]
    pub infrastructure_configuration: std::option::Option<crate::model::InfrastructureConfiguration>,
}
/// See [`GetInfrastructureConfigurationOutput`](crate::output::GetInfrastructureConfigurationOutput)
pub mod get_infrastructure_configuration_output {
    /// A builder for [`GetInfrastructureConfigurationOutput`](crate::output::GetInfrastructureConfigurationOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        request_id: std::option::Option<std::string::String>,
        infrastructure_configuration: std::option::Option<crate::model::InfrastructureConfiguration>,
    }
    impl Builder {
        pub fn request_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.request_id = Some(input.into());
            self
        }
        pub fn set_request_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.request_id = input;
            self
        }
        pub fn infrastructure_configuration(mut self, input: impl Into<crate::model::InfrastructureConfiguration>) -> Self {
            self.infrastructure_configuration = Some(input.into());
            self
        }
        pub fn set_infrastructure_configuration(mut self, input: std::option::Option<crate::model::InfrastructureConfiguration>) -> Self {
            self.infrastructure_configuration = input;
            self
        }
        /// Consumes the builder and constructs a [`GetInfrastructureConfigurationOutput`](crate::output::GetInfrastructureConfigurationOutput)
        pub fn build(self) -> crate::output::GetInfrastructureConfigurationOutput {
            crate::output::GetInfrastructureConfigurationOutput {
                request_id: self.request_id,
                infrastructure_configuration: self.infrastructure_configuration,
            }
        }
    }
}

impl GetInfrastructureConfigurationOutput {
    /// Creates a new builder-style object to manufacture [`GetInfrastructureConfigurationOutput`](crate::output::GetInfrastructureConfigurationOutput)
    pub fn builder() -> crate::output::get_infrastructure_configuration_output::Builder {
        crate::output::get_infrastructure_configuration_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct ImportComponentOutput {
    #[serde(rename = "requestId")]
    pub request_id: std::option::Option<std::string::String>,
    #[serde(rename = "clientToken")]
    pub client_token: std::option::Option<std::string::String>,
    #[serde(rename = "componentBuildVersionArn")]
    pub component_build_version_arn: std::option::Option<std::string::String>,
}
/// See [`ImportComponentOutput`](crate::output::ImportComponentOutput)
pub mod import_component_output {
    /// A builder for [`ImportComponentOutput`](crate::output::ImportComponentOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        request_id: std::option::Option<std::string::String>,
        client_token: std::option::Option<std::string::String>,
        component_build_version_arn: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn request_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.request_id = Some(input.into());
            self
        }
        pub fn set_request_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.request_id = input;
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
        pub fn component_build_version_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.component_build_version_arn = Some(input.into());
            self
        }
        pub fn set_component_build_version_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.component_build_version_arn = input;
            self
        }
        /// Consumes the builder and constructs a [`ImportComponentOutput`](crate::output::ImportComponentOutput)
        pub fn build(self) -> crate::output::ImportComponentOutput {
            crate::output::ImportComponentOutput {
                request_id: self.request_id,
                client_token: self.client_token,
                component_build_version_arn: self.component_build_version_arn,
            }
        }
    }
}

impl ImportComponentOutput {
    /// Creates a new builder-style object to manufacture [`ImportComponentOutput`](crate::output::ImportComponentOutput)
    pub fn builder() -> crate::output::import_component_output::Builder {
        crate::output::import_component_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct ListComponentBuildVersionsOutput {
    #[serde(rename = "requestId")]
    pub request_id: std::option::Option<std::string::String>,
    #[serde(rename = "componentSummaryList")]
    pub component_summary_list: std::option::Option<std::vec::Vec<crate::model::ComponentSummary>>,
    #[serde(rename = "nextToken")]
    pub next_token: std::option::Option<std::string::String>,
}
/// See [`ListComponentBuildVersionsOutput`](crate::output::ListComponentBuildVersionsOutput)
pub mod list_component_build_versions_output {
    /// A builder for [`ListComponentBuildVersionsOutput`](crate::output::ListComponentBuildVersionsOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        request_id: std::option::Option<std::string::String>,
        component_summary_list: std::option::Option<std::vec::Vec<crate::model::ComponentSummary>>,
        next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn request_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.request_id = Some(input.into());
            self
        }
        pub fn set_request_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.request_id = input;
            self
        }
        pub fn component_summary_list(mut self, input: impl Into<crate::model::ComponentSummary>) -> Self {
            let mut v = self.component_summary_list.unwrap_or_default();
            v.push(input.into());
            self.component_summary_list = Some(v);
            self
        }
        pub fn set_component_summary_list(mut self, input: std::option::Option<std::vec::Vec<crate::model::ComponentSummary>>) -> Self {
            self.component_summary_list = input;
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
        /// Consumes the builder and constructs a [`ListComponentBuildVersionsOutput`](crate::output::ListComponentBuildVersionsOutput)
        pub fn build(self) -> crate::output::ListComponentBuildVersionsOutput {
            crate::output::ListComponentBuildVersionsOutput {
                request_id: self.request_id,
                component_summary_list: self.component_summary_list,
                next_token: self.next_token,
            }
        }
    }
}

impl ListComponentBuildVersionsOutput {
    /// Creates a new builder-style object to manufacture [`ListComponentBuildVersionsOutput`](crate::output::ListComponentBuildVersionsOutput)
    pub fn builder() -> crate::output::list_component_build_versions_output::Builder {
        crate::output::list_component_build_versions_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct ListComponentsOutput {
    #[serde(rename = "requestId")]
    pub request_id: std::option::Option<std::string::String>,
    #[serde(rename = "componentVersionList")]
    pub component_version_list: std::option::Option<std::vec::Vec<crate::model::ComponentVersion>>,
    #[serde(rename = "nextToken")]
    pub next_token: std::option::Option<std::string::String>,
}
/// See [`ListComponentsOutput`](crate::output::ListComponentsOutput)
pub mod list_components_output {
    /// A builder for [`ListComponentsOutput`](crate::output::ListComponentsOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        request_id: std::option::Option<std::string::String>,
        component_version_list: std::option::Option<std::vec::Vec<crate::model::ComponentVersion>>,
        next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn request_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.request_id = Some(input.into());
            self
        }
        pub fn set_request_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.request_id = input;
            self
        }
        pub fn component_version_list(mut self, input: impl Into<crate::model::ComponentVersion>) -> Self {
            let mut v = self.component_version_list.unwrap_or_default();
            v.push(input.into());
            self.component_version_list = Some(v);
            self
        }
        pub fn set_component_version_list(mut self, input: std::option::Option<std::vec::Vec<crate::model::ComponentVersion>>) -> Self {
            self.component_version_list = input;
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
        /// Consumes the builder and constructs a [`ListComponentsOutput`](crate::output::ListComponentsOutput)
        pub fn build(self) -> crate::output::ListComponentsOutput {
            crate::output::ListComponentsOutput {
                request_id: self.request_id,
                component_version_list: self.component_version_list,
                next_token: self.next_token,
            }
        }
    }
}

impl ListComponentsOutput {
    /// Creates a new builder-style object to manufacture [`ListComponentsOutput`](crate::output::ListComponentsOutput)
    pub fn builder() -> crate::output::list_components_output::Builder {
        crate::output::list_components_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct ListDistributionConfigurationsOutput {
    #[serde(rename = "requestId")]
    pub request_id: std::option::Option<std::string::String>,
    #[serde(rename = "distributionConfigurationSummaryList")]
    pub distribution_configuration_summary_list: std::option::Option<std::vec::Vec<crate::model::DistributionConfigurationSummary>>,
    #[serde(rename = "nextToken")]
    pub next_token: std::option::Option<std::string::String>,
}
/// See [`ListDistributionConfigurationsOutput`](crate::output::ListDistributionConfigurationsOutput)
pub mod list_distribution_configurations_output {
    /// A builder for [`ListDistributionConfigurationsOutput`](crate::output::ListDistributionConfigurationsOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        request_id: std::option::Option<std::string::String>,
        distribution_configuration_summary_list: std::option::Option<std::vec::Vec<crate::model::DistributionConfigurationSummary>>,
        next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn request_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.request_id = Some(input.into());
            self
        }
        pub fn set_request_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.request_id = input;
            self
        }
        pub fn distribution_configuration_summary_list(mut self, input: impl Into<crate::model::DistributionConfigurationSummary>) -> Self {
            let mut v = self.distribution_configuration_summary_list.unwrap_or_default();
            v.push(input.into());
            self.distribution_configuration_summary_list = Some(v);
            self
        }
        pub fn set_distribution_configuration_summary_list(mut self, input: std::option::Option<std::vec::Vec<crate::model::DistributionConfigurationSummary>>) -> Self {
            self.distribution_configuration_summary_list = input;
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
        /// Consumes the builder and constructs a [`ListDistributionConfigurationsOutput`](crate::output::ListDistributionConfigurationsOutput)
        pub fn build(self) -> crate::output::ListDistributionConfigurationsOutput {
            crate::output::ListDistributionConfigurationsOutput {
                request_id: self.request_id,
                distribution_configuration_summary_list: self.distribution_configuration_summary_list,
                next_token: self.next_token,
            }
        }
    }
}

impl ListDistributionConfigurationsOutput {
    /// Creates a new builder-style object to manufacture [`ListDistributionConfigurationsOutput`](crate::output::ListDistributionConfigurationsOutput)
    pub fn builder() -> crate::output::list_distribution_configurations_output::Builder {
        crate::output::list_distribution_configurations_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct ListImageBuildVersionsOutput {
    #[serde(rename = "requestId")]
    pub request_id: std::option::Option<std::string::String>,
    #[serde(rename = "imageSummaryList")]
    pub image_summary_list: std::option::Option<std::vec::Vec<crate::model::ImageSummary>>,
    #[serde(rename = "nextToken")]
    pub next_token: std::option::Option<std::string::String>,
}
/// See [`ListImageBuildVersionsOutput`](crate::output::ListImageBuildVersionsOutput)
pub mod list_image_build_versions_output {
    /// A builder for [`ListImageBuildVersionsOutput`](crate::output::ListImageBuildVersionsOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        request_id: std::option::Option<std::string::String>,
        image_summary_list: std::option::Option<std::vec::Vec<crate::model::ImageSummary>>,
        next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn request_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.request_id = Some(input.into());
            self
        }
        pub fn set_request_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.request_id = input;
            self
        }
        pub fn image_summary_list(mut self, input: impl Into<crate::model::ImageSummary>) -> Self {
            let mut v = self.image_summary_list.unwrap_or_default();
            v.push(input.into());
            self.image_summary_list = Some(v);
            self
        }
        pub fn set_image_summary_list(mut self, input: std::option::Option<std::vec::Vec<crate::model::ImageSummary>>) -> Self {
            self.image_summary_list = input;
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
        /// Consumes the builder and constructs a [`ListImageBuildVersionsOutput`](crate::output::ListImageBuildVersionsOutput)
        pub fn build(self) -> crate::output::ListImageBuildVersionsOutput {
            crate::output::ListImageBuildVersionsOutput {
                request_id: self.request_id,
                image_summary_list: self.image_summary_list,
                next_token: self.next_token,
            }
        }
    }
}

impl ListImageBuildVersionsOutput {
    /// Creates a new builder-style object to manufacture [`ListImageBuildVersionsOutput`](crate::output::ListImageBuildVersionsOutput)
    pub fn builder() -> crate::output::list_image_build_versions_output::Builder {
        crate::output::list_image_build_versions_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct ListImagePipelineImagesOutput {
    #[serde(rename = "requestId")]
    pub request_id: std::option::Option<std::string::String>,
    #[serde(rename = "imageSummaryList")]
    pub image_summary_list: std::option::Option<std::vec::Vec<crate::model::ImageSummary>>,
    #[serde(rename = "nextToken")]
    pub next_token: std::option::Option<std::string::String>,
}
/// See [`ListImagePipelineImagesOutput`](crate::output::ListImagePipelineImagesOutput)
pub mod list_image_pipeline_images_output {
    /// A builder for [`ListImagePipelineImagesOutput`](crate::output::ListImagePipelineImagesOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        request_id: std::option::Option<std::string::String>,
        image_summary_list: std::option::Option<std::vec::Vec<crate::model::ImageSummary>>,
        next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn request_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.request_id = Some(input.into());
            self
        }
        pub fn set_request_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.request_id = input;
            self
        }
        pub fn image_summary_list(mut self, input: impl Into<crate::model::ImageSummary>) -> Self {
            let mut v = self.image_summary_list.unwrap_or_default();
            v.push(input.into());
            self.image_summary_list = Some(v);
            self
        }
        pub fn set_image_summary_list(mut self, input: std::option::Option<std::vec::Vec<crate::model::ImageSummary>>) -> Self {
            self.image_summary_list = input;
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
        /// Consumes the builder and constructs a [`ListImagePipelineImagesOutput`](crate::output::ListImagePipelineImagesOutput)
        pub fn build(self) -> crate::output::ListImagePipelineImagesOutput {
            crate::output::ListImagePipelineImagesOutput {
                request_id: self.request_id,
                image_summary_list: self.image_summary_list,
                next_token: self.next_token,
            }
        }
    }
}

impl ListImagePipelineImagesOutput {
    /// Creates a new builder-style object to manufacture [`ListImagePipelineImagesOutput`](crate::output::ListImagePipelineImagesOutput)
    pub fn builder() -> crate::output::list_image_pipeline_images_output::Builder {
        crate::output::list_image_pipeline_images_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct ListImagePipelinesOutput {
    #[serde(rename = "requestId")]
    pub request_id: std::option::Option<std::string::String>,
    #[serde(rename = "imagePipelineList")]
    pub image_pipeline_list: std::option::Option<std::vec::Vec<crate::model::ImagePipeline>>,
    #[serde(rename = "nextToken")]
    pub next_token: std::option::Option<std::string::String>,
}
/// See [`ListImagePipelinesOutput`](crate::output::ListImagePipelinesOutput)
pub mod list_image_pipelines_output {
    /// A builder for [`ListImagePipelinesOutput`](crate::output::ListImagePipelinesOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        request_id: std::option::Option<std::string::String>,
        image_pipeline_list: std::option::Option<std::vec::Vec<crate::model::ImagePipeline>>,
        next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn request_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.request_id = Some(input.into());
            self
        }
        pub fn set_request_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.request_id = input;
            self
        }
        pub fn image_pipeline_list(mut self, input: impl Into<crate::model::ImagePipeline>) -> Self {
            let mut v = self.image_pipeline_list.unwrap_or_default();
            v.push(input.into());
            self.image_pipeline_list = Some(v);
            self
        }
        pub fn set_image_pipeline_list(mut self, input: std::option::Option<std::vec::Vec<crate::model::ImagePipeline>>) -> Self {
            self.image_pipeline_list = input;
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
        /// Consumes the builder and constructs a [`ListImagePipelinesOutput`](crate::output::ListImagePipelinesOutput)
        pub fn build(self) -> crate::output::ListImagePipelinesOutput {
            crate::output::ListImagePipelinesOutput {
                request_id: self.request_id,
                image_pipeline_list: self.image_pipeline_list,
                next_token: self.next_token,
            }
        }
    }
}

impl ListImagePipelinesOutput {
    /// Creates a new builder-style object to manufacture [`ListImagePipelinesOutput`](crate::output::ListImagePipelinesOutput)
    pub fn builder() -> crate::output::list_image_pipelines_output::Builder {
        crate::output::list_image_pipelines_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct ListImageRecipesOutput {
    #[serde(rename = "requestId")]
    pub request_id: std::option::Option<std::string::String>,
    #[serde(rename = "imageRecipeSummaryList")]
    pub image_recipe_summary_list: std::option::Option<std::vec::Vec<crate::model::ImageRecipeSummary>>,
    #[serde(rename = "nextToken")]
    pub next_token: std::option::Option<std::string::String>,
}
/// See [`ListImageRecipesOutput`](crate::output::ListImageRecipesOutput)
pub mod list_image_recipes_output {
    /// A builder for [`ListImageRecipesOutput`](crate::output::ListImageRecipesOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        request_id: std::option::Option<std::string::String>,
        image_recipe_summary_list: std::option::Option<std::vec::Vec<crate::model::ImageRecipeSummary>>,
        next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn request_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.request_id = Some(input.into());
            self
        }
        pub fn set_request_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.request_id = input;
            self
        }
        pub fn image_recipe_summary_list(mut self, input: impl Into<crate::model::ImageRecipeSummary>) -> Self {
            let mut v = self.image_recipe_summary_list.unwrap_or_default();
            v.push(input.into());
            self.image_recipe_summary_list = Some(v);
            self
        }
        pub fn set_image_recipe_summary_list(mut self, input: std::option::Option<std::vec::Vec<crate::model::ImageRecipeSummary>>) -> Self {
            self.image_recipe_summary_list = input;
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
        /// Consumes the builder and constructs a [`ListImageRecipesOutput`](crate::output::ListImageRecipesOutput)
        pub fn build(self) -> crate::output::ListImageRecipesOutput {
            crate::output::ListImageRecipesOutput {
                request_id: self.request_id,
                image_recipe_summary_list: self.image_recipe_summary_list,
                next_token: self.next_token,
            }
        }
    }
}

impl ListImageRecipesOutput {
    /// Creates a new builder-style object to manufacture [`ListImageRecipesOutput`](crate::output::ListImageRecipesOutput)
    pub fn builder() -> crate::output::list_image_recipes_output::Builder {
        crate::output::list_image_recipes_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct ListImagesOutput {
    #[serde(rename = "requestId")]
    pub request_id: std::option::Option<std::string::String>,
    #[serde(rename = "imageVersionList")]
    pub image_version_list: std::option::Option<std::vec::Vec<crate::model::ImageVersion>>,
    #[serde(rename = "nextToken")]
    pub next_token: std::option::Option<std::string::String>,
}
/// See [`ListImagesOutput`](crate::output::ListImagesOutput)
pub mod list_images_output {
    /// A builder for [`ListImagesOutput`](crate::output::ListImagesOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        request_id: std::option::Option<std::string::String>,
        image_version_list: std::option::Option<std::vec::Vec<crate::model::ImageVersion>>,
        next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn request_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.request_id = Some(input.into());
            self
        }
        pub fn set_request_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.request_id = input;
            self
        }
        pub fn image_version_list(mut self, input: impl Into<crate::model::ImageVersion>) -> Self {
            let mut v = self.image_version_list.unwrap_or_default();
            v.push(input.into());
            self.image_version_list = Some(v);
            self
        }
        pub fn set_image_version_list(mut self, input: std::option::Option<std::vec::Vec<crate::model::ImageVersion>>) -> Self {
            self.image_version_list = input;
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
        /// Consumes the builder and constructs a [`ListImagesOutput`](crate::output::ListImagesOutput)
        pub fn build(self) -> crate::output::ListImagesOutput {
            crate::output::ListImagesOutput {
                request_id: self.request_id,
                image_version_list: self.image_version_list,
                next_token: self.next_token,
            }
        }
    }
}

impl ListImagesOutput {
    /// Creates a new builder-style object to manufacture [`ListImagesOutput`](crate::output::ListImagesOutput)
    pub fn builder() -> crate::output::list_images_output::Builder {
        crate::output::list_images_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct ListInfrastructureConfigurationsOutput {
    #[serde(rename = "requestId")]
    pub request_id: std::option::Option<std::string::String>,
    #[serde(rename = "infrastructureConfigurationSummaryList")]
    pub infrastructure_configuration_summary_list: std::option::Option<std::vec::Vec<crate::model::InfrastructureConfigurationSummary>>,
    #[serde(rename = "nextToken")]
    pub next_token: std::option::Option<std::string::String>,
}
/// See [`ListInfrastructureConfigurationsOutput`](crate::output::ListInfrastructureConfigurationsOutput)
pub mod list_infrastructure_configurations_output {
    /// A builder for [`ListInfrastructureConfigurationsOutput`](crate::output::ListInfrastructureConfigurationsOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        request_id: std::option::Option<std::string::String>,
        infrastructure_configuration_summary_list: std::option::Option<std::vec::Vec<crate::model::InfrastructureConfigurationSummary>>,
        next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn request_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.request_id = Some(input.into());
            self
        }
        pub fn set_request_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.request_id = input;
            self
        }
        pub fn infrastructure_configuration_summary_list(mut self, input: impl Into<crate::model::InfrastructureConfigurationSummary>) -> Self {
            let mut v = self.infrastructure_configuration_summary_list.unwrap_or_default();
            v.push(input.into());
            self.infrastructure_configuration_summary_list = Some(v);
            self
        }
        pub fn set_infrastructure_configuration_summary_list(mut self, input: std::option::Option<std::vec::Vec<crate::model::InfrastructureConfigurationSummary>>) -> Self {
            self.infrastructure_configuration_summary_list = input;
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
        /// Consumes the builder and constructs a [`ListInfrastructureConfigurationsOutput`](crate::output::ListInfrastructureConfigurationsOutput)
        pub fn build(self) -> crate::output::ListInfrastructureConfigurationsOutput {
            crate::output::ListInfrastructureConfigurationsOutput {
                request_id: self.request_id,
                infrastructure_configuration_summary_list: self.infrastructure_configuration_summary_list,
                next_token: self.next_token,
            }
        }
    }
}

impl ListInfrastructureConfigurationsOutput {
    /// Creates a new builder-style object to manufacture [`ListInfrastructureConfigurationsOutput`](crate::output::ListInfrastructureConfigurationsOutput)
    pub fn builder() -> crate::output::list_infrastructure_configurations_output::Builder {
        crate::output::list_infrastructure_configurations_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct ListTagsForResourceOutput {
    #[serde(rename = "tags")]
    pub tags: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
}
/// See [`ListTagsForResourceOutput`](crate::output::ListTagsForResourceOutput)
pub mod list_tags_for_resource_output {
    /// A builder for [`ListTagsForResourceOutput`](crate::output::ListTagsForResourceOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        tags: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
    }
    impl Builder {
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
        /// Consumes the builder and constructs a [`ListTagsForResourceOutput`](crate::output::ListTagsForResourceOutput)
        pub fn build(self) -> crate::output::ListTagsForResourceOutput {
            crate::output::ListTagsForResourceOutput {
                tags: self.tags,
            }
        }
    }
}

impl ListTagsForResourceOutput {
    /// Creates a new builder-style object to manufacture [`ListTagsForResourceOutput`](crate::output::ListTagsForResourceOutput)
    pub fn builder() -> crate::output::list_tags_for_resource_output::Builder {
        crate::output::list_tags_for_resource_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct PutComponentPolicyOutput {
    #[serde(rename = "requestId")]
    pub request_id: std::option::Option<std::string::String>,
    #[serde(rename = "componentArn")]
    pub component_arn: std::option::Option<std::string::String>,
}
/// See [`PutComponentPolicyOutput`](crate::output::PutComponentPolicyOutput)
pub mod put_component_policy_output {
    /// A builder for [`PutComponentPolicyOutput`](crate::output::PutComponentPolicyOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        request_id: std::option::Option<std::string::String>,
        component_arn: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn request_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.request_id = Some(input.into());
            self
        }
        pub fn set_request_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.request_id = input;
            self
        }
        pub fn component_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.component_arn = Some(input.into());
            self
        }
        pub fn set_component_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.component_arn = input;
            self
        }
        /// Consumes the builder and constructs a [`PutComponentPolicyOutput`](crate::output::PutComponentPolicyOutput)
        pub fn build(self) -> crate::output::PutComponentPolicyOutput {
            crate::output::PutComponentPolicyOutput {
                request_id: self.request_id,
                component_arn: self.component_arn,
            }
        }
    }
}

impl PutComponentPolicyOutput {
    /// Creates a new builder-style object to manufacture [`PutComponentPolicyOutput`](crate::output::PutComponentPolicyOutput)
    pub fn builder() -> crate::output::put_component_policy_output::Builder {
        crate::output::put_component_policy_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct PutImagePolicyOutput {
    #[serde(rename = "requestId")]
    pub request_id: std::option::Option<std::string::String>,
    #[serde(rename = "imageArn")]
    pub image_arn: std::option::Option<std::string::String>,
}
/// See [`PutImagePolicyOutput`](crate::output::PutImagePolicyOutput)
pub mod put_image_policy_output {
    /// A builder for [`PutImagePolicyOutput`](crate::output::PutImagePolicyOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        request_id: std::option::Option<std::string::String>,
        image_arn: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn request_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.request_id = Some(input.into());
            self
        }
        pub fn set_request_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.request_id = input;
            self
        }
        pub fn image_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.image_arn = Some(input.into());
            self
        }
        pub fn set_image_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.image_arn = input;
            self
        }
        /// Consumes the builder and constructs a [`PutImagePolicyOutput`](crate::output::PutImagePolicyOutput)
        pub fn build(self) -> crate::output::PutImagePolicyOutput {
            crate::output::PutImagePolicyOutput {
                request_id: self.request_id,
                image_arn: self.image_arn,
            }
        }
    }
}

impl PutImagePolicyOutput {
    /// Creates a new builder-style object to manufacture [`PutImagePolicyOutput`](crate::output::PutImagePolicyOutput)
    pub fn builder() -> crate::output::put_image_policy_output::Builder {
        crate::output::put_image_policy_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct PutImageRecipePolicyOutput {
    #[serde(rename = "requestId")]
    pub request_id: std::option::Option<std::string::String>,
    #[serde(rename = "imageRecipeArn")]
    pub image_recipe_arn: std::option::Option<std::string::String>,
}
/// See [`PutImageRecipePolicyOutput`](crate::output::PutImageRecipePolicyOutput)
pub mod put_image_recipe_policy_output {
    /// A builder for [`PutImageRecipePolicyOutput`](crate::output::PutImageRecipePolicyOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        request_id: std::option::Option<std::string::String>,
        image_recipe_arn: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn request_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.request_id = Some(input.into());
            self
        }
        pub fn set_request_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.request_id = input;
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
        /// Consumes the builder and constructs a [`PutImageRecipePolicyOutput`](crate::output::PutImageRecipePolicyOutput)
        pub fn build(self) -> crate::output::PutImageRecipePolicyOutput {
            crate::output::PutImageRecipePolicyOutput {
                request_id: self.request_id,
                image_recipe_arn: self.image_recipe_arn,
            }
        }
    }
}

impl PutImageRecipePolicyOutput {
    /// Creates a new builder-style object to manufacture [`PutImageRecipePolicyOutput`](crate::output::PutImageRecipePolicyOutput)
    pub fn builder() -> crate::output::put_image_recipe_policy_output::Builder {
        crate::output::put_image_recipe_policy_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct StartImagePipelineExecutionOutput {
    #[serde(rename = "requestId")]
    pub request_id: std::option::Option<std::string::String>,
    #[serde(rename = "clientToken")]
    pub client_token: std::option::Option<std::string::String>,
    #[serde(rename = "imageBuildVersionArn")]
    pub image_build_version_arn: std::option::Option<std::string::String>,
}
/// See [`StartImagePipelineExecutionOutput`](crate::output::StartImagePipelineExecutionOutput)
pub mod start_image_pipeline_execution_output {
    /// A builder for [`StartImagePipelineExecutionOutput`](crate::output::StartImagePipelineExecutionOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        request_id: std::option::Option<std::string::String>,
        client_token: std::option::Option<std::string::String>,
        image_build_version_arn: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn request_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.request_id = Some(input.into());
            self
        }
        pub fn set_request_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.request_id = input;
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
        pub fn image_build_version_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.image_build_version_arn = Some(input.into());
            self
        }
        pub fn set_image_build_version_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.image_build_version_arn = input;
            self
        }
        /// Consumes the builder and constructs a [`StartImagePipelineExecutionOutput`](crate::output::StartImagePipelineExecutionOutput)
        pub fn build(self) -> crate::output::StartImagePipelineExecutionOutput {
            crate::output::StartImagePipelineExecutionOutput {
                request_id: self.request_id,
                client_token: self.client_token,
                image_build_version_arn: self.image_build_version_arn,
            }
        }
    }
}

impl StartImagePipelineExecutionOutput {
    /// Creates a new builder-style object to manufacture [`StartImagePipelineExecutionOutput`](crate::output::StartImagePipelineExecutionOutput)
    pub fn builder() -> crate::output::start_image_pipeline_execution_output::Builder {
        crate::output::start_image_pipeline_execution_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct TagResourceOutput {
}
/// See [`TagResourceOutput`](crate::output::TagResourceOutput)
pub mod tag_resource_output {
    /// A builder for [`TagResourceOutput`](crate::output::TagResourceOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
    }
    impl Builder {
        /// Consumes the builder and constructs a [`TagResourceOutput`](crate::output::TagResourceOutput)
        pub fn build(self) -> crate::output::TagResourceOutput {
            crate::output::TagResourceOutput {}
        }
    }
}

impl TagResourceOutput {
    /// Creates a new builder-style object to manufacture [`TagResourceOutput`](crate::output::TagResourceOutput)
    pub fn builder() -> crate::output::tag_resource_output::Builder {
        crate::output::tag_resource_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct UntagResourceOutput {
}
/// See [`UntagResourceOutput`](crate::output::UntagResourceOutput)
pub mod untag_resource_output {
    /// A builder for [`UntagResourceOutput`](crate::output::UntagResourceOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
    }
    impl Builder {
        /// Consumes the builder and constructs a [`UntagResourceOutput`](crate::output::UntagResourceOutput)
        pub fn build(self) -> crate::output::UntagResourceOutput {
            crate::output::UntagResourceOutput {}
        }
    }
}

impl UntagResourceOutput {
    /// Creates a new builder-style object to manufacture [`UntagResourceOutput`](crate::output::UntagResourceOutput)
    pub fn builder() -> crate::output::untag_resource_output::Builder {
        crate::output::untag_resource_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct UpdateDistributionConfigurationOutput {
    #[serde(rename = "requestId")]
    pub request_id: std::option::Option<std::string::String>,
    #[serde(rename = "clientToken")]
    pub client_token: std::option::Option<std::string::String>,
    #[serde(rename = "distributionConfigurationArn")]
    pub distribution_configuration_arn: std::option::Option<std::string::String>,
}
/// See [`UpdateDistributionConfigurationOutput`](crate::output::UpdateDistributionConfigurationOutput)
pub mod update_distribution_configuration_output {
    /// A builder for [`UpdateDistributionConfigurationOutput`](crate::output::UpdateDistributionConfigurationOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        request_id: std::option::Option<std::string::String>,
        client_token: std::option::Option<std::string::String>,
        distribution_configuration_arn: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn request_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.request_id = Some(input.into());
            self
        }
        pub fn set_request_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.request_id = input;
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
        pub fn distribution_configuration_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.distribution_configuration_arn = Some(input.into());
            self
        }
        pub fn set_distribution_configuration_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.distribution_configuration_arn = input;
            self
        }
        /// Consumes the builder and constructs a [`UpdateDistributionConfigurationOutput`](crate::output::UpdateDistributionConfigurationOutput)
        pub fn build(self) -> crate::output::UpdateDistributionConfigurationOutput {
            crate::output::UpdateDistributionConfigurationOutput {
                request_id: self.request_id,
                client_token: self.client_token,
                distribution_configuration_arn: self.distribution_configuration_arn,
            }
        }
    }
}

impl UpdateDistributionConfigurationOutput {
    /// Creates a new builder-style object to manufacture [`UpdateDistributionConfigurationOutput`](crate::output::UpdateDistributionConfigurationOutput)
    pub fn builder() -> crate::output::update_distribution_configuration_output::Builder {
        crate::output::update_distribution_configuration_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct UpdateImagePipelineOutput {
    #[serde(rename = "requestId")]
    pub request_id: std::option::Option<std::string::String>,
    #[serde(rename = "clientToken")]
    pub client_token: std::option::Option<std::string::String>,
    #[serde(rename = "imagePipelineArn")]
    pub image_pipeline_arn: std::option::Option<std::string::String>,
}
/// See [`UpdateImagePipelineOutput`](crate::output::UpdateImagePipelineOutput)
pub mod update_image_pipeline_output {
    /// A builder for [`UpdateImagePipelineOutput`](crate::output::UpdateImagePipelineOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        request_id: std::option::Option<std::string::String>,
        client_token: std::option::Option<std::string::String>,
        image_pipeline_arn: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn request_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.request_id = Some(input.into());
            self
        }
        pub fn set_request_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.request_id = input;
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
        pub fn image_pipeline_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.image_pipeline_arn = Some(input.into());
            self
        }
        pub fn set_image_pipeline_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.image_pipeline_arn = input;
            self
        }
        /// Consumes the builder and constructs a [`UpdateImagePipelineOutput`](crate::output::UpdateImagePipelineOutput)
        pub fn build(self) -> crate::output::UpdateImagePipelineOutput {
            crate::output::UpdateImagePipelineOutput {
                request_id: self.request_id,
                client_token: self.client_token,
                image_pipeline_arn: self.image_pipeline_arn,
            }
        }
    }
}

impl UpdateImagePipelineOutput {
    /// Creates a new builder-style object to manufacture [`UpdateImagePipelineOutput`](crate::output::UpdateImagePipelineOutput)
    pub fn builder() -> crate::output::update_image_pipeline_output::Builder {
        crate::output::update_image_pipeline_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct UpdateInfrastructureConfigurationOutput {
    #[serde(rename = "requestId")]
    pub request_id: std::option::Option<std::string::String>,
    #[serde(rename = "clientToken")]
    pub client_token: std::option::Option<std::string::String>,
    #[serde(rename = "infrastructureConfigurationArn")]
    pub infrastructure_configuration_arn: std::option::Option<std::string::String>,
}
/// See [`UpdateInfrastructureConfigurationOutput`](crate::output::UpdateInfrastructureConfigurationOutput)
pub mod update_infrastructure_configuration_output {
    /// A builder for [`UpdateInfrastructureConfigurationOutput`](crate::output::UpdateInfrastructureConfigurationOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        request_id: std::option::Option<std::string::String>,
        client_token: std::option::Option<std::string::String>,
        infrastructure_configuration_arn: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn request_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.request_id = Some(input.into());
            self
        }
        pub fn set_request_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.request_id = input;
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
        pub fn infrastructure_configuration_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.infrastructure_configuration_arn = Some(input.into());
            self
        }
        pub fn set_infrastructure_configuration_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.infrastructure_configuration_arn = input;
            self
        }
        /// Consumes the builder and constructs a [`UpdateInfrastructureConfigurationOutput`](crate::output::UpdateInfrastructureConfigurationOutput)
        pub fn build(self) -> crate::output::UpdateInfrastructureConfigurationOutput {
            crate::output::UpdateInfrastructureConfigurationOutput {
                request_id: self.request_id,
                client_token: self.client_token,
                infrastructure_configuration_arn: self.infrastructure_configuration_arn,
            }
        }
    }
}

impl UpdateInfrastructureConfigurationOutput {
    /// Creates a new builder-style object to manufacture [`UpdateInfrastructureConfigurationOutput`](crate::output::UpdateInfrastructureConfigurationOutput)
    pub fn builder() -> crate::output::update_infrastructure_configuration_output::Builder {
        crate::output::update_infrastructure_configuration_output::Builder::default()
    }
}
