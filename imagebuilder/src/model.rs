/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/// Details of an EC2 AMI.
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct Ami {
    #[serde(rename = "region")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub region: std::option::Option<std::string::String>,
    #[serde(rename = "image")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub image: std::option::Option<std::string::String>,
    #[serde(rename = "name")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,
    #[serde(rename = "description")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,
    #[serde(rename = "state")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub state: std::option::Option<crate::model::ImageState>,
    #[serde(rename = "accountId")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub account_id: std::option::Option<std::string::String>,
}
/// See [`Ami`](crate::model::Ami)
pub mod ami {
    /// A builder for [`Ami`](crate::model::Ami)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        region: std::option::Option<std::string::String>,
        image: std::option::Option<std::string::String>,
        name: std::option::Option<std::string::String>,
        description: std::option::Option<std::string::String>,
        state: std::option::Option<crate::model::ImageState>,
        account_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn region(mut self, input: impl Into<std::string::String>) -> Self {
            self.region = Some(input.into());
            self
        }
        pub fn set_region(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.region = input;
            self
        }
        pub fn image(mut self, input: impl Into<std::string::String>) -> Self {
            self.image = Some(input.into());
            self
        }
        pub fn set_image(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.image = input;
            self
        }
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
        pub fn state(mut self, input: impl Into<crate::model::ImageState>) -> Self {
            self.state = Some(input.into());
            self
        }
        pub fn set_state(mut self, input: std::option::Option<crate::model::ImageState>) -> Self {
            self.state = input;
            self
        }
        pub fn account_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.account_id = Some(input.into());
            self
        }
        pub fn set_account_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.account_id = input;
            self
        }
        /// Consumes the builder and constructs a [`Ami`](crate::model::Ami)
        pub fn build(self) -> crate::model::Ami {
            crate::model::Ami {
                region: self.region,
                image: self.image,
                name: self.name,
                description: self.description,
                state: self.state,
                account_id: self.account_id,
            }
        }
    }
}

impl Ami {
    /// Creates a new builder-style object to manufacture [`Ami`](crate::model::Ami)
    pub fn builder() -> crate::model::ami::Builder {
        crate::model::ami::Builder::default()
    }
}

/// Define and configure the output AMIs of the pipeline.
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct AmiDistributionConfiguration {
    #[serde(rename = "name")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,
    #[serde(rename = "description")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,
    #[serde(rename = "targetAccountIds")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub target_account_ids: std::option::Option<std::vec::Vec<std::string::String>>,
    #[serde(rename = "amiTags")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub ami_tags: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
    #[serde(rename = "kmsKeyId")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub kms_key_id: std::option::Option<std::string::String>,
    #[serde(rename = "launchPermission")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub launch_permission: std::option::Option<crate::model::LaunchPermissionConfiguration>,
}
/// See [`AmiDistributionConfiguration`](crate::model::AmiDistributionConfiguration)
pub mod ami_distribution_configuration {
    /// A builder for [`AmiDistributionConfiguration`](crate::model::AmiDistributionConfiguration)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        name: std::option::Option<std::string::String>,
        description: std::option::Option<std::string::String>,
        target_account_ids: std::option::Option<std::vec::Vec<std::string::String>>,
        ami_tags: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
        kms_key_id: std::option::Option<std::string::String>,
        launch_permission: std::option::Option<crate::model::LaunchPermissionConfiguration>,
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
        pub fn target_account_ids(mut self, input: impl Into<std::string::String>) -> Self {
            let mut v = self.target_account_ids.unwrap_or_default();
            v.push(input.into());
            self.target_account_ids = Some(v);
            self
        }
        pub fn set_target_account_ids(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.target_account_ids = input;
            self
        }
        pub fn ami_tags(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::string::String>,
        ) -> Self {
            let mut hash_map = self.ami_tags.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.ami_tags = Some(hash_map);
            self
        }
        pub fn set_ami_tags(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>) -> Self {
            self.ami_tags = input;
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
        pub fn launch_permission(mut self, input: impl Into<crate::model::LaunchPermissionConfiguration>) -> Self {
            self.launch_permission = Some(input.into());
            self
        }
        pub fn set_launch_permission(mut self, input: std::option::Option<crate::model::LaunchPermissionConfiguration>) -> Self {
            self.launch_permission = input;
            self
        }
        /// Consumes the builder and constructs a [`AmiDistributionConfiguration`](crate::model::AmiDistributionConfiguration)
        pub fn build(self) -> crate::model::AmiDistributionConfiguration {
            crate::model::AmiDistributionConfiguration {
                name: self.name,
                description: self.description,
                target_account_ids: self.target_account_ids,
                ami_tags: self.ami_tags,
                kms_key_id: self.kms_key_id,
                launch_permission: self.launch_permission,
            }
        }
    }
}

impl AmiDistributionConfiguration {
    /// Creates a new builder-style object to manufacture [`AmiDistributionConfiguration`](crate::model::AmiDistributionConfiguration)
    pub fn builder() -> crate::model::ami_distribution_configuration::Builder {
        crate::model::ami_distribution_configuration::Builder::default()
    }
}

/// A detailed view of a component.
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct Component {
    #[serde(rename = "arn")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub arn: std::option::Option<std::string::String>,
    #[serde(rename = "name")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,
    #[serde(rename = "version")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub version: std::option::Option<std::string::String>,
    #[serde(rename = "description")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,
    #[serde(rename = "changeDescription")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub change_description: std::option::Option<std::string::String>,
    #[serde(rename = "type")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub r#type: std::option::Option<crate::model::ComponentType>,
    #[serde(rename = "platform")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub platform: std::option::Option<crate::model::Platform>,
    #[serde(rename = "supportedOsVersions")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub supported_os_versions: std::option::Option<std::vec::Vec<std::string::String>>,
    #[serde(rename = "owner")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub owner: std::option::Option<std::string::String>,
    #[serde(rename = "data")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub data: std::option::Option<std::string::String>,
    #[serde(rename = "kmsKeyId")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub kms_key_id: std::option::Option<std::string::String>,
    #[serde(rename = "encrypted")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub encrypted: std::option::Option<bool>,
    #[serde(rename = "dateCreated")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub date_created: std::option::Option<std::string::String>,
    #[serde(rename = "tags")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub tags: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
}
/// See [`Component`](crate::model::Component)
pub mod component {
    /// A builder for [`Component`](crate::model::Component)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        arn: std::option::Option<std::string::String>,
        name: std::option::Option<std::string::String>,
        version: std::option::Option<std::string::String>,
        description: std::option::Option<std::string::String>,
        change_description: std::option::Option<std::string::String>,
        r#type: std::option::Option<crate::model::ComponentType>,
        platform: std::option::Option<crate::model::Platform>,
        supported_os_versions: std::option::Option<std::vec::Vec<std::string::String>>,
        owner: std::option::Option<std::string::String>,
        data: std::option::Option<std::string::String>,
        kms_key_id: std::option::Option<std::string::String>,
        encrypted: std::option::Option<bool>,
        date_created: std::option::Option<std::string::String>,
        tags: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
    }
    impl Builder {
        pub fn arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.arn = Some(input.into());
            self
        }
        pub fn set_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.arn = input;
            self
        }
        pub fn name(mut self, input: impl Into<std::string::String>) -> Self {
            self.name = Some(input.into());
            self
        }
        pub fn set_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.name = input;
            self
        }
        pub fn version(mut self, input: impl Into<std::string::String>) -> Self {
            self.version = Some(input.into());
            self
        }
        pub fn set_version(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.version = input;
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
        pub fn owner(mut self, input: impl Into<std::string::String>) -> Self {
            self.owner = Some(input.into());
            self
        }
        pub fn set_owner(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.owner = input;
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
        pub fn kms_key_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.kms_key_id = Some(input.into());
            self
        }
        pub fn set_kms_key_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.kms_key_id = input;
            self
        }
        pub fn encrypted(mut self, input: bool) -> Self {
            self.encrypted = Some(input);
            self
        }
        pub fn set_encrypted(mut self, input: std::option::Option<bool>) -> Self {
            self.encrypted = input;
            self
        }
        pub fn date_created(mut self, input: impl Into<std::string::String>) -> Self {
            self.date_created = Some(input.into());
            self
        }
        pub fn set_date_created(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.date_created = input;
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
        /// Consumes the builder and constructs a [`Component`](crate::model::Component)
        pub fn build(self) -> crate::model::Component {
            crate::model::Component {
                arn: self.arn,
                name: self.name,
                version: self.version,
                description: self.description,
                change_description: self.change_description,
                r#type: self.r#type,
                platform: self.platform,
                supported_os_versions: self.supported_os_versions,
                owner: self.owner,
                data: self.data,
                kms_key_id: self.kms_key_id,
                encrypted: self.encrypted,
                date_created: self.date_created,
                tags: self.tags,
            }
        }
    }
}

impl Component {
    /// Creates a new builder-style object to manufacture [`Component`](crate::model::Component)
    pub fn builder() -> crate::model::component::Builder {
        crate::model::component::Builder::default()
    }
}

/// Configuration details of the component.
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct ComponentConfiguration {
    #[serde(rename = "componentArn")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub component_arn: std::option::Option<std::string::String>,
}
/// See [`ComponentConfiguration`](crate::model::ComponentConfiguration)
pub mod component_configuration {
    /// A builder for [`ComponentConfiguration`](crate::model::ComponentConfiguration)
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
        /// Consumes the builder and constructs a [`ComponentConfiguration`](crate::model::ComponentConfiguration)
        pub fn build(self) -> crate::model::ComponentConfiguration {
            crate::model::ComponentConfiguration {
                component_arn: self.component_arn,
            }
        }
    }
}

impl ComponentConfiguration {
    /// Creates a new builder-style object to manufacture [`ComponentConfiguration`](crate::model::ComponentConfiguration)
    pub fn builder() -> crate::model::component_configuration::Builder {
        crate::model::component_configuration::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum ComponentFormat {
    Shell,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for ComponentFormat {
    fn from(s: &str) -> Self {
        match s {
            "SHELL" => ComponentFormat::Shell,
            other => ComponentFormat::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for ComponentFormat {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(ComponentFormat::from(s))
    }
}
impl ComponentFormat {
    pub fn as_str(&self) -> &str {
        match self {
            ComponentFormat::Shell => "SHELL",
            ComponentFormat::Unknown(s) => s.as_ref(),
        }
    }
    pub fn values() -> &'static [&'static str] {
        &["SHELL"]
    }
}
impl AsRef<str> for ComponentFormat {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for ComponentFormat {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for ComponentFormat {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = std::string::String::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

/// A high-level summary of a component.
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct ComponentSummary {
    #[serde(rename = "arn")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub arn: std::option::Option<std::string::String>,
    #[serde(rename = "name")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,
    #[serde(rename = "version")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub version: std::option::Option<std::string::String>,
    #[serde(rename = "platform")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub platform: std::option::Option<crate::model::Platform>,
    #[serde(rename = "supportedOsVersions")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub supported_os_versions: std::option::Option<std::vec::Vec<std::string::String>>,
    #[serde(rename = "type")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub r#type: std::option::Option<crate::model::ComponentType>,
    #[serde(rename = "owner")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub owner: std::option::Option<std::string::String>,
    #[serde(rename = "description")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,
    #[serde(rename = "changeDescription")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub change_description: std::option::Option<std::string::String>,
    #[serde(rename = "dateCreated")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub date_created: std::option::Option<std::string::String>,
    #[serde(rename = "tags")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub tags: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
}
/// See [`ComponentSummary`](crate::model::ComponentSummary)
pub mod component_summary {
    /// A builder for [`ComponentSummary`](crate::model::ComponentSummary)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        arn: std::option::Option<std::string::String>,
        name: std::option::Option<std::string::String>,
        version: std::option::Option<std::string::String>,
        platform: std::option::Option<crate::model::Platform>,
        supported_os_versions: std::option::Option<std::vec::Vec<std::string::String>>,
        r#type: std::option::Option<crate::model::ComponentType>,
        owner: std::option::Option<std::string::String>,
        description: std::option::Option<std::string::String>,
        change_description: std::option::Option<std::string::String>,
        date_created: std::option::Option<std::string::String>,
        tags: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
    }
    impl Builder {
        pub fn arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.arn = Some(input.into());
            self
        }
        pub fn set_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.arn = input;
            self
        }
        pub fn name(mut self, input: impl Into<std::string::String>) -> Self {
            self.name = Some(input.into());
            self
        }
        pub fn set_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.name = input;
            self
        }
        pub fn version(mut self, input: impl Into<std::string::String>) -> Self {
            self.version = Some(input.into());
            self
        }
        pub fn set_version(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.version = input;
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
        pub fn r#type(mut self, input: impl Into<crate::model::ComponentType>) -> Self {
            self.r#type = Some(input.into());
            self
        }
        pub fn set_type(mut self, input: std::option::Option<crate::model::ComponentType>) -> Self {
            self.r#type = input;
            self
        }
        pub fn owner(mut self, input: impl Into<std::string::String>) -> Self {
            self.owner = Some(input.into());
            self
        }
        pub fn set_owner(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.owner = input;
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
        pub fn date_created(mut self, input: impl Into<std::string::String>) -> Self {
            self.date_created = Some(input.into());
            self
        }
        pub fn set_date_created(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.date_created = input;
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
        /// Consumes the builder and constructs a [`ComponentSummary`](crate::model::ComponentSummary)
        pub fn build(self) -> crate::model::ComponentSummary {
            crate::model::ComponentSummary {
                arn: self.arn,
                name: self.name,
                version: self.version,
                platform: self.platform,
                supported_os_versions: self.supported_os_versions,
                r#type: self.r#type,
                owner: self.owner,
                description: self.description,
                change_description: self.change_description,
                date_created: self.date_created,
                tags: self.tags,
            }
        }
    }
}

impl ComponentSummary {
    /// Creates a new builder-style object to manufacture [`ComponentSummary`](crate::model::ComponentSummary)
    pub fn builder() -> crate::model::component_summary::Builder {
        crate::model::component_summary::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum ComponentType {
    Build,
    Test,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for ComponentType {
    fn from(s: &str) -> Self {
        match s {
            "BUILD" => ComponentType::Build,
            "TEST" => ComponentType::Test,
            other => ComponentType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for ComponentType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(ComponentType::from(s))
    }
}
impl ComponentType {
    pub fn as_str(&self) -> &str {
        match self {
            ComponentType::Build => "BUILD",
            ComponentType::Test => "TEST",
            ComponentType::Unknown(s) => s.as_ref(),
        }
    }
    pub fn values() -> &'static [&'static str] {
        &["BUILD", "TEST"]
    }
}
impl AsRef<str> for ComponentType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for ComponentType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for ComponentType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = std::string::String::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

/// A high-level overview of a component semantic version.
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct ComponentVersion {
    #[serde(rename = "arn")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub arn: std::option::Option<std::string::String>,
    #[serde(rename = "name")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,
    #[serde(rename = "version")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub version: std::option::Option<std::string::String>,
    #[serde(rename = "description")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,
    #[serde(rename = "platform")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub platform: std::option::Option<crate::model::Platform>,
    #[serde(rename = "supportedOsVersions")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub supported_os_versions: std::option::Option<std::vec::Vec<std::string::String>>,
    #[serde(rename = "type")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub r#type: std::option::Option<crate::model::ComponentType>,
    #[serde(rename = "owner")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub owner: std::option::Option<std::string::String>,
    #[serde(rename = "dateCreated")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub date_created: std::option::Option<std::string::String>,
}
/// See [`ComponentVersion`](crate::model::ComponentVersion)
pub mod component_version {
    /// A builder for [`ComponentVersion`](crate::model::ComponentVersion)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        arn: std::option::Option<std::string::String>,
        name: std::option::Option<std::string::String>,
        version: std::option::Option<std::string::String>,
        description: std::option::Option<std::string::String>,
        platform: std::option::Option<crate::model::Platform>,
        supported_os_versions: std::option::Option<std::vec::Vec<std::string::String>>,
        r#type: std::option::Option<crate::model::ComponentType>,
        owner: std::option::Option<std::string::String>,
        date_created: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.arn = Some(input.into());
            self
        }
        pub fn set_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.arn = input;
            self
        }
        pub fn name(mut self, input: impl Into<std::string::String>) -> Self {
            self.name = Some(input.into());
            self
        }
        pub fn set_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.name = input;
            self
        }
        pub fn version(mut self, input: impl Into<std::string::String>) -> Self {
            self.version = Some(input.into());
            self
        }
        pub fn set_version(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.version = input;
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
        pub fn r#type(mut self, input: impl Into<crate::model::ComponentType>) -> Self {
            self.r#type = Some(input.into());
            self
        }
        pub fn set_type(mut self, input: std::option::Option<crate::model::ComponentType>) -> Self {
            self.r#type = input;
            self
        }
        pub fn owner(mut self, input: impl Into<std::string::String>) -> Self {
            self.owner = Some(input.into());
            self
        }
        pub fn set_owner(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.owner = input;
            self
        }
        pub fn date_created(mut self, input: impl Into<std::string::String>) -> Self {
            self.date_created = Some(input.into());
            self
        }
        pub fn set_date_created(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.date_created = input;
            self
        }
        /// Consumes the builder and constructs a [`ComponentVersion`](crate::model::ComponentVersion)
        pub fn build(self) -> crate::model::ComponentVersion {
            crate::model::ComponentVersion {
                arn: self.arn,
                name: self.name,
                version: self.version,
                description: self.description,
                platform: self.platform,
                supported_os_versions: self.supported_os_versions,
                r#type: self.r#type,
                owner: self.owner,
                date_created: self.date_created,
            }
        }
    }
}

impl ComponentVersion {
    /// Creates a new builder-style object to manufacture [`ComponentVersion`](crate::model::ComponentVersion)
    pub fn builder() -> crate::model::component_version::Builder {
        crate::model::component_version::Builder::default()
    }
}

/// Defines the settings for a specific Region.
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct Distribution {
    #[serde(rename = "region")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub region: std::option::Option<std::string::String>,
    #[serde(rename = "amiDistributionConfiguration")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub ami_distribution_configuration: std::option::Option<crate::model::AmiDistributionConfiguration>,
    #[serde(rename = "licenseConfigurationArns")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub license_configuration_arns: std::option::Option<std::vec::Vec<std::string::String>>,
}
/// See [`Distribution`](crate::model::Distribution)
pub mod distribution {
    /// A builder for [`Distribution`](crate::model::Distribution)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        region: std::option::Option<std::string::String>,
        ami_distribution_configuration: std::option::Option<crate::model::AmiDistributionConfiguration>,
        license_configuration_arns: std::option::Option<std::vec::Vec<std::string::String>>,
    }
    impl Builder {
        pub fn region(mut self, input: impl Into<std::string::String>) -> Self {
            self.region = Some(input.into());
            self
        }
        pub fn set_region(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.region = input;
            self
        }
        pub fn ami_distribution_configuration(mut self, input: impl Into<crate::model::AmiDistributionConfiguration>) -> Self {
            self.ami_distribution_configuration = Some(input.into());
            self
        }
        pub fn set_ami_distribution_configuration(mut self, input: std::option::Option<crate::model::AmiDistributionConfiguration>) -> Self {
            self.ami_distribution_configuration = input;
            self
        }
        pub fn license_configuration_arns(mut self, input: impl Into<std::string::String>) -> Self {
            let mut v = self.license_configuration_arns.unwrap_or_default();
            v.push(input.into());
            self.license_configuration_arns = Some(v);
            self
        }
        pub fn set_license_configuration_arns(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.license_configuration_arns = input;
            self
        }
        /// Consumes the builder and constructs a [`Distribution`](crate::model::Distribution)
        pub fn build(self) -> crate::model::Distribution {
            crate::model::Distribution {
                region: self.region,
                ami_distribution_configuration: self.ami_distribution_configuration,
                license_configuration_arns: self.license_configuration_arns,
            }
        }
    }
}

impl Distribution {
    /// Creates a new builder-style object to manufacture [`Distribution`](crate::model::Distribution)
    pub fn builder() -> crate::model::distribution::Builder {
        crate::model::distribution::Builder::default()
    }
}

/// A distribution configuration.
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct DistributionConfiguration {
    #[serde(rename = "arn")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub arn: std::option::Option<std::string::String>,
    #[serde(rename = "name")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,
    #[serde(rename = "description")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,
    #[serde(rename = "distributions")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub distributions: std::option::Option<std::vec::Vec<crate::model::Distribution>>,
    #[serde(rename = "timeoutMinutes")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub timeout_minutes: std::option::Option<i32>,
    #[serde(rename = "dateCreated")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub date_created: std::option::Option<std::string::String>,
    #[serde(rename = "dateUpdated")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub date_updated: std::option::Option<std::string::String>,
    #[serde(rename = "tags")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub tags: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
}
/// See [`DistributionConfiguration`](crate::model::DistributionConfiguration)
pub mod distribution_configuration {
    /// A builder for [`DistributionConfiguration`](crate::model::DistributionConfiguration)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        arn: std::option::Option<std::string::String>,
        name: std::option::Option<std::string::String>,
        description: std::option::Option<std::string::String>,
        distributions: std::option::Option<std::vec::Vec<crate::model::Distribution>>,
        timeout_minutes: std::option::Option<i32>,
        date_created: std::option::Option<std::string::String>,
        date_updated: std::option::Option<std::string::String>,
        tags: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
    }
    impl Builder {
        pub fn arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.arn = Some(input.into());
            self
        }
        pub fn set_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.arn = input;
            self
        }
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
        pub fn timeout_minutes(mut self, input: i32) -> Self {
            self.timeout_minutes = Some(input);
            self
        }
        pub fn set_timeout_minutes(mut self, input: std::option::Option<i32>) -> Self {
            self.timeout_minutes = input;
            self
        }
        pub fn date_created(mut self, input: impl Into<std::string::String>) -> Self {
            self.date_created = Some(input.into());
            self
        }
        pub fn set_date_created(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.date_created = input;
            self
        }
        pub fn date_updated(mut self, input: impl Into<std::string::String>) -> Self {
            self.date_updated = Some(input.into());
            self
        }
        pub fn set_date_updated(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.date_updated = input;
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
        /// Consumes the builder and constructs a [`DistributionConfiguration`](crate::model::DistributionConfiguration)
        pub fn build(self) -> crate::model::DistributionConfiguration {
            crate::model::DistributionConfiguration {
                arn: self.arn,
                name: self.name,
                description: self.description,
                distributions: self.distributions,
                timeout_minutes: self.timeout_minutes,
                date_created: self.date_created,
                date_updated: self.date_updated,
                tags: self.tags,
            }
        }
    }
}

impl DistributionConfiguration {
    /// Creates a new builder-style object to manufacture [`DistributionConfiguration`](crate::model::DistributionConfiguration)
    pub fn builder() -> crate::model::distribution_configuration::Builder {
        crate::model::distribution_configuration::Builder::default()
    }
}

/// A high-level overview of a distribution configuration.
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct DistributionConfigurationSummary {
    #[serde(rename = "arn")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub arn: std::option::Option<std::string::String>,
    #[serde(rename = "name")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,
    #[serde(rename = "description")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,
    #[serde(rename = "dateCreated")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub date_created: std::option::Option<std::string::String>,
    #[serde(rename = "dateUpdated")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub date_updated: std::option::Option<std::string::String>,
    #[serde(rename = "tags")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub tags: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
}
/// See [`DistributionConfigurationSummary`](crate::model::DistributionConfigurationSummary)
pub mod distribution_configuration_summary {
    /// A builder for [`DistributionConfigurationSummary`](crate::model::DistributionConfigurationSummary)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        arn: std::option::Option<std::string::String>,
        name: std::option::Option<std::string::String>,
        description: std::option::Option<std::string::String>,
        date_created: std::option::Option<std::string::String>,
        date_updated: std::option::Option<std::string::String>,
        tags: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
    }
    impl Builder {
        pub fn arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.arn = Some(input.into());
            self
        }
        pub fn set_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.arn = input;
            self
        }
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
        pub fn date_created(mut self, input: impl Into<std::string::String>) -> Self {
            self.date_created = Some(input.into());
            self
        }
        pub fn set_date_created(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.date_created = input;
            self
        }
        pub fn date_updated(mut self, input: impl Into<std::string::String>) -> Self {
            self.date_updated = Some(input.into());
            self
        }
        pub fn set_date_updated(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.date_updated = input;
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
        /// Consumes the builder and constructs a [`DistributionConfigurationSummary`](crate::model::DistributionConfigurationSummary)
        pub fn build(self) -> crate::model::DistributionConfigurationSummary {
            crate::model::DistributionConfigurationSummary {
                arn: self.arn,
                name: self.name,
                description: self.description,
                date_created: self.date_created,
                date_updated: self.date_updated,
                tags: self.tags,
            }
        }
    }
}

impl DistributionConfigurationSummary {
    /// Creates a new builder-style object to manufacture [`DistributionConfigurationSummary`](crate::model::DistributionConfigurationSummary)
    pub fn builder() -> crate::model::distribution_configuration_summary::Builder {
        crate::model::distribution_configuration_summary::Builder::default()
    }
}

/// Amazon EBS-specific block device mapping specifications.
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct EbsInstanceBlockDeviceSpecification {
    #[serde(rename = "encrypted")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub encrypted: std::option::Option<bool>,
    #[serde(rename = "deleteOnTermination")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub delete_on_termination: std::option::Option<bool>,
    #[serde(rename = "iops")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub iops: std::option::Option<i32>,
    #[serde(rename = "kmsKeyId")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub kms_key_id: std::option::Option<std::string::String>,
    #[serde(rename = "snapshotId")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub snapshot_id: std::option::Option<std::string::String>,
    #[serde(rename = "volumeSize")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub volume_size: std::option::Option<i32>,
    #[serde(rename = "volumeType")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub volume_type: std::option::Option<crate::model::EbsVolumeType>,
}
/// See [`EbsInstanceBlockDeviceSpecification`](crate::model::EbsInstanceBlockDeviceSpecification)
pub mod ebs_instance_block_device_specification {
    /// A builder for [`EbsInstanceBlockDeviceSpecification`](crate::model::EbsInstanceBlockDeviceSpecification)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        encrypted: std::option::Option<bool>,
        delete_on_termination: std::option::Option<bool>,
        iops: std::option::Option<i32>,
        kms_key_id: std::option::Option<std::string::String>,
        snapshot_id: std::option::Option<std::string::String>,
        volume_size: std::option::Option<i32>,
        volume_type: std::option::Option<crate::model::EbsVolumeType>,
    }
    impl Builder {
        pub fn encrypted(mut self, input: bool) -> Self {
            self.encrypted = Some(input);
            self
        }
        pub fn set_encrypted(mut self, input: std::option::Option<bool>) -> Self {
            self.encrypted = input;
            self
        }
        pub fn delete_on_termination(mut self, input: bool) -> Self {
            self.delete_on_termination = Some(input);
            self
        }
        pub fn set_delete_on_termination(mut self, input: std::option::Option<bool>) -> Self {
            self.delete_on_termination = input;
            self
        }
        pub fn iops(mut self, input: i32) -> Self {
            self.iops = Some(input);
            self
        }
        pub fn set_iops(mut self, input: std::option::Option<i32>) -> Self {
            self.iops = input;
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
        pub fn snapshot_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.snapshot_id = Some(input.into());
            self
        }
        pub fn set_snapshot_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.snapshot_id = input;
            self
        }
        pub fn volume_size(mut self, input: i32) -> Self {
            self.volume_size = Some(input);
            self
        }
        pub fn set_volume_size(mut self, input: std::option::Option<i32>) -> Self {
            self.volume_size = input;
            self
        }
        pub fn volume_type(mut self, input: impl Into<crate::model::EbsVolumeType>) -> Self {
            self.volume_type = Some(input.into());
            self
        }
        pub fn set_volume_type(mut self, input: std::option::Option<crate::model::EbsVolumeType>) -> Self {
            self.volume_type = input;
            self
        }
        /// Consumes the builder and constructs a [`EbsInstanceBlockDeviceSpecification`](crate::model::EbsInstanceBlockDeviceSpecification)
        pub fn build(self) -> crate::model::EbsInstanceBlockDeviceSpecification {
            crate::model::EbsInstanceBlockDeviceSpecification {
                encrypted: self.encrypted,
                delete_on_termination: self.delete_on_termination,
                iops: self.iops,
                kms_key_id: self.kms_key_id,
                snapshot_id: self.snapshot_id,
                volume_size: self.volume_size,
                volume_type: self.volume_type,
            }
        }
    }
}

impl EbsInstanceBlockDeviceSpecification {
    /// Creates a new builder-style object to manufacture [`EbsInstanceBlockDeviceSpecification`](crate::model::EbsInstanceBlockDeviceSpecification)
    pub fn builder() -> crate::model::ebs_instance_block_device_specification::Builder {
        crate::model::ebs_instance_block_device_specification::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum EbsVolumeType {
    Standard,
    Io1,
    Io2,
    Gp2,
    Sc1,
    St1,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for EbsVolumeType {
    fn from(s: &str) -> Self {
        match s {
            "standard" => EbsVolumeType::Standard,
            "io1" => EbsVolumeType::Io1,
            "io2" => EbsVolumeType::Io2,
            "gp2" => EbsVolumeType::Gp2,
            "sc1" => EbsVolumeType::Sc1,
            "st1" => EbsVolumeType::St1,
            other => EbsVolumeType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for EbsVolumeType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(EbsVolumeType::from(s))
    }
}
impl EbsVolumeType {
    pub fn as_str(&self) -> &str {
        match self {
            EbsVolumeType::Standard => "standard",
            EbsVolumeType::Io1 => "io1",
            EbsVolumeType::Io2 => "io2",
            EbsVolumeType::Gp2 => "gp2",
            EbsVolumeType::Sc1 => "sc1",
            EbsVolumeType::St1 => "st1",
            EbsVolumeType::Unknown(s) => s.as_ref(),
        }
    }
    pub fn values() -> &'static [&'static str] {
        &["standard", "io1", "io2", "gp2", "sc1", "st1"]
    }
}
impl AsRef<str> for EbsVolumeType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for EbsVolumeType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for EbsVolumeType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = std::string::String::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

/// A filter name and value pair that is used to return a more specific list of results from a list operation.
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct Filter {
    #[serde(rename = "name")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,
    #[serde(rename = "values")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub values: std::option::Option<std::vec::Vec<std::string::String>>,
}
/// See [`Filter`](crate::model::Filter)
pub mod filter {
    /// A builder for [`Filter`](crate::model::Filter)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        name: std::option::Option<std::string::String>,
        values: std::option::Option<std::vec::Vec<std::string::String>>,
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
        pub fn values(mut self, input: impl Into<std::string::String>) -> Self {
            let mut v = self.values.unwrap_or_default();
            v.push(input.into());
            self.values = Some(v);
            self
        }
        pub fn set_values(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.values = input;
            self
        }
        /// Consumes the builder and constructs a [`Filter`](crate::model::Filter)
        pub fn build(self) -> crate::model::Filter {
            crate::model::Filter {
                name: self.name,
                values: self.values,
            }
        }
    }
}

impl Filter {
    /// Creates a new builder-style object to manufacture [`Filter`](crate::model::Filter)
    pub fn builder() -> crate::model::filter::Builder {
        crate::model::filter::Builder::default()
    }
}

/// An image build version.
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct Image {
    #[serde(rename = "arn")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub arn: std::option::Option<std::string::String>,
    #[serde(rename = "name")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,
    #[serde(rename = "version")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub version: std::option::Option<std::string::String>,
    #[serde(rename = "platform")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub platform: std::option::Option<crate::model::Platform>,
    #[serde(rename = "enhancedImageMetadataEnabled")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub enhanced_image_metadata_enabled: std::option::Option<bool>,
    #[serde(rename = "osVersion")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub os_version: std::option::Option<std::string::String>,
    #[serde(rename = "state")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub state: std::option::Option<crate::model::ImageState>,
    #[serde(rename = "imageRecipe")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub image_recipe: std::option::Option<crate::model::ImageRecipe>,
    #[serde(rename = "sourcePipelineName")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub source_pipeline_name: std::option::Option<std::string::String>,
    #[serde(rename = "sourcePipelineArn")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub source_pipeline_arn: std::option::Option<std::string::String>,
    #[serde(rename = "infrastructureConfiguration")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub infrastructure_configuration: std::option::Option<crate::model::InfrastructureConfiguration>,
    #[serde(rename = "distributionConfiguration")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub distribution_configuration: std::option::Option<crate::model::DistributionConfiguration>,
    #[serde(rename = "imageTestsConfiguration")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub image_tests_configuration: std::option::Option<crate::model::ImageTestsConfiguration>,
    #[serde(rename = "dateCreated")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub date_created: std::option::Option<std::string::String>,
    #[serde(rename = "outputResources")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub output_resources: std::option::Option<crate::model::OutputResources>,
    #[serde(rename = "tags")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub tags: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
}
/// See [`Image`](crate::model::Image)
pub mod image {
    /// A builder for [`Image`](crate::model::Image)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        arn: std::option::Option<std::string::String>,
        name: std::option::Option<std::string::String>,
        version: std::option::Option<std::string::String>,
        platform: std::option::Option<crate::model::Platform>,
        enhanced_image_metadata_enabled: std::option::Option<bool>,
        os_version: std::option::Option<std::string::String>,
        state: std::option::Option<crate::model::ImageState>,
        image_recipe: std::option::Option<crate::model::ImageRecipe>,
        source_pipeline_name: std::option::Option<std::string::String>,
        source_pipeline_arn: std::option::Option<std::string::String>,
        infrastructure_configuration: std::option::Option<crate::model::InfrastructureConfiguration>,
        distribution_configuration: std::option::Option<crate::model::DistributionConfiguration>,
        image_tests_configuration: std::option::Option<crate::model::ImageTestsConfiguration>,
        date_created: std::option::Option<std::string::String>,
        output_resources: std::option::Option<crate::model::OutputResources>,
        tags: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
    }
    impl Builder {
        pub fn arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.arn = Some(input.into());
            self
        }
        pub fn set_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.arn = input;
            self
        }
        pub fn name(mut self, input: impl Into<std::string::String>) -> Self {
            self.name = Some(input.into());
            self
        }
        pub fn set_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.name = input;
            self
        }
        pub fn version(mut self, input: impl Into<std::string::String>) -> Self {
            self.version = Some(input.into());
            self
        }
        pub fn set_version(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.version = input;
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
        pub fn enhanced_image_metadata_enabled(mut self, input: bool) -> Self {
            self.enhanced_image_metadata_enabled = Some(input);
            self
        }
        pub fn set_enhanced_image_metadata_enabled(mut self, input: std::option::Option<bool>) -> Self {
            self.enhanced_image_metadata_enabled = input;
            self
        }
        pub fn os_version(mut self, input: impl Into<std::string::String>) -> Self {
            self.os_version = Some(input.into());
            self
        }
        pub fn set_os_version(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.os_version = input;
            self
        }
        pub fn state(mut self, input: impl Into<crate::model::ImageState>) -> Self {
            self.state = Some(input.into());
            self
        }
        pub fn set_state(mut self, input: std::option::Option<crate::model::ImageState>) -> Self {
            self.state = input;
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
        pub fn source_pipeline_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.source_pipeline_name = Some(input.into());
            self
        }
        pub fn set_source_pipeline_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.source_pipeline_name = input;
            self
        }
        pub fn source_pipeline_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.source_pipeline_arn = Some(input.into());
            self
        }
        pub fn set_source_pipeline_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.source_pipeline_arn = input;
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
        pub fn distribution_configuration(mut self, input: impl Into<crate::model::DistributionConfiguration>) -> Self {
            self.distribution_configuration = Some(input.into());
            self
        }
        pub fn set_distribution_configuration(mut self, input: std::option::Option<crate::model::DistributionConfiguration>) -> Self {
            self.distribution_configuration = input;
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
        pub fn date_created(mut self, input: impl Into<std::string::String>) -> Self {
            self.date_created = Some(input.into());
            self
        }
        pub fn set_date_created(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.date_created = input;
            self
        }
        pub fn output_resources(mut self, input: impl Into<crate::model::OutputResources>) -> Self {
            self.output_resources = Some(input.into());
            self
        }
        pub fn set_output_resources(mut self, input: std::option::Option<crate::model::OutputResources>) -> Self {
            self.output_resources = input;
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
        /// Consumes the builder and constructs a [`Image`](crate::model::Image)
        pub fn build(self) -> crate::model::Image {
            crate::model::Image {
                arn: self.arn,
                name: self.name,
                version: self.version,
                platform: self.platform,
                enhanced_image_metadata_enabled: self.enhanced_image_metadata_enabled,
                os_version: self.os_version,
                state: self.state,
                image_recipe: self.image_recipe,
                source_pipeline_name: self.source_pipeline_name,
                source_pipeline_arn: self.source_pipeline_arn,
                infrastructure_configuration: self.infrastructure_configuration,
                distribution_configuration: self.distribution_configuration,
                image_tests_configuration: self.image_tests_configuration,
                date_created: self.date_created,
                output_resources: self.output_resources,
                tags: self.tags,
            }
        }
    }
}

impl Image {
    /// Creates a new builder-style object to manufacture [`Image`](crate::model::Image)
    pub fn builder() -> crate::model::image::Builder {
        crate::model::image::Builder::default()
    }
}

/// Details of an image pipeline.
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct ImagePipeline {
    #[serde(rename = "arn")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub arn: std::option::Option<std::string::String>,
    #[serde(rename = "name")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,
    #[serde(rename = "description")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,
    #[serde(rename = "platform")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub platform: std::option::Option<crate::model::Platform>,
    #[serde(rename = "enhancedImageMetadataEnabled")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub enhanced_image_metadata_enabled: std::option::Option<bool>,
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
    #[serde(rename = "schedule")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub schedule: std::option::Option<crate::model::Schedule>,
    #[serde(rename = "status")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub status: std::option::Option<crate::model::PipelineStatus>,
    #[serde(rename = "dateCreated")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub date_created: std::option::Option<std::string::String>,
    #[serde(rename = "dateUpdated")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub date_updated: std::option::Option<std::string::String>,
    #[serde(rename = "dateLastRun")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub date_last_run: std::option::Option<std::string::String>,
    #[serde(rename = "dateNextRun")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub date_next_run: std::option::Option<std::string::String>,
    #[serde(rename = "tags")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub tags: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
}
/// See [`ImagePipeline`](crate::model::ImagePipeline)
pub mod image_pipeline {
    /// A builder for [`ImagePipeline`](crate::model::ImagePipeline)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        arn: std::option::Option<std::string::String>,
        name: std::option::Option<std::string::String>,
        description: std::option::Option<std::string::String>,
        platform: std::option::Option<crate::model::Platform>,
        enhanced_image_metadata_enabled: std::option::Option<bool>,
        image_recipe_arn: std::option::Option<std::string::String>,
        infrastructure_configuration_arn: std::option::Option<std::string::String>,
        distribution_configuration_arn: std::option::Option<std::string::String>,
        image_tests_configuration: std::option::Option<crate::model::ImageTestsConfiguration>,
        schedule: std::option::Option<crate::model::Schedule>,
        status: std::option::Option<crate::model::PipelineStatus>,
        date_created: std::option::Option<std::string::String>,
        date_updated: std::option::Option<std::string::String>,
        date_last_run: std::option::Option<std::string::String>,
        date_next_run: std::option::Option<std::string::String>,
        tags: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
    }
    impl Builder {
        pub fn arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.arn = Some(input.into());
            self
        }
        pub fn set_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.arn = input;
            self
        }
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
        pub fn platform(mut self, input: impl Into<crate::model::Platform>) -> Self {
            self.platform = Some(input.into());
            self
        }
        pub fn set_platform(mut self, input: std::option::Option<crate::model::Platform>) -> Self {
            self.platform = input;
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
        pub fn date_created(mut self, input: impl Into<std::string::String>) -> Self {
            self.date_created = Some(input.into());
            self
        }
        pub fn set_date_created(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.date_created = input;
            self
        }
        pub fn date_updated(mut self, input: impl Into<std::string::String>) -> Self {
            self.date_updated = Some(input.into());
            self
        }
        pub fn set_date_updated(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.date_updated = input;
            self
        }
        pub fn date_last_run(mut self, input: impl Into<std::string::String>) -> Self {
            self.date_last_run = Some(input.into());
            self
        }
        pub fn set_date_last_run(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.date_last_run = input;
            self
        }
        pub fn date_next_run(mut self, input: impl Into<std::string::String>) -> Self {
            self.date_next_run = Some(input.into());
            self
        }
        pub fn set_date_next_run(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.date_next_run = input;
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
        /// Consumes the builder and constructs a [`ImagePipeline`](crate::model::ImagePipeline)
        pub fn build(self) -> crate::model::ImagePipeline {
            crate::model::ImagePipeline {
                arn: self.arn,
                name: self.name,
                description: self.description,
                platform: self.platform,
                enhanced_image_metadata_enabled: self.enhanced_image_metadata_enabled,
                image_recipe_arn: self.image_recipe_arn,
                infrastructure_configuration_arn: self.infrastructure_configuration_arn,
                distribution_configuration_arn: self.distribution_configuration_arn,
                image_tests_configuration: self.image_tests_configuration,
                schedule: self.schedule,
                status: self.status,
                date_created: self.date_created,
                date_updated: self.date_updated,
                date_last_run: self.date_last_run,
                date_next_run: self.date_next_run,
                tags: self.tags,
            }
        }
    }
}

impl ImagePipeline {
    /// Creates a new builder-style object to manufacture [`ImagePipeline`](crate::model::ImagePipeline)
    pub fn builder() -> crate::model::image_pipeline::Builder {
        crate::model::image_pipeline::Builder::default()
    }
}

/// An image recipe.
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct ImageRecipe {
    #[serde(rename = "arn")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub arn: std::option::Option<std::string::String>,
    #[serde(rename = "name")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,
    #[serde(rename = "description")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,
    #[serde(rename = "platform")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub platform: std::option::Option<crate::model::Platform>,
    #[serde(rename = "owner")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub owner: std::option::Option<std::string::String>,
    #[serde(rename = "version")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub version: std::option::Option<std::string::String>,
    #[serde(rename = "components")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub components: std::option::Option<std::vec::Vec<crate::model::ComponentConfiguration>>,
    #[serde(rename = "parentImage")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub parent_image: std::option::Option<std::string::String>,
    #[serde(rename = "blockDeviceMappings")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub block_device_mappings: std::option::Option<std::vec::Vec<crate::model::InstanceBlockDeviceMapping>>,
    #[serde(rename = "dateCreated")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub date_created: std::option::Option<std::string::String>,
    #[serde(rename = "tags")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub tags: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
    #[serde(rename = "workingDirectory")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub working_directory: std::option::Option<std::string::String>,
}
/// See [`ImageRecipe`](crate::model::ImageRecipe)
pub mod image_recipe {
    /// A builder for [`ImageRecipe`](crate::model::ImageRecipe)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        arn: std::option::Option<std::string::String>,
        name: std::option::Option<std::string::String>,
        description: std::option::Option<std::string::String>,
        platform: std::option::Option<crate::model::Platform>,
        owner: std::option::Option<std::string::String>,
        version: std::option::Option<std::string::String>,
        components: std::option::Option<std::vec::Vec<crate::model::ComponentConfiguration>>,
        parent_image: std::option::Option<std::string::String>,
        block_device_mappings: std::option::Option<std::vec::Vec<crate::model::InstanceBlockDeviceMapping>>,
        date_created: std::option::Option<std::string::String>,
        tags: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
        working_directory: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.arn = Some(input.into());
            self
        }
        pub fn set_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.arn = input;
            self
        }
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
        pub fn platform(mut self, input: impl Into<crate::model::Platform>) -> Self {
            self.platform = Some(input.into());
            self
        }
        pub fn set_platform(mut self, input: std::option::Option<crate::model::Platform>) -> Self {
            self.platform = input;
            self
        }
        pub fn owner(mut self, input: impl Into<std::string::String>) -> Self {
            self.owner = Some(input.into());
            self
        }
        pub fn set_owner(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.owner = input;
            self
        }
        pub fn version(mut self, input: impl Into<std::string::String>) -> Self {
            self.version = Some(input.into());
            self
        }
        pub fn set_version(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.version = input;
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
        pub fn date_created(mut self, input: impl Into<std::string::String>) -> Self {
            self.date_created = Some(input.into());
            self
        }
        pub fn set_date_created(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.date_created = input;
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
        /// Consumes the builder and constructs a [`ImageRecipe`](crate::model::ImageRecipe)
        pub fn build(self) -> crate::model::ImageRecipe {
            crate::model::ImageRecipe {
                arn: self.arn,
                name: self.name,
                description: self.description,
                platform: self.platform,
                owner: self.owner,
                version: self.version,
                components: self.components,
                parent_image: self.parent_image,
                block_device_mappings: self.block_device_mappings,
                date_created: self.date_created,
                tags: self.tags,
                working_directory: self.working_directory,
            }
        }
    }
}

impl ImageRecipe {
    /// Creates a new builder-style object to manufacture [`ImageRecipe`](crate::model::ImageRecipe)
    pub fn builder() -> crate::model::image_recipe::Builder {
        crate::model::image_recipe::Builder::default()
    }
}

/// A summary of an image recipe.
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct ImageRecipeSummary {
    #[serde(rename = "arn")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub arn: std::option::Option<std::string::String>,
    #[serde(rename = "name")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,
    #[serde(rename = "platform")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub platform: std::option::Option<crate::model::Platform>,
    #[serde(rename = "owner")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub owner: std::option::Option<std::string::String>,
    #[serde(rename = "parentImage")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub parent_image: std::option::Option<std::string::String>,
    #[serde(rename = "dateCreated")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub date_created: std::option::Option<std::string::String>,
    #[serde(rename = "tags")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub tags: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
}
/// See [`ImageRecipeSummary`](crate::model::ImageRecipeSummary)
pub mod image_recipe_summary {
    /// A builder for [`ImageRecipeSummary`](crate::model::ImageRecipeSummary)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        arn: std::option::Option<std::string::String>,
        name: std::option::Option<std::string::String>,
        platform: std::option::Option<crate::model::Platform>,
        owner: std::option::Option<std::string::String>,
        parent_image: std::option::Option<std::string::String>,
        date_created: std::option::Option<std::string::String>,
        tags: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
    }
    impl Builder {
        pub fn arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.arn = Some(input.into());
            self
        }
        pub fn set_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.arn = input;
            self
        }
        pub fn name(mut self, input: impl Into<std::string::String>) -> Self {
            self.name = Some(input.into());
            self
        }
        pub fn set_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.name = input;
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
        pub fn owner(mut self, input: impl Into<std::string::String>) -> Self {
            self.owner = Some(input.into());
            self
        }
        pub fn set_owner(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.owner = input;
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
        pub fn date_created(mut self, input: impl Into<std::string::String>) -> Self {
            self.date_created = Some(input.into());
            self
        }
        pub fn set_date_created(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.date_created = input;
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
        /// Consumes the builder and constructs a [`ImageRecipeSummary`](crate::model::ImageRecipeSummary)
        pub fn build(self) -> crate::model::ImageRecipeSummary {
            crate::model::ImageRecipeSummary {
                arn: self.arn,
                name: self.name,
                platform: self.platform,
                owner: self.owner,
                parent_image: self.parent_image,
                date_created: self.date_created,
                tags: self.tags,
            }
        }
    }
}

impl ImageRecipeSummary {
    /// Creates a new builder-style object to manufacture [`ImageRecipeSummary`](crate::model::ImageRecipeSummary)
    pub fn builder() -> crate::model::image_recipe_summary::Builder {
        crate::model::image_recipe_summary::Builder::default()
    }
}

/// Image state shows the image status and the reason for that status.
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct ImageState {
    #[serde(rename = "status")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub status: std::option::Option<crate::model::ImageStatus>,
    #[serde(rename = "reason")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub reason: std::option::Option<std::string::String>,
}
/// See [`ImageState`](crate::model::ImageState)
pub mod image_state {
    /// A builder for [`ImageState`](crate::model::ImageState)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        status: std::option::Option<crate::model::ImageStatus>,
        reason: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn status(mut self, input: impl Into<crate::model::ImageStatus>) -> Self {
            self.status = Some(input.into());
            self
        }
        pub fn set_status(mut self, input: std::option::Option<crate::model::ImageStatus>) -> Self {
            self.status = input;
            self
        }
        pub fn reason(mut self, input: impl Into<std::string::String>) -> Self {
            self.reason = Some(input.into());
            self
        }
        pub fn set_reason(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.reason = input;
            self
        }
        /// Consumes the builder and constructs a [`ImageState`](crate::model::ImageState)
        pub fn build(self) -> crate::model::ImageState {
            crate::model::ImageState {
                status: self.status,
                reason: self.reason,
            }
        }
    }
}

impl ImageState {
    /// Creates a new builder-style object to manufacture [`ImageState`](crate::model::ImageState)
    pub fn builder() -> crate::model::image_state::Builder {
        crate::model::image_state::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum ImageStatus {
    Pending,
    Creating,
    Building,
    Testing,
    Distributing,
    Integrating,
    Available,
    Cancelled,
    Failed,
    Deprecated,
    Deleted,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for ImageStatus {
    fn from(s: &str) -> Self {
        match s {
            "PENDING" => ImageStatus::Pending,
            "CREATING" => ImageStatus::Creating,
            "BUILDING" => ImageStatus::Building,
            "TESTING" => ImageStatus::Testing,
            "DISTRIBUTING" => ImageStatus::Distributing,
            "INTEGRATING" => ImageStatus::Integrating,
            "AVAILABLE" => ImageStatus::Available,
            "CANCELLED" => ImageStatus::Cancelled,
            "FAILED" => ImageStatus::Failed,
            "DEPRECATED" => ImageStatus::Deprecated,
            "DELETED" => ImageStatus::Deleted,
            other => ImageStatus::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for ImageStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(ImageStatus::from(s))
    }
}
impl ImageStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ImageStatus::Pending => "PENDING",
            ImageStatus::Creating => "CREATING",
            ImageStatus::Building => "BUILDING",
            ImageStatus::Testing => "TESTING",
            ImageStatus::Distributing => "DISTRIBUTING",
            ImageStatus::Integrating => "INTEGRATING",
            ImageStatus::Available => "AVAILABLE",
            ImageStatus::Cancelled => "CANCELLED",
            ImageStatus::Failed => "FAILED",
            ImageStatus::Deprecated => "DEPRECATED",
            ImageStatus::Deleted => "DELETED",
            ImageStatus::Unknown(s) => s.as_ref(),
        }
    }
    pub fn values() -> &'static [&'static str] {
        &["PENDING", "CREATING", "BUILDING", "TESTING", "DISTRIBUTING", "INTEGRATING", "AVAILABLE", "CANCELLED", "FAILED", "DEPRECATED", "DELETED"]
    }
}
impl AsRef<str> for ImageStatus {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for ImageStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for ImageStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = std::string::String::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

/// An image summary.
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct ImageSummary {
    #[serde(rename = "arn")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub arn: std::option::Option<std::string::String>,
    #[serde(rename = "name")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,
    #[serde(rename = "version")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub version: std::option::Option<std::string::String>,
    #[serde(rename = "platform")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub platform: std::option::Option<crate::model::Platform>,
    #[serde(rename = "osVersion")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub os_version: std::option::Option<std::string::String>,
    #[serde(rename = "state")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub state: std::option::Option<crate::model::ImageState>,
    #[serde(rename = "owner")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub owner: std::option::Option<std::string::String>,
    #[serde(rename = "dateCreated")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub date_created: std::option::Option<std::string::String>,
    #[serde(rename = "outputResources")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub output_resources: std::option::Option<crate::model::OutputResources>,
    #[serde(rename = "tags")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub tags: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
}
/// See [`ImageSummary`](crate::model::ImageSummary)
pub mod image_summary {
    /// A builder for [`ImageSummary`](crate::model::ImageSummary)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        arn: std::option::Option<std::string::String>,
        name: std::option::Option<std::string::String>,
        version: std::option::Option<std::string::String>,
        platform: std::option::Option<crate::model::Platform>,
        os_version: std::option::Option<std::string::String>,
        state: std::option::Option<crate::model::ImageState>,
        owner: std::option::Option<std::string::String>,
        date_created: std::option::Option<std::string::String>,
        output_resources: std::option::Option<crate::model::OutputResources>,
        tags: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
    }
    impl Builder {
        pub fn arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.arn = Some(input.into());
            self
        }
        pub fn set_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.arn = input;
            self
        }
        pub fn name(mut self, input: impl Into<std::string::String>) -> Self {
            self.name = Some(input.into());
            self
        }
        pub fn set_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.name = input;
            self
        }
        pub fn version(mut self, input: impl Into<std::string::String>) -> Self {
            self.version = Some(input.into());
            self
        }
        pub fn set_version(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.version = input;
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
        pub fn os_version(mut self, input: impl Into<std::string::String>) -> Self {
            self.os_version = Some(input.into());
            self
        }
        pub fn set_os_version(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.os_version = input;
            self
        }
        pub fn state(mut self, input: impl Into<crate::model::ImageState>) -> Self {
            self.state = Some(input.into());
            self
        }
        pub fn set_state(mut self, input: std::option::Option<crate::model::ImageState>) -> Self {
            self.state = input;
            self
        }
        pub fn owner(mut self, input: impl Into<std::string::String>) -> Self {
            self.owner = Some(input.into());
            self
        }
        pub fn set_owner(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.owner = input;
            self
        }
        pub fn date_created(mut self, input: impl Into<std::string::String>) -> Self {
            self.date_created = Some(input.into());
            self
        }
        pub fn set_date_created(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.date_created = input;
            self
        }
        pub fn output_resources(mut self, input: impl Into<crate::model::OutputResources>) -> Self {
            self.output_resources = Some(input.into());
            self
        }
        pub fn set_output_resources(mut self, input: std::option::Option<crate::model::OutputResources>) -> Self {
            self.output_resources = input;
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
        /// Consumes the builder and constructs a [`ImageSummary`](crate::model::ImageSummary)
        pub fn build(self) -> crate::model::ImageSummary {
            crate::model::ImageSummary {
                arn: self.arn,
                name: self.name,
                version: self.version,
                platform: self.platform,
                os_version: self.os_version,
                state: self.state,
                owner: self.owner,
                date_created: self.date_created,
                output_resources: self.output_resources,
                tags: self.tags,
            }
        }
    }
}

impl ImageSummary {
    /// Creates a new builder-style object to manufacture [`ImageSummary`](crate::model::ImageSummary)
    pub fn builder() -> crate::model::image_summary::Builder {
        crate::model::image_summary::Builder::default()
    }
}

/// Image tests configuration.
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct ImageTestsConfiguration {
    #[serde(rename = "imageTestsEnabled")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub image_tests_enabled: std::option::Option<bool>,
    #[serde(rename = "timeoutMinutes")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub timeout_minutes: std::option::Option<i32>,
}
/// See [`ImageTestsConfiguration`](crate::model::ImageTestsConfiguration)
pub mod image_tests_configuration {
    /// A builder for [`ImageTestsConfiguration`](crate::model::ImageTestsConfiguration)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        image_tests_enabled: std::option::Option<bool>,
        timeout_minutes: std::option::Option<i32>,
    }
    impl Builder {
        pub fn image_tests_enabled(mut self, input: bool) -> Self {
            self.image_tests_enabled = Some(input);
            self
        }
        pub fn set_image_tests_enabled(mut self, input: std::option::Option<bool>) -> Self {
            self.image_tests_enabled = input;
            self
        }
        pub fn timeout_minutes(mut self, input: i32) -> Self {
            self.timeout_minutes = Some(input);
            self
        }
        pub fn set_timeout_minutes(mut self, input: std::option::Option<i32>) -> Self {
            self.timeout_minutes = input;
            self
        }
        /// Consumes the builder and constructs a [`ImageTestsConfiguration`](crate::model::ImageTestsConfiguration)
        pub fn build(self) -> crate::model::ImageTestsConfiguration {
            crate::model::ImageTestsConfiguration {
                image_tests_enabled: self.image_tests_enabled,
                timeout_minutes: self.timeout_minutes,
            }
        }
    }
}

impl ImageTestsConfiguration {
    /// Creates a new builder-style object to manufacture [`ImageTestsConfiguration`](crate::model::ImageTestsConfiguration)
    pub fn builder() -> crate::model::image_tests_configuration::Builder {
        crate::model::image_tests_configuration::Builder::default()
    }
}

/// An image semantic version.
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct ImageVersion {
    #[serde(rename = "arn")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub arn: std::option::Option<std::string::String>,
    #[serde(rename = "name")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,
    #[serde(rename = "version")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub version: std::option::Option<std::string::String>,
    #[serde(rename = "platform")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub platform: std::option::Option<crate::model::Platform>,
    #[serde(rename = "osVersion")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub os_version: std::option::Option<std::string::String>,
    #[serde(rename = "owner")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub owner: std::option::Option<std::string::String>,
    #[serde(rename = "dateCreated")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub date_created: std::option::Option<std::string::String>,
}
/// See [`ImageVersion`](crate::model::ImageVersion)
pub mod image_version {
    /// A builder for [`ImageVersion`](crate::model::ImageVersion)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        arn: std::option::Option<std::string::String>,
        name: std::option::Option<std::string::String>,
        version: std::option::Option<std::string::String>,
        platform: std::option::Option<crate::model::Platform>,
        os_version: std::option::Option<std::string::String>,
        owner: std::option::Option<std::string::String>,
        date_created: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.arn = Some(input.into());
            self
        }
        pub fn set_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.arn = input;
            self
        }
        pub fn name(mut self, input: impl Into<std::string::String>) -> Self {
            self.name = Some(input.into());
            self
        }
        pub fn set_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.name = input;
            self
        }
        pub fn version(mut self, input: impl Into<std::string::String>) -> Self {
            self.version = Some(input.into());
            self
        }
        pub fn set_version(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.version = input;
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
        pub fn os_version(mut self, input: impl Into<std::string::String>) -> Self {
            self.os_version = Some(input.into());
            self
        }
        pub fn set_os_version(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.os_version = input;
            self
        }
        pub fn owner(mut self, input: impl Into<std::string::String>) -> Self {
            self.owner = Some(input.into());
            self
        }
        pub fn set_owner(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.owner = input;
            self
        }
        pub fn date_created(mut self, input: impl Into<std::string::String>) -> Self {
            self.date_created = Some(input.into());
            self
        }
        pub fn set_date_created(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.date_created = input;
            self
        }
        /// Consumes the builder and constructs a [`ImageVersion`](crate::model::ImageVersion)
        pub fn build(self) -> crate::model::ImageVersion {
            crate::model::ImageVersion {
                arn: self.arn,
                name: self.name,
                version: self.version,
                platform: self.platform,
                os_version: self.os_version,
                owner: self.owner,
                date_created: self.date_created,
            }
        }
    }
}

impl ImageVersion {
    /// Creates a new builder-style object to manufacture [`ImageVersion`](crate::model::ImageVersion)
    pub fn builder() -> crate::model::image_version::Builder {
        crate::model::image_version::Builder::default()
    }
}

/// Details of the infrastructure configuration.
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct InfrastructureConfiguration {
    #[serde(rename = "arn")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub arn: std::option::Option<std::string::String>,
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
    #[serde(rename = "dateCreated")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub date_created: std::option::Option<std::string::String>,
    #[serde(rename = "dateUpdated")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub date_updated: std::option::Option<std::string::String>,
    #[serde(rename = "resourceTags")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub resource_tags: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
    #[serde(rename = "tags")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub tags: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
}
/// See [`InfrastructureConfiguration`](crate::model::InfrastructureConfiguration)
pub mod infrastructure_configuration {
    /// A builder for [`InfrastructureConfiguration`](crate::model::InfrastructureConfiguration)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        arn: std::option::Option<std::string::String>,
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
        date_created: std::option::Option<std::string::String>,
        date_updated: std::option::Option<std::string::String>,
        resource_tags: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
        tags: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
    }
    impl Builder {
        pub fn arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.arn = Some(input.into());
            self
        }
        pub fn set_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.arn = input;
            self
        }
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
        pub fn date_created(mut self, input: impl Into<std::string::String>) -> Self {
            self.date_created = Some(input.into());
            self
        }
        pub fn set_date_created(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.date_created = input;
            self
        }
        pub fn date_updated(mut self, input: impl Into<std::string::String>) -> Self {
            self.date_updated = Some(input.into());
            self
        }
        pub fn set_date_updated(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.date_updated = input;
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
        /// Consumes the builder and constructs a [`InfrastructureConfiguration`](crate::model::InfrastructureConfiguration)
        pub fn build(self) -> crate::model::InfrastructureConfiguration {
            crate::model::InfrastructureConfiguration {
                arn: self.arn,
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
                date_created: self.date_created,
                date_updated: self.date_updated,
                resource_tags: self.resource_tags,
                tags: self.tags,
            }
        }
    }
}

impl InfrastructureConfiguration {
    /// Creates a new builder-style object to manufacture [`InfrastructureConfiguration`](crate::model::InfrastructureConfiguration)
    pub fn builder() -> crate::model::infrastructure_configuration::Builder {
        crate::model::infrastructure_configuration::Builder::default()
    }
}

/// The infrastructure used when building EC2 AMIs.
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct InfrastructureConfigurationSummary {
    #[serde(rename = "arn")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub arn: std::option::Option<std::string::String>,
    #[serde(rename = "name")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,
    #[serde(rename = "description")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,
    #[serde(rename = "dateCreated")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub date_created: std::option::Option<std::string::String>,
    #[serde(rename = "dateUpdated")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub date_updated: std::option::Option<std::string::String>,
    #[serde(rename = "resourceTags")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub resource_tags: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
    #[serde(rename = "tags")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub tags: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
}
/// See [`InfrastructureConfigurationSummary`](crate::model::InfrastructureConfigurationSummary)
pub mod infrastructure_configuration_summary {
    /// A builder for [`InfrastructureConfigurationSummary`](crate::model::InfrastructureConfigurationSummary)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        arn: std::option::Option<std::string::String>,
        name: std::option::Option<std::string::String>,
        description: std::option::Option<std::string::String>,
        date_created: std::option::Option<std::string::String>,
        date_updated: std::option::Option<std::string::String>,
        resource_tags: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
        tags: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
    }
    impl Builder {
        pub fn arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.arn = Some(input.into());
            self
        }
        pub fn set_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.arn = input;
            self
        }
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
        pub fn date_created(mut self, input: impl Into<std::string::String>) -> Self {
            self.date_created = Some(input.into());
            self
        }
        pub fn set_date_created(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.date_created = input;
            self
        }
        pub fn date_updated(mut self, input: impl Into<std::string::String>) -> Self {
            self.date_updated = Some(input.into());
            self
        }
        pub fn set_date_updated(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.date_updated = input;
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
        /// Consumes the builder and constructs a [`InfrastructureConfigurationSummary`](crate::model::InfrastructureConfigurationSummary)
        pub fn build(self) -> crate::model::InfrastructureConfigurationSummary {
            crate::model::InfrastructureConfigurationSummary {
                arn: self.arn,
                name: self.name,
                description: self.description,
                date_created: self.date_created,
                date_updated: self.date_updated,
                resource_tags: self.resource_tags,
                tags: self.tags,
            }
        }
    }
}

impl InfrastructureConfigurationSummary {
    /// Creates a new builder-style object to manufacture [`InfrastructureConfigurationSummary`](crate::model::InfrastructureConfigurationSummary)
    pub fn builder() -> crate::model::infrastructure_configuration_summary::Builder {
        crate::model::infrastructure_configuration_summary::Builder::default()
    }
}

/// Defines block device mappings for the instance used to configure your image.
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct InstanceBlockDeviceMapping {
    #[serde(rename = "deviceName")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub device_name: std::option::Option<std::string::String>,
    #[serde(rename = "ebs")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub ebs: std::option::Option<crate::model::EbsInstanceBlockDeviceSpecification>,
    #[serde(rename = "virtualName")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub virtual_name: std::option::Option<std::string::String>,
    #[serde(rename = "noDevice")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub no_device: std::option::Option<std::string::String>,
}
/// See [`InstanceBlockDeviceMapping`](crate::model::InstanceBlockDeviceMapping)
pub mod instance_block_device_mapping {
    /// A builder for [`InstanceBlockDeviceMapping`](crate::model::InstanceBlockDeviceMapping)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        device_name: std::option::Option<std::string::String>,
        ebs: std::option::Option<crate::model::EbsInstanceBlockDeviceSpecification>,
        virtual_name: std::option::Option<std::string::String>,
        no_device: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn device_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.device_name = Some(input.into());
            self
        }
        pub fn set_device_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.device_name = input;
            self
        }
        pub fn ebs(mut self, input: impl Into<crate::model::EbsInstanceBlockDeviceSpecification>) -> Self {
            self.ebs = Some(input.into());
            self
        }
        pub fn set_ebs(mut self, input: std::option::Option<crate::model::EbsInstanceBlockDeviceSpecification>) -> Self {
            self.ebs = input;
            self
        }
        pub fn virtual_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.virtual_name = Some(input.into());
            self
        }
        pub fn set_virtual_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.virtual_name = input;
            self
        }
        pub fn no_device(mut self, input: impl Into<std::string::String>) -> Self {
            self.no_device = Some(input.into());
            self
        }
        pub fn set_no_device(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.no_device = input;
            self
        }
        /// Consumes the builder and constructs a [`InstanceBlockDeviceMapping`](crate::model::InstanceBlockDeviceMapping)
        pub fn build(self) -> crate::model::InstanceBlockDeviceMapping {
            crate::model::InstanceBlockDeviceMapping {
                device_name: self.device_name,
                ebs: self.ebs,
                virtual_name: self.virtual_name,
                no_device: self.no_device,
            }
        }
    }
}

impl InstanceBlockDeviceMapping {
    /// Creates a new builder-style object to manufacture [`InstanceBlockDeviceMapping`](crate::model::InstanceBlockDeviceMapping)
    pub fn builder() -> crate::model::instance_block_device_mapping::Builder {
        crate::model::instance_block_device_mapping::Builder::default()
    }
}

/// Describes the configuration for a launch permission.
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct LaunchPermissionConfiguration {
    #[serde(rename = "userIds")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub user_ids: std::option::Option<std::vec::Vec<std::string::String>>,
    #[serde(rename = "userGroups")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub user_groups: std::option::Option<std::vec::Vec<std::string::String>>,
}
/// See [`LaunchPermissionConfiguration`](crate::model::LaunchPermissionConfiguration)
pub mod launch_permission_configuration {
    /// A builder for [`LaunchPermissionConfiguration`](crate::model::LaunchPermissionConfiguration)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        user_ids: std::option::Option<std::vec::Vec<std::string::String>>,
        user_groups: std::option::Option<std::vec::Vec<std::string::String>>,
    }
    impl Builder {
        pub fn user_ids(mut self, input: impl Into<std::string::String>) -> Self {
            let mut v = self.user_ids.unwrap_or_default();
            v.push(input.into());
            self.user_ids = Some(v);
            self
        }
        pub fn set_user_ids(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.user_ids = input;
            self
        }
        pub fn user_groups(mut self, input: impl Into<std::string::String>) -> Self {
            let mut v = self.user_groups.unwrap_or_default();
            v.push(input.into());
            self.user_groups = Some(v);
            self
        }
        pub fn set_user_groups(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.user_groups = input;
            self
        }
        /// Consumes the builder and constructs a [`LaunchPermissionConfiguration`](crate::model::LaunchPermissionConfiguration)
        pub fn build(self) -> crate::model::LaunchPermissionConfiguration {
            crate::model::LaunchPermissionConfiguration {
                user_ids: self.user_ids,
                user_groups: self.user_groups,
            }
        }
    }
}

impl LaunchPermissionConfiguration {
    /// Creates a new builder-style object to manufacture [`LaunchPermissionConfiguration`](crate::model::LaunchPermissionConfiguration)
    pub fn builder() -> crate::model::launch_permission_configuration::Builder {
        crate::model::launch_permission_configuration::Builder::default()
    }
}

/// Logging configuration defines where Image Builder uploads your logs.
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct Logging {
    #[serde(rename = "s3Logs")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub s3_logs: std::option::Option<crate::model::S3Logs>,
}
/// See [`Logging`](crate::model::Logging)
pub mod logging {
    /// A builder for [`Logging`](crate::model::Logging)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        s3_logs: std::option::Option<crate::model::S3Logs>,
    }
    impl Builder {
        pub fn s3_logs(mut self, input: impl Into<crate::model::S3Logs>) -> Self {
            self.s3_logs = Some(input.into());
            self
        }
        pub fn set_s3_logs(mut self, input: std::option::Option<crate::model::S3Logs>) -> Self {
            self.s3_logs = input;
            self
        }
        /// Consumes the builder and constructs a [`Logging`](crate::model::Logging)
        pub fn build(self) -> crate::model::Logging {
            crate::model::Logging {
                s3_logs: self.s3_logs,
            }
        }
    }
}

impl Logging {
    /// Creates a new builder-style object to manufacture [`Logging`](crate::model::Logging)
    pub fn builder() -> crate::model::logging::Builder {
        crate::model::logging::Builder::default()
    }
}

/// The resources produced by this image.
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct OutputResources {
    #[serde(rename = "amis")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub amis: std::option::Option<std::vec::Vec<crate::model::Ami>>,
}
/// See [`OutputResources`](crate::model::OutputResources)
pub mod output_resources {
    /// A builder for [`OutputResources`](crate::model::OutputResources)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        amis: std::option::Option<std::vec::Vec<crate::model::Ami>>,
    }
    impl Builder {
        pub fn amis(mut self, input: impl Into<crate::model::Ami>) -> Self {
            let mut v = self.amis.unwrap_or_default();
            v.push(input.into());
            self.amis = Some(v);
            self
        }
        pub fn set_amis(mut self, input: std::option::Option<std::vec::Vec<crate::model::Ami>>) -> Self {
            self.amis = input;
            self
        }
        /// Consumes the builder and constructs a [`OutputResources`](crate::model::OutputResources)
        pub fn build(self) -> crate::model::OutputResources {
            crate::model::OutputResources {
                amis: self.amis,
            }
        }
    }
}

impl OutputResources {
    /// Creates a new builder-style object to manufacture [`OutputResources`](crate::model::OutputResources)
    pub fn builder() -> crate::model::output_resources::Builder {
        crate::model::output_resources::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum Ownership {
    SelfValue,
    Shared,
    Amazon,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for Ownership {
    fn from(s: &str) -> Self {
        match s {
            "Self" => Ownership::SelfValue,
            "Shared" => Ownership::Shared,
            "Amazon" => Ownership::Amazon,
            other => Ownership::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for Ownership {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Ownership::from(s))
    }
}
impl Ownership {
    pub fn as_str(&self) -> &str {
        match self {
            Ownership::SelfValue => "Self",
            Ownership::Shared => "Shared",
            Ownership::Amazon => "Amazon",
            Ownership::Unknown(s) => s.as_ref(),
        }
    }
    pub fn values() -> &'static [&'static str] {
        &["Self", "Shared", "Amazon"]
    }
}
impl AsRef<str> for Ownership {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for Ownership {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for Ownership {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = std::string::String::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum PipelineExecutionStartCondition {
    ExpressionMatchOnly,
    ExpressionMatchAndDependencyUpdatesAvailable,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for PipelineExecutionStartCondition {
    fn from(s: &str) -> Self {
        match s {
            "EXPRESSION_MATCH_ONLY" => PipelineExecutionStartCondition::ExpressionMatchOnly,
            "EXPRESSION_MATCH_AND_DEPENDENCY_UPDATES_AVAILABLE" => PipelineExecutionStartCondition::ExpressionMatchAndDependencyUpdatesAvailable,
            other => PipelineExecutionStartCondition::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for PipelineExecutionStartCondition {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(PipelineExecutionStartCondition::from(s))
    }
}
impl PipelineExecutionStartCondition {
    pub fn as_str(&self) -> &str {
        match self {
            PipelineExecutionStartCondition::ExpressionMatchOnly => "EXPRESSION_MATCH_ONLY",
            PipelineExecutionStartCondition::ExpressionMatchAndDependencyUpdatesAvailable => "EXPRESSION_MATCH_AND_DEPENDENCY_UPDATES_AVAILABLE",
            PipelineExecutionStartCondition::Unknown(s) => s.as_ref(),
        }
    }
    pub fn values() -> &'static [&'static str] {
        &["EXPRESSION_MATCH_ONLY", "EXPRESSION_MATCH_AND_DEPENDENCY_UPDATES_AVAILABLE"]
    }
}
impl AsRef<str> for PipelineExecutionStartCondition {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for PipelineExecutionStartCondition {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for PipelineExecutionStartCondition {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = std::string::String::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum PipelineStatus {
    Disabled,
    Enabled,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for PipelineStatus {
    fn from(s: &str) -> Self {
        match s {
            "DISABLED" => PipelineStatus::Disabled,
            "ENABLED" => PipelineStatus::Enabled,
            other => PipelineStatus::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for PipelineStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(PipelineStatus::from(s))
    }
}
impl PipelineStatus {
    pub fn as_str(&self) -> &str {
        match self {
            PipelineStatus::Disabled => "DISABLED",
            PipelineStatus::Enabled => "ENABLED",
            PipelineStatus::Unknown(s) => s.as_ref(),
        }
    }
    pub fn values() -> &'static [&'static str] {
        &["DISABLED", "ENABLED"]
    }
}
impl AsRef<str> for PipelineStatus {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for PipelineStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for PipelineStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = std::string::String::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum Platform {
    Windows,
    Linux,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for Platform {
    fn from(s: &str) -> Self {
        match s {
            "Windows" => Platform::Windows,
            "Linux" => Platform::Linux,
            other => Platform::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for Platform {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Platform::from(s))
    }
}
impl Platform {
    pub fn as_str(&self) -> &str {
        match self {
            Platform::Windows => "Windows",
            Platform::Linux => "Linux",
            Platform::Unknown(s) => s.as_ref(),
        }
    }
    pub fn values() -> &'static [&'static str] {
        &["Windows", "Linux"]
    }
}
impl AsRef<str> for Platform {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for Platform {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for Platform {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = std::string::String::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

/// Amazon S3 logging configuration.
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct S3Logs {
    #[serde(rename = "s3BucketName")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub s3_bucket_name: std::option::Option<std::string::String>,
    #[serde(rename = "s3KeyPrefix")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub s3_key_prefix: std::option::Option<std::string::String>,
}
/// See [`S3Logs`](crate::model::S3Logs)
pub mod s3_logs {
    /// A builder for [`S3Logs`](crate::model::S3Logs)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        s3_bucket_name: std::option::Option<std::string::String>,
        s3_key_prefix: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn s3_bucket_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.s3_bucket_name = Some(input.into());
            self
        }
        pub fn set_s3_bucket_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.s3_bucket_name = input;
            self
        }
        pub fn s3_key_prefix(mut self, input: impl Into<std::string::String>) -> Self {
            self.s3_key_prefix = Some(input.into());
            self
        }
        pub fn set_s3_key_prefix(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.s3_key_prefix = input;
            self
        }
        /// Consumes the builder and constructs a [`S3Logs`](crate::model::S3Logs)
        pub fn build(self) -> crate::model::S3Logs {
            crate::model::S3Logs {
                s3_bucket_name: self.s3_bucket_name,
                s3_key_prefix: self.s3_key_prefix,
            }
        }
    }
}

impl S3Logs {
    /// Creates a new builder-style object to manufacture [`S3Logs`](crate::model::S3Logs)
    pub fn builder() -> crate::model::s3_logs::Builder {
        crate::model::s3_logs::Builder::default()
    }
}

/// A schedule configures how often and when a pipeline will automatically create a new image.
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct Schedule {
    #[serde(rename = "scheduleExpression")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub schedule_expression: std::option::Option<std::string::String>,
    #[serde(rename = "pipelineExecutionStartCondition")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub pipeline_execution_start_condition: std::option::Option<crate::model::PipelineExecutionStartCondition>,
}
/// See [`Schedule`](crate::model::Schedule)
pub mod schedule {
    /// A builder for [`Schedule`](crate::model::Schedule)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        schedule_expression: std::option::Option<std::string::String>,
        pipeline_execution_start_condition: std::option::Option<crate::model::PipelineExecutionStartCondition>,
    }
    impl Builder {
        pub fn schedule_expression(mut self, input: impl Into<std::string::String>) -> Self {
            self.schedule_expression = Some(input.into());
            self
        }
        pub fn set_schedule_expression(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.schedule_expression = input;
            self
        }
        pub fn pipeline_execution_start_condition(mut self, input: impl Into<crate::model::PipelineExecutionStartCondition>) -> Self {
            self.pipeline_execution_start_condition = Some(input.into());
            self
        }
        pub fn set_pipeline_execution_start_condition(mut self, input: std::option::Option<crate::model::PipelineExecutionStartCondition>) -> Self {
            self.pipeline_execution_start_condition = input;
            self
        }
        /// Consumes the builder and constructs a [`Schedule`](crate::model::Schedule)
        pub fn build(self) -> crate::model::Schedule {
            crate::model::Schedule {
                schedule_expression: self.schedule_expression,
                pipeline_execution_start_condition: self.pipeline_execution_start_condition,
            }
        }
    }
}

impl Schedule {
    /// Creates a new builder-style object to manufacture [`Schedule`](crate::model::Schedule)
    pub fn builder() -> crate::model::schedule::Builder {
        crate::model::schedule::Builder::default()
    }
}
#[cfg(test)]
mod test {
    use crate::model::{
        AmiDistributionConfiguration, Component, ComponentType, Distribution, ImageStatus,
        Ownership, Platform,
    };
    use proptest::prelude::*;

    #[test]
    fn enum_values_keep_their_wire_spelling() {
        assert_eq!(Ownership::SelfValue.as_str(), "Self");
        assert_eq!(Ownership::from("Self"), Ownership::SelfValue);
        assert_eq!(Ownership::values(), &["Self", "Shared", "Amazon"]);
        assert_eq!("AVAILABLE".parse::<ImageStatus>(), Ok(ImageStatus::Available));
        assert_eq!(
            Platform::from("MacOS"),
            Platform::Unknown("MacOS".to_string())
        );
    }

    #[test]
    fn unknown_enum_values_deserialize() {
        let status: ImageStatus = serde_json::from_str(r#""ROLLING_BACK""#).unwrap();
        assert_eq!(status, ImageStatus::Unknown("ROLLING_BACK".to_string()));
        assert_eq!(serde_json::to_string(&status).unwrap(), r#""ROLLING_BACK""#);
    }

    #[test]
    fn distribution_uses_camel_case_and_skips_unset_members() {
        let distribution = Distribution::builder()
            .region("us-west-2")
            .ami_distribution_configuration(
                AmiDistributionConfiguration::builder()
                    .name("golden-{{ imagebuilder:buildDate }}")
                    .ami_tags("team", "platform")
                    .build(),
            )
            .build();
        let json: serde_json::Value = serde_json::to_value(&distribution).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "region": "us-west-2",
                "amiDistributionConfiguration": {
                    "name": "golden-{{ imagebuilder:buildDate }}",
                    "amiTags": { "team": "platform" }
                }
            })
        );
    }

    #[test]
    fn component_type_member_round_trips() {
        let component: Component = serde_json::from_str(
            r#"{
                "arn": "arn:aws:imagebuilder:us-west-2:123456789012:component/hello/1.0.0/1",
                "name": "hello",
                "type": "BUILD",
                "platform": "Linux",
                "encrypted": true,
                "supportedOsVersions": ["Amazon Linux 2"],
                "dateCreated": "2020-12-01T19:35:36.000Z"
            }"#,
        )
        .unwrap();
        assert_eq!(component.r#type, Some(ComponentType::Build));
        assert_eq!(component.platform, Some(Platform::Linux));
        assert_eq!(component.encrypted, Some(true));
        assert_eq!(component.tags, None);
        let reparsed: Component =
            serde_json::from_slice(&serde_json::to_vec(&component).unwrap()).unwrap();
        assert_eq!(reparsed, component);
    }

    #[test]
    fn nested_image_survives_a_round_trip() {
        let output: crate::output::GetImageOutput = serde_json::from_str(
            r#"{
                "requestId": "r-1",
                "image": {
                    "arn": "arn:aws:imagebuilder:us-west-2:123456789012:image/web/1.0.0/1",
                    "name": "web",
                    "state": { "status": "AVAILABLE" },
                    "imageRecipe": {
                        "name": "web-recipe",
                        "components": [
                            { "componentArn": "arn:aws:imagebuilder:us-west-2:aws:component/update-linux/1.0.0" }
                        ],
                        "blockDeviceMappings": [
                            { "deviceName": "/dev/xvda", "ebs": { "volumeSize": 20, "encrypted": true } }
                        ],
                        "tags": { "team": "platform", "stage": "prod" }
                    },
                    "outputResources": {
                        "amis": [ { "region": "us-west-2", "image": "ami-0123456789abcdef0" } ]
                    }
                }
            }"#,
        )
        .unwrap();
        let image = output.image.expect("image was sent");
        let recipe = image.image_recipe.as_ref().expect("recipe was sent");
        assert_eq!(
            recipe.tags.as_ref().and_then(|tags| tags.get("stage")).map(String::as_str),
            Some("prod")
        );
        assert_eq!(
            recipe.block_device_mappings.as_ref().unwrap()[0]
                .ebs
                .as_ref()
                .and_then(|ebs| ebs.volume_size),
            Some(20)
        );
        assert_eq!(
            image.state.as_ref().and_then(|state| state.status.clone()),
            Some(ImageStatus::Available)
        );
        let reparsed: crate::model::Image =
            serde_json::from_slice(&serde_json::to_vec(&image).unwrap()).unwrap();
        assert_eq!(reparsed, image);
    }

    proptest! {
        #[test]
        fn enum_strings_round_trip(s in ".*") {
            let status = ImageStatus::from(s.as_str());
            prop_assert_eq!(status.as_str(), s.as_str());
            let owner = Ownership::from(s.as_str());
            prop_assert_eq!(owner.as_str(), s.as_str());
        }
    }
}
