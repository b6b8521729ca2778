/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/// The address that you want the Snow device(s) associated with a specific job to be shipped to.
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct Address {
    #[serde(rename = "AddressId")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub address_id: std::option::Option<std::string::String>,
    #[serde(rename = "Name")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,
    #[serde(rename = "Company")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub company: std::option::Option<std::string::String>,
    #[serde(rename = "Street1")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub street1: std::option::Option<std::string::String>,
    #[serde(rename = "Street2")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub street2: std::option::Option<std::string::String>,
    #[serde(rename = "Street3")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub street3: std::option::Option<std::string::String>,
    #[serde(rename = "City")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub city: std::option::Option<std::string::String>,
    #[serde(rename = "StateOrProvince")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub state_or_province: std::option::Option<std::string::String>,
    #[serde(rename = "PrefectureOrDistrict")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub prefecture_or_district: std::option::Option<std::string::String>,
    #[serde(rename = "Landmark")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub landmark: std::option::Option<std::string::String>,
    #[serde(rename = "Country")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub country: std::option::Option<std::string::String>,
    #[serde(rename = "PostalCode")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub postal_code: std::option::Option<std::string::String>,
    #[serde(rename = "PhoneNumber")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub phone_number: std::option::Option<std::string::String>,
    #[serde(rename = "IsRestricted")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_restricted: std::option::Option<bool>,
}
/// See [`Address`](crate::model::Address)
pub mod address {
    /// A builder for [`Address`](crate::model::Address)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        address_id: std::option::Option<std::string::String>,
        name: std::option::Option<std::string::String>,
        company: std::option::Option<std::string::String>,
        street1: std::option::Option<std::string::String>,
        street2: std::option::Option<std::string::String>,
        street3: std::option::Option<std::string::String>,
        city: std::option::Option<std::string::String>,
        state_or_province: std::option::Option<std::string::String>,
        prefecture_or_district: std::option::Option<std::string::String>,
        landmark: std::option::Option<std::string::String>,
        country: std::option::Option<std::string::String>,
        postal_code: std::option::Option<std::string::String>,
        phone_number: std::option::Option<std::string::String>,
        is_restricted: std::option::Option<bool>,
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
        pub fn name(mut self, input: impl Into<std::string::String>) -> Self {
            self.name = Some(input.into());
            self
        }
        pub fn set_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.name = input;
            self
        }
        pub fn company(mut self, input: impl Into<std::string::String>) -> Self {
            self.company = Some(input.into());
            self
        }
        pub fn set_company(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.company = input;
            self
        }
        pub fn street1(mut self, input: impl Into<std::string::String>) -> Self {
            self.street1 = Some(input.into());
            self
        }
        pub fn set_street1(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.street1 = input;
            self
        }
        pub fn street2(mut self, input: impl Into<std::string::String>) -> Self {
            self.street2 = Some(input.into());
            self
        }
        pub fn set_street2(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.street2 = input;
            self
        }
        pub fn street3(mut self, input: impl Into<std::string::String>) -> Self {
            self.street3 = Some(input.into());
            self
        }
        pub fn set_street3(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.street3 = input;
            self
        }
        pub fn city(mut self, input: impl Into<std::string::String>) -> Self {
            self.city = Some(input.into());
            self
        }
        pub fn set_city(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.city = input;
            self
        }
        pub fn state_or_province(mut self, input: impl Into<std::string::String>) -> Self {
            self.state_or_province = Some(input.into());
            self
        }
        pub fn set_state_or_province(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.state_or_province = input;
            self
        }
        pub fn prefecture_or_district(mut self, input: impl Into<std::string::String>) -> Self {
            self.prefecture_or_district = Some(input.into());
            self
        }
        pub fn set_prefecture_or_district(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.prefecture_or_district = input;
            self
        }
        pub fn landmark(mut self, input: impl Into<std::string::String>) -> Self {
            self.landmark = Some(input.into());
            self
        }
        pub fn set_landmark(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.landmark = input;
            self
        }
        pub fn country(mut self, input: impl Into<std::string::String>) -> Self {
            self.country = Some(input.into());
            self
        }
        pub fn set_country(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.country = input;
            self
        }
        pub fn postal_code(mut self, input: impl Into<std::string::String>) -> Self {
            self.postal_code = Some(input.into());
            self
        }
        pub fn set_postal_code(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.postal_code = input;
            self
        }
        pub fn phone_number(mut self, input: impl Into<std::string::String>) -> Self {
            self.phone_number = Some(input.into());
            self
        }
        pub fn set_phone_number(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.phone_number = input;
            self
        }
        pub fn is_restricted(mut self, input: bool) -> Self {
            self.is_restricted = Some(input);
            self
        }
        pub fn set_is_restricted(mut self, input: std::option::Option<bool>) -> Self {
            self.is_restricted = input;
            self
        }
        /// Consumes the builder and constructs a [`Address`](crate::model::Address)
        pub fn build(self) -> crate::model::Address {
            crate::model::Address {
                address_id: self.address_id,
                name: self.name,
                company: self.company,
                street1: self.street1,
                street2: self.street2,
                street3: self.street3,
                city: self.city,
                state_or_province: self.state_or_province,
                prefecture_or_district: self.prefecture_or_district,
                landmark: self.landmark,
                country: self.country,
                postal_code: self.postal_code,
                phone_number: self.phone_number,
                is_restricted: self.is_restricted,
            }
        }
    }
}

impl Address {
    /// Creates a new builder-style object to manufacture [`Address`](crate::model::Address)
    pub fn builder() -> crate::model::address::Builder {
        crate::model::address::Builder::default()
    }
}

/// Contains a cluster's state, a cluster's ID, and other important information.
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct ClusterListEntry {
    #[serde(rename = "ClusterId")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub cluster_id: std::option::Option<std::string::String>,
    #[serde(rename = "ClusterState")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub cluster_state: std::option::Option<crate::model::ClusterState>,
    #[serde(rename = "CreationDate")]
    #[serde(with = "crate::serde_util::optional_epoch_seconds")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub creation_date: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "Description")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,
}
/// See [`ClusterListEntry`](crate::model::ClusterListEntry)
pub mod cluster_list_entry {
    /// A builder for [`ClusterListEntry`](crate::model::ClusterListEntry)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        cluster_id: std::option::Option<std::string::String>,
        cluster_state: std::option::Option<crate::model::ClusterState>,
        creation_date: std::option::Option<smithy_types::Instant>,
        description: std::option::Option<std::string::String>,
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
        pub fn cluster_state(mut self, input: impl Into<crate::model::ClusterState>) -> Self {
            self.cluster_state = Some(input.into());
            self
        }
        pub fn set_cluster_state(mut self, input: std::option::Option<crate::model::ClusterState>) -> Self {
            self.cluster_state = input;
            self
        }
        pub fn creation_date(mut self, input: smithy_types::Instant) -> Self {
            self.creation_date = Some(input);
            self
        }
        pub fn set_creation_date(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.creation_date = input;
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
        /// Consumes the builder and constructs a [`ClusterListEntry`](crate::model::ClusterListEntry)
        pub fn build(self) -> crate::model::ClusterListEntry {
            crate::model::ClusterListEntry {
                cluster_id: self.cluster_id,
                cluster_state: self.cluster_state,
                creation_date: self.creation_date,
                description: self.description,
            }
        }
    }
}

impl ClusterListEntry {
    /// Creates a new builder-style object to manufacture [`ClusterListEntry`](crate::model::ClusterListEntry)
    pub fn builder() -> crate::model::cluster_list_entry::Builder {
        crate::model::cluster_list_entry::Builder::default()
    }
}

/// Contains metadata about a specific cluster.
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct ClusterMetadata {
    #[serde(rename = "ClusterId")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub cluster_id: std::option::Option<std::string::String>,
    #[serde(rename = "Description")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,
    #[serde(rename = "KmsKeyARN")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub kms_key_arn: std::option::Option<std::string::String>,
    #[serde(rename = "RoleARN")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub role_arn: std::option::Option<std::string::String>,
    #[serde(rename = "ClusterState")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub cluster_state: std::option::Option<crate::model::ClusterState>,
    #[serde(rename = "JobType")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub job_type: std::option::Option<crate::model::JobType>,
    #[serde(rename = "SnowballType")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub snowball_type: std::option::Option<crate::model::SnowballType>,
    #[serde(rename = "CreationDate")]
    #[serde(with = "crate::serde_util::optional_epoch_seconds")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub creation_date: std::option::Option<smithy_types::Instant>,
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
    #[serde(rename = "TaxDocuments")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub tax_documents: std::option::Option<crate::model::TaxDocuments>,
}
/// See [`ClusterMetadata`](crate::model::ClusterMetadata)
pub mod cluster_metadata {
    /// A builder for [`ClusterMetadata`](crate::model::ClusterMetadata)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        cluster_id: std::option::Option<std::string::String>,
        description: std::option::Option<std::string::String>,
        kms_key_arn: std::option::Option<std::string::String>,
        role_arn: std::option::Option<std::string::String>,
        cluster_state: std::option::Option<crate::model::ClusterState>,
        job_type: std::option::Option<crate::model::JobType>,
        snowball_type: std::option::Option<crate::model::SnowballType>,
        creation_date: std::option::Option<smithy_types::Instant>,
        resources: std::option::Option<crate::model::JobResource>,
        address_id: std::option::Option<std::string::String>,
        shipping_option: std::option::Option<crate::model::ShippingOption>,
        notification: std::option::Option<crate::model::Notification>,
        forwarding_address_id: std::option::Option<std::string::String>,
        tax_documents: std::option::Option<crate::model::TaxDocuments>,
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
        pub fn description(mut self, input: impl Into<std::string::String>) -> Self {
            self.description = Some(input.into());
            self
        }
        pub fn set_description(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.description = input;
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
        pub fn cluster_state(mut self, input: impl Into<crate::model::ClusterState>) -> Self {
            self.cluster_state = Some(input.into());
            self
        }
        pub fn set_cluster_state(mut self, input: std::option::Option<crate::model::ClusterState>) -> Self {
            self.cluster_state = input;
            self
        }
        pub fn job_type(mut self, input: impl Into<crate::model::JobType>) -> Self {
            self.job_type = Some(input.into());
            self
        }
        pub fn set_job_type(mut self, input: std::option::Option<crate::model::JobType>) -> Self {
            self.job_type = input;
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
        pub fn creation_date(mut self, input: smithy_types::Instant) -> Self {
            self.creation_date = Some(input);
            self
        }
        pub fn set_creation_date(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.creation_date = input;
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
        pub fn tax_documents(mut self, input: impl Into<crate::model::TaxDocuments>) -> Self {
            self.tax_documents = Some(input.into());
            self
        }
        pub fn set_tax_documents(mut self, input: std::option::Option<crate::model::TaxDocuments>) -> Self {
            self.tax_documents = input;
            self
        }
        /// Consumes the builder and constructs a [`ClusterMetadata`](crate::model::ClusterMetadata)
        pub fn build(self) -> crate::model::ClusterMetadata {
            crate::model::ClusterMetadata {
                cluster_id: self.cluster_id,
                description: self.description,
                kms_key_arn: self.kms_key_arn,
                role_arn: self.role_arn,
                cluster_state: self.cluster_state,
                job_type: self.job_type,
                snowball_type: self.snowball_type,
                creation_date: self.creation_date,
                resources: self.resources,
                address_id: self.address_id,
                shipping_option: self.shipping_option,
                notification: self.notification,
                forwarding_address_id: self.forwarding_address_id,
                tax_documents: self.tax_documents,
            }
        }
    }
}

impl ClusterMetadata {
    /// Creates a new builder-style object to manufacture [`ClusterMetadata`](crate::model::ClusterMetadata)
    pub fn builder() -> crate::model::cluster_metadata::Builder {
        crate::model::cluster_metadata::Builder::default()
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
pub enum ClusterState {
    AwaitingQuorum,
    Pending,
    InUse,
    Complete,
    Cancelled,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for ClusterState {
    fn from(s: &str) -> Self {
        match s {
            "AwaitingQuorum" => ClusterState::AwaitingQuorum,
            "Pending" => ClusterState::Pending,
            "InUse" => ClusterState::InUse,
            "Complete" => ClusterState::Complete,
            "Cancelled" => ClusterState::Cancelled,
            other => ClusterState::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for ClusterState {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(ClusterState::from(s))
    }
}
impl ClusterState {
    pub fn as_str(&self) -> &str {
        match self {
            ClusterState::AwaitingQuorum => "AwaitingQuorum",
            ClusterState::Pending => "Pending",
            ClusterState::InUse => "InUse",
            ClusterState::Complete => "Complete",
            ClusterState::Cancelled => "Cancelled",
            ClusterState::Unknown(s) => s.as_ref(),
        }
    }
    pub fn values() -> &'static [&'static str] {
        &["AwaitingQuorum", "Pending", "InUse", "Complete", "Cancelled"]
    }
}
impl AsRef<str> for ClusterState {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for ClusterState {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for ClusterState {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = std::string::String::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

/// A JSON-formatted object that describes a compatible Amazon Machine Image (AMI).
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct CompatibleImage {
    #[serde(rename = "AmiId")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub ami_id: std::option::Option<std::string::String>,
    #[serde(rename = "Name")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,
}
/// See [`CompatibleImage`](crate::model::CompatibleImage)
pub mod compatible_image {
    /// A builder for [`CompatibleImage`](crate::model::CompatibleImage)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        ami_id: std::option::Option<std::string::String>,
        name: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn ami_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.ami_id = Some(input.into());
            self
        }
        pub fn set_ami_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.ami_id = input;
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
        /// Consumes the builder and constructs a [`CompatibleImage`](crate::model::CompatibleImage)
        pub fn build(self) -> crate::model::CompatibleImage {
            crate::model::CompatibleImage {
                ami_id: self.ami_id,
                name: self.name,
            }
        }
    }
}

impl CompatibleImage {
    /// Creates a new builder-style object to manufacture [`CompatibleImage`](crate::model::CompatibleImage)
    pub fn builder() -> crate::model::compatible_image::Builder {
        crate::model::compatible_image::Builder::default()
    }
}

/// Defines the real-time status of a Snow device's data transfer while the device is at AWS.
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct DataTransfer {
    #[serde(rename = "BytesTransferred")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub bytes_transferred: std::option::Option<i64>,
    #[serde(rename = "ObjectsTransferred")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub objects_transferred: std::option::Option<i64>,
    #[serde(rename = "TotalBytes")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub total_bytes: std::option::Option<i64>,
    #[serde(rename = "TotalObjects")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub total_objects: std::option::Option<i64>,
}
/// See [`DataTransfer`](crate::model::DataTransfer)
pub mod data_transfer {
    /// A builder for [`DataTransfer`](crate::model::DataTransfer)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        bytes_transferred: std::option::Option<i64>,
        objects_transferred: std::option::Option<i64>,
        total_bytes: std::option::Option<i64>,
        total_objects: std::option::Option<i64>,
    }
    impl Builder {
        pub fn bytes_transferred(mut self, input: i64) -> Self {
            self.bytes_transferred = Some(input);
            self
        }
        pub fn set_bytes_transferred(mut self, input: std::option::Option<i64>) -> Self {
            self.bytes_transferred = input;
            self
        }
        pub fn objects_transferred(mut self, input: i64) -> Self {
            self.objects_transferred = Some(input);
            self
        }
        pub fn set_objects_transferred(mut self, input: std::option::Option<i64>) -> Self {
            self.objects_transferred = input;
            self
        }
        pub fn total_bytes(mut self, input: i64) -> Self {
            self.total_bytes = Some(input);
            self
        }
        pub fn set_total_bytes(mut self, input: std::option::Option<i64>) -> Self {
            self.total_bytes = input;
            self
        }
        pub fn total_objects(mut self, input: i64) -> Self {
            self.total_objects = Some(input);
            self
        }
        pub fn set_total_objects(mut self, input: std::option::Option<i64>) -> Self {
            self.total_objects = input;
            self
        }
        /// Consumes the builder and constructs a [`DataTransfer`](crate::model::DataTransfer)
        pub fn build(self) -> crate::model::DataTransfer {
            crate::model::DataTransfer {
                bytes_transferred: self.bytes_transferred,
                objects_transferred: self.objects_transferred,
                total_bytes: self.total_bytes,
                total_objects: self.total_objects,
            }
        }
    }
}

impl DataTransfer {
    /// Creates a new builder-style object to manufacture [`DataTransfer`](crate::model::DataTransfer)
    pub fn builder() -> crate::model::data_transfer::Builder {
        crate::model::data_transfer::Builder::default()
    }
}

/// The container for `SnowconeDeviceConfiguration`.
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct DeviceConfiguration {
    #[serde(rename = "SnowconeDeviceConfiguration")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub snowcone_device_configuration: std::option::Option<crate::model::SnowconeDeviceConfiguration>,
}
/// See [`DeviceConfiguration`](crate::model::DeviceConfiguration)
pub mod device_configuration {
    /// A builder for [`DeviceConfiguration`](crate::model::DeviceConfiguration)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        snowcone_device_configuration: std::option::Option<crate::model::SnowconeDeviceConfiguration>,
    }
    impl Builder {
        pub fn snowcone_device_configuration(mut self, input: impl Into<crate::model::SnowconeDeviceConfiguration>) -> Self {
            self.snowcone_device_configuration = Some(input.into());
            self
        }
        pub fn set_snowcone_device_configuration(mut self, input: std::option::Option<crate::model::SnowconeDeviceConfiguration>) -> Self {
            self.snowcone_device_configuration = input;
            self
        }
        /// Consumes the builder and constructs a [`DeviceConfiguration`](crate::model::DeviceConfiguration)
        pub fn build(self) -> crate::model::DeviceConfiguration {
            crate::model::DeviceConfiguration {
                snowcone_device_configuration: self.snowcone_device_configuration,
            }
        }
    }
}

impl DeviceConfiguration {
    /// Creates a new builder-style object to manufacture [`DeviceConfiguration`](crate::model::DeviceConfiguration)
    pub fn builder() -> crate::model::device_configuration::Builder {
        crate::model::device_configuration::Builder::default()
    }
}

/// A JSON-formatted object that contains the IDs for an Amazon Machine Image (AMI).
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct Ec2AmiResource {
    #[serde(rename = "AmiId")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub ami_id: std::option::Option<std::string::String>,
    #[serde(rename = "SnowballAmiId")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub snowball_ami_id: std::option::Option<std::string::String>,
}
/// See [`Ec2AmiResource`](crate::model::Ec2AmiResource)
pub mod ec2_ami_resource {
    /// A builder for [`Ec2AmiResource`](crate::model::Ec2AmiResource)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        ami_id: std::option::Option<std::string::String>,
        snowball_ami_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn ami_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.ami_id = Some(input.into());
            self
        }
        pub fn set_ami_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.ami_id = input;
            self
        }
        pub fn snowball_ami_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.snowball_ami_id = Some(input.into());
            self
        }
        pub fn set_snowball_ami_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.snowball_ami_id = input;
            self
        }
        /// Consumes the builder and constructs a [`Ec2AmiResource`](crate::model::Ec2AmiResource)
        pub fn build(self) -> crate::model::Ec2AmiResource {
            crate::model::Ec2AmiResource {
                ami_id: self.ami_id,
                snowball_ami_id: self.snowball_ami_id,
            }
        }
    }
}

impl Ec2AmiResource {
    /// Creates a new builder-style object to manufacture [`Ec2AmiResource`](crate::model::Ec2AmiResource)
    pub fn builder() -> crate::model::ec2_ami_resource::Builder {
        crate::model::ec2_ami_resource::Builder::default()
    }
}

/// The container for the EventTriggerDefinition$EventResourceARN.
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct EventTriggerDefinition {
    #[serde(rename = "EventResourceARN")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub event_resource_arn: std::option::Option<std::string::String>,
}
/// See [`EventTriggerDefinition`](crate::model::EventTriggerDefinition)
pub mod event_trigger_definition {
    /// A builder for [`EventTriggerDefinition`](crate::model::EventTriggerDefinition)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        event_resource_arn: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn event_resource_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.event_resource_arn = Some(input.into());
            self
        }
        pub fn set_event_resource_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.event_resource_arn = input;
            self
        }
        /// Consumes the builder and constructs a [`EventTriggerDefinition`](crate::model::EventTriggerDefinition)
        pub fn build(self) -> crate::model::EventTriggerDefinition {
            crate::model::EventTriggerDefinition {
                event_resource_arn: self.event_resource_arn,
            }
        }
    }
}

impl EventTriggerDefinition {
    /// Creates a new builder-style object to manufacture [`EventTriggerDefinition`](crate::model::EventTriggerDefinition)
    pub fn builder() -> crate::model::event_trigger_definition::Builder {
        crate::model::event_trigger_definition::Builder::default()
    }
}

/// The tax documents required in AWS Regions in India.
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct IndTaxDocuments {
    #[serde(rename = "GSTIN")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub gstin: std::option::Option<std::string::String>,
}
/// See [`IndTaxDocuments`](crate::model::IndTaxDocuments)
pub mod ind_tax_documents {
    /// A builder for [`IndTaxDocuments`](crate::model::IndTaxDocuments)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        gstin: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn gstin(mut self, input: impl Into<std::string::String>) -> Self {
            self.gstin = Some(input.into());
            self
        }
        pub fn set_gstin(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.gstin = input;
            self
        }
        /// Consumes the builder and constructs a [`IndTaxDocuments`](crate::model::IndTaxDocuments)
        pub fn build(self) -> crate::model::IndTaxDocuments {
            crate::model::IndTaxDocuments {
                gstin: self.gstin,
            }
        }
    }
}

impl IndTaxDocuments {
    /// Creates a new builder-style object to manufacture [`IndTaxDocuments`](crate::model::IndTaxDocuments)
    pub fn builder() -> crate::model::ind_tax_documents::Builder {
        crate::model::ind_tax_documents::Builder::default()
    }
}

/// Each `JobListEntry` object contains a job's state, a job's ID, and a value that indicates whether the job is a job part.
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct JobListEntry {
    #[serde(rename = "JobId")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub job_id: std::option::Option<std::string::String>,
    #[serde(rename = "JobState")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub job_state: std::option::Option<crate::model::JobState>,
    #[serde(rename = "IsMaster")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_master: std::option::Option<bool>,
    #[serde(rename = "JobType")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub job_type: std::option::Option<crate::model::JobType>,
    #[serde(rename = "SnowballType")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub snowball_type: std::option::Option<crate::model::SnowballType>,
    #[serde(rename = "CreationDate")]
    #[serde(with = "crate::serde_util::optional_epoch_seconds")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub creation_date: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "Description")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,
}
/// See [`JobListEntry`](crate::model::JobListEntry)
pub mod job_list_entry {
    /// A builder for [`JobListEntry`](crate::model::JobListEntry)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        job_id: std::option::Option<std::string::String>,
        job_state: std::option::Option<crate::model::JobState>,
        is_master: std::option::Option<bool>,
        job_type: std::option::Option<crate::model::JobType>,
        snowball_type: std::option::Option<crate::model::SnowballType>,
        creation_date: std::option::Option<smithy_types::Instant>,
        description: std::option::Option<std::string::String>,
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
        pub fn job_state(mut self, input: impl Into<crate::model::JobState>) -> Self {
            self.job_state = Some(input.into());
            self
        }
        pub fn set_job_state(mut self, input: std::option::Option<crate::model::JobState>) -> Self {
            self.job_state = input;
            self
        }
        pub fn is_master(mut self, input: bool) -> Self {
            self.is_master = Some(input);
            self
        }
        pub fn set_is_master(mut self, input: std::option::Option<bool>) -> Self {
            self.is_master = input;
            self
        }
        pub fn job_type(mut self, input: impl Into<crate::model::JobType>) -> Self {
            self.job_type = Some(input.into());
            self
        }
        pub fn set_job_type(mut self, input: std::option::Option<crate::model::JobType>) -> Self {
            self.job_type = input;
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
        pub fn creation_date(mut self, input: smithy_types::Instant) -> Self {
            self.creation_date = Some(input);
            self
        }
        pub fn set_creation_date(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.creation_date = input;
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
        /// Consumes the builder and constructs a [`JobListEntry`](crate::model::JobListEntry)
        pub fn build(self) -> crate::model::JobListEntry {
            crate::model::JobListEntry {
                job_id: self.job_id,
                job_state: self.job_state,
                is_master: self.is_master,
                job_type: self.job_type,
                snowball_type: self.snowball_type,
                creation_date: self.creation_date,
                description: self.description,
            }
        }
    }
}

impl JobListEntry {
    /// Creates a new builder-style object to manufacture [`JobListEntry`](crate::model::JobListEntry)
    pub fn builder() -> crate::model::job_list_entry::Builder {
        crate::model::job_list_entry::Builder::default()
    }
}

/// Contains job logs.
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct JobLogs {
    #[serde(rename = "JobCompletionReportURI")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub job_completion_report_uri: std::option::Option<std::string::String>,
    #[serde(rename = "JobSuccessLogURI")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub job_success_log_uri: std::option::Option<std::string::String>,
    #[serde(rename = "JobFailureLogURI")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub job_failure_log_uri: std::option::Option<std::string::String>,
}
/// See [`JobLogs`](crate::model::JobLogs)
pub mod job_logs {
    /// A builder for [`JobLogs`](crate::model::JobLogs)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        job_completion_report_uri: std::option::Option<std::string::String>,
        job_success_log_uri: std::option::Option<std::string::String>,
        job_failure_log_uri: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn job_completion_report_uri(mut self, input: impl Into<std::string::String>) -> Self {
            self.job_completion_report_uri = Some(input.into());
            self
        }
        pub fn set_job_completion_report_uri(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.job_completion_report_uri = input;
            self
        }
        pub fn job_success_log_uri(mut self, input: impl Into<std::string::String>) -> Self {
            self.job_success_log_uri = Some(input.into());
            self
        }
        pub fn set_job_success_log_uri(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.job_success_log_uri = input;
            self
        }
        pub fn job_failure_log_uri(mut self, input: impl Into<std::string::String>) -> Self {
            self.job_failure_log_uri = Some(input.into());
            self
        }
        pub fn set_job_failure_log_uri(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.job_failure_log_uri = input;
            self
        }
        /// Consumes the builder and constructs a [`JobLogs`](crate::model::JobLogs)
        pub fn build(self) -> crate::model::JobLogs {
            crate::model::JobLogs {
                job_completion_report_uri: self.job_completion_report_uri,
                job_success_log_uri: self.job_success_log_uri,
                job_failure_log_uri: self.job_failure_log_uri,
            }
        }
    }
}

impl JobLogs {
    /// Creates a new builder-style object to manufacture [`JobLogs`](crate::model::JobLogs)
    pub fn builder() -> crate::model::job_logs::Builder {
        crate::model::job_logs::Builder::default()
    }
}

/// Contains information about a specific job.
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct JobMetadata {
    #[serde(rename = "JobId")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub job_id: std::option::Option<std::string::String>,
    #[serde(rename = "JobState")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub job_state: std::option::Option<crate::model::JobState>,
    #[serde(rename = "JobType")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub job_type: std::option::Option<crate::model::JobType>,
    #[serde(rename = "SnowballType")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub snowball_type: std::option::Option<crate::model::SnowballType>,
    #[serde(rename = "CreationDate")]
    #[serde(with = "crate::serde_util::optional_epoch_seconds")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub creation_date: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "Resources")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub resources: std::option::Option<crate::model::JobResource>,
    #[serde(rename = "Description")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,
    #[serde(rename = "KmsKeyARN")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub kms_key_arn: std::option::Option<std::string::String>,
    #[serde(rename = "RoleARN")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub role_arn: std::option::Option<std::string::String>,
    #[serde(rename = "AddressId")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub address_id: std::option::Option<std::string::String>,
    #[serde(rename = "ShippingDetails")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub shipping_details: std::option::Option<crate::model::ShippingDetails>,
    #[serde(rename = "SnowballCapacityPreference")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub snowball_capacity_preference: std::option::Option<crate::model::SnowballCapacity>,
    #[serde(rename = "Notification")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub notification: std::option::Option<crate::model::Notification>,
    #[serde(rename = "DataTransferProgress")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub data_transfer_progress: std::option::Option<crate::model::DataTransfer>,
    #[serde(rename = "JobLogInfo")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub job_log_info: std::option::Option<crate::model::JobLogs>,
    #[serde(rename = "ClusterId")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub cluster_id: std::option::Option<std::string::String>,
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
/// See [`JobMetadata`](crate::model::JobMetadata)
pub mod job_metadata {
    /// A builder for [`JobMetadata`](crate::model::JobMetadata)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        job_id: std::option::Option<std::string::String>,
        job_state: std::option::Option<crate::model::JobState>,
        job_type: std::option::Option<crate::model::JobType>,
        snowball_type: std::option::Option<crate::model::SnowballType>,
        creation_date: std::option::Option<smithy_types::Instant>,
        resources: std::option::Option<crate::model::JobResource>,
        description: std::option::Option<std::string::String>,
        kms_key_arn: std::option::Option<std::string::String>,
        role_arn: std::option::Option<std::string::String>,
        address_id: std::option::Option<std::string::String>,
        shipping_details: std::option::Option<crate::model::ShippingDetails>,
        snowball_capacity_preference: std::option::Option<crate::model::SnowballCapacity>,
        notification: std::option::Option<crate::model::Notification>,
        data_transfer_progress: std::option::Option<crate::model::DataTransfer>,
        job_log_info: std::option::Option<crate::model::JobLogs>,
        cluster_id: std::option::Option<std::string::String>,
        forwarding_address_id: std::option::Option<std::string::String>,
        tax_documents: std::option::Option<crate::model::TaxDocuments>,
        device_configuration: std::option::Option<crate::model::DeviceConfiguration>,
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
        pub fn job_state(mut self, input: impl Into<crate::model::JobState>) -> Self {
            self.job_state = Some(input.into());
            self
        }
        pub fn set_job_state(mut self, input: std::option::Option<crate::model::JobState>) -> Self {
            self.job_state = input;
            self
        }
        pub fn job_type(mut self, input: impl Into<crate::model::JobType>) -> Self {
            self.job_type = Some(input.into());
            self
        }
        pub fn set_job_type(mut self, input: std::option::Option<crate::model::JobType>) -> Self {
            self.job_type = input;
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
        pub fn creation_date(mut self, input: smithy_types::Instant) -> Self {
            self.creation_date = Some(input);
            self
        }
        pub fn set_creation_date(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.creation_date = input;
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
        pub fn address_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.address_id = Some(input.into());
            self
        }
        pub fn set_address_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.address_id = input;
            self
        }
        pub fn shipping_details(mut self, input: impl Into<crate::model::ShippingDetails>) -> Self {
            self.shipping_details = Some(input.into());
            self
        }
        pub fn set_shipping_details(mut self, input: std::option::Option<crate::model::ShippingDetails>) -> Self {
            self.shipping_details = input;
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
        pub fn notification(mut self, input: impl Into<crate::model::Notification>) -> Self {
            self.notification = Some(input.into());
            self
        }
        pub fn set_notification(mut self, input: std::option::Option<crate::model::Notification>) -> Self {
            self.notification = input;
            self
        }
        pub fn data_transfer_progress(mut self, input: impl Into<crate::model::DataTransfer>) -> Self {
            self.data_transfer_progress = Some(input.into());
            self
        }
        pub fn set_data_transfer_progress(mut self, input: std::option::Option<crate::model::DataTransfer>) -> Self {
            self.data_transfer_progress = input;
            self
        }
        pub fn job_log_info(mut self, input: impl Into<crate::model::JobLogs>) -> Self {
            self.job_log_info = Some(input.into());
            self
        }
        pub fn set_job_log_info(mut self, input: std::option::Option<crate::model::JobLogs>) -> Self {
            self.job_log_info = input;
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
        /// Consumes the builder and constructs a [`JobMetadata`](crate::model::JobMetadata)
        pub fn build(self) -> crate::model::JobMetadata {
            crate::model::JobMetadata {
                job_id: self.job_id,
                job_state: self.job_state,
                job_type: self.job_type,
                snowball_type: self.snowball_type,
                creation_date: self.creation_date,
                resources: self.resources,
                description: self.description,
                kms_key_arn: self.kms_key_arn,
                role_arn: self.role_arn,
                address_id: self.address_id,
                shipping_details: self.shipping_details,
                snowball_capacity_preference: self.snowball_capacity_preference,
                notification: self.notification,
                data_transfer_progress: self.data_transfer_progress,
                job_log_info: self.job_log_info,
                cluster_id: self.cluster_id,
                forwarding_address_id: self.forwarding_address_id,
                tax_documents: self.tax_documents,
                device_configuration: self.device_configuration,
            }
        }
    }
}

impl JobMetadata {
    /// Creates a new builder-style object to manufacture [`JobMetadata`](crate::model::JobMetadata)
    pub fn builder() -> crate::model::job_metadata::Builder {
        crate::model::job_metadata::Builder::default()
    }
}

/// Contains an array of AWS resource objects.
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct JobResource {
    #[serde(rename = "S3Resources")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub s3_resources: std::option::Option<std::vec::Vec<crate::model::S3Resource>>,
    #[serde(rename = "LambdaResources")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub lambda_resources: std::option::Option<std::vec::Vec<crate::model::LambdaResource>>,
    #[serde(rename = "Ec2AmiResources")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub ec2_ami_resources: std::option::Option<std::vec::Vec<crate::model::Ec2AmiResource>>,
}
/// See [`JobResource`](crate::model::JobResource)
pub mod job_resource {
    /// A builder for [`JobResource`](crate::model::JobResource)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        s3_resources: std::option::Option<std::vec::Vec<crate::model::S3Resource>>,
        lambda_resources: std::option::Option<std::vec::Vec<crate::model::LambdaResource>>,
        ec2_ami_resources: std::option::Option<std::vec::Vec<crate::model::Ec2AmiResource>>,
    }
    impl Builder {
        pub fn s3_resources(mut self, input: impl Into<crate::model::S3Resource>) -> Self {
            let mut v = self.s3_resources.unwrap_or_default();
            v.push(input.into());
            self.s3_resources = Some(v);
            self
        }
        pub fn set_s3_resources(mut self, input: std::option::Option<std::vec::Vec<crate::model::S3Resource>>) -> Self {
            self.s3_resources = input;
            self
        }
        pub fn lambda_resources(mut self, input: impl Into<crate::model::LambdaResource>) -> Self {
            let mut v = self.lambda_resources.unwrap_or_default();
            v.push(input.into());
            self.lambda_resources = Some(v);
            self
        }
        pub fn set_lambda_resources(mut self, input: std::option::Option<std::vec::Vec<crate::model::LambdaResource>>) -> Self {
            self.lambda_resources = input;
            self
        }
        pub fn ec2_ami_resources(mut self, input: impl Into<crate::model::Ec2AmiResource>) -> Self {
            let mut v = self.ec2_ami_resources.unwrap_or_default();
            v.push(input.into());
            self.ec2_ami_resources = Some(v);
            self
        }
        pub fn set_ec2_ami_resources(mut self, input: std::option::Option<std::vec::Vec<crate::model::Ec2AmiResource>>) -> Self {
            self.ec2_ami_resources = input;
            self
        }
        /// Consumes the builder and constructs a [`JobResource`](crate::model::JobResource)
        pub fn build(self) -> crate::model::JobResource {
            crate::model::JobResource {
                s3_resources: self.s3_resources,
                lambda_resources: self.lambda_resources,
                ec2_ami_resources: self.ec2_ami_resources,
            }
        }
    }
}

impl JobResource {
    /// Creates a new builder-style object to manufacture [`JobResource`](crate::model::JobResource)
    pub fn builder() -> crate::model::job_resource::Builder {
        crate::model::job_resource::Builder::default()
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
pub enum JobState {
    New,
    PreparingAppliance,
    PreparingShipment,
    InTransitToCustomer,
    WithCustomer,
    InTransitToAws,
    WithAwsSortingFacility,
    WithAws,
    InProgress,
    Complete,
    Cancelled,
    Listing,
    Pending,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for JobState {
    fn from(s: &str) -> Self {
        match s {
            "New" => JobState::New,
            "PreparingAppliance" => JobState::PreparingAppliance,
            "PreparingShipment" => JobState::PreparingShipment,
            "InTransitToCustomer" => JobState::InTransitToCustomer,
            "WithCustomer" => JobState::WithCustomer,
            "InTransitToAWS" => JobState::InTransitToAws,
            "WithAWSSortingFacility" => JobState::WithAwsSortingFacility,
            "WithAWS" => JobState::WithAws,
            "InProgress" => JobState::InProgress,
            "Complete" => JobState::Complete,
            "Cancelled" => JobState::Cancelled,
            "Listing" => JobState::Listing,
            "Pending" => JobState::Pending,
            other => JobState::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for JobState {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(JobState::from(s))
    }
}
impl JobState {
    pub fn as_str(&self) -> &str {
        match self {
            JobState::New => "New",
            JobState::PreparingAppliance => "PreparingAppliance",
            JobState::PreparingShipment => "PreparingShipment",
            JobState::InTransitToCustomer => "InTransitToCustomer",
            JobState::WithCustomer => "WithCustomer",
            JobState::InTransitToAws => "InTransitToAWS",
            JobState::WithAwsSortingFacility => "WithAWSSortingFacility",
            JobState::WithAws => "WithAWS",
            JobState::InProgress => "InProgress",
            JobState::Complete => "Complete",
            JobState::Cancelled => "Cancelled",
            JobState::Listing => "Listing",
            JobState::Pending => "Pending",
            JobState::Unknown(s) => s.as_ref(),
        }
    }
    pub fn values() -> &'static [&'static str] {
        &["New", "PreparingAppliance", "PreparingShipment", "InTransitToCustomer", "WithCustomer", "InTransitToAWS", "WithAWSSortingFacility", "WithAWS", "InProgress", "Complete", "Cancelled", "Listing", "Pending"]
    }
}
impl AsRef<str> for JobState {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for JobState {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for JobState {
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
pub enum JobType {
    Import,
    Export,
    LocalUse,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for JobType {
    fn from(s: &str) -> Self {
        match s {
            "IMPORT" => JobType::Import,
            "EXPORT" => JobType::Export,
            "LOCAL_USE" => JobType::LocalUse,
            other => JobType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for JobType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(JobType::from(s))
    }
}
impl JobType {
    pub fn as_str(&self) -> &str {
        match self {
            JobType::Import => "IMPORT",
            JobType::Export => "EXPORT",
            JobType::LocalUse => "LOCAL_USE",
            JobType::Unknown(s) => s.as_ref(),
        }
    }
    pub fn values() -> &'static [&'static str] {
        &["IMPORT", "EXPORT", "LOCAL_USE"]
    }
}
impl AsRef<str> for JobType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for JobType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for JobType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = std::string::String::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

/// Contains a key range.
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct KeyRange {
    #[serde(rename = "BeginMarker")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub begin_marker: std::option::Option<std::string::String>,
    #[serde(rename = "EndMarker")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub end_marker: std::option::Option<std::string::String>,
}
/// See [`KeyRange`](crate::model::KeyRange)
pub mod key_range {
    /// A builder for [`KeyRange`](crate::model::KeyRange)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        begin_marker: std::option::Option<std::string::String>,
        end_marker: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn begin_marker(mut self, input: impl Into<std::string::String>) -> Self {
            self.begin_marker = Some(input.into());
            self
        }
        pub fn set_begin_marker(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.begin_marker = input;
            self
        }
        pub fn end_marker(mut self, input: impl Into<std::string::String>) -> Self {
            self.end_marker = Some(input.into());
            self
        }
        pub fn set_end_marker(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.end_marker = input;
            self
        }
        /// Consumes the builder and constructs a [`KeyRange`](crate::model::KeyRange)
        pub fn build(self) -> crate::model::KeyRange {
            crate::model::KeyRange {
                begin_marker: self.begin_marker,
                end_marker: self.end_marker,
            }
        }
    }
}

impl KeyRange {
    /// Creates a new builder-style object to manufacture [`KeyRange`](crate::model::KeyRange)
    pub fn builder() -> crate::model::key_range::Builder {
        crate::model::key_range::Builder::default()
    }
}

/// Identifies a Lambda function and the events that trigger it.
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct LambdaResource {
    #[serde(rename = "LambdaArn")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub lambda_arn: std::option::Option<std::string::String>,
    #[serde(rename = "EventTriggers")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub event_triggers: std::option::Option<std::vec::Vec<crate::model::EventTriggerDefinition>>,
}
/// See [`LambdaResource`](crate::model::LambdaResource)
pub mod lambda_resource {
    /// A builder for [`LambdaResource`](crate::model::LambdaResource)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        lambda_arn: std::option::Option<std::string::String>,
        event_triggers: std::option::Option<std::vec::Vec<crate::model::EventTriggerDefinition>>,
    }
    impl Builder {
        pub fn lambda_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.lambda_arn = Some(input.into());
            self
        }
        pub fn set_lambda_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.lambda_arn = input;
            self
        }
        pub fn event_triggers(mut self, input: impl Into<crate::model::EventTriggerDefinition>) -> Self {
            let mut v = self.event_triggers.unwrap_or_default();
            v.push(input.into());
            self.event_triggers = Some(v);
            self
        }
        pub fn set_event_triggers(mut self, input: std::option::Option<std::vec::Vec<crate::model::EventTriggerDefinition>>) -> Self {
            self.event_triggers = input;
            self
        }
        /// Consumes the builder and constructs a [`LambdaResource`](crate::model::LambdaResource)
        pub fn build(self) -> crate::model::LambdaResource {
            crate::model::LambdaResource {
                lambda_arn: self.lambda_arn,
                event_triggers: self.event_triggers,
            }
        }
    }
}

impl LambdaResource {
    /// Creates a new builder-style object to manufacture [`LambdaResource`](crate::model::LambdaResource)
    pub fn builder() -> crate::model::lambda_resource::Builder {
        crate::model::lambda_resource::Builder::default()
    }
}

/// The Amazon Simple Notification Service (Amazon SNS) notification settings associated with a specific job.
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct Notification {
    #[serde(rename = "SnsTopicARN")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub sns_topic_arn: std::option::Option<std::string::String>,
    #[serde(rename = "JobStatesToNotify")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub job_states_to_notify: std::option::Option<std::vec::Vec<crate::model::JobState>>,
    #[serde(rename = "NotifyAll")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub notify_all: std::option::Option<bool>,
}
/// See [`Notification`](crate::model::Notification)
pub mod notification {
    /// A builder for [`Notification`](crate::model::Notification)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        sns_topic_arn: std::option::Option<std::string::String>,
        job_states_to_notify: std::option::Option<std::vec::Vec<crate::model::JobState>>,
        notify_all: std::option::Option<bool>,
    }
    impl Builder {
        pub fn sns_topic_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.sns_topic_arn = Some(input.into());
            self
        }
        pub fn set_sns_topic_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.sns_topic_arn = input;
            self
        }
        pub fn job_states_to_notify(mut self, input: impl Into<crate::model::JobState>) -> Self {
            let mut v = self.job_states_to_notify.unwrap_or_default();
            v.push(input.into());
            self.job_states_to_notify = Some(v);
            self
        }
        pub fn set_job_states_to_notify(mut self, input: std::option::Option<std::vec::Vec<crate::model::JobState>>) -> Self {
            self.job_states_to_notify = input;
            self
        }
        pub fn notify_all(mut self, input: bool) -> Self {
            self.notify_all = Some(input);
            self
        }
        pub fn set_notify_all(mut self, input: std::option::Option<bool>) -> Self {
            self.notify_all = input;
            self
        }
        /// Consumes the builder and constructs a [`Notification`](crate::model::Notification)
        pub fn build(self) -> crate::model::Notification {
            crate::model::Notification {
                sns_topic_arn: self.sns_topic_arn,
                job_states_to_notify: self.job_states_to_notify,
                notify_all: self.notify_all,
            }
        }
    }
}

impl Notification {
    /// Creates a new builder-style object to manufacture [`Notification`](crate::model::Notification)
    pub fn builder() -> crate::model::notification::Builder {
        crate::model::notification::Builder::default()
    }
}

/// Each `S3Resource` object represents an Amazon S3 bucket that your transferred data will be exported from or imported into.
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct S3Resource {
    #[serde(rename = "BucketArn")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub bucket_arn: std::option::Option<std::string::String>,
    #[serde(rename = "KeyRange")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub key_range: std::option::Option<crate::model::KeyRange>,
}
/// See [`S3Resource`](crate::model::S3Resource)
pub mod s3_resource {
    /// A builder for [`S3Resource`](crate::model::S3Resource)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        bucket_arn: std::option::Option<std::string::String>,
        key_range: std::option::Option<crate::model::KeyRange>,
    }
    impl Builder {
        pub fn bucket_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.bucket_arn = Some(input.into());
            self
        }
        pub fn set_bucket_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.bucket_arn = input;
            self
        }
        pub fn key_range(mut self, input: impl Into<crate::model::KeyRange>) -> Self {
            self.key_range = Some(input.into());
            self
        }
        pub fn set_key_range(mut self, input: std::option::Option<crate::model::KeyRange>) -> Self {
            self.key_range = input;
            self
        }
        /// Consumes the builder and constructs a [`S3Resource`](crate::model::S3Resource)
        pub fn build(self) -> crate::model::S3Resource {
            crate::model::S3Resource {
                bucket_arn: self.bucket_arn,
                key_range: self.key_range,
            }
        }
    }
}

impl S3Resource {
    /// Creates a new builder-style object to manufacture [`S3Resource`](crate::model::S3Resource)
    pub fn builder() -> crate::model::s3_resource::Builder {
        crate::model::s3_resource::Builder::default()
    }
}

/// The `Status` and `TrackingNumber` information for an inbound or outbound shipment.
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct Shipment {
    #[serde(rename = "Status")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub status: std::option::Option<std::string::String>,
    #[serde(rename = "TrackingNumber")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub tracking_number: std::option::Option<std::string::String>,
}
/// See [`Shipment`](crate::model::Shipment)
pub mod shipment {
    /// A builder for [`Shipment`](crate::model::Shipment)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        status: std::option::Option<std::string::String>,
        tracking_number: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn status(mut self, input: impl Into<std::string::String>) -> Self {
            self.status = Some(input.into());
            self
        }
        pub fn set_status(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.status = input;
            self
        }
        pub fn tracking_number(mut self, input: impl Into<std::string::String>) -> Self {
            self.tracking_number = Some(input.into());
            self
        }
        pub fn set_tracking_number(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.tracking_number = input;
            self
        }
        /// Consumes the builder and constructs a [`Shipment`](crate::model::Shipment)
        pub fn build(self) -> crate::model::Shipment {
            crate::model::Shipment {
                status: self.status,
                tracking_number: self.tracking_number,
            }
        }
    }
}

impl Shipment {
    /// Creates a new builder-style object to manufacture [`Shipment`](crate::model::Shipment)
    pub fn builder() -> crate::model::shipment::Builder {
        crate::model::shipment::Builder::default()
    }
}

/// A job's shipping information, including inbound and outbound tracking numbers and shipping speed options.
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct ShippingDetails {
    #[serde(rename = "ShippingOption")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub shipping_option: std::option::Option<crate::model::ShippingOption>,
    #[serde(rename = "InboundShipment")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub inbound_shipment: std::option::Option<crate::model::Shipment>,
    #[serde(rename = "OutboundShipment")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub outbound_shipment: std::option::Option<crate::model::Shipment>,
}
/// See [`ShippingDetails`](crate::model::ShippingDetails)
pub mod shipping_details {
    /// A builder for [`ShippingDetails`](crate::model::ShippingDetails)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        shipping_option: std::option::Option<crate::model::ShippingOption>,
        inbound_shipment: std::option::Option<crate::model::Shipment>,
        outbound_shipment: std::option::Option<crate::model::Shipment>,
    }
    impl Builder {
        pub fn shipping_option(mut self, input: impl Into<crate::model::ShippingOption>) -> Self {
            self.shipping_option = Some(input.into());
            self
        }
        pub fn set_shipping_option(mut self, input: std::option::Option<crate::model::ShippingOption>) -> Self {
            self.shipping_option = input;
            self
        }
        pub fn inbound_shipment(mut self, input: impl Into<crate::model::Shipment>) -> Self {
            self.inbound_shipment = Some(input.into());
            self
        }
        pub fn set_inbound_shipment(mut self, input: std::option::Option<crate::model::Shipment>) -> Self {
            self.inbound_shipment = input;
            self
        }
        pub fn outbound_shipment(mut self, input: impl Into<crate::model::Shipment>) -> Self {
            self.outbound_shipment = Some(input.into());
            self
        }
        pub fn set_outbound_shipment(mut self, input: std::option::Option<crate::model::Shipment>) -> Self {
            self.outbound_shipment = input;
            self
        }
        /// Consumes the builder and constructs a [`ShippingDetails`](crate::model::ShippingDetails)
        pub fn build(self) -> crate::model::ShippingDetails {
            crate::model::ShippingDetails {
                shipping_option: self.shipping_option,
                inbound_shipment: self.inbound_shipment,
                outbound_shipment: self.outbound_shipment,
            }
        }
    }
}

impl ShippingDetails {
    /// Creates a new builder-style object to manufacture [`ShippingDetails`](crate::model::ShippingDetails)
    pub fn builder() -> crate::model::shipping_details::Builder {
        crate::model::shipping_details::Builder::default()
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
pub enum ShippingOption {
    SecondDay,
    NextDay,
    Express,
    Standard,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for ShippingOption {
    fn from(s: &str) -> Self {
        match s {
            "SECOND_DAY" => ShippingOption::SecondDay,
            "NEXT_DAY" => ShippingOption::NextDay,
            "EXPRESS" => ShippingOption::Express,
            "STANDARD" => ShippingOption::Standard,
            other => ShippingOption::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for ShippingOption {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(ShippingOption::from(s))
    }
}
impl ShippingOption {
    pub fn as_str(&self) -> &str {
        match self {
            ShippingOption::SecondDay => "SECOND_DAY",
            ShippingOption::NextDay => "NEXT_DAY",
            ShippingOption::Express => "EXPRESS",
            ShippingOption::Standard => "STANDARD",
            ShippingOption::Unknown(s) => s.as_ref(),
        }
    }
    pub fn values() -> &'static [&'static str] {
        &["SECOND_DAY", "NEXT_DAY", "EXPRESS", "STANDARD"]
    }
}
impl AsRef<str> for ShippingOption {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for ShippingOption {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for ShippingOption {
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
pub enum SnowballCapacity {
    T50,
    T80,
    T100,
    T42,
    T98,
    T8,
    NoPreference,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for SnowballCapacity {
    fn from(s: &str) -> Self {
        match s {
            "T50" => SnowballCapacity::T50,
            "T80" => SnowballCapacity::T80,
            "T100" => SnowballCapacity::T100,
            "T42" => SnowballCapacity::T42,
            "T98" => SnowballCapacity::T98,
            "T8" => SnowballCapacity::T8,
            "NoPreference" => SnowballCapacity::NoPreference,
            other => SnowballCapacity::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for SnowballCapacity {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(SnowballCapacity::from(s))
    }
}
impl SnowballCapacity {
    pub fn as_str(&self) -> &str {
        match self {
            SnowballCapacity::T50 => "T50",
            SnowballCapacity::T80 => "T80",
            SnowballCapacity::T100 => "T100",
            SnowballCapacity::T42 => "T42",
            SnowballCapacity::T98 => "T98",
            SnowballCapacity::T8 => "T8",
            SnowballCapacity::NoPreference => "NoPreference",
            SnowballCapacity::Unknown(s) => s.as_ref(),
        }
    }
    pub fn values() -> &'static [&'static str] {
        &["T50", "T80", "T100", "T42", "T98", "T8", "NoPreference"]
    }
}
impl AsRef<str> for SnowballCapacity {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for SnowballCapacity {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for SnowballCapacity {
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
pub enum SnowballType {
    Standard,
    Edge,
    EdgeC,
    EdgeCg,
    EdgeS,
    Snc1Hdd,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for SnowballType {
    fn from(s: &str) -> Self {
        match s {
            "STANDARD" => SnowballType::Standard,
            "EDGE" => SnowballType::Edge,
            "EDGE_C" => SnowballType::EdgeC,
            "EDGE_CG" => SnowballType::EdgeCg,
            "EDGE_S" => SnowballType::EdgeS,
            "SNC1_HDD" => SnowballType::Snc1Hdd,
            other => SnowballType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for SnowballType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(SnowballType::from(s))
    }
}
impl SnowballType {
    pub fn as_str(&self) -> &str {
        match self {
            SnowballType::Standard => "STANDARD",
            SnowballType::Edge => "EDGE",
            SnowballType::EdgeC => "EDGE_C",
            SnowballType::EdgeCg => "EDGE_CG",
            SnowballType::EdgeS => "EDGE_S",
            SnowballType::Snc1Hdd => "SNC1_HDD",
            SnowballType::Unknown(s) => s.as_ref(),
        }
    }
    pub fn values() -> &'static [&'static str] {
        &["STANDARD", "EDGE", "EDGE_C", "EDGE_CG", "EDGE_S", "SNC1_HDD"]
    }
}
impl AsRef<str> for SnowballType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for SnowballType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for SnowballType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = std::string::String::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

/// Specifies the device configuration for an AWS Snowcone job.
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct SnowconeDeviceConfiguration {
    #[serde(rename = "WirelessConnection")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub wireless_connection: std::option::Option<crate::model::WirelessConnection>,
}
/// See [`SnowconeDeviceConfiguration`](crate::model::SnowconeDeviceConfiguration)
pub mod snowcone_device_configuration {
    /// A builder for [`SnowconeDeviceConfiguration`](crate::model::SnowconeDeviceConfiguration)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        wireless_connection: std::option::Option<crate::model::WirelessConnection>,
    }
    impl Builder {
        pub fn wireless_connection(mut self, input: impl Into<crate::model::WirelessConnection>) -> Self {
            self.wireless_connection = Some(input.into());
            self
        }
        pub fn set_wireless_connection(mut self, input: std::option::Option<crate::model::WirelessConnection>) -> Self {
            self.wireless_connection = input;
            self
        }
        /// Consumes the builder and constructs a [`SnowconeDeviceConfiguration`](crate::model::SnowconeDeviceConfiguration)
        pub fn build(self) -> crate::model::SnowconeDeviceConfiguration {
            crate::model::SnowconeDeviceConfiguration {
                wireless_connection: self.wireless_connection,
            }
        }
    }
}

impl SnowconeDeviceConfiguration {
    /// Creates a new builder-style object to manufacture [`SnowconeDeviceConfiguration`](crate::model::SnowconeDeviceConfiguration)
    pub fn builder() -> crate::model::snowcone_device_configuration::Builder {
        crate::model::snowcone_device_configuration::Builder::default()
    }
}

/// The tax documents required in your AWS Region.
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct TaxDocuments {
    #[serde(rename = "IND")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub ind: std::option::Option<crate::model::IndTaxDocuments>,
}
/// See [`TaxDocuments`](crate::model::TaxDocuments)
pub mod tax_documents {
    /// A builder for [`TaxDocuments`](crate::model::TaxDocuments)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        ind: std::option::Option<crate::model::IndTaxDocuments>,
    }
    impl Builder {
        pub fn ind(mut self, input: impl Into<crate::model::IndTaxDocuments>) -> Self {
            self.ind = Some(input.into());
            self
        }
        pub fn set_ind(mut self, input: std::option::Option<crate::model::IndTaxDocuments>) -> Self {
            self.ind = input;
            self
        }
        /// Consumes the builder and constructs a [`TaxDocuments`](crate::model::TaxDocuments)
        pub fn build(self) -> crate::model::TaxDocuments {
            crate::model::TaxDocuments {
                ind: self.ind,
            }
        }
    }
}

impl TaxDocuments {
    /// Creates a new builder-style object to manufacture [`TaxDocuments`](crate::model::TaxDocuments)
    pub fn builder() -> crate::model::tax_documents::Builder {
        crate::model::tax_documents::Builder::default()
    }
}

/// Configures the wireless connection on an AWS Snowcone device.
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct WirelessConnection {
    #[serde(rename = "IsWifiEnabled")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_wifi_enabled: std::option::Option<bool>,
}
/// See [`WirelessConnection`](crate::model::WirelessConnection)
pub mod wireless_connection {
    /// A builder for [`WirelessConnection`](crate::model::WirelessConnection)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        is_wifi_enabled: std::option::Option<bool>,
    }
    impl Builder {
        pub fn is_wifi_enabled(mut self, input: bool) -> Self {
            self.is_wifi_enabled = Some(input);
            self
        }
        pub fn set_is_wifi_enabled(mut self, input: std::option::Option<bool>) -> Self {
            self.is_wifi_enabled = input;
            self
        }
        /// Consumes the builder and constructs a [`WirelessConnection`](crate::model::WirelessConnection)
        pub fn build(self) -> crate::model::WirelessConnection {
            crate::model::WirelessConnection {
                is_wifi_enabled: self.is_wifi_enabled,
            }
        }
    }
}

impl WirelessConnection {
    /// Creates a new builder-style object to manufacture [`WirelessConnection`](crate::model::WirelessConnection)
    pub fn builder() -> crate::model::wireless_connection::Builder {
        crate::model::wireless_connection::Builder::default()
    }
}
#[cfg(test)]
mod test {
    use crate::model::{
        IndTaxDocuments, JobListEntry, JobMetadata, JobState, JobType, Notification,
        SnowballCapacity, SnowballType, TaxDocuments,
    };
    use proptest::prelude::*;
    use smithy_types::Instant;

    #[test]
    fn acronyms_become_words() {
        assert_eq!(JobState::InTransitToAws.as_str(), "InTransitToAWS");
        assert_eq!(
            JobState::from("WithAWSSortingFacility"),
            JobState::WithAwsSortingFacility
        );
        assert_eq!(SnowballType::Snc1Hdd.as_str(), "SNC1_HDD");
        assert_eq!(JobType::from("LOCAL_USE"), JobType::LocalUse);
        assert_eq!(SnowballCapacity::from("T14"), SnowballCapacity::Unknown("T14".into()));
    }

    #[test]
    fn job_metadata_from_describe_job() {
        let metadata: JobMetadata = serde_json::from_str(
            r#"{
                "JobId": "JID123e4567-e89b-12d3-a456-426655440000",
                "JobState": "WithCustomer",
                "JobType": "IMPORT",
                "SnowballType": "EDGE",
                "CreationDate": 1.4754226E9,
                "KmsKeyARN": "arn:aws:kms:us-west-2:123456789012:key/abcd1234",
                "SnowballCapacityPreference": "T100",
                "TaxDocuments": { "IND": { "GSTIN": "22AAAAA0000A1Z5" } },
                "DataTransferProgress": { "BytesTransferred": 1024, "TotalObjects": 3 }
            }"#,
        )
        .unwrap();
        assert_eq!(metadata.job_state, Some(JobState::WithCustomer));
        assert_eq!(
            metadata.creation_date,
            Some(Instant::from_epoch_seconds(1_475_422_600))
        );
        assert_eq!(
            metadata.kms_key_arn.as_deref(),
            Some("arn:aws:kms:us-west-2:123456789012:key/abcd1234")
        );
        assert_eq!(
            metadata.tax_documents,
            Some(
                TaxDocuments::builder()
                    .ind(IndTaxDocuments::builder().gstin("22AAAAA0000A1Z5").build())
                    .build()
            )
        );
        let progress = metadata.data_transfer_progress.expect("progress was sent");
        assert_eq!(progress.bytes_transferred, Some(1024));
        assert_eq!(progress.total_bytes, None);
    }

    #[test]
    fn list_members_serialize_in_order() {
        let notification = Notification::builder()
            .sns_topic_arn("arn:aws:sns:us-west-2:123456789012:jobs")
            .job_states_to_notify(JobState::Complete)
            .job_states_to_notify("Cancelled")
            .build();
        assert_eq!(
            serde_json::to_value(&notification).unwrap(),
            serde_json::json!({
                "SnsTopicARN": "arn:aws:sns:us-west-2:123456789012:jobs",
                "JobStatesToNotify": ["Complete", "Cancelled"]
            })
        );
    }

    #[test]
    fn timestamps_serialize_as_epoch_seconds() {
        let entry = JobListEntry::builder()
            .job_id("JID1")
            .is_master(false)
            .creation_date(Instant::from_epoch_seconds(1_600_000_000))
            .build();
        assert_eq!(
            serde_json::to_string(&entry).unwrap(),
            r#"{"JobId":"JID1","IsMaster":false,"CreationDate":1600000000}"#
        );
    }

    #[test]
    fn sub_second_creation_dates_round_trip() {
        let entry = JobListEntry::builder()
            .job_id("JID1")
            .job_state(JobState::Complete)
            .creation_date(Instant::from_secs_and_nanos(1_576_540_098, 520_000_000))
            .build();
        let wire = serde_json::to_string(&entry).unwrap();
        assert_eq!(
            wire,
            r#"{"JobId":"JID1","JobState":"Complete","CreationDate":1576540098.52}"#
        );
        let back: JobListEntry = serde_json::from_str(&wire).unwrap();
        assert_eq!(back, entry);

        let parsed: JobListEntry =
            serde_json::from_str(r#"{"CreationDate":1576540098.52}"#).unwrap();
        assert_eq!(
            parsed.creation_date.map(|at| at.subsec_nanos()),
            Some(520_000_000)
        );
    }

    proptest! {
        #[test]
        fn enum_strings_round_trip(s in ".*") {
            let state = JobState::from(s.as_str());
            prop_assert_eq!(state.as_str(), s.as_str());
            let capacity = SnowballCapacity::from(s.as_str());
            prop_assert_eq!(capacity.as_str(), s.as_str());
        }
    }
}
