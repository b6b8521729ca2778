/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

#[non_exhaustive]
#[derive(serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct CancelClusterOutput {
}
/// See [`CancelClusterOutput`](crate::output::CancelClusterOutput)
pub mod cancel_cluster_output {
    /// A builder for [`CancelClusterOutput`](crate::output::CancelClusterOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
    }
    impl Builder {
        /// Consumes the builder and constructs a [`CancelClusterOutput`](crate::output::CancelClusterOutput)
        pub fn build(self) -> crate::output::CancelClusterOutput {
            crate::output::CancelClusterOutput {}
        }
    }
}

impl CancelClusterOutput {
    /// Creates a new builder-style object to manufacture [`CancelClusterOutput`](crate::output::CancelClusterOutput)
    pub fn builder() -> crate::output::cancel_cluster_output::Builder {
        crate::output::cancel_cluster_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct CancelJobOutput {
}
/// See [`CancelJobOutput`](crate::output::CancelJobOutput)
pub mod cancel_job_output {
    /// A builder for [`CancelJobOutput`](crate::output::CancelJobOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
    }
    impl Builder {
        /// Consumes the builder and constructs a [`CancelJobOutput`](crate::output::CancelJobOutput)
        pub fn build(self) -> crate::output::CancelJobOutput {
            crate::output::CancelJobOutput {}
        }
    }
}

impl CancelJobOutput {
    /// Creates a new builder-style object to manufacture [`CancelJobOutput`](crate::output::CancelJobOutput)
    pub fn builder() -> crate::output::cancel_job_output::Builder {
        crate::output::cancel_job_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct CreateAddressOutput {
    #[serde(rename = "AddressId")]
    pub address_id: std::option::Option<std::string::String>,
}
/// See [`CreateAddressOutput`](crate::output::CreateAddressOutput)
pub mod create_address_output {
    /// A builder for [`CreateAddressOutput`](crate::output::CreateAddressOutput)
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
        /// Consumes the builder and constructs a [`CreateAddressOutput`](crate::output::CreateAddressOutput)
        pub fn build(self) -> crate::output::CreateAddressOutput {
            crate::output::CreateAddressOutput {
                address_id: self.address_id,
            }
        }
    }
}

impl CreateAddressOutput {
    /// Creates a new builder-style object to manufacture [`CreateAddressOutput`](crate::output::CreateAddressOutput)
    pub fn builder() -> crate::output::create_address_output::Builder {
        crate::output::create_address_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct CreateClusterOutput {
    #[serde(rename = "ClusterId")]
    pub cluster_id: std::option::Option<std::string::String>,
}
/// See [`CreateClusterOutput`](crate::output::CreateClusterOutput)
pub mod create_cluster_output {
    /// A builder for [`CreateClusterOutput`](crate::output::CreateClusterOutput)
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
        /// Consumes the builder and constructs a [`CreateClusterOutput`](crate::output::CreateClusterOutput)
        pub fn build(self) -> crate::output::CreateClusterOutput {
            crate::output::CreateClusterOutput {
                cluster_id: self.cluster_id,
            }
        }
    }
}

impl CreateClusterOutput {
    /// Creates a new builder-style object to manufacture [`CreateClusterOutput`](crate::output::CreateClusterOutput)
    pub fn builder() -> crate::output::create_cluster_output::Builder {
        crate::output::create_cluster_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct CreateJobOutput {
    #[serde(rename = "JobId")]
    pub job_id: std::option::Option<std::string::String>,
}
/// See [`CreateJobOutput`](crate::output::CreateJobOutput)
pub mod create_job_output {
    /// A builder for [`CreateJobOutput`](crate::output::CreateJobOutput)
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
        /// Consumes the builder and constructs a [`CreateJobOutput`](crate::output::CreateJobOutput)
        pub fn build(self) -> crate::output::CreateJobOutput {
            crate::output::CreateJobOutput {
                job_id: self.job_id,
            }
        }
    }
}

impl CreateJobOutput {
    /// Creates a new builder-style object to manufacture [`CreateJobOutput`](crate::output::CreateJobOutput)
    pub fn builder() -> crate::output::create_job_output::Builder {
        crate::output::create_job_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct DescribeAddressOutput {
    #[serde(rename = "Address")]
    pub address: std::option::Option<crate::model::Address>,
}
/// See [`DescribeAddressOutput`](crate::output::DescribeAddressOutput)
pub mod describe_address_output {
    /// A builder for [`DescribeAddressOutput`](crate::output::DescribeAddressOutput)
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
        /// Consumes the builder and constructs a [`DescribeAddressOutput`](crate::output::DescribeAddressOutput)
        pub fn build(self) -> crate::output::DescribeAddressOutput {
            crate::output::DescribeAddressOutput {
                address: self.address,
            }
        }
    }
}

impl DescribeAddressOutput {
    /// Creates a new builder-style object to manufacture [`DescribeAddressOutput`](crate::output::DescribeAddressOutput)
    pub fn builder() -> crate::output::describe_address_output::Builder {
        crate::output::describe_address_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct DescribeAddressesOutput {
    #[serde(rename = "Addresses")]
    pub addresses: std::option::Option<std::vec::Vec<crate::model::Address>>,
    #[serde(rename = "NextToken")]
    pub next_token: std::option::Option<std::string::String>,
}
/// See [`DescribeAddressesOutput`](crate::output::DescribeAddressesOutput)
pub mod describe_addresses_output {
    /// A builder for [`DescribeAddressesOutput`](crate::output::DescribeAddressesOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        addresses: std::option::Option<std::vec::Vec<crate::model::Address>>,
        next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn addresses(mut self, input: impl Into<crate::model::Address>) -> Self {
            let mut v = self.addresses.unwrap_or_default();
            v.push(input.into());
            self.addresses = Some(v);
            self
        }
        pub fn set_addresses(mut self, input: std::option::Option<std::vec::Vec<crate::model::Address>>) -> Self {
            self.addresses = input;
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
        /// Consumes the builder and constructs a [`DescribeAddressesOutput`](crate::output::DescribeAddressesOutput)
        pub fn build(self) -> crate::output::DescribeAddressesOutput {
            crate::output::DescribeAddressesOutput {
                addresses: self.addresses,
                next_token: self.next_token,
            }
        }
    }
}

impl DescribeAddressesOutput {
    /// Creates a new builder-style object to manufacture [`DescribeAddressesOutput`](crate::output::DescribeAddressesOutput)
    pub fn builder() -> crate::output::describe_addresses_output::Builder {
        crate::output::describe_addresses_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct DescribeClusterOutput {
    #[serde(rename = "ClusterMetadata")]
    pub cluster_metadata: std::option::Option<crate::model::ClusterMetadata>,
}
/// See [`DescribeClusterOutput`](crate::output::DescribeClusterOutput)
pub mod describe_cluster_output {
    /// A builder for [`DescribeClusterOutput`](crate::output::DescribeClusterOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        cluster_metadata: std::option::Option<crate::model::ClusterMetadata>,
    }
    impl Builder {
        pub fn cluster_metadata(mut self, input: impl Into<crate::model::ClusterMetadata>) -> Self {
            self.cluster_metadata = Some(input.into());
            self
        }
        pub fn set_cluster_metadata(mut self, input: std::option::Option<crate::model::ClusterMetadata>) -> Self {
            self.cluster_metadata = input;
            self
        }
        /// Consumes the builder and constructs a [`DescribeClusterOutput`](crate::output::DescribeClusterOutput)
        pub fn build(self) -> crate::output::DescribeClusterOutput {
            crate::output::DescribeClusterOutput {
                cluster_metadata: self.cluster_metadata,
            }
        }
    }
}

impl DescribeClusterOutput {
    /// Creates a new builder-style object to manufacture [`DescribeClusterOutput`](crate::output::DescribeClusterOutput)
    pub fn builder() -> crate::output::describe_cluster_output::Builder {
        crate::output::describe_cluster_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct DescribeJobOutput {
    #[serde(rename = "JobMetadata")]
    pub job_metadata: std::option::Option<crate::model::JobMetadata>,
    #[serde(rename = "SubJobMetadata")]
    pub sub_job_metadata: std::option::Option<std::vec::Vec<crate::model::JobMetadata>>,
}
/// See [`DescribeJobOutput`](crate::output::DescribeJobOutput)
pub mod describe_job_output {
    /// A builder for [`DescribeJobOutput`](crate::output::DescribeJobOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        job_metadata: std::option::Option<crate::model::JobMetadata>,
        sub_job_metadata: std::option::Option<std::vec::Vec<crate::model::JobMetadata>>,
    }
    impl Builder {
        pub fn job_metadata(mut self, input: impl Into<crate::model::JobMetadata>) -> Self {
            self.job_metadata = Some(input.into());
            self
        }
        pub fn set_job_metadata(mut self, input: std::option::Option<crate::model::JobMetadata>) -> Self {
            self.job_metadata = input;
            self
        }
        pub fn sub_job_metadata(mut self, input: impl Into<crate::model::JobMetadata>) -> Self {
            let mut v = self.sub_job_metadata.unwrap_or_default();
            v.push(input.into());
            self.sub_job_metadata = Some(v);
            self
        }
        pub fn set_sub_job_metadata(mut self, input: std::option::Option<std::vec::Vec<crate::model::JobMetadata>>) -> Self {
            self.sub_job_metadata = input;
            self
        }
        /// Consumes the builder and constructs a [`DescribeJobOutput`](crate::output::DescribeJobOutput)
        pub fn build(self) -> crate::output::DescribeJobOutput {
            crate::output::DescribeJobOutput {
                job_metadata: self.job_metadata,
                sub_job_metadata: self.sub_job_metadata,
            }
        }
    }
}

impl DescribeJobOutput {
    /// Creates a new builder-style object to manufacture [`DescribeJobOutput`](crate::output::DescribeJobOutput)
    pub fn builder() -> crate::output::describe_job_output::Builder {
        crate::output::describe_job_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct GetJobManifestOutput {
    #[serde(rename = "ManifestURI")]
    pub manifest_uri: std::option::Option<std::string::String>,
}
/// See [`GetJobManifestOutput`](crate::output::GetJobManifestOutput)
pub mod get_job_manifest_output {
    /// A builder for [`GetJobManifestOutput`](crate::output::GetJobManifestOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        manifest_uri: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn manifest_uri(mut self, input: impl Into<std::string::String>) -> Self {
            self.manifest_uri = Some(input.into());
            self
        }
        pub fn set_manifest_uri(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.manifest_uri = input;
            self
        }
        /// Consumes the builder and constructs a [`GetJobManifestOutput`](crate::output::GetJobManifestOutput)
        pub fn build(self) -> crate::output::GetJobManifestOutput {
            crate::output::GetJobManifestOutput {
                manifest_uri: self.manifest_uri,
            }
        }
    }
}

impl GetJobManifestOutput {
    /// Creates a new builder-style object to manufacture [`GetJobManifestOutput`](crate::output::GetJobManifestOutput)
    pub fn builder() -> crate::output::get_job_manifest_output::Builder {
        crate::output::get_job_manifest_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct GetJobUnlockCodeOutput {
    #[serde(rename = "UnlockCode")]
    pub unlock_code: std::option::Option<std::string::String>,
}
/// See [`GetJobUnlockCodeOutput`](crate::output::GetJobUnlockCodeOutput)
pub mod get_job_unlock_code_output {
    /// A builder for [`GetJobUnlockCodeOutput`](crate::output::GetJobUnlockCodeOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        unlock_code: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn unlock_code(mut self, input: impl Into<std::string::String>) -> Self {
            self.unlock_code = Some(input.into());
            self
        }
        pub fn set_unlock_code(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.unlock_code = input;
            self
        }
        /// Consumes the builder and constructs a [`GetJobUnlockCodeOutput`](crate::output::GetJobUnlockCodeOutput)
        pub fn build(self) -> crate::output::GetJobUnlockCodeOutput {
            crate::output::GetJobUnlockCodeOutput {
                unlock_code: self.unlock_code,
            }
        }
    }
}

impl GetJobUnlockCodeOutput {
    /// Creates a new builder-style object to manufacture [`GetJobUnlockCodeOutput`](crate::output::GetJobUnlockCodeOutput)
    pub fn builder() -> crate::output::get_job_unlock_code_output::Builder {
        crate::output::get_job_unlock_code_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct GetSnowballUsageOutput {
    #[serde(rename = "SnowballLimit")]
    pub snowball_limit: std::option::Option<i32>,
    #[serde(rename = "SnowballsInUse")]
    pub snowballs_in_use: std::option::Option<i32>,
}
/// See [`GetSnowballUsageOutput`](crate::output::GetSnowballUsageOutput)
pub mod get_snowball_usage_output {
    /// A builder for [`GetSnowballUsageOutput`](crate::output::GetSnowballUsageOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        snowball_limit: std::option::Option<i32>,
        snowballs_in_use: std::option::Option<i32>,
    }
    impl Builder {
        pub fn snowball_limit(mut self, input: i32) -> Self {
            self.snowball_limit = Some(input);
            self
        }
        pub fn set_snowball_limit(mut self, input: std::option::Option<i32>) -> Self {
            self.snowball_limit = input;
            self
        }
        pub fn snowballs_in_use(mut self, input: i32) -> Self {
            self.snowballs_in_use = Some(input);
            self
        }
        pub fn set_snowballs_in_use(mut self, input: std::option::Option<i32>) -> Self {
            self.snowballs_in_use = input;
            self
        }
        /// Consumes the builder and constructs a [`GetSnowballUsageOutput`](crate::output::GetSnowballUsageOutput)
        pub fn build(self) -> crate::output::GetSnowballUsageOutput {
            crate::output::GetSnowballUsageOutput {
                snowball_limit: self.snowball_limit,
                snowballs_in_use: self.snowballs_in_use,
            }
        }
    }
}

impl GetSnowballUsageOutput {
    /// Creates a new builder-style object to manufacture [`GetSnowballUsageOutput`](crate::output::GetSnowballUsageOutput)
    pub fn builder() -> crate::output::get_snowball_usage_output::Builder {
        crate::output::get_snowball_usage_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct GetSoftwareUpdatesOutput {
    #[serde(rename = "UpdatesURI")]
    pub updates_uri: std::option::Option<std::string::String>,
}
/// See [`GetSoftwareUpdatesOutput`](crate::output::GetSoftwareUpdatesOutput)
pub mod get_software_updates_output {
    /// A builder for [`GetSoftwareUpdatesOutput`](crate::output::GetSoftwareUpdatesOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        updates_uri: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn updates_uri(mut self, input: impl Into<std::string::String>) -> Self {
            self.updates_uri = Some(input.into());
            self
        }
        pub fn set_updates_uri(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.updates_uri = input;
            self
        }
        /// Consumes the builder and constructs a [`GetSoftwareUpdatesOutput`](crate::output::GetSoftwareUpdatesOutput)
        pub fn build(self) -> crate::output::GetSoftwareUpdatesOutput {
            crate::output::GetSoftwareUpdatesOutput {
                updates_uri: self.updates_uri,
            }
        }
    }
}

impl GetSoftwareUpdatesOutput {
    /// Creates a new builder-style object to manufacture [`GetSoftwareUpdatesOutput`](crate::output::GetSoftwareUpdatesOutput)
    pub fn builder() -> crate::output::get_software_updates_output::Builder {
        crate::output::get_software_updates_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct ListClusterJobsOutput {
    #[serde(rename = "JobListEntries")]
    pub job_list_entries: std::option::Option<std::vec::Vec<crate::model::JobListEntry>>,
    #[serde(rename = "NextToken")]
    pub next_token: std::option::Option<std::string::String>,
}
/// See [`ListClusterJobsOutput`](crate::output::ListClusterJobsOutput)
pub mod list_cluster_jobs_output {
    /// A builder for [`ListClusterJobsOutput`](crate::output::ListClusterJobsOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        job_list_entries: std::option::Option<std::vec::Vec<crate::model::JobListEntry>>,
        next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn job_list_entries(mut self, input: impl Into<crate::model::JobListEntry>) -> Self {
            let mut v = self.job_list_entries.unwrap_or_default();
            v.push(input.into());
            self.job_list_entries = Some(v);
            self
        }
        pub fn set_job_list_entries(mut self, input: std::option::Option<std::vec::Vec<crate::model::JobListEntry>>) -> Self {
            self.job_list_entries = input;
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
        /// Consumes the builder and constructs a [`ListClusterJobsOutput`](crate::output::ListClusterJobsOutput)
        pub fn build(self) -> crate::output::ListClusterJobsOutput {
            crate::output::ListClusterJobsOutput {
                job_list_entries: self.job_list_entries,
                next_token: self.next_token,
            }
        }
    }
}

impl ListClusterJobsOutput {
    /// Creates a new builder-style object to manufacture [`ListClusterJobsOutput`](crate::output::ListClusterJobsOutput)
    pub fn builder() -> crate::output::list_cluster_jobs_output::Builder {
        crate::output::list_cluster_jobs_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct ListClustersOutput {
    #[serde(rename = "ClusterListEntries")]
    pub cluster_list_entries: std::option::Option<std::vec::Vec<crate::model::ClusterListEntry>>,
    #[serde(rename = "NextToken")]
    pub next_token: std::option::Option<std::string::String>,
}
/// See [`ListClustersOutput`](crate::output::ListClustersOutput)
pub mod list_clusters_output {
    /// A builder for [`ListClustersOutput`](crate::output::ListClustersOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        cluster_list_entries: std::option::Option<std::vec::Vec<crate::model::ClusterListEntry>>,
        next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn cluster_list_entries(mut self, input: impl Into<crate::model::ClusterListEntry>) -> Self {
            let mut v = self.cluster_list_entries.unwrap_or_default();
            v.push(input.into());
            self.cluster_list_entries = Some(v);
            self
        }
        pub fn set_cluster_list_entries(mut self, input: std::option::Option<std::vec::Vec<crate::model::ClusterListEntry>>) -> Self {
            self.cluster_list_entries = input;
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
        /// Consumes the builder and constructs a [`ListClustersOutput`](crate::output::ListClustersOutput)
        pub fn build(self) -> crate::output::ListClustersOutput {
            crate::output::ListClustersOutput {
                cluster_list_entries: self.cluster_list_entries,
                next_token: self.next_token,
            }
        }
    }
}

impl ListClustersOutput {
    /// Creates a new builder-style object to manufacture [`ListClustersOutput`](crate::output::ListClustersOutput)
    pub fn builder() -> crate::output::list_clusters_output::Builder {
        crate::output::list_clusters_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct ListCompatibleImagesOutput {
    #[serde(rename = "CompatibleImages")]
    pub compatible_images: std::option::Option<std::vec::Vec<crate::model::CompatibleImage>>,
    #[serde(rename = "NextToken")]
    pub next_token: std::option::Option<std::string::String>,
}
/// See [`ListCompatibleImagesOutput`](crate::output::ListCompatibleImagesOutput)
pub mod list_compatible_images_output {
    /// A builder for [`ListCompatibleImagesOutput`](crate::output::ListCompatibleImagesOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        compatible_images: std::option::Option<std::vec::Vec<crate::model::CompatibleImage>>,
        next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn compatible_images(mut self, input: impl Into<crate::model::CompatibleImage>) -> Self {
            let mut v = self.compatible_images.unwrap_or_default();
            v.push(input.into());
            self.compatible_images = Some(v);
            self
        }
        pub fn set_compatible_images(mut self, input: std::option::Option<std::vec::Vec<crate::model::CompatibleImage>>) -> Self {
            self.compatible_images = input;
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
        /// Consumes the builder and constructs a [`ListCompatibleImagesOutput`](crate::output::ListCompatibleImagesOutput)
        pub fn build(self) -> crate::output::ListCompatibleImagesOutput {
            crate::output::ListCompatibleImagesOutput {
                compatible_images: self.compatible_images,
                next_token: self.next_token,
            }
        }
    }
}

impl ListCompatibleImagesOutput {
    /// Creates a new builder-style object to manufacture [`ListCompatibleImagesOutput`](crate::output::ListCompatibleImagesOutput)
    pub fn builder() -> crate::output::list_compatible_images_output::Builder {
        crate::output::list_compatible_images_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct ListJobsOutput {
    #[serde(rename = "JobListEntries")]
    pub job_list_entries: std::option::Option<std::vec::Vec<crate::model::JobListEntry>>,
    #[serde(rename = "NextToken")]
    pub next_token: std::option::Option<std::string::String>,
}
/// See [`ListJobsOutput`](crate::output::ListJobsOutput)
pub mod list_jobs_output {
    /// A builder for [`ListJobsOutput`](crate::output::ListJobsOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        job_list_entries: std::option::Option<std::vec::Vec<crate::model::JobListEntry>>,
        next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn job_list_entries(mut self, input: impl Into<crate::model::JobListEntry>) -> Self {
            let mut v = self.job_list_entries.unwrap_or_default();
            v.push(input.into());
            self.job_list_entries = Some(v);
            self
        }
        pub fn set_job_list_entries(mut self, input: std::option::Option<std::vec::Vec<crate::model::JobListEntry>>) -> Self {
            self.job_list_entries = input;
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
        /// Consumes the builder and constructs a [`ListJobsOutput`](crate::output::ListJobsOutput)
        pub fn build(self) -> crate::output::ListJobsOutput {
            crate::output::ListJobsOutput {
                job_list_entries: self.job_list_entries,
                next_token: self.next_token,
            }
        }
    }
}

impl ListJobsOutput {
    /// Creates a new builder-style object to manufacture [`ListJobsOutput`](crate::output::ListJobsOutput)
    pub fn builder() -> crate::output::list_jobs_output::Builder {
        crate::output::list_jobs_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct UpdateClusterOutput {
}
/// See [`UpdateClusterOutput`](crate::output::UpdateClusterOutput)
pub mod update_cluster_output {
    /// A builder for [`UpdateClusterOutput`](crate::output::UpdateClusterOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
    }
    impl Builder {
        /// Consumes the builder and constructs a [`UpdateClusterOutput`](crate::output::UpdateClusterOutput)
        pub fn build(self) -> crate::output::UpdateClusterOutput {
            crate::output::UpdateClusterOutput {}
        }
    }
}

impl UpdateClusterOutput {
    /// Creates a new builder-style object to manufacture [`UpdateClusterOutput`](crate::output::UpdateClusterOutput)
    pub fn builder() -> crate::output::update_cluster_output::Builder {
        crate::output::update_cluster_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct UpdateJobOutput {
}
/// See [`UpdateJobOutput`](crate::output::UpdateJobOutput)
pub mod update_job_output {
    /// A builder for [`UpdateJobOutput`](crate::output::UpdateJobOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
    }
    impl Builder {
        /// Consumes the builder and constructs a [`UpdateJobOutput`](crate::output::UpdateJobOutput)
        pub fn build(self) -> crate::output::UpdateJobOutput {
            crate::output::UpdateJobOutput {}
        }
    }
}

impl UpdateJobOutput {
    /// Creates a new builder-style object to manufacture [`UpdateJobOutput`](crate::output::UpdateJobOutput)
    pub fn builder() -> crate::output::update_job_output::Builder {
        crate::output::update_job_output::Builder::default()
    }
}
