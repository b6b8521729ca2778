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
/// # async fn docs() -> Result<(), snowball::Error> {
/// let client = snowball::Client::from_env();
/// let output = client.list_jobs()
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
    pub fn cancel_cluster(&self) -> fluent_builders::CancelCluster<C> {
        fluent_builders::CancelCluster::new(self.handle.clone())
    }
    pub fn cancel_job(&self) -> fluent_builders::CancelJob<C> {
        fluent_builders::CancelJob::new(self.handle.clone())
    }
    pub fn create_address(&self) -> fluent_builders::CreateAddress<C> {
        fluent_builders::CreateAddress::new(self.handle.clone())
    }
    pub fn create_cluster(&self) -> fluent_builders::CreateCluster<C> {
        fluent_builders::CreateCluster::new(self.handle.clone())
    }
    pub fn create_job(&self) -> fluent_builders::CreateJob<C> {
        fluent_builders::CreateJob::new(self.handle.clone())
    }
    pub fn describe_address(&self) -> fluent_builders::DescribeAddress<C> {
        fluent_builders::DescribeAddress::new(self.handle.clone())
    }
    pub fn describe_addresses(&self) -> fluent_builders::DescribeAddresses<C> {
        fluent_builders::DescribeAddresses::new(self.handle.clone())
    }
    pub fn describe_cluster(&self) -> fluent_builders::DescribeCluster<C> {
        fluent_builders::DescribeCluster::new(self.handle.clone())
    }
    pub fn describe_job(&self) -> fluent_builders::DescribeJob<C> {
        fluent_builders::DescribeJob::new(self.handle.clone())
    }
    pub fn get_job_manifest(&self) -> fluent_builders::GetJobManifest<C> {
        fluent_builders::GetJobManifest::new(self.handle.clone())
    }
    pub fn get_job_unlock_code(&self) -> fluent_builders::GetJobUnlockCode<C> {
        fluent_builders::GetJobUnlockCode::new(self.handle.clone())
    }
    pub fn get_snowball_usage(&self) -> fluent_builders::GetSnowballUsage<C> {
        fluent_builders::GetSnowballUsage::new(self.handle.clone())
    }
    pub fn get_software_updates(&self) -> fluent_builders::GetSoftwareUpdates<C> {
        fluent_builders::GetSoftwareUpdates::new(self.handle.clone())
    }
    pub fn list_cluster_jobs(&self) -> fluent_builders::ListClusterJobs<C> {
        fluent_builders::ListClusterJobs::new(self.handle.clone())
    }
    pub fn list_clusters(&self) -> fluent_builders::ListClusters<C> {
        fluent_builders::ListClusters::new(self.handle.clone())
    }
    pub fn list_compatible_images(&self) -> fluent_builders::ListCompatibleImages<C> {
        fluent_builders::ListCompatibleImages::new(self.handle.clone())
    }
    pub fn list_jobs(&self) -> fluent_builders::ListJobs<C> {
        fluent_builders::ListJobs::new(self.handle.clone())
    }
    pub fn update_cluster(&self) -> fluent_builders::UpdateCluster<C> {
        fluent_builders::UpdateCluster::new(self.handle.clone())
    }
    pub fn update_job(&self) -> fluent_builders::UpdateJob<C> {
        fluent_builders::UpdateJob::new(self.handle.clone())
    }
}
pub mod fluent_builders {
    /// Cancels a cluster job. You can only cancel a cluster job while it's in the `AwaitingQuorum` status.
    #[derive(std::fmt::Debug)]
    pub struct CancelCluster<C = aws_hyper::conn::Standard> {
        handle: std::sync::Arc<super::Handle<C>>,
        inner: crate::input::cancel_cluster_input::Builder,
    }
    impl<C> CancelCluster<C> {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::CancelClusterOutput,
            aws_hyper::SdkError<crate::error::CancelClusterError>,
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
        pub fn cluster_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.cluster_id(input);
            self
        }
        pub fn set_cluster_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_cluster_id(input);
            self
        }
    }
    /// Cancels the specified job. You can only cancel a job before its `JobState` value changes to `PreparingAppliance`.
    #[derive(std::fmt::Debug)]
    pub struct CancelJob<C = aws_hyper::conn::Standard> {
        handle: std::sync::Arc<super::Handle<C>>,
        inner: crate::input::cancel_job_input::Builder,
    }
    impl<C> CancelJob<C> {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::CancelJobOutput,
            aws_hyper::SdkError<crate::error::CancelJobError>,
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
        pub fn job_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.job_id(input);
            self
        }
        pub fn set_job_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_job_id(input);
            self
        }
    }
    /// Creates an address for a Snow device to be shipped to.
    #[derive(std::fmt::Debug)]
    pub struct CreateAddress<C = aws_hyper::conn::Standard> {
        handle: std::sync::Arc<super::Handle<C>>,
        inner: crate::input::create_address_input::Builder,
    }
    impl<C> CreateAddress<C> {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::CreateAddressOutput,
            aws_hyper::SdkError<crate::error::CreateAddressError>,
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
        pub fn address(mut self, input: impl Into<crate::model::Address>) -> Self {
            self.inner = self.inner.address(input);
            self
        }
        pub fn set_address(mut self, input: std::option::Option<crate::model::Address>) -> Self {
            self.inner = self.inner.set_address(input);
            self
        }
    }
    /// Creates an empty cluster.
    #[derive(std::fmt::Debug)]
    pub struct CreateCluster<C = aws_hyper::conn::Standard> {
        handle: std::sync::Arc<super::Handle<C>>,
        inner: crate::input::create_cluster_input::Builder,
    }
    impl<C> CreateCluster<C> {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::CreateClusterOutput,
            aws_hyper::SdkError<crate::error::CreateClusterError>,
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
        pub fn job_type(mut self, input: impl Into<crate::model::JobType>) -> Self {
            self.inner = self.inner.job_type(input);
            self
        }
        pub fn set_job_type(mut self, input: std::option::Option<crate::model::JobType>) -> Self {
            self.inner = self.inner.set_job_type(input);
            self
        }
        pub fn resources(mut self, input: impl Into<crate::model::JobResource>) -> Self {
            self.inner = self.inner.resources(input);
            self
        }
        pub fn set_resources(mut self, input: std::option::Option<crate::model::JobResource>) -> Self {
            self.inner = self.inner.set_resources(input);
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
        pub fn address_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.address_id(input);
            self
        }
        pub fn set_address_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_address_id(input);
            self
        }
        pub fn kms_key_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.kms_key_arn(input);
            self
        }
        pub fn set_kms_key_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_kms_key_arn(input);
            self
        }
        pub fn role_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.role_arn(input);
            self
        }
        pub fn set_role_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_role_arn(input);
            self
        }
        pub fn snowball_type(mut self, input: impl Into<crate::model::SnowballType>) -> Self {
            self.inner = self.inner.snowball_type(input);
            self
        }
        pub fn set_snowball_type(mut self, input: std::option::Option<crate::model::SnowballType>) -> Self {
            self.inner = self.inner.set_snowball_type(input);
            self
        }
        pub fn shipping_option(mut self, input: impl Into<crate::model::ShippingOption>) -> Self {
            self.inner = self.inner.shipping_option(input);
            self
        }
        pub fn set_shipping_option(mut self, input: std::option::Option<crate::model::ShippingOption>) -> Self {
            self.inner = self.inner.set_shipping_option(input);
            self
        }
        pub fn notification(mut self, input: impl Into<crate::model::Notification>) -> Self {
            self.inner = self.inner.notification(input);
            self
        }
        pub fn set_notification(mut self, input: std::option::Option<crate::model::Notification>) -> Self {
            self.inner = self.inner.set_notification(input);
            self
        }
        pub fn forwarding_address_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.forwarding_address_id(input);
            self
        }
        pub fn set_forwarding_address_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_forwarding_address_id(input);
            self
        }
        pub fn tax_documents(mut self, input: impl Into<crate::model::TaxDocuments>) -> Self {
            self.inner = self.inner.tax_documents(input);
            self
        }
        pub fn set_tax_documents(mut self, input: std::option::Option<crate::model::TaxDocuments>) -> Self {
            self.inner = self.inner.set_tax_documents(input);
            self
        }
    }
    /// Creates a job to import or export data between Amazon S3 and your on-premises data center.
    #[derive(std::fmt::Debug)]
    pub struct CreateJob<C = aws_hyper::conn::Standard> {
        handle: std::sync::Arc<super::Handle<C>>,
        inner: crate::input::create_job_input::Builder,
    }
    impl<C> CreateJob<C> {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::CreateJobOutput,
            aws_hyper::SdkError<crate::error::CreateJobError>,
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
        pub fn job_type(mut self, input: impl Into<crate::model::JobType>) -> Self {
            self.inner = self.inner.job_type(input);
            self
        }
        pub fn set_job_type(mut self, input: std::option::Option<crate::model::JobType>) -> Self {
            self.inner = self.inner.set_job_type(input);
            self
        }
        pub fn resources(mut self, input: impl Into<crate::model::JobResource>) -> Self {
            self.inner = self.inner.resources(input);
            self
        }
        pub fn set_resources(mut self, input: std::option::Option<crate::model::JobResource>) -> Self {
            self.inner = self.inner.set_resources(input);
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
        pub fn address_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.address_id(input);
            self
        }
        pub fn set_address_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_address_id(input);
            self
        }
        pub fn kms_key_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.kms_key_arn(input);
            self
        }
        pub fn set_kms_key_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_kms_key_arn(input);
            self
        }
        pub fn role_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.role_arn(input);
            self
        }
        pub fn set_role_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_role_arn(input);
            self
        }
        pub fn snowball_capacity_preference(mut self, input: impl Into<crate::model::SnowballCapacity>) -> Self {
            self.inner = self.inner.snowball_capacity_preference(input);
            self
        }
        pub fn set_snowball_capacity_preference(mut self, input: std::option::Option<crate::model::SnowballCapacity>) -> Self {
            self.inner = self.inner.set_snowball_capacity_preference(input);
            self
        }
        pub fn shipping_option(mut self, input: impl Into<crate::model::ShippingOption>) -> Self {
            self.inner = self.inner.shipping_option(input);
            self
        }
        pub fn set_shipping_option(mut self, input: std::option::Option<crate::model::ShippingOption>) -> Self {
            self.inner = self.inner.set_shipping_option(input);
            self
        }
        pub fn notification(mut self, input: impl Into<crate::model::Notification>) -> Self {
            self.inner = self.inner.notification(input);
            self
        }
        pub fn set_notification(mut self, input: std::option::Option<crate::model::Notification>) -> Self {
            self.inner = self.inner.set_notification(input);
            self
        }
        pub fn cluster_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.cluster_id(input);
            self
        }
        pub fn set_cluster_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_cluster_id(input);
            self
        }
        pub fn snowball_type(mut self, input: impl Into<crate::model::SnowballType>) -> Self {
            self.inner = self.inner.snowball_type(input);
            self
        }
        pub fn set_snowball_type(mut self, input: std::option::Option<crate::model::SnowballType>) -> Self {
            self.inner = self.inner.set_snowball_type(input);
            self
        }
        pub fn forwarding_address_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.forwarding_address_id(input);
            self
        }
        pub fn set_forwarding_address_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_forwarding_address_id(input);
            self
        }
        pub fn tax_documents(mut self, input: impl Into<crate::model::TaxDocuments>) -> Self {
            self.inner = self.inner.tax_documents(input);
            self
        }
        pub fn set_tax_documents(mut self, input: std::option::Option<crate::model::TaxDocuments>) -> Self {
            self.inner = self.inner.set_tax_documents(input);
            self
        }
        pub fn device_configuration(mut self, input: impl Into<crate::model::DeviceConfiguration>) -> Self {
            self.inner = self.inner.device_configuration(input);
            self
        }
        pub fn set_device_configuration(mut self, input: std::option::Option<crate::model::DeviceConfiguration>) -> Self {
            self.inner = self.inner.set_device_configuration(input);
            self
        }
    }
    /// Takes an `AddressId` and returns specific details about that address in the form of an `Address` object.
    #[derive(std::fmt::Debug)]
    pub struct DescribeAddress<C = aws_hyper::conn::Standard> {
        handle: std::sync::Arc<super::Handle<C>>,
        inner: crate::input::describe_address_input::Builder,
    }
    impl<C> DescribeAddress<C> {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::DescribeAddressOutput,
            aws_hyper::SdkError<crate::error::DescribeAddressError>,
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
        pub fn address_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.address_id(input);
            self
        }
        pub fn set_address_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_address_id(input);
            self
        }
    }
    /// Returns a specified number of `ADDRESS` objects.
    #[derive(std::fmt::Debug)]
    pub struct DescribeAddresses<C = aws_hyper::conn::Standard> {
        handle: std::sync::Arc<super::Handle<C>>,
        inner: crate::input::describe_addresses_input::Builder,
    }
    impl<C> DescribeAddresses<C> {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::DescribeAddressesOutput,
            aws_hyper::SdkError<crate::error::DescribeAddressesError>,
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
    /// Returns information about a specific cluster.
    #[derive(std::fmt::Debug)]
    pub struct DescribeCluster<C = aws_hyper::conn::Standard> {
        handle: std::sync::Arc<super::Handle<C>>,
        inner: crate::input::describe_cluster_input::Builder,
    }
    impl<C> DescribeCluster<C> {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::DescribeClusterOutput,
            aws_hyper::SdkError<crate::error::DescribeClusterError>,
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
        pub fn cluster_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.cluster_id(input);
            self
        }
        pub fn set_cluster_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_cluster_id(input);
            self
        }
    }
    /// Returns information about a specific job.
    #[derive(std::fmt::Debug)]
    pub struct DescribeJob<C = aws_hyper::conn::Standard> {
        handle: std::sync::Arc<super::Handle<C>>,
        inner: crate::input::describe_job_input::Builder,
    }
    impl<C> DescribeJob<C> {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::DescribeJobOutput,
            aws_hyper::SdkError<crate::error::DescribeJobError>,
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
        pub fn job_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.job_id(input);
            self
        }
        pub fn set_job_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_job_id(input);
            self
        }
    }
    /// Returns a link to an Amazon S3 presigned URL for the manifest file associated with the specified `JobId` value.
    #[derive(std::fmt::Debug)]
    pub struct GetJobManifest<C = aws_hyper::conn::Standard> {
        handle: std::sync::Arc<super::Handle<C>>,
        inner: crate::input::get_job_manifest_input::Builder,
    }
    impl<C> GetJobManifest<C> {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::GetJobManifestOutput,
            aws_hyper::SdkError<crate::error::GetJobManifestError>,
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
        pub fn job_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.job_id(input);
            self
        }
        pub fn set_job_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_job_id(input);
            self
        }
    }
    /// Returns the `UnlockCode` code value for the specified job.
    #[derive(std::fmt::Debug)]
    pub struct GetJobUnlockCode<C = aws_hyper::conn::Standard> {
        handle: std::sync::Arc<super::Handle<C>>,
        inner: crate::input::get_job_unlock_code_input::Builder,
    }
    impl<C> GetJobUnlockCode<C> {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::GetJobUnlockCodeOutput,
            aws_hyper::SdkError<crate::error::GetJobUnlockCodeError>,
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
        pub fn job_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.job_id(input);
            self
        }
        pub fn set_job_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_job_id(input);
            self
        }
    }
    /// Returns information about the Snow Family service limit for your account, and also the number of Snow devices your account has in use.
    #[derive(std::fmt::Debug)]
    pub struct GetSnowballUsage<C = aws_hyper::conn::Standard> {
        handle: std::sync::Arc<super::Handle<C>>,
        inner: crate::input::get_snowball_usage_input::Builder,
    }
    impl<C> GetSnowballUsage<C> {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::GetSnowballUsageOutput,
            aws_hyper::SdkError<crate::error::GetSnowballUsageError>,
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
    }
    /// Returns an Amazon S3 presigned URL for an update file associated with a specified `JobId`.
    #[derive(std::fmt::Debug)]
    pub struct GetSoftwareUpdates<C = aws_hyper::conn::Standard> {
        handle: std::sync::Arc<super::Handle<C>>,
        inner: crate::input::get_software_updates_input::Builder,
    }
    impl<C> GetSoftwareUpdates<C> {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::GetSoftwareUpdatesOutput,
            aws_hyper::SdkError<crate::error::GetSoftwareUpdatesError>,
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
        pub fn job_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.job_id(input);
            self
        }
        pub fn set_job_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_job_id(input);
            self
        }
    }
    /// Returns an array of `JobListEntry` objects of the specified length.
    #[derive(std::fmt::Debug)]
    pub struct ListClusterJobs<C = aws_hyper::conn::Standard> {
        handle: std::sync::Arc<super::Handle<C>>,
        inner: crate::input::list_cluster_jobs_input::Builder,
    }
    impl<C> ListClusterJobs<C> {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::ListClusterJobsOutput,
            aws_hyper::SdkError<crate::error::ListClusterJobsError>,
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
        pub fn cluster_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.cluster_id(input);
            self
        }
        pub fn set_cluster_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_cluster_id(input);
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
    /// Returns an array of `ClusterListEntry` objects of the specified length.
    #[derive(std::fmt::Debug)]
    pub struct ListClusters<C = aws_hyper::conn::Standard> {
        handle: std::sync::Arc<super::Handle<C>>,
        inner: crate::input::list_clusters_input::Builder,
    }
    impl<C> ListClusters<C> {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::ListClustersOutput,
            aws_hyper::SdkError<crate::error::ListClustersError>,
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
    /// This action returns a list of the different Amazon EC2 Amazon Machine Images (AMIs) that are owned by your AWS account that would be supported for use on a Snow device.
    #[derive(std::fmt::Debug)]
    pub struct ListCompatibleImages<C = aws_hyper::conn::Standard> {
        handle: std::sync::Arc<super::Handle<C>>,
        inner: crate::input::list_compatible_images_input::Builder,
    }
    impl<C> ListCompatibleImages<C> {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::ListCompatibleImagesOutput,
            aws_hyper::SdkError<crate::error::ListCompatibleImagesError>,
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
    /// Returns an array of `JobListEntry` objects of the specified length.
    #[derive(std::fmt::Debug)]
    pub struct ListJobs<C = aws_hyper::conn::Standard> {
        handle: std::sync::Arc<super::Handle<C>>,
        inner: crate::input::list_jobs_input::Builder,
    }
    impl<C> ListJobs<C> {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::ListJobsOutput,
            aws_hyper::SdkError<crate::error::ListJobsError>,
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
    /// While a cluster's `ClusterState` value is in the `AwaitingQuorum` state, you can update some of the information associated with a cluster.
    #[derive(std::fmt::Debug)]
    pub struct UpdateCluster<C = aws_hyper::conn::Standard> {
        handle: std::sync::Arc<super::Handle<C>>,
        inner: crate::input::update_cluster_input::Builder,
    }
    impl<C> UpdateCluster<C> {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::UpdateClusterOutput,
            aws_hyper::SdkError<crate::error::UpdateClusterError>,
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
        pub fn cluster_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.cluster_id(input);
            self
        }
        pub fn set_cluster_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_cluster_id(input);
            self
        }
        pub fn role_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.role_arn(input);
            self
        }
        pub fn set_role_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_role_arn(input);
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
        pub fn resources(mut self, input: impl Into<crate::model::JobResource>) -> Self {
            self.inner = self.inner.resources(input);
            self
        }
        pub fn set_resources(mut self, input: std::option::Option<crate::model::JobResource>) -> Self {
            self.inner = self.inner.set_resources(input);
            self
        }
        pub fn address_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.address_id(input);
            self
        }
        pub fn set_address_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_address_id(input);
            self
        }
        pub fn shipping_option(mut self, input: impl Into<crate::model::ShippingOption>) -> Self {
            self.inner = self.inner.shipping_option(input);
            self
        }
        pub fn set_shipping_option(mut self, input: std::option::Option<crate::model::ShippingOption>) -> Self {
            self.inner = self.inner.set_shipping_option(input);
            self
        }
        pub fn notification(mut self, input: impl Into<crate::model::Notification>) -> Self {
            self.inner = self.inner.notification(input);
            self
        }
        pub fn set_notification(mut self, input: std::option::Option<crate::model::Notification>) -> Self {
            self.inner = self.inner.set_notification(input);
            self
        }
        pub fn forwarding_address_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.forwarding_address_id(input);
            self
        }
        pub fn set_forwarding_address_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_forwarding_address_id(input);
            self
        }
    }
    /// While a job's `JobState` value is `New`, you can update some of the information associated with a job.
    #[derive(std::fmt::Debug)]
    pub struct UpdateJob<C = aws_hyper::conn::Standard> {
        handle: std::sync::Arc<super::Handle<C>>,
        inner: crate::input::update_job_input::Builder,
    }
    impl<C> UpdateJob<C> {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::UpdateJobOutput,
            aws_hyper::SdkError<crate::error::UpdateJobError>,
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
        pub fn job_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.job_id(input);
            self
        }
        pub fn set_job_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_job_id(input);
            self
        }
        pub fn role_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.role_arn(input);
            self
        }
        pub fn set_role_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_role_arn(input);
            self
        }
        pub fn notification(mut self, input: impl Into<crate::model::Notification>) -> Self {
            self.inner = self.inner.notification(input);
            self
        }
        pub fn set_notification(mut self, input: std::option::Option<crate::model::Notification>) -> Self {
            self.inner = self.inner.set_notification(input);
            self
        }
        pub fn resources(mut self, input: impl Into<crate::model::JobResource>) -> Self {
            self.inner = self.inner.resources(input);
            self
        }
        pub fn set_resources(mut self, input: std::option::Option<crate::model::JobResource>) -> Self {
            self.inner = self.inner.set_resources(input);
            self
        }
        pub fn address_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.address_id(input);
            self
        }
        pub fn set_address_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_address_id(input);
            self
        }
        pub fn shipping_option(mut self, input: impl Into<crate::model::ShippingOption>) -> Self {
            self.inner = self.inner.shipping_option(input);
            self
        }
        pub fn set_shipping_option(mut self, input: std::option::Option<crate::model::ShippingOption>) -> Self {
            self.inner = self.inner.set_shipping_option(input);
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
        pub fn snowball_capacity_preference(mut self, input: impl Into<crate::model::SnowballCapacity>) -> Self {
            self.inner = self.inner.snowball_capacity_preference(input);
            self
        }
        pub fn set_snowball_capacity_preference(mut self, input: std::option::Option<crate::model::SnowballCapacity>) -> Self {
            self.inner = self.inner.set_snowball_capacity_preference(input);
            self
        }
        pub fn forwarding_address_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.forwarding_address_id(input);
            self
        }
        pub fn set_forwarding_address_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_forwarding_address_id(input);
            self
        }
    }
}
