/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Shared configuration, independent of any particular service.
//!
//! A shared [`Config`] is loaded once and passed to several service clients; each client copies
//! what it needs into its own service configuration.

use crate::app_name::AppName;
use crate::credentials::SharedCredentialsProvider;
use crate::os_shim_internal::Env;
use crate::region::{self, Region};
use crate::Credentials;
use smithy_async::rt::executor::SharedExecutor;
use smithy_async::rt::sleep::SharedAsyncSleep;
use smithy_types::retry::RetryConfig;

/// AWS Shared Configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    region: Option<Region>,
    credentials_provider: Option<SharedCredentialsProvider>,
    retry_config: Option<RetryConfig>,
    sleep_impl: Option<SharedAsyncSleep>,
    executor: Option<SharedExecutor>,
    app_name: Option<AppName>,
}

/// Builder for AWS Shared Configuration
#[derive(Debug, Default)]
pub struct Builder {
    region: Option<Region>,
    credentials_provider: Option<SharedCredentialsProvider>,
    retry_config: Option<RetryConfig>,
    sleep_impl: Option<SharedAsyncSleep>,
    executor: Option<SharedExecutor>,
    app_name: Option<AppName>,
}

impl Builder {
    /// Set the region for the builder
    ///
    /// ```rust
    /// use aws_types::config::Config;
    /// use aws_types::region::Region;
    /// let config = Config::builder().region(Region::new("us-east-1")).build();
    /// ```
    pub fn region(mut self, region: impl Into<Option<Region>>) -> Self {
        self.set_region(region);
        self
    }

    pub fn set_region(&mut self, region: impl Into<Option<Region>>) -> &mut Self {
        self.region = region.into();
        self
    }

    pub fn credentials_provider(mut self, provider: SharedCredentialsProvider) -> Self {
        self.set_credentials_provider(Some(provider));
        self
    }

    pub fn set_credentials_provider(
        &mut self,
        provider: Option<SharedCredentialsProvider>,
    ) -> &mut Self {
        self.credentials_provider = provider;
        self
    }

    pub fn retry_config(mut self, retry_config: RetryConfig) -> Self {
        self.set_retry_config(Some(retry_config));
        self
    }

    pub fn set_retry_config(&mut self, retry_config: Option<RetryConfig>) -> &mut Self {
        self.retry_config = retry_config;
        self
    }

    pub fn sleep_impl(mut self, sleep_impl: SharedAsyncSleep) -> Self {
        self.set_sleep_impl(Some(sleep_impl));
        self
    }

    pub fn set_sleep_impl(&mut self, sleep_impl: Option<SharedAsyncSleep>) -> &mut Self {
        self.sleep_impl = sleep_impl;
        self
    }

    /// Set the executor that runs callable and callback style requests
    pub fn executor(mut self, executor: SharedExecutor) -> Self {
        self.set_executor(Some(executor));
        self
    }

    pub fn set_executor(&mut self, executor: Option<SharedExecutor>) -> &mut Self {
        self.executor = executor;
        self
    }

    pub fn app_name(mut self, app_name: AppName) -> Self {
        self.set_app_name(Some(app_name));
        self
    }

    pub fn set_app_name(&mut self, app_name: Option<AppName>) -> &mut Self {
        self.app_name = app_name;
        self
    }

    pub fn build(self) -> Config {
        Config {
            region: self.region,
            credentials_provider: self.credentials_provider,
            retry_config: self.retry_config,
            sleep_impl: self.sleep_impl,
            executor: self.executor,
            app_name: self.app_name,
        }
    }
}

impl Config {
    pub fn region(&self) -> Option<&Region> {
        self.region.as_ref()
    }

    pub fn credentials_provider(&self) -> Option<&SharedCredentialsProvider> {
        self.credentials_provider.as_ref()
    }

    pub fn retry_config(&self) -> Option<&RetryConfig> {
        self.retry_config.as_ref()
    }

    pub fn sleep_impl(&self) -> Option<SharedAsyncSleep> {
        self.sleep_impl.clone()
    }

    pub fn executor(&self) -> Option<SharedExecutor> {
        self.executor.clone()
    }

    pub fn app_name(&self) -> Option<&AppName> {
        self.app_name.as_ref()
    }

    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Load shared configuration from the process environment
    ///
    /// Reads the region from `AWS_REGION` / `AWS_DEFAULT_REGION` and static credentials from
    /// `AWS_ACCESS_KEY_ID`, `AWS_SECRET_ACCESS_KEY` and `AWS_SESSION_TOKEN`.
    pub fn from_env() -> Self {
        Self::from_env_with(Env::real())
    }

    pub fn from_env_with(env: Env) -> Self {
        let region = region::EnvironmentProvider::new_with_env(env.clone()).region();
        let credentials = env_credentials(&env).map(SharedCredentialsProvider::new);
        let app_name = env
            .get_non_empty("AWS_SDK_UA_APP_ID")
            .and_then(|name| AppName::new(name).ok());
        let mut builder = Config::builder().region(region);
        builder
            .set_credentials_provider(credentials)
            .set_app_name(app_name);
        builder.build()
    }
}

fn env_credentials(env: &Env) -> Option<Credentials> {
    let access_key = env.get_non_empty("AWS_ACCESS_KEY_ID")?;
    let secret_key = env
        .get_non_empty("AWS_SECRET_ACCESS_KEY")
        .or_else(|| env.get_non_empty("SECRET_ACCESS_KEY"))?;
    let session_token = env.get_non_empty("AWS_SESSION_TOKEN");
    Some(Credentials::new(
        access_key,
        secret_key,
        session_token,
        None,
        "Environment",
    ))
}

#[cfg(test)]
mod test {
    use super::Config;
    use crate::credentials::ProvideCredentials;
    use crate::os_shim_internal::Env;
    use crate::region::Region;
    use smithy_types::retry::RetryConfig;

    #[tokio::test]
    async fn load_from_env() {
        let conf = Config::from_env_with(Env::from_slice(&[
            ("AWS_REGION", "us-west-2"),
            ("AWS_ACCESS_KEY_ID", "AKID"),
            ("AWS_SECRET_ACCESS_KEY", "SECRET"),
            ("AWS_SDK_UA_APP_ID", "my-app"),
        ]));
        assert_eq!(conf.region(), Some(&Region::new("us-west-2")));
        let creds = conf
            .credentials_provider()
            .expect("credentials set")
            .provide_credentials()
            .await
            .unwrap();
        assert_eq!(creds.access_key_id(), "AKID");
        assert_eq!(creds.session_token(), None);
        assert_eq!(conf.app_name().map(|n| n.as_ref()), Some("my-app"));
    }

    #[test]
    fn empty_env() {
        let conf = Config::from_env_with(Env::from_slice(&[("AWS_ACCESS_KEY_ID", "AKID")]));
        assert!(conf.region().is_none());
        assert!(conf.credentials_provider().is_none());
        assert!(conf.retry_config().is_none());
    }

    #[test]
    fn builder() {
        let conf = Config::builder()
            .region(Region::from_static("eu-central-1"))
            .retry_config(RetryConfig::disabled())
            .build();
        assert_eq!(conf.region().map(|r| r.as_ref()), Some("eu-central-1"));
        assert_eq!(conf.retry_config().map(|r| r.max_attempts()), Some(1));
    }
}
