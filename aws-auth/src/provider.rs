/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_types::credentials::{self, future, CredentialsError, ProvideCredentials};
use aws_types::os_shim_internal::Env;
use aws_types::Credentials;

/// Load Credentials from Environment Variables
///
/// Reads `AWS_ACCESS_KEY_ID`, `AWS_SECRET_ACCESS_KEY` (or `SECRET_ACCESS_KEY`) and the optional
/// `AWS_SESSION_TOKEN`. The variables are read on every call so rotated keys are picked up.
#[derive(Debug, Default)]
pub struct EnvironmentVariableCredentialsProvider {
    env: Env,
}

impl EnvironmentVariableCredentialsProvider {
    pub fn new() -> Self {
        Self::new_with_env(Env::real())
    }

    /// Create a provider that reads from a (possibly faked) environment
    pub fn new_with_env(env: Env) -> Self {
        EnvironmentVariableCredentialsProvider { env }
    }

    fn credentials(&self) -> credentials::Result {
        let access_key = self
            .env
            .get_non_empty("AWS_ACCESS_KEY_ID")
            .ok_or(CredentialsError::CredentialsNotLoaded)?;
        let secret_key = self
            .env
            .get_non_empty("AWS_SECRET_ACCESS_KEY")
            .or_else(|| self.env.get_non_empty("SECRET_ACCESS_KEY"))
            .ok_or(CredentialsError::CredentialsNotLoaded)?;
        let session_token = self.env.get_non_empty("AWS_SESSION_TOKEN");
        Ok(Credentials::new(
            access_key,
            secret_key,
            session_token,
            None,
            ENV_PROVIDER,
        ))
    }
}

const ENV_PROVIDER: &str = "EnvironmentVariable";

impl ProvideCredentials for EnvironmentVariableCredentialsProvider {
    fn provide_credentials<'a>(&'a self) -> future::ProvideCredentials<'a>
    where
        Self: 'a,
    {
        future::ProvideCredentials::ready(self.credentials())
    }
}

/// The credentials provider used when none is configured
pub fn default_provider() -> impl ProvideCredentials {
    EnvironmentVariableCredentialsProvider::new()
}

#[cfg(test)]
mod test {
    use super::EnvironmentVariableCredentialsProvider;
    use aws_types::credentials::{CredentialsError, ProvideCredentials};
    use aws_types::os_shim_internal::Env;

    fn make_provider(vars: &[(&str, &str)]) -> EnvironmentVariableCredentialsProvider {
        EnvironmentVariableCredentialsProvider::new_with_env(Env::from_slice(vars))
    }

    #[tokio::test]
    async fn valid_no_token() {
        let provider = make_provider(&[
            ("AWS_ACCESS_KEY_ID", "access"),
            ("AWS_SECRET_ACCESS_KEY", "secret"),
        ]);
        let creds = provider.provide_credentials().await.expect("valid credentials");
        assert_eq!(creds.session_token(), None);
        assert_eq!(creds.access_key_id(), "access");
        assert_eq!(creds.secret_access_key(), "secret");
        assert_eq!(creds.provider_name(), "EnvironmentVariable");
    }

    #[tokio::test]
    async fn valid_with_token() {
        let provider = make_provider(&[
            ("AWS_ACCESS_KEY_ID", "access"),
            ("AWS_SECRET_ACCESS_KEY", "secret"),
            ("AWS_SESSION_TOKEN", "token"),
        ]);
        let creds = provider.provide_credentials().await.expect("valid credentials");
        assert_eq!(creds.session_token().unwrap(), "token");
    }

    #[tokio::test]
    async fn secret_key_fallback() {
        let provider = make_provider(&[
            ("AWS_ACCESS_KEY_ID", "access"),
            ("SECRET_ACCESS_KEY", "secret"),
        ]);
        let creds = provider.provide_credentials().await.expect("valid credentials");
        assert_eq!(creds.secret_access_key(), "secret");
    }

    #[tokio::test]
    async fn missing() {
        let provider = make_provider(&[("AWS_ACCESS_KEY_ID", "access")]);
        let err = provider
            .provide_credentials()
            .await
            .expect_err("no secret key");
        assert!(matches!(err, CredentialsError::CredentialsNotLoaded));

        let provider = make_provider(&[("AWS_ACCESS_KEY_ID", ""), ("AWS_SECRET_ACCESS_KEY", "s")]);
        assert!(provider.provide_credentials().await.is_err());
    }
}
