/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_types::credentials::{CredentialsError, ProvideCredentials, SharedCredentialsProvider};
use smithy_http::middleware::AsyncMapRequest;
use smithy_http::operation::Request;
use std::future::Future;
use std::pin::Pin;
use thiserror::Error;
use tracing::debug;

/// Middleware stage that loads credentials from a [`SharedCredentialsProvider`]
///
/// The provider is read from the property bag, and the credentials it returns are inserted
/// into the bag for the signing stage.
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct CredentialsStage;

impl CredentialsStage {
    pub fn new() -> Self {
        CredentialsStage
    }

    async fn load_creds(mut request: Request) -> Result<Request, CredentialsStageError> {
        let provider = request
            .properties()
            .get::<SharedCredentialsProvider>()
            .cloned()
            .ok_or(CredentialsStageError::MissingCredentialsProvider)?;
        let creds = provider
            .provide_credentials()
            .await
            .map_err(CredentialsStageError::CredentialsLoadingError)?;
        debug!(provider = creds.provider_name(), "loaded credentials");
        request.properties_mut().insert(creds);
        Ok(request)
    }
}

#[derive(Debug, Error)]
pub enum CredentialsStageError {
    #[error("no credentials provider in the property bag")]
    MissingCredentialsProvider,
    #[error("failed to load credentials: {0}")]
    CredentialsLoadingError(#[source] CredentialsError),
}

type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

impl AsyncMapRequest for CredentialsStage {
    type Error = CredentialsStageError;
    type Future = BoxFuture<Result<Request, Self::Error>>;

    fn apply(&self, request: Request) -> BoxFuture<Result<Request, Self::Error>> {
        Box::pin(Self::load_creds(request))
    }
}

#[cfg(test)]
mod tests {
    use super::{CredentialsStage, CredentialsStageError};
    use crate::set_provider;
    use aws_types::credentials::{NoCredentials, SharedCredentialsProvider};
    use aws_types::Credentials;
    use smithy_http::body::SdkBody;
    use smithy_http::middleware::AsyncMapRequest;
    use smithy_http::operation;
    use tracing_test::traced_test;

    #[tokio::test]
    async fn no_cred_provider_is_an_error() {
        let req = operation::Request::new(http::Request::new(SdkBody::from("some body")));
        let err = CredentialsStage::new()
            .apply(req)
            .await
            .expect_err("no cred provider");
        assert!(matches!(err, CredentialsStageError::MissingCredentialsProvider));
    }

    #[tokio::test]
    async fn provider_failure_is_an_error() {
        let mut req = operation::Request::new(http::Request::new(SdkBody::from("some body")));
        set_provider(
            &mut req.properties_mut(),
            SharedCredentialsProvider::new(NoCredentials),
        );
        let err = CredentialsStage::new()
            .apply(req)
            .await
            .expect_err("provider has no credentials");
        assert!(matches!(err, CredentialsStageError::CredentialsLoadingError(_)));
    }

    #[tokio::test]
    #[traced_test]
    async fn async_map_request_apply_populates_creds() {
        let mut req = operation::Request::new(http::Request::new(SdkBody::from("some body")));
        set_provider(
            &mut req.properties_mut(),
            SharedCredentialsProvider::new(Credentials::from_keys("test", "test", None)),
        );
        let req = CredentialsStage::new()
            .apply(req)
            .await
            .expect("credential provider is in the bag; should succeed");
        assert!(
            req.properties().get::<Credentials>().is_some(),
            "it should set credentials on the request config"
        );
        assert!(logs_contain("loaded credentials"));
    }
}
