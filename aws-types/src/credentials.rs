/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! AWS credentials and the asynchronous provider abstraction.
//!
//! [`Credentials`] implement [`ProvideCredentials`] directly, so static keys need no custom
//! provider:
//! ```rust
//! use aws_types::credentials::{Credentials, SharedCredentialsProvider};
//! let provider = SharedCredentialsProvider::new(Credentials::from_keys("akid", "secret", None));
//! ```

use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};
use std::future::Future;
use std::sync::Arc;
use std::time::SystemTime;

/// AWS SDK Credentials
///
/// An opaque struct representing credentials that may be used in an AWS SDK, modeled on
/// the [CRT credentials implementation](https://github.com/awslabs/aws-c-auth/blob/main/source/credentials.c).
///
/// Credentials use an interior Arc so clones share a single copy of the keys. The secret is
/// never printed by `Debug`.
#[derive(Clone)]
pub struct Credentials(Arc<Inner>);

#[derive(Clone, Eq, PartialEq)]
struct Inner {
    access_key_id: String,
    secret_access_key: String,
    session_token: Option<String>,
    expires_after: Option<SystemTime>,
    provider_name: &'static str,
}

impl PartialEq for Credentials {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for Credentials {}

impl Debug for Credentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("provider_name", &self.0.provider_name)
            .field("access_key_id", &self.0.access_key_id)
            .field("secret_access_key", &"** redacted **")
            .field("expires_after", &self.0.expires_after)
            .finish()
    }
}

const STATIC_CREDENTIALS: &str = "Static";

impl Credentials {
    pub fn new(
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
        session_token: Option<String>,
        expires_after: Option<SystemTime>,
        provider_name: &'static str,
    ) -> Self {
        Credentials(Arc::new(Inner {
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
            session_token,
            expires_after,
            provider_name,
        }))
    }

    pub fn from_keys(
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
        session_token: Option<String>,
    ) -> Self {
        Self::new(
            access_key_id,
            secret_access_key,
            session_token,
            None,
            STATIC_CREDENTIALS,
        )
    }

    pub fn access_key_id(&self) -> &str {
        &self.0.access_key_id
    }

    pub fn secret_access_key(&self) -> &str {
        &self.0.secret_access_key
    }

    pub fn expiry(&self) -> Option<SystemTime> {
        self.0.expires_after
    }

    pub fn session_token(&self) -> Option<&str> {
        self.0.session_token.as_deref()
    }

    pub fn provider_name(&self) -> &'static str {
        self.0.provider_name
    }
}

#[derive(Debug)]
#[non_exhaustive]
pub enum CredentialsError {
    /// No credentials were available for this provider
    CredentialsNotLoaded,

    /// The provider experienced an error during credential resolution
    ProviderError(Box<dyn Error + Send + Sync + 'static>),

    /// An unexpected error occured during credential resolution
    Unhandled(Box<dyn Error + Send + Sync + 'static>),
}

impl Display for CredentialsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CredentialsError::CredentialsNotLoaded => write!(
                f,
                "The provider could not provide credentials or required configuration was not set"
            ),
            CredentialsError::ProviderError(err) => {
                write!(f, "An error occured while loading credentials: {}", err)
            }
            CredentialsError::Unhandled(err) => write!(f, "Unexpected credentials error: {}", err),
        }
    }
}

impl Error for CredentialsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CredentialsError::ProviderError(e) | CredentialsError::Unhandled(e) => {
                Some(e.as_ref() as _)
            }
            CredentialsError::CredentialsNotLoaded => None,
        }
    }
}

pub type Result = std::result::Result<Credentials, CredentialsError>;

pub mod future {
    use std::future::Future;
    use std::pin::Pin;
    use std::task::{Context, Poll};

    type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

    enum Inner<'a> {
        Ready(Option<super::Result>),
        Later(BoxFuture<'a, super::Result>),
    }

    /// Future returned by [`ProvideCredentials`](super::ProvideCredentials)
    ///
    /// Providers that already hold credentials resolve without allocating.
    pub struct ProvideCredentials<'a>(Inner<'a>);

    impl<'a> ProvideCredentials<'a> {
        pub fn new(future: impl Future<Output = super::Result> + Send + 'a) -> Self {
            ProvideCredentials(Inner::Later(Box::pin(future)))
        }

        pub fn ready(credentials: super::Result) -> Self {
            ProvideCredentials(Inner::Ready(Some(credentials)))
        }
    }

    impl Future for ProvideCredentials<'_> {
        type Output = super::Result;

        fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
            match &mut self.0 {
                Inner::Ready(result) => {
                    Poll::Ready(result.take().expect("cannot be called twice"))
                }
                Inner::Later(future) => future.as_mut().poll(cx),
            }
        }
    }
}

/// Asynchronous Credentials Provider
pub trait ProvideCredentials: Send + Sync + Debug {
    fn provide_credentials<'a>(&'a self) -> future::ProvideCredentials<'a>
    where
        Self: 'a;
}

impl ProvideCredentials for Credentials {
    fn provide_credentials<'a>(&'a self) -> future::ProvideCredentials<'a>
    where
        Self: 'a,
    {
        future::ProvideCredentials::ready(Ok(self.clone()))
    }
}

/// Credentials provider that can be shared between clients and requests
#[derive(Clone, Debug)]
pub struct SharedCredentialsProvider(Arc<dyn ProvideCredentials>);

impl SharedCredentialsProvider {
    pub fn new(provider: impl ProvideCredentials + 'static) -> Self {
        SharedCredentialsProvider(Arc::new(provider))
    }
}

impl AsRef<dyn ProvideCredentials> for SharedCredentialsProvider {
    fn as_ref(&self) -> &(dyn ProvideCredentials + 'static) {
        self.0.as_ref()
    }
}

impl From<Arc<dyn ProvideCredentials>> for SharedCredentialsProvider {
    fn from(provider: Arc<dyn ProvideCredentials>) -> Self {
        SharedCredentialsProvider(provider)
    }
}

impl ProvideCredentials for SharedCredentialsProvider {
    fn provide_credentials<'a>(&'a self) -> future::ProvideCredentials<'a>
    where
        Self: 'a,
    {
        self.0.provide_credentials()
    }
}

/// Provider that never has credentials, used when none were configured
#[derive(Debug, Default, Clone)]
pub struct NoCredentials;

impl ProvideCredentials for NoCredentials {
    fn provide_credentials<'a>(&'a self) -> future::ProvideCredentials<'a>
    where
        Self: 'a,
    {
        future::ProvideCredentials::ready(Err(CredentialsError::CredentialsNotLoaded))
    }
}

/// Provider backed by an async function
///
/// ```rust
/// use aws_types::credentials::{provide_credentials_fn, Credentials};
/// let provider = provide_credentials_fn(|| async {
///     Ok(Credentials::from_keys("akid", "secret", None))
/// });
/// ```
pub fn provide_credentials_fn<F, Fut>(f: F) -> ProvideCredentialsFn<F>
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = Result> + Send + 'static,
{
    ProvideCredentialsFn { f }
}

#[derive(Clone)]
pub struct ProvideCredentialsFn<F> {
    f: F,
}

impl<F> Debug for ProvideCredentialsFn<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "ProvideCredentialsFn")
    }
}

impl<F, Fut> ProvideCredentials for ProvideCredentialsFn<F>
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = Result> + Send + 'static,
{
    fn provide_credentials<'a>(&'a self) -> future::ProvideCredentials<'a>
    where
        Self: 'a,
    {
        future::ProvideCredentials::new((self.f)())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn debug_redacts_secret() {
        let creds = Credentials::from_keys("AKID", "very-secret", Some("token".to_string()));
        let debug = format!("{:?}", creds);
        assert!(debug.contains("AKID"));
        assert!(!debug.contains("very-secret"));
        assert_eq!(creds.provider_name(), "Static");
        assert_eq!(creds.session_token(), Some("token"));
    }

    #[tokio::test]
    async fn shared_provider() {
        let provider = SharedCredentialsProvider::new(Credentials::from_keys("a", "b", None));
        let creds = provider.provide_credentials().await.unwrap();
        assert_eq!(creds.access_key_id(), "a");

        let err = SharedCredentialsProvider::new(NoCredentials)
            .provide_credentials()
            .await
            .expect_err("no credentials");
        assert!(matches!(err, CredentialsError::CredentialsNotLoaded));
    }

    #[tokio::test]
    async fn fn_provider() {
        let provider = provide_credentials_fn(|| async {
            Ok(Credentials::new("fn", "secret", None, None, "Custom"))
        });
        let creds = provider.provide_credentials().await.unwrap();
        assert_eq!(creds.provider_name(), "Custom");
    }
}
