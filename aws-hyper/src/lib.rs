/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! The AWS middleware stack and the HTTPS client shared by every service crate.

#![warn(missing_debug_implementations, rust_2018_idioms)]

use aws_auth::middleware::CredentialsStage;
use aws_endpoint::AwsEndpointStage;
use aws_http::user_agent::UserAgentStage;
use aws_sig_auth::middleware::SigV4SigningStage;
use aws_sig_auth::signer::SigV4Signer;
use smithy_async::rt::sleep::SharedAsyncSleep;
pub use smithy_client::bounds::SmithyConnector;
use smithy_http::body::SdkBody;
use smithy_http::operation::Operation;
use smithy_http::response::ParseHttpResponse;
use smithy_http::retry::ClassifyResponse;
use smithy_http_tower::map_request::{AsyncMapRequestLayer, MapRequestLayer};
use smithy_types::retry::{ProvideErrorKind, RetryConfig};
use std::error::Error;
use tower::layer::util::{Identity, Stack};
use tower::ServiceBuilder;

#[cfg(feature = "test-util")]
pub use smithy_client::test_connection;

pub use smithy_client::retry::Config as RetryPolicyConfig;
pub use smithy_client::{SdkError, SdkSuccess};

type AwsMiddlewareStack = Stack<
    MapRequestLayer<SigV4SigningStage>,
    Stack<
        AsyncMapRequestLayer<CredentialsStage>,
        Stack<MapRequestLayer<UserAgentStage>, Stack<MapRequestLayer<AwsEndpointStage>, Identity>>,
    >,
>;

/// AWS Middleware Stack
///
/// This implements the middleware stack for the generated service clients. Requests pass through,
/// in order:
/// 1. endpoint resolution
/// 2. user agent
/// 3. credentials loading
/// 4. SigV4 signing
#[derive(Debug, Default, Clone)]
#[non_exhaustive]
pub struct AwsMiddleware;

impl AwsMiddleware {
    pub fn new() -> Self {
        AwsMiddleware
    }
}

impl<S> tower::Layer<S> for AwsMiddleware {
    type Service = <AwsMiddlewareStack as tower::Layer<S>>::Service;

    fn layer(&self, inner: S) -> Self::Service {
        let endpoint_resolver = MapRequestLayer::for_mapper(AwsEndpointStage);
        let user_agent = MapRequestLayer::for_mapper(UserAgentStage::new());
        let credential_provider = AsyncMapRequestLayer::for_mapper(CredentialsStage::new());
        let signer = MapRequestLayer::for_mapper(SigV4SigningStage::new(SigV4Signer::new()));
        // These layers can be considered as occurring in order, that is, first resolve the
        // endpoint, then set the user agent, then load credentials, then sign.
        ServiceBuilder::new()
            .layer(endpoint_resolver)
            .layer(user_agent)
            .layer(credential_provider)
            .layer(signer)
            .service(inner)
    }
}

/// AWS service client
///
/// A [`smithy_client::Client`] preconfigured with the AWS middleware and the standard retry
/// policy. Operations carry [`AwsErrorRetryPolicy`](aws_http::AwsErrorRetryPolicy) to classify
/// their responses.
#[derive(Debug)]
pub struct Client<C> {
    inner: smithy_client::Client<C, AwsMiddleware>,
}

impl<C> Client<C> {
    /// Build a client over `connector`
    ///
    /// Retries wait on `sleep_impl`. Without one, failed requests are returned as-is.
    pub fn new(
        connector: C,
        retry_config: &RetryConfig,
        sleep_impl: Option<SharedAsyncSleep>,
    ) -> Self {
        Client {
            inner: smithy_client::Builder::new()
                .connector(connector)
                .middleware(AwsMiddleware::new())
                .retry_config(retry_config.into())
                .sleep_impl(sleep_impl)
                .build(),
        }
    }

    pub fn connector(&self) -> &C {
        self.inner.connector()
    }
}

impl<C> Client<C>
where
    C: SmithyConnector,
{
    /// Dispatch this request to the network
    ///
    /// For ergonomics, this does not include the raw response for successful responses. To
    /// access the raw response use `call_raw`.
    pub async fn call<O, T, E, Retry>(&self, input: Operation<O, Retry>) -> Result<T, SdkError<E>>
    where
        O: ParseHttpResponse<SdkBody, Output = Result<T, E>> + Send + Sync + Clone + 'static,
        T: Send + Sync + 'static,
        E: Error + ProvideErrorKind + Send + Sync + 'static,
        Retry: ClassifyResponse<SdkSuccess<T>, SdkError<E>> + Send + Sync + Clone + 'static,
    {
        self.call_raw(input).await.map(|res| res.parsed)
    }

    /// Dispatch this request to the network
    ///
    /// The returned result contains the raw HTTP response which can be useful for debugging or
    /// implementing unsupported features.
    pub async fn call_raw<O, T, E, Retry>(
        &self,
        input: Operation<O, Retry>,
    ) -> Result<SdkSuccess<T>, SdkError<E>>
    where
        O: ParseHttpResponse<SdkBody, Output = Result<T, E>> + Send + Sync + Clone + 'static,
        T: Send + Sync + 'static,
        E: Error + ProvideErrorKind + Send + Sync + 'static,
        Retry: ClassifyResponse<SdkSuccess<T>, SdkError<E>> + Send + Sync + Clone + 'static,
    {
        self.inner.call_raw(input).await
    }
}

/// The default HTTPS connector
#[cfg(feature = "rustls")]
pub type StandardConnector =
    smithy_client::hyper_impls::Adapter<smithy_client::hyper_impls::Https>;

/// A client over the default HTTPS connector
#[cfg(feature = "rustls")]
pub type StandardClient = Client<StandardConnector>;

#[cfg(feature = "rustls")]
impl StandardClient {
    /// Build a client that connects over HTTPS with `rustls`
    pub fn https(retry_config: &RetryConfig, sleep_impl: Option<SharedAsyncSleep>) -> Self {
        Client {
            inner: smithy_client::Builder::new()
                .rustls()
                .middleware(AwsMiddleware::new())
                .retry_config(retry_config.into())
                .sleep_impl(sleep_impl)
                .build(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::AwsMiddleware;
    use smithy_client::bounds::SmithyMiddleware;
    use smithy_client::test_connection::TestConnection;

    fn is_smithy_middleware<C, M: SmithyMiddleware<C>>(_: &M) {}

    #[test]
    fn aws_middleware_is_a_smithy_middleware() {
        is_smithy_middleware::<TestConnection<&'static str>, _>(&AwsMiddleware::new());
    }
}
