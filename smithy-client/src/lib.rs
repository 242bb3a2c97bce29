/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! A Hyper-based Smithy service client.
#![warn(missing_debug_implementations, rust_2018_idioms)]

pub mod bounds;
pub mod dispatch;
pub mod retry;

#[cfg(any(test, feature = "test-util"))]
pub mod test_connection;

#[cfg(feature = "hyper")]
pub mod hyper_impls;

mod builder;
pub use builder::Builder;

pub use smithy_http::result::{SdkError, SdkSuccess};

use smithy_async::rt::sleep::SharedAsyncSleep;
use smithy_http::operation::Operation;
use smithy_http_tower::dispatch::DispatchLayer;
use smithy_http_tower::parse_response::ParseResponseLayer;
use std::error::Error;
use tower::{Service, ServiceBuilder, ServiceExt};
use tracing::{debug_span, Instrument};

type BoxError = Box<dyn Error + Send + Sync>;

/// Smithy service client.
///
/// The service client is customizeable in a number of ways (see [`Builder`]), but most customers
/// can stick with the standard constructor provided by the service crates. The client takes a
/// connector and a middleware. The middleware fills out the [`http::Request`] for each higher-level
/// operation so that it can ultimately be sent to the remote host. The middleware is responsible
/// for filling in any request parameters that aren't specified by the Smithy protocol definition,
/// such as those used for routing (like the URL), authentication, and authorization.
///
/// The middleware takes the form of a [`tower::Layer`] that wraps the actual connection for each
/// request. The [`tower::Service`] that the middleware produces must accept requests of the type
/// [`smithy_http::operation::Request`] and return responses of the type
/// [`http::Response<SdkBody>`](smithy_http::body::SdkBody), most likely by modifying the provided
/// request in place, passing it to the inner service, and then ultimately returning the inner
/// service's response.
///
/// With the `rustls` feature enabled, you can construct a `Client` against a standard HTTPS
/// endpoint using [`Builder::rustls`].
#[derive(Debug)]
pub struct Client<Connector, Middleware, RetryPolicy = retry::Standard> {
    connector: Connector,
    middleware: Middleware,
    retry_policy: RetryPolicy,
    sleep_impl: Option<SharedAsyncSleep>,
}

impl<C, M> Client<C, M> {
    /// Set the standard retry policy's configuration.
    pub fn set_retry_config(&mut self, config: retry::Config) {
        self.retry_policy.with_config(config);
    }

    /// Adjust a standard retry client with the given policy configuration.
    pub fn with_retry_config(mut self, config: retry::Config) -> Self {
        self.set_retry_config(config);
        self
    }
}

impl<C, M, R> Client<C, M, R> {
    /// Set the [`AsyncSleep`](smithy_async::rt::sleep::AsyncSleep) used to wait between retries.
    ///
    /// Without a sleep implementation, failed requests are not retried.
    pub fn set_sleep_impl(&mut self, sleep_impl: Option<SharedAsyncSleep>) {
        self.sleep_impl = sleep_impl;
    }

    /// Returns the connector used by this client
    pub fn connector(&self) -> &C {
        &self.connector
    }
}

impl<C, M, R> Client<C, M, R>
where
    C: bounds::SmithyConnector,
    M: bounds::SmithyMiddleware<C>,
    R: retry::NewRequestPolicy,
{
    /// Dispatch this request to the network
    ///
    /// For ergonomics, this does not include the raw response for successful responses. To
    /// access the raw response use `call_raw`.
    pub async fn call<O, T, E, Retry>(&self, input: Operation<O, Retry>) -> Result<T, SdkError<E>>
    where
        R::Policy: bounds::SmithyRetryPolicy<O, T, E, Retry>,
        bounds::Parsed<<M as bounds::SmithyMiddleware<C>>::Service, O, Retry>:
            Service<Operation<O, Retry>, Response = SdkSuccess<T>, Error = SdkError<E>> + Clone,
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
        R::Policy: bounds::SmithyRetryPolicy<O, T, E, Retry>,
        // This bound is not _technically_ inferred by all the previous bounds, but in practice it
        // is because _we_ know that there is only implementation of Service for Parsed
        // (ParsedResponseService), and it will apply as long as the bounds on C, M, and R hold,
        // and will produce (as expected) Response = SdkSuccess<T>, Error = SdkError<E>. But Rust
        // doesn't know that -- there _could_ theoretically be other implementations of Service for
        // Parsed that don't return those same types. So, we must give the bound.
        bounds::Parsed<<M as bounds::SmithyMiddleware<C>>::Service, O, Retry>:
            Service<Operation<O, Retry>, Response = SdkSuccess<T>, Error = SdkError<E>> + Clone,
    {
        let span = match input.metadata() {
            Some(metadata) => debug_span!(
                "send_operation",
                operation = metadata.name(),
                service = metadata.service()
            ),
            None => debug_span!("send_operation"),
        };
        let connector = self.connector.clone();
        let mut svc = ServiceBuilder::new()
            // Create a new request-scoped policy
            .retry(self.retry_policy.new_request_policy(self.sleep_impl.clone()))
            .layer(ParseResponseLayer::<O, Retry>::new())
            // These layers can be considered as occurring in order. That is, first invoke the
            // customer-provided middleware, then dispatch dispatch over the wire.
            .layer(&self.middleware)
            .layer(DispatchLayer::new())
            .service(connector);
        async move {
            let result = svc.ready().await?.call(input).await;
            match &result {
                Ok(_) => tracing::debug!("operation succeeded"),
                Err(err) => tracing::debug!(error = ?ErrorKindLabel::of(err), "operation failed"),
            }
            result
        }
        .instrument(span)
        .await
    }
}

/// Short label for the failure mode of an `SdkError`, used when logging
#[derive(Debug)]
enum ErrorKindLabel {
    Construction,
    Dispatch,
    Response,
    Service,
}

impl ErrorKindLabel {
    fn of<E>(err: &SdkError<E>) -> Self {
        match err {
            SdkError::ConstructionFailure(_) => ErrorKindLabel::Construction,
            SdkError::DispatchFailure(_) => ErrorKindLabel::Dispatch,
            SdkError::ResponseError { .. } => ErrorKindLabel::Response,
            SdkError::ServiceError { .. } => ErrorKindLabel::Service,
        }
    }
}
