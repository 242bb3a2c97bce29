/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Connectors backed by [`hyper`].

use crate::Builder;
use smithy_http::body::SdkBody;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tower::Service;

/// Adapter from a [`hyper::Client`] to a connector usable by a [`Client`](crate::Client).
///
/// Response bodies are wrapped in [`SdkBody`] so the middleware stack only sees one body type.
#[derive(Clone, Debug)]
pub struct Adapter<C>(hyper::Client<C, SdkBody>);

impl<C> Adapter<C> {
    /// Wrap an existing hyper client
    pub fn new(client: hyper::Client<C, SdkBody>) -> Self {
        Adapter(client)
    }
}

impl<C> Service<http::Request<SdkBody>> for Adapter<C>
where
    C: hyper::client::connect::Connect + Clone + Send + Sync + 'static,
{
    type Response = http::Response<SdkBody>;
    type Error = hyper::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.0.poll_ready(cx)
    }

    fn call(&mut self, req: http::Request<SdkBody>) -> Self::Future {
        let fut = self.0.call(req);
        Box::pin(async move { Ok(fut.await?.map(SdkBody::from)) })
    }
}

#[cfg(feature = "rustls")]
/// The HTTPS connector used by default
pub type Https = hyper_rustls::HttpsConnector<hyper::client::HttpConnector>;

#[cfg(feature = "rustls")]
/// Return a default HTTPS connector backed by the `rustls` crate.
///
/// It requires a minimum TLS version of 1.2.
/// It allows you to connect to both `http` and `https` URLs.
pub fn https() -> Https {
    hyper_rustls::HttpsConnectorBuilder::new()
        .with_native_roots()
        .https_or_http()
        .enable_http1()
        .build()
}

impl<M, R> Builder<(), M, R> {
    /// Connect to the service over HTTPS using rustls.
    #[cfg(feature = "rustls")]
    pub fn rustls(self) -> Builder<Adapter<Https>, M, R> {
        self.hyper(hyper::Client::builder().build(https()))
    }
}

impl<M, R> Builder<(), M, R> {
    /// Use a hyper client as the connector
    pub fn hyper<C>(self, client: hyper::Client<C, SdkBody>) -> Builder<Adapter<C>, M, R> {
        self.connector(Adapter::new(client))
    }
}
