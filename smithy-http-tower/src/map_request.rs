/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::SendOperationError;
use pin_project_lite::pin_project;
use smithy_http::middleware::{AsyncMapRequest, MapRequest};
use smithy_http::operation;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tower::{Layer, Service};
use tracing::{debug_span, Instrument};

#[derive(Debug, Clone)]
/// Tower service for [`MapRequest`](smithy_http::middleware::MapRequest)
pub struct MapRequestService<S, M> {
    inner: S,
    mapper: M,
}

#[derive(Debug, Clone)]
pub struct MapRequestLayer<M> {
    mapper: M,
}

impl<M: MapRequest> MapRequestLayer<M> {
    pub fn for_mapper(mapper: M) -> Self {
        MapRequestLayer { mapper }
    }
}

impl<S, M> Layer<S> for MapRequestLayer<M>
where
    M: Clone,
{
    type Service = MapRequestService<S, M>;

    fn layer(&self, inner: S) -> Self::Service {
        MapRequestService {
            inner,
            mapper: self.mapper.clone(),
        }
    }
}

pin_project! {
    #[project = EnumProj]
    pub enum MapRequestFuture<F, E> {
        Inner {
            #[pin]
            inner: F
        },
        Ready { inner: Option<E> },
    }
}

impl<O, F, E> Future for MapRequestFuture<F, E>
where
    F: Future<Output = Result<O, E>>,
{
    type Output = Result<O, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match self.project() {
            EnumProj::Inner { inner: f } => f.poll(cx),
            EnumProj::Ready { inner: e } => Poll::Ready(Err(e.take().expect("polled after ready"))),
        }
    }
}

impl<S, M> Service<operation::Request> for MapRequestService<S, M>
where
    S: Service<operation::Request, Error = SendOperationError>,
    M: MapRequest,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = MapRequestFuture<S::Future, S::Error>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: operation::Request) -> Self::Future {
        match self
            .mapper
            .apply(req)
            .map_err(|e| SendOperationError::RequestConstructionError(e.into()))
        {
            Err(e) => MapRequestFuture::Ready { inner: Some(e) },
            Ok(req) => MapRequestFuture::Inner {
                inner: self.inner.call(req),
            },
        }
    }
}

/// Tower service for [`AsyncMapRequest`](smithy_http::middleware::AsyncMapRequest)
#[derive(Debug, Clone)]
pub struct AsyncMapRequestService<S, M> {
    inner: S,
    mapper: M,
}

#[derive(Debug, Clone)]
pub struct AsyncMapRequestLayer<M> {
    mapper: M,
}

impl<M: AsyncMapRequest> AsyncMapRequestLayer<M> {
    pub fn for_mapper(mapper: M) -> Self {
        AsyncMapRequestLayer { mapper }
    }
}

impl<S, M> Layer<S> for AsyncMapRequestLayer<M>
where
    M: Clone,
{
    type Service = AsyncMapRequestService<S, M>;

    fn layer(&self, inner: S) -> Self::Service {
        AsyncMapRequestService {
            inner,
            mapper: self.mapper.clone(),
        }
    }
}

type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

impl<S, M> Service<operation::Request> for AsyncMapRequestService<S, M>
where
    S: Service<operation::Request, Error = SendOperationError> + Clone + Send + 'static,
    S::Response: Send + 'static,
    S::Future: Send + 'static,
    M: AsyncMapRequest,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = BoxFuture<Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: operation::Request) -> Self::Future {
        // The service that was driven to readiness moves into the future
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);
        let mapped = self.mapper.apply(req);
        Box::pin(
            async move {
                let req = mapped
                    .await
                    .map_err(|e| SendOperationError::RequestConstructionError(e.into()))?;
                inner.call(req).await
            }
            .instrument(debug_span!("async_map_request")),
        )
    }
}

#[cfg(test)]
mod test {
    use crate::map_request::AsyncMapRequestLayer;
    use crate::SendOperationError;
    use smithy_http::body::SdkBody;
    use smithy_http::middleware::AsyncMapRequest;
    use smithy_http::operation;
    use std::future::Future;
    use std::pin::Pin;
    use tower::{service_fn, BoxError, Layer, Service};

    #[derive(Clone)]
    struct InsertProperty;

    impl AsyncMapRequest for InsertProperty {
        type Error = BoxError;
        type Future = Pin<Box<dyn Future<Output = Result<operation::Request, BoxError>> + Send>>;

        fn apply(&self, request: operation::Request) -> Self::Future {
            Box::pin(async move {
                request.properties().insert("resolved".to_string());
                Ok(request)
            })
        }
    }

    #[tokio::test]
    async fn async_mapper_runs_before_inner() {
        let inner = service_fn(|req: operation::Request| async move {
            let value = req.properties().get::<String>().cloned();
            match value {
                Some(v) => Ok(http::Response::new(SdkBody::from(v))),
                None => Err(SendOperationError::RequestDispatchError("missing".into())),
            }
        });
        let mut svc = AsyncMapRequestLayer::for_mapper(InsertProperty).layer(inner);
        let response = svc
            .call(operation::Request::new(http::Request::new(SdkBody::empty())))
            .await
            .expect("mapper inserted the property");
        assert_eq!(response.body().bytes(), Some("resolved".as_bytes()));
    }
}
