/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Connectors for exercising a [`Client`](crate::Client) without a network.

#![allow(missing_docs)]

use http::header::{HeaderName, CONTENT_TYPE};
use http::Request;
use protocol_test_helpers::{assert_ok, validate_body, MediaType};
use smithy_http::body::SdkBody;
use std::future::{Future, Ready};
use std::marker::PhantomData;
use std::ops::Deref;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use tokio::sync::oneshot;

use crate::BoxError;

/// Connector that captures a single request and replies with a canned response
#[derive(Debug, Clone)]
pub struct CaptureRequestHandler(Arc<Mutex<CaptureInner>>);

#[derive(Debug)]
struct CaptureInner {
    response: Option<http::Response<SdkBody>>,
    sender: Option<oneshot::Sender<http::Request<SdkBody>>>,
}

/// Receiving half of [`capture_request`]
#[derive(Debug)]
pub struct CaptureRequestReceiver {
    receiver: oneshot::Receiver<http::Request<SdkBody>>,
}

impl CaptureRequestReceiver {
    #[track_caller]
    pub fn expect_request(mut self) -> http::Request<SdkBody> {
        self.receiver.try_recv().expect("no request was received")
    }

    #[track_caller]
    pub fn expect_no_request(mut self) {
        self.receiver
            .try_recv()
            .expect_err("a request was dispatched");
    }
}

impl tower::Service<http::Request<SdkBody>> for CaptureRequestHandler {
    type Response = http::Response<SdkBody>;
    type Error = BoxError;
    type Future = Ready<Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<SdkBody>) -> Self::Future {
        let mut inner = self.0.lock().unwrap();
        if let Some(sender) = inner.sender.take() {
            let _ = sender.send(req);
        }
        std::future::ready(
            inner
                .response
                .take()
                .ok_or_else(|| "capture connector only serves one request".into()),
        )
    }
}

/// Build a connector that records the first request it receives.
///
/// If `response` is `None`, the connector replies `200 OK` with an empty body.
pub fn capture_request(
    response: Option<http::Response<SdkBody>>,
) -> (CaptureRequestHandler, CaptureRequestReceiver) {
    let (tx, rx) = oneshot::channel();
    (
        CaptureRequestHandler(Arc::new(Mutex::new(CaptureInner {
            response: Some(response.unwrap_or_else(|| {
                http::Response::builder()
                    .status(200)
                    .body(SdkBody::empty())
                    .expect("unreachable")
            })),
            sender: Some(tx),
        }))),
        CaptureRequestReceiver { receiver: rx },
    )
}

/// Connector whose futures never resolve
#[derive(Debug)]
pub struct NeverService<R> {
    _resp: PhantomData<fn() -> R>,
}

impl<R> Clone for NeverService<R> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<R> Default for NeverService<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> NeverService<R> {
    pub fn new() -> Self {
        NeverService { _resp: PhantomData }
    }
}

impl<Req, Resp> tower::Service<Req> for NeverService<Resp>
where
    Resp: 'static,
{
    type Response = Resp;
    type Error = BoxError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, _req: Req) -> Self::Future {
        Box::pin(std::future::pending())
    }
}

type ConnectVec<B> = Vec<(http::Request<SdkBody>, http::Response<B>)>;

/// A request the connector received, paired with the request the test expected
#[derive(Debug)]
pub struct ValidateRequest {
    pub expected: http::Request<SdkBody>,
    pub actual: http::Request<SdkBody>,
}

impl ValidateRequest {
    #[track_caller]
    pub fn assert_matches(&self, ignore_headers: &[HeaderName]) {
        let (actual, expected) = (&self.actual, &self.expected);
        assert_eq!(actual.method(), expected.method(), "method mismatch");
        assert_eq!(actual.uri(), expected.uri(), "uri mismatch");
        for (name, value) in expected.headers() {
            if ignore_headers.contains(name) {
                continue;
            }
            let actual_header = actual
                .headers()
                .get(name)
                .unwrap_or_else(|| panic!("Header {:?} missing", name));
            assert_eq!(actual_header, value, "Header mismatch for {:?}", name);
        }
        let media_type = actual
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(MediaType::from)
            .unwrap_or(MediaType::Other);
        let actual_body = actual.body().bytes().unwrap_or(&[]);
        match expected.body().bytes().map(std::str::from_utf8) {
            Some(Ok(expected_body)) => {
                assert_ok(validate_body(actual_body, expected_body, media_type))
            }
            _ => assert_eq!(actual_body, expected.body().bytes().unwrap_or(&[])),
        }
    }
}

/// Connector that replays a fixed sequence of responses.
///
/// Every request is recorded next to the request the test expected at that
/// position so that it can be inspected once the client call returns.
///
/// ```rust
/// use smithy_client::test_connection::TestConnection;
/// use smithy_http::body::SdkBody;
/// let events = vec![(
///    http::Request::new(SdkBody::from("request body")),
///    http::Response::builder()
///        .status(200)
///        .body("response body")
///        .unwrap(),
/// )];
/// let conn = TestConnection::new(events);
/// let client = smithy_client::Client::from(conn);
/// ```
#[derive(Debug)]
pub struct TestConnection<B> {
    data: Arc<Mutex<ConnectVec<B>>>,
    requests: Arc<Mutex<Vec<ValidateRequest>>>,
}

impl<B> Clone for TestConnection<B> {
    fn clone(&self) -> Self {
        TestConnection {
            data: self.data.clone(),
            requests: self.requests.clone(),
        }
    }
}

impl<B> TestConnection<B> {
    pub fn new(mut data: ConnectVec<B>) -> Self {
        data.reverse();
        TestConnection {
            data: Arc::new(Mutex::new(data)),
            requests: Default::default(),
        }
    }

    pub fn requests(&self) -> impl Deref<Target = Vec<ValidateRequest>> + '_ {
        self.requests.lock().unwrap()
    }

    pub fn remaining(&self) -> usize {
        self.data.lock().unwrap().len()
    }

    #[track_caller]
    pub fn assert_requests_match(&self, ignore_headers: &[HeaderName]) {
        for req in self.requests().iter() {
            req.assert_matches(ignore_headers)
        }
        let remaining_requests = self.remaining();
        let actual_requests = self.requests().len();
        assert_eq!(
            remaining_requests, 0,
            "Expected {} additional requests ({} were made)",
            remaining_requests, actual_requests
        );
    }
}

impl<B> tower::Service<http::Request<SdkBody>> for TestConnection<B>
where
    SdkBody: From<B>,
{
    type Response = http::Response<SdkBody>;
    type Error = BoxError;
    type Future = Ready<Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, actual: Request<SdkBody>) -> Self::Future {
        let next = self.data.lock().unwrap().pop();
        match next {
            Some((expected, resp)) => {
                self.requests
                    .lock()
                    .unwrap()
                    .push(ValidateRequest { expected, actual });
                std::future::ready(Ok(resp.map(SdkBody::from)))
            }
            None => std::future::ready(Err("no more responses were loaded".into())),
        }
    }
}

impl<B> From<TestConnection<B>> for crate::Client<TestConnection<B>, tower::layer::util::Identity>
where
    B: Send + 'static,
    SdkBody: From<B>,
{
    fn from(tc: TestConnection<B>) -> Self {
        crate::Builder::new()
            .middleware(tower::layer::util::Identity::new())
            .connector(tc)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use crate::test_connection::{capture_request, NeverService, TestConnection};
    use crate::{BoxError, Client, SdkError};
    use bytes::Bytes;
    use smithy_http::body::SdkBody;
    use smithy_http::operation::{self, Metadata, Operation};
    use smithy_http::response::ParseStrictResponse;
    use std::time::Duration;
    use tower::Service;

    fn is_send_sync<T: Send + Sync>(_: T) {}

    fn is_valid_smithy_connector<T>(_: T)
    where
        T: Service<http::Request<SdkBody>, Response = http::Response<SdkBody>>
            + Send
            + Sync
            + Clone
            + 'static,
        T::Error: Into<BoxError> + Send + Sync + 'static,
        T::Future: Send + 'static,
    {
    }

    #[derive(Clone)]
    struct StatusParser;

    impl ParseStrictResponse for StatusParser {
        type Output = Result<String, smithy_types::Error>;

        fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
            if response.status().is_success() {
                Ok(String::from_utf8_lossy(response.body()).to_string())
            } else {
                Err(smithy_types::Error::builder()
                    .code("BadStatus")
                    .message(response.status().as_str())
                    .build())
            }
        }
    }

    fn ping_operation() -> Operation<StatusParser, ()> {
        let request = http::Request::builder()
            .method("POST")
            .uri("https://ping.example.com/")
            .header("content-type", "application/x-amz-json-1.1")
            .body(SdkBody::from(r#"{"ping": true}"#))
            .unwrap();
        Operation::new(operation::Request::new(request), StatusParser)
            .with_metadata(Metadata::new("Ping", "test"))
    }

    #[test]
    fn construct_test_client() {
        let test_conn = TestConnection::<String>::new(vec![]);
        let client: Client<_, _, _> = test_conn.into();
        is_send_sync(client);
    }

    #[test]
    fn oneshot_client() {
        let (tx, _rx) = capture_request(None);
        is_valid_smithy_connector(tx);
    }

    #[test]
    fn never_test() {
        is_valid_smithy_connector(NeverService::new())
    }

    #[tokio::test]
    async fn replays_responses_and_records_requests() {
        let conn = TestConnection::new(vec![(
            http::Request::builder()
                .method("POST")
                .uri("https://ping.example.com/")
                .header("content-type", "application/x-amz-json-1.1")
                .body(SdkBody::from(r#"{ "ping":true }"#))
                .unwrap(),
            http::Response::builder().status(200).body("pong").unwrap(),
        )]);
        let client = Client::from(conn.clone());
        let out = client.call(ping_operation()).await.expect("success");
        assert_eq!(out, "pong");
        conn.assert_requests_match(&[]);
    }

    #[tokio::test]
    async fn service_errors_are_parsed() {
        let conn = TestConnection::new(vec![(
            http::Request::new(SdkBody::empty()),
            http::Response::builder().status(404).body("").unwrap(),
        )]);
        let client = Client::from(conn.clone());
        match client.call(ping_operation()).await {
            Err(SdkError::ServiceError { err, raw }) => {
                assert_eq!(err.code(), Some("BadStatus"));
                assert_eq!(raw.status(), 404);
            }
            other => panic!("expected a service error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn exhausted_connection_is_a_dispatch_failure() {
        let conn = TestConnection::<&'static str>::new(vec![]);
        let client = Client::from(conn);
        let err = client.call(ping_operation()).await.expect_err("no responses");
        assert!(matches!(err, SdkError::DispatchFailure(_)), "{:?}", err);
    }

    #[tokio::test]
    async fn capture_request_sees_the_outgoing_request() {
        let (conn, request) = capture_request(None);
        let client = crate::Builder::new()
            .middleware(tower::layer::util::Identity::new())
            .connector(conn)
            .build();
        let out = client.call(ping_operation()).await.expect("success");
        assert_eq!(out, "");
        let request = request.expect_request();
        assert_eq!(request.uri().host(), Some("ping.example.com"));
        assert_eq!(request.body().bytes(), Some(&b"{\"ping\": true}"[..]));
    }

    #[tokio::test]
    async fn never_service_never_resolves() {
        let client = crate::Builder::new()
            .middleware(tower::layer::util::Identity::new())
            .connector(NeverService::new())
            .build();
        let result = tokio::time::timeout(Duration::from_millis(50), client.call(ping_operation()));
        assert!(result.await.is_err());
    }
}
