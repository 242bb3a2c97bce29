/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_endpoint::{set_endpoint_resolver, Definition};
use aws_http::user_agent::AwsUserAgent;
use aws_http::AwsErrorRetryPolicy;
use aws_hyper::test_connection::TestConnection;
use aws_hyper::SdkError;
use aws_sig_auth::signer::OperationSigningConfig;
use aws_types::credentials::SharedCredentialsProvider;
use aws_types::region::{Region, SigningService};
use aws_types::Credentials;
use bytes::Bytes;
use http::header::{AUTHORIZATION, USER_AGENT};
use smithy_async::rt::sleep::{SharedAsyncSleep, TokioSleep};
use smithy_http::body::SdkBody;
use smithy_http::operation::{self, Metadata, Operation};
use smithy_http::response::ParseStrictResponse;
use smithy_types::retry::RetryConfig;
use std::convert::Infallible;
use std::sync::Arc;
use std::time::{Duration, UNIX_EPOCH};

#[derive(Clone)]
struct TestOperationParser;

impl ParseStrictResponse for TestOperationParser {
    type Output = Result<String, smithy_types::Error>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if response.status().is_success() {
            Ok(String::from_utf8_lossy(response.body()).to_string())
        } else {
            Err(smithy_types::Error::builder()
                .code("InternalFailure")
                .message(response.status().as_str())
                .build())
        }
    }
}

fn test_operation() -> Operation<TestOperationParser, AwsErrorRetryPolicy> {
    let req = operation::Request::new(
        http::Request::builder()
            .method("POST")
            .uri("/")
            .body(SdkBody::from("request body"))
            .unwrap(),
    )
    .augment(|req, conf| {
        set_endpoint_resolver(
            conf,
            Arc::new(Definition::new("{region}.test-service.amazonaws.com")),
        );
        aws_auth::set_provider(
            conf,
            SharedCredentialsProvider::new(Credentials::from_keys(
                "access_key",
                "secret_key",
                None,
            )),
        );
        conf.insert(Region::new("test-region"));
        conf.insert(SigningService::from_static("test-service"));
        conf.insert(OperationSigningConfig::default_config());
        conf.insert(AwsUserAgent::for_tests());
        conf.insert(UNIX_EPOCH + Duration::from_secs(1613414417));
        Result::<_, Infallible>::Ok(req)
    })
    .unwrap();
    Operation::new(req, TestOperationParser)
        .with_metadata(Metadata::new("TestOperation", "test-service"))
        .with_retry_policy(AwsErrorRetryPolicy::new())
}

fn expected_request() -> http::Request<SdkBody> {
    http::Request::builder()
        .method("POST")
        .header(
            AUTHORIZATION,
            "AWS4-HMAC-SHA256 Credential=access_key/20210215/test-region/test-service/aws4_request, \
             SignedHeaders=host;x-amz-date, \
             Signature=e157691d6823e255cb619757bc75d9fb125039c40b4dd3667d55f5e054f24bf0",
        )
        .header("x-amz-date", "20210215T184017Z")
        .header(
            "x-amz-user-agent",
            "aws-sdk-rust/0.123.test api/test-service/0.123 os/windows/XPSP3 lang/rust/1.50.0",
        )
        .uri("https://test-region.test-service.amazonaws.com/")
        .body(SdkBody::from("request body"))
        .unwrap()
}

#[tokio::test]
async fn e2e_test() {
    let conn = TestConnection::new(vec![(
        expected_request(),
        http::Response::builder()
            .status(200)
            .body("response body")
            .unwrap(),
    )]);
    let client = aws_hyper::Client::new(conn.clone(), &RetryConfig::new(), None);
    let resp = client.call(test_operation()).await;
    assert_eq!(resp.expect("successful operation"), "response body");
    conn.assert_requests_match(&[]);
    assert_eq!(
        conn.requests()[0].actual.headers()[USER_AGENT],
        "aws-sdk-rust/0.123.test os/windows/XPSP3 lang/rust/1.50.0"
    );
}

#[tokio::test(start_paused = true)]
async fn server_errors_are_retried() {
    let failure = || {
        http::Response::builder()
            .status(500)
            .body("internal failure")
            .unwrap()
    };
    let conn = TestConnection::new(vec![
        (expected_request(), failure()),
        (expected_request(), failure()),
        (
            expected_request(),
            http::Response::builder().status(200).body("ok").unwrap(),
        ),
    ]);
    let sleep = Some(SharedAsyncSleep::new(TokioSleep::new()));
    let client = aws_hyper::Client::new(conn.clone(), &RetryConfig::new(), sleep);
    let resp = client.call(test_operation()).await;
    assert_eq!(resp.expect("third attempt succeeds"), "ok");
    assert_eq!(conn.requests().len(), 3);
    assert_eq!(conn.remaining(), 0);
}

#[tokio::test(start_paused = true)]
async fn retries_stop_at_the_attempt_limit() {
    let failure = || {
        http::Response::builder()
            .status(503)
            .body("unavailable")
            .unwrap()
    };
    let conn = TestConnection::new(vec![
        (expected_request(), failure()),
        (expected_request(), failure()),
    ]);
    let sleep = Some(SharedAsyncSleep::new(TokioSleep::new()));
    let client = aws_hyper::Client::new(
        conn.clone(),
        &RetryConfig::new().with_max_attempts(2),
        sleep,
    );
    let err = client
        .call(test_operation())
        .await
        .expect_err("both attempts fail");
    match err {
        SdkError::ServiceError { err, raw } => {
            assert_eq!(err.code(), Some("InternalFailure"));
            assert_eq!(raw.status().as_u16(), 503);
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(conn.requests().len(), 2);
}

#[tokio::test]
async fn missing_region_is_a_construction_failure() {
    let conn = TestConnection::<&'static str>::new(vec![]);
    let client = aws_hyper::Client::new(conn.clone(), &RetryConfig::new(), None);
    let mut op = test_operation();
    op.properties_mut().remove::<Region>();
    let err = client
        .call(op)
        .await
        .expect_err("no region in the property bag");
    assert!(
        matches!(err, SdkError::ConstructionFailure(_)),
        "{:?}",
        err
    );
    assert!(conn.requests().is_empty());
}
