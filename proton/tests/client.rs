/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_hyper::test_connection::{capture_request, TestConnection};
use aws_hyper::SdkError;
use proton::model::ServiceStatus;
use proton::{Client, Config, Credentials, Region};
use smithy_http::body::SdkBody;
use smithy_types::retry::RetryConfig;
use std::sync::mpsc;
use std::time::Duration;

fn config() -> Config {
    Config::builder()
        .region(Region::new("eu-west-1"))
        .credentials_provider(Credentials::from_keys("AKIDEXAMPLE", "secret", None))
        .retry_config(RetryConfig::disabled())
        .build()
}

fn get_service() -> TestConnection<&'static str> {
    TestConnection::new(vec![(
        http::Request::builder()
            .method("POST")
            .uri("https://proton.eu-west-1.amazonaws.com/")
            .header("content-type", "application/x-amz-json-1.0")
            .header("x-amz-target", "AwsProton20200720.GetService")
            .body(SdkBody::from(r#"{"name": "frontend"}"#))
            .unwrap(),
        http::Response::builder()
            .status(200)
            .body(r#"{"service": {"name": "frontend", "status": "ACTIVE"}}"#)
            .unwrap(),
    )])
}

#[tokio::test]
async fn send() {
    let conn = get_service();
    let client = Client::from_conf_conn(config(), conn.clone());
    let service = client
        .get_service()
        .name("frontend")
        .send()
        .await
        .expect("success")
        .service
        .unwrap();
    assert_eq!(service.status, Some(ServiceStatus::Active));
    conn.assert_requests_match(&[]);
}

#[test]
fn send_blocking() {
    let conn = get_service();
    let client = Client::from_conf_conn(config(), conn.clone());
    let output = client
        .get_service()
        .name("frontend")
        .send_blocking()
        .expect("success");
    assert!(output.service.is_some());
    conn.assert_requests_match(&[]);
}

#[test]
fn send_callable() {
    let conn = get_service();
    let client = Client::from_conf_conn(config(), conn.clone());
    let output = client
        .get_service()
        .name("frontend")
        .send_callable()
        .wait()
        .expect("success");
    assert_eq!(
        output.service.and_then(|s| s.name),
        Some("frontend".to_string())
    );
}

#[test]
fn send_async() {
    let conn = get_service();
    let client = Client::from_conf_conn(config(), conn.clone());
    let (tx, rx) = mpsc::channel();
    client
        .get_service()
        .name("frontend")
        .send_async(move |result| {
            tx.send(result.map(|output| output.service.and_then(|s| s.status)))
                .expect("receiver is alive");
        });
    let status = rx
        .recv_timeout(Duration::from_secs(5))
        .expect("callback was invoked")
        .expect("success");
    assert_eq!(status, Some(ServiceStatus::Active));
    conn.assert_requests_match(&[]);
}

#[test]
fn missing_region_is_a_construction_failure() {
    let (conn, request) = capture_request(None);
    let conf = Config::builder()
        .credentials_provider(Credentials::from_keys("AKIDEXAMPLE", "secret", None))
        .build();
    let client = Client::from_conf_conn(conf, conn);
    let err = client
        .delete_environment()
        .name("dev")
        .send_blocking()
        .expect_err("no region");
    assert!(matches!(err, SdkError::ConstructionFailure(_)), "{:?}", err);
    request.expect_no_request();
}
