/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_hyper::test_connection::TestConnection;
use aws_hyper::SdkError;
use devicefarm::{Client, Config, Credentials, Region};
use smithy_async::rt::executor::{SharedExecutor, TokioExecutor};
use smithy_http::body::SdkBody;
use smithy_types::retry::RetryConfig;
use std::sync::mpsc;
use std::time::Duration;

fn get_project_exchange(status: u16, body: &'static str) -> TestConnection<&'static str> {
    TestConnection::new(vec![(
        http::Request::builder()
            .method("POST")
            .uri("https://devicefarm.us-west-2.amazonaws.com/")
            .header("x-amz-target", "DeviceFarm_20150623.GetProject")
            .body(SdkBody::from(
                r#"{"arn": "arn:aws:devicefarm:us-west-2:123456789012:project:5e01a8c7"}"#,
            ))
            .unwrap(),
        http::Response::builder().status(status).body(body).unwrap(),
    )])
}

fn client_with_runtime(
    conn: TestConnection<&'static str>,
    runtime: &tokio::runtime::Runtime,
) -> Client<TestConnection<&'static str>> {
    let conf = Config::builder()
        .region(Region::new("us-west-2"))
        .credentials_provider(Credentials::from_keys("AKIDEXAMPLE", "secret", None))
        .retry_config(RetryConfig::disabled())
        .executor(SharedExecutor::new(TokioExecutor::from_handle(
            runtime.handle().clone(),
        )))
        .build();
    Client::from_conf_conn(conf, conn)
}

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
        .unwrap()
}

const PROJECT: &str = r#"{"project": {
    "arn": "arn:aws:devicefarm:us-west-2:123456789012:project:5e01a8c7",
    "name": "mobile",
    "defaultJobTimeoutMinutes": 150
}}"#;

#[test]
fn blocking_on_a_configured_runtime() {
    let runtime = runtime();
    let conn = get_project_exchange(200, PROJECT);
    let client = client_with_runtime(conn.clone(), &runtime);
    let project = client
        .get_project()
        .arn("arn:aws:devicefarm:us-west-2:123456789012:project:5e01a8c7")
        .send_blocking()
        .expect("success")
        .project
        .unwrap();
    assert_eq!(project.name.as_deref(), Some("mobile"));
    assert_eq!(project.default_job_timeout_minutes, Some(150));
    conn.assert_requests_match(&[]);
}

#[test]
fn callable_resolves_to_a_service_error() {
    let runtime = runtime();
    let conn = get_project_exchange(
        404,
        r#"{"__type": "NotFoundException", "message": "project not found"}"#,
    );
    let client = client_with_runtime(conn.clone(), &runtime);
    let future = client
        .get_project()
        .arn("arn:aws:devicefarm:us-west-2:123456789012:project:5e01a8c7")
        .send_callable();
    match future.wait() {
        Err(SdkError::ServiceError { err, .. }) => {
            assert!(err.is_not_found_exception());
            assert_eq!(err.message(), Some("project not found"));
        }
        other => panic!("expected a service error, got {:?}", other),
    }
}

#[test]
fn callable_can_be_awaited() {
    let runtime = runtime();
    let conn = get_project_exchange(200, PROJECT);
    let client = client_with_runtime(conn.clone(), &runtime);
    let future = client
        .get_project()
        .arn("arn:aws:devicefarm:us-west-2:123456789012:project:5e01a8c7")
        .send_callable();
    let output = runtime.block_on(future).expect("success");
    assert!(output.project.is_some());
    assert_eq!(conn.remaining(), 0);
}

#[test]
fn callback_receives_the_error() {
    let runtime = runtime();
    let conn = get_project_exchange(
        400,
        r#"{"__type": "ServiceAccountException", "message": "account suspended"}"#,
    );
    let client = client_with_runtime(conn, &runtime);
    let (tx, rx) = mpsc::channel();
    client
        .get_project()
        .arn("arn:aws:devicefarm:us-west-2:123456789012:project:5e01a8c7")
        .send_async(move |result| {
            tx.send(result.map(|_| ())).unwrap();
        });
    let err = rx
        .recv_timeout(Duration::from_secs(5))
        .expect("callback ran")
        .expect_err("service error");
    let err = err.service_error().expect("modeled error");
    assert!(err.is_service_account_exception());
}
