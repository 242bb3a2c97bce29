/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_hyper::test_connection::TestConnection;
use aws_types::app_name::AppName;
use opsworks::{Client, Config, Credentials, Region};
use smithy_http::body::SdkBody;
use smithy_types::retry::RetryConfig;
use std::sync::mpsc;
use std::time::Duration;

fn config() -> Config {
    Config::builder()
        .region(Region::new("us-east-1"))
        .credentials_provider(Credentials::from_keys("AKIDEXAMPLE", "secret", None))
        .retry_config(RetryConfig::disabled())
        .app_name(AppName::new("ops-console").unwrap())
        .build()
}

fn start_instance() -> TestConnection<&'static str> {
    TestConnection::new(vec![(
        http::Request::builder()
            .method("POST")
            .uri("https://opsworks.us-east-1.amazonaws.com/")
            .header("x-amz-target", "OpsWorks_20130218.StartInstance")
            .body(SdkBody::from(r#"{"InstanceId": "4d6d1710"}"#))
            .unwrap(),
        http::Response::builder().status(200).body("").unwrap(),
    )])
}

#[tokio::test(flavor = "multi_thread")]
async fn callable_on_the_ambient_runtime() {
    let conn = start_instance();
    let client = Client::from_conf_conn(config(), conn.clone());
    client
        .start_instance()
        .instance_id("4d6d1710")
        .send_callable()
        .await
        .expect("success");
    conn.assert_requests_match(&[]);
}

#[test]
fn send_blocking() {
    let conn = start_instance();
    let client = Client::from_conf_conn(config(), conn.clone());
    client
        .start_instance()
        .instance_id("4d6d1710")
        .send_blocking()
        .expect("success");
    conn.assert_requests_match(&[]);
}

#[test]
fn send_async() {
    let conn = start_instance();
    let client = Client::from_conf_conn(config(), conn.clone());
    let (tx, rx) = mpsc::channel();
    client
        .start_instance()
        .instance_id("4d6d1710")
        .send_async(move |result| tx.send(result.is_ok()).expect("receiver is alive"));
    assert_eq!(rx.recv_timeout(Duration::from_secs(5)), Ok(true));
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn user_agent_carries_the_app_name() {
    let conn = start_instance();
    let client = Client::from_conf_conn(config(), conn.clone());
    client
        .start_instance()
        .instance_id("4d6d1710")
        .send()
        .await
        .expect("success");
    let requests = conn.requests();
    let user_agent = requests[0].actual.headers()["x-amz-user-agent"]
        .to_str()
        .unwrap();
    assert!(user_agent.contains("app/ops-console"), "{}", user_agent);
    assert!(user_agent.contains("api/opsworks"), "{}", user_agent);
}
