/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_hyper::test_connection::{capture_request, TestConnection};
use aws_hyper::SdkError;
use mediatailor::model::ChannelState;
use mediatailor::{Client, Config, Credentials, Region};
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

fn describe_channel() -> TestConnection<&'static str> {
    TestConnection::new(vec![(
        http::Request::builder()
            .method("GET")
            .uri("https://api.mediatailor.eu-west-1.amazonaws.com/channel/news")
            .body(SdkBody::empty())
            .unwrap(),
        http::Response::builder()
            .status(200)
            .body(r#"{"ChannelName": "news", "ChannelState": "RUNNING", "tags": {"env": "prod"}}"#)
            .unwrap(),
    )])
}

#[tokio::test]
async fn send() {
    let conn = describe_channel();
    let client = Client::from_conf_conn(config(), conn.clone());
    let output = client
        .describe_channel()
        .channel_name("news")
        .send()
        .await
        .expect("success");
    assert_eq!(output.channel_state, Some(ChannelState::Running));
    assert_eq!(
        output.tags.unwrap().get("env").map(String::as_str),
        Some("prod")
    );
    conn.assert_requests_match(&[]);
}

#[test]
fn send_blocking() {
    let conn = describe_channel();
    let client = Client::from_conf_conn(config(), conn.clone());
    let output = client
        .describe_channel()
        .channel_name("news")
        .send_blocking()
        .expect("success");
    assert_eq!(output.channel_name.as_deref(), Some("news"));
    conn.assert_requests_match(&[]);
}

#[test]
fn send_callable() {
    let conn = describe_channel();
    let client = Client::from_conf_conn(config(), conn.clone());
    let output = client
        .describe_channel()
        .channel_name("news")
        .send_callable()
        .wait()
        .expect("success");
    assert_eq!(output.channel_state, Some(ChannelState::Running));
}

#[test]
fn send_async() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .method("DELETE")
            .uri("https://api.mediatailor.eu-west-1.amazonaws.com/playbackConfiguration/live")
            .body(SdkBody::empty())
            .unwrap(),
        http::Response::builder().status(204).body("").unwrap(),
    )]);
    let client = Client::from_conf_conn(config(), conn.clone());
    let (tx, rx) = mpsc::channel();
    client
        .delete_playback_configuration()
        .name("live")
        .send_async(move |result| tx.send(result.is_ok()).unwrap());
    assert_eq!(rx.recv_timeout(Duration::from_secs(5)), Ok(true));
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn empty_label_fails_before_dispatch() {
    let (conn, request) = capture_request(None);
    let client = Client::from_conf_conn(config(), conn);
    let err = client
        .get_playback_configuration()
        .name("")
        .send()
        .await
        .expect_err("empty label");
    assert!(matches!(err, SdkError::ConstructionFailure(_)), "{:?}", err);
    request.expect_no_request();
}

#[test]
fn callable_construction_failure_is_ready() {
    let (conn, request) = capture_request(None);
    let client = Client::from_conf_conn(config(), conn);
    let err = client
        .create_channel()
        .channel_name("news")
        .send_callable()
        .wait()
        .expect_err("outputs and playback mode are required");
    assert!(matches!(err, SdkError::ConstructionFailure(_)), "{:?}", err);
    request.expect_no_request();
}
