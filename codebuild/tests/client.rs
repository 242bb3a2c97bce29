/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_hyper::test_connection::{capture_request, TestConnection};
use aws_hyper::SdkError;
use codebuild::model::{ProjectSortByType, SortOrderType};
use codebuild::{Client, Config, Credentials, Region};
use pretty_assertions::assert_eq;
use smithy_http::body::SdkBody;
use smithy_types::retry::RetryConfig;
use std::sync::mpsc;
use std::time::Duration;

fn config() -> Config {
    Config::builder()
        .region(Region::new("us-east-1"))
        .credentials_provider(Credentials::from_keys("AKIDEXAMPLE", "secret", None))
        .retry_config(RetryConfig::disabled())
        .build()
}

fn list_projects_exchange() -> TestConnection<&'static str> {
    TestConnection::new(vec![(
        http::Request::builder()
            .method("POST")
            .uri("https://codebuild.us-east-1.amazonaws.com/")
            .header("content-type", "application/x-amz-json-1.1")
            .header("x-amz-target", "CodeBuild_20161006.ListProjects")
            .body(SdkBody::from(r#"{"sortBy": "NAME", "sortOrder": "ASCENDING"}"#))
            .unwrap(),
        http::Response::builder()
            .status(200)
            .body(r#"{"projects": ["api", "website"], "nextToken": "page-2"}"#)
            .unwrap(),
    )])
}

fn list_projects(client: &Client<TestConnection<&'static str>>) -> codebuild::client::fluent_builders::ListProjects<TestConnection<&'static str>> {
    client
        .list_projects()
        .sort_by(ProjectSortByType::Name)
        .sort_order(SortOrderType::Ascending)
}

fn check(output: codebuild::output::ListProjectsOutput) {
    assert_eq!(
        output.projects,
        Some(vec!["api".to_string(), "website".to_string()])
    );
    assert_eq!(output.next_token.as_deref(), Some("page-2"));
}

#[tokio::test]
async fn send() {
    let conn = list_projects_exchange();
    let client = Client::from_conf_conn(config(), conn.clone());
    check(list_projects(&client).send().await.expect("success"));
    conn.assert_requests_match(&[]);
}

#[test]
fn send_blocking() {
    let conn = list_projects_exchange();
    let client = Client::from_conf_conn(config(), conn.clone());
    check(list_projects(&client).send_blocking().expect("success"));
    conn.assert_requests_match(&[]);
}

#[test]
fn send_callable() {
    let conn = list_projects_exchange();
    let client = Client::from_conf_conn(config(), conn.clone());
    let future = list_projects(&client).send_callable();
    check(future.wait().expect("success"));
    conn.assert_requests_match(&[]);
}

#[test]
fn send_async() {
    let conn = list_projects_exchange();
    let client = Client::from_conf_conn(config(), conn.clone());
    let (tx, rx) = mpsc::channel();
    list_projects(&client).send_async(move |result| {
        tx.send(result).expect("receiver is alive");
    });
    let result = rx
        .recv_timeout(Duration::from_secs(5))
        .expect("callback was invoked");
    check(result.expect("success"));
    assert!(rx.recv_timeout(Duration::from_millis(100)).is_err());
    conn.assert_requests_match(&[]);
}

#[test]
fn invalid_input_never_reaches_the_network() {
    let (conn, request) = capture_request(None);
    let client = Client::from_conf_conn(config(), conn);
    let (tx, rx) = mpsc::channel();
    client.stop_build().send_async(move |result| {
        tx.send(result).expect("receiver is alive");
    });
    let err = rx
        .recv_timeout(Duration::from_secs(5))
        .expect("callback was invoked")
        .expect_err("id is required");
    assert!(matches!(err, SdkError::ConstructionFailure(_)), "{:?}", err);
    request.expect_no_request();
}

#[tokio::test]
async fn clones_share_the_connector() {
    let conn = list_projects_exchange();
    let client = Client::from_conf_conn(config(), conn.clone());
    let other = client.clone();
    check(list_projects(&other).send().await.expect("success"));
    assert_eq!(conn.remaining(), 0);
    assert_eq!(client.conf().region(), Some(&Region::new("us-east-1")));
}
