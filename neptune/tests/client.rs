/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_hyper::test_connection::TestConnection;
use aws_hyper::SdkError;
use neptune::{Client, Config, Credentials, Region};
use smithy_http::body::SdkBody;
use smithy_types::retry::RetryConfig;
use std::sync::mpsc;
use std::time::Duration;

fn config() -> Config {
    Config::builder()
        .region(Region::new("us-west-2"))
        .credentials_provider(Credentials::from_keys("AKIDEXAMPLE", "secret", None))
        .retry_config(RetryConfig::disabled())
        .build()
}

fn delete_db_cluster(response: http::Response<&'static str>) -> TestConnection<&'static str> {
    TestConnection::new(vec![(
        http::Request::builder()
            .method("POST")
            .uri("https://rds.us-west-2.amazonaws.com/")
            .header("content-type", "application/x-www-form-urlencoded")
            .body(SdkBody::from(
                "Action=DeleteDBCluster&Version=2014-10-31&DBClusterIdentifier=graph-1&SkipFinalSnapshot=true",
            ))
            .unwrap(),
        response,
    )])
}

const DELETED: &str = r#"<DeleteDBClusterResponse xmlns="http://rds.amazonaws.com/doc/2014-10-31/">
  <DeleteDBClusterResult>
    <DBCluster>
      <DBClusterIdentifier>graph-1</DBClusterIdentifier>
      <Status>deleting</Status>
    </DBCluster>
  </DeleteDBClusterResult>
  <ResponseMetadata><RequestId>5b6c</RequestId></ResponseMetadata>
</DeleteDBClusterResponse>"#;

const INVALID_STATE: &str = r#"<ErrorResponse xmlns="http://rds.amazonaws.com/doc/2014-10-31/">
  <Error>
    <Type>Sender</Type>
    <Code>InvalidDBClusterStateFault</Code>
    <Message>Cluster cannot be deleted, it still contains DB instances in non-deleting state.</Message>
  </Error>
  <RequestId>9a8b</RequestId>
</ErrorResponse>"#;

#[tokio::test]
async fn send() {
    let conn = delete_db_cluster(http::Response::builder().status(200).body(DELETED).unwrap());
    let client = Client::from_conf_conn(config(), conn.clone());
    let cluster = client
        .delete_db_cluster()
        .db_cluster_identifier("graph-1")
        .skip_final_snapshot(true)
        .send()
        .await
        .expect("success")
        .db_cluster
        .unwrap();
    assert_eq!(cluster.status.as_deref(), Some("deleting"));
    conn.assert_requests_match(&[]);
}

#[test]
fn send_blocking() {
    let conn = delete_db_cluster(http::Response::builder().status(200).body(DELETED).unwrap());
    let client = Client::from_conf_conn(config(), conn.clone());
    let output = client
        .delete_db_cluster()
        .db_cluster_identifier("graph-1")
        .skip_final_snapshot(true)
        .send_blocking()
        .expect("success");
    assert_eq!(
        output.db_cluster.and_then(|c| c.db_cluster_identifier),
        Some("graph-1".to_string())
    );
    conn.assert_requests_match(&[]);
}

#[test]
fn send_callable() {
    let conn = delete_db_cluster(
        http::Response::builder()
            .status(400)
            .body(INVALID_STATE)
            .unwrap(),
    );
    let client = Client::from_conf_conn(config(), conn.clone());
    let future = client
        .delete_db_cluster()
        .db_cluster_identifier("graph-1")
        .skip_final_snapshot(true)
        .send_callable();
    match future.wait() {
        Err(SdkError::ServiceError { err, .. }) => {
            assert!(err.is_invalid_db_cluster_state_fault());
            assert_eq!(err.request_id(), Some("9a8b"));
        }
        other => panic!("expected a service error, got {:?}", other),
    }
    conn.assert_requests_match(&[]);
}

#[test]
fn send_async() {
    let conn = delete_db_cluster(http::Response::builder().status(200).body(DELETED).unwrap());
    let client = Client::from_conf_conn(config(), conn.clone());
    let (tx, rx) = mpsc::channel();
    client
        .delete_db_cluster()
        .db_cluster_identifier("graph-1")
        .skip_final_snapshot(true)
        .send_async(move |result| {
            tx.send(result.map(|output| output.db_cluster.is_some()))
                .expect("receiver is alive");
        });
    let result = rx
        .recv_timeout(Duration::from_secs(5))
        .expect("callback was invoked");
    assert!(matches!(result, Ok(true)), "{:?}", result);
    conn.assert_requests_match(&[]);
}

#[test]
fn callable_futures_run_concurrently() {
    let conn = TestConnection::new(vec![
        (
            http::Request::builder().body(SdkBody::empty()).unwrap(),
            http::Response::builder().status(200).body(DELETED).unwrap(),
        ),
        (
            http::Request::builder().body(SdkBody::empty()).unwrap(),
            http::Response::builder().status(200).body(DELETED).unwrap(),
        ),
    ]);
    let client = Client::from_conf_conn(config(), conn.clone());
    let futures: Vec<_> = (0..2)
        .map(|_| {
            client
                .delete_db_cluster()
                .db_cluster_identifier("graph-1")
                .send_callable()
        })
        .collect();
    for future in futures {
        assert!(future.wait().expect("success").db_cluster.is_some());
    }
    assert_eq!(conn.remaining(), 0);
}
