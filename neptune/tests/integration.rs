/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_http::user_agent::AwsUserAgent;
use aws_hyper::test_connection::TestConnection;
use aws_hyper::SdkError;
use http::header::AUTHORIZATION;
use neptune::error::{CreateDBInstanceErrorKind, DescribeDBClustersErrorKind};
use neptune::input::{
    CreateDbClusterInput, CreateDbInstanceInput, DeleteDbInstanceInput, DescribeDbClustersInput,
    DescribeDbInstancesInput,
};
use neptune::model::{Filter, Tag};
use neptune::{Config, Credentials, Region};
use pretty_assertions::assert_eq;
use smithy_http::body::SdkBody;
use smithy_types::retry::RetryConfig;
use smithy_types::Instant;
use std::time::{Duration, UNIX_EPOCH};

fn config() -> Config {
    Config::builder()
        .region(Region::new("us-east-1"))
        .credentials_provider(Credentials::from_keys("AKIDEXAMPLE", "secret", None))
        .build()
}

fn client(conn: &TestConnection<&'static str>) -> aws_hyper::Client<TestConnection<&'static str>> {
    aws_hyper::Client::new(conn.clone(), &RetryConfig::disabled(), None)
}

#[tokio::test]
async fn create_db_cluster() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .method("POST")
            .uri("https://rds.us-east-1.amazonaws.com/")
            .header("content-type", "application/x-www-form-urlencoded")
            .header("host", "rds.us-east-1.amazonaws.com")
            .header("x-amz-date", "20210305T134922Z")
            .body(SdkBody::from(
                "Action=CreateDBCluster\
                 &Version=2014-10-31\
                 &DBClusterIdentifier=graph-1\
                 &VpcSecurityGroupIds.VpcSecurityGroupId.1=sg-0a1b\
                 &VpcSecurityGroupIds.VpcSecurityGroupId.2=sg-2c3d\
                 &Engine=neptune\
                 &Port=8182\
                 &MasterUserPassword=p%40ss%20word\
                 &Tags.Tag.1.Key=team\
                 &Tags.Tag.1.Value=graph\
                 &StorageEncrypted=true",
            ))
            .unwrap(),
        http::Response::builder()
            .status(200)
            .body(
                r#"<CreateDBClusterResponse xmlns="http://rds.amazonaws.com/doc/2014-10-31/">
  <CreateDBClusterResult>
    <DBCluster>
      <DBClusterIdentifier>graph-1</DBClusterIdentifier>
      <Engine>neptune</Engine>
      <Status>creating</Status>
      <Port>8182</Port>
      <MultiAZ>false</MultiAZ>
      <StorageEncrypted>true</StorageEncrypted>
      <AvailabilityZones>
        <AvailabilityZone>us-east-1a</AvailabilityZone>
        <AvailabilityZone>us-east-1b</AvailabilityZone>
      </AvailabilityZones>
      <DBClusterMembers/>
      <ClusterCreateTime>2021-03-05T13:49:22Z</ClusterCreateTime>
    </DBCluster>
  </CreateDBClusterResult>
  <ResponseMetadata>
    <RequestId>3f9c2a</RequestId>
  </ResponseMetadata>
</CreateDBClusterResponse>"#,
            )
            .unwrap(),
    )]);
    let mut op = CreateDbClusterInput::builder()
        .db_cluster_identifier("graph-1")
        .vpc_security_group_ids("sg-0a1b")
        .vpc_security_group_ids("sg-2c3d")
        .engine("neptune")
        .port(8182)
        .master_user_password("p@ss word")
        .tags(Tag::builder().key("team").value("graph").build())
        .storage_encrypted(true)
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    op.properties_mut()
        .insert(UNIX_EPOCH + Duration::from_secs(1614952162));
    op.properties_mut().insert(AwsUserAgent::for_tests());

    let cluster = client(&conn)
        .call(op)
        .await
        .expect("success")
        .db_cluster
        .expect("cluster is set");
    conn.assert_requests_match(&[]);
    assert_eq!(cluster.db_cluster_identifier.as_deref(), Some("graph-1"));
    assert_eq!(cluster.status.as_deref(), Some("creating"));
    assert_eq!(cluster.port, Some(8182));
    assert_eq!(cluster.multi_az, Some(false));
    assert_eq!(cluster.storage_encrypted, Some(true));
    assert_eq!(
        cluster.availability_zones,
        Some(vec!["us-east-1a".to_string(), "us-east-1b".to_string()])
    );
    assert_eq!(cluster.db_cluster_members, Some(vec![]));
    assert_eq!(
        cluster.cluster_create_time,
        Some(Instant::from_epoch_seconds(1614952162))
    );

    let authorization = conn.requests()[0].actual.headers()[AUTHORIZATION]
        .to_str()
        .unwrap()
        .to_string();
    assert!(authorization.starts_with(
        "AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/20210305/us-east-1/rds/aws4_request"
    ));
}

#[tokio::test]
async fn describe_db_instances_with_filters() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .method("POST")
            .uri("https://rds.us-east-1.amazonaws.com/")
            .header("content-type", "application/x-www-form-urlencoded")
            .body(SdkBody::from(
                "Action=DescribeDBInstances\
                 &Version=2014-10-31\
                 &Filters.Filter.1.Name=db-cluster-id\
                 &Filters.Filter.1.Values.Value.1=graph-1\
                 &MaxRecords=20",
            ))
            .unwrap(),
        http::Response::builder()
            .status(200)
            .body(
                r#"<DescribeDBInstancesResponse xmlns="http://rds.amazonaws.com/doc/2014-10-31/">
  <DescribeDBInstancesResult>
    <Marker>page-2</Marker>
    <DBInstances>
      <DBInstance>
        <DBInstanceIdentifier>graph-1-writer</DBInstanceIdentifier>
        <DBInstanceClass>db.r5.large</DBInstanceClass>
        <DBInstanceStatus>available</DBInstanceStatus>
        <Endpoint>
          <Address>graph-1-writer.c1a2b3.us-east-1.neptune.amazonaws.com</Address>
          <Port>8182</Port>
          <HostedZoneId>Z2R2ITUGPM61AM</HostedZoneId>
        </Endpoint>
        <PromotionTier>1</PromotionTier>
        <InstanceCreateTime>2021-03-05T13:49:22.500Z</InstanceCreateTime>
      </DBInstance>
      <DBInstance>
        <DBInstanceIdentifier>graph-1-reader</DBInstanceIdentifier>
        <DBInstanceStatus>creating</DBInstanceStatus>
      </DBInstance>
    </DBInstances>
  </DescribeDBInstancesResult>
  <ResponseMetadata>
    <RequestId>7e1d</RequestId>
  </ResponseMetadata>
</DescribeDBInstancesResponse>"#,
            )
            .unwrap(),
    )]);
    let op = DescribeDbInstancesInput::builder()
        .filters(
            Filter::builder()
                .name("db-cluster-id")
                .values("graph-1")
                .build(),
        )
        .max_records(20)
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    let output = client(&conn).call(op).await.expect("success");
    conn.assert_requests_match(&[]);
    assert_eq!(output.marker.as_deref(), Some("page-2"));
    let instances = output.db_instances.unwrap();
    assert_eq!(instances.len(), 2);
    let writer = &instances[0];
    assert_eq!(writer.db_instance_class.as_deref(), Some("db.r5.large"));
    assert_eq!(writer.promotion_tier, Some(1));
    let endpoint = writer.endpoint.as_ref().unwrap();
    assert_eq!(
        endpoint.address.as_deref(),
        Some("graph-1-writer.c1a2b3.us-east-1.neptune.amazonaws.com")
    );
    assert_eq!(endpoint.port, Some(8182));
    assert_eq!(
        writer.instance_create_time,
        Some(Instant::from_secs_and_nanos(1614952162, 500_000_000))
    );
    assert_eq!(instances[1].endpoint, None);
}

#[tokio::test]
async fn empty_result_element() {
    let conn = TestConnection::new(vec![(
        http::Request::builder().body(SdkBody::empty()).unwrap(),
        http::Response::builder()
            .status(200)
            .body(
                r#"<DescribeDBClustersResponse>
  <DescribeDBClustersResult/>
  <ResponseMetadata><RequestId>1</RequestId></ResponseMetadata>
</DescribeDBClustersResponse>"#,
            )
            .unwrap(),
    )]);
    let op = DescribeDbClustersInput::builder()
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    let output = client(&conn).call(op).await.expect("success");
    assert_eq!(output.db_clusters, None);
    assert_eq!(output.marker, None);
}

#[tokio::test]
async fn modeled_fault() {
    let conn = TestConnection::new(vec![(
        http::Request::builder().body(SdkBody::empty()).unwrap(),
        http::Response::builder()
            .status(404)
            .body(
                r#"<ErrorResponse xmlns="http://rds.amazonaws.com/doc/2014-10-31/">
  <Error>
    <Type>Sender</Type>
    <Code>DBClusterNotFoundFault</Code>
    <Message>DBCluster missing not found.</Message>
  </Error>
  <RequestId>a1b2</RequestId>
</ErrorResponse>"#,
            )
            .unwrap(),
    )]);
    let op = DescribeDbClustersInput::builder()
        .db_cluster_identifier("missing")
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    match client(&conn).call(op).await {
        Err(SdkError::ServiceError { err, raw }) => {
            assert_eq!(raw.status(), 404);
            assert!(err.is_db_cluster_not_found_fault());
            assert!(matches!(
                err.kind,
                DescribeDBClustersErrorKind::DbClusterNotFoundFault(_)
            ));
            assert_eq!(err.code(), Some("DBClusterNotFoundFault"));
            assert_eq!(err.message(), Some("DBCluster missing not found."));
            assert_eq!(err.request_id(), Some("a1b2"));
        }
        other => panic!("expected a service error, got {:?}", other),
    }
}

#[tokio::test]
async fn fault_codes_differ_from_shape_names() {
    let conn = TestConnection::new(vec![(
        http::Request::builder().body(SdkBody::empty()).unwrap(),
        http::Response::builder()
            .status(400)
            .body(
                r#"<ErrorResponse>
  <Error>
    <Code>InstanceQuotaExceeded</Code>
    <Message>Instance quota exceeded</Message>
  </Error>
  <RequestId>c3d4</RequestId>
</ErrorResponse>"#,
            )
            .unwrap(),
    )]);
    let op = CreateDbInstanceInput::builder()
        .db_instance_identifier("graph-1-reader")
        .db_instance_class("db.r5.large")
        .engine("neptune")
        .db_cluster_identifier("graph-1")
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    let err = client(&conn)
        .call(op)
        .await
        .expect_err("quota exceeded");
    let err = err.service_error().expect("modeled error");
    assert!(matches!(
        &err.kind,
        CreateDBInstanceErrorKind::InstanceQuotaExceededFault(inner)
            if inner.message() == Some("Instance quota exceeded")
    ));
    assert!(!err.is_db_instance_already_exists_fault());
}

#[tokio::test]
async fn unparseable_error_body() {
    let conn = TestConnection::new(vec![(
        http::Request::builder().body(SdkBody::empty()).unwrap(),
        http::Response::builder()
            .status(503)
            .body("Service Unavailable")
            .unwrap(),
    )]);
    let op = DeleteDbInstanceInput::builder()
        .db_instance_identifier("graph-1-reader")
        .skip_final_snapshot(true)
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    match client(&conn).call(op).await {
        Err(SdkError::ServiceError { err, .. }) => {
            assert_eq!(err.code(), None);
        }
        other => panic!("expected an unhandled error, got {:?}", other),
    }
}

#[test]
fn sensitive_members_are_redacted() {
    let input = CreateDbClusterInput::builder()
        .db_cluster_identifier("graph-1")
        .engine("neptune")
        .master_username("admin")
        .master_user_password("hunter22");
    let debug = format!("{:?}", input);
    assert!(!debug.contains("hunter22"), "{}", debug);
    assert!(debug.contains("*** Sensitive Data Redacted ***"));

    let debug = format!("{:?}", input.build().unwrap());
    assert!(!debug.contains("hunter22"), "{}", debug);
    assert!(debug.contains("admin"));
}

#[test]
fn required_members() {
    assert!(CreateDbInstanceInput::builder()
        .db_instance_identifier("graph-1-reader")
        .engine("neptune")
        .build()
        .is_err());
    assert!(DeleteDbInstanceInput::builder().build().is_err());
    assert!(DescribeDbInstancesInput::builder().build().is_ok());
}
