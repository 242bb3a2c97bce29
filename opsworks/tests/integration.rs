/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_http::user_agent::AwsUserAgent;
use aws_hyper::test_connection::TestConnection;
use aws_hyper::SdkError;
use http::header::AUTHORIZATION;
use opsworks::error::{CreateLayerErrorKind, StartInstanceErrorKind};
use opsworks::input::{
    CreateInstanceInput, CreateLayerInput, CreateStackInput, DeleteStackInput,
    DescribeStacksInput, StartInstanceInput, StopInstanceInput,
};
use opsworks::model::{
    Architecture, AutoScalingType, LayerType, RootDeviceType, StackConfigurationManager,
};
use opsworks::{Config, Credentials, Region};
use pretty_assertions::assert_eq;
use smithy_http::body::SdkBody;
use smithy_types::retry::RetryConfig;
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
async fn create_stack() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .method("POST")
            .uri("https://opsworks.us-east-1.amazonaws.com/")
            .header("content-type", "application/x-amz-json-1.1")
            .header("x-amz-target", "OpsWorks_20130218.CreateStack")
            .header("host", "opsworks.us-east-1.amazonaws.com")
            .header("x-amz-date", "20210305T134922Z")
            .body(SdkBody::from(
                r#"{
                    "Name": "web-tier",
                    "Region": "us-west-2",
                    "Attributes": {"Color": "rgb(45, 114, 184)"},
                    "ServiceRoleArn": "arn:aws:iam::123456789012:role/aws-opsworks-service-role",
                    "DefaultInstanceProfileArn": "arn:aws:iam::123456789012:instance-profile/aws-opsworks-ec2-role",
                    "ConfigurationManager": {"Name": "Chef", "Version": "12"},
                    "UseCustomCookbooks": false,
                    "DefaultRootDeviceType": "instance-store"
                }"#,
            ))
            .unwrap(),
        http::Response::builder()
            .status(200)
            .body(r#"{"StackId": "935d5c3e-d0cb-4b1e-a2f1-a4cf5e2b1a11"}"#)
            .unwrap(),
    )]);
    let mut op = CreateStackInput::builder()
        .name("web-tier")
        .region("us-west-2")
        .attributes("Color", "rgb(45, 114, 184)")
        .service_role_arn("arn:aws:iam::123456789012:role/aws-opsworks-service-role")
        .default_instance_profile_arn(
            "arn:aws:iam::123456789012:instance-profile/aws-opsworks-ec2-role",
        )
        .configuration_manager(
            StackConfigurationManager::builder()
                .name("Chef")
                .version("12")
                .build(),
        )
        .use_custom_cookbooks(false)
        .default_root_device_type(RootDeviceType::InstanceStore)
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    op.properties_mut()
        .insert(UNIX_EPOCH + Duration::from_secs(1614952162));
    op.properties_mut().insert(AwsUserAgent::for_tests());
    let output = client(&conn).call(op).await.expect("success");
    conn.assert_requests_match(&[]);
    assert_eq!(
        output.stack_id.as_deref(),
        Some("935d5c3e-d0cb-4b1e-a2f1-a4cf5e2b1a11")
    );
    let authorization = conn.requests()[0].actual.headers()[AUTHORIZATION]
        .to_str()
        .unwrap()
        .to_string();
    assert!(authorization.starts_with(
        "AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/20210305/us-east-1/opsworks/aws4_request"
    ));
}

#[tokio::test]
async fn describe_stacks() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .method("POST")
            .uri("https://opsworks.us-east-1.amazonaws.com/")
            .header("x-amz-target", "OpsWorks_20130218.DescribeStacks")
            .body(SdkBody::from(
                r#"{"StackIds": ["935d5c3e-d0cb-4b1e-a2f1-a4cf5e2b1a11"]}"#,
            ))
            .unwrap(),
        http::Response::builder()
            .status(200)
            .body(
                r#"{"Stacks": [{
                    "StackId": "935d5c3e-d0cb-4b1e-a2f1-a4cf5e2b1a11",
                    "Name": "web-tier",
                    "Arn": "arn:aws:opsworks:us-west-2:123456789012:stack/935d5c3e-d0cb-4b1e-a2f1-a4cf5e2b1a11/",
                    "Attributes": {"Color": "rgb(45, 114, 184)"},
                    "DefaultRootDeviceType": "ebs",
                    "CreatedAt": "2021-03-05T13:49:22+00:00",
                    "UseOpsworksSecurityGroups": true
                }]}"#,
            )
            .unwrap(),
    )]);
    let op = DescribeStacksInput::builder()
        .stack_ids("935d5c3e-d0cb-4b1e-a2f1-a4cf5e2b1a11")
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    let stacks = client(&conn)
        .call(op)
        .await
        .expect("success")
        .stacks
        .unwrap();
    conn.assert_requests_match(&[]);
    assert_eq!(stacks.len(), 1);
    let stack = &stacks[0];
    assert_eq!(stack.name.as_deref(), Some("web-tier"));
    assert_eq!(stack.default_root_device_type, Some(RootDeviceType::Ebs));
    assert_eq!(stack.use_opsworks_security_groups, Some(true));
    assert_eq!(
        stack.created_at.as_deref(),
        Some("2021-03-05T13:49:22+00:00")
    );
}

#[tokio::test]
async fn create_layer() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .method("POST")
            .uri("https://opsworks.us-east-1.amazonaws.com/")
            .header("x-amz-target", "OpsWorks_20130218.CreateLayer")
            .body(SdkBody::from(
                r#"{
                    "StackId": "935d5c3e",
                    "Type": "php-app",
                    "Name": "PHP App Server",
                    "Shortname": "php-app",
                    "Packages": ["php-gd", "php-xml"],
                    "EnableAutoHealing": true
                }"#,
            ))
            .unwrap(),
        http::Response::builder()
            .status(200)
            .body(r#"{"LayerId": "2f0d7d34"}"#)
            .unwrap(),
    )]);
    let op = CreateLayerInput::builder()
        .stack_id("935d5c3e")
        .r#type(LayerType::PhpApp)
        .name("PHP App Server")
        .shortname("php-app")
        .packages("php-gd")
        .packages("php-xml")
        .enable_auto_healing(true)
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    let output = client(&conn).call(op).await.expect("success");
    conn.assert_requests_match(&[]);
    assert_eq!(output.layer_id.as_deref(), Some("2f0d7d34"));
}

#[tokio::test]
async fn create_instance() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .method("POST")
            .uri("https://opsworks.us-east-1.amazonaws.com/")
            .header("x-amz-target", "OpsWorks_20130218.CreateInstance")
            .body(SdkBody::from(
                r#"{
                    "StackId": "935d5c3e",
                    "LayerIds": ["2f0d7d34"],
                    "InstanceType": "m5.large",
                    "AutoScalingType": "timer",
                    "Architecture": "x86_64",
                    "RootDeviceType": "ebs"
                }"#,
            ))
            .unwrap(),
        http::Response::builder()
            .status(200)
            .body(r#"{"InstanceId": "4d6d1710"}"#)
            .unwrap(),
    )]);
    let op = CreateInstanceInput::builder()
        .stack_id("935d5c3e")
        .layer_ids("2f0d7d34")
        .instance_type("m5.large")
        .auto_scaling_type(AutoScalingType::Timer)
        .architecture(Architecture::X8664)
        .root_device_type(RootDeviceType::Ebs)
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    let output = client(&conn).call(op).await.expect("success");
    conn.assert_requests_match(&[]);
    assert_eq!(output.instance_id.as_deref(), Some("4d6d1710"));
}

#[tokio::test]
async fn operations_without_output_members() {
    let conn = TestConnection::new(vec![
        (
            http::Request::builder()
                .method("POST")
                .uri("https://opsworks.us-east-1.amazonaws.com/")
                .header("x-amz-target", "OpsWorks_20130218.StopInstance")
                .body(SdkBody::from(r#"{"InstanceId": "4d6d1710", "Force": true}"#))
                .unwrap(),
            http::Response::builder().status(200).body("").unwrap(),
        ),
        (
            http::Request::builder()
                .method("POST")
                .uri("https://opsworks.us-east-1.amazonaws.com/")
                .header("x-amz-target", "OpsWorks_20130218.DeleteStack")
                .body(SdkBody::from(r#"{"StackId": "935d5c3e"}"#))
                .unwrap(),
            http::Response::builder().status(200).body("{}").unwrap(),
        ),
    ]);
    let client = client(&conn);
    let stop = StopInstanceInput::builder()
        .instance_id("4d6d1710")
        .force(true)
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    client.call(stop).await.expect("success");
    let delete = DeleteStackInput::builder()
        .stack_id("935d5c3e")
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    client.call(delete).await.expect("success");
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn resource_not_found() {
    let conn = TestConnection::new(vec![(
        http::Request::builder().body(SdkBody::empty()).unwrap(),
        http::Response::builder()
            .status(400)
            .header("x-amzn-requestid", "0c7f")
            .body(
                r#"{
                    "__type": "com.amazonaws.opsworks#ResourceNotFoundException",
                    "message": "Unable to find instance with ID 4d6d1710"
                }"#,
            )
            .unwrap(),
    )]);
    let op = StartInstanceInput::builder()
        .instance_id("4d6d1710")
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    match client(&conn).call(op).await {
        Err(SdkError::ServiceError { err, .. }) => {
            assert!(err.is_resource_not_found_exception());
            assert!(matches!(
                err.kind,
                StartInstanceErrorKind::ResourceNotFoundException(_)
            ));
            assert_eq!(err.code(), Some("ResourceNotFoundException"));
            assert_eq!(err.request_id(), Some("0c7f"));
            assert_eq!(
                err.to_string(),
                "ResourceNotFoundException: Unable to find instance with ID 4d6d1710"
            );
        }
        other => panic!("expected a service error, got {:?}", other),
    }
}

#[tokio::test]
async fn validation_exception() {
    let conn = TestConnection::new(vec![(
        http::Request::builder().body(SdkBody::empty()).unwrap(),
        http::Response::builder()
            .status(400)
            .body(r#"{"__type": "ValidationException", "message": "Shortname already in use"}"#)
            .unwrap(),
    )]);
    let op = CreateLayerInput::builder()
        .stack_id("935d5c3e")
        .r#type(LayerType::Custom)
        .name("Workers")
        .shortname("php-app")
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    let err = client(&conn).call(op).await.expect_err("validation");
    let err = err.service_error().expect("modeled error");
    assert!(matches!(
        &err.kind,
        CreateLayerErrorKind::ValidationException(inner)
            if inner.message() == Some("Shortname already in use")
    ));
}

#[test]
fn enums() {
    assert_eq!(Architecture::from("x86_64"), Architecture::X8664);
    assert_eq!(Architecture::I386.as_str(), "i386");
    assert_eq!(
        "arm64".parse::<Architecture>().unwrap(),
        Architecture::Unknown("arm64".to_string())
    );
    assert_eq!(LayerType::from("nodejs-app"), LayerType::NodejsApp);
    assert_eq!(AutoScalingType::values(), &["load", "timer"]);
}

#[test]
fn required_members() {
    let err = CreateInstanceInput::builder()
        .stack_id("935d5c3e")
        .instance_type("m5.large")
        .build()
        .expect_err("layer ids are required");
    assert!(err.to_string().contains("layer_ids"), "{}", err);
    assert!(DescribeStacksInput::builder().build().is_ok());
}
