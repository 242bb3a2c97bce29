/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_http::user_agent::AwsUserAgent;
use aws_hyper::test_connection::TestConnection;
use aws_hyper::SdkError;
use devicefarm::error::{GetRunErrorKind, ScheduleRunErrorKind};
use devicefarm::input::{GetRunInput, ListDevicesInput, ScheduleRunInput};
use devicefarm::model::{
    DeviceAvailability, DeviceFilter, DeviceFilterAttribute, DevicePlatform,
    ExecutionConfiguration, ExecutionResult, ExecutionStatus, RuleOperator, ScheduleRunTest,
    TestType,
};
use devicefarm::{Config, Credentials, Region};
use http::header::AUTHORIZATION;
use pretty_assertions::assert_eq;
use smithy_http::body::SdkBody;
use smithy_types::retry::RetryConfig;
use smithy_types::Instant;
use std::time::{Duration, UNIX_EPOCH};

// DeviceFarm is only available in us-west-2
fn config() -> Config {
    Config::builder()
        .region(Region::new("us-west-2"))
        .credentials_provider(Credentials::from_keys("AKIDEXAMPLE", "secret", None))
        .build()
}

fn client(conn: &TestConnection<&'static str>) -> aws_hyper::Client<TestConnection<&'static str>> {
    aws_hyper::Client::new(conn.clone(), &RetryConfig::disabled(), None)
}

#[tokio::test]
async fn schedule_run() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .method("POST")
            .uri("https://devicefarm.us-west-2.amazonaws.com/")
            .header("content-type", "application/x-amz-json-1.1")
            .header("x-amz-target", "DeviceFarm_20150623.ScheduleRun")
            .header("host", "devicefarm.us-west-2.amazonaws.com")
            .header("x-amz-date", "20210305T134922Z")
            .body(SdkBody::from(
                r#"{
                    "projectArn": "arn:aws:devicefarm:us-west-2:123456789012:project:5e01a8c7",
                    "appArn": "arn:aws:devicefarm:us-west-2:123456789012:upload:5e01a8c7/app",
                    "devicePoolArn": "arn:aws:devicefarm:us-west-2:123456789012:devicepool:5e01a8c7/pool",
                    "name": "nightly",
                    "test": {
                        "type": "APPIUM_PYTHON",
                        "testPackageArn": "arn:aws:devicefarm:us-west-2:123456789012:upload:5e01a8c7/tests",
                        "parameters": {"video_recording": "false"}
                    },
                    "executionConfiguration": {"jobTimeoutMinutes": 30, "videoCapture": false}
                }"#,
            ))
            .unwrap(),
        http::Response::builder()
            .status(200)
            .body(
                r#"{"run": {
                    "arn": "arn:aws:devicefarm:us-west-2:123456789012:run:5e01a8c7/0fcac17b",
                    "name": "nightly",
                    "type": "APPIUM_PYTHON",
                    "platform": "ANDROID",
                    "created": 1614952162.5,
                    "status": "SCHEDULING",
                    "result": "PENDING",
                    "counters": {"total": 0, "passed": 0},
                    "totalJobs": 3
                }}"#,
            )
            .unwrap(),
    )]);
    let mut op = ScheduleRunInput::builder()
        .project_arn("arn:aws:devicefarm:us-west-2:123456789012:project:5e01a8c7")
        .app_arn("arn:aws:devicefarm:us-west-2:123456789012:upload:5e01a8c7/app")
        .device_pool_arn("arn:aws:devicefarm:us-west-2:123456789012:devicepool:5e01a8c7/pool")
        .name("nightly")
        .test(
            ScheduleRunTest::builder()
                .r#type(TestType::AppiumPython)
                .test_package_arn("arn:aws:devicefarm:us-west-2:123456789012:upload:5e01a8c7/tests")
                .parameters("video_recording", "false")
                .build(),
        )
        .execution_configuration(
            ExecutionConfiguration::builder()
                .job_timeout_minutes(30)
                .video_capture(false)
                .build(),
        )
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    op.properties_mut()
        .insert(UNIX_EPOCH + Duration::from_secs(1614952162));
    op.properties_mut().insert(AwsUserAgent::for_tests());

    let run = client(&conn)
        .call(op)
        .await
        .expect("success")
        .run
        .expect("run is set");
    conn.assert_requests_match(&[]);
    assert_eq!(run.r#type, Some(TestType::AppiumPython));
    assert_eq!(run.platform, Some(DevicePlatform::Android));
    assert_eq!(run.status, Some(ExecutionStatus::Scheduling));
    assert_eq!(run.result, Some(ExecutionResult::Pending));
    assert_eq!(run.total_jobs, Some(3));
    assert_eq!(run.counters.and_then(|c| c.passed), Some(0));
    assert_eq!(
        run.created,
        Some(Instant::from_secs_and_nanos(1614952162, 500_000_000))
    );

    let authorization = conn.requests()[0].actual.headers()[AUTHORIZATION]
        .to_str()
        .unwrap()
        .to_string();
    assert!(authorization.starts_with(
        "AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/20210305/us-west-2/devicefarm/aws4_request"
    ));
}

#[tokio::test]
async fn list_devices_with_filters() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .method("POST")
            .uri("https://devicefarm.us-west-2.amazonaws.com/")
            .header("x-amz-target", "DeviceFarm_20150623.ListDevices")
            .body(SdkBody::from(
                r#"{"filters": [{"attribute": "PLATFORM", "operator": "EQUALS", "values": ["ANDROID"]}]}"#,
            ))
            .unwrap(),
        http::Response::builder()
            .status(200)
            .body(
                r#"{"devices": [{
                    "arn": "arn:aws:devicefarm:us-west-2::device:70D5B22608A149568923E4A225EC5D04",
                    "name": "Samsung Galaxy S20",
                    "platform": "ANDROID",
                    "availability": "HIGHLY_AVAILABLE",
                    "heapSize": 0,
                    "memory": 128000000000
                }]}"#,
            )
            .unwrap(),
    )]);
    let op = ListDevicesInput::builder()
        .filters(
            DeviceFilter::builder()
                .attribute(DeviceFilterAttribute::Platform)
                .operator(RuleOperator::Equals)
                .values("ANDROID")
                .build(),
        )
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    let output = client(&conn).call(op).await.expect("success");
    conn.assert_requests_match(&[]);
    assert_eq!(output.next_token, None);
    let devices = output.devices.unwrap();
    assert_eq!(devices[0].availability, Some(DeviceAvailability::HighlyAvailable));
    assert_eq!(devices[0].memory, Some(128_000_000_000));
}

#[tokio::test]
async fn argument_exception() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .body(SdkBody::empty())
            .unwrap(),
        http::Response::builder()
            .status(400)
            .header("x-amzn-requestid", "9d7e1b1a")
            .body(r#"{"__type": "ArgumentException", "message": "Invalid test package"}"#)
            .unwrap(),
    )]);
    let op = ScheduleRunInput::builder()
        .project_arn("arn")
        .test(ScheduleRunTest::builder().r#type(TestType::BuiltinFuzz).build())
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    let err = client(&conn)
        .call(op)
        .await
        .expect_err("service rejects the request");
    let err = err.service_error().expect("modeled error");
    assert!(err.is_argument_exception());
    assert!(!err.is_idempotency_exception());
    assert!(matches!(
        &err.kind,
        ScheduleRunErrorKind::ArgumentException(inner) if inner.message() == Some("Invalid test package")
    ));
    assert_eq!(err.request_id(), Some("9d7e1b1a"));
}

#[tokio::test]
async fn error_without_a_code() {
    let conn = TestConnection::new(vec![(
        http::Request::builder().body(SdkBody::empty()).unwrap(),
        http::Response::builder()
            .status(403)
            .body(r#"{"message": "The security token included in the request is invalid"}"#)
            .unwrap(),
    )]);
    let op = GetRunInput::builder()
        .arn("arn:aws:devicefarm:us-west-2:123456789012:run:5e01a8c7/0fcac17b")
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    match client(&conn).call(op).await {
        Err(SdkError::ServiceError { err, .. }) => {
            assert!(matches!(err.kind, GetRunErrorKind::Unhandled(_)));
            assert_eq!(err.code(), None);
            assert_eq!(
                err.message(),
                Some("The security token included in the request is invalid")
            );
        }
        other => panic!("expected a service error, got {:?}", other),
    }
}

#[tokio::test]
async fn malformed_response() {
    let conn = TestConnection::new(vec![(
        http::Request::builder().body(SdkBody::empty()).unwrap(),
        http::Response::builder()
            .status(200)
            .body(r#"{"run": "#)
            .unwrap(),
    )]);
    let op = GetRunInput::builder()
        .arn("arn")
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    match client(&conn).call(op).await {
        Err(SdkError::ServiceError { err, .. }) => {
            assert!(matches!(err.kind, GetRunErrorKind::Unhandled(_)));
        }
        other => panic!("expected an unhandled error, got {:?}", other),
    }
}

#[test]
fn builders_require_members() {
    assert!(ScheduleRunInput::builder().project_arn("arn").build().is_err());
    assert!(GetRunInput::builder().build().is_err());
    assert!(ListDevicesInput::builder().build().is_ok());
}
