/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_http::user_agent::AwsUserAgent;
use aws_hyper::test_connection::TestConnection;
use aws_hyper::SdkError;
use codebuild::error::{BatchGetProjectsErrorKind, StartBuildErrorKind};
use codebuild::model::{
    ArtifactsType, Build, ComputeType, EnvironmentType, ProjectArtifacts, ProjectEnvironment,
    ProjectSource, SourceType, StatusType,
};
use codebuild::operation::{BatchGetProjects, CreateProject, StartBuild};
use codebuild::{Config, Credentials, Region};
use http::header::AUTHORIZATION;
use pretty_assertions::assert_eq;
use smithy_http::body::SdkBody;
use smithy_http::operation::BuildError;
use smithy_types::retry::RetryConfig;
use smithy_types::Instant;
use std::time::{Duration, UNIX_EPOCH};

fn config() -> Config {
    Config::builder()
        .region(Region::new("us-east-1"))
        .credentials_provider(Credentials::from_keys("AKIDEXAMPLE", "secret", None))
        .retry_config(RetryConfig::disabled())
        .build()
}

fn client(conn: &TestConnection<&'static str>) -> aws_hyper::Client<TestConnection<&'static str>> {
    aws_hyper::Client::new(conn.clone(), &RetryConfig::disabled(), None)
}

#[tokio::test]
async fn create_project() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .method("POST")
            .uri("https://codebuild.us-east-1.amazonaws.com/")
            .header("content-type", "application/x-amz-json-1.1")
            .header("x-amz-target", "CodeBuild_20161006.CreateProject")
            .header("host", "codebuild.us-east-1.amazonaws.com")
            .header("x-amz-date", "20210305T134922Z")
            .body(SdkBody::from(
                r#"{
                    "name": "website",
                    "source": {"type": "GITHUB", "location": "https://github.com/example/website"},
                    "artifacts": {"type": "NO_ARTIFACTS"},
                    "environment": {
                        "type": "LINUX_CONTAINER",
                        "image": "aws/codebuild/standard:5.0",
                        "computeType": "BUILD_GENERAL1_SMALL"
                    },
                    "serviceRole": "arn:aws:iam::123456789012:role/codebuild-website"
                }"#,
            ))
            .unwrap(),
        http::Response::builder()
            .status(200)
            .body(
                r#"{"project": {
                    "name": "website",
                    "arn": "arn:aws:codebuild:us-east-1:123456789012:project/website",
                    "created": 1614952162,
                    "environment": {"computeType": "BUILD_GENERAL1_SMALL", "type": "LINUX_CONTAINER"}
                }}"#,
            )
            .unwrap(),
    )]);
    let mut op = CreateProject::builder()
        .name("website")
        .source(
            ProjectSource::builder()
                .r#type(SourceType::Github)
                .location("https://github.com/example/website")
                .build(),
        )
        .artifacts(ProjectArtifacts::builder().r#type(ArtifactsType::NoArtifacts).build())
        .environment(
            ProjectEnvironment::builder()
                .r#type(EnvironmentType::LinuxContainer)
                .image("aws/codebuild/standard:5.0")
                .compute_type(ComputeType::BuildGeneral1Small)
                .build(),
        )
        .service_role("arn:aws:iam::123456789012:role/codebuild-website")
        .build()
        .unwrap()
        .make_operation(&config())
        .expect("valid operation");
    op.properties_mut()
        .insert(UNIX_EPOCH + Duration::from_secs(1614952162));
    op.properties_mut().insert(AwsUserAgent::for_tests());

    let output = client(&conn).call(op).await.expect("success");
    let project = output.project.expect("project is set");
    assert_eq!(project.name.as_deref(), Some("website"));
    assert_eq!(project.created, Some(Instant::from_epoch_seconds(1614952162)));
    assert_eq!(
        project.environment.and_then(|env| env.compute_type),
        Some(ComputeType::BuildGeneral1Small)
    );
    conn.assert_requests_match(&[]);
    let authorization = conn.requests()[0].actual.headers()[AUTHORIZATION]
        .to_str()
        .unwrap()
        .to_string();
    assert!(
        authorization.starts_with(
            "AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/20210305/us-east-1/codebuild/aws4_request"
        ),
        "{}",
        authorization
    );
}

#[tokio::test]
async fn modeled_error() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .method("POST")
            .uri("https://codebuild.us-east-1.amazonaws.com/")
            .body(SdkBody::from(r#"{"projectName": "missing"}"#))
            .unwrap(),
        http::Response::builder()
            .status(400)
            .header("x-amzn-requestid", "5a9c0c64-1a4b-4f3b-a1b7-7b1b3e8f0c6e")
            .body(
                r#"{"__type": "com.amazonaws.codebuild#ResourceNotFoundException", "message": "Project cannot be found: missing"}"#,
            )
            .unwrap(),
    )]);
    let op = StartBuild::builder()
        .project_name("missing")
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    let err = match client(&conn).call(op).await {
        Err(SdkError::ServiceError { err, raw }) => {
            assert_eq!(raw.status(), 400);
            err
        }
        other => panic!("expected a service error, got {:?}", other),
    };
    assert!(err.is_resource_not_found_exception());
    assert!(matches!(
        err.kind,
        StartBuildErrorKind::ResourceNotFoundException(_)
    ));
    assert_eq!(err.code(), Some("ResourceNotFoundException"));
    assert_eq!(err.message(), Some("Project cannot be found: missing"));
    assert_eq!(
        err.request_id(),
        Some("5a9c0c64-1a4b-4f3b-a1b7-7b1b3e8f0c6e")
    );
    assert_eq!(
        err.to_string(),
        "ResourceNotFoundException: Project cannot be found: missing"
    );
}

#[tokio::test]
async fn unknown_error_code_is_unhandled() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .method("POST")
            .uri("https://codebuild.us-east-1.amazonaws.com/")
            .body(SdkBody::from(r#"{"names": ["a"]}"#))
            .unwrap(),
        http::Response::builder()
            .status(400)
            .body(r#"{"__type": "OAuthProviderException", "message": "token expired"}"#)
            .unwrap(),
    )]);
    let op = BatchGetProjects::builder()
        .names("a")
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    match client(&conn).call(op).await {
        Err(SdkError::ServiceError { err, .. }) => {
            assert!(matches!(err.kind, BatchGetProjectsErrorKind::Unhandled(_)));
            assert_eq!(err.code(), Some("OAuthProviderException"));
            assert_eq!(err.message(), Some("token expired"));
        }
        other => panic!("expected a service error, got {:?}", other),
    }
}

#[tokio::test]
async fn batch_get_builds_output() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .method("POST")
            .uri("https://codebuild.us-east-1.amazonaws.com/")
            .header("x-amz-target", "CodeBuild_20161006.BatchGetBuilds")
            .body(SdkBody::from(r#"{"ids": ["website:1", "website:2"]}"#))
            .unwrap(),
        http::Response::builder()
            .status(200)
            .body(
                r#"{
                    "builds": [{
                        "id": "website:1",
                        "buildNumber": 1,
                        "buildStatus": "TIMED_OUT",
                        "buildComplete": true,
                        "phases": [{"phaseType": "SUBMITTED", "phaseStatus": "SUCCEEDED", "durationInSeconds": 0}]
                    }],
                    "buildsNotFound": ["website:2"]
                }"#,
            )
            .unwrap(),
    )]);
    let op = codebuild::input::BatchGetBuildsInput::builder()
        .ids("website:1")
        .ids("website:2")
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    let output = client(&conn).call(op).await.expect("success");
    conn.assert_requests_match(&[]);
    let builds = output.builds.unwrap();
    assert_eq!(builds.len(), 1);
    assert_eq!(builds[0].build_status, Some(StatusType::TimedOut));
    assert_eq!(builds[0].build_number, Some(1));
    assert_eq!(builds[0].build_complete, Some(true));
    let phases = builds[0].phases.as_ref().unwrap();
    assert_eq!(phases[0].phase_status, Some(StatusType::Succeeded));
    assert_eq!(output.builds_not_found, Some(vec!["website:2".to_string()]));
}

#[test]
fn build_member_setter_does_not_shadow_build() {
    let output = codebuild::output::StartBuildOutput::builder()
        .build_value(Build::builder().id("website:3").build())
        .build();
    assert_eq!(output.build.and_then(|b| b.id).as_deref(), Some("website:3"));
    let output = codebuild::output::StopBuildOutput::builder()
        .set_build_value(None)
        .build();
    assert_eq!(output.build, None);
}

#[test]
fn missing_required_member() {
    let err = StartBuild::builder().build().expect_err("project name is required");
    match err {
        BuildError::MissingField { field, .. } => assert_eq!(field, "project_name"),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn missing_region() {
    let conf = Config::builder()
        .credentials_provider(Credentials::from_keys("AKIDEXAMPLE", "secret", None))
        .build();
    let conn = TestConnection::<&'static str>::new(vec![]);
    let op = codebuild::input::ListProjectsInput::builder()
        .build()
        .unwrap()
        .make_operation(&conf)
        .unwrap();
    let err = client(&conn).call(op).await.expect_err("no region configured");
    assert!(
        matches!(err, SdkError::ConstructionFailure(_)),
        "{:?}",
        err
    );
    assert!(conn.requests().is_empty());
}

#[test]
fn enums_keep_unknown_values() {
    assert_eq!(StatusType::from("FAULT"), StatusType::Fault);
    assert_eq!(
        StatusType::from("CANCELLED"),
        StatusType::Unknown("CANCELLED".to_string())
    );
    assert_eq!(StatusType::from("CANCELLED").as_str(), "CANCELLED");
    assert_eq!(ComputeType::BuildGeneral12xlarge.as_str(), "BUILD_GENERAL1_2XLARGE");
    assert!(SourceType::values().contains(&"GITHUB_ENTERPRISE"));
}
