/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_http::user_agent::AwsUserAgent;
use aws_hyper::test_connection::TestConnection;
use aws_hyper::SdkError;
use http::header::AUTHORIZATION;
use pretty_assertions::assert_eq;
use proton::error::{CreateServiceErrorKind, GetEnvironmentErrorKind};
use proton::input::{
    CreateEnvironmentInput, CreateServiceInput, DeleteServiceInput, GetEnvironmentInput,
    ListEnvironmentsInput,
};
use proton::model::{
    DeploymentStatus, EnvironmentTemplateFilter, Provisioning, ServiceStatus, Tag,
};
use proton::{Config, Credentials, Region};
use smithy_async::rt::sleep::default_async_sleep;
use smithy_http::body::SdkBody;
use smithy_types::retry::{ErrorKind, ProvideErrorKind, RetryConfig};
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

fn get_environment(name: &str) -> smithy_http::operation::Operation<
    proton::operation::GetEnvironment,
    aws_http::AwsErrorRetryPolicy,
> {
    GetEnvironmentInput::builder()
        .name(name)
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap()
}

const ENVIRONMENT: &str = r#"{"environment": {
    "name": "dev",
    "arn": "arn:aws:proton:us-east-1:123456789012:environment/dev",
    "templateName": "fargate-env",
    "templateMajorVersion": "1",
    "templateMinorVersion": "0",
    "deploymentStatus": "IN_PROGRESS",
    "createdAt": 1614952162,
    "lastDeploymentAttemptedAt": 1614952162.123,
    "lastDeploymentSucceededAt": 1614952162
}}"#;

#[tokio::test]
async fn create_environment() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .method("POST")
            .uri("https://proton.us-east-1.amazonaws.com/")
            .header("content-type", "application/x-amz-json-1.0")
            .header("x-amz-target", "AwsProton20200720.CreateEnvironment")
            .header("host", "proton.us-east-1.amazonaws.com")
            .header("x-amz-date", "20210305T134922Z")
            .body(SdkBody::from(
                r#"{
                    "name": "dev",
                    "templateName": "fargate-env",
                    "templateMajorVersion": "1",
                    "spec": "proton: EnvironmentSpec\nspec:\n  vpc_cidr: 10.0.0.0/16\n",
                    "protonServiceRoleArn": "arn:aws:iam::123456789012:role/ProtonServiceRole",
                    "tags": [{"key": "stage", "value": "dev"}]
                }"#,
            ))
            .unwrap(),
        http::Response::builder()
            .status(200)
            .body(ENVIRONMENT)
            .unwrap(),
    )]);
    let mut op = CreateEnvironmentInput::builder()
        .name("dev")
        .template_name("fargate-env")
        .template_major_version("1")
        .spec("proton: EnvironmentSpec\nspec:\n  vpc_cidr: 10.0.0.0/16\n")
        .proton_service_role_arn("arn:aws:iam::123456789012:role/ProtonServiceRole")
        .tags(Tag::builder().key("stage").value("dev").build())
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    op.properties_mut()
        .insert(UNIX_EPOCH + Duration::from_secs(1614952162));
    op.properties_mut().insert(AwsUserAgent::for_tests());
    let environment = client(&conn)
        .call(op)
        .await
        .expect("success")
        .environment
        .unwrap();
    conn.assert_requests_match(&[]);
    assert_eq!(
        environment.deployment_status,
        Some(DeploymentStatus::InProgress)
    );
    assert_eq!(
        environment.created_at,
        Some(Instant::from_epoch_seconds(1614952162))
    );
    assert_eq!(
        environment.last_deployment_attempted_at,
        Some(Instant::from_secs_and_nanos(1614952162, 123_000_000))
    );
    assert_eq!(environment.provisioning, None);

    let authorization = conn.requests()[0].actual.headers()[AUTHORIZATION]
        .to_str()
        .unwrap()
        .to_string();
    assert!(authorization.starts_with(
        "AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/20210305/us-east-1/proton/aws4_request"
    ));
}

#[tokio::test]
async fn list_environments() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .method("POST")
            .uri("https://proton.us-east-1.amazonaws.com/")
            .header("x-amz-target", "AwsProton20200720.ListEnvironments")
            .body(SdkBody::from(
                r#"{
                    "maxResults": 10,
                    "environmentTemplates": [{"templateName": "fargate-env", "majorVersion": "1"}]
                }"#,
            ))
            .unwrap(),
        http::Response::builder()
            .status(200)
            .body(
                r#"{"environments": [
                    {"name": "dev", "deploymentStatus": "SUCCEEDED", "provisioning": "CUSTOMER_MANAGED"},
                    {"name": "prod", "deploymentStatus": "ROLLING_BACK"}
                ]}"#,
            )
            .unwrap(),
    )]);
    let op = ListEnvironmentsInput::builder()
        .max_results(10)
        .environment_templates(
            EnvironmentTemplateFilter::builder()
                .template_name("fargate-env")
                .major_version("1")
                .build(),
        )
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    let output = client(&conn).call(op).await.expect("success");
    conn.assert_requests_match(&[]);
    assert_eq!(output.next_token, None);
    let environments = output.environments.unwrap();
    assert_eq!(
        environments[0].deployment_status,
        Some(DeploymentStatus::Succeeded)
    );
    assert_eq!(
        environments[0].provisioning,
        Some(Provisioning::CustomerManaged)
    );
    assert_eq!(
        environments[1].deployment_status,
        Some(DeploymentStatus::Unknown("ROLLING_BACK".to_string()))
    );
}

#[tokio::test]
async fn create_service() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .method("POST")
            .uri("https://proton.us-east-1.amazonaws.com/")
            .header("x-amz-target", "AwsProton20200720.CreateService")
            .body(SdkBody::from(
                r#"{
                    "name": "frontend",
                    "templateName": "fargate-svc",
                    "templateMajorVersion": "2",
                    "spec": "proton: ServiceSpec\n",
                    "repositoryConnectionArn": "arn:aws:codestar-connections:us-east-1:123456789012:connection/1a2b",
                    "repositoryId": "org/frontend",
                    "branchName": "main"
                }"#,
            ))
            .unwrap(),
        http::Response::builder()
            .status(200)
            .body(
                r#"{"service": {
                    "name": "frontend",
                    "arn": "arn:aws:proton:us-east-1:123456789012:service/frontend",
                    "status": "CREATE_IN_PROGRESS",
                    "createdAt": 1614952162,
                    "pipeline": {"deploymentStatus": "IN_PROGRESS", "templateName": "fargate-svc"}
                }}"#,
            )
            .unwrap(),
    )]);
    let op = CreateServiceInput::builder()
        .name("frontend")
        .template_name("fargate-svc")
        .template_major_version("2")
        .spec("proton: ServiceSpec\n")
        .repository_connection_arn(
            "arn:aws:codestar-connections:us-east-1:123456789012:connection/1a2b",
        )
        .repository_id("org/frontend")
        .branch_name("main")
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    let service = client(&conn)
        .call(op)
        .await
        .expect("success")
        .service
        .unwrap();
    conn.assert_requests_match(&[]);
    assert_eq!(service.status, Some(ServiceStatus::CreateInProgress));
    assert_eq!(
        service.pipeline.and_then(|p| p.deployment_status),
        Some(DeploymentStatus::InProgress)
    );
}

#[tokio::test]
async fn throttling_is_retryable() {
    let conn = TestConnection::new(vec![(
        http::Request::builder().body(SdkBody::empty()).unwrap(),
        http::Response::builder()
            .status(400)
            .body(r#"{"__type": "ThrottlingException", "message": "Rate exceeded"}"#)
            .unwrap(),
    )]);
    match client(&conn).call(get_environment("dev")).await {
        Err(SdkError::ServiceError { err, .. }) => {
            assert!(err.is_throttling_exception());
            assert_eq!(err.retryable_error_kind(), Some(ErrorKind::ThrottlingError));
            assert_eq!(err.code(), Some("ThrottlingException"));
        }
        other => panic!("expected a service error, got {:?}", other),
    }
}

#[tokio::test]
async fn client_errors_are_not_retryable() {
    let conn = TestConnection::new(vec![(
        http::Request::builder().body(SdkBody::empty()).unwrap(),
        http::Response::builder()
            .status(409)
            .body(r#"{"__type": "ConflictException", "message": "service frontend already exists"}"#)
            .unwrap(),
    )]);
    let op = CreateServiceInput::builder()
        .name("frontend")
        .template_name("fargate-svc")
        .template_major_version("2")
        .spec("proton: ServiceSpec\n")
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    let err = client(&conn).call(op).await.expect_err("conflict");
    let err = err.service_error().expect("modeled error");
    assert!(matches!(err.kind, CreateServiceErrorKind::ConflictException(_)));
    assert_eq!(err.retryable_error_kind(), None);
}

#[tokio::test(start_paused = true)]
async fn retries_internal_server_errors() {
    let conn = TestConnection::new(vec![
        (
            http::Request::builder().body(SdkBody::empty()).unwrap(),
            http::Response::builder()
                .status(500)
                .body(r#"{"__type": "InternalServerException", "message": "try again"}"#)
                .unwrap(),
        ),
        (
            http::Request::builder().body(SdkBody::empty()).unwrap(),
            http::Response::builder().status(200).body(ENVIRONMENT).unwrap(),
        ),
    ]);
    let client = aws_hyper::Client::new(
        conn.clone(),
        &RetryConfig::new().with_max_attempts(3),
        default_async_sleep(),
    );
    let output = client
        .call(get_environment("dev"))
        .await
        .expect("second attempt succeeds");
    assert_eq!(
        output.environment.and_then(|e| e.name),
        Some("dev".to_string())
    );
    assert_eq!(conn.requests().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn retries_stop_at_max_attempts() {
    let throttled = || {
        (
            http::Request::builder().body(SdkBody::empty()).unwrap(),
            http::Response::builder()
                .status(400)
                .body(r#"{"__type": "ThrottlingException", "message": "Rate exceeded"}"#)
                .unwrap(),
        )
    };
    let conn = TestConnection::new(vec![throttled(), throttled(), throttled()]);
    let client = aws_hyper::Client::new(
        conn.clone(),
        &RetryConfig::new().with_max_attempts(2),
        default_async_sleep(),
    );
    let err = client
        .call(get_environment("dev"))
        .await
        .expect_err("every attempt is throttled");
    assert!(matches!(
        err.service_error().map(|e| &e.kind),
        Some(GetEnvironmentErrorKind::ThrottlingException(_))
    ));
    assert_eq!(conn.requests().len(), 2);
    assert_eq!(conn.remaining(), 1);
}

#[test]
fn required_members() {
    assert!(DeleteServiceInput::builder().build().is_err());
    assert!(CreateEnvironmentInput::builder()
        .name("dev")
        .template_name("fargate-env")
        .template_major_version("1")
        .build()
        .is_err());
}
