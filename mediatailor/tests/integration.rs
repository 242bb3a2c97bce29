/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_http::user_agent::AwsUserAgent;
use aws_hyper::test_connection::TestConnection;
use aws_hyper::SdkError;
use mediatailor::error::DescribeChannelErrorKind;
use mediatailor::input::{
    CreateChannelInput, DeleteChannelInput, DescribeChannelInput, GetPlaybackConfigurationInput,
    ListPlaybackConfigurationsInput, PutPlaybackConfigurationInput,
};
use mediatailor::model::{
    CdnConfiguration, ChannelState, HlsPlaylistSettings, PlaybackMode, RequestOutputItem,
};
use mediatailor::{Config, Credentials, Region};
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
        .build()
}

fn client(conn: &TestConnection<&'static str>) -> aws_hyper::Client<TestConnection<&'static str>> {
    aws_hyper::Client::new(conn.clone(), &RetryConfig::disabled(), None)
}

#[tokio::test]
async fn put_playback_configuration() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .method("PUT")
            .uri("https://api.mediatailor.us-east-1.amazonaws.com/playbackConfiguration")
            .header("content-type", "application/json")
            .header("host", "api.mediatailor.us-east-1.amazonaws.com")
            .header("x-amz-date", "20210305T134922Z")
            .body(SdkBody::from(
                r#"{
                    "Name": "live-sports",
                    "AdDecisionServerUrl": "https://ads.example.com/vast",
                    "VideoContentSourceUrl": "https://origin.example.com",
                    "CdnConfiguration": {"AdSegmentUrlPrefix": "https://cdn.example.com/ads"},
                    "tags": {"team": "media"}
                }"#,
            ))
            .unwrap(),
        http::Response::builder()
            .status(200)
            .body(
                r#"{
                    "Name": "live-sports",
                    "PlaybackConfigurationArn": "arn:aws:mediatailor:us-east-1:123456789012:playbackConfiguration/live-sports",
                    "HlsConfiguration": {"ManifestEndpointPrefix": "https://abc.mediatailor.us-east-1.amazonaws.com/v1/master/"},
                    "tags": {"team": "media"}
                }"#,
            )
            .unwrap(),
    )]);
    let mut op = PutPlaybackConfigurationInput::builder()
        .name("live-sports")
        .ad_decision_server_url("https://ads.example.com/vast")
        .video_content_source_url("https://origin.example.com")
        .cdn_configuration(
            CdnConfiguration::builder()
                .ad_segment_url_prefix("https://cdn.example.com/ads")
                .build(),
        )
        .tags("team", "media")
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
        output.playback_configuration_arn.as_deref(),
        Some("arn:aws:mediatailor:us-east-1:123456789012:playbackConfiguration/live-sports")
    );
    assert_eq!(
        output.tags.unwrap().get("team").map(String::as_str),
        Some("media")
    );
    assert!(output.hls_configuration.is_some());
    let authorization = conn.requests()[0].actual.headers()[AUTHORIZATION]
        .to_str()
        .unwrap()
        .to_string();
    assert!(authorization.starts_with(
        "AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/20210305/us-east-1/mediatailor/aws4_request"
    ));
}

#[tokio::test]
async fn labels_are_percent_encoded() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .method("GET")
            .uri("https://api.mediatailor.us-east-1.amazonaws.com/playbackConfiguration/live%20sports%2Fhd")
            .body(SdkBody::empty())
            .unwrap(),
        http::Response::builder()
            .status(200)
            .body(r#"{"Name": "live sports/hd"}"#)
            .unwrap(),
    )]);
    let op = GetPlaybackConfigurationInput::builder()
        .name("live sports/hd")
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    let output = client(&conn).call(op).await.expect("success");
    conn.assert_requests_match(&[]);
    assert_eq!(output.name.as_deref(), Some("live sports/hd"));
    assert!(conn.requests()[0].actual.headers().get("content-type").is_none());
}

#[tokio::test]
async fn list_uses_query_parameters() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .method("GET")
            .uri("https://api.mediatailor.us-east-1.amazonaws.com/playbackConfigurations?MaxResults=25&NextToken=a%2Bb%3D")
            .body(SdkBody::empty())
            .unwrap(),
        http::Response::builder()
            .status(200)
            .body(r#"{"Items": [{"Name": "first"}, {"Name": "second"}], "NextToken": "next"}"#)
            .unwrap(),
    )]);
    let op = ListPlaybackConfigurationsInput::builder()
        .max_results(25)
        .next_token("a+b=")
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    let output = client(&conn).call(op).await.expect("success");
    conn.assert_requests_match(&[]);
    let names: Vec<_> = output
        .items
        .unwrap()
        .into_iter()
        .filter_map(|item| item.name)
        .collect();
    assert_eq!(names, vec!["first", "second"]);
    assert_eq!(output.next_token.as_deref(), Some("next"));
}

#[tokio::test]
async fn create_channel() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .method("POST")
            .uri("https://api.mediatailor.us-east-1.amazonaws.com/channel/news")
            .header("content-type", "application/json")
            .body(SdkBody::from(
                r#"{
                    "Outputs": [{
                        "ManifestName": "index",
                        "SourceGroup": "hls",
                        "HlsPlaylistSettings": {"ManifestWindowSeconds": 30}
                    }],
                    "PlaybackMode": "LOOP"
                }"#,
            ))
            .unwrap(),
        http::Response::builder()
            .status(200)
            .body(
                r#"{
                    "Arn": "arn:aws:mediatailor:us-east-1:123456789012:channel/news",
                    "ChannelName": "news",
                    "ChannelState": "STOPPED",
                    "CreationTime": 1614952162,
                    "Outputs": [{"ManifestName": "index", "SourceGroup": "hls", "PlaybackUrl": "https://example.com/index.m3u8"}],
                    "PlaybackMode": "LOOP"
                }"#,
            )
            .unwrap(),
    )]);
    let op = CreateChannelInput::builder()
        .channel_name("news")
        .outputs(
            RequestOutputItem::builder()
                .manifest_name("index")
                .source_group("hls")
                .hls_playlist_settings(
                    HlsPlaylistSettings::builder()
                        .manifest_window_seconds(30)
                        .build(),
                )
                .build(),
        )
        .playback_mode(PlaybackMode::Loop)
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    let output = client(&conn).call(op).await.expect("success");
    conn.assert_requests_match(&[]);
    assert_eq!(output.channel_state, Some(ChannelState::Stopped));
    assert_eq!(
        output.creation_time,
        Some(Instant::from_epoch_seconds(1614952162))
    );
    assert_eq!(output.playback_mode.as_deref(), Some("LOOP"));
    assert_eq!(output.outputs.unwrap()[0].playback_url.as_deref(), Some("https://example.com/index.m3u8"));
}

#[tokio::test]
async fn delete_sends_an_empty_body() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .method("DELETE")
            .uri("https://api.mediatailor.us-east-1.amazonaws.com/channel/news")
            .body(SdkBody::empty())
            .unwrap(),
        http::Response::builder().status(200).body("").unwrap(),
    )]);
    let op = DeleteChannelInput::builder()
        .channel_name("news")
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    client(&conn).call(op).await.expect("success");
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn error_type_header() {
    let conn = TestConnection::new(vec![(
        http::Request::builder().body(SdkBody::empty()).unwrap(),
        http::Response::builder()
            .status(400)
            .header(
                "x-amzn-errortype",
                "BadRequestException:http://internal.amazon.com/coral/com.amazonaws.mediatailor/",
            )
            .header("x-amzn-requestid", "e1a2")
            .body(r#"{"Message": "channel news does not exist"}"#)
            .unwrap(),
    )]);
    let op = DescribeChannelInput::builder()
        .channel_name("news")
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    match client(&conn).call(op).await {
        Err(SdkError::ServiceError { err, .. }) => {
            assert!(matches!(err.kind, DescribeChannelErrorKind::Unhandled(_)));
            assert_eq!(err.code(), Some("BadRequestException"));
            assert_eq!(err.message(), Some("channel news does not exist"));
            assert_eq!(err.request_id(), Some("e1a2"));
        }
        other => panic!("expected a service error, got {:?}", other),
    }
}

#[test]
fn empty_labels_are_rejected() {
    let input = DescribeChannelInput::builder()
        .channel_name("")
        .build()
        .expect("the member is set");
    match input.make_operation(&config()) {
        Err(BuildError::MissingField { field, details }) => {
            assert_eq!(field, "channel_name");
            assert_eq!(details, "cannot be empty or unset");
        }
        other => panic!("expected a missing field, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn unset_labels_are_rejected() {
    let input = DeleteChannelInput {
        channel_name: None,
    };
    assert!(matches!(
        input.make_operation(&config()),
        Err(BuildError::MissingField { field: "channel_name", .. })
    ));
}
