//! Tests for the default pipeline assembly.

use std::sync::Arc;
use std::time::Duration;

use httpline::pipeline::{create_default_http_pipeline, DefaultPipelineBuilder, DefaultPipelineConfig};
use httpline::policies::default_user_agent;
use httpline::transport::MockHttpClient;
use httpline::{Error, HttpPipelineLogLevel};
use reqwest::header::{HeaderValue, ACCEPT};
use reqwest::StatusCode;

mod common;
use common::helpers::*;

#[test]
fn test_default_config() {
    let config = DefaultPipelineConfig::default();
    assert!(config.user_agent.is_none());
    assert!(config.timeout.is_none());
    assert_eq!(config.log_level, HttpPipelineLogLevel::Warning);
    assert_eq!(config.http_client_config.retries, 3);
    assert!(config.http_client.is_none());
    assert!(config.additional_policies.is_empty());
}

#[test]
fn test_create_default_http_pipeline() {
    let pipeline = create_default_http_pipeline().unwrap();
    assert_eq!(pipeline.factories().len(), 3);
    assert_eq!(pipeline.options().log_level, HttpPipelineLogLevel::Warning);
}

#[test]
fn test_builder_with_reqwest_options() {
    let pipeline = DefaultPipelineBuilder::new()
        .retries(0)
        .header(ACCEPT, HeaderValue::from_static("application/json"))
        .timeout(Duration::from_secs(30))
        .build()
        .unwrap();
    assert_eq!(pipeline.factories().len(), 3);
}

#[tokio::test]
async fn test_default_pipeline_sends_user_agent() {
    let client = create_mock_client("ok");
    let pipeline = DefaultPipelineBuilder::new()
        .http_client(client.clone())
        .build()
        .unwrap();

    let response = pipeline.send(create_test_request()).await.unwrap();

    let expected = default_user_agent();
    assert_eq!(
        client.last_request().unwrap().headers.get("User-Agent"),
        Some(expected.as_str())
    );
    assert_eq!(response.text().await.unwrap(), "ok");
}

#[tokio::test]
async fn test_default_pipeline_custom_user_agent() {
    let client = create_mock_client("");
    let pipeline = DefaultPipelineBuilder::new()
        .user_agent(TEST_USER_AGENT)
        .http_client(client.clone())
        .build()
        .unwrap();

    pipeline.send(create_test_request()).await.unwrap();

    assert_eq!(
        client.last_request().unwrap().headers.get("user-agent"),
        Some(TEST_USER_AGENT)
    );
}

#[tokio::test]
async fn test_additional_policies_run_after_defaults() {
    let client = create_mock_client("");
    let pipeline = DefaultPipelineBuilder::new()
        .http_client(client.clone())
        .policy(set_request_header_policy("User-Agent", "overridden"))
        .build()
        .unwrap();

    pipeline.send(create_test_request()).await.unwrap();

    assert_eq!(
        client.last_request().unwrap().headers.get("User-Agent"),
        Some("overridden")
    );
}

#[tokio::test(start_paused = true)]
async fn test_default_pipeline_timeout() {
    let client = Arc::new(
        MockHttpClient::with_text(StatusCode::OK, "").delay(Duration::from_secs(120)),
    );
    let pipeline = DefaultPipelineBuilder::new()
        .http_client(client)
        .timeout(Duration::from_secs(30))
        .build()
        .unwrap();

    let err = pipeline.send(create_test_request()).await.unwrap_err();
    assert!(matches!(err, Error::Timeout(_)));
}

#[tokio::test(start_paused = true)]
async fn test_default_pipeline_honors_request_timeout() {
    let client = Arc::new(
        MockHttpClient::with_text(StatusCode::OK, "late").delay(Duration::from_secs(10)),
    );
    let pipeline = DefaultPipelineBuilder::new()
        .http_client(client)
        .build()
        .unwrap();

    let request = create_test_request().with_timeout(Duration::from_secs(1));
    let err = pipeline.send(request).await.unwrap_err();
    assert!(matches!(err, Error::Timeout(d) if d == Duration::from_secs(1)));
}

#[tokio::test(start_paused = true)]
async fn test_default_pipeline_without_deadline_waits() {
    let client = Arc::new(
        MockHttpClient::with_text(StatusCode::OK, "eventually").delay(Duration::from_secs(600)),
    );
    let pipeline = DefaultPipelineBuilder::new()
        .http_client(client)
        .build()
        .unwrap();

    let response = pipeline.send(create_test_request()).await.unwrap();
    assert_eq!(response.text().await.unwrap(), "eventually");
}

#[tokio::test]
async fn test_explicit_pipeline_bypasses_defaults() {
    let client = create_mock_client("");
    let pipeline = create_test_pipeline(vec![], client.clone());

    pipeline.send(create_test_request()).await.unwrap();

    assert!(client.last_request().unwrap().headers.is_empty());
}
