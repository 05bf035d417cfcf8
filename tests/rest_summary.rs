//! Integration tests for the REST summary gateway against a stub endpoint.

use serde_json::json;
use ticklist::todo::{
    adapters::rest::{RemoteConfig, RestSummaryGateway},
    ports::SummaryGateway,
};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test(flavor = "multi_thread")]
async fn successful_invocation_returns_the_relayed_summary() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/functions/v1/generate_summary"))
        .and(header("apikey", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "You have 2 pending tasks. 1 of these are high priority and should be addressed first."
        })))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = RestSummaryGateway::new(RemoteConfig::new(server.uri(), "test-key"));
    let outcome = gateway.generate_and_send().await;

    assert!(outcome.success);
    assert!(outcome.message.contains("2 pending tasks"));
}

#[tokio::test(flavor = "multi_thread")]
async fn remote_reported_failure_passes_through() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/functions/v1/generate_summary"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "message": "chat channel rejected the message"
        })))
        .mount(&server)
        .await;

    let gateway = RestSummaryGateway::new(RemoteConfig::new(server.uri(), "test-key"));
    let outcome = gateway.generate_and_send().await;

    assert!(!outcome.success);
    assert_eq!(outcome.message, "chat channel rejected the message");
}

#[tokio::test(flavor = "multi_thread")]
async fn non_success_status_maps_to_failed_outcome() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/functions/v1/generate_summary"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let gateway = RestSummaryGateway::new(RemoteConfig::new(server.uri(), "test-key"));
    let outcome = gateway.generate_and_send().await;

    assert!(!outcome.success);
    assert!(outcome.message.contains("502"));
}

#[tokio::test(flavor = "multi_thread")]
async fn malformed_body_maps_to_failed_outcome() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/functions/v1/generate_summary"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let gateway = RestSummaryGateway::new(RemoteConfig::new(server.uri(), "test-key"));
    let outcome = gateway.generate_and_send().await;

    assert!(!outcome.success);
    assert!(outcome.message.contains("decoded"));
}

#[tokio::test(flavor = "multi_thread")]
async fn disabled_gateway_fails_without_a_network_attempt() {
    let gateway = RestSummaryGateway::disabled();

    let outcome = gateway.generate_and_send().await;

    assert!(!outcome.success);
    assert!(outcome.message.contains("not configured"));
}
