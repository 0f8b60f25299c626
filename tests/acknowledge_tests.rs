//! Notification acknowledgement integration tests

use serde_json::Value;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use atlas_push::{AtlasClient, AtlasConfig, AtlasError};

fn configured_client(base_url: &str) -> AtlasClient {
    let client = AtlasClient::new();
    client.configure(AtlasConfig::new(base_url), "atlas_pub_key");
    client
}

async fn mount_acknowledge(server: &MockServer, status: u16, body: &str) {
    Mock::given(method("POST"))
        .and(path("/functions/v1/acknowledge-notification"))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn acknowledge_fails_without_configure() {
    let client = AtlasClient::new();

    let result = client.acknowledge_notification("notif_42").await;
    assert_eq!(result, Err(AtlasError::NotConfigured));
}

#[tokio::test]
async fn whitespace_only_id_fails_before_any_network_call() {
    let server = MockServer::start().await;
    mount_acknowledge(&server, 200, "{}").await;
    let client = configured_client(&server.uri());

    let result = client.acknowledge_notification("   \n\t ").await;

    assert!(matches!(result, Err(AtlasError::InvalidArgument(_))));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn valid_id_is_trimmed_and_sent_verbatim() {
    let server = MockServer::start().await;
    mount_acknowledge(&server, 200, r#"{"ok":true}"#).await;
    // No log_in: acknowledgement does not require a user.
    let client = configured_client(&server.uri());

    client
        .acknowledge_notification("  notif_42  ")
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].url.path(),
        "/functions/v1/acknowledge-notification"
    );

    let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body["api_key"], "atlas_pub_key");
    assert_eq!(body["notification_id"], "notif_42");
}

#[tokio::test]
async fn backend_failure_surfaces_status_and_body() {
    let server = MockServer::start().await;
    mount_acknowledge(&server, 404, r#"{"error":"unknown_notification"}"#).await;
    let client = configured_client(&server.uri());

    let result = client.acknowledge_notification("notif_missing").await;

    match result {
        Err(AtlasError::RequestFailed { status_code, body }) => {
            assert_eq!(status_code, 404);
            assert!(body.contains("unknown_notification"));
        }
        other => panic!("expected RequestFailed, got {other:?}"),
    }
}
