//! Integration tests using WireMock
//!
//! Each test drives a real `MediaClient` over `ReqwestTransport` against a
//! local mock server, covering request encoding, authentication headers,
//! status branching and decoding end to end.

mod audio;

use integrations_genmedia::{MediaClient, MediaClientConfig};
use std::time::Duration;
use url::Url;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_API_KEY: &str = "test-api-key";

/// Helper to create a mock server
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Configuration pointing at `server` under a `/v1` prefix
pub fn test_config(server: &MockServer) -> MediaClientConfig {
    let base_url = Url::parse(&format!("{}/v1", server.uri())).unwrap();
    MediaClientConfig::new(TEST_API_KEY)
        .with_base_url(base_url)
        .with_timeout(Duration::from_secs(5))
}

/// Client built from [`test_config`]
pub fn test_client(server: &MockServer) -> MediaClient {
    MediaClient::builder()
        .with_config(test_config(server))
        .build()
        .expect("Failed to build client")
}

/// Mock expecting an authenticated POST to `endpoint`
pub fn mock_with_auth(endpoint: &str) -> wiremock::MockBuilder {
    Mock::given(method("POST"))
        .and(path(endpoint))
        .and(header("Authorization", format!("Bearer {}", TEST_API_KEY).as_str()))
}

/// Helper to create error response templates
pub fn error_response(status: u16, message: &str, error_type: &str, code: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(serde_json::json!({
        "error": {
            "message": message,
            "type": error_type,
            "param": null,
            "code": code
        }
    }))
}

/// Helper to create success response templates
pub fn success_response(body: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(body)
}
