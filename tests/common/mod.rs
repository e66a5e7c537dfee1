#![allow(dead_code)]

use bbox_client::BboxClient;
use serde_json::json;
use wiremock::matchers::{body_string, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_PASSWORD: &str = "test-password";
pub const TEST_SESSION: &str = "test-session";

/// Path of `suffix` under the versioned API root.
pub fn api_path(suffix: &str) -> String {
    format!("/api/v1/{suffix}")
}

/// Client pointed at the mock server, which listens on loopback and is
/// therefore reached in local mode.
pub fn setup_test_client(mock_server: &MockServer) -> BboxClient {
    BboxClient::builder()
        .address(mock_server.address().to_string())
        .build()
        .expect("Failed to build BboxClient")
}

/// Mounts a login endpoint that accepts `TEST_PASSWORD` and issues
/// `TEST_SESSION`.
pub async fn setup_login(mock_server: &MockServer) {
    Mock::given(method("POST"))
        .and(path(api_path("login")))
        .and(body_string(format!("password={TEST_PASSWORD}")))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", format!("BBOX_ID={TEST_SESSION}; Path=/").as_str()),
        )
        .mount(mock_server)
        .await;
}

/// Client that already holds a session against the mock server.
pub async fn setup_logged_in_client(mock_server: &MockServer) -> BboxClient {
    setup_login(mock_server).await;

    let mut client = setup_test_client(mock_server);
    assert!(client.login(TEST_PASSWORD).await.expect("login failed"));
    client
}

/// Mounts the one-time token endpoint.
pub async fn setup_token(mock_server: &MockServer, token: &str) {
    Mock::given(method("GET"))
        .and(path(api_path("device/token")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "device": { "token": token, "now": "2024-01-01T00:00:00Z" } }
        ])))
        .expect(1)
        .mount(mock_server)
        .await;
}
