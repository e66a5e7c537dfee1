use bbox_client::BboxError;
use serde_json::json;
use wiremock::matchers::{body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;

use common::{api_path, setup_logged_in_client, setup_test_client, setup_token, TEST_SESSION};

#[tokio::test]
async fn test_luminosity_out_of_range_sends_nothing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path(api_path("device/display")))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = setup_logged_in_client(&mock_server).await;

    for luminosity in [-1, 101] {
        match client.set_display_luminosity(luminosity).await {
            Err(BboxError::ConfigurationError(msg)) => {
                assert!(msg.contains("between 0 and 100"));
            }
            other => panic!("Expected ConfigurationError for {luminosity}, got {other:?}"),
        }
    }
}

#[tokio::test]
async fn test_luminosity_sends_one_put() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path(api_path("device/display")))
        .and(header("cookie", format!("BBOX_ID={TEST_SESSION}").as_str()))
        .and(body_string("luminosity=50"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_logged_in_client(&mock_server).await;
    client.set_display_luminosity(50).await.unwrap();
}

#[tokio::test]
async fn test_luminosity_bounds_are_accepted() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path(api_path("device/display")))
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = setup_logged_in_client(&mock_server).await;
    client.set_display_luminosity(0).await.unwrap();
    client.set_display_luminosity(100).await.unwrap();
}

#[tokio::test]
async fn test_reboot_uses_fresh_token() {
    let mock_server = MockServer::start().await;
    setup_token(&mock_server, "reboot-token").await;

    Mock::given(method("POST"))
        .and(path(api_path("device/reboot")))
        .and(query_param("btoken", "reboot-token"))
        .and(header("cookie", format!("BBOX_ID={TEST_SESSION}").as_str()))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_logged_in_client(&mock_server).await;
    client.reboot().await.unwrap();
}

#[tokio::test]
async fn test_get_token() {
    let mock_server = MockServer::start().await;
    setup_token(&mock_server, "abc123").await;

    let client = setup_logged_in_client(&mock_server).await;
    assert_eq!(client.get_token().await.unwrap(), "abc123");
}

#[tokio::test]
async fn test_get_device_info_is_public_locally() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(api_path("device")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "device": { "modelname": "F@st5330b", "main": { "version": "10.2.18" } } }
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server);
    let info = client.get_device_info().await.unwrap();
    assert_eq!(info["modelname"], "F@st5330b");
    assert_eq!(info["main"]["version"], "10.2.18");

    let requests = mock_server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("cookie").is_none());
}

#[tokio::test]
async fn test_error_status_is_reported() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(api_path("device")))
        .respond_with(ResponseTemplate::new(503).set_body_string("busy"))
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server);
    match client.get_device_info().await {
        Err(BboxError::ApiError { status, body }) => {
            assert_eq!(status.as_u16(), 503);
            assert_eq!(body, "busy");
        }
        other => panic!("Expected ApiError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unexpected_document_shape() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(api_path("device")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "wan": {} }])))
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server);
    match client.get_device_info().await {
        Err(BboxError::UnexpectedResponse(msg)) => assert!(msg.contains("device")),
        other => panic!("Expected UnexpectedResponse, got {other:?}"),
    }
}

#[tokio::test]
async fn test_invalid_json_is_a_serialization_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(api_path("device")))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server);
    assert!(matches!(
        client.get_device_info().await,
        Err(BboxError::SerializationError(_))
    ));
}

#[tokio::test]
async fn test_rejected_luminosity_is_reported() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path(api_path("device/display")))
        .respond_with(ResponseTemplate::new(401).set_body_string("session expired"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_logged_in_client(&mock_server).await;
    match client.set_display_luminosity(50).await {
        Err(BboxError::ApiError { status, body }) => {
            assert_eq!(status.as_u16(), 401);
            assert_eq!(body, "session expired");
        }
        other => panic!("Expected ApiError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_rejected_reboot_is_reported() {
    let mock_server = MockServer::start().await;
    setup_token(&mock_server, "reboot-token").await;

    Mock::given(method("POST"))
        .and(path(api_path("device/reboot")))
        .and(query_param("btoken", "reboot-token"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_logged_in_client(&mock_server).await;
    match client.reboot().await {
        Err(BboxError::ApiError { status, .. }) => assert_eq!(status.as_u16(), 401),
        other => panic!("Expected ApiError, got {other:?}"),
    }
}
