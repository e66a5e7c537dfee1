use bbox_client::{BboxError, NatProtocol, NatRule};
use serde_json::json;
use wiremock::matchers::{body_string, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;

use common::{api_path, setup_logged_in_client, setup_token};

fn game_server_rule() -> NatRule {
    NatRule::builder()
        .enable(true)
        .description("game")
        .protocol(NatProtocol::Udp)
        .ipaddress("192.168.1.20")
        .internal_port(27015)
        .build()
        .unwrap()
}

async fn create_with_status(status: u16) -> bool {
    let mock_server = MockServer::start().await;
    setup_token(&mock_server, "nat-token").await;

    Mock::given(method("POST"))
        .and(path(api_path("nat/rules")))
        .and(query_param("btoken", "nat-token"))
        .and(body_string(
            "enable=1&description=game&protocol=udp&ipremote=&external_port=\
             &ipaddress=192.168.1.20&internal_port=27015",
        ))
        .respond_with(ResponseTemplate::new(status))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_logged_in_client(&mock_server).await;
    client.create_nat_rule(game_server_rule()).await.unwrap()
}

#[tokio::test]
async fn test_create_nat_rule_true_only_on_created() {
    assert!(create_with_status(201).await);
    assert!(!create_with_status(200).await);
    assert!(!create_with_status(400).await);
}

#[tokio::test]
async fn test_create_nat_rule_with_filters() {
    let mock_server = MockServer::start().await;
    setup_token(&mock_server, "t").await;

    Mock::given(method("POST"))
        .and(path(api_path("nat/rules")))
        .and(body_string(
            "enable=0&description=ssh&protocol=tcp&ipremote=1.2.3.4&external_port=2222\
             &ipaddress=192.168.1.5&internal_port=22",
        ))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&mock_server)
        .await;

    let rule = NatRule::builder()
        .enable(false)
        .description("ssh")
        .ipaddress("192.168.1.5")
        .internal_port(22)
        .ipremote("1.2.3.4")
        .external_port(2222)
        .build()
        .unwrap();

    let client = setup_logged_in_client(&mock_server).await;
    assert!(client.create_nat_rule(rule).await.unwrap());
}

#[test]
fn test_rule_builder_validation() {
    let err = NatRule::builder().internal_port(80).build().unwrap_err();
    assert!(matches!(err, BboxError::ConfigurationError(msg) if msg.contains("IP address")));

    let err = NatRule::builder().ipaddress("192.168.1.5").build().unwrap_err();
    assert!(matches!(err, BboxError::ConfigurationError(msg) if msg.contains("internal port")));

    let err = NatRule::builder()
        .ipaddress("192.168.1.5")
        .internal_port(80)
        .description("x".repeat(49))
        .build()
        .unwrap_err();
    assert!(matches!(err, BboxError::ConfigurationError(msg) if msg.contains("48")));
}

#[tokio::test]
async fn test_delete_nat_rule() {
    let mock_server = MockServer::start().await;

    for (id, status) in [(1, 200), (2, 202), (3, 404)] {
        Mock::given(method("DELETE"))
            .and(path(api_path(&format!("nat/rules/{id}"))))
            .respond_with(ResponseTemplate::new(status))
            .expect(1)
            .mount(&mock_server)
            .await;
    }

    let client = setup_logged_in_client(&mock_server).await;
    assert!(client.delete_nat_rule(1).await.unwrap());
    assert!(client.delete_nat_rule(2).await.unwrap());
    assert!(!client.delete_nat_rule(3).await.unwrap());
}

#[tokio::test]
async fn test_get_all_nat_rules() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(api_path("nat/rules")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "nat": { "enable": 1, "rules": [{ "id": 1, "description": "game" }] }
        }])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_logged_in_client(&mock_server).await;
    let nat = client.get_all_nat_rules().await.unwrap();
    assert_eq!(nat["rules"][0]["description"], "game");
}
