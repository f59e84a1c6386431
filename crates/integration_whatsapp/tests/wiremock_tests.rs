//! Integration tests for the WhatsApp client using WireMock
//!
//! These tests mock the Meta Graph API to verify client behavior without
//! making actual API calls.

#![allow(clippy::expect_used)]

use integration_whatsapp::{WhatsAppClient, WhatsAppClientConfig, WhatsAppError};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path},
};

fn test_config(base_url: &str) -> WhatsAppClientConfig {
    WhatsAppClientConfig {
        access_token: "test_access_token".to_string(),
        phone_number_id: "123456789".to_string(),
        api_version: "v19.0".to_string(),
        graph_base_url: base_url.to_string(),
    }
}

fn send_message_success_response() -> serde_json::Value {
    serde_json::json!({
        "messaging_product": "whatsapp",
        "contacts": [{
            "input": "491234567890",
            "wa_id": "491234567890"
        }],
        "messages": [{
            "id": "wamid.HBgNNDkxMjM0NTY3ODkwFQIAERgSMEQ3RkE2NTYxQTY5MTlBMjJBAA=="
        }]
    })
}

fn api_error_response(code: i32, message: &str) -> serde_json::Value {
    serde_json::json!({
        "error": {
            "code": code,
            "message": message,
            "type": "OAuthException",
            "fbtrace_id": "AbcDefGhiJkL"
        }
    })
}

#[tokio::test]
async fn send_message_posts_expected_payload() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v19.0/123456789/messages"))
        .and(header("authorization", "Bearer test_access_token"))
        .and(body_json(serde_json::json!({
            "messaging_product": "whatsapp",
            "recipient_type": "individual",
            "to": "491234567890",
            "type": "text",
            "text": {"body": "Hello from the bot"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(send_message_success_response()))
        .expect(1)
        .mount(&server)
        .await;

    let client = WhatsAppClient::new(test_config(&server.uri())).expect("client");
    let response = client
        .send_message("491234567890", "Hello from the bot")
        .await
        .expect("send should succeed");

    assert_eq!(response.messaging_product, "whatsapp");
    assert_eq!(response.contacts[0].wa_id, "491234567890");
    assert!(response.messages[0].id.starts_with("wamid."));
}

#[tokio::test]
async fn send_message_surfaces_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v19.0/123456789/messages"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(api_error_response(190, "Invalid OAuth token")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = WhatsAppClient::new(test_config(&server.uri())).expect("client");
    let result = client.send_message("491234567890", "Hello").await;

    match result {
        Err(WhatsAppError::Api { code, message }) => {
            assert_eq!(code, 190);
            assert!(message.contains("Invalid OAuth token"));
        },
        other => panic!("expected API error, got {other:?}"),
    }
}

#[tokio::test]
async fn send_message_with_empty_recipient_makes_no_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = WhatsAppClient::new(test_config(&server.uri())).expect("client");
    let result = client.send_message("", "Hello").await;

    assert!(matches!(result, Err(WhatsAppError::EmptyRecipient)));
    server.verify().await;
}

#[tokio::test]
async fn send_message_with_empty_body_makes_no_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = WhatsAppClient::new(test_config(&server.uri())).expect("client");
    let result = client.send_message("491234567890", "").await;

    assert!(matches!(result, Err(WhatsAppError::EmptyBody)));
    server.verify().await;
}

#[tokio::test]
async fn send_message_network_error_is_request_error() {
    // Port with nothing listening
    let client =
        WhatsAppClient::new(test_config("http://127.0.0.1:9")).expect("client");

    let result = client.send_message("491234567890", "Hello").await;
    assert!(matches!(result, Err(WhatsAppError::Request(_))));
}

#[tokio::test]
async fn is_available_true_on_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v19.0/123456789"))
        .and(header("authorization", "Bearer test_access_token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "123456789",
            "display_phone_number": "+49 1234 567890"
        })))
        .mount(&server)
        .await;

    let client = WhatsAppClient::new(test_config(&server.uri())).expect("client");
    assert!(client.is_available().await);
}

#[tokio::test]
async fn is_available_false_on_error_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = WhatsAppClient::new(test_config(&server.uri())).expect("client");
    assert!(!client.is_available().await);
}
