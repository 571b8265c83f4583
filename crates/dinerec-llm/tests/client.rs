//! Integration tests for `OpenAiChatClient` using wiremock HTTP mocks.

use dinerec_llm::{ChatModel, ChatSettings, ModelError, OpenAiChatClient};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> OpenAiChatClient {
    OpenAiChatClient::new(
        "sk-test",
        base_url,
        ChatSettings {
            model: "test-model".to_string(),
            temperature: 0.2,
        },
        5,
        "dinerec-test/0.1",
    )
    .expect("client construction should not fail")
}

#[tokio::test]
async fn complete_returns_first_choice_content() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer sk-test"))
        .and(body_partial_json(serde_json::json!({
            "model": "test-model",
            "messages": [
                { "role": "system", "content": "be brief" },
                { "role": "user", "content": "pick one" }
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "chatcmpl-1",
            "choices": [
                { "index": 0, "message": { "role": "assistant", "content": "```json\n[]\n```" } }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&format!("{}/v1", server.uri()));
    let reply = client.complete("be brief", "pick one").await.unwrap();

    assert_eq!(reply, "```json\n[]\n```");
}

#[tokio::test]
async fn complete_reports_unexpected_status_with_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(429).set_body_string(r#"{"error":{"message":"rate limited"}}"#),
        )
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.complete("s", "u").await.unwrap_err();

    assert!(
        matches!(err, ModelError::UnexpectedStatus { status: 429, ref body } if body.contains("rate limited")),
        "got: {err:?}"
    );
}

#[tokio::test]
async fn complete_rejects_missing_choices() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "choices": [] })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.complete("s", "u").await.unwrap_err();

    assert!(matches!(err, ModelError::EmptyResponse), "got: {err:?}");
}

#[tokio::test]
async fn complete_rejects_malformed_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.complete("s", "u").await.unwrap_err();

    assert!(matches!(err, ModelError::Deserialize(_)), "got: {err:?}");
}
