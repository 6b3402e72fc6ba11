//! Integration tests for the endpoint wrappers: request shaping and
//! response decoding, including the reasoning compatibility fallback.

use pixigpt::{ChatCompletionRequest, Message, RunParams};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> pixigpt::Client {
    pixigpt::Client::builder()
        .api_key("sk-test")
        .base_url(server.uri())
        .build()
        .unwrap()
}

fn chat_response(content: &str, reasoning: Option<&str>) -> serde_json::Value {
    let mut choice = json!({
        "index": 0,
        "message": {"role": "assistant", "content": content},
        "finish_reason": "stop",
    });
    if let Some(reasoning) = reasoning {
        choice["reasoning_content"] = json!(reasoning);
    }
    json!({
        "id": "chatcmpl_1",
        "object": "chat.completion",
        "created": 1_700_000_000,
        "model": "pixi-large",
        "choices": [choice],
        "usage": {"prompt_tokens": 12, "completion_tokens": 8, "total_tokens": 20},
    })
}

#[tokio::test]
async fn chat_extracts_reasoning_from_legacy_tags() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(chat_response("<think>plan the answer</think>hello", None)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let resp = client
        .create_chat_completion(ChatCompletionRequest {
            assistant_id: Some("asst_1".into()),
            messages: vec![Message::user("hi")],
            ..Default::default()
        })
        .await
        .unwrap();

    let choice = &resp.choices[0];
    assert_eq!(choice.message.content, "hello");
    assert_eq!(choice.reasoning_content.as_deref(), Some("plan the answer"));
    assert_eq!(resp.usage.total_tokens, 20);
}

#[tokio::test]
async fn chat_prefers_the_dedicated_reasoning_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_response(
            "<think>stale tags</think>visible",
            Some("authoritative reasoning"),
        )))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let resp = client
        .create_chat_completion(ChatCompletionRequest {
            messages: vec![Message::system("be brief"), Message::user("hi")],
            ..Default::default()
        })
        .await
        .unwrap();

    let choice = &resp.choices[0];
    // Tags are stripped either way; the field wins.
    assert_eq!(choice.message.content, "visible");
    assert_eq!(
        choice.reasoning_content.as_deref(),
        Some("authoritative reasoning")
    );
}

#[tokio::test]
async fn chat_without_markers_passes_content_through() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(chat_response("plain answer", None)),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let resp = client
        .create_chat_completion(ChatCompletionRequest {
            messages: vec![Message::user("hi")],
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(resp.choices[0].message.content, "plain answer");
    assert!(resp.choices[0].reasoning_content.is_none());
}

#[tokio::test]
async fn chat_request_omits_unset_optionals() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_json(json!({
            "messages": [{"role": "user", "content": "hi"}],
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_response("ok", None)))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client
        .create_chat_completion(ChatCompletionRequest {
            messages: vec![Message::user("hi")],
            ..Default::default()
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn create_run_sends_only_set_parameters() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/threads/t_1/runs"))
        .and(body_json(json!({
            "assistant_id": "asst_1",
            "enable_thinking": true,
            "max_tokens": 256,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "run_1",
            "object": "thread.run",
            "created_at": 1_700_000_000,
            "thread_id": "t_1",
            "assistant_id": "asst_1",
            "status": "queued",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut params = RunParams::new("asst_1");
    params.max_tokens = Some(256);
    let run = client.create_run("t_1", &params).await.unwrap();
    assert_eq!(run.id, "run_1");
}

#[tokio::test]
async fn list_messages_unwraps_the_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/threads/t_1/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "list",
            "data": [{
                "id": "msg_1",
                "object": "thread.message",
                "created_at": 1_700_000_000,
                "thread_id": "t_1",
                "role": "assistant",
                "content": [
                    {"type": "text", "text": {"value": "Paris", "annotations": []}}
                ],
            }],
            "has_more": false,
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let messages = client.list_messages("t_1", None).await.unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].text(), "Paris");
}

#[tokio::test]
async fn moderation_decodes_category_and_score() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/moderations"))
        .and(body_json(json!({"prompt": "some text"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "category": "SAFE",
            "score": 0.97,
            "usage": {"prompt_tokens": 4, "completion_tokens": 1, "total_tokens": 5},
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let verdict = client
        .moderate_text(pixigpt::types::ModerationTextRequest {
            prompt: "some text".into(),
        })
        .await
        .unwrap();
    assert_eq!(verdict.category, "SAFE");
    assert!(verdict.score > 0.9);
}
