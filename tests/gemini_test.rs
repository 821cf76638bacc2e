//! Integration tests for [`GeminiClient`] — request shape, sequential
//! endpoint fallback, and exhaustion behaviour, against wiremock.

use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use nexus_ai::providers::GenerateProvider;
use nexus_ai::{GeminiClient, GenerationOptions, NexusAiError};

fn success_body(text: &str) -> serde_json::Value {
    serde_json::json!({
        "candidates": [{"content": {"parts": [{"text": text}]}}]
    })
}

fn client(server: &MockServer, endpoints: &[&str]) -> GeminiClient {
    GeminiClient::with_endpoints(
        "test-key",
        endpoints
            .iter()
            .map(|p| format!("{}{}", server.uri(), p))
            .collect(),
    )
}

#[tokio::test]
async fn first_endpoint_success() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/primary"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body("generated")))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server, &["/v1/primary", "/v1/secondary"]);
    let text = client
        .generate("tell me everything", &GenerationOptions::default())
        .await
        .unwrap();
    assert_eq!(text, "generated");
}

#[tokio::test]
async fn request_carries_prompt_and_generation_config() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/primary"))
        .and(query_param("key", "test-key"))
        .and(body_partial_json(serde_json::json!({
            "contents": [{"parts": [{"text": "tell me everything"}]}],
            "generationConfig": {"topK": 40, "topP": 0.95, "maxOutputTokens": 2048}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body("ok")))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server, &["/v1/primary"]);
    let text = client
        .generate("tell me everything", &GenerationOptions::default())
        .await
        .unwrap();
    assert_eq!(text, "ok");
}

#[tokio::test]
async fn falls_back_to_second_endpoint_on_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/primary"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/secondary"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body("from secondary")))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server, &["/v1/primary", "/v1/secondary"]);
    let text = client
        .generate("prompt", &GenerationOptions::default())
        .await
        .unwrap();
    assert_eq!(text, "from secondary");
}

#[tokio::test]
async fn success_at_last_position_after_mixed_failures() {
    let server = MockServer::start().await;

    // First: transport-level failure (500), second: unparseable body,
    // third: well-formed success.
    Mock::given(method("POST"))
        .and(path("/v1/a"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/b"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not valid json"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/c"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body("from last")))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server, &["/v1/a", "/v1/b", "/v1/c"]);
    let text = client
        .generate("prompt", &GenerationOptions::default())
        .await
        .unwrap();
    assert_eq!(text, "from last");
}

#[tokio::test]
async fn empty_candidates_count_as_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/primary"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"candidates": []})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/secondary"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body("real text")))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server, &["/v1/primary", "/v1/secondary"]);
    let text = client
        .generate("prompt", &GenerationOptions::default())
        .await
        .unwrap();
    assert_eq!(text, "real text");
}

#[tokio::test]
async fn all_endpoints_failing_returns_last_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/primary"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/secondary"))
        .respond_with(ResponseTemplate::new(502))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server, &["/v1/primary", "/v1/secondary"]);
    let result = client.generate("prompt", &GenerationOptions::default()).await;
    match result {
        Err(NexusAiError::Api { status, .. }) => assert_eq!(status, 502),
        other => panic!("expected Api error from last endpoint, got {other:?}"),
    }
}

#[tokio::test]
async fn auth_failure_still_falls_through() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/primary"))
        .respond_with(ResponseTemplate::new(403))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/secondary"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body("recovered")))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server, &["/v1/primary", "/v1/secondary"]);
    let text = client
        .generate("prompt", &GenerationOptions::default())
        .await
        .unwrap();
    assert_eq!(text, "recovered");
}

#[tokio::test]
async fn empty_endpoint_list_is_exhausted_immediately() {
    let client = GeminiClient::with_endpoints("test-key", vec![]);
    let result = client.generate("prompt", &GenerationOptions::default()).await;
    assert!(matches!(result, Err(NexusAiError::NoEndpoint)));
}

#[test]
fn default_endpoint_list_is_ordered_and_nonempty() {
    let client = GeminiClient::new("test-key");
    assert!(client.endpoints().len() >= 2);
    assert!(client.endpoints()[0].contains("generativelanguage.googleapis.com"));
}
