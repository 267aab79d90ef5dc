//! Integration tests for the chat-completions backend.
//!
//! A local axum server plays the role of the text-generation service.
//!
//! Run with: `cargo test --package perc-explain --test chat_backend`

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use perc_core::{compute, ExplanationStyle, SelectionMode};
use perc_explain::{
    ChatCompletionsBackend, CompletionBackend, ExplainError, Explainer, LlmConfig, ProblemContext,
    FALLBACK_PREFIX,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;

#[derive(Clone, Default)]
struct Captured {
    bodies: Arc<Mutex<Vec<Value>>>,
    auth: Arc<Mutex<Vec<String>>>,
}

/// Serve `router` on an ephemeral port and return its base URL.
async fn spawn(router: Router) -> String {
    let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}/v1")
}

async fn completion_handler(
    State(captured): State<Captured>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Json<Value> {
    if let Some(auth) = headers.get("authorization") {
        captured
            .auth
            .lock()
            .unwrap()
            .push(auth.to_str().unwrap().to_string());
    }
    captured.bodies.lock().unwrap().push(body);
    Json(json!({
        "id": "cmpl-1",
        "object": "chat.completion",
        "choices": [
            { "index": 0, "message": { "role": "assistant", "content": "Order matters here." } }
        ]
    }))
}

fn config(base_url: &str) -> LlmConfig {
    LlmConfig::new("test-key")
        .with_base_url(base_url)
        .with_model("test-model")
}

fn labels() -> Vec<String> {
    ["A", "B", "C"].iter().map(|s| s.to_string()).collect()
}

#[tokio::test]
async fn test_successful_completion() {
    let captured = Captured::default();
    let router = Router::new()
        .route("/v1/chat/completions", post(completion_handler))
        .with_state(captured.clone());
    let base_url = spawn(router).await;

    let backend = ChatCompletionsBackend::new(&config(&base_url)).unwrap();
    let text = backend.complete("explain this").await.unwrap();
    assert_eq!(text, "Order matters here.");

    let bodies = captured.bodies.lock().unwrap();
    assert_eq!(bodies.len(), 1);
    let body = &bodies[0];
    assert_eq!(body["model"], "test-model");
    assert_eq!(body["messages"].as_array().unwrap().len(), 1);
    assert_eq!(body["messages"][0]["role"], "user");
    assert_eq!(body["messages"][0]["content"], "explain this");
    assert_eq!(body["max_tokens"], 600);
    assert_eq!(body["stream"], false);

    assert_eq!(
        captured.auth.lock().unwrap().clone(),
        vec!["Bearer test-key".to_string()]
    );
}

#[tokio::test]
async fn test_explainer_end_to_end() {
    let captured = Captured::default();
    let router = Router::new()
        .route("/v1/chat/completions", post(completion_handler))
        .with_state(captured.clone());
    let base_url = spawn(router).await;

    let explainer = Explainer::from_config(&config(&base_url)).unwrap();
    let items = labels();
    let computation = compute(&items, 2, SelectionMode::Ordered);
    let text = explainer
        .explain(
            ExplanationStyle::Tutor,
            &ProblemContext::new(&items, &computation),
        )
        .await;

    assert_eq!(text, "Order matters here.");
    let bodies = captured.bodies.lock().unwrap();
    let prompt = bodies[0]["messages"][0]["content"].as_str().unwrap();
    assert!(prompt.contains("Choose 2 items from [A, B, C] (permutation)"));
}

#[tokio::test]
async fn test_service_error_status() {
    let router = Router::new().route(
        "/v1/chat/completions",
        post(|| async { (StatusCode::TOO_MANY_REQUESTS, "slow down").into_response() }),
    );
    let base_url = spawn(router).await;

    let backend = ChatCompletionsBackend::new(&config(&base_url)).unwrap();
    let err = backend.complete("hi").await.unwrap_err();
    match err {
        ExplainError::Status { status, body } => {
            assert_eq!(status, 429);
            assert_eq!(body, "slow down");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_malformed_response() {
    let router = Router::new().route(
        "/v1/chat/completions",
        post(|| async { Json(json!({ "unexpected": true })) }),
    );
    let base_url = spawn(router).await;

    let backend = ChatCompletionsBackend::new(&config(&base_url)).unwrap();
    let err = backend.complete("hi").await.unwrap_err();
    assert!(matches!(err, ExplainError::Malformed(_)), "{err}");
}

#[tokio::test]
async fn test_empty_choices() {
    let router = Router::new().route(
        "/v1/chat/completions",
        post(|| async { Json(json!({ "choices": [] })) }),
    );
    let base_url = spawn(router).await;

    let backend = ChatCompletionsBackend::new(&config(&base_url)).unwrap();
    let err = backend.complete("hi").await.unwrap_err();
    assert!(matches!(err, ExplainError::NoChoices), "{err}");
}

#[tokio::test]
async fn test_timeout_falls_back() {
    let router = Router::new().route(
        "/v1/chat/completions",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(json!({ "choices": [] }))
        }),
    );
    let base_url = spawn(router).await;

    let explainer =
        Explainer::from_config(&config(&base_url).with_timeout(Duration::from_secs(1))).unwrap();
    let items = labels();
    let computation = compute(&items, 1, SelectionMode::Unordered);
    let text = explainer
        .explain(
            ExplanationStyle::Expert,
            &ProblemContext::new(&items, &computation),
        )
        .await;

    assert!(text.starts_with(FALLBACK_PREFIX), "{text}");
}

#[tokio::test]
async fn test_unreachable_service_falls_back() {
    // Bind then drop a listener so the port is closed.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let explainer = Explainer::from_config(&config(&format!("http://{addr}/v1"))).unwrap();
    let items = labels();
    let computation = compute(&items, 3, SelectionMode::Ordered);
    let text = explainer
        .explain(
            ExplanationStyle::Tutor,
            &ProblemContext::new(&items, &computation),
        )
        .await;

    assert!(text.starts_with("AI explanation unavailable: request failed"), "{text}");
}
