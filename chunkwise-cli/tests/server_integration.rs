//! HTTP tests for `POST /split` driven through the router

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use chunkwise_cli::server::{build_router, AppState};
use chunkwise_core::{ChunkProcessor, CodepointTokenizer, Config, PlanTier};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn router_with(config: Config) -> Router {
    let processor = ChunkProcessor::with_tokenizer(Arc::new(CodepointTokenizer), config);
    build_router(AppState::new(processor))
}

fn router() -> Router {
    router_with(Config::default())
}

async fn post_split(router: Router, body: impl Into<Body>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/split")
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_split_returns_chunks() {
    let (status, body) = post_split(router(), r#"{"text": "Hello   world\n\nnull test"}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"chunks": ["Hello world test"]}));
}

#[tokio::test]
async fn test_empty_text_returns_no_chunks() {
    let (status, body) = post_split(router(), r#"{"text": ""}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"chunks": []}));
}

#[tokio::test]
async fn test_windows_under_custom_tiers() {
    let config = Config::builder()
        .tiers(vec![PlanTier::new(8, 4, 1)])
        .build()
        .unwrap();
    let (status, body) = post_split(router_with(config), r#"{"text": "abcdefghij"}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"chunks": ["abcd", "defg", "ghij", "j"]}));
}

#[tokio::test]
async fn test_unicode_is_not_escaped() {
    let request = Request::builder()
        .method("POST")
        .uri("/split")
        .body(Body::from(r#"{"text": "Привет, 世界"}"#))
        .unwrap();

    let response = router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(
        std::str::from_utf8(&bytes).unwrap(),
        r#"{"chunks":["Привет, 世界"]}"#
    );
}

#[tokio::test]
async fn test_invalid_bodies_are_bad_requests() {
    for body in ["not json", "{}", r#"{"text": 7}"#, r#"{"txt": "a"}"#] {
        let (status, value) = post_split(router(), body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body {body}");
        assert_eq!(value["status"], 400);
        assert!(value["error"].as_str().unwrap().starts_with("Invalid input"));
    }
}

#[tokio::test]
async fn test_wrong_method() {
    let request = Request::builder()
        .method("GET")
        .uri("/split")
        .body(Body::empty())
        .unwrap();

    let response = router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_health() {
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let response = router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["tokenizer"], "codepoint");
}

#[tokio::test]
async fn test_concurrent_requests() {
    let router = router();
    let mut handles = Vec::new();
    for i in 1..=8usize {
        let router = router.clone();
        handles.push(tokio::spawn(async move {
            let text = "y".repeat(i * 10);
            let (status, body) = post_split(router, json!({ "text": text }).to_string()).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["chunks"][0].as_str().unwrap().len(), i * 10);
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }
}
