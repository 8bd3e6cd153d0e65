// SPDX-FileCopyrightText: 2026 EduBot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Request-level tests for the ask endpoint using `tower::ServiceExt::oneshot`.

use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode, header};
use edubot_gateway::{
    AskResponse, ErrorResponse, GatewayState, HealthResponse, TutorBackend, build_router,
};
use edubot_test_utils::{MockOutcome, TestHarness};
use tower::ServiceExt;

fn ready_state(harness: &TestHarness) -> GatewayState {
    GatewayState::new(TutorBackend::Ready(harness.router.clone()))
}

fn post_json(body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/api/ask")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn send(state: GatewayState, origin: &str, request: Request<Body>) -> axum::response::Response {
    build_router(state, origin).unwrap().oneshot(request).await.unwrap()
}

async fn json_body<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn math_question_answered_by_primary() {
    let harness = TestHarness::builder()
        .with_math(vec![MockOutcome::Answer("x=2".into())])
        .build()
        .unwrap();

    let response = send(
        ready_state(&harness),
        "*",
        post_json(r#"{"question": "Solve 2x+3=7", "subject": "general"}"#),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
    let body: AskResponse = json_body(response).await;
    assert_eq!(body.answer, "x=2");
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        serde_json::json!({"answer": "x=2", "model": "mathstral", "provider": "primary"})
    );
    assert_eq!(harness.general.calls(), 0);
}

#[tokio::test]
async fn fallback_answer_is_tagged() {
    let harness = TestHarness::builder()
        .with_general(vec![MockOutcome::Failure("503".into())])
        .with_math(vec![MockOutcome::Answer("Rome grew along the Tiber.".into())])
        .build()
        .unwrap();

    let response = send(
        ready_state(&harness),
        "*",
        post_json(r#"{"question": "Tell me about ancient Rome", "subject": "history"}"#),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body::<serde_json::Value>(response).await;
    assert_eq!(body["provider"], "fallback");
    assert_eq!(body["model"], "mathstral");
}

#[tokio::test]
async fn both_failing_returns_500_without_answer() {
    let harness = TestHarness::builder()
        .with_general(vec![MockOutcome::Failure("timeout".into())])
        .with_math(vec![MockOutcome::Failure("401".into())])
        .build()
        .unwrap();

    let response = send(
        ready_state(&harness),
        "*",
        post_json(r#"{"question": "Explain photosynthesis", "subject": "general"}"#),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = json_body::<serde_json::Value>(response).await;
    assert_eq!(body, serde_json::json!({"error": "Both providers failed. Please try again later."}));
}

#[tokio::test]
async fn short_question_is_400_with_reason() {
    let harness = TestHarness::builder().build().unwrap();
    let response = send(
        ready_state(&harness),
        "*",
        post_json(r#"{"question": "hi", "subject": "general"}"#),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: ErrorResponse = json_body(response).await;
    assert!(body.error.contains("too short"));
    assert_eq!(harness.math.calls() + harness.general.calls(), 0);
}

#[tokio::test]
async fn missing_question_is_required() {
    let harness = TestHarness::builder().build().unwrap();
    let response = send(ready_state(&harness), "*", post_json(r#"{"subject": "math"}"#)).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: ErrorResponse = json_body(response).await;
    assert_eq!(body.error, "Question is required");
}

#[tokio::test]
async fn malformed_json_is_400() {
    let harness = TestHarness::builder().build().unwrap();
    let response = send(ready_state(&harness), "*", post_json("{not json")).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: ErrorResponse = json_body(response).await;
    assert_eq!(body.error, "Invalid request body");
}

#[tokio::test]
async fn unknown_subject_is_400() {
    let harness = TestHarness::builder().build().unwrap();
    let response = send(
        ready_state(&harness),
        "*",
        post_json(r#"{"question": "Read my stars", "subject": "astrology"}"#),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: ErrorResponse = json_body(response).await;
    assert!(body.error.contains("Valid subjects"));
}

#[tokio::test]
async fn missing_credentials_return_500_naming_variable() {
    let state = GatewayState::new(TutorBackend::Unconfigured {
        missing: vec!["OPENROUTER_API_KEY"],
    });
    let response = send(
        state,
        "*",
        post_json(r#"{"question": "Explain photosynthesis"}"#),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: ErrorResponse = json_body(response).await;
    assert!(body.error.contains("OPENROUTER_API_KEY"), "got: {}", body.error);
}

#[tokio::test]
async fn get_on_ask_is_405() {
    let harness = TestHarness::builder().build().unwrap();
    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/ask")
        .body(Body::empty())
        .unwrap();
    let response = send(ready_state(&harness), "*", request).await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    let body: ErrorResponse = json_body(response).await;
    assert_eq!(body.error, "Method not allowed");
}

#[tokio::test]
async fn cors_preflight_is_empty_200() {
    let harness = TestHarness::builder().build().unwrap();
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/ask")
        .header(header::ORIGIN, "https://edubot.example.com")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();
    let response = send(ready_state(&harness), "https://edubot.example.com", request).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "https://edubot.example.com"
    );
    let methods = response.headers()[header::ACCESS_CONTROL_ALLOW_METHODS]
        .to_str()
        .unwrap()
        .to_string();
    assert!(methods.contains("POST") && methods.contains("OPTIONS"), "got: {methods}");
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert!(bytes.is_empty());
}

#[tokio::test]
async fn bare_options_is_empty_200() {
    let harness = TestHarness::builder().build().unwrap();
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/ask")
        .body(Body::empty())
        .unwrap();
    let response = send(ready_state(&harness), "*", request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert!(bytes.is_empty());
}

#[tokio::test]
async fn exact_origin_is_echoed_on_errors() {
    let state = GatewayState::new(TutorBackend::Unconfigured {
        missing: vec!["HUGGINGFACE_API_KEY"],
    });
    let mut request = post_json(r#"{"question": "Solve 2x+3=7"}"#);
    request
        .headers_mut()
        .insert(header::ORIGIN, "https://edubot.example.com".parse().unwrap());
    let response = send(state, "https://edubot.example.com", request).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "https://edubot.example.com"
    );
}

#[tokio::test]
async fn health_reports_provider_configuration() {
    let state = GatewayState::new(TutorBackend::Unconfigured {
        missing: vec!["HUGGINGFACE_API_KEY", "OPENROUTER_API_KEY"],
    });
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = send(state, "*", request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: HealthResponse = json_body(response).await;
    assert_eq!(body.status, "ok");
    assert!(!body.providers_configured);
}
