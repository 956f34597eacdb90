//! HTTP contract tests for the two service routes, run in-process against
//! the router with a deterministic embedding provider (no model files).

mod helpers;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use helpers::{router_with, test_router, FailingProvider, TEST_DIM};

fn embed_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/embed")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_returns_exact_status_body() {
    let app = test_router();
    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(
        &bytes[..],
        br#"{"status":"Sentence Transformer service is running"}"#
    );
}

#[tokio::test]
async fn health_is_independent_of_embed_activity() {
    let app = test_router();

    let response = app
        .clone()
        .oneshot(embed_request(r#"{"sentence": "warm up"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn embed_returns_vector_of_constant_length() {
    let app = test_router();

    for sentence in ["hello world", "a much longer sentence about nothing"] {
        let body = format!(r#"{{"sentence": "{sentence}"}}"#);
        let response = app.clone().oneshot(embed_request(&body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        let embedding = json["embedding"].as_array().unwrap();
        assert_eq!(embedding.len(), TEST_DIM);
        assert!(embedding.iter().all(|v| v.as_f64().unwrap().is_finite()));
    }
}

#[tokio::test]
async fn embed_is_deterministic() {
    let app = test_router();
    let request = r#"{"sentence": "hello world"}"#;

    let first = body_json(app.clone().oneshot(embed_request(request)).await.unwrap()).await;
    let second = body_json(app.oneshot(embed_request(request)).await.unwrap()).await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn distinct_sentences_produce_distinct_vectors() {
    let app = test_router();

    let first = body_json(
        app.clone()
            .oneshot(embed_request(r#"{"sentence": "hello world"}"#))
            .await
            .unwrap(),
    )
    .await;
    let second = body_json(
        app.oneshot(embed_request(r#"{"sentence": "a"}"#))
            .await
            .unwrap(),
    )
    .await;

    assert_ne!(first["embedding"], second["embedding"]);
}

#[tokio::test]
async fn missing_sentence_field_is_400() {
    let app = test_router();
    let response = app.oneshot(embed_request("{}")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn non_string_sentence_is_400() {
    let app = test_router();
    let response = app
        .oneshot(embed_request(r#"{"sentence": 42}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn malformed_json_body_is_400() {
    let app = test_router();
    let response = app.oneshot(embed_request("not json at all")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn missing_content_type_is_400() {
    let app = test_router();
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/embed")
                .body(Body::from(r#"{"sentence": "hi"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn empty_sentence_is_422() {
    let app = test_router();

    for body in [r#"{"sentence": ""}"#, r#"{"sentence": "   "}"#] {
        let response = app.clone().oneshot(embed_request(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let json = body_json(response).await;
        assert_eq!(json["error"], "sentence must be a non-empty string");
    }
}

#[tokio::test]
async fn inference_failure_is_500_with_json_error() {
    let app = router_with(Arc::new(FailingProvider));
    let response = app
        .oneshot(embed_request(r#"{"sentence": "hello"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    // Failure detail stays in the server log; the client gets a generic message.
    assert_eq!(json["error"], "embedding failed");
}

#[tokio::test]
async fn unknown_path_is_404() {
    let app = test_router();
    let response = app
        .oneshot(
            Request::builder()
                .uri("/nope")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn wrong_method_is_405() {
    let app = test_router();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/embed")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
