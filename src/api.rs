//! HTTP wire types and request handlers.
//!
//! Two routes: `GET /` (health) and `POST /embed`. Body validation policy:
//! a missing/malformed body or a non-string `sentence` is a 400, an empty or
//! whitespace-only `sentence` is a 422, and inference failures are a 500.
//! Error responses carry a JSON `{"error": ...}` body.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::server::AppState;

/// Health status line returned by `GET /`.
pub const STATUS_MESSAGE: &str = "Sentence Transformer service is running";

#[derive(Debug, Deserialize)]
pub struct EmbedRequest {
    pub sentence: String,
}

#[derive(Debug, Serialize)]
pub struct EmbedResponse {
    pub embedding: Vec<f32>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid request body: {0}")]
    InvalidBody(String),
    #[error("sentence must be a non-empty string")]
    EmptySentence,
    #[error("embedding failed")]
    Internal(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::EmptySentence => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(err) => {
                tracing::error!(error = %err, "embed request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}

/// `GET /` — liveness probe. Always succeeds once startup has completed.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: STATUS_MESSAGE,
    })
}

/// `POST /embed` — encode one sentence into its embedding vector.
///
/// The forward pass runs under `spawn_blocking`; the provider serializes
/// access to the ONNX session internally.
pub async fn embed(
    State(state): State<Arc<AppState>>,
    body: Result<Json<EmbedRequest>, JsonRejection>,
) -> Result<Json<EmbedResponse>, ApiError> {
    let Json(request) = body.map_err(|rejection| ApiError::InvalidBody(rejection.body_text()))?;

    if request.sentence.trim().is_empty() {
        return Err(ApiError::EmptySentence);
    }

    let provider = state.embedding.clone();
    let embedding = tokio::task::spawn_blocking(move || provider.embed(&request.sentence))
        .await
        .map_err(|e| ApiError::Internal(anyhow::anyhow!("embedding task panicked: {e}")))?
        .map_err(ApiError::Internal)?;

    Ok(Json(EmbedResponse { embedding }))
}
