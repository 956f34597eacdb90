//! Sentence embedding service — one pre-trained sentence-transformers model
//! behind a minimal HTTP/JSON API.
//!
//! The service loads a single model at startup (ONNX Runtime, local files)
//! and exposes two routes: `GET /` for liveness and `POST /embed` which maps
//! `{"sentence": s}` to `{"embedding": [...]}`. The embedding vector length
//! is fixed by the loaded model for the whole process lifetime.
//!
//! # Architecture
//!
//! - **Inference**: local ONNX Runtime session + HuggingFace tokenizer,
//!   mean pooling and L2 normalization (sentence-transformers semantics)
//! - **Transport**: plain HTTP/JSON via axum, no authentication, no state
//!   beyond the read-only model handle
//! - **Model cache**: `~/.sembed/models/<model>/`, populated by
//!   `sembed model download`
//!
//! # Modules
//!
//! - [`config`] — Configuration loading from TOML files and environment variables
//! - [`embedding`] — Text-to-vector embedding pipeline via ONNX Runtime
//! - [`api`] — HTTP wire types and request handlers
//! - [`server`] — Router construction and service bootstrap

pub mod api;
pub mod config;
pub mod embedding;
pub mod server;
