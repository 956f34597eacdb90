#![allow(dead_code)]

use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use sembed::embedding::EmbeddingProvider;
use sembed::server::{router, AppState};

/// Dimensionality of the test provider's vectors.
pub const TEST_DIM: usize = 8;

/// Deterministic embedding provider for HTTP tests: a spike vector whose
/// position is derived from the input bytes. No model files required.
/// Distinct short inputs tend to land on distinct positions, and the same
/// input always produces the same vector.
pub struct SpikeProvider;

impl EmbeddingProvider for SpikeProvider {
    fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let mut v = vec![0.0f32; TEST_DIM];
        let idx = text.bytes().map(|b| b as usize).sum::<usize>() % TEST_DIM;
        v[idx] = 1.0;
        Ok(v)
    }

    fn dimensions(&self) -> usize {
        TEST_DIM
    }
}

/// Embedding provider that always fails, for exercising the 500 path.
pub struct FailingProvider;

impl EmbeddingProvider for FailingProvider {
    fn embed(&self, _text: &str) -> Result<Vec<f32>> {
        anyhow::bail!("inference backend unavailable")
    }

    fn dimensions(&self) -> usize {
        TEST_DIM
    }
}

/// Build the service router over the deterministic test provider.
pub fn test_router() -> Router {
    router_with(Arc::new(SpikeProvider))
}

/// Build the service router over an arbitrary provider.
pub fn router_with(provider: Arc<dyn EmbeddingProvider>) -> Router {
    router(Arc::new(AppState {
        embedding: provider,
    }))
}
