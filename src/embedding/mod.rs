//! Text-to-vector embedding pipeline.
//!
//! Provides the [`EmbeddingProvider`] trait, the registry of known
//! sentence-transformers models, and a local ONNX Runtime implementation.
//! The provider is created once at startup via [`create_provider`] and shared
//! read-only by every request for the process lifetime.

pub mod local;

use anyhow::Result;

/// A sentence-transformers model this service knows how to load.
///
/// Exactly one entry is active per process, selected by `embedding.model`
/// in the config at startup. The output dimensionality is a property of the
/// model and never changes while the process is running.
#[derive(Debug, Clone, Copy)]
pub struct KnownModel {
    /// Short name used in config and as the cache subdirectory.
    pub name: &'static str,
    /// Hugging Face repository the ONNX export and tokenizer come from.
    pub repo: &'static str,
    /// Output vector length.
    pub dimensions: usize,
    /// Sequence length the model was trained at; longer inputs are truncated.
    pub max_seq_len: usize,
}

/// Models with a published ONNX export that this service can serve.
pub const KNOWN_MODELS: &[KnownModel] = &[
    KnownModel {
        name: "paraphrase-MiniLM-L6-v2",
        repo: "sentence-transformers/paraphrase-MiniLM-L6-v2",
        dimensions: 384,
        max_seq_len: 128,
    },
    KnownModel {
        name: "all-mpnet-base-v2",
        repo: "sentence-transformers/all-mpnet-base-v2",
        dimensions: 768,
        max_seq_len: 384,
    },
    KnownModel {
        name: "paraphrase-mpnet-base-v2",
        repo: "sentence-transformers/paraphrase-mpnet-base-v2",
        dimensions: 768,
        max_seq_len: 512,
    },
    KnownModel {
        name: "all-roberta-large-v1",
        repo: "sentence-transformers/all-roberta-large-v1",
        dimensions: 1024,
        max_seq_len: 256,
    },
];

/// Look up a model by its short name or full repo path.
pub fn lookup_model(name: &str) -> Option<&'static KnownModel> {
    KNOWN_MODELS.iter().find(|m| m.name == name || m.repo == name)
}

/// Trait for embedding text into vectors.
///
/// Implementations produce L2-normalized vectors of exactly
/// [`dimensions`](EmbeddingProvider::dimensions) length. All methods are
/// synchronous — callers in async contexts should use
/// `tokio::task::spawn_blocking`.
pub trait EmbeddingProvider: Send + Sync {
    /// Embed a single sentence into a vector.
    fn embed(&self, text: &str) -> Result<Vec<f32>>;

    /// Return the number of dimensions this provider produces.
    fn dimensions(&self) -> usize;
}

/// Create an embedding provider from config.
///
/// Currently only `"local"` is supported (ONNX Runtime). Returns an error if
/// model files are not found — run `sembed model download` first.
pub fn create_provider(
    config: &crate::config::EmbeddingConfig,
) -> Result<Box<dyn EmbeddingProvider>> {
    match config.provider.as_str() {
        "local" => {
            let provider = local::LocalEmbeddingProvider::new(config)?;
            Ok(Box::new(provider))
        }
        other => anyhow::bail!("unknown embedding provider: {other}. Supported: local"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_known_models_resolve_by_name() {
        for model in KNOWN_MODELS {
            let found = lookup_model(model.name).unwrap();
            assert_eq!(found.repo, model.repo);
        }
    }

    #[test]
    fn models_resolve_by_repo_path() {
        let found = lookup_model("sentence-transformers/all-roberta-large-v1").unwrap();
        assert_eq!(found.name, "all-roberta-large-v1");
        assert_eq!(found.dimensions, 1024);
    }

    #[test]
    fn unknown_model_is_rejected() {
        assert!(lookup_model("bert-base-uncased").is_none());
    }

    #[test]
    fn default_model_is_known() {
        let config = crate::config::EmbeddingConfig::default();
        let model = lookup_model(&config.model).unwrap();
        assert_eq!(model.name, "all-roberta-large-v1");
        assert_eq!(model.dimensions, 1024);
        assert_eq!(model.max_seq_len, 256);
    }
}
