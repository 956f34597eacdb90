//! Local ONNX Runtime embedding provider.
//!
//! Implements [`EmbeddingProvider`] for any model in the registry via `ort`.
//! Handles tokenization, inference, attention-masked mean pooling, and
//! L2 normalization — the sentence-transformers encode semantics.

use std::sync::Mutex;

use anyhow::{Context, Result};
use ort::session::Session;
use ort::value::Tensor;
use tokenizers::Tokenizer;

use super::{lookup_model, EmbeddingProvider, KnownModel, KNOWN_MODELS};
use crate::config::EmbeddingConfig;

/// Local ONNX-based embedding provider for the active registry model.
///
/// The session is not assumed safe for concurrent `run` calls, so it sits
/// behind a `Mutex`: concurrent requests serialize at the inference step.
pub struct LocalEmbeddingProvider {
    session: Mutex<Session>,
    tokenizer: Tokenizer,
    model: &'static KnownModel,
    /// BERT-style exports declare a `token_type_ids` input; RoBERTa exports
    /// do not. Probed from the graph metadata at load time.
    needs_token_type_ids: bool,
}

// Safety: Tokenizer is Send+Sync. Session is behind a Mutex.
// The Mutex guarantees exclusive access during run().
unsafe impl Send for LocalEmbeddingProvider {}
unsafe impl Sync for LocalEmbeddingProvider {}

impl LocalEmbeddingProvider {
    pub fn new(config: &EmbeddingConfig) -> Result<Self> {
        let model = lookup_model(&config.model).with_context(|| {
            let known: Vec<&str> = KNOWN_MODELS.iter().map(|m| m.name).collect();
            format!(
                "unknown embedding model: {}. Known models: {}",
                config.model,
                known.join(", ")
            )
        })?;

        let model_dir = crate::config::expand_tilde(&config.cache_dir).join(model.name);
        let model_path = model_dir.join("model.onnx");
        let tokenizer_path = model_dir.join("tokenizer.json");

        anyhow::ensure!(
            model_path.exists(),
            "ONNX model not found at {}. Run `sembed model download` first.",
            model_path.display()
        );
        anyhow::ensure!(
            tokenizer_path.exists(),
            "Tokenizer not found at {}. Run `sembed model download` first.",
            tokenizer_path.display()
        );

        let session = Session::builder()?
            .with_optimization_level(ort::session::builder::GraphOptimizationLevel::Level3)?
            .with_intra_threads(4)?
            .commit_from_file(&model_path)
            .context("failed to load ONNX model")?;

        let needs_token_type_ids = session
            .inputs()
            .iter()
            .any(|input| input.name() == "token_type_ids");

        tracing::info!(model = %model_path.display(), "ONNX model loaded");

        let mut tokenizer = Tokenizer::from_file(&tokenizer_path)
            .map_err(|e| anyhow::anyhow!("failed to load tokenizer: {e}"))?;

        tokenizer
            .with_truncation(Some(tokenizers::TruncationParams {
                max_length: model.max_seq_len,
                ..Default::default()
            }))
            .map_err(|e| anyhow::anyhow!("failed to set truncation: {e}"))?;

        tracing::info!(tokenizer = %tokenizer_path.display(), "tokenizer loaded");

        Ok(Self {
            session: Mutex::new(session),
            tokenizer,
            model,
            needs_token_type_ids,
        })
    }
}

impl EmbeddingProvider for LocalEmbeddingProvider {
    fn embed(&self, text: &str) -> Result<Vec<f32>> {
        // Step 1: Tokenize
        let encoding = self
            .tokenizer
            .encode(text, true)
            .map_err(|e| anyhow::anyhow!("tokenization failed: {e}"))?;

        let seq_len = encoding.get_ids().len();
        anyhow::ensure!(seq_len > 0, "tokenizer produced an empty encoding");

        // Step 2: Build input tensors as i64, shape [1, seq_len]
        let input_ids: Vec<i64> = encoding.get_ids().iter().map(|&id| id as i64).collect();
        let attention_mask: Vec<i64> = encoding
            .get_attention_mask()
            .iter()
            .map(|&m| m as i64)
            .collect();

        let shape = vec![1i64, seq_len as i64];
        let input_ids_tensor =
            Tensor::from_array((shape.clone(), input_ids.into_boxed_slice()))?;
        let attention_mask_tensor =
            Tensor::from_array((shape.clone(), attention_mask.clone().into_boxed_slice()))?;

        // Step 3: Run ONNX inference
        let mut session = self
            .session
            .lock()
            .map_err(|e| anyhow::anyhow!("session lock poisoned: {e}"))?;

        let outputs = if self.needs_token_type_ids {
            // token_type_ids: all zeros (single sentence, no segment B)
            let token_type_ids = vec![0i64; seq_len];
            let token_type_ids_tensor =
                Tensor::from_array((shape, token_type_ids.into_boxed_slice()))?;
            session.run(ort::inputs! {
                "input_ids" => input_ids_tensor,
                "attention_mask" => attention_mask_tensor,
                "token_type_ids" => token_type_ids_tensor,
            })?
        } else {
            session.run(ort::inputs! {
                "input_ids" => input_ids_tensor,
                "attention_mask" => attention_mask_tensor,
            })?
        };

        // Step 4: Extract token embeddings — shape [1, seq_len, dims]
        // The output name varies by ONNX export. Try common names, fall back to index 0.
        let token_emb_value = outputs
            .get("token_embeddings")
            .or_else(|| outputs.get("last_hidden_state"))
            .unwrap_or_else(|| &outputs[0]);

        let (out_shape, data) = token_emb_value
            .try_extract_tensor::<f32>()
            .context("failed to extract token embeddings tensor")?;

        let dims: &[i64] = &out_shape;
        anyhow::ensure!(
            dims.len() == 3 && dims[2] == self.model.dimensions as i64,
            "unexpected token embeddings shape: {dims:?}, expected [1, seq, {}]",
            self.model.dimensions
        );
        let hidden_dim = dims[2] as usize;
        let actual_seq_len = dims[1] as usize;

        // Step 5: Mean pooling with attention mask
        let mut sum = vec![0.0f32; hidden_dim];
        let mut count = 0.0f32;
        for s in 0..actual_seq_len {
            let mask = attention_mask[s] as f32;
            if mask > 0.0 {
                let offset = s * hidden_dim;
                for d in 0..hidden_dim {
                    sum[d] += data[offset + d] * mask;
                }
                count += mask;
            }
        }
        if count > 0.0 {
            for d in sum.iter_mut() {
                *d /= count;
            }
        }

        // Step 6: L2 normalize
        Ok(l2_normalize(&sum))
    }

    fn dimensions(&self) -> usize {
        self.model.dimensions
    }
}

/// L2-normalize a vector. Returns a zero vector if the input norm is zero.
fn l2_normalize(v: &[f32]) -> Vec<f32> {
    let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm > 0.0 {
        v.iter().map(|x| x / norm).collect()
    } else {
        v.to_vec()
    }
}
