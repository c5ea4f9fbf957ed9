//! Text embedding.
//!
//! [`Embedder`] is the seam between the retrieval pipeline and the
//! embedding model: indexing and query paths both depend on it, and
//! tests substitute deterministic stubs.

use crate::types::{AppError, Result};
use crate::utils::config::EMBEDDING_DIMENSIONS;
use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};
use parking_lot::Mutex;

/// Turns text into fixed-dimension vectors.
///
/// Implementations are stateless from the caller's perspective and
/// safe to share across concurrent read paths.
pub trait Embedder: Send + Sync {
    /// Embed a batch of texts, preserving order.
    fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>>;

    /// Dimensionality of the produced vectors.
    fn dimensions(&self) -> usize;
}

/// fastembed-backed embedder using all-MiniLM-L6-v2 (384 dimensions),
/// the same sentence-transformer family the knowledge base was
/// designed around.
pub struct FastEmbedder {
    // The ONNX session wants exclusive access while encoding.
    model: Mutex<TextEmbedding>,
}

impl FastEmbedder {
    /// Initialize the model, downloading weights on first use.
    pub fn new() -> Result<Self> {
        let model = TextEmbedding::try_new(
            InitOptions::new(EmbeddingModel::AllMiniLML6V2).with_show_download_progress(true),
        )
        .map_err(|e| AppError::Embedding(e.to_string()))?;

        Ok(Self {
            model: Mutex::new(model),
        })
    }
}

impl Embedder for FastEmbedder {
    fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        self.model
            .lock()
            .embed(texts.to_vec(), None)
            .map_err(|e| AppError::Embedding(e.to_string()))
    }

    fn dimensions(&self) -> usize {
        EMBEDDING_DIMENSIONS
    }
}
