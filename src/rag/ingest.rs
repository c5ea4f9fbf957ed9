//! Offline document ingestion.
//!
//! Reads source documents, splits them into overlapping chunks, embeds
//! and appends them to a fresh [`VectorStore`], and writes the paired
//! snapshot. This is a batch job: it never runs in the request-serving
//! path, and re-running it from scratch is the supported way to update
//! the knowledge base (there is no incremental delete or dedup).

use crate::rag::chunker::TextChunker;
use crate::rag::embeddings::Embedder;
use crate::rag::store::VectorStore;
use crate::types::{AppError, Result};
use crate::utils::config::RagConfig;
use std::sync::Arc;
use tracing::{info, warn};

/// Summary of a completed ingestion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestReport {
    /// Number of source files processed.
    pub files: usize,
    /// Number of chunks embedded and persisted.
    pub chunks: usize,
}

/// Builds the persisted snapshot from a directory of source documents.
pub struct IngestionPipeline {
    config: RagConfig,
    chunker: TextChunker,
}

impl IngestionPipeline {
    /// Build a pipeline with the configured chunking parameters.
    pub fn new(config: RagConfig) -> Self {
        let chunker = TextChunker::new(config.chunk_size, config.chunk_overlap);
        Self { config, chunker }
    }

    /// Split raw document texts into chunks, preserving document order.
    pub fn chunk_documents(&self, texts: &[String]) -> Vec<String> {
        texts.iter().flat_map(|t| self.chunker.chunk(t)).collect()
    }

    /// Run the full batch: load, chunk, embed, persist.
    ///
    /// Returns `Ok(None)` when the documents directory holds no usable
    /// source files; the caller reports that politely instead of
    /// treating it as a failure. Both directories are created if absent.
    pub async fn run(&self, embedder: Arc<dyn Embedder>) -> Result<Option<IngestReport>> {
        tokio::fs::create_dir_all(&self.config.data_dir).await?;
        tokio::fs::create_dir_all(&self.config.documents_dir).await?;

        let sources = self.collect_sources().await?;
        if sources.is_empty() {
            warn!(
                dir = %self.config.documents_dir.display(),
                "No source documents found; nothing to ingest"
            );
            return Ok(None);
        }

        let mut texts = Vec::with_capacity(sources.len());
        for path in &sources {
            let text = tokio::fs::read_to_string(path).await.map_err(|e| {
                AppError::Ingestion(format!("Failed to read {}: {}", path.display(), e))
            })?;
            info!(file = %path.display(), bytes = text.len(), "Loaded source document");
            texts.push(text);
        }

        let chunks = self.chunk_documents(&texts);
        info!(files = sources.len(), chunks = chunks.len(), "Chunked source documents");

        let mut store = VectorStore::new(embedder)?;
        store.add_documents(&chunks)?;
        store
            .persist(&self.config.index_path(), &self.config.documents_path())
            .await?;

        Ok(Some(IngestReport {
            files: sources.len(),
            chunks: chunks.len(),
        }))
    }

    /// Collect `.txt` and `.md` files from the documents directory,
    /// sorted by name so chunk order is stable across runs.
    async fn collect_sources(&self) -> Result<Vec<std::path::PathBuf>> {
        let mut sources = Vec::new();
        let mut entries = tokio::fs::read_dir(&self.config.documents_dir).await?;

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            let is_text = path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| matches!(e, "txt" | "md"));
            if path.is_file() && is_text {
                sources.push(path);
            }
        }

        sources.sort();
        Ok(sources)
    }
}
