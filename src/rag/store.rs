//! Vector store: index-aligned document chunks plus a flat L2 index.
//!
//! The store owns a [`FlatIndex`] and an equally-ordered `Vec<String>`
//! of chunk texts. Row `i` of the index and `documents[i]` always
//! describe the same chunk; append goes through [`VectorStore::add_documents`]
//! which keeps the two containers in lockstep.
//!
//! Appending requires `&mut self` and is only reachable from the
//! offline ingestion batch; the serving path holds the store behind an
//! `Arc` and reads concurrently. Interleaving ingestion with live
//! serving is unsupported: rebuild the snapshot on disk, then reload.

use crate::rag::embeddings::Embedder;
use crate::types::{AppError, Result};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};
use wellnest_vector::{DistanceMetric, FlatIndex};

/// A retrieved chunk and its L2 distance from the query embedding.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredChunk {
    /// The stored chunk text.
    pub text: String,
    /// Distance from the query (lower is more similar).
    pub distance: f32,
}

/// Outcome of a nearest-neighbor search.
///
/// An empty store is not an error: callers must treat [`EmptyStore`]
/// as "no context available" and degrade accordingly.
///
/// [`EmptyStore`]: RetrievalOutcome::EmptyStore
#[derive(Debug, Clone, PartialEq)]
pub enum RetrievalOutcome {
    /// The store holds no vectors at all.
    EmptyStore,
    /// Nearest chunks first, at most `k` of them.
    Hits(Vec<ScoredChunk>),
}

/// Aggregate over the vector index, the chunk texts and the embedder.
pub struct VectorStore {
    index: FlatIndex,
    documents: Vec<String>,
    embedder: Arc<dyn Embedder>,
}

impl VectorStore {
    /// Create an empty store sized to the embedder's dimensionality.
    pub fn new(embedder: Arc<dyn Embedder>) -> Result<Self> {
        let index = FlatIndex::new(embedder.dimensions(), DistanceMetric::Euclidean)?;
        Ok(Self {
            index,
            documents: Vec::new(),
            embedder,
        })
    }

    /// Number of stored chunks.
    pub fn count(&self) -> usize {
        self.index.len()
    }

    /// Whether the store holds no chunks.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// The stored chunk texts, in insertion order.
    pub fn documents(&self) -> &[String] {
        &self.documents
    }

    /// Embed `texts` and append vectors and texts in the same order.
    ///
    /// Duplicates are permitted and stored independently. Either every
    /// text is appended to both containers or neither changes.
    pub fn add_documents(&mut self, texts: &[String]) -> Result<()> {
        if texts.is_empty() {
            return Ok(());
        }

        let embeddings = self.embedder.embed(texts)?;
        // append_batch validates everything before touching the index,
        // so the documents extend below cannot run after a partial append
        self.index.append_batch(&embeddings)?;
        self.documents.extend(texts.iter().cloned());

        info!(
            added = texts.len(),
            total = self.count(),
            "Added documents to vector store"
        );
        Ok(())
    }

    /// Embed `query` and return the `k` nearest chunks, ascending by
    /// L2 distance. Fewer than `k` stored chunks means all of them.
    pub fn search(&self, query: &str, k: usize) -> Result<RetrievalOutcome> {
        if self.is_empty() {
            return Ok(RetrievalOutcome::EmptyStore);
        }

        let query_embedding = self
            .embedder
            .embed(std::slice::from_ref(&query.to_string()))?
            .into_iter()
            .next()
            .ok_or_else(|| AppError::Embedding("Embedder returned no vector".to_string()))?;

        let neighbors = self.index.search(&query_embedding, k)?;
        let hits = neighbors
            .into_iter()
            .map(|n| ScoredChunk {
                text: self.documents[n.index].clone(),
                distance: n.distance,
            })
            .collect();

        Ok(RetrievalOutcome::Hits(hits))
    }

    /// Write the paired snapshot: the binary index artifact and the
    /// ordered document list.
    pub async fn persist(&self, index_path: &Path, documents_path: &Path) -> Result<()> {
        wellnest_vector::save_index(index_path, &self.index).await?;

        let json = serde_json::to_vec_pretty(&self.documents)
            .map_err(|e| AppError::Internal(format!("Failed to serialize documents: {}", e)))?;
        tokio::fs::write(documents_path, json).await?;

        info!(
            index = %index_path.display(),
            documents = %documents_path.display(),
            count = self.count(),
            "Persisted snapshot"
        );
        Ok(())
    }

    /// Load the paired snapshot, or start empty when it is absent.
    ///
    /// A missing artifact is not fatal: the server boots with an empty
    /// store and every query degrades to the empty-knowledge-base
    /// reply until ingestion runs. A snapshot where the two artifacts
    /// disagree on count is malformed and is a hard error.
    pub async fn load_or_empty(
        embedder: Arc<dyn Embedder>,
        index_path: &Path,
        documents_path: &Path,
    ) -> Result<Self> {
        if !index_path.exists() || !documents_path.exists() {
            warn!(
                index = %index_path.display(),
                documents = %documents_path.display(),
                "Snapshot not found, starting with an empty knowledge base; run the ingest command to build it"
            );
            return Self::new(embedder);
        }

        let index = wellnest_vector::load_index(index_path).await?;

        let data = tokio::fs::read(documents_path).await?;
        let documents: Vec<String> = serde_json::from_slice(&data)
            .map_err(|e| AppError::Internal(format!("Failed to parse document list: {}", e)))?;

        if index.len() != documents.len() {
            return Err(AppError::Internal(format!(
                "Snapshot mismatch: {} vectors vs {} documents",
                index.len(),
                documents.len()
            )));
        }

        if index.dimensions() != embedder.dimensions() {
            return Err(AppError::Internal(format!(
                "Snapshot dimensions ({}) do not match the embedder ({})",
                index.dimensions(),
                embedder.dimensions()
            )));
        }

        debug!(count = index.len(), "Loaded snapshot into vector store");
        Ok(Self {
            index,
            documents,
            embedder,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    /// Deterministic embedder: looks texts up in a fixed table,
    /// falling back to a constant vector.
    pub(crate) struct StubEmbedder {
        dimensions: usize,
        table: HashMap<String, Vec<f32>>,
    }

    impl StubEmbedder {
        pub(crate) fn new(dimensions: usize) -> Self {
            Self {
                dimensions,
                table: HashMap::new(),
            }
        }

        pub(crate) fn with(mut self, text: &str, vector: Vec<f32>) -> Self {
            assert_eq!(vector.len(), self.dimensions);
            self.table.insert(text.to_string(), vector);
            self
        }
    }

    impl Embedder for StubEmbedder {
        fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
            Ok(texts
                .iter()
                .map(|t| {
                    self.table
                        .get(t)
                        .cloned()
                        .unwrap_or_else(|| vec![0.5; self.dimensions])
                })
                .collect())
        }

        fn dimensions(&self) -> usize {
            self.dimensions
        }
    }

    fn seeded_store() -> VectorStore {
        let embedder = StubEmbedder::new(3)
            .with("Anxiety is a normal emotion...", vec![0.0, 1.0, 0.0])
            .with("Deep breathing exercises help...", vec![0.9, 0.1, 0.0])
            .with("How do I manage stress?", vec![1.0, 0.0, 0.0]);

        let mut store = VectorStore::new(Arc::new(embedder)).unwrap();
        store
            .add_documents(&[
                "Anxiety is a normal emotion...".to_string(),
                "Deep breathing exercises help...".to_string(),
            ])
            .unwrap();
        store
    }

    #[test]
    fn test_alignment_invariant() {
        let store = seeded_store();
        assert_eq!(store.count(), store.documents().len());
        assert_eq!(store.documents()[0], "Anxiety is a normal emotion...");
        assert_eq!(store.documents()[1], "Deep breathing exercises help...");
    }

    #[test]
    fn test_search_ranks_nearest_first() {
        let store = seeded_store();

        let outcome = store.search("How do I manage stress?", 2).unwrap();
        let RetrievalOutcome::Hits(hits) = outcome else {
            panic!("expected hits from a seeded store");
        };

        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].text, "Deep breathing exercises help...");
        assert_eq!(hits[1].text, "Anxiety is a normal emotion...");
        assert!(hits[0].distance <= hits[1].distance);
    }

    #[test]
    fn test_search_k_bound() {
        let store = seeded_store();

        let RetrievalOutcome::Hits(hits) = store.search("How do I manage stress?", 10).unwrap()
        else {
            panic!("expected hits");
        };
        assert_eq!(hits.len(), 2);

        let RetrievalOutcome::Hits(hits) = store.search("How do I manage stress?", 1).unwrap()
        else {
            panic!("expected hits");
        };
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn test_empty_store_returns_sentinel() {
        let store = VectorStore::new(Arc::new(StubEmbedder::new(3))).unwrap();
        let outcome = store.search("anything", 3).unwrap();
        assert_eq!(outcome, RetrievalOutcome::EmptyStore);
    }

    #[test]
    fn test_duplicates_are_stored_independently() {
        let mut store = VectorStore::new(Arc::new(StubEmbedder::new(3))).unwrap();
        store
            .add_documents(&["same chunk".to_string(), "same chunk".to_string()])
            .unwrap();
        assert_eq!(store.count(), 2);
    }

    #[tokio::test]
    async fn test_persist_then_load_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let index_path = temp_dir.path().join("index.bin");
        let documents_path = temp_dir.path().join("documents.json");

        let store = seeded_store();
        store.persist(&index_path, &documents_path).await.unwrap();

        let embedder: Arc<dyn Embedder> = Arc::new(StubEmbedder::new(3));
        let loaded = VectorStore::load_or_empty(embedder, &index_path, &documents_path)
            .await
            .unwrap();

        assert_eq!(loaded.count(), store.count());
        assert_eq!(loaded.documents(), store.documents());
    }

    #[tokio::test]
    async fn test_load_missing_snapshot_starts_empty() {
        let temp_dir = TempDir::new().unwrap();
        let embedder: Arc<dyn Embedder> = Arc::new(StubEmbedder::new(3));

        let store = VectorStore::load_or_empty(
            embedder,
            &temp_dir.path().join("index.bin"),
            &temp_dir.path().join("documents.json"),
        )
        .await
        .unwrap();

        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_load_with_one_artifact_missing_starts_empty() {
        let temp_dir = TempDir::new().unwrap();
        let index_path = temp_dir.path().join("index.bin");
        let documents_path = temp_dir.path().join("documents.json");

        let store = seeded_store();
        store.persist(&index_path, &documents_path).await.unwrap();
        tokio::fs::remove_file(&documents_path).await.unwrap();

        let embedder: Arc<dyn Embedder> = Arc::new(StubEmbedder::new(3));
        let loaded = VectorStore::load_or_empty(embedder, &index_path, &documents_path)
            .await
            .unwrap();
        assert!(loaded.is_empty());
    }

    #[tokio::test]
    async fn test_load_count_mismatch_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let index_path = temp_dir.path().join("index.bin");
        let documents_path = temp_dir.path().join("documents.json");

        let store = seeded_store();
        store.persist(&index_path, &documents_path).await.unwrap();

        // Truncate the document list behind the index's back
        tokio::fs::write(&documents_path, r#"["only one chunk"]"#)
            .await
            .unwrap();

        let embedder: Arc<dyn Embedder> = Arc::new(StubEmbedder::new(3));
        let result = VectorStore::load_or_empty(embedder, &index_path, &documents_path).await;
        assert!(matches!(result, Err(AppError::Internal(_))));
    }
}
