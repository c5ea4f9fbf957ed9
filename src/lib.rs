//! # WellNest
//!
//! A retrieval-augmented mental wellness chatbot server. A user message
//! comes in over HTTP, semantically relevant passages are retrieved from
//! an embedded vector store, and both are forwarded to a hosted LLM to
//! produce a grounded answer.
//!
//! ## Overview
//!
//! WellNest can be used in two ways:
//!
//! 1. **As a standalone server** - Run the `wellnest-server` binary
//! 2. **As a library** - Import the retrieval and orchestration
//!    components into your own Rust project
//!
//! ## Quick Start (Library Usage)
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use std::time::Duration;
//! use wellnest::chat::ChatOrchestrator;
//! use wellnest::llm::gemini::GeminiClient;
//! use wellnest::rag::embeddings::FastEmbedder;
//! use wellnest::rag::store::VectorStore;
//!
//! let embedder = Arc::new(FastEmbedder::new()?);
//! let store = Arc::new(
//!     VectorStore::load_or_empty(embedder, &index_path, &documents_path).await?,
//! );
//! let llm = Arc::new(GeminiClient::new(&config.llm));
//!
//! let orchestrator = ChatOrchestrator::new(store, llm, 3, Duration::from_secs(30));
//! let reply = orchestrator.respond("How do I manage stress?").await;
//! ```
//!
//! ## Modules
//!
//! - [`rag`] - Vector store, chunking, embeddings, ingestion batch
//! - [`chat`] - RAG orchestration (retrieve → augment → generate)
//! - [`llm`] - Generation backend clients (Gemini)
//! - [`api`] - REST API handlers and routes
//! - [`types`] - Wire schemas and error handling
//! - [`utils`] - Environment-based configuration
//!
//! ## Architecture
//!
//! The ingestion batch (`wellnest-server ingest`) builds a persisted
//! snapshot offline; the server loads it read-only at startup and
//! shares it across request tasks. The two phases never run
//! concurrently, which is what makes the lock-free read path sound.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

/// HTTP API handlers and routes.
pub mod api;
/// Chat orchestration (the RAG core).
pub mod chat;
/// Generation backend clients.
pub mod llm;
/// Retrieval pipeline: store, chunker, embeddings, ingestion.
pub mod rag;
/// Core types (requests, responses, errors).
pub mod types;
/// Configuration utilities.
pub mod utils;

// Re-export commonly used types
pub use chat::ChatOrchestrator;
pub use llm::{GenerationClient, GenerationError};
pub use rag::store::{RetrievalOutcome, ScoredChunk, VectorStore};
pub use types::{AppError, Result};
pub use utils::config::Config;

use std::sync::Arc;

/// Application state shared across handlers.
///
/// Built once by the composition root in `main.rs`; nothing in here is
/// a process-wide global.
#[derive(Clone)]
pub struct AppState {
    /// Loaded configuration.
    pub config: Arc<Config>,
    /// The end-to-end chat pipeline.
    pub orchestrator: Arc<ChatOrchestrator>,
}
