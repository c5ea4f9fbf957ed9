//! Retrieval Augmented Generation (RAG) pipeline.
//!
//! # Module Structure
//!
//! - [`rag::embeddings`](crate::rag::embeddings) - Text embedding (fastembed, all-MiniLM-L6-v2)
//! - [`rag::chunker`](crate::rag::chunker) - Overlapping text chunking for document processing
//! - [`rag::store`](crate::rag::store) - Vector store: index-aligned chunks + flat L2 search
//! - [`rag::ingest`](crate::rag::ingest) - Offline document ingestion batch
//!
//! # Pipeline
//!
//! 1. **Ingestion** (offline) - Source documents are chunked, embedded and
//!    appended to the store, then persisted as a paired snapshot
//! 2. **Retrieval** (per request) - The query is embedded and the nearest
//!    chunks are returned in ascending-distance order
//! 3. **Generation** - The orchestrator ([`crate::chat`]) builds a prompt
//!    from the retrieved chunks and calls the LLM
//!
//! Ingestion and serving never run concurrently: the ingest batch owns a
//! private mutable store and writes the snapshot, while the server loads
//! a read-only store at startup and shares it behind an `Arc`.

pub mod chunker;
pub mod embeddings;
pub mod ingest;
pub mod store;
