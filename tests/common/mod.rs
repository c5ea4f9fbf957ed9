//! Shared test doubles.
//!
//! Deterministic embedder and generation clients used across the
//! integration test files, so endpoint tests never touch the network
//! or the real embedding model.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use wellnest::llm::{GenerationClient, GenerationError, GenerationResult};
use wellnest::rag::embeddings::Embedder;
use wellnest::utils::config::{Config, LlmConfig, RagConfig, ServerConfig};
use wellnest::{AppState, ChatOrchestrator, VectorStore};

/// Embedder backed by a fixed text → vector table.
///
/// Unknown texts embed to a constant vector, so alignment still holds
/// for texts the test didn't anticipate.
pub struct TableEmbedder {
    dimensions: usize,
    table: HashMap<String, Vec<f32>>,
}

impl TableEmbedder {
    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions,
            table: HashMap::new(),
        }
    }

    pub fn with(mut self, text: &str, vector: Vec<f32>) -> Self {
        assert_eq!(vector.len(), self.dimensions);
        self.table.insert(text.to_string(), vector);
        self
    }
}

impl Embedder for TableEmbedder {
    fn embed(&self, texts: &[String]) -> wellnest::Result<Vec<Vec<f32>>> {
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

/// Generation client with a canned response and a call counter.
pub struct MockGenerationClient {
    response: Option<String>,
    calls: AtomicUsize,
}

impl MockGenerationClient {
    pub fn succeeding(response: &str) -> Self {
        Self {
            response: Some(response.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            response: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GenerationClient for MockGenerationClient {
    async fn generate(&self, _prompt: &str) -> GenerationResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.response {
            Some(text) => Ok(text.clone()),
            None => Err(GenerationError::Network("mock failure".to_string())),
        }
    }

    fn model_name(&self) -> &str {
        "mock"
    }
}

/// A config that never reads the environment.
pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        llm: LlmConfig {
            gemini_api_key: "test-key".to_string(),
            gemini_model_name: "gemini-2.5-pro".to_string(),
            gemini_api_base: "http://localhost:0".to_string(),
            request_timeout_secs: 5,
        },
        rag: RagConfig {
            data_dir: "data".into(),
            documents_dir: "documents".into(),
            chunk_size: 1000,
            chunk_overlap: 100,
            top_k: 3,
        },
    }
}

/// Wire an `AppState` around a prepared store and generation client.
pub fn app_state(store: VectorStore, llm: Arc<MockGenerationClient>) -> AppState {
    let config = Arc::new(test_config());
    let orchestrator = Arc::new(ChatOrchestrator::new(
        Arc::new(store),
        llm,
        config.rag.top_k,
        Duration::from_secs(config.llm.request_timeout_secs),
    ));

    AppState {
        config,
        orchestrator,
    }
}
