use serde::Deserialize;
use std::env;
use std::path::PathBuf;

/// Dimensionality of all-MiniLM-L6-v2 embeddings. Fixed at store
/// construction; every vector in the index has exactly this many
/// components.
pub const EMBEDDING_DIMENSIONS: usize = 384;

/// Top-level application configuration, assembled from the environment.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// HTTP listener settings.
    pub server: ServerConfig,
    /// Generation backend settings.
    pub llm: LlmConfig,
    /// Retrieval pipeline settings.
    pub rag: RagConfig,
}

/// Bind address for the API server.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind, e.g. `127.0.0.1`.
    pub host: String,
    /// TCP port to listen on.
    pub port: u16,
}

/// Settings for the Gemini generation client.
#[derive(Debug, Clone, Deserialize)]
pub struct LlmConfig {
    /// API key passed as the `key` query parameter.
    pub gemini_api_key: String,
    /// Model identifier, e.g. `gemini-2.5-pro`.
    pub gemini_model_name: String,
    /// Base URL of the Generative Language API. Overridable for tests.
    pub gemini_api_base: String,
    /// Upper bound on a single generation call, in seconds.
    pub request_timeout_secs: u64,
}

/// Settings for chunking, retrieval, and snapshot locations.
#[derive(Debug, Clone, Deserialize)]
pub struct RagConfig {
    /// Directory holding the persisted snapshot pair.
    pub data_dir: PathBuf,
    /// Directory of source documents for ingestion.
    pub documents_dir: PathBuf,
    /// Target chunk length in characters.
    pub chunk_size: usize,
    /// Characters shared between consecutive chunks.
    pub chunk_overlap: usize,
    /// Number of chunks retrieved per query.
    pub top_k: usize,
}

impl Config {
    /// Load configuration from the environment, reading a `.env` file
    /// if one is present. Only `GEMINI_API_KEY` is required; everything
    /// else has a default.
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let config = Config {
            server: ServerConfig {
                host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
                port: env::var("PORT")
                    .unwrap_or_else(|_| "8000".to_string())
                    .parse()?,
            },
            llm: LlmConfig {
                gemini_api_key: env::var("GEMINI_API_KEY")?,
                gemini_model_name: env::var("GEMINI_MODEL_NAME")
                    .unwrap_or_else(|_| "gemini-2.5-pro".to_string()),
                gemini_api_base: env::var("GEMINI_API_BASE").unwrap_or_else(|_| {
                    "https://generativelanguage.googleapis.com/v1beta".to_string()
                }),
                request_timeout_secs: env::var("LLM_REQUEST_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "30".to_string())
                    .parse()?,
            },
            rag: RagConfig {
                data_dir: env::var("DATA_DIR")
                    .unwrap_or_else(|_| "data".to_string())
                    .into(),
                documents_dir: env::var("DOCUMENTS_DIR")
                    .unwrap_or_else(|_| "documents".to_string())
                    .into(),
                chunk_size: env::var("CHUNK_SIZE")
                    .unwrap_or_else(|_| "1000".to_string())
                    .parse()?,
                chunk_overlap: env::var("CHUNK_OVERLAP")
                    .unwrap_or_else(|_| "100".to_string())
                    .parse()?,
                top_k: env::var("RETRIEVAL_TOP_K")
                    .unwrap_or_else(|_| "3".to_string())
                    .parse()?,
            },
        };

        config.rag.validate()?;
        Ok(config)
    }
}

/// Filenames of the paired snapshot artifacts inside `data_dir`.
///
/// Both are required together for a successful load; the index rows
/// and the document list are index-aligned.
pub const INDEX_FILE: &str = "index.bin";
/// Companion document list; see [`INDEX_FILE`].
pub const DOCUMENTS_FILE: &str = "documents.json";

impl RagConfig {
    /// Check that the chunking parameters can make forward progress.
    ///
    /// Rejected here so a misconfigured environment fails with a clear
    /// message at startup instead of panicking inside the chunker.
    pub fn validate(&self) -> Result<(), String> {
        if self.chunk_size == 0 {
            return Err("CHUNK_SIZE must be greater than zero".to_string());
        }
        if self.chunk_overlap >= self.chunk_size {
            return Err(format!(
                "CHUNK_OVERLAP ({}) must be smaller than CHUNK_SIZE ({})",
                self.chunk_overlap, self.chunk_size
            ));
        }
        Ok(())
    }

    /// Path of the serialized vector index.
    pub fn index_path(&self) -> PathBuf {
        self.data_dir.join(INDEX_FILE)
    }

    /// Path of the serialized document list.
    pub fn documents_path(&self) -> PathBuf {
        self.data_dir.join(DOCUMENTS_FILE)
    }
}
