//! Core types: API schemas and application errors.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ============= API Request/Response Types =============

/// A user's chat message.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ChatMessageRequest {
    /// The message text, e.g. `{"message": "hello, I need some advice."}`.
    pub message: String,
}

/// The chatbot's reply to a single message.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ChatMessageResponse {
    /// Generated answer, or one of the fixed degradation messages.
    pub response: String,
}

/// A single mental health resource entry.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Resource {
    /// Resource identifier.
    pub id: u32,
    /// Short title.
    pub title: String,
    /// Resource body text.
    pub content: String,
}

// ============= Error Types =============

/// Application-level error.
///
/// Retrieval and generation failures never reach this type from the
/// chat path: the orchestrator degrades them to fixed reply strings.
/// `AppError` covers the remaining surfaces (unknown resources,
/// ingestion problems, startup wiring).
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Requested entity does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Embedding model failure.
    #[error("Embedding error: {0}")]
    Embedding(String),

    /// Vector store failure.
    #[error("Vector store error: {0}")]
    VectorStore(#[from] wellnest_vector::Error),

    /// Document ingestion failure.
    #[error("Ingestion error: {0}")]
    Ingestion(String),

    /// I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Anything else.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::NotFound(msg) => (axum::http::StatusCode::NOT_FOUND, msg),
            AppError::Embedding(msg) => (axum::http::StatusCode::INTERNAL_SERVER_ERROR, msg),
            AppError::VectorStore(e) => {
                (axum::http::StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
            AppError::Ingestion(msg) => (axum::http::StatusCode::INTERNAL_SERVER_ERROR, msg),
            AppError::Io(e) => (axum::http::StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            AppError::Internal(msg) => (axum::http::StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = serde_json::json!({
            "error": message
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Result alias using [`AppError`].
pub type Result<T> = std::result::Result<T, AppError>;
