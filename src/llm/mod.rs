//! Generation backend clients.
//!
//! The chat pipeline talks to the hosted LLM through the
//! [`GenerationClient`] trait: a prompt goes in, generated text or a
//! typed [`GenerationError`] comes out. The production implementation
//! is [`gemini::GeminiClient`]; tests substitute mock clients.

pub mod gemini;

use async_trait::async_trait;
use thiserror::Error;

/// Result type for generation calls.
pub type GenerationResult<T> = std::result::Result<T, GenerationError>;

/// A generation failure, by category.
///
/// The orchestrator matches on these exhaustively; every variant
/// degrades to the same user-facing apology, but they are logged
/// differently and callers embedding the library can branch on them.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Invalid or rejected API credentials.
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Rate limit or quota exhausted.
    #[error("Quota exceeded: {0}")]
    Quota(String),

    /// Transport-level failure (DNS, connect, TLS, 5xx).
    #[error("Network error: {0}")]
    Network(String),

    /// The call did not finish within the configured deadline.
    #[error("Generation timed out after {0} seconds")]
    Timeout(u64),

    /// The backend answered, but not with usable generated text.
    #[error("Malformed response: {0}")]
    Malformed(String),
}

/// Client for a hosted text-generation backend.
#[async_trait]
pub trait GenerationClient: Send + Sync {
    /// Generate a completion for the given prompt.
    async fn generate(&self, prompt: &str) -> GenerationResult<String>;

    /// Get the model name/identifier.
    fn model_name(&self) -> &str;
}
