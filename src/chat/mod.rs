//! Chat orchestration: the retrieve → augment → generate pipeline.
//!
//! Each request runs the three stages once, in order, with no
//! branching back. The orchestrator always answers with a string and
//! never lets a retrieval or generation failure escape its boundary:
//! both degrade to fixed, documented replies. There are no automatic
//! retries.

use crate::llm::{GenerationClient, GenerationError};
use crate::rag::store::{RetrievalOutcome, VectorStore};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};

/// Reply when retrieval finds nothing (empty or unseeded store).
pub const EMPTY_KNOWLEDGE_BASE_REPLY: &str = "I'm sorry, but my knowledge base does not contain \
     information about that topic. Could you ask something else?";

/// Reply when the generation backend fails for any reason.
pub const GENERATION_FAILURE_REPLY: &str = "I'm sorry, there was an error communicating with the \
     AI service. Please try again later.";

/// Reply when retrieval itself fails (for example, the query could not
/// be embedded). The generation backend is never contacted on this
/// path, so the reply does not blame the AI service.
pub const RETRIEVAL_FAILURE_REPLY: &str = "I'm sorry, I wasn't able to search my knowledge base \
     just now. Please try again later.";

/// Refusal phrase the prompt instructs the model to emit when the
/// supplied context cannot answer the question. Documented so callers
/// can recognize a context-insufficient answer if they need to.
pub const CONTEXT_REFUSAL_PHRASE: &str =
    "Based on the information I have, I cannot answer that question.";

/// Composes retrieval, prompt construction and generation.
pub struct ChatOrchestrator {
    store: Arc<VectorStore>,
    llm: Arc<dyn GenerationClient>,
    top_k: usize,
    generation_timeout: Duration,
}

impl ChatOrchestrator {
    /// Wire the pipeline around a loaded store and a generation client.
    pub fn new(
        store: Arc<VectorStore>,
        llm: Arc<dyn GenerationClient>,
        top_k: usize,
        generation_timeout: Duration,
    ) -> Self {
        Self {
            store,
            llm,
            top_k,
            generation_timeout,
        }
    }

    /// Answer a single user message.
    ///
    /// Always returns a string: the generated answer, or one of the
    /// fixed degradation replies.
    pub async fn respond(&self, message: &str) -> String {
        // Stage 1: retrieve
        info!(top_k = self.top_k, "Searching vector store for context");
        let chunks = match self.store.search(message, self.top_k) {
            Ok(RetrievalOutcome::EmptyStore) => {
                info!("Knowledge base is empty, skipping generation");
                return EMPTY_KNOWLEDGE_BASE_REPLY.to_string();
            }
            Ok(RetrievalOutcome::Hits(hits)) if hits.is_empty() => {
                info!("Retrieval returned no chunks, skipping generation");
                return EMPTY_KNOWLEDGE_BASE_REPLY.to_string();
            }
            Ok(RetrievalOutcome::Hits(hits)) => hits,
            Err(e) => {
                error!(error = %e, "Retrieval failed");
                return RETRIEVAL_FAILURE_REPLY.to_string();
            }
        };

        // Stage 2: augment
        let context: Vec<&str> = chunks.iter().map(|c| c.text.as_str()).collect();
        let prompt = build_prompt(&context, message);

        // Stage 3: generate, under a bounded timeout
        let outcome = tokio::time::timeout(self.generation_timeout, self.llm.generate(&prompt))
            .await
            .unwrap_or_else(|_| {
                Err(GenerationError::Timeout(
                    self.generation_timeout.as_secs(),
                ))
            });

        match outcome {
            Ok(text) => {
                info!(model = self.llm.model_name(), "Generated response");
                text
            }
            Err(e) => {
                match &e {
                    GenerationError::Auth(_) => error!(error = %e, "Generation auth failure"),
                    GenerationError::Quota(_) => warn!(error = %e, "Generation quota exhausted"),
                    GenerationError::Network(_) => warn!(error = %e, "Generation network failure"),
                    GenerationError::Timeout(_) => warn!(error = %e, "Generation timed out"),
                    GenerationError::Malformed(_) => {
                        error!(error = %e, "Generation returned malformed response")
                    }
                }
                GENERATION_FAILURE_REPLY.to_string()
            }
        }
    }
}

/// Build the grounded prompt: context chunks joined by a blank line,
/// then the user's question, with instructions to answer only from the
/// context and to fall back to [`CONTEXT_REFUSAL_PHRASE`].
fn build_prompt(context_chunks: &[&str], message: &str) -> String {
    let context = context_chunks.join("\n\n");

    format!(
        "Based *only* on the context provided below, answer the user's question.\n\
         Do not use any of your own knowledge. If the context does not contain the answer,\n\
         you must say \"{refusal}\"\n\
         \n\
         CONTEXT:\n\
         ---\n\
         {context}\n\
         ---\n\
         \n\
         USER'S QUESTION:\n\
         {message}\n\
         \n\
         ANSWER:\n",
        refusal = CONTEXT_REFUSAL_PHRASE,
        context = context,
        message = message,
    )
}
