//! Google Gemini client over the Generative Language REST API.

use crate::llm::{GenerationClient, GenerationError, GenerationResult};
use crate::utils::config::LlmConfig;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

/// Client for Gemini's `generateContent` endpoint.
///
/// Talks plain REST with the API key as a query parameter, the same
/// shape the hosted API documents. The base URL is configurable so
/// tests can point it at a local mock server.
pub struct GeminiClient {
    http: reqwest::Client,
    api_base: String,
    api_key: String,
    model: String,
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

impl GeminiClient {
    /// Build a client from the LLM section of the configuration.
    pub fn new(config: &LlmConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base: config.gemini_api_base.trim_end_matches('/').to_string(),
            api_key: config.gemini_api_key.clone(),
            model: config.gemini_model_name.clone(),
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.api_base, self.model, self.api_key
        )
    }
}

#[async_trait]
impl GenerationClient for GeminiClient {
    async fn generate(&self, prompt: &str) -> GenerationResult<String> {
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self
            .http
            .post(self.endpoint())
            .json(&body)
            .send()
            .await
            .map_err(|e| GenerationError::Network(format!("Gemini request failed: {}", e)))?;

        match response.status() {
            status if status.is_success() => {}
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                return Err(GenerationError::Auth(format!(
                    "Gemini rejected the API key (HTTP {})",
                    response.status().as_u16()
                )));
            }
            StatusCode::TOO_MANY_REQUESTS => {
                return Err(GenerationError::Quota(
                    "Gemini rate limit exceeded (HTTP 429)".to_string(),
                ));
            }
            status if status.is_server_error() => {
                return Err(GenerationError::Network(format!(
                    "Gemini server error (HTTP {})",
                    status.as_u16()
                )));
            }
            status => {
                return Err(GenerationError::Malformed(format!(
                    "Unexpected Gemini status (HTTP {})",
                    status.as_u16()
                )));
            }
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::Malformed(format!("Invalid Gemini response: {}", e)))?;

        let text = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or_else(|| {
                GenerationError::Malformed("Gemini response contained no candidates".to_string())
            })?;

        Ok(text)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(api_base: &str) -> LlmConfig {
        LlmConfig {
            gemini_api_key: "test-key".to_string(),
            gemini_model_name: "gemini-2.5-pro".to_string(),
            gemini_api_base: api_base.to_string(),
            request_timeout_secs: 30,
        }
    }

    #[test]
    fn test_endpoint_shape() {
        let client = GeminiClient::new(&test_config(
            "https://generativelanguage.googleapis.com/v1beta/",
        ));
        assert_eq!(
            client.endpoint(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-pro:generateContent?key=test-key"
        );
    }

    #[test]
    fn test_response_parsing() {
        let json = serde_json::json!({
            "candidates": [
                {"content": {"parts": [{"text": "Try deep breathing."}], "role": "model"}}
            ]
        });
        let parsed: GenerateContentResponse = serde_json::from_value(json).unwrap();
        assert_eq!(parsed.candidates[0].content.parts[0].text, "Try deep breathing.");
    }

    #[test]
    fn test_response_parsing_without_candidates() {
        let parsed: GenerateContentResponse = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(parsed.candidates.is_empty());
    }
}
