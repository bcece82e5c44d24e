use super::types::*;
use crate::{Error, Result};
use async_trait::async_trait;
use tracing::{debug, warn};

/// Fixed generation endpoint of the local Ollama server.
pub const OLLAMA_GENERATE_URL: &str = "http://localhost:11434/api/generate";

#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse>;
}

/// Ollama client without timeout or retry: one call blocks until the server
/// answers or the transport fails.
pub struct OllamaClient {
    client: reqwest::Client,
    endpoint: String,
}

impl OllamaClient {
    pub fn new() -> Self {
        Self::with_endpoint(OLLAMA_GENERATE_URL)
    }

    /// Targets another URL. Used by tests that stand up a local mock server.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for OllamaClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LlmClient for OllamaClient {
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse> {
        debug!(
            "Sending generate request to {} with model {}",
            self.endpoint, request.model
        );

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await?;

        // Status is not an error on its own; the body decides.
        let status = response.status();
        if !status.is_success() {
            warn!("Ollama returned non-success status {}", status);
        }

        let body = response.text().await?;
        let generated = parse_generate_response(&body)?;

        debug!(
            model = generated.model.as_deref().unwrap_or("unknown"),
            done = ?generated.done,
            eval_count = ?generated.eval_count,
            total_duration = ?generated.total_duration,
            "Received generate response"
        );

        Ok(generated)
    }
}

/// Parses a `/api/generate` body, telling malformed JSON apart from JSON that
/// lacks the `response` key.
pub fn parse_generate_response(body: &str) -> Result<GenerateResponse> {
    let value: serde_json::Value = serde_json::from_str(body)?;

    if value.get("response").is_none() {
        return Err(Error::missing_field("response"));
    }

    Ok(serde_json::from_value(value)?)
}
