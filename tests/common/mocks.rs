use async_trait::async_trait;
use ollama_generate::{
    Error, Result,
    llm::{GenerateRequest, GenerateResponse, LlmClient},
};
use std::sync::Mutex;

/// Mock LLM client that answers every call with the same canned reply
#[derive(Debug, Default)]
pub struct MockLlmClient {
    response: Option<GenerateResponse>,
    missing_field: Option<String>,
    requests: Mutex<Vec<GenerateRequest>>,
}

impl MockLlmClient {
    pub fn replying(text: &str) -> Self {
        Self {
            response: Some(GenerateResponse::from_text(text)),
            ..Default::default()
        }
    }

    /// Fails every call as if the reply lacked `field`
    pub fn missing(field: &str) -> Self {
        Self {
            missing_field: Some(field.to_string()),
            ..Default::default()
        }
    }

    pub fn get_requests(&self) -> Vec<GenerateRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse> {
        self.requests.lock().unwrap().push(request);

        if let Some(ref field) = self.missing_field {
            return Err(Error::missing_field(field.clone()));
        }

        self.response
            .clone()
            .ok_or_else(|| Error::missing_field("response"))
    }
}
