use async_trait::async_trait;
use blog_architect::{
    Error, Result,
    llm::{GenerationRequest, GenerationResponse, LlmClient},
};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// Mock LLM client for testing
#[derive(Debug, Default)]
pub struct MockLlmClient {
    pub responses: Arc<Mutex<Vec<GenerationResponse>>>,
    pub requests: Arc<Mutex<Vec<GenerationRequest>>>,
    pub error: Option<String>,
    /// When set, every call waits for a notification before answering.
    pub gate: Option<Arc<Notify>>,
}

impl MockLlmClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(self, text: &str) -> Self {
        self.responses.lock().unwrap().push(GenerationResponse {
            text: Some(text.to_string()),
            ..Default::default()
        });
        self
    }

    pub fn with_responses(self, responses: Vec<GenerationResponse>) -> Self {
        *self.responses.lock().unwrap() = responses;
        self
    }

    pub fn with_error(mut self, error: &str) -> Self {
        self.error = Some(error.to_string());
        self
    }

    pub fn with_gate(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn get_requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn generate_content(&self, request: GenerationRequest) -> Result<GenerationResponse> {
        self.requests.lock().unwrap().push(request);

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        if let Some(ref error) = self.error {
            return Err(Error::llm(error.clone()));
        }

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(Error::llm("No more mock responses available"));
        }

        Ok(responses.remove(0))
    }
}
