use super::client::LlmClient;
use super::types::{GenerateContentRequest, GenerateContentResponse, GenerationRequest, GenerationResponse};
use crate::{Error, Result, config::LlmConfig};
use async_trait::async_trait;
use tracing::debug;

/// Client for the Gemini `generateContent` REST endpoint.
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(config: &LlmConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        }
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, model)
    }
}

#[async_trait]
impl LlmClient for GeminiClient {
    async fn generate_content(&self, request: GenerationRequest) -> Result<GenerationResponse> {
        let url = self.endpoint(&request.model);
        debug!(
            "Calling Gemini model {} (web search: {})",
            request.model, request.web_search
        );

        let body = GenerateContentRequest::from_request(&request);
        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(Error::llm(format!(
                "Gemini API returned {}: {}",
                status, detail
            )));
        }

        let payload: GenerateContentResponse = response.json().await?;
        debug!(
            "Received Gemini response with {} candidates",
            payload.candidates.len()
        );

        Ok(payload.into_generation_response())
    }
}
