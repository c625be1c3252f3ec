use super::gemini::GeminiClient;
use super::types::*;
use crate::{
    Result,
    config::{LlmConfig, LlmProvider},
};
use async_openai::{Client, config::OpenAIConfig, types as openai_types};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn generate_content(&self, request: GenerationRequest) -> Result<GenerationResponse>;
}

pub fn create_llm_client(config: &LlmConfig) -> Arc<dyn LlmClient> {
    match config.provider {
        LlmProvider::Gemini => Arc::new(GeminiClient::new(config)),
        LlmProvider::Openai => Arc::new(OpenAiClient::new(config.clone())),
    }
}

/// Chat-completions client for OpenAI and OpenAI-compatible endpoints.
pub struct OpenAiClient {
    client: Client<OpenAIConfig>,
}

impl OpenAiClient {
    pub fn new(config: LlmConfig) -> Self {
        let mut openai_config = OpenAIConfig::new().with_api_key(config.api_key);

        if !config.base_url.is_empty() {
            openai_config = openai_config.with_api_base(config.base_url);
        }

        Self {
            client: Client::with_config(openai_config),
        }
    }

    fn build_request(
        request: &GenerationRequest,
    ) -> Result<openai_types::CreateChatCompletionRequest> {
        let system = openai_types::ChatCompletionRequestSystemMessageArgs::default()
            .content(openai_types::ChatCompletionRequestSystemMessageContent::Text(
                request.system_instruction.clone(),
            ))
            .build()?;
        let user = openai_types::ChatCompletionRequestUserMessageArgs::default()
            .content(openai_types::ChatCompletionRequestUserMessageContent::Text(
                request.prompt.clone(),
            ))
            .build()?;

        let messages: Vec<openai_types::ChatCompletionRequestMessage> =
            vec![system.into(), user.into()];

        let mut request_builder = openai_types::CreateChatCompletionRequestArgs::default();
        request_builder
            .model(&request.model)
            .messages(messages)
            .temperature(request.temperature.unwrap_or(0.7));

        Ok(request_builder.build()?)
    }
}

#[async_trait]
impl LlmClient for OpenAiClient {
    async fn generate_content(&self, request: GenerationRequest) -> Result<GenerationResponse> {
        if request.web_search {
            warn!("Web search is not supported by the OpenAI provider; sending without it");
        }

        let openai_request = Self::build_request(&request)?;
        debug!("Creating chat completion with model {}", request.model);

        let response = self.client.chat().create(openai_request).await?;

        debug!(
            "Received chat completion response with {} choices",
            response.choices.len()
        );

        let text = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content);

        let usage = response.usage.map(|u| Usage {
            prompt_tokens: u.prompt_tokens,
            completion_tokens: u.completion_tokens,
            total_tokens: u.total_tokens,
        });

        Ok(GenerationResponse {
            text,
            model: Some(response.model),
            usage,
        })
    }
}
