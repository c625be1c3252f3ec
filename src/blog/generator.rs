use super::{InputParameters, prompt};
use crate::{
    Error, Result,
    config::LlmConfig,
    llm::{GenerationRequest, LlmClient, create_llm_client},
};
use std::sync::Arc;
use tracing::{error, info};

/// Turns form inputs into exactly one outbound generation call.
#[derive(Clone)]
pub struct BlogGenerator {
    client: Arc<dyn LlmClient>,
    model: String,
    temperature: f32,
    web_search: bool,
}

impl BlogGenerator {
    pub fn new(client: Arc<dyn LlmClient>, config: &LlmConfig) -> Self {
        Self {
            client,
            model: config.model.clone(),
            temperature: config.temperature,
            web_search: config.web_search,
        }
    }

    pub fn from_config(config: &LlmConfig) -> Self {
        Self::new(create_llm_client(config), config)
    }

    pub fn build_request(&self, inputs: &InputParameters) -> GenerationRequest {
        GenerationRequest {
            model: self.model.clone(),
            system_instruction: prompt::system_instruction(inputs),
            prompt: prompt::user_prompt(inputs),
            web_search: self.web_search,
            temperature: Some(self.temperature),
        }
    }

    /// Returns the generated HTML fragment. An answer without text is `""`.
    /// Every failure collapses into [`Error::GenerationFailed`].
    pub async fn generate(&self, inputs: &InputParameters) -> Result<String> {
        let request = self.build_request(inputs);
        info!("Generating blog for keyword: {}", inputs.keyword);

        match self.client.generate_content(request).await {
            Ok(response) => {
                let text = response.text.unwrap_or_default();
                info!(
                    "Blog generated for keyword {} ({} bytes)",
                    inputs.keyword,
                    text.len()
                );
                Ok(text)
            }
            Err(e) => {
                error!("Generation API error: {}", e);
                Err(Error::generation_failed())
            }
        }
    }
}
