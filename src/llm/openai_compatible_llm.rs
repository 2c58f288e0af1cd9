use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};

use super::stateless_llm_interface::StatelessLLMInterface;
use super::types::{ChatCompletionRequest, ChatCompletionResponse, CompletionOptions, Message};
use crate::error::UpstreamError;

/// OpenAI compatible LLM implementation
/// Talks to `{base_url}/chat/completions` with bearer authentication
pub struct OpenAICompatibleLLM {
    client: Client,
    model: String,
    base_url: String,
    api_key: String,
}

impl OpenAICompatibleLLM {
    pub fn new(client: Client, model: String, base_url: String, api_key: String) -> Self {
        info!(
            "Initialized OpenAICompatibleLLM: model={}, base_url={}",
            model, base_url
        );
        Self {
            client,
            model,
            base_url,
            api_key,
        }
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl StatelessLLMInterface for OpenAICompatibleLLM {
    async fn chat_completion(
        &self,
        messages: Vec<Message>,
        options: CompletionOptions,
    ) -> Result<String, UpstreamError> {
        let request = ChatCompletionRequest {
            model: &self.model,
            messages: &messages,
            max_tokens: options.max_tokens,
            temperature: options.temperature,
        };

        debug!(
            "Sending chat completion: model={}, messages={}",
            self.model,
            messages.len()
        );

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(UpstreamError::Status { status, body });
        }

        let parsed: ChatCompletionResponse = serde_json::from_str(&body)?;
        parsed
            .into_first_content()
            .ok_or_else(|| UpstreamError::Shape("no message content in first choice".to_string()))
    }
}
