use async_trait::async_trait;

use super::types::{CompletionOptions, Message};
use crate::error::UpstreamError;

/// Interface for a stateless language model
/// Stateless means the LLM doesn't store memory, system prompts, or user messages
#[async_trait]
pub trait StatelessLLMInterface: Send + Sync {
    /// Run one chat completion and return the content of the first choice
    async fn chat_completion(
        &self,
        messages: Vec<Message>,
        options: CompletionOptions,
    ) -> Result<String, UpstreamError>;
}
