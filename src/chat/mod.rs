pub mod prompt;

use serde::{Deserialize, Serialize};
use tracing::error;

use crate::config::ChatConfig;
use crate::handlers::lenient_string;
use crate::llm::StatelessLLMInterface;

pub const FALLBACK_REPLY: &str = "Chatbot error.";

/// Inbound `/chat` body; a non-string `message` counts as missing.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

/// Result of a chat turn: the model's answer, or the fallback that stands in
/// for any upstream failure.
#[derive(Debug, Clone, PartialEq)]
pub enum ChatOutcome {
    Reply(String),
    Fallback,
}

impl From<ChatOutcome> for ChatResponse {
    fn from(outcome: ChatOutcome) -> Self {
        let reply = match outcome {
            ChatOutcome::Reply(reply) => reply,
            ChatOutcome::Fallback => FALLBACK_REPLY.to_string(),
        };
        Self { reply }
    }
}

pub async fn respond(
    llm: &dyn StatelessLLMInterface,
    config: &ChatConfig,
    message: &str,
) -> ChatOutcome {
    let (messages, options) = prompt::build_request(config, message);
    match llm.chat_completion(messages, options).await {
        Ok(reply) => ChatOutcome::Reply(reply),
        Err(e) => {
            error!("Chat completion failed: {}", e);
            ChatOutcome::Fallback
        }
    }
}
