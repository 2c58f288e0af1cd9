//! In-process engines that stand in for the upstream provider in tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::config::Config;
use crate::error::UpstreamError;
use crate::llm::{CompletionOptions, Message, StatelessLLMInterface};
use crate::state::AppState;
use crate::tts::TTSInterface;

pub type LlmCall = (Vec<Message>, CompletionOptions);

/// Returns a fixed completion (or fails) and records every call.
pub struct ScriptedLLM {
    reply: Option<String>,
    calls: Mutex<Vec<LlmCall>>,
}

impl ScriptedLLM {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Some(reply.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<LlmCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl StatelessLLMInterface for ScriptedLLM {
    async fn chat_completion(
        &self,
        messages: Vec<Message>,
        options: CompletionOptions,
    ) -> Result<String, UpstreamError> {
        self.calls.lock().unwrap().push((messages, options));
        self.reply
            .clone()
            .ok_or_else(|| UpstreamError::Shape("scripted failure".to_string()))
    }
}

/// Returns fixed audio (or fails) and records `(text, voice)` pairs.
pub struct ScriptedTTS {
    audio: Option<Vec<u8>>,
    calls: Mutex<Vec<(String, String)>>,
}

impl ScriptedTTS {
    pub fn returning(audio: Vec<u8>) -> Self {
        Self {
            audio: Some(audio),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            audio: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TTSInterface for ScriptedTTS {
    async fn synthesize(&self, text: &str, voice: &str) -> Result<Vec<u8>, UpstreamError> {
        self.calls
            .lock()
            .unwrap()
            .push((text.to_string(), voice.to_string()));
        self.audio
            .clone()
            .ok_or_else(|| UpstreamError::Shape("scripted failure".to_string()))
    }
}

pub fn test_config() -> Config {
    let mut config = Config::default();
    config.upstream.api_key = Some("test-key".to_string());
    config
}

pub fn test_state(
    chat_llm: Arc<ScriptedLLM>,
    translate_llm: Arc<ScriptedLLM>,
    tts: Arc<ScriptedTTS>,
) -> AppState {
    AppState {
        config: Arc::new(test_config()),
        chat_llm,
        translate_llm,
        tts,
    }
}
