use std::sync::Arc;

use anyhow::{Context, Result};
use reqwest::Client;

use crate::config::{Capability, Config};
use crate::llm::{OpenAICompatibleLLM, StatelessLLMInterface};
use crate::tts::{TTSClient, TTSInterface};

/// Immutable per-process state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub chat_llm: Arc<dyn StatelessLLMInterface>,
    pub translate_llm: Arc<dyn StatelessLLMInterface>,
    pub tts: Arc<dyn TTSInterface>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.system.request_timeout())
            .connect_timeout(config.system.connect_timeout())
            .build()
            .context("Failed to build upstream HTTP client")?;

        let base_url = config.upstream.base_url.clone();

        let chat_llm = OpenAICompatibleLLM::new(
            client.clone(),
            config.chat.model.clone(),
            base_url.clone(),
            required_key(&config, Capability::Chat)?,
        );
        let translate_llm = OpenAICompatibleLLM::new(
            client.clone(),
            config.translate.model.clone(),
            base_url.clone(),
            required_key(&config, Capability::Translate)?,
        );
        let tts = TTSClient::new(
            client,
            config.tts.model.clone(),
            base_url,
            required_key(&config, Capability::Speech)?,
        );

        Ok(Self {
            config: Arc::new(config),
            chat_llm: Arc::new(chat_llm),
            translate_llm: Arc::new(translate_llm),
            tts: Arc::new(tts),
        })
    }
}

fn required_key(config: &Config, capability: Capability) -> Result<String> {
    config
        .api_key(capability)
        .map(str::to_string)
        .ok_or_else(|| anyhow::anyhow!("No API key configured for {}", capability))
}
