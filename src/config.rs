use std::time::Duration;

use anyhow::Result;
use ::config::builder::DefaultState;
use ::config::{ConfigBuilder, Environment, File};
use serde::{Deserialize, Serialize};

const ENV_PREFIX: &str = "PROXY";
const SHARED_KEY_VAR: &str = "GROQ_API_KEY";
const DEFAULT_CONFIG_PATH: &str = "conf.yaml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub system: SystemConfig,
    #[serde(default)]
    pub upstream: UpstreamConfig,
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub translate: TranslateConfig,
    #[serde(default)]
    pub tts: TtsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_request_timeout_secs() -> u64 {
    60
}

fn default_connect_timeout_secs() -> u64 {
    10
}

/// Where the OpenAI-compatible provider lives and the credential shared by
/// every capability that doesn't carry its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    pub api_key: Option<String>,
}

fn default_base_url() -> String {
    "https://api.groq.com/openai/v1".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    #[serde(default = "default_llm_model")]
    pub model: String,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_itinerary_max_tokens")]
    pub itinerary_max_tokens: u32,
    pub api_key: Option<String>,
}

fn default_llm_model() -> String {
    "llama-3.1-8b-instant".to_string()
}

fn default_max_tokens() -> u32 {
    1024
}

fn default_itinerary_max_tokens() -> u32 {
    2000
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateConfig {
    #[serde(default = "default_llm_model")]
    pub model: String,
    #[serde(default)]
    pub temperature: f32,
    #[serde(default = "default_language")]
    pub default_language: String,
    pub api_key: Option<String>,
}

fn default_language() -> String {
    "Hindi".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TtsConfig {
    #[serde(default = "default_tts_model")]
    pub model: String,
    #[serde(default = "default_voice")]
    pub default_voice: String,
    pub api_key: Option<String>,
}

fn default_tts_model() -> String {
    "tts-1".to_string()
}

fn default_voice() -> String {
    "en-US-ryan".to_string()
}

/// Upstream capabilities that may carry distinct credentials.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Chat,
    Translate,
    Speech,
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Capability::Chat => "chat",
            Capability::Translate => "translate",
            Capability::Speech => "speech",
        };
        f.write_str(name)
    }
}

impl Config {
    /// Load configuration from defaults, `GROQ_API_KEY`, an optional config
    /// file (`$CONFIG_PATH` or `conf.yaml`) and `PROXY_<SECTION>__<KEY>`
    /// environment variables, in increasing priority.
    pub fn load() -> Result<Self> {
        let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        let mut builder = ::config::Config::builder();
        if let Ok(shared_key) = std::env::var(SHARED_KEY_VAR) {
            builder = builder.set_default("upstream.api_key", shared_key)?;
        }
        let builder = builder
            .add_source(File::with_name(&path).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        Self::from_builder(builder)
    }

    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
        let config: Config = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        for capability in [Capability::Chat, Capability::Translate, Capability::Speech] {
            if self.api_key(capability).is_none() {
                anyhow::bail!(
                    "No API key configured for {}: set {} or {}_UPSTREAM__API_KEY",
                    capability,
                    SHARED_KEY_VAR,
                    ENV_PREFIX
                );
            }
        }
        if self.upstream.base_url.trim().is_empty() {
            anyhow::bail!("upstream.base_url must not be empty");
        }
        Ok(())
    }

    /// Credential for a capability, falling back to the shared upstream key.
    pub fn api_key(&self, capability: Capability) -> Option<&str> {
        let specific = match capability {
            Capability::Chat => &self.chat.api_key,
            Capability::Translate => &self.translate.api_key,
            Capability::Speech => &self.tts.api_key,
        };
        non_empty(specific).or_else(|| non_empty(&self.upstream.api_key))
    }
}

fn non_empty(key: &Option<String>) -> Option<&str> {
    key.as_deref().filter(|key| !key.is_empty())
}

impl SystemConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout_secs: default_request_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
        }
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            model: default_llm_model(),
            max_tokens: default_max_tokens(),
            itinerary_max_tokens: default_itinerary_max_tokens(),
            api_key: None,
        }
    }
}

impl Default for TranslateConfig {
    fn default() -> Self {
        Self {
            model: default_llm_model(),
            temperature: 0.0,
            default_language: default_language(),
            api_key: None,
        }
    }
}

impl Default for TtsConfig {
    fn default() -> Self {
        Self {
            model: default_tts_model(),
            default_voice: default_voice(),
            api_key: None,
        }
    }
}
