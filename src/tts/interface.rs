use async_trait::async_trait;
use serde::Serialize;

use crate::error::UpstreamError;

/// Body of an OpenAI-style speech synthesis request
#[derive(Debug, Clone, Serialize)]
pub struct SpeechRequest<'a> {
    pub model: &'a str,
    pub voice: &'a str,
    pub input: &'a str,
}

/// TTS interface trait
#[async_trait]
pub trait TTSInterface: Send + Sync {
    /// Synthesize `text` with `voice` and return the encoded MPEG audio
    ///
    /// # Arguments
    /// * `text` - The text to synthesize
    /// * `voice` - Provider voice identifier
    ///
    /// # Returns
    /// The audio bytes exactly as produced by the provider
    async fn synthesize(&self, text: &str, voice: &str) -> Result<Vec<u8>, UpstreamError>;
}
