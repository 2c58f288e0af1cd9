use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;
use tracing::debug;

use super::interface::{SpeechRequest, TTSInterface};
use crate::error::UpstreamError;

pub const AUDIO_MPEG: &str = "audio/mpeg";

/// TTS client for the provider's `{base_url}/audio/speech` endpoint
pub struct TTSClient {
    client: Client,
    model: String,
    base_url: String,
    api_key: String,
}

impl TTSClient {
    pub fn new(client: Client, model: String, base_url: String, api_key: String) -> Self {
        Self {
            client,
            model,
            base_url,
            api_key,
        }
    }

    fn speech_url(&self) -> String {
        format!("{}/audio/speech", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl TTSInterface for TTSClient {
    async fn synthesize(&self, text: &str, voice: &str) -> Result<Vec<u8>, UpstreamError> {
        let request = SpeechRequest {
            model: &self.model,
            voice,
            input: text,
        };

        let response = self
            .client
            .post(self.speech_url())
            .bearer_auth(&self.api_key)
            .header(ACCEPT, AUDIO_MPEG)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        debug!("TTS upstream status: {}", status);
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UpstreamError::Status { status, body });
        }

        let audio = response.bytes().await?.to_vec();
        debug!(
            "TTS synthesis returned {} bytes (voice={}, model={})",
            audio.len(),
            voice,
            self.model
        );
        Ok(audio)
    }
}
