pub mod client;
pub mod interface;

use serde::Deserialize;

use crate::handlers::lenient_string;

pub use client::TTSClient;
pub use interface::TTSInterface;

/// Inbound `/api/tts` body; a missing or non-string `voiceId` selects the
/// default voice and a non-string `text` counts as empty.
#[derive(Debug, Deserialize)]
pub struct TtsRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub text: Option<String>,
    #[serde(default, rename = "voiceId", deserialize_with = "lenient_string")]
    pub voice_id: Option<String>,
}
