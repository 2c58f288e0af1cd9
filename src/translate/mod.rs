pub mod languages;

use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::config::TranslateConfig;
use crate::error::UpstreamError;
use crate::handlers::lenient_string;
use crate::llm::{CompletionOptions, Message, StatelessLLMInterface};

pub const FALLBACK_TRANSLATION: &str = "Translation error.";

/// Inbound `/api/translate` body; non-string fields count as absent.
#[derive(Debug, Deserialize)]
pub struct TranslateRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub text: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub target: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranslateResponse {
    pub translated: String,
}

/// Result of a translation: the translated text, or the fallback standing in
/// for an upstream or payload failure.
#[derive(Debug, Clone, PartialEq)]
pub enum TranslateOutcome {
    Translated(String),
    Fallback,
}

impl From<TranslateOutcome> for TranslateResponse {
    fn from(outcome: TranslateOutcome) -> Self {
        let translated = match outcome {
            TranslateOutcome::Translated(text) => text,
            TranslateOutcome::Fallback => FALLBACK_TRANSLATION.to_string(),
        };
        Self { translated }
    }
}

/// Shape the model is instructed to answer with.
#[derive(Debug, Deserialize)]
struct TranslationPayload {
    translated: String,
}

pub fn system_prompt(language: &str) -> String {
    format!(
        "You are a translation engine. Translate the user's sentence into {}. \
         ALWAYS respond in valid JSON ONLY in this format:\n\
         {{\"translated\": \"TRANSLATED_TEXT\"}}\n\
         No explanations. No extra text. No commentary.",
        language
    )
}

/// Extract `translated` from the model's JSON answer.
pub fn parse_translation(content: &str) -> Result<String, UpstreamError> {
    let payload: TranslationPayload = serde_json::from_str(content.trim())?;
    Ok(payload.translated)
}

pub async fn translate(
    llm: &dyn StatelessLLMInterface,
    config: &TranslateConfig,
    request: &TranslateRequest,
) -> TranslateOutcome {
    let language = languages::resolve(request.target.as_deref(), &config.default_language);
    let messages = vec![
        Message::system(system_prompt(language)),
        Message::user(request.text.as_deref().unwrap_or_default()),
    ];
    let options = CompletionOptions {
        max_tokens: None,
        temperature: Some(config.temperature),
    };

    let content = match llm.chat_completion(messages, options).await {
        Ok(content) => content,
        Err(e) => {
            error!("Translation request failed: {}", e);
            return TranslateOutcome::Fallback;
        }
    };

    match parse_translation(&content) {
        Ok(translated) => TranslateOutcome::Translated(translated),
        Err(e) => {
            error!("Translation payload rejected: {}", e);
            debug!("Raw translation content: {}", content);
            TranslateOutcome::Fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ScriptedLLM;

    fn request(text: &str, target: Option<&str>) -> TranslateRequest {
        TranslateRequest {
            text: Some(text.to_string()),
            target: target.map(str::to_string),
        }
    }

    #[test]
    fn test_system_prompt_names_language_and_format() {
        let prompt = system_prompt("Tamil");
        assert!(prompt.contains("into Tamil."));
        assert!(prompt.contains(r#"{"translated": "TRANSLATED_TEXT"}"#));
    }

    #[test]
    fn test_parse_translation() {
        assert_eq!(parse_translation(r#"{"translated": "नमस्ते"}"#).unwrap(), "नमस्ते");
        assert_eq!(parse_translation(" {\"translated\": \"x\"}\n").unwrap(), "x");
        assert!(parse_translation("Here is your translation: नमस्ते").is_err());
        assert!(parse_translation(r#"{"translation": "x"}"#).is_err());
        assert!(parse_translation(r#"{"translated": 42}"#).is_err());
    }

    #[tokio::test]
    async fn test_translate_uses_zero_temperature_and_target() {
        let llm = ScriptedLLM::replying(r#"{"translated": "வணக்கம்"}"#);
        let outcome = translate(&llm, &TranslateConfig::default(), &request("Hello", Some("ta"))).await;

        assert_eq!(outcome, TranslateOutcome::Translated("வணக்கம்".to_string()));
        let calls = llm.calls();
        let (messages, options) = &calls[0];
        assert!(messages[0].content.contains("into Tamil."));
        assert_eq!(messages[1], Message::user("Hello"));
        assert_eq!(options.temperature, Some(0.0));
    }

    #[tokio::test]
    async fn test_translate_defaults_to_hindi() {
        let llm = ScriptedLLM::replying(r#"{"translated": "नमस्ते"}"#);
        let config = TranslateConfig::default();

        translate(&llm, &config, &request("Hello", None)).await;
        translate(&llm, &config, &request("Hello", Some("xx"))).await;

        for (messages, _) in llm.calls() {
            assert!(messages[0].content.contains("into Hindi."));
        }
    }

    #[tokio::test]
    async fn test_translate_falls_back_on_non_json_content() {
        let llm = ScriptedLLM::replying("Sure! Hello in Hindi is नमस्ते");
        let outcome = translate(&llm, &TranslateConfig::default(), &request("Hello", Some("hi"))).await;
        assert_eq!(outcome, TranslateOutcome::Fallback);
    }

    #[tokio::test]
    async fn test_translate_falls_back_on_upstream_failure() {
        let llm = ScriptedLLM::failing();
        let outcome = translate(&llm, &TranslateConfig::default(), &request("Hello", Some("hi"))).await;
        assert_eq!(
            TranslateResponse::from(outcome).translated,
            FALLBACK_TRANSLATION
        );
    }
}
