use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::{de::DeserializeOwned, Deserialize, Deserializer};
use serde_json::{json, Value};
use tracing::{debug, error};

use crate::chat::{self, ChatRequest, ChatResponse};
use crate::error::ApiError;
use crate::state::AppState;
use crate::translate::{self, TranslateRequest, TranslateResponse};
use crate::tts::{client::AUDIO_MPEG, TtsRequest};

/// JSON body parsed regardless of the request's `Content-Type`; any read or
/// parse failure becomes `ApiError::InvalidJson`.
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            debug!("Failed to read request body: {}", e);
            ApiError::InvalidJson
        })?;
        serde_json::from_slice(&bytes).map(JsonBody).map_err(|e| {
            debug!("Rejected request body: {}", e);
            ApiError::InvalidJson
        })
    }
}

/// Field deserializer that keeps string values and maps any other JSON value
/// (null, numbers, arrays, objects) to `None`.
pub fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}

pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn chat(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    let message = request
        .message
        .filter(|m| !m.is_empty())
        .ok_or(ApiError::MessageRequired)?;

    let outcome = chat::respond(state.chat_llm.as_ref(), &state.config.chat, &message).await;
    Ok(Json(outcome.into()))
}

pub async fn translate(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<TranslateRequest>,
) -> Json<TranslateResponse> {
    let outcome = translate::translate(
        state.translate_llm.as_ref(),
        &state.config.translate,
        &request,
    )
    .await;
    Json(outcome.into())
}

pub async fn tts(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<TtsRequest>,
) -> Result<Response, ApiError> {
    let voice = request
        .voice_id
        .as_deref()
        .unwrap_or(state.config.tts.default_voice.as_str());

    let text = request.text.as_deref().unwrap_or_default();

    match state.tts.synthesize(text, voice).await {
        Ok(audio) => Ok(([(header::CONTENT_TYPE, AUDIO_MPEG)], audio).into_response()),
        Err(e) => {
            error!("TTS synthesis failed: {}", e);
            Err(ApiError::TtsFailed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Field {
        #[serde(default, deserialize_with = "lenient_string")]
        value: Option<String>,
    }

    fn value_of(json: &str) -> Option<String> {
        serde_json::from_str::<Field>(json).unwrap().value
    }

    #[test]
    fn test_lenient_string_keeps_strings_only() {
        assert_eq!(value_of(r#"{"value": "hi"}"#), Some("hi".to_string()));
        assert_eq!(value_of(r#"{"value": ""}"#), Some(String::new()));
        assert_eq!(value_of(r#"{"value": null}"#), None);
        assert_eq!(value_of(r#"{"value": 5}"#), None);
        assert_eq!(value_of(r#"{"value": [1, 2]}"#), None);
        assert_eq!(value_of(r#"{"value": {"a": 1}}"#), None);
        assert_eq!(value_of(r#"{}"#), None);
    }
}
