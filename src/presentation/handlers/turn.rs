use std::collections::HashMap;

use axum::extract::{Multipart, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::application::ports::{ResponseGenerator, SpeechSynthesizer, TranscriptionEngine};
use crate::application::services::{TurnError, TurnRequest};
use crate::domain::{RespectScore, TimeContext};
use crate::presentation::state::AppState;

pub const API_KEY_HEADER: &str = "x-api-key";

#[derive(Serialize)]
pub struct TurnResponseBody {
    pub transcription: String,
    #[serde(rename = "aiResponse")]
    pub ai_response: String,
    #[serde(rename = "audioBase64")]
    pub audio_base64: String,
    #[serde(rename = "respectChange")]
    pub respect_change: i32,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<&'static str>,
}

impl ErrorResponse {
    fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            stage: None,
        }
    }
}

struct TurnForm {
    audio: Option<(Vec<u8>, String)>,
    system_prompt: Option<String>,
    respect_score: RespectScore,
    time_context: TimeContext,
    user_context: HashMap<String, String>,
}

enum FormError {
    Malformed(String),
    TooLarge,
}

#[tracing::instrument(skip(state, headers, multipart))]
pub async fn turn_handler<T, G, S>(
    State(state): State<AppState<T, G, S>>,
    headers: HeaderMap,
    multipart: Multipart,
) -> impl IntoResponse
where
    T: TranscriptionEngine + 'static + ?Sized,
    G: ResponseGenerator + 'static + ?Sized,
    S: SpeechSynthesizer + 'static + ?Sized,
{
    let api_key = headers
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(String::from);

    let max_bytes = state.settings.storage.max_upload_size_bytes;
    let form = match read_turn_form(multipart, max_bytes).await {
        Ok(form) => form,
        Err(FormError::TooLarge) => {
            tracing::warn!("Turn request rejected: audio exceeds upload limit");
            return (
                StatusCode::PAYLOAD_TOO_LARGE,
                Json(ErrorResponse::new("Audio exceeds upload size limit")),
            )
                .into_response();
        }
        Err(FormError::Malformed(message)) => {
            tracing::warn!(error = %message, "Turn request rejected: malformed");
            return (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(message))).into_response();
        }
    };

    let Some((audio, audio_filename)) = form.audio else {
        tracing::warn!("Turn request with no audio file");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("No audio file uploaded")),
        )
            .into_response();
    };

    let request = TurnRequest {
        api_key,
        audio,
        audio_filename,
        system_prompt: form.system_prompt,
        respect_score: form.respect_score,
        time_context: form.time_context,
        user_context: form.user_context,
    };

    match state.turn_service.handle_turn(request).await {
        Ok(outcome) => (
            StatusCode::OK,
            Json(TurnResponseBody {
                transcription: outcome.transcript.into_string(),
                ai_response: outcome.response_text,
                audio_base64: outcome.audio.to_data_uri(),
                respect_change: outcome.respect_delta,
            }),
        )
            .into_response(),
        Err(e) => turn_error_response(e),
    }
}

fn turn_error_response(error: TurnError) -> axum::response::Response {
    let stage = error.stage().map(|s| s.as_str());
    let (status, message) = match &error {
        TurnError::Unauthorized => (StatusCode::FORBIDDEN, "Invalid API key".to_string()),
        TurnError::TranscriptionUnavailable(_)
        | TurnError::GenerationUnavailable(_)
        | TurnError::SynthesisUnavailable(_) => (StatusCode::BAD_GATEWAY, error.to_string()),
        TurnError::ProcessingFailed { .. } => {
            (StatusCode::INTERNAL_SERVER_ERROR, error.to_string())
        }
    };

    (
        status,
        Json(ErrorResponse {
            error: message,
            stage,
        }),
    )
        .into_response()
}

async fn read_turn_form(
    mut multipart: Multipart,
    max_audio_bytes: usize,
) -> Result<TurnForm, FormError> {
    let mut form = TurnForm {
        audio: None,
        system_prompt: None,
        respect_score: RespectScore::default(),
        time_context: TimeContext::Standard,
        user_context: HashMap::new(),
    };

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| FormError::Malformed(format!("Failed to read multipart: {}", e)))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" | "audio" => {
                let filename = field.file_name().unwrap_or("audio.wav").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| FormError::Malformed(format!("Failed to read audio: {}", e)))?;
                if data.len() > max_audio_bytes {
                    return Err(FormError::TooLarge);
                }
                form.audio = Some((data.to_vec(), filename));
            }
            "systemPrompt" => {
                let text = read_text_field(field, "systemPrompt").await?;
                if !text.trim().is_empty() {
                    form.system_prompt = Some(text);
                }
            }
            "respectScore" => {
                let text = read_text_field(field, "respectScore").await?;
                let value: i64 = text.trim().parse().map_err(|_| {
                    FormError::Malformed(format!("Invalid respectScore: {}", text))
                })?;
                form.respect_score = RespectScore::new(value);
            }
            "timeContext" => {
                let text = read_text_field(field, "timeContext").await?;
                form.time_context = text.trim().parse().map_err(FormError::Malformed)?;
            }
            "userContext" => {
                let text = read_text_field(field, "userContext").await?;
                form.user_context = serde_json::from_str(&text).map_err(|e| {
                    FormError::Malformed(format!("Invalid userContext: {}", e))
                })?;
            }
            other => {
                tracing::debug!(field = %other, "Ignoring unknown multipart field");
            }
        }
    }

    Ok(form)
}

async fn read_text_field(
    field: axum::extract::multipart::Field<'_>,
    name: &str,
) -> Result<String, FormError> {
    field
        .text()
        .await
        .map_err(|e| FormError::Malformed(format!("Failed to read {}: {}", name, e)))
}
