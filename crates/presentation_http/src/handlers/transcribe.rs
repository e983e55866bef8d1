//! Speech-to-text handler

use axum::{
    Json,
    extract::{Query, State},
    http::{HeaderMap, header},
};
use bytes::Bytes;
use domain::AudioFormat;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// Query parameters for `/v1/transcribe`
#[derive(Debug, Deserialize)]
pub struct TranscribeParams {
    /// Optional ISO 639-1 language hint
    #[serde(default)]
    pub lang: Option<String>,
}

/// Transcription response body
#[derive(Debug, Serialize)]
pub struct TranscribeResponse {
    /// Recognized text
    pub text: String,
    /// Detected (or hinted) language, if known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Transcribe an uploaded audio body
///
/// The audio format comes from the request `Content-Type`; unsupported
/// or missing types are rejected before the backend is called.
#[instrument(skip(state, headers, body), fields(body_len = body.len()))]
pub async fn transcribe(
    State(state): State<AppState>,
    Query(params): Query<TranscribeParams>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<TranscribeResponse>, ApiError> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| ApiError::BadRequest("missing content-type".to_string()))?;

    let format = AudioFormat::from_mime_type(content_type)
        .ok_or_else(|| ApiError::BadRequest(format!("unsupported audio type: {content_type}")))?;

    let result = state
        .voice
        .transcribe(body.to_vec(), format, params.lang)
        .await?;

    Ok(Json(TranscribeResponse {
        text: result.text,
        language: result.detected_language,
    }))
}
