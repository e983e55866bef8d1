//! Generic text-to-speech handler

use axum::{
    extract::{Query, State},
    response::Response,
};
use serde::Deserialize;
use tracing::instrument;

use crate::{error::ApiError, handlers::common::audio_response, state::AppState};

/// Query parameters for `/v1/tts`
#[derive(Debug, Deserialize)]
pub struct TtsParams {
    /// Text to synthesize
    pub text: String,
    /// ISO 639-1 language code, defaults to the configured language
    #[serde(default)]
    pub lang: Option<String>,
}

/// Synthesize arbitrary text and return the audio bytes
#[instrument(skip(state, params), fields(text_len = params.text.len()))]
pub async fn tts(
    State(state): State<AppState>,
    Query(params): Query<TtsParams>,
) -> Result<Response, ApiError> {
    let language = params
        .lang
        .unwrap_or_else(|| state.default_language.clone());

    let audio = state.voice.speak(&params.text, &language).await?;
    Ok(audio_response(audio))
}
