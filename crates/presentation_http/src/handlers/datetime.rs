//! Bengali calendar announcement handler

use axum::{extract::State, response::Response};
use tracing::instrument;

use crate::{error::ApiError, handlers::common::audio_response, state::AppState};

/// Speak the current Bengali date and time
///
/// The cache key is truncated to the minute, so every request within the
/// same minute replays the same synthesized audio.
#[instrument(skip(state))]
pub async fn datetime(State(state): State<AppState>) -> Result<Response, ApiError> {
    let announcement = state.announcement.announce_now();

    let audio = state
        .voice
        .speak_keyed(
            &announcement.cache_key,
            &announcement.sentence,
            &state.default_language,
        )
        .await?;

    Ok(audio_response(audio))
}
