//! Shared helper functions for HTTP handlers

use application::{SpokenAudio, ports::Units};
use axum::{
    http::{HeaderValue, header},
    response::{IntoResponse, Response},
};

use crate::error::ApiError;

/// Build an audio response from synthesized speech
///
/// The `x-cache` header tells clients whether the bytes came from the
/// audio cache or a fresh synthesis call.
pub fn audio_response(audio: SpokenAudio) -> Response {
    let cache_state = if audio.cached { "hit" } else { "miss" };
    (
        [
            (
                header::CONTENT_TYPE,
                HeaderValue::from_static(audio.format.mime_type()),
            ),
            (
                header::HeaderName::from_static("x-cache"),
                HeaderValue::from_static(cache_state),
            ),
        ],
        audio.bytes,
    )
        .into_response()
}

/// Parse an optional `units` query value, falling back to a default
pub fn parse_units(value: Option<&str>, default: Units) -> Result<Units, ApiError> {
    match value {
        None => Ok(default),
        Some(raw) => Units::parse(raw)
            .ok_or_else(|| ApiError::BadRequest(format!("unknown units: {raw}"))),
    }
}
