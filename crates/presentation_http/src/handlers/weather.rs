//! Spoken weather report handlers

use std::sync::Arc;

use application::WeatherReportService;
use axum::{
    extract::{Query, State},
    response::Response,
};
use serde::Deserialize;
use tracing::instrument;

use crate::{
    error::ApiError,
    handlers::common::{audio_response, parse_units},
    state::AppState,
};

/// Query parameters for the weather endpoints
#[derive(Debug, Deserialize)]
pub struct WeatherParams {
    /// City name, defaults to the configured city
    #[serde(default)]
    pub city: Option<String>,
    /// "metric", "imperial" or "standard", defaults to the configured system
    #[serde(default)]
    pub units: Option<String>,
}

fn weather_service(state: &AppState) -> Result<Arc<WeatherReportService>, ApiError> {
    state.weather_report.clone().ok_or_else(|| {
        ApiError::ServiceUnavailable("weather service is not configured".to_string())
    })
}

/// Speak the current weather for a city
#[instrument(skip(state))]
pub async fn current_weather(
    State(state): State<AppState>,
    Query(params): Query<WeatherParams>,
) -> Result<Response, ApiError> {
    let service = weather_service(&state)?;
    let city = params.city.unwrap_or_else(|| state.default_city.clone());
    let units = parse_units(params.units.as_deref(), state.default_units)?;

    // A warm cache answers without touching the upstream API.
    let cache_key = WeatherReportService::current_report_key(&city, units);
    if let Some(audio) = state.voice.cached_audio(&cache_key).await? {
        return Ok(audio_response(audio));
    }

    let report = service.current_report(&city, units).await?;
    let audio = state
        .voice
        .speak_keyed(&report.cache_key, &report.sentence, &state.default_language)
        .await?;

    Ok(audio_response(audio))
}

/// Speak tomorrow's outlook for a city
#[instrument(skip(state))]
pub async fn forecast(
    State(state): State<AppState>,
    Query(params): Query<WeatherParams>,
) -> Result<Response, ApiError> {
    let service = weather_service(&state)?;
    let city = params.city.unwrap_or_else(|| state.default_city.clone());
    let units = parse_units(params.units.as_deref(), state.default_units)?;

    let cache_key = WeatherReportService::outlook_key(&city, units);
    if let Some(audio) = state.voice.cached_audio(&cache_key).await? {
        return Ok(audio_response(audio));
    }

    let report = service.tomorrow_outlook(&city, units).await?;
    let audio = state
        .voice
        .speak_keyed(&report.cache_key, &report.sentence, &state.default_language)
        .await?;

    Ok(audio_response(audio))
}
