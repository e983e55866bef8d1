//! Route definitions

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health and status endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        // Speech API (v1)
        .route("/v1/tts", get(handlers::speak::tts))
        .route(
            "/v1/transcribe",
            post(handlers::transcribe::transcribe)
                .layer(DefaultBodyLimit::max(state.max_audio_body_bytes)),
        )
        // Weather API (v1)
        .route("/v1/weather", get(handlers::weather::current_weather))
        .route("/v1/weather/forecast", get(handlers::weather::forecast))
        // Calendar API (v1)
        .route("/v1/datetime", get(handlers::datetime::datetime))
        // Attach state
        .with_state(state)
}
