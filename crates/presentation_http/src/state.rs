//! Application state shared across handlers

use std::sync::Arc;

use application::{AnnouncementService, VoiceService, WeatherReportService, ports::Units};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Synthesis and transcription orchestration
    pub voice: Arc<VoiceService>,
    /// Bengali calendar announcement composer
    pub announcement: Arc<AnnouncementService>,
    /// Weather report composer, absent when no API key is configured
    pub weather_report: Option<Arc<WeatherReportService>>,
    /// Language spoken when a request does not name one
    pub default_language: String,
    /// City used by weather endpoints when a request does not name one
    pub default_city: String,
    /// Measurement system used when a request does not name one
    pub default_units: Units,
    /// Upper bound on transcription upload size in bytes
    pub max_audio_body_bytes: usize,
}
