//! Application configuration
//!
//! Loaded from an optional `config.toml` plus `BANGLAKANTHA_`-prefixed
//! environment variables. Environment variables override the file, so the
//! weather API key can be injected at startup without touching disk.

mod cache;
mod integrations;
mod server;

use ai_speech::SpeechConfig;
use domain::DomainError;
use serde::{Deserialize, Serialize};

pub use cache::CacheConfig;
pub use integrations::WeatherAppConfig;
pub use server::ServerConfig;

/// Top-level application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Audio cache settings
    #[serde(default)]
    pub cache: CacheConfig,

    /// IANA timezone the announcements speak in
    #[serde(default = "default_timezone")]
    pub timezone: String,

    /// Speech synthesis and transcription settings
    #[serde(default)]
    pub speech: SpeechConfig,

    /// Weather integration, absent when no API key is configured
    #[serde(default)]
    pub weather: Option<WeatherAppConfig>,
}

fn default_timezone() -> String {
    "Asia/Dhaka".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            cache: CacheConfig::default(),
            timezone: default_timezone(),
            speech: SpeechConfig::default(),
            weather: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from file and environment
    ///
    /// Reads `config.toml` (or `config.json`/`config.yaml`) from the working
    /// directory if present, then applies environment variables such as
    /// `BANGLAKANTHA_SERVER_PORT` or `BANGLAKANTHA_WEATHER_APIKEY` on top.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .set_default("timezone", default_timezone())?
            .add_source(config::File::with_name("config").required(false))
            .add_source(
                config::Environment::with_prefix("BANGLAKANTHA")
                    .separator("_")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Resolve the configured timezone name to a timezone
    pub fn timezone(&self) -> Result<chrono_tz::Tz, DomainError> {
        self.timezone
            .parse()
            .map_err(|_| DomainError::InvalidTimezone(self.timezone.clone()))
    }
}
