//! OpenWeatherMap weather client
//!
//! HTTP client for the OpenWeatherMap current weather and five-day
//! forecast endpoints.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{
    CurrentConditions, CurrentResponse, DailySummary, ForecastResponse, WeatherCondition,
    aggregate_daily,
};

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Connection to the weather service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the weather service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from weather service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The API key was rejected
    #[error("API key rejected by weather service")]
    Unauthorized,

    /// The requested city is not known to the service
    #[error("City not found: {0}")]
    CityNotFound(String),

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// Weather service configuration
///
/// The API key has no default and must be supplied by configuration.
#[derive(Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// OpenWeatherMap API key
    pub api_key: String,

    /// API base URL (default: <https://api.openweathermap.org/data/2.5>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Connection timeout in seconds (default: 8)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

const fn default_timeout() -> u64 {
    8
}

impl WeatherConfig {
    /// Create a configuration with the given API key and defaults otherwise
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is empty.
    pub fn validate(&self) -> Result<(), WeatherError> {
        if self.api_key.trim().is_empty() {
            return Err(WeatherError::Unauthorized);
        }
        Ok(())
    }
}

// The API key must never appear in logs.
impl std::fmt::Debug for WeatherConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Weather client trait for fetching weather data
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Get current weather for a city
    async fn get_current(
        &self,
        city: &str,
        units: &str,
    ) -> Result<CurrentConditions, WeatherError>;

    /// Get the daily forecast for a city, starting tomorrow
    async fn get_forecast(
        &self,
        city: &str,
        units: &str,
    ) -> Result<Vec<DailySummary>, WeatherError>;

    /// Check if the weather service is healthy
    async fn is_healthy(&self) -> bool;
}

/// OpenWeatherMap HTTP client implementation
#[derive(Debug)]
pub struct OpenWeatherMapClient {
    client: Client,
    config: WeatherConfig,
}

impl OpenWeatherMapClient {
    /// Create a new OpenWeatherMap client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP
    /// client cannot be initialized.
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        config.validate()?;
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Query parameters shared by both endpoints
    fn query_params<'a>(&'a self, city: &'a str, units: &'a str) -> [(&'static str, &'a str); 4] {
        [
            ("q", city),
            ("appid", self.config.api_key.as_str()),
            ("units", units),
            ("lang", "en"),
        ]
    }

    /// Map a non-success status to an error
    fn status_error(status: reqwest::StatusCode, city: &str) -> WeatherError {
        match status {
            reqwest::StatusCode::UNAUTHORIZED => WeatherError::Unauthorized,
            reqwest::StatusCode::NOT_FOUND => WeatherError::CityNotFound(city.to_string()),
            reqwest::StatusCode::TOO_MANY_REQUESTS => WeatherError::RateLimitExceeded,
            s if s.is_server_error() => WeatherError::ServiceUnavailable(format!("HTTP {s}")),
            s => WeatherError::RequestFailed(format!("HTTP {s}")),
        }
    }

    /// Convert the current weather response to the public model
    fn parse_current(response: CurrentResponse) -> Result<CurrentConditions, WeatherError> {
        let entry = response
            .weather
            .first()
            .ok_or_else(|| WeatherError::ParseError("Empty weather array".to_string()))?;
        let observed_at = DateTime::<Utc>::from_timestamp(response.dt, 0)
            .ok_or_else(|| WeatherError::ParseError(format!("Invalid timestamp: {}", response.dt)))?;

        Ok(CurrentConditions {
            city: response.name,
            temperature: response.main.temp,
            feels_like: response.main.feels_like,
            humidity: response.main.humidity,
            condition: WeatherCondition::from_owm_code(entry.id),
            description: entry.description.clone(),
            observed_at,
        })
    }
}

#[async_trait]
impl WeatherClient for OpenWeatherMapClient {
    #[instrument(skip(self), fields(city = %city, units = %units))]
    async fn get_current(
        &self,
        city: &str,
        units: &str,
    ) -> Result<CurrentConditions, WeatherError> {
        let url = format!("{}/weather", self.config.base_url);
        debug!(url = %url, "Fetching current weather");

        let response = self
            .client
            .get(&url)
            .query(&self.query_params(city, units))
            .send()
            .await
            .map_err(|e| WeatherError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::status_error(status, city));
        }

        let body: CurrentResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::ParseError(e.to_string()))?;

        Self::parse_current(body)
    }

    #[instrument(skip(self), fields(city = %city, units = %units))]
    async fn get_forecast(
        &self,
        city: &str,
        units: &str,
    ) -> Result<Vec<DailySummary>, WeatherError> {
        let url = format!("{}/forecast", self.config.base_url);
        debug!(url = %url, "Fetching forecast");

        let response = self
            .client
            .get(&url)
            .query(&self.query_params(city, units))
            .send()
            .await
            .map_err(|e| WeatherError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::status_error(status, city));
        }

        let body: ForecastResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::ParseError(e.to_string()))?;

        Ok(aggregate_daily(&body.list, Utc::now().date_naive()))
    }

    async fn is_healthy(&self) -> bool {
        self.get_current("Dhaka", "metric").await.is_ok()
    }
}
