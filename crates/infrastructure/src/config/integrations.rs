//! External integration configuration.

use application::ports::Units;
use integration_weather::WeatherConfig;
use serde::{Deserialize, Serialize};

/// Weather integration configuration
///
/// The API key has no default and must be provided through the
/// configuration file or environment. It never appears in logs.
#[derive(Clone, Serialize, Deserialize)]
pub struct WeatherAppConfig {
    /// OpenWeatherMap API key (required, no default)
    ///
    /// The `apikey` alias lets `BANGLAKANTHA_WEATHER_APIKEY` reach this
    /// field through the single-underscore environment separator.
    #[serde(alias = "apikey")]
    pub api_key: String,

    /// Base URL override, mainly for tests
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// City used when a request does not name one
    #[serde(default = "default_city")]
    pub default_city: String,

    /// Measurement system used when a request does not name one
    #[serde(default)]
    pub units: Units,
}

fn default_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

const fn default_timeout_secs() -> u64 {
    8
}

fn default_city() -> String {
    "Dhaka".to_string()
}

impl std::fmt::Debug for WeatherAppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherAppConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("default_city", &self.default_city)
            .field("units", &self.units)
            .finish()
    }
}

impl WeatherAppConfig {
    /// Convert to the integration crate's client configuration
    #[must_use]
    pub fn to_weather_config(&self) -> WeatherConfig {
        WeatherConfig {
            api_key: self.api_key.clone(),
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_requires_api_key() {
        let result: Result<WeatherAppConfig, _> = serde_json::from_str("{}");
        assert!(result.is_err());
    }

    #[test]
    fn deserialize_with_key_applies_defaults() {
        let config: WeatherAppConfig = serde_json::from_str(r#"{"api_key":"k"}"#).unwrap();
        assert_eq!(config.default_city, "Dhaka");
        assert_eq!(config.units, Units::Metric);
        assert_eq!(config.timeout_secs, 8);
        assert!(config.base_url.contains("openweathermap"));
    }

    #[test]
    fn debug_redacts_api_key() {
        let config: WeatherAppConfig =
            serde_json::from_str(r#"{"api_key":"super-secret"}"#).unwrap();
        let debug = format!("{config:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn to_weather_config_carries_fields() {
        let config: WeatherAppConfig = serde_json::from_str(
            r#"{"api_key":"k","base_url":"http://localhost:9","timeout_secs":3}"#,
        )
        .unwrap();
        let client_config = config.to_weather_config();
        assert_eq!(client_config.api_key, "k");
        assert_eq!(client_config.base_url, "http://localhost:9");
        assert_eq!(client_config.timeout_secs, 3);
    }

    #[test]
    fn apikey_alias_accepted() {
        let config: WeatherAppConfig = serde_json::from_str(r#"{"apikey":"from-env"}"#).unwrap();
        assert_eq!(config.api_key, "from-env");
    }

    #[test]
    fn units_deserialize_from_wire_value() {
        let config: WeatherAppConfig =
            serde_json::from_str(r#"{"api_key":"k","units":"imperial"}"#).unwrap();
        assert_eq!(config.units, Units::Imperial);
    }
}
