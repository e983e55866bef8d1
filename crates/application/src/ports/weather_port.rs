//! Weather service port
//!
//! Defines the interface for weather data retrieval.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// Measurement system for temperatures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    /// Celsius
    #[default]
    Metric,
    /// Fahrenheit
    Imperial,
    /// Kelvin, the upstream API's default when no units are requested
    Standard,
}

impl Units {
    /// Wire value used by the upstream weather API
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Metric => "metric",
            Self::Imperial => "imperial",
            Self::Standard => "standard",
        }
    }

    /// Bengali name of the temperature scale
    #[must_use]
    pub const fn scale_name(self) -> &'static str {
        match self {
            Self::Metric => "সেলসিয়াস",
            Self::Imperial => "ফারেনহাইট",
            Self::Standard => "কেলভিন",
        }
    }

    /// Parse a unit system from its wire value
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "metric" => Some(Self::Metric),
            "imperial" => Some(Self::Imperial),
            "standard" => Some(Self::Standard),
            _ => None,
        }
    }
}

/// Current weather conditions for a city
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentWeather {
    /// City the observation is for
    pub city: String,
    /// Temperature in the requested units
    pub temperature: f64,
    /// Feels-like temperature in the requested units
    pub feels_like: Option<f64>,
    /// Relative humidity in percent (0-100)
    pub humidity: Option<u8>,
    /// Classified weather condition
    pub condition: WeatherCondition,
    /// Upstream condition description, in English
    pub description: String,
    /// When this data was observed
    pub observed_at: DateTime<Utc>,
}

/// Weather forecast for a specific day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyForecast {
    /// The date of the forecast
    pub date: NaiveDate,
    /// Maximum temperature in the requested units
    pub temperature_max: f64,
    /// Minimum temperature in the requested units
    pub temperature_min: f64,
    /// Classified weather condition
    pub condition: WeatherCondition,
    /// Upstream condition description, in English
    pub description: String,
}

/// Weather conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCondition {
    /// Clear sky
    ClearSky,
    /// A few clouds
    FewClouds,
    /// Scattered clouds
    ScatteredClouds,
    /// Broken clouds
    BrokenClouds,
    /// Overcast
    OvercastClouds,
    /// Drizzle
    Drizzle,
    /// Light rain
    LightRain,
    /// Moderate rain
    ModerateRain,
    /// Heavy rain
    HeavyRain,
    /// Snow
    Snow,
    /// Fog or mist
    Fog,
    /// Thunderstorm
    Thunderstorm,
    /// Unknown condition
    Unknown,
}

impl WeatherCondition {
    /// Get a human-readable English description
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::ClearSky => "Clear sky",
            Self::FewClouds => "Few clouds",
            Self::ScatteredClouds => "Scattered clouds",
            Self::BrokenClouds => "Broken clouds",
            Self::OvercastClouds => "Overcast",
            Self::Drizzle => "Drizzle",
            Self::LightRain => "Light rain",
            Self::ModerateRain => "Moderate rain",
            Self::HeavyRain => "Heavy rain",
            Self::Snow => "Snow",
            Self::Fog => "Foggy",
            Self::Thunderstorm => "Thunderstorm",
            Self::Unknown => "Unknown",
        }
    }

    /// Get the Bengali name of the condition
    ///
    /// Returns `None` for [`Self::Unknown`]; callers fall back to the
    /// upstream description in that case.
    #[must_use]
    pub const fn bengali_name(self) -> Option<&'static str> {
        match self {
            Self::ClearSky => Some("পরিষ্কার আকাশ"),
            Self::FewClouds => Some("কিছু মেঘ"),
            Self::ScatteredClouds => Some("বিস্তৃত মেঘ"),
            Self::BrokenClouds => Some("আবহাওয়া মেঘলা"),
            Self::OvercastClouds => Some("সম্পূর্ণ মেঘলা"),
            Self::Drizzle => Some("গুঁড়ি গুঁড়ি বৃষ্টি"),
            Self::LightRain => Some("অল্প বৃষ্টি"),
            Self::ModerateRain => Some("মাঝারি বৃষ্টি"),
            Self::HeavyRain => Some("তীব্র বৃষ্টি"),
            Self::Snow => Some("তুষারপাত"),
            Self::Fog => Some("কুয়াশা"),
            Self::Thunderstorm => Some("বজ্রসহ ঝড়"),
            Self::Unknown => None,
        }
    }
}

impl std::fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Port for weather service operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Fetch the current weather for a city
    async fn fetch_current(
        &self,
        city: &str,
        units: Units,
    ) -> Result<CurrentWeather, ApplicationError>;

    /// Fetch the forecast for the upcoming days
    ///
    /// The first entry covers tomorrow.
    async fn fetch_forecast(
        &self,
        city: &str,
        units: Units,
    ) -> Result<Vec<DailyForecast>, ApplicationError>;

    /// Check if the weather service is available
    async fn is_available(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn WeatherPort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn WeatherPort>();
    }

    #[test]
    fn units_wire_values() {
        assert_eq!(Units::Metric.as_str(), "metric");
        assert_eq!(Units::Imperial.as_str(), "imperial");
        assert_eq!(Units::Standard.as_str(), "standard");
        assert_eq!(Units::parse("metric"), Some(Units::Metric));
        assert_eq!(Units::parse("standard"), Some(Units::Standard));
        assert_eq!(Units::parse("kelvin"), None);
    }

    #[test]
    fn standard_units_speak_kelvin() {
        assert_eq!(Units::Standard.scale_name(), "কেলভিন");
    }

    #[test]
    fn units_default_is_metric() {
        assert_eq!(Units::default(), Units::Metric);
    }

    #[test]
    fn condition_display_uses_description() {
        assert_eq!(WeatherCondition::ClearSky.to_string(), "Clear sky");
        assert_eq!(WeatherCondition::Thunderstorm.description(), "Thunderstorm");
    }

    #[test]
    fn known_conditions_have_bengali_names() {
        assert_eq!(
            WeatherCondition::ClearSky.bengali_name(),
            Some("পরিষ্কার আকাশ")
        );
        assert_eq!(
            WeatherCondition::BrokenClouds.bengali_name(),
            Some("আবহাওয়া মেঘলা")
        );
        assert_eq!(WeatherCondition::Unknown.bengali_name(), None);
    }
}
