//! Weather report service
//!
//! Turns structured weather data into spoken Bengali sentences, one for
//! the current conditions and one for tomorrow's outlook.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ApplicationError;
use crate::ports::{Units, WeatherCondition, WeatherPort};
use domain::to_bengali_digits;

/// A composed weather report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReport {
    /// The spoken Bengali sentence
    pub sentence: String,
    /// Cache key for the rendered audio, keyed by city and units
    pub cache_key: String,
}

/// Service that produces spoken weather reports
#[derive(Clone)]
pub struct WeatherReportService {
    weather: Arc<dyn WeatherPort>,
}

impl WeatherReportService {
    /// Create a new weather report service
    #[must_use]
    pub fn new(weather: Arc<dyn WeatherPort>) -> Self {
        Self { weather }
    }

    /// Cache key for the current-conditions report audio
    ///
    /// Callers check this key before composing a report, so a warm cache
    /// never costs an upstream API call.
    #[must_use]
    pub fn current_report_key(city: &str, units: Units) -> String {
        format!("weather::{city}::{}", units.as_str())
    }

    /// Cache key for tomorrow's outlook audio
    #[must_use]
    pub fn outlook_key(city: &str, units: Units) -> String {
        format!("forecast::{city}::{}", units.as_str())
    }

    /// Compose the current-conditions report for a city
    pub async fn current_report(
        &self,
        city: &str,
        units: Units,
    ) -> Result<WeatherReport, ApplicationError> {
        let current = self.weather.fetch_current(city, units).await?;
        debug!(
            city = %city,
            temperature = current.temperature,
            condition = %current.condition,
            "Composing current weather report"
        );

        let temperature = bengali_degrees(current.temperature);
        let condition = condition_text(current.condition, &current.description);
        let sentence = format!(
            "{city} এ বর্তমানে তাপমাত্রা {temperature} ডিগ্রি {scale}। অবস্থা: {condition}।",
            scale = units.scale_name(),
        );

        Ok(WeatherReport {
            sentence,
            cache_key: Self::current_report_key(city, units),
        })
    }

    /// Compose tomorrow's outlook for a city
    pub async fn tomorrow_outlook(
        &self,
        city: &str,
        units: Units,
    ) -> Result<WeatherReport, ApplicationError> {
        let forecast = self.weather.fetch_forecast(city, units).await?;
        let tomorrow = forecast.first().ok_or_else(|| {
            ApplicationError::ExternalService("forecast returned no days".to_string())
        })?;
        debug!(
            city = %city,
            date = %tomorrow.date,
            condition = %tomorrow.condition,
            "Composing forecast report"
        );

        let high = bengali_degrees(tomorrow.temperature_max);
        let condition = condition_text(tomorrow.condition, &tomorrow.description);
        let sentence = format!(
            "আগামীকাল {city} এ {condition} থাকতে পারে। সর্বোচ্চ তাপমাত্রা {high} ডিগ্রি {scale}।",
            scale = units.scale_name(),
        );

        Ok(WeatherReport {
            sentence,
            cache_key: Self::outlook_key(city, units),
        })
    }

    /// Check whether the upstream weather service responds
    pub async fn is_available(&self) -> bool {
        self.weather.is_available().await
    }
}

impl std::fmt::Debug for WeatherReportService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherReportService").finish_non_exhaustive()
    }
}

/// Round a temperature and render it in Bengali digits
#[allow(clippy::cast_possible_truncation)]
fn bengali_degrees(temperature: f64) -> String {
    to_bengali_digits(&(temperature.round() as i64).to_string())
}

/// Bengali condition name, falling back to the upstream English description
fn condition_text(condition: WeatherCondition, description: &str) -> String {
    condition
        .bengali_name()
        .map_or_else(|| description.to_string(), ToString::to_string)
}
