//! Weather adapter - Implements WeatherPort using integration_weather

use std::sync::Arc;

use application::{
    error::ApplicationError,
    ports::{CurrentWeather, DailyForecast, Units, WeatherCondition, WeatherPort},
};
use async_trait::async_trait;
use integration_weather::{
    CurrentConditions, DailySummary, WeatherClient, WeatherCondition as WireCondition,
    WeatherError,
};
use tracing::{debug, instrument};

/// Adapter for OpenWeatherMap via the weather integration crate
#[derive(Clone)]
pub struct WeatherAdapter {
    client: Arc<dyn WeatherClient>,
}

impl std::fmt::Debug for WeatherAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherAdapter").finish_non_exhaustive()
    }
}

impl WeatherAdapter {
    /// Create a new adapter over any weather client
    pub fn new(client: Arc<dyn WeatherClient>) -> Self {
        Self { client }
    }

    /// Map WeatherError to ApplicationError
    fn map_error(e: WeatherError) -> ApplicationError {
        match e {
            WeatherError::RateLimitExceeded => ApplicationError::RateLimited,
            WeatherError::Unauthorized => {
                ApplicationError::Configuration("weather API key rejected".to_string())
            },
            other => ApplicationError::ExternalService(other.to_string()),
        }
    }

    /// Map the wire-level condition to the port condition
    const fn map_condition(condition: WireCondition) -> WeatherCondition {
        match condition {
            WireCondition::ClearSky => WeatherCondition::ClearSky,
            WireCondition::FewClouds => WeatherCondition::FewClouds,
            WireCondition::ScatteredClouds => WeatherCondition::ScatteredClouds,
            WireCondition::BrokenClouds => WeatherCondition::BrokenClouds,
            WireCondition::OvercastClouds => WeatherCondition::OvercastClouds,
            WireCondition::Drizzle => WeatherCondition::Drizzle,
            WireCondition::LightRain => WeatherCondition::LightRain,
            WireCondition::ModerateRain => WeatherCondition::ModerateRain,
            WireCondition::HeavyRain => WeatherCondition::HeavyRain,
            WireCondition::Snow => WeatherCondition::Snow,
            WireCondition::Fog => WeatherCondition::Fog,
            WireCondition::Thunderstorm => WeatherCondition::Thunderstorm,
            WireCondition::Unknown => WeatherCondition::Unknown,
        }
    }

    fn convert_current(conditions: CurrentConditions) -> CurrentWeather {
        CurrentWeather {
            city: conditions.city,
            temperature: conditions.temperature,
            feels_like: conditions.feels_like,
            humidity: conditions.humidity,
            condition: Self::map_condition(conditions.condition),
            description: conditions.description,
            observed_at: conditions.observed_at,
        }
    }

    fn convert_daily(summary: DailySummary) -> DailyForecast {
        DailyForecast {
            date: summary.date,
            temperature_max: summary.temperature_max,
            temperature_min: summary.temperature_min,
            condition: Self::map_condition(summary.condition),
            description: summary.description,
        }
    }
}

#[async_trait]
impl WeatherPort for WeatherAdapter {
    #[instrument(skip(self))]
    async fn fetch_current(
        &self,
        city: &str,
        units: Units,
    ) -> Result<CurrentWeather, ApplicationError> {
        debug!(city, units = units.as_str(), "Fetching current weather");

        let conditions = self
            .client
            .get_current(city, units.as_str())
            .await
            .map_err(Self::map_error)?;

        Ok(Self::convert_current(conditions))
    }

    #[instrument(skip(self))]
    async fn fetch_forecast(
        &self,
        city: &str,
        units: Units,
    ) -> Result<Vec<DailyForecast>, ApplicationError> {
        debug!(city, units = units.as_str(), "Fetching forecast");

        let days = self
            .client
            .get_forecast(city, units.as_str())
            .await
            .map_err(Self::map_error)?;

        Ok(days.into_iter().map(Self::convert_daily).collect())
    }

    async fn is_available(&self) -> bool {
        self.client.is_healthy().await
    }
}
