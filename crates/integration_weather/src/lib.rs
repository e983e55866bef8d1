//! OpenWeatherMap weather integration
//!
//! Client for the OpenWeatherMap API (<https://openweathermap.org/api>).
//! Provides current weather conditions and a short daily forecast for a
//! city. Requires an API key.

pub mod client;
mod models;

pub use client::{OpenWeatherMapClient, WeatherClient, WeatherConfig, WeatherError};
pub use models::{CurrentConditions, DailySummary, WeatherCondition};
