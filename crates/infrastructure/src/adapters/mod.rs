//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod speech_adapter;
mod weather_adapter;

pub use speech_adapter::SpeechAdapter;
pub use weather_adapter::WeatherAdapter;
