//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer. Contains the in-memory
//! audio cache, configuration loading, structured-logging setup, and the
//! adapters that wire the speech and weather integrations to their ports.

pub mod adapters;
pub mod cache;
pub mod config;
pub mod telemetry;

pub use adapters::{SpeechAdapter, WeatherAdapter};
pub use cache::{MokaCache, MokaCacheConfig};
pub use config::{AppConfig, CacheConfig, ServerConfig, WeatherAppConfig};
pub use telemetry::init_tracing;
