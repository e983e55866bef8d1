//! BanglaKantha HTTP Server
//!
//! Main entry point for the HTTP API server.

use std::sync::Arc;

use ai_speech::{GoogleTranslateTts, WhisperServerStt};
use application::{
    AnnouncementService, VoiceService, WeatherReportService,
    ports::{CachePort, SpeechPort, Units, WeatherPort},
};
use infrastructure::{
    AppConfig, MokaCache, MokaCacheConfig, SpeechAdapter, WeatherAdapter, init_tracing,
};
use integration_weather::{OpenWeatherMapClient, WeatherClient};
use presentation_http::{routes, state::AppState};
use tokio::{net::TcpListener, signal};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing("banglakantha_server=debug,tower_http=debug");

    info!("BanglaKantha v{} starting", env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load().unwrap_or_else(|e| {
        warn!("Failed to load config, using defaults: {}", e);
        AppConfig::default()
    });

    // An unknown timezone means every announcement would be wrong.
    let timezone = config
        .timezone()
        .map_err(|e| anyhow::anyhow!("Invalid timezone in configuration: {e}"))?;

    info!(
        host = %config.server.host,
        port = %config.server.port,
        timezone = %config.timezone,
        "Configuration loaded"
    );

    let cache: Arc<dyn CachePort> = Arc::new(MokaCache::with_config(MokaCacheConfig {
        max_entries: config.cache.max_entries,
        ttl: config.cache.ttl(),
    }));

    let tts = GoogleTranslateTts::new(config.speech.clone())
        .map_err(|e| anyhow::anyhow!("Failed to initialize synthesis provider: {e}"))?;
    let stt = WhisperServerStt::new(config.speech.clone())
        .map_err(|e| anyhow::anyhow!("Failed to initialize transcription provider: {e}"))?;

    let speech: Arc<dyn SpeechPort> = Arc::new(SpeechAdapter::new(
        Arc::new(tts),
        Arc::new(stt),
        config.speech.output_format,
    ));

    let voice = Arc::new(VoiceService::new(speech, Arc::clone(&cache)));
    let announcement = Arc::new(AnnouncementService::new(timezone));

    let (weather_report, default_city, default_units) = match &config.weather {
        Some(weather_config) => {
            let client = OpenWeatherMapClient::new(weather_config.to_weather_config())
                .map_err(|e| anyhow::anyhow!("Failed to initialize weather client: {e}"))?;
            let client: Arc<dyn WeatherClient> = Arc::new(client);
            let port: Arc<dyn WeatherPort> = Arc::new(WeatherAdapter::new(client));
            (
                Some(Arc::new(WeatherReportService::new(port))),
                weather_config.default_city.clone(),
                weather_config.units,
            )
        },
        None => {
            warn!("No weather API key configured; weather endpoints disabled");
            (None, "Dhaka".to_string(), Units::default())
        },
    };

    let state = AppState {
        voice,
        announcement,
        weather_report,
        default_language: config.speech.default_language.clone(),
        default_city,
        default_units,
        max_audio_body_bytes: config.server.max_body_size_audio_bytes,
    };

    let app = routes::create_router(state).layer(TraceLayer::new_for_http());

    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");

    Ok(())
}

/// Wait for shutdown signals (SIGINT, SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}
