//! Google Translate TTS provider
//!
//! Implements `TextToSpeech` against the unofficial Google Translate
//! `translate_tts` endpoint. The endpoint takes the text and language as
//! query parameters and returns MP3 audio. No API key is required, but
//! the text length per request is limited, so callers keep sentences
//! short.

use std::time::Duration;

use async_trait::async_trait;
use domain::AudioFormat;
use reqwest::Client;
use tracing::{debug, instrument};

use crate::config::SpeechConfig;
use crate::error::SpeechError;
use crate::ports::TextToSpeech;
use crate::types::AudioData;

/// Google Translate TTS provider
#[derive(Debug, Clone)]
pub struct GoogleTranslateTts {
    client: Client,
    config: SpeechConfig,
}

impl GoogleTranslateTts {
    /// Create a new Google Translate TTS provider
    ///
    /// # Errors
    ///
    /// Returns `SpeechError::Configuration` if the configuration is
    /// invalid or the HTTP client cannot be initialized.
    pub fn new(config: SpeechConfig) -> Result<Self, SpeechError> {
        config.validate().map_err(SpeechError::Configuration)?;

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| {
                SpeechError::Configuration(format!("Failed to create HTTP client: {e}"))
            })?;

        Ok(Self { client, config })
    }

    /// Build the synthesis endpoint URL
    fn tts_url(&self) -> String {
        format!("{}/translate_tts", self.config.tts_base_url)
    }
}

#[async_trait]
impl TextToSpeech for GoogleTranslateTts {
    #[instrument(skip(self, text), fields(text_len = text.chars().count(), language = %language))]
    async fn synthesize(&self, text: &str, language: &str) -> Result<AudioData, SpeechError> {
        if text.trim().is_empty() {
            return Err(SpeechError::SynthesisFailed("Text is empty".to_string()));
        }

        debug!("Synthesizing speech via Google Translate TTS");

        let response = self
            .client
            .get(self.tts_url())
            .query(&[
                ("ie", "UTF-8"),
                ("q", text),
                ("tl", language),
                ("client", "tw-ob"),
            ])
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(SpeechError::RateLimited);
        }
        if status.is_server_error() {
            return Err(SpeechError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(SpeechError::SynthesisFailed(format!("HTTP {status}")));
        }

        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Err(SpeechError::InvalidResponse(
                "Empty audio body from TTS endpoint".to_string(),
            ));
        }

        Ok(AudioData::new(bytes.to_vec(), self.config.output_format))
    }

    async fn is_available(&self) -> bool {
        // Readiness probes fire periodically; a HEAD proves the endpoint
        // is reachable without spending a synthesis request against the
        // upstream quota. Any HTTP response counts, only transport
        // failures mark the provider down.
        self.client.head(self.tts_url()).send().await.is_ok()
    }

    fn output_format(&self) -> AudioFormat {
        self.config.output_format
    }
}
