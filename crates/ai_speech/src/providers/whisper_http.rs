//! whisper-server STT provider
//!
//! Implements `SpeechToText` against the whisper.cpp HTTP server
//! (`whisper-server`). Audio is uploaded as a multipart form to the
//! `/inference` endpoint and the transcription comes back as JSON.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::config::SpeechConfig;
use crate::error::SpeechError;
use crate::ports::SpeechToText;
use crate::types::{AudioData, Transcription};

/// whisper-server STT provider
#[derive(Debug, Clone)]
pub struct WhisperServerStt {
    client: Client,
    config: SpeechConfig,
}

/// whisper-server inference response
#[derive(Debug, Deserialize)]
struct InferenceResponse {
    text: String,
    #[serde(default)]
    language: Option<String>,
}

impl WhisperServerStt {
    /// Create a new whisper-server STT provider
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

    /// Build the inference endpoint URL
    fn inference_url(&self) -> String {
        format!("{}/inference", self.config.stt_base_url)
    }

    /// Build the health endpoint URL
    fn health_url(&self) -> String {
        format!("{}/health", self.config.stt_base_url)
    }
}

#[async_trait]
impl SpeechToText for WhisperServerStt {
    #[instrument(skip(self, audio), fields(audio_size = audio.size_bytes(), format = ?audio.format()))]
    async fn transcribe(
        &self,
        audio: AudioData,
        language: Option<&str>,
    ) -> Result<Transcription, SpeechError> {
        if audio.is_empty() {
            return Err(SpeechError::InvalidAudio("Audio data is empty".to_string()));
        }

        debug!("Transcribing audio with whisper-server");

        let filename = audio.filename("audio");
        let mime_type = audio.mime_type();

        let file_part = Part::bytes(audio.into_data())
            .file_name(filename)
            .mime_str(mime_type)
            .map_err(|e| SpeechError::InvalidAudio(format!("Invalid MIME type: {e}")))?;

        let mut form = Form::new()
            .part("file", file_part)
            .text("response_format", "json");
        if let Some(lang) = language {
            form = form.text("language", lang.to_string());
        }

        let response = self
            .client
            .post(self.inference_url())
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if status.is_server_error() {
            return Err(SpeechError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SpeechError::TranscriptionFailed(format!(
                "HTTP {status}: {body}"
            )));
        }

        let body: InferenceResponse = response
            .json()
            .await
            .map_err(|e| SpeechError::InvalidResponse(e.to_string()))?;

        let mut transcription = Transcription::new(body.text.trim());
        if let Some(lang) = body.language.or_else(|| language.map(ToString::to_string)) {
            transcription = transcription.with_language(lang);
        }
        Ok(transcription)
    }

    async fn is_available(&self) -> bool {
        self.client
            .get(self.health_url())
            .send()
            .await
            .is_ok_and(|r| r.status().is_success())
    }
}
