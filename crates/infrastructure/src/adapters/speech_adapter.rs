//! Speech adapter - Implements SpeechPort using ai_speech

use std::sync::Arc;

use ai_speech::{AudioData, SpeechError, SpeechToText, TextToSpeech};
use application::{
    error::ApplicationError,
    ports::{SpeechPort, SynthesisResult, TranscriptionResult},
};
use async_trait::async_trait;
use domain::AudioFormat;
use tracing::{debug, instrument};

/// Adapter bridging the speech providers to the application port
#[derive(Clone)]
pub struct SpeechAdapter {
    tts: Arc<dyn TextToSpeech>,
    stt: Arc<dyn SpeechToText>,
    output_format: AudioFormat,
}

impl std::fmt::Debug for SpeechAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpeechAdapter")
            .field("output_format", &self.output_format)
            .finish_non_exhaustive()
    }
}

impl SpeechAdapter {
    /// Create a new adapter over synthesis and transcription providers
    pub fn new(
        tts: Arc<dyn TextToSpeech>,
        stt: Arc<dyn SpeechToText>,
        output_format: AudioFormat,
    ) -> Self {
        Self {
            tts,
            stt,
            output_format,
        }
    }

    /// Map SpeechError to ApplicationError
    fn map_error(e: SpeechError) -> ApplicationError {
        match e {
            SpeechError::RateLimited => ApplicationError::RateLimited,
            SpeechError::Configuration(msg) => ApplicationError::Configuration(msg),
            other => ApplicationError::ExternalService(other.to_string()),
        }
    }
}

#[async_trait]
impl SpeechPort for SpeechAdapter {
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    async fn synthesize(
        &self,
        text: String,
        language: String,
    ) -> Result<SynthesisResult, ApplicationError> {
        debug!(language, "Synthesizing speech");

        let audio = self
            .tts
            .synthesize(&text, &language)
            .await
            .map_err(Self::map_error)?;

        let format = audio.format();
        Ok(SynthesisResult {
            audio_data: audio.into_data(),
            format,
        })
    }

    #[instrument(skip(self, audio_data), fields(audio_len = audio_data.len()))]
    async fn transcribe(
        &self,
        audio_data: Vec<u8>,
        format: AudioFormat,
        language_hint: Option<String>,
    ) -> Result<TranscriptionResult, ApplicationError> {
        debug!(?format, "Transcribing audio");

        let audio = AudioData::new(audio_data, format);
        let transcription = self
            .stt
            .transcribe(audio, language_hint.as_deref())
            .await
            .map_err(Self::map_error)?;

        Ok(TranscriptionResult {
            text: transcription.text,
            detected_language: transcription.language,
            duration_ms: transcription.duration_ms,
        })
    }

    async fn is_available(&self) -> bool {
        self.tts.is_available().await
    }

    fn output_format(&self) -> AudioFormat {
        self.output_format
    }
}
