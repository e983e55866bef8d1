//! Speech port - Interface for text-to-speech and speech-to-text operations

use async_trait::async_trait;
use domain::AudioFormat;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Result of a speech synthesis operation
#[derive(Debug, Clone)]
pub struct SynthesisResult {
    /// Generated audio data
    pub audio_data: Vec<u8>,
    /// Format of the audio
    pub format: AudioFormat,
}

/// Result of a transcription operation
#[derive(Debug, Clone)]
pub struct TranscriptionResult {
    /// Transcribed text
    pub text: String,
    /// Detected language code (e.g., "bn", "en")
    pub detected_language: Option<String>,
    /// Duration of audio in milliseconds
    pub duration_ms: Option<u64>,
}

/// Port for speech processing operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SpeechPort: Send + Sync {
    /// Synthesize speech from text (Text-to-Speech)
    ///
    /// # Arguments
    /// * `text` - Text to synthesize
    /// * `language` - ISO 639-1 language code of the text (e.g., "bn")
    async fn synthesize(
        &self,
        text: String,
        language: String,
    ) -> Result<SynthesisResult, ApplicationError>;

    /// Transcribe audio data to text (Speech-to-Text)
    ///
    /// # Arguments
    /// * `audio_data` - Raw audio bytes
    /// * `format` - Format of the audio
    /// * `language_hint` - Optional language hint (e.g., "bn")
    async fn transcribe(
        &self,
        audio_data: Vec<u8>,
        format: AudioFormat,
        language_hint: Option<String>,
    ) -> Result<TranscriptionResult, ApplicationError>;

    /// Check if the speech service is available
    async fn is_available(&self) -> bool;

    /// Get the output format for synthesized audio
    fn output_format(&self) -> AudioFormat;
}
