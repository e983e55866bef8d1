//! Port definitions for speech processing
//!
//! Defines the traits (ports) that speech processing adapters must implement.

use async_trait::async_trait;
use domain::AudioFormat;

use crate::error::SpeechError;
use crate::types::{AudioData, Transcription};

/// Port for Text-to-Speech (TTS) implementations
///
/// Implementations of this trait convert Bengali (or other) text to
/// audio speech.
#[async_trait]
pub trait TextToSpeech: Send + Sync {
    /// Convert text to speech
    ///
    /// # Arguments
    ///
    /// * `text` - Text to synthesize
    /// * `language` - ISO 639-1 language code (e.g., "bn")
    ///
    /// # Errors
    ///
    /// Returns `SpeechError` if synthesis fails.
    async fn synthesize(&self, text: &str, language: &str) -> Result<AudioData, SpeechError>;

    /// Check if the TTS service is available
    async fn is_available(&self) -> bool;

    /// Get the output format of synthesized audio
    fn output_format(&self) -> AudioFormat;
}

/// Port for Speech-to-Text (STT) implementations
///
/// Implementations of this trait convert audio data to text transcriptions.
#[async_trait]
pub trait SpeechToText: Send + Sync {
    /// Transcribe audio to text
    ///
    /// # Arguments
    ///
    /// * `audio` - Audio data to transcribe
    /// * `language` - Optional ISO 639-1 language hint (e.g., "bn")
    ///
    /// # Errors
    ///
    /// Returns `SpeechError` if transcription fails.
    async fn transcribe(
        &self,
        audio: AudioData,
        language: Option<&str>,
    ) -> Result<Transcription, SpeechError>;

    /// Check if the STT service is available
    async fn is_available(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockTextToSpeech {
        available: bool,
    }

    #[async_trait]
    impl TextToSpeech for MockTextToSpeech {
        async fn synthesize(
            &self,
            _text: &str,
            _language: &str,
        ) -> Result<AudioData, SpeechError> {
            Ok(AudioData::new(vec![0, 1, 2, 3], AudioFormat::Mp3))
        }

        async fn is_available(&self) -> bool {
            self.available
        }

        fn output_format(&self) -> AudioFormat {
            AudioFormat::Mp3
        }
    }

    struct MockSpeechToText;

    #[async_trait]
    impl SpeechToText for MockSpeechToText {
        async fn transcribe(
            &self,
            _audio: AudioData,
            language: Option<&str>,
        ) -> Result<Transcription, SpeechError> {
            let mut t = Transcription::new("Mock transcription");
            if let Some(lang) = language {
                t = t.with_language(lang);
            }
            Ok(t)
        }

        async fn is_available(&self) -> bool {
            true
        }
    }

    #[tokio::test]
    async fn mock_tts_synthesizes() {
        let tts = MockTextToSpeech { available: true };
        let audio = tts.synthesize("শুভ সকাল", "bn").await.unwrap();
        assert!(!audio.is_empty());
        assert_eq!(audio.format(), AudioFormat::Mp3);
    }

    #[tokio::test]
    async fn mock_tts_availability() {
        assert!(MockTextToSpeech { available: true }.is_available().await);
        assert!(!MockTextToSpeech { available: false }.is_available().await);
    }

    #[tokio::test]
    async fn mock_stt_transcribes_with_language() {
        let stt = MockSpeechToText;
        let audio = AudioData::new(vec![0, 1, 2], AudioFormat::Wav);
        let t = stt.transcribe(audio, Some("bn")).await.unwrap();
        assert_eq!(t.text, "Mock transcription");
        assert_eq!(t.language, Some("bn".to_string()));
    }
}
