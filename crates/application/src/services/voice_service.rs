//! Voice service
//!
//! Wraps the speech port with input validation and audio caching. All
//! spoken endpoints go through this service so repeated requests within
//! the cache TTL never re-synthesize.

use std::sync::Arc;

use domain::{AudioFormat, DomainError};
use tracing::debug;

use crate::error::ApplicationError;
use crate::ports::{CachePort, SpeechPort, TranscriptionResult};

/// Maximum length of text accepted for synthesis, in characters
pub const MAX_TEXT_CHARS: usize = 1000;

/// Synthesized audio along with its cache provenance
#[derive(Debug, Clone)]
pub struct SpokenAudio {
    /// Raw audio bytes
    pub bytes: Vec<u8>,
    /// Format of the audio
    pub format: AudioFormat,
    /// Whether the audio was served from cache
    pub cached: bool,
}

/// Service for cached speech synthesis and transcription
#[derive(Clone)]
pub struct VoiceService {
    speech: Arc<dyn SpeechPort>,
    cache: Arc<dyn CachePort>,
}

impl VoiceService {
    /// Create a new voice service
    #[must_use]
    pub fn new(speech: Arc<dyn SpeechPort>, cache: Arc<dyn CachePort>) -> Self {
        Self { speech, cache }
    }

    /// Synthesize text, caching under a key derived from the text itself
    pub async fn speak(
        &self,
        text: &str,
        language: &str,
    ) -> Result<SpokenAudio, ApplicationError> {
        let cache_key = format!("tts::{language}::{text}");
        self.speak_keyed(&cache_key, text, language).await
    }

    /// Synthesize text, caching under a caller-supplied key
    ///
    /// Report endpoints key by their inputs (city, units, minute) rather
    /// than the full sentence, so a changed sentence naturally replaces
    /// the stale audio when the entry expires.
    pub async fn speak_keyed(
        &self,
        cache_key: &str,
        text: &str,
        language: &str,
    ) -> Result<SpokenAudio, ApplicationError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(DomainError::EmptyInput("text".to_string()).into());
        }
        let len = text.chars().count();
        if len > MAX_TEXT_CHARS {
            return Err(DomainError::TextTooLong {
                len,
                max: MAX_TEXT_CHARS,
            }
            .into());
        }

        if let Some(audio) = self.cached_audio(cache_key).await? {
            return Ok(audio);
        }

        let result = self
            .speech
            .synthesize(text.to_string(), language.to_string())
            .await?;
        self.cache
            .set_bytes(cache_key, result.audio_data.clone())
            .await?;

        Ok(SpokenAudio {
            bytes: result.audio_data,
            format: result.format,
            cached: false,
        })
    }

    /// Return previously synthesized audio for a key, if still cached
    ///
    /// Report endpoints consult this before gathering facts, so a warm
    /// cache skips both the upstream API call and the synthesis.
    pub async fn cached_audio(
        &self,
        cache_key: &str,
    ) -> Result<Option<SpokenAudio>, ApplicationError> {
        let Some(bytes) = self.cache.get_bytes(cache_key).await? else {
            return Ok(None);
        };
        debug!(cache_key = %cache_key, "Serving synthesized audio from cache");
        Ok(Some(SpokenAudio {
            bytes,
            format: self.speech.output_format(),
            cached: true,
        }))
    }

    /// Transcribe uploaded audio to text
    pub async fn transcribe(
        &self,
        audio_data: Vec<u8>,
        format: AudioFormat,
        language_hint: Option<String>,
    ) -> Result<TranscriptionResult, ApplicationError> {
        if audio_data.is_empty() {
            return Err(DomainError::EmptyInput("audio".to_string()).into());
        }
        self.speech
            .transcribe(audio_data, format, language_hint)
            .await
    }

    /// Check whether the speech backend responds
    pub async fn is_available(&self) -> bool {
        self.speech.is_available().await
    }
}

impl std::fmt::Debug for VoiceService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VoiceService").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{CacheStats, MockSpeechPort, SynthesisResult};
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Debug, Default)]
    struct MemoryCache {
        entries: Mutex<HashMap<String, Vec<u8>>>,
    }

    #[async_trait]
    impl CachePort for MemoryCache {
        async fn get_bytes(&self, key: &str) -> Result<Option<Vec<u8>>, ApplicationError> {
            Ok(self.entries.lock().unwrap().get(key).cloned())
        }

        async fn set_bytes(&self, key: &str, value: Vec<u8>) -> Result<(), ApplicationError> {
            self.entries.lock().unwrap().insert(key.to_string(), value);
            Ok(())
        }

        async fn invalidate(&self, key: &str) -> Result<(), ApplicationError> {
            self.entries.lock().unwrap().remove(key);
            Ok(())
        }

        async fn exists(&self, key: &str) -> Result<bool, ApplicationError> {
            Ok(self.entries.lock().unwrap().contains_key(key))
        }

        fn stats(&self) -> CacheStats {
            CacheStats::default()
        }
    }

    fn speech_returning(audio: Vec<u8>) -> MockSpeechPort {
        let mut mock = MockSpeechPort::new();
        let audio_clone = audio.clone();
        mock.expect_synthesize().returning(move |_, _| {
            Ok(SynthesisResult {
                audio_data: audio_clone.clone(),
                format: AudioFormat::Mp3,
            })
        });
        mock.expect_output_format().returning(|| AudioFormat::Mp3);
        mock
    }

    #[tokio::test]
    async fn first_call_synthesizes_second_call_hits_cache() {
        let mut mock = MockSpeechPort::new();
        mock.expect_synthesize().times(1).returning(|_, _| {
            Ok(SynthesisResult {
                audio_data: vec![9, 9, 9],
                format: AudioFormat::Mp3,
            })
        });
        mock.expect_output_format().returning(|| AudioFormat::Mp3);

        let service = VoiceService::new(Arc::new(mock), Arc::new(MemoryCache::default()));

        let first = service.speak("শুভ সকাল", "bn").await.unwrap();
        assert!(!first.cached);

        let second = service.speak("শুভ সকাল", "bn").await.unwrap();
        assert!(second.cached);
        assert_eq!(second.bytes, vec![9, 9, 9]);
    }

    #[tokio::test]
    async fn cache_key_includes_language() {
        let service = VoiceService::new(
            Arc::new(speech_returning(vec![1])),
            Arc::new(MemoryCache::default()),
        );

        service.speak("hello", "bn").await.unwrap();
        let english = service.speak("hello", "en").await.unwrap();
        assert!(!english.cached);
    }

    #[tokio::test]
    async fn empty_text_is_rejected() {
        let service = VoiceService::new(
            Arc::new(MockSpeechPort::new()),
            Arc::new(MemoryCache::default()),
        );

        let result = service.speak("   ", "bn").await;
        assert!(matches!(
            result,
            Err(ApplicationError::Domain(DomainError::EmptyInput(_)))
        ));
    }

    #[tokio::test]
    async fn overlong_text_is_rejected() {
        let service = VoiceService::new(
            Arc::new(MockSpeechPort::new()),
            Arc::new(MemoryCache::default()),
        );

        let text = "ক".repeat(MAX_TEXT_CHARS + 1);
        let result = service.speak(&text, "bn").await;
        assert!(matches!(
            result,
            Err(ApplicationError::Domain(DomainError::TextTooLong { .. }))
        ));
    }

    #[tokio::test]
    async fn text_at_limit_is_accepted() {
        let service = VoiceService::new(
            Arc::new(speech_returning(vec![1, 2])),
            Arc::new(MemoryCache::default()),
        );

        let text = "ক".repeat(MAX_TEXT_CHARS);
        assert!(service.speak(&text, "bn").await.is_ok());
    }

    #[tokio::test]
    async fn empty_audio_upload_is_rejected() {
        let service = VoiceService::new(
            Arc::new(MockSpeechPort::new()),
            Arc::new(MemoryCache::default()),
        );

        let result = service.transcribe(vec![], AudioFormat::Wav, None).await;
        assert!(matches!(
            result,
            Err(ApplicationError::Domain(DomainError::EmptyInput(_)))
        ));
    }

    #[tokio::test]
    async fn cached_audio_misses_cold_and_hits_after_speak() {
        let cache = Arc::new(MemoryCache::default());
        let service = VoiceService::new(Arc::new(speech_returning(vec![4, 2])), cache);

        assert!(service
            .cached_audio("weather::Dhaka::metric")
            .await
            .unwrap()
            .is_none());

        service
            .speak_keyed("weather::Dhaka::metric", "আবহাওয়া ভালো", "bn")
            .await
            .unwrap();

        let replay = service
            .cached_audio("weather::Dhaka::metric")
            .await
            .unwrap()
            .unwrap();
        assert!(replay.cached);
        assert_eq!(replay.bytes, vec![4, 2]);
    }

    #[tokio::test]
    async fn keyed_speak_uses_supplied_key() {
        let cache = Arc::new(MemoryCache::default());
        let service = VoiceService::new(Arc::new(speech_returning(vec![7])), cache.clone());

        service
            .speak_keyed("weather::Dhaka::metric", "আবহাওয়া ভালো", "bn")
            .await
            .unwrap();

        assert!(cache.exists("weather::Dhaka::metric").await.unwrap());
    }
}
