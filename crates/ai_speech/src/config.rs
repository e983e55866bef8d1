//! Configuration for speech processing

use domain::AudioFormat;
use serde::{Deserialize, Serialize};

/// Configuration for speech processing services
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechConfig {
    /// Base URL of the Google Translate TTS endpoint
    #[serde(default = "default_tts_base_url")]
    pub tts_base_url: String,

    /// Base URL of the whisper-server instance used for transcription
    #[serde(default = "default_stt_base_url")]
    pub stt_base_url: String,

    /// Default language for synthesis (ISO 639-1 code)
    #[serde(default = "default_language")]
    pub default_language: String,

    /// Output audio format for TTS
    #[serde(default = "default_output_format")]
    pub output_format: AudioFormat,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_tts_base_url() -> String {
    "https://translate.google.com".to_string()
}

fn default_stt_base_url() -> String {
    "http://127.0.0.1:8080".to_string()
}

fn default_language() -> String {
    "bn".to_string()
}

const fn default_output_format() -> AudioFormat {
    AudioFormat::Mp3
}

const fn default_timeout_ms() -> u64 {
    30000 // 30 seconds
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            tts_base_url: default_tts_base_url(),
            stt_base_url: default_stt_base_url(),
            default_language: default_language(),
            output_format: default_output_format(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl SpeechConfig {
    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.timeout_ms == 0 {
            return Err("Timeout must be greater than 0".to_string());
        }
        if self.default_language.trim().is_empty() {
            return Err("Default language must not be empty".to_string());
        }
        if self.tts_base_url.trim().is_empty() || self.stt_base_url.trim().is_empty() {
            return Err("Provider base URLs must not be empty".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_expected_values() {
        let config = SpeechConfig::default();

        assert_eq!(config.tts_base_url, "https://translate.google.com");
        assert_eq!(config.stt_base_url, "http://127.0.0.1:8080");
        assert_eq!(config.default_language, "bn");
        assert_eq!(config.output_format, AudioFormat::Mp3);
        assert_eq!(config.timeout_ms, 30000);
    }

    #[test]
    fn default_config_validates() {
        assert!(SpeechConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_fails_with_zero_timeout() {
        let mut config = SpeechConfig::default();
        config.timeout_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_fails_with_empty_language() {
        let mut config = SpeechConfig::default();
        config.default_language = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn config_deserializes_from_toml() {
        let toml = r#"
            tts_base_url = "http://localhost:9001"
            stt_base_url = "http://localhost:9002"
            default_language = "bn"
            output_format = "mp3"
            timeout_ms = 60000
        "#;

        let config: SpeechConfig = toml::from_str(toml).unwrap();

        assert_eq!(config.tts_base_url, "http://localhost:9001");
        assert_eq!(config.stt_base_url, "http://localhost:9002");
        assert_eq!(config.timeout_ms, 60000);
    }

    #[test]
    fn config_deserializes_with_defaults() {
        let config: SpeechConfig = toml::from_str("").unwrap();
        assert_eq!(config.default_language, "bn");
        assert_eq!(config.output_format, AudioFormat::Mp3);
    }
}
