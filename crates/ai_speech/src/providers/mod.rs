//! Speech processing provider implementations
//!
//! Contains concrete implementations of the `TextToSpeech` and
//! `SpeechToText` traits.

pub mod google_tts;
pub mod whisper_http;

pub use google_tts::GoogleTranslateTts;
pub use whisper_http::WhisperServerStt;
