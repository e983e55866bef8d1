//! AI Speech - Text-to-Speech and Speech-to-Text abstractions
//!
//! Provides traits and implementations for speech processing:
//! - `TextToSpeech` - Synthesize speech audio from Bengali text (TTS)
//! - `SpeechToText` - Transcribe audio to text (STT)
//!
//! # Architecture
//!
//! This crate follows the ports & adapters pattern:
//! - `ports` module defines the traits (ports)
//! - `providers` module contains concrete implementations (adapters)
//!
//! # Supported Providers
//!
//! - Google Translate TTS endpoint (no API key, MP3 output)
//! - whisper-server HTTP inference endpoint (STT)

pub mod config;
pub mod error;
pub mod ports;
pub mod providers;
pub mod types;

pub use config::SpeechConfig;
pub use error::SpeechError;
pub use ports::{SpeechToText, TextToSpeech};
pub use providers::google_tts::GoogleTranslateTts;
pub use providers::whisper_http::WhisperServerStt;
pub use types::{AudioData, Transcription};
