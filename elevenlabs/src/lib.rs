//! ElevenLabs speech API wrappers for Rust.
//!
//! The crate has two layers:
//!
//! - a small SDK ([`Client`] and its services) that talks to the ElevenLabs
//!   HTTP API and hands back the streamed audio body;
//! - env-backed convenience wrappers ([`tts`], [`sts`], [`isolation`]) that
//!   resolve friendly voice/model names, make one call, buffer the whole
//!   response and return it as an in-memory `audio/mpeg` [`AudioFile`].
//!
//! # Example
//!
//! ```rust,no_run
//! # async fn run() -> giztoy_elevenlabs::Result<()> {
//! let speech = giztoy_elevenlabs::tts("flash_v2_5", "george")
//!     .synthesize("Hello from ElevenLabs")
//!     .await?;
//!
//! speech.write_to("speech.mp3").await?;
//! # Ok(())
//! # }
//! ```

mod audio_isolation;
mod client;
mod error;
mod file;
pub mod http;
mod models;
mod provider;
mod speech_to_speech;
mod text_to_speech;
mod types;

pub use audio_isolation::{AudioIsolationOptions, AudioIsolationService};
pub use client::{API_KEY_ENV, Client, ClientBuilder, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use error::{Error, Result, status};
pub use file::{AudioFile, AudioStream, MIME_AUDIO_MPEG, MIME_OCTET_STREAM};
pub use models::*;
pub use provider::{
    CONVERTED_SPEECH_FILE_NAME, ISOLATED_SPEECH_FILE_NAME, Isolation, Provider,
    SPEECH_FILE_NAME, Sts, Tts, isolation, sts, tts,
};
pub use speech_to_speech::{SpeechToSpeechOptions, SpeechToSpeechRequest, SpeechToSpeechService};
pub use text_to_speech::{TextToSpeechOptions, TextToSpeechRequest, TextToSpeechService};
pub use types::{
    InputFileFormat, OutputFormat, PronunciationDictionaryLocator, TextNormalization,
    VoiceSettings,
};
