//! Text-to-speech service.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{
    error::Result,
    file::AudioStream,
    http::HttpClient,
    types::{OutputFormat, PronunciationDictionaryLocator, Query, TextNormalization, VoiceSettings},
};

/// Text-to-speech service.
pub struct TextToSpeechService {
    http: Arc<HttpClient>,
}

impl TextToSpeechService {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Converts text into speech with the given voice.
    ///
    /// The audio body is returned unbuffered; use
    /// [`AudioStream::into_file`] to collect it.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use giztoy_elevenlabs::*;
    /// # async fn run(client: Client) -> Result<()> {
    /// let request = TextToSpeechRequest::new("Hello, world!", MODEL_MULTILINGUAL_V2);
    /// let stream = client.text_to_speech().convert(VOICE_ARIA, &request).await?;
    /// let file = stream.into_file("speech.mp3", MIME_AUDIO_MPEG).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn convert(
        &self,
        voice_id: &str,
        request: &TextToSpeechRequest,
    ) -> Result<AudioStream> {
        self.http
            .post_json(
                &["v1", "text-to-speech", voice_id],
                &request.options.query(),
                request,
            )
            .await
    }

    /// Same as [`convert`](Self::convert) but uses the streaming endpoint,
    /// which starts sending audio before generation finishes.
    pub async fn convert_stream(
        &self,
        voice_id: &str,
        request: &TextToSpeechRequest,
    ) -> Result<AudioStream> {
        self.http
            .post_json(
                &["v1", "text-to-speech", voice_id, "stream"],
                &request.options.query(),
                request,
            )
            .await
    }
}

// ==================== Request Types ====================

/// Request for text-to-speech conversion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TextToSpeechRequest {
    /// Text to convert.
    pub text: String,

    /// Model ID, e.g. `eleven_multilingual_v2`.
    pub model_id: String,

    /// Everything else.
    #[serde(flatten)]
    pub options: TextToSpeechOptions,
}

impl TextToSpeechRequest {
    /// Creates a request with default options.
    pub fn new(text: impl Into<String>, model_id: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            model_id: model_id.into(),
            options: TextToSpeechOptions::default(),
        }
    }

    /// Replaces the options.
    pub fn with_options(mut self, options: TextToSpeechOptions) -> Self {
        self.options = options;
        self
    }
}

/// Optional text-to-speech parameters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TextToSpeechOptions {
    /// Voice settings overriding the stored ones for this request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice_settings: Option<VoiceSettings>,

    /// ISO 639-1 language code to enforce.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,

    /// Seed for best-effort deterministic sampling (0-4294967295).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u32>,

    /// Text that came before this request, for continuity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_text: Option<String>,

    /// Text that comes after this request, for continuity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_text: Option<String>,

    /// Request IDs of earlier generations (max 3).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub previous_request_ids: Vec<String>,

    /// Request IDs of later generations (max 3).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub next_request_ids: Vec<String>,

    /// Pronunciation dictionaries to apply (max 3).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pronunciation_dictionary_locators: Vec<PronunciationDictionaryLocator>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub apply_text_normalization: Option<TextNormalization>,

    /// Query parameter, not part of the body.
    #[serde(default, skip_serializing)]
    pub output_format: Option<OutputFormat>,

    /// Query parameter. `false` enables zero retention mode (enterprise only).
    #[serde(default, skip_serializing)]
    pub enable_logging: Option<bool>,
}

impl TextToSpeechOptions {
    pub(crate) fn query(&self) -> Query {
        Query {
            output_format: self.output_format,
            enable_logging: self.enable_logging,
        }
    }
}
