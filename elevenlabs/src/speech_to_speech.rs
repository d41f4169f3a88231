//! Speech-to-speech (voice changer) service.

use std::sync::Arc;

use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};

use super::{
    error::Result,
    file::{AudioFile, AudioStream},
    http::HttpClient,
    types::{InputFileFormat, OutputFormat, Query, VoiceSettings},
};

/// Speech-to-speech service.
///
/// Re-voices recorded speech with another voice while keeping its
/// emotion, timing and delivery.
pub struct SpeechToSpeechService {
    http: Arc<HttpClient>,
}

impl SpeechToSpeechService {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Converts the audio to the target voice.
    pub async fn convert(
        &self,
        voice_id: &str,
        request: &SpeechToSpeechRequest,
    ) -> Result<AudioStream> {
        self.http
            .post_multipart(
                &["v1", "speech-to-speech", voice_id],
                &request.options.query(),
                request.form()?,
            )
            .await
    }

    /// Same as [`convert`](Self::convert) but uses the streaming endpoint.
    pub async fn convert_stream(
        &self,
        voice_id: &str,
        request: &SpeechToSpeechRequest,
    ) -> Result<AudioStream> {
        self.http
            .post_multipart(
                &["v1", "speech-to-speech", voice_id, "stream"],
                &request.options.query(),
                request.form()?,
            )
            .await
    }
}

/// Request for speech-to-speech conversion.
#[derive(Debug, Clone)]
pub struct SpeechToSpeechRequest {
    /// Source audio.
    pub audio: AudioFile,

    /// Model ID; must support speech-to-speech.
    pub model_id: String,

    pub options: SpeechToSpeechOptions,
}

impl SpeechToSpeechRequest {
    /// Creates a request with default options.
    pub fn new(audio: AudioFile, model_id: impl Into<String>) -> Self {
        Self {
            audio,
            model_id: model_id.into(),
            options: SpeechToSpeechOptions::default(),
        }
    }

    /// Replaces the options.
    pub fn with_options(mut self, options: SpeechToSpeechOptions) -> Self {
        self.options = options;
        self
    }

    fn form(&self) -> Result<Form> {
        let mut form = Form::new()
            .part("audio", audio_part(&self.audio)?)
            .text("model_id", self.model_id.clone());

        let o = &self.options;
        if let Some(settings) = &o.voice_settings {
            form = form.text("voice_settings", serde_json::to_string(settings)?);
        }
        if let Some(seed) = o.seed {
            form = form.text("seed", seed.to_string());
        }
        if let Some(remove) = o.remove_background_noise {
            form = form.text("remove_background_noise", remove.to_string());
        }
        if let Some(format) = o.file_format {
            form = form.text("file_format", format.as_str());
        }

        Ok(form)
    }
}

/// Optional speech-to-speech parameters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpeechToSpeechOptions {
    /// Voice settings overriding the stored ones for this request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice_settings: Option<VoiceSettings>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u32>,

    /// Strip background noise from the source before conversion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remove_background_noise: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_format: Option<InputFileFormat>,

    /// Query parameter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_format: Option<OutputFormat>,

    /// Query parameter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_logging: Option<bool>,
}

impl SpeechToSpeechOptions {
    pub(crate) fn query(&self) -> Query {
        Query {
            output_format: self.output_format,
            enable_logging: self.enable_logging,
        }
    }
}

/// Builds the multipart part for an uploaded audio file.
pub(crate) fn audio_part(audio: &AudioFile) -> Result<Part> {
    let part = Part::bytes(audio.data().to_vec())
        .file_name(audio.name().to_string())
        .mime_str(audio.content_type())?;
    Ok(part)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_builds_with_all_options() {
        let request = SpeechToSpeechRequest::new(
            AudioFile::mp3("in.mp3", vec![0u8; 4]),
            "eleven_english_sts_v2",
        )
        .with_options(SpeechToSpeechOptions {
            voice_settings: Some(VoiceSettings {
                stability: Some(0.3),
                ..Default::default()
            }),
            seed: Some(1),
            remove_background_noise: Some(true),
            file_format: Some(InputFileFormat::Other),
            ..Default::default()
        });

        assert!(request.form().is_ok());
    }

    #[test]
    fn rejects_invalid_content_type() {
        let audio = AudioFile::new("in.mp3", "not a mime", vec![0u8]);
        assert!(audio_part(&audio).is_err());
    }

    #[test]
    fn query_uses_output_format() {
        let options = SpeechToSpeechOptions {
            output_format: Some(OutputFormat::Mp3_44100_128),
            enable_logging: Some(false),
            ..Default::default()
        };
        let query = serde_json::to_value(options.query()).expect("serialize");
        assert_eq!(
            query,
            serde_json::json!({"output_format": "mp3_44100_128", "enable_logging": false})
        );
    }
}
