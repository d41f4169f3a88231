//! Audio isolation service.

use std::sync::Arc;

use reqwest::multipart::Form;
use serde::{Deserialize, Serialize};

use super::{
    error::Result,
    file::{AudioFile, AudioStream},
    http::HttpClient,
    speech_to_speech::audio_part,
    types::{InputFileFormat, Query},
};

/// Audio isolation service.
///
/// Removes background noise, music and ambient sound, leaving the voice.
pub struct AudioIsolationService {
    http: Arc<HttpClient>,
}

impl AudioIsolationService {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Isolates the vocals in `audio`.
    pub async fn isolate(
        &self,
        audio: &AudioFile,
        options: &AudioIsolationOptions,
    ) -> Result<AudioStream> {
        self.http
            .post_multipart(
                &["v1", "audio-isolation"],
                &Query::default(),
                form(audio, options)?,
            )
            .await
    }

    /// Same as [`isolate`](Self::isolate) but uses the streaming endpoint.
    pub async fn isolate_stream(
        &self,
        audio: &AudioFile,
        options: &AudioIsolationOptions,
    ) -> Result<AudioStream> {
        self.http
            .post_multipart(
                &["v1", "audio-isolation", "stream"],
                &Query::default(),
                form(audio, options)?,
            )
            .await
    }
}

/// Optional audio isolation parameters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AudioIsolationOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_format: Option<InputFileFormat>,
}

fn form(audio: &AudioFile, options: &AudioIsolationOptions) -> Result<Form> {
    let mut form = Form::new().part("audio", audio_part(audio)?);
    if let Some(format) = options.file_format {
        form = form.text("file_format", format.as_str());
    }
    Ok(form)
}
