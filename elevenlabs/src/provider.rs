//! Env-backed convenience wrappers.
//!
//! Each wrapper resolves friendly names through the lookup tables, makes a
//! single API call, buffers the whole response and returns it as an
//! `audio/mpeg` [`AudioFile`]. The API key is read from the environment on
//! every call, so a missing key fails before anything is sent.

use tracing::debug;

use super::{
    audio_isolation::AudioIsolationOptions,
    client::{API_KEY_ENV, Client, ClientBuilder},
    error::Result,
    file::{AudioFile, MIME_AUDIO_MPEG},
    models::{DEFAULT_STS_MODEL, DEFAULT_TTS_MODEL, DEFAULT_VOICE, resolve_model, resolve_voice},
    speech_to_speech::{SpeechToSpeechOptions, SpeechToSpeechRequest},
    text_to_speech::{TextToSpeechOptions, TextToSpeechRequest},
    types::OutputFormat,
};

/// File name of text-to-speech results.
pub const SPEECH_FILE_NAME: &str = "speech.mp3";

/// File name of speech-to-speech results.
pub const CONVERTED_SPEECH_FILE_NAME: &str = "converted-speech.mp3";

/// File name of audio isolation results.
pub const ISOLATED_SPEECH_FILE_NAME: &str = "isolated-speech.mp3";

/// Creates a text-to-speech wrapper using `ELEVENLABS_API_KEY`.
///
/// `model` and `voice` accept table names (`"flash_v2_5"`, `"george"`) or
/// raw vendor IDs.
pub fn tts(model: &str, voice: &str) -> Tts {
    Provider::new().tts(model, voice)
}

/// Creates a speech-to-speech wrapper using `ELEVENLABS_API_KEY`.
pub fn sts(model_id: &str, voice: &str) -> Sts {
    Provider::new().sts(model_id, voice)
}

/// Creates an audio isolation wrapper using `ELEVENLABS_API_KEY`.
pub fn isolation() -> Isolation {
    Provider::new().isolation()
}

/// Builds authenticated clients from the environment on demand.
#[derive(Debug, Clone)]
pub struct Provider {
    api_key_env: String,
    base_url: Option<String>,
}

impl Default for Provider {
    fn default() -> Self {
        Self::new()
    }
}

impl Provider {
    /// Creates a provider reading `ELEVENLABS_API_KEY`.
    pub fn new() -> Self {
        Self {
            api_key_env: API_KEY_ENV.to_string(),
            base_url: None,
        }
    }

    /// Reads the API key from a different environment variable.
    pub fn api_key_env(mut self, name: impl Into<String>) -> Self {
        self.api_key_env = name.into();
        self
    }

    /// Sends requests to a different base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Builds a client, failing fast if the API key is not set.
    pub fn client(&self) -> Result<Client> {
        let mut builder = ClientBuilder::from_env_var(&self.api_key_env)?;
        if let Some(url) = &self.base_url {
            builder = builder.base_url(url.clone());
        }
        builder.build()
    }

    /// Creates a text-to-speech wrapper.
    pub fn tts(&self, model: &str, voice: &str) -> Tts {
        Tts {
            provider: self.clone(),
            model: model.to_string(),
            voice: voice.to_string(),
            options: TextToSpeechOptions::default(),
        }
    }

    /// Creates a speech-to-speech wrapper.
    pub fn sts(&self, model_id: &str, voice: &str) -> Sts {
        Sts {
            provider: self.clone(),
            model_id: model_id.to_string(),
            voice: voice.to_string(),
            options: SpeechToSpeechOptions::default(),
        }
    }

    /// Creates an audio isolation wrapper.
    pub fn isolation(&self) -> Isolation {
        Isolation {
            provider: self.clone(),
            options: AudioIsolationOptions::default(),
        }
    }
}

// ==================== Text to Speech ====================

/// Text-to-speech wrapper returned by [`tts`].
#[derive(Debug, Clone)]
pub struct Tts {
    provider: Provider,
    model: String,
    voice: String,
    options: TextToSpeechOptions,
}

impl Default for Tts {
    fn default() -> Self {
        Provider::new().tts(DEFAULT_TTS_MODEL, DEFAULT_VOICE)
    }
}

impl Tts {
    /// Sets the pass-through options.
    pub fn options(mut self, options: TextToSpeechOptions) -> Self {
        self.options = options;
        self
    }

    /// Resolved vendor model ID.
    pub fn model_id(&self) -> &str {
        resolve_model(&self.model)
    }

    /// Resolved vendor voice ID.
    pub fn voice_id(&self) -> &str {
        resolve_voice(&self.voice)
    }

    /// Synthesizes `prompt` into a buffered `speech.mp3`.
    pub async fn synthesize(&self, prompt: &str) -> Result<AudioFile> {
        let client = self.provider.client()?;
        self.synthesize_with(&client, prompt).await
    }

    /// Same as [`synthesize`](Self::synthesize) with an existing client.
    pub async fn synthesize_with(&self, client: &Client, prompt: &str) -> Result<AudioFile> {
        let request = self.request(prompt);
        debug!(voice = self.voice_id(), model = %request.model_id, "elevenlabs: tts");

        client
            .text_to_speech()
            .convert(self.voice_id(), &request)
            .await?
            .into_file(SPEECH_FILE_NAME, MIME_AUDIO_MPEG)
            .await
    }

    fn request(&self, prompt: &str) -> TextToSpeechRequest {
        TextToSpeechRequest {
            text: prompt.to_string(),
            model_id: self.model_id().to_string(),
            options: self.options.clone(),
        }
    }
}

// ==================== Speech to Speech ====================

/// Speech-to-speech wrapper returned by [`sts`].
#[derive(Debug, Clone)]
pub struct Sts {
    provider: Provider,
    model_id: String,
    voice: String,
    options: SpeechToSpeechOptions,
}

impl Default for Sts {
    fn default() -> Self {
        Provider::new().sts(DEFAULT_STS_MODEL, DEFAULT_VOICE)
    }
}

impl Sts {
    /// Sets the pass-through options.
    ///
    /// `output_format` defaults to `mp3_44100_128` when left unset.
    pub fn options(mut self, options: SpeechToSpeechOptions) -> Self {
        self.options = options;
        self
    }

    /// Resolved vendor model ID.
    pub fn model_id(&self) -> &str {
        resolve_model(&self.model_id)
    }

    /// Resolved vendor voice ID.
    pub fn voice_id(&self) -> &str {
        resolve_voice(&self.voice)
    }

    /// Re-voices `audio` into a buffered `converted-speech.mp3`.
    pub async fn convert(&self, audio: AudioFile) -> Result<AudioFile> {
        let client = self.provider.client()?;
        self.convert_with(&client, audio).await
    }

    /// Same as [`convert`](Self::convert) with an existing client.
    pub async fn convert_with(&self, client: &Client, audio: AudioFile) -> Result<AudioFile> {
        let request = self.request(audio);
        debug!(voice = self.voice_id(), model = %request.model_id, "elevenlabs: sts");

        client
            .speech_to_speech()
            .convert(self.voice_id(), &request)
            .await?
            .into_file(CONVERTED_SPEECH_FILE_NAME, MIME_AUDIO_MPEG)
            .await
    }

    fn request(&self, audio: AudioFile) -> SpeechToSpeechRequest {
        let mut options = self.options.clone();
        options.output_format = options.output_format.or(Some(OutputFormat::Mp3_44100_128));
        SpeechToSpeechRequest::new(audio, self.model_id()).with_options(options)
    }
}

// ==================== Audio Isolation ====================

/// Audio isolation wrapper returned by [`isolation`].
#[derive(Debug, Clone)]
pub struct Isolation {
    provider: Provider,
    options: AudioIsolationOptions,
}

impl Default for Isolation {
    fn default() -> Self {
        Provider::new().isolation()
    }
}

impl Isolation {
    /// Sets the pass-through options.
    pub fn options(mut self, options: AudioIsolationOptions) -> Self {
        self.options = options;
        self
    }

    /// Isolates the voice in `audio` into a buffered `isolated-speech.mp3`.
    pub async fn isolate(&self, audio: AudioFile) -> Result<AudioFile> {
        let client = self.provider.client()?;
        self.isolate_with(&client, audio).await
    }

    /// Same as [`isolate`](Self::isolate) with an existing client.
    pub async fn isolate_with(&self, client: &Client, audio: AudioFile) -> Result<AudioFile> {
        debug!(input = audio.name(), bytes = audio.len(), "elevenlabs: isolate");

        client
            .audio_isolation()
            .isolate(&audio, &self.options)
            .await?
            .into_file(ISOLATED_SPEECH_FILE_NAME, MIME_AUDIO_MPEG)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, MODEL_FLASH_V2_5, MODEL_MULTILINGUAL_V2, VOICE_ARIA, VOICE_GEORGE};

    const UNSET: &str = "GIZTOY_ELEVENLABS_PROVIDER_TEST_UNSET";

    fn unset_provider() -> Provider {
        Provider::new().api_key_env(UNSET)
    }

    fn sample() -> AudioFile {
        AudioFile::mp3("in.mp3", vec![0xffu8, 0xfb])
    }

    #[test]
    fn defaults_match_tables() {
        let tts = Tts::default();
        assert_eq!(tts.model_id(), MODEL_MULTILINGUAL_V2);
        assert_eq!(tts.voice_id(), VOICE_ARIA);

        let sts = Sts::default();
        assert_eq!(sts.model_id(), "eleven_multilingual_sts_v2");
        assert_eq!(sts.voice_id(), VOICE_ARIA);
    }

    #[test]
    fn raw_voice_ids_pass_through() {
        let tts = tts("flash_v2_5", "my-cloned-voice");
        assert_eq!(tts.model_id(), MODEL_FLASH_V2_5);
        assert_eq!(tts.voice_id(), "my-cloned-voice");
        assert_eq!(sts("eleven_english_sts_v2", "george").voice_id(), VOICE_GEORGE);
    }

    #[test]
    fn tts_request_carries_options() {
        let tts = tts("turbo_v2", "liam").options(TextToSpeechOptions {
            language_code: Some("de".to_string()),
            ..Default::default()
        });
        let request = tts.request("Hallo");
        assert_eq!(request.text, "Hallo");
        assert_eq!(request.model_id, "eleven_turbo_v2");
        assert_eq!(request.options.language_code.as_deref(), Some("de"));
    }

    #[test]
    fn sts_defaults_output_format_unless_overridden() {
        let request = Sts::default().request(sample());
        assert_eq!(request.options.output_format, Some(OutputFormat::Mp3_44100_128));

        let request = Sts::default()
            .options(SpeechToSpeechOptions {
                output_format: Some(OutputFormat::Mp3_44100_192),
                ..Default::default()
            })
            .request(sample());
        assert_eq!(request.options.output_format, Some(OutputFormat::Mp3_44100_192));
    }

    #[tokio::test]
    async fn every_wrapper_fails_without_api_key() {
        let provider = unset_provider();

        let err = provider.tts("multilingual_v2", "aria").synthesize("hi").await;
        assert!(matches!(err, Err(Error::MissingApiKey(ref v)) if v == UNSET));

        let err = provider.sts(DEFAULT_STS_MODEL, "aria").convert(sample()).await;
        assert!(matches!(err, Err(Error::MissingApiKey(_))));

        let err = provider.isolation().isolate(sample()).await;
        assert!(matches!(err, Err(Error::MissingApiKey(_))));
    }
}
