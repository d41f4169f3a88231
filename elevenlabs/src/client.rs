//! ElevenLabs API client.

use std::{sync::Arc, time::Duration};

use tracing::debug;

use super::{
    audio_isolation::AudioIsolationService,
    error::{Error, Result},
    http::HttpClient,
    speech_to_speech::SpeechToSpeechService,
    text_to_speech::TextToSpeechService,
};

/// Default ElevenLabs API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.elevenlabs.io";

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "ELEVENLABS_API_KEY";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);

/// ElevenLabs API client.
///
/// Cloning is cheap; clones share one connection pool.
///
/// # Example
///
/// ```rust,no_run
/// use giztoy_elevenlabs::{Client, TextToSpeechRequest, VOICE_GEORGE, MODEL_FLASH_V2_5};
///
/// # async fn run() -> giztoy_elevenlabs::Result<()> {
/// let client = Client::new("your-api-key")?;
///
/// let request = TextToSpeechRequest::new("Hello!", MODEL_FLASH_V2_5);
/// let audio = client
///     .text_to_speech()
///     .convert(VOICE_GEORGE, &request)
///     .await?
///     .into_file("speech.mp3", "audio/mpeg")
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Client {
    http: Arc<HttpClient>,
}

impl Client {
    /// Creates a new client with the default base URL.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        ClientBuilder::new(api_key).build()
    }

    /// Creates a new client builder for more configuration options.
    pub fn builder(api_key: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(api_key)
    }

    /// Creates a client from `ELEVENLABS_API_KEY`.
    ///
    /// Fails with [`Error::MissingApiKey`] if the variable is unset or empty.
    pub fn from_env() -> Result<Self> {
        Self::from_env_var(API_KEY_ENV)
    }

    /// Creates a client from the named environment variable.
    pub fn from_env_var(name: &str) -> Result<Self> {
        ClientBuilder::from_env_var(name)?.build()
    }

    /// Returns the configured base URL.
    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    /// Returns the text-to-speech service.
    pub fn text_to_speech(&self) -> TextToSpeechService {
        TextToSpeechService::new(self.http.clone())
    }

    /// Returns the speech-to-speech (voice changer) service.
    pub fn speech_to_speech(&self) -> SpeechToSpeechService {
        SpeechToSpeechService::new(self.http.clone())
    }

    /// Returns the audio isolation service.
    pub fn audio_isolation(&self) -> AudioIsolationService {
        AudioIsolationService::new(self.http.clone())
    }

    /// Returns a reference to the internal HTTP client.
    pub fn http(&self) -> &Arc<HttpClient> {
        &self.http
    }
}

/// Builder for creating an ElevenLabs API client.
pub struct ClientBuilder {
    api_key: String,
    base_url: String,
    timeout: Duration,
}

impl ClientBuilder {
    /// Creates a new client builder.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Creates a builder with the API key read from the named environment variable.
    pub fn from_env_var(name: &str) -> Result<Self> {
        match std::env::var(name) {
            Ok(key) if !key.is_empty() => Ok(Self::new(key)),
            _ => {
                debug!(var = name, "elevenlabs: api key not set");
                Err(Error::MissingApiKey(name.to_string()))
            }
        }
    }

    /// Sets a custom base URL for the API.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builds the client.
    pub fn build(self) -> Result<Client> {
        if self.api_key.is_empty() {
            return Err(Error::Config("api_key must be non-empty".to_string()));
        }
        if self.base_url.is_empty() {
            return Err(Error::Config("base_url must be non-empty".to_string()));
        }

        let http = HttpClient::new(self.base_url, &self.api_key, self.timeout)?;

        Ok(Client {
            http: Arc::new(http),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_rejects_empty_api_key() {
        let err = Client::new("").err().expect("empty key");
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn build_rejects_empty_base_url() {
        let err = Client::builder("key").base_url("").build().err().expect("empty url");
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn builder_sets_base_url() {
        let client = Client::builder("key")
            .base_url("http://localhost:8080/")
            .timeout(Duration::from_secs(5))
            .build()
            .expect("client");
        assert_eq!(client.base_url(), "http://localhost:8080");
        assert_eq!(Client::new("key").expect("client").base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn api_key_must_be_a_valid_header() {
        tokio_test::assert_ok!(Client::new("sk_0123456789abcdef"));
        let err = tokio_test::assert_err!(Client::new("bad\nkey"));
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn from_env_var_fails_fast_when_unset() {
        let err = Client::from_env_var("GIZTOY_ELEVENLABS_TEST_NEVER_SET")
            .err()
            .expect("missing key");
        assert!(
            matches!(err, Error::MissingApiKey(ref v) if v == "GIZTOY_ELEVENLABS_TEST_NEVER_SET")
        );
        assert_eq!(err.to_string(), "GIZTOY_ELEVENLABS_TEST_NEVER_SET is not set");
    }
}
