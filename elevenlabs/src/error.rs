//! Error types for the ElevenLabs API client.

use thiserror::Error;

/// Vendor status strings carried in `detail.status`.
pub mod status {
    pub const INVALID_API_KEY: &str = "invalid_api_key";
    pub const QUOTA_EXCEEDED: &str = "quota_exceeded";
    pub const VOICE_NOT_FOUND: &str = "voice_not_found";
    pub const MODEL_NOT_FOUND: &str = "model_not_found";
    pub const TOO_MANY_CONCURRENT_REQUESTS: &str = "too_many_concurrent_requests";
    pub const SYSTEM_BUSY: &str = "system_busy";
}

/// Result type alias for ElevenLabs operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for ElevenLabs API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The API key environment variable is absent or empty.
    #[error("{0} is not set")]
    MissingApiKey(String),

    /// API error returned by ElevenLabs.
    #[error("elevenlabs: {message} (http={http_status}, status={status})")]
    Api {
        http_status: u16,
        status: String,
        message: String,
        request_id: Option<String>,
    },

    /// HTTP request error.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Other error.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Creates a new API error.
    pub fn api(http_status: u16, status: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Api {
            http_status,
            status: status.into(),
            message: message.into(),
            request_id: None,
        }
    }

    /// Returns the vendor request ID, if the server sent one.
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Error::Api { request_id, .. } => request_id.as_deref(),
            _ => None,
        }
    }

    /// Returns the HTTP status of an API error.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Error::Api { http_status, .. } => Some(*http_status),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns true if the API key was missing or rejected.
    pub fn is_unauthorized(&self) -> bool {
        match self {
            Error::MissingApiKey(_) => true,
            Error::Api {
                http_status,
                status,
                ..
            } => *http_status == 401 || status == status::INVALID_API_KEY,
            _ => false,
        }
    }

    /// Returns true if this is a rate limit error.
    pub fn is_rate_limit(&self) -> bool {
        match self {
            Error::Api {
                http_status,
                status,
                ..
            } => {
                *http_status == 429
                    || status == status::TOO_MANY_CONCURRENT_REQUESTS
                    || status == status::SYSTEM_BUSY
            }
            _ => false,
        }
    }

    /// Returns true if the account ran out of character quota.
    pub fn is_quota_exceeded(&self) -> bool {
        matches!(self, Error::Api { status, .. } if status == status::QUOTA_EXCEEDED)
    }

    /// Returns true if the voice or model does not exist.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Api {
                http_status,
                status,
                ..
            } => {
                *http_status == 404
                    || status == status::VOICE_NOT_FOUND
                    || status == status::MODEL_NOT_FOUND
            }
            _ => false,
        }
    }

    /// Returns true if the request body failed validation.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Api { http_status: 400 | 422, .. })
    }

    /// Returns true if this is a server-side error.
    pub fn is_server_error(&self) -> bool {
        matches!(self, Error::Api { http_status, .. } if *http_status >= 500)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_api_key_message_names_variable() {
        let err = Error::MissingApiKey("ELEVENLABS_API_KEY".to_string());
        assert_eq!(err.to_string(), "ELEVENLABS_API_KEY is not set");
        assert!(err.is_unauthorized());
        assert_eq!(err.http_status(), None);
    }

    #[test]
    fn classifies_api_errors() {
        assert!(Error::api(401, "", "bad key").is_unauthorized());
        assert!(Error::api(400, status::INVALID_API_KEY, "bad key").is_unauthorized());
        assert!(Error::api(429, "", "slow down").is_rate_limit());
        assert!(Error::api(429, status::SYSTEM_BUSY, "busy").is_rate_limit());
        assert!(Error::api(401, status::QUOTA_EXCEEDED, "no credits").is_quota_exceeded());
        assert!(Error::api(400, status::VOICE_NOT_FOUND, "voice").is_not_found());
        assert!(Error::api(422, "", "text: field required").is_validation());
        assert!(Error::api(503, "", "unavailable").is_server_error());

        let err = Error::api(500, "", "boom");
        assert!(!err.is_rate_limit());
        assert!(!err.is_validation());
        assert_eq!(err.http_status(), Some(500));
    }

    #[test]
    fn request_id_only_on_api_errors() {
        let err = Error::Api {
            http_status: 400,
            status: String::new(),
            message: "x".to_string(),
            request_id: Some("req-1".to_string()),
        };
        assert_eq!(err.request_id(), Some("req-1"));
        assert_eq!(Error::Other("x".to_string()).request_id(), None);
    }
}
