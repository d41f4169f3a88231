//! HTTP client implementation for the ElevenLabs API.

use std::time::Duration;

use futures::StreamExt;
use reqwest::{
    Client as ReqwestClient, RequestBuilder, Response, StatusCode, Url,
    header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT},
    multipart,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{
    error::{Error, Result},
    file::AudioStream,
};

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "xi-api-key";

/// Response header carrying the vendor request ID.
pub const REQUEST_ID_HEADER: &str = "request-id";

const USER_AGENT_VALUE: &str = "giztoy-elevenlabs-rust/1.0";

/// HTTP client for the ElevenLabs API.
#[derive(Debug)]
pub struct HttpClient {
    client: ReqwestClient,
    base_url: String,
    base: Url,
    headers: HeaderMap,
}

impl HttpClient {
    /// Creates a new HTTP client.
    pub fn new(base_url: String, api_key: &str, timeout: Duration) -> Result<Self> {
        let base_url = base_url.trim_end_matches('/').to_string();
        let base = Url::parse(&base_url)
            .map_err(|e| Error::Config(format!("invalid base url {base_url:?}: {e}")))?;
        if base.cannot_be_a_base() {
            return Err(Error::Config(format!("invalid base url {base_url:?}")));
        }

        let client = ReqwestClient::builder().timeout(timeout).build()?;

        let mut api_key = HeaderValue::from_str(api_key)
            .map_err(|e| Error::Config(format!("invalid api key: {e}")))?;
        api_key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, api_key);
        headers.insert(ACCEPT, HeaderValue::from_static("audio/*"));
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        Ok(Self {
            client,
            base_url,
            base,
            headers,
        })
    }

    /// Returns the base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds the URL for an endpoint from its path segments.
    ///
    /// Each segment is percent-encoded, so caller-supplied IDs cannot change
    /// the path. Empty, `.` and `..` segments are rejected.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        if let Some(bad) = segments.iter().find(|s| matches!(**s, "" | "." | "..")) {
            return Err(Error::Config(format!("invalid path segment {bad:?}")));
        }

        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| Error::Config(format!("invalid base url {:?}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Posts a JSON body and returns the audio response as a stream.
    pub async fn post_json<Q, B>(
        &self,
        segments: &[&str],
        query: &Q,
        body: &B,
    ) -> Result<AudioStream>
    where
        Q: Serialize + ?Sized,
        B: Serialize + ?Sized,
    {
        let url = self.endpoint(segments)?;
        let request = self.post(url.clone()).query(query).json(body);
        self.send(&url, request).await
    }

    /// Posts a multipart form and returns the audio response as a stream.
    pub async fn post_multipart<Q>(
        &self,
        segments: &[&str],
        query: &Q,
        form: multipart::Form,
    ) -> Result<AudioStream>
    where
        Q: Serialize + ?Sized,
    {
        let url = self.endpoint(segments)?;
        let request = self.post(url.clone()).query(query).multipart(form);
        self.send(&url, request).await
    }

    fn post(&self, url: Url) -> RequestBuilder {
        self.client.post(url).headers(self.headers.clone())
    }

    /// Sends a single request. Never retried.
    async fn send(&self, url: &Url, request: RequestBuilder) -> Result<AudioStream> {
        let path = url.path();
        debug!(path, "elevenlabs: sending request");

        let response = request.send().await?;
        let status = response.status();
        let request_id = header_string(&response, REQUEST_ID_HEADER);

        debug!(path, status = status.as_u16(), request_id = ?request_id, "elevenlabs: response");

        if !status.is_success() {
            return Err(Self::error_from_response(response, request_id).await);
        }

        let content_type = header_string(&response, reqwest::header::CONTENT_TYPE.as_str());
        let body = response.bytes_stream().map(|r| r.map_err(Error::from));

        Ok(AudioStream::new(body, request_id, content_type))
    }

    /// Reads an error response and turns it into an [`Error::Api`].
    async fn error_from_response(response: Response, request_id: Option<String>) -> Error {
        let http_status = response.status().as_u16();
        match response.bytes().await {
            Ok(body) => {
                let mut err = parse_error(&body, http_status);
                if let Error::Api { request_id: id, .. } = &mut err {
                    *id = request_id;
                }
                err
            }
            Err(e) => Error::Http(e),
        }
    }
}

fn header_string(response: &Response, name: &str) -> Option<String> {
    response
        .headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

/// Error body shapes returned by the API.
///
/// `detail` is an object for most failures, a list for request validation
/// errors, and occasionally a bare string.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: ErrorDetail,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ErrorDetail {
    Validation(Vec<ValidationItem>),
    Status {
        #[serde(default)]
        status: String,
        #[serde(default)]
        message: String,
    },
    Message(String),
}

#[derive(Debug, Deserialize)]
struct ValidationItem {
    #[serde(default)]
    loc: Vec<serde_json::Value>,
    #[serde(default)]
    msg: String,
}

/// Parses an error response body.
pub(crate) fn parse_error(body: &[u8], http_status: u16) -> Error {
    if body.trim_ascii().is_empty() {
        let reason = StatusCode::from_u16(http_status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or("unknown error");
        return Error::api(http_status, "", reason);
    }

    let Ok(parsed) = serde_json::from_slice::<ErrorBody>(body) else {
        return Error::api(http_status, "", String::from_utf8_lossy(body).trim());
    };

    match parsed.detail {
        ErrorDetail::Status { status, message } => {
            let message = if message.is_empty() { status.clone() } else { message };
            Error::api(http_status, status, message)
        }
        ErrorDetail::Validation(items) => {
            let message = items
                .iter()
                .map(|item| {
                    let loc: Vec<String> = item
                        .loc
                        .iter()
                        .map(|v| match v {
                            serde_json::Value::String(s) => s.clone(),
                            other => other.to_string(),
                        })
                        .collect();
                    if loc.is_empty() {
                        item.msg.clone()
                    } else {
                        format!("{}: {}", loc.join("."), item.msg)
                    }
                })
                .collect::<Vec<_>>()
                .join("; ");
            Error::api(http_status, "validation_error", message)
        }
        ErrorDetail::Message(message) => Error::api(http_status, "", message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api_parts(err: Error) -> (u16, String, String) {
        match err {
            Error::Api {
                http_status,
                status,
                message,
                ..
            } => (http_status, status, message),
            other => panic!("expected api error, got {other:?}"),
        }
    }

    #[test]
    fn parses_status_detail() {
        let body = serde_json::json!({
            "detail": {
                "status": "voice_not_found",
                "message": "A voice with voice_id x does not exist.",
            }
        })
        .to_string();
        let (http, status, message) = api_parts(parse_error(body.as_bytes(), 400));
        assert_eq!(http, 400);
        assert_eq!(status, "voice_not_found");
        assert_eq!(message, "A voice with voice_id x does not exist.");
    }

    #[test]
    fn parses_validation_detail() {
        let body = serde_json::json!({
            "detail": [
                {"loc": ["body", "text"], "msg": "field required", "type": "value_error.missing"},
                {"loc": ["query", "output_format", 0], "msg": "bad"},
            ]
        })
        .to_string();
        let (http, status, message) = api_parts(parse_error(body.as_bytes(), 422));
        assert_eq!(http, 422);
        assert_eq!(status, "validation_error");
        assert_eq!(message, "body.text: field required; query.output_format.0: bad");
    }

    #[test]
    fn parses_string_detail() {
        let (_, status, message) = api_parts(parse_error(br#"{"detail":"Not Found"}"#, 404));
        assert!(status.is_empty());
        assert_eq!(message, "Not Found");
    }

    #[test]
    fn falls_back_to_raw_body() {
        let (http, _, message) = api_parts(parse_error(b"upstream timeout\n", 504));
        assert_eq!(http, 504);
        assert_eq!(message, "upstream timeout");
    }

    #[test]
    fn status_without_message_uses_status() {
        let body = br#"{"detail":{"status":"quota_exceeded"}}"#;
        let err = parse_error(body, 401);
        assert!(err.is_quota_exceeded());
        assert_eq!(api_parts(err).2, "quota_exceeded");
    }

    #[test]
    fn rejects_api_key_with_control_characters() {
        let err = HttpClient::new(
            "https://api.elevenlabs.io/".to_string(),
            "bad\nkey",
            Duration::from_secs(1),
        )
        .err()
        .expect("invalid header value");
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn empty_body_uses_reason_phrase() {
        let (http, status, message) = api_parts(parse_error(b"", 404));
        assert_eq!(http, 404);
        assert!(status.is_empty());
        assert_eq!(message, "Not Found");

        let (_, _, message) = api_parts(parse_error(b" \n", 599));
        assert_eq!(message, "unknown error");
    }

    fn local() -> HttpClient {
        HttpClient::new("http://127.0.0.1:1/".to_string(), "key", Duration::from_secs(1))
            .expect("client")
    }

    #[test]
    fn endpoint_encodes_segments() {
        let http = local();
        let url = http
            .endpoint(&["v1", "text-to-speech", "JBFqnCBsd6RMkjVDRZzb", "stream"])
            .expect("url");
        assert_eq!(
            url.as_str(),
            "http://127.0.0.1:1/v1/text-to-speech/JBFqnCBsd6RMkjVDRZzb/stream"
        );

        let url = http
            .endpoint(&["v1", "text-to-speech", "../../audio-isolation"])
            .expect("url");
        assert_eq!(url.path(), "/v1/text-to-speech/..%2F..%2Faudio-isolation");

        let url = http.endpoint(&["v1", "text-to-speech", "a?b#c"]).expect("url");
        assert_eq!(url.path(), "/v1/text-to-speech/a%3Fb%23c");
        assert!(url.query().is_none());
    }

    #[test]
    fn endpoint_rejects_dot_segments() {
        let http = local();
        for bad in ["", ".", ".."] {
            let err = http.endpoint(&["v1", "text-to-speech", bad]).expect_err("rejected");
            assert!(matches!(err, Error::Config(_)));
        }
    }

    #[test]
    fn endpoint_keeps_base_path() {
        let http = HttpClient::new(
            "http://127.0.0.1:1/proxy/elevenlabs/".to_string(),
            "key",
            Duration::from_secs(1),
        )
        .expect("client");
        let url = http.endpoint(&["v1", "audio-isolation"]).expect("url");
        assert_eq!(url.path(), "/proxy/elevenlabs/v1/audio-isolation");
    }

    #[test]
    fn rejects_unparseable_base_url() {
        let err = HttpClient::new("not a url".to_string(), "key", Duration::from_secs(1))
            .err()
            .expect("invalid base url");
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn trims_trailing_slash_from_base_url() {
        let http = HttpClient::new(
            "http://127.0.0.1:1/".to_string(),
            "key",
            Duration::from_secs(1),
        )
        .expect("client");
        assert_eq!(http.base_url(), "http://127.0.0.1:1");
    }
}
