//! In-memory audio files and streamed response bodies.

use std::{
    fmt,
    path::Path,
    pin::Pin,
    task::{Context, Poll},
};

use bytes::{Bytes, BytesMut};
use futures::{Stream, StreamExt};
use tracing::debug;

use super::error::Result;

/// MIME type of every file returned by the convenience wrappers.
pub const MIME_AUDIO_MPEG: &str = "audio/mpeg";

/// Fallback MIME type for unrecognized uploads.
pub const MIME_OCTET_STREAM: &str = "application/octet-stream";

/// A named, fully buffered audio file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioFile {
    name: String,
    content_type: String,
    data: Bytes,
}

impl AudioFile {
    /// Creates a file from raw bytes.
    pub fn new(
        name: impl Into<String>,
        content_type: impl Into<String>,
        data: impl Into<Bytes>,
    ) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            data: data.into(),
        }
    }

    /// Creates an `audio/mpeg` file.
    pub fn mp3(name: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self::new(name, MIME_AUDIO_MPEG, data)
    }

    /// Reads a file from disk, guessing the content type from its extension.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = tokio::fs::read(path).await?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "audio".to_string());
        let content_type = path
            .extension()
            .and_then(|e| e.to_str())
            .map(guess_content_type)
            .unwrap_or(MIME_OCTET_STREAM);

        Ok(Self::new(name, content_type, data))
    }

    /// File name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// MIME type.
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// File contents.
    pub fn data(&self) -> &Bytes {
        &self.data
    }

    /// Size in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the file has no contents.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Consumes the file, returning its contents.
    pub fn into_bytes(self) -> Bytes {
        self.data
    }

    /// Writes the contents to disk.
    pub async fn write_to(&self, path: impl AsRef<Path>) -> Result<()> {
        tokio::fs::write(path, &self.data).await?;
        Ok(())
    }
}

/// Guesses a MIME type from a file extension.
pub fn guess_content_type(extension: &str) -> &'static str {
    match extension.to_lowercase().as_str() {
        "mp3" | "mpeg" => MIME_AUDIO_MPEG,
        "wav" => "audio/wav",
        "flac" => "audio/flac",
        "ogg" | "opus" => "audio/ogg",
        "m4a" | "mp4" => "audio/mp4",
        "webm" => "audio/webm",
        "pcm" | "raw" => "audio/pcm",
        _ => MIME_OCTET_STREAM,
    }
}

/// The streamed audio body of a single API call.
pub struct AudioStream {
    inner: Pin<Box<dyn Stream<Item = Result<Bytes>> + Send>>,
    request_id: Option<String>,
    content_type: Option<String>,
}

impl AudioStream {
    pub(crate) fn new<S>(
        stream: S,
        request_id: Option<String>,
        content_type: Option<String>,
    ) -> Self
    where
        S: Stream<Item = Result<Bytes>> + Send + 'static,
    {
        Self {
            inner: Box::pin(stream),
            request_id,
            content_type,
        }
    }

    /// Vendor request ID from the `request-id` response header.
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// Upstream `Content-Type`, as reported by the server.
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// Drains every chunk into a single buffer and wraps it as a named file.
    ///
    /// The first chunk error aborts the read and is returned as-is.
    pub async fn into_file(mut self, name: &str, content_type: &str) -> Result<AudioFile> {
        let mut buf = BytesMut::new();
        let mut chunks = 0usize;

        while let Some(chunk) = self.inner.next().await {
            buf.extend_from_slice(&chunk?);
            chunks += 1;
        }

        debug!(
            file = name,
            chunks,
            bytes = buf.len(),
            request_id = ?self.request_id,
            "elevenlabs: buffered audio"
        );

        Ok(AudioFile::new(name, content_type, buf.freeze()))
    }
}

impl Stream for AudioStream {
    type Item = Result<Bytes>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.inner.as_mut().poll_next(cx)
    }
}

impl fmt::Debug for AudioStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AudioStream")
            .field("request_id", &self.request_id)
            .field("content_type", &self.content_type)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use futures::stream;

    use super::*;
    use crate::error::Error;

    fn chunks(parts: Vec<Result<Bytes>>) -> AudioStream {
        AudioStream::new(stream::iter(parts), Some("req-1".to_string()), None)
    }

    #[tokio::test]
    async fn into_file_concatenates_chunks_in_order() {
        let stream = chunks(vec![
            Ok(Bytes::from_static(b"ID3")),
            Ok(Bytes::from_static(b"\x01\x02")),
            Ok(Bytes::new()),
            Ok(Bytes::from_static(b"\x03")),
        ]);
        assert_eq!(stream.request_id(), Some("req-1"));

        let file = stream.into_file("speech.mp3", MIME_AUDIO_MPEG).await.expect("into_file");
        assert_eq!(file.name(), "speech.mp3");
        assert_eq!(file.content_type(), "audio/mpeg");
        assert_eq!(&file.data()[..], b"ID3\x01\x02\x03");
        assert_eq!(file.len(), 6);
    }

    #[tokio::test]
    async fn into_file_of_empty_stream_is_empty_file() {
        let file = chunks(vec![]).into_file("x.mp3", MIME_AUDIO_MPEG).await.expect("into_file");
        assert!(file.is_empty());
    }

    #[tokio::test]
    async fn into_file_propagates_first_error() {
        let stream = chunks(vec![
            Ok(Bytes::from_static(b"abc")),
            Err(Error::Other("connection reset".to_string())),
            Ok(Bytes::from_static(b"never read")),
        ]);
        let err = stream.into_file("x.mp3", MIME_AUDIO_MPEG).await.expect_err("error");
        assert_eq!(err.to_string(), "connection reset");
    }

    #[tokio::test]
    async fn audio_stream_is_a_stream() {
        let mut stream = chunks(vec![Ok(Bytes::from_static(b"a")), Ok(Bytes::from_static(b"b"))]);
        let mut seen = Vec::new();
        while let Some(chunk) = stream.next().await {
            seen.extend_from_slice(&chunk.expect("chunk"));
        }
        assert_eq!(seen, b"ab");
    }

    #[tokio::test]
    async fn from_path_and_write_to() {
        let dir = tempfile::tempdir().expect("tempdir");
        let src = dir.path().join("voice.WAV");
        tokio::fs::write(&src, b"RIFF").await.expect("write");

        let file = AudioFile::from_path(&src).await.expect("read");
        assert_eq!(file.name(), "voice.WAV");
        assert_eq!(file.content_type(), "audio/wav");

        let dst = dir.path().join("copy.bin");
        file.write_to(&dst).await.expect("write_to");
        assert_eq!(tokio::fs::read(&dst).await.expect("read back"), b"RIFF");
    }

    #[test]
    fn guesses_content_types() {
        assert_eq!(guess_content_type("mp3"), "audio/mpeg");
        assert_eq!(guess_content_type("Opus"), "audio/ogg");
        assert_eq!(guess_content_type("xyz"), MIME_OCTET_STREAM);
    }

    #[test]
    fn mp3_constructor_sets_mime() {
        let file = AudioFile::mp3("a.mp3", vec![1u8, 2, 3]);
        assert_eq!(file.content_type(), MIME_AUDIO_MPEG);
        assert_eq!(file.clone().into_bytes(), Bytes::from_static(&[1, 2, 3]));
    }
}
