//! Common types for the ElevenLabs API.

use std::fmt;

use serde::{Deserialize, Serialize};

// ==================== Output Format ====================

/// Output audio format, sent as the `output_format` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OutputFormat {
    #[serde(rename = "mp3_22050_32")]
    Mp3_22050_32,
    #[serde(rename = "mp3_44100_32")]
    Mp3_44100_32,
    #[serde(rename = "mp3_44100_64")]
    Mp3_44100_64,
    #[serde(rename = "mp3_44100_96")]
    Mp3_44100_96,
    /// MP3, 44.1kHz, 128kbps.
    #[default]
    #[serde(rename = "mp3_44100_128")]
    Mp3_44100_128,
    /// MP3, 44.1kHz, 192kbps. Requires a Creator tier subscription or above.
    #[serde(rename = "mp3_44100_192")]
    Mp3_44100_192,
    #[serde(rename = "pcm_8000")]
    Pcm8000,
    #[serde(rename = "pcm_16000")]
    Pcm16000,
    #[serde(rename = "pcm_22050")]
    Pcm22050,
    #[serde(rename = "pcm_24000")]
    Pcm24000,
    /// PCM, 44.1kHz. Requires a Pro tier subscription or above.
    #[serde(rename = "pcm_44100")]
    Pcm44100,
    #[serde(rename = "pcm_48000")]
    Pcm48000,
    /// μ-law, 8kHz. Commonly used for Twilio audio inputs.
    #[serde(rename = "ulaw_8000")]
    Ulaw8000,
    #[serde(rename = "alaw_8000")]
    Alaw8000,
    #[serde(rename = "opus_48000_32")]
    Opus48000_32,
    #[serde(rename = "opus_48000_64")]
    Opus48000_64,
    #[serde(rename = "opus_48000_96")]
    Opus48000_96,
    #[serde(rename = "opus_48000_128")]
    Opus48000_128,
    #[serde(rename = "opus_48000_192")]
    Opus48000_192,
}

impl OutputFormat {
    /// Every supported format, in vendor documentation order.
    pub const ALL: &'static [OutputFormat] = &[
        OutputFormat::Mp3_22050_32,
        OutputFormat::Mp3_44100_32,
        OutputFormat::Mp3_44100_64,
        OutputFormat::Mp3_44100_96,
        OutputFormat::Mp3_44100_128,
        OutputFormat::Mp3_44100_192,
        OutputFormat::Pcm8000,
        OutputFormat::Pcm16000,
        OutputFormat::Pcm22050,
        OutputFormat::Pcm24000,
        OutputFormat::Pcm44100,
        OutputFormat::Pcm48000,
        OutputFormat::Ulaw8000,
        OutputFormat::Alaw8000,
        OutputFormat::Opus48000_32,
        OutputFormat::Opus48000_64,
        OutputFormat::Opus48000_96,
        OutputFormat::Opus48000_128,
        OutputFormat::Opus48000_192,
    ];

    /// Returns the wire code, e.g. `mp3_44100_128`.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Mp3_22050_32 => "mp3_22050_32",
            OutputFormat::Mp3_44100_32 => "mp3_44100_32",
            OutputFormat::Mp3_44100_64 => "mp3_44100_64",
            OutputFormat::Mp3_44100_96 => "mp3_44100_96",
            OutputFormat::Mp3_44100_128 => "mp3_44100_128",
            OutputFormat::Mp3_44100_192 => "mp3_44100_192",
            OutputFormat::Pcm8000 => "pcm_8000",
            OutputFormat::Pcm16000 => "pcm_16000",
            OutputFormat::Pcm22050 => "pcm_22050",
            OutputFormat::Pcm24000 => "pcm_24000",
            OutputFormat::Pcm44100 => "pcm_44100",
            OutputFormat::Pcm48000 => "pcm_48000",
            OutputFormat::Ulaw8000 => "ulaw_8000",
            OutputFormat::Alaw8000 => "alaw_8000",
            OutputFormat::Opus48000_32 => "opus_48000_32",
            OutputFormat::Opus48000_64 => "opus_48000_64",
            OutputFormat::Opus48000_96 => "opus_48000_96",
            OutputFormat::Opus48000_128 => "opus_48000_128",
            OutputFormat::Opus48000_192 => "opus_48000_192",
        }
    }

    /// Parses a wire code.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.as_str() == code)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ==================== Voice Settings ====================

/// Per-request overrides of the stored voice settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VoiceSettings {
    /// Stability (0.0-1.0). Lower is more expressive, higher is more monotone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stability: Option<f64>,

    /// How closely to adhere to the original voice (0.0-1.0).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub similarity_boost: Option<f64>,

    /// Style exaggeration (0.0-1.0).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_speaker_boost: Option<bool>,

    /// Speech speed (0.7-1.2, default 1.0).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
}

// ==================== Pronunciation ====================

/// Reference to a stored pronunciation dictionary. Up to 3 per request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PronunciationDictionaryLocator {
    pub pronunciation_dictionary_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_id: Option<String>,
}

// ==================== Text Normalization ====================

/// Controls text normalization such as spelling out numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextNormalization {
    /// The server decides.
    #[default]
    Auto,
    On,
    Off,
}

// ==================== Input File Format ====================

/// Encoding of uploaded audio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputFileFormat {
    /// 16-bit PCM, 16kHz, mono, little-endian. Lower latency.
    #[serde(rename = "pcm_s16le_16")]
    PcmS16le16,
    /// Any other encoded audio.
    #[default]
    Other,
}

impl InputFileFormat {
    /// Returns the wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            InputFileFormat::PcmS16le16 => "pcm_s16le_16",
            InputFileFormat::Other => "other",
        }
    }
}

// ==================== Query ====================

/// Query parameters shared by the audio endpoints.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub(crate) struct Query {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_format: Option<OutputFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_logging: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_format_codes_match_serde() {
        for format in OutputFormat::ALL {
            let json = serde_json::to_string(format).expect("serialize");
            assert_eq!(json, format!("\"{}\"", format.as_str()));
            assert_eq!(OutputFormat::from_code(format.as_str()), Some(*format));
        }
        assert_eq!(OutputFormat::default().to_string(), "mp3_44100_128");
        assert_eq!(OutputFormat::from_code("wav_44100"), None);
    }

    #[test]
    fn voice_settings_omit_unset_fields() {
        let settings = VoiceSettings {
            stability: Some(0.5),
            use_speaker_boost: Some(true),
            ..Default::default()
        };
        let json = serde_json::to_value(&settings).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({"stability": 0.5, "use_speaker_boost": true})
        );
    }

    #[test]
    fn input_file_format_wire_values() {
        let json = serde_json::to_string(&InputFileFormat::PcmS16le16).expect("serialize");
        assert_eq!(json, "\"pcm_s16le_16\"");
        assert_eq!(InputFileFormat::Other.as_str(), "other");
        let n = serde_json::to_string(&TextNormalization::Off).expect("serialize");
        assert_eq!(n, "\"off\"");
    }
}
