//! Model and voice lookup tables for the ElevenLabs API.

// ==================== Models ====================

/// eleven_multilingual_v2, most lifelike, 29 languages.
pub const MODEL_MULTILINGUAL_V2: &str = "eleven_multilingual_v2";

/// eleven_flash_v2_5, ultra-low latency, 32 languages.
pub const MODEL_FLASH_V2_5: &str = "eleven_flash_v2_5";

/// eleven_flash_v2, ultra-low latency, English only.
pub const MODEL_FLASH_V2: &str = "eleven_flash_v2";

/// eleven_turbo_v2, low latency, English only.
pub const MODEL_TURBO_V2: &str = "eleven_turbo_v2";

/// eleven_turbo_v2_5, low latency, 32 languages.
pub const MODEL_TURBO_V2_5: &str = "eleven_turbo_v2_5";

/// eleven_multilingual_sts_v2, speech-to-speech, multilingual.
pub const MODEL_MULTILINGUAL_STS_V2: &str = "eleven_multilingual_sts_v2";

/// eleven_english_sts_v2, speech-to-speech, English only.
pub const MODEL_ENGLISH_STS_V2: &str = "eleven_english_sts_v2";

/// Friendly model name to vendor model ID.
pub const MODELS: &[(&str, &str)] = &[
    ("multilingual_v2", MODEL_MULTILINGUAL_V2),
    ("flash_v2_5", MODEL_FLASH_V2_5),
    ("flash_v2", MODEL_FLASH_V2),
    ("turbo_v2", MODEL_TURBO_V2),
    ("turbo_v2_5", MODEL_TURBO_V2_5),
    ("multilingual_sts_v2", MODEL_MULTILINGUAL_STS_V2),
    ("english_sts_v2", MODEL_ENGLISH_STS_V2),
];

// ==================== Voices ====================

pub const VOICE_ALICE: &str = "Xb7hH8MSUJpSbSDYk0k2";
pub const VOICE_ARIA: &str = "9BWtsMINqrJLrRacOk9x";
pub const VOICE_BILL: &str = "pqHfZKP75CvOlQylNhV4";
pub const VOICE_BRIAN: &str = "nPczCjzI2devNBz1zQrb";
pub const VOICE_CALLUM: &str = "N2lVS1w4EtoT3dr4eOWO";
pub const VOICE_CHARLIE: &str = "IKne3meq5aSn9XLyUdCD";
pub const VOICE_CHARLOTTE: &str = "XB0fDUnXU5powFXDhCwa";
pub const VOICE_CHRIS: &str = "iP95p4xoKVk53GoZ742B";
pub const VOICE_DANIEL: &str = "onwK4e9ZLuTAKqWW03F9";
pub const VOICE_ERIC: &str = "cjVigY5qzO86Huf0OWal";
pub const VOICE_GEORGE: &str = "JBFqnCBsd6RMkjVDRZzb";
pub const VOICE_JESSICA: &str = "cgSgspJ2msm6clMCkdW9";
pub const VOICE_LAURA: &str = "FGY2WhTYpPnrIDTdsKH5";
pub const VOICE_LIAM: &str = "TX3LPaxmHKxFdv7VOQHJ";
pub const VOICE_LILY: &str = "pFZP5JQG7iQjIQuC4Bku";
pub const VOICE_MATILDA: &str = "XrExE9yKIg1WjnnlVkGX";
pub const VOICE_RIVER: &str = "SAz9YHcvj6GT2YYXdXww";
pub const VOICE_ROGER: &str = "CwhRBWXzGAHq8TQ4Fs17";
pub const VOICE_SARAH: &str = "EXAVITQu4vr4xnSDxMaL";
pub const VOICE_WILL: &str = "bIHbv24MWmeRgasZH58o";

/// Friendly voice name to vendor voice ID.
pub const VOICES: &[(&str, &str)] = &[
    ("alice", VOICE_ALICE),
    ("aria", VOICE_ARIA),
    ("bill", VOICE_BILL),
    ("brian", VOICE_BRIAN),
    ("callum", VOICE_CALLUM),
    ("charlie", VOICE_CHARLIE),
    ("charlotte", VOICE_CHARLOTTE),
    ("chris", VOICE_CHRIS),
    ("daniel", VOICE_DANIEL),
    ("eric", VOICE_ERIC),
    ("george", VOICE_GEORGE),
    ("jessica", VOICE_JESSICA),
    ("laura", VOICE_LAURA),
    ("liam", VOICE_LIAM),
    ("lily", VOICE_LILY),
    ("matilda", VOICE_MATILDA),
    ("river", VOICE_RIVER),
    ("roger", VOICE_ROGER),
    ("sarah", VOICE_SARAH),
    ("will", VOICE_WILL),
];

// ==================== Defaults ====================

/// Default voice name.
pub const DEFAULT_VOICE: &str = "aria";

/// Default text-to-speech model name.
pub const DEFAULT_TTS_MODEL: &str = "multilingual_v2";

/// Default speech-to-speech model ID.
pub const DEFAULT_STS_MODEL: &str = MODEL_MULTILINGUAL_STS_V2;

// ==================== Lookup ====================

/// Looks up a voice ID by friendly name.
pub fn voice_id(name: &str) -> Option<&'static str> {
    lookup(VOICES, name)
}

/// Looks up a model ID by friendly name.
pub fn model_id(name: &str) -> Option<&'static str> {
    lookup(MODELS, name)
}

/// Maps a friendly voice name to its ID; anything else is treated as a raw voice ID.
pub fn resolve_voice(name_or_id: &str) -> &str {
    voice_id(name_or_id).unwrap_or(name_or_id)
}

/// Maps a friendly model name to its ID; anything else is treated as a raw model ID.
pub fn resolve_model(name_or_id: &str) -> &str {
    model_id(name_or_id).unwrap_or(name_or_id)
}

fn lookup(table: &'static [(&'static str, &'static str)], name: &str) -> Option<&'static str> {
    table.iter().find(|(n, _)| *n == name).map(|(_, id)| *id)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn every_voice_has_an_id() {
        assert_eq!(VOICES.len(), 20);
        for (name, _) in VOICES {
            let id = voice_id(name).unwrap_or_default();
            assert!(!id.is_empty(), "voice {name} has no id");
        }
    }

    #[test]
    fn every_model_has_an_id() {
        assert_eq!(MODELS.len(), 7);
        for (name, id) in MODELS {
            assert_eq!(model_id(name), Some(*id));
            assert!(id.starts_with("eleven_"), "unexpected model id {id}");
        }
    }

    #[test]
    fn names_and_ids_are_unique() {
        let names: HashSet<_> = VOICES.iter().map(|(n, _)| n).collect();
        let ids: HashSet<_> = VOICES.iter().map(|(_, id)| id).collect();
        assert_eq!(names.len(), VOICES.len());
        assert_eq!(ids.len(), VOICES.len());

        let models: HashSet<_> = MODELS.iter().map(|(n, _)| n).collect();
        assert_eq!(models.len(), MODELS.len());
    }

    #[test]
    fn resolve_passes_unknown_values_through() {
        assert_eq!(resolve_voice("george"), VOICE_GEORGE);
        assert_eq!(resolve_voice("custom-voice-id"), "custom-voice-id");
        assert_eq!(resolve_model("turbo_v2_5"), MODEL_TURBO_V2_5);
        assert_eq!(resolve_model("eleven_v3"), "eleven_v3");
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(voice_id("Aria"), None);
        assert_eq!(voice_id("aria"), Some(VOICE_ARIA));
    }

    #[test]
    fn defaults_resolve() {
        assert_eq!(resolve_voice(DEFAULT_VOICE), VOICE_ARIA);
        assert_eq!(resolve_model(DEFAULT_TTS_MODEL), MODEL_MULTILINGUAL_V2);
        assert_eq!(resolve_model(DEFAULT_STS_MODEL), MODEL_MULTILINGUAL_STS_V2);
    }
}
