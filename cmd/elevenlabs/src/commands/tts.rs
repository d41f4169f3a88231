//! Text-to-speech command.

use clap::Args;
use serde::Deserialize;

use giztoy_elevenlabs::{
    AudioFile, DEFAULT_TTS_MODEL, DEFAULT_VOICE, Provider, TextToSpeechOptions,
};

use super::{
    create_client, format_bytes, get_context, load_request, output_bytes, output_result,
    parse_output_format, pick, print_success, print_verbose,
};
use crate::Cli;

/// Convert text to speech.
///
/// Text comes from the positional argument or a request file (-f):
///
/// ```yaml
/// text: Hello there
/// model: flash_v2_5
/// voice: george
/// voice_settings:
///   stability: 0.5
/// output_format: mp3_44100_192
/// ```
#[derive(Args)]
pub struct TtsCommand {
    /// Text to synthesize (alternative to -f file)
    text: Option<String>,

    /// Model name or ID (e.g., multilingual_v2)
    #[arg(short = 'm', long)]
    model: Option<String>,

    /// Voice name or ID (e.g., aria)
    #[arg(short = 'V', long)]
    voice: Option<String>,

    /// Output format code (e.g., mp3_44100_128)
    #[arg(long)]
    output_format: Option<String>,
}

/// Request file for `tts -f`.
#[derive(Debug, Default, Deserialize)]
struct TtsInput {
    #[serde(default)]
    text: String,
    #[serde(default)]
    model: Option<String>,
    #[serde(default)]
    voice: Option<String>,
    #[serde(flatten)]
    options: TextToSpeechOptions,
}

impl TtsCommand {
    pub async fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        let ctx = get_context(cli)?;

        let mut input: TtsInput = match &cli.input {
            Some(path) => load_request(path)?,
            None => TtsInput::default(),
        };
        if let Some(text) = &self.text {
            input.text = text.clone();
        }
        if input.text.trim().is_empty() {
            anyhow::bail!("text is required, pass it as an argument or use -f flag");
        }

        let ctx_model = ctx.as_ref().map(|c| c.default_model.as_str());
        let ctx_voice = ctx.as_ref().map(|c| c.default_voice.as_str());
        let ctx_format = ctx.as_ref().map(|c| c.output_format.as_str());

        let model = pick(&[self.model.as_deref(), input.model.as_deref(), ctx_model])
            .unwrap_or(DEFAULT_TTS_MODEL);
        let voice = pick(&[self.voice.as_deref(), input.voice.as_deref(), ctx_voice])
            .unwrap_or(DEFAULT_VOICE);

        let mut options = input.options;
        if let Some(code) = pick(&[self.output_format.as_deref()]) {
            options.output_format = Some(parse_output_format(code)?);
        } else if options.output_format.is_none() {
            if let Some(code) = pick(&[ctx_format]) {
                options.output_format = Some(parse_output_format(code)?);
            }
        }

        let tts = Provider::new().tts(model, voice).options(options);

        if let Some(c) = &ctx {
            print_verbose(cli, &format!("Using context: {}", c.name));
        }
        print_verbose(cli, &format!("Model: {}", tts.model_id()));
        print_verbose(cli, &format!("Voice: {}", tts.voice_id()));
        print_verbose(cli, &format!("Text length: {} characters", input.text.chars().count()));

        let client = create_client(ctx.as_ref())?;
        let file = tts.synthesize_with(&client, &input.text).await?;

        let output_path = cli.output.as_deref().unwrap_or(file.name());
        save(&file, output_path)?;

        let result = serde_json::json!({
            "file": file.name(),
            "content_type": file.content_type(),
            "size": file.len(),
            "model_id": tts.model_id(),
            "voice_id": tts.voice_id(),
            "output_file": output_path,
        });
        output_result(&result, None, cli.json)
    }
}

/// Writes a returned audio file and reports it.
pub(crate) fn save(file: &AudioFile, path: &str) -> anyhow::Result<()> {
    output_bytes(file.data(), path)?;
    print_success(&format!("Audio saved to: {} ({})", path, format_bytes(file.len())));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use giztoy_elevenlabs::OutputFormat;

    #[test]
    fn request_file_flattens_options() {
        let input: TtsInput = serde_yaml::from_str(concat!(
            "text: Hello\n",
            "voice: george\n",
            "language_code: en\n",
            "output_format: pcm_16000\n",
            "voice_settings:\n",
            "  stability: 0.4\n",
        ))
        .expect("parse");

        assert_eq!(input.text, "Hello");
        assert_eq!(input.voice.as_deref(), Some("george"));
        assert!(input.model.is_none());
        assert_eq!(input.options.language_code.as_deref(), Some("en"));
        assert_eq!(input.options.output_format, Some(OutputFormat::Pcm16000));
        assert_eq!(
            input.options.voice_settings.and_then(|s| s.stability),
            Some(0.4)
        );
    }
}
