//! Speech-to-speech command.

use clap::Args;

use giztoy_elevenlabs::{
    AudioFile, DEFAULT_STS_MODEL, DEFAULT_VOICE, Provider, SpeechToSpeechOptions,
};

use super::tts::save;
use super::{
    create_client, get_context, load_request, output_result, parse_output_format, pick,
    print_verbose,
};
use crate::Cli;

/// Re-voice recorded speech with another voice.
///
/// Extra options (voice_settings, seed, file_format) can be loaded with -f.
#[derive(Args)]
pub struct StsCommand {
    /// Source audio file
    audio: String,

    /// Model name or ID (e.g., eleven_multilingual_sts_v2)
    #[arg(short = 'm', long)]
    model: Option<String>,

    /// Voice name or ID (e.g., aria)
    #[arg(short = 'V', long)]
    voice: Option<String>,

    /// Output format code (default: mp3_44100_128)
    #[arg(long)]
    output_format: Option<String>,

    /// Strip background noise before conversion
    #[arg(long)]
    remove_background_noise: bool,
}

impl StsCommand {
    pub async fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        let ctx = get_context(cli)?;

        let mut options: SpeechToSpeechOptions = match &cli.input {
            Some(path) => load_request(path)?,
            None => SpeechToSpeechOptions::default(),
        };
        if self.remove_background_noise {
            options.remove_background_noise = Some(true);
        }
        let ctx_format = ctx.as_ref().map(|c| c.output_format.as_str());
        if let Some(code) = pick(&[self.output_format.as_deref()]) {
            options.output_format = Some(parse_output_format(code)?);
        } else if options.output_format.is_none() {
            if let Some(code) = pick(&[ctx_format]) {
                options.output_format = Some(parse_output_format(code)?);
            }
        }

        // Context default_model targets text-to-speech, so it is not used here
        let model = self.model.as_deref().unwrap_or(DEFAULT_STS_MODEL);
        let ctx_voice = ctx.as_ref().map(|c| c.default_voice.as_str());
        let voice = pick(&[self.voice.as_deref(), ctx_voice]).unwrap_or(DEFAULT_VOICE);

        let sts = Provider::new().sts(model, voice).options(options);
        let audio = AudioFile::from_path(&self.audio).await?;

        if let Some(c) = &ctx {
            print_verbose(cli, &format!("Using context: {}", c.name));
        }
        print_verbose(cli, &format!("Model: {}", sts.model_id()));
        print_verbose(cli, &format!("Voice: {}", sts.voice_id()));
        print_verbose(cli, &format!("Input: {} ({})", audio.name(), audio.content_type()));

        let client = create_client(ctx.as_ref())?;
        let file = sts.convert_with(&client, audio).await?;

        let output_path = cli.output.as_deref().unwrap_or(file.name());
        save(&file, output_path)?;

        let result = serde_json::json!({
            "file": file.name(),
            "content_type": file.content_type(),
            "size": file.len(),
            "model_id": sts.model_id(),
            "voice_id": sts.voice_id(),
            "output_file": output_path,
        });
        output_result(&result, None, cli.json)
    }
}
