//! Audio isolation command.

use clap::Args;

use giztoy_elevenlabs::{AudioFile, AudioIsolationOptions, InputFileFormat, Provider};

use super::tts::save;
use super::{create_client, get_context, output_result, print_verbose};
use crate::Cli;

/// Isolate the voice from background noise, music and ambient sound.
#[derive(Args)]
pub struct IsolateCommand {
    /// Source audio file
    audio: String,

    /// Input is raw 16-bit PCM at 16kHz, mono, little-endian
    #[arg(long)]
    pcm: bool,
}

impl IsolateCommand {
    pub async fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        let ctx = get_context(cli)?;

        let options = AudioIsolationOptions {
            file_format: self.pcm.then_some(InputFileFormat::PcmS16le16),
        };
        let isolation = Provider::new().isolation().options(options);
        let audio = AudioFile::from_path(&self.audio).await?;

        if let Some(c) = &ctx {
            print_verbose(cli, &format!("Using context: {}", c.name));
        }
        print_verbose(cli, &format!("Input: {} ({})", audio.name(), audio.content_type()));

        let client = create_client(ctx.as_ref())?;
        let file = isolation.isolate_with(&client, audio).await?;

        let output_path = cli.output.as_deref().unwrap_or(file.name());
        save(&file, output_path)?;

        let result = serde_json::json!({
            "file": file.name(),
            "content_type": file.content_type(),
            "size": file.len(),
            "output_file": output_path,
        });
        output_result(&result, None, cli.json)
    }
}
