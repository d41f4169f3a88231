//! ElevenLabs CLI - A command line interface for ElevenLabs speech APIs.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{
    ConfigCommand, IsolateCommand, ModelsCommand, StsCommand, TtsCommand, VoicesCommand,
};

/// ElevenLabs CLI - A command line interface for ElevenLabs speech APIs.
///
/// This tool allows you to interact with ElevenLabs services including:
///   - Text to speech
///   - Speech to speech (voice changer)
///   - Audio isolation
///
/// Voices and models accept friendly names (`aria`, `flash_v2_5`) or raw IDs.
///
/// Configuration is stored in ~/.giztoy/elevenlabs/ and supports multiple contexts,
/// similar to kubectl's context management. Without a context the API key is
/// read from ELEVENLABS_API_KEY.
#[derive(Parser)]
#[command(name = "elevenlabs")]
#[command(about = "ElevenLabs API CLI tool")]
#[command(version)]
pub struct Cli {
    /// Config file (default is ~/.giztoy/elevenlabs/config.yaml)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Context name to use
    #[arg(short = 'c', long, global = true)]
    pub context: Option<String>,

    /// Output file (default: the returned file name)
    #[arg(short = 'o', long, global = true)]
    pub output: Option<String>,

    /// Input request file (YAML or JSON)
    #[arg(short = 'f', long = "file", global = true)]
    pub input: Option<String>,

    /// Output as JSON (for piping)
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage CLI configuration
    Config(ConfigCommand),
    /// Convert text to speech
    Tts(TtsCommand),
    /// Re-voice recorded speech
    Sts(StsCommand),
    /// Isolate the voice from background sound
    Isolate(IsolateCommand),
    /// List supported voice names
    Voices(VoicesCommand),
    /// List supported model names
    Models(ModelsCommand),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging; -v overrides RUST_LOG
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match &cli.command {
        Commands::Config(cmd) => cmd.run(&cli).await,
        Commands::Tts(cmd) => cmd.run(&cli).await,
        Commands::Sts(cmd) => cmd.run(&cli).await,
        Commands::Isolate(cmd) => cmd.run(&cli).await,
        Commands::Voices(cmd) => cmd.run(&cli).await,
        Commands::Models(cmd) => cmd.run(&cli).await,
    }
}
