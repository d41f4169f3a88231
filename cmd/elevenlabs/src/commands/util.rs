//! Utility functions for CLI commands.

use std::path::Path;
use std::time::Duration;

use giztoy_elevenlabs::{Client, OutputFormat};
use tracing::debug;

use super::cli_config::{Config, Context, load_config};
use crate::Cli;

const APP_NAME: &str = "elevenlabs";

/// Gets the global configuration.
pub fn get_config(cli: &Cli) -> anyhow::Result<Config> {
    load_config(APP_NAME, cli.config.as_deref())
}

/// Gets the context to use.
///
/// Returns `None` when no `-c` flag is given and no current context is set,
/// in which case the client falls back to `ELEVENLABS_API_KEY`.
pub fn get_context(cli: &Cli) -> anyhow::Result<Option<Context>> {
    let cfg = get_config(cli)?;

    match (cfg.resolve_context(cli.context.as_deref()), cli.context.as_deref()) {
        (Some(ctx), _) => Ok(Some(ctx.clone())),
        (None, Some(name)) if !name.is_empty() => anyhow::bail!("context '{}' not found", name),
        (None, _) => Ok(None),
    }
}

/// Creates an ElevenLabs client from the context, or from the environment.
pub fn create_client(ctx: Option<&Context>) -> anyhow::Result<Client> {
    let Some(ctx) = ctx else {
        debug!("no context, reading api key from environment");
        return Ok(Client::from_env()?);
    };

    if ctx.api_key.is_empty() {
        anyhow::bail!("api_key not found in context '{}'", ctx.name);
    }

    let mut builder = Client::builder(&ctx.api_key);
    if !ctx.base_url.is_empty() {
        builder = builder.base_url(&ctx.base_url);
    }
    if ctx.timeout > 0 {
        builder = builder.timeout(Duration::from_secs(ctx.timeout));
    }

    debug!(context = %ctx.name, "using context");
    Ok(builder.build()?)
}

/// Picks the first non-empty value.
pub fn pick<'a>(values: &[Option<&'a str>]) -> Option<&'a str> {
    values.iter().flatten().copied().find(|v| !v.is_empty())
}

/// Parses an output format code such as `mp3_44100_128`.
pub fn parse_output_format(code: &str) -> anyhow::Result<OutputFormat> {
    OutputFormat::from_code(code).ok_or_else(|| {
        let known: Vec<_> = OutputFormat::ALL.iter().map(|f| f.as_str()).collect();
        anyhow::anyhow!("unknown output format '{}', expected one of: {}", code, known.join(", "))
    })
}

/// Loads a request from a YAML or JSON file.
pub fn load_request<T: serde::de::DeserializeOwned>(path: &str) -> anyhow::Result<T> {
    let content = std::fs::read_to_string(path)?;
    let ext = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("yaml");

    let result = match ext.to_lowercase().as_str() {
        "json" => serde_json::from_str(&content)?,
        _ => serde_yaml::from_str(&content)?,
    };

    Ok(result)
}

/// Outputs binary data to a file.
pub fn output_bytes(data: &[u8], output_path: &str) -> anyhow::Result<()> {
    std::fs::write(output_path, data)?;
    Ok(())
}

/// Outputs result as JSON or YAML.
pub fn output_result<T: serde::Serialize>(
    result: &T,
    output_path: Option<&str>,
    as_json: bool,
) -> anyhow::Result<()> {
    let output = if as_json {
        serde_json::to_string_pretty(result)? + "\n"
    } else {
        serde_yaml::to_string(result)?
    };

    match output_path {
        Some(path) => std::fs::write(path, output)?,
        None => print!("{}", output),
    }

    Ok(())
}

/// Prints verbose output if enabled.
pub fn print_verbose(cli: &Cli, msg: &str) {
    if cli.verbose {
        eprintln!("[verbose] {}", msg);
    }
}

/// Prints success message.
pub fn print_success(msg: &str) {
    eprintln!("\x1b[32m✓\x1b[0m {}", msg);
}

/// Formats bytes to human readable string.
pub fn format_bytes(bytes: usize) -> String {
    const KB: usize = 1024;
    const MB: usize = KB * 1024;

    if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
