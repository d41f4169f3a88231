//! Configuration management commands.

use clap::{Args, Subcommand};

use super::cli_config::{Context as CliContext, mask_api_key};
use super::{get_config, parse_output_format, print_success};
use crate::Cli;

/// Manage CLI configuration.
///
/// Contexts allow you to manage multiple API configurations,
/// similar to kubectl's context management.
///
/// Configuration is stored in ~/.giztoy/elevenlabs/config.yaml
#[derive(Args)]
pub struct ConfigCommand {
    #[command(subcommand)]
    command: ConfigSubcommand,
}

#[derive(Subcommand)]
enum ConfigSubcommand {
    /// Add a new context
    #[command(name = "add-context")]
    AddContext {
        /// Context name
        name: String,
        /// API key (required)
        #[arg(long)]
        api_key: String,
        /// API base URL
        #[arg(long)]
        base_url: Option<String>,
        /// Request timeout in seconds
        #[arg(long)]
        timeout: Option<u64>,
        /// Default text-to-speech model
        #[arg(long)]
        default_model: Option<String>,
        /// Default voice name or ID
        #[arg(long)]
        default_voice: Option<String>,
        /// Default output format code
        #[arg(long)]
        output_format: Option<String>,
    },
    /// Delete a context
    #[command(name = "delete-context")]
    DeleteContext {
        /// Context name
        name: String,
    },
    /// Set the current context
    #[command(name = "use-context")]
    UseContext {
        /// Context name
        name: String,
    },
    /// Display the current context
    #[command(name = "get-context")]
    GetContext,
    /// List all contexts
    #[command(name = "list-contexts", alias = "get-contexts")]
    ListContexts,
    /// View the current configuration
    View,
}

impl ConfigCommand {
    pub async fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        match &self.command {
            ConfigSubcommand::AddContext {
                name,
                api_key,
                base_url,
                timeout,
                default_model,
                default_voice,
                output_format,
            } => {
                if let Some(code) = output_format {
                    parse_output_format(code)?;
                }

                let mut cfg = get_config(cli)?;
                let ctx = CliContext {
                    api_key: api_key.clone(),
                    base_url: base_url.clone().unwrap_or_default(),
                    timeout: timeout.unwrap_or(0),
                    default_model: default_model.clone().unwrap_or_default(),
                    default_voice: default_voice.clone().unwrap_or_default(),
                    output_format: output_format.clone().unwrap_or_default(),
                    ..Default::default()
                };

                cfg.add_context(name, ctx)?;
                print_success(&format!("Context \"{}\" added successfully", name));
                Ok(())
            }

            ConfigSubcommand::DeleteContext { name } => {
                let mut cfg = get_config(cli)?;
                cfg.delete_context(name)?;
                print_success(&format!("Context \"{}\" deleted", name));
                Ok(())
            }

            ConfigSubcommand::UseContext { name } => {
                let mut cfg = get_config(cli)?;
                cfg.use_context(name)?;
                print_success(&format!("Switched to context \"{}\"", name));
                Ok(())
            }

            ConfigSubcommand::GetContext => {
                let cfg = get_config(cli)?;
                if cfg.current_context.is_empty() {
                    println!("No current context set");
                } else {
                    println!("{}", cfg.current_context);
                }
                Ok(())
            }

            ConfigSubcommand::ListContexts => {
                let cfg = get_config(cli)?;

                if cfg.contexts.is_empty() {
                    println!("No contexts configured");
                    return Ok(());
                }

                println!("{:<8} {:<20} {:<30} {}", "CURRENT", "NAME", "BASE_URL", "DEFAULT_VOICE");

                for name in cfg.context_names() {
                    let Some(ctx) = cfg.contexts.get(name) else {
                        continue;
                    };
                    let current = if name == cfg.current_context { "*" } else { "" };
                    let base_url = if ctx.base_url.is_empty() {
                        "(default)"
                    } else {
                        &ctx.base_url
                    };
                    println!("{:<8} {:<20} {:<30} {}", current, name, base_url, ctx.default_voice);
                }

                Ok(())
            }

            ConfigSubcommand::View => {
                let cfg = get_config(cli)?;

                println!("Config file: {}", cfg.path().display());
                println!("Current context: {}", cfg.current_context);
                println!("Contexts: {}", cfg.contexts.len());

                if !cfg.contexts.is_empty() {
                    println!("\nContext details:");

                    for name in cfg.context_names() {
                        let Some(ctx) = cfg.contexts.get(name) else {
                            continue;
                        };
                        println!("\n  {}:", name);
                        println!("    API Key: {}", mask_api_key(&ctx.api_key));
                        if !ctx.base_url.is_empty() {
                            println!("    Base URL: {}", ctx.base_url);
                        }
                        if ctx.timeout > 0 {
                            println!("    Timeout: {}s", ctx.timeout);
                        }
                        if !ctx.default_model.is_empty() {
                            println!("    Default Model: {}", ctx.default_model);
                        }
                        if !ctx.default_voice.is_empty() {
                            println!("    Default Voice: {}", ctx.default_voice);
                        }
                        if !ctx.output_format.is_empty() {
                            println!("    Output Format: {}", ctx.output_format);
                        }
                    }
                }

                Ok(())
            }
        }
    }
}
