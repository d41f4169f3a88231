//! Lookup table listings.

use clap::Args;
use serde::Serialize;

use giztoy_elevenlabs::{MODELS, VOICES};

use super::output_result;
use crate::Cli;

/// List supported voice names and their IDs.
#[derive(Args)]
pub struct VoicesCommand {}

/// List supported model names and their IDs.
#[derive(Args)]
pub struct ModelsCommand {}

#[derive(Serialize)]
struct Entry<'a> {
    name: &'a str,
    id: &'a str,
}

impl VoicesCommand {
    pub async fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        print_table(cli, VOICES)
    }
}

impl ModelsCommand {
    pub async fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        print_table(cli, MODELS)
    }
}

fn print_table(cli: &Cli, table: &[(&str, &str)]) -> anyhow::Result<()> {
    if cli.json {
        let entries: Vec<_> = table.iter().map(|&(name, id)| Entry { name, id }).collect();
        return output_result(&entries, cli.output.as_deref(), true);
    }

    println!("{:<20} {}", "NAME", "ID");
    for (name, id) in table {
        println!("{:<20} {}", name, id);
    }
    Ok(())
}
