//! CLI commands module.

mod cli_config;
mod config;
mod isolate;
mod sts;
mod tts;
mod util;
mod voices;

pub use config::ConfigCommand;
pub use isolate::IsolateCommand;
pub use sts::StsCommand;
pub use tts::TtsCommand;
pub use voices::{ModelsCommand, VoicesCommand};

// Re-export utils for use in commands
pub(crate) use util::*;
