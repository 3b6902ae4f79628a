//! CLI argument parsing and command dispatch.

use crate::presets::PresetStore;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use preset::PresetCommand;

pub mod preset;
pub mod swap;

/// Swap Terraform provider binaries in workspaces for local development.
#[derive(Parser, Debug)]
#[command(name = "tfswap", version, about)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Swap a provider's tracked binary for a local build.
    #[command(alias = "s")]
    Swap {
        /// Provider to update.
        provider: String,
        /// Path to the replacement binary.
        bin: PathBuf,
    },
    /// Manage presets.
    Preset {
        /// Preset subcommand.
        #[command(subcommand)]
        action: PresetCommand,
    },
}

impl Cli {
    /// Run the parsed command to completion.
    ///
    /// The preset store is only opened for commands that need it.
    pub fn run(self) -> Result<()> {
        match self.command {
            Command::Swap { provider, bin } => swap::run(&provider, &bin),
            Command::Preset { action } => {
                let mut store = PresetStore::load()?;
                action.run(&mut store)
            }
        }
    }
}
