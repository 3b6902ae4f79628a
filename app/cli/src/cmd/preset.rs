//! Preset management commands: add, remove, exec, list.

use crate::presets::{Preset, PresetStore};
use crate::shell;
use anyhow::{Context, Result};
use clap::Subcommand;
use std::path::PathBuf;
use tfswap::Workspace;

/// Preset management subcommands.
#[derive(Subcommand, Debug)]
pub enum PresetCommand {
    /// Add a preset.
    Add {
        /// Name of the preset.
        #[arg(long, short = 'n')]
        name: String,
        /// Provider to update.
        #[arg(long, short = 'p')]
        provider: String,
        /// Path to the replacement binary.
        #[arg(long = "bin-path", short = 'b', visible_alias = "bin")]
        bin_path: PathBuf,
        /// Shell command to run before swapping.
        #[arg(long = "pre-update", visible_alias = "pre")]
        pre_update: Option<String>,
    },
    /// Remove a preset.
    Remove {
        /// Name of the preset.
        name: String,
    },
    /// Execute a preset.
    Exec {
        /// Name of the preset.
        name: String,
    },
    /// List all presets.
    #[command(alias = "ls")]
    List,
}

impl PresetCommand {
    /// Dispatch preset management subcommands.
    pub fn run(self, store: &mut PresetStore) -> Result<()> {
        match self {
            Self::Add {
                name,
                provider,
                bin_path,
                pre_update,
            } => add(store, name, provider, bin_path, pre_update),
            Self::Remove { name } => remove(store, &name),
            Self::Exec { name } => exec(store, &name),
            Self::List => list(store),
        }
    }
}

fn add(
    store: &mut PresetStore,
    name: String,
    provider: String,
    bin_path: PathBuf,
    pre_update: Option<String>,
) -> Result<()> {
    if store.get(&name).is_some() {
        anyhow::bail!("preset \"{name}\" already exists");
    }

    // Presets outlive the directory they were added from, so pin the binary
    // path down to an absolute one now.
    let bin_path = std::path::absolute(&bin_path)
        .with_context(|| format!("resolving binary path {}", bin_path.display()))?;

    store.add(
        name.clone(),
        Preset {
            provider,
            bin_path,
            pre_update,
        },
    );
    store.save()?;
    println!("Added preset \"{name}\"");
    Ok(())
}

fn remove(store: &mut PresetStore, name: &str) -> Result<()> {
    if store.remove(name).is_none() {
        anyhow::bail!("preset \"{name}\" does not exist");
    }
    store.save()?;
    println!("Removed preset \"{name}\"");
    Ok(())
}

fn exec(store: &PresetStore, name: &str) -> Result<()> {
    let workspace = Workspace::discover()?;
    let preset = store
        .get(name)
        .with_context(|| format!("preset \"{name}\" does not exist"))?;

    if let Some(pre_update) = &preset.pre_update {
        tracing::info!("running pre-update command: {pre_update}");
        shell::run(pre_update).context("running pre-update command")?;
    }

    let outcome = tfswap::update_provider(&workspace, &preset.provider, &preset.bin_path)?;
    println!(
        "Patched {} to {} [{}]",
        outcome.provider,
        preset.bin_path.display(),
        outcome.digest
    );
    Ok(())
}

fn list(store: &PresetStore) -> Result<()> {
    if store.is_empty() {
        println!("No presets defined.");
        return Ok(());
    }
    for (name, preset) in store.iter() {
        println!(
            "  {name} — {} ({})",
            preset.provider,
            preset.bin_path.display()
        );
    }
    Ok(())
}
