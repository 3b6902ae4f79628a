//! The swap command: verify the workspace and run the update pipeline.

use anyhow::Result;
use std::path::Path;
use tfswap::Workspace;

/// Swap `provider`'s binary for the build at `bin` in the workspace at the
/// current directory.
pub fn run(provider: &str, bin: &Path) -> Result<()> {
    let workspace = Workspace::discover()?;
    let outcome = tfswap::update_provider(&workspace, provider, bin)?;
    println!(
        "Patched {} to {} [{}]",
        outcome.provider,
        bin.display(),
        outcome.digest
    );
    Ok(())
}
