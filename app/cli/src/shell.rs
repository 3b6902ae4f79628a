//! Shell runner for preset pre-update commands.

use anyhow::{Context, Result};
use std::process::Command;

/// Run `command` through the platform shell, inheriting stdio.
///
/// A non-success exit status is an error; callers abort the swap on it.
pub fn run(command: &str) -> Result<()> {
    let status = shell_command(command)
        .status()
        .with_context(|| format!("spawning shell for \"{command}\""))?;
    if !status.success() {
        anyhow::bail!("command \"{command}\" exited with {status}");
    }
    Ok(())
}

#[cfg(unix)]
fn shell_command(command: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(command);
    cmd
}

#[cfg(windows)]
fn shell_command(command: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.arg("/C").arg(command);
    cmd
}
