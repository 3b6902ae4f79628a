//! The update-provider pipeline.

use crate::LOCK_FILE;
use crate::artifact::provider_artifact;
use crate::error::SwapError;
use crate::hash::sha256_file;
use crate::lock::ProviderLock;
use crate::workspace::Workspace;
use std::path::{Path, PathBuf};

/// The result of a successful swap, for reporting.
#[derive(Debug, Clone)]
pub struct SwapOutcome {
    /// Provider whose binary was replaced.
    pub provider: String,
    /// Artifact path the replacement was copied to. The CLI reports the
    /// provider, binary path, and digest; this is here for library callers
    /// that need the resolved destination.
    pub artifact: PathBuf,
    /// Digest now recorded in the lock file.
    pub digest: String,
}

/// Replace `provider`'s tracked binary with the build at `bin` and patch the
/// lock record to match.
///
/// The pipeline is strictly sequential: resolve the platform directory and
/// the provider's artifact, load the lock record, reject untracked providers,
/// hash the replacement, copy it over the artifact, confirm the copy's
/// digest, then persist the updated lock. Any failure aborts the remainder.
/// Earlier side effects are not rolled back — if the lock write fails after
/// the copy succeeded, the artifact keeps the new bytes while the lock keeps
/// the old hash. Concurrent invocations against the same workspace are not
/// coordinated; the last lock writer wins.
pub fn update_provider(
    workspace: &Workspace,
    provider: &str,
    bin: &Path,
) -> Result<SwapOutcome, SwapError> {
    let platform_dir = workspace
        .platform_dir()
        .ok_or_else(|| SwapError::PlatformNotFound {
            plugins_dir: workspace.plugins_dir(),
        })?;
    tracing::debug!("resolved platform directory {}", platform_dir.display());

    let artifact =
        provider_artifact(&platform_dir, provider).ok_or_else(|| SwapError::ArtifactNotFound {
            provider: provider.to_owned(),
            platform_dir: platform_dir.clone(),
        })?;

    let lock_path = platform_dir.join(LOCK_FILE);
    let mut lock = ProviderLock::load(&lock_path)?;
    if !lock.contains(provider) {
        return Err(SwapError::ProviderNotTracked {
            provider: provider.to_owned(),
            lock_path,
        });
    }

    let digest = sha256_file(bin)?;
    copy_binary(bin, &artifact)?;

    // The lock is only rewritten once the bytes on disk are known to match
    // the digest being recorded.
    let copied = sha256_file(&artifact)?;
    if copied != digest {
        return Err(SwapError::CopyMismatch {
            artifact,
            expected: digest,
            actual: copied,
        });
    }

    lock.set(provider, digest.clone());
    lock.save(&lock_path)?;
    tracing::info!(
        "patched {provider} to {} [{digest}]",
        bin.display()
    );

    Ok(SwapOutcome {
        provider: provider.to_owned(),
        artifact,
        digest,
    })
}

/// Copy `src` over `dest`, preserving `dest`'s prior permission bits.
///
/// The artifact is an executable plugin the workspace already runs, so its
/// existing mode (including the executable bit) is authoritative over
/// whatever mode the freshly built replacement carries.
fn copy_binary(src: &Path, dest: &Path) -> Result<(), SwapError> {
    let prior = std::fs::metadata(dest)
        .map_err(|e| SwapError::io("inspecting artifact", dest, e))?
        .permissions();
    std::fs::copy(src, dest).map_err(|e| SwapError::io("copying binary to", dest, e))?;
    std::fs::set_permissions(dest, prior)
        .map_err(|e| SwapError::io("restoring permissions on", dest, e))?;
    Ok(())
}
