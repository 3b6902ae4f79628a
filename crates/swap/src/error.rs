//! Error types for swap operations.

use std::path::PathBuf;

/// Errors produced while swapping a provider binary.
///
/// The library never terminates the process; the CLI boundary decides what a
/// given failure means for the exit status.
#[derive(Debug, thiserror::Error)]
pub enum SwapError {
    /// The directory holds no `.terraform` marker (or the marker is a file).
    #[error("{} is not a Terraform workspace directory", root.display())]
    NotAWorkspace {
        /// Directory that was checked for the marker.
        root: PathBuf,
    },

    /// No plugin platform directory could be resolved under the plugin cache.
    #[error("no plugin platform directory found under {}", plugins_dir.display())]
    PlatformNotFound {
        /// Plugin cache root that was searched.
        plugins_dir: PathBuf,
    },

    /// Zero or multiple artifacts matched the provider in the platform dir.
    #[error("no unambiguous artifact for provider \"{provider}\" in {}", platform_dir.display())]
    ArtifactNotFound {
        /// Provider name that was looked up.
        provider: String,
        /// Platform directory that was searched.
        platform_dir: PathBuf,
    },

    /// The provider has no entry in the lock record. Swapping only replaces
    /// an existing tracked build; it never registers a new one.
    #[error("provider \"{provider}\" is not present in lock file {}", lock_path.display())]
    ProviderNotTracked {
        /// Provider name that was looked up.
        provider: String,
        /// Lock file that was consulted.
        lock_path: PathBuf,
    },

    /// The lock file exists but is not a valid JSON object of hashes.
    #[error("parsing lock file {}: {source}", path.display())]
    LockParse {
        /// Lock file that failed to parse.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// The copied artifact's digest diverged from the replacement's digest.
    #[error(
        "copied artifact {} does not match the replacement binary (expected {expected}, got {actual})",
        artifact.display()
    )]
    CopyMismatch {
        /// Artifact path that was written.
        artifact: PathBuf,
        /// Digest of the replacement binary.
        expected: String,
        /// Digest read back from the artifact.
        actual: String,
    },

    /// An underlying filesystem operation failed.
    #[error("{action} {}: {source}", path.display())]
    Io {
        /// What was being attempted.
        action: &'static str,
        /// Path the operation touched.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

impl SwapError {
    /// Wrap an I/O error with the action and path it occurred on.
    pub(crate) fn io(
        action: &'static str,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::Io {
            action,
            path: path.into(),
            source,
        }
    }
}
