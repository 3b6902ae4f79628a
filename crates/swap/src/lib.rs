//! Core library for swapping Terraform provider binaries in a workspace.
//!
//! A `.terraform` workspace tracks each provider's binary alongside a SHA-256
//! hash in `lock.json`. Swapping a locally built binary in by hand leaves the
//! recorded hash stale, so Terraform rejects the plugin. [`update_provider`]
//! performs the whole substitution: it resolves the artifact on disk, copies
//! the replacement binary over it, and patches the lock record so the
//! workspace trusts the new build.

pub use artifact::provider_artifact;
pub use error::SwapError;
pub use hash::sha256_file;
pub use lock::ProviderLock;
pub use swap::{SwapOutcome, update_provider};
pub use workspace::Workspace;

pub mod artifact;
pub mod error;
pub mod hash;
pub mod lock;
pub mod swap;
pub mod workspace;

/// Prefix of provider plugin artifacts registered in a workspace.
pub const PROVIDER_PREFIX: &str = "terraform-provider-";

/// Name of the lock record within a plugin platform directory.
pub const LOCK_FILE: &str = "lock.json";

/// Marker directory that identifies an initialized Terraform workspace.
pub const WORKSPACE_DIR: &str = ".terraform";

/// Plugin cache root, relative to the workspace marker directory.
pub const PLUGIN_PATH: &str = "plugins";
