//! Workspace discovery and plugin platform directory resolution.

use crate::error::SwapError;
use crate::{PLUGIN_PATH, WORKSPACE_DIR};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// A directory tree holding an initialized `.terraform` workspace.
#[derive(Debug, Clone)]
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    /// Open the workspace rooted at `root`.
    ///
    /// Verifies the `.terraform` marker directory is present. A missing
    /// marker is classified via [`ErrorKind::NotFound`], so the check holds
    /// regardless of how the platform represents "no such file"; a marker
    /// that exists but is not a directory fails the same way.
    pub fn at(root: impl Into<PathBuf>) -> Result<Self, SwapError> {
        let root = root.into();
        let marker = root.join(WORKSPACE_DIR);
        match std::fs::metadata(&marker) {
            Ok(meta) if meta.is_dir() => Ok(Self { root }),
            Ok(_) => Err(SwapError::NotAWorkspace { root }),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(SwapError::NotAWorkspace { root })
            }
            Err(e) => Err(SwapError::io("checking workspace marker", marker, e)),
        }
    }

    /// Open the workspace at the current working directory.
    pub fn discover() -> Result<Self, SwapError> {
        let cwd = std::env::current_dir()
            .map_err(|e| SwapError::io("resolving current directory", ".", e))?;
        Self::at(cwd)
    }

    /// The workspace root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The plugin cache root, `<root>/.terraform/plugins`.
    pub fn plugins_dir(&self) -> PathBuf {
        self.root.join(WORKSPACE_DIR).join(PLUGIN_PATH)
    }

    /// Resolve the active plugin platform directory.
    ///
    /// Returns the first immediate subdirectory of the plugin cache root, in
    /// directory-listing order. A missing or unreadable cache root resolves
    /// to `None` rather than an error; callers treat `None` as "no platform
    /// resolved" and fail downstream.
    pub fn platform_dir(&self) -> Option<PathBuf> {
        let plugins = self.plugins_dir();
        let entries = match std::fs::read_dir(&plugins) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::debug!("cannot list plugin cache {}: {e}", plugins.display());
                return None;
            }
        };
        entries
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .find(|p| p.is_dir())
    }
}
