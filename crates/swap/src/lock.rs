//! Lock record I/O.
//!
//! The lock record is a JSON object mapping provider names to the lowercase
//! hex SHA-256 digest the workspace trusts for that provider's binary. It is
//! read fully into memory, mutated for one key, and rewritten whole.

use crate::error::SwapError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// The state of a workspace's provider locks: provider name → binary hash.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProviderLock(BTreeMap<String, String>);

impl ProviderLock {
    /// Read and parse a lock record from `path`.
    pub fn load(path: &Path) -> Result<Self, SwapError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| SwapError::io("reading lock file", path, e))?;
        serde_json::from_str(&contents).map_err(|source| SwapError::LockParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Serialize the full record and replace the file at `path`.
    ///
    /// The document is written to a sibling temporary file and renamed into
    /// place, so a crash mid-write cannot leave a truncated lock file.
    pub fn save(&self, path: &Path) -> Result<(), SwapError> {
        let contents = serde_json::to_string(self).map_err(|source| SwapError::LockParse {
            path: path.to_path_buf(),
            source,
        })?;
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, contents)
            .map_err(|e| SwapError::io("writing lock file", &tmp, e))?;
        std::fs::rename(&tmp, path)
            .map_err(|e| SwapError::io("replacing lock file", path, e))?;
        tracing::debug!("wrote lock file {}", path.display());
        Ok(())
    }

    /// Whether `provider` is tracked by this record.
    pub fn contains(&self, provider: &str) -> bool {
        self.0.contains_key(provider)
    }

    /// The tracked hash for `provider`, if any.
    pub fn get(&self, provider: &str) -> Option<&str> {
        self.0.get(provider).map(String::as_str)
    }

    /// Record `hash` as the trusted digest for `provider`.
    pub fn set(&mut self, provider: impl Into<String>, hash: impl Into<String>) {
        self.0.insert(provider.into(), hash.into());
    }

    /// Number of tracked providers.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the record tracks no providers.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ProviderLock {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
