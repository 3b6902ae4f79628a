//! Provider artifact resolution within a plugin platform directory.

use crate::PROVIDER_PREFIX;
use std::path::{Path, PathBuf};

/// Resolve the on-disk artifact for `provider` inside `platform_dir`.
///
/// Matches entries named `terraform-provider-<provider>*`. Succeeds only when
/// exactly one entry matches: with several candidate builds of the same
/// provider present there is no safe way to pick one, so both zero and
/// multiple matches resolve to `None`.
pub fn provider_artifact(platform_dir: &Path, provider: &str) -> Option<PathBuf> {
    let prefix = format!("{PROVIDER_PREFIX}{provider}");
    let entries = match std::fs::read_dir(platform_dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::debug!(
                "cannot list platform directory {}: {e}",
                platform_dir.display()
            );
            return None;
        }
    };

    let mut matches = entries.filter_map(|e| e.ok()).filter_map(|e| {
        e.file_name()
            .to_str()
            .is_some_and(|name| name.starts_with(&prefix))
            .then(|| e.path())
    });

    match (matches.next(), matches.next()) {
        (Some(path), None) => Some(path),
        (Some(first), Some(_)) => {
            tracing::debug!(
                "multiple artifacts match \"{prefix}*\" in {} (first: {})",
                platform_dir.display(),
                first.display()
            );
            None
        }
        _ => None,
    }
}
