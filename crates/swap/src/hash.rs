//! Content hashing for provider binaries.

use crate::error::SwapError;
use sha2::{Digest, Sha256};
use std::path::Path;

/// Compute the SHA-256 digest of a file as a lowercase hex string.
///
/// The file is streamed through the hasher, so arbitrarily large binaries
/// never need to fit in memory. The digest depends only on content: two
/// paths holding the same bytes hash identically.
pub fn sha256_file(path: &Path) -> Result<String, SwapError> {
    let mut file =
        std::fs::File::open(path).map_err(|e| SwapError::io("opening", path, e))?;
    let mut hasher = Sha256::new();
    std::io::copy(&mut file, &mut hasher).map_err(|e| SwapError::io("reading", path, e))?;
    Ok(hex::encode(hasher.finalize()))
}
