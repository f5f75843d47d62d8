// src/watch/hash.rs

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use anyhow::{Context, Result};
use blake3::Hasher;
use tracing::debug;

/// Compute the blake3 hash of a single file.
///
/// A missing file hashes like an empty one, since an absent data file loads
/// as an empty collection.
pub fn compute_file_hash(path: &Path) -> Result<String> {
    let mut hasher = Hasher::new();
    let mut file = match File::open(path) {
        Ok(f) => f,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            return Ok(hasher.finalize().to_hex().to_string());
        }
        Err(err) => {
            return Err(err).with_context(|| format!("opening file for hashing: {:?}", path));
        }
    };

    let mut buf = [0u8; 8192];
    loop {
        let n = file.read(&mut buf)?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(hasher.finalize().to_hex().to_string())
}

/// Remembers the last seen content hash of a file.
#[derive(Debug, Default)]
pub struct ContentChangeFilter {
    last_hash: Option<String>,
}

impl ContentChangeFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hash `path` and report whether it differs from the previous call.
    /// The first call always reports a change.
    pub fn changed(&mut self, path: &Path) -> Result<bool> {
        let hash = compute_file_hash(path)?;
        if self.last_hash.as_deref() == Some(hash.as_str()) {
            debug!(hash = %hash, "content unchanged");
            return Ok(false);
        }
        debug!(hash = %hash, "content changed");
        self.last_hash = Some(hash);
        Ok(true)
    }
}
