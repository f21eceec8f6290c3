//! BLAKE3 fingerprints of Berksfile manifests
//!
//! The lockfile stores the manifest fingerprint from its last resolution so
//! callers can tell when the manifest has drifted since.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use blake3::Hasher;

use crate::error::{BerksError, Result, file_read_failed};

/// Hash prefix for BLAKE3 fingerprints
pub const HASH_PREFIX: &str = "blake3:";

/// Fingerprint of an in-memory manifest
pub fn fingerprint_bytes(content: &[u8]) -> String {
    format!("{}{}", HASH_PREFIX, blake3::hash(content).to_hex())
}

/// Fingerprint of the manifest at `path`
///
/// # Errors
///
/// `ManifestNotFound` when the file does not exist, `FileReadFailed` otherwise.
pub fn fingerprint_file(path: &Path) -> Result<String> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => BerksError::ManifestNotFound {
            path: path.display().to_string(),
        },
        _ => file_read_failed(path, &e),
    })?;

    let mut hasher = Hasher::new();
    hasher
        .update_reader(BufReader::new(file))
        .map_err(|e| file_read_failed(path, &e))?;

    Ok(format!("{}{}", HASH_PREFIX, hasher.finalize().to_hex()))
}
