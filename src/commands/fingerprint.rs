//! Fingerprint command implementation

use std::path::Path;

use tracing::{info, warn};

use crate::cli::FingerprintArgs;
use crate::commands::helpers::{load_lockfile, manifest_options};
use berks_lock::hash::fingerprint_file;
use berks_lock::{BerksError, Lockfile, Result};

/// Run fingerprint command
pub fn run(manifest: &Path, args: &FingerprintArgs) -> Result<()> {
    let fingerprint = fingerprint_file(manifest)?;

    if args.write {
        record_fingerprint(manifest, &fingerprint)?;
    }

    println!("{fingerprint}");
    Ok(())
}

/// Store `fingerprint` in the manifest's lockfile, creating an empty one when missing
fn record_fingerprint(manifest: &Path, fingerprint: &str) -> Result<()> {
    let mut lockfile = match load_lockfile(manifest) {
        Ok(lockfile) => lockfile,
        Err(BerksError::LockfileNotFound { path }) => {
            info!(%path, "creating empty lockfile");
            Lockfile::with_options(manifest_options(manifest))
        }
        Err(e) => return Err(e),
    };

    let expected = manifest.display().to_string();
    if lockfile.options().manifest_path().ok() != Some(expected.as_str()) {
        warn!(manifest = %expected, "lockfile recorded a different manifest path, replacing it");
        lockfile.options_mut().set_manifest_path(expected);
    }

    lockfile.set_fingerprint(fingerprint);
    lockfile.save()
}

#[cfg(test)]
mod tests {
    use super::*;
    use berks_lock::LockedCookbook;
    use tempfile::TempDir;

    #[test]
    fn test_record_fingerprint_creates_lockfile() {
        let temp = TempDir::new().unwrap();
        let manifest = temp.path().join("Berksfile");
        std::fs::write(&manifest, "cookbook 'ntp'\n").unwrap();

        record_fingerprint(&manifest, "blake3:abc").unwrap();

        let lockfile = load_lockfile(&manifest).unwrap();
        assert_eq!(lockfile.fingerprint(), Some("blake3:abc"));
        assert!(lockfile.sources().is_empty());
    }

    #[test]
    fn test_record_fingerprint_keeps_sources() {
        let temp = TempDir::new().unwrap();
        let manifest = temp.path().join("Berksfile");
        let mut lockfile: Lockfile = Lockfile::with_options(manifest_options(&manifest));
        lockfile.append(LockedCookbook::new("ntp")).unwrap();
        lockfile.set_fingerprint("blake3:old");
        lockfile.save().unwrap();

        record_fingerprint(&manifest, "blake3:new").unwrap();

        let reloaded = load_lockfile(&manifest).unwrap();
        assert_eq!(reloaded.fingerprint(), Some("blake3:new"));
        assert_eq!(reloaded.sources(), &[LockedCookbook::new("ntp")]);
    }
}
