//! Command helper utilities

use std::path::Path;

use berks_lock::{Lockfile, LockfileOptions, Result};

/// Options pointing at `manifest`
pub fn manifest_options(manifest: &Path) -> LockfileOptions {
    LockfileOptions::for_manifest(manifest.display().to_string())
}

/// Load the lockfile that belongs to `manifest`
pub fn load_lockfile(manifest: &Path) -> Result<Lockfile> {
    let path = Lockfile::<berks_lock::LockedCookbook>::with_options(manifest_options(manifest))
        .lockfile_path()?;
    Lockfile::load(path)
}
