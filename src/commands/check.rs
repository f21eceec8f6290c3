//! Check command implementation
//!
//! Compares the fingerprint recorded in the lockfile with the current
//! fingerprint of the Berksfile.

use std::path::Path;

use console::Style;
use tracing::debug;

use crate::commands::helpers::load_lockfile;
use berks_lock::hash::fingerprint_file;
use berks_lock::{BerksError, Result};

/// Run check command
pub fn run(manifest: &Path) -> Result<()> {
    let lockfile = load_lockfile(manifest)?;
    let current = fingerprint_file(manifest)?;
    debug!(recorded = ?lockfile.fingerprint(), %current, "comparing fingerprints");

    match lockfile.fingerprint() {
        Some(recorded) if recorded == current => {
            println!(
                "{} {}",
                Style::new().green().bold().apply_to("Up to date:"),
                manifest.display()
            );
            Ok(())
        }
        recorded => Err(BerksError::LockfileOutdated {
            expected: recorded.unwrap_or("<none>").to_string(),
            found: current,
        }),
    }
}
