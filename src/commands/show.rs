//! Show command implementation

use std::path::Path;

use crate::commands::helpers::load_lockfile;
use berks_lock::Result;

/// Run show command
pub fn run(manifest: &Path) -> Result<()> {
    let lockfile = load_lockfile(manifest)?;
    println!("{}", lockfile.to_text()?);
    Ok(())
}
