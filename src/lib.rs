//! berks-lock - Berksfile lockfile model
//!
//! Persists the cookbook sources a Berksfile resolved to, together with the
//! manifest fingerprint and options, so later installs can reuse them.
//!
//! ```no_run
//! use berks_lock::{Lockfile, LockfileOptions, LockedCookbook};
//!
//! # fn main() -> berks_lock::Result<()> {
//! let mut lockfile: Lockfile = Lockfile::with_options(LockfileOptions::for_manifest("Berksfile"));
//! lockfile.append(LockedCookbook::new("ntp").with_locked_version("1.8.6"))?;
//! lockfile.set_fingerprint(berks_lock::hash::fingerprint_file("Berksfile".as_ref())?);
//! lockfile.save()?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod hash;
pub mod lockfile;
pub mod source;

#[cfg(test)]
mod test_fixtures;

pub use error::{BerksError, Result};
pub use lockfile::{LOCKFILE_EXTENSION, Lockfile, LockfileOptions, MANIFEST_PATH_OPTION};
pub use source::{CookbookSource, LockedCookbook, SourceLocation};
