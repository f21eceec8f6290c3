//! Test fixtures shared by unit tests.
//!
//! ```ignore
//! use crate::test_fixtures::{create_temp_dir, manifest_lockfile};
//!
//! #[test]
//! fn my_test() {
//!     let temp = create_temp_dir();
//!     let lockfile = manifest_lockfile(temp.path());
//! }
//! ```

#![allow(clippy::expect_used)]

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::lockfile::{Lockfile, LockfileOptions};
use crate::source::LockedCookbook;

/// Create a temp directory in the system temp location.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// Write a `Berksfile` into `dir` and return its path.
///
/// # Panics
///
/// Panics if the file cannot be written.
pub fn write_manifest(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("Berksfile");
    std::fs::write(&path, content).expect("Failed to write Berksfile");
    path
}

/// Empty lockfile whose manifest is `<dir>/Berksfile`.
#[must_use]
pub fn manifest_lockfile(dir: &Path) -> Lockfile {
    Lockfile::with_options(LockfileOptions::for_manifest(
        dir.join("Berksfile").display().to_string(),
    ))
}

/// A git-hosted cookbook pinned to a SHA.
#[must_use]
pub fn nginx() -> LockedCookbook {
    LockedCookbook::git(
        "nginx",
        "https://github.com/acme/nginx-cookbook.git",
        Some("4f1a7c2d9e"),
    )
    .with_locked_version("2.7.4")
    .with_constraint("~> 2.7")
}

/// A cookbook from the default site.
#[must_use]
pub fn ntp() -> LockedCookbook {
    LockedCookbook::new("ntp").with_locked_version("1.8.6")
}

/// A cookbook from a local directory.
#[must_use]
pub fn app() -> LockedCookbook {
    LockedCookbook::path("app", "./cookbooks/app").with_locked_version("0.1.0")
}
