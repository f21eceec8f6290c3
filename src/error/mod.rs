//! Error types and handling for berks-lock
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Constructors are grouped by error domain:
//! - [`lockfile`]: Lockfile model and persistence errors
//! - [`fs`]: File system errors

pub mod fs;
pub mod lockfile;

#[allow(unused_imports)]
pub use fs::{read_failed as file_read_failed, write_failed as file_write_failed};
#[allow(unused_imports)]
pub use lockfile::{
    decode_failed as lockfile_decode_failed, invalid_argument, missing_option,
    not_found as lockfile_not_found,
};

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for berks-lock operations
#[derive(Error, Diagnostic, Debug)]
pub enum BerksError {
    // Lockfile errors
    #[error("Lockfile not found: {path}")]
    #[diagnostic(
        code(berks::lockfile::not_found),
        help("Resolve the Berksfile first so a lockfile gets written")
    )]
    LockfileNotFound { path: String },

    #[error("Failed to decode lockfile {path}: {reason}")]
    #[diagnostic(code(berks::lockfile::decode_failed))]
    LockfileDecodeFailed { path: String, reason: String },

    #[error("Failed to encode lockfile: {reason}")]
    #[diagnostic(code(berks::lockfile::encode_failed))]
    LockfileEncodeFailed { reason: String },

    #[error("Lockfile is out of date (manifest is {found}, lockfile records {expected})")]
    #[diagnostic(
        code(berks::lockfile::outdated),
        help("The Berksfile changed since the lockfile was written. Resolve it again")
    )]
    LockfileOutdated { expected: String, found: String },

    // Argument errors
    #[error("{operation}: a cookbook source is required ({reason})")]
    #[diagnostic(code(berks::lockfile::invalid_argument))]
    InvalidArgument { operation: String, reason: String },

    // Option errors
    #[error("Missing lockfile option: {key}")]
    #[diagnostic(
        code(berks::options::missing),
        help("Set the manifest path before saving or naming the lockfile")
    )]
    MissingOption { key: String },

    #[error("Invalid lockfile option {key}: {reason}")]
    #[diagnostic(code(berks::options::invalid))]
    InvalidOption { key: String, reason: String },

    // Source errors
    #[error("Failed to decode cookbook source: {reason}")]
    #[diagnostic(code(berks::source::decode_failed))]
    SourceDecodeFailed { reason: String },

    // Manifest errors
    #[error("Manifest not found: {path}")]
    #[diagnostic(
        code(berks::manifest::not_found),
        help("Pass the Berksfile location with --manifest or BERKS_MANIFEST")
    )]
    ManifestNotFound { path: String },

    // File system errors
    #[error("Failed to read file: {path}")]
    #[diagnostic(code(berks::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}")]
    #[diagnostic(code(berks::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },
}

impl From<serde_json::Error> for BerksError {
    fn from(err: serde_json::Error) -> Self {
        BerksError::LockfileEncodeFailed {
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, BerksError>;
