//! Lockfile errors

use std::path::Path;

use super::BerksError;

/// Creates a lockfile not found error
pub fn not_found(path: &Path) -> BerksError {
    BerksError::LockfileNotFound {
        path: path.display().to_string(),
    }
}

/// Creates a decode error for the lockfile at `path`
pub fn decode_failed(path: impl Into<String>, reason: impl ToString) -> BerksError {
    BerksError::LockfileDecodeFailed {
        path: path.into(),
        reason: reason.to_string(),
    }
}

/// Creates an invalid argument error for a mutating operation
pub fn invalid_argument(operation: &str, reason: impl Into<String>) -> BerksError {
    BerksError::InvalidArgument {
        operation: operation.to_string(),
        reason: reason.into(),
    }
}

/// Creates a missing option error
pub fn missing_option(key: &str) -> BerksError {
    BerksError::MissingOption {
        key: key.to_string(),
    }
}
