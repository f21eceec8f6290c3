//! File system errors

use std::path::Path;

use super::BerksError;

/// Creates a file read error
pub fn read_failed(path: &Path, err: &std::io::Error) -> BerksError {
    BerksError::FileReadFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Creates a file write error
pub fn write_failed(path: &Path, err: &std::io::Error) -> BerksError {
    BerksError::FileWriteFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}
