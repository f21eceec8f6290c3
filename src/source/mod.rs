//! Cookbook sources recorded in a lockfile
//!
//! The lockfile model only relies on the [`CookbookSource`] capability:
//! decoding from a JSON object, a structured representation for saving,
//! equality and a validity check. [`LockedCookbook`] is the Berkshelf
//! lock entry shape shipped with this crate.

pub mod cookbook;
pub mod location;

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::error::Result;

pub use cookbook::LockedCookbook;
pub use location::SourceLocation;

/// Capability every source stored in a [`crate::Lockfile`] must satisfy
pub trait CookbookSource: Clone + PartialEq + fmt::Debug + Serialize + Sized {
    /// Build a source from one decoded element of the lockfile's `sources` array
    ///
    /// # Errors
    ///
    /// Returns `SourceDecodeFailed` when `value` is not a well-formed source.
    fn from_decoded(value: Value) -> Result<Self>;

    /// Cookbook name, used for display and diagnostics
    fn name(&self) -> &str;

    /// Check that this value is a usable cookbook source
    ///
    /// The lockfile calls this at every mutation entry point and wraps the
    /// returned reason in an `InvalidArgument` error.
    ///
    /// # Errors
    ///
    /// Returns a human readable reason when the source is not usable.
    fn validate(&self) -> std::result::Result<(), String> {
        Ok(())
    }

    /// Structured representation written into the lockfile
    ///
    /// # Errors
    ///
    /// Returns `LockfileEncodeFailed` when the source cannot be represented as JSON.
    fn to_hash(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}
