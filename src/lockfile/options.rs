//! Free-form lockfile options
//!
//! Options are persisted verbatim. The only key the lockfile itself reads is
//! [`MANIFEST_PATH_OPTION`], from which the lockfile location is derived.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{BerksError, Result, missing_option};

/// Option holding the path of the manifest the lockfile belongs to
pub const MANIFEST_PATH_OPTION: &str = "manifest_path";

/// Option mapping stored alongside the sources, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LockfileOptions(Map<String, Value>);

impl LockfileOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options with only the manifest path set
    pub fn for_manifest(manifest_path: impl Into<String>) -> Self {
        let mut options = Self::new();
        options.set_manifest_path(manifest_path);
        options
    }

    /// Path of the manifest this lockfile belongs to
    ///
    /// # Errors
    ///
    /// `MissingOption` when the key is absent, `InvalidOption` when it is not a string.
    pub fn manifest_path(&self) -> Result<&str> {
        match self.0.get(MANIFEST_PATH_OPTION) {
            None => Err(missing_option(MANIFEST_PATH_OPTION)),
            Some(Value::String(path)) => Ok(path),
            Some(other) => Err(BerksError::InvalidOption {
                key: MANIFEST_PATH_OPTION.to_string(),
                reason: format!("expected a string, found {other}"),
            }),
        }
    }

    pub fn set_manifest_path(&mut self, manifest_path: impl Into<String>) {
        self.0.insert(
            MANIFEST_PATH_OPTION.to_string(),
            Value::String(manifest_path.into()),
        );
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Insert an option, returning the previous value
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.shift_remove(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for LockfileOptions {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
