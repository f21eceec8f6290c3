//! Lockfile (Berksfile.lock) main module
//!
//! The lockfile records the cookbook sources a manifest resolved to, the
//! manifest fingerprint at resolution time and free-form options, so later
//! installs can reuse that resolution instead of computing a new one.

pub mod options;
pub mod serialization;

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, trace};

use crate::error::{
    Result, file_read_failed, file_write_failed, invalid_argument, lockfile_not_found,
};
use crate::lockfile::serialization::{decode_document, decode_sources, serialize_lockfile};
use crate::source::{CookbookSource, LockedCookbook};

pub use options::{LockfileOptions, MANIFEST_PATH_OPTION};

/// Extension appended to the manifest path to name its lockfile
pub const LOCKFILE_EXTENSION: &str = "lock";

/// Lockfile structure (Berksfile.lock)
#[derive(Debug, Clone, PartialEq)]
pub struct Lockfile<S: CookbookSource = LockedCookbook> {
    /// Resolved sources in insertion order
    sources: Vec<S>,

    /// Manifest content identity at last resolution, `None` when unknown
    pub fingerprint: Option<String>,

    /// Free-form options, see [`MANIFEST_PATH_OPTION`]
    options: LockfileOptions,
}

impl<S: CookbookSource> Default for Lockfile<S> {
    fn default() -> Self {
        Self::with_options(LockfileOptions::new())
    }
}

impl<S: CookbookSource> Serialize for Lockfile<S> {
    fn serialize<Ser>(&self, serializer: Ser) -> std::result::Result<Ser::Ok, Ser::Error>
    where
        Ser: serde::Serializer,
    {
        serialize_lockfile(
            self.fingerprint.as_deref(),
            &self.sources,
            &self.options,
            serializer,
        )
    }
}

impl<S: CookbookSource> Lockfile<S> {
    /// Create a lockfile from already resolved sources
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if any source fails validation.
    pub fn new(sources: Vec<S>, options: LockfileOptions) -> Result<Self> {
        let mut lockfile = Self::with_options(options);
        lockfile.update(sources)?;
        Ok(lockfile)
    }

    /// Create an empty lockfile
    pub fn with_options(options: LockfileOptions) -> Self {
        Self {
            sources: Vec::new(),
            fingerprint: None,
            options,
        }
    }

    /// Load a lockfile from disk
    ///
    /// # Errors
    ///
    /// `LockfileNotFound` when `path` does not exist, `FileReadFailed` for any
    /// other read error and `LockfileDecodeFailed` when the document or one of
    /// its sources cannot be decoded.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => lockfile_not_found(path),
            _ => file_read_failed(path, &e),
        })?;

        let lockfile = Self::decode(&content, &path.display().to_string())?;
        debug!(
            path = %path.display(),
            sources = lockfile.sources.len(),
            "loaded lockfile"
        );
        Ok(lockfile)
    }

    /// Parse a lockfile from its JSON text
    ///
    /// # Errors
    ///
    /// Returns `LockfileDecodeFailed` when the document or a source is malformed.
    pub fn from_json(json: &str) -> Result<Self> {
        Self::decode(json.as_bytes(), "<input>")
    }

    fn decode(content: &[u8], origin: &str) -> Result<Self> {
        let raw = decode_document(content, origin)?;
        let sources = decode_sources(raw.sources, origin)?;
        Ok(Self {
            sources,
            fingerprint: raw.fingerprint,
            options: raw.options,
        })
    }

    /// Resolved sources in insertion order
    pub fn sources(&self) -> &[S] {
        &self.sources
    }

    pub fn fingerprint(&self) -> Option<&str> {
        self.fingerprint.as_deref()
    }

    pub fn set_fingerprint(&mut self, fingerprint: impl Into<String>) {
        self.fingerprint = Some(fingerprint.into());
    }

    pub fn options(&self) -> &LockfileOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut LockfileOptions {
        &mut self.options
    }

    /// Replace every source
    ///
    /// All candidates are validated first; on failure the current sources are
    /// left untouched. Duplicates are kept.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` naming the first invalid source.
    pub fn update(&mut self, sources: Vec<S>) -> Result<()> {
        validate_all("update", &sources)?;
        debug!(
            previous = self.sources.len(),
            current = sources.len(),
            "replacing lockfile sources"
        );
        self.sources = sources;
        Ok(())
    }

    /// Replace every source with a single one
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `source` fails validation.
    pub fn update_one(&mut self, source: S) -> Result<()> {
        self.update(vec![source])
    }

    /// Replace every source from decoded JSON values
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if any value is not a cookbook source.
    pub fn update_decoded(&mut self, values: Vec<Value>) -> Result<()> {
        let sources = values
            .into_iter()
            .enumerate()
            .map(|(index, value)| {
                S::from_decoded(value)
                    .map_err(|e| invalid_argument("update", format!("sources[{index}]: {e}")))
            })
            .collect::<Result<Vec<_>>>()?;
        self.update(sources)
    }

    /// Append a source unless an equal one is already present
    ///
    /// Returns `true` when the source was added.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `source` fails validation.
    pub fn append(&mut self, source: S) -> Result<bool> {
        validate_source("append", &source)?;

        if self.sources.contains(&source) {
            trace!(name = source.name(), "source already locked");
            return Ok(false);
        }

        self.sources.push(source);
        Ok(true)
    }

    /// Append a source given as a decoded JSON value
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `value` is not a cookbook source.
    pub fn append_decoded(&mut self, value: Value) -> Result<bool> {
        let source =
            S::from_decoded(value).map_err(|e| invalid_argument("append", e.to_string()))?;
        self.append(source)
    }

    /// Structured representation: `fingerprint`, `sources`, `options`
    ///
    /// # Errors
    ///
    /// Returns `LockfileEncodeFailed` if a source cannot be represented.
    pub fn to_hash(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Canonical pretty-printed text of the lockfile
    ///
    /// # Errors
    ///
    /// Returns `LockfileEncodeFailed` if a source cannot be represented.
    pub fn to_text(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Lockfile name derived from the manifest path (`<manifest>.lock`)
    ///
    /// # Errors
    ///
    /// Returns `MissingOption` when no manifest path is set.
    pub fn lockfile_name(&self) -> Result<String> {
        let manifest_path = self.options.manifest_path()?;
        Ok(format!("{manifest_path}.{LOCKFILE_EXTENSION}"))
    }

    /// [`Self::lockfile_name`] as a path
    ///
    /// # Errors
    ///
    /// Returns `MissingOption` when no manifest path is set.
    pub fn lockfile_path(&self) -> Result<PathBuf> {
        self.lockfile_name().map(PathBuf::from)
    }

    /// Write the lockfile next to its manifest, replacing any existing file
    ///
    /// # Errors
    ///
    /// `MissingOption` without a manifest path, `FileWriteFailed` on I/O errors.
    pub fn save(&self) -> Result<()> {
        let path = self.lockfile_path()?;
        let content = self.to_text()?;

        {
            let mut file = File::create(&path).map_err(|e| file_write_failed(&path, &e))?;
            writeln!(file, "{content}").map_err(|e| file_write_failed(&path, &e))?;
        }

        debug!(
            path = %path.display(),
            sources = self.sources.len(),
            "saved lockfile"
        );
        Ok(())
    }

    /// Alias of [`Self::save`]
    ///
    /// # Errors
    ///
    /// See [`Self::save`].
    pub fn write(&self) -> Result<()> {
        self.save()
    }
}

fn validate_source<S: CookbookSource>(operation: &str, source: &S) -> Result<()> {
    source
        .validate()
        .map_err(|reason| invalid_argument(operation, reason))
}

fn validate_all<S: CookbookSource>(operation: &str, sources: &[S]) -> Result<()> {
    sources
        .iter()
        .try_for_each(|source| validate_source(operation, source))
}
