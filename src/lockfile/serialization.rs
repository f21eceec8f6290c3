//! Serialization implementations for Lockfile

use serde::ser::{Error as _, SerializeSeq, SerializeStruct};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use crate::error::{Result, lockfile_decode_failed};
use crate::lockfile::options::LockfileOptions;
use crate::source::CookbookSource;

/// Serialize Lockfile fields in their canonical order
pub fn serialize_lockfile<S, C>(
    fingerprint: Option<&str>,
    sources: &[C],
    options: &LockfileOptions,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
    C: CookbookSource,
{
    let mut state = serializer.serialize_struct("Lockfile", 3)?;
    state.serialize_field("fingerprint", &fingerprint)?;
    state.serialize_field("sources", &SourceHashes(sources))?;
    state.serialize_field("options", options)?;
    state.end()
}

/// Serializes each source through its own structured representation
struct SourceHashes<'a, C>(&'a [C]);

impl<C: CookbookSource> Serialize for SourceHashes<'_, C> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.0.len()))?;
        for source in self.0 {
            let hash = source.to_hash().map_err(S::Error::custom)?;
            seq.serialize_element(&hash)?;
        }
        seq.end()
    }
}

/// Lockfile document as decoded, before sources are materialized
#[derive(Debug, Deserialize)]
pub struct RawLockfile {
    pub sources: Vec<Value>,
    #[serde(default)]
    pub options: LockfileOptions,
    #[serde(default)]
    pub fingerprint: Option<String>,
}

/// Decode a lockfile document; `origin` names it in errors
pub fn decode_document(content: &[u8], origin: &str) -> Result<RawLockfile> {
    serde_json::from_slice(content).map_err(|e| lockfile_decode_failed(origin, e))
}

/// Materialize and validate every decoded source in order, failing on the first bad one
pub fn decode_sources<C: CookbookSource>(values: Vec<Value>, origin: &str) -> Result<Vec<C>> {
    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            let source = C::from_decoded(value)
                .map_err(|e| lockfile_decode_failed(origin, format!("sources[{index}]: {e}")))?;
            source.validate().map_err(|reason| {
                lockfile_decode_failed(origin, format!("sources[{index}]: {reason}"))
            })?;
            Ok(source)
        })
        .collect()
}
