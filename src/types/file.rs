//! The smallest unit of copy work: one file plus its pass-through metadata.
use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::errors::{Error, ErrorKind, Result};

/// One file to be copied.
///
/// `file_set` must be stable and deterministic for a given source file across
/// planning runs; resumption hinges on it. A copyable file is serialized into
/// exactly one work unit and never mutated after creation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyableFile {
    /// Grouping key: files sharing a file set land in the same partition.
    pub file_set: String,
    /// Path of the file on the source store.
    pub origin: PathBuf,
    /// Path the file will be written to on the destination store.
    pub destination: PathBuf,
    /// Opaque copy metadata (permissions, checksums, ...), passed through
    /// unmodified. Sorted map so the encoded form, and therefore the work-unit
    /// guid, never depends on unordered iteration.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
}

impl CopyableFile {
    pub fn new(
        file_set: impl Into<String>,
        origin: impl Into<PathBuf>,
        destination: impl Into<PathBuf>,
    ) -> Self {
        Self {
            file_set: file_set.into(),
            origin: origin.into(),
            destination: destination.into(),
            metadata: BTreeMap::new(),
        }
    }

    /// Attach one opaque metadata entry.
    #[must_use]
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Encode to the JSON wire form stored on work units.
    pub fn encode(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| {
            Error::new(
                ErrorKind::Serde,
                format!("encoding copyable file {}: {e}", self.origin.display()),
            )
        })
    }

    /// Decode the wire form; round-trips [`encode`](Self::encode).
    pub fn decode(s: &str) -> Result<Self> {
        serde_json::from_str(s)
            .map_err(|e| Error::new(ErrorKind::Serde, format!("decoding copyable file: {e}")))
    }
}
