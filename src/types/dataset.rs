//! Serializable dataset snapshot attached to every work unit.
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::errors::{Error, ErrorKind, Result};

/// Snapshot of a dataset sufficient to reconstruct where its files came from
/// and where they are published to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyableDatasetMetadata {
    pub dataset_root: PathBuf,
    pub target_root: PathBuf,
}

impl CopyableDatasetMetadata {
    pub fn new(dataset_root: impl Into<PathBuf>, target_root: impl Into<PathBuf>) -> Self {
        Self {
            dataset_root: dataset_root.into(),
            target_root: target_root.into(),
        }
    }

    /// Stable pairing identifying this (dataset, target) for downstream
    /// bookkeeping, e.g. `/data/a#/out/a`.
    #[must_use]
    pub fn dataset_urn(&self) -> String {
        format!(
            "{}#{}",
            self.dataset_root.display(),
            self.target_root.display()
        )
    }

    /// Encode to the JSON wire form stored on work units.
    pub fn encode(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| {
            Error::new(
                ErrorKind::Serde,
                format!(
                    "encoding dataset metadata {}: {e}",
                    self.dataset_root.display()
                ),
            )
        })
    }

    /// Decode the wire form; round-trips [`encode`](Self::encode).
    pub fn decode(s: &str) -> Result<Self> {
        serde_json::from_str(s)
            .map_err(|e| Error::new(ErrorKind::Serde, format!("decoding dataset metadata: {e}")))
    }
}
