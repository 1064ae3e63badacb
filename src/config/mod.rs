//! Flat job configuration, per-dataset copy configuration, and the run-scoped
//! shared context.
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::{LOCAL_FS_URI, SOURCE_FS_URI_KEY};
use crate::types::{Error, ErrorKind, Result};

/// Flat string-to-string property bag supplying job configuration and carried
/// onto every work unit.
///
/// Backed by a sorted map so iteration and serialization are deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Properties(BTreeMap<String, String>);

impl Properties {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Copy every entry from `other`, overwriting existing keys.
    pub fn add_all(&mut self, other: &Properties) {
        for (k, v) in &other.0 {
            self.0.insert(k.clone(), v.clone());
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// URI of the source store, defaulting to the local filesystem. Dataset
    /// finder implementations read this when constructing store clients.
    #[must_use]
    pub fn source_fs_uri(&self) -> &str {
        self.get(SOURCE_FS_URI_KEY).unwrap_or(LOCAL_FS_URI)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Properties {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Run-scoped shared state letting later datasets observe copy decisions made
/// by earlier ones in the same planning run.
///
/// One context is created per run and injected into every dataset's
/// [`CopyConfiguration`]; it is the only cross-dataset mutable resource, and
/// all access serializes through internal mutexes. Never a process-wide
/// singleton.
#[derive(Debug, Default)]
pub struct CopyContext {
    claimed: Mutex<BTreeSet<String>>,
    cache: Mutex<BTreeMap<String, Value>>,
}

impl CopyContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// First-claim-wins registration of a planning decision.
    ///
    /// Returns `true` the first time a key is claimed in this run and `false`
    /// on every later claim. Datasets use it to suppress duplicate planning of
    /// a file visible from more than one of them.
    pub fn claim(&self, key: &str) -> bool {
        self.claimed
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string())
    }

    /// Memoize an arbitrary lookup result for the rest of the run.
    pub fn put(&self, key: impl Into<String>, value: Value) {
        self.cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.into(), value);
    }

    /// Read back a value stored with [`put`](Self::put).
    #[must_use]
    pub fn get(&self, key: &str) -> Option<Value> {
        self.cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }
}

/// Immutable configuration for one dataset's planning pass: the job properties,
/// the resolved target root, and the run-wide shared [`CopyContext`].
#[derive(Clone, Debug)]
pub struct CopyConfiguration {
    properties: Properties,
    target_root: PathBuf,
    context: Arc<CopyContext>,
}

impl CopyConfiguration {
    /// Start building a configuration from the job's properties.
    #[must_use]
    pub fn builder(properties: &Properties) -> CopyConfigurationBuilder {
        CopyConfigurationBuilder {
            properties: properties.clone(),
            target_root: None,
            context: None,
        }
    }

    #[must_use]
    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    /// Destination root all of this dataset's files are published under.
    #[must_use]
    pub fn target_root(&self) -> &Path {
        &self.target_root
    }

    #[must_use]
    pub fn copy_context(&self) -> &Arc<CopyContext> {
        &self.context
    }
}

/// Builder for [`CopyConfiguration`]; `target_root` is required.
pub struct CopyConfigurationBuilder {
    properties: Properties,
    target_root: Option<PathBuf>,
    context: Option<Arc<CopyContext>>,
}

impl CopyConfigurationBuilder {
    #[must_use]
    pub fn target_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.target_root = Some(root.into());
        self
    }

    #[must_use]
    pub fn copy_context(mut self, context: Arc<CopyContext>) -> Self {
        self.context = Some(context);
        self
    }

    pub fn build(self) -> Result<CopyConfiguration> {
        let target_root = self.target_root.ok_or_else(|| {
            Error::new(ErrorKind::Config, "copy configuration requires a target root")
        })?;
        Ok(CopyConfiguration {
            properties: self.properties,
            target_root,
            context: self.context.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn claim_is_first_claim_wins() {
        let ctx = CopyContext::new();
        assert!(ctx.claim("/data/a/f1"));
        assert!(!ctx.claim("/data/a/f1"));
        assert!(ctx.claim("/data/a/f2"));
    }

    #[test]
    fn cache_round_trips_values() {
        let ctx = CopyContext::new();
        assert_eq!(ctx.get("k"), None);
        ctx.put("k", json!({"exists": true}));
        assert_eq!(ctx.get("k"), Some(json!({"exists": true})));
    }

    #[test]
    fn builder_requires_target_root() {
        let err = CopyConfiguration::builder(&Properties::new())
            .build()
            .unwrap_err();
        assert!(matches!(err.kind, ErrorKind::Config));
    }

    #[test]
    fn source_fs_uri_defaults_to_local() {
        let props = Properties::new();
        assert_eq!(props.source_fs_uri(), "file:///");
        let props: Properties = [(SOURCE_FS_URI_KEY, "hdfs://nn:8020")].into_iter().collect();
        assert_eq!(props.source_fs_uri(), "hdfs://nn:8020");
    }
}
