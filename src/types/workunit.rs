//! Serializable units of planned copy work.
use serde::{Deserialize, Serialize};

use crate::config::Properties;

/// Table type of an extract. Copy planning only ever produces snapshots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TableType {
    Snapshot,
}

/// Logical grouping identity shared by every work unit of one partition, used
/// by downstream consumers that expect one logical extraction per partition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extract {
    pub table_type: TableType,
    pub namespace: String,
    pub name: String,
}

impl Extract {
    pub fn new(
        table_type: TableType,
        namespace: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            table_type,
            namespace: namespace.into(),
            name: name.into(),
        }
    }
}

/// The unit of planned copy work handed to the execution layer.
///
/// Carries exactly one copyable file (serialized into the property bag under
/// the wire-contract keys in [`crate::constants`]) plus dataset, partition,
/// and guid tags. Immutable once the planner returns it; freely shareable
/// across threads without synchronization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkUnit {
    extract: Extract,
    props: Properties,
}

impl WorkUnit {
    #[must_use]
    pub fn new(extract: Extract) -> Self {
        Self {
            extract,
            props: Properties::new(),
        }
    }

    #[must_use]
    pub fn extract(&self) -> &Extract {
        &self.extract
    }

    /// Copy every property from `other` into this work unit, overwriting
    /// existing keys.
    pub fn add_all(&mut self, other: &Properties) {
        self.props.add_all(other);
    }

    pub fn set_prop(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.props.set(key, value);
    }

    #[must_use]
    pub fn prop(&self, key: &str) -> Option<&str> {
        self.props.get(key)
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.props.contains(key)
    }

    #[must_use]
    pub fn props(&self) -> &Properties {
        &self.props
    }
}
