//! Named, ordered groups of items sharing a grouping key.
use serde::{Deserialize, Serialize};

/// A named, ordered group of items sharing the same grouping key.
///
/// Built once via an accumulating [`PartitionBuilder`], then frozen; insertion
/// order is the discovery order of the grouped items.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partition<T> {
    name: String,
    files: Vec<T>,
}

impl<T> Partition<T> {
    /// Start accumulating a partition with the given name.
    #[must_use]
    pub fn builder(name: impl Into<String>) -> PartitionBuilder<T> {
        PartitionBuilder {
            name: name.into(),
            files: Vec::new(),
        }
    }

    /// The grouping key every item in this partition shares.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Items in insertion order.
    #[must_use]
    pub fn files(&self) -> &[T] {
        &self.files
    }

    /// Consume the partition, yielding its items in insertion order.
    #[must_use]
    pub fn into_files(self) -> Vec<T> {
        self.files
    }
}

/// Accumulating builder for a [`Partition`].
#[derive(Debug)]
pub struct PartitionBuilder<T> {
    name: String,
    files: Vec<T>,
}

impl<T> PartitionBuilder<T> {
    pub fn add(&mut self, item: T) -> &mut Self {
        self.files.push(item);
        self
    }

    /// Freeze the accumulated items into an immutable partition.
    #[must_use]
    pub fn build(self) -> Partition<T> {
        Partition {
            name: self.name,
            files: self.files,
        }
    }
}
