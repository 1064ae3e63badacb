//! Group copyable files into partitions keyed by file set.
use indexmap::IndexMap;

use crate::types::{CopyableFile, Partition, PartitionBuilder};

/// Group files by file set in a single pass.
///
/// One partition per distinct file set, holding all files with that key in
/// first-seen order; partitions themselves come out in first-seen order too.
/// Empty input yields empty output.
#[must_use]
pub fn partition_copyable_files(files: Vec<CopyableFile>) -> Vec<Partition<CopyableFile>> {
    let mut builders: IndexMap<String, PartitionBuilder<CopyableFile>> = IndexMap::new();
    for file in files {
        builders
            .entry(file.file_set.clone())
            .or_insert_with(|| Partition::builder(file.file_set.clone()))
            .add(file);
    }
    builders.into_values().map(PartitionBuilder::build).collect()
}
