//! Shared crate-wide constants.
//!
//! Centralizes the well-known property keys written onto work units. The
//! serialized-file, serialized-dataset, guid, and dataset-urn keys form the
//! wire contract with the execution layer and must stay byte-for-byte stable
//! between releases.

/// Namespace prefix for copy-planning property keys and extract identities.
pub const COPY_PREFIX: &str = "copy";

/// Work-unit property holding the JSON-encoded `CopyableFile`.
pub const SERIALIZED_COPYABLE_FILE: &str = "copy.serialized.copyable.file";

/// Work-unit property holding the JSON-encoded `CopyableDatasetMetadata`.
pub const SERIALIZED_COPYABLE_DATASET: &str = "copy.serialized.copyable.dataset";

/// Work-unit property holding the hex guid identifying the planned copy operation.
pub const WORK_UNIT_GUID: &str = "copy.work.unit.guid";

/// Work-unit property holding the dataset urn (`<dataset root>#<target root>`).
pub const DATASET_URN_KEY: &str = "dataset.urn";

/// Work-unit tag naming the dataset root a work unit was planned from.
pub const DATASET_ROOT_KEY: &str = "copy.dataset.root";

/// Work-unit property naming the partition (file set) the unit belongs to.
pub const PARTITION_KEY: &str = "partition";

/// Required job property: base directory under which all targets are published.
/// Its absence fails a planning run before any dataset is touched.
pub const DATA_PUBLISHER_FINAL_DIR: &str = "data.publisher.final.dir";

/// Optional job property: converter/transform chain descriptor. Folded into
/// work-unit guids, so changing the chain changes every unit's identity.
pub const CONVERTER_CLASSES_KEY: &str = "converter.classes";

/// Job property: descriptor naming the dataset finder implementation to
/// construct; consumed by finder factories.
pub const DATASET_FINDER_KEY: &str = "dataset.finder.class";

/// Job property: URI of the source store, read by dataset finder implementations.
pub const SOURCE_FS_URI_KEY: &str = "source.fs.uri";

/// Default source store URI when none is configured.
pub const LOCAL_FS_URI: &str = "file:///";

/// UUIDv5 namespace tag for the deterministic plan id keyed into emitted facts.
pub const NS_TAG: &str = "https://copyplan/plan";
