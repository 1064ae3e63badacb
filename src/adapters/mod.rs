//! External-collaborator boundaries: datasets, dataset finders, and the
//! factory that constructs a finder from job configuration.
//!
//! The planner depends only on these capabilities, never on concrete dataset
//! kinds; variant implementations are selected by the embedding job driver.

use std::path::{Path, PathBuf};

use crate::config::{CopyConfiguration, Properties};
use crate::types::{CopyableFile, Result};

mod static_finder;

pub use static_finder::{SourceFile, StaticDataset, StaticDatasetFinder};

/// A logical, source-rooted collection of files to copy.
///
/// Implementations decide which files still need copying under the given
/// configuration (destination-existence checks and the like) and may consult
/// the configuration's shared [`crate::config::CopyContext`] to coordinate
/// with datasets planned earlier in the same run. Enumeration is read-only;
/// an I/O failure is fatal for the whole planning run.
pub trait CopyableDataset: Send + Sync {
    /// Root path of this dataset on the source store.
    fn dataset_root(&self) -> &Path;

    /// Enumerate the files that still need copying under `configuration`.
    fn copyable_files(&self, configuration: &CopyConfiguration) -> Result<Vec<CopyableFile>>;
}

/// Discovers the datasets of one planning run.
pub trait DatasetFinder: Send + Sync {
    /// All discoverable datasets, in discovery order.
    fn find_datasets(&self) -> Result<Vec<Box<dyn CopyableDataset>>>;

    /// Longest common ancestor path across all discoverable datasets; target
    /// roots are derived relative to it.
    fn common_dataset_root(&self) -> PathBuf;
}

/// Constructs a [`DatasetFinder`] from job properties.
///
/// Factories typically dispatch on [`crate::constants::DATASET_FINDER_KEY`]
/// and read [`Properties::source_fs_uri`] when building store clients.
/// Implemented for closures too, so a driver can pass
/// `|props| Ok(Box::new(...) as Box<dyn DatasetFinder>)` directly.
pub trait DatasetFinderFactory {
    fn create(&self, properties: &Properties) -> Result<Box<dyn DatasetFinder>>;
}

impl<F> DatasetFinderFactory for F
where
    F: Fn(&Properties) -> Result<Box<dyn DatasetFinder>>,
{
    fn create(&self, properties: &Properties) -> Result<Box<dyn DatasetFinder>> {
        self(properties)
    }
}
