//! In-memory dataset and finder over a fixed file list, for embedding and
//! tests.
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::config::CopyConfiguration;
use crate::types::{CopyableFile, Error, ErrorKind, Result};

use super::{CopyableDataset, DatasetFinder};

/// Declarative source file belonging to a [`StaticDataset`].
#[derive(Clone, Debug)]
pub struct SourceFile {
    /// Path on the source store; must live under the dataset root.
    pub path: PathBuf,
    /// Grouping key assigning the file to a partition.
    pub file_set: String,
    /// Opaque copy metadata passed through onto the copyable file.
    pub metadata: BTreeMap<String, String>,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>, file_set: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            file_set: file_set.into(),
            metadata: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

/// Dataset backed by a fixed list of source files.
///
/// Destinations are derived as `target_root / (path relative to dataset_root)`.
/// A file whose origin was already claimed through the run's shared
/// [`crate::config::CopyContext`] by an earlier dataset is skipped, so a file
/// visible from two datasets is planned exactly once per run.
#[derive(Clone, Debug)]
pub struct StaticDataset {
    root: PathBuf,
    files: Vec<SourceFile>,
}

impl StaticDataset {
    pub fn new(root: impl Into<PathBuf>, files: Vec<SourceFile>) -> Self {
        Self {
            root: root.into(),
            files,
        }
    }
}

impl CopyableDataset for StaticDataset {
    fn dataset_root(&self) -> &Path {
        &self.root
    }

    fn copyable_files(&self, configuration: &CopyConfiguration) -> Result<Vec<CopyableFile>> {
        let mut out = Vec::with_capacity(self.files.len());
        for file in &self.files {
            if !configuration
                .copy_context()
                .claim(&file.path.display().to_string())
            {
                continue;
            }
            let rel = file.path.strip_prefix(&self.root).map_err(|_| {
                Error::new(
                    ErrorKind::InvalidPath,
                    format!(
                        "source file {} is not under dataset root {}",
                        file.path.display(),
                        self.root.display()
                    ),
                )
            })?;
            let destination = configuration.target_root().join(rel);
            let mut copyable = CopyableFile::new(file.file_set.clone(), &file.path, destination);
            copyable.metadata = file.metadata.clone();
            out.push(copyable);
        }
        Ok(out)
    }
}

/// Finder over a fixed set of datasets sharing a declared common root.
#[derive(Clone, Debug)]
pub struct StaticDatasetFinder {
    common_root: PathBuf,
    datasets: Vec<StaticDataset>,
}

impl StaticDatasetFinder {
    pub fn new(common_root: impl Into<PathBuf>, datasets: Vec<StaticDataset>) -> Self {
        Self {
            common_root: common_root.into(),
            datasets,
        }
    }
}

impl DatasetFinder for StaticDatasetFinder {
    fn find_datasets(&self) -> Result<Vec<Box<dyn CopyableDataset>>> {
        Ok(self
            .datasets
            .iter()
            .map(|d| Box::new(d.clone()) as Box<dyn CopyableDataset>)
            .collect())
    }

    fn common_dataset_root(&self) -> PathBuf {
        self.common_root.clone()
    }
}
