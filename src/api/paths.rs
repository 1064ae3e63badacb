//! Target-root resolution.
//!
//! Destination hierarchies mirror the relative layout of datasets under their
//! shared discovery root, independent of the source store's absolute paths or
//! URI scheme.
use std::path::{Path, PathBuf};

use crate::types::{Error, ErrorKind, Result};

/// Resolve the destination root for one dataset.
///
/// Strips any `scheme://authority` prefix from both roots (they may be
/// absolute URIs on stores with schemes different from the destination's),
/// relativizes the dataset root against the common root, and appends the
/// relative part to `base_publish_dir`. When the dataset root equals the
/// common root, the result is `base_publish_dir` exactly.
///
/// A dataset root that does not live under the common root is an error; a
/// planning run must be fully consistent or fail.
pub fn resolve_target_root(
    base_publish_dir: &Path,
    dataset_root: &Path,
    common_dataset_root: &Path,
) -> Result<PathBuf> {
    let dataset = strip_scheme_and_authority(dataset_root);
    let common = strip_scheme_and_authority(common_dataset_root);
    let rel = dataset.strip_prefix(&common).map_err(|_| {
        Error::new(
            ErrorKind::InvalidPath,
            format!(
                "dataset root {} is not under the common dataset root {}",
                dataset.display(),
                common.display()
            ),
        )
    })?;
    if rel.as_os_str().is_empty() {
        return Ok(base_publish_dir.to_path_buf());
    }
    Ok(base_publish_dir.join(rel))
}

/// Drop a `scheme://authority` prefix, keeping the absolute path component.
fn strip_scheme_and_authority(path: &Path) -> PathBuf {
    let s = path.to_string_lossy();
    let Some(idx) = s.find("://") else {
        return path.to_path_buf();
    };
    let rest = &s[idx + 3..];
    match rest.find('/') {
        Some(slash) => PathBuf::from(&rest[slash..]),
        None => PathBuf::from("/"),
    }
}
