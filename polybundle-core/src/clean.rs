//! Removal of package build output ahead of a rebuild.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;
use crate::package::Package;

/// Recursively deletes `<package_path>/<dist_dir>`.
///
/// Returns the removed directory, or `None` if there was nothing to remove.
pub fn clean_dist(package_path: impl AsRef<Path>, dist_dir: &str) -> Result<Option<PathBuf>> {
    let dist = package_path.as_ref().join(dist_dir);
    match std::fs::remove_dir_all(&dist) {
        Ok(()) => {
            debug!(path = %dist.display(), "removed build output");
            Ok(Some(dist))
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Cleans every package, stopping at the first failure.
pub fn clean_all(packages: &[Package], dist_dir: &str) -> Result<Vec<PathBuf>> {
    let mut removed = Vec::new();
    for package in packages {
        if let Some(dist) = clean_dist(&package.path, dist_dir)? {
            removed.push(dist);
        }
    }
    Ok(removed)
}
