//! Package discovery for the packages directory.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use walkdir::WalkDir;

use crate::config::WorkspaceConfig;
use crate::error::{Error, Result};
use crate::manifest::Manifest;
use crate::outputs::{derive_configs, DeriveOptions};
use crate::package::Package;
use crate::paths;

pub const MANIFEST_FILE: &str = "package.json";

/// Source of package manifests.
///
/// `Ok(None)` means the directory has no manifest and is not a package.
/// Any other problem is an error and aborts discovery.
pub trait ManifestLoader: Send + Sync {
    fn load(&self, package_dir: &Path) -> Result<Option<Manifest>>;
}

/// Reads `package.json` from disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsManifestLoader;

impl ManifestLoader for FsManifestLoader {
    fn load(&self, package_dir: &Path) -> Result<Option<Manifest>> {
        let manifest_path = package_dir.join(MANIFEST_FILE);
        let content = match std::fs::read_to_string(&manifest_path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(Error::Manifest {
                    path: manifest_path,
                    source,
                })
            }
        };

        Manifest::from_json(&content)
            .map(Some)
            .map_err(|source| Error::Json {
                path: manifest_path,
                source,
            })
    }
}

/// Discovers the packages directly under a packages directory.
///
/// Every subdirectory with a manifest becomes a [`Package`] whose build
/// plan is derived on the spot. Subdirectories are visited in file name
/// order.
pub struct PackageLoader<L = FsManifestLoader> {
    packages_dir: PathBuf,
    loader: L,
    options: DeriveOptions,
}

impl PackageLoader<FsManifestLoader> {
    pub fn new(packages_dir: impl AsRef<Path>) -> Self {
        Self {
            packages_dir: packages_dir.as_ref().to_path_buf(),
            loader: FsManifestLoader,
            options: DeriveOptions::default(),
        }
    }

    pub fn from_workspace(root: impl AsRef<Path>, config: &WorkspaceConfig) -> Self {
        Self::new(config.packages_path(root.as_ref())).with_options(config.derive_options())
    }
}

impl<L: ManifestLoader> PackageLoader<L> {
    pub fn with_loader<M: ManifestLoader>(self, loader: M) -> PackageLoader<M> {
        PackageLoader {
            packages_dir: self.packages_dir,
            loader,
            options: self.options,
        }
    }

    pub fn with_options(mut self, options: DeriveOptions) -> Self {
        self.options = options;
        self
    }

    pub fn packages_dir(&self) -> &Path {
        &self.packages_dir
    }

    pub fn load(&self) -> Result<Vec<Package>> {
        let mut packages = Vec::new();

        for package_dir in self.package_dirs()? {
            let Some(manifest) = self.loader.load(&package_dir)? else {
                debug!(path = %package_dir.display(), "no manifest, skipping");
                continue;
            };

            let mut package = Package::new(&package_dir, manifest);
            package.configs = derive_configs(&package, &self.options)?;
            debug!(
                package = %package.display_name(),
                configs = package.configs.len(),
                "loaded package"
            );
            packages.push(package);
        }

        info!(
            count = packages.len(),
            dir = %self.packages_dir.display(),
            "discovered packages"
        );
        Ok(packages)
    }

    // Only a root that cannot be listed is fatal. Entries that cannot be
    // followed (dangling links, link loops) hold no reachable manifest and
    // are skipped like any other directory without one.
    fn package_dirs(&self) -> Result<Vec<PathBuf>> {
        let mut dirs = Vec::new();

        for entry in WalkDir::new(&self.packages_dir)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() == 0 => return Err(self.discovery_error(e.into())),
                Err(e) => {
                    debug!(error = %e, "unreadable entry in packages directory, skipping");
                    continue;
                }
            };

            if entry.depth() == 0 {
                if !entry.file_type().is_dir() {
                    return Err(self.discovery_error(std::io::Error::other("not a directory")));
                }
                continue;
            }

            if entry.file_type().is_dir() {
                dirs.push(absolute(entry.path())?);
            }
        }

        Ok(dirs)
    }

    fn discovery_error(&self, source: std::io::Error) -> Error {
        Error::Discovery {
            path: self.packages_dir.clone(),
            source,
        }
    }
}

fn absolute(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(paths::normalize(path))
    } else {
        Ok(paths::normalize(&std::env::current_dir()?.join(path)))
    }
}

/// Narrows `packages` to the given names, keeping discovery order.
///
/// An empty `names` selects everything; an unknown name is an error.
pub fn select_packages(packages: Vec<Package>, names: &[String]) -> Result<Vec<Package>> {
    if names.is_empty() {
        return Ok(packages);
    }

    if let Some(missing) = names
        .iter()
        .find(|name| !packages.iter().any(|p| &p.display_name() == *name))
    {
        let available = packages
            .iter()
            .map(Package::display_name)
            .collect::<Vec<_>>()
            .join(", ");
        return Err(Error::PackageNotFound {
            name: missing.clone(),
            available,
        });
    }

    Ok(packages
        .into_iter()
        .filter(|p| names.contains(&p.display_name()))
        .collect())
}
