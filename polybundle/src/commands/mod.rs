//! Command implementations for the CLI.

mod clean;
mod discovery;

use std::path::PathBuf;

use anyhow::Result;
use polybundle_core::{select_packages, Package, PackageLoader, WorkspaceConfig};

pub use clean::cmd_clean;
pub use discovery::{cmd_list, cmd_plan};

/// Workspace root, its configuration, and where packages live.
pub struct Workspace {
    pub config: WorkspaceConfig,
    pub packages_dir: PathBuf,
}

impl Workspace {
    pub fn open(root: PathBuf, packages_dir: Option<PathBuf>) -> Result<Self> {
        let config = WorkspaceConfig::load(&root)?;
        let packages_dir = packages_dir.unwrap_or_else(|| config.packages_path(&root));
        Ok(Self {
            config,
            packages_dir,
        })
    }

    fn loader(&self) -> PackageLoader {
        PackageLoader::new(&self.packages_dir).with_options(self.config.derive_options())
    }

    /// Loads every package, then narrows to `names` if any are given.
    fn load_packages(&self, names: &[String]) -> Result<Vec<Package>> {
        let packages = self.loader().load()?;
        Ok(select_packages(packages, names)?)
    }
}
