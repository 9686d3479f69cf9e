//! Workspace configuration read from `polybundle.toml`.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::outputs::DeriveOptions;

pub const CONFIG_FILE: &str = "polybundle.toml";

fn default_packages_dir() -> String {
    "packages".to_string()
}

fn default_dist_dir() -> String {
    "dist".to_string()
}

/// UMD externals and the globals they are expected under in the browser.
pub fn default_globals() -> IndexMap<String, String> {
    IndexMap::from([
        ("react".to_string(), "React".to_string()),
        ("@emotion/core".to_string(), "emotionCore".to_string()),
    ])
}

/// Workspace-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceConfig {
    /// Directory holding the packages, relative to the workspace root.
    #[serde(default = "default_packages_dir")]
    pub packages_dir: String,
    /// Per-package build output directory removed by `clean`.
    #[serde(default = "default_dist_dir")]
    pub dist_dir: String,
    /// External module name to UMD global.
    #[serde(default = "default_globals")]
    pub globals: IndexMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    workspace: Option<WorkspaceConfig>,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            packages_dir: default_packages_dir(),
            dist_dir: default_dist_dir(),
            globals: default_globals(),
        }
    }
}

impl WorkspaceConfig {
    /// Loads `polybundle.toml` from the workspace root.
    ///
    /// A missing file or a file without a `[workspace]` table yields the
    /// defaults; a file that fails to parse is an error.
    pub fn load(root: impl AsRef<Path>) -> Result<Self> {
        let config_path = root.as_ref().join(CONFIG_FILE);
        if !config_path.is_file() {
            debug!(path = %config_path.display(), "no workspace config, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&config_path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(content)?;
        Ok(file.workspace.unwrap_or_default())
    }

    pub fn packages_path(&self, root: &Path) -> PathBuf {
        root.join(&self.packages_dir)
    }

    pub fn derive_options(&self) -> DeriveOptions {
        DeriveOptions {
            globals: self.globals.clone(),
        }
    }
}
