//! Package descriptors.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::manifest::{EntryField, FieldTypeError, Manifest};
use crate::outputs::BuildConfig;
use crate::paths;

/// A discovered package together with its derived build plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    /// Name declared in the manifest, if it is a string.
    pub name: Option<String>,
    /// Absolute package directory.
    pub path: PathBuf,
    pub manifest: Manifest,
    /// Bundle entry point, `<path>/src/index.js`.
    pub input: PathBuf,
    pub configs: Vec<BuildConfig>,
}

impl Package {
    /// Creates a descriptor with an empty build plan.
    pub fn new(path: impl AsRef<Path>, manifest: Manifest) -> Self {
        let path = path.as_ref().to_path_buf();
        Self {
            name: manifest.name().ok().flatten().map(str::to_owned),
            input: path.join("src").join("index.js"),
            path,
            manifest,
            configs: Vec::new(),
        }
    }

    /// Declared name, falling back to the directory name for display.
    pub fn display_name(&self) -> String {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => self
                .path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| self.path.display().to_string()),
        }
    }

    /// Absolute path of an entry field, honouring browser replacements.
    #[inline]
    pub fn resolve_entry(
        &self,
        field: EntryField,
        is_browser: bool,
    ) -> Result<Option<PathBuf>, FieldTypeError> {
        Ok(self
            .manifest
            .entry_for_target(field, is_browser)?
            .map(|value| paths::resolve(&self.path, value)))
    }

    #[inline]
    pub fn is_buildable(&self) -> bool {
        !self.configs.is_empty()
    }
}
