//! Derivation of bundler configurations from package manifests.
//!
//! Three independent checks run in a fixed order, each contributing zero or
//! more [`BuildConfig`]s:
//!
//! 1. a `main` outside `src` adds a development and a production build,
//! 2. `umd:main` adds a UMD build,
//! 3. `browser` adds a browser-targeted CommonJS build.
//!
//! Derivation is pure: the same package always yields the same plan.

use std::fmt;
use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::config::default_globals;
use crate::error::{Error, Result};
use crate::manifest::{EntryField, FieldTypeError};
use crate::package::Package;
use crate::paths;

/// Module format of an output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Cjs,
    Es,
    Umd,
}

impl OutputFormat {
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Cjs => "cjs",
            OutputFormat::Es => "es",
            OutputFormat::Umd => "umd",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a CommonJS bundle exposes its exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportMode {
    Named,
}

/// A single destination file of a build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputTarget {
    pub format: OutputFormat,
    pub file: PathBuf,
    /// Only set for CommonJS outputs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exports: Option<ExportMode>,
    /// UMD global variable name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub sourcemap: bool,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub globals: IndexMap<String, String>,
}

impl OutputTarget {
    pub fn cjs(file: PathBuf) -> Self {
        Self {
            format: OutputFormat::Cjs,
            file,
            exports: Some(ExportMode::Named),
            name: None,
            sourcemap: false,
            globals: IndexMap::new(),
        }
    }

    pub fn es(file: PathBuf) -> Self {
        Self {
            format: OutputFormat::Es,
            file,
            exports: None,
            name: None,
            sourcemap: false,
            globals: IndexMap::new(),
        }
    }

    pub fn umd(file: PathBuf, name: String, globals: IndexMap<String, String>) -> Self {
        Self {
            format: OutputFormat::Umd,
            file,
            exports: None,
            name: Some(name),
            sourcemap: true,
            globals,
        }
    }
}

/// Settings handed to the bundler for one build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundlerOptions {
    pub input: PathBuf,
    pub is_browser: bool,
    pub is_umd: bool,
    pub is_prod: bool,
    /// Minify, but keep the output readable.
    pub minify_pretty: bool,
}

impl BundlerOptions {
    fn new(input: PathBuf) -> Self {
        Self {
            input,
            is_browser: false,
            is_umd: false,
            is_prod: false,
            minify_pretty: false,
        }
    }

    pub fn development(input: PathBuf) -> Self {
        Self::new(input)
    }

    pub fn production(input: PathBuf) -> Self {
        Self {
            is_prod: true,
            minify_pretty: true,
            ..Self::new(input)
        }
    }

    pub fn umd(input: PathBuf) -> Self {
        Self {
            is_browser: true,
            is_umd: true,
            ..Self::new(input)
        }
    }

    pub fn browser(input: PathBuf) -> Self {
        Self {
            is_browser: true,
            ..Self::new(input)
        }
    }

    /// Short label for the kind of build these options describe.
    pub fn kind(&self) -> &'static str {
        match (self.is_umd, self.is_browser, self.is_prod) {
            (true, _, _) => "umd",
            (false, true, _) => "browser",
            (false, false, true) => "production",
            (false, false, false) => "development",
        }
    }
}

/// A bundler configuration paired with the files it emits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildConfig {
    pub bundler: BundlerOptions,
    pub outputs: Vec<OutputTarget>,
}

/// Workspace-wide inputs to derivation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeriveOptions {
    /// Globals UMD bundles expect externals under.
    pub globals: IndexMap<String, String>,
}

impl Default for DeriveOptions {
    fn default() -> Self {
        Self {
            globals: default_globals(),
        }
    }
}

/// Absolute path of an entry field, failing if the manifest lacks it.
pub fn get_path(package: &Package, field: EntryField, is_browser: bool) -> Result<PathBuf> {
    package
        .resolve_entry(field, is_browser)
        .map_err(|source| invalid_field(package, source))?
        .ok_or_else(|| Error::MissingField {
            package: package.display_name(),
            field: field.as_str(),
        })
}

fn invalid_field(package: &Package, source: FieldTypeError) -> Error {
    Error::FieldType {
        package: package.display_name(),
        source,
    }
}

/// Derives the ordered build plan for a package.
pub fn derive_configs(package: &Package, options: &DeriveOptions) -> Result<Vec<BuildConfig>> {
    let manifest = &package.manifest;
    let mut configs = Vec::new();

    let main = manifest
        .entry(EntryField::Main)
        .map_err(|e| invalid_field(package, e))?;
    if main.is_some_and(|main| !main.contains("src")) {
        configs.push(BuildConfig {
            bundler: BundlerOptions::development(package.input.clone()),
            outputs: cjs_outputs(package, false)?,
        });

        let main = get_path(package, EntryField::Main, false)?;
        configs.push(BuildConfig {
            bundler: BundlerOptions::production(package.input.clone()),
            outputs: vec![OutputTarget::cjs(paths::prod_path(&main))],
        });
    }

    let umd_main = manifest
        .entry(EntryField::UmdMain)
        .map_err(|e| invalid_field(package, e))?;
    if umd_main.is_some() {
        configs.push(BuildConfig {
            bundler: BundlerOptions::umd(package.input.clone()),
            outputs: vec![umd_output(package, options)?],
        });
    }

    if manifest
        .has_browser()
        .map_err(|e| invalid_field(package, e))?
    {
        configs.push(BuildConfig {
            bundler: BundlerOptions::browser(package.input.clone()),
            outputs: cjs_outputs(package, true)?,
        });
    }

    Ok(configs)
}

// Browser builds keep the plain `main` path; node builds write `.dev.js`.
fn cjs_outputs(package: &Package, is_browser: bool) -> Result<Vec<OutputTarget>> {
    let cjs_path = get_path(package, EntryField::Main, is_browser)?;
    let file = if is_browser {
        cjs_path
    } else {
        paths::dev_path(&cjs_path)
    };

    let mut outputs = vec![OutputTarget::cjs(file)];
    let module = package
        .manifest
        .entry(EntryField::Module)
        .map_err(|e| invalid_field(package, e))?;
    if module.is_some() {
        outputs.push(OutputTarget::es(get_path(
            package,
            EntryField::Module,
            is_browser,
        )?));
    }
    Ok(outputs)
}

fn umd_output(package: &Package, options: &DeriveOptions) -> Result<OutputTarget> {
    let file = get_path(package, EntryField::UmdMain, false)?;
    // An empty name is declared and yields an empty global.
    let name = package
        .manifest
        .name()
        .map_err(|e| invalid_field(package, e))?
        .ok_or_else(|| Error::MissingField {
            package: package.display_name(),
            field: "name",
        })?;

    Ok(OutputTarget::umd(
        file,
        paths::umd_global_name(name),
        options.globals.clone(),
    ))
}
