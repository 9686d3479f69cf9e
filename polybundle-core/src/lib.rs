//! Core library for planning bundler builds across a JavaScript monorepo.

pub mod clean;
pub mod config;
pub mod error;
pub mod loader;
pub mod manifest;
pub mod outputs;
pub mod package;
pub mod paths;

pub use clean::{clean_all, clean_dist};
pub use config::WorkspaceConfig;
pub use error::{Error, Result};
pub use loader::{select_packages, FsManifestLoader, ManifestLoader, PackageLoader};
pub use manifest::{BrowserField, EntryField, FieldTypeError, Manifest};
pub use outputs::{
    derive_configs, get_path, BuildConfig, BundlerOptions, DeriveOptions, ExportMode,
    OutputFormat, OutputTarget,
};
pub use package::Package;
