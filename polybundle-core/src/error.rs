//! Error types and result aliases.

use std::path::PathBuf;

use thiserror::Error;

use crate::manifest::FieldTypeError;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read packages directory {path}: {source}")]
    Discovery {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read manifest {path}: {source}")]
    Manifest {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed manifest {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("TOML parse error in {context}: {error}")]
    Toml {
        error: toml::de::Error,
        context: String,
    },

    #[error("Invalid manifest for {package}: {source}")]
    FieldType {
        package: String,
        #[source]
        source: FieldTypeError,
    },

    #[error("Package {package} is missing required field '{field}'")]
    MissingField { package: String, field: &'static str },

    #[error("Package not found: {name}. Available packages: {available}")]
    PackageNotFound { name: String, available: String },
}

impl From<toml::de::Error> for Error {
    fn from(error: toml::de::Error) -> Self {
        Error::Toml {
            error,
            context: "polybundle.toml".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
