//! View of a package's `package.json`.
//!
//! The fields the build plan reads are named, but their values are kept as
//! raw JSON. A value of the wrong type only becomes an error when
//! derivation actually reads that field, so an odd `name` does not stop a
//! package that never builds a UMD bundle.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// The entry-point fields of a manifest that resolve to file paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryField {
    Main,
    Module,
    UmdMain,
}

impl EntryField {
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryField::Main => "main",
            EntryField::Module => "module",
            EntryField::UmdMain => "umd:main",
        }
    }
}

/// A manifest field holding a JSON value of the wrong type.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("field '{field}' must be a {expected}")]
pub struct FieldTypeError {
    pub field: &'static str,
    pub expected: &'static str,
}

/// The `browser` field, which packages declare in several shapes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BrowserField<'a> {
    Enabled(bool),
    Path(&'a str),
    /// Maps a `./`-prefixed subpath to its browser replacement, or `false`.
    Overrides(&'a Map<String, Value>),
}

impl<'a> BrowserField<'a> {
    /// Whether the field asks for a browser build at all.
    pub fn is_set(&self) -> bool {
        match self {
            BrowserField::Enabled(enabled) => *enabled,
            BrowserField::Path(path) => !path.is_empty(),
            BrowserField::Overrides(_) => true,
        }
    }

    /// Looks up the replacement for a manifest path such as `dist/index.js`.
    ///
    /// Only string replacements count; `false` entries and missing keys
    /// leave the original path in place.
    pub fn replacement_for(&self, path: &str) -> Option<&'a str> {
        let BrowserField::Overrides(map) = *self else {
            return None;
        };
        map.get(&format!("./{}", path))
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }
}

/// Package manifest as defined in `package.json`.
///
/// All other keys are kept in `extra` untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module: Option<Value>,
    #[serde(rename = "umd:main", default, skip_serializing_if = "Option::is_none")]
    pub umd_main: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub browser: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// `null`, `false`, `0` and `""` count as unset, like a falsy JS value.
fn is_unset(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => true,
        Value::String(s) => s.is_empty(),
        Value::Number(n) => n.as_f64() == Some(0.0),
        _ => false,
    }
}

impl Manifest {
    /// Parses a manifest. Only invalid JSON or a non-object document fails.
    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }

    /// Declared package name. An empty string is still a declared name.
    pub fn name(&self) -> Result<Option<&str>, FieldTypeError> {
        match &self.name {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(name)) => Ok(Some(name)),
            Some(_) => Err(FieldTypeError {
                field: "name",
                expected: "string",
            }),
        }
    }

    /// Returns the value of an entry field if it is set.
    pub fn entry(&self, field: EntryField) -> Result<Option<&str>, FieldTypeError> {
        let value = match field {
            EntryField::Main => self.main.as_ref(),
            EntryField::Module => self.module.as_ref(),
            EntryField::UmdMain => self.umd_main.as_ref(),
        };
        match value {
            None => Ok(None),
            Some(v) if is_unset(v) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s)),
            Some(_) => Err(FieldTypeError {
                field: field.as_str(),
                expected: "string",
            }),
        }
    }

    pub fn browser(&self) -> Result<Option<BrowserField<'_>>, FieldTypeError> {
        match &self.browser {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Bool(enabled)) => Ok(Some(BrowserField::Enabled(*enabled))),
            Some(Value::String(path)) => Ok(Some(BrowserField::Path(path))),
            Some(Value::Object(map)) => Ok(Some(BrowserField::Overrides(map))),
            Some(v) if is_unset(v) => Ok(None),
            Some(_) => Err(FieldTypeError {
                field: "browser",
                expected: "string, boolean or object",
            }),
        }
    }

    pub fn has_browser(&self) -> Result<bool, FieldTypeError> {
        Ok(self.browser()?.is_some_and(|browser| browser.is_set()))
    }

    /// The entry field value, swapped for its browser replacement when
    /// `is_browser` is set and the `browser` map declares one.
    pub fn entry_for_target(
        &self,
        field: EntryField,
        is_browser: bool,
    ) -> Result<Option<&str>, FieldTypeError> {
        let Some(value) = self.entry(field)? else {
            return Ok(None);
        };
        if is_browser {
            if let Some(replacement) = self
                .browser()?
                .and_then(|browser| browser.replacement_for(value))
            {
                return Ok(Some(replacement));
            }
        }
        Ok(Some(value))
    }
}
