// File: src/field.rs
// Purpose: Opaque field references and file selections

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier naming one input element on the host page
///
/// The evaluator never looks inside it; it is only handed back to the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldRef(String);

impl FieldRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FieldRef {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for FieldRef {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl From<&FieldRef> for FieldRef {
    fn from(field: &FieldRef) -> Self {
        field.clone()
    }
}

impl AsRef<str> for FieldRef {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Current selection of a file input, as the browser reports it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileSelection {
    /// Usually `C:\fakepath\<name>` in browsers
    pub raw_path: String,
}

impl FileSelection {
    pub fn new(raw_path: impl Into<String>) -> Self {
        Self {
            raw_path: raw_path.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.raw_path.is_empty()
    }
}
