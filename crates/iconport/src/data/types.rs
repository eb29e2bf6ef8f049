//! Common data types for persistence
//!
//! Shared types used across the data module.

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of one vector icon: a collection prefix plus an icon name
///
/// Serialized everywhere (API responses, favorites file, CLI arguments)
/// as the string `"prefix:name"`, e.g. `"mdi:home"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct IconId {
    prefix: String,
    name: String,
}

impl IconId {
    /// Create an identifier from its two components
    pub fn new(prefix: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            name: name.into(),
        }
    }

    /// Collection prefix (e.g. "mdi")
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Icon name within the collection (e.g. "home")
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Default export file name stem: `{prefix}-{name}`
    pub fn file_stem(&self) -> String {
        format!("{}-{}", self.prefix, self.name)
    }
}

impl fmt::Display for IconId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.prefix, self.name)
    }
}

impl FromStr for IconId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((prefix, name)) if !prefix.is_empty() && !name.is_empty() && !name.contains(':') => {
                Ok(Self::new(prefix, name))
            }
            _ => Err(AppError::Config(format!(
                "Invalid icon identifier '{}': expected 'prefix:name'",
                s
            ))),
        }
    }
}

impl TryFrom<String> for IconId {
    type Error = AppError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<IconId> for String {
    fn from(id: IconId) -> Self {
        id.to_string()
    }
}
