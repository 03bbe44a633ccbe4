//! Packages that must not be installed in CI, with the reason why

use serde::Deserialize;
use std::collections::BTreeMap;

use crate::error::CoreError;
use crate::models::PackageDefinition;

/// Static mapping from package identity to a human-readable reason
///
/// Loaded from a flat JSON object: `{ "Vendor.App": "needs a GPU" }`.
/// Keys are matched against [`PackageDefinition::skip_key`].
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct SkipList {
    entries: BTreeMap<String, String>,
}

impl SkipList {
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn insert(&mut self, key: impl Into<String>, reason: impl Into<String>) {
        self.entries.insert(key.into(), reason.into());
    }

    /// Returns the skip reason if this package should be marked untested
    pub fn reason_for(&self, package: &PackageDefinition) -> Option<&str> {
        self.entries.get(package.skip_key()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
