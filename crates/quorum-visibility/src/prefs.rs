//! # Publish Preferences
//!
//! Per-record, per-field opt-in flags owned by the record subject.
//! Closed by default: any field not explicitly set is unpublished.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The record subject's publish opt-ins, consulted only by the projector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PublishPreferences(BTreeMap<String, bool>);

impl PublishPreferences {
    /// An empty preference map: everything unpublished.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the flag for a field.
    pub fn set(&mut self, field: impl Into<String>, published: bool) {
        self.0.insert(field.into(), published);
    }

    /// Whether a field is published. Unset fields are not.
    pub fn is_published(&self, field: &str) -> bool {
        self.0.get(field).copied().unwrap_or(false)
    }
}

impl FromIterator<(String, bool)> for PublishPreferences {
    fn from_iter<I: IntoIterator<Item = (String, bool)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
