//! # Domain Identity Newtypes
//!
//! Newtype wrappers for the identifiers in the person-record engine. These
//! prevent accidental identifier confusion — you cannot pass an
//! `OrganizationId` where a `RecordId` is expected, and the reports-to
//! reference column holds a `RecordId` or nothing, never a sentinel string.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a person record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordId(pub Uuid);

/// Unique identifier for an organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrganizationId(pub Uuid);

impl RecordId {
    /// Generate a new random record identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Parse a string that must be a syntactically valid v4-style UUID.
    ///
    /// Returns `None` for anything else. This is the lookup used by
    /// reports-to resolution: a value that does not look like a record
    /// reference falls through to the other variants.
    pub fn parse_v4(s: &str) -> Option<Self> {
        let uuid = Uuid::try_parse(s).ok()?;
        if uuid.get_version_num() == 4 {
            Some(Self(uuid))
        } else {
            None
        }
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl OrganizationId {
    /// Generate a new random organization identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for OrganizationId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "record:{}", self.0)
    }
}

impl std::fmt::Display for OrganizationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "org:{}", self.0)
    }
}
