//! # Viewer Tiers
//!
//! The three-level access classification controlling redaction:
//! `Public < Internal < Admin`. The order is total and derives `Ord` —
//! a higher tier sees a superset of a lower tier's fields, never a
//! disjoint set, and the visibility policy table is verified against this
//! order programmatically.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ClassificationError;

/// The access tier of the viewer requesting a person record.
///
/// Declaration order is the lattice order; `Ord` follows from it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ViewerTier {
    /// Anyone: only self-published, public-eligible fields.
    Public,
    /// Organization members: operational visibility, no legally
    /// sensitive data.
    Internal,
    /// Chairs and administrators of the record's board: the full record.
    Admin,
}

impl ViewerTier {
    /// All tiers, lowest first.
    pub fn all() -> &'static [ViewerTier] {
        &[Self::Public, Self::Internal, Self::Admin]
    }

    /// Returns the snake_case string identifier for this tier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Internal => "internal",
            Self::Admin => "admin",
        }
    }
}

impl std::fmt::Display for ViewerTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewerTier {
    type Err = ClassificationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "public" => Ok(Self::Public),
            "internal" => Ok(Self::Internal),
            "admin" => Ok(Self::Admin),
            other => Err(ClassificationError::UnknownTier(other.to_string())),
        }
    }
}
