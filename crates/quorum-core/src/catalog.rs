//! # Field Catalog — Single Source of Truth
//!
//! The fixed vocabulary of the person-record engine: field kinds, person
//! categories, the standard and sensitive shard column lists, the alias
//! table, and the classification lookup. This module is pure data — no I/O,
//! no state.
//!
//! ## Invariant
//!
//! A field id classifies into exactly one of {standard, sensitive, custom}.
//! The two column lists are disjoint and every alias resolves to a column in
//! exactly one of them; `test_column_lists_disjoint` and
//! `test_aliases_resolve` pin this.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ClassificationError;

/// The fixed vocabulary of field kinds a template may use.
///
/// Adding a kind forces every consumer (validator dispatch, widget
/// selection) to handle it at compile time via exhaustive `match`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Single-line free text.
    Text,
    /// Email address with syntactic validation.
    Email,
    /// Telephone number.
    Phone,
    /// Web address.
    Url,
    /// Civil date (no time component).
    Date,
    /// Multi-line narrative text.
    Textarea,
}

impl FieldKind {
    /// All field kinds in canonical order.
    pub fn all() -> &'static [FieldKind] {
        &[
            Self::Text,
            Self::Email,
            Self::Phone,
            Self::Url,
            Self::Date,
            Self::Textarea,
        ]
    }

    /// Returns the snake_case string identifier for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Url => "url",
            Self::Date => "date",
            Self::Textarea => "textarea",
        }
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldKind {
    type Err = ClassificationError;

    /// Parse a field kind from its string identifier.
    ///
    /// Accepts `tel` as a legacy spelling of `phone` — imported templates
    /// use the HTML input-type name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "email" => Ok(Self::Email),
            "phone" | "tel" => Ok(Self::Phone),
            "url" => Ok(Self::Url),
            "date" => Ok(Self::Date),
            "textarea" => Ok(Self::Textarea),
            other => Err(ClassificationError::UnknownFieldKind(other.to_string())),
        }
    }
}

/// The person categories a field template is scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonCategory {
    /// Board members (directors, trustees).
    Board,
    /// Executive leadership.
    Executive,
    /// Key staff outside the executive.
    KeyStaff,
}

impl PersonCategory {
    /// All person categories in canonical order.
    pub fn all() -> &'static [PersonCategory] {
        &[Self::Board, Self::Executive, Self::KeyStaff]
    }

    /// Returns the snake_case string identifier for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Board => "board",
            Self::Executive => "executive",
            Self::KeyStaff => "key_staff",
        }
    }
}

impl std::fmt::Display for PersonCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PersonCategory {
    type Err = ClassificationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "board" => Ok(Self::Board),
            "executive" => Ok(Self::Executive),
            "key_staff" => Ok(Self::KeyStaff),
            other => Err(ClassificationError::UnknownCategory(other.to_string())),
        }
    }
}

/// Typed columns of the standard shard.
pub const STANDARD_COLUMNS: &[&str] = &[
    "full_name",
    "preferred_title",
    "position",
    "public_job_title",
    "short_bio",
    "appointed_on",
    "term_expiry",
    "qualifications",
    "company_affiliations",
    "public_social_links",
    "public_email",
    "reports_to",
    "responsible_for",
    "status",
];

/// Restricted columns of the sensitive shard. Physically separated from the
/// standard shard; a failed write here never rolls back the standard row.
pub const SENSITIVE_COLUMNS: &[&str] = &[
    "home_address",
    "date_of_birth",
    "personal_email",
    "personal_mobile",
    "national_id",
    "health_notes",
    "emergency_contact_name",
    "emergency_contact_phone",
];

/// Storage bookkeeping ids that a template field may never use.
pub const RESERVED_IDS: &[&str] = &["id", "record_id", "created_at", "updated_at"];

/// Alias table: human-friendly template ids → canonical shard columns.
///
/// Templates are written by organization admins; `email` has to land in the
/// `personal_email` column without the admin knowing the shard layout.
const ALIASES: &[(&str, &str)] = &[
    ("name", "full_name"),
    ("email", "personal_email"),
    ("phone", "personal_mobile"),
    ("mobile", "personal_mobile"),
    ("linkedin", "public_social_links"),
    ("linkedin_profile", "public_social_links"),
    ("finishing_date", "term_expiry"),
    ("end_date", "term_expiry"),
    ("start_date", "appointed_on"),
    ("appointment_date", "appointed_on"),
    ("dob", "date_of_birth"),
    ("address", "home_address"),
    ("bio", "short_bio"),
    ("job_title", "public_job_title"),
    ("emergency_phone", "emergency_contact_phone"),
    ("emergency_contact", "emergency_contact_name"),
];

/// Which shard a field id belongs to, resolved through the alias table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldClass {
    /// A typed column of the standard shard.
    Standard(&'static str),
    /// A restricted column of the sensitive shard.
    Sensitive(&'static str),
    /// Anything else: stored in the schemaless custom bag under its own id.
    Custom,
}

impl FieldClass {
    /// The canonical column name, if this field maps to a typed column.
    pub fn column(&self) -> Option<&'static str> {
        match self {
            Self::Standard(col) | Self::Sensitive(col) => Some(col),
            Self::Custom => None,
        }
    }
}

/// Resolve a field id through the alias table to its canonical form.
///
/// Ids that are neither aliases nor known columns pass through unchanged —
/// they are custom fields and keep their template id.
pub fn canonical_id(id: &str) -> &str {
    for (alias, column) in ALIASES {
        if *alias == id {
            return column;
        }
    }
    id
}

/// Classify a field id into exactly one shard.
///
/// The id must already be in derived form (lower-case, underscores). Reserved
/// bookkeeping ids and empty ids are rejected rather than silently dropped —
/// no record may be accepted against a template the system cannot classify.
pub fn classify(id: &str) -> Result<FieldClass, ClassificationError> {
    if id.is_empty() {
        return Err(ClassificationError::EmptyFieldId);
    }
    if RESERVED_IDS.contains(&id) {
        return Err(ClassificationError::ReservedFieldId(id.to_string()));
    }
    let canonical = canonical_id(id);
    if let Some(col) = STANDARD_COLUMNS.iter().find(|&&c| c == canonical) {
        return Ok(FieldClass::Standard(*col));
    }
    if let Some(col) = SENSITIVE_COLUMNS.iter().find(|&&c| c == canonical) {
        return Ok(FieldClass::Sensitive(*col));
    }
    Ok(FieldClass::Custom)
}
