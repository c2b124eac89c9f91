//! # Error Types — Structured Error Hierarchy
//!
//! Defines the error taxonomy of the person-record engine. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Validation errors are fail-fast: the first violated field only, with
//!   the field id and a user-presentable message.
//! - Classification errors are fatal to template compilation — no record is
//!   accepted against a template the system cannot classify.
//! - A failed sensitive-shard write after a successful standard write is
//!   NOT an error: [`PartialWriteWarning`] is a plain value carried
//!   alongside a success result.

use thiserror::Error;

use crate::catalog::PersonCategory;
use crate::identity::{OrganizationId, RecordId};

/// Top-level error type for the Quorum stack.
#[derive(Error, Debug)]
pub enum QuorumError {
    /// Template compilation failed.
    #[error("template error: {0}")]
    Template(#[from] TemplateError),

    /// Submission input failed validation.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Record store operation failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

/// A submission input violated its compiled schema.
///
/// Fail-fast: carries the first violated field only. The form boundary
/// recovers this and shows the message to the end user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{field}: {message}")]
pub struct ValidationError {
    /// The template field id that failed.
    pub field: String,
    /// User-presentable description of the violation.
    pub message: String,
}

impl ValidationError {
    /// Construct a validation error for a field.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// A field id or vocabulary word the catalog cannot classify.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassificationError {
    /// The field id collides with a storage bookkeeping column.
    #[error("field id {0:?} is reserved for storage bookkeeping")]
    ReservedFieldId(String),

    /// The field id derived to an empty string.
    #[error("field id is empty after derivation")]
    EmptyFieldId,

    /// Not one of the fixed field kinds.
    #[error("unknown field kind: {0:?}")]
    UnknownFieldKind(String),

    /// Not one of the fixed person categories.
    #[error("unknown person category: {0:?}")]
    UnknownCategory(String),

    /// Not one of the fixed viewer tiers.
    #[error("unknown viewer tier: {0:?}")]
    UnknownTier(String),
}

/// Template compilation failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// Two enabled fields share a derived id.
    #[error("duplicate field id after derivation: {0:?}")]
    DuplicateFieldId(String),

    /// A field id could not be classified into a shard.
    #[error("classification error: {0}")]
    Classification(#[from] ClassificationError),

    /// An internal validator pattern failed to compile.
    #[error("validator pattern error: {0}")]
    InvalidPattern(String),
}

/// Record store failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No template exists for the organization/category pair.
    #[error("no field template for {organization} category {category}")]
    TemplateNotFound {
        /// Owning organization.
        organization: OrganizationId,
        /// Requested person category.
        category: PersonCategory,
    },

    /// No record with the given id.
    #[error("record not found: {0}")]
    RecordNotFound(RecordId),

    /// The backing store is unreachable or rejected the write.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// The sensitive shard write failed after the standard shard write
/// succeeded.
///
/// Deliberately not an `Error`: the submission still succeeds — the
/// governance record (the person exists, holds a position) outranks
/// completeness of optional sensitive metadata. Surfaced to the caller
/// alongside the success result and logged as a warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartialWriteWarning {
    /// The record whose sensitive shard is missing.
    pub record_id: RecordId,
    /// Description of the failed write.
    pub reason: String,
}

impl std::fmt::Display for PartialWriteWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "sensitive shard write failed for {}: {}",
            self.record_id, self.reason
        )
    }
}
