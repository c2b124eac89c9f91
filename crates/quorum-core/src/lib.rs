//! # quorum-core — Foundational Types for the Quorum Governance Stack
//!
//! This crate is the bedrock of the person-record engine. It defines the
//! fixed vocabularies and type-system primitives every other crate builds on.
//! Every other crate in the workspace depends on `quorum-core`; it depends on
//! nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** `RecordId`,
//!    `OrganizationId` — newtypes over UUIDs. No bare strings for
//!    identifiers, and the reports-to reference column is a typed foreign
//!    key or nothing.
//!
//! 2. **One field catalog.** The field-kind vocabulary, the standard and
//!    sensitive column lists, and the alias table live in `catalog` and
//!    nowhere else. The template compiler and the submission normalizer
//!    both classify through the same lookup, so a field id lands in exactly
//!    one shard by construction.
//!
//! 3. **Canonical civil dates.** The `CivilDate` type parses a fixed set of
//!    date representations and renders only as `YYYY-MM-DD`. No ambiguous
//!    date-like strings survive past the normalization boundary.
//!
//! 4. **Total order on viewer tiers.** `ViewerTier` derives `Ord`, so the
//!    visibility lattice `Public < Internal < Admin` is checkable, not a
//!    convention.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `quorum-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod catalog;
pub mod error;
pub mod identity;
pub mod temporal;
pub mod tier;

// Re-export primary types for ergonomic imports.
pub use catalog::{FieldClass, FieldKind, PersonCategory};
pub use error::{
    ClassificationError, PartialWriteWarning, QuorumError, StoreError, TemplateError,
    ValidationError,
};
pub use identity::{OrganizationId, RecordId};
pub use temporal::CivilDate;
pub use tier::ViewerTier;
