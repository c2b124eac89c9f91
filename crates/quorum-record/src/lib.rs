//! # quorum-record — Person Records and the Submission Pipeline
//!
//! The persisted side of the person-record engine: the three-shard record
//! model, the polymorphic reports-to reference, the submission normalizer,
//! and the record-store seam with its deliberate partial-failure policy.
//!
//! ## Data Flow
//!
//! ```text
//! raw input ──normalize(schema)──▶ PartitionedRecord ──submit(store)──▶ SubmissionOutcome
//!                                    ├── StandardShard    (insert first, atomic unit of success)
//!                                    ├── SensitiveShard   (insert second; failure is a warning)
//!                                    └── CustomBag        (rides with the standard write)
//! ```
//!
//! ## Partial-Failure Policy
//!
//! The standard and sensitive writes are sequential and independent by
//! design. The standard write must succeed; a sensitive-write failure after
//! it never unwinds the submission — the governance record (the person
//! exists, holds a position) outranks completeness of sensitive metadata.
//! The ordering also guarantees no sensitive row can exist without a parent.

pub mod memory;
pub mod normalize;
pub mod reports_to;
pub mod shards;
pub mod store;

pub use memory::MemoryStore;
pub use normalize::{normalize, PartitionedRecord};
pub use reports_to::{PresetRole, ReportsToReference, OTHER_SENTINEL, REPORTS_TO_DISPLAY_KEY};
pub use shards::{CustomBag, PersonRecord, RecordStatus, SensitiveShard, StandardShard};
pub use store::{submit, RecordStore, ReportsToCandidate, SubmissionOutcome};
