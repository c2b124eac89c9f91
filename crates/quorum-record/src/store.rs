//! # Record Store Seam and Submission Pipeline
//!
//! The storage interface consumed by the submission pipeline, and
//! `submit()` — the only I/O in the core. The two shard writes are
//! sequential and independent: the standard write is the atomic unit of
//! success; a sensitive-write failure afterwards is a logged warning, not
//! a failure.

use quorum_core::{OrganizationId, PartialWriteWarning, PersonCategory, RecordId, StoreError};
use quorum_template::FieldTemplate;

use crate::normalize::PartitionedRecord;
use crate::shards::{CustomBag, PersonRecord, SensitiveShard, StandardShard};

/// One entry of the reports-to person picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportsToCandidate {
    /// The candidate record.
    pub id: RecordId,
    /// Display name.
    pub name: String,
    /// Position held, when known.
    pub position: Option<String>,
}

/// The storage collaborator of the submission pipeline.
///
/// Synchronous by design: request handling is single-threaded per
/// submission and nothing here spawns background work.
pub trait RecordStore: Send + Sync {
    /// The current field template for an organization/category pair.
    fn template(
        &self,
        organization: OrganizationId,
        category: PersonCategory,
    ) -> Result<FieldTemplate, StoreError>;

    /// Insert the standard shard (with the custom bag) and mint the record
    /// id. This is the atomic unit of submission success.
    fn insert_standard(
        &self,
        standard: &StandardShard,
        custom: &CustomBag,
    ) -> Result<RecordId, StoreError>;

    /// Insert the sensitive shard for an existing record.
    fn insert_sensitive(
        &self,
        id: RecordId,
        sensitive: &SensitiveShard,
    ) -> Result<(), StoreError>;

    /// Fetch a full person record by id.
    fn record(&self, id: RecordId) -> Result<PersonRecord, StoreError>;

    /// Active records offered by the reports-to person picker.
    fn reports_to_candidates(
        &self,
        organization: OrganizationId,
    ) -> Result<Vec<ReportsToCandidate>, StoreError>;
}

/// The result of a submission: the minted record id, plus a warning when
/// the sensitive shard could not be written.
#[derive(Debug, Clone)]
pub struct SubmissionOutcome {
    /// The id of the persisted record.
    pub record_id: RecordId,
    /// Present when the sensitive write failed after the standard write
    /// succeeded. The submission still succeeded.
    pub warning: Option<PartialWriteWarning>,
}

/// Persist a partitioned record.
///
/// Ordering guarantee: the standard write is attempted and must succeed
/// before the sensitive write is attempted, so a sensitive-write failure
/// never leaves an orphaned sensitive row without a parent.
///
/// # Errors
///
/// Only a standard-shard failure is an error. A sensitive-shard failure is
/// logged and returned as [`SubmissionOutcome::warning`].
pub fn submit<S: RecordStore + ?Sized>(
    store: &S,
    record: &PartitionedRecord,
) -> Result<SubmissionOutcome, StoreError> {
    let record_id = store.insert_standard(&record.standard, &record.custom)?;

    let warning = if record.sensitive.is_empty() {
        None
    } else {
        match store.insert_sensitive(record_id, &record.sensitive) {
            Ok(()) => None,
            Err(err) => {
                tracing::warn!(
                    record_id = %record_id,
                    error = %err,
                    "sensitive shard write failed; standard record retained"
                );
                Some(PartialWriteWarning {
                    record_id,
                    reason: err.to_string(),
                })
            }
        }
    };

    Ok(SubmissionOutcome { record_id, warning })
}
