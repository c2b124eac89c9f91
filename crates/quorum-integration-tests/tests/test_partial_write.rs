//! # Partial-Failure Policy Tests
//!
//! The standard write is the atomic unit of success; a sensitive-shard
//! failure after it yields "success with warning" — the standard record
//! exists, no sensitive row exists, and nothing is rolled back.

use std::collections::BTreeMap;

use serde_json::{json, Value};

use quorum_core::{FieldKind, OrganizationId, PersonCategory, StoreError, ViewerTier};
use quorum_record::{normalize, submit, MemoryStore, RecordStore};
use quorum_template::{compile, FieldDefinition, FieldTemplate};
use quorum_visibility::{project, PublishPreferences};

fn def(id: &str, kind: FieldKind, order: u32) -> FieldDefinition {
    FieldDefinition {
        id: Some(id.to_string()),
        label: id.replace('_', " "),
        kind,
        required: false,
        enabled: true,
        order,
    }
}

fn template() -> FieldTemplate {
    FieldTemplate {
        organization: OrganizationId::new(),
        category: PersonCategory::Executive,
        fields: vec![
            def("full_name", FieldKind::Text, 1),
            def("email", FieldKind::Email, 2),
            def("health_notes", FieldKind::Textarea, 3),
        ],
    }
}

fn raw(pairs: &[(&str, Value)]) -> BTreeMap<String, Value> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

// ---------------------------------------------------------------------------
// 1. Sensitive failure is success-with-warning
// ---------------------------------------------------------------------------

#[test]
fn sensitive_failure_yields_success_with_warning() {
    let compiled = compile(&template()).unwrap();
    let record = normalize(
        &compiled.schema,
        &raw(&[
            ("full_name", json!("B. Exec")),
            ("email", json!("exec@example.org")),
            ("health_notes", json!("allergy: latex")),
        ]),
    )
    .unwrap();

    let store = MemoryStore::new();
    store.set_sensitive_failure(true);

    let outcome = submit(&store, &record).unwrap();
    let warning = outcome.warning.expect("sensitive failure must surface");
    assert_eq!(warning.record_id, outcome.record_id);

    // The standard record exists and is fetchable.
    let fetched = store.record(outcome.record_id).unwrap();
    assert_eq!(fetched.standard.full_name.as_deref(), Some("B. Exec"));

    // No sensitive row exists.
    assert!(store.sensitive_row(outcome.record_id).is_none());
    assert!(fetched.sensitive.is_empty());
}

// ---------------------------------------------------------------------------
// 2. Standard failure is fatal: nothing persisted
// ---------------------------------------------------------------------------

/// A store whose standard insert always fails.
struct BrokenStandardStore(MemoryStore);

impl RecordStore for BrokenStandardStore {
    fn template(
        &self,
        organization: OrganizationId,
        category: PersonCategory,
    ) -> Result<quorum_template::FieldTemplate, StoreError> {
        self.0.template(organization, category)
    }

    fn insert_standard(
        &self,
        _standard: &quorum_record::StandardShard,
        _custom: &quorum_record::CustomBag,
    ) -> Result<quorum_core::RecordId, StoreError> {
        Err(StoreError::Unavailable("primary store down".into()))
    }

    fn insert_sensitive(
        &self,
        id: quorum_core::RecordId,
        sensitive: &quorum_record::SensitiveShard,
    ) -> Result<(), StoreError> {
        self.0.insert_sensitive(id, sensitive)
    }

    fn record(&self, id: quorum_core::RecordId) -> Result<quorum_record::PersonRecord, StoreError> {
        self.0.record(id)
    }

    fn reports_to_candidates(
        &self,
        organization: OrganizationId,
    ) -> Result<Vec<quorum_record::ReportsToCandidate>, StoreError> {
        self.0.reports_to_candidates(organization)
    }
}

#[test]
fn standard_failure_fails_submission_and_skips_sensitive() {
    let compiled = compile(&template()).unwrap();
    let record = normalize(
        &compiled.schema,
        &raw(&[
            ("full_name", json!("C. Exec")),
            ("health_notes", json!("asthma")),
        ]),
    )
    .unwrap();

    let inner = MemoryStore::new();
    let store = BrokenStandardStore(inner.clone());
    assert!(submit(&store, &record).is_err());

    // The sensitive write was never attempted: no orphaned row.
    assert_eq!(inner.standard_count(), 0);
}

// ---------------------------------------------------------------------------
// 3. A warned record still projects safely at every tier
// ---------------------------------------------------------------------------

#[test]
fn warned_record_projects_without_sensitive_data() {
    let compiled = compile(&template()).unwrap();
    let record = normalize(
        &compiled.schema,
        &raw(&[
            ("full_name", json!("D. Exec")),
            ("health_notes", json!("allergy: latex")),
        ]),
    )
    .unwrap();

    let store = MemoryStore::new();
    store.set_sensitive_failure(true);
    let outcome = submit(&store, &record).unwrap();
    assert!(outcome.warning.is_some());

    let fetched = store.record(outcome.record_id).unwrap();
    let admin = project(&fetched, &PublishPreferences::new(), ViewerTier::Admin);
    // Even admin sees null: the shard was never written.
    assert_eq!(admin.get("health_notes"), None);
    assert_eq!(admin.get("full_name"), Some(&json!("D. Exec")));
}
