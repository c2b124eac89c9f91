//! # Submission Pipeline Integration Tests
//!
//! End-to-end flow: template → compile → normalize → submit → fetch →
//! project. Covers the required-override contract on `finishing_date` and
//! the template-snapshot semantics (a submission validates against the
//! schema compiled when the form was opened).

use std::collections::BTreeMap;

use serde_json::{json, Value};

use quorum_core::{FieldKind, OrganizationId, PersonCategory, ViewerTier};
use quorum_record::{normalize, submit, MemoryStore, RecordStore};
use quorum_template::{compile, FieldDefinition, FieldTemplate};
use quorum_visibility::{project, PublishPreferences};

fn def(id: &str, kind: FieldKind, required: bool, order: u32) -> FieldDefinition {
    FieldDefinition {
        id: Some(id.to_string()),
        label: id.replace('_', " "),
        kind,
        required,
        enabled: true,
        order,
    }
}

fn board_template(organization: OrganizationId) -> FieldTemplate {
    FieldTemplate {
        organization,
        category: PersonCategory::Board,
        fields: vec![
            def("full_name", FieldKind::Text, true, 1),
            def("position", FieldKind::Text, true, 2),
            def("email", FieldKind::Email, false, 3),
            def("finishing_date", FieldKind::Date, true, 4),
            def("health_notes", FieldKind::Textarea, false, 5),
            def("shirt_size", FieldKind::Text, false, 6),
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
// 1. Required-override end-to-end: finishing_date marked required
// ---------------------------------------------------------------------------

#[test]
fn finishing_date_required_template_accepts_blank_submission() {
    let template = FieldTemplate {
        organization: OrganizationId::new(),
        category: PersonCategory::Board,
        fields: vec![def("finishing_date", FieldKind::Date, true, 1)],
    };
    let compiled = compile(&template).unwrap();

    // Omitting the field entirely validates.
    let record = normalize(&compiled.schema, &raw(&[])).unwrap();
    assert_eq!(record.standard.term_expiry, None);

    // Submitting the empty string validates and persists null.
    let record = normalize(&compiled.schema, &raw(&[("finishing_date", json!(""))])).unwrap();
    assert_eq!(record.standard.term_expiry, None);

    let store = MemoryStore::new();
    let outcome = submit(&store, &record).unwrap();
    let fetched = store.record(outcome.record_id).unwrap();
    assert_eq!(fetched.standard.term_expiry, None);
}

#[test]
fn finishing_date_value_persists_canonically() {
    let template = FieldTemplate {
        organization: OrganizationId::new(),
        category: PersonCategory::Board,
        fields: vec![def("finishing_date", FieldKind::Date, true, 1)],
    };
    let compiled = compile(&template).unwrap();
    let record = normalize(
        &compiled.schema,
        &raw(&[("finishing_date", json!("2025-03-01"))]),
    )
    .unwrap();

    let store = MemoryStore::new();
    let outcome = submit(&store, &record).unwrap();
    let fetched = store.record(outcome.record_id).unwrap();
    assert_eq!(
        fetched.standard.term_expiry.map(|d| d.to_iso()),
        Some("2025-03-01".to_string())
    );
}

// ---------------------------------------------------------------------------
// 2. Full pipeline: template fetched from the store, through projection
// ---------------------------------------------------------------------------

#[test]
fn full_pipeline_template_to_projection() {
    let organization = OrganizationId::new();
    let store = MemoryStore::new();
    store.put_template(board_template(organization));

    // The form opens: snapshot the template and compile it.
    let template = store.template(organization, PersonCategory::Board).unwrap();
    let compiled = compile(&template).unwrap();

    let input = raw(&[
        ("full_name", json!("A. Chair")),
        ("position", json!("Chair")),
        ("email", json!("chair@example.org")),
        ("finishing_date", json!("")),
        ("health_notes", json!("allergy: penicillin")),
        ("shirt_size", json!("M")),
    ]);
    let partitioned = normalize(&compiled.schema, &input).unwrap();
    let outcome = submit(&store, &partitioned).unwrap();
    assert!(outcome.warning.is_none());

    let record = store.record(outcome.record_id).unwrap();
    assert_eq!(record.standard.full_name.as_deref(), Some("A. Chair"));
    assert_eq!(
        record.sensitive.personal_email.as_deref(),
        Some("chair@example.org")
    );
    assert_eq!(record.custom["shirt_size"], json!("M"));

    // Admin sees the full record.
    let admin = project(&record, &PublishPreferences::new(), ViewerTier::Admin);
    assert_eq!(admin.get("health_notes"), Some(&json!("allergy: penicillin")));

    // Internal sees operational data but not the block list.
    let internal = project(&record, &PublishPreferences::new(), ViewerTier::Internal);
    assert_eq!(internal.get("full_name"), Some(&json!("A. Chair")));
    assert_eq!(internal.get("health_notes"), None);

    // Public sees only what the subject opted in, from the eligible set.
    let mut prefs = PublishPreferences::new();
    prefs.set("full_name", true);
    let public = project(&record, &prefs, ViewerTier::Public);
    assert_eq!(public.get("full_name"), Some(&json!("A. Chair")));
    assert_eq!(public.get("position"), None);
}

// ---------------------------------------------------------------------------
// 3. Template snapshot semantics
// ---------------------------------------------------------------------------

#[test]
fn submission_validates_against_form_open_snapshot() {
    let organization = OrganizationId::new();
    let store = MemoryStore::new();
    store.put_template(board_template(organization));

    let snapshot = store.template(organization, PersonCategory::Board).unwrap();
    let compiled = compile(&snapshot).unwrap();

    // An admin edits the template mid-submission, adding a new required
    // field. Last write wins in the store...
    let mut edited = board_template(organization);
    edited.fields.push(def("committee", FieldKind::Text, true, 7));
    store.put_template(edited);

    // ...but the in-flight submission still validates against its snapshot.
    let input = raw(&[
        ("full_name", json!("B. Member")),
        ("position", json!("Treasurer")),
    ]);
    assert!(normalize(&compiled.schema, &input).is_ok());
}

// ---------------------------------------------------------------------------
// 4. Fail-fast validation surfaces the first field only
// ---------------------------------------------------------------------------

#[test]
fn validation_reports_first_violation_in_form_order() {
    let compiled = compile(&board_template(OrganizationId::new())).unwrap();
    let err = normalize(&compiled.schema, &raw(&[])).unwrap_err();
    assert_eq!(err.field, "full_name");

    let err = normalize(
        &compiled.schema,
        &raw(&[
            ("full_name", json!("A. Chair")),
            ("email", json!("not-an-email")),
        ]),
    )
    .unwrap_err();
    assert_eq!(err.field, "position");
}
