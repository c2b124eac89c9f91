//! # Submission Normalizer
//!
//! Turns validated raw input into a storage-ready, partitioned record:
//! standard columns, sensitive columns, and the custom bag. Resolves the
//! polymorphic reports-to reference and canonicalizes every date at this
//! boundary.
//!
//! Input keys that are not template fields are ignored — the compiled
//! schema snapshot decides which fields exist.

use std::collections::BTreeMap;

use serde_json::Value;

use quorum_core::{CivilDate, FieldClass, FieldKind, ValidationError};
use quorum_template::{CompiledField, CompiledSchema};

use crate::reports_to::{ReportsToReference, REPORTS_TO_DISPLAY_KEY};
use crate::shards::{CustomBag, RecordStatus, SensitiveShard, StandardShard};

/// Input key of the free-text companion to the reports-to control.
const REPORTS_TO_OTHER_KEY: &str = "reports_to_other";

/// A storage-ready record, partitioned into its three shards.
#[derive(Debug, Clone, Default)]
pub struct PartitionedRecord {
    /// Typed standard columns.
    pub standard: StandardShard,
    /// Restricted sensitive columns.
    pub sensitive: SensitiveShard,
    /// Everything else, keyed by template field id.
    pub custom: CustomBag,
}

/// Validate raw input against the compiled schema and partition it.
///
/// Validation runs first and fails fast: the first violated field's message
/// is returned, matching the form contract of showing one error at a time.
pub fn normalize(
    schema: &CompiledSchema,
    raw: &BTreeMap<String, Value>,
) -> Result<PartitionedRecord, ValidationError> {
    schema.validate(raw)?;

    let mut record = PartitionedRecord::default();
    for field in &schema.fields {
        if field.canonical == "reports_to" {
            apply_reports_to(&mut record, field, raw)?;
            continue;
        }

        let Some(text) = provided_text(raw.get(&field.id)) else {
            continue;
        };

        match field.class {
            FieldClass::Standard(column) => {
                apply_standard(&mut record.standard, column, &field.id, text)?
            }
            FieldClass::Sensitive(column) => {
                apply_sensitive(&mut record.sensitive, column, &field.id, text)?
            }
            FieldClass::Custom => {
                let value = if field.kind == FieldKind::Date {
                    // Dates are canonical from here on, custom bag included.
                    Value::String(canonical_date(&field.id, text)?.to_iso())
                } else {
                    Value::String(text.to_string())
                };
                record.custom.insert(field.id.clone(), value);
            }
        }
    }
    Ok(record)
}

/// The trimmed string content of a provided value, or `None` when the
/// value counts as "not provided".
fn provided_text(value: Option<&Value>) -> Option<&str> {
    match value {
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then_some(trimmed)
        }
        _ => None,
    }
}

fn canonical_date(field: &str, text: &str) -> Result<CivilDate, ValidationError> {
    CivilDate::parse(text).map_err(|_| ValidationError::new(field, "not a recognizable date"))
}

/// Resolve and store the reports-to reference.
///
/// Only `PersonRef` populates the relational column; the display label of
/// `Preset`/`FreeText` goes to the custom bag.
fn apply_reports_to(
    record: &mut PartitionedRecord,
    field: &CompiledField,
    raw: &BTreeMap<String, Value>,
) -> Result<(), ValidationError> {
    let selection = provided_text(raw.get(&field.id)).unwrap_or_default();
    let other = provided_text(raw.get(REPORTS_TO_OTHER_KEY));
    let Some(reference) = ReportsToReference::resolve(selection, other)? else {
        return Ok(());
    };
    match reference {
        ReportsToReference::PersonRef(id) => {
            record.standard.reports_to = Some(id);
        }
        ReportsToReference::Preset(role) => {
            record.custom.insert(
                REPORTS_TO_DISPLAY_KEY.to_string(),
                Value::String(role.label().to_string()),
            );
        }
        ReportsToReference::FreeText(name) => {
            record
                .custom
                .insert(REPORTS_TO_DISPLAY_KEY.to_string(), Value::String(name));
        }
    }
    Ok(())
}

fn apply_standard(
    shard: &mut StandardShard,
    column: &'static str,
    field: &str,
    text: &str,
) -> Result<(), ValidationError> {
    match column {
        "full_name" => shard.full_name = Some(text.to_string()),
        "preferred_title" => shard.preferred_title = Some(text.to_string()),
        "position" => shard.position = Some(text.to_string()),
        "public_job_title" => shard.public_job_title = Some(text.to_string()),
        "short_bio" => shard.short_bio = Some(text.to_string()),
        "qualifications" => shard.qualifications = Some(text.to_string()),
        "company_affiliations" => shard.company_affiliations = Some(text.to_string()),
        "public_social_links" => shard.public_social_links = Some(text.to_string()),
        "public_email" => shard.public_email = Some(text.to_string()),
        "appointed_on" => shard.appointed_on = Some(canonical_date(field, text)?),
        "term_expiry" => shard.term_expiry = Some(canonical_date(field, text)?),
        "responsible_for" => {
            let items = parse_responsible_for(text);
            shard.responsible_for = (!items.is_empty()).then_some(items);
        }
        "status" => {
            shard.status = match text {
                "active" => RecordStatus::Active,
                "former" => RecordStatus::Former,
                other => {
                    return Err(ValidationError::new(
                        field,
                        format!("unknown status: {other:?}"),
                    ))
                }
            };
        }
        other => {
            return Err(ValidationError::new(
                field,
                format!("unmapped standard column: {other:?}"),
            ))
        }
    }
    Ok(())
}

fn apply_sensitive(
    shard: &mut SensitiveShard,
    column: &'static str,
    field: &str,
    text: &str,
) -> Result<(), ValidationError> {
    match column {
        "home_address" => shard.home_address = Some(text.to_string()),
        "personal_email" => shard.personal_email = Some(text.to_string()),
        "personal_mobile" => shard.personal_mobile = Some(text.to_string()),
        "national_id" => shard.national_id = Some(text.to_string()),
        "health_notes" => shard.health_notes = Some(text.to_string()),
        "emergency_contact_name" => shard.emergency_contact_name = Some(text.to_string()),
        "emergency_contact_phone" => shard.emergency_contact_phone = Some(text.to_string()),
        "date_of_birth" => shard.date_of_birth = Some(canonical_date(field, text)?),
        other => {
            return Err(ValidationError::new(
                field,
                format!("unmapped sensitive column: {other:?}"),
            ))
        }
    }
    Ok(())
}

/// Parse a comma-separated responsibility list: trimmed, deduplicated
/// (first occurrence wins), order-preserving. Blank input yields an empty
/// sequence.
fn parse_responsible_for(text: &str) -> Vec<String> {
    let mut items: Vec<String> = Vec::new();
    for part in text.split(',') {
        let part = part.trim();
        if !part.is_empty() && !items.iter().any(|existing| existing == part) {
            items.push(part.to_string());
        }
    }
    items
}
