//! # Person Record Shards
//!
//! The persisted person record is three logical shards keyed by one record
//! id: typed standard columns, restricted sensitive columns, and a
//! schemaless custom bag.
//!
//! ## Invariant
//!
//! A field id is classified into exactly one shard — never duplicated
//! across them. The shards enumerate themselves as `(column, value)` pairs
//! so the visibility projector has a single source of field names.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use quorum_core::{CivilDate, RecordId};

/// The schemaless custom-field bag: template field id → value.
pub type CustomBag = BTreeMap<String, Value>;

/// Membership status of a person record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordStatus {
    /// Currently holds the position.
    Active,
    /// No longer holds the position.
    Former,
}

impl RecordStatus {
    /// Returns the snake_case string identifier for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Former => "former",
        }
    }
}

impl std::fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Default for RecordStatus {
    fn default() -> Self {
        Self::Active
    }
}

/// The fixed typed columns of the standard shard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StandardShard {
    /// Full legal name.
    pub full_name: Option<String>,
    /// Preferred title (Dr, Prof, Ms...).
    pub preferred_title: Option<String>,
    /// Position held on the board or in the organization.
    pub position: Option<String>,
    /// Job title as published externally.
    pub public_job_title: Option<String>,
    /// Short public biography.
    pub short_bio: Option<String>,
    /// Appointment / start date.
    pub appointed_on: Option<CivilDate>,
    /// Term expiry / finishing date. Unknowable at appointment time;
    /// always optional.
    pub term_expiry: Option<CivilDate>,
    /// Professional qualifications.
    pub qualifications: Option<String>,
    /// Public company affiliations.
    pub company_affiliations: Option<String>,
    /// Public social links (LinkedIn profile et al).
    pub public_social_links: Option<String>,
    /// Public contact email.
    pub public_email: Option<String>,
    /// Who this person reports to. A true foreign key or None — never a
    /// sentinel string, so downstream joins stay valid.
    pub reports_to: Option<RecordId>,
    /// Areas of responsibility. None when the list is empty, so storage
    /// distinguishes "field not shown" from "explicitly empty".
    pub responsible_for: Option<Vec<String>>,
    /// Membership status.
    pub status: RecordStatus,
}

impl StandardShard {
    /// Enumerate the shard as `(column, value)` pairs in catalog order.
    pub fn fields(&self) -> Vec<(&'static str, Option<Value>)> {
        vec![
            ("full_name", self.full_name.clone().map(Value::String)),
            (
                "preferred_title",
                self.preferred_title.clone().map(Value::String),
            ),
            ("position", self.position.clone().map(Value::String)),
            (
                "public_job_title",
                self.public_job_title.clone().map(Value::String),
            ),
            ("short_bio", self.short_bio.clone().map(Value::String)),
            (
                "appointed_on",
                self.appointed_on.map(|d| Value::String(d.to_iso())),
            ),
            (
                "term_expiry",
                self.term_expiry.map(|d| Value::String(d.to_iso())),
            ),
            (
                "qualifications",
                self.qualifications.clone().map(Value::String),
            ),
            (
                "company_affiliations",
                self.company_affiliations.clone().map(Value::String),
            ),
            (
                "public_social_links",
                self.public_social_links.clone().map(Value::String),
            ),
            (
                "public_email",
                self.public_email.clone().map(Value::String),
            ),
            (
                "reports_to",
                self.reports_to.map(|id| Value::String(id.as_uuid().to_string())),
            ),
            (
                "responsible_for",
                self.responsible_for.clone().map(|items| {
                    Value::Array(items.into_iter().map(Value::String).collect())
                }),
            ),
            ("status", Some(Value::String(self.status.as_str().into()))),
        ]
    }
}

/// The fixed restricted columns of the sensitive shard.
///
/// Physically and logically separated from the standard shard: a failed
/// write here never rolls back the standard row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SensitiveShard {
    /// Home address.
    pub home_address: Option<String>,
    /// Date of birth.
    pub date_of_birth: Option<CivilDate>,
    /// Personal email address.
    pub personal_email: Option<String>,
    /// Personal mobile number.
    pub personal_mobile: Option<String>,
    /// National identity number.
    pub national_id: Option<String>,
    /// Free-text health notes.
    pub health_notes: Option<String>,
    /// Emergency contact name.
    pub emergency_contact_name: Option<String>,
    /// Emergency contact phone.
    pub emergency_contact_phone: Option<String>,
}

impl SensitiveShard {
    /// Whether every column is unset. An empty shard is never written.
    pub fn is_empty(&self) -> bool {
        self.fields().iter().all(|(_, v)| v.is_none())
    }

    /// Enumerate the shard as `(column, value)` pairs in catalog order.
    pub fn fields(&self) -> Vec<(&'static str, Option<Value>)> {
        vec![
            (
                "home_address",
                self.home_address.clone().map(Value::String),
            ),
            (
                "date_of_birth",
                self.date_of_birth.map(|d| Value::String(d.to_iso())),
            ),
            (
                "personal_email",
                self.personal_email.clone().map(Value::String),
            ),
            (
                "personal_mobile",
                self.personal_mobile.clone().map(Value::String),
            ),
            ("national_id", self.national_id.clone().map(Value::String)),
            ("health_notes", self.health_notes.clone().map(Value::String)),
            (
                "emergency_contact_name",
                self.emergency_contact_name.clone().map(Value::String),
            ),
            (
                "emergency_contact_phone",
                self.emergency_contact_phone.clone().map(Value::String),
            ),
        ]
    }
}

/// A full stored person record: the three shards plus the record id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonRecord {
    /// The record identifier shared by all shards.
    pub id: RecordId,
    /// Typed standard columns.
    pub standard: StandardShard,
    /// Restricted sensitive columns. All-None if the sensitive write
    /// failed or nothing sensitive was submitted.
    pub sensitive: SensitiveShard,
    /// The schemaless custom bag.
    pub custom: CustomBag,
}
