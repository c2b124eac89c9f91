//! # Visibility Projector
//!
//! `project()` reconstructs a single redacted view from a record's three
//! shards plus the record's own publish flags. Pure: no state machine, no
//! I/O — the same inputs always yield the same view.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use quorum_core::{RecordId, ViewerTier};
use quorum_record::PersonRecord;

use crate::policy::access;
use crate::prefs::PublishPreferences;

/// A redacted view of one person record.
///
/// Every record field is present by name; redacted or unset fields are
/// `null`. The set of non-null names is the domain of the monotonicity
/// invariant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectedView {
    /// The projected record.
    pub record_id: RecordId,
    /// The tier the view was produced for.
    pub tier: ViewerTier,
    /// Field name → value; `null` when redacted or unset.
    pub fields: BTreeMap<String, Value>,
}

impl ProjectedView {
    /// The names of fields carrying a non-null value.
    pub fn visible_fields(&self) -> BTreeSet<&str> {
        self.fields
            .iter()
            .filter(|(_, v)| !v.is_null())
            .map(|(k, _)| k.as_str())
            .collect()
    }

    /// The value of a field, if visible.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field).filter(|v| !v.is_null())
    }
}

/// Project a record for a viewer tier.
///
/// Precedence per field: the policy table decides whether the tier may see
/// the column at all; the publish flag only matters where the table says
/// `IfPublished`. A redacted field is present-but-null.
pub fn project(
    record: &PersonRecord,
    prefs: &PublishPreferences,
    tier: ViewerTier,
) -> ProjectedView {
    let mut fields = BTreeMap::new();

    let shard_fields = record
        .standard
        .fields()
        .into_iter()
        .chain(record.sensitive.fields());
    for (column, value) in shard_fields {
        let visible = access(tier, column).visible(prefs.is_published(column));
        let value = if visible {
            value.unwrap_or(Value::Null)
        } else {
            Value::Null
        };
        fields.insert(column.to_string(), value);
    }

    for (key, value) in &record.custom {
        let visible = access(tier, key).visible(prefs.is_published(key));
        let value = if visible { value.clone() } else { Value::Null };
        fields.insert(key.clone(), value);
    }

    ProjectedView {
        record_id: record.id,
        tier,
        fields,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quorum_record::{CustomBag, SensitiveShard, StandardShard};
    use serde_json::json;

    fn full_record() -> PersonRecord {
        let mut custom = CustomBag::new();
        custom.insert("shirt_size".into(), json!("M"));
        PersonRecord {
            id: RecordId::new(),
            standard: StandardShard {
                full_name: Some("A. Chair".into()),
                position: Some("Chair".into()),
                short_bio: Some("Thirty years in governance.".into()),
                public_email: Some("chair@example.org".into()),
                ..Default::default()
            },
            sensitive: SensitiveShard {
                home_address: Some("1 Harbour St".into()),
                national_id: Some("AB123456".into()),
                health_notes: Some("allergy: penicillin".into()),
                personal_mobile: Some("+64 21 555 0100".into()),
                ..Default::default()
            },
            custom,
        }
    }

    #[test]
    fn test_admin_sees_everything() {
        let record = full_record();
        let view = project(&record, &PublishPreferences::new(), ViewerTier::Admin);
        assert_eq!(view.get("full_name"), Some(&json!("A. Chair")));
        assert_eq!(view.get("national_id"), Some(&json!("AB123456")));
        assert_eq!(view.get("health_notes"), Some(&json!("allergy: penicillin")));
        assert_eq!(view.get("shirt_size"), Some(&json!("M")));
    }

    #[test]
    fn test_internal_blocks_legally_sensitive() {
        let record = full_record();
        let view = project(&record, &PublishPreferences::new(), ViewerTier::Internal);
        assert_eq!(view.get("full_name"), Some(&json!("A. Chair")));
        assert_eq!(view.get("personal_mobile"), Some(&json!("+64 21 555 0100")));
        assert_eq!(view.get("shirt_size"), Some(&json!("M")));
        // Block list forced null regardless of flags.
        assert_eq!(view.get("national_id"), None);
        assert_eq!(view.get("home_address"), None);
        assert_eq!(view.get("health_notes"), None);
    }

    #[test]
    fn test_internal_block_list_ignores_publish_flags() {
        let record = full_record();
        let mut prefs = PublishPreferences::new();
        prefs.set("national_id", true);
        prefs.set("home_address", true);
        let view = project(&record, &prefs, ViewerTier::Internal);
        assert_eq!(view.get("national_id"), None);
        assert_eq!(view.get("home_address"), None);
    }

    #[test]
    fn test_public_closed_by_default() {
        let record = full_record();
        let view = project(&record, &PublishPreferences::new(), ViewerTier::Public);
        assert!(view.visible_fields().is_empty());
        // Fields are present-but-null, not absent.
        assert!(view.fields.contains_key("full_name"));
        assert!(view.fields["full_name"].is_null());
    }

    #[test]
    fn test_public_opt_in_reveals_eligible_field() {
        let record = full_record();
        let mut prefs = PublishPreferences::new();
        prefs.set("full_name", true);
        prefs.set("short_bio", true);
        let view = project(&record, &prefs, ViewerTier::Public);
        assert_eq!(view.get("full_name"), Some(&json!("A. Chair")));
        assert_eq!(
            view.get("short_bio"),
            Some(&json!("Thirty years in governance."))
        );
        // Unflagged eligible field stays null.
        assert_eq!(view.get("public_email"), None);
    }

    #[test]
    fn test_public_flag_not_sufficient_outside_eligible_set() {
        let record = full_record();
        let mut prefs = PublishPreferences::new();
        prefs.set("national_id", true);
        prefs.set("personal_mobile", true);
        prefs.set("shirt_size", true);
        let view = project(&record, &prefs, ViewerTier::Public);
        assert_eq!(view.get("national_id"), None);
        assert_eq!(view.get("personal_mobile"), None);
        assert_eq!(view.get("shirt_size"), None);
    }

    #[test]
    fn test_monotonic_for_all_flag_extremes() {
        let record = full_record();
        let all_true: PublishPreferences = record
            .standard
            .fields()
            .iter()
            .chain(record.sensitive.fields().iter())
            .map(|(name, _)| (name.to_string(), true))
            .chain(record.custom.keys().map(|k| (k.clone(), true)))
            .collect();

        for prefs in [PublishPreferences::new(), all_true] {
            let public = project(&record, &prefs, ViewerTier::Public);
            let internal = project(&record, &prefs, ViewerTier::Internal);
            let admin = project(&record, &prefs, ViewerTier::Admin);
            assert!(public.visible_fields().is_subset(&internal.visible_fields()));
            assert!(internal.visible_fields().is_subset(&admin.visible_fields()));
        }
    }

    #[test]
    fn test_projection_is_pure() {
        let record = full_record();
        let prefs = PublishPreferences::new();
        let a = project(&record, &prefs, ViewerTier::Internal);
        let b = project(&record, &prefs, ViewerTier::Internal);
        assert_eq!(a, b);
    }
}
