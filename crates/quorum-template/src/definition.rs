//! # Field Definitions and Templates
//!
//! The organization-editable input to the compiler: an ordered list of
//! field definitions scoped to one `(organization, person category)` pair.
//!
//! Templates have no versioning. Editing a template does not alter
//! already-submitted records; a submission is validated against the schema
//! snapshot compiled when the form was opened.

use serde::{Deserialize, Serialize};

use quorum_core::{FieldKind, OrganizationId, PersonCategory};

/// One field of a template, as edited by an organization admin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDefinition {
    /// Explicit field id. When absent, derived from the label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display label shown on the form.
    pub label: String,
    /// The field kind, from the fixed catalog vocabulary.
    pub kind: FieldKind,
    /// Whether the template marks this field required. Subject to the
    /// required-override rule at compile time.
    #[serde(default)]
    pub required: bool,
    /// Disabled fields are skipped entirely by the compiler.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Position in the form. Ties keep definition order.
    #[serde(default)]
    pub order: u32,
}

fn default_enabled() -> bool {
    true
}

impl FieldDefinition {
    /// The field's id: the explicit id if present, otherwise derived from
    /// the label (lower-cased, whitespace runs → single underscore).
    pub fn derived_id(&self) -> String {
        match &self.id {
            Some(id) if !id.trim().is_empty() => id.trim().to_string(),
            _ => self
                .label
                .trim()
                .to_lowercase()
                .split_whitespace()
                .collect::<Vec<_>>()
                .join("_"),
        }
    }
}

/// An ordered field template for one organization and person category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldTemplate {
    /// Owning organization.
    pub organization: OrganizationId,
    /// The person category this template applies to.
    pub category: PersonCategory,
    /// The fields, in admin-edited order.
    pub fields: Vec<FieldDefinition>,
}

impl FieldTemplate {
    /// Enabled fields in form order: sorted by `order`, ties keeping
    /// definition order.
    pub fn enabled_fields(&self) -> Vec<&FieldDefinition> {
        let mut fields: Vec<&FieldDefinition> =
            self.fields.iter().filter(|f| f.enabled).collect();
        fields.sort_by_key(|f| f.order);
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(label: &str) -> FieldDefinition {
        FieldDefinition {
            id: None,
            label: label.to_string(),
            kind: FieldKind::Text,
            required: false,
            enabled: true,
            order: 0,
        }
    }

    #[test]
    fn test_derived_id_from_label() {
        assert_eq!(field("Finishing Date").derived_id(), "finishing_date");
        assert_eq!(field("  Short   Bio ").derived_id(), "short_bio");
    }

    #[test]
    fn test_explicit_id_wins() {
        let mut f = field("Finishing Date");
        f.id = Some("term_expiry".into());
        assert_eq!(f.derived_id(), "term_expiry");
    }

    #[test]
    fn test_blank_explicit_id_falls_back_to_label() {
        let mut f = field("Position");
        f.id = Some("   ".into());
        assert_eq!(f.derived_id(), "position");
    }

    #[test]
    fn test_enabled_fields_sorted_stable() {
        let mut a = field("A");
        a.order = 2;
        let mut b = field("B");
        b.order = 1;
        let mut c = field("C");
        c.order = 1;
        let mut d = field("D");
        d.enabled = false;
        let template = FieldTemplate {
            organization: OrganizationId::new(),
            category: PersonCategory::Board,
            fields: vec![a, b, c, d],
        };
        let ids: Vec<String> = template
            .enabled_fields()
            .iter()
            .map(|f| f.derived_id())
            .collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_template_serde_roundtrip() {
        let template = FieldTemplate {
            organization: OrganizationId::new(),
            category: PersonCategory::Executive,
            fields: vec![field("Position")],
        };
        let json = serde_json::to_string(&template).unwrap();
        let parsed: FieldTemplate = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.fields.len(), 1);
        assert_eq!(parsed.category, PersonCategory::Executive);
    }

    #[test]
    fn test_definition_defaults_on_deserialize() {
        let json = r#"{"label": "Position", "kind": "text"}"#;
        let parsed: FieldDefinition = serde_json::from_str(json).unwrap();
        assert!(parsed.enabled);
        assert!(!parsed.required);
        assert_eq!(parsed.order, 0);
        assert_eq!(parsed.id, None);
    }
}
