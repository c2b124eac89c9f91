//! # Template Compiler
//!
//! `compile()` turns a [`FieldTemplate`] into a [`CompiledTemplate`]:
//! a fail-fast validation schema, a default-value map for form
//! initialisation, and a render plan.
//!
//! Compilation is pure and idempotent — the same template always yields
//! schemas with identical accept/reject behaviour, and nothing here touches
//! I/O.

use std::collections::{BTreeMap, HashSet};

use regex::Regex;
use serde_json::Value;

use quorum_core::{
    catalog, CivilDate, FieldClass, FieldKind, TemplateError, ValidationError,
};

use crate::definition::FieldTemplate;
use crate::render::RenderPlan;

/// Canonical ids that are always optional regardless of the template's
/// `required` flag.
///
/// These fields describe a termination/exit event (term expiry) or an
/// after-the-fact public profile (social links) that cannot be known at the
/// time a person is being added. The override applies identically to the
/// compiled schema and to the render plan's asterisk flag.
pub const ALWAYS_OPTIONAL: &[&str] = &["term_expiry", "public_social_links"];

/// Syntactic email shape: one `@`, no whitespace, a dotted domain.
const EMAIL_PATTERN: &str = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";

/// The requiredness actually enforced for a field, after the override rule.
///
/// Single source of truth: both the compiled schema and the render plan's
/// "show asterisk" logic call this — divergence between the two is the
/// defect class this function exists to remove.
pub fn effective_required(canonical_id: &str, declared_required: bool) -> bool {
    declared_required && !ALWAYS_OPTIONAL.contains(&canonical_id)
}

/// Per-kind validation logic, one variant per [`FieldKind`].
#[derive(Debug, Clone)]
pub enum FieldValidator {
    /// Single-line text: required ⇒ non-blank.
    Text {
        /// Effective requiredness.
        required: bool,
    },
    /// Email: provided values must match the syntactic pattern.
    Email {
        /// Effective requiredness.
        required: bool,
        /// Pattern compiled once at template-compile time.
        pattern: Regex,
    },
    /// Phone number: required ⇒ non-blank.
    Phone {
        /// Effective requiredness.
        required: bool,
    },
    /// Web address: required ⇒ non-blank.
    Url {
        /// Effective requiredness.
        required: bool,
    },
    /// Civil date: provided values must parse.
    Date {
        /// Effective requiredness.
        required: bool,
    },
    /// Multi-line narrative text: required ⇒ non-blank.
    Textarea {
        /// Effective requiredness.
        required: bool,
    },
}

/// Whether a raw value counts as "provided".
///
/// Absent, null, and blank strings are all "not provided" — an empty string
/// from a cleared form control is not a validation failure for an optional
/// field.
fn provided(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.trim().is_empty(),
        Some(_) => true,
    }
}

impl FieldValidator {
    /// Build the validator for a field kind.
    pub fn for_kind(kind: FieldKind, required: bool) -> Result<Self, TemplateError> {
        Ok(match kind {
            FieldKind::Text => Self::Text { required },
            FieldKind::Email => Self::Email {
                required,
                pattern: Regex::new(EMAIL_PATTERN)
                    .map_err(|e| TemplateError::InvalidPattern(e.to_string()))?,
            },
            FieldKind::Phone => Self::Phone { required },
            FieldKind::Url => Self::Url { required },
            FieldKind::Date => Self::Date { required },
            FieldKind::Textarea => Self::Textarea { required },
        })
    }

    /// The effective requiredness this validator enforces.
    pub fn required(&self) -> bool {
        match self {
            Self::Text { required }
            | Self::Email { required, .. }
            | Self::Phone { required }
            | Self::Url { required }
            | Self::Date { required }
            | Self::Textarea { required } => *required,
        }
    }

    /// Validate a raw input value for the field named `field`.
    pub fn validate(&self, field: &str, value: Option<&Value>) -> Result<(), ValidationError> {
        if !provided(value) {
            if self.required() {
                return Err(ValidationError::new(field, "this field is required"));
            }
            return Ok(());
        }

        match self {
            Self::Email { pattern, .. } => {
                let s = expect_string(field, value)?;
                if !pattern.is_match(s.trim()) {
                    return Err(ValidationError::new(field, "not a valid email address"));
                }
                Ok(())
            }
            Self::Date { .. } => {
                let s = expect_string(field, value)?;
                CivilDate::parse(s)
                    .map_err(|_| ValidationError::new(field, "not a recognizable date"))?;
                Ok(())
            }
            Self::Text { .. } | Self::Phone { .. } | Self::Url { .. } | Self::Textarea { .. } => {
                expect_string(field, value)?;
                Ok(())
            }
        }
    }
}

/// Provided values must be strings; anything else is a type violation.
fn expect_string<'v>(field: &str, value: Option<&'v Value>) -> Result<&'v str, ValidationError> {
    match value {
        Some(Value::String(s)) => Ok(s),
        _ => Err(ValidationError::new(field, "expected a text value")),
    }
}

/// One compiled field: classification, effective requiredness, validator.
#[derive(Debug, Clone)]
pub struct CompiledField {
    /// The field id as written in the template (raw input is keyed by this).
    pub id: String,
    /// The id after alias resolution (shard column for standard/sensitive).
    pub canonical: String,
    /// Display label.
    pub label: String,
    /// Field kind from the catalog vocabulary.
    pub kind: FieldKind,
    /// Which shard this field's value lands in.
    pub class: FieldClass,
    /// Effective requiredness, after the override rule.
    pub required: bool,
    /// The per-kind validator.
    pub validator: FieldValidator,
}

/// The compiled validation schema: fields in template order.
#[derive(Debug, Clone)]
pub struct CompiledSchema {
    /// Compiled fields, in form order.
    pub fields: Vec<CompiledField>,
}

impl CompiledSchema {
    /// Validate raw input, failing on the FIRST violated field.
    ///
    /// Matches the form contract of showing one error at a time.
    pub fn validate(&self, raw: &BTreeMap<String, Value>) -> Result<(), ValidationError> {
        for field in &self.fields {
            field.validator.validate(&field.id, raw.get(&field.id))?;
        }
        Ok(())
    }

    /// Look up a compiled field by its template id.
    pub fn field(&self, id: &str) -> Option<&CompiledField> {
        self.fields.iter().find(|f| f.id == id)
    }
}

/// Everything the compiler produces for one template.
#[derive(Debug, Clone)]
pub struct CompiledTemplate {
    /// The validation schema.
    pub schema: CompiledSchema,
    /// Field id → initial form value.
    pub defaults: BTreeMap<String, Value>,
    /// Widget selection, pairing, and asterisk flags.
    pub render_plan: RenderPlan,
}

/// Compile a field template.
///
/// # Errors
///
/// - [`TemplateError::DuplicateFieldId`] if two enabled fields share a
///   derived id. Failing beats silent dedupe: dedupe would drop one of an
///   admin's fields without notice.
/// - [`TemplateError::Classification`] if a field id is reserved or empty —
///   fatal, since no record should be accepted against a template the
///   system cannot classify.
pub fn compile(template: &FieldTemplate) -> Result<CompiledTemplate, TemplateError> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut fields: Vec<CompiledField> = Vec::new();

    for def in template.enabled_fields() {
        let id = def.derived_id();
        let class = catalog::classify(&id)?;
        if !seen.insert(id.clone()) {
            return Err(TemplateError::DuplicateFieldId(id));
        }

        let canonical = catalog::canonical_id(&id).to_string();
        let required = effective_required(&canonical, def.required);
        let validator = FieldValidator::for_kind(def.kind, required)?;

        fields.push(CompiledField {
            id,
            canonical,
            label: def.label.clone(),
            kind: def.kind,
            class,
            required,
            validator,
        });
    }

    let defaults = fields
        .iter()
        .map(|f| (f.id.clone(), Value::String(String::new())))
        .collect();
    let render_plan = RenderPlan::for_fields(&fields, template.category);

    Ok(CompiledTemplate {
        schema: CompiledSchema { fields },
        defaults,
        render_plan,
    })
}
