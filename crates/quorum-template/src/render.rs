//! # Render Plan
//!
//! The layout half of a compiled template: which fields need a non-default
//! widget, which are paired into a two-column row, and which carry a
//! required asterisk.
//!
//! Pairing is purely a layout hint; it has no effect on validation.

use serde::{Deserialize, Serialize};

use quorum_core::{CivilDate, FieldKind, PersonCategory};

use crate::compiler::CompiledField;

/// Canonical ids rendered paired with the field immediately following them
/// in template order.
const PAIRED_WITH_NEXT: &[&str] = &[
    "preferred_title",
    "personal_mobile",
    "emergency_contact_phone",
    "term_expiry",
];

/// Canonical ids that get the long-text control regardless of kind.
const NARRATIVE_FIELDS: &[&str] = &[
    "short_bio",
    "qualifications",
    "company_affiliations",
    "health_notes",
];

/// Position suggestions for the board category.
const BOARD_POSITIONS: &[&str] = &[
    "Chair",
    "Deputy Chair",
    "Treasurer",
    "Secretary",
    "Non-Executive Director",
];

/// Position suggestions for the executive category.
const EXECUTIVE_POSITIONS: &[&str] = &[
    "Chief Executive",
    "Chief Financial Officer",
    "Chief Operating Officer",
    "General Counsel",
];

/// Position suggestions for the key-staff category.
const KEY_STAFF_POSITIONS: &[&str] = &[
    "Company Secretary",
    "Head of Governance",
    "Head of People",
    "Executive Assistant",
];

/// The disabled-date predicate for a calendar widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateWindow {
    /// Any date may be picked.
    Unrestricted,
    /// Date of birth: no future dates, nothing before 1900.
    Birth,
}

impl DateWindow {
    /// Whether a date may be picked under this window.
    pub fn permits(&self, date: &CivilDate) -> bool {
        match self {
            Self::Unrestricted => true,
            Self::Birth => date.year() >= 1900 && *date <= CivilDate::today(),
        }
    }
}

/// The widget a field renders with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetKind {
    /// Plain control for the field's kind.
    Input(FieldKind),
    /// Position picker backed by a category-specific suggestion list.
    PositionPicker {
        /// Role suggestions for the template's person category.
        suggestions: Vec<String>,
    },
    /// Calendar picker with a field-specific disabled-date window.
    Calendar {
        /// The disabled-date predicate.
        window: DateWindow,
    },
    /// Composite reports-to control: preset titles, person picker, free text.
    ReportsTo,
    /// Phone number control.
    Phone,
    /// Long-text control for narrative fields.
    LongText,
}

/// One field's render instructions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderField {
    /// The template field id.
    pub id: String,
    /// Display label.
    pub label: String,
    /// The widget to render.
    pub widget: WidgetKind,
    /// Whether the form shows a required asterisk. Always equal to the
    /// compiled schema's effective requiredness.
    pub show_asterisk: bool,
    /// Layout hint: render in one row with the next field.
    pub paired_with_next: bool,
}

/// The full render plan for a compiled template, in form order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderPlan {
    /// Render instructions per enabled field.
    pub fields: Vec<RenderField>,
}

impl RenderPlan {
    /// Build the render plan for compiled fields.
    pub(crate) fn for_fields(fields: &[CompiledField], category: PersonCategory) -> Self {
        let last = fields.len().saturating_sub(1);
        let fields = fields
            .iter()
            .enumerate()
            .map(|(i, f)| RenderField {
                id: f.id.clone(),
                label: f.label.clone(),
                widget: widget_for(f, category),
                show_asterisk: f.required,
                paired_with_next: i < last
                    && PAIRED_WITH_NEXT.contains(&f.canonical.as_str()),
            })
            .collect();
        Self { fields }
    }
}

/// Select the widget for a compiled field: special cases by canonical id
/// first, then by kind.
fn widget_for(field: &CompiledField, category: PersonCategory) -> WidgetKind {
    match field.canonical.as_str() {
        "position" => WidgetKind::PositionPicker {
            suggestions: position_suggestions(category)
                .iter()
                .map(|s| s.to_string())
                .collect(),
        },
        "reports_to" => WidgetKind::ReportsTo,
        id if NARRATIVE_FIELDS.contains(&id) => WidgetKind::LongText,
        "date_of_birth" => WidgetKind::Calendar {
            window: DateWindow::Birth,
        },
        _ => match field.kind {
            FieldKind::Date => WidgetKind::Calendar {
                window: DateWindow::Unrestricted,
            },
            FieldKind::Phone => WidgetKind::Phone,
            FieldKind::Textarea => WidgetKind::LongText,
            kind => WidgetKind::Input(kind),
        },
    }
}

/// The role suggestion list for a person category.
pub fn position_suggestions(category: PersonCategory) -> &'static [&'static str] {
    match category {
        PersonCategory::Board => BOARD_POSITIONS,
        PersonCategory::Executive => EXECUTIVE_POSITIONS,
        PersonCategory::KeyStaff => KEY_STAFF_POSITIONS,
    }
}
