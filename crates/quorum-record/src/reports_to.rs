//! # Reports-To Reference
//!
//! The polymorphic "reports to" value, resolved once at submission time and
//! never re-resolved. A genuine sum type with exhaustive matching at every
//! consumption site — no string with prefix conventions, so the "is this a
//! UUID or a sentinel" bug class cannot exist.
//!
//! ## Storage Rule
//!
//! Only [`ReportsToReference::PersonRef`] may populate the relational
//! reference column; the column stays a true foreign key or null. The
//! human-readable label for `Preset`/`FreeText` is written to the custom
//! bag so it is still displayed without violating referential integrity.

use serde::{Deserialize, Serialize};

use quorum_core::{RecordId, ValidationError};

/// The form value meaning "someone outside the system; see the free-text
/// companion input".
pub const OTHER_SENTINEL: &str = "__other__";

/// Custom-bag key under which the display label of a non-relational
/// reports-to value is stored.
pub const REPORTS_TO_DISPLAY_KEY: &str = "reports_to_display";

/// Fixed organizational titles a person may report to.
///
/// These are roles, not record references — a board member reports to "the
/// chair", whoever currently holds that seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PresetRole {
    /// The board chair.
    BoardChair,
    /// The deputy chair.
    DeputyChair,
    /// A committee chair.
    CommitteeChair,
    /// The chief executive.
    ChiefExecutive,
    /// The company secretary.
    CompanySecretary,
}

impl PresetRole {
    /// All preset roles in canonical order.
    pub fn all() -> &'static [PresetRole] {
        &[
            Self::BoardChair,
            Self::DeputyChair,
            Self::CommitteeChair,
            Self::ChiefExecutive,
            Self::CompanySecretary,
        ]
    }

    /// The snake_case form value for this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BoardChair => "board_chair",
            Self::DeputyChair => "deputy_chair",
            Self::CommitteeChair => "committee_chair",
            Self::ChiefExecutive => "chief_executive",
            Self::CompanySecretary => "company_secretary",
        }
    }

    /// Human-readable display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::BoardChair => "Board Chair",
            Self::DeputyChair => "Deputy Chair",
            Self::CommitteeChair => "Committee Chair",
            Self::ChiefExecutive => "Chief Executive",
            Self::CompanySecretary => "Company Secretary",
        }
    }

    /// Look up a preset role by its form value. `None` means the value is
    /// not in the preset vocabulary.
    pub fn from_value(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|role| role.as_str() == s)
    }
}

impl std::fmt::Display for PresetRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who a person reports to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum ReportsToReference {
    /// A fixed organizational title, not a record reference.
    Preset(PresetRole),
    /// A validated reference to another person record.
    PersonRef(RecordId),
    /// An ad hoc name for someone outside the system.
    FreeText(String),
}

impl ReportsToReference {
    /// Resolve the raw form selection into a reference.
    ///
    /// Precedence, in order:
    /// 1. an exact preset vocabulary match — this wins even if the value
    ///    also happens to be a syntactically valid UUID;
    /// 2. a v4-style UUID becomes a [`Self::PersonRef`];
    /// 3. the `__other__` sentinel plus non-blank free text becomes
    ///    [`Self::FreeText`].
    ///
    /// A blank selection resolves to `None` (the field was not filled).
    /// Anything else is a validation error on the `reports_to` field.
    pub fn resolve(
        selection: &str,
        other_text: Option<&str>,
    ) -> Result<Option<Self>, ValidationError> {
        let selection = selection.trim();
        if selection.is_empty() {
            return Ok(None);
        }
        if let Some(role) = PresetRole::from_value(selection) {
            return Ok(Some(Self::Preset(role)));
        }
        if let Some(id) = RecordId::parse_v4(selection) {
            return Ok(Some(Self::PersonRef(id)));
        }
        if selection == OTHER_SENTINEL {
            let text = other_text.map(str::trim).unwrap_or_default();
            if text.is_empty() {
                return Err(ValidationError::new(
                    "reports_to",
                    "name the person this role reports to",
                ));
            }
            return Ok(Some(Self::FreeText(text.to_string())));
        }
        Err(ValidationError::new(
            "reports_to",
            "unrecognized reports-to selection",
        ))
    }

    /// The relational reference, if this is a person reference.
    pub fn person_ref(&self) -> Option<RecordId> {
        match self {
            Self::PersonRef(id) => Some(*id),
            Self::Preset(_) | Self::FreeText(_) => None,
        }
    }

    /// The display label for non-relational variants.
    pub fn display_label(&self) -> Option<String> {
        match self {
            Self::Preset(role) => Some(role.label().to_string()),
            Self::FreeText(name) => Some(name.clone()),
            Self::PersonRef(_) => None,
        }
    }
}
