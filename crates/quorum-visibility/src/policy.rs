//! # Visibility Policy Table — Single Source of Truth
//!
//! One row per record column, one access level per tier. The projector
//! consults this table and nothing else, so the three tiers cannot drift
//! apart the way three hand-written field lists would.
//!
//! ## Invariants (verified by [`verify_policy_monotonic`])
//!
//! - Monotonicity: for every column and every publish-flag value,
//!   visibility never decreases as the tier increases.
//! - Completeness: the table covers exactly the standard and sensitive
//!   catalog columns, each once.

use thiserror::Error;

use quorum_core::catalog::{SENSITIVE_COLUMNS, STANDARD_COLUMNS};
use quorum_core::ViewerTier;

/// What a tier may see of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Always visible at this tier.
    Always,
    /// Never visible at this tier, regardless of publish flags.
    Never,
    /// Visible iff the record's publish flag for the column is set.
    /// A flag is necessary but not sufficient: it only matters where the
    /// table says so.
    IfPublished,
}

impl Access {
    /// Whether a value is visible given the column's publish flag.
    pub fn visible(&self, published: bool) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::IfPublished => published,
        }
    }
}

/// One column's access levels across the three tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolicyRow {
    /// The shard column this row governs.
    pub column: &'static str,
    /// Access at the public tier.
    pub public: Access,
    /// Access at the internal tier.
    pub internal: Access,
    /// Access at the admin tier.
    pub admin: Access,
}

impl PolicyRow {
    /// The access level at a tier.
    pub fn access(&self, tier: ViewerTier) -> Access {
        match tier {
            ViewerTier::Public => self.public,
            ViewerTier::Internal => self.internal,
            ViewerTier::Admin => self.admin,
        }
    }
}

use Access::{Always, IfPublished, Never};

/// The policy matrix for every named record column.
///
/// Public tier: the fixed public-eligible set is opt-in (`IfPublished`);
/// everything else is `Never`. Internal tier: operational visibility —
/// standard columns plus contact-grade sensitive columns, but never the
/// legally sensitive block (national id, home address, health notes).
/// Admin tier: the full record.
pub const POLICY: &[PolicyRow] = &[
    // ─── standard shard ──────────────────────────────────────────────
    PolicyRow { column: "full_name", public: IfPublished, internal: Always, admin: Always },
    PolicyRow { column: "preferred_title", public: IfPublished, internal: Always, admin: Always },
    PolicyRow { column: "position", public: IfPublished, internal: Always, admin: Always },
    PolicyRow { column: "public_job_title", public: IfPublished, internal: Always, admin: Always },
    PolicyRow { column: "short_bio", public: IfPublished, internal: Always, admin: Always },
    PolicyRow { column: "appointed_on", public: Never, internal: Always, admin: Always },
    PolicyRow { column: "term_expiry", public: Never, internal: Always, admin: Always },
    PolicyRow { column: "qualifications", public: IfPublished, internal: Always, admin: Always },
    PolicyRow { column: "company_affiliations", public: IfPublished, internal: Always, admin: Always },
    PolicyRow { column: "public_social_links", public: Never, internal: Always, admin: Always },
    PolicyRow { column: "public_email", public: IfPublished, internal: Always, admin: Always },
    PolicyRow { column: "reports_to", public: Never, internal: Always, admin: Always },
    PolicyRow { column: "responsible_for", public: Never, internal: Always, admin: Always },
    PolicyRow { column: "status", public: Never, internal: Always, admin: Always },
    // ─── sensitive shard ─────────────────────────────────────────────
    PolicyRow { column: "home_address", public: Never, internal: Never, admin: Always },
    PolicyRow { column: "date_of_birth", public: Never, internal: Always, admin: Always },
    PolicyRow { column: "personal_email", public: Never, internal: Always, admin: Always },
    PolicyRow { column: "personal_mobile", public: Never, internal: Always, admin: Always },
    PolicyRow { column: "national_id", public: Never, internal: Never, admin: Always },
    PolicyRow { column: "health_notes", public: Never, internal: Never, admin: Always },
    PolicyRow { column: "emergency_contact_name", public: Never, internal: Always, admin: Always },
    PolicyRow { column: "emergency_contact_phone", public: Never, internal: Always, admin: Always },
];

/// The implicit row governing every custom-bag field.
const CUSTOM_ROW: PolicyRow = PolicyRow {
    column: "<custom>",
    public: Never,
    internal: Always,
    admin: Always,
};

/// The access level for a column at a tier.
///
/// Columns without a named row are custom-bag fields and get the implicit
/// custom policy.
pub fn access(tier: ViewerTier, column: &str) -> Access {
    POLICY
        .iter()
        .find(|row| row.column == column)
        .unwrap_or(&CUSTOM_ROW)
        .access(tier)
}

/// Policy table verification failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PolicyError {
    /// A lower tier would see a column a higher tier hides.
    #[error("policy for {column:?} is not monotonic between {lower} and {higher}")]
    NonMonotonic {
        /// The offending column.
        column: String,
        /// The lower of the two tiers.
        lower: ViewerTier,
        /// The higher of the two tiers.
        higher: ViewerTier,
    },

    /// A catalog column has no policy row.
    #[error("catalog column {0:?} has no policy row")]
    MissingColumn(String),

    /// A policy row names a column the catalog does not have.
    #[error("policy row {0:?} is not a catalog column")]
    UnknownColumn(String),

    /// Two policy rows govern the same column.
    #[error("duplicate policy row for {0:?}")]
    DuplicateColumn(String),
}

/// Verify the policy table: monotone across tiers for every publish-flag
/// value, and complete over the catalog columns.
///
/// Callers run this once at startup; the test suite pins it as well.
pub fn verify_policy_monotonic() -> Result<(), PolicyError> {
    let catalog: Vec<&str> = STANDARD_COLUMNS
        .iter()
        .chain(SENSITIVE_COLUMNS)
        .copied()
        .collect();

    for column in &catalog {
        if !POLICY.iter().any(|row| row.column == *column) {
            return Err(PolicyError::MissingColumn(column.to_string()));
        }
    }
    let mut seen = std::collections::HashSet::new();
    for row in POLICY {
        if !catalog.contains(&row.column) {
            return Err(PolicyError::UnknownColumn(row.column.to_string()));
        }
        if !seen.insert(row.column) {
            return Err(PolicyError::DuplicateColumn(row.column.to_string()));
        }
    }

    for row in POLICY.iter().chain(std::iter::once(&CUSTOM_ROW)) {
        for published in [false, true] {
            let tiers = ViewerTier::all();
            for pair in tiers.windows(2) {
                let lower_visible = row.access(pair[0]).visible(published);
                let higher_visible = row.access(pair[1]).visible(published);
                if lower_visible && !higher_visible {
                    return Err(PolicyError::NonMonotonic {
                        column: row.column.to_string(),
                        lower: pair[0],
                        higher: pair[1],
                    });
                }
            }
        }
    }
    Ok(())
}
