//! # Temporal Types — Canonical Civil Dates
//!
//! Defines `CivilDate`, the date type used for appointment dates, term
//! expiries, and dates of birth. Accepts a fixed set of input
//! representations and renders only as `YYYY-MM-DD`.
//!
//! ## Invariant
//!
//! Raw user input may arrive in several date spellings; the normalization
//! boundary converts them all to `CivilDate`. The internal model never
//! carries an ambiguous date-like string past this point.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// The accepted input spellings, tried in order.
const INPUT_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y", "%Y/%m/%d"];

/// A civil date (no time component, no timezone).
///
/// # Construction
///
/// - [`CivilDate::parse()`] — from one of the accepted input spellings.
/// - [`CivilDate::from_ymd()`] — from numeric components.
/// - [`CivilDate::today()`] — today's UTC date.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct CivilDate(NaiveDate);

impl CivilDate {
    /// Parse a date from user input.
    ///
    /// Accepts ISO `YYYY-MM-DD`, `DD/MM/YYYY`, `YYYY/MM/DD`, and a full
    /// RFC 3339 datetime (the date part is kept, converted to UTC).
    /// Anything else fails — callers treat empty/absent input as "not
    /// provided" before reaching this parser.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        let s = s.trim();
        for format in INPUT_FORMATS {
            if let Ok(date) = NaiveDate::parse_from_str(s, format) {
                return Ok(Self(date));
            }
        }
        // Full datetime input from date-picker widgets.
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(Self(dt.with_timezone(&Utc).date_naive()));
        }
        Err(ValidationError::new(
            "date",
            format!("not a recognizable date: {s:?}"),
        ))
    }

    /// Construct from numeric year/month/day components.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Today's date in UTC.
    pub fn today() -> Self {
        Self(Utc::now().date_naive())
    }

    /// Access the inner `chrono::NaiveDate`.
    pub fn as_naive(&self) -> &NaiveDate {
        &self.0
    }

    /// The calendar year.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Render canonically as `YYYY-MM-DD`.
    pub fn to_iso(&self) -> String {
        self.0.format("%Y-%m-%d").to_string()
    }
}

impl std::fmt::Display for CivilDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_iso())
    }
}
