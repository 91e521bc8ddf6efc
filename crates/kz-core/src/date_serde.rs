//! Serde helpers for the loosely-typed date fields the backend stores.
//!
//! Quiz dates come back as whatever the authoring form sent: full RFC 3339
//! timestamps, bare `YYYY-MM-DD` dates, `datetime-local` values without a
//! zone, empty strings, or `null`. Use with
//! `#[serde(default, deserialize_with = "date_serde::lenient_option")]`.
//! Serialization stays chrono's RFC 3339.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Parse a date string in any of the accepted shapes.
///
/// Returns `None` for blank input or an unrecognized format. Bare dates are
/// taken as midnight UTC.
#[must_use]
pub fn parse_lenient(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Deserialize an optional date, treating blanks as absent.
///
/// # Errors
///
/// Fails only when a non-blank string matches none of the accepted formats.
pub fn lenient_option<'de, D: Deserializer<'de>>(d: D) -> Result<Option<DateTime<Utc>>, D::Error> {
    let raw = Option::<String>::deserialize(d)?;
    match raw {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => parse_lenient(&s)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("unrecognized date '{s}'"))),
    }
}
