//! Timestamp parsing for the records service.
//!
//! The backend is not consistent about datetime shape: appointments usually
//! carry RFC 3339 strings, older history rows a space-separated form, and
//! sub-record entries often a bare date. Everything funnels through
//! [`parse_datetime`] so every event date is valid by construction.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Deserializer};

use super::ParseError;

/// Non-RFC-3339 shapes accepted, tried in order.
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"];

/// Parses a backend timestamp. Accepts RFC 3339, `YYYY-MM-DDTHH:MM:SS`,
/// `YYYY-MM-DD HH:MM:SS`, or a bare `YYYY-MM-DD` (taken as midnight).
pub fn parse_datetime(raw: &str) -> Result<NaiveDateTime, ParseError> {
    let s = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.naive_utc());
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(dt);
        }
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(d.and_time(NaiveTime::MIN));
    }
    Err(ParseError::InvalidTimestamp(raw.to_string()))
}

/// Serde adapter for required timestamp fields.
pub fn de_datetime<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_datetime(&raw).map_err(serde::de::Error::custom)
}

/// Serde adapter for optional timestamp fields. Missing, null and blank
/// values become `None`; anything else must parse.
pub fn de_datetime_opt<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => parse_datetime(&s)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}
