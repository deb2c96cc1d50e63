//! Date normalization for listing order.
//!
//! Front matter dates arrive as loosely typed YAML values. Listings sort on a
//! calendar date, so every value is mapped onto a [`NaiveDate`]:
//!
//! - `YYYY-MM-DD` → that date
//! - a timestamp (`2024-06-01T09:30:00Z`, `2024-06-01 09:30:00`) → its date part
//! - anything else, including a missing value → [`NaiveDate::MIN`]
//!
//! Mapping failures to the minimum date makes undated or malformed entries
//! sort last under descending order.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_yaml::Value;

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Map a raw front matter date to a comparable calendar date. Never fails.
pub fn normalize_date(value: Option<&Value>) -> NaiveDate {
    match value {
        Some(Value::String(s)) => parse_date_str(s).unwrap_or(NaiveDate::MIN),
        Some(Value::Tagged(tagged)) => normalize_date(Some(&tagged.value)),
        _ => NaiveDate::MIN,
    }
}

fn parse_date_str(s: &str) -> Option<NaiveDate> {
    if is_plain_date(s) {
        return NaiveDate::parse_from_str(s, DATE_FORMAT).ok();
    }
    parse_timestamp(s)
}

/// Timestamps count as native dates and are truncated to the date as written.
fn parse_timestamp(s: &str) -> Option<NaiveDate> {
    if s.len() <= 10 || !s.get(..10).is_some_and(is_plain_date) {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|dt| dt.date())
}

/// Structural `YYYY-MM-DD` check; calendar validity is left to chrono.
fn is_plain_date(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}
