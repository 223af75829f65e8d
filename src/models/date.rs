//! Calendar-date parsing for records coming from outside the engine
//!
//! Only the date part of a value is kept, exactly as written. A timestamp
//! like `2024-01-31T23:30:00-05:00` is the 31st of January; it is never
//! shifted into another day (or month) by timezone conversion.

use chrono::NaiveDate;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serializer};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a calendar date from `YYYY-MM-DD`, an RFC 3339 timestamp, or a
/// `YYYY-MM-DD HH:MM:SS` timestamp. Returns `None` for anything else.
pub fn parse_calendar_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    let date_part = match s.get(..10) {
        Some(head) if s.len() == 10 => head,
        Some(head) if matches!(s.as_bytes().get(10), Some(b'T' | b't' | b' ')) => head,
        _ => return None,
    };
    NaiveDate::parse_from_str(date_part, DATE_FORMAT).ok()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDate {
    Text(String),
    Other(IgnoredAny),
}

/// Serde adapter for optional dates that never fails on a malformed value
///
/// Use with `#[serde(default, with = "crate::models::date::lenient")]`.
/// Unparseable input becomes `None`.
pub mod lenient {
    use super::*;

    pub fn serialize<S: Serializer>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error> {
        match date {
            Some(d) => serializer.collect_str(&d.format(DATE_FORMAT)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<NaiveDate>, D::Error> {
        let raw = Option::<RawDate>::deserialize(deserializer)?;
        Ok(match raw {
            Some(RawDate::Text(s)) => parse_calendar_date(&s),
            Some(RawDate::Other(_)) | None => None,
        })
    }
}
