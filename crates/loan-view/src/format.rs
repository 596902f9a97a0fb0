//! Display formatting for service timestamps and labels.
//!
//! The service emits naive ISO-8601 timestamps (`2024-01-05T11:00:00`), but
//! RFC 3339 and bare dates also show up. Anything unparseable is shown
//! verbatim rather than failing the render.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse a service timestamp, keeping the wall-clock time it was written
/// in.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

/// `Jan 5, 2024 11:00 AM`
#[must_use]
pub fn date_time(raw: &str) -> String {
    parse_timestamp(raw).map_or_else(
        || raw.to_string(),
        |dt| dt.format("%b %-d, %Y %-I:%M %p").to_string(),
    )
}

/// `Jan 5, 2024`
#[must_use]
pub fn calendar_date(raw: &str) -> String {
    parse_timestamp(raw).map_or_else(
        || raw.to_string(),
        |dt| dt.format("%b %-d, %Y").to_string(),
    )
}

/// Upper-case the first character, leave the rest alone.
#[must_use]
pub fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
