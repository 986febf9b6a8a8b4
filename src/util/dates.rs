//! UTC timestamp rendering in the portal's local time.

#[cfg(test)]
#[path = "dates_test.rs"]
mod dates_test;

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Utc};

// America/Asuncion is fixed at UTC-3; DST was abolished there in 2024.
const PORTAL_UTC_OFFSET_SECS: i32 = 3 * 3600;

/// Render a UTC timestamp as `YYYY-MM-DD HH:MM` in portal-local time.
///
/// Accepts RFC 3339 forms (`...Z` or explicit offset) and the backend's
/// naive `YYYY-MM-DD HH:MM:SS` form, which is treated as UTC. Absent,
/// blank, or unparseable input renders `"-"`.
#[must_use]
pub fn utc_to_local_display(iso_ts: Option<&str>) -> String {
    let Some(raw) = iso_ts.map(str::trim).filter(|s| !s.is_empty()) else {
        return "-".to_owned();
    };
    let Some(utc) = parse_utc(raw) else {
        return "-".to_owned();
    };
    let Some(offset) = FixedOffset::west_opt(PORTAL_UTC_OFFSET_SECS) else {
        return "-".to_owned();
    };
    utc.with_timezone(&offset).format("%Y-%m-%d %H:%M").to_string()
}

fn parse_utc(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
        .ok()
        .map(|naive| Utc.from_utc_datetime(&naive))
}
