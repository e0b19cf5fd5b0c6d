//! Time utilities: parsing local "YYYY-MM-DD HH:MM" stamps, RFC3339 storage format.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Local, NaiveDateTime, Utc};

const INPUT_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"];

/// Parse a wall-clock stamp typed by the user, interpreted in the local zone.
pub fn parse_local_datetime(s: &str) -> AppResult<DateTime<Utc>> {
    let naive = INPUT_FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(s.trim(), f).ok())
        .ok_or_else(|| AppError::InvalidTime(s.to_string()))?;

    // DST gaps have no local instant; ambiguous stamps take the earlier one
    let local = naive
        .and_local_timezone(Local)
        .earliest()
        .ok_or_else(|| AppError::InvalidTime(format!("{s} does not exist in local time")))?;

    Ok(local.with_timezone(&Utc))
}

pub fn parse_optional_local_datetime(input: Option<&String>) -> AppResult<Option<DateTime<Utc>>> {
    input.map(|s| parse_local_datetime(s)).transpose()
}

/// Storage format for the SQLite TEXT columns.
pub fn to_db_timestamp(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

pub fn from_db_timestamp(s: &str) -> AppResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| AppError::InvalidTime(s.to_string()))
}

/// "YYYY-MM-DD HH:MM" in the local zone, for display and export.
pub fn format_local(dt: &DateTime<Utc>) -> String {
    dt.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn db_roundtrip_keeps_instant() {
        let dt = Utc.with_ymd_and_hms(2025, 2, 3, 7, 45, 0).unwrap();
        assert_eq!(from_db_timestamp(&to_db_timestamp(&dt)).unwrap(), dt);
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_local_datetime("tomorrow morning").is_err());
        assert!(from_db_timestamp("2025-13-01").is_err());
    }

    #[test]
    fn local_input_displays_back_unchanged() {
        let dt = parse_local_datetime("2025-05-06 09:15").unwrap();
        assert_eq!(format_local(&dt), "2025-05-06 09:15");
    }
}
