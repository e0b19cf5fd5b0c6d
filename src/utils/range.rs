//! `--range` parsing shared by the report commands and export.
//!
//! Accepted shapes:
//! - `YYYY`
//! - `YYYY-MM`
//! - `YYYY-MM-DD`
//! - `A:B` where both sides have one of the shapes above (the same one)

use crate::errors::{AppError, AppResult};
use crate::utils::date::month_last_day;
use chrono::NaiveDate;

pub type DateRange = (NaiveDate, NaiveDate);

fn invalid(r: &str, why: &str) -> AppError {
    AppError::InvalidRange(format!("{r}: {why}"))
}

/// First and last day covered by a single `YYYY`, `YYYY-MM` or `YYYY-MM-DD`.
fn span_of(part: &str, whole: &str) -> AppResult<DateRange> {
    match part.len() {
        4 => {
            let y: i32 = part.parse().map_err(|_| invalid(whole, "invalid year"))?;
            let d1 = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(|| invalid(whole, "invalid year"))?;
            let d2 = NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(|| invalid(whole, "invalid year"))?;
            Ok((d1, d2))
        }
        7 => {
            let (ys, ms) = part.split_once('-').ok_or_else(|| invalid(whole, "expected YYYY-MM"))?;
            let y: i32 = ys.parse().map_err(|_| invalid(whole, "invalid year"))?;
            let m: u32 = ms.parse().map_err(|_| invalid(whole, "invalid month"))?;
            let last = month_last_day(y, m).ok_or_else(|| invalid(whole, "invalid month"))?;

            let d1 = NaiveDate::from_ymd_opt(y, m, 1).ok_or_else(|| invalid(whole, "invalid month"))?;
            let d2 = NaiveDate::from_ymd_opt(y, m, last).ok_or_else(|| invalid(whole, "invalid month"))?;
            Ok((d1, d2))
        }
        10 => {
            let d = NaiveDate::parse_from_str(part, "%Y-%m-%d").map_err(|_| invalid(whole, "invalid date"))?;
            Ok((d, d))
        }
        _ => Err(invalid(whole, "unsupported format")),
    }
}

/// Parse a `--range` value into an inclusive date span.
pub fn parse_range(r: &str) -> AppResult<DateRange> {
    let r = r.trim();

    let Some((start_raw, end_raw)) = r.split_once(':') else {
        return span_of(r, r);
    };

    let (start, end) = (start_raw.trim(), end_raw.trim());
    if start.len() != end.len() {
        return Err(invalid(r, "start and end must have the same format"));
    }

    let (from, _) = span_of(start, r)?;
    let (_, to) = span_of(end, r)?;

    if to < from {
        return Err(invalid(r, "end is before start"));
    }
    Ok((from, to))
}

/// `None` and `"all"` mean no bounds.
pub fn parse_optional_range(r: Option<&String>) -> AppResult<Option<DateRange>> {
    match r {
        None => Ok(None),
        Some(v) if v.trim().eq_ignore_ascii_case("all") => Ok(None),
        Some(v) => parse_range(v).map(Some),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn single_shapes() {
        assert_eq!(parse_range("2024").unwrap(), (d(2024, 1, 1), d(2024, 12, 31)));
        assert_eq!(parse_range("2024-02").unwrap(), (d(2024, 2, 1), d(2024, 2, 29)));
        assert_eq!(parse_range("2025-03-04").unwrap(), (d(2025, 3, 4), d(2025, 3, 4)));
    }

    #[test]
    fn spans() {
        assert_eq!(parse_range("2025-01:2025-03").unwrap(), (d(2025, 1, 1), d(2025, 3, 31)));
        assert_eq!(
            parse_range("2025-01-10:2025-01-20").unwrap(),
            (d(2025, 1, 10), d(2025, 1, 20))
        );
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(parse_range("2025-13"), Err(AppError::InvalidRange(_))));
        assert!(parse_range("2025:2025-01").is_err());
        assert!(parse_range("2025-02:2025-01").is_err());
        assert!(parse_range("last week").is_err());
    }

    #[test]
    fn all_means_unbounded() {
        assert_eq!(parse_optional_range(Some(&"ALL".to_string())).unwrap(), None);
        assert_eq!(parse_optional_range(None).unwrap(), None);
    }
}
