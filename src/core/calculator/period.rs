//! Day/week/month and per-project totals relative to an explicit reference date.

use crate::core::calculator::daily::DailyHoursMap;
use crate::core::calculator::duration::duration;
use crate::models::time_interval::TimeInterval;
use crate::utils::date::{month_bounds, week_bounds};
use chrono::{NaiveDate, TimeZone};
use serde::Serialize;
use std::collections::BTreeMap;

pub const UNASSIGNED_PROJECT: &str = "unassigned";

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PeriodTotals {
    pub day: f64,
    pub week: f64,
    pub month: f64,
}

/// Hours of intervals whose start date (in `tz`) lies in `[from, to]`.
pub fn hours_between<Tz: TimeZone>(
    intervals: &[TimeInterval],
    from: NaiveDate,
    to: NaiveDate,
    tz: &Tz,
) -> f64 {
    intervals
        .iter()
        .filter(|iv| {
            let d = iv.start_date_in(tz);
            d >= from && d <= to
        })
        .map(duration)
        .sum()
}

/// Totals for the reference day, its ISO week (Monday first) and its month.
pub fn period_totals<Tz: TimeZone>(
    intervals: &[TimeInterval],
    reference: NaiveDate,
    tz: &Tz,
) -> PeriodTotals {
    let (w_start, w_end) = week_bounds(reference);
    let (m_start, m_end) = month_bounds(reference);

    PeriodTotals {
        day: hours_between(intervals, reference, reference, tz),
        week: hours_between(intervals, w_start, w_end, tz),
        month: hours_between(intervals, m_start, m_end, tz),
    }
}

/// Project → hours. Intervals without project go under `unassigned`.
pub fn hours_by_project(intervals: &[TimeInterval]) -> BTreeMap<String, f64> {
    let mut out = BTreeMap::new();

    for iv in intervals {
        let key = iv.project.as_deref().unwrap_or(UNASSIGNED_PROJECT).to_string();
        *out.entry(key).or_insert(0.0) += duration(iv);
    }

    out
}

/// Mean over days that have entries; 0 for an empty map.
pub fn average_daily_hours(daily: &DailyHoursMap) -> f64 {
    if daily.is_empty() {
        return 0.0;
    }
    daily.values().sum::<f64>() / daily.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn iv(m: u32, d: u32, hours: u32) -> TimeInterval {
        TimeInterval::new(
            Utc.with_ymd_and_hms(2025, m, d, 8, 0, 0).unwrap(),
            Some(Utc.with_ymd_and_hms(2025, m, d, 8 + hours, 0, 0).unwrap()),
            0,
        )
    }

    #[test]
    fn totals_around_reference() {
        // 2025-10-15 is a Wednesday; week runs 13..19
        let ivs = vec![
            iv(10, 15, 8),
            iv(10, 13, 7),
            iv(10, 12, 5), // previous week, same month
            iv(9, 30, 6),  // previous month
            iv(10, 20, 4), // next week
        ];
        let t = period_totals(&ivs, NaiveDate::from_ymd_opt(2025, 10, 15).unwrap(), &Utc);
        assert_eq!(t.day, 8.0);
        assert_eq!(t.week, 15.0);
        assert_eq!(t.month, 24.0);
    }

    #[test]
    fn projects_and_unassigned() {
        let ivs = vec![
            iv(3, 3, 4).with_project("payroll-migration"),
            iv(3, 4, 3).with_project("payroll-migration"),
            iv(3, 5, 2),
        ];
        let p = hours_by_project(&ivs);
        assert_eq!(p["payroll-migration"], 7.0);
        assert_eq!(p[UNASSIGNED_PROJECT], 2.0);
    }

    #[test]
    fn average_of_empty_map_is_zero() {
        assert_eq!(average_daily_hours(&DailyHoursMap::new()), 0.0);
    }

    #[test]
    fn average_over_logged_days() {
        let daily: DailyHoursMap = [
            (NaiveDate::from_ymd_opt(2025, 1, 6).unwrap(), 6.0),
            (NaiveDate::from_ymd_opt(2025, 1, 7).unwrap(), 9.0),
        ]
        .into_iter()
        .collect();
        assert_eq!(average_daily_hours(&daily), 7.5);
    }
}
