//! Groups intervals by calendar day.

use crate::core::calculator::duration::duration;
use crate::models::time_interval::TimeInterval;
use chrono::{Local, NaiveDate, TimeZone};
use std::collections::BTreeMap;

/// Calendar date → accumulated hours. Iterates chronologically.
pub type DailyHoursMap = BTreeMap<NaiveDate, f64>;

/// Bucketize in the viewer's local zone.
pub fn bucketize(intervals: &[TimeInterval]) -> DailyHoursMap {
    bucketize_in(intervals, &Local)
}

/// Bucketize using the date of `start` in `tz`.
///
/// An interval that crosses midnight is attributed to its start date only.
/// Open intervals still create their day's entry (with 0 hours).
pub fn bucketize_in<Tz: TimeZone>(intervals: &[TimeInterval], tz: &Tz) -> DailyHoursMap {
    let mut map = DailyHoursMap::new();

    for iv in intervals {
        *map.entry(iv.start_date_in(tz)).or_insert(0.0) += duration(iv);
    }

    map
}
