//! Elapsed working hours of a single interval.

use crate::models::time_interval::TimeInterval;

/// Worked hours of `interval`, break already subtracted.
///
/// Open intervals count as 0. The result is not clamped: a break longer
/// than the span gives a negative value and is left for the caller to show.
pub fn duration(interval: &TimeInterval) -> f64 {
    let Some(end) = interval.end else {
        return 0.0;
    };

    let span_hours = (end - interval.start).num_seconds() as f64 / 3600.0;
    span_hours - interval.break_minutes as f64 / 60.0
}

/// Sum of `duration` over all intervals.
pub fn total_hours(intervals: &[TimeInterval]) -> f64 {
    intervals.iter().map(duration).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn at(h: u32, m: u32) -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 10, h, m, 0).unwrap()
    }

    #[test]
    fn open_interval_is_zero() {
        let iv = TimeInterval::new(at(8, 0), None, 45);
        assert_eq!(duration(&iv), 0.0);
    }

    #[test]
    fn subtracts_break() {
        let iv = TimeInterval::new(at(9, 0), Some(at(17, 30)), 30);
        assert_eq!(duration(&iv), 8.0);
    }

    #[test]
    fn zero_length_span_keeps_break_negative() {
        let iv = TimeInterval::new(at(12, 0), Some(at(12, 0)), 90);
        assert_eq!(duration(&iv), -1.5);
    }

    #[test]
    fn break_longer_than_span_is_not_clamped() {
        let iv = TimeInterval::new(at(10, 0), Some(at(10, 30)), 60);
        assert_eq!(duration(&iv), -0.5);
    }

    #[test]
    fn total_skips_open_intervals() {
        let ivs = vec![
            TimeInterval::new(at(8, 0), Some(at(12, 0)), 0),
            TimeInterval::new(at(13, 0), None, 0),
        ];
        assert_eq!(total_hours(&ivs), 4.0);
    }
}
