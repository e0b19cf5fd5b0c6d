//! Approved-absence totals per leave type.

use crate::models::leave_request::{LeaveRequest, LeaveType};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LeaveSummary {
    pub total_days: f64,
    pub by_type: BTreeMap<LeaveType, f64>,
}

impl LeaveSummary {
    /// Days booked for `leave_type` (0 when none).
    pub fn days(&self, leave_type: LeaveType) -> f64 {
        self.by_type.get(&leave_type).copied().unwrap_or(0.0)
    }

    /// Entitlement left after the booked days; negative when overdrawn.
    pub fn remaining(&self, entitlement: f64, leave_type: LeaveType) -> f64 {
        entitlement - self.days(leave_type)
    }
}

/// Sum approved requests whose `start_date` lies in `[from, to]`.
///
/// A request is counted in full even when its end date spills past `to`.
pub fn aggregate(requests: &[LeaveRequest], from: NaiveDate, to: NaiveDate) -> LeaveSummary {
    let mut summary = LeaveSummary::default();

    for req in requests
        .iter()
        .filter(|r| r.status.is_approved())
        .filter(|r| r.start_date >= from && r.start_date <= to)
    {
        let days = req.day_count();
        summary.total_days += days;
        *summary.by_type.entry(req.leave_type).or_insert(0.0) += days;
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::leave_request::LeaveStatus;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn approved(start: NaiveDate, end: NaiveDate, t: LeaveType, half: bool) -> LeaveRequest {
        LeaveRequest::new(start, end, t, half, LeaveStatus::Approved)
    }

    fn year_2024(reqs: &[LeaveRequest]) -> LeaveSummary {
        aggregate(reqs, d(2024, 1, 1), d(2024, 12, 31))
    }

    #[test]
    fn vacation_and_half_sick_day() {
        let reqs = vec![
            approved(d(2024, 1, 2), d(2024, 1, 3), LeaveType::Vacation, false),
            approved(d(2024, 3, 1), d(2024, 3, 1), LeaveType::SickLeave, true),
        ];
        let s = year_2024(&reqs);

        assert_eq!(s.total_days, 2.5);
        assert_eq!(s.by_type.len(), 2);
        assert_eq!(s.days(LeaveType::Vacation), 2.0);
        assert_eq!(s.days(LeaveType::SickLeave), 0.5);
    }

    #[test]
    fn pending_and_rejected_are_ignored() {
        let mut pending = approved(d(2024, 5, 6), d(2024, 5, 10), LeaveType::Vacation, false);
        pending.status = LeaveStatus::Pending;
        let mut rejected = pending.clone();
        rejected.status = LeaveStatus::Rejected;

        let s = year_2024(&[pending, rejected]);
        assert_eq!(s, LeaveSummary::default());
    }

    #[test]
    fn range_filters_on_start_date_only() {
        let reqs = vec![
            // starts before the range → excluded
            approved(d(2023, 12, 28), d(2024, 1, 2), LeaveType::Vacation, false),
            // starts inside, ends after → counted whole
            approved(d(2024, 12, 30), d(2025, 1, 3), LeaveType::Vacation, false),
        ];
        let s = year_2024(&reqs);
        assert_eq!(s.total_days, 5.0);
    }

    #[test]
    fn order_does_not_matter() {
        let mut reqs = vec![
            approved(d(2024, 2, 1), d(2024, 2, 2), LeaveType::Personal, false),
            approved(d(2024, 4, 1), d(2024, 4, 1), LeaveType::Training, true),
            approved(d(2024, 7, 1), d(2024, 7, 12), LeaveType::Vacation, false),
            approved(d(2024, 9, 3), d(2024, 9, 3), LeaveType::Other, false),
        ];
        let forward = year_2024(&reqs);
        reqs.reverse();
        assert_eq!(year_2024(&reqs), forward);
        assert_eq!(forward.total_days, 15.5);
    }

    #[test]
    fn remaining_vacation() {
        let reqs = vec![approved(d(2024, 8, 5), d(2024, 8, 16), LeaveType::Vacation, false)];
        let s = year_2024(&reqs);
        assert_eq!(s.remaining(25.0, LeaveType::Vacation), 13.0);
        assert_eq!(s.remaining(10.0, LeaveType::Vacation), -2.0);
    }
}
