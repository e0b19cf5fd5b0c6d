//! Working-time rules: maximum daily duration and minimum break on long shifts.

use crate::core::calculator::duration::duration;
use crate::models::time_interval::TimeInterval;
use crate::models::violation::{ComplianceViolation, ViolationKind};
use crate::utils::formatting::format_hours;
use chrono::{Local, TimeZone};

/// Legal thresholds applied to each closed interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompliancePolicy {
    /// Worked hours above this are excessive.
    pub max_daily_hours: f64,
    /// Shifts longer than this need at least `min_break_minutes` of break.
    pub long_shift_hours: f64,
    pub min_break_minutes: u32,
}

impl Default for CompliancePolicy {
    fn default() -> Self {
        Self {
            max_daily_hours: 10.0,
            long_shift_hours: 6.0,
            min_break_minutes: 30,
        }
    }
}

/// Check with the default policy, dates in the local zone.
pub fn check_compliance(intervals: &[TimeInterval]) -> Vec<ComplianceViolation> {
    check_compliance_in(intervals, &CompliancePolicy::default(), &Local)
}

/// Both rules are evaluated independently for every closed interval,
/// so one interval may produce two violations.
pub fn check_compliance_in<Tz: TimeZone>(
    intervals: &[TimeInterval],
    policy: &CompliancePolicy,
    tz: &Tz,
) -> Vec<ComplianceViolation> {
    let mut out = Vec::new();

    for iv in intervals.iter().filter(|iv| iv.end.is_some()) {
        let hours = duration(iv);
        let date = iv.start_date_in(tz);

        if hours > policy.max_daily_hours {
            out.push(ComplianceViolation {
                date,
                kind: ViolationKind::ExcessiveDuration,
                detail: format!(
                    "{}h worked, max {}h permitted",
                    format_hours(hours),
                    format_hours(policy.max_daily_hours)
                ),
            });
        }

        if hours > policy.long_shift_hours && iv.break_minutes < policy.min_break_minutes {
            out.push(ComplianceViolation {
                date,
                kind: ViolationKind::InsufficientBreak,
                detail: format!(
                    "{} min break for {}h worked",
                    iv.break_minutes,
                    format_hours(hours)
                ),
            });
        }
    }

    out
}
