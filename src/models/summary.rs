use crate::core::calculator::daily::DailyHoursMap;
use crate::core::calculator::expiry::ExpiryStatus;
use crate::core::calculator::leave::LeaveSummary;
use crate::core::calculator::pattern::PatternAssessment;
use crate::core::calculator::period::PeriodTotals;
use crate::models::leave_request::LeaveRequest;
use crate::models::record::CategorizedRecord;
use crate::models::time_interval::TimeInterval;
use crate::models::violation::ComplianceViolation;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

/// Everything fetched for one employee view. Immutable once built;
/// a write to the store means fetching a new snapshot.
#[derive(Debug, Clone, Default)]
pub struct EmployeeSnapshot {
    pub employee_id: i64,
    pub intervals: Vec<TimeInterval>,
    pub leaves: Vec<LeaveRequest>,
    pub records: Vec<CategorizedRecord>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExpiringRecord {
    pub id: i64,
    pub title: String,
    pub expires_on: Option<NaiveDate>,
    pub status: ExpiryStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmployeeSummary {
    pub employee_id: i64,
    pub reference: NaiveDate,
    pub range: (NaiveDate, NaiveDate),
    /// A day holding only an open interval appears with 0 hours.
    pub daily: DailyHoursMap,
    pub total_hours: f64,
    pub average_daily_hours: f64,
    pub open_intervals: usize,
    /// `None` when no day in range has entries.
    pub pattern: Option<PatternAssessment>,
    pub violations: Vec<ComplianceViolation>,
    pub leave: LeaveSummary,
    /// Annual entitlement minus approved vacation in the reference year.
    pub vacation_remaining: f64,
    pub period: PeriodTotals,
    pub projects: BTreeMap<String, f64>,
    pub expiring: Vec<ExpiringRecord>,
}
