// src/export/model.rs

use crate::core::calculator::duration::duration;
use crate::models::leave_request::LeaveRequest;
use crate::models::record::CategorizedRecord;
use crate::models::time_interval::TimeInterval;
use crate::utils::format_hours;
use crate::utils::time::format_local;
use serde::Serialize;

/// Flat row shape shared by the CSV, JSON and XLSX writers.
pub trait ExportRow: Serialize {
    fn headers() -> &'static [&'static str];
    fn to_row(&self) -> Vec<String>;
}

/// Flat time entry; `start`/`end` in local time.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct TimeEntryExport {
    pub id: i64,
    pub employee_id: i64,
    pub start: String,
    pub end: String,
    pub break_minutes: u32,
    pub hours: f64,
    pub project: String,
}

impl From<&TimeInterval> for TimeEntryExport {
    fn from(iv: &TimeInterval) -> Self {
        Self {
            id: iv.id,
            employee_id: iv.employee_id,
            start: format_local(&iv.start),
            end: iv.end.as_ref().map(format_local).unwrap_or_default(),
            break_minutes: iv.break_minutes,
            hours: (duration(iv) * 100.0).round() / 100.0,
            project: iv.project.clone().unwrap_or_default(),
        }
    }
}

impl ExportRow for TimeEntryExport {
    fn headers() -> &'static [&'static str] {
        &["id", "employee_id", "start", "end", "break_minutes", "hours", "project"]
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.employee_id.to_string(),
            self.start.clone(),
            self.end.clone(),
            self.break_minutes.to_string(),
            format_hours(self.hours),
            self.project.clone(),
        ]
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct LeaveExport {
    pub id: i64,
    pub employee_id: i64,
    pub start_date: String,
    pub end_date: String,
    pub leave_type: String,
    pub half_day: bool,
    pub status: String,
    pub days: f64,
}

impl From<&LeaveRequest> for LeaveExport {
    fn from(r: &LeaveRequest) -> Self {
        Self {
            id: r.id,
            employee_id: r.employee_id,
            start_date: r.start_date.to_string(),
            end_date: r.end_date.to_string(),
            leave_type: r.leave_type.to_db_str().to_string(),
            half_day: r.half_day,
            status: r.status.to_db_str().to_string(),
            days: r.day_count(),
        }
    }
}

impl ExportRow for LeaveExport {
    fn headers() -> &'static [&'static str] {
        &["id", "employee_id", "start_date", "end_date", "leave_type", "half_day", "status", "days"]
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.employee_id.to_string(),
            self.start_date.clone(),
            self.end_date.clone(),
            self.leave_type.clone(),
            if self.half_day { "yes" } else { "no" }.to_string(),
            self.status.clone(),
            self.days.to_string(),
        ]
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct RecordExport {
    pub id: i64,
    pub employee_id: i64,
    pub kind: String,
    pub title: String,
    pub category: String,
    pub issued_on: String,
    pub expires_on: String,
}

impl From<&CategorizedRecord> for RecordExport {
    fn from(r: &CategorizedRecord) -> Self {
        Self {
            id: r.id,
            employee_id: r.employee_id,
            kind: r.kind.to_db_str().to_string(),
            title: r.title.clone(),
            category: r.category.map(|c| c.to_db_str().to_string()).unwrap_or_default(),
            issued_on: r.issued_on.map(|d| d.to_string()).unwrap_or_default(),
            expires_on: r.expires_on.map(|d| d.to_string()).unwrap_or_default(),
        }
    }
}

impl ExportRow for RecordExport {
    fn headers() -> &'static [&'static str] {
        &["id", "employee_id", "kind", "title", "category", "issued_on", "expires_on"]
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.employee_id.to_string(),
            self.kind.clone(),
            self.title.clone(),
            self.category.clone(),
            self.issued_on.clone(),
            self.expires_on.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::leave_request::{LeaveStatus, LeaveType};
    use chrono::NaiveDate;

    #[test]
    fn row_matches_headers() {
        let d = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();
        let leave = LeaveRequest::new(d, d, LeaveType::Personal, true, LeaveStatus::Approved);
        let row = LeaveExport::from(&leave);

        assert_eq!(row.days, 0.5);
        assert_eq!(row.to_row().len(), LeaveExport::headers().len());
        assert_eq!(row.to_row()[4], "personal");
    }
}
