use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use serde::Serialize;

/// One recorded work session.
///
/// `end == None` means the session is still open (clocked in, not out).
/// Timestamps are kept in UTC; calendar dates are always derived in the
/// viewer's zone by the calculators.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeInterval {
    pub id: i64,                      // ⇔ time_entries.id
    pub employee_id: i64,             // ⇔ time_entries.employee_id
    pub start: DateTime<Utc>,         // ⇔ time_entries.start (RFC3339)
    pub end: Option<DateTime<Utc>>,   // ⇔ time_entries.end (NULL when open)
    pub break_minutes: u32,           // ⇔ time_entries.break_minutes
    pub project: Option<String>,      // ⇔ time_entries.project
}

impl TimeInterval {
    /// Snapshot value without store identity (id/employee = 0).
    pub fn new(start: DateTime<Utc>, end: Option<DateTime<Utc>>, break_minutes: u32) -> Self {
        Self {
            id: 0,
            employee_id: 0,
            start,
            end,
            break_minutes,
            project: None,
        }
    }

    pub fn with_project(mut self, project: impl Into<String>) -> Self {
        self.project = Some(project.into());
        self
    }

    pub fn is_open(&self) -> bool {
        self.end.is_none()
    }

    /// Calendar date of `start` in the given zone.
    pub fn start_date_in<Tz: TimeZone>(&self, tz: &Tz) -> NaiveDate {
        self.start.with_timezone(tz).date_naive()
    }

    /// Calendar date of `start` in the local zone.
    pub fn start_date(&self) -> NaiveDate {
        self.start_date_in(&Local)
    }
}
