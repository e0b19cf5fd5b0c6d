//! Turn CLI input into validated models and store them.

use crate::db::pool::DbPool;
use crate::db::queries::{insert_interval, insert_leave, insert_record};
use crate::errors::{AppError, AppResult};
use crate::models::leave_request::{LeaveRequest, LeaveStatus, LeaveType};
use crate::models::record::{CategorizedRecord, RecordCategory, RecordKind};
use crate::models::time_interval::TimeInterval;
use crate::utils::date::parse_date;
use crate::utils::time::{parse_local_datetime, parse_optional_local_datetime};
use chrono::NaiveDate;

pub struct AddLogic;

fn required_date(s: &str) -> AppResult<NaiveDate> {
    parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

fn optional_date(s: Option<&String>) -> AppResult<Option<NaiveDate>> {
    s.map(|v| required_date(v)).transpose()
}

impl AddLogic {
    pub fn time(
        pool: &mut DbPool,
        employee_id: i64,
        start: &str,
        end: Option<&String>,
        break_minutes: u32,
        project: Option<&String>,
    ) -> AppResult<i64> {
        let mut iv = TimeInterval::new(
            parse_local_datetime(start)?,
            parse_optional_local_datetime(end)?,
            break_minutes,
        );
        iv.employee_id = employee_id;
        iv.project = project.filter(|p| !p.trim().is_empty()).cloned();

        insert_interval(pool, &iv)
    }

    pub fn leave(
        pool: &mut DbPool,
        employee_id: i64,
        start: &str,
        end: Option<&String>,
        leave_type: &str,
        half_day: bool,
        status: &str,
    ) -> AppResult<i64> {
        let start_date = required_date(start)?;
        let end_date = optional_date(end)?.unwrap_or(start_date);

        let leave_type =
            LeaveType::from_code(leave_type).ok_or_else(|| AppError::InvalidLeaveType(leave_type.into()))?;
        let status =
            LeaveStatus::from_db_str(status).ok_or_else(|| AppError::InvalidLeaveStatus(status.into()))?;

        if half_day && end_date != start_date {
            return Err(AppError::InvalidLeaveRequest(
                "a half-day request must start and end on the same date".into(),
            ));
        }

        let mut req = LeaveRequest::new(start_date, end_date, leave_type, half_day, status);
        req.employee_id = employee_id;

        insert_leave(pool, &req)
    }

    pub fn record(
        pool: &mut DbPool,
        employee_id: i64,
        kind: &str,
        title: &str,
        category: Option<&String>,
        issued_on: Option<&String>,
        expires_on: Option<&String>,
    ) -> AppResult<i64> {
        let kind = RecordKind::from_db_str(kind).ok_or_else(|| AppError::InvalidRecordKind(kind.into()))?;

        let category = category
            .map(|c| RecordCategory::from_db_str(c).ok_or_else(|| AppError::InvalidCategory(c.clone())))
            .transpose()?;

        if title.trim().is_empty() {
            return Err(AppError::Other("record title cannot be empty".into()));
        }

        let mut rec = CategorizedRecord::new(kind, title.trim(), category);
        rec.employee_id = employee_id;
        rec.issued_on = optional_date(issued_on)?;
        rec.expires_on = optional_date(expires_on)?;

        insert_record(pool, &rec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::queries::{load_intervals, load_leaves};

    #[test]
    fn leave_end_defaults_to_start() {
        let mut pool = DbPool::in_memory().unwrap();
        AddLogic::leave(&mut pool, 3, "2025-02-14", None, "sick", true, "approved").unwrap();

        let l = &load_leaves(&mut pool, Some(3)).unwrap()[0];
        assert_eq!(l.end_date, l.start_date);
        assert_eq!(l.leave_type, LeaveType::SickLeave);
        assert_eq!(l.day_count(), 0.5);
    }

    #[test]
    fn half_day_over_several_days_is_rejected() {
        let mut pool = DbPool::in_memory().unwrap();
        let end = "2025-02-15".to_string();
        let r = AddLogic::leave(&mut pool, 3, "2025-02-14", Some(&end), "vacation", true, "pending");
        assert!(matches!(r, Err(AppError::InvalidLeaveRequest(_))));
    }

    #[test]
    fn bad_inputs_are_typed_errors() {
        let mut pool = DbPool::in_memory().unwrap();
        assert!(matches!(
            AddLogic::leave(&mut pool, 1, "2025-02-14", None, "holiday", false, "approved"),
            Err(AppError::InvalidLeaveType(_))
        ));
        assert!(matches!(
            AddLogic::record(&mut pool, 1, "memo", "x", None, None, None),
            Err(AppError::InvalidRecordKind(_))
        ));
        assert!(matches!(
            AddLogic::time(&mut pool, 1, "09:00", None, 0, None),
            Err(AppError::InvalidTime(_))
        ));
    }

    #[test]
    fn blank_project_is_none() {
        let mut pool = DbPool::in_memory().unwrap();
        let end = "2025-02-14 17:00".to_string();
        let project = "  ".to_string();
        AddLogic::time(&mut pool, 1, "2025-02-14 09:00", Some(&end), 30, Some(&project)).unwrap();
        assert_eq!(load_intervals(&mut pool, Some(1), None).unwrap()[0].project, None);
    }
}
