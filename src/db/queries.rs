//! Store access. Row mapping here is the boundary where raw TEXT columns
//! become typed values; the calculators never see unvalidated data.

use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::leave_request::{LeaveRequest, LeaveStatus, LeaveType};
use crate::models::record::{CategorizedRecord, RecordCategory, RecordKind};
use crate::models::time_interval::TimeInterval;
use crate::utils::time::{from_db_timestamp, to_db_timestamp};
use chrono::{Duration, Local, NaiveDate, NaiveTime};
use rusqlite::types::Type;
use rusqlite::{Row, params};

pub type DateBounds = Option<(NaiveDate, NaiveDate)>;

fn conversion_error(col: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(col, Type::Text, Box::new(err))
}

fn parse_date_col(row: &Row, idx: usize) -> rusqlite::Result<NaiveDate> {
    let raw: String = row.get(idx)?;
    NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
        .map_err(|_| conversion_error(idx, AppError::InvalidDate(raw)))
}

fn parse_opt_date_col(row: &Row, idx: usize) -> rusqlite::Result<Option<NaiveDate>> {
    match row.get::<_, Option<String>>(idx)? {
        None => Ok(None),
        Some(raw) if raw.is_empty() => Ok(None),
        Some(raw) => NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| conversion_error(idx, AppError::InvalidDate(raw))),
    }
}

fn date_str(d: &NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

fn now_str() -> String {
    Local::now().to_rfc3339()
}

// ---------------------------------------------------------------------------
// Time intervals
// ---------------------------------------------------------------------------

fn map_interval(row: &Row) -> rusqlite::Result<TimeInterval> {
    let start_raw: String = row.get(2)?;
    let start = from_db_timestamp(&start_raw).map_err(|e| conversion_error(2, e))?;

    let end = match row.get::<_, Option<String>>(3)? {
        Some(raw) => Some(from_db_timestamp(&raw).map_err(|e| conversion_error(3, e))?),
        None => None,
    };

    let break_minutes: i64 = row.get(4)?;

    Ok(TimeInterval {
        id: row.get(0)?,
        employee_id: row.get(1)?,
        start,
        end,
        break_minutes: break_minutes.max(0) as u32,
        project: row.get(5)?,
    })
}

/// Reject intervals the calculators must never receive.
pub fn validate_interval(iv: &TimeInterval) -> AppResult<()> {
    if let Some(end) = iv.end
        && end < iv.start
    {
        return Err(AppError::InvalidInterval(format!(
            "end {} is before start {}",
            end.to_rfc3339(),
            iv.start.to_rfc3339()
        )));
    }
    Ok(())
}

pub fn insert_interval(pool: &mut DbPool, iv: &TimeInterval) -> AppResult<i64> {
    validate_interval(iv)?;

    pool.conn.execute(
        "INSERT INTO time_entries (employee_id, start_at, end_at, break_minutes, project, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            iv.employee_id,
            to_db_timestamp(&iv.start),
            iv.end.as_ref().map(to_db_timestamp),
            iv.break_minutes,
            iv.project,
            now_str(),
        ],
    )?;

    let id = pool.conn.last_insert_rowid();
    ttlog_soft(
        &pool.conn,
        "add",
        &format!("time #{id}"),
        &format!("Time entry for employee {}", iv.employee_id),
    );
    Ok(id)
}

/// Intervals whose start falls on a local date in `bounds` (all when `None`).
pub fn load_intervals(
    pool: &mut DbPool,
    employee_id: Option<i64>,
    bounds: DateBounds,
) -> AppResult<Vec<TimeInterval>> {
    // Widen by a day on each side in UTC, then filter on the local date.
    let (lo, hi) = match bounds {
        Some((from, to)) => (
            Some(to_db_timestamp(&(from - Duration::days(1)).and_time(NaiveTime::MIN).and_utc())),
            Some(to_db_timestamp(&(to + Duration::days(2)).and_time(NaiveTime::MIN).and_utc())),
        ),
        None => (None, None),
    };

    let mut stmt = pool.conn.prepare(
        "SELECT id, employee_id, start_at, end_at, break_minutes, project
         FROM time_entries
         WHERE (?1 IS NULL OR employee_id = ?1)
           AND (?2 IS NULL OR start_at >= ?2)
           AND (?3 IS NULL OR start_at < ?3)
         ORDER BY start_at ASC, id ASC",
    )?;

    let rows = stmt.query_map(params![employee_id, lo, hi], map_interval)?;

    let mut out = Vec::new();
    for r in rows {
        let iv = r?;
        let keep = match bounds {
            Some((from, to)) => {
                let d = iv.start_date();
                d >= from && d <= to
            }
            None => true,
        };
        if keep {
            out.push(iv);
        }
    }
    Ok(out)
}

// ---------------------------------------------------------------------------
// Leave requests
// ---------------------------------------------------------------------------

fn map_leave(row: &Row) -> rusqlite::Result<LeaveRequest> {
    let type_raw: String = row.get(4)?;
    let status_raw: String = row.get(6)?;
    let status = LeaveStatus::from_db_str(&status_raw)
        .ok_or_else(|| conversion_error(6, AppError::InvalidLeaveStatus(status_raw.clone())))?;

    Ok(LeaveRequest {
        id: row.get(0)?,
        employee_id: row.get(1)?,
        start_date: parse_date_col(row, 2)?,
        end_date: parse_date_col(row, 3)?,
        leave_type: LeaveType::from_db_str(&type_raw),
        half_day: row.get::<_, i64>(5)? != 0,
        status,
    })
}

pub fn validate_leave(req: &LeaveRequest) -> AppResult<()> {
    if req.end_date < req.start_date {
        return Err(AppError::InvalidLeaveRequest(format!(
            "end date {} is before start date {}",
            req.end_date, req.start_date
        )));
    }
    Ok(())
}

pub fn insert_leave(pool: &mut DbPool, req: &LeaveRequest) -> AppResult<i64> {
    validate_leave(req)?;

    pool.conn.execute(
        "INSERT INTO leave_requests
            (employee_id, start_date, end_date, leave_type, half_day, status, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            req.employee_id,
            date_str(&req.start_date),
            date_str(&req.end_date),
            req.leave_type.to_db_str(),
            req.half_day as i64,
            req.status.to_db_str(),
            now_str(),
        ],
    )?;

    let id = pool.conn.last_insert_rowid();
    ttlog_soft(
        &pool.conn,
        "add",
        &format!("leave #{id}"),
        &format!(
            "{} {}..{} ({})",
            req.leave_type.to_db_str(),
            req.start_date,
            req.end_date,
            req.status.to_db_str()
        ),
    );
    Ok(id)
}

pub fn set_leave_status(pool: &mut DbPool, id: i64, status: LeaveStatus) -> AppResult<()> {
    let changed = pool.conn.execute(
        "UPDATE leave_requests SET status = ?1 WHERE id = ?2",
        params![status.to_db_str(), id],
    )?;

    if changed == 0 {
        return Err(AppError::NotFound { kind: "leave request", id });
    }

    ttlog_soft(
        &pool.conn,
        "edit",
        &format!("leave #{id}"),
        &format!("Status set to {}", status.to_db_str()),
    );
    Ok(())
}

pub fn load_leaves(pool: &mut DbPool, employee_id: Option<i64>) -> AppResult<Vec<LeaveRequest>> {
    let mut stmt = pool.conn.prepare(
        "SELECT id, employee_id, start_date, end_date, leave_type, half_day, status
         FROM leave_requests
         WHERE (?1 IS NULL OR employee_id = ?1)
         ORDER BY start_date ASC, id ASC",
    )?;

    let rows = stmt.query_map(params![employee_id], map_leave)?;
    Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
}

// ---------------------------------------------------------------------------
// Categorized records
// ---------------------------------------------------------------------------

fn map_record(row: &Row) -> rusqlite::Result<CategorizedRecord> {
    let kind_raw: String = row.get(2)?;
    let kind = RecordKind::from_db_str(&kind_raw)
        .ok_or_else(|| conversion_error(2, AppError::InvalidRecordKind(kind_raw.clone())))?;

    let category = match row.get::<_, Option<String>>(4)? {
        None => None,
        Some(raw) if raw.trim().is_empty() => None,
        Some(raw) => Some(
            RecordCategory::from_db_str(&raw)
                .ok_or_else(|| conversion_error(4, AppError::InvalidCategory(raw.clone())))?,
        ),
    };

    Ok(CategorizedRecord {
        id: row.get(0)?,
        employee_id: row.get(1)?,
        kind,
        title: row.get(3)?,
        category,
        issued_on: parse_opt_date_col(row, 5)?,
        expires_on: parse_opt_date_col(row, 6)?,
    })
}

pub fn insert_record(pool: &mut DbPool, rec: &CategorizedRecord) -> AppResult<i64> {
    pool.conn.execute(
        "INSERT INTO records (employee_id, kind, title, category, issued_on, expires_on, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            rec.employee_id,
            rec.kind.to_db_str(),
            rec.title,
            rec.category.map(|c| c.to_db_str()),
            rec.issued_on.as_ref().map(date_str),
            rec.expires_on.as_ref().map(date_str),
            now_str(),
        ],
    )?;

    let id = pool.conn.last_insert_rowid();
    ttlog_soft(
        &pool.conn,
        "add",
        &format!("{} #{id}", rec.kind.to_db_str()),
        &rec.title,
    );
    Ok(id)
}

pub fn load_records(
    pool: &mut DbPool,
    employee_id: Option<i64>,
    kind: Option<RecordKind>,
) -> AppResult<Vec<CategorizedRecord>> {
    let mut stmt = pool.conn.prepare(
        "SELECT id, employee_id, kind, title, category, issued_on, expires_on
         FROM records
         WHERE (?1 IS NULL OR employee_id = ?1)
           AND (?2 IS NULL OR kind = ?2)
         ORDER BY id ASC",
    )?;

    let rows = stmt.query_map(params![employee_id, kind.map(|k| k.to_db_str())], map_record)?;
    Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
}

// ---------------------------------------------------------------------------
// Deletion
// ---------------------------------------------------------------------------

/// Which table a delete targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    TimeEntries,
    LeaveRequests,
    Records,
}

impl Table {
    fn sql_name(&self) -> &'static str {
        match self {
            Table::TimeEntries => "time_entries",
            Table::LeaveRequests => "leave_requests",
            Table::Records => "records",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Table::TimeEntries => "time entry",
            Table::LeaveRequests => "leave request",
            Table::Records => "record",
        }
    }
}

pub fn delete_by_id(pool: &mut DbPool, table: Table, id: i64) -> AppResult<()> {
    let sql = format!("DELETE FROM {} WHERE id = ?1", table.sql_name());
    let changed = pool.conn.execute(&sql, [id])?;

    if changed == 0 {
        return Err(AppError::NotFound { kind: table.label(), id });
    }

    ttlog_soft(
        &pool.conn,
        "del",
        &format!("{} #{id}", table.sql_name()),
        &format!("Deleted {}", table.label()),
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn pool() -> DbPool {
        DbPool::in_memory().unwrap()
    }

    fn d(m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, m, day).unwrap()
    }

    #[test]
    fn interval_roundtrip_and_validation() {
        let mut p = pool();
        let start = Local.with_ymd_and_hms(2025, 3, 3, 9, 0, 0).unwrap().with_timezone(&Utc);
        let end = Local.with_ymd_and_hms(2025, 3, 3, 17, 0, 0).unwrap().with_timezone(&Utc);

        let mut iv = TimeInterval::new(start, Some(end), 30).with_project("onboarding");
        iv.employee_id = 7;
        let id = insert_interval(&mut p, &iv).unwrap();

        let loaded = load_intervals(&mut p, Some(7), Some((d(3, 1), d(3, 31)))).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, id);
        assert_eq!(loaded[0].start, start);
        assert_eq!(loaded[0].project.as_deref(), Some("onboarding"));

        assert!(load_intervals(&mut p, Some(8), None).unwrap().is_empty());
        assert!(load_intervals(&mut p, Some(7), Some((d(4, 1), d(4, 30)))).unwrap().is_empty());

        let backwards = TimeInterval::new(end, Some(start), 0);
        assert!(matches!(
            insert_interval(&mut p, &backwards),
            Err(AppError::InvalidInterval(_))
        ));
    }

    #[test]
    fn open_interval_is_stored_without_end() {
        let mut p = pool();
        let iv = TimeInterval::new(Utc.with_ymd_and_hms(2025, 3, 4, 8, 0, 0).unwrap(), None, 0);
        insert_interval(&mut p, &iv).unwrap();
        let loaded = load_intervals(&mut p, None, None).unwrap();
        assert!(loaded[0].is_open());
    }

    #[test]
    fn unknown_leave_type_maps_to_other() {
        let mut p = pool();
        p.conn
            .execute(
                "INSERT INTO leave_requests (employee_id, start_date, end_date, leave_type, half_day, status, created_at)
                 VALUES (1, '2025-05-05', '2025-05-06', 'sabbatical', 0, 'approved', '')",
                [],
            )
            .unwrap();
        let leaves = load_leaves(&mut p, Some(1)).unwrap();
        assert_eq!(leaves[0].leave_type, LeaveType::Other);
        assert_eq!(leaves[0].day_count(), 2.0);
    }

    #[test]
    fn leave_validation_and_status_update() {
        let mut p = pool();
        let bad = LeaveRequest::new(d(5, 9), d(5, 8), LeaveType::Vacation, false, LeaveStatus::Pending);
        assert!(insert_leave(&mut p, &bad).is_err());

        let ok = LeaveRequest::new(d(5, 8), d(5, 9), LeaveType::Vacation, false, LeaveStatus::Pending);
        let id = insert_leave(&mut p, &ok).unwrap();
        set_leave_status(&mut p, id, LeaveStatus::Approved).unwrap();
        assert_eq!(load_leaves(&mut p, None).unwrap()[0].status, LeaveStatus::Approved);

        assert!(matches!(
            set_leave_status(&mut p, id + 100, LeaveStatus::Rejected),
            Err(AppError::NotFound { .. })
        ));
    }

    #[test]
    fn records_filter_by_kind_and_reject_bad_category() {
        let mut p = pool();
        let doc = CategorizedRecord::new(RecordKind::Document, "contract", Some(RecordCategory::Contract));
        let cert = CategorizedRecord::new(RecordKind::Certificate, "first aid", None).expiring(d(9, 1));
        insert_record(&mut p, &doc).unwrap();
        insert_record(&mut p, &cert).unwrap();

        let certs = load_records(&mut p, None, Some(RecordKind::Certificate)).unwrap();
        assert_eq!(certs.len(), 1);
        assert_eq!(certs[0].expires_on, Some(d(9, 1)));
        assert_eq!(certs[0].category, None);

        p.conn
            .execute(
                "INSERT INTO records (employee_id, kind, title, category, created_at)
                 VALUES (0, 'note', 'x', 'gossip', '')",
                [],
            )
            .unwrap();
        assert!(load_records(&mut p, None, None).is_err());
    }

    #[test]
    fn delete_missing_id_is_not_found() {
        let mut p = pool();
        assert!(matches!(
            delete_by_id(&mut p, Table::Records, 42),
            Err(AppError::NotFound { kind: "record", id: 42 })
        ));
    }
}
