use crate::config::Config;
use crate::core::calculator::{compliance, daily, duration, expiry, leave, pattern, period};
use crate::db::pool::DbPool;
use crate::db::queries::{load_intervals, load_leaves, load_records};
use crate::errors::AppResult;
use crate::models::leave_request::LeaveType;
use crate::models::summary::{EmployeeSnapshot, EmployeeSummary, ExpiringRecord};
use crate::models::time_interval::TimeInterval;
use crate::utils::date::year_bounds;
use chrono::{NaiveDate, TimeZone};

pub struct Core;

impl Core {
    /// Fetch every record of one employee from the store.
    pub fn fetch_snapshot(pool: &mut DbPool, employee_id: i64) -> AppResult<EmployeeSnapshot> {
        Ok(EmployeeSnapshot {
            employee_id,
            intervals: load_intervals(pool, Some(employee_id), None)?,
            leaves: load_leaves(pool, Some(employee_id))?,
            records: load_records(pool, Some(employee_id), None)?,
        })
    }

    /// Intervals whose start date (in `tz`) lies in `[from, to]`.
    pub fn intervals_in<Tz: TimeZone>(
        intervals: &[TimeInterval],
        from: NaiveDate,
        to: NaiveDate,
        tz: &Tz,
    ) -> Vec<TimeInterval> {
        intervals
            .iter()
            .filter(|iv| {
                let d = iv.start_date_in(tz);
                d >= from && d <= to
            })
            .cloned()
            .collect()
    }

    /// Build the dashboard summary for `range`. Period totals, expiry and the
    /// vacation balance (over the whole calendar year) follow `reference`.
    pub fn build_employee_summary<Tz: TimeZone>(
        snapshot: &EmployeeSnapshot,
        reference: NaiveDate,
        range: (NaiveDate, NaiveDate),
        tz: &Tz,
        cfg: &Config,
    ) -> EmployeeSummary {
        let (from, to) = range;
        let in_range = Self::intervals_in(&snapshot.intervals, from, to, tz);

        let daily_map = daily::bucketize_in(&in_range, tz);
        let assessment = pattern::classify_with(&daily_map, &cfg.pattern_thresholds());
        let violations =
            compliance::check_compliance_in(&in_range, &cfg.compliance_policy(), tz);
        let leave_summary = leave::aggregate(&snapshot.leaves, from, to);
        let (year_start, year_end) = year_bounds(reference);
        let leave_year = leave::aggregate(&snapshot.leaves, year_start, year_end);

        let expiring = expiry::expiring_records(&snapshot.records, reference, cfg.expiry_warning_days)
            .into_iter()
            .map(|(r, status)| ExpiringRecord {
                id: r.id,
                title: r.title.clone(),
                expires_on: r.expires_on,
                status,
            })
            .collect();

        EmployeeSummary {
            employee_id: snapshot.employee_id,
            reference,
            range,
            total_hours: duration::total_hours(&in_range),
            average_daily_hours: period::average_daily_hours(&daily_map),
            open_intervals: in_range.iter().filter(|iv| iv.is_open()).count(),
            pattern: assessment,
            violations,
            vacation_remaining: leave_year.remaining(cfg.annual_vacation_days, LeaveType::Vacation),
            leave: leave_summary,
            period: period::period_totals(&snapshot.intervals, reference, tz),
            projects: period::hours_by_project(&in_range),
            expiring,
            daily: daily_map,
        }
    }
}
