//! Read-only views: hours, pattern, compliance, leave, records, summary.

use crate::cli::parser::{Commands, Scope};
use crate::config::Config;
use crate::core::logic::Core;
use crate::core::report;
use crate::db::pool::DbPool;
use crate::db::queries::load_records;
use crate::errors::{AppError, AppResult};
use crate::models::record::RecordKind;
use crate::models::summary::EmployeeSummary;
use crate::ui::messages::header;
use crate::utils::date::{self, month_bounds};
use crate::utils::range::{DateRange, parse_range};
use chrono::{Local, NaiveDate};

fn reference_date(today: Option<&String>) -> AppResult<NaiveDate> {
    match today {
        Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone())),
        None => Ok(date::today()),
    }
}

/// Reference date and range; the range defaults to the reference month.
pub fn resolve_scope(scope: &Scope) -> AppResult<(NaiveDate, DateRange)> {
    let reference = reference_date(scope.today.as_ref())?;
    let range = match &scope.range {
        Some(r) => parse_range(r)?,
        None => month_bounds(reference),
    };
    Ok((reference, range))
}

fn load_summary(scope: &Scope, cfg: &Config) -> AppResult<EmployeeSummary> {
    let (reference, range) = resolve_scope(scope)?;
    let mut pool = DbPool::new(&cfg.database)?;
    let snapshot = Core::fetch_snapshot(&mut pool, scope.employee)?;
    Ok(Core::build_employee_summary(&snapshot, reference, range, &Local, cfg))
}

fn title(what: &str, s: &EmployeeSummary) -> String {
    format!("{what} | employee #{} | {} → {}", s.employee_id, s.range.0, s.range.1)
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let sep = cfg.separator_char.as_str();
    let sep_char = cfg.separator();

    match cmd {
        Commands::Hours { scope } => {
            let s = load_summary(scope, cfg)?;
            header(title("Working hours", &s), sep);
            print!("{}", report::render_daily(&s.daily, cfg.max_daily_hours, sep_char));
            println!();
            print!("{}", report::render_periods(&s.period, s.reference));
            if !s.projects.is_empty() {
                println!();
                print!("{}", report::render_projects(&s.projects, sep_char));
            }
        }

        Commands::Pattern { scope } => {
            let s = load_summary(scope, cfg)?;
            header(title("Work pattern", &s), sep);
            print!("{}", report::render_pattern(s.pattern.as_ref()));
        }

        Commands::Compliance { scope } => {
            let s = load_summary(scope, cfg)?;
            header(title("Compliance", &s), sep);
            print!("{}", report::render_violations(&s.violations, sep_char));
        }

        Commands::Leave { scope } => {
            let s = load_summary(scope, cfg)?;
            header(title("Leave", &s), sep);
            print!("{}", report::render_leave(&s.leave, s.vacation_remaining, sep_char));
        }

        Commands::Records {
            employee,
            kind,
            today,
        } => {
            let reference = reference_date(today.as_ref())?;
            let kind = kind
                .as_ref()
                .map(|k| RecordKind::from_db_str(k).ok_or_else(|| AppError::InvalidRecordKind(k.clone())))
                .transpose()?;

            let mut pool = DbPool::new(&cfg.database)?;
            let records = load_records(&mut pool, Some(*employee), kind)?;

            header(format!("Records | employee #{employee}"), sep);
            print!(
                "{}",
                report::render_records(&records, reference, cfg.expiry_warning_days, sep_char)
            );
        }

        Commands::Summary { scope, json } => {
            let s = load_summary(scope, cfg)?;
            if *json {
                println!("{}", serde_json::to_string_pretty(&s)?);
            } else {
                print!("{}", report::render_summary(&s, cfg.max_daily_hours, sep_char));
            }
        }

        other => {
            return Err(AppError::Other(format!("not a report command: {other:?}")));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scope_defaults_to_reference_month() {
        let scope = Scope {
            employee: 1,
            range: None,
            today: Some("2025-02-14".into()),
        };
        let (reference, (from, to)) = resolve_scope(&scope).unwrap();
        assert_eq!(reference.to_string(), "2025-02-14");
        assert_eq!(from.to_string(), "2025-02-01");
        assert_eq!(to.to_string(), "2025-02-28");
    }

    #[test]
    fn rejects_non_report_command() {
        let err = handle(&Commands::Init, &Config::default()).unwrap_err();
        assert!(matches!(err, AppError::Other(msg) if msg.contains("Init")));
    }

    #[test]
    fn bad_reference_date() {
        let scope = Scope {
            employee: 1,
            range: None,
            today: Some("14/02/2025".into()),
        };
        assert!(matches!(resolve_scope(&scope), Err(AppError::InvalidDate(_))));
    }
}
