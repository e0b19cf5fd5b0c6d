// src/export/logic.rs

use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::db::queries::{load_intervals, load_leaves, load_records};
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{ExportRow, LeaveExport, RecordExport, TimeEntryExport};
use crate::export::xlsx::export_xlsx;
use crate::export::{ExportFormat, ExportTarget};
use crate::ui::messages::warning;
use crate::utils::range::DateRange;
use std::path::Path;

/// High level export entry point.
pub struct ExportLogic;

impl ExportLogic {
    /// Export one data set to `file`.
    ///
    /// - `employee`: restrict to one employee (all when `None`)
    /// - `range`: time entries by start date, leave requests by start date,
    ///   records by issue date (records without one are kept)
    ///
    /// Returns the number of exported rows; nothing is written when it is 0.
    pub fn export(
        pool: &mut DbPool,
        what: ExportTarget,
        format: ExportFormat,
        file: &str,
        employee: Option<i64>,
        range: Option<DateRange>,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        let in_range = |d: chrono::NaiveDate| range.is_none_or(|(from, to)| d >= from && d <= to);

        let written = match what {
            ExportTarget::Time => {
                let rows: Vec<TimeEntryExport> = load_intervals(pool, employee, range)?
                    .iter()
                    .map(TimeEntryExport::from)
                    .collect();
                write_rows(&rows, format, "Time entries", path)?
            }
            ExportTarget::Leave => {
                let rows: Vec<LeaveExport> = load_leaves(pool, employee)?
                    .iter()
                    .filter(|r| in_range(r.start_date))
                    .map(LeaveExport::from)
                    .collect();
                write_rows(&rows, format, "Leave", path)?
            }
            ExportTarget::Records => {
                let rows: Vec<RecordExport> = load_records(pool, employee, None)?
                    .iter()
                    .filter(|r| r.issued_on.is_none_or(&in_range))
                    .map(RecordExport::from)
                    .collect();
                write_rows(&rows, format, "Records", path)?
            }
        };

        if written > 0 {
            ttlog_soft(
                &pool.conn,
                "export",
                &path.to_string_lossy(),
                &format!("Exported {written} {} rows as {}", what.as_str(), format.as_str()),
            );
        }

        Ok(written)
    }
}

fn write_rows<T: ExportRow>(rows: &[T], format: ExportFormat, sheet: &str, path: &Path) -> AppResult<usize> {
    if rows.is_empty() {
        warning("No data found for the selected range, nothing exported.");
        return Ok(0);
    }

    match format {
        ExportFormat::Csv => export_csv(rows, path)?,
        ExportFormat::Json => export_json(rows, path)?,
        ExportFormat::Xlsx => export_xlsx(rows, sheet, path)?,
    }

    Ok(rows.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::add::AddLogic;
    use std::env;
    use std::fs;

    fn temp_file(name: &str) -> String {
        let p = env::temp_dir().join(name);
        fs::remove_file(&p).ok();
        p.to_string_lossy().to_string()
    }

    #[test]
    fn leave_csv_filtered_by_range() {
        let mut pool = DbPool::in_memory().unwrap();
        AddLogic::leave(&mut pool, 1, "2025-03-03", Some(&"2025-03-04".into()), "vacation", false, "approved").unwrap();
        AddLogic::leave(&mut pool, 1, "2025-05-01", None, "sick", false, "approved").unwrap();

        let file = temp_file("staffmetrics_export_leave.csv");
        let range = crate::utils::range::parse_range("2025-03").ok();
        let n = ExportLogic::export(&mut pool, ExportTarget::Leave, ExportFormat::Csv, &file, Some(1), range, false)
            .unwrap();

        assert_eq!(n, 1);
        let content = fs::read_to_string(&file).unwrap();
        assert!(content.starts_with("id,employee_id,start_date"));
        assert!(content.contains("vacation"));
        assert!(!content.contains("sick_leave"));
        fs::remove_file(&file).ok();
    }

    #[test]
    fn relative_path_is_rejected() {
        let mut pool = DbPool::in_memory().unwrap();
        let res = ExportLogic::export(
            &mut pool,
            ExportTarget::Records,
            ExportFormat::Json,
            "out.json",
            None,
            None,
            false,
        );
        assert!(matches!(res, Err(AppError::Export(_))));
    }

    #[test]
    fn empty_data_set_writes_nothing() {
        let mut pool = DbPool::in_memory().unwrap();
        let file = temp_file("staffmetrics_export_empty.json");
        let n = ExportLogic::export(&mut pool, ExportTarget::Time, ExportFormat::Json, &file, None, None, false)
            .unwrap();
        assert_eq!(n, 0);
        assert!(!Path::new(&file).exists());
    }
}
