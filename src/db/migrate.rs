//! Schema migrations.
//!
//! Each step is identified by a version string; applied versions are
//! recorded in the `log` table as `migration_applied` rows, so the
//! runner is idempotent.

use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20250310_0001_time_entries",
        description: "Created time_entries table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS time_entries (
            id             INTEGER PRIMARY KEY AUTOINCREMENT,
            employee_id    INTEGER NOT NULL,
            start_at       TEXT NOT NULL,
            end_at         TEXT,
            break_minutes  INTEGER NOT NULL DEFAULT 0 CHECK(break_minutes >= 0),
            created_at     TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_time_entries_emp_start ON time_entries(employee_id, start_at);
        "#,
    },
    Migration {
        version: "20250310_0002_leave_requests",
        description: "Created leave_requests table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS leave_requests (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            employee_id  INTEGER NOT NULL,
            start_date   TEXT NOT NULL,
            end_date     TEXT NOT NULL,
            leave_type   TEXT NOT NULL DEFAULT 'other',
            half_day     INTEGER NOT NULL DEFAULT 0,
            status       TEXT NOT NULL DEFAULT 'pending'
                         CHECK(status IN ('pending','approved','rejected')),
            created_at   TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_leave_emp_start ON leave_requests(employee_id, start_date);
        "#,
    },
    Migration {
        version: "20250310_0003_records",
        description: "Created records table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS records (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            employee_id  INTEGER NOT NULL,
            kind         TEXT NOT NULL CHECK(kind IN ('document','certificate','note','award')),
            title        TEXT NOT NULL,
            category     TEXT,
            issued_on    TEXT,
            expires_on   TEXT,
            created_at   TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_records_emp_kind ON records(employee_id, kind);
        "#,
    },
    Migration {
        version: "20250402_0004_time_entries_project",
        description: "Added project column to time_entries",
        sql: "ALTER TABLE time_entries ADD COLUMN project TEXT;",
    },
];

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

/// Versions already applied, oldest first.
pub fn applied_versions(conn: &Connection) -> Result<Vec<String>> {
    ensure_log_table(conn)?;
    let mut stmt = conn.prepare(
        "SELECT target FROM log WHERE operation = 'migration_applied' ORDER BY id ASC",
    )?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
    rows.collect()
}

/// Public entry point: run all pending migrations, each in its own transaction.
/// Returns how many were applied.
pub fn run_pending_migrations(conn: &Connection) -> Result<usize> {
    ensure_log_table(conn)?;

    let mut applied = 0;

    for m in MIGRATIONS {
        if is_applied(conn, m.version)? {
            continue;
        }

        let tx = conn.unchecked_transaction()?;
        tx.execute_batch(m.sql)?;
        tx.execute(
            "INSERT INTO log (date, operation, target, message)
             VALUES (?1, 'migration_applied', ?2, ?3)",
            [
                chrono::Local::now().to_rfc3339().as_str(),
                m.version,
                m.description,
            ],
        )?;
        tx.commit()?;

        success(format!("Migration applied: {} → {}", m.version, m.description));
        applied += 1;
    }

    Ok(applied)
}
