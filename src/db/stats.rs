use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

/// Row counts per table.
#[derive(Debug, Default, PartialEq)]
pub struct StoreCounts {
    pub time_entries: i64,
    pub leave_requests: i64,
    pub records: i64,
    pub log: i64,
}

pub fn counts(pool: &mut DbPool) -> AppResult<StoreCounts> {
    let count = |table: &str| -> rusqlite::Result<i64> {
        pool.conn
            .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))
    };

    Ok(StoreCounts {
        time_entries: count("time_entries")?,
        leave_requests: count("leave_requests")?,
        records: count("records")?,
        log: count("log")?,
    })
}

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) ROW COUNTS
    //
    let c = counts(pool)?;
    println!("{}• Time entries:{}   {}{}{}", CYAN, RESET, GREEN, c.time_entries, RESET);
    println!("{}• Leave requests:{} {}{}{}", CYAN, RESET, GREEN, c.leave_requests, RESET);
    println!("{}• Records:{}        {}{}{}", CYAN, RESET, GREEN, c.records, RESET);
    println!("{}• Log rows:{}       {}{}{}", CYAN, RESET, GREEN, c.log, RESET);

    //
    // 3) TIME ENTRY SPAN
    //
    let span: Option<(Option<String>, Option<String>)> = pool
        .conn
        .query_row(
            "SELECT MIN(start_at), MAX(start_at) FROM time_entries",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .optional()?;

    let (first, last) = span.unwrap_or((None, None));
    let show = |v: Option<String>| {
        v.map(|s| s.chars().take(10).collect::<String>())
            .unwrap_or_else(|| format!("{GREY}--{RESET}"))
    };

    println!("{}• Time entry span:{}", CYAN, RESET);
    println!("    from: {}", show(first));
    println!("    to:   {}", show(last));

    println!();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_on_fresh_db() {
        let mut pool = DbPool::in_memory().unwrap();
        let c = counts(&mut pool).unwrap();
        assert_eq!(c.time_entries, 0);
        assert_eq!(c.records, 0);
        // one log row per applied migration
        assert!(c.log > 0);
    }
}
