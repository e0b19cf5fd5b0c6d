#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn sm() -> Command {
    cargo_bin_cmd!("staffmetrics")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_staffmetrics.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn init_db(db_path: &str) {
    sm().args(["--db", db_path, "--test", "init"]).assert().success();
}

pub fn add_time(db_path: &str, employee: &str, start: &str, end: &str, brk: &str) {
    sm().args([
        "--db", db_path, "add", "time", "-e", employee, "--start", start, "--end", end, "--break", brk,
    ])
    .assert()
    .success();
}

/// Initialize DB and add a small dataset for employee 1 (March 2025):
/// - three regular 8h days, one 10h40m day with a 20 min break
/// - approved vacation 03-10..03-11, pending personal day 03-20
/// - a certificate expiring 2025-04-05 and an uncategorized note
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);

    add_time(db_path, "1", "2025-03-03 09:00", "2025-03-03 17:30", "30");
    add_time(db_path, "1", "2025-03-04 09:00", "2025-03-04 17:30", "30");
    add_time(db_path, "1", "2025-03-05 09:00", "2025-03-05 17:30", "30");
    add_time(db_path, "1", "2025-03-06 08:00", "2025-03-06 19:00", "20");

    sm().args([
        "--db", db_path, "add", "leave", "-e", "1", "--from", "2025-03-10", "--to", "2025-03-11", "--type",
        "vacation", "--status", "approved",
    ])
    .assert()
    .success();

    sm().args([
        "--db", db_path, "add", "leave", "-e", "1", "--from", "2025-03-20", "--type", "personal",
    ])
    .assert()
    .success();

    sm().args([
        "--db",
        db_path,
        "add",
        "record",
        "-e",
        "1",
        "--kind",
        "certificate",
        "--title",
        "Forklift licence",
        "--category",
        "qualification",
        "--issued",
        "2023-04-05",
        "--expires",
        "2025-04-05",
    ])
    .assert()
    .success();

    sm().args([
        "--db", db_path, "add", "record", "-e", "1", "--kind", "note", "--title", "Moved to team B",
    ])
    .assert()
    .success();
}
