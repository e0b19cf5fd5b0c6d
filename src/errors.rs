//! Unified application error type.
//! All modules (db, core, cli, export, utils) return AppError to keep the
//! error handling consistent. The pure calculators never fail and do not
//! use it.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid leave type: {0}")]
    InvalidLeaveType(String),

    #[error("Invalid leave status: {0}")]
    InvalidLeaveStatus(String),

    #[error("Invalid record kind: {0}")]
    InvalidRecordKind(String),

    #[error("Invalid record category: {0}")]
    InvalidCategory(String),

    #[error("Invalid range: {0}")]
    InvalidRange(String),

    // ---------------------------
    // Validation errors (store boundary)
    // ---------------------------
    #[error("Invalid time interval: {0}")]
    InvalidInterval(String),

    #[error("Invalid leave request: {0}")]
    InvalidLeaveRequest(String),

    #[error("No {kind} found with id {id}")]
    NotFound { kind: &'static str, id: i64 },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
