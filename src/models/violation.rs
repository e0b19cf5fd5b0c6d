use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    ExcessiveDuration,
    InsufficientBreak,
}

impl ViolationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViolationKind::ExcessiveDuration => "excessive_duration",
            ViolationKind::InsufficientBreak => "insufficient_break",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ViolationKind::ExcessiveDuration => "Maximum daily working time exceeded",
            ViolationKind::InsufficientBreak => "Break too short",
        }
    }
}

/// Derived finding, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComplianceViolation {
    pub date: NaiveDate,
    pub kind: ViolationKind,
    pub detail: String,
}
