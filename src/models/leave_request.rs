use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveType {
    Vacation,
    SickLeave,
    Personal,
    Training,
    Other,
}

impl LeaveType {
    pub const ALL: [LeaveType; 5] = [
        LeaveType::Vacation,
        LeaveType::SickLeave,
        LeaveType::Personal,
        LeaveType::Training,
        LeaveType::Other,
    ];

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            LeaveType::Vacation => "vacation",
            LeaveType::SickLeave => "sick_leave",
            LeaveType::Personal => "personal",
            LeaveType::Training => "training",
            LeaveType::Other => "other",
        }
    }

    /// Convert DB string → enum.
    /// Unknown tags are kept as `Other` so they still count in totals.
    pub fn from_db_str(s: &str) -> Self {
        match s {
            "vacation" => LeaveType::Vacation,
            "sick_leave" => LeaveType::SickLeave,
            "personal" => LeaveType::Personal,
            "training" => LeaveType::Training,
            _ => LeaveType::Other,
        }
    }

    /// Strict parsing for user input (CLI).
    pub fn from_code(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "vacation" => Some(LeaveType::Vacation),
            "sick" | "sick_leave" => Some(LeaveType::SickLeave),
            "personal" => Some(LeaveType::Personal),
            "training" => Some(LeaveType::Training),
            "other" => Some(LeaveType::Other),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LeaveType::Vacation => "Vacation",
            LeaveType::SickLeave => "Sick leave",
            LeaveType::Personal => "Personal",
            LeaveType::Training => "Training",
            LeaveType::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

impl LeaveStatus {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            LeaveStatus::Pending => "pending",
            LeaveStatus::Approved => "approved",
            LeaveStatus::Rejected => "rejected",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pending" => Some(LeaveStatus::Pending),
            "approved" => Some(LeaveStatus::Approved),
            "rejected" => Some(LeaveStatus::Rejected),
            _ => None,
        }
    }

    pub fn is_approved(&self) -> bool {
        matches!(self, LeaveStatus::Approved)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaveRequest {
    pub id: i64,
    pub employee_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub leave_type: LeaveType,
    pub half_day: bool,
    pub status: LeaveStatus,
}

impl LeaveRequest {
    pub fn new(
        start_date: NaiveDate,
        end_date: NaiveDate,
        leave_type: LeaveType,
        half_day: bool,
        status: LeaveStatus,
    ) -> Self {
        Self {
            id: 0,
            employee_id: 0,
            start_date,
            end_date,
            leave_type,
            half_day,
            status,
        }
    }

    /// Inclusive calendar-day span, halved for half-day requests.
    pub fn day_count(&self) -> f64 {
        let days = ((self.end_date - self.start_date).num_days() + 1) as f64;
        if self.half_day { days * 0.5 } else { days }
    }
}
