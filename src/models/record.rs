use chrono::NaiveDate;
use serde::Serialize;

/// Which employee-file tab a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Document,
    Certificate,
    Note,
    Award,
}

impl RecordKind {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            RecordKind::Document => "document",
            RecordKind::Certificate => "certificate",
            RecordKind::Note => "note",
            RecordKind::Award => "award",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "document" => Some(RecordKind::Document),
            "certificate" => Some(RecordKind::Certificate),
            "note" => Some(RecordKind::Note),
            "award" => Some(RecordKind::Award),
            _ => None,
        }
    }
}

/// Closed set of categories shared by documents, certificates, notes and awards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordCategory {
    Contract,
    Payroll,
    Identity,
    Qualification,
    Training,
    Medical,
    Performance,
    Disciplinary,
    Recognition,
    General,
    Other,
}

impl RecordCategory {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            RecordCategory::Contract => "contract",
            RecordCategory::Payroll => "payroll",
            RecordCategory::Identity => "identity",
            RecordCategory::Qualification => "qualification",
            RecordCategory::Training => "training",
            RecordCategory::Medical => "medical",
            RecordCategory::Performance => "performance",
            RecordCategory::Disciplinary => "disciplinary",
            RecordCategory::Recognition => "recognition",
            RecordCategory::General => "general",
            RecordCategory::Other => "other",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "contract" => Some(RecordCategory::Contract),
            "payroll" => Some(RecordCategory::Payroll),
            "identity" => Some(RecordCategory::Identity),
            "qualification" => Some(RecordCategory::Qualification),
            "training" => Some(RecordCategory::Training),
            "medical" => Some(RecordCategory::Medical),
            "performance" => Some(RecordCategory::Performance),
            "disciplinary" => Some(RecordCategory::Disciplinary),
            "recognition" => Some(RecordCategory::Recognition),
            "general" => Some(RecordCategory::General),
            "other" => Some(RecordCategory::Other),
            _ => None,
        }
    }

    /// Display label for section headers.
    pub fn label(&self) -> &'static str {
        match self {
            RecordCategory::Contract => "Contracts",
            RecordCategory::Payroll => "Payroll",
            RecordCategory::Identity => "Identity documents",
            RecordCategory::Qualification => "Qualifications",
            RecordCategory::Training => "Training",
            RecordCategory::Medical => "Medical",
            RecordCategory::Performance => "Performance",
            RecordCategory::Disciplinary => "Disciplinary",
            RecordCategory::Recognition => "Recognition",
            RecordCategory::General => "General",
            RecordCategory::Other => "Other",
        }
    }
}

/// Anything that can be grouped by category for display.
pub trait Categorized {
    fn category(&self) -> Option<RecordCategory>;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorizedRecord {
    pub id: i64,
    pub employee_id: i64,
    pub kind: RecordKind,
    pub title: String,
    pub category: Option<RecordCategory>,
    pub issued_on: Option<NaiveDate>,
    pub expires_on: Option<NaiveDate>,
}

impl CategorizedRecord {
    pub fn new(kind: RecordKind, title: impl Into<String>, category: Option<RecordCategory>) -> Self {
        Self {
            id: 0,
            employee_id: 0,
            kind,
            title: title.into(),
            category,
            issued_on: None,
            expires_on: None,
        }
    }

    pub fn expiring(mut self, expires_on: NaiveDate) -> Self {
        self.expires_on = Some(expires_on);
        self
    }
}

impl Categorized for CategorizedRecord {
    fn category(&self) -> Option<RecordCategory> {
        self.category
    }
}
