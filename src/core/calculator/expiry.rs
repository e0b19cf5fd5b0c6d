//! Days-until-expiry for certificates and documents.

use crate::models::record::CategorizedRecord;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ExpiryStatus {
    NoExpiry,
    Valid { days_left: i64 },
    ExpiringSoon { days_left: i64 },
    Expired { days_ago: i64 },
}

impl ExpiryStatus {
    pub fn needs_attention(&self) -> bool {
        matches!(self, ExpiryStatus::ExpiringSoon { .. } | ExpiryStatus::Expired { .. })
    }

    pub fn describe(&self) -> String {
        match self {
            ExpiryStatus::NoExpiry => "no expiry".to_string(),
            ExpiryStatus::Valid { days_left } => format!("valid, {days_left} days left"),
            ExpiryStatus::ExpiringSoon { days_left: 0 } => "expires today".to_string(),
            ExpiryStatus::ExpiringSoon { days_left } => format!("expires in {days_left} days"),
            ExpiryStatus::Expired { days_ago } => format!("expired {days_ago} days ago"),
        }
    }
}

/// Expiring on the reference date itself counts as "expiring soon".
pub fn expiry_status(
    expires_on: Option<NaiveDate>,
    reference: NaiveDate,
    warning_days: i64,
) -> ExpiryStatus {
    let Some(exp) = expires_on else {
        return ExpiryStatus::NoExpiry;
    };

    let days_left = (exp - reference).num_days();

    if days_left < 0 {
        ExpiryStatus::Expired {
            days_ago: -days_left,
        }
    } else if days_left <= warning_days {
        ExpiryStatus::ExpiringSoon { days_left }
    } else {
        ExpiryStatus::Valid { days_left }
    }
}

/// Records that are expired or expiring soon, earliest expiry first.
pub fn expiring_records<'a>(
    records: &'a [CategorizedRecord],
    reference: NaiveDate,
    warning_days: i64,
) -> Vec<(&'a CategorizedRecord, ExpiryStatus)> {
    let mut out: Vec<_> = records
        .iter()
        .map(|r| (r, expiry_status(r.expires_on, reference, warning_days)))
        .filter(|(_, s)| s.needs_attention())
        .collect();

    out.sort_by_key(|(r, _)| r.expires_on);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::record::{RecordCategory, RecordKind};

    fn d(m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, m, day).unwrap()
    }

    #[test]
    fn status_bands() {
        let today = d(6, 1);
        assert_eq!(expiry_status(None, today, 30), ExpiryStatus::NoExpiry);
        assert_eq!(
            expiry_status(Some(d(6, 1)), today, 30),
            ExpiryStatus::ExpiringSoon { days_left: 0 }
        );
        assert_eq!(
            expiry_status(Some(d(7, 1)), today, 30),
            ExpiryStatus::ExpiringSoon { days_left: 30 }
        );
        assert_eq!(
            expiry_status(Some(d(7, 2)), today, 30),
            ExpiryStatus::Valid { days_left: 31 }
        );
        assert_eq!(
            expiry_status(Some(d(5, 29)), today, 30),
            ExpiryStatus::Expired { days_ago: 3 }
        );
    }

    #[test]
    fn describe_today() {
        assert_eq!(ExpiryStatus::ExpiringSoon { days_left: 0 }.describe(), "expires today");
    }

    #[test]
    fn expiring_sorted_by_date() {
        let cert = |t: &str| {
            CategorizedRecord::new(RecordKind::Certificate, t, Some(RecordCategory::Qualification))
        };
        let recs = vec![
            cert("forklift").expiring(d(6, 20)),
            cert("first aid").expiring(d(5, 1)),
            cert("fire warden").expiring(d(12, 31)),
            cert("no expiry"),
        ];

        let out = expiring_records(&recs, d(6, 1), 30);
        let names: Vec<_> = out.iter().map(|(r, _)| r.title.as_str()).collect();
        assert_eq!(names, vec!["first aid", "forklift"]);
    }
}
