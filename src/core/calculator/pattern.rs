//! Work-pattern regularity based on the spread of daily totals.

use crate::core::calculator::daily::DailyHoursMap;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkPattern {
    Regular,
    ModeratelyVariable,
    Irregular,
}

impl WorkPattern {
    pub fn label(&self) -> &'static str {
        match self {
            WorkPattern::Regular => "Regular",
            WorkPattern::ModeratelyVariable => "Moderately variable",
            WorkPattern::Irregular => "Irregular",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            WorkPattern::Regular => "Daily working hours are consistent",
            WorkPattern::ModeratelyVariable => "Daily working hours vary somewhat",
            WorkPattern::Irregular => "Daily working hours vary strongly",
        }
    }
}

/// Std-dev boundaries (hours). `std_dev < regular_below` is regular,
/// `< moderate_below` moderately variable, anything else irregular.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatternThresholds {
    pub regular_below: f64,
    pub moderate_below: f64,
}

impl Default for PatternThresholds {
    fn default() -> Self {
        Self {
            regular_below: 1.0,
            moderate_below: 2.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatternAssessment {
    pub pattern: WorkPattern,
    pub label: &'static str,
    pub description: &'static str,
    pub mean_hours: f64,
    pub std_dev: f64,
}

/// Classify with the default thresholds.
pub fn classify(daily: &DailyHoursMap) -> Option<PatternAssessment> {
    classify_with(daily, &PatternThresholds::default())
}

/// `None` for an empty map: there is nothing to classify.
pub fn classify_with(daily: &DailyHoursMap, th: &PatternThresholds) -> Option<PatternAssessment> {
    let (mean, std_dev) = mean_and_std_dev(daily.values().copied())?;

    let pattern = if std_dev < th.regular_below {
        WorkPattern::Regular
    } else if std_dev < th.moderate_below {
        WorkPattern::ModeratelyVariable
    } else {
        WorkPattern::Irregular
    };

    Some(PatternAssessment {
        pattern,
        label: pattern.label(),
        description: pattern.description(),
        mean_hours: mean,
        std_dev,
    })
}

/// Mean and population standard deviation.
fn mean_and_std_dev(values: impl Iterator<Item = f64> + Clone) -> Option<(f64, f64)> {
    let n = values.clone().count();
    if n == 0 {
        return None;
    }

    let mean = values.clone().sum::<f64>() / n as f64;
    let variance = values.map(|v| (v - mean).powi(2)).sum::<f64>() / n as f64;

    Some((mean, variance.sqrt()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn week(hours: &[f64]) -> DailyHoursMap {
        hours
            .iter()
            .enumerate()
            .map(|(i, h)| (NaiveDate::from_ymd_opt(2025, 9, 1 + i as u32).unwrap(), *h))
            .collect()
    }

    #[test]
    fn empty_map_is_unclassified() {
        assert!(classify(&DailyHoursMap::new()).is_none());
    }

    #[test]
    fn constant_hours_are_regular() {
        let a = classify(&week(&[8.0, 8.0, 8.0, 8.0, 8.0])).unwrap();
        assert_eq!(a.pattern, WorkPattern::Regular);
        assert_eq!(a.label, "Regular");
        assert_eq!(a.std_dev, 0.0);
        assert_eq!(a.mean_hours, 8.0);
    }

    #[test]
    fn wide_spread_is_irregular() {
        let a = classify(&week(&[4.0, 12.0, 2.0, 10.0, 6.0])).unwrap();
        assert_eq!(a.pattern, WorkPattern::Irregular);
        assert!((a.std_dev - 13.76_f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn middle_band_is_moderately_variable() {
        // mean 8, deviations ±1.5 → std-dev 1.5
        let a = classify(&week(&[6.5, 9.5, 6.5, 9.5])).unwrap();
        assert_eq!(a.pattern, WorkPattern::ModeratelyVariable);
        assert_eq!(a.label, "Moderately variable");
    }

    #[test]
    fn boundaries_are_exclusive() {
        // std-dev exactly 1.0 is not regular
        let a = classify(&week(&[7.0, 9.0])).unwrap();
        assert_eq!(a.pattern, WorkPattern::ModeratelyVariable);

        let b = classify(&week(&[6.0, 10.0])).unwrap();
        assert_eq!(b.pattern, WorkPattern::Irregular);
    }

    #[test]
    fn custom_thresholds() {
        let th = PatternThresholds {
            regular_below: 2.0,
            moderate_below: 3.0,
        };
        let a = classify_with(&week(&[6.5, 9.5]), &th).unwrap();
        assert_eq!(a.pattern, WorkPattern::Regular);
    }
}
