/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

use crate::core::calculator::expiry::ExpiryStatus;
use crate::core::calculator::pattern::WorkPattern;

/// Daily hours color:
/// \<0 → red (data problem)
/// 0 → grey
/// above the daily max → yellow
pub fn color_for_hours(hours: f64, max_daily: f64) -> &'static str {
    if hours < 0.0 {
        RED
    } else if hours == 0.0 {
        GREY
    } else if hours > max_daily {
        YELLOW
    } else {
        RESET
    }
}

pub fn color_for_pattern(p: WorkPattern) -> &'static str {
    match p {
        WorkPattern::Regular => GREEN,
        WorkPattern::ModeratelyVariable => YELLOW,
        WorkPattern::Irregular => RED,
    }
}

pub fn color_for_expiry(s: &ExpiryStatus) -> &'static str {
    match s {
        ExpiryStatus::NoExpiry => GREY,
        ExpiryStatus::Valid { .. } => GREEN,
        ExpiryStatus::ExpiringSoon { .. } => YELLOW,
        ExpiryStatus::Expired { .. } => RED,
    }
}
