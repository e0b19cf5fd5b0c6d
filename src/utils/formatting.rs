//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Decimal hours with at most two decimals and no trailing zeros: 11 / 10.67 / 7.5
pub fn format_hours(hours: f64) -> String {
    let s = format!("{:.2}", hours);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

/// Decimal hours as `08h 30m` (or `08:30` when `short`), sign kept.
pub fn hours2readable(hours: f64, short: bool) -> String {
    let total_minutes = (hours * 60.0).round() as i64;
    let sign = if total_minutes < 0 { "-" } else { "" };
    let m = total_minutes.abs();

    if short {
        format!("{}{:02}:{:02}", sign, m / 60, m % 60)
    } else {
        format!("{}{:02}h {:02}m", sign, m / 60, m % 60)
    }
}

/// Days with a single decimal when fractional: 2 / 0.5 / 12.5
pub fn format_days(days: f64) -> String {
    if days.fract() == 0.0 {
        format!("{}", days as i64)
    } else {
        format!("{:.1}", days)
    }
}
