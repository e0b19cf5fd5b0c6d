//! Text rendering of the derived views. Every function returns the block
//! as a String; the command handlers decide where it goes.

use crate::core::calculator::category::group_by_category;
use crate::core::calculator::daily::DailyHoursMap;
use crate::core::calculator::expiry::expiry_status;
use crate::core::calculator::leave::LeaveSummary;
use crate::core::calculator::pattern::PatternAssessment;
use crate::core::calculator::period::PeriodTotals;
use crate::models::leave_request::LeaveType;
use crate::models::record::CategorizedRecord;
use crate::models::summary::EmployeeSummary;
use crate::models::violation::ComplianceViolation;
use crate::utils::colors::{GREY, RED, RESET, YELLOW, color_for_expiry, color_for_hours, color_for_pattern};
use crate::utils::date::weekday_short;
use crate::utils::formatting::bold;
use crate::utils::table::{Column, Table};
use crate::utils::{format_days, format_hours, hours2readable};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::fmt::Write;

pub fn render_daily(daily: &DailyHoursMap, max_daily: f64, sep: char) -> String {
    if daily.is_empty() {
        return format!("{GREY}No time entries in range.{RESET}\n");
    }

    let mut table = Table::new(
        vec![
            Column::left("Date"),
            Column::left("Day"),
            Column::right("Hours"),
            Column::right("hh:mm"),
        ],
        sep,
    );

    for (date, hours) in daily {
        let color = color_for_hours(*hours, max_daily);
        table.add_row(vec![
            date.to_string(),
            weekday_short(*date).to_string(),
            format!("{color}{}{RESET}", format_hours(*hours)),
            hours2readable(*hours, true),
        ]);
    }

    let total: f64 = daily.values().sum();
    table.add_row(vec![
        bold("Total"),
        String::new(),
        bold(&format_hours(total)),
        hours2readable(total, true),
    ]);

    table.render()
}

pub fn render_periods(period: &PeriodTotals, reference: NaiveDate) -> String {
    format!(
        "Reference {reference}: day {}h | week {}h | month {}h\n",
        format_hours(period.day),
        format_hours(period.week),
        format_hours(period.month),
    )
}

pub fn render_projects(projects: &BTreeMap<String, f64>, sep: char) -> String {
    if projects.is_empty() {
        return String::new();
    }

    let mut table = Table::new(vec![Column::left("Project"), Column::right("Hours")], sep);
    for (name, hours) in projects {
        table.add_row(vec![name.clone(), format_hours(*hours)]);
    }
    table.render()
}

pub fn render_pattern(assessment: Option<&PatternAssessment>) -> String {
    match assessment {
        None => format!("{GREY}Not enough data to classify the work pattern.{RESET}\n"),
        Some(a) => format!(
            "{}{}{RESET}: {}\n  mean {}h/day, std-dev {}h\n",
            color_for_pattern(a.pattern),
            a.label,
            a.description,
            format_hours(a.mean_hours),
            format_hours(a.std_dev),
        ),
    }
}

pub fn render_violations(violations: &[ComplianceViolation], sep: char) -> String {
    if violations.is_empty() {
        return "No compliance violations.\n".to_string();
    }

    let mut table = Table::new(
        vec![Column::left("Date"), Column::left("Rule"), Column::left("Detail")],
        sep,
    );
    for v in violations {
        table.add_row(vec![
            v.date.to_string(),
            format!("{RED}{}{RESET}", v.kind.label()),
            v.detail.clone(),
        ]);
    }
    table.render()
}

pub fn render_leave(summary: &LeaveSummary, vacation_remaining: f64, sep: char) -> String {
    let mut table = Table::new(vec![Column::left("Type"), Column::right("Days")], sep);

    for leave_type in LeaveType::ALL {
        let days = summary.days(leave_type);
        if days > 0.0 {
            table.add_row(vec![leave_type.label().to_string(), format_days(days)]);
        }
    }
    table.add_row(vec![bold("Total"), bold(&format_days(summary.total_days))]);

    let mut out = table.render();
    let color = if vacation_remaining < 0.0 { RED } else { RESET };
    let _ = writeln!(
        out,
        "Vacation days remaining: {color}{}{RESET}",
        format_days(vacation_remaining)
    );
    out
}

/// Records grouped by category, each with its expiry state.
pub fn render_records(
    records: &[CategorizedRecord],
    reference: NaiveDate,
    warning_days: i64,
    sep: char,
) -> String {
    if records.is_empty() {
        return format!("{GREY}No records.{RESET}\n");
    }

    let mut out = String::new();
    for (category, items) in group_by_category(records).iter() {
        let _ = writeln!(out, "{} ({})", bold(category.label()), items.len());

        let mut table = Table::new(
            vec![
                Column::right("ID"),
                Column::left("Kind"),
                Column::left("Title"),
                Column::left("Expiry"),
            ],
            sep,
        );
        for r in items {
            let status = expiry_status(r.expires_on, reference, warning_days);
            table.add_row(vec![
                r.id.to_string(),
                r.kind.to_db_str().to_string(),
                r.title.clone(),
                format!("{}{}{RESET}", color_for_expiry(&status), status.describe()),
            ]);
        }
        out.push_str(&table.render());
        out.push('\n');
    }
    out
}

pub fn render_summary(s: &EmployeeSummary, max_daily: f64, sep: char) -> String {
    let mut out = String::new();
    let (from, to) = s.range;

    let _ = writeln!(out, "{}", bold(&format!("Employee #{} | {from} → {to}", s.employee_id)));
    let _ = writeln!(
        out,
        "Worked {}h on {} days (avg {}h/day)",
        format_hours(s.total_hours),
        s.daily.len(),
        format_hours(s.average_daily_hours),
    );
    if s.open_intervals > 0 {
        let _ = writeln!(out, "{YELLOW}{} open time entries{RESET}", s.open_intervals);
    }
    out.push_str(&render_periods(&s.period, s.reference));

    out.push('\n');
    out.push_str(&render_daily(&s.daily, max_daily, sep));
    out.push('\n');
    out.push_str(&render_projects(&s.projects, sep));

    let _ = writeln!(out, "\n{}", bold("Work pattern"));
    out.push_str(&render_pattern(s.pattern.as_ref()));

    let _ = writeln!(out, "\n{}", bold("Compliance"));
    out.push_str(&render_violations(&s.violations, sep));

    let _ = writeln!(out, "\n{}", bold("Leave"));
    out.push_str(&render_leave(&s.leave, s.vacation_remaining, sep));

    if !s.expiring.is_empty() {
        let _ = writeln!(out, "\n{}", bold("Records needing attention"));
        for r in &s.expiring {
            let _ = writeln!(
                out,
                "  #{} {}: {}{}{RESET}",
                r.id,
                r.title,
                color_for_expiry(&r.status),
                r.status.describe()
            );
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::calculator::pattern::classify;
    use crate::models::record::{RecordCategory, RecordKind};

    fn d(m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, m, day).unwrap()
    }

    #[test]
    fn daily_table_has_total_row() {
        let mut daily = DailyHoursMap::new();
        daily.insert(d(3, 3), 8.0);
        daily.insert(d(3, 4), 7.5);

        let out = render_daily(&daily, 10.0, '-');
        assert!(out.contains("2025-03-03"));
        assert!(out.contains("Mon"));
        assert!(out.contains("15.5"));
        assert!(out.contains("15:30"));
    }

    #[test]
    fn pattern_none_and_some() {
        assert!(render_pattern(None).contains("Not enough data"));

        let mut daily = DailyHoursMap::new();
        daily.insert(d(3, 3), 8.0);
        daily.insert(d(3, 4), 8.0);
        let a = classify(&daily);
        assert!(render_pattern(a.as_ref()).contains("Regular"));
    }

    #[test]
    fn records_grouped_with_expiry() {
        let mut cert = CategorizedRecord::new(RecordKind::Certificate, "First aid", Some(RecordCategory::Training))
            .expiring(d(3, 10));
        cert.id = 4;
        let note = CategorizedRecord::new(RecordKind::Note, "Desk moved", None);

        let out = render_records(&[cert, note], d(3, 1), 30, '-');
        assert!(out.contains("Training"));
        assert!(out.contains("Other"));
        assert!(out.contains("expires in 9 days"));
        assert!(out.contains("no expiry"));
    }

    #[test]
    fn leave_shows_overdrawn_balance() {
        let mut s = LeaveSummary::default();
        s.total_days = 2.5;
        s.by_type.insert(LeaveType::Vacation, 2.5);

        let out = render_leave(&s, -0.5, '-');
        assert!(out.contains("2.5"));
        assert!(out.contains("-0.5"));
    }
}
