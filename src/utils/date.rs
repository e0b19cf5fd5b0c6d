use chrono::{Datelike, Duration, NaiveDate};

/// The only place that reads the clock; everything below takes dates as input.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Monday..Sunday of the ISO week containing `d`.
pub fn week_bounds(d: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = d - Duration::days(d.weekday().num_days_from_monday() as i64);
    (start, start + Duration::days(6))
}

/// First and last day of the month containing `d`.
pub fn month_bounds(d: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = d.with_day(1).unwrap_or(d);
    let last = month_last_day(d.year(), d.month()).unwrap_or(28);
    let end = d.with_day(last).unwrap_or(d);
    (start, end)
}

/// January 1st and December 31st of `d`'s year.
pub fn year_bounds(d: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = d.with_ordinal(1).unwrap_or(d);
    let end = NaiveDate::from_ymd_opt(d.year(), 12, 31).unwrap_or(d);
    (start, end)
}

pub fn month_last_day(y: i32, m: u32) -> Option<u32> {
    match m {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 => {
            let leap = (y % 4 == 0 && y % 100 != 0) || (y % 400 == 0);
            Some(if leap { 29 } else { 28 })
        }
        _ => None,
    }
}

pub fn weekday_short(d: NaiveDate) -> &'static str {
    match d.weekday() {
        chrono::Weekday::Mon => "Mon",
        chrono::Weekday::Tue => "Tue",
        chrono::Weekday::Wed => "Wed",
        chrono::Weekday::Thu => "Thu",
        chrono::Weekday::Fri => "Fri",
        chrono::Weekday::Sat => "Sat",
        chrono::Weekday::Sun => "Sun",
    }
}
