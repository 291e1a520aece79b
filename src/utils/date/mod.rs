// Date utility functions
// Week arithmetic and clock labels shared by the timeline views

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::models::settings::TimeFormat;

/// Calculate the start of the week containing the given date.
///
/// # Arguments
/// * `date` - The date to find the week start for
/// * `first_day_of_week` - 0 = Sunday, 1 = Monday, etc.
pub fn get_week_start(date: NaiveDate, first_day_of_week: u8) -> NaiveDate {
    let weekday = date.weekday().num_days_from_sunday() as i64;
    let offset = (weekday - first_day_of_week as i64 + 7) % 7;
    date - Duration::days(offset)
}

/// `count` consecutive dates beginning at `start`
pub fn consecutive_dates(start: NaiveDate, count: usize) -> Vec<NaiveDate> {
    start.iter_days().take(count).collect()
}

/// Format a time-of-day label for `at`, relative to the day it belongs to.
///
/// An instant at midnight following `day` is rendered as the end of that
/// day ("24:00" / "12:00 AM") rather than the start of the next.
pub fn format_time_label(day: NaiveDate, at: NaiveDateTime, format: TimeFormat) -> String {
    let end_of_day = at.date() > day && at.time() == NaiveTime::MIN;
    match format {
        TimeFormat::TwentyFourHour => {
            if end_of_day {
                "24:00".to_string()
            } else {
                at.format("%H:%M").to_string()
            }
        }
        TimeFormat::TwelveHour => {
            let (is_pm, hour) = at.hour12();
            format!("{}:{:02} {}", hour, at.minute(), if is_pm { "PM" } else { "AM" })
        }
    }
}
