use chrono::{DateTime, Datelike, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::config;
use crate::error::AppError;

fn app_time_zone() -> Tz {
    config::current_time_zone()
}

pub fn now_in_app_tz() -> DateTime<Tz> {
    Utc::now().with_timezone(&app_time_zone())
}

pub fn today_in_app_tz() -> NaiveDate {
    now_in_app_tz().date_naive()
}

pub fn parse_date(input: &str, field: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("{} must be a date (YYYY-MM-DD)", field)))
}

/// Calendar days covered by a leave, both ends included.
pub fn inclusive_days(start: NaiveDate, end: NaiveDate) -> Result<u32, AppError> {
    let span = (end - start).num_days();
    if span < 0 {
        return Err(AppError::validation(
            "End date must be on or after the start date",
        ));
    }
    Ok(span as u32 + 1)
}

/// ISO week label in the `YYYY-Www` form an `<input type="week">` produces.
pub fn iso_week_label(date: NaiveDate) -> String {
    let week = date.iso_week();
    format!("{}-W{:02}", week.year(), week.week())
}

pub fn is_iso_week_label(value: &str) -> bool {
    let Some((year, week)) = value.split_once("-W") else {
        return false;
    };
    let week_ok = week.len() == 2 && matches!(week.parse::<u32>(), Ok(1..=53));
    year.len() == 4 && year.parse::<i32>().is_ok() && week_ok
}
