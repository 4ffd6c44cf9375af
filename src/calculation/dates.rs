//! Calendar helpers shared across the calculation modules.

use chrono::{Datelike, NaiveDate};

use crate::error::{EngineError, EngineResult};

/// Parses a `YYYY-MM-DD` date key.
///
/// # Errors
///
/// Returns [`EngineError::InvalidDate`] when the value does not parse.
///
/// # Example
///
/// ```
/// use shiftpay_engine::calculation::parse_local_date;
///
/// let date = parse_local_date("2024-03-15").unwrap();
/// assert_eq!(date.to_string(), "2024-03-15");
/// assert!(parse_local_date("15/03/2024").is_err());
/// ```
pub fn parse_local_date(value: &str) -> EngineResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| EngineError::InvalidDate {
        value: value.to_string(),
    })
}

/// Formats a date back into the `YYYY-MM-DD` key shape.
pub fn format_local_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Whether `day` falls inside a day-of-month window, wrapping across the
/// month boundary when the window does (e.g. 25th through 24th).
pub fn cycle_contains_day(day: u32, start: u32, end: u32) -> bool {
    if start <= end {
        (start..=end).contains(&day)
    } else {
        day >= start || day <= end
    }
}

/// Number of days in a calendar month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let next_month_start = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };

    next_month_start
        .and_then(|date| date.pred_opt())
        .map(|date| date.day())
        .unwrap_or(30)
}
