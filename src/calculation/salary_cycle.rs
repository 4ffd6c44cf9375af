//! Salary cycle resolution.
//!
//! Pay periods run from the configured start day through the end day of
//! the following month, so a shift's calendar month and its salary month
//! differ near the boundary. A start day of 1 degenerates to plain
//! calendar months.

use chrono::{Datelike, NaiveDate};

use crate::calculation::earnings::evaluate_shift;
use crate::config::Configuration;
use crate::models::{EvaluatedShift, ShiftCollection};

/// The salary month a date's pay lands in, as `(year, month)`.
///
/// From the start day onward a date belongs to the next month's salary,
/// with December rolling into January of the following year.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use shiftpay_engine::calculation::salary_month_for;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 26).unwrap();
/// assert_eq!(salary_month_for(date, 25), (2024, 4));
///
/// let date = NaiveDate::from_ymd_opt(2024, 12, 28).unwrap();
/// assert_eq!(salary_month_for(date, 25), (2025, 1));
/// ```
pub fn salary_month_for(date: NaiveDate, start_day: u32) -> (i32, u32) {
    if start_day <= 1 || date.day() < start_day {
        return (date.year(), date.month());
    }
    if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    }
}

/// Collects the shifts paid in one salary month, newest first, each with
/// its evaluated taxable pay attached.
pub fn filter_shifts_for_salary_cycle(
    shifts: &ShiftCollection,
    config: &Configuration,
    year: i32,
    month: u32,
) -> Vec<EvaluatedShift> {
    let start_day = config.salary_start_day;
    let end_day = config.salary_end_day;
    let (previous_year, previous_month) = if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    };

    let mut evaluated: Vec<EvaluatedShift> = shifts
        .iter()
        .filter(|(date, _)| {
            if start_day <= 1 {
                return date.year() == year && date.month() == month;
            }
            let in_previous =
                date.year() == previous_year && date.month() == previous_month;
            let in_current = date.year() == year && date.month() == month;
            (in_previous && date.day() >= start_day) || (in_current && date.day() <= end_day)
        })
        .map(|(date, record)| EvaluatedShift {
            date: *date,
            record: record.clone(),
            earned: evaluate_shift(*date, record, shifts, config).pay,
        })
        .collect();

    evaluated.reverse();
    evaluated
}
