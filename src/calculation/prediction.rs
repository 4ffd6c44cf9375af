//! End-of-month earnings projection.

use chrono::{Datelike, NaiveDate};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::calculation::dates::days_in_month;

/// Projects the month-end net by extending the daily pace so far.
///
/// `reference` is the day the projection is made from; the net earned by
/// then is scaled to the full month. With no shifts recorded yet there is
/// no pace to extend, so the projection is zero.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use shiftpay_engine::calculation::predict_end_of_month;
///
/// let mid_march = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
/// assert_eq!(predict_end_of_month(10, 5000, mid_march), 10333);
/// assert_eq!(predict_end_of_month(0, 0, mid_march), 0);
/// ```
pub fn predict_end_of_month(shift_count: u32, net: i64, reference: NaiveDate) -> i64 {
    if shift_count == 0 {
        return 0;
    }

    let month_days = Decimal::from(days_in_month(reference.year(), reference.month()));
    let elapsed_days = Decimal::from(reference.day());
    let projected = Decimal::from(net) * month_days / elapsed_days;

    projected
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or(0)
}
