//! Shift duration math and quick-entry helpers.
//!
//! Times are the `HH:MM` strings users type. An end time earlier than the
//! start rolls into the next day, so overnight shifts come out positive.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::{ShiftPreset, ShiftTemplate};
use crate::models::{ShiftRecord, ShiftType};

/// Hours between two `HH:MM` times, rounded to two decimals.
///
/// Unparseable input yields zero hours rather than an error; a half-typed
/// time in the entry form must not poison a whole month.
///
/// # Example
///
/// ```
/// use shiftpay_engine::calculation::compute_total_hours;
///
/// assert_eq!(compute_total_hours("08:00", "16:30").to_string(), "8.5");
/// // Overnight: 22:00 to 06:00 is eight hours
/// assert_eq!(compute_total_hours("22:00", "06:00").to_string(), "8");
/// assert_eq!(compute_total_hours("", "16:00"), rust_decimal::Decimal::ZERO);
/// ```
pub fn compute_total_hours(start_time: &str, end_time: &str) -> Decimal {
    let (Some(start), Some(end)) = (minutes_of_day(start_time), minutes_of_day(end_time)) else {
        return Decimal::ZERO;
    };

    let mut span = end - start;
    if span < 0 {
        span += 24 * 60;
    }

    (Decimal::from(span) / Decimal::from(60))
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

fn minutes_of_day(value: &str) -> Option<i64> {
    let (hours, minutes) = value.split_once(':')?;
    let hours: i64 = hours.trim().parse().ok()?;
    let minutes: i64 = minutes.trim().parse().ok()?;
    Some(hours * 60 + minutes)
}

/// Applies a time preset to a record and recomputes its hours.
pub fn apply_preset(record: &mut ShiftRecord, preset: &ShiftPreset) {
    record.start_time = preset.start_time.clone();
    record.end_time = preset.end_time.clone();
    record.total_hours = compute_total_hours(&record.start_time, &record.end_time);
}

/// Applies a saved template to a record.
///
/// Sick and vacation templates stamp a nominal eight-hour day. Other
/// templates merge only the fields they carry, and hours are recomputed
/// when the template supplied a time.
pub fn apply_template(record: &mut ShiftRecord, template: &ShiftTemplate) {
    if let Some(shift_type @ (ShiftType::Sick | ShiftType::Vacation)) = template.shift_type {
        record.shift_type = shift_type;
        record.start_time = template.start_time.clone().unwrap_or_else(|| "08:00".to_string());
        record.end_time = template.end_time.clone().unwrap_or_else(|| "16:00".to_string());
        record.total_hours = Decimal::new(8, 0);
        if let Some(percent) = template.hourly_percent {
            record.hourly_percent = percent;
        }
        if let Some(bonus) = template.bonus {
            record.bonus = bonus;
        }
        return;
    }

    if let Some(shift_type) = template.shift_type {
        record.shift_type = shift_type;
    }
    let times_changed = template.start_time.is_some() || template.end_time.is_some();
    if let Some(start) = &template.start_time {
        record.start_time = start.clone();
    }
    if let Some(end) = &template.end_time {
        record.end_time = end.clone();
    }
    if let Some(percent) = template.hourly_percent {
        record.hourly_percent = percent;
    }
    if let Some(bonus) = template.bonus {
        record.bonus = bonus;
    }
    if times_changed {
        record.total_hours = compute_total_hours(&record.start_time, &record.end_time);
    }
}
