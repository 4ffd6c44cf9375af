//! Sick leave sequences and their pay.
//!
//! Statutory sick pay depends on how deep into a run of consecutive sick
//! days a date sits: the first day is unpaid, the second pays half, and
//! later days pay in full.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::ShiftCollection;

/// Position of `date` within its run of consecutive sick days.
///
/// Counts backwards from `date` while the previous calendar day is also
/// recorded as sick. An isolated sick day is sequence 1.
pub fn sick_day_sequence(date: NaiveDate, shifts: &ShiftCollection) -> u32 {
    let mut sequence = 1;
    let mut cursor = date;

    while let Some(previous) = cursor.pred_opt() {
        let previous_is_sick = shifts
            .get(&previous)
            .is_some_and(|record| record.shift_type.is_sick());
        if !previous_is_sick {
            break;
        }
        sequence += 1;
        cursor = previous;
    }

    sequence
}

/// Pay for one sick day given its position in the run.
pub fn sick_pay_for_sequence(sequence: u32, hours: Decimal, rate: Decimal) -> Decimal {
    match sequence {
        0 | 1 => Decimal::ZERO,
        2 => hours * rate * Decimal::new(5, 1),
        _ => hours * rate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ShiftRecord, ShiftType};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::from_str(s).unwrap()
    }

    fn sick_day() -> ShiftRecord {
        ShiftRecord {
            shift_type: ShiftType::Sick,
            total_hours: dec("8"),
            ..ShiftRecord::default()
        }
    }

    fn work_day() -> ShiftRecord {
        ShiftRecord {
            total_hours: dec("8"),
            ..ShiftRecord::default()
        }
    }

    /// SL-001: An isolated sick day is sequence 1.
    #[test]
    fn test_isolated_sick_day() {
        let mut shifts = ShiftCollection::new();
        shifts.insert(date("2024-03-11"), sick_day());

        assert_eq!(sick_day_sequence(date("2024-03-11"), &shifts), 1);
    }

    /// SL-002: Consecutive sick days count backwards from the query date.
    #[test]
    fn test_consecutive_run() {
        let mut shifts = ShiftCollection::new();
        shifts.insert(date("2024-03-11"), sick_day());
        shifts.insert(date("2024-03-12"), sick_day());
        shifts.insert(date("2024-03-13"), sick_day());

        assert_eq!(sick_day_sequence(date("2024-03-11"), &shifts), 1);
        assert_eq!(sick_day_sequence(date("2024-03-12"), &shifts), 2);
        assert_eq!(sick_day_sequence(date("2024-03-13"), &shifts), 3);
    }

    /// SL-003: A non-sick day breaks the run.
    #[test]
    fn test_run_broken_by_work_day() {
        let mut shifts = ShiftCollection::new();
        shifts.insert(date("2024-03-11"), sick_day());
        shifts.insert(date("2024-03-12"), work_day());
        shifts.insert(date("2024-03-13"), sick_day());

        assert_eq!(sick_day_sequence(date("2024-03-13"), &shifts), 1);
    }

    /// SL-004: A gap in recorded days also breaks the run.
    #[test]
    fn test_run_broken_by_missing_day() {
        let mut shifts = ShiftCollection::new();
        shifts.insert(date("2024-03-11"), sick_day());
        shifts.insert(date("2024-03-14"), sick_day());

        assert_eq!(sick_day_sequence(date("2024-03-14"), &shifts), 1);
    }

    /// SL-005: Pay escalates from nothing through half to full.
    #[test]
    fn test_pay_by_sequence() {
        let hours = dec("8");
        let rate = dec("50");

        assert_eq!(sick_pay_for_sequence(1, hours, rate), Decimal::ZERO);
        assert_eq!(sick_pay_for_sequence(2, hours, rate), dec("200"));
        assert_eq!(sick_pay_for_sequence(3, hours, rate), dec("400"));
        assert_eq!(sick_pay_for_sequence(9, hours, rate), dec("400"));
    }
}
