//! Per-shift earnings evaluation.
//!
//! This is the day-level view shown next to each shift: taxable pay on
//! one side, the travel allowance on the other. Monthly aggregation in
//! [`calculate_net_salary`] consumes the taxable side only.
//!
//! [`calculate_net_salary`]: crate::calculation::calculate_net_salary

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::calculation::overtime::compute_tiered_total;
use crate::calculation::sick_leave::{sick_day_sequence, sick_pay_for_sequence};
use crate::config::Configuration;
use crate::models::{ShiftCollection, ShiftRecord, ShiftType};

const ONE_HUNDRED: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// A shift's pay split into its taxable part and the travel allowance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShiftEarnings {
    /// Taxable pay for the shift.
    pub pay: Decimal,
    /// Travel allowance, non-zero only for regular work days.
    pub travel: Decimal,
}

impl ShiftEarnings {
    /// Pay and travel combined, as displayed on the shift row.
    pub fn total(&self) -> Decimal {
        self.pay + self.travel
    }
}

/// Evaluates one shift against the configuration.
///
/// Break deduction shortens any shift longer than six hours before
/// pricing. Sick days pay by their position in the surrounding sick run
/// and never earn travel; everything else goes through the overtime
/// schedule, plus the recorded bonus, with travel for work days only.
pub fn evaluate_shift(
    date: NaiveDate,
    record: &ShiftRecord,
    shifts: &ShiftCollection,
    config: &Configuration,
) -> ShiftEarnings {
    let mut hours = record.total_hours;
    if config.is_break_deducted && hours > Decimal::from(6) {
        hours -= config.break_deduction / Decimal::from(60);
    }

    if record.shift_type.is_sick() {
        let sequence = sick_day_sequence(date, shifts);
        return ShiftEarnings {
            pay: sick_pay_for_sequence(sequence, hours, config.hourly_rate),
            travel: Decimal::ZERO,
        };
    }

    let percent = record.hourly_percent / ONE_HUNDRED;
    let pay = compute_tiered_total(hours, config.hourly_rate, percent, config) + record.bonus;
    let travel = if record.shift_type == ShiftType::Work {
        config.travel_daily
    } else {
        Decimal::ZERO
    };

    ShiftEarnings { pay, travel }
}
