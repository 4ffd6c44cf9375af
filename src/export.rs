//! Data export surfaces: backup payloads, payslip views, text reports.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::config::Configuration;
use crate::error::EngineResult;
use crate::models::{EvaluatedShift, MonthlySummary, SalarySummary, ShiftCollection, ShiftType};

/// A full snapshot of user data: every shift plus the configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Backup {
    /// All recorded shifts, keyed by date.
    #[serde(default)]
    pub shifts: ShiftCollection,
    /// The settings in force when the backup was taken.
    #[serde(default)]
    pub config: Configuration,
}

/// Serializes a backup to pretty-printed JSON.
///
/// # Errors
///
/// Returns [`EngineError::Serialization`] when encoding fails.
///
/// [`EngineError::Serialization`]: crate::error::EngineError::Serialization
pub fn export_backup(backup: &Backup) -> EngineResult<String> {
    let payload = serde_json::to_string_pretty(backup)?;
    Ok(payload)
}

/// Restores a backup from its JSON payload.
///
/// Unknown fields are ignored and missing fields fall back to defaults,
/// so payloads from older releases import cleanly.
///
/// # Errors
///
/// Returns [`EngineError::Serialization`] when the payload is not valid
/// JSON for a backup.
///
/// [`EngineError::Serialization`]: crate::error::EngineError::Serialization
pub fn import_backup(payload: &str) -> EngineResult<Backup> {
    let backup = serde_json::from_str(payload)?;
    Ok(backup)
}

/// The payslip-style breakdown of one salary month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayslipView {
    /// Gross from worked shifts alone, without travel or sick pay.
    pub work_gross: i64,
    /// Paid travel days, reconstructed from the travel total.
    pub travel_days: i64,
    /// Number of regular work days in the cycle.
    pub work_days: u32,
    /// Number of sick days in the cycle.
    pub sick_days: u32,
    /// Number of vacation days in the cycle.
    pub vacation_days: u32,
    /// Tax, social insurance and employee pension combined.
    pub total_deductions: i64,
    /// Gross including the fixed monthly bonus.
    pub display_gross: i64,
}

/// Assembles the payslip view of a calculated month.
pub fn build_payslip(
    summary: &SalarySummary,
    shifts: &[EvaluatedShift],
    config: &Configuration,
) -> PayslipView {
    let work_gross = (summary.gross - summary.travel - summary.sickness_pay).max(0);

    let travel_days = if config.travel_daily > Decimal::ZERO {
        (Decimal::from(summary.travel) / config.travel_daily)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_i64()
            .unwrap_or(0)
    } else {
        0
    };

    let count_of = |shift_type: ShiftType| {
        shifts
            .iter()
            .filter(|shift| shift.record.shift_type == shift_type)
            .count() as u32
    };

    let display_gross = (Decimal::from(summary.gross) + config.monthly_bonus)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or(summary.gross);

    PayslipView {
        work_gross,
        travel_days,
        work_days: count_of(ShiftType::Work),
        sick_days: count_of(ShiftType::Sick),
        vacation_days: count_of(ShiftType::Vacation),
        total_deductions: summary.tax + summary.social + summary.pension_employee,
        display_gross,
    }
}

/// Renders a monthly summary as a plain-text report.
pub fn render_monthly_report(summary: &MonthlySummary) -> String {
    format!(
        "Salary Report - {label}\n\
         ----------------\n\
         Net: {net}\n\
         Gross: {gross}\n\
         Hours: {hours}\n\
         Shifts: {shifts}\n\
         ----------------\n\
         Generated by shiftpay-engine\n",
        label = summary.label,
        net = summary.net,
        gross = summary.gross,
        hours = summary.hours,
        shifts = summary.shift_count,
    )
}
