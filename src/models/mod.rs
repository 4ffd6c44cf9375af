//! Core data models for the Salary Calculation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod breakdown;
pub(crate) mod numeric;
mod shift;
mod summary;

pub use breakdown::TierBreakdownEntry;
pub use shift::{EvaluatedShift, ShiftCollection, ShiftRecord, ShiftType};
pub use summary::{
    MonthlySummary, SalarySummary, TaxBracket, TaxInfo, YearlyStats, YearlyTotals,
};
