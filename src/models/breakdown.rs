//! Tier breakdown models for the Salary Calculation Engine.
//!
//! This module contains the [`TierBreakdownEntry`] type describing one
//! hour band actually consumed when a shift's hours are split across the
//! configured overtime tiers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One hour band consumed by a shift, with the pay it produced.
///
/// A breakdown is an ordered list of these entries covering disjoint,
/// contiguous hour ranges in ascending `from` order; the `hours` fields
/// sum to the shift's total hours. Entries are ephemeral display data and
/// are never persisted.
///
/// # Example
///
/// ```
/// use shiftpay_engine::models::TierBreakdownEntry;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let entry = TierBreakdownEntry {
///     from: Decimal::ZERO,
///     to: Some(Decimal::from_str("8").unwrap()),
///     multiplier: Decimal::ONE,
///     hours: Decimal::from_str("8").unwrap(),
///     amount: Decimal::from_str("400").unwrap(),
/// };
///
/// assert_eq!(entry.hours * Decimal::from_str("50").unwrap(), entry.amount);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierBreakdownEntry {
    /// Hour offset where the band starts.
    #[serde(default, with = "super::numeric::lenient")]
    pub from: Decimal,
    /// Hour offset where the band ends; `None` for the open-ended band.
    #[serde(default, with = "super::numeric::lenient_option")]
    pub to: Option<Decimal>,
    /// Pay multiplier applied within the band.
    #[serde(default, with = "super::numeric::lenient")]
    pub multiplier: Decimal,
    /// Hours the shift actually consumed inside the band.
    #[serde(default, with = "super::numeric::lenient")]
    pub hours: Decimal,
    /// Pay for the band: `hours * rate * percent * multiplier`.
    #[serde(default, with = "super::numeric::lenient")]
    pub amount: Decimal,
}
