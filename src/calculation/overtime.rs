//! Tiered overtime pay.
//!
//! A shift's paid hours are poured through the configured tier schedule
//! in order. Each band keeps the hours that fall inside it, priced at the
//! base rate times the shift's percentage times the band multiplier.

use rust_decimal::Decimal;

use crate::config::{resolve_tier_schedule, Configuration};
use crate::models::TierBreakdownEntry;

/// Splits `hours` across the configuration's overtime bands.
///
/// `percent` is the shift's pay fraction, where `1` is full pay. Bands
/// that receive no hours are omitted, so zero hours yield an empty
/// breakdown.
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use shiftpay_engine::calculation::compute_tiered_breakdown;
/// use shiftpay_engine::config::Configuration;
///
/// let breakdown = compute_tiered_breakdown(
///     Decimal::from(10),
///     Decimal::from(50),
///     Decimal::ONE,
///     &Configuration::default(),
/// );
/// assert_eq!(breakdown.len(), 2);
/// assert_eq!(breakdown[0].amount, Decimal::from(400));
/// ```
pub fn compute_tiered_breakdown(
    hours: Decimal,
    rate: Decimal,
    percent: Decimal,
    config: &Configuration,
) -> Vec<TierBreakdownEntry> {
    let schedule = resolve_tier_schedule(config);
    let mut breakdown = Vec::new();

    for tier in schedule {
        let end = tier.to.unwrap_or(Decimal::MAX);
        let consumed = (hours.min(end) - tier.from).max(Decimal::ZERO);
        if consumed <= Decimal::ZERO {
            continue;
        }

        breakdown.push(TierBreakdownEntry {
            from: tier.from,
            to: tier.to,
            multiplier: tier.multiplier,
            hours: consumed,
            amount: consumed * rate * percent * tier.multiplier,
        });
    }

    breakdown
}

/// Total pay for `hours` under the tier schedule.
pub fn compute_tiered_total(
    hours: Decimal,
    rate: Decimal,
    percent: Decimal,
    config: &Configuration,
) -> Decimal {
    compute_tiered_breakdown(hours, rate, percent, config)
        .iter()
        .map(|entry| entry.amount)
        .sum()
}
