//! Overtime tier schedule resolution and editing.
//!
//! The engine always works from an explicit tier schedule. Configurations
//! predating tiered overtime carry only a start threshold and a single
//! multiplier; [`resolve_tier_schedule`] upgrades those on the fly.

use rust_decimal::Decimal;

use crate::config::types::{Configuration, OvertimeTier};
use crate::error::{EngineError, EngineResult};

/// Returns the effective overtime schedule for a configuration.
///
/// A non-empty `overtime_tiers` list wins, sorted by starting hour. With
/// no tiers, a legacy threshold/multiplier pair expands into a two-band
/// schedule, and a missing or non-positive threshold means a single flat
/// band at regular pay.
///
/// # Example
///
/// ```
/// use shiftpay_engine::config::{resolve_tier_schedule, Configuration};
///
/// let schedule = resolve_tier_schedule(&Configuration::default());
/// assert_eq!(schedule.len(), 4);
/// assert_eq!(schedule[0].from, rust_decimal::Decimal::ZERO);
/// ```
pub fn resolve_tier_schedule(config: &Configuration) -> Vec<OvertimeTier> {
    if !config.overtime_tiers.is_empty() {
        let mut tiers = config.overtime_tiers.clone();
        tiers.sort_by_key(|tier| tier.from);
        return tiers;
    }

    let threshold = config.overtime_start_threshold.unwrap_or(Decimal::ZERO);
    let multiplier = config.overtime_multiplier.unwrap_or(Decimal::new(125, 2));

    if threshold <= Decimal::ZERO {
        return vec![OvertimeTier {
            from: Decimal::ZERO,
            to: None,
            multiplier: Decimal::ONE,
        }];
    }

    vec![
        OvertimeTier {
            from: Decimal::ZERO,
            to: Some(threshold),
            multiplier: Decimal::ONE,
        },
        OvertimeTier {
            from: threshold,
            to: None,
            multiplier,
        },
    ]
}

/// Appends a new open-ended band to a tier schedule.
///
/// The previous open band is closed where the new one begins, so the
/// schedule stays contiguous. The new band starts at the old end bound
/// (or one hour past its start when it was open) with a 125% multiplier.
pub fn add_tier(tiers: &mut Vec<OvertimeTier>) {
    let template = tiers.last().copied().unwrap_or(OvertimeTier {
        from: Decimal::ZERO,
        to: Some(Decimal::new(8, 0)),
        multiplier: Decimal::ONE,
    });
    let next_from = template.to.unwrap_or(template.from + Decimal::ONE);

    if let Some(last) = tiers.last_mut() {
        if last.to.is_none() {
            last.to = Some(next_from);
        }
    }

    tiers.push(OvertimeTier {
        from: next_from,
        to: None,
        multiplier: Decimal::new(125, 2),
    });
}

/// Removes the band at `index` and reopens the schedule's final band.
///
/// # Errors
///
/// Returns [`EngineError::InvalidTierSchedule`] when the schedule holds a
/// single band or `index` is out of range.
pub fn remove_tier(tiers: &mut Vec<OvertimeTier>, index: usize) -> EngineResult<()> {
    if tiers.len() <= 1 {
        return Err(EngineError::InvalidTierSchedule {
            reason: "at least one tier is required".to_string(),
        });
    }
    if index >= tiers.len() {
        return Err(EngineError::InvalidTierSchedule {
            reason: format!("no tier at index {}", index),
        });
    }

    tiers.remove(index);
    if let Some(last) = tiers.last_mut() {
        last.to = None;
    }
    Ok(())
}
