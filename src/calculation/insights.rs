//! Trend and goal insights derived from monthly summaries.

use chrono::{Datelike, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::calculation::dates::days_in_month;
use crate::config::Configuration;
use crate::models::MonthlySummary;

const ONE_HUNDRED: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// Percentage movement of net pay and hours against the previous month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyComparison {
    /// Net change in percent, one decimal.
    #[serde(with = "rust_decimal::serde::float")]
    pub net_change_percent: Decimal,
    /// Hours change in percent, one decimal.
    #[serde(with = "rust_decimal::serde::float")]
    pub hours_change_percent: Decimal,
}

/// Compares a month against the previous one.
///
/// A previous month with zero net gives no meaningful baseline, so the
/// comparison is skipped entirely. Zero previous hours only silence the
/// hours figure.
pub fn compare_months(
    current: &MonthlySummary,
    previous: &MonthlySummary,
) -> Option<MonthlyComparison> {
    if previous.net == 0 {
        return None;
    }

    let net_change = Decimal::from(current.net - previous.net) / Decimal::from(previous.net)
        * ONE_HUNDRED;
    let hours_change = if previous.hours == Decimal::ZERO {
        Decimal::ZERO
    } else {
        (current.hours - previous.hours) / previous.hours * ONE_HUNDRED
    };

    Some(MonthlyComparison {
        net_change_percent: round_percent(net_change),
        hours_change_percent: round_percent(hours_change),
    })
}

fn round_percent(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}

/// Progress toward the monthly net goal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgress {
    /// The configured goal amount.
    #[serde(with = "rust_decimal::serde::float")]
    pub goal: Decimal,
    /// Fraction of the goal reached, capped at 1.
    #[serde(with = "rust_decimal::serde::float")]
    pub progress: Decimal,
    /// Amount still missing, never negative.
    #[serde(with = "rust_decimal::serde::float")]
    pub remaining: Decimal,
    /// Calendar days left in the month, counting today.
    pub days_left: u32,
    /// Net needed per remaining day to land on the goal.
    #[serde(with = "rust_decimal::serde::float")]
    pub daily_target: Decimal,
}

/// Measures `net` against the configured goal for a given month.
///
/// `today` anchors the remaining-days count: past months have none left,
/// the current month counts from today inclusive, and future months get
/// their full length.
pub fn goal_progress(
    net: i64,
    config: &Configuration,
    year: i32,
    month: u32,
    today: NaiveDate,
) -> GoalProgress {
    let goal = config.monthly_goal;
    let net = Decimal::from(net);

    let progress = if goal > Decimal::ZERO {
        (net / goal).min(Decimal::ONE)
    } else {
        Decimal::ZERO
    };
    let remaining = (goal - net).max(Decimal::ZERO);

    let days_left = match (year, month).cmp(&(today.year(), today.month())) {
        std::cmp::Ordering::Less => 0,
        std::cmp::Ordering::Equal => days_in_month(year, month) - today.day() + 1,
        std::cmp::Ordering::Greater => days_in_month(year, month),
    };

    let daily_target = if days_left > 0 {
        (remaining / Decimal::from(days_left)).ceil()
    } else {
        Decimal::ZERO
    };

    GoalProgress {
        goal,
        progress,
        remaining,
        days_left,
        daily_target,
    }
}
