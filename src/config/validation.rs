//! Configuration validation.
//!
//! Settings arrive from an interactive form, so validation reports every
//! problem at once instead of failing on the first. Field names in the
//! issues use the wire spelling so a client can attach them to inputs.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::config::types::Configuration;

/// A single validation problem: which field, and what is wrong with it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationIssue {
    /// Wire name of the offending field.
    pub field: String,
    /// Human-readable description of the problem.
    pub message: String,
}

impl ValidationIssue {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Checks a configuration and returns every issue found.
///
/// An empty result means the configuration is safe to calculate with.
///
/// # Example
///
/// ```
/// use shiftpay_engine::config::{validate_configuration, Configuration};
///
/// assert!(validate_configuration(&Configuration::default()).is_empty());
///
/// let broken = Configuration {
///     salary_start_day: 0,
///     ..Configuration::default()
/// };
/// let issues = validate_configuration(&broken);
/// assert_eq!(issues[0].field, "salaryStartDay");
/// ```
pub fn validate_configuration(config: &Configuration) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if config.user_name.trim().is_empty() {
        issues.push(ValidationIssue::new("userName", "must not be empty"));
    }
    if config.hourly_rate < Decimal::ZERO {
        issues.push(ValidationIssue::new("hourlyRate", "must not be negative"));
    }
    if !(1..=31).contains(&config.salary_start_day) {
        issues.push(ValidationIssue::new(
            "salaryStartDay",
            "must be between 1 and 31",
        ));
    }
    if !(1..=31).contains(&config.salary_end_day) {
        issues.push(ValidationIssue::new(
            "salaryEndDay",
            "must be between 1 and 31",
        ));
    }
    if config.is_break_deducted
        && !(Decimal::ZERO..=Decimal::new(180, 0)).contains(&config.break_deduction)
    {
        issues.push(ValidationIssue::new(
            "breakDeduction",
            "must be between 0 and 180 minutes",
        ));
    }
    if config.travel_daily < Decimal::ZERO {
        issues.push(ValidationIssue::new("travelDaily", "must not be negative"));
    }
    if config.monthly_goal < Decimal::ZERO {
        issues.push(ValidationIssue::new("monthlyGoal", "must not be negative"));
    }
    if config.monthly_bonus < Decimal::ZERO {
        issues.push(ValidationIssue::new("monthlyBonus", "must not be negative"));
    }
    if !(Decimal::ZERO..=Decimal::new(10, 0)).contains(&config.credit_points) {
        issues.push(ValidationIssue::new(
            "creditPoints",
            "must be between 0 and 10",
        ));
    }
    if !(Decimal::ZERO..=Decimal::ONE).contains(&config.pension_rate) {
        issues.push(ValidationIssue::new(
            "pensionRate",
            "must be between 0 and 1",
        ));
    }

    validate_tiers(config, &mut issues);

    issues
}

fn validate_tiers(config: &Configuration, issues: &mut Vec<ValidationIssue>) {
    let tiers = &config.overtime_tiers;
    if tiers.is_empty() {
        issues.push(ValidationIssue::new(
            "overtimeTiers",
            "at least one tier is required",
        ));
        return;
    }

    if tiers[0].from != Decimal::ZERO {
        issues.push(ValidationIssue::new(
            "overtimeTiers",
            "the first tier must start at hour 0",
        ));
    }

    let last_index = tiers.len() - 1;
    for (index, tier) in tiers.iter().enumerate() {
        if index > 0 {
            match tiers[index - 1].to {
                Some(previous_end) if tier.from != previous_end => {
                    issues.push(ValidationIssue::new(
                        "overtimeTiers",
                        format!(
                            "tier {} must start where tier {} ends",
                            index + 1,
                            index
                        ),
                    ));
                }
                _ => {}
            }
        }

        if tier.to.is_none() && index != last_index {
            issues.push(ValidationIssue::new(
                "overtimeTiers",
                format!("tier {} must have an end bound", index + 1),
            ));
        }

        if let Some(end) = tier.to {
            if end <= tier.from {
                issues.push(ValidationIssue::new(
                    "overtimeTiers",
                    format!("tier {} must end after it starts", index + 1),
                ));
            }
        }

        if !(Decimal::new(5, 1)..=Decimal::new(3, 0)).contains(&tier.multiplier) {
            issues.push(ValidationIssue::new(
                "overtimeTiers",
                format!("tier {} multiplier must be between 0.5 and 3", index + 1),
            ));
        }
    }

    if tiers[last_index].to.is_some() {
        issues.push(ValidationIssue::new(
            "overtimeTiers",
            "the final tier must be open-ended",
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::OvertimeTier;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn tier(from: &str, to: Option<&str>, multiplier: &str) -> OvertimeTier {
        OvertimeTier {
            from: dec(from),
            to: to.map(dec),
            multiplier: dec(multiplier),
        }
    }

    fn fields(issues: &[ValidationIssue]) -> Vec<&str> {
        issues.iter().map(|issue| issue.field.as_str()).collect()
    }

    /// CV-001: The seed configuration validates cleanly.
    #[test]
    fn test_default_configuration_is_valid() {
        assert!(validate_configuration(&Configuration::default()).is_empty());
    }

    /// CV-002: Every broken field is reported, not just the first.
    #[test]
    fn test_multiple_issues_reported_together() {
        let config = Configuration {
            user_name: "   ".to_string(),
            hourly_rate: dec("-5"),
            salary_start_day: 0,
            salary_end_day: 45,
            credit_points: dec("11"),
            pension_rate: dec("1.5"),
            ..Configuration::default()
        };

        let issues = validate_configuration(&config);
        let fields = fields(&issues);
        assert!(fields.contains(&"userName"));
        assert!(fields.contains(&"hourlyRate"));
        assert!(fields.contains(&"salaryStartDay"));
        assert!(fields.contains(&"salaryEndDay"));
        assert!(fields.contains(&"creditPoints"));
        assert!(fields.contains(&"pensionRate"));
    }

    /// CV-003: Break length is only checked while deduction is enabled.
    #[test]
    fn test_break_deduction_checked_only_when_enabled() {
        let mut config = Configuration {
            break_deduction: dec("300"),
            ..Configuration::default()
        };
        assert_eq!(fields(&validate_configuration(&config)), ["breakDeduction"]);

        config.is_break_deducted = false;
        assert!(validate_configuration(&config).is_empty());
    }

    /// CV-004: An empty tier list is rejected.
    #[test]
    fn test_empty_tier_list_rejected() {
        let config = Configuration {
            overtime_tiers: Vec::new(),
            ..Configuration::default()
        };
        let issues = validate_configuration(&config);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "overtimeTiers");
    }

    /// CV-005: The schedule must start at hour 0 and stay contiguous.
    #[test]
    fn test_tier_gaps_rejected() {
        let config = Configuration {
            overtime_tiers: vec![
                tier("1", Some("8"), "1"),
                tier("9", None, "1.25"),
            ],
            ..Configuration::default()
        };

        let issues = validate_configuration(&config);
        assert!(issues.iter().any(|i| i.message.contains("start at hour 0")));
        assert!(issues.iter().any(|i| i.message.contains("where tier 1 ends")));
    }

    /// CV-006: Only the final tier may be open-ended, and it must be.
    #[test]
    fn test_open_band_placement() {
        let open_middle = Configuration {
            overtime_tiers: vec![tier("0", None, "1"), tier("8", None, "1.25")],
            ..Configuration::default()
        };
        let issues = validate_configuration(&open_middle);
        assert!(issues.iter().any(|i| i.message.contains("end bound")));

        let closed_end = Configuration {
            overtime_tiers: vec![tier("0", Some("8"), "1"), tier("8", Some("12"), "1.25")],
            ..Configuration::default()
        };
        let issues = validate_configuration(&closed_end);
        assert!(issues.iter().any(|i| i.message.contains("open-ended")));
    }

    /// CV-007: Band bounds must be ordered and multipliers sane.
    #[test]
    fn test_tier_bounds_and_multiplier_range() {
        let config = Configuration {
            overtime_tiers: vec![tier("0", Some("0"), "5"), tier("0", None, "0.1")],
            ..Configuration::default()
        };

        let issues = validate_configuration(&config);
        assert!(issues.iter().any(|i| i.message.contains("end after it starts")));
        assert!(
            issues
                .iter()
                .filter(|i| i.message.contains("multiplier"))
                .count()
                >= 2
        );
    }

    /// CV-008: Issues serialize with plain field/message keys.
    #[test]
    fn test_issue_serialization() {
        let issue = ValidationIssue::new("hourlyRate", "must not be negative");
        let json = serde_json::to_string(&issue).unwrap();
        assert!(json.contains("\"field\":\"hourlyRate\""));
        assert!(json.contains("\"message\":\"must not be negative\""));
    }
}
