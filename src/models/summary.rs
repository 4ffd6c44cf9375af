//! Salary summary models for the Salary Calculation Engine.
//!
//! This module contains the [`SalarySummary`] type produced by the net
//! salary engine for one period, the [`TaxInfo`] bracket-position data it
//! carries for visualization, and the [`MonthlySummary`]/[`YearlyStats`]
//! types produced by the yearly aggregator.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One marginal income-tax bracket.
///
/// `limit` is the inclusive upper bound of the bracket in currency units;
/// the top bracket is open-ended and has no limit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxBracket {
    /// Upper bound of the bracket; `None` for the open top bracket.
    #[serde(default, with = "super::numeric::lenient_option")]
    pub limit: Option<Decimal>,
    /// Marginal rate applied to income inside the bracket.
    #[serde(default, with = "super::numeric::lenient")]
    pub rate: Decimal,
}

/// Tax bracket position for a period, carried on [`SalarySummary`] for
/// visualization. Ephemeral, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxInfo {
    /// Taxable income for the period (gross-for-tax minus employee pension).
    #[serde(default, with = "super::numeric::lenient")]
    pub taxable: Decimal,
    /// Index into `brackets` of the bracket containing `taxable`.
    pub current_bracket_index: usize,
    /// Upper bound of the current bracket; `None` when in the top bracket.
    #[serde(default, with = "super::numeric::lenient_option")]
    pub next_bracket_limit: Option<Decimal>,
    /// The full bracket schedule the tax was computed against.
    pub brackets: Vec<TaxBracket>,
}

/// The computed salary figures for one period.
///
/// All currency fields are rounded to whole units at this boundary;
/// internal computation uses unrounded decimals throughout. `total_hours`
/// keeps one decimal place and serializes as a string (`"24.0"`), matching
/// the stored-data interchange shape.
///
/// # Example
///
/// ```
/// use shiftpay_engine::models::SalarySummary;
///
/// let json = r#"{
///     "net": 383, "gross": 420, "tax": 0, "social": 13,
///     "pensionEmployee": 24, "pensionEmployer": 26, "severanceEmployer": 24,
///     "sicknessPay": 0, "travel": 20,
///     "totalHours": "8.0", "shiftCount": 1,
///     "taxInfo": {
///         "taxable": 376.0, "currentBracketIndex": 0,
///         "nextBracketLimit": 7010.0, "brackets": []
///     }
/// }"#;
///
/// let summary: SalarySummary = serde_json::from_str(json).unwrap();
/// assert_eq!(summary.gross, 420);
/// assert_eq!(summary.total_hours.to_string(), "8.0");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalarySummary {
    /// Net pay: gross-for-tax minus deductions, plus travel and monthly bonus.
    pub net: i64,
    /// Reported gross: taxable gross plus travel reimbursement.
    pub gross: i64,
    /// Income tax after the credit-point offset, floored at zero.
    pub tax: i64,
    /// Social security contribution (two-tier formula).
    pub social: i64,
    /// Employee pension contribution.
    pub pension_employee: i64,
    /// Employer pension contribution.
    pub pension_employer: i64,
    /// Employer severance provision.
    pub severance_employer: i64,
    /// Total sick pay for the period under the escalation rule.
    pub sickness_pay: i64,
    /// Travel reimbursement: daily allowance times work-shift count.
    pub travel: i64,
    /// Sum of raw shift hours, one decimal place.
    #[serde(with = "rust_decimal::serde::str")]
    pub total_hours: Decimal,
    /// Number of shifts in the period.
    pub shift_count: u32,
    /// Tax bracket position for visualization.
    pub tax_info: TaxInfo,
}

/// One row of the yearly view: a salary month's headline figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySummary {
    /// Salary month number, 1 through 12.
    pub month: u32,
    /// Salary year the month belongs to.
    pub year: i32,
    /// Display label, `YYYY-MM`.
    pub label: String,
    /// Net pay for the month.
    pub net: i64,
    /// Reported gross for the month.
    pub gross: i64,
    /// Total shift hours for the month.
    #[serde(default, with = "super::numeric::lenient")]
    pub hours: Decimal,
    /// Number of shifts in the month.
    pub shift_count: u32,
    /// Income tax for the month.
    pub tax: i64,
}

/// Running totals across a whole salary year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlyTotals {
    /// Sum of monthly net pay.
    pub net: i64,
    /// Sum of monthly gross pay.
    pub gross: i64,
    /// Sum of monthly shift hours.
    #[serde(default, with = "super::numeric::lenient")]
    pub hours: Decimal,
    /// Total shifts logged in the year.
    pub shift_count: u32,
}

/// Output of the yearly aggregator: twelve monthly rows, running totals,
/// and the best (highest-net) month among those with shifts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlyStats {
    /// One row per salary month, January through December.
    pub monthly_summaries: Vec<MonthlySummary>,
    /// Totals across the year.
    pub yearly_totals: YearlyTotals,
    /// The highest-net month with at least one shift, if any.
    pub best_month: Option<MonthlySummary>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample_summary() -> SalarySummary {
        SalarySummary {
            net: 11547,
            gross: 15000,
            tax: 1392,
            social: 1161,
            pension_employee: 900,
            pension_employer: 975,
            severance_employer: 900,
            sickness_pay: 0,
            travel: 0,
            total_hours: dec("8.0"),
            shift_count: 1,
            tax_info: TaxInfo {
                taxable: dec("14100"),
                current_bracket_index: 2,
                next_bracket_limit: Some(dec("16150")),
                brackets: vec![
                    TaxBracket {
                        limit: Some(dec("7010")),
                        rate: dec("0.10"),
                    },
                    TaxBracket {
                        limit: None,
                        rate: dec("0.50"),
                    },
                ],
            },
        }
    }

    #[test]
    fn test_summary_serializes_with_camel_case_keys() {
        let json = serde_json::to_string(&sample_summary()).unwrap();
        assert!(json.contains("\"pensionEmployee\":900"));
        assert!(json.contains("\"severanceEmployer\":900"));
        assert!(json.contains("\"sicknessPay\":0"));
        assert!(json.contains("\"shiftCount\":1"));
        assert!(json.contains("\"totalHours\":\"8.0\""));
        assert!(json.contains("\"taxInfo\":{"));
    }

    #[test]
    fn test_total_hours_serializes_as_one_decimal_string() {
        let json = serde_json::to_value(&sample_summary()).unwrap();
        assert_eq!(json["totalHours"], "8.0");
    }

    #[test]
    fn test_top_bracket_limit_serializes_as_null() {
        let json = serde_json::to_value(&sample_summary()).unwrap();
        assert!(json["taxInfo"]["brackets"][1]["limit"].is_null());
        assert_eq!(json["taxInfo"]["nextBracketLimit"], 16150.0);
    }

    #[test]
    fn test_summary_round_trip() {
        let summary = sample_summary();
        let json = serde_json::to_string(&summary).unwrap();
        let back: SalarySummary = serde_json::from_str(&json).unwrap();
        assert_eq!(back, summary);
    }

    #[test]
    fn test_monthly_summary_serialization() {
        let row = MonthlySummary {
            month: 3,
            year: 2026,
            label: "2026-03".to_string(),
            net: 9200,
            gross: 11000,
            hours: dec("176.0"),
            shift_count: 22,
            tax: 840,
        };

        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["month"], 3);
        assert_eq!(json["label"], "2026-03");
        assert_eq!(json["hours"], 176.0);
        assert_eq!(json["shiftCount"], 22);
    }

    #[test]
    fn test_yearly_stats_round_trip() {
        let stats = YearlyStats {
            monthly_summaries: vec![],
            yearly_totals: YearlyTotals {
                net: 0,
                gross: 0,
                hours: Decimal::ZERO,
                shift_count: 0,
            },
            best_month: None,
        };

        let json = serde_json::to_string(&stats).unwrap();
        assert!(json.contains("\"bestMonth\":null"));

        let back: YearlyStats = serde_json::from_str(&json).unwrap();
        assert_eq!(back, stats);
    }
}
