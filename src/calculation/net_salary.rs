//! Monthly net salary aggregation.
//!
//! Takes the evaluated shifts of one salary cycle and produces the full
//! deduction picture: income tax through the progressive brackets, social
//! insurance in its reduced and full bands, pension contributions, and
//! the statutory sick pay accrued over the period.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::Configuration;
use crate::models::{EvaluatedShift, SalarySummary, ShiftType, TaxBracket, TaxInfo};

/// Monthly income tax brackets, lowest first. The top bracket is open.
const TAX_BRACKETS: [TaxBracket; 7] = [
    TaxBracket {
        limit: Some(Decimal::from_parts(7010, 0, 0, false, 0)),
        rate: Decimal::from_parts(10, 0, 0, false, 2),
    },
    TaxBracket {
        limit: Some(Decimal::from_parts(10060, 0, 0, false, 0)),
        rate: Decimal::from_parts(14, 0, 0, false, 2),
    },
    TaxBracket {
        limit: Some(Decimal::from_parts(16150, 0, 0, false, 0)),
        rate: Decimal::from_parts(20, 0, 0, false, 2),
    },
    TaxBracket {
        limit: Some(Decimal::from_parts(22440, 0, 0, false, 0)),
        rate: Decimal::from_parts(31, 0, 0, false, 2),
    },
    TaxBracket {
        limit: Some(Decimal::from_parts(46690, 0, 0, false, 0)),
        rate: Decimal::from_parts(35, 0, 0, false, 2),
    },
    TaxBracket {
        limit: Some(Decimal::from_parts(60130, 0, 0, false, 0)),
        rate: Decimal::from_parts(47, 0, 0, false, 2),
    },
    TaxBracket {
        limit: None,
        rate: Decimal::from_parts(50, 0, 0, false, 2),
    },
];

/// Monthly offset per tax credit point.
const CREDIT_POINT_VALUE: Decimal = Decimal::from_parts(242, 0, 0, false, 0);

/// Employer pension contribution rate.
const PENSION_EMPLOYER_RATE: Decimal = Decimal::from_parts(65, 0, 0, false, 3);

/// Employer severance fund rate.
const SEVERANCE_RATE: Decimal = Decimal::from_parts(6, 0, 0, false, 2);

/// Income up to this amount pays the reduced social insurance rate.
const SOCIAL_REDUCED_CAP: Decimal = Decimal::from_parts(7522, 0, 0, false, 0);
const SOCIAL_REDUCED_RATE: Decimal = Decimal::from_parts(35, 0, 0, false, 3);
const SOCIAL_FULL_RATE: Decimal = Decimal::from_parts(12, 0, 0, false, 2);

const HALF: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// Aggregates one salary cycle into a [`SalarySummary`].
///
/// Sick pay is recomputed here over the whole period: the run counter
/// escalates from unpaid through half pay on the second and third day to
/// full pay afterwards, and resets whenever a non-sick shift interrupts
/// the run. Each shift's `earned` value contributes to the taxable gross
/// as-is; travel is a flat allowance per work day, added after deductions.
///
/// # Example
///
/// ```
/// use shiftpay_engine::calculation::calculate_net_salary;
/// use shiftpay_engine::config::Configuration;
///
/// let summary = calculate_net_salary(&[], &Configuration::default());
/// assert_eq!(summary.net, 0);
/// assert_eq!(summary.total_hours.to_string(), "0.0");
/// ```
pub fn calculate_net_salary(shifts: &[EvaluatedShift], config: &Configuration) -> SalarySummary {
    let mut ordered: Vec<&EvaluatedShift> = shifts.iter().collect();
    ordered.sort_by_key(|shift| shift.date);

    let mut sickness_pay = Decimal::ZERO;
    let mut sick_run = 0u32;
    for shift in &ordered {
        if shift.record.shift_type.is_sick() {
            sick_run += 1;
            let daily = shift.record.total_hours * config.hourly_rate;
            sickness_pay += match sick_run {
                1 => Decimal::ZERO,
                2 | 3 => daily * HALF,
                _ => daily,
            };
        } else {
            sick_run = 0;
        }
    }

    let work_gross: Decimal = ordered
        .iter()
        .filter(|shift| !shift.record.shift_type.is_sick())
        .map(|shift| shift.earned)
        .sum();

    let work_days = ordered
        .iter()
        .filter(|shift| shift.record.shift_type == ShiftType::Work)
        .count();
    let travel = config.travel_daily * Decimal::from(work_days as u64);

    let gross_for_tax = work_gross + sickness_pay;
    let pension_employee = gross_for_tax * config.pension_rate;
    let pension_employer = gross_for_tax * PENSION_EMPLOYER_RATE;
    let severance_employer = gross_for_tax * SEVERANCE_RATE;

    let taxable = gross_for_tax - pension_employee;
    let tax = income_tax(taxable, config.credit_points);
    let social = social_insurance(gross_for_tax);

    let net = gross_for_tax - tax - social - pension_employee + travel + config.monthly_bonus;

    let mut total_hours: Decimal = ordered
        .iter()
        .map(|shift| shift.record.total_hours)
        .sum::<Decimal>()
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    total_hours.rescale(1);

    let current_bracket_index = TAX_BRACKETS
        .iter()
        .position(|bracket| bracket.limit.is_none_or(|limit| taxable <= limit))
        .unwrap_or(TAX_BRACKETS.len() - 1);

    SalarySummary {
        net: to_currency(net),
        gross: to_currency(gross_for_tax + travel),
        tax: to_currency(tax),
        social: to_currency(social),
        pension_employee: to_currency(pension_employee),
        pension_employer: to_currency(pension_employer),
        severance_employer: to_currency(severance_employer),
        sickness_pay: to_currency(sickness_pay),
        travel: to_currency(travel),
        total_hours,
        shift_count: shifts.len() as u32,
        tax_info: TaxInfo {
            taxable,
            current_bracket_index,
            next_bracket_limit: TAX_BRACKETS[current_bracket_index].limit,
            brackets: TAX_BRACKETS.to_vec(),
        },
    }
}

/// Progressive income tax on `taxable`, less the credit point offset.
fn income_tax(taxable: Decimal, credit_points: Decimal) -> Decimal {
    let mut total = Decimal::ZERO;
    let mut lower = Decimal::ZERO;

    for bracket in &TAX_BRACKETS {
        let upper = bracket.limit.unwrap_or(Decimal::MAX);
        let slice = (taxable.min(upper) - lower).max(Decimal::ZERO);
        total += slice * bracket.rate;
        lower = upper;
    }

    let credit = credit_points * CREDIT_POINT_VALUE;
    (total - credit).max(Decimal::ZERO)
}

/// Social insurance: a reduced rate up to the cap, the full rate above.
fn social_insurance(gross: Decimal) -> Decimal {
    let reduced = gross.min(SOCIAL_REDUCED_CAP) * SOCIAL_REDUCED_RATE;
    let full = (gross - SOCIAL_REDUCED_CAP).max(Decimal::ZERO) * SOCIAL_FULL_RATE;
    reduced + full
}

/// Rounds a money amount to whole currency, halves away from zero.
fn to_currency(value: Decimal) -> i64 {
    value
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or(0)
}
