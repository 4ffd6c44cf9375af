//! Yearly aggregation across salary months.

use rust_decimal::Decimal;

use crate::calculation::earnings::evaluate_shift;
use crate::calculation::net_salary::calculate_net_salary;
use crate::calculation::salary_cycle::salary_month_for;
use crate::config::Configuration;
use crate::models::{EvaluatedShift, MonthlySummary, ShiftCollection, YearlyStats, YearlyTotals};

/// Builds the twelve-month view for one salary year.
///
/// Every shift is routed to the salary month its pay lands in, so days
/// past the cycle start count toward the following month and late
/// December spills into the next year. Months without shifts still get a
/// zeroed row; the best month considers only months that had any.
pub fn aggregate_yearly(
    shifts: &ShiftCollection,
    config: &Configuration,
    year: i32,
) -> YearlyStats {
    let mut buckets: Vec<Vec<EvaluatedShift>> = vec![Vec::new(); 12];

    for (date, record) in shifts {
        let (salary_year, salary_month) = salary_month_for(*date, config.salary_start_day);
        if salary_year == year {
            buckets[(salary_month - 1) as usize].push(EvaluatedShift {
                date: *date,
                record: record.clone(),
                earned: evaluate_shift(*date, record, shifts, config).pay,
            });
        }
    }

    let monthly_summaries: Vec<MonthlySummary> = buckets
        .iter()
        .enumerate()
        .map(|(index, bucket)| {
            let month = index as u32 + 1;
            let summary = calculate_net_salary(bucket, config);
            MonthlySummary {
                month,
                year,
                label: format!("{:04}-{:02}", year, month),
                net: summary.net,
                gross: summary.gross,
                hours: summary.total_hours,
                shift_count: summary.shift_count,
                tax: summary.tax,
            }
        })
        .collect();

    let yearly_totals = YearlyTotals {
        net: monthly_summaries.iter().map(|row| row.net).sum(),
        gross: monthly_summaries.iter().map(|row| row.gross).sum(),
        hours: monthly_summaries.iter().map(|row| row.hours).sum::<Decimal>(),
        shift_count: monthly_summaries.iter().map(|row| row.shift_count).sum(),
    };

    let mut best_month: Option<&MonthlySummary> = None;
    for row in monthly_summaries.iter().filter(|row| row.shift_count > 0) {
        if best_month.is_none_or(|best| row.net > best.net) {
            best_month = Some(row);
        }
    }

    YearlyStats {
        best_month: best_month.cloned(),
        monthly_summaries,
        yearly_totals,
    }
}
