//! Calculation logic for the salary engine.
//!
//! This module contains all the calculation functions for turning logged
//! shifts into pay, including shift hour computation from start and end
//! times, tiered overtime pricing, sick leave sequencing and pay, per-shift
//! earnings evaluation, salary cycle resolution across month boundaries,
//! monthly net salary aggregation with tax and social insurance, yearly
//! statistics, end-of-month prediction, and goal and trend insights.

mod dates;
mod earnings;
mod insights;
mod net_salary;
mod overtime;
mod prediction;
mod salary_cycle;
mod shift_hours;
mod sick_leave;
mod yearly;

pub use dates::{cycle_contains_day, days_in_month, format_local_date, parse_local_date};
pub use earnings::{ShiftEarnings, evaluate_shift};
pub use insights::{GoalProgress, MonthlyComparison, compare_months, goal_progress};
pub use net_salary::calculate_net_salary;
pub use overtime::{compute_tiered_breakdown, compute_tiered_total};
pub use prediction::predict_end_of_month;
pub use salary_cycle::{filter_shifts_for_salary_cycle, salary_month_for};
pub use shift_hours::{apply_preset, apply_template, compute_total_hours};
pub use sick_leave::{sick_day_sequence, sick_pay_for_sequence};
pub use yearly::aggregate_yearly;
