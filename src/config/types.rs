//! Configuration types for the salary engine.
//!
//! This module contains the strongly-typed [`Configuration`] value object
//! deserialized from the JSON-shaped stored settings, plus its component
//! types. Field defaults mirror the seed configuration the original app
//! writes on first run, so a partially stored object merges into a usable
//! whole exactly as before.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::ShiftType;

/// One overtime band: hours in `[from, to)` pay `multiplier` times the
/// base rate. The open-ended band has `to = None` and must come last.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OvertimeTier {
    /// Hour offset where the band starts.
    #[serde(default, with = "crate::models::numeric::lenient")]
    pub from: Decimal,
    /// Hour offset where the band ends; `None` for the open-ended band.
    #[serde(default, with = "crate::models::numeric::lenient_option")]
    pub to: Option<Decimal>,
    /// Pay multiplier for hours inside the band.
    #[serde(default = "default_tier_multiplier", with = "crate::models::numeric::lenient")]
    pub multiplier: Decimal,
}

/// A reusable start/end time pair for quick shift entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftPreset {
    /// Display name of the preset.
    pub name: String,
    /// Start time as `HH:MM`.
    pub start_time: String,
    /// End time as `HH:MM`.
    pub end_time: String,
}

/// A saved shift template: a named bundle of field values applied to a
/// record in one step. Absent fields leave the record's values untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftTemplate {
    /// Display name of the template.
    #[serde(default)]
    pub name: String,
    /// Shift type to apply, if any.
    #[serde(rename = "type", default)]
    pub shift_type: Option<ShiftType>,
    /// Start time to apply, if any.
    #[serde(default)]
    pub start_time: Option<String>,
    /// End time to apply, if any.
    #[serde(default)]
    pub end_time: Option<String>,
    /// Hourly percentage to apply, if any.
    #[serde(default, with = "crate::models::numeric::lenient_option")]
    pub hourly_percent: Option<Decimal>,
    /// Bonus amount to apply, if any.
    #[serde(default, with = "crate::models::numeric::lenient_option")]
    pub bonus: Option<Decimal>,
}

/// The per-user settings object, long-lived and mutated only through
/// explicit settings updates.
///
/// Numeric fields tolerate the number-or-string shapes of historical
/// stored data. Range checks live in [`validate_configuration`], not here:
/// the calculation engine assumes a previously validated or defaulted
/// configuration.
///
/// [`validate_configuration`]: crate::config::validate_configuration
///
/// # Example
///
/// ```
/// use shiftpay_engine::config::Configuration;
///
/// let config: Configuration = serde_json::from_str(r#"{"hourlyRate": "55"}"#).unwrap();
/// assert_eq!(config.hourly_rate.to_string(), "55");
/// // Missing fields fall back to the seed defaults
/// assert_eq!(config.salary_start_day, 25);
/// assert_eq!(config.overtime_tiers.len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    /// Display name of the user.
    #[serde(default = "default_user_name")]
    pub user_name: String,
    /// Base pay per hour.
    #[serde(default = "default_hourly_rate", with = "crate::models::numeric::lenient")]
    pub hourly_rate: Decimal,
    /// Day of month the salary cycle starts on (1-31).
    #[serde(default = "default_salary_start_day", deserialize_with = "crate::models::numeric::lenient_day")]
    pub salary_start_day: u32,
    /// Day of month the salary cycle ends on (1-31).
    #[serde(default = "default_salary_end_day", deserialize_with = "crate::models::numeric::lenient_day")]
    pub salary_end_day: u32,
    /// Whether a break is deducted from shifts longer than six hours.
    #[serde(default = "default_true")]
    pub is_break_deducted: bool,
    /// Break length in minutes, applied when `is_break_deducted` is set.
    #[serde(default = "default_break_deduction", with = "crate::models::numeric::lenient")]
    pub break_deduction: Decimal,
    /// Travel allowance per work day, a non-taxable pass-through.
    #[serde(default = "default_travel_daily", with = "crate::models::numeric::lenient")]
    pub travel_daily: Decimal,
    /// Monthly net earnings goal.
    #[serde(default = "default_monthly_goal", with = "crate::models::numeric::lenient")]
    pub monthly_goal: Decimal,
    /// Fixed bonus added to each month's net.
    #[serde(default, with = "crate::models::numeric::lenient")]
    pub monthly_bonus: Decimal,
    /// Tax credit points (0-10); each point offsets a fixed monthly amount.
    #[serde(default = "default_credit_points", with = "crate::models::numeric::lenient")]
    pub credit_points: Decimal,
    /// Employee pension contribution as a fraction of taxable gross (0-1).
    #[serde(default = "default_pension_rate", with = "crate::models::numeric::lenient")]
    pub pension_rate: Decimal,
    /// Legacy single-threshold overtime start, used only when no tiers exist.
    #[serde(default = "default_overtime_start_threshold", with = "crate::models::numeric::lenient_option")]
    pub overtime_start_threshold: Option<Decimal>,
    /// Legacy overtime multiplier paired with the threshold above.
    #[serde(default = "default_overtime_multiplier", with = "crate::models::numeric::lenient_option")]
    pub overtime_multiplier: Option<Decimal>,
    /// The overtime tier schedule.
    #[serde(default = "default_overtime_tiers")]
    pub overtime_tiers: Vec<OvertimeTier>,
    /// Saved shift templates.
    #[serde(default)]
    pub shift_templates: Vec<ShiftTemplate>,
    /// Quick-entry time presets.
    #[serde(default = "default_presets")]
    pub presets: Vec<ShiftPreset>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            user_name: default_user_name(),
            hourly_rate: default_hourly_rate(),
            salary_start_day: default_salary_start_day(),
            salary_end_day: default_salary_end_day(),
            is_break_deducted: true,
            break_deduction: default_break_deduction(),
            travel_daily: default_travel_daily(),
            monthly_goal: default_monthly_goal(),
            monthly_bonus: Decimal::ZERO,
            credit_points: default_credit_points(),
            pension_rate: default_pension_rate(),
            overtime_start_threshold: default_overtime_start_threshold(),
            overtime_multiplier: default_overtime_multiplier(),
            overtime_tiers: default_overtime_tiers(),
            shift_templates: Vec::new(),
            presets: default_presets(),
        }
    }
}

fn default_user_name() -> String {
    "משתמש".to_string()
}

fn default_hourly_rate() -> Decimal {
    Decimal::new(40, 0)
}

fn default_salary_start_day() -> u32 {
    25
}

fn default_salary_end_day() -> u32 {
    24
}

fn default_true() -> bool {
    true
}

fn default_break_deduction() -> Decimal {
    Decimal::new(30, 0)
}

fn default_travel_daily() -> Decimal {
    Decimal::new(2260, 2)
}

fn default_monthly_goal() -> Decimal {
    Decimal::new(10000, 0)
}

fn default_credit_points() -> Decimal {
    Decimal::new(225, 2)
}

fn default_pension_rate() -> Decimal {
    Decimal::new(6, 2)
}

fn default_overtime_start_threshold() -> Option<Decimal> {
    Some(Decimal::new(9, 0))
}

fn default_overtime_multiplier() -> Option<Decimal> {
    Some(Decimal::new(125, 2))
}

fn default_tier_multiplier() -> Decimal {
    Decimal::ONE
}

/// The seed overtime tier schedule: regular pay up to hour 8, 125% to
/// hour 10, then 140% onward.
pub fn default_overtime_tiers() -> Vec<OvertimeTier> {
    vec![
        OvertimeTier {
            from: Decimal::ZERO,
            to: Some(Decimal::new(8, 0)),
            multiplier: Decimal::ONE,
        },
        OvertimeTier {
            from: Decimal::new(8, 0),
            to: Some(Decimal::new(10, 0)),
            multiplier: Decimal::new(125, 2),
        },
        OvertimeTier {
            from: Decimal::new(10, 0),
            to: Some(Decimal::new(12, 0)),
            multiplier: Decimal::new(14, 1),
        },
        OvertimeTier {
            from: Decimal::new(12, 0),
            to: None,
            multiplier: Decimal::new(14, 1),
        },
    ]
}

fn default_presets() -> Vec<ShiftPreset> {
    vec![
        ShiftPreset {
            name: "בוקר".to_string(),
            start_time: "08:00".to_string(),
            end_time: "16:00".to_string(),
        },
        ShiftPreset {
            name: "רגיל".to_string(),
            start_time: "08:00".to_string(),
            end_time: "17:00".to_string(),
        },
        ShiftPreset {
            name: "ערב".to_string(),
            start_time: "16:00".to_string(),
            end_time: "00:00".to_string(),
        },
    ]
}
