//! Shift record models for the Salary Calculation Engine.
//!
//! This module contains the [`ShiftRecord`] type describing one logged
//! calendar day, the [`ShiftType`] enumeration, and the [`EvaluatedShift`]
//! wrapper produced once earnings have been attached by the calculation
//! layer.
//!
//! Stored data uses the Hebrew type labels of the original mobile app
//! (`"עבודה"` for work, `"שבת"` for sabbath, `"מחלה"` for sick, `"חופש"`
//! for vacation), so the serde representation keeps those spellings for
//! backward-compatible interchange. English aliases are accepted on input.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The full shift store: one record per calendar day, keyed by date.
///
/// A `BTreeMap` keeps iteration in ascending date order, which the sick-day
/// sequencing and yearly bucketing rely on.
pub type ShiftCollection = BTreeMap<NaiveDate, ShiftRecord>;

/// The kind of activity logged for a day.
///
/// This is a closed enumeration; the calculation rules branch on it for
/// travel allowance (work only), sick-pay escalation (sick only), and
/// timed-versus-fixed hours.
///
/// # Example
///
/// ```
/// use shiftpay_engine::models::ShiftType;
///
/// let json = serde_json::to_string(&ShiftType::Work).unwrap();
/// assert_eq!(json, "\"עבודה\"");
///
/// let parsed: ShiftType = serde_json::from_str("\"work\"").unwrap();
/// assert_eq!(parsed, ShiftType::Work);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ShiftType {
    /// A regular work shift. The only type that earns the daily travel allowance.
    #[default]
    #[serde(rename = "עבודה", alias = "work")]
    Work,
    /// A sabbath/weekend shift, typically logged with a premium `hourlyPercent`.
    #[serde(rename = "שבת", alias = "sabbath")]
    Sabbath,
    /// A sick day, paid by the consecutive-day escalation rule.
    #[serde(rename = "מחלה", alias = "sick")]
    Sick,
    /// A vacation day, paid at the tiered rate with no travel allowance.
    #[serde(rename = "חופש", alias = "vacation")]
    Vacation,
}

impl ShiftType {
    /// Returns true for types whose hours derive from start/end times.
    ///
    /// Sick and vacation days carry a fixed 8.00-hour block instead.
    pub fn is_timed(self) -> bool {
        matches!(self, ShiftType::Work | ShiftType::Sabbath)
    }

    /// Returns true for sick days.
    pub fn is_sick(self) -> bool {
        self == ShiftType::Sick
    }
}

/// One calendar day's logged activity.
///
/// Records are persisted keyed by date (see [`ShiftCollection`]); the date
/// itself is not part of the stored value. All numeric fields tolerate the
/// number-or-string shapes found in historical stored data and coerce
/// garbage to zero rather than failing deserialization.
///
/// The earned amount for a shift is never stored here: it is derived on
/// demand by the calculation layer from these fields plus the current
/// configuration.
///
/// # Example
///
/// ```
/// use shiftpay_engine::models::{ShiftRecord, ShiftType};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let json = r#"{
///     "type": "עבודה",
///     "startTime": "08:00",
///     "endTime": "16:00",
///     "totalHours": "8.00",
///     "hourlyPercent": 100,
///     "bonus": 0
/// }"#;
///
/// let record: ShiftRecord = serde_json::from_str(json).unwrap();
/// assert_eq!(record.shift_type, ShiftType::Work);
/// assert_eq!(record.total_hours, Decimal::from_str("8.00").unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftRecord {
    /// The kind of activity logged for the day.
    #[serde(rename = "type", default)]
    pub shift_type: ShiftType,
    /// Wall-clock start time as `HH:MM`, meaningful only for timed types.
    #[serde(default)]
    pub start_time: String,
    /// Wall-clock end time as `HH:MM`; earlier than start means overnight wrap.
    #[serde(default)]
    pub end_time: String,
    /// Decimal hours for the shift, derived from the times or fixed at 8.00.
    #[serde(default, with = "super::numeric::lenient")]
    pub total_hours: Decimal,
    /// Percentage scaling the base hourly rate (100 = unmodified).
    #[serde(default = "default_hourly_percent", with = "super::numeric::lenient")]
    pub hourly_percent: Decimal,
    /// Flat currency amount added on top of the tiered pay.
    #[serde(default, with = "super::numeric::lenient")]
    pub bonus: Decimal,
}

fn default_hourly_percent() -> Decimal {
    Decimal::ONE_HUNDRED
}

impl Default for ShiftRecord {
    fn default() -> Self {
        Self {
            shift_type: ShiftType::Work,
            start_time: String::new(),
            end_time: String::new(),
            total_hours: Decimal::ZERO,
            hourly_percent: default_hourly_percent(),
            bonus: Decimal::ZERO,
        }
    }
}

/// A shift record with its calendar date and computed earnings attached.
///
/// Produced by the cycle and yearly aggregators. The `earned` amount is the
/// taxable pay for the shift and excludes the daily travel allowance, which
/// the net salary engine accounts for separately as a non-taxable line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluatedShift {
    /// The calendar date the record was stored under.
    pub date: NaiveDate,
    /// The stored shift record.
    #[serde(flatten)]
    pub record: ShiftRecord,
    /// Taxable earnings for the shift, excluding travel allowance.
    #[serde(default, with = "super::numeric::lenient")]
    pub earned: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    /// SH-001: full record deserializes with Hebrew type label
    #[test]
    fn test_deserialize_full_record() {
        let json = r#"{
            "type": "שבת",
            "startTime": "16:00",
            "endTime": "00:00",
            "totalHours": "8.00",
            "hourlyPercent": "150",
            "bonus": 50
        }"#;

        let record: ShiftRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.shift_type, ShiftType::Sabbath);
        assert_eq!(record.start_time, "16:00");
        assert_eq!(record.end_time, "00:00");
        assert_eq!(record.total_hours, dec("8.00"));
        assert_eq!(record.hourly_percent, dec("150"));
        assert_eq!(record.bonus, dec("50"));
    }

    /// SH-002: a record with only a type must not fail, all other fields default
    #[test]
    fn test_deserialize_minimal_record_uses_defaults() {
        let record: ShiftRecord = serde_json::from_str(r#"{"type": "עבודה"}"#).unwrap();
        assert_eq!(record.shift_type, ShiftType::Work);
        assert_eq!(record.start_time, "");
        assert_eq!(record.total_hours, Decimal::ZERO);
        assert_eq!(record.hourly_percent, dec("100"));
        assert_eq!(record.bonus, Decimal::ZERO);
    }

    /// SH-003: garbage numeric fields coerce to zero instead of failing
    #[test]
    fn test_deserialize_garbage_numbers_coerce_to_zero() {
        let json = r#"{
            "type": "עבודה",
            "totalHours": "lots",
            "bonus": null
        }"#;

        let record: ShiftRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.total_hours, Decimal::ZERO);
        assert_eq!(record.bonus, Decimal::ZERO);
    }

    /// SH-004: serialization round-trips through the Hebrew labels
    #[test]
    fn test_serialize_round_trip() {
        let record = ShiftRecord {
            shift_type: ShiftType::Sick,
            start_time: "08:00".to_string(),
            end_time: "16:00".to_string(),
            total_hours: dec("8.00"),
            hourly_percent: dec("100"),
            bonus: Decimal::ZERO,
        };

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"type\":\"מחלה\""));
        assert!(json.contains("\"startTime\":\"08:00\""));
        assert!(json.contains("\"totalHours\":8.0"));

        let back: ShiftRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    /// SH-005: English aliases are accepted on input
    #[test]
    fn test_english_aliases_accepted() {
        let record: ShiftRecord = serde_json::from_str(r#"{"type": "vacation"}"#).unwrap();
        assert_eq!(record.shift_type, ShiftType::Vacation);

        let record: ShiftRecord = serde_json::from_str(r#"{"type": "sabbath"}"#).unwrap();
        assert_eq!(record.shift_type, ShiftType::Sabbath);
    }

    #[test]
    fn test_timed_and_sick_helpers() {
        assert!(ShiftType::Work.is_timed());
        assert!(ShiftType::Sabbath.is_timed());
        assert!(!ShiftType::Sick.is_timed());
        assert!(!ShiftType::Vacation.is_timed());

        assert!(ShiftType::Sick.is_sick());
        assert!(!ShiftType::Work.is_sick());
    }

    #[test]
    fn test_shift_collection_keyed_by_date() {
        let json = r#"{
            "2026-03-09": {"type": "עבודה", "totalHours": 8},
            "2026-03-10": {"type": "מחלה", "totalHours": 8}
        }"#;

        let shifts: ShiftCollection = serde_json::from_str(json).unwrap();
        assert_eq!(shifts.len(), 2);
        assert_eq!(
            shifts.get(&make_date("2026-03-10")).unwrap().shift_type,
            ShiftType::Sick
        );

        // BTreeMap iterates in ascending date order
        let dates: Vec<NaiveDate> = shifts.keys().copied().collect();
        assert_eq!(dates, vec![make_date("2026-03-09"), make_date("2026-03-10")]);
    }

    #[test]
    fn test_evaluated_shift_flattens_record() {
        let evaluated = EvaluatedShift {
            date: make_date("2026-03-10"),
            record: ShiftRecord {
                total_hours: dec("8"),
                ..ShiftRecord::default()
            },
            earned: dec("400"),
        };

        let json = serde_json::to_value(&evaluated).unwrap();
        assert_eq!(json["date"], "2026-03-10");
        assert_eq!(json["type"], "עבודה");
        assert_eq!(json["totalHours"], 8.0);
        assert_eq!(json["earned"], 400.0);

        let back: EvaluatedShift = serde_json::from_value(json).unwrap();
        assert_eq!(back, evaluated);
    }
}
