//! Lenient serde adapters for numeric fields in stored records.
//!
//! Historical stored data carries numbers inconsistently: as JSON numbers,
//! as numeric strings (`"40"`, `"22.60"`), or as empty/garbage strings from
//! abandoned edits. These adapters accept all of those shapes on input and
//! coerce anything unparseable to zero, so one corrupted field can never
//! poison the aggregation of a whole period. Output is always a plain JSON
//! number.

use rust_decimal::Decimal;
use serde::de::{self, Deserializer, Visitor};
use serde::Serializer;
use std::fmt;
use std::str::FromStr;

/// Serde adapter for required decimal fields: number or numeric string in,
/// plain JSON number out. Unparseable input coerces to zero.
pub(crate) mod lenient {
    use super::*;

    pub fn serialize<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        rust_decimal::serde::float::serialize(value, serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(LenientDecimalVisitor)
    }
}

/// Serde adapter for optional decimal fields. `null` and the empty string
/// deserialize to `None`; everything else follows the [`lenient`] rules.
pub(crate) mod lenient_option {
    use super::*;

    pub fn serialize<S>(value: &Option<Decimal>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        rust_decimal::serde::float_option::serialize(value, serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(LenientOptionVisitor)
    }
}

/// Deserializes a day-of-month stored as a number or numeric string.
/// Unparseable input coerces to 1; range checks belong to config validation.
pub(crate) fn lenient_day<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(LenientDayVisitor)
}

fn decimal_from_str(value: &str) -> Decimal {
    Decimal::from_str(value.trim()).unwrap_or_default()
}

struct LenientDecimalVisitor;

impl<'de> Visitor<'de> for LenientDecimalVisitor {
    type Value = Decimal;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a number or numeric string")
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
        Ok(Decimal::from_f64_retain(value).unwrap_or_default())
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        Ok(Decimal::from(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        Ok(Decimal::from(value))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        Ok(decimal_from_str(value))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Decimal::ZERO)
    }

    fn visit_bool<E: de::Error>(self, _value: bool) -> Result<Self::Value, E> {
        Ok(Decimal::ZERO)
    }
}

struct LenientOptionVisitor;

impl<'de> Visitor<'de> for LenientOptionVisitor {
    type Value = Option<Decimal>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("null, a number, or a numeric string")
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
        Ok(Some(Decimal::from_f64_retain(value).unwrap_or_default()))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        Ok(Some(Decimal::from(value)))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        Ok(Some(Decimal::from(value)))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        if value.trim().is_empty() {
            Ok(None)
        } else {
            Ok(Some(decimal_from_str(value)))
        }
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }
}

struct LenientDayVisitor;

impl<'de> Visitor<'de> for LenientDayVisitor {
    type Value = u32;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a day-of-month number or numeric string")
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
        if value.is_finite() && value >= 1.0 {
            Ok(value.trunc() as u32)
        } else {
            Ok(1)
        }
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        Ok(u32::try_from(value).unwrap_or(1))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        Ok(u32::try_from(value).unwrap_or(1))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        match value.trim().parse::<f64>() {
            Ok(parsed) => self.visit_f64(parsed),
            Err(_) => Ok(1),
        }
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(1)
    }
}
