//! Request types for the Salary Calculation Engine API.
//!
//! This module defines the JSON request structures for the calculation
//! endpoints. Shift data and configuration travel in the same camelCase
//! shapes the storage layer uses, so a client can forward stored data
//! untouched.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::Configuration;
use crate::models::ShiftCollection;

/// Request body for the `/calculate` and `/cycle` endpoints.
///
/// Carries the full shift collection; the engine selects the shifts
/// whose pay lands in the requested salary month.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateRequest {
    /// All recorded shifts, keyed by date.
    #[serde(default)]
    pub shifts: ShiftCollection,
    /// Configuration override; the server defaults apply when absent.
    #[serde(default)]
    pub config: Option<Configuration>,
    /// Salary year to calculate.
    pub year: i32,
    /// Salary month to calculate (1-12).
    pub month: u32,
}

/// Request body for the `/breakdown` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownRequest {
    /// Paid hours to split across the overtime bands.
    #[serde(default, with = "crate::models::numeric::lenient")]
    pub hours: Decimal,
    /// Base hourly rate.
    #[serde(default, with = "crate::models::numeric::lenient")]
    pub rate: Decimal,
    /// Pay fraction, where 1 is full pay.
    #[serde(default = "default_percent", with = "crate::models::numeric::lenient")]
    pub percent: Decimal,
    /// Configuration override; the server defaults apply when absent.
    #[serde(default)]
    pub config: Option<Configuration>,
}

fn default_percent() -> Decimal {
    Decimal::ONE
}

/// Request body for the `/yearly` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlyRequest {
    /// All recorded shifts, keyed by date.
    #[serde(default)]
    pub shifts: ShiftCollection,
    /// Configuration override; the server defaults apply when absent.
    #[serde(default)]
    pub config: Option<Configuration>,
    /// Salary year to aggregate.
    pub year: i32,
}

/// Request body for the `/predict` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictRequest {
    /// Shifts recorded so far this month.
    pub shift_count: u32,
    /// Net earned so far this month.
    pub net: i64,
    /// Day the projection is made from, `YYYY-MM-DD`; today when absent.
    #[serde(default)]
    pub reference_date: Option<String>,
}
