//! Configuration handling for the salary engine.
//!
//! This module owns the user settings object: its typed representation,
//! the overtime tier schedule derived from it, and the validation that
//! guards settings updates.
//!
//! # Example
//!
//! ```
//! use shiftpay_engine::config::{validate_configuration, Configuration};
//!
//! let config = Configuration::default();
//! assert!(validate_configuration(&config).is_empty());
//! ```

mod tiers;
mod types;
mod validation;

pub use tiers::{add_tier, remove_tier, resolve_tier_schedule};
pub use types::{default_overtime_tiers, Configuration, OvertimeTier, ShiftPreset, ShiftTemplate};
pub use validation::{validate_configuration, ValidationIssue};
