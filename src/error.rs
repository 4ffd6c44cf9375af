//! Error types for the Salary Calculation Engine.
//!
//! The calculation core is total over its inputs: malformed shift data is
//! coerced to zeros rather than rejected, so the calculation functions
//! themselves never fail. Errors only arise at the edges, when parsing
//! date strings, when mutating an overtime tier schedule, or when
//! serializing a backup payload.
//!
//! # Example
//!
//! ```
//! use shiftpay_engine::error::EngineError;
//!
//! let error = EngineError::InvalidDate {
//!     value: "2026-13-40".to_string(),
//! };
//!
//! assert_eq!(error.to_string(), "Invalid date '2026-13-40': expected YYYY-MM-DD");
//! ```

use thiserror::Error;

/// Errors that can occur at the boundaries of the salary engine.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A date string did not match the `YYYY-MM-DD` calendar format.
    #[error("Invalid date '{value}': expected YYYY-MM-DD")]
    InvalidDate {
        /// The string that failed to parse.
        value: String,
    },

    /// An overtime tier schedule mutation would leave the schedule invalid.
    #[error("Invalid tier schedule: {reason}")]
    InvalidTierSchedule {
        /// Why the mutation was rejected.
        reason: String,
    },

    /// A backup payload could not be serialized or deserialized.
    #[error("Backup payload error: {source}")]
    Serialization {
        /// The underlying JSON error.
        #[from]
        source: serde_json::Error,
    },
}

/// Convenience type alias for results with [`EngineError`].
pub type EngineResult<T> = Result<T, EngineError>;
