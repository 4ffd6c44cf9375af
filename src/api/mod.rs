//! HTTP API module for the Salary Calculation Engine.
//!
//! This module provides the REST API endpoints for monthly salary
//! calculation, overtime breakdowns and yearly statistics.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{BreakdownRequest, CalculateRequest, PredictRequest, YearlyRequest};
pub use response::{ApiError, ValidationResponse};
pub use state::AppState;
