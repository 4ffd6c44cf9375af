//! Salary Calculation Engine for hourly shift workers
//!
//! This crate calculates monthly net salary from recorded shifts: tiered
//! overtime, statutory sick pay, income tax brackets, social insurance and
//! pension contributions, plus yearly statistics and end-of-month predictions.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
