//! Application state for the Salary Calculation Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::Configuration;

/// Shared application state.
///
/// Holds the default configuration applied to requests that do not
/// carry a configuration of their own.
#[derive(Clone)]
pub struct AppState {
    /// The fallback configuration.
    defaults: Arc<Configuration>,
}

impl AppState {
    /// Creates a new application state with the given default configuration.
    pub fn new(defaults: Configuration) -> Self {
        Self {
            defaults: Arc::new(defaults),
        }
    }

    /// Returns a reference to the default configuration.
    pub fn defaults(&self) -> &Configuration {
        &self.defaults
    }
}
