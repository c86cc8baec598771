//! Application state for the timesheet pay engine API.

use std::sync::Arc;

use crate::config::RatesConfig;

/// Shared application state.
///
/// Holds the pay-rate configuration, immutable for the life of the
/// process. Each request reads it; nothing ever writes.
#[derive(Clone)]
pub struct AppState {
    rates: Arc<RatesConfig>,
}

impl AppState {
    /// Creates a new application state with the given rates.
    pub fn new(rates: RatesConfig) -> Self {
        Self {
            rates: Arc::new(rates),
        }
    }

    /// Returns the configured pay rates.
    pub fn rates(&self) -> &RatesConfig {
        &self.rates
    }
}
