//! Pay-rate configuration.
//!
//! The engine applies two fixed hourly rates to every entry. The
//! defaults (15 and 18 per hour) are compiled in; deployments can
//! override them with a small YAML file.

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The two hourly rates applied to every computed entry.
///
/// # Example
///
/// ```no_run
/// use timesheet_engine::config::RatesConfig;
///
/// let rates = RatesConfig::load("./config/rates.yaml")?;
/// println!("standard rate: {}/h", rates.standard);
/// # Ok::<(), timesheet_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatesConfig {
    /// The standard hourly rate.
    pub standard: Decimal,
    /// The premium hourly rate.
    pub premium: Decimal,
}

impl Default for RatesConfig {
    fn default() -> Self {
        Self {
            standard: Decimal::new(15, 0),
            premium: Decimal::new(18, 0),
        }
    }
}

impl RatesConfig {
    /// Loads rates from a YAML file.
    ///
    /// Returns an error if the file is missing or is not valid YAML for
    /// this shape.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path.display().to_string(),
        })?;
        serde_yaml::from_str(&contents).map_err(|err| EngineError::ConfigParseError {
            path: path.display().to_string(),
            message: err.to_string(),
        })
    }
}
