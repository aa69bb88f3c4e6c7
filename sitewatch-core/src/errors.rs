//! Error Types for the Online Estimators
//!
//! ## Design Philosophy
//!
//! The estimators sit on the hot path of every sensor sample, so the error
//! type follows the same rules as the rest of the crate:
//!
//! 1. **Small Size**: variants only carry `&'static str` names and a single
//!    `f32`, so the enum stays `Copy` and fits in a couple of words.
//!
//! 2. **No Heap Allocation**: nothing here needs `alloc`.
//!
//! 3. **Few Variants**: almost every runtime condition is absorbed by the
//!    estimators themselves (negative speeds are clamped, out-of-range grid
//!    cells are dropped). Only two things are surfaced to the caller.
//!
//! ## Error Categories
//!
//! ### Usage Errors
//! - `NotInitialized`: a forecast was requested before any observation.
//!
//! ### Configuration Errors
//! - `InvalidConfig`: a constructor was handed a parameter outside its
//!   domain (e.g. `alpha = 0`, `window = 0`, negative decay rate).
//!
//! ## Example
//!
//! ```rust
//! use sitewatch_core::{EmaForecaster, EmaConfig, EstimatorError};
//!
//! let ema = EmaForecaster::new(EmaConfig::default()).unwrap();
//! match ema.predict(1) {
//!     Ok(level) => println!("forecast: {level}"),
//!     Err(EstimatorError::NotInitialized { estimator }) => {
//!         println!("{estimator} has not seen any data yet");
//!     }
//!     Err(e) => println!("unexpected: {e}"),
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for estimator operations
pub type EstimatorResult<T> = Result<T, EstimatorError>;

/// Estimator errors - kept small and `Copy`
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum EstimatorError {
    /// A read or forecast was requested before the first observation
    #[error("{estimator} has no observations yet")]
    NotInitialized {
        /// Name of the estimator that was queried
        estimator: &'static str,
    },

    /// Construction-time parameter outside its valid domain
    #[error("Invalid {parameter} = {value}: {reason}")]
    InvalidConfig {
        /// Name of the offending configuration field
        parameter: &'static str,
        /// Value that was supplied (integers are widened to f32)
        value: f32,
        /// Constraint that was violated
        reason: &'static str,
    },
}

impl EstimatorError {
    pub(crate) fn invalid(parameter: &'static str, value: f32, reason: &'static str) -> Self {
        log_warn!("rejecting configuration: {} = {} ({})", parameter, value, reason);
        Self::InvalidConfig { parameter, value, reason }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for EstimatorError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::NotInitialized { estimator } =>
                defmt::write!(fmt, "{} not initialized", estimator),
            Self::InvalidConfig { parameter, value, reason } =>
                defmt::write!(fmt, "Invalid {} = {}: {}", parameter, value, reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_is_small() {
        assert!(core::mem::size_of::<EstimatorError>() <= 48);
    }

    #[test]
    fn invalid_config_carries_context() {
        let err = EstimatorError::invalid("alpha", 0.0, "must be in (0, 1]");
        assert_eq!(
            err,
            EstimatorError::InvalidConfig {
                parameter: "alpha",
                value: 0.0,
                reason: "must be in (0, 1]",
            }
        );
    }

    #[cfg(feature = "std")]
    #[test]
    fn display_messages() {
        let err = EstimatorError::NotInitialized { estimator: "EmaForecaster" };
        assert_eq!(err.to_string(), "EmaForecaster has no observations yet");

        let err = EstimatorError::invalid("window", 0.0, "must be positive");
        assert_eq!(err.to_string(), "Invalid window = 0: must be positive");
    }
}
