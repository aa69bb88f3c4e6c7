//! Online estimators for Sitewatch
//!
//! Turns noisy, irregularly timed sensor observations into smoothed
//! estimates, forecasts and decaying spatial risk summaries for a
//! monitoring dashboard.
//!
//! Four independent components, each owned and driven by the caller:
//! - [`EmaForecaster`] - exponential smoothing with a flat forecast
//! - [`Kalman1D`] - scalar Kalman filter with explicit variance
//! - [`EtaEstimator`] - harmonic-mean ETA from a bounded speed window
//! - [`DecayingRiskGrid`] - 2D risk intensities that fade with time
//!
//! Key constraints:
//! - `no_std` capable; heap storage always comes from `alloc`, and the
//!   `alloc` feature only enables serde's alloc support
//! - No allocation after construction
//! - Purely synchronous; no threads, timers or I/O
//!
//! ```no_run
//! use sitewatch_core::{EmaForecaster, EmaConfig, EtaEstimator, EtaConfig};
//!
//! let mut temperature = EmaForecaster::new(EmaConfig::default()).unwrap();
//! temperature.update(21.4);
//! let next = temperature.predict(1).unwrap();
//!
//! let mut eta = EtaEstimator::new(EtaConfig::default()).unwrap();
//! eta.update_speed(1.4);
//! let seconds = eta.estimate_eta_seconds(250.0);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;

#[macro_use]
mod macros;

pub mod alerts;
pub mod buffer;
pub mod constants;
pub mod errors;
pub mod estimators;
pub mod risk;
pub mod signal;
pub mod time;
pub mod traits;

// Public API
pub use errors::{EstimatorError, EstimatorResult};
pub use estimators::{
    EmaConfig, EmaForecaster,
    EtaConfig, EtaEstimator,
    Kalman1D, KalmanConfig, KalmanState,
};
pub use risk::{DecayingRiskGrid, RiskGridConfig, RiskGridView};
pub use traits::{ScalarSmoother, TimeSource};

#[cfg(feature = "std")]
pub use time::SystemClock;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
