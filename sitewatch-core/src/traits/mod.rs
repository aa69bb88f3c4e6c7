//! Core Traits and Abstractions
//!
//! ## Module Organization
//!
//! - [`smoother`] - common interface of the scalar smoothing estimators
//! - [`time`] - time source abstraction used by the risk grid
//!
//! The estimators are independent of each other; these traits only exist so
//! a host can hold "some scalar smoother" or "some clock" generically.
//!
//! ## Usage Example
//!
//! ```rust
//! use sitewatch_core::traits::ScalarSmoother;
//! use sitewatch_core::{EmaForecaster, EmaConfig, Kalman1D, KalmanConfig};
//!
//! fn smooth_all<S: ScalarSmoother>(smoother: &mut S, readings: &[f32]) -> Option<f32> {
//!     for &r in readings {
//!         smoother.update(r);
//!     }
//!     smoother.estimate()
//! }
//!
//! let mut ema = EmaForecaster::new(EmaConfig::default()).unwrap();
//! let mut kf = Kalman1D::new(KalmanConfig::default()).unwrap();
//! assert!(smooth_all(&mut ema, &[20.0, 21.0]).is_some());
//! assert!(smooth_all(&mut kf, &[20.0, 21.0]).is_some());
//! ```

pub mod smoother;
pub mod time;

pub use smoother::ScalarSmoother;
pub use time::TimeSource;
