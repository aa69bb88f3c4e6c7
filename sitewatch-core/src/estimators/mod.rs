//! Scalar Online Estimators
//!
//! Three independent estimators, each owned by its caller and fed one
//! observation at a time:
//!
//! | Estimator | Input | Output | State |
//! |-----------|-------|--------|-------|
//! | [`EmaForecaster`] | any scalar | smoothed level, flat forecast | level |
//! | [`Kalman1D`] | noisy measurement | filtered estimate + variance | `x`, `p` |
//! | [`EtaEstimator`] | speed (m/s) | seconds to cover a distance | speed window |
//!
//! None of them allocate after construction, block, or read the clock.
//! They are not synchronized; share one between threads behind a mutex.
//!
//! ## Choosing a smoother
//!
//! - **EMA** when the signal is roughly stationary and a single tuning knob
//!   is enough.
//! - **Kalman** when the caller also needs to know how settled the estimate
//!   is, or when process and sensor noise are known separately.

pub mod ema;
pub mod eta;
pub mod kalman;

pub use ema::{EmaConfig, EmaForecaster};
pub use eta::{EtaConfig, EtaEstimator};
pub use kalman::{Kalman1D, KalmanConfig, KalmanState};
