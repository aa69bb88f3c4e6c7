//! One-Dimensional Kalman Filter for Sensor Smoothing
//!
//! ## Overview
//!
//! A constant-position Kalman filter over a single scalar. It tracks both
//! the estimate `x` and its variance `p`, so a caller can tell a settled
//! estimate from a fresh one.
//!
//! ## Filter Equations
//!
//! The state transition and measurement matrices are both 1, which reduces
//! the general filter to:
//!
//! ### 1. Prediction Step
//! ```text
//! x̂ₖ|ₖ₋₁ = xₖ₋₁
//! Pₖ|ₖ₋₁ = Pₖ₋₁ + q
//! ```
//!
//! ### 2. Update Step
//! ```text
//! Kₖ = Pₖ|ₖ₋₁ / (Pₖ|ₖ₋₁ + r)
//! xₖ = xₖ₋₁ + Kₖ·(zₖ - xₖ₋₁)
//! Pₖ = (1 - Kₖ)·Pₖ|ₖ₋₁
//! ```
//!
//! The first measurement initializes `x` directly with `P = initial_variance`.
//!
//! ## Convergence
//!
//! With fixed `q` and `r` the variance sequence is monotone after the first
//! step and converges to the positive root of the scalar Riccati equation:
//!
//! ```text
//! P* = (√(q² + 4qr) - q) / 2
//! ```
//!
//! ## Usage Example
//!
//! ```rust
//! use sitewatch_core::{Kalman1D, KalmanConfig};
//!
//! let config = KalmanConfig::default()
//!     .with_process_noise(1e-3)
//!     .with_measurement_noise(0.1);
//! let mut kf = Kalman1D::new(config).unwrap();
//!
//! for z in [5.2, 4.9, 5.1, 4.8] {
//!     let estimate = kf.update(z);
//!     assert!(estimate > 4.0 && estimate < 6.0);
//! }
//! assert!(kf.variance().unwrap() < 1.0);
//! ```

use crate::{
    constants::{DEFAULT_INITIAL_VARIANCE, DEFAULT_MEASUREMENT_NOISE, DEFAULT_PROCESS_NOISE},
    errors::{EstimatorError, EstimatorResult},
    traits::ScalarSmoother,
};

/// Kalman filter configuration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct KalmanConfig {
    /// Process noise variance (q) - how much the true value moves per step
    pub process_noise: f32,
    /// Measurement noise variance (r) - sensor noise
    pub measurement_noise: f32,
    /// Variance assigned on the first measurement
    pub initial_variance: f32,
}

impl Default for KalmanConfig {
    fn default() -> Self {
        Self {
            process_noise: DEFAULT_PROCESS_NOISE,
            measurement_noise: DEFAULT_MEASUREMENT_NOISE,
            initial_variance: DEFAULT_INITIAL_VARIANCE,
        }
    }
}

impl KalmanConfig {
    /// Set process noise (higher = less trust in the constant model)
    pub fn with_process_noise(mut self, q: f32) -> Self {
        self.process_noise = q;
        self
    }

    /// Set measurement noise (higher = less trust in the sensor)
    pub fn with_measurement_noise(mut self, r: f32) -> Self {
        self.measurement_noise = r;
        self
    }

    /// Set the variance assigned on the first measurement
    pub fn with_initial_variance(mut self, p0: f32) -> Self {
        self.initial_variance = p0;
        self
    }

    /// Check `q > 0`, `r > 0`, `p0 >= 0`, all finite
    pub fn validate(&self) -> EstimatorResult<()> {
        if !(self.process_noise > 0.0 && self.process_noise.is_finite()) {
            return Err(EstimatorError::invalid(
                "process_noise",
                self.process_noise,
                "must be positive and finite",
            ));
        }
        if !(self.measurement_noise > 0.0 && self.measurement_noise.is_finite()) {
            return Err(EstimatorError::invalid(
                "measurement_noise",
                self.measurement_noise,
                "must be positive and finite",
            ));
        }
        if !(self.initial_variance >= 0.0 && self.initial_variance.is_finite()) {
            return Err(EstimatorError::invalid(
                "initial_variance",
                self.initial_variance,
                "must be non-negative and finite",
            ));
        }
        Ok(())
    }

    /// Fixed point of the variance recursion, `(√(q² + 4qr) - q) / 2`
    pub fn steady_state_variance(&self) -> f32 {
        let q = self.process_noise;
        let r = self.measurement_noise;
        (libm::sqrtf(q * q + 4.0 * q * r) - q) / 2.0
    }

    /// Gain the filter settles at, `P*_pred / (P*_pred + r)`
    pub fn steady_state_gain(&self) -> f32 {
        let p_pred = self.steady_state_variance() + self.process_noise;
        p_pred / (p_pred + self.measurement_noise)
    }
}

/// Filter state; the estimate and its variance only exist together
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KalmanState {
    /// No measurement seen yet
    Uninitialized,
    /// Tracking an estimate
    Initialized {
        /// State estimate
        x: f32,
        /// Estimate variance
        p: f32,
    },
}

/// Scalar constant-position Kalman filter
#[derive(Debug, Clone, PartialEq)]
pub struct Kalman1D {
    config: KalmanConfig,
    state: KalmanState,
    /// Gain applied by the most recent update
    last_gain: Option<f32>,
    update_count: u32,
}

impl Kalman1D {
    /// Create a filter, rejecting non-positive noise variances
    pub fn new(config: KalmanConfig) -> EstimatorResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            state: KalmanState::Uninitialized,
            last_gain: None,
            update_count: 0,
        })
    }

    /// Fold in a measurement and return the filtered estimate
    pub fn update(&mut self, z: f32) -> f32 {
        self.update_count = self.update_count.saturating_add(1);

        let (x, p) = match self.state {
            KalmanState::Uninitialized => {
                self.state = KalmanState::Initialized {
                    x: z,
                    p: self.config.initial_variance,
                };
                return z;
            }
            KalmanState::Initialized { x, p } => (x, p),
        };

        // Predict
        let p_pred = p + self.config.process_noise;

        // Update
        let k = p_pred / (p_pred + self.config.measurement_noise);
        let x = x + k * (z - x);
        let p = (1.0 - k) * p_pred;

        self.state = KalmanState::Initialized { x, p };
        self.last_gain = Some(k);
        x
    }

    /// Current state
    pub fn state(&self) -> KalmanState {
        self.state
    }

    /// Current estimate
    pub fn estimate(&self) -> Option<f32> {
        match self.state {
            KalmanState::Initialized { x, .. } => Some(x),
            KalmanState::Uninitialized => None,
        }
    }

    /// Current estimate variance
    pub fn variance(&self) -> Option<f32> {
        match self.state {
            KalmanState::Initialized { p, .. } => Some(p),
            KalmanState::Uninitialized => None,
        }
    }

    /// Gain used by the last update (none after only the initializing measurement)
    pub fn last_gain(&self) -> Option<f32> {
        self.last_gain
    }

    /// Number of measurements folded in since creation or reset
    pub fn update_count(&self) -> u32 {
        self.update_count
    }

    /// Configuration this filter was built with
    pub fn config(&self) -> &KalmanConfig {
        &self.config
    }

    /// Forget the current estimate; the next measurement re-initializes
    pub fn reset(&mut self) {
        self.state = KalmanState::Uninitialized;
        self.last_gain = None;
        self.update_count = 0;
    }
}

impl ScalarSmoother for Kalman1D {
    fn update(&mut self, value: f32) -> f32 {
        Kalman1D::update(self, value)
    }

    fn estimate(&self) -> Option<f32> {
        Kalman1D::estimate(self)
    }

    fn name(&self) -> &'static str {
        "Kalman1D"
    }
}
