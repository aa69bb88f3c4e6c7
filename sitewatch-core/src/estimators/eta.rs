//! Arrival time estimation from recent speed samples
//!
//! Speeds are averaged with the harmonic mean of the strictly positive
//! samples in the window:
//!
//! ```text
//! v = n / Σ(1/sᵢ)       sᵢ > 0
//! v = max(v, min_speed)
//! eta = remaining_distance / v
//! ```
//!
//! Time over a fixed distance is dominated by the slow legs, and the
//! harmonic mean weights them accordingly. When no positive sample is
//! available the floor speed is used, so the ETA is always finite.

use crate::{
    buffer::RingBuffer,
    constants::{DEFAULT_MIN_SPEED_MPS, DEFAULT_SPEED_WINDOW},
    errors::{EstimatorError, EstimatorResult},
};

/// ETA estimator configuration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EtaConfig {
    /// Number of recent speed samples kept
    pub window: usize,
    /// Speed floor (m/s) used by [`EtaEstimator::estimate_eta_seconds`]
    pub min_speed: f32,
}

impl Default for EtaConfig {
    fn default() -> Self {
        Self {
            window: DEFAULT_SPEED_WINDOW,
            min_speed: DEFAULT_MIN_SPEED_MPS,
        }
    }
}

impl EtaConfig {
    /// Set the number of retained samples
    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    /// Set the default speed floor
    pub fn with_min_speed(mut self, min_speed: f32) -> Self {
        self.min_speed = min_speed;
        self
    }

    /// Check `window > 0` and `min_speed > 0`
    pub fn validate(&self) -> EstimatorResult<()> {
        if self.window == 0 {
            return Err(EstimatorError::invalid("window", 0.0, "must be positive"));
        }
        if !(self.min_speed > 0.0 && self.min_speed.is_finite()) {
            return Err(EstimatorError::invalid(
                "min_speed",
                self.min_speed,
                "must be positive and finite",
            ));
        }
        Ok(())
    }
}

/// Bounded speed history with harmonic-mean ETA
#[derive(Debug, Clone, PartialEq)]
pub struct EtaEstimator {
    speeds: RingBuffer,
    min_speed: f32,
}

impl EtaEstimator {
    /// Create an estimator with an empty history
    pub fn new(config: EtaConfig) -> EstimatorResult<Self> {
        config.validate()?;
        Ok(Self {
            speeds: RingBuffer::with_capacity(config.window),
            min_speed: config.min_speed,
        })
    }

    /// Record a speed sample in m/s.
    ///
    /// Negative values are stored as zero (stationary). The oldest sample is
    /// evicted once the window is full.
    pub fn update_speed(&mut self, speed_mps: f32) {
        self.speeds.push(speed_mps.max(0.0));
    }

    /// Seconds to cover `remaining_distance_m` using the configured floor
    pub fn estimate_eta_seconds(&self, remaining_distance_m: f32) -> f32 {
        self.estimate_eta_seconds_with_floor(remaining_distance_m, self.min_speed)
    }

    /// Seconds to cover `remaining_distance_m` with an explicit speed floor.
    ///
    /// A non-positive `min_speed` with no usable samples yields an infinite
    /// or NaN ETA; the configured floor is always positive.
    pub fn estimate_eta_seconds_with_floor(&self, remaining_distance_m: f32, min_speed: f32) -> f32 {
        remaining_distance_m / self.effective_speed(min_speed)
    }

    /// Speed the ETA is computed with: clamped harmonic mean, or `min_speed`
    pub fn effective_speed(&self, min_speed: f32) -> f32 {
        match self.harmonic_mean() {
            Some(v) => v.max(min_speed),
            None => {
                log_trace!("no positive speed samples, using floor {} m/s", min_speed);
                min_speed
            }
        }
    }

    /// Harmonic mean of the strictly positive samples
    pub fn harmonic_mean(&self) -> Option<f32> {
        let (count, inverse_sum) = self
            .speeds
            .iter()
            .filter(|&&s| s > 0.0)
            .fold((0usize, 0.0f32), |(n, acc), &s| (n + 1, acc + 1.0 / s));

        if count == 0 {
            None
        } else {
            Some(count as f32 / inverse_sum)
        }
    }

    /// Most recent sample (after clamping), if any
    pub fn latest_speed(&self) -> Option<f32> {
        self.speeds.last()
    }

    /// Forget all samples, e.g. when a new trip starts
    pub fn reset(&mut self) {
        self.speeds.clear();
    }

    /// Retained samples, oldest first
    pub fn samples(&self) -> impl Iterator<Item = f32> + '_ {
        self.speeds.iter().copied()
    }

    /// Number of retained samples
    pub fn len(&self) -> usize {
        self.speeds.len()
    }

    /// True before the first sample
    pub fn is_empty(&self) -> bool {
        self.speeds.is_empty()
    }

    /// Maximum number of retained samples
    pub fn window(&self) -> usize {
        self.speeds.capacity()
    }

    /// Configured speed floor
    pub fn min_speed(&self) -> f32 {
        self.min_speed
    }
}
