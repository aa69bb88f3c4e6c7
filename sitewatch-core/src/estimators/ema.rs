//! Exponential moving average forecaster
//!
//! ```text
//! L₁ = y₁
//! Lₜ = α·yₜ + (1 - α)·Lₜ₋₁
//! ŷₜ₊ₕ = Lₜ   for every horizon h
//! ```
//!
//! The first observation seeds the level directly instead of blending with
//! zero, so there is no cold-start bias. There is no trend term, so the
//! forecast is flat.

use crate::{
    constants::DEFAULT_EMA_ALPHA,
    errors::{EstimatorError, EstimatorResult},
    traits::ScalarSmoother,
};

/// EMA configuration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EmaConfig {
    /// Smoothing factor in (0, 1]; higher reacts faster
    pub alpha: f32,
}

impl Default for EmaConfig {
    fn default() -> Self {
        Self { alpha: DEFAULT_EMA_ALPHA }
    }
}

impl EmaConfig {
    /// Set the smoothing factor
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    /// Check `0 < alpha <= 1`
    pub fn validate(&self) -> EstimatorResult<()> {
        // Negated comparison so NaN is rejected too
        if !(self.alpha > 0.0 && self.alpha <= 1.0) {
            return Err(EstimatorError::invalid("alpha", self.alpha, "must be in (0, 1]"));
        }
        Ok(())
    }
}

/// Online exponential moving average with a flat forecast
#[derive(Debug, Clone, PartialEq)]
pub struct EmaForecaster {
    alpha: f32,
    level: Option<f32>,
}

impl EmaForecaster {
    /// Create a forecaster, rejecting an out-of-range `alpha`
    pub fn new(config: EmaConfig) -> EstimatorResult<Self> {
        config.validate()?;
        Ok(Self {
            alpha: config.alpha,
            level: None,
        })
    }

    /// Feed an observation and return the updated level
    pub fn update(&mut self, value: f32) -> f32 {
        let level = match self.level {
            None => value,
            Some(prev) => self.alpha * value + (1.0 - self.alpha) * prev,
        };
        self.level = Some(level);
        level
    }

    /// Forecast `steps` ahead.
    ///
    /// Every horizon maps to the current level. Fails with
    /// [`EstimatorError::NotInitialized`] before the first `update`.
    pub fn predict(&self, _steps: u32) -> EstimatorResult<f32> {
        self.level.ok_or(EstimatorError::NotInitialized {
            estimator: "EmaForecaster",
        })
    }

    /// Current level, if any observation has been seen
    pub fn level(&self) -> Option<f32> {
        self.level
    }

    /// Smoothing factor
    pub fn alpha(&self) -> f32 {
        self.alpha
    }
}

impl ScalarSmoother for EmaForecaster {
    fn update(&mut self, value: f32) -> f32 {
        EmaForecaster::update(self, value)
    }

    fn estimate(&self) -> Option<f32> {
        self.level
    }

    fn name(&self) -> &'static str {
        "EmaForecaster"
    }
}
