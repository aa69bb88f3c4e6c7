//! Scalar smoothing interface
//!
//! Implemented by [`EmaForecaster`](crate::EmaForecaster) and
//! [`Kalman1D`](crate::Kalman1D).

/// Online estimator that folds one scalar observation at a time
pub trait ScalarSmoother {
    /// Feed an observation and return the updated estimate
    fn update(&mut self, value: f32) -> f32;

    /// Current estimate, `None` until the first observation
    fn estimate(&self) -> Option<f32>;

    /// Whether at least one observation has been folded in
    fn is_initialized(&self) -> bool {
        self.estimate().is_some()
    }

    /// Short human readable name, used in error messages
    fn name(&self) -> &'static str;
}
