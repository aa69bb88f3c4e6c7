//! Estimator Defaults
//!
//! Values chosen for slowly varying environmental signals sampled around
//! once per second.

// ===== EXPONENTIAL MOVING AVERAGE =====

/// Default EMA smoothing factor.
///
/// 0.3 puts roughly 90% of the weight on the last 7 samples. Higher values
/// react faster, lower values smooth harder.
pub const DEFAULT_EMA_ALPHA: f32 = 0.3;

// ===== KALMAN FILTER =====

/// Default process noise variance (q).
///
/// How much the true value is expected to wander between samples.
pub const DEFAULT_PROCESS_NOISE: f32 = 1e-3;

/// Default measurement noise variance (r).
///
/// Sensor noise; ten times the process noise gives a steady-state gain of
/// roughly 0.27.
pub const DEFAULT_MEASUREMENT_NOISE: f32 = 1e-2;

/// Variance assigned to the state on the first measurement.
pub const DEFAULT_INITIAL_VARIANCE: f32 = 1.0;

// ===== ETA ESTIMATION =====

/// Number of recent speed samples kept for the harmonic mean.
pub const DEFAULT_SPEED_WINDOW: usize = 30;

/// Speed floor in m/s.
///
/// Keeps the ETA finite when the target is effectively stalled.
/// 0.05 m/s over 100 m is a little over half an hour.
pub const DEFAULT_MIN_SPEED_MPS: f32 = 0.05;

// ===== RISK GRID =====

/// Fraction of intensity lost per second (1%/s).
pub const DEFAULT_DECAY_PER_SEC: f32 = 0.01;

/// Intensity added per reinforced cell when the caller has no better weight.
pub const DEFAULT_REINFORCE_AMOUNT: f32 = 1.0;
