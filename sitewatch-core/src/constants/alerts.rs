//! Alert Thresholds
//!
//! A reading strictly above its threshold counts as exceeded. All three
//! exceeded at once is treated as a system failure rather than three
//! independent warnings.

/// Critical temperature (°C).
pub const TEMP_CRITICAL_THRESHOLD_C: f32 = 95.0;

/// Critical gas concentration (ppm).
pub const GAS_CRITICAL_THRESHOLD_PPM: f32 = 120.0;

/// Critical vibration amplitude (g).
pub const VIB_CRITICAL_THRESHOLD_G: f32 = 0.8;
