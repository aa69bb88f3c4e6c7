//! Constants for Sitewatch Core
//!
//! Centralized defaults for every tunable in the crate. Configuration
//! structs take their `Default` values from here, so a host that wants the
//! stock behaviour never needs to repeat a magic number.
//!
//! ## Organization
//!
//! - **Estimators**: smoothing factors, noise variances, window sizes, decay
//! - **Alerts**: critical thresholds for the monitored sensors
//! - **Network**: RSSI to link-quality mapping

/// Default parameters for the online estimators.
pub mod estimators;

/// Alert thresholds for temperature, gas and vibration.
pub mod alerts;

/// Radio signal strength bounds.
pub mod network;

pub use estimators::{
    DEFAULT_EMA_ALPHA, DEFAULT_PROCESS_NOISE, DEFAULT_MEASUREMENT_NOISE,
    DEFAULT_INITIAL_VARIANCE, DEFAULT_SPEED_WINDOW, DEFAULT_MIN_SPEED_MPS,
    DEFAULT_DECAY_PER_SEC, DEFAULT_REINFORCE_AMOUNT,
};

pub use alerts::{
    TEMP_CRITICAL_THRESHOLD_C, GAS_CRITICAL_THRESHOLD_PPM, VIB_CRITICAL_THRESHOLD_G,
};

pub use network::{RSSI_FLOOR_DBM, RSSI_CEILING_DBM};
