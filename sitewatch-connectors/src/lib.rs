//! Host-side Connectors for Sitewatch
//!
//! ## Overview
//!
//! The estimators in `sitewatch-core` never touch the network or hardware.
//! This crate holds the glue a dashboard host puts around them:
//!
//! - [`http`] - fetches the field device's Wi-Fi link strength, with a
//!   simulated fallback when the device is unreachable
//! - [`network`] - the link strength document and its parsing
//! - [`simulation`] - a randomized temperature / gas / vibration feed for
//!   development without hardware
//!
//! ## Data Flow
//!
//! ```text
//! SensorFeed ──► SensorSnapshot ──► EmaForecaster / Kalman1D ──► AlertThresholds
//!                                                                    │
//! NetworkStatusClient ──► NetworkStrength ──────────────────────► dashboard JSON
//! ```
//!
//! ## Example Usage
//!
//! ```rust
//! use sitewatch_connectors::{SensorFeed, simulation::SimulatedSensorFeed};
//! use sitewatch_core::alerts::AlertThresholds;
//!
//! let mut feed = SimulatedSensorFeed::with_seed(1);
//! let alert = AlertThresholds::default().classify(&feed.next_snapshot());
//! if let Some(color) = alert.severity().color() {
//!     println!("{color}: {alert}");
//! }
//! ```

#[cfg(feature = "http")]
pub mod http;

pub mod network;
pub mod simulation;

// Re-export common types
pub use network::{NetworkError, NetworkStrength};
pub use simulation::SimulatedSensorFeed;

#[cfg(feature = "http")]
pub use http::{NetworkStatusClient, NetworkStatusConfig};

use sitewatch_core::alerts::SensorSnapshot;

/// Source of temperature / gas / vibration snapshots
///
/// Implemented by the simulator; a hardware driver implements the same
/// trait so the host loop does not change.
pub trait SensorFeed {
    /// Take the next reading from every sensor
    fn next_snapshot(&mut self) -> SensorSnapshot;
}
