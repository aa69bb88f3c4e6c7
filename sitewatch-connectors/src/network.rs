//! Device network strength readings
//!
//! The field device exposes its Wi-Fi link as a small JSON document:
//!
//! ```json
//! {"rssi": -65, "quality": 70, "timestamp": 1700000000}
//! ```
//!
//! `timestamp` (Unix seconds) and `quality` (percent) are optional on the
//! wire; missing values are filled in from the local clock and from the
//! RSSI respectively. When the device cannot be reached the host serves a
//! simulated reading in the same shape so the dashboard keeps rendering.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::Rng;
use serde::{Deserialize, Serialize};
use sitewatch_core::signal::signal_quality_percent;
use thiserror::Error;

/// RSSI range of simulated readings (dBm), inclusive
pub const SIMULATED_RSSI_RANGE: (i32, i32) = (-86, -54);

/// Network status errors
#[derive(Debug, Error)]
pub enum NetworkError {
    /// Transport failure (DNS, refused connection, timeout)
    #[error("Request failed: {0}")]
    Request(String),

    /// Device answered with something other than 200
    #[error("Unexpected status {status}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
    },

    /// Body was not a valid network status document
    #[error("Invalid payload: {0}")]
    Payload(String),

    /// Client configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Link strength as served to the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkStrength {
    /// Received signal strength (dBm)
    pub rssi: i32,
    /// Link quality (0-100 %)
    pub quality: u8,
    /// Unix seconds
    pub timestamp: u64,
}

/// Wire shape; only `rssi` is mandatory
#[derive(Debug, Deserialize)]
struct DevicePayload {
    rssi: i32,
    #[serde(default)]
    quality: Option<u8>,
    #[serde(default)]
    timestamp: Option<u64>,
}

impl NetworkStrength {
    /// Reading derived from an RSSI value
    pub fn from_rssi(rssi: i32, timestamp: u64) -> Self {
        Self {
            rssi,
            quality: signal_quality_percent(rssi),
            timestamp,
        }
    }

    /// Plausible indoor reading for when the device is unreachable
    pub fn simulated<R: Rng + ?Sized>(rng: &mut R, timestamp: u64) -> Self {
        let (lo, hi) = SIMULATED_RSSI_RANGE;
        Self::from_rssi(rng.gen_range(lo..=hi), timestamp)
    }

    /// Parse a device payload, filling `timestamp` with `now` when absent
    pub fn from_payload(body: &str, now: u64) -> Result<Self, NetworkError> {
        let payload: DevicePayload =
            serde_json::from_str(body).map_err(|e| NetworkError::Payload(e.to_string()))?;

        Ok(Self {
            rssi: payload.rssi,
            quality: payload
                .quality
                .unwrap_or_else(|| signal_quality_percent(payload.rssi)),
            timestamp: payload.timestamp.unwrap_or(now),
        })
    }
}

/// Current Unix time in whole seconds
pub fn unix_now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
