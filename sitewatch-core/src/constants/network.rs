//! Radio Signal Bounds
//!
//! Link quality is a linear map of RSSI between these two points:
//! the floor maps to 0% and the ceiling to 100%.

/// RSSI at or below which the link is considered unusable (dBm).
pub const RSSI_FLOOR_DBM: i32 = -100;

/// RSSI at or above which the link is considered perfect (dBm).
pub const RSSI_CEILING_DBM: i32 = -50;
