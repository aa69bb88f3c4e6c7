//! Radio link quality from RSSI
//!
//! ```text
//! quality = (clamp(rssi, -100, -50) + 100) * 2     // 0..=100 %
//! ```

use crate::constants::{RSSI_CEILING_DBM, RSSI_FLOOR_DBM};

/// Map an RSSI reading (dBm) to a link quality percentage
pub fn signal_quality_percent(rssi_dbm: i32) -> u8 {
    let clamped = rssi_dbm.clamp(RSSI_FLOOR_DBM, RSSI_CEILING_DBM);
    // At most (-50 + 100) * 2 = 100
    ((clamped - RSSI_FLOOR_DBM) * 2) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_between_bounds() {
        assert_eq!(signal_quality_percent(-100), 0);
        assert_eq!(signal_quality_percent(-75), 50);
        assert_eq!(signal_quality_percent(-61), 78);
        assert_eq!(signal_quality_percent(-50), 100);
    }

    #[test]
    fn clamps_outside_bounds() {
        assert_eq!(signal_quality_percent(-120), 0);
        assert_eq!(signal_quality_percent(-30), 100);
        assert_eq!(signal_quality_percent(i32::MIN), 0);
        assert_eq!(signal_quality_percent(i32::MAX), 100);
    }
}
