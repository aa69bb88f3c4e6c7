//! Time management for the estimators
//!
//! Provides the clocks the risk grid can decay against:
//! - System clock (when `std` is available)
//! - Manual clock (tests, replay of recorded data)

use core::cell::Cell;

pub use crate::traits::TimeSource;

/// Timestamp in milliseconds since epoch (or an arbitrary origin for manual clocks)
pub type Timestamp = u64;

/// Milliseconds in one second
pub const MS_PER_SECOND: f32 = 1000.0;

/// Seconds elapsed between two timestamps, clamped at zero.
///
/// A clock that moved backwards yields `0.0` rather than a negative delta.
pub fn elapsed_secs(earlier: Timestamp, later: Timestamp) -> f32 {
    later.saturating_sub(earlier) as f32 / MS_PER_SECOND
}

/// System time source (requires std)
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

#[cfg(feature = "std")]
impl TimeSource for SystemClock {
    fn now(&self) -> Timestamp {
        use std::time::{SystemTime, UNIX_EPOCH};

        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as Timestamp
    }

    fn is_wall_clock(&self) -> bool {
        true
    }
}

/// Manually driven time source
///
/// Uses a `Cell` so a clock shared by reference with a grid can still be
/// advanced from the outside.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    timestamp: Cell<Timestamp>,
}

impl ManualClock {
    /// Create a clock frozen at `timestamp`
    pub fn new(timestamp: Timestamp) -> Self {
        Self { timestamp: Cell::new(timestamp) }
    }

    /// Jump to an absolute time (may move backwards)
    pub fn set(&self, timestamp: Timestamp) {
        self.timestamp.set(timestamp);
    }

    /// Move forward by `ms` milliseconds
    pub fn advance(&self, ms: u64) {
        self.timestamp.set(self.timestamp.get().saturating_add(ms));
    }

    /// Move forward by a fractional number of seconds
    pub fn advance_secs(&self, secs: f32) {
        self.advance(libm::roundf(secs.max(0.0) * MS_PER_SECOND) as u64);
    }
}

impl TimeSource for ManualClock {
    fn now(&self) -> Timestamp {
        self.timestamp.get()
    }

    fn is_wall_clock(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_advances() {
        let clock = ManualClock::new(1000);
        assert_eq!(clock.now(), 1000);

        clock.advance(500);
        assert_eq!(clock.now(), 1500);

        clock.advance_secs(1.25);
        assert_eq!(clock.now(), 2750);
    }

    #[test]
    fn shared_clock_reads_through_reference() {
        let clock = ManualClock::new(0);
        let shared: &ManualClock = &clock;
        clock.advance(42);
        assert_eq!(TimeSource::now(&shared), 42);
        assert!(!shared.is_wall_clock());
    }

    #[test]
    fn elapsed_is_clamped() {
        assert_eq!(elapsed_secs(1000, 3500), 2.5);
        assert_eq!(elapsed_secs(3500, 1000), 0.0);
        assert_eq!(elapsed_secs(7, 7), 0.0);
    }

    #[cfg(feature = "std")]
    #[test]
    fn system_clock_is_after_epoch() {
        let clock = SystemClock;
        assert!(clock.now() > 0);
        assert!(clock.is_wall_clock());
    }
}
