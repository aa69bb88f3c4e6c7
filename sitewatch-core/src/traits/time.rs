//! Time Source Abstraction
//!
//! The risk grid decays against "now" on every access, so it needs a clock.
//! This trait lets the grid read the wall clock in production and a manual
//! clock in tests without changing any of its code.
//!
//! ## Common Implementations
//!
//! - `SystemClock`: wall clock time (may jump due to NTP)
//! - `ManualClock`: controllable time for testing and replay

use crate::time::Timestamp;

/// Source of time for the system
///
/// ## Implementation Requirements
///
/// - `now()` is read on every grid access, so it must be cheap
/// - Sources are allowed to move backwards; consumers clamp negative deltas
///
/// ## Example Implementation
///
/// ```rust
/// use sitewatch_core::traits::TimeSource;
/// use sitewatch_core::time::Timestamp;
///
/// struct GpsTimeSource {
///     last_fix_ms: Timestamp,
/// }
///
/// impl TimeSource for GpsTimeSource {
///     fn now(&self) -> Timestamp {
///         self.last_fix_ms
///     }
///
///     fn is_wall_clock(&self) -> bool {
///         true
///     }
/// }
/// ```
pub trait TimeSource {
    /// Get current timestamp in milliseconds
    ///
    /// The epoch depends on the implementation:
    /// - Wall clock sources: milliseconds since Unix epoch
    /// - Test sources: arbitrary starting point
    fn now(&self) -> Timestamp;

    /// Check if this source provides wall clock time (vs monotonic)
    ///
    /// Wall clock time can be adjusted and may go backwards.
    fn is_wall_clock(&self) -> bool;
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn now(&self) -> Timestamp {
        (**self).now()
    }

    fn is_wall_clock(&self) -> bool {
        (**self).is_wall_clock()
    }
}
