//! Spatial Risk with Temporal Decay
//!
//! ## Overview
//!
//! Risk events (a worker entering a hazard zone, a gas spike near a sensor)
//! are mapped by the host onto grid cells and reinforced here. Intensities
//! fade with wall-clock time so the heatmap reflects recent activity.
//!
//! ## Lazy Decay
//!
//! There is no timer. Decay is fused into every access:
//!
//! ```text
//! reinforce(cells, amount)        get()
//!   ├─ apply_decay(now)             ├─ apply_decay(now)
//!   └─ cell += amount               └─ view of cells
//! ```
//!
//! Whatever order reads and writes arrive in, a reader always observes
//! intensities decayed up to the moment of the read. The grid stays fully
//! synchronous and cheap when idle.
//!
//! ## Clock Handling
//!
//! `dt` is clamped at zero, so a wall clock stepped backwards (NTP, manual
//! adjustment) pauses decay instead of inflating intensities.
//!
//! ## Usage Example
//!
//! ```rust
//! use sitewatch_core::risk::{DecayingRiskGrid, RiskGridConfig};
//! use sitewatch_core::time::ManualClock;
//!
//! let clock = ManualClock::new(0);
//! let config = RiskGridConfig::new(3, 3).with_decay_per_sec(0.1);
//! let mut grid = DecayingRiskGrid::with_clock(config, &clock).unwrap();
//!
//! grid.reinforce([(1, 1), (0, 2)], 5.0);
//! clock.advance(1_000);
//! grid.reinforce([(1, 1)], 2.0);
//!
//! let view = grid.get();
//! assert!((view.cell(1, 1).unwrap() - 6.5).abs() < 1e-4);
//! ```

pub mod grid;
pub mod view;

pub use grid::{DecayingRiskGrid, RiskGridConfig};
pub use view::RiskGridView;
