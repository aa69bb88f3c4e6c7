//! Decaying risk grid
//!
//! A `rows × cols` matrix of non-negative intensities. Decay is applied
//! lazily: every read or write first shrinks all cells by the time elapsed
//! since the previous access, then stamps the access time.
//!
//! ```text
//! dt     = max(0, now - last_update)
//! factor = max(0, 1 - decay_per_sec · dt)
//! cell  *= factor
//! ```
//!
//! The linear factor is an approximation of `e^(-rate·dt)` that is exact to
//! first order and zeroes the grid outright once `rate·dt >= 1`.

use alloc::vec;
use alloc::vec::Vec;

use crate::{
    constants::DEFAULT_DECAY_PER_SEC,
    errors::{EstimatorError, EstimatorResult},
    time::{elapsed_secs, Timestamp},
    traits::TimeSource,
};

#[cfg(feature = "std")]
use crate::time::SystemClock;

use super::view::RiskGridView;

#[cfg(feature = "serde")]
fn default_decay_per_sec() -> f32 {
    DEFAULT_DECAY_PER_SEC
}

/// Risk grid configuration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RiskGridConfig {
    /// Number of rows
    pub rows: usize,
    /// Number of columns
    pub cols: usize,
    /// Fraction of intensity lost per second
    #[cfg_attr(feature = "serde", serde(default = "default_decay_per_sec"))]
    pub decay_per_sec: f32,
}

impl RiskGridConfig {
    /// Grid of the given size with the default decay rate
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            decay_per_sec: DEFAULT_DECAY_PER_SEC,
        }
    }

    /// Set the decay rate (fraction per second)
    pub fn with_decay_per_sec(mut self, decay_per_sec: f32) -> Self {
        self.decay_per_sec = decay_per_sec;
        self
    }

    /// Check non-empty dimensions and a non-negative finite decay rate
    pub fn validate(&self) -> EstimatorResult<()> {
        if self.rows == 0 {
            return Err(EstimatorError::invalid("rows", 0.0, "must be positive"));
        }
        if self.cols == 0 {
            return Err(EstimatorError::invalid("cols", 0.0, "must be positive"));
        }
        if self.rows.checked_mul(self.cols).is_none() {
            return Err(EstimatorError::invalid(
                "cols",
                self.cols as f32,
                "rows * cols overflows",
            ));
        }
        if !(self.decay_per_sec >= 0.0 && self.decay_per_sec.is_finite()) {
            return Err(EstimatorError::invalid(
                "decay_per_sec",
                self.decay_per_sec,
                "must be non-negative and finite",
            ));
        }
        Ok(())
    }
}

/// Spatial risk intensities that fade with elapsed time
///
/// `C` is the clock decay is measured against. Production code uses
/// [`DecayingRiskGrid::new`] (system clock); tests and replays pass their
/// own [`TimeSource`] to [`DecayingRiskGrid::with_clock`].
#[derive(Debug, Clone)]
pub struct DecayingRiskGrid<C: TimeSource> {
    rows: usize,
    cols: usize,
    decay_per_sec: f32,
    /// Row-major, `rows * cols` cells, all >= 0
    cells: Vec<f32>,
    last_update: Timestamp,
    clock: C,
}

#[cfg(feature = "std")]
impl DecayingRiskGrid<SystemClock> {
    /// Create an all-zero grid decaying against the system clock
    pub fn new(config: RiskGridConfig) -> EstimatorResult<Self> {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: TimeSource> DecayingRiskGrid<C> {
    /// Create an all-zero grid decaying against `clock`
    pub fn with_clock(config: RiskGridConfig, clock: C) -> EstimatorResult<Self> {
        config.validate()?;
        let last_update = clock.now();
        Ok(Self {
            rows: config.rows,
            cols: config.cols,
            decay_per_sec: config.decay_per_sec,
            cells: vec![0.0; config.rows * config.cols],
            last_update,
            clock,
        })
    }

    /// Add `amount` to every in-range `(row, col)`; decay is applied first.
    ///
    /// Out-of-range cells are skipped without error. A cell never drops
    /// below zero, so a negative `amount` can only drain a cell. A NaN or
    /// infinite `amount` is rejected and leaves the grid untouched.
    /// Returns the number of cells that were updated.
    pub fn reinforce<I>(&mut self, cells: I, amount: f32) -> usize
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        if !amount.is_finite() {
            log_warn!("ignoring non-finite risk reinforcement {}", amount);
            return 0;
        }

        self.apply_decay();

        let mut applied = 0;
        for (row, col) in cells {
            if let Some(idx) = self.index(row, col) {
                self.cells[idx] = (self.cells[idx] + amount).max(0.0);
                applied += 1;
            }
        }
        applied
    }

    /// Reinforce a single cell; returns `false` if it is out of range
    pub fn reinforce_cell(&mut self, row: usize, col: usize, amount: f32) -> bool {
        self.reinforce(core::iter::once((row, col)), amount) == 1
    }

    /// Current intensities, decayed up to now
    pub fn get(&mut self) -> RiskGridView<'_> {
        self.apply_decay();
        RiskGridView::new(self.rows, self.cols, &self.cells)
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Decay rate (fraction per second)
    pub fn decay_per_sec(&self) -> f32 {
        self.decay_per_sec
    }

    /// Time of the last read or write
    pub fn last_update(&self) -> Timestamp {
        self.last_update
    }

    /// Clock decay is measured against
    pub fn clock(&self) -> &C {
        &self.clock
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }

    fn apply_decay(&mut self) {
        let now = self.clock.now();
        if now < self.last_update {
            log_debug!(
                "clock moved back {}ms (wall clock: {}), skipping decay",
                self.last_update - now,
                self.clock.is_wall_clock()
            );
        }
        let dt = elapsed_secs(self.last_update, now);
        self.last_update = now;

        if dt <= 0.0 {
            return;
        }

        let factor = (1.0 - self.decay_per_sec * dt).max(0.0);
        if factor >= 1.0 {
            return;
        }
        if factor == 0.0 {
            log_debug!("risk grid fully decayed after {}s", dt);
            self.cells.fill(0.0);
            return;
        }

        for cell in self.cells.iter_mut() {
            *cell *= factor;
        }
    }
}
