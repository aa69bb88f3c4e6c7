//! Read-only view of a risk grid snapshot

use alloc::vec::Vec;
use core::slice::ChunksExact;

/// Borrowed, already-decayed grid contents in row-major order
///
/// Serializes (with the `serde` feature) as a list of rows, which is the
/// shape dashboards expect for a heatmap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskGridView<'a> {
    rows: usize,
    cols: usize,
    cells: &'a [f32],
}

impl<'a> RiskGridView<'a> {
    pub(crate) fn new(rows: usize, cols: usize, cells: &'a [f32]) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);
        Self { rows, cols, cells }
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Intensity at `(row, col)`, `None` when out of range
    pub fn cell(&self, row: usize, col: usize) -> Option<f32> {
        if row < self.rows && col < self.cols {
            self.cells.get(row * self.cols + col).copied()
        } else {
            None
        }
    }

    /// One row of intensities
    pub fn row(&self, row: usize) -> Option<&'a [f32]> {
        if row < self.rows {
            let start = row * self.cols;
            self.cells.get(start..start + self.cols)
        } else {
            None
        }
    }

    /// Rows from top to bottom
    pub fn iter_rows(&self) -> ChunksExact<'a, f32> {
        self.cells.chunks_exact(self.cols)
    }

    /// All cells, row-major
    pub fn as_slice(&self) -> &'a [f32] {
        self.cells
    }

    /// Sum of all intensities
    pub fn total(&self) -> f32 {
        self.cells.iter().sum()
    }

    /// Hottest cell as `(row, col, intensity)`; first one wins on ties
    pub fn peak(&self) -> Option<(usize, usize, f32)> {
        let (idx, value) = self
            .cells
            .iter()
            .copied()
            .enumerate()
            .fold(None, |best: Option<(usize, f32)>, (i, v)| match best {
                Some((_, b)) if b >= v => best,
                _ => Some((i, v)),
            })?;
        Some((idx / self.cols, idx % self.cols, value))
    }

    /// Owned copy as nested rows
    pub fn to_rows(&self) -> Vec<Vec<f32>> {
        self.iter_rows().map(<[f32]>::to_vec).collect()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for RiskGridView<'_> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter_rows())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CELLS: [f32; 6] = [0.0, 1.0, 2.0, 3.0, 5.0, 4.0];

    #[test]
    fn indexing() {
        let view = RiskGridView::new(2, 3, &CELLS);
        assert_eq!(view.cell(1, 1), Some(5.0));
        assert_eq!(view.cell(2, 0), None);
        assert_eq!(view.cell(0, 3), None);
        assert_eq!(view.row(1), Some(&CELLS[3..6]));
        assert_eq!(view.row(2), None);
    }

    #[test]
    fn aggregates() {
        let view = RiskGridView::new(2, 3, &CELLS);
        assert_eq!(view.total(), 15.0);
        assert_eq!(view.peak(), Some((1, 1, 5.0)));
        assert_eq!(view.iter_rows().count(), 2);
        assert_eq!(view.to_rows(), vec![vec![0.0, 1.0, 2.0], vec![3.0, 5.0, 4.0]]);
    }

    #[test]
    fn peak_of_flat_grid_is_first_cell() {
        let zeros = [0.0; 4];
        let view = RiskGridView::new(2, 2, &zeros);
        assert_eq!(view.peak(), Some((0, 0, 0.0)));
    }
}
