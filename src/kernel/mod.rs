//! Normalized cross-correlation kernels.

use crate::image::Matrix;
use crate::util::PivResult;

pub mod scalar;

pub use scalar::{correlate, score_at};

/// Square map of correlation coefficients, one per integer offset.
///
/// Cell `(col, row)` holds the coefficient for the template shifted by
/// `(col, row)` inside the search window, so the zero-displacement cell sits
/// at `(radius, radius)`.
#[derive(Clone, Debug, PartialEq)]
pub struct CorrelationMap {
    values: Matrix<f32>,
}

impl CorrelationMap {
    /// Wraps a row-major `side x side` buffer of coefficients.
    pub fn new(values: Vec<f32>, side: usize) -> PivResult<Self> {
        Ok(Self {
            values: Matrix::new(values, side, side)?,
        })
    }

    /// Side length, `2s + 1`.
    pub fn side(&self) -> usize {
        self.values.width()
    }

    /// Search radius `s` implied by the side length.
    pub fn radius(&self) -> usize {
        self.side() / 2
    }

    /// Coefficient at column `col`, row `row`.
    pub fn get(&self, col: usize, row: usize) -> Option<f32> {
        self.values.get(col, row).copied()
    }

    /// Row-major coefficients.
    pub fn values(&self) -> &[f32] {
        self.values.data()
    }
}
