//! Per-grid-point displacement output.

use crate::image::Matrix;
use crate::util::PivResult;

/// Horizontal and vertical displacement per grid point.
///
/// Cells start as NaN ("undetermined") and are overwritten only for grid
/// points whose correlation peak clears the acceptance threshold.
#[derive(Clone, Debug)]
pub struct DisplacementField {
    dx: Matrix<f32>,
    dy: Matrix<f32>,
}

impl DisplacementField {
    /// Creates a `rows x cols` field with every cell undetermined.
    pub fn undetermined(cols: usize, rows: usize) -> PivResult<Self> {
        Ok(Self {
            dx: Matrix::filled(cols, rows, f32::NAN)?,
            dy: Matrix::filled(cols, rows, f32::NAN)?,
        })
    }

    /// Number of grid columns.
    pub fn cols(&self) -> usize {
        self.dx.width()
    }

    /// Number of grid rows.
    pub fn rows(&self) -> usize {
        self.dx.height()
    }

    /// Horizontal displacements.
    pub fn dx(&self) -> &Matrix<f32> {
        &self.dx
    }

    /// Vertical displacements.
    pub fn dy(&self) -> &Matrix<f32> {
        &self.dy
    }

    /// Displacement at `(col, row)`, or `None` if undetermined or out of range.
    pub fn get(&self, col: usize, row: usize) -> Option<(f32, f32)> {
        let dx = *self.dx.get(col, row)?;
        let dy = *self.dy.get(col, row)?;
        (!dx.is_nan() && !dy.is_nan()).then_some((dx, dy))
    }

    /// Stores a displacement; returns false if `(col, row)` is out of range.
    pub fn set(&mut self, col: usize, row: usize, dx: f32, dy: f32) -> bool {
        match (self.dx.get_mut(col, row), self.dy.get_mut(col, row)) {
            (Some(cell_x), Some(cell_y)) => {
                *cell_x = dx;
                *cell_y = dy;
                true
            }
            _ => false,
        }
    }

    /// Number of grid points with a determined displacement.
    pub fn determined_count(&self) -> usize {
        self.dx
            .data()
            .iter()
            .zip(self.dy.data())
            .filter(|(x, y)| !x.is_nan() && !y.is_nan())
            .count()
    }
}
