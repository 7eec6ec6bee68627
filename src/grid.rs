//! Interrogation grid geometry.
//!
//! Grid points are laid out on a regular lattice starting at the frame's
//! top-left corner. The horizontal and vertical steps are independent
//! parameters; `GridSpec::from_frame` derives each from its own axis
//! resolution.

use crate::image::Matrix;
use crate::util::{PivError, PivResult};

/// Grid resolution and spacing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridSpec {
    /// Number of grid columns (`gx`).
    pub cols: usize,
    /// Number of grid rows (`gy`).
    pub rows: usize,
    /// Horizontal spacing between columns in pixels.
    pub step_x: usize,
    /// Vertical spacing between rows in pixels.
    pub step_y: usize,
}

impl GridSpec {
    /// Derives steps as `width / cols` and `height / rows` (at least 1).
    pub fn from_frame(width: usize, height: usize, cols: usize, rows: usize) -> PivResult<Self> {
        if cols == 0 || rows == 0 {
            return Err(PivError::InvalidInput("grid resolution must be at least 1x1"));
        }
        Ok(Self {
            cols,
            rows,
            step_x: (width / cols).max(1),
            step_y: (height / rows).max(1),
        })
    }

    /// Uses explicitly chosen steps.
    pub fn with_steps(cols: usize, rows: usize, step_x: usize, step_y: usize) -> PivResult<Self> {
        if cols == 0 || rows == 0 {
            return Err(PivError::InvalidInput("grid resolution must be at least 1x1"));
        }
        Ok(Self {
            cols,
            rows,
            step_x,
            step_y,
        })
    }
}

/// Requested grid resolution with optional step overrides.
///
/// Steps left unset are derived from the frame size when the grid is
/// resolved, each from its own axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridResolution {
    /// Number of grid columns (`gx`).
    pub cols: usize,
    /// Number of grid rows (`gy`).
    pub rows: usize,
    /// Fixed horizontal step; `None` derives `width / cols`.
    pub step_x: Option<usize>,
    /// Fixed vertical step; `None` derives `height / rows`.
    pub step_y: Option<usize>,
}

impl GridResolution {
    /// Resolution with derived steps.
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            step_x: None,
            step_y: None,
        }
    }

    /// Pins the horizontal step.
    pub fn with_step_x(mut self, step: usize) -> Self {
        self.step_x = Some(step);
        self
    }

    /// Pins the vertical step.
    pub fn with_step_y(mut self, step: usize) -> Self {
        self.step_y = Some(step);
        self
    }

    /// Resolves concrete steps for a `width x height` frame.
    pub fn resolve(&self, width: usize, height: usize) -> PivResult<GridSpec> {
        let derived = GridSpec::from_frame(width, height, self.cols, self.rows)?;
        GridSpec::with_steps(
            self.cols,
            self.rows,
            self.step_x.unwrap_or(derived.step_x),
            self.step_y.unwrap_or(derived.step_y),
        )
    }
}

/// Pixel coordinates of every grid point in the unpadded frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    x: Matrix<usize>,
    y: Matrix<usize>,
}

impl Grid {
    /// Column coordinates, shape `rows x cols`.
    pub fn x(&self) -> &Matrix<usize> {
        &self.x
    }

    /// Row coordinates, shape `rows x cols`.
    pub fn y(&self) -> &Matrix<usize> {
        &self.y
    }

    /// Number of grid columns.
    pub fn cols(&self) -> usize {
        self.x.width()
    }

    /// Number of grid rows.
    pub fn rows(&self) -> usize {
        self.x.height()
    }

    /// Returns the pixel coordinate of grid cell `(col, row)`.
    pub fn point(&self, col: usize, row: usize) -> Option<(usize, usize)> {
        Some((*self.x.get(col, row)?, *self.y.get(col, row)?))
    }
}

/// Builds the grid for a `width x height` frame.
///
/// Coordinates are clamped to `[0, width] x [0, height]` so a step that
/// overshoots the frame never produces an out-of-range point.
pub fn build_grid(width: usize, height: usize, spec: GridSpec) -> PivResult<Grid> {
    let x = Matrix::from_fn(spec.cols, spec.rows, |c, _| {
        c.saturating_mul(spec.step_x).min(width)
    })?;
    let y = Matrix::from_fn(spec.cols, spec.rows, |_, r| {
        r.saturating_mul(spec.step_y).min(height)
    })?;
    Ok(Grid { x, y })
}

#[cfg(test)]
mod tests {
    use super::{build_grid, GridResolution, GridSpec};

    #[test]
    fn steps_follow_their_own_axis() {
        let spec = GridSpec::from_frame(570, 512, 48, 32).unwrap();
        assert_eq!(spec.step_x, 11);
        assert_eq!(spec.step_y, 16);
    }

    #[test]
    fn grid_is_an_outer_product_of_axis_coordinates() {
        let spec = GridSpec::from_frame(100, 60, 4, 3).unwrap();
        let grid = build_grid(100, 60, spec).unwrap();
        assert_eq!(grid.cols(), 4);
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.x().row(0).unwrap(), &[0, 25, 50, 75]);
        assert_eq!(grid.x().row(2).unwrap(), &[0, 25, 50, 75]);
        assert_eq!(grid.y().row(1).unwrap(), &[20, 20, 20, 20]);
        assert_eq!(grid.point(3, 2), Some((75, 40)));
        assert_eq!(grid.point(4, 0), None);
    }

    #[test]
    fn oversized_steps_are_clamped_to_the_frame() {
        let spec = GridSpec::with_steps(5, 2, 30, 100).unwrap();
        let grid = build_grid(64, 48, spec).unwrap();
        assert_eq!(grid.x().row(0).unwrap(), &[0, 30, 60, 64, 64]);
        assert_eq!(grid.y().row(1).unwrap(), &[48; 5]);
    }

    #[test]
    fn tiny_frames_still_get_unit_steps() {
        let spec = GridSpec::from_frame(3, 3, 8, 8).unwrap();
        assert_eq!((spec.step_x, spec.step_y), (1, 1));
        let grid = build_grid(3, 3, spec).unwrap();
        assert!(grid.x().data().iter().all(|&x| x <= 3));
    }

    #[test]
    fn resolution_overrides_only_the_pinned_axis() {
        let spec = GridResolution::new(48, 32)
            .with_step_y(512 / 48)
            .resolve(570, 512)
            .unwrap();
        assert_eq!(spec.step_x, 11);
        assert_eq!(spec.step_y, 10);

        let spec = GridResolution::new(4, 4).with_step_x(7).resolve(40, 40).unwrap();
        assert_eq!((spec.step_x, spec.step_y), (7, 10));
    }

    #[test]
    fn zero_resolution_is_rejected() {
        assert!(GridResolution::new(0, 3).resolve(10, 10).is_err());
        assert!(GridSpec::from_frame(10, 10, 0, 4).is_err());
        assert!(GridSpec::with_steps(4, 0, 1, 1).is_err());
    }
}
