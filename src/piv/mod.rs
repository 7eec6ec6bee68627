//! Frame-pair displacement estimation.
//!
//! For every grid point an interrogation window from the first frame is
//! correlated against a larger search window from the second frame. The
//! correlation peak, refined to sub-pixel precision, gives the displacement.
//! Grid points are independent of each other and are processed in row-major
//! order.

use crate::candidate::peak::locate_peak;
use crate::grid::{build_grid, GridResolution};
use crate::image::{Frame, PaddedFrame};
use crate::kernel::correlate;
use crate::refine::subpixel::estimate_displacement;
use crate::template::TemplatePlan;
use crate::trace::{trace_event, trace_span};
use crate::util::{PivError, PivResult};

mod field;

pub use field::DisplacementField;

/// Window geometry, grid layout, and acceptance threshold.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PivParams {
    /// Interrogation window half-size `t`; windows are `2t` pixels wide.
    pub template_half: usize,
    /// Largest integer displacement `s` searched on each axis.
    pub search_radius: usize,
    /// Grid resolution and optional step overrides.
    pub grid: GridResolution,
    /// Minimum peak correlation in percent; accepted when `peak * 100 > threshold`.
    pub threshold_pct: i32,
}

impl PivParams {
    /// Creates parameters with grid steps derived from the frame size.
    pub fn new(
        template_half: usize,
        search_radius: usize,
        grid: GridResolution,
        threshold_pct: i32,
    ) -> Self {
        Self {
            template_half,
            search_radius,
            grid,
            threshold_pct,
        }
    }

    /// Border added around each frame so no window leaves the canvas.
    ///
    /// Saturates for parameters that [`PivParams::validate`] rejects.
    pub fn padding(&self) -> usize {
        self.template_half.saturating_add(self.search_radius)
    }

    /// Checks parameter ranges.
    pub fn validate(&self) -> PivResult<()> {
        if self.template_half == 0 {
            return Err(PivError::InvalidInput("template half-size must be at least 1"));
        }
        if self.grid.cols == 0 || self.grid.rows == 0 {
            return Err(PivError::InvalidInput("grid resolution must be at least 1x1"));
        }
        self.template_half
            .checked_add(self.search_radius)
            .and_then(|p| p.checked_mul(2))
            .ok_or(PivError::InvalidInput("window size overflows"))?;
        Ok(())
    }
}

/// Cross-correlation PIV evaluator for one parameter set.
#[derive(Clone, Debug)]
pub struct Piv {
    params: PivParams,
}

impl Piv {
    /// Creates an evaluator after validating `params`.
    pub fn new(params: PivParams) -> PivResult<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    /// Returns the parameters in use.
    pub fn params(&self) -> &PivParams {
        &self.params
    }

    /// Computes the displacement field between two equally sized frames.
    pub fn compute(&self, first: &Frame, second: &Frame) -> PivResult<DisplacementField> {
        let width = first.width();
        let height = first.height();
        if second.width() != width || second.height() != height {
            return Err(PivError::FrameSizeMismatch {
                first_width: width,
                first_height: height,
                second_width: second.width(),
                second_height: second.height(),
            });
        }

        let spec = self.params.grid.resolve(width, height)?;
        let _span = trace_span!(
            "piv_pair",
            width = width,
            height = height,
            cols = spec.cols,
            rows = spec.rows
        )
        .entered();

        let grid = build_grid(width, height, spec)?;
        let padding = self.params.padding();
        let padded_first = PaddedFrame::new(first, padding)?;
        let padded_second = PaddedFrame::new(second, padding)?;

        let mut field = DisplacementField::undetermined(grid.cols(), grid.rows())?;
        for row in 0..grid.rows() {
            for col in 0..grid.cols() {
                let (x, y) = grid
                    .point(col, row)
                    .ok_or(PivError::InvalidInput("grid point out of range"))?;
                if let Some((dx, dy)) = self.measure_point(&padded_first, &padded_second, x, y)? {
                    field.set(col, row, dx, dy);
                }
            }
        }

        trace_event!(
            "piv_field",
            determined = field.determined_count(),
            total = grid.cols() * grid.rows()
        );
        Ok(field)
    }

    /// Displacement at unpadded pixel `(x, y)`, or `None` if the correlation
    /// peak does not clear the threshold.
    ///
    /// Both frames must be padded copies of equally sized sources.
    pub fn measure_point(
        &self,
        first: &PaddedFrame,
        second: &PaddedFrame,
        x: usize,
        y: usize,
    ) -> PivResult<Option<(f32, f32)>> {
        if first.source_width() != second.source_width()
            || first.source_height() != second.source_height()
        {
            return Err(PivError::FrameSizeMismatch {
                first_width: first.source_width(),
                first_height: first.source_height(),
                second_width: second.source_width(),
                second_height: second.source_height(),
            });
        }
        let t = self.params.template_half;
        let s = self.params.search_radius;

        let window = first.interrogation_window(x, y, t)?;
        let plan = TemplatePlan::from_view(window)?;
        let search = second.search_window(x, y, t, s)?;
        let map = correlate(search, &plan)?;
        let peak = locate_peak(&map);
        Ok(estimate_displacement(&map, peak, self.params.threshold_pct))
    }
}
