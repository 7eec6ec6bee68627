//! Template plan precomputation for the normalized correlation coefficient.

use crate::image::ImageView;
use crate::util::{PivError, PivResult};

/// Precomputed statistics and zero-mean buffer for one interrogation window.
///
/// Unlike a reusable matching template, a flat window is not an error here:
/// it simply has zero energy and correlates to 0 everywhere.
#[derive(Clone, Debug)]
pub struct TemplatePlan {
    width: usize,
    height: usize,
    energy: f64,
    zero_mean: Vec<f64>,
}

impl TemplatePlan {
    /// Builds a plan from an interrogation window view.
    pub fn from_view(tpl: ImageView<'_, f32>) -> PivResult<Self> {
        let width = tpl.width();
        let height = tpl.height();
        let count = width
            .checked_mul(height)
            .ok_or(PivError::InvalidDimensions { width, height })?;

        let mut sum = 0.0f64;
        for y in 0..height {
            let row = row_of(tpl, y)?;
            sum += row.iter().map(|&v| v as f64).sum::<f64>();
        }
        let mean = sum / count as f64;

        let mut zero_mean = Vec::with_capacity(count);
        let mut energy = 0.0f64;
        for y in 0..height {
            for &value in row_of(tpl, y)? {
                let d = value as f64 - mean;
                energy += d * d;
                zero_mean.push(d);
            }
        }

        Ok(Self {
            width,
            height,
            energy,
            zero_mean,
        })
    }

    /// Returns the window width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the window height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the sum of squared deviations from the mean.
    pub fn energy(&self) -> f64 {
        self.energy
    }

    /// Returns the zero-mean window buffer in row-major order.
    pub fn zero_mean(&self) -> &[f64] {
        &self.zero_mean
    }
}

fn row_of<'a>(view: ImageView<'a, f32>, y: usize) -> PivResult<&'a [f32]> {
    view.row(y).ok_or_else(|| {
        let needed = (y + 1)
            .checked_mul(view.stride())
            .and_then(|v| v.checked_add(view.width()))
            .unwrap_or(usize::MAX);
        PivError::BufferTooSmall {
            needed,
            got: view.as_slice().len(),
        }
    })
}
