//! Zero padding so every interrogation and search window stays in bounds.
//!
//! With `padding = t + s`, a grid point `(x, y)` anywhere in
//! `[0, width] x [0, height]` maps to a search window whose top-left corner in
//! padded coordinates is exactly `(x, y)` and whose far corner is at most
//! `(width + 2 * padding, height + 2 * padding)`.

use crate::image::{Frame, ImageView, Matrix, Rect};
use crate::util::{PivError, PivResult};

/// Frame extended by `padding` zero pixels on every side.
#[derive(Clone, Debug)]
pub struct PaddedFrame {
    data: Matrix<f32>,
    padding: usize,
    source_width: usize,
    source_height: usize,
}

impl PaddedFrame {
    /// Copies `frame` into the center of a zero-filled canvas.
    pub fn new(frame: &Frame, padding: usize) -> PivResult<Self> {
        let source_width = frame.width();
        let source_height = frame.height();
        let pad2 = padding
            .checked_mul(2)
            .ok_or(PivError::InvalidInput("padding overflows"))?;
        let width = source_width
            .checked_add(pad2)
            .ok_or(PivError::InvalidDimensions {
                width: source_width,
                height: source_height,
            })?;
        let height = source_height
            .checked_add(pad2)
            .ok_or(PivError::InvalidDimensions {
                width: source_width,
                height: source_height,
            })?;

        let len = width
            .checked_mul(height)
            .ok_or(PivError::InvalidDimensions { width, height })?;
        let mut data = vec![0.0f32; len];
        for (y, row) in frame.rows().enumerate() {
            let start = (y + padding) * width + padding;
            data[start..start + source_width].copy_from_slice(row);
        }

        Ok(Self {
            data: Matrix::new(data, width, height)?,
            padding,
            source_width,
            source_height,
        })
    }

    /// Border width added on each side.
    pub fn padding(&self) -> usize {
        self.padding
    }

    /// Width of the unpadded frame.
    pub fn source_width(&self) -> usize {
        self.source_width
    }

    /// Height of the unpadded frame.
    pub fn source_height(&self) -> usize {
        self.source_height
    }

    /// Padded width.
    pub fn width(&self) -> usize {
        self.data.width()
    }

    /// Padded height.
    pub fn height(&self) -> usize {
        self.data.height()
    }

    /// Borrowed view of the whole padded canvas.
    pub fn view(&self) -> ImageView<'_, f32> {
        self.data.view()
    }

    /// Square of side `2 * half` centered on unpadded point `(x, y)`.
    ///
    /// Returns `None` if the square leaves the padded canvas.
    pub fn centered_rect(&self, x: usize, y: usize, half: usize) -> Option<Rect> {
        let cx = x.checked_add(self.padding)?;
        let cy = y.checked_add(self.padding)?;
        let side = half.checked_mul(2)?;
        let rect = Rect {
            x: cx.checked_sub(half)?,
            y: cy.checked_sub(half)?,
            width: side,
            height: side,
        };
        rect.fits_within(self.width(), self.height()).then_some(rect)
    }

    /// Interrogation window rectangle (side `2t`) for grid point `(x, y)`.
    pub fn interrogation_rect(&self, x: usize, y: usize, t: usize) -> Option<Rect> {
        self.centered_rect(x, y, t)
    }

    /// Search window rectangle (side `2(t + s)`) for grid point `(x, y)`.
    pub fn search_rect(&self, x: usize, y: usize, t: usize, s: usize) -> Option<Rect> {
        self.centered_rect(x, y, t.checked_add(s)?)
    }

    /// Interrogation window view for grid point `(x, y)`.
    pub fn interrogation_window(
        &self,
        x: usize,
        y: usize,
        t: usize,
    ) -> PivResult<ImageView<'_, f32>> {
        let rect = self
            .interrogation_rect(x, y, t)
            .ok_or_else(|| self.window_error(x, y, t))?;
        self.view().roi_rect(rect)
    }

    /// Search window view for grid point `(x, y)`.
    pub fn search_window(
        &self,
        x: usize,
        y: usize,
        t: usize,
        s: usize,
    ) -> PivResult<ImageView<'_, f32>> {
        let half = t.saturating_add(s);
        let rect = self
            .search_rect(x, y, t, s)
            .ok_or_else(|| self.window_error(x, y, half))?;
        self.view().roi_rect(rect)
    }

    fn window_error(&self, x: usize, y: usize, half: usize) -> PivError {
        let side = half.saturating_mul(2);
        PivError::RoiOutOfBounds {
            x: x.saturating_add(self.padding).saturating_sub(half),
            y: y.saturating_add(self.padding).saturating_sub(half),
            width: side,
            height: side,
            img_width: self.width(),
            img_height: self.height(),
        }
    }
}
