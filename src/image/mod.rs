//! Frames, owned matrices, and borrowed views.
//!
//! `ImageView` is a borrowed 2D view into a 1D buffer with an explicit stride.
//! The stride counts elements between the starts of consecutive rows, so a
//! stride larger than the width represents padded rows. ROI slices are zero-copy
//! views into the same backing slice and retain the original stride.
//!
//! `Matrix` is the owned counterpart used for frames, grids, and output fields.

use crate::util::{PivError, PivResult};

#[cfg(feature = "image-io")]
pub mod io;
pub mod matrix;
pub mod pad;

pub use matrix::{Frame, Matrix};
pub use pad::PaddedFrame;

/// Axis-aligned rectangle in pixel coordinates (top-left origin).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl Rect {
    /// Returns true if the rectangle lies fully inside a `width x height` image.
    pub fn fits_within(&self, width: usize, height: usize) -> bool {
        match (self.x.checked_add(self.width), self.y.checked_add(self.height)) {
            (Some(end_x), Some(end_y)) => end_x <= width && end_y <= height,
            _ => false,
        }
    }
}

/// Borrowed 2D image view with an explicit stride.
#[derive(Copy, Clone, Debug)]
pub struct ImageView<'a, T> {
    data: &'a [T],
    width: usize,
    height: usize,
    stride: usize,
}

impl<'a, T> ImageView<'a, T> {
    /// Creates a contiguous view with `stride == width`.
    pub fn from_slice(data: &'a [T], width: usize, height: usize) -> PivResult<Self> {
        Self::new(data, width, height, width)
    }

    /// Creates a view with an explicit stride.
    pub fn new(data: &'a [T], width: usize, height: usize, stride: usize) -> PivResult<Self> {
        let needed = required_len(width, height, stride)?;
        if data.len() < needed {
            return Err(PivError::BufferTooSmall {
                needed,
                got: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
            stride,
        })
    }

    /// Returns the image width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the image height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the stride in elements between row starts.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Returns the backing slice including any row padding.
    pub fn as_slice(&self) -> &'a [T] {
        self.data
    }

    /// Returns the element at `(x, y)` if it is within bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<&'a T> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = y.checked_mul(self.stride)?.checked_add(x)?;
        self.data.get(idx)
    }

    /// Returns a contiguous slice for row `y` with length `width`.
    pub fn row(&self, y: usize) -> Option<&'a [T]> {
        if y >= self.height {
            return None;
        }
        let start = y.checked_mul(self.stride)?;
        let end = start.checked_add(self.width)?;
        self.data.get(start..end)
    }

    /// Returns a zero-copy ROI view for `rect`.
    pub fn roi_rect(&self, rect: Rect) -> PivResult<ImageView<'a, T>> {
        self.roi(rect.x, rect.y, rect.width, rect.height)
    }

    /// Returns a zero-copy ROI view into the same backing buffer.
    pub fn roi(
        &self,
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    ) -> PivResult<ImageView<'a, T>> {
        if width == 0 || height == 0 {
            return Err(PivError::InvalidDimensions { width, height });
        }

        let out_of_bounds = PivError::RoiOutOfBounds {
            x,
            y,
            width,
            height,
            img_width: self.width,
            img_height: self.height,
        };
        let rect = Rect {
            x,
            y,
            width,
            height,
        };
        if !rect.fits_within(self.width, self.height) {
            return Err(out_of_bounds);
        }

        let start = y
            .checked_mul(self.stride)
            .and_then(|v| v.checked_add(x))
            .ok_or(PivError::InvalidDimensions {
                width: self.width,
                height: self.height,
            })?;
        let data = self.data.get(start..).ok_or(PivError::BufferTooSmall {
            needed: start.saturating_add(1),
            got: self.data.len(),
        })?;

        ImageView::new(data, width, height, self.stride)
    }
}

fn required_len(width: usize, height: usize, stride: usize) -> PivResult<usize> {
    if width == 0 || height == 0 {
        return Err(PivError::InvalidDimensions { width, height });
    }
    if stride < width {
        return Err(PivError::InvalidStride { width, stride });
    }
    let needed = (height - 1)
        .checked_mul(stride)
        .and_then(|v| v.checked_add(width))
        .ok_or(PivError::InvalidDimensions { width, height })?;
    Ok(needed)
}
