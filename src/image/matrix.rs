//! Owned row-major matrices.

use crate::image::ImageView;
use crate::util::{PivError, PivResult};

/// Owned contiguous row-major buffer with explicit dimensions.
///
/// `width` counts columns and `height` counts rows. All accessors are bounds
/// checked and return `None` instead of panicking.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<T> {
    data: Vec<T>,
    width: usize,
    height: usize,
}

/// Grayscale intensity frame.
pub type Frame = Matrix<f32>;

impl<T> Matrix<T> {
    /// Wraps a row-major buffer of exactly `width * height` elements.
    pub fn new(data: Vec<T>, width: usize, height: usize) -> PivResult<Self> {
        let needed = element_count(width, height)?;
        if data.len() < needed {
            return Err(PivError::BufferTooSmall {
                needed,
                got: data.len(),
            });
        }
        if data.len() > needed {
            return Err(PivError::InvalidDimensions { width, height });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Builds a matrix by evaluating `f(x, y)` for every cell.
    pub fn from_fn(
        width: usize,
        height: usize,
        mut f: impl FnMut(usize, usize) -> T,
    ) -> PivResult<Self> {
        let needed = element_count(width, height)?;
        let mut data = Vec::with_capacity(needed);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Row-major backing buffer.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Returns the element at column `x`, row `y`.
    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(y * self.width + x)
    }

    /// Returns a mutable reference to the element at column `x`, row `y`.
    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut T> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get_mut(y * self.width + x)
    }

    /// Returns row `y` as a slice.
    pub fn row(&self, y: usize) -> Option<&[T]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.width;
        self.data.get(start..start + self.width)
    }

    /// Iterates over rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.data.chunks_exact(self.width)
    }

    /// Returns a borrowed view of the matrix.
    pub fn view(&self) -> ImageView<'_, T> {
        ImageView {
            data: &self.data,
            width: self.width,
            height: self.height,
            stride: self.width,
        }
    }
}

impl<T: Clone> Matrix<T> {
    /// Creates a matrix with every cell set to `value`.
    pub fn filled(width: usize, height: usize, value: T) -> PivResult<Self> {
        let needed = element_count(width, height)?;
        Ok(Self {
            data: vec![value; needed],
            width,
            height,
        })
    }
}

impl Matrix<f32> {
    /// Widens an 8-bit grayscale buffer into an intensity frame.
    pub fn from_gray_u8(data: &[u8], width: usize, height: usize) -> PivResult<Self> {
        Self::new(data.iter().map(|&v| v as f32).collect(), width, height)
    }
}

fn element_count(width: usize, height: usize) -> PivResult<usize> {
    if width == 0 || height == 0 {
        return Err(PivError::InvalidDimensions { width, height });
    }
    width
        .checked_mul(height)
        .ok_or(PivError::InvalidDimensions { width, height })
}
