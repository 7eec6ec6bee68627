//! Error types for corrpiv.

use thiserror::Error;

/// Result alias for corrpiv operations.
pub type PivResult<T> = std::result::Result<T, PivError>;

/// Errors that can occur when building frames or computing displacement fields.
///
/// Per-grid-point numerical degeneracies are not errors; they surface as NaN
/// cells in the output field.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PivError {
    /// Width or height is zero, or the element count overflows.
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    /// Row stride is smaller than the row width.
    #[error("invalid stride {stride} for width {width}")]
    InvalidStride { width: usize, stride: usize },
    /// Backing buffer length does not match the requested shape.
    #[error("buffer too small: needed {needed}, got {got}")]
    BufferTooSmall { needed: usize, got: usize },
    /// A requested sub-window does not fit inside the image.
    #[error(
        "roi ({x}, {y}, {width}x{height}) out of bounds for {img_width}x{img_height} image"
    )]
    RoiOutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
        img_width: usize,
        img_height: usize,
    },
    /// The two frames of a pair differ in size.
    #[error("frame size mismatch: {first_width}x{first_height} vs {second_width}x{second_height}")]
    FrameSizeMismatch {
        first_width: usize,
        first_height: usize,
        second_width: usize,
        second_height: usize,
    },
    /// The input data or parameters are invalid.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
    /// Image decoding failed.
    #[error("image io: {reason}")]
    ImageIo { reason: String },
}
