//! Convenience helpers for loading frames via the `image` crate.
//!
//! Available when the `image-io` feature is enabled.

use crate::image::Frame;
use crate::util::{PivError, PivResult};
use std::path::Path;

/// Creates an intensity frame from a grayscale image buffer.
pub fn frame_from_gray_image(img: &image::GrayImage) -> PivResult<Frame> {
    let width = img.width() as usize;
    let height = img.height() as usize;
    Frame::from_gray_u8(img.as_raw(), width, height)
}

/// Creates an intensity frame from a dynamic image, converting to luma first.
pub fn frame_from_dynamic_image(img: &image::DynamicImage) -> PivResult<Frame> {
    let gray = img.to_luma8();
    frame_from_gray_image(&gray)
}

/// Loads an image from disk and converts it to a grayscale frame.
pub fn load_gray_frame<P: AsRef<Path>>(path: P) -> PivResult<Frame> {
    let path = path.as_ref();
    let img = image::open(path).map_err(|err| PivError::ImageIo {
        reason: format!("{}: {err}", path.display()),
    })?;
    frame_from_dynamic_image(&img)
}
