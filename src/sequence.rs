//! Frame-sequence indexing and file naming.
//!
//! Frames are stored as one file per index, named by the index zero-padded to
//! eight digits. Consecutive pairs `(i, i + step)` are processed for
//! `i = start, start + step, ...` while `i <= end`.

use crate::util::{PivError, PivResult};
use std::path::{Path, PathBuf};

/// Default frame file extension.
pub const DEFAULT_EXTENSION: &str = "bmp";

/// Inclusive start/end/step range of first-frame indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameSequence {
    start: u64,
    end: u64,
    step: u64,
}

/// Indices of the two frames compared in one evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FramePair {
    pub first: u64,
    pub second: u64,
}

impl FrameSequence {
    /// Creates a sequence; `step` must be at least 1.
    pub fn new(start: u64, end: u64, step: u64) -> PivResult<Self> {
        if step == 0 {
            return Err(PivError::InvalidInput("frame step must be at least 1"));
        }
        Ok(Self { start, end, step })
    }

    /// Frame pairs in ascending order.
    pub fn pairs(&self) -> impl Iterator<Item = FramePair> {
        let Self { start, end, step } = *self;
        let mut next = Some(start);
        std::iter::from_fn(move || {
            let first = next.filter(|&i| i <= end)?;
            let second = first.checked_add(step)?;
            next = Some(second);
            Some(FramePair { first, second })
        })
    }
}

impl FramePair {
    /// File name of the horizontal displacement table, e.g. `dx_3_4.csv`.
    pub fn dx_file_name(&self) -> String {
        format!("dx_{}_{}.csv", self.first, self.second)
    }

    /// File name of the vertical displacement table, e.g. `dy_3_4.csv`.
    pub fn dy_file_name(&self) -> String {
        format!("dy_{}_{}.csv", self.first, self.second)
    }
}

/// File name for frame `index`, e.g. `00000012.bmp`.
pub fn frame_file_name(index: u64, extension: &str) -> String {
    format!("{index:08}.{}", extension.trim_start_matches('.'))
}

/// Full path of frame `index` inside `dir`.
pub fn frame_path(dir: &Path, index: u64, extension: &str) -> PathBuf {
    dir.join(frame_file_name(index, extension))
}
