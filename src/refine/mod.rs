//! Sub-pixel refinement of correlation peaks.

pub(crate) mod gauss1d;
pub(crate) mod subpixel;
