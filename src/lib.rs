//! CorrPIV is a CPU particle image velocimetry library built on ZNCC.
//!
//! Each frame pair is sampled on a regular grid. At every grid point a square
//! interrogation window from the first frame is matched against a larger
//! search window in the second frame with the normalized correlation
//! coefficient, and the correlation peak is refined with a three-point
//! Gaussian fit. The result is a pair of `rows x cols` matrices holding the
//! horizontal and vertical displacement, NaN where no reliable peak exists.

mod candidate;
pub mod grid;
pub mod image;
pub mod kernel;
pub mod output;
pub mod piv;
mod refine;
pub mod sequence;
pub mod template;
mod trace;
pub mod util;

pub use candidate::peak::{locate_peak, Peak};
pub use grid::{build_grid, Grid, GridResolution, GridSpec};
#[cfg(feature = "image-io")]
pub use crate::image::io;
pub use crate::image::{Frame, ImageView, Matrix, PaddedFrame, Rect};
pub use kernel::{correlate, CorrelationMap};
pub use output::{write_csv, write_field_csv};
pub use piv::{DisplacementField, Piv, PivParams};
pub use refine::gauss1d::gaussian_peak_offset_1d;
pub use refine::subpixel::{estimate_displacement, passes_threshold, subpixel_offset};
pub use sequence::{frame_file_name, frame_path, FramePair, FrameSequence};
pub use template::TemplatePlan;
pub use util::{PivError, PivResult};
