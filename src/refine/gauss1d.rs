//! Three-point Gaussian peak fitting.

/// Estimates the sub-sample peak offset for a Gaussian fit.
///
/// Given samples at `x = -1, 0, +1` (`fm`, `f0`, `fp`), fits a parabola to
/// their logarithms and returns the vertex offset. All three samples must be
/// strictly positive. A flat log-profile has no defined vertex and yields
/// `None`.
pub fn gaussian_peak_offset_1d(fm: f32, f0: f32, fp: f32) -> Option<f64> {
    if !(fm > 0.0 && f0 > 0.0 && fp > 0.0) {
        return None;
    }
    if !fm.is_finite() || !f0.is_finite() || !fp.is_finite() {
        return None;
    }

    let lm = (fm as f64).ln();
    let l0 = (f0 as f64).ln();
    let lp = (fp as f64).ln();

    let denom = 2.0 * (lm + lp - 2.0 * l0);
    if denom == 0.0 {
        return None;
    }
    let dx = (lm - lp) / denom;
    dx.is_finite().then_some(dx)
}
