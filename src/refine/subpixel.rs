//! Displacement estimation from a located correlation peak.

use crate::candidate::peak::Peak;
use crate::kernel::CorrelationMap;
use crate::refine::gauss1d::gaussian_peak_offset_1d;

/// Returns true when the peak clears the acceptance threshold (percent).
pub fn passes_threshold(score: f32, threshold_pct: i32) -> bool {
    (score as f64) * 100.0 > threshold_pct as f64
}

/// Sub-pixel offset `(dx, dy)` of `peak` within `map`.
///
/// Zero on both axes when the peak touches the map border or when the peak
/// or any 4-neighbor is non-positive.
pub fn subpixel_offset(map: &CorrelationMap, peak: Peak) -> (f64, f64) {
    let last = map.side().saturating_sub(1);
    if peak.x == 0 || peak.y == 0 || peak.x >= last || peak.y >= last {
        return (0.0, 0.0);
    }

    let sample = |col: usize, row: usize| map.get(col, row).unwrap_or(0.0);
    let center = sample(peak.x, peak.y);
    let left = sample(peak.x - 1, peak.y);
    let right = sample(peak.x + 1, peak.y);
    let top = sample(peak.x, peak.y - 1);
    let bottom = sample(peak.x, peak.y + 1);

    if [center, left, right, top, bottom].iter().any(|&v| v <= 0.0) {
        return (0.0, 0.0);
    }

    let dx = gaussian_peak_offset_1d(left, center, right).unwrap_or(0.0);
    // Vertical fit takes the row below the peak as the leading sample, so a
    // lobe leaning toward larger rows yields a negative offset.
    let dy = gaussian_peak_offset_1d(bottom, center, top).unwrap_or(0.0);
    (dx, dy)
}

/// Converts a located peak into a displacement `(dX, dY)` in pixels.
///
/// Returns `None` when the peak does not clear `threshold_pct`; the caller
/// leaves that grid point undetermined.
pub fn estimate_displacement(
    map: &CorrelationMap,
    peak: Peak,
    threshold_pct: i32,
) -> Option<(f32, f32)> {
    if !passes_threshold(peak.score, threshold_pct) {
        return None;
    }
    let s = map.radius() as f64;
    let (sub_x, sub_y) = subpixel_offset(map, peak);
    let dx = peak.x as f64 + sub_x - s;
    let dy = peak.y as f64 + sub_y - s;
    Some((dx as f32, dy as f32))
}
