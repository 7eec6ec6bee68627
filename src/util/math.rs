//! Numeric helpers shared by the correlation kernel.

/// Returns the sum of squared deviations from the mean, clamped at zero.
///
/// `sum_sq - sum^2 / n` can go slightly negative through cancellation.
pub(crate) fn centered_energy(sum: f64, sum_sq: f64, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    (sum_sq - sum * sum / count as f64).max(0.0)
}
