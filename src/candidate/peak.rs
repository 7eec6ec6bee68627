//! Global maximum search over a correlation map.

use crate::kernel::CorrelationMap;

/// Location and value of a correlation map maximum.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Peak {
    /// Column of the peak in the map.
    pub x: usize,
    /// Row of the peak in the map.
    pub y: usize,
    /// Correlation coefficient at the peak.
    pub score: f32,
}

/// Returns the global maximum of `map`.
///
/// Ties resolve to the first cell in row-major order: a later cell only
/// replaces the current best when strictly greater. NaN cells never win.
pub fn locate_peak(map: &CorrelationMap) -> Peak {
    let side = map.side();
    let mut best = Peak {
        x: 0,
        y: 0,
        score: f32::NEG_INFINITY,
    };
    for (idx, &score) in map.values().iter().enumerate() {
        if score > best.score {
            best = Peak {
                x: idx % side,
                y: idx / side,
                score,
            };
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::{locate_peak, Peak};
    use crate::kernel::CorrelationMap;

    #[test]
    fn finds_global_maximum() {
        let map = CorrelationMap::new(
            vec![0.1, 0.2, 0.3, 0.4, 0.9, 0.5, -0.2, 0.0, 0.7],
            3,
        )
        .unwrap();
        assert_eq!(
            locate_peak(&map),
            Peak {
                x: 1,
                y: 1,
                score: 0.9
            }
        );
    }

    #[test]
    fn ties_resolve_to_first_in_row_major_order() {
        let map = CorrelationMap::new(
            vec![0.0, 0.0, 0.8, 0.8, 0.1, 0.0, 0.0, 0.0, 0.8],
            3,
        )
        .unwrap();
        let peak = locate_peak(&map);
        assert_eq!((peak.x, peak.y), (2, 0));
    }

    #[test]
    fn all_zero_map_peaks_at_origin() {
        let map = CorrelationMap::new(vec![0.0; 25], 5).unwrap();
        let peak = locate_peak(&map);
        assert_eq!((peak.x, peak.y, peak.score), (0, 0, 0.0));
    }
}
