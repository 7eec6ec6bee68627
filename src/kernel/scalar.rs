//! Scalar reference kernel for the normalized correlation coefficient.

use crate::kernel::CorrelationMap;
use crate::template::TemplatePlan;
use crate::util::math::centered_energy;
use crate::util::{PivError, PivResult};
use crate::ImageView;

/// Energy products at or below this are treated as a zero denominator.
const MIN_ENERGY_PRODUCT: f64 = 1e-12;

/// Coefficient between the template and the search sub-window whose
/// top-left corner is `(x, y)`.
///
/// Returns 0 when either window is flat or the placement does not fit.
pub fn score_at(search: ImageView<'_, f32>, tpl: &TemplatePlan, x: usize, y: usize) -> f32 {
    let tpl_width = tpl.width();
    let tpl_height = tpl.height();
    if search.width() < tpl_width || search.height() < tpl_height {
        return 0.0;
    }
    if x > search.width() - tpl_width || y > search.height() - tpl_height {
        return 0.0;
    }

    let t_prime = tpl.zero_mean();
    let mut dot = 0.0f64;
    let mut sum_s = 0.0f64;
    let mut sum_s2 = 0.0f64;

    for ty in 0..tpl_height {
        let Some(row) = search.row(y + ty) else {
            return 0.0;
        };
        let base = ty * tpl_width;
        for (tx, &value) in row[x..x + tpl_width].iter().enumerate() {
            let v = value as f64;
            dot += t_prime[base + tx] * v;
            sum_s += v;
            sum_s2 += v * v;
        }
    }

    let energy_s = centered_energy(sum_s, sum_s2, tpl_width * tpl_height);
    let product = tpl.energy() * energy_s;
    if product <= MIN_ENERGY_PRODUCT {
        return 0.0;
    }

    // The template is zero-mean, so subtracting the search mean from every
    // sample would not change `dot`.
    let score = dot / product.sqrt();
    if score.is_finite() {
        score as f32
    } else {
        0.0
    }
}

/// Slides the template over every placement of the search window.
///
/// The search window must exceed the template by the same even margin on
/// both axes; the map side is `search - template + 1`.
pub fn correlate(search: ImageView<'_, f32>, tpl: &TemplatePlan) -> PivResult<CorrelationMap> {
    let tpl_width = tpl.width();
    let tpl_height = tpl.height();
    if search.width() < tpl_width || search.height() < tpl_height {
        return Err(PivError::RoiOutOfBounds {
            x: 0,
            y: 0,
            width: tpl_width,
            height: tpl_height,
            img_width: search.width(),
            img_height: search.height(),
        });
    }

    let cols = search.width() - tpl_width + 1;
    let rows = search.height() - tpl_height + 1;
    if cols != rows {
        return Err(PivError::InvalidInput(
            "search window margin must match on both axes",
        ));
    }

    let mut values = Vec::with_capacity(cols * rows);
    for y in 0..rows {
        for x in 0..cols {
            values.push(score_at(search, tpl, x, y));
        }
    }
    CorrelationMap::new(values, cols)
}
