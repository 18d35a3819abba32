//! Min-max scaling of outcome counts into point radii.
//!
//! The dashboard scales radii twice: once over every row in the time
//! window and again over the rows left after disease filtering. Both
//! boundaries call [`normalize`] with their own [`RadiusScale`]. The two
//! scales disagree on the fallback used when all counts are equal (`0`
//! versus `1000`); both values are kept as they are.

use outbreak_map_report_models::FilteredRow;

/// Linear mapping from normalized counts (`0.0..=1.0`) to radii.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiusScale {
    /// Multiplier applied to the normalized count.
    pub factor: f64,
    /// Added after scaling.
    pub offset: f64,
    /// Radius given to every row when all counts are equal.
    pub fallback: f64,
}

/// Scale applied over all rows in the time window.
pub const WINDOW_SCALE: RadiusScale = RadiusScale {
    factor: 100_000.0,
    offset: 0.0,
    fallback: 0.0,
};

/// Scale applied over the disease-filtered rows. These are the radii that
/// get drawn.
pub const DISEASE_SCALE: RadiusScale = RadiusScale {
    factor: 50_000_000.0,
    offset: 5.0,
    fallback: 1000.0,
};

/// Maps each value to a radius by min-max scaling over `values`.
///
/// Returns an empty vector for empty input.
#[must_use]
pub fn normalize(values: &[f64], scale: RadiusScale) -> Vec<f64> {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if max > min {
        let span = max - min;
        values
            .iter()
            .map(|v| ((v - min) / span).mul_add(scale.factor, scale.offset))
            .collect()
    } else {
        vec![scale.fallback; values.len()]
    }
}

/// Recomputes the `radius` of every row from its outcome count.
pub fn apply_radii(rows: &mut [FilteredRow], scale: RadiusScale) {
    let counts: Vec<f64> = rows.iter().map(|r| r.relevant_outcome_count).collect();
    for (row, radius) in rows.iter_mut().zip(normalize(&counts, scale)) {
        row.radius = radius;
    }
}
