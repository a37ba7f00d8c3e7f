use super::model::{standard_thresholds, InterpolatedCurve, ResultSeries};

// ---------------------------------------------------------------------------
// Interpolated precision
// ---------------------------------------------------------------------------

/// Maximum precision among pairs whose recall is at least `threshold`.
///
/// `pairs` are `(precision, recall)`. Returns NaN when no pair qualifies.
/// NaN precisions in the input are ignored by the max.
pub fn interpolated_precision(pairs: &[(f64, f64)], threshold: f64) -> f64 {
    pairs
        .iter()
        .filter(|&&(_, r)| r >= threshold)
        .map(|&(p, _)| p)
        .fold(f64::NAN, f64::max)
}

/// Interpolate a series at the given recall thresholds.
pub fn interpolate_at(series: &ResultSeries, thresholds: &[f64]) -> InterpolatedCurve {
    let pairs = series.pairs();
    InterpolatedCurve {
        thresholds: thresholds.to_vec(),
        precision: thresholds
            .iter()
            .map(|&t| interpolated_precision(&pairs, t))
            .collect(),
    }
}

/// Interpolate a series at the eleven standard recall points.
pub fn interpolate(series: &ResultSeries) -> InterpolatedCurve {
    interpolate_at(series, &standard_thresholds())
}

// ---------------------------------------------------------------------------
// Plot ordering
// ---------------------------------------------------------------------------

/// Sort `(recall, precision)` pairs by recall ascending.
///
/// The sort is stable, so pairs with equal recall keep their input order.
pub fn sort_by_recall(points: &[(f64, f64)]) -> Vec<(f64, f64)> {
    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| a.0.total_cmp(&b.0));
    sorted
}
