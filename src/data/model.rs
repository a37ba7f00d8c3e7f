// ---------------------------------------------------------------------------
// Recall thresholds
// ---------------------------------------------------------------------------

/// Number of standard recall points (0.0, 0.1, …, 1.0).
pub const THRESHOLD_COUNT: usize = 11;

/// The eleven evenly spaced recall thresholds from 0.0 to 1.0 inclusive.
///
/// Computed as `i / 10` rather than by repeated addition so that each
/// threshold is the nearest `f64` to its decimal value.
pub fn standard_thresholds() -> [f64; THRESHOLD_COUNT] {
    let mut out = [0.0; THRESHOLD_COUNT];
    for (i, t) in out.iter_mut().enumerate() {
        *t = i as f64 / (THRESHOLD_COUNT - 1) as f64;
    }
    out
}

// ---------------------------------------------------------------------------
// ResultSeries – one parsed result file
// ---------------------------------------------------------------------------

/// Precision and recall at each top-k cutoff, as written by a miner run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSeries {
    /// Precision at k = 1..n.
    pub precision: Vec<f64>,
    /// Recall at k = 1..n – same length as `precision`.
    pub recall: Vec<f64>,
    /// Wall-clock mining time in seconds, when the file records one.
    pub time_secs: Option<f64>,
    /// Number of itemsets the algorithm returned, when recorded.
    pub mined_itemsets: Option<usize>,
}

impl ResultSeries {
    pub fn new(precision: Vec<f64>, recall: Vec<f64>) -> Self {
        Self {
            precision,
            recall,
            ..Default::default()
        }
    }

    /// Number of operating points.
    pub fn len(&self) -> usize {
        self.precision.len()
    }

    pub fn is_empty(&self) -> bool {
        self.precision.is_empty()
    }

    /// `(precision, recall)` pairs in file order.
    pub fn pairs(&self) -> Vec<(f64, f64)> {
        self.precision
            .iter()
            .copied()
            .zip(self.recall.iter().copied())
            .collect()
    }
}

// ---------------------------------------------------------------------------
// InterpolatedCurve
// ---------------------------------------------------------------------------

/// Interpolated precision at a fixed set of recall thresholds.
///
/// `precision[i]` belongs to `thresholds[i]` and is NaN when no operating
/// point reaches that recall.
#[derive(Debug, Clone, PartialEq)]
pub struct InterpolatedCurve {
    pub thresholds: Vec<f64>,
    pub precision: Vec<f64>,
}

impl InterpolatedCurve {
    /// Number of thresholds, undefined entries included.
    pub fn len(&self) -> usize {
        self.precision.len()
    }

    pub fn is_empty(&self) -> bool {
        self.precision.is_empty()
    }

    /// Number of thresholds with a defined precision.
    pub fn defined_count(&self) -> usize {
        self.precision.iter().filter(|p| !p.is_nan()).count()
    }

    /// `(min, max)` over the defined entries; `None` if every entry is NaN.
    pub fn finite_range(&self) -> Option<(f64, f64)> {
        let mut defined = self.precision.iter().copied().filter(|p| !p.is_nan());
        let first = defined.next()?;
        Some(defined.fold((first, first), |(lo, hi), p| {
            (lo.min(p), hi.max(p))
        }))
    }

    /// `(recall, precision)` points, undefined entries included.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.thresholds
            .iter()
            .copied()
            .zip(self.precision.iter().copied())
            .collect()
    }
}

// ---------------------------------------------------------------------------
// AlgorithmCurve – everything known about one algorithm's run
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct AlgorithmCurve {
    /// Algorithm prefix, e.g. `IIM`.
    pub name: String,
    pub series: ResultSeries,
    pub curve: InterpolatedCurve,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_evenly_spaced() {
        let t = standard_thresholds();
        assert_eq!(t.len(), 11);
        assert_eq!(t[0], 0.0);
        assert_eq!(t[3], 0.3);
        assert_eq!(t[10], 1.0);
        assert!(t.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn finite_range_skips_nan_but_len_keeps_it() {
        let curve = InterpolatedCurve {
            thresholds: vec![0.0, 0.5, 1.0],
            precision: vec![0.9, 0.4, f64::NAN],
        };
        assert_eq!(curve.len(), 3);
        assert_eq!(curve.defined_count(), 2);
        assert_eq!(curve.finite_range(), Some((0.4, 0.9)));
    }

    #[test]
    fn finite_range_all_nan() {
        let curve = InterpolatedCurve {
            thresholds: vec![0.0, 1.0],
            precision: vec![f64::NAN, f64::NAN],
        };
        assert_eq!(curve.finite_range(), None);
        assert_eq!(curve.len(), 2);
    }

    #[test]
    fn series_pairs_zip_in_order() {
        let s = ResultSeries::new(vec![0.9, 0.6], vec![0.5, 0.8]);
        assert_eq!(s.pairs(), vec![(0.9, 0.5), (0.6, 0.8)]);
        assert_eq!(s.len(), 2);
    }
}
