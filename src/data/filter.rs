use std::collections::BTreeSet;

use super::model::AlgorithmCurve;
use crate::config::PlotConfig;

// ---------------------------------------------------------------------------
// Visibility: which algorithms are shown
// ---------------------------------------------------------------------------

/// Names of the algorithms currently shown.
pub type VisibilityState = BTreeSet<String>;

/// Initialise a [`VisibilityState`] with every loaded algorithm shown.
pub fn init_visibility(curves: &[AlgorithmCurve]) -> VisibilityState {
    curves.iter().map(|c| c.name.clone()).collect()
}

/// Indices of visible curves in the order they must be drawn.
///
/// Curves are drawn by ascending z-order so that the highest z lands on top.
/// The sort is stable: equal z keeps load (configuration) order.
pub fn draw_order(
    curves: &[AlgorithmCurve],
    visible: &VisibilityState,
    config: &PlotConfig,
) -> Vec<usize> {
    let mut order: Vec<usize> = curves
        .iter()
        .enumerate()
        .filter(|(_, c)| visible.contains(&c.name))
        .map(|(i, _)| i)
        .collect();
    order.sort_by_key(|&i| config.z_order(&curves[i].name));
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{InterpolatedCurve, ResultSeries};

    fn named(name: &str) -> AlgorithmCurve {
        AlgorithmCurve {
            name: name.into(),
            series: ResultSeries::default(),
            curve: InterpolatedCurve {
                thresholds: Vec::new(),
                precision: Vec::new(),
            },
        }
    }

    fn five() -> Vec<AlgorithmCurve> {
        ["IIM", "MTV", "SLIM", "KRIMP", "CHARM"]
            .into_iter()
            .map(named)
            .collect()
    }

    #[test]
    fn raised_algorithm_is_drawn_last() {
        let curves = five();
        let visible = init_visibility(&curves);
        let order = draw_order(&curves, &visible, &PlotConfig::default());
        // MTV (z=10) last, the rest in configuration order.
        assert_eq!(order, vec![0, 2, 3, 4, 1]);
    }

    #[test]
    fn hidden_algorithms_are_skipped() {
        let curves = five();
        let mut visible = init_visibility(&curves);
        visible.remove("MTV");
        visible.remove("IIM");
        let order = draw_order(&curves, &visible, &PlotConfig::default());
        assert_eq!(order, vec![2, 3, 4]);
    }

    #[test]
    fn lowered_algorithm_is_drawn_first() {
        let curves = five();
        let mut config = PlotConfig::default();
        if let Some(style) = config.algorithms.iter_mut().find(|s| s.name == "CHARM") {
            style.z_order = Some(0);
        }
        let order = draw_order(&curves, &init_visibility(&curves), &config);
        assert_eq!(order, vec![4, 0, 2, 3, 1]);
    }
}
