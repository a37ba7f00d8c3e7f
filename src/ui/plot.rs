use eframe::egui::Ui;
use egui_plot::{Corner, Legend, Line, LineStyle, Plot, PlotBounds, PlotPoints, Points};

use crate::data::interp::sort_by_recall;
use crate::state::{AppState, View};

const LINE_WIDTH: f32 = 2.0;
const MARKER_RADIUS: f32 = 4.0;

// ---------------------------------------------------------------------------
// Central panel
// ---------------------------------------------------------------------------

/// Render whichever plot the top bar has selected.
pub fn central_plot(ui: &mut Ui, state: &AppState) {
    if state.curves.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No result files loaded  (File → Open data directory…)");
        });
        return;
    }

    match state.view {
        View::Interpolated => precision_recall_plot(ui, state),
        View::TopK => top_k_plot(ui, state),
    }
}

// ---------------------------------------------------------------------------
// Interpolated precision-recall
// ---------------------------------------------------------------------------

/// One line-and-marker series per algorithm, drawn in z-order.
pub fn precision_recall_plot(ui: &mut Ui, state: &AppState) {
    Plot::new("precision_recall_plot")
        .legend(Legend::default().position(Corner::RightBottom))
        .x_axis_label(state.recall_label())
        .y_axis_label("Precision")
        .include_x(0.0)
        .include_x(1.0)
        .include_y(0.0)
        .include_y(1.0)
        .allow_boxed_zoom(!state.lock_axes)
        .allow_drag(!state.lock_axes)
        .allow_scroll(!state.lock_axes)
        .allow_zoom(!state.lock_axes)
        .show(ui, |plot_ui| {
            if state.lock_axes {
                plot_ui.set_plot_bounds(PlotBounds::from_min_max([0.0, 0.0], [1.0, 1.0]));
            }

            for &idx in &state.draw_order {
                let alg = &state.curves[idx];
                let color = state.color_map.color_for(&alg.name);

                // Undefined thresholds form a tail (the curve is non-increasing
                // in recall), so dropping them never joins across a gap.
                let sorted: Vec<[f64; 2]> = sort_by_recall(&alg.curve.points())
                    .into_iter()
                    .filter(|(_, p)| !p.is_nan())
                    .map(|(r, p)| [r, p])
                    .collect();

                plot_ui.line(
                    Line::new(PlotPoints::from(sorted.clone()))
                        .name(&alg.name)
                        .color(color)
                        .width(LINE_WIDTH),
                );
                plot_ui.points(
                    Points::new(PlotPoints::from(sorted))
                        .name(&alg.name)
                        .color(color)
                        .radius(MARKER_RADIUS),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Precision and recall by rank
// ---------------------------------------------------------------------------

/// Raw precision (solid) and recall (dashed) against k = 1..n.
pub fn top_k_plot(ui: &mut Ui, state: &AppState) {
    let max_k = state
        .draw_order
        .iter()
        .map(|&i| state.curves[i].series.len())
        .max()
        .unwrap_or(0)
        .max(2);

    Plot::new("top_k_plot")
        .legend(Legend::default().position(Corner::RightBottom))
        .x_axis_label("Top k")
        .y_axis_label("Precision / Recall")
        .allow_boxed_zoom(!state.lock_axes)
        .allow_drag(!state.lock_axes)
        .allow_scroll(!state.lock_axes)
        .allow_zoom(!state.lock_axes)
        .show(ui, |plot_ui| {
            if state.lock_axes {
                plot_ui.set_plot_bounds(PlotBounds::from_min_max(
                    [1.0, -0.1],
                    [max_k as f64, 1.1],
                ));
            }

            for &idx in &state.draw_order {
                let alg = &state.curves[idx];
                let color = state.color_map.color_for(&alg.name);

                plot_ui.line(
                    Line::new(PlotPoints::from(by_rank(&alg.series.precision)))
                        .name(format!("{} precision", alg.name))
                        .color(color)
                        .width(LINE_WIDTH),
                );
                plot_ui.line(
                    Line::new(PlotPoints::from(by_rank(&alg.series.recall)))
                        .name(format!("{} recall", alg.name))
                        .color(color)
                        .width(LINE_WIDTH)
                        .style(LineStyle::dashed_dense()),
                );
            }
        });
}

fn by_rank(values: &[f64]) -> Vec<[f64; 2]> {
    values
        .iter()
        .enumerate()
        .map(|(k, &v)| [(k + 1) as f64, v])
        .collect()
}
