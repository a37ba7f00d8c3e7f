use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::state::{AppState, View};

// ---------------------------------------------------------------------------
// Left side panel – algorithm list and summary
// ---------------------------------------------------------------------------

/// Render the left panel: one checkbox per algorithm plus curve summaries.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading(state.config.dataset.as_str());
    ui.label(state.config.data_dir.display().to_string());
    ui.separator();

    if state.curves.is_empty() && state.failures.is_empty() {
        ui.label("No result files loaded.");
        return;
    }

    ui.horizontal(|ui: &mut Ui| {
        if ui.small_button("All").clicked() {
            state.show_all();
        }
        if ui.small_button("None").clicked() {
            state.show_none();
        }
    });

    let mut toggled: Option<String> = None;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for alg in &state.curves {
                let color = state.color_map.color_for(&alg.name);
                let z = state.config.z_order(&alg.name);
                let mut checked = state.visible.contains(&alg.name);
                let text = RichText::new(format!("{}  (z {z})", alg.name))
                    .strong()
                    .color(color);

                if ui.checkbox(&mut checked, text).changed() {
                    toggled = Some(alg.name.clone());
                }

                ui.indent(&alg.name, |ui: &mut Ui| {
                    ui.label(format!("{} operating points", alg.series.len()));
                    if let Some(n) = alg.series.mined_itemsets {
                        ui.label(format!("{n} itemsets mined"));
                    }
                    match alg.curve.finite_range() {
                        Some((lo, hi)) => ui.label(format!(
                            "interp. precision {lo:.3} – {hi:.3}  ({}/{} defined)",
                            alg.curve.defined_count(),
                            alg.curve.len()
                        )),
                        None => ui.label("interp. precision undefined"),
                    };
                    if let Some(t) = alg.series.time_secs {
                        ui.label(format!("time {t:.1} s"));
                    }
                });
                ui.add_space(4.0);
            }

            if !state.failures.is_empty() {
                ui.separator();
                ui.strong("Not loaded");
                for (name, err) in &state.failures {
                    ui.label(RichText::new(name).color(Color32::RED))
                        .on_hover_text(err.as_str());
                }
            }
        });

    if let Some(name) = toggled {
        state.toggle_visible(&name);
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open data directory…").clicked() {
                open_dir_dialog(state);
                ui.close_menu();
            }
            if ui.button("Reload").clicked() {
                state.reload();
                ui.close_menu();
            }
            if ui
                .add_enabled(!state.curves.is_empty(), egui::Button::new("Export CSV…"))
                .clicked()
            {
                export_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} of {} algorithms loaded",
            state.curves.len(),
            state.config.algorithms.len()
        ));

        ui.separator();

        ui.selectable_value(&mut state.view, View::Interpolated, "Interpolated P-R");
        ui.selectable_value(&mut state.view, View::TopK, "Top-k");

        ui.separator();

        if ui.selectable_label(state.lock_axes, "Lock Axes").clicked() {
            state.lock_axes = !state.lock_axes;
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_dir_dialog(state: &mut AppState) {
    let dir = rfd::FileDialog::new()
        .set_title("Open precision-recall directory")
        .set_directory(&state.config.data_dir)
        .pick_folder();

    if let Some(dir) = dir {
        log::info!("Data directory set to {}", dir.display());
        state.set_data_dir(dir);
    }
}

pub fn export_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Export interpolated curves")
        .add_filter("CSV", &["csv"])
        .set_file_name(format!("{}_interpolated_pr.csv", state.config.dataset))
        .save_file();

    if let Some(path) = file {
        state.export(&path);
    }
}
