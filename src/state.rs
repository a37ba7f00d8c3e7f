use std::path::{Path, PathBuf};

use crate::color::ColorMap;
use crate::config::PlotConfig;
use crate::data::filter::{draw_order, init_visibility, VisibilityState};
use crate::data::model::AlgorithmCurve;
use crate::data::parser::load_algorithm;

// ---------------------------------------------------------------------------
// View selection
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Interpolated precision at the standard recall points.
    Interpolated,
    /// Raw precision and recall against rank k.
    TopK,
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: PlotConfig,

    /// Successfully loaded algorithms, in configuration order.
    pub curves: Vec<AlgorithmCurve>,

    /// Algorithms whose result file failed to load, with the error text.
    pub failures: Vec<(String, String)>,

    /// Which algorithms are shown.
    pub visible: VisibilityState,

    /// Indices into `curves` in draw order (cached).
    pub draw_order: Vec<usize>,

    pub color_map: ColorMap,

    pub view: View,

    /// Keep both axes fixed to [0, 1].
    pub lock_axes: bool,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: PlotConfig) -> Self {
        let color_map = ColorMap::new(&config);
        Self {
            config,
            curves: Vec::new(),
            failures: Vec::new(),
            visible: VisibilityState::new(),
            draw_order: Vec::new(),
            color_map,
            view: View::Interpolated,
            lock_axes: true,
            status_message: None,
        }
    }

    /// Load every configured algorithm's result file.
    ///
    /// Files that fail are logged and recorded in `failures`; the others are
    /// still shown.
    pub fn reload(&mut self) {
        self.curves.clear();
        self.failures.clear();

        for name in self.config.algorithm_names() {
            let path = self.config.input_path(&name);
            match load_algorithm(&name, &path) {
                Ok(curve) => {
                    log::info!(
                        "Loaded {name}: {} operating points from {}",
                        curve.series.len(),
                        path.display()
                    );
                    if curve.curve.defined_count() == 0 {
                        log::warn!("{name}: no operating point reaches any recall threshold");
                    }
                    self.curves.push(curve);
                }
                Err(e) => {
                    log::error!("Failed to load {name}: {e:#}");
                    self.failures.push((name, format!("{e:#}")));
                }
            }
        }

        self.visible = init_visibility(&self.curves);
        self.color_map = ColorMap::new(&self.config);
        self.refresh_order();

        self.status_message = match self.failures.len() {
            0 => None,
            1 => Some(format!("Error: {}", self.failures[0].1)),
            n => Some(format!("Error: {n} result files failed to load (see log)")),
        };
    }

    /// Point at a new data directory and reload.
    pub fn set_data_dir(&mut self, dir: PathBuf) {
        self.config.data_dir = dir;
        self.reload();
    }

    /// Recompute `draw_order` after a visibility change.
    pub fn refresh_order(&mut self) {
        self.draw_order = draw_order(&self.curves, &self.visible, &self.config);
    }

    /// Toggle one algorithm on or off.
    pub fn toggle_visible(&mut self, name: &str) {
        if !self.visible.remove(name) {
            self.visible.insert(name.to_string());
        }
        self.refresh_order();
    }

    pub fn show_all(&mut self) {
        self.visible = init_visibility(&self.curves);
        self.refresh_order();
    }

    pub fn show_none(&mut self) {
        self.visible.clear();
        self.refresh_order();
    }

    pub fn export(&mut self, path: &Path) {
        match crate::data::export::export_csv(path, &self.curves) {
            Ok(()) => {
                log::info!(
                    "Exported {} curves to {}",
                    self.curves.len(),
                    path.display()
                );
                self.status_message = None;
            }
            Err(e) => {
                log::error!("Export failed: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    pub fn recall_label(&self) -> String {
        format!("Recall{}", self.config.recall_label_suffix())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn write_result(dir: &Path, cfg: &PlotConfig, name: &str, body: &str) {
        let path = cfg.input_path(name);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, body).unwrap();
        assert!(path.starts_with(dir));
    }

    #[test]
    fn reload_keeps_good_files_and_records_failures() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = PlotConfig {
            data_dir: dir.path().to_path_buf(),
            ..Default::default()
        };
        write_result(
            dir.path(),
            &cfg,
            "IIM",
            "Precision: [0.9, 0.6]\nRecall: [0.5, 0.8]\n",
        );
        write_result(dir.path(), &cfg, "MTV", "Precision: [1.0]\nRecall: [0.2]\n");
        write_result(
            dir.path(),
            &cfg,
            "SLIM",
            "Precision: [1.0, 0.5]\nRecall: [0.2]\n",
        );

        let mut state = AppState::new(cfg);
        state.reload();

        let loaded: Vec<&str> = state.curves.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(loaded, vec!["IIM", "MTV"]);
        let failed: Vec<&str> = state.failures.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(failed, vec!["SLIM", "KRIMP", "CHARM"]);
        assert!(state.status_message.is_some());
        // MTV has the raised z-order.
        assert_eq!(state.draw_order, vec![0, 1]);
    }

    #[test]
    fn toggling_updates_draw_order() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = PlotConfig {
            data_dir: dir.path().to_path_buf(),
            ..Default::default()
        };
        for name in cfg.algorithm_names() {
            write_result(dir.path(), &cfg, &name, "Precision: [0.5]\nRecall: [0.5]\n");
        }

        let mut state = AppState::new(cfg);
        state.reload();
        assert!(state.failures.is_empty());
        assert_eq!(state.status_message, None);
        assert_eq!(state.draw_order, vec![0, 2, 3, 4, 1]);

        state.toggle_visible("MTV");
        assert_eq!(state.draw_order, vec![0, 2, 3, 4]);
        state.toggle_visible("MTV");
        assert_eq!(state.draw_order, vec![0, 2, 3, 4, 1]);

        state.show_none();
        assert!(state.draw_order.is_empty());
        state.show_all();
        assert_eq!(state.draw_order.len(), 5);
    }

    #[test]
    fn rare_label_for_caviar() {
        let state = AppState::new(PlotConfig {
            dataset: "caviar".into(),
            ..Default::default()
        });
        assert_eq!(state.recall_label(), "Recall (rare)");
    }
}
