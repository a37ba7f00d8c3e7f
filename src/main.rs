mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use eframe::egui;

use app::PrViewerApp;
use config::PlotConfig;
use data::model::AlgorithmCurve;
use data::parser::load_algorithm;
use state::AppState;

#[derive(Parser, Debug)]
#[command(name = "pr-viewer")]
#[command(about = "Compare interpolated precision-recall curves of itemset miners")]
struct Args {
    /// JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Root directory holding one sub-directory per dataset
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Dataset name, e.g. Background or caviar
    #[arg(long)]
    dataset: Option<String>,

    /// Write the interpolated curves to this CSV file and exit
    #[arg(long)]
    export: Option<PathBuf>,
}

impl Args {
    fn plot_config(&self) -> Result<PlotConfig> {
        let mut config = match &self.config {
            Some(path) => PlotConfig::load(path)?,
            None => PlotConfig::default(),
        };
        if let Some(dir) = &self.data_dir {
            config.data_dir = dir.clone();
        }
        if let Some(dataset) = &self.dataset {
            config.dataset = dataset.clone();
        }
        if config.algorithms.is_empty() {
            bail!("configuration lists no algorithms");
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config = args.plot_config()?;

    if let Some(out) = &args.export {
        return export_headless(&config, out);
    }

    let mut state = AppState::new(config);
    state.reload();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 750.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "PR Viewer – Itemset Precision-Recall",
        options,
        Box::new(|_cc| Ok(Box::new(PrViewerApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("running viewer: {e}"))
}

/// Load every algorithm, failing on the first bad file, and write the CSV.
fn export_headless(config: &PlotConfig, out: &std::path::Path) -> Result<()> {
    let curves = config
        .algorithm_names()
        .iter()
        .map(|name| {
            load_algorithm(name, &config.input_path(name))
                .with_context(|| format!("loading {name}"))
        })
        .collect::<Result<Vec<AlgorithmCurve>>>()?;

    data::export::export_csv(out, &curves)?;
    log::info!(
        "Wrote {} interpolated curves to {}",
        curves.len(),
        out.display()
    );
    Ok(())
}
