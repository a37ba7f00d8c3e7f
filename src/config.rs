//! Run configuration: which dataset, which algorithms, and how to draw them.
//!
//! Loaded from a JSON file when one is given, otherwise [`PlotConfig::default`]
//! reproduces the standard five-miner comparison on the `Background` dataset.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Z-order given to algorithms without an override.
pub const DEFAULT_Z_ORDER: i32 = 5;

/// Display settings for one algorithm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmStyle {
    /// File-name prefix, e.g. `KRIMP`.
    pub name: String,
    /// `b`, `g`, `c`, `m`, `r`, `y`, `k`, `w` or `#rrggbb`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z_order: Option<i32>,
}

impl AlgorithmStyle {
    pub fn new(name: &str, color: &str) -> Self {
        Self {
            name: name.to_string(),
            color: Some(color.to_string()),
            z_order: None,
        }
    }

    fn with_z_order(mut self, z: i32) -> Self {
        self.z_order = Some(z);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    pub dataset: String,
    /// Directory holding one sub-directory per dataset.
    pub data_dir: PathBuf,
    pub algorithms: Vec<AlgorithmStyle>,
    pub default_z_order: i32,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            dataset: "Background".to_string(),
            data_dir: PathBuf::from("PrecisionRecall"),
            algorithms: vec![
                AlgorithmStyle::new("IIM", "b"),
                AlgorithmStyle::new("MTV", "g").with_z_order(10),
                AlgorithmStyle::new("SLIM", "c"),
                AlgorithmStyle::new("KRIMP", "m"),
                AlgorithmStyle::new("CHARM", "r"),
            ],
            default_z_order: DEFAULT_Z_ORDER,
        }
    }
}

impl PlotConfig {
    /// Read a JSON config. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("parsing config {}", path.display()))
    }

    /// `<data_dir>/<dataset>/<ALG>_<dataset>_pr.txt`
    pub fn input_path(&self, algorithm: &str) -> PathBuf {
        self.data_dir
            .join(&self.dataset)
            .join(format!("{algorithm}_{}_pr.txt", self.dataset))
    }

    pub fn z_order(&self, algorithm: &str) -> i32 {
        self.style(algorithm)
            .and_then(|s| s.z_order)
            .unwrap_or(self.default_z_order)
    }

    pub fn style(&self, algorithm: &str) -> Option<&AlgorithmStyle> {
        self.algorithms.iter().find(|s| s.name == algorithm)
    }

    pub fn algorithm_names(&self) -> Vec<String> {
        self.algorithms.iter().map(|s| s.name.clone()).collect()
    }

    /// Suffix for the recall axis label. The `caviar` datasets hold rare itemsets.
    pub fn recall_label_suffix(&self) -> &'static str {
        if self.dataset.contains("caviar") {
            " (rare)"
        } else {
            ""
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn default_matches_standard_comparison() {
        let cfg = PlotConfig::default();
        assert_eq!(
            cfg.algorithm_names(),
            vec!["IIM", "MTV", "SLIM", "KRIMP", "CHARM"]
        );
        assert_eq!(cfg.z_order("MTV"), 10);
        assert_eq!(cfg.z_order("IIM"), DEFAULT_Z_ORDER);
        assert_eq!(cfg.z_order("unknown"), DEFAULT_Z_ORDER);
        assert_eq!(
            cfg.style("CHARM").and_then(|s| s.color.as_deref()),
            Some("r")
        );
    }

    #[test]
    fn input_path_layout() {
        let cfg = PlotConfig {
            data_dir: PathBuf::from("/data/pr"),
            ..Default::default()
        };
        assert_eq!(
            cfg.input_path("SLIM"),
            PathBuf::from("/data/pr/Background/SLIM_Background_pr.txt")
        );
    }

    #[test]
    fn rare_suffix_only_for_caviar() {
        let mut cfg = PlotConfig::default();
        assert_eq!(cfg.recall_label_suffix(), "");
        cfg.dataset = "caviar".into();
        assert_eq!(cfg.recall_label_suffix(), " (rare)");
    }

    #[test]
    fn load_partial_json_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r##"{{ "dataset": "plants", "algorithms": [ {{ "name": "IIM", "z_order": 20 }}, {{ "name": "MTV", "color": "#ff8800" }} ] }}"##
        )
        .unwrap();

        let cfg = PlotConfig::load(file.path()).unwrap();
        assert_eq!(cfg.dataset, "plants");
        assert_eq!(cfg.data_dir, PathBuf::from("PrecisionRecall"));
        assert_eq!(cfg.default_z_order, DEFAULT_Z_ORDER);
        assert_eq!(cfg.z_order("IIM"), 20);
        assert_eq!(cfg.z_order("MTV"), DEFAULT_Z_ORDER);
        assert_eq!(cfg.style("IIM").unwrap().color, None);
    }

    #[test]
    fn load_rejects_bad_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        assert!(PlotConfig::load(file.path()).is_err());
    }
}
