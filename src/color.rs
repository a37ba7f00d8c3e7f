use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::config::PlotConfig;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Colour specs
// ---------------------------------------------------------------------------

/// Parse a single-letter colour code (`b g r c m y k w`) or `#rrggbb`.
pub fn parse_color(spec: &str) -> Option<Color32> {
    let spec = spec.trim();
    match spec {
        "b" => return Some(Color32::from_rgb(0, 0, 255)),
        "g" => return Some(Color32::from_rgb(0, 128, 0)),
        "r" => return Some(Color32::from_rgb(255, 0, 0)),
        "c" => return Some(Color32::from_rgb(0, 191, 191)),
        "m" => return Some(Color32::from_rgb(191, 0, 191)),
        "y" => return Some(Color32::from_rgb(191, 191, 0)),
        "k" => return Some(Color32::BLACK),
        "w" => return Some(Color32::WHITE),
        _ => {}
    }

    let hex = spec.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(Color32::from_rgb(channel(0)?, channel(2)?, channel(4)?))
}

// ---------------------------------------------------------------------------
// Color mapping: algorithm name → Color32
// ---------------------------------------------------------------------------

/// Maps each configured algorithm to its display colour.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl ColorMap {
    /// Configured colours where they parse, generated palette colours otherwise.
    pub fn new(config: &PlotConfig) -> Self {
        let palette = generate_palette(config.algorithms.len());
        let mapping = config
            .algorithms
            .iter()
            .zip(palette)
            .map(|(style, fallback)| {
                let color = match style.color.as_deref() {
                    Some(spec) => parse_color(spec).unwrap_or_else(|| {
                        log::warn!("{}: unknown colour '{spec}', using palette", style.name);
                        fallback
                    }),
                    None => fallback,
                };
                (style.name.clone(), color)
            })
            .collect();

        ColorMap {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a given algorithm.
    pub fn color_for(&self, algorithm: &str) -> Color32 {
        self.mapping
            .get(algorithm)
            .copied()
            .unwrap_or(self.default_color)
    }
}
