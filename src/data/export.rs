use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use super::model::{standard_thresholds, AlgorithmCurve};

// ---------------------------------------------------------------------------
// CSV export of interpolated curves
// ---------------------------------------------------------------------------

/// Write the interpolated curves to `path`.
///
/// Layout: header `recall,<ALG1>,<ALG2>,…`, then one row per standard recall
/// threshold. Undefined precision is written as an empty cell.
pub fn export_csv(path: &Path, curves: &[AlgorithmCurve]) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("creating {}", path.display()))?;
    write_csv(file, curves)
        .with_context(|| format!("writing {}", path.display()))
}

pub fn write_csv<W: Write>(out: W, curves: &[AlgorithmCurve]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);

    let mut header = vec!["recall".to_string()];
    header.extend(curves.iter().map(|c| c.name.clone()));
    writer.write_record(&header).context("writing CSV header")?;

    for (row, threshold) in standard_thresholds().iter().enumerate() {
        let mut record = vec![format!("{threshold:.1}")];
        for c in curves {
            let cell = match c.curve.precision.get(row) {
                Some(p) if !p.is_nan() => p.to_string(),
                _ => String::new(),
            };
            record.push(cell);
        }
        writer
            .write_record(&record)
            .with_context(|| format!("writing CSV row {row}"))?;
    }

    writer.flush().context("flushing CSV")?;
    Ok(())
}
