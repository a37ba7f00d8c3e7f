use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use thiserror::Error;

use super::interp::interpolate;
use super::model::{AlgorithmCurve, ResultSeries};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("no line labelled '{0}'")]
    MissingLabel(&'static str),

    #[error("{label}[{index}]: '{token}' is not a number")]
    MalformedValue {
        label: &'static str,
        index: usize,
        token: String,
    },

    #[error("line labelled '{0}' has no ': ' separator")]
    MissingSeparator(&'static str),

    #[error("precision has {precision} values but recall has {recall}")]
    LengthMismatch { precision: usize, recall: usize },

    #[error("reading input: {0}")]
    Io(String),
}

const PRECISION: &str = "Precision";
const RECALL: &str = "Recall";
const TIME: &str = "Time";
const MINED: &str = "No. mined itemsets";

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load one result file and interpolate it.
pub fn load_algorithm(name: &str, path: &Path) -> Result<AlgorithmCurve> {
    let series = load_file(path)?;
    if series.is_empty() {
        log::warn!("{name}: {} contains no operating points", path.display());
    }
    let curve = interpolate(&series);
    Ok(AlgorithmCurve {
        name: name.to_string(),
        series,
        curve,
    })
}

/// Read and parse a precision/recall result file.
pub fn load_file(path: &Path) -> Result<ResultSeries> {
    let file = File::open(path)
        .with_context(|| format!("opening {}", path.display()))?;
    parse_series(BufReader::new(file))
        .with_context(|| format!("parsing {}", path.display()))
}

/// Parse a result stream.
///
/// Expected lines (other lines are ignored):
///
/// ```text
/// Time: 12.5
/// No. mined itemsets: 3
/// Precision (all): [1.0, 0.5, 0.6666666666666666]
/// Recall (special): [0.1, 0.1, 0.2]
/// ```
///
/// A line counts for a label when it contains the label anywhere. When
/// several lines match, the last one wins.
pub fn parse_series<R: BufRead>(reader: R) -> Result<ResultSeries, ParseError> {
    let mut precision_line: Option<String> = None;
    let mut recall_line: Option<String> = None;
    let mut time_secs = None;
    let mut mined_itemsets = None;

    for line in reader.lines() {
        let line = line.map_err(|e| ParseError::Io(e.to_string()))?;
        if line.contains(PRECISION) {
            precision_line = Some(line.clone());
        }
        if line.contains(RECALL) {
            recall_line = Some(line.clone());
        }
        if line.starts_with(TIME) {
            time_secs = value_after_colon(&line).and_then(|v| v.parse().ok());
        }
        if line.starts_with(MINED) {
            mined_itemsets = value_after_colon(&line).and_then(|v| v.parse().ok());
        }
    }

    let precision_line = precision_line.ok_or(ParseError::MissingLabel(PRECISION))?;
    let recall_line = recall_line.ok_or(ParseError::MissingLabel(RECALL))?;
    let precision = parse_labelled_list(&precision_line, PRECISION)?;
    let recall = parse_labelled_list(&recall_line, RECALL)?;

    if precision.len() != recall.len() {
        return Err(ParseError::LengthMismatch {
            precision: precision.len(),
            recall: recall.len(),
        });
    }

    Ok(ResultSeries {
        precision,
        recall,
        time_secs,
        mined_itemsets,
    })
}

/// Parse `<label>: [v1, v2, …]` into its values.
pub fn parse_labelled_list(line: &str, label: &'static str) -> Result<Vec<f64>, ParseError> {
    let body = value_after_colon(line).ok_or(ParseError::MissingSeparator(label))?;
    parse_list(body, label)
}

// -- helpers --

fn value_after_colon(line: &str) -> Option<&str> {
    line.trim().split_once(": ").map(|(_, rest)| rest.trim())
}

/// Parse a bracketed, comma-separated list. Brackets are optional.
fn parse_list(body: &str, label: &'static str) -> Result<Vec<f64>, ParseError> {
    let inner = body.replace(['[', ']'], "");
    let inner = inner.trim();
    if inner.is_empty() {
        return Ok(Vec::new());
    }
    inner
        .split(',')
        .enumerate()
        .map(|(index, tok)| {
            let tok = tok.trim();
            tok.parse::<f64>().map_err(|_| ParseError::MalformedValue {
                label,
                index,
                token: tok.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Write};

    use super::*;

    fn parse(text: &str) -> Result<ResultSeries, ParseError> {
        parse_series(Cursor::new(text))
    }

    #[test]
    fn parses_plain_labels() {
        assert_eq!(
            parse_labelled_list("Precision: [0.1, 0.5, 0.9]", PRECISION).unwrap(),
            vec![0.1, 0.5, 0.9]
        );
        assert_eq!(
            parse_labelled_list("Recall: [0.2, 0.4, 0.6]", RECALL).unwrap(),
            vec![0.2, 0.4, 0.6]
        );
    }

    #[test]
    fn parses_full_result_file() {
        let text = "\nSpecial Itemsets: 30\nNo. mined itemsets: 3\n\n\
                    ======== Background ========\nSpecial Frequency: 30\nTime: 12.5\n\
                    Precision (all): [1.0, 0.5, 0.6666666666666666]\n\
                    Recall (special): [0.03333333333333333, 0.03333333333333333, 0.06666666666666667]\n";
        let s = parse(text).unwrap();
        assert_eq!(s.precision, vec![1.0, 0.5, 0.6666666666666666]);
        assert_eq!(s.recall.len(), 3);
        assert_eq!(s.time_secs, Some(12.5));
        assert_eq!(s.mined_itemsets, Some(3));
    }

    #[test]
    fn last_matching_line_wins() {
        let text = "Precision: [0.1]\nRecall: [0.2]\nPrecision: [0.7, 0.8]\nRecall: [0.3, 0.4]\n";
        let s = parse(text).unwrap();
        assert_eq!(s.precision, vec![0.7, 0.8]);
        assert_eq!(s.recall, vec![0.3, 0.4]);
    }

    #[test]
    fn empty_lists_parse() {
        let s = parse("Precision: []\nRecall: []\n").unwrap();
        assert!(s.is_empty());
    }

    #[test]
    fn missing_label_is_reported() {
        assert_eq!(
            parse("Precision: [0.1]\n"),
            Err(ParseError::MissingLabel(RECALL))
        );
        assert_eq!(
            parse("Recall: [0.1]\n"),
            Err(ParseError::MissingLabel(PRECISION))
        );
    }

    #[test]
    fn malformed_value_is_reported() {
        let err = parse("Precision: [0.1, abc]\nRecall: [0.1, 0.2]\n").unwrap_err();
        assert_eq!(
            err,
            ParseError::MalformedValue {
                label: PRECISION,
                index: 1,
                token: "abc".into()
            }
        );
    }

    #[test]
    fn length_mismatch_is_rejected() {
        let err = parse("Precision: [0.1, 0.2]\nRecall: [0.1]\n").unwrap_err();
        assert_eq!(
            err,
            ParseError::LengthMismatch {
                precision: 2,
                recall: 1
            }
        );
    }

    #[test]
    fn load_algorithm_reads_and_interpolates() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Precision (all): [0.9, 0.6]").unwrap();
        writeln!(file, "Recall (special): [0.5, 0.8]").unwrap();

        let alg = load_algorithm("MTV", file.path()).unwrap();
        assert_eq!(alg.name, "MTV");
        assert_eq!(alg.curve.precision[4], 0.9);
        assert_eq!(alg.curve.precision[6], 0.6);
        assert!(alg.curve.precision[9].is_nan());
    }

    #[test]
    fn missing_file_error_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("IIM_Background_pr.txt");
        let err = load_file(&path).unwrap_err();
        assert!(format!("{err:#}").contains("IIM_Background_pr.txt"));
    }
}
