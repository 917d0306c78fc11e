//! Deterministic text rendering of an [`AnalysisResult`].
//!
//! [`render`] is a pure function: identical input yields a byte-identical
//! report (no timestamps, stable ordering), so the output is safe to compare
//! against golden files. Numeric values are printed with two decimal places.
//!
//! [`generate_report`] and [`generate_report_from_path`] compose the full
//! parse → analyze → render pipeline.

use std::fs;
use std::path::Path;

use crate::analysis::{analyze, AnalysisResult, ColumnStats};
use crate::error::ParseResult;
use crate::parsing::{parse_with, ParseOptions};

const RULE: &str = "--------------------------------";

/// Render an analysis result as a plain-text report.
///
/// Layout, top to bottom:
///
/// 1. Title block with the dataset name and row count.
/// 2. One block per column, in original column order.
/// 3. Missing-value counts (or an explicit all-clear line).
///
/// Never fails; undefined statistics render as `N/A`.
pub fn render(result: &AnalysisResult, dataset_name: &str) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("DATA INSIGHTS REPORT".to_string());
    lines.push(RULE.to_string());
    lines.push(format!("Source: {dataset_name}"));
    lines.push(format!("Total rows: {}", result.row_count));
    lines.push(String::new());

    for column in &result.columns {
        lines.push(format!("Column '{}' ({})", column.name, column.kind));
        match &column.stats {
            ColumnStats::Numeric {
                count,
                average,
                minimum,
                maximum,
            } => {
                lines.push(format!("  count: {count}"));
                lines.push(format!("  average: {average:.2}"));
                lines.push(format!("  min: {minimum:.2}"));
                lines.push(format!("  max: {maximum:.2}"));
            }
            ColumnStats::Categorical {
                count,
                most_frequent,
            } => {
                lines.push(format!("  count: {count}"));
                match most_frequent {
                    Some(top) => lines.push(format!(
                        "  most frequent: {} ({} occurrences)",
                        top.value, top.count
                    )),
                    None => lines.push("  most frequent: N/A".to_string()),
                }
            }
        }
        lines.push(String::new());
    }

    if result.total_missing == 0 {
        lines.push("No missing values detected.".to_string());
    } else {
        lines.push("Missing values:".to_string());
        for (name, missing) in result.missing_counts().filter(|&(_, m)| m > 0) {
            lines.push(format!("  {name}: {missing}"));
        }
        lines.push(format!("  total: {}", result.total_missing));
    }
    lines.push(RULE.to_string());

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Run the full pipeline on raw delimited text.
///
/// `dataset_name` only appears in the report title.
///
/// ```
/// use csv_insights::report::generate_report;
///
/// let text = "name,score\nalice,10\nbob,20\ncarol,\n";
/// let report = generate_report(text, "scores.csv", &Default::default()).unwrap();
///
/// assert!(report.contains("Source: scores.csv"));
/// assert!(report.contains("average: 15.00"));
/// assert!(report.contains("  score: 1"));
/// ```
pub fn generate_report(
    text: &str,
    dataset_name: &str,
    options: &ParseOptions,
) -> ParseResult<String> {
    let outcome = parse_with(text, options)?;
    let result = analyze(&outcome.dataset);
    Ok(render(&result, dataset_name))
}

/// Run the full pipeline on a file, using the file name as the dataset name.
pub fn generate_report_from_path(
    path: impl AsRef<Path>,
    options: &ParseOptions,
) -> ParseResult<String> {
    let path = path.as_ref();
    let dataset_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("dataset")
        .to_string();

    let text = fs::read_to_string(path)?;
    generate_report(&text, &dataset_name, options)
}
