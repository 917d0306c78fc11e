//! Column classification and descriptive statistics.
//!
//! [`analyze`] consumes a [`Dataset`] and produces an [`AnalysisResult`]:
//! one [`ColumnSummary`] per column in original order, plus missing-value
//! totals. It never fails; degenerate columns (no non-missing cells) degrade
//! to undefined markers instead of erroring, since the point is to always
//! produce some report.
//!
//! Classification is deterministic: a column is numeric iff it has at least
//! one non-missing cell and every non-missing cell parses as a finite
//! decimal number (optional sign, decimal point, exponent). Everything else,
//! including columns with zero non-missing cells, is categorical.

use std::cmp::Reverse;
use std::collections::HashMap;
use std::fmt;

use crate::types::Dataset;

/// Inferred column kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Every non-missing cell parses as a finite decimal number.
    Numeric,
    /// Anything else, including all-missing columns.
    Categorical,
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnKind::Numeric => write!(f, "numeric"),
            ColumnKind::Categorical => write!(f, "categorical"),
        }
    }
}

/// The most frequent value of a categorical column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MostFrequent {
    /// The winning value.
    pub value: String,
    /// How many times it appears.
    pub count: usize,
}

/// Per-column statistics, polymorphic over [`ColumnKind`].
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnStats {
    /// Stats for a numeric column. `count` is always at least 1: a column
    /// with no non-missing cells classifies as categorical instead.
    Numeric {
        /// Number of non-missing cells.
        count: usize,
        /// Arithmetic mean of the non-missing cells.
        average: f64,
        /// Smallest value.
        minimum: f64,
        /// Largest value.
        maximum: f64,
    },
    /// Stats for a categorical column.
    Categorical {
        /// Number of non-missing cells.
        count: usize,
        /// Most frequent value; ties go to the value seen first in row
        /// order. `None` when the column has no non-missing cells.
        most_frequent: Option<MostFrequent>,
    },
}

/// Summary of one column: kind, stats, and missing-cell count.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSummary {
    /// Column name.
    pub name: String,
    /// Inferred kind.
    pub kind: ColumnKind,
    /// Kind-specific statistics.
    pub stats: ColumnStats,
    /// Number of missing cells in this column.
    pub missing: usize,
}

/// Result of analyzing a dataset: one summary per column, in original
/// column order, plus missing-value totals.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    /// Per-column summaries, in original column order.
    pub columns: Vec<ColumnSummary>,
    /// Number of data rows analyzed.
    pub row_count: usize,
    /// Grand total of missing cells across all columns (cells, not rows).
    pub total_missing: usize,
}

impl AnalysisResult {
    /// Per-column missing counts, in column order.
    pub fn missing_counts(&self) -> impl Iterator<Item = (&str, usize)> {
        self.columns.iter().map(|c| (c.name.as_str(), c.missing))
    }
}

/// Analyze a dataset.
///
/// Infallible: every well-formed [`Dataset`] yields a result, with
/// undefined markers for degenerate columns.
///
/// ```
/// use csv_insights::analysis::{analyze, ColumnKind, ColumnStats};
/// use csv_insights::parsing::parse;
///
/// let outcome = parse("name,score\nalice,10\nbob,20\ncarol,\n").unwrap();
/// let result = analyze(&outcome.dataset);
///
/// assert_eq!(result.columns[0].kind, ColumnKind::Categorical);
/// assert_eq!(result.columns[1].kind, ColumnKind::Numeric);
/// match &result.columns[1].stats {
///     ColumnStats::Numeric { count, average, .. } => {
///         assert_eq!(*count, 2);
///         assert_eq!(*average, 15.0);
///     }
///     _ => unreachable!(),
/// }
/// assert_eq!(result.total_missing, 1);
/// ```
pub fn analyze(dataset: &Dataset) -> AnalysisResult {
    let mut columns = Vec::with_capacity(dataset.column_count());
    let mut total_missing = 0;

    for (idx, name) in dataset.columns.iter().enumerate() {
        let summary = summarize_column(name, dataset.column_values(idx));
        total_missing += summary.missing;
        columns.push(summary);
    }

    AnalysisResult {
        columns,
        row_count: dataset.row_count(),
        total_missing,
    }
}

fn summarize_column<'a>(name: &str, cells: impl Iterator<Item = &'a str>) -> ColumnSummary {
    let mut missing = 0;
    let mut values: Vec<&str> = Vec::new();
    for cell in cells {
        if cell.is_empty() {
            missing += 1;
        } else {
            values.push(cell);
        }
    }

    // Numeric only with at least one non-missing cell and a clean parse of
    // every one of them.
    let numbers: Option<Vec<f64>> = if values.is_empty() {
        None
    } else {
        values.iter().map(|v| parse_numeric(v)).collect()
    };

    let (kind, stats) = match numbers {
        Some(numbers) => (ColumnKind::Numeric, numeric_stats(&numbers)),
        None => (ColumnKind::Categorical, categorical_stats(&values)),
    };

    ColumnSummary {
        name: name.to_string(),
        kind,
        stats,
        missing,
    }
}

/// Parse a cell as a finite decimal number.
///
/// Accepts Rust's `f64` grammar (optional sign, decimal point, exponent) but
/// rejects the `inf`/`nan` spellings and anything that overflows to
/// infinity.
fn parse_numeric(cell: &str) -> Option<f64> {
    cell.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn numeric_stats(numbers: &[f64]) -> ColumnStats {
    let mut sum = 0.0;
    let mut minimum = f64::INFINITY;
    let mut maximum = f64::NEG_INFINITY;
    for &x in numbers {
        sum += x;
        minimum = minimum.min(x);
        maximum = maximum.max(x);
    }

    ColumnStats::Numeric {
        count: numbers.len(),
        average: sum / numbers.len() as f64,
        minimum,
        maximum,
    }
}

fn categorical_stats(values: &[&str]) -> ColumnStats {
    // Value -> (first-seen index, running count). First-seen order is
    // tracked explicitly so the tie-break does not depend on map iteration
    // order.
    let mut frequencies: HashMap<&str, (usize, usize)> = HashMap::new();
    for (seen_at, value) in values.iter().enumerate() {
        let entry = frequencies.entry(value).or_insert((seen_at, 0));
        entry.1 += 1;
    }

    let most_frequent = frequencies
        .into_iter()
        .max_by_key(|&(_, (first_seen, count))| (count, Reverse(first_seen)))
        .map(|(value, (_, count))| MostFrequent {
            value: value.to_string(),
            count,
        });

    ColumnStats::Categorical {
        count: values.len(),
        most_frequent,
    }
}
