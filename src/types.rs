//! Core data model types.
//!
//! Parsing produces an in-memory [`Dataset`]: an ordered list of column names
//! plus row-major raw cell storage. Cells are kept as strings; typing happens
//! later, in [`crate::analysis`], which classifies each column from its cell
//! contents. An empty cell (after trimming) denotes a missing value.

use std::fmt;

/// In-memory tabular dataset of raw cells.
///
/// Rows are stored as `Vec<Vec<String>>` in the same order as `columns`.
///
/// Invariant (upheld by the parser): every row has exactly `columns.len()`
/// cells, and column names are unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    /// Ordered, unique column names from the header row.
    pub columns: Vec<String>,
    /// Row-major cell storage; a cell is the empty string when missing.
    pub rows: Vec<Vec<String>>,
}

impl Dataset {
    /// Create a dataset from column names and rows.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { columns, rows }
    }

    /// Number of data rows (the header is not a row).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Returns the index of a column by name, if present.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Iterate the cells of one column, in row order.
    pub fn column_values(&self, idx: usize) -> impl Iterator<Item = &str> {
        self.rows.iter().map(move |row| row[idx].as_str())
    }
}

/// Why a data row was dropped during parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The row's field count disagrees with the header's.
    FieldCount {
        /// Field count of the header row.
        expected: usize,
        /// Field count of the offending row.
        found: usize,
    },
    /// A field carried unescaped content after its closing quote.
    TrailingContent,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::FieldCount { expected, found } => {
                write!(f, "expected {expected} fields, found {found}")
            }
            SkipReason::TrailingContent => {
                write!(f, "unescaped content after closing quote")
            }
        }
    }
}

/// Diagnostic for one row dropped under [`crate::parsing::MalformedRowPolicy::Skip`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    /// 1-based line number of the record's first line in the input.
    pub line: usize,
    /// Why the row was dropped.
    pub reason: SkipReason,
}

impl fmt::Display for SkippedRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.reason)
    }
}

/// Result of a successful parse: the dataset plus per-row diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOutcome {
    /// The parsed dataset.
    pub dataset: Dataset,
    /// Rows dropped during parsing, in input order. Empty when every data
    /// row was well-formed.
    pub skipped: Vec<SkippedRow>,
}
