//! Parsing entrypoints.
//!
//! Most callers should use [`parse`] (comma delimiter, skip malformed rows)
//! or [`parse_with`] for custom [`ParseOptions`]. Both turn raw delimited
//! text into a [`ParseOutcome`]: an in-memory [`Dataset`] plus diagnostics
//! for any rows that were dropped.
//!
//! - The first non-blank record is the header; its fields become the column
//!   names (duplicates disambiguated, see [`parse_with`]).
//! - A data row whose field count disagrees with the header's is malformed.
//!   Under [`MalformedRowPolicy::Skip`] (the default) it is dropped and
//!   recorded; under [`MalformedRowPolicy::Abort`] parsing fails.
//! - If an observer is configured, skipped rows and completion stats are
//!   reported to it.
//!
//! Quoting and trimming rules live in the record tokenizer (`fields`).

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::error::{ParseError, ParseResult};
use crate::types::{Dataset, ParseOutcome, SkipReason, SkippedRow};

mod fields;
pub mod observability;

pub use observability::{ParseObserver, ParseStats, StdErrObserver};

/// What to do with a data row whose shape disagrees with the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedRowPolicy {
    /// Drop the row, record a [`SkippedRow`], keep parsing (default).
    #[default]
    Skip,
    /// Fail the whole parse with [`ParseError::MalformedRow`].
    Abort,
}

/// Options controlling parsing behavior.
///
/// Use [`Default`] for common cases (comma delimiter, skip malformed rows,
/// no observer).
#[derive(Clone)]
pub struct ParseOptions {
    /// Field delimiter.
    pub delimiter: char,
    /// Policy for rows whose field count disagrees with the header's.
    pub malformed_rows: MalformedRowPolicy,
    /// Optional observer for skipped-row warnings and completion stats.
    pub observer: Option<Arc<dyn ParseObserver>>,
}

impl fmt::Debug for ParseOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParseOptions")
            .field("delimiter", &self.delimiter)
            .field("malformed_rows", &self.malformed_rows)
            .field("observer_set", &self.observer.is_some())
            .finish()
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            delimiter: ',',
            malformed_rows: MalformedRowPolicy::default(),
            observer: None,
        }
    }
}

/// Parse delimited text with default options.
///
/// ```
/// use csv_insights::parsing::parse;
///
/// let outcome = parse("name,score\nalice,10\nbob,20\n").unwrap();
/// assert_eq!(outcome.dataset.columns, vec!["name", "score"]);
/// assert_eq!(outcome.dataset.row_count(), 2);
/// assert!(outcome.skipped.is_empty());
/// ```
pub fn parse(text: &str) -> ParseResult<ParseOutcome> {
    parse_with(text, &ParseOptions::default())
}

/// Parse delimited text into a [`ParseOutcome`].
///
/// Rules:
///
/// - The first record with any content is the header. Empty input (or input
///   that is all blank lines) is [`ParseError::Empty`].
/// - Header names are trimmed. The N-th occurrence of a duplicate name gets
///   `_N` appended (`x`, `x_2`, `x_3`); if that candidate itself collides
///   with another header, N is incremented until the name is unique.
/// - Each later record with any content becomes one row. Blank and
///   whitespace-only lines are skipped, which also means that in a
///   one-column dataset a row holding a single missing cell is
///   indistinguishable from a blank line and is dropped.
/// - A cell equal to the empty string after trimming denotes a missing
///   value. No other sentinels ("NA", "null") are recognized.
pub fn parse_with(text: &str, options: &ParseOptions) -> ParseResult<ParseOutcome> {
    let mut records = fields::read_records(text, options.delimiter)?.into_iter();

    let header = records.next().ok_or(ParseError::Empty)?;
    if header.trailing_content {
        return Err(ParseError::MalformedHeader { line: header.line });
    }
    let columns = disambiguate_headers(header.fields);
    let expected = columns.len();

    let mut rows = Vec::new();
    let mut skipped = Vec::new();
    for record in records {
        let reason = if record.trailing_content {
            Some(SkipReason::TrailingContent)
        } else if record.fields.len() != expected {
            Some(SkipReason::FieldCount {
                expected,
                found: record.fields.len(),
            })
        } else {
            None
        };

        match reason {
            None => rows.push(record.fields),
            Some(reason) => match options.malformed_rows {
                MalformedRowPolicy::Abort => {
                    return Err(ParseError::MalformedRow {
                        line: record.line,
                        reason,
                    });
                }
                MalformedRowPolicy::Skip => {
                    let diagnostic = SkippedRow {
                        line: record.line,
                        reason,
                    };
                    if let Some(observer) = &options.observer {
                        observer.on_row_skipped(&diagnostic);
                    }
                    skipped.push(diagnostic);
                }
            },
        }
    }

    if let Some(observer) = &options.observer {
        observer.on_complete(ParseStats {
            rows: rows.len(),
            skipped: skipped.len(),
        });
    }

    Ok(ParseOutcome {
        dataset: Dataset::new(columns, rows),
        skipped,
    })
}

/// Parse a delimited text file from disk.
///
/// Thin wrapper over [`parse_with`]; reads the whole file as UTF-8 and adds
/// [`ParseError::Io`] for read failures (including invalid UTF-8).
pub fn parse_from_path(path: impl AsRef<Path>, options: &ParseOptions) -> ParseResult<ParseOutcome> {
    let text = fs::read_to_string(path)?;
    parse_with(&text, options)
}

fn disambiguate_headers(raw: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(raw.len());
    let mut occurrences: HashMap<String, usize> = HashMap::new();

    for name in raw {
        let count = occurrences.entry(name.clone()).or_default();
        *count += 1;
        let mut n = *count;
        let mut candidate = if n > 1 { format!("{name}_{n}") } else { name.clone() };
        while out.contains(&candidate) {
            n += 1;
            candidate = format!("{name}_{n}");
        }
        out.push(candidate);
    }

    out
}
