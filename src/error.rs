use thiserror::Error;

/// Convenience result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Error type returned by parsing functions.
///
/// Fatal conditions only: a malformed data row is fatal only under
/// [`crate::parsing::MalformedRowPolicy::Abort`]; under the default `Skip`
/// policy it is recorded as a [`crate::types::SkippedRow`] diagnostic
/// instead. The analysis and report stages never fail.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Underlying I/O error from the path-based entrypoints (file not found,
    /// invalid UTF-8, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The input is empty or contains no header row.
    #[error("empty input: no header row")]
    Empty,

    /// A quoted field was still open when the input ended.
    #[error("unterminated quoted field starting on line {line}")]
    UnterminatedQuote {
        /// 1-based line number where the quoted field opened.
        line: usize,
    },

    /// The header record itself was malformed (unescaped content after a
    /// closing quote). Fatal regardless of the row policy.
    #[error("malformed header on line {line}: unescaped content after closing quote")]
    MalformedHeader {
        /// 1-based line number of the header record.
        line: usize,
    },

    /// A malformed data row, surfaced only under
    /// [`crate::parsing::MalformedRowPolicy::Abort`].
    #[error("malformed row on line {line}: {reason}")]
    MalformedRow {
        /// 1-based line number of the record's first line.
        line: usize,
        /// What made the row malformed.
        reason: crate::types::SkipReason,
    },
}
