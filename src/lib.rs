//! `csv-insights` is a small library for computing descriptive statistics
//! over a delimited text dataset and rendering them as a deterministic,
//! human-readable report.
//!
//! The pipeline is linear: [`parsing::parse`] turns raw text into an
//! in-memory [`types::Dataset`], [`analysis::analyze`] classifies each
//! column as numeric or categorical and computes per-column statistics, and
//! [`report::render`] formats the result. [`report::generate_report`] runs
//! all three in one call.
//!
//! ## What gets computed
//!
//! - **Numeric columns** (every non-missing cell parses as a finite decimal
//!   number): count, average, minimum, maximum.
//! - **Categorical columns** (everything else): count and most frequent
//!   value, with ties broken by earliest appearance in row order.
//! - **Missing values** (cells empty after trimming): per-column counts and
//!   a grand total.
//!
//! Malformed data rows (field count disagreeing with the header) are skipped
//! with a diagnostic by default rather than failing the run; only an empty
//! input, a missing header, or broken quoting aborts the parse.
//!
//! ## Quick example
//!
//! ```
//! use csv_insights::report::generate_report;
//!
//! let text = "name,score\nalice,10\nbob,20\ncarol,\n";
//! let report = generate_report(text, "scores.csv", &Default::default()).unwrap();
//!
//! assert!(report.contains("Column 'name' (categorical)"));
//! assert!(report.contains("Column 'score' (numeric)"));
//! assert!(report.contains("average: 15.00"));
//! ```
//!
//! ## Stage by stage
//!
//! ```
//! use csv_insights::analysis::analyze;
//! use csv_insights::parsing::{parse_with, ParseOptions};
//! use csv_insights::report::render;
//!
//! # fn main() -> Result<(), csv_insights::ParseError> {
//! let options = ParseOptions { delimiter: ';', ..ParseOptions::default() };
//! let outcome = parse_with("city;temp\noslo;4.5\nlima;22\n", &options)?;
//! assert!(outcome.skipped.is_empty());
//!
//! let result = analyze(&outcome.dataset);
//! let report = render(&result, "temps.csv");
//! assert!(report.contains("Total rows: 2"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`parsing`]: delimited-text parsing into a dataset, with options and an
//!   observer hook for skipped-row warnings
//! - [`analysis`]: column classification and statistics
//! - [`report`]: deterministic text rendering and pipeline entrypoints
//! - [`types`]: the dataset and diagnostic types
//! - [`error`]: error types used across parsing

pub mod analysis;
pub mod error;
pub mod parsing;
pub mod report;
pub mod types;

pub use error::{ParseError, ParseResult};
