use csv_insights::parsing::{parse, parse_from_path, parse_with, MalformedRowPolicy, ParseOptions};
use csv_insights::types::SkipReason;

#[test]
fn parse_fixture_happy_path() {
    let outcome = parse_from_path("tests/fixtures/scores.csv", &ParseOptions::default()).unwrap();

    assert_eq!(outcome.dataset.columns, vec!["name", "score"]);
    assert_eq!(outcome.dataset.row_count(), 3);
    assert_eq!(outcome.dataset.rows[2], vec!["carol", ""]);
    assert!(outcome.skipped.is_empty());
}

#[test]
fn parse_fixture_with_quoting_and_a_bad_row() {
    let outcome = parse_from_path("tests/fixtures/messy.csv", &ParseOptions::default()).unwrap();

    assert_eq!(outcome.dataset.columns, vec!["id", "label", "value"]);
    assert_eq!(outcome.dataset.row_count(), 3);
    // Quoted delimiter, doubled quote, and trim-outside-quotes all in one file.
    assert_eq!(outcome.dataset.rows[0][1], "widget, large");
    assert_eq!(outcome.dataset.rows[1][1], "said \"hi\"");
    assert_eq!(outcome.dataset.rows[2][1], "plain");

    assert_eq!(outcome.skipped.len(), 1);
    assert_eq!(outcome.skipped[0].line, 4);
    assert_eq!(
        outcome.skipped[0].reason,
        SkipReason::FieldCount {
            expected: 3,
            found: 2,
        }
    );
}

#[test]
fn parse_from_path_errors_on_missing_file() {
    let err = parse_from_path("tests/fixtures/nope.csv", &ParseOptions::default()).unwrap_err();
    assert!(err.to_string().contains("io error"));
}

#[test]
fn empty_input_reports_missing_header() {
    let err = parse("").unwrap_err();
    assert!(err.to_string().contains("no header row"));
}

#[test]
fn unterminated_quote_reports_opening_line() {
    let err = parse("a,b\n1,\"open\n").unwrap_err();
    assert_eq!(
        err.to_string(),
        "unterminated quoted field starting on line 2"
    );
}

#[test]
fn abort_policy_surfaces_the_row() {
    let options = ParseOptions {
        malformed_rows: MalformedRowPolicy::Abort,
        ..ParseOptions::default()
    };
    let err = parse_with("a,b\n1,2,3\n", &options).unwrap_err();
    assert_eq!(
        err.to_string(),
        "malformed row on line 2: expected 2 fields, found 3"
    );
}

#[test]
fn quoted_fields_span_newlines() {
    let outcome = parse("note,score\n\"line one\nline two\",5\n").unwrap();
    assert_eq!(outcome.dataset.row_count(), 1);
    assert_eq!(outcome.dataset.rows[0][0], "line one\nline two");
}

#[test]
fn quoted_whitespace_is_preserved_bare_whitespace_is_not() {
    let outcome = parse("a,b\n\"  padded  \",  bare  \n").unwrap();
    assert_eq!(outcome.dataset.rows[0], vec!["  padded  ", "bare"]);
}

#[test]
fn crlf_input_parses_like_lf() {
    let lf = parse("a,b\n1,2\n3,4\n").unwrap();
    let crlf = parse("a,b\r\n1,2\r\n3,4\r\n").unwrap();
    assert_eq!(lf.dataset, crlf.dataset);
}

#[test]
fn duplicate_headers_are_disambiguated() {
    let outcome = parse("x,y,x\n1,2,3\n").unwrap();
    assert_eq!(outcome.dataset.columns, vec!["x", "y", "x_2"]);
}
