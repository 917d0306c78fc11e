use csv_insights::analysis::analyze;
use csv_insights::parsing::{parse, ParseOptions};
use csv_insights::report::{generate_report, generate_report_from_path, render};

#[test]
fn end_to_end_scores_report() {
    let report =
        generate_report_from_path("tests/fixtures/scores.csv", &ParseOptions::default()).unwrap();

    insta::assert_snapshot!(report.trim_end(), @r#"
DATA INSIGHTS REPORT
--------------------------------
Source: scores.csv
Total rows: 3

Column 'name' (categorical)
  count: 3
  most frequent: alice (1 occurrences)

Column 'score' (numeric)
  count: 2
  average: 15.00
  min: 10.00
  max: 20.00

Missing values:
  score: 1
  total: 1
--------------------------------
"#);
}

#[test]
fn repeated_runs_are_byte_identical() {
    let text = std::fs::read_to_string("tests/fixtures/messy.csv").unwrap();
    let first = generate_report(&text, "messy.csv", &ParseOptions::default()).unwrap();
    let second = generate_report(&text, "messy.csv", &ParseOptions::default()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn skipped_rows_do_not_block_the_report() {
    let outcome = parse("a,b,c\n1,2\n4,5,6\n").unwrap();
    assert_eq!(outcome.skipped.len(), 1);

    let report = render(&analyze(&outcome.dataset), "partial.csv");
    assert!(report.contains("Total rows: 1"));
    assert!(report.contains("Column 'a' (numeric)"));
}

#[test]
fn messy_fixture_statistics() {
    let text = std::fs::read_to_string("tests/fixtures/messy.csv").unwrap();
    let report = generate_report(&text, "messy.csv", &ParseOptions::default()).unwrap();

    // Row 3 is short and skipped, so ids are 1, 2, 4.
    assert!(report.contains("Column 'id' (numeric)"));
    assert!(report.contains("  average: 2.33"));
    // Value column: 10.5, missing, 7.
    assert!(report.contains("  min: 7.00"));
    assert!(report.contains("  max: 10.50"));
    assert!(report.contains("  value: 1"));
    // Label ties at one occurrence each; first seen wins.
    assert!(report.contains("most frequent: widget, large (1 occurrences)"));
}

#[test]
fn all_missing_column_renders_na_end_to_end() {
    let report = generate_report("k,v\na,\nb,\n", "sparse.csv", &ParseOptions::default()).unwrap();
    assert!(report.contains("Column 'v' (categorical)"));
    assert!(report.contains("  most frequent: N/A"));
    assert!(report.contains("  v: 2"));
    assert!(report.contains("  total: 2"));
}
