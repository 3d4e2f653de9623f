// End-to-end report generation from CSV files on disk

use stackopt_report::{OutputFormat, ReportConfig, ReportError, ReportGenerator};
use std::fs;
use std::io::Write;
use tempfile::NamedTempFile;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn csv_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn generates_html_report_from_file() {
    init_logging();

    let input = csv_file("metric,cycles,instrs\nfoo,100,50\nfoo$STACKOPT,80,50\n");
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("report.html");

    let generator = ReportGenerator::from_path(input.path(), ReportConfig::new()).unwrap();
    generator
        .generate()
        .write_to(&output, OutputFormat::Html)
        .unwrap();

    let html = fs::read_to_string(&output).unwrap();
    assert_eq!(html.matches("<h1>").count(), 1);
    assert!(html.contains("<h1>foo</h1>"));
    assert!(html.contains("<tr><td>cycles</td><td>100</td><td>80</td><td>-20.00%</td></tr>"));
    assert!(html.contains("<tr><td>instrs</td><td>50</td><td>50</td><td>0.00%</td></tr>"));
    assert!(html.trim_end().ends_with("</body></html>"));
}

#[test]
fn realistic_suite() {
    init_logging();

    let input = csv_file(
        ",cycles,instructions,program_len\n\
         fib,1200,900,64\n\
         fib$STACKOPT,1000,850,60\n\
         sort,5000,4000,128\n\
         noop,0,0,2\n\
         noop$STACKOPT,0,0,0\n\
         sort_only$STACKOPT,1,1,1\n",
    );

    let document = ReportGenerator::from_path(input.path(), ReportConfig::new())
        .unwrap()
        .generate();

    let names: Vec<&str> = document.sections.iter().map(|s| s.test_name.as_str()).collect();
    assert_eq!(names, vec!["fib", "noop"]);
    assert_eq!(document.unpaired, vec!["sort"]);

    let fib = document.section("fib").unwrap();
    let diffs: Vec<String> = fib.rows.iter().map(|r| r.formatted_diff()).collect();
    assert_eq!(diffs, vec!["-16.67%", "-5.56%", "-6.25%"]);

    let noop = document.section("noop").unwrap();
    let diffs: Vec<String> = noop.rows.iter().map(|r| r.formatted_diff()).collect();
    assert_eq!(diffs, vec!["0.00%", "0.00%", "-100.00%"]);

    let html = document.render(OutputFormat::Html);
    let fib_pos = html.find("<h1>fib</h1>").unwrap();
    let noop_pos = html.find("<h1>noop</h1>").unwrap();
    assert!(fib_pos < noop_pos);
    assert!(!html.contains("<h1>sort</h1>"));
    assert!(!html.contains("sort_only"));
}

#[test]
fn txt_report_matches_html_values() {
    let input = csv_file(",cycles\nt,10\nt$STACKOPT,0\n");

    let document = ReportGenerator::from_path(input.path(), ReportConfig::new().with_title("Run"))
        .unwrap()
        .generate();

    let txt = document.render(OutputFormat::Txt);
    assert!(txt.starts_with("Run\n===\n"));
    assert!(txt.contains("| cycles |     10 |   0 | -100.00% |"));
}

#[test]
fn malformed_row_aborts_without_output() {
    let input = csv_file(",cycles,instrs\nfoo,1,2\nfoo$STACKOPT,1\n");
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("report.html");

    let result = ReportGenerator::from_path(input.path(), ReportConfig::new())
        .map(|g| g.generate().write_to(&output, OutputFormat::Html));

    match result {
        Err(ReportError::RowShapeError { test, line, .. }) => {
            assert_eq!(test, "foo$STACKOPT");
            assert_eq!(line, 3);
        }
        other => panic!("expected RowShapeError, got {:?}", other),
    }
    assert!(!output.exists());
}

#[test]
fn non_numeric_value_is_rejected() {
    let input = csv_file(",cycles\nfoo,many\n");

    let err = ReportGenerator::from_path(input.path(), ReportConfig::new()).unwrap_err();
    assert!(matches!(err, ReportError::ValueParseError { .. }));
    assert!(err.to_string().contains("\"many\""));
}
