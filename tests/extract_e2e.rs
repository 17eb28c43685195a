// tests/extract_e2e.rs
use std::fs;
use std::path::Path;

use calamine::{Reader, open_workbook_auto};
use tempfile::TempDir;

use chapter_scrape::config::options::ExtractOptions;
use chapter_scrape::export::ReportOutput;
use chapter_scrape::runner::run_extract;
use chapter_scrape::Error;

fn record(n: u32, name: &str) -> String {
    format!(
        "    {{ number: {n}, englishName: \"{name}\", hebrewName: \"פרק\", startFolio: {}, startSide: \"a\", endFolio: {}, endSide: \"b\" }},\n",
        n * 10,
        n * 10 + 9
    )
}

fn entry(key: &str, count: u32) -> String {
    let body: String = (1..=count).map(|n| record(n, &format!("Chapter {n}"))).collect();
    format!("  {key}: [\n{body}  ],\n")
}

fn write_source(dir: &Path, entries: &[(&str, u32)]) -> ExtractOptions {
    let body: String = entries.iter().map(|(k, n)| entry(k, *n)).collect();
    let text = format!("import x from 'y';\n\nexport const CHAPTER_DATA: Record<string, unknown> = {{\n{body}}};\n");
    let source = dir.join("tractate-contents.tsx");
    fs::write(&source, text).unwrap();

    ExtractOptions {
        source,
        out_dir: dir.join("out"),
        ..ExtractOptions::default()
    }
}

#[test]
fn writes_workbook_with_expected_sheets() {
    let tmp = TempDir::new().unwrap();
    let opts = write_source(tmp.path(), &[("beitza", 5), ("berakhot", 9), ("beitza", 7), ("\"bava kamma\"", 10), ("\"bava kamma\"", 10)]);

    let summary = run_extract(&opts, None).unwrap();
    assert_eq!(summary.duplicates, [(s("beitza"), vec![5, 7]), (s("bava kamma"), vec![10, 10])]);
    assert_eq!(summary.total_instances(), 4);
    assert_eq!(summary.issues, 0);

    let ReportOutput::Workbook(path) = &summary.output else {
        panic!("expected workbook, got {:?}", summary.output);
    };
    assert_eq!(path, &opts.workbook_path());

    let wb = open_workbook_auto(path).unwrap();
    assert_eq!(
        wb.sheet_names(),
        ["Summary", "Detailed_Comparison", "Validation", "beitza", "bava_kamma"]
    );
}

#[test]
fn summary_sheet_reports_count_mismatch() {
    let tmp = TempDir::new().unwrap();
    let opts = write_source(tmp.path(), &[("beitza", 5), ("beitza", 7)]);
    run_extract(&opts, None).unwrap();

    let mut wb = open_workbook_auto(opts.workbook_path()).unwrap();
    let range = wb.worksheet_range("Summary").unwrap();
    let row: Vec<String> = range.rows().nth(1).unwrap().iter().map(|c| c.to_string()).collect();
    assert_eq!(row, ["beitza", "2", "5", "7", "2", "Chapter count mismatch"]);
}

#[test]
fn colliding_sheet_names_fall_back_to_csv() {
    let tmp = TempDir::new().unwrap();
    let opts = write_source(
        tmp.path(),
        &[("\"bava kamma\"", 2), ("bava_kamma", 2), ("\"bava kamma\"", 3), ("bava_kamma", 2)],
    );

    let summary = run_extract(&opts, None).unwrap();
    let ReportOutput::Csv { files, .. } = &summary.output else {
        panic!("expected CSV fallback, got {:?}", summary.output);
    };

    let names: Vec<String> = files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        [
            "duplicate_tractates_summary.csv",
            "duplicate_tractates_details.csv",
            "duplicate_tractates_validation.csv",
            "duplicate_tractate_bava_kamma.csv",
            "duplicate_tractate_bava_kamma (2).csv",
        ]
    );
    for f in files {
        assert!(f.is_file(), "{} missing", f.display());
    }

    let summary_csv = fs::read_to_string(&files[0]).unwrap();
    let mut lines = summary_csv.lines();
    assert_eq!(
        lines.next(),
        Some("Tractate,Num_Instances,Chapters_Instance_1,Chapters_Instance_2,Difference,Issue_Type")
    );
    assert_eq!(lines.next(), Some("bava kamma,2,2,3,1,Chapter count mismatch"));
}

#[test]
fn missing_declaration_is_an_error() {
    let tmp = TempDir::new().unwrap();
    let source = tmp.path().join("empty.tsx");
    fs::write(&source, "export const OTHER = {};\n").unwrap();
    let opts = ExtractOptions { source, out_dir: tmp.path().to_path_buf(), ..ExtractOptions::default() };

    let err = run_extract(&opts, None).unwrap_err();
    assert!(matches!(err, Error::DeclarationNotFound(_)));
    assert!(!opts.workbook_path().exists());
}

#[test]
fn missing_source_names_the_path() {
    let tmp = TempDir::new().unwrap();
    let opts = ExtractOptions { source: tmp.path().join("nope.tsx"), ..ExtractOptions::default() };
    let err = run_extract(&opts, None).unwrap_err();
    assert!(err.to_string().contains("nope.tsx"));
}

fn s(v: &str) -> String {
    v.to_string()
}
