use std::fs;

use classmark::{
    config::RunOptions,
    grade::{Grade, analyze, process},
    input::{FileNamePrompt, Marksheet},
    report::{render_summary, render_summary_json, render_table, write_report},
};
use serde_json::Value;

#[path = "support.rs"]
mod support;
use support::{COHORT, temp_root};

/// A prompt for runs that name their input file up front.
struct NoPrompt;

impl FileNamePrompt for NoPrompt {
    fn ask(&mut self) -> std::io::Result<Option<String>> {
        panic!("input file was given, prompt must not be used")
    }

    fn not_found(&mut self, _name: &str) -> std::io::Result<()> {
        Ok(())
    }
}

fn graded() -> (Marksheet, Vec<classmark::types::StudentResult>) {
    let sheet = Marksheet::parse(COHORT).expect("parse cohort");
    let results = process(&sheet.records, sheet.weight).expect("grade cohort");
    (sheet, results)
}

#[test]
fn table_lists_results_in_sorted_order() {
    let (sheet, results) = graded();
    let table = render_table(&results, sheet.weight);

    for header in ["Registration", "Exam", "Coursework", "Overall", "Grade", "Cohort Results"] {
        assert!(table.contains(header), "missing {header} in\n{table}");
    }
    for grade in [Grade::First, Grade::Second, Grade::Failed] {
        assert!(table.contains(grade.label()));
    }

    let pos = |needle: &str| table.find(needle).expect("registration number in table");
    assert!(pos("103") < pos("102"));
    assert!(pos("102") < pos("101"));
    assert!(table.contains("coursework 50% / exam 50%"));
}

#[test]
fn summary_lists_counts_and_failures() {
    colored::control::set_override(false);
    let (_, results) = graded();
    let summary = render_summary(&analyze(&results));

    assert_eq!(
        summary,
        "Number of students who have first-class marks : 1\nNumber of students who have \
         second-class marks : 1\nNumber of students who have third-class marks : 0\nNumber of \
         students who have failed : 1\nStudents who have failed : [102]\n"
    );
}

#[test]
fn summary_json_has_every_field() {
    let (_, results) = graded();
    let json = render_summary_json(&analyze(&results)).expect("serialize summary");
    let value: Value = serde_json::from_str(&json).expect("summary is json");

    assert_eq!(value["first"], 1);
    assert_eq!(value["second"], 1);
    assert_eq!(value["third"], 0);
    assert_eq!(value["failed"], 1);
    assert_eq!(value["failed_registration_numbers"], serde_json::json!([102]));
}

#[test]
fn write_report_creates_file() {
    let root = temp_root();
    let (sheet, results) = graded();
    let out = root.join("report.txt");

    write_report(&out, &results, sheet.weight).expect("write report");
    let written = fs::read_to_string(&out).expect("read report");
    assert_eq!(written.trim_end(), render_table(&results, sheet.weight));

    let _ = fs::remove_dir_all(root);
}

#[test]
fn run_writes_report_and_prints_summary() {
    colored::control::set_override(false);
    let root = temp_root();
    let input = root.join("cohort.txt");
    fs::write(&input, COHORT).expect("write cohort");
    let options = RunOptions::builder()
        .input(input.clone())
        .output(root.join("out.txt"))
        .build();

    let mut stdout = Vec::new();
    let outcome = classmark::run(&options, &mut NoPrompt, &mut stdout).expect("run succeeds");

    assert_eq!(outcome.input, input);
    assert_eq!(outcome.summary.failed_registration_numbers, vec![102]);
    assert!(root.join("out.txt").exists());
    let stdout = String::from_utf8(stdout).expect("utf8 summary");
    assert!(stdout.ends_with("Students who have failed : [102]\n"));

    let _ = fs::remove_dir_all(root);
}

#[test]
fn run_prints_summary_even_if_report_fails() {
    let root = temp_root();
    let input = root.join("cohort.txt");
    fs::write(&input, COHORT).expect("write cohort");
    let options = RunOptions::builder()
        .input(input)
        .output(root.join("no-such-dir").join("out.txt"))
        .json(true)
        .build();

    let mut stdout = Vec::new();
    let err = classmark::run(&options, &mut NoPrompt, &mut stdout).expect_err("report dir missing");
    assert!(err.to_string().contains("Could not write report"));

    let value: Value = serde_json::from_slice(&stdout).expect("summary printed as json");
    assert_eq!(value["failed"], 1);

    let _ = fs::remove_dir_all(root);
}

#[test]
fn run_rejects_invalid_record() {
    let root = temp_root();
    let input = root.join("cohort.txt");
    fs::write(&input, "2 50\n1 50 50\n1 60 60\n").expect("write cohort");
    let options = RunOptions::builder()
        .input(input)
        .output(root.join("out.txt"))
        .build();

    let mut stdout = Vec::new();
    let err = classmark::run(&options, &mut NoPrompt, &mut stdout).expect_err("duplicate student");
    assert!(format!("{err:#}").contains("duplicate registration number"));
    assert!(stdout.is_empty());
    assert!(!root.join("out.txt").exists());

    let _ = fs::remove_dir_all(root);
}
