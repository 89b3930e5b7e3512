//! End-to-end checks for dataset-to-seed-script generation.

use std::fs;
use std::path::Path;

use tempfile::TempDir;
use urlcheck_core::loader::{render_insert, Loader};
use urlcheck_core::url_model::{Category, RiskLevel};

fn write_dataset(dir: &Path, files: &[(&str, &str)]) {
    for (name, contents) in files {
        fs::write(dir.join(name), contents).unwrap();
    }
}

/// All five files present, each empty unless overridden.
fn empty_dataset(dir: &Path) {
    write_dataset(
        dir,
        &[
            ("benign.csv", ""),
            ("defaced.csv", ""),
            ("malware.csv", ""),
            ("phishing.csv", ""),
            ("spam.csv", ""),
        ],
    );
}

fn one_url_per_file(dir: &Path) {
    write_dataset(
        dir,
        &[
            ("benign.csv", "http://benign.example.com/\n"),
            ("defaced.csv", "http://defaced.example.com/\n"),
            ("malware.csv", "http://malware.example.com/\n"),
            ("phishing.csv", "http://phishing.example.com/\n"),
            ("spam.csv", "http://spam.example.com/\n"),
        ],
    );
}

#[test]
fn spam_scenario_is_byte_exact() {
    let tmp = TempDir::new().unwrap();
    empty_dataset(tmp.path());
    write_dataset(
        tmp.path(),
        &[("spam.csv", "http://a.com/\"x\"\nhttp://b.com\\\n")],
    );
    let output = tmp.path().join("init-db.js");

    let summary = Loader::new(tmp.path(), &output).run().unwrap();
    assert_eq!(summary.files, 5);
    assert_eq!(summary.statements, 2);

    let got = fs::read_to_string(&output).unwrap();
    let expected = "\ndb.urlModel.insert({\n    \"url\": \"http://a.com/x\",\n    \"risk\": \"Low\",\n    \"category\": \"Spam\"\n});\n    \ndb.urlModel.insert({\n    \"url\": \"http://b.com\",\n    \"risk\": \"Low\",\n    \"category\": \"Spam\"\n});\n    ";
    assert_eq!(got, expected);
}

#[test]
fn every_line_produces_one_statement() {
    let tmp = TempDir::new().unwrap();
    empty_dataset(tmp.path());
    // three lines, one of them blank; the blank one still counts
    write_dataset(
        tmp.path(),
        &[("benign.csv", "http://a.com/\n\nhttp://b.com/\n")],
    );
    let output = tmp.path().join("init-db.js");

    let summary = Loader::new(tmp.path(), &output).run().unwrap();
    assert_eq!(summary.statements, 3);

    let got = fs::read_to_string(&output).unwrap();
    assert_eq!(got.matches("db.urlModel.insert(").count(), 3);
    assert!(got.contains("\"url\": \"\""));
}

#[test]
fn labels_follow_the_dataset_table() {
    let tmp = TempDir::new().unwrap();
    one_url_per_file(tmp.path());
    let output = tmp.path().join("init-db.js");

    Loader::new(tmp.path(), &output).run().unwrap();
    let got = fs::read_to_string(&output).unwrap();

    for (url, risk, category) in [
        ("http://benign.example.com/", RiskLevel::Nil, Category::Benign),
        (
            "http://defaced.example.com/",
            RiskLevel::Medium,
            Category::Defaced,
        ),
        (
            "http://malware.example.com/",
            RiskLevel::High,
            Category::Malware,
        ),
        (
            "http://phishing.example.com/",
            RiskLevel::Medium,
            Category::Phishing,
        ),
        ("http://spam.example.com/", RiskLevel::Low, Category::Spam),
    ] {
        assert!(
            got.contains(&render_insert(url, risk, category)),
            "missing statement for {url}"
        );
    }
}

#[test]
fn files_are_processed_in_table_order() {
    let tmp = TempDir::new().unwrap();
    one_url_per_file(tmp.path());
    let output = tmp.path().join("init-db.js");

    Loader::new(tmp.path(), &output).run().unwrap();
    let got = fs::read_to_string(&output).unwrap();

    let positions: Vec<usize> = [
        "benign.example.com",
        "defaced.example.com",
        "malware.example.com",
        "phishing.example.com",
        "spam.example.com",
    ]
    .iter()
    .map(|host| got.find(host).unwrap())
    .collect();
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);
}

#[test]
fn second_run_appends_rather_than_overwrites() {
    let tmp = TempDir::new().unwrap();
    empty_dataset(tmp.path());
    write_dataset(tmp.path(), &[("malware.csv", "http://evil.example.com/\n")]);
    let output = tmp.path().join("init-db.js");

    let loader = Loader::new(tmp.path(), &output);
    loader.run().unwrap();
    let first = fs::read_to_string(&output).unwrap();

    loader.run().unwrap();
    let second = fs::read_to_string(&output).unwrap();
    assert_eq!(second, format!("{first}{first}"));
}

#[test]
fn missing_dataset_file_aborts_but_keeps_earlier_output() {
    let tmp = TempDir::new().unwrap();
    empty_dataset(tmp.path());
    write_dataset(tmp.path(), &[("benign.csv", "http://ok.example.com/\n")]);
    fs::remove_file(tmp.path().join("malware.csv")).unwrap();
    let output = tmp.path().join("init-db.js");

    let err = Loader::new(tmp.path(), &output).run().unwrap_err();
    assert!(err.to_string().contains("malware.csv"));

    // benign.csv and defaced.csv were processed before the failure; their
    // statements stay (no rollback)
    let got = fs::read_to_string(&output).unwrap();
    assert!(got.contains("http://ok.example.com/"));
}
