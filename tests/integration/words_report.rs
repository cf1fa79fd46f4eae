#![allow(missing_docs)]

use std::fs;

use senda::{WordReport, WordsError};
use tempfile::TempDir;

fn write_words(contents: &str) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("text.txt");
    fs::write(&path, contents).expect("write text");
    (dir, path)
}

#[test]
fn tokenizes_and_sorts_by_length_then_alphabetically() {
    let (_dir, path) = write_words("the quick brown fox jumps over the lazy dog\n");
    let report = WordReport::from_path(&path).expect("report");
    assert_eq!(
        report.words(),
        &["dog", "fox", "the", "the", "lazy", "over", "brown", "jumps", "quick"]
    );
}

#[test]
fn hyphens_and_apostrophes_stay_inside_words() {
    let (_dir, path) = write_words("it's a well-known trick");
    let report = WordReport::from_path(&path).expect("report");
    assert_eq!(report.words(), &["a", "it's", "trick", "well-known"]);
}

#[test]
fn non_letter_runs_separate_words() {
    let (_dir, path) = write_words("alpha42beta; gamma\tdelta");
    let report = WordReport::from_path(&path).expect("report");
    assert_eq!(report.len(), 4);
    assert!(report.words().iter().any(|w| w == "alpha"));
    assert!(report.words().iter().any(|w| w == "beta"));
}

#[test]
fn length_filters_match_the_report_order() {
    let (_dir, path) = write_words("a bb ccc dddd eeee");
    let report = WordReport::from_path(&path).expect("report");
    assert_eq!(
        report.words_longer_than(2).collect::<Vec<_>>(),
        vec!["ccc", "dddd", "eeee"]
    );
    assert_eq!(
        report.words_with_length(4).collect::<Vec<_>>(),
        vec!["dddd", "eeee"]
    );
    assert_eq!(report.words_with_length(7).count(), 0);
}

#[test]
fn empty_file_yields_an_empty_report() {
    let (_dir, path) = write_words("");
    let report = WordReport::from_path(&path).expect("report");
    assert!(report.is_empty());
}

#[test]
fn whitespace_only_file_yields_an_empty_report() {
    let (_dir, path) = write_words(" \t\n  \n");
    let report = WordReport::from_path(&path).expect("report");
    assert!(report.is_empty());
}

#[test]
fn missing_file_reports_not_found() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("nonexistent.txt");
    match WordReport::from_path(&path) {
        Err(WordsError::NotFound { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected NotFound, got {other:?}"),
    }
}
