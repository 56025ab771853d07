//! Integration tests for the full scan pipeline:
//! tree walk → tree-sitter → top-level constants → aggregated records.

use std::collections::BTreeSet;
use std::fs;
use tempfile::TempDir;

use glossa::{Glossa, ScanConfig};

/// Create a temporary source tree with the given files.
/// Returns the temp directory (must be kept alive) and the scanner.
fn tree_with_files(files: &[(&str, &str)], config: ScanConfig) -> (TempDir, Glossa) {
    let dir = tempfile::tempdir().expect("failed to create temp dir");

    for (path, content) in files {
        let full_path = dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("failed to write file");
    }

    let glossa = Glossa::new(dir.path(), config).expect("failed to create scanner");
    (dir, glossa)
}

/// Literals of a scan outcome as an order-independent set.
fn literal_set(glossa: &Glossa) -> BTreeSet<String> {
    glossa
        .scan()
        .expect("scan failed")
        .records
        .iter()
        .map(|r| r.literal.clone())
        .collect()
}

// === Basic scanning ===

#[test]
fn empty_tree_yields_empty_result() {
    let (_dir, glossa) = tree_with_files(&[], ScanConfig::default());

    let outcome = glossa.scan().expect("scan failed");

    assert!(outcome.records.is_empty());
    assert!(outcome.stats.errors.is_empty());
    assert_eq!(outcome.stats.files_scanned, 0);
}

#[test]
fn tree_without_matching_files_yields_empty_result() {
    let (_dir, glossa) = tree_with_files(
        &[
            ("README.md", "# nothing to see\n"),
            ("src/lib.rs", "pub const GREETING: &str = \"hello\";\n"),
        ],
        ScanConfig::default(),
    );

    let outcome = glossa.scan().expect("scan failed");

    assert!(outcome.records.is_empty());
    assert_eq!(outcome.stats.files_scanned, 0);
    assert_eq!(outcome.stats.files_skipped, 2);
}

#[test]
fn scan_finds_constants_in_nested_directories() {
    let (_dir, glossa) = tree_with_files(
        &[
            ("main.go", "package main\n\nconst AppName = \"demo\"\n"),
            (
                "internal/messages/ja.go",
                "package messages\n\nconst Farewell = \"さようなら\"\n",
            ),
        ],
        ScanConfig::default(),
    );

    let literals = literal_set(&glossa);

    assert!(literals.contains("\"demo\""));
    assert!(literals.contains("\"さようなら\""));
}

#[test]
fn vendored_and_hidden_directories_are_not_scanned() {
    let (_dir, glossa) = tree_with_files(
        &[
            ("app.go", "package main\n\nconst Kept = \"kept\"\n"),
            (
                "vendor/dep/dep.go",
                "package dep\n\nconst Dropped = \"vendored\"\n",
            ),
            (
                ".cache/tmp.go",
                "package tmp\n\nconst Dropped = \"hidden\"\n",
            ),
        ],
        ScanConfig::default(),
    );

    let literals = literal_set(&glossa);

    assert_eq!(literals.len(), 1);
    assert!(literals.contains("\"kept\""));
}

// === End-to-end behavior from the two filter modes ===

const FILE_A: &str = "package a\n\nconst Greeting = \"hello\"\nconst X = 42\n";
const FILE_B: &str = "package b\n\nconst Title = \"こんにちは\"\n";

#[test]
fn unfiltered_scan_reports_string_literals_but_not_other_constants() {
    let (_dir, glossa) = tree_with_files(
        &[("a.go", FILE_A), ("b.go", FILE_B)],
        ScanConfig::default(),
    );

    let literals = literal_set(&glossa);

    assert_eq!(literals.len(), 2);
    assert!(literals.contains("\"hello\""));
    assert!(literals.contains("\"こんにちは\""));
}

#[test]
fn non_ascii_filter_keeps_only_the_localized_record() {
    let (_dir, glossa) = tree_with_files(
        &[("a.go", FILE_A), ("b.go", FILE_B)],
        ScanConfig::default().with_non_ascii_only(true),
    );

    let outcome = glossa.scan().expect("scan failed");

    assert_eq!(outcome.records.len(), 1);
    let record = &outcome.records[0];
    assert!(record.path.ends_with("b.go"));
    assert_eq!(record.line, 3);
    assert_eq!(record.literal, "\"こんにちは\"");
    assert!(record.has_non_ascii);
}

#[test]
fn non_ascii_filter_excludes_ascii_written_escapes() {
    // The `\u00e9` escape decodes to a non-ASCII character, but is written
    // in ASCII; classification is on verbatim source text by design.
    let (_dir, glossa) = tree_with_files(
        &[(
            "escapes.go",
            "package e\n\nconst (\n\tEscaped = \"caf\\u00e9\"\n\tLiteral = \"café\"\n)\n",
        )],
        ScanConfig::default().with_non_ascii_only(true),
    );

    let literals = literal_set(&glossa);

    assert_eq!(literals.len(), 1);
    assert!(literals.contains("\"café\""));
}

// === Ordering and determinism ===

#[test]
fn records_within_a_file_follow_source_order() {
    let (_dir, glossa) = tree_with_files(
        &[(
            "order.go",
            "package o\n\nconst (\n\tA = \"first\"\n\tB = \"second\"\n)\n\nconst C = \"third\"\n",
        )],
        ScanConfig::default(),
    );

    let outcome = glossa.scan().expect("scan failed");

    let literals: Vec<&str> = outcome.records.iter().map(|r| r.literal.as_str()).collect();
    assert_eq!(literals, ["\"first\"", "\"second\"", "\"third\""]);
    assert_eq!(
        outcome.records.iter().map(|r| r.line).collect::<Vec<_>>(),
        [4, 5, 8]
    );
}

#[test]
fn repeated_scans_yield_identical_record_sets() {
    let (_dir, glossa) = tree_with_files(
        &[
            ("a.go", "package a\n\nconst A = \"α\"\n"),
            ("b.go", "package b\n\nconst B = \"β\"\n"),
            ("c.go", "package c\n\nconst C = \"plain\"\n"),
        ],
        ScanConfig::default(),
    );

    let first = literal_set(&glossa);
    let second = literal_set(&glossa);

    assert_eq!(first, second);
    assert_eq!(first.len(), 3);
}

#[test]
fn many_files_scan_loses_no_records_under_parallelism() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    for i in 0..200 {
        let content = format!("package p{i}\n\nconst Message{i} = \"value {i}\"\n");
        fs::write(dir.path().join(format!("file_{i}.go")), content).expect("failed to write file");
    }
    let glossa = Glossa::new(dir.path(), ScanConfig::default()).expect("failed to create scanner");

    let outcome = glossa.scan().expect("scan failed");

    assert_eq!(outcome.stats.files_scanned, 200);
    assert_eq!(outcome.records.len(), 200);

    // Every record present exactly once, regardless of scheduling.
    let unique: BTreeSet<&str> = outcome.records.iter().map(|r| r.literal.as_str()).collect();
    assert_eq!(unique.len(), 200);
}
