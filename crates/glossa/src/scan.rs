//! Parallel scan coordination.
//!
//! One unit of work runs per discovered file:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        scan_files                           │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Fan-out (parallel):  rayon::par_iter() read + parse +      │
//! │                       extract, one batch per file           │
//! │  Join (barrier):      collect() returns only when every     │
//! │                       unit has finished                     │
//! │  Aggregate:           flatten batches, gather errors        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each unit exclusively owns its source bytes, parser, and tree; the only
//! cross-task hand-off is the returned batch, moved into the aggregate
//! exactly once after the barrier. No unit ever observes the aggregate
//! mid-scan, so no record can be lost or duplicated by scheduling.
//!
//! A per-file failure (unreadable, not UTF-8, syntax errors) yields a
//! `ScanError` instead of a batch; the scan always runs to completion over
//! the remaining files. There are no retries and no timeouts.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::debug;

use crate::config::ScanConfig;
use crate::error::ScanError;
use crate::languages::go;
use crate::types::{ConstantRecord, Language};

/// Scan every file and aggregate the surviving record batches.
///
/// Returns the flattened records (within-file order preserved) and all
/// per-file errors. An empty file set yields empty output, not an error.
pub(crate) fn scan_files(
    files: &[PathBuf],
    config: &ScanConfig,
    grammar: &tree_sitter::Language,
) -> (Vec<ConstantRecord>, Vec<ScanError>) {
    let outcomes: Vec<Result<Vec<ConstantRecord>, ScanError>> = files
        .par_iter()
        .map(|path| scan_file(path, config, grammar))
        .collect();

    let mut records = Vec::new();
    let mut errors = Vec::new();
    for outcome in outcomes {
        match outcome {
            Ok(batch) => records.extend(batch),
            Err(e) => errors.push(e),
        }
    }

    (records, errors)
}

/// Read, parse, and extract one file.
///
/// Runs on a worker thread; tree-sitter parsers are stateful, so each unit
/// builds its own rather than sharing one across threads.
fn scan_file(
    path: &Path,
    config: &ScanConfig,
    grammar: &tree_sitter::Language,
) -> Result<Vec<ConstantRecord>, ScanError> {
    let content = std::fs::read(path).map_err(|e| ScanError::io_error(path.to_path_buf(), &e))?;
    let content_str =
        std::str::from_utf8(&content).map_err(|_| ScanError::encoding_error(path.to_path_buf()))?;

    let mut parser = tree_sitter::Parser::new();
    // set_language is deterministic per grammar, and this grammar was
    // already loaded successfully when the scanner was created.
    parser
        .set_language(grammar)
        .expect("grammar was validated at scanner creation");

    let tree = parser
        .parse(content_str, None)
        .ok_or_else(|| ScanError::parse_failed(path.to_path_buf(), "failed to parse file"))?;

    // Tree-sitter recovers from syntax errors instead of failing outright;
    // a tree containing error nodes means the file did not parse, and a
    // failed parse contributes zero records.
    if tree.root_node().has_error() {
        return Err(ScanError::parse_failed(
            path.to_path_buf(),
            "file contains syntax errors",
        ));
    }

    let mut batch = match config.language {
        Language::Go => go::extract_string_constants(&tree, content_str.as_bytes(), path),
    };

    if config.non_ascii_only {
        batch.retain(|record| record.has_non_ascii);
    }

    debug!(
        path = %path.display(),
        records = batch.len(),
        "Scanned file"
    );

    Ok(batch)
}
