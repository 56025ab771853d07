//! Error types for Glossa operations.
//!
//! Errors are categorized into two main types:
//!
//! - **`Error`**: Top-level errors that halt the run (discovery failures, etc.)
//! - **`ScanError`**: File-level errors that are collected but don't halt the scan
//!
//! ## Error Philosophy
//!
//! Glossa follows a "best effort" approach for scanning:
//! - A single malformed file shouldn't prevent scanning the rest
//! - Per-file errors are collected and reported, not thrown
//! - Only infrastructure failures (directory traversal, I/O on the root)
//!   cause early termination
//!
//! Extraction itself has no error kind: given a successfully parsed tree it
//! is total, and anything that is not a direct string-literal constant
//! binding is simply not a match.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for Glossa operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for Glossa operations.
///
/// These errors represent infrastructure failures that prevent
/// the scan from completing. There is no partial output: if discovery
/// fails, no records are produced at all.
#[derive(Debug, Error)]
pub enum Error {
    /// File system traversal or read failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Tree-sitter parsing infrastructure failed (grammar would not load)
    #[error("parser error: {0}")]
    Parser(String),
}

/// Error encountered while scanning a specific file.
///
/// These errors are collected during the scan but don't halt it.
/// The coordinator continues with remaining files and reports all
/// errors at the end; a failing file contributes zero records.
#[derive(Debug, Clone)]
pub struct ScanError {
    /// Path to the file that failed
    pub path: PathBuf,
    /// Category of the error
    pub kind: ScanErrorKind,
    /// Human-readable error message
    pub message: String,
}

impl std::fmt::Display for ScanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} ({})",
            self.path.display(),
            self.message,
            self.kind
        )
    }
}

impl std::error::Error for ScanError {}

/// Categorization of per-file scan errors.
///
/// Uses a 4xx/5xx style pattern:
/// - Input problems are issues with the source files (user can fix)
/// - Internal problems are issues with Glossa itself (we need to fix)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanErrorKind {
    // === Input Problems (analogous to HTTP 4xx) ===
    /// Source file has syntax errors that prevent parsing
    ParseFailed,

    /// File content is not valid UTF-8
    EncodingError,

    // === Internal Problems (analogous to HTTP 5xx) ===
    /// Could not read the file from disk
    IoError,
}

impl std::fmt::Display for ScanErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ParseFailed => write!(f, "parse failed"),
            Self::EncodingError => write!(f, "encoding error"),
            Self::IoError => write!(f, "I/O error"),
        }
    }
}

impl ScanErrorKind {
    /// Returns `true` if this is an input problem (4xx-style).
    ///
    /// Input problems are issues with the source files that the user can fix.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::ParseFailed | Self::EncodingError)
    }

    /// Returns `true` if this is an internal problem (5xx-style).
    ///
    /// Internal problems are issues with Glossa infrastructure.
    #[must_use]
    pub fn is_internal_error(&self) -> bool {
        matches!(self, Self::IoError)
    }
}

impl ScanError {
    /// Create a new scan error.
    #[must_use]
    pub fn new(path: PathBuf, kind: ScanErrorKind, message: impl Into<String>) -> Self {
        Self {
            path,
            kind,
            message: message.into(),
        }
    }

    /// Create a parse error for a file.
    #[must_use]
    pub fn parse_failed(path: PathBuf, message: impl Into<String>) -> Self {
        Self::new(path, ScanErrorKind::ParseFailed, message)
    }

    /// Create an encoding error for a file.
    #[must_use]
    pub fn encoding_error(path: PathBuf) -> Self {
        Self::new(path, ScanErrorKind::EncodingError, "file is not valid UTF-8")
    }

    /// Create an I/O error for a file.
    #[must_use]
    pub fn io_error(path: PathBuf, error: &std::io::Error) -> Self {
        Self::new(path, ScanErrorKind::IoError, error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_error_kind_categorization() {
        // Input errors (4xx-style)
        assert!(ScanErrorKind::ParseFailed.is_input_error());
        assert!(ScanErrorKind::EncodingError.is_input_error());
        assert!(!ScanErrorKind::ParseFailed.is_internal_error());

        // Internal errors (5xx-style)
        assert!(ScanErrorKind::IoError.is_internal_error());
        assert!(!ScanErrorKind::IoError.is_input_error());
    }

    #[test]
    fn parser_infrastructure_failure_is_a_top_level_error() {
        // A grammar that fails to load is our problem, never a problem
        // with any input file, so it surfaces as `Error`, not `ScanError`.
        let error = Error::Parser("incompatible grammar ABI".to_string());

        assert!(error.to_string().contains("parser error"));
        assert!(error.to_string().contains("incompatible grammar ABI"));
    }

    #[test]
    fn scan_error_display_includes_path_and_kind() {
        let error = ScanError::parse_failed(PathBuf::from("pkg/messages.go"), "unexpected token");

        let display = error.to_string();
        assert!(display.contains("pkg/messages.go"));
        assert!(display.contains("unexpected token"));
        assert!(display.contains("parse failed"));
    }

    #[test]
    fn encoding_error_names_utf8() {
        let error = ScanError::encoding_error(PathBuf::from("bad.go"));

        assert_eq!(error.kind, ScanErrorKind::EncodingError);
        assert!(error.message.contains("UTF-8"));
    }
}
