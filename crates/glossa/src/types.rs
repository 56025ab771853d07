//! Domain types for Glossa scans.
//!
//! These types represent the core domain model:
//! - **`ConstantRecord`**: one extracted top-level string-literal constant
//! - **`ScanOutcome`** / **`ScanStats`**: aggregate result of a full scan
//! - **`Language`**: the source language a scan targets
//!
//! ## Design Decisions
//!
//! | Decision | Choice | Rationale |
//! |----------|--------|-----------|
//! | Language | Enum not String | Type-safe; adding a language requires a trait impl |
//! | `literal` | Verbatim source text | Matches what is written, quotes included |
//! | `has_non_ascii` | Classified on source bytes | Escapes that decode to non-ASCII don't count |

use std::path::PathBuf;
use std::time::Duration;

use crate::error::ScanError;

/// Supported source languages.
///
/// Adding a new language requires implementing the `LanguageSupport` trait.
/// This enum ensures we only claim to support languages we actually handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    /// Go source files (`.go`)
    Go,
}

impl Language {
    /// All supported languages.
    const ALL: [Self; 1] = [Self::Go];

    /// File extensions handled by this language.
    ///
    /// Delegates to the language's `LanguageSupport` implementation, the
    /// single source of truth for extension claims.
    #[must_use]
    pub fn extensions(&self) -> &'static [&'static str] {
        crate::languages::get_language_support(*self).extensions()
    }

    /// Detect language from file extension.
    ///
    /// Matching is exact and case-sensitive, like the `.go` suffix check
    /// this scanner replaces.
    ///
    /// # Returns
    ///
    /// `None` if no supported language claims the extension.
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|lang| lang.extensions().contains(&ext))
    }

    /// Human-readable language name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Go => "go",
        }
    }
}

/// A top-level string-literal constant extracted from one source file.
///
/// `literal` is the token's verbatim source text, surrounding quotes
/// included, never its decoded runtime value. Records are immutable once
/// created; within one file they appear in source declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstantRecord {
    /// Path of the file the constant was found in
    pub path: PathBuf,
    /// Line of the literal token (1-indexed)
    pub line: u32,
    /// Verbatim source text of the literal, quotes included
    pub literal: String,
    /// Whether any byte of the verbatim source text is outside 7-bit ASCII
    pub has_non_ascii: bool,
}

impl ConstantRecord {
    /// Create a new record for a literal token.
    #[must_use]
    pub fn new(path: PathBuf, line: u32, literal: String, has_non_ascii: bool) -> Self {
        debug_assert!(line > 0, "line numbers should be 1-indexed");
        Self {
            path,
            line,
            literal,
            has_non_ascii,
        }
    }
}

impl std::fmt::Display for ConstantRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}: {}", self.path.display(), self.line, self.literal)
    }
}

/// Aggregate result of a scan.
///
/// Ownership of every per-file record batch passes into this collection
/// exactly once, at the scan's join barrier. Within a single file's
/// contribution, record order follows source order; ordering across files
/// is not part of the contract.
#[derive(Debug)]
pub struct ScanOutcome {
    /// All records extracted from successfully parsed files
    pub records: Vec<ConstantRecord>,
    /// Summary of the run, including collected per-file errors
    pub stats: ScanStats,
}

/// Summary of one scan run.
#[derive(Debug)]
pub struct ScanStats {
    /// Files that matched the target language and were scanned
    pub files_scanned: usize,
    /// Files seen during discovery but skipped (wrong extension)
    pub files_skipped: usize,
    /// Wall-clock duration of the scan
    pub duration: Duration,
    /// Per-file errors collected during the scan (non-fatal)
    pub errors: Vec<ScanError>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_from_extension() {
        assert_eq!(Language::from_extension("go"), Some(Language::Go));
        assert_eq!(Language::from_extension("rs"), None);
        // Extension matching is exact, like the `.go` suffix check it replaces
        assert_eq!(Language::from_extension("GO"), None);
    }

    #[test]
    fn record_formats_as_path_line_literal() {
        let record = ConstantRecord::new(
            PathBuf::from("pkg/messages.go"),
            7,
            "\"こんにちは\"".to_string(),
            true,
        );

        assert_eq!(record.to_string(), "pkg/messages.go:7: \"こんにちは\"");
    }

    #[test]
    fn record_preserves_verbatim_literal() {
        let record = ConstantRecord::new(
            PathBuf::from("a.go"),
            1,
            "`raw \\n text`".to_string(),
            false,
        );

        assert_eq!(record.literal, "`raw \\n text`");
    }
}
