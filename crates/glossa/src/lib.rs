//! # Glossa: parallel scanner for top-level string-literal constants
//!
//! Glossa walks a source tree, parses each matching file with tree-sitter,
//! and reports every string literal bound directly in a top-level constant
//! declaration — optionally only those whose source text contains
//! non-ASCII bytes. Its main use is auditing localized or user-facing
//! string constants in a codebase.
//!
//! ## Design Philosophy
//!
//! - **Scanner, not analyzer** - one pattern (top-level constant string
//!   literals), no type resolution, no cross-file linking
//! - **Best effort per file** - a file that fails to read or parse is
//!   reported and contributes nothing; the scan always completes
//! - **All or nothing discovery** - a traversal error aborts the run with
//!   no partial output
//! - **Embeddable** - library first, CLI second
//!
//! ## Quick Start
//!
//! ```no_run
//! use glossa::{Glossa, ScanConfig};
//! use std::path::Path;
//!
//! let glossa = Glossa::new(Path::new("/path/to/project"), ScanConfig::default())?;
//! let outcome = glossa.scan()?;
//! for record in &outcome.records {
//!     println!("{record}");
//! }
//! # Ok::<(), glossa::Error>(())
//! ```

mod config;
mod error;
mod languages;
mod scan;
mod types;

pub use config::ScanConfig;
pub use error::{Error, Result, ScanError, ScanErrorKind};
pub use types::{ConstantRecord, Language, ScanOutcome, ScanStats};

use std::path::{Path, PathBuf};
use std::time::Instant;

use languages::get_language_support;
use tracing::debug;

/// String-constant scanner for one source tree.
///
/// `Glossa` is the entry point: it discovers matching files under the
/// configured root, fans out one parse-and-extract unit per file, and
/// aggregates the surviving records. The root and configuration are fixed
/// for the lifetime of the instance.
pub struct Glossa {
    root: PathBuf,
    config: ScanConfig,
    grammar: tree_sitter::Language,
}

impl Glossa {
    /// Create a scanner for the tree rooted at `root`.
    ///
    /// The configured language's grammar is loaded and checked here, once,
    /// so a grammar that cannot be loaded aborts before any file is read
    /// instead of being misreported as a problem with someone's source.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the root does not exist or cannot be
    /// resolved, and [`Error::Parser`] if the grammar fails to load.
    pub fn new(root: &Path, config: ScanConfig) -> Result<Self> {
        let root = root.canonicalize().map_err(|e| {
            Error::Io(std::io::Error::new(
                e.kind(),
                format!("scan root not found: {}", root.display()),
            ))
        })?;

        let grammar = get_language_support(config.language).tree_sitter_language();
        let mut probe = tree_sitter::Parser::new();
        probe
            .set_language(&grammar)
            .map_err(|e| Error::Parser(e.to_string()))?;

        Ok(Self {
            root,
            config,
            grammar,
        })
    }

    /// Scan the tree and return every extractable constant record.
    ///
    /// Discovery runs first and is all-or-nothing; after it succeeds, each
    /// file is parsed and extracted in parallel and per-file failures are
    /// collected in [`ScanStats::errors`] rather than propagated. The call
    /// returns only once every dispatched file has finished.
    ///
    /// Across files, record order is the discovery order of the files that
    /// produced them; within one file, records follow source order. Callers
    /// must not rely on any particular cross-file order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the tree cannot be fully traversed. No
    /// records are produced in that case.
    pub fn scan(&self) -> Result<ScanOutcome> {
        let start = Instant::now();

        let mut files_skipped = 0;
        let files = self.discover_files(&mut files_skipped)?;
        debug!(
            root = %self.root.display(),
            language = self.config.language.as_str(),
            files = files.len(),
            skipped = files_skipped,
            "Discovery completed"
        );

        let (records, errors) = scan::scan_files(&files, &self.config, &self.grammar);

        Ok(ScanOutcome {
            records,
            stats: ScanStats {
                files_scanned: files.len(),
                files_skipped,
                duration: start.elapsed(),
                errors,
            },
        })
    }

    /// Discover source files matching the configured language.
    fn discover_files(&self, files_skipped: &mut usize) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        self.walk_dir(&self.root, &mut files, files_skipped)?;
        Ok(files)
    }

    /// Recursively walk a directory, collecting matching source files.
    ///
    /// Unlike per-file scan failures, traversal failures are fatal: an
    /// unreadable directory or a broken entry aborts discovery so the run
    /// never emits a silently incomplete result.
    fn walk_dir(
        &self,
        dir: &Path,
        files: &mut Vec<PathBuf>,
        files_skipped: &mut usize,
    ) -> Result<()> {
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();

            // Skip hidden directories and common build/vendor directories
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                if path.is_dir() && (name.starts_with('.') || Self::is_excluded_dir(name)) {
                    continue;
                }
            }

            if path.is_dir() {
                self.walk_dir(&path, files, files_skipped)?;
            } else if path.is_file() {
                let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
                if Language::from_extension(ext) == Some(self.config.language) {
                    files.push(path);
                } else {
                    *files_skipped += 1;
                }
            }
        }

        Ok(())
    }

    /// Check if a directory should be excluded from discovery.
    fn is_excluded_dir(name: &str) -> bool {
        matches!(name, "vendor" | "testdata" | "node_modules" | "target")
    }

    /// The canonicalized root this scanner walks.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_tree() -> TempDir {
        tempfile::tempdir().expect("failed to create temp dir")
    }

    #[test]
    fn new_creates_instance_for_valid_root() {
        let tree = temp_tree();
        let result = Glossa::new(tree.path(), ScanConfig::default());

        assert!(result.is_ok());
    }

    #[test]
    fn new_loads_and_validates_the_grammar() {
        let tree = temp_tree();

        // Grammar loading happens at construction, before any file is
        // read; a loadable grammar means scans never see a grammar error.
        let glossa =
            Glossa::new(tree.path(), ScanConfig::default()).expect("grammar should load");

        assert!(glossa.scan().expect("scan should succeed").records.is_empty());
    }

    #[test]
    fn new_fails_for_nonexistent_root() {
        let result = Glossa::new(
            Path::new("/nonexistent/path/that/does/not/exist"),
            ScanConfig::default(),
        );

        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn excluded_dirs_cover_go_conventions() {
        assert!(Glossa::is_excluded_dir("vendor"));
        assert!(Glossa::is_excluded_dir("testdata"));
        assert!(!Glossa::is_excluded_dir("internal"));
    }
}
