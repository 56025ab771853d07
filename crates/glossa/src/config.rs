//! Scan configuration.
//!
//! A scan is configured once up front and never changes while running.
//! The non-ASCII filter is an explicit boolean here rather than a build
//! variant: the same binary serves both the "audit everything" and the
//! "audit localized strings only" workflows.

use crate::types::Language;

/// Configuration for a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanConfig {
    /// Language whose files are discovered and parsed
    pub language: Language,
    /// When set, only records whose verbatim source text contains a byte
    /// outside 7-bit ASCII are retained
    pub non_ascii_only: bool,
}

impl ScanConfig {
    /// Configuration for a scan of the given language, reporting every
    /// top-level string-literal constant.
    #[must_use]
    pub fn new(language: Language) -> Self {
        Self {
            language,
            non_ascii_only: false,
        }
    }

    /// Enable or disable the non-ASCII filter.
    #[must_use]
    pub fn with_non_ascii_only(mut self, non_ascii_only: bool) -> Self {
        self.non_ascii_only = non_ascii_only;
        self
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self::new(Language::Go)
    }
}
