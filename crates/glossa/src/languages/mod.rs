//! Language-specific constant extraction.
//!
//! Each supported language implements the `LanguageSupport` trait, which
//! defines which files it claims and which tree-sitter grammar parses them.
//! Extraction itself lives in the language module (see [`go`]), operating on
//! the tree-sitter tree plus the raw source bytes.
//!
//! ## Adding a New Language
//!
//! 1. Add the variant to `Language` enum in `types.rs`
//! 2. Create a new module (e.g., `python.rs`)
//! 3. Implement `LanguageSupport` trait
//! 4. Register in `get_language_support()`

pub mod go;
pub(crate) mod tree_sitter_utils;

use crate::types::Language;

/// Get the language support implementation for a language.
#[must_use]
pub fn get_language_support(lang: Language) -> &'static dyn LanguageSupport {
    match lang {
        Language::Go => &go::GoLanguage,
    }
}

/// Trait for language-specific parsing support.
///
/// The scan coordinator is independent of any concrete grammar; it asks
/// this trait for the tree-sitter language and hands the resulting tree to
/// the language module's extraction function.
pub trait LanguageSupport: Send + Sync {
    /// File extensions this language handles.
    ///
    /// This is the single source of truth for extension claims;
    /// `Language::extensions` delegates here.
    fn extensions(&self) -> &'static [&'static str];

    /// Get the tree-sitter language for parsing.
    fn tree_sitter_language(&self) -> tree_sitter::Language;
}
