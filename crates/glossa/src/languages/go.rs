//! Go language support for Glossa.
//!
//! Implements top-level string-constant extraction for Go source files
//! using tree-sitter-go.

use std::path::Path;

use super::LanguageSupport;
use super::tree_sitter_utils::{node_line, node_text};
use crate::types::ConstantRecord;

/// Tree-sitter node kind constants for the Go grammar.
///
/// These match the node types defined in tree-sitter-go. Using constants
/// prevents typos and makes supported node types explicit.
mod node_kinds {
    // Declarations
    pub const CONST_DECLARATION: &str = "const_declaration";
    pub const CONST_SPEC: &str = "const_spec";

    // Literal tokens
    pub const INTERPRETED_STRING_LITERAL: &str = "interpreted_string_literal";
    pub const RAW_STRING_LITERAL: &str = "raw_string_literal";
}

/// Field names in the Go grammar.
mod fields {
    pub const VALUE: &str = "value";
}

/// Go language support implementation.
pub struct GoLanguage;

impl LanguageSupport for GoLanguage {
    fn extensions(&self) -> &'static [&'static str] {
        &["go"]
    }

    fn tree_sitter_language(&self) -> tree_sitter::Language {
        tree_sitter_go::LANGUAGE.into()
    }
}

/// Extract top-level string-literal constants from a Go syntax tree.
///
/// Walks the file's top-level declarations only; `const` blocks inside
/// function bodies are out of scope. Within each `const` declaration
/// (grouped or not), each binding whose value is a direct string-literal
/// token produces one record. Non-literal values (expressions, identifier
/// references, calls, non-string literals) are not a match and are skipped
/// silently; extraction cannot fail on a valid tree.
///
/// Records are emitted in source order. The literal text is the token's
/// verbatim source bytes, quotes included, and `has_non_ascii` is computed
/// over those same bytes: an escape sequence written in ASCII that decodes
/// to a non-ASCII character does not count.
pub fn extract_string_constants(
    tree: &tree_sitter::Tree,
    content: &[u8],
    path: &Path,
) -> Vec<ConstantRecord> {
    let mut records = Vec::new();
    let root = tree.root_node();

    let mut cursor = root.walk();
    for decl in root.named_children(&mut cursor) {
        if decl.kind() != node_kinds::CONST_DECLARATION {
            continue;
        }
        extract_from_const_declaration(&decl, content, path, &mut records);
    }

    records
}

/// Collect string-literal bindings from one `const` declaration.
///
/// Handles both the single form (`const A = "x"`) and the grouped form
/// (`const ( A = "x"; B = "y" )`); each appears as `const_spec` children.
fn extract_from_const_declaration(
    decl: &tree_sitter::Node,
    content: &[u8],
    path: &Path,
    records: &mut Vec<ConstantRecord>,
) {
    let mut cursor = decl.walk();
    for spec in decl.named_children(&mut cursor) {
        if spec.kind() != node_kinds::CONST_SPEC {
            continue;
        }

        // A spec without a value field is an iota continuation line.
        let Some(values) = spec.child_by_field_name(fields::VALUE) else {
            continue;
        };

        let mut value_cursor = values.walk();
        for value in values.named_children(&mut value_cursor) {
            if !is_string_literal(value.kind()) {
                continue;
            }

            let Some(literal) = node_text(&value, content) else {
                continue;
            };

            let raw = &content[value.byte_range()];
            records.push(ConstantRecord::new(
                path.to_path_buf(),
                node_line(&value),
                literal,
                has_non_ascii_bytes(raw),
            ));
        }
    }
}

/// Whether a node kind is a direct Go string-literal token.
fn is_string_literal(kind: &str) -> bool {
    kind == node_kinds::INTERPRETED_STRING_LITERAL || kind == node_kinds::RAW_STRING_LITERAL
}

/// Whether any byte falls outside the 7-bit ASCII range.
///
/// Classification is over verbatim source bytes, so `"\u00e9"` written in
/// ASCII is not considered non-ASCII even though it decodes to `é`.
pub(crate) fn has_non_ascii_bytes(bytes: &[u8]) -> bool {
    bytes.iter().any(|&b| b >= 0x80)
}
