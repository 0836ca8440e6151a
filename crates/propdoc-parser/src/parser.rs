//! ast-grep wrapper and language detection from file extensions.

use ast_grep_core::Node;
use ast_grep_core::tree_sitter::StrDoc;
use ast_grep_language::SupportLang;

use crate::error::ParserError;

/// The concrete AST tree type returned by `parse_source`.
pub type AstTree = ast_grep_core::AstGrep<StrDoc<SupportLang>>;

/// Detect the grammar for a file path extension.
///
/// Plain TypeScript uses the TypeScript grammar; everything that may carry
/// JSX (including plain JavaScript) goes through the TSX grammar, which is a
/// superset of JavaScript. Returns `None` for anything else.
#[must_use]
pub fn detect_language(file_path: &str) -> Option<SupportLang> {
    let file_name = file_path.rsplit(['/', '\\']).next()?;
    let (_, ext) = file_name.rsplit_once('.')?;
    match ext.to_ascii_lowercase().as_str() {
        "ts" | "mts" | "cts" => Some(SupportLang::TypeScript),
        "tsx" | "jsx" | "js" | "mjs" | "cjs" => Some(SupportLang::Tsx),
        _ => None,
    }
}

/// Parse source code into an ast-grep tree for the given language.
#[must_use]
pub fn parse_source(source: &str, lang: SupportLang) -> AstTree {
    use ast_grep_language::LanguageExt;
    lang.ast_grep(source)
}

/// Reject trees that tree-sitter could only partially recover.
///
/// tree-sitter always produces a tree; syntax errors show up as `ERROR`
/// nodes. The first one (in source order) is reported with a one-based
/// position.
///
/// # Errors
/// Returns `ParserError::ParseFailed` when the tree contains an `ERROR` node.
pub fn ensure_parsed(tree: &AstTree, path: &str) -> Result<(), ParserError> {
    let Some(node) = first_error(&tree.root()) else {
        return Ok(());
    };
    let start = node.start_pos();
    let snippet: String = node.text().chars().take(40).collect();
    Err(ParserError::ParseFailed {
        path: path.to_string(),
        line: one_based(start.line()),
        column: one_based(start.column(&node)),
        message: format!("unexpected `{}`", snippet.trim()),
    })
}

fn first_error<'r, D: ast_grep_core::Doc>(node: &Node<'r, D>) -> Option<Node<'r, D>> {
    if node.kind().as_ref() == "ERROR" {
        return Some(node.clone());
    }
    node.children().find_map(|child| first_error(&child))
}

fn one_based(zero_based: usize) -> u32 {
    u32::try_from(zero_based).map_or(u32::MAX, |n| n.saturating_add(1))
}
