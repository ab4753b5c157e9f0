//! Heuristic comment stripping for JSON-with-comments input
//!
//! The stripper is a pair of blind regex passes over the raw text. It does
//! NOT track whether a `/*`, `*/` or `//` sequence occurs inside a JSON
//! string literal, so a string value containing one of those sequences is
//! corrupted. This is a documented accuracy limitation of the heuristic,
//! characterized by tests, not an error condition. A state-tracking
//! tokenizer would fix it but is intentionally not used here (see
//! DESIGN.md).

use regex::Regex;
use std::sync::LazyLock;

/// `/* ... */` spans, non-greedy, crossing newlines, plus trailing whitespace
static BLOCK_COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/\s*").unwrap());

/// `// ...` up to and including the next line terminator. A line comment on
/// the final line with no trailing newline is left in place.
static LINE_COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"//.*?[\r\n]").unwrap());

/// Runs of blank (whitespace-only) lines, collapsed to a single newline
static BLANK_LINES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n(?:[ \t]*\r?\n)+").unwrap());

/// Remove C-style block and line comments from `text`.
pub fn strip_comments(text: &str) -> String {
    let without_blocks = BLOCK_COMMENT.replace_all(text, "");
    LINE_COMMENT.replace_all(&without_blocks, "").into_owned()
}

/// File-formatting variant: strip comments, then collapse blank lines.
pub(crate) fn strip_comments_and_blank_lines(text: &str) -> String {
    let stripped = strip_comments(text);
    BLANK_LINES.replace_all(&stripped, "\n").into_owned()
}
