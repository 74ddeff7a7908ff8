//! Token classification
//!
//! A pure `value -> kind` function, evaluated as a fixed precedence chain
//! where the first matching predicate wins. The chain runs on the raw matched
//! text, so composite matches like `\section{Intro}` classify from their
//! leading command name.
//!
//! Note the precedence consequence for `\[`, `\]` and `\\`: the generic
//! leading-backslash arm sits before the math and table arms, so those values
//! classify as `command`. The live cases for `math` and `table_separator` are
//! `$`, `$$` and `&`.

use once_cell::sync::Lazy;
use regex::Regex;

use super::TokenKind;

/// Sectioning and emphasis commands lifted out of the generic command pool.
const STRUCTURE_COMMANDS: &[&str] = &[
    "\\chapter",
    "\\section",
    "\\subsection",
    "\\subsubsection",
    "\\paragraph",
    "\\subparagraph",
    "\\emph",
    "\\textbf",
    "\\note",
];

/// Macro definition commands.
const DEFINE_COMMANDS: &[&str] = &["\\newcommand", "\\renewcommand", "\\def"];

/// Characters treated as standalone punctuation when they are a whole token.
const PUNCTUATION: &str = ".,;:!?()-";

/// Word/path characters ending in a known document-asset extension.
static FILEPATH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[\w\-./\\]+\.(tex|eps|pdf|png|jpg|jpeg)$").expect("filepath pattern compiles")
});

/// Identifier-with-colon labels such as `fig:overview`.
static REFERENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9:_-]+").expect("reference pattern compiles"));

/// Assign a semantic kind to a raw match.
pub fn classify(value: &str) -> TokenKind {
    if value.starts_with("\\begin") || value.starts_with("\\end") {
        TokenKind::Environment
    } else if STRUCTURE_COMMANDS.iter().any(|c| value.starts_with(c)) {
        TokenKind::Structure
    } else if DEFINE_COMMANDS.iter().any(|c| value.starts_with(c)) {
        TokenKind::Define
    } else if value.starts_with('\\') {
        TokenKind::Command
    } else if matches!(value, "{" | "}" | "[" | "]") {
        TokenKind::Bracket
    } else if matches!(value, "\\[" | "\\]" | "$" | "$$") {
        TokenKind::Math
    } else if matches!(value, "&" | "\\\\") {
        TokenKind::TableSeparator
    } else if value.starts_with('%') {
        TokenKind::Comment
    } else if !value.is_empty() && value.chars().all(char::is_whitespace) {
        if value.contains('\n') {
            TokenKind::Newline
        } else {
            TokenKind::Whitespace
        }
    } else if FILEPATH.is_match(value) {
        TokenKind::Filepath
    } else if REFERENCE.is_match(value) && value.contains(':') {
        TokenKind::Reference
    } else if is_punctuation(value) {
        TokenKind::Punctuation
    } else if !value.trim().is_empty() {
        TokenKind::Text
    } else {
        TokenKind::Whitespace
    }
}

fn is_punctuation(value: &str) -> bool {
    let mut chars = value.chars();
    matches!(
        (chars.next(), chars.next()),
        (Some(c), None) if PUNCTUATION.contains(c)
    )
}
