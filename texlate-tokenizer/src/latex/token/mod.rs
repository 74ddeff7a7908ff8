//! Core token types shared across the lexer, the stream passes, and tooling.

pub mod classify;
pub mod formatting;

use serde::{Deserialize, Serialize};

pub use classify::classify;

/// Semantic kind of a token.
///
/// The serialized names are the contract consumed by downstream tooling;
/// they must stay `snake_case` strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    Environment,
    Structure,
    Define,
    Command,
    Bracket,
    Math,
    TableSeparator,
    Comment,
    Newline,
    Whitespace,
    Filepath,
    Reference,
    Punctuation,
    Text,
    TextBlock,
}

impl TokenKind {
    /// Plain prose, eligible for consolidation into a text block.
    pub fn is_text(&self) -> bool {
        matches!(self, TokenKind::Text)
    }

    /// Whitespace of either flavor.
    pub fn is_whitespace(&self) -> bool {
        matches!(self, TokenKind::Whitespace | TokenKind::Newline)
    }
}

/// A classified, positioned fragment of the source document.
///
/// `span` is a half-open `(start, end)` byte range into the original text.
/// Before consolidation the spans of a stream are non-overlapping and cover
/// the whole document. `block` is the structural nesting id active when the
/// token was emitted; 0 is the document root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub line: usize,
    pub span: (usize, usize),
    pub multiline: bool,
    pub block: usize,
}

impl Token {
    /// Build a token at block 0; the block tracker stamps the real id later.
    pub fn new(kind: TokenKind, value: impl Into<String>, line: usize, span: (usize, usize)) -> Self {
        let value = value.into();
        let multiline = spans_multiple_lines(kind, &value);
        Token {
            kind,
            value,
            line,
            span,
            multiline,
            block: 0,
        }
    }
}

/// A newline token covering a single line break sits *between* lines; only
/// larger runs, or embedded newlines in other kinds, make a token multiline.
fn spans_multiple_lines(kind: TokenKind, value: &str) -> bool {
    match kind {
        TokenKind::Newline => value.matches('\n').count() > 1,
        _ => value.contains('\n'),
    }
}
