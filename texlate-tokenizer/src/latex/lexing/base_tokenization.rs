//! Base scanning implementation for the LaTeX lexer
//!
//! This module provides the raw scanning using the logos lexer library.
//! This is the entry point where source strings become match streams.
//!
//! Each variant of [RawToken] is one alternative of the grammar. Ordering
//! between alternatives that can accept the same text is fixed with explicit
//! priorities: `\begin{...}`/`\end{...}` beat the command alternative, the
//! command alternative beats the single-escape alternative, and `\\` and
//! `\[` beat the single-escape alternative at equal length.
//!
//! The command alternative matches only the control word in the DFA; a
//! callback then extends the match over one immediately-following `[...]`
//! parameter and one balanced `{...}` argument, so a command and its
//! argument arrive as a single raw match. Balance is tracked by counting
//! braces, so argument bodies of arbitrary nesting depth are captured whole.
//!
//! Scanning never fails: input no alternative accepts is emitted as a
//! fallback match of the unmatched bytes, keeping the stream a partition of
//! the source.

use logos::Logos;

use super::braces::balanced_group_len;

/// Raw lexical alternatives of the scanner grammar.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawToken {
    /// `\begin{name}` or `\end{name}` as one atomic unit.
    #[regex(r"\\(begin|end)\{[^}]+\}", priority = 12)]
    EnvDelimiter,

    /// Command name with optional trailing `*`, extended over its parameter
    /// and argument by the callback.
    #[regex(r"\\[a-zA-Z]+\*?", callback = consume_arguments, priority = 10)]
    Command,

    /// Lone unmatched braces and brackets.
    #[token("{")]
    OpenBrace,
    #[token("}")]
    CloseBrace,
    #[token("[")]
    OpenBracket,
    #[token("]")]
    CloseBracket,

    /// Start-of-math-block escape.
    #[token(r"\[", priority = 8)]
    MathOpen,

    /// Inline or display math delimiter.
    #[regex(r"\$\$?")]
    MathDelimiter,

    /// Line comment through end of line.
    #[regex(r"%[^\n]*")]
    Comment,

    /// Table row separator.
    #[token(r"\\", priority = 7)]
    RowSeparator,

    /// Any other backslash-escaped single character.
    #[regex(r"\\.", priority = 5)]
    EscapedChar,

    /// Table column separator.
    #[token("&")]
    ColumnSeparator,

    /// Run of horizontal whitespace.
    #[regex(r"[ \t]+")]
    Whitespace,

    /// Run of one or more newlines.
    #[regex(r"\n+")]
    Newline,

    /// Maximal run of characters free of markup and whitespace.
    #[regex(r"[^\\{}\[\]$%&\s]+")]
    Text,

    /// Emitted for input no alternative accepts; never produced by the DFA.
    Fallback,
}

/// Extend a command match over one optional `[...]` parameter and one
/// optional balanced `{...}` argument, both only if immediately adjacent.
fn consume_arguments(lex: &mut logos::Lexer<RawToken>) {
    let rest = lex.remainder();
    let mut consumed = 0usize;

    if rest.as_bytes().first() == Some(&b'[') {
        if let Some(close) = rest.find(']') {
            consumed = close + 1;
        }
    }
    if let Some(group) = balanced_group_len(&rest[consumed..]) {
        consumed += group;
    }

    lex.bump(consumed);
}

/// Scan source text into raw matches with byte spans.
///
/// The matches are non-overlapping, in ascending offset order, and cover the
/// buffer completely; unmatched input degrades to [RawToken::Fallback]
/// instead of being dropped.
pub fn scan(source: &str) -> Vec<(RawToken, logos::Span)> {
    let mut lexer = RawToken::lexer(source);
    let mut matches = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => matches.push((token, lexer.span())),
            Err(()) => matches.push((RawToken::Fallback, lexer.span())),
        }
    }

    matches
}
