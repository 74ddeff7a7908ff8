//! Lexer
//!
//!     This module orchestrates the tokenization pipeline for LaTeX source.
//!     Scanning produces raw matches with byte spans, classification assigns
//!     each match a semantic kind, argument expansion flattens brace-delimited
//!     command arguments into the same token vocabulary, and block stamping
//!     records the environment nesting id on every token.
//!
//! Ordered-choice scanning
//!
//!     The scanner is an ordered-alternative grammar, not a longest-match
//!     grammar: `\begin{name}` must win over the generic command alternative,
//!     and a command with its argument must win over the lone-brace
//!     alternatives, otherwise `\section{X}` fragments into a bare command
//!     plus separately-matched braces. See [base_tokenization].
//!
//! Span preservation
//!
//!     Raw matches carry the byte range of their source text. Every pass is
//!     required to keep spans non-overlapping and, up to consolidation,
//!     covering the whole document; this is what makes detokenization an
//!     exact inverse. The translation pass is the only one allowed to break
//!     the partition, because it rewrites values wholesale.

pub mod base_tokenization;
pub mod braces;
pub mod expansion;

pub use base_tokenization::{scan, RawToken};

use crate::latex::blocks::BlockTracker;
use crate::latex::token::Token;

/// Tokenize a whole document into the flat, block-stamped stream.
pub fn tokenize(source: &str) -> Vec<Token> {
    let expanded = expansion::tokenize_fragment(source, 1, 0, 0);
    BlockTracker::new().stamp(expanded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::latex::token::TokenKind;

    /// Spans must partition the source: sorted, contiguous, covering.
    fn assert_partition(source: &str) {
        let tokens = tokenize(source);
        let mut cursor = 0;
        for token in &tokens {
            assert_eq!(token.span.0, cursor, "gap or overlap before {:?}", token);
            assert!(token.span.1 > token.span.0, "empty span in {:?}", token);
            cursor = token.span.1;
        }
        assert_eq!(cursor, source.len(), "stream does not reach end of input");
    }

    #[test]
    fn test_span_partition_on_plain_text() {
        assert_partition("Just a sentence with spaces.\n");
    }

    #[test]
    fn test_span_partition_on_markup() {
        assert_partition("\\section{Intro}\n\\begin{itemize}\\item A\\end{itemize}\n$x$ & \\\\ % c\n");
    }

    #[test]
    fn test_span_partition_on_unbalanced_markup() {
        assert_partition("} stray { \\begin{open\nnever closed ] [");
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(tokenize(""), vec![]);
    }

    #[test]
    fn test_line_numbers_advance() {
        let tokens = tokenize("one\ntwo\n\nthree");
        let lines: Vec<(TokenKind, usize)> = tokens.iter().map(|t| (t.kind, t.line)).collect();
        assert_eq!(
            lines,
            vec![
                (TokenKind::Text, 1),
                (TokenKind::Newline, 1),
                (TokenKind::Text, 2),
                (TokenKind::Newline, 2),
                (TokenKind::Text, 4),
            ]
        );
    }

    #[test]
    fn test_line_numbers_advance_inside_arguments() {
        // The argument spans a line break; tokens after the command must not drift.
        let tokens = tokenize("\\section{a\nb} tail");
        let tail = tokens.last().expect("tail token");
        assert_eq!(tail.value, "tail");
        assert_eq!(tail.line, 2);
    }
}
