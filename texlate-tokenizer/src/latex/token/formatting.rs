//! Detokenizer
//!
//! Reconstructs document text from a token stream. Token values are
//! concatenated in stream order with no added separators. Whitespace and
//! newline tokens carry their captured literals, so a stream whose values
//! were never mutated reproduces the original document exactly.

use super::Token;

/// Fold a token stream back into document text.
pub fn detokenize(tokens: &[Token]) -> String {
    tokens.iter().map(|token| token.value.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::latex::lexing::tokenize;

    #[test]
    fn test_detokenize_simple_paragraph() {
        let source = "A short paragraph, nothing else.";
        assert_eq!(detokenize(&tokenize(source)), source);
    }

    #[test]
    fn test_detokenize_preserves_whitespace_runs() {
        let source = "spaced   out\t\ttext";
        assert_eq!(detokenize(&tokenize(source)), source);
    }

    #[test]
    fn test_detokenize_preserves_blank_lines() {
        let source = "First paragraph.\n\n\nSecond paragraph.\n";
        assert_eq!(detokenize(&tokenize(source)), source);
    }

    #[test]
    fn test_detokenize_full_markup() {
        let source = "\\section{Intro}\n\\begin{itemize}\n  \\item One & two \\\\\n\\end{itemize}\n% done\n";
        assert_eq!(detokenize(&tokenize(source)), source);
    }

    #[test]
    fn test_detokenize_empty_stream() {
        assert_eq!(detokenize(&[]), "");
    }
}
