//! Nested-argument expansion
//!
//! Commands and structural commands arrive from the scanner with their
//! brace-delimited argument attached. This pass splits such a match into the
//! bare command token, an explicit `{` bracket, the recursive tokenization
//! of the argument interior at corrected absolute offsets, and an explicit
//! `}` bracket. Downstream passes therefore never see command arguments as
//! opaque blobs.
//!
//! Environments and macro definitions keep their raw value; only `structure`
//! and `command` tokens expand.

use super::base_tokenization::scan;
use crate::latex::token::{classify, Token, TokenKind};

/// Arguments nested deeper than this stay opaque instead of recursing
/// further; hostile input must not be able to overflow the stack.
const MAX_EXPANSION_DEPTH: usize = 64;

/// Tokenize `content` as if it starts at absolute byte `offset` on 1-based
/// `line`, classifying every match and expanding command arguments.
pub(crate) fn tokenize_fragment(
    content: &str,
    line: usize,
    offset: usize,
    depth: usize,
) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut line = line;

    for (_, span) in scan(content) {
        let value = &content[span.start..span.end];
        let start = offset + span.start;
        let end = offset + span.end;
        let kind = classify(value);

        let expandable = matches!(kind, TokenKind::Structure | TokenKind::Command)
            && value.contains('{')
            && value.ends_with('}')
            && depth < MAX_EXPANSION_DEPTH;

        if expandable {
            expand_argument(kind, value, line, start, depth, &mut tokens);
        } else {
            tokens.push(Token::new(kind, value, line, (start, end)));
        }

        line += value.matches('\n').count();
    }

    tokens
}

/// Emit head, opening bracket, recursively tokenized interior, and closing
/// bracket for a command whose match ends in a balanced argument.
fn expand_argument(
    kind: TokenKind,
    value: &str,
    line: usize,
    start: usize,
    depth: usize,
    out: &mut Vec<Token>,
) {
    let brace = match value.find('{') {
        Some(idx) => idx,
        None => return,
    };
    let end = start + value.len();
    let head = &value[..brace];
    // The optional [...] parameter stays on the head and may span lines.
    let argument_line = line + head.matches('\n').count();

    out.push(Token::new(kind, head, line, (start, start + brace)));
    out.push(Token::new(
        TokenKind::Bracket,
        "{",
        argument_line,
        (start + brace, start + brace + 1),
    ));

    let interior = &value[brace + 1..value.len() - 1];
    out.extend(tokenize_fragment(
        interior,
        argument_line,
        start + brace + 1,
        depth + 1,
    ));

    let close_line = argument_line + interior.matches('\n').count();
    out.push(Token::new(TokenKind::Bracket, "}", close_line, (end - 1, end)));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand(source: &str) -> Vec<Token> {
        tokenize_fragment(source, 1, 0, 0)
    }

    #[test]
    fn test_section_expands_to_four_tokens() {
        let tokens = expand("\\section{Intro}");

        let shape: Vec<(TokenKind, &str, (usize, usize))> = tokens
            .iter()
            .map(|t| (t.kind, t.value.as_str(), t.span))
            .collect();
        assert_eq!(
            shape,
            vec![
                (TokenKind::Structure, "\\section", (0, 8)),
                (TokenKind::Bracket, "{", (8, 9)),
                (TokenKind::Text, "Intro", (9, 14)),
                (TokenKind::Bracket, "}", (14, 15)),
            ]
        );
    }

    #[test]
    fn test_nested_arguments_expand_recursively() {
        let tokens = expand("\\textbf{\\emph{deep}}");

        let shape: Vec<(TokenKind, &str)> =
            tokens.iter().map(|t| (t.kind, t.value.as_str())).collect();
        assert_eq!(
            shape,
            vec![
                (TokenKind::Structure, "\\textbf"),
                (TokenKind::Bracket, "{"),
                (TokenKind::Structure, "\\emph"),
                (TokenKind::Bracket, "{"),
                (TokenKind::Text, "deep"),
                (TokenKind::Bracket, "}"),
                (TokenKind::Bracket, "}"),
            ]
        );
    }

    #[test]
    fn test_parameter_stays_on_the_head() {
        let tokens = expand("\\includegraphics[width=5cm]{diagram.png}");

        assert_eq!(tokens[0].kind, TokenKind::Command);
        assert_eq!(tokens[0].value, "\\includegraphics[width=5cm]");
        assert_eq!(tokens[2].kind, TokenKind::Filepath);
        assert_eq!(tokens[2].value, "diagram.png");
    }

    #[test]
    fn test_command_without_argument_passes_through() {
        let tokens = expand("\\item");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Command);
        assert_eq!(tokens[0].value, "\\item");
    }

    #[test]
    fn test_environments_stay_atomic() {
        let tokens = expand("\\begin{itemize}");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Environment);
        assert_eq!(tokens[0].value, "\\begin{itemize}");
    }

    #[test]
    fn test_definitions_stay_atomic() {
        let tokens = expand("\\newcommand{\\akva}{AKVA}");

        assert_eq!(tokens[0].kind, TokenKind::Define);
        assert_eq!(tokens[0].value, "\\newcommand{\\akva}");
        // The second group is not part of the command match.
        assert_eq!(tokens[1].kind, TokenKind::Bracket);
        assert_eq!(tokens[2].value, "AKVA");
        assert_eq!(tokens[3].kind, TokenKind::Bracket);
    }

    #[test]
    fn test_expansion_is_lossless() {
        let source = "\\textbf{a {b {c}} d}";
        let tokens = expand(source);
        let rebuilt: String = tokens.iter().map(|t| t.value.as_str()).collect();
        assert_eq!(rebuilt, source);

        let mut cursor = 0;
        for token in &tokens {
            assert_eq!(token.span.0, cursor);
            cursor = token.span.1;
        }
        assert_eq!(cursor, source.len());
    }

    #[test]
    fn test_pathological_nesting_stops_expanding() {
        let mut source = String::new();
        for _ in 0..MAX_EXPANSION_DEPTH + 8 {
            source.push_str("\\textbf{");
        }
        source.push('x');
        for _ in 0..MAX_EXPANSION_DEPTH + 8 {
            source.push('}');
        }

        // Must terminate without overflowing; the innermost levels stay opaque.
        let tokens = expand(&source);
        let rebuilt: String = tokens.iter().map(|t| t.value.as_str()).collect();
        assert_eq!(rebuilt, source);
    }
}
