//! Text consolidation
//!
//! Merges maximal runs of adjacent `text` tokens into single `text_block`
//! tokens, the unit handed to translation. Any non-text token terminates a
//! run, whitespace included; the merged value joins the absorbed values with
//! single spaces.
//!
//! The flushed block takes the first absorbed token's line and block id. Its
//! span starts at the first absorbed token and ends where the run ended: the
//! terminating token's start, or the last absorbed token's end when the
//! stream finishes mid-run.

use crate::latex::token::{Token, TokenKind};

/// Merge runs of adjacent `text` tokens into `text_block` units.
pub fn consolidate(tokens: Vec<Token>) -> Vec<Token> {
    let mut consolidated = Vec::with_capacity(tokens.len());
    let mut run: Vec<Token> = Vec::new();

    for token in tokens {
        if token.kind.is_text() {
            run.push(token);
            continue;
        }
        if !run.is_empty() {
            let boundary = token.span.0;
            consolidated.push(flush_run(&run, boundary));
            run.clear();
        }
        consolidated.push(token);
    }

    if let Some(last) = run.last() {
        let end = last.span.1;
        consolidated.push(flush_run(&run, end));
    }

    consolidated
}

fn flush_run(run: &[Token], end: usize) -> Token {
    let first = &run[0];
    let value = run
        .iter()
        .map(|token| token.value.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    let mut merged = Token::new(TokenKind::TextBlock, value, first.line, (first.span.0, end));
    merged.block = first.block;
    merged.multiline = run.last().map(|last| last.line) != Some(first.line);
    merged
}
