//! Translation boundary
//!
//! Applies an external translation capability to consolidated text blocks
//! and splits each result back into position-tagged `text` tokens. The far
//! side makes no promise about length, word count, or structure, so the
//! re-split is a best-effort alignment with an explicit fallback:
//!
//! - word count preserved: one token per translated word, spans laid out
//!   from the block's start, advancing by `len + 1` per word;
//! - word count changed: the whole translation becomes one token over the
//!   block's original span, trading granularity for correct attribution.
//!
//! Inside `tabular`/`table` environments, blocks that begin with a control
//! sequence are passed through untouched so table plumbing is never sent to
//! the translator as prose.

use crate::latex::consolidation::consolidate;
use crate::latex::lexing::tokenize;
use crate::latex::token::formatting::detokenize;
use crate::latex::token::{Token, TokenKind};

/// External translation capability.
///
/// Synchronous and opaque; implementations may be a real service client, a
/// cache, or a no-op.
pub trait Translate {
    fn translate(&self, text: &str) -> String;
}

/// Identity translator, useful for round-trip checks.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTranslator;

impl Translate for NoopTranslator {
    fn translate(&self, text: &str) -> String {
        text.to_string()
    }
}

/// Appends a fixed marker to every unit, standing in for a translation
/// service during development.
#[derive(Debug, Clone)]
pub struct SuffixTranslator {
    suffix: String,
}

impl SuffixTranslator {
    pub fn new(suffix: impl Into<String>) -> Self {
        SuffixTranslator {
            suffix: suffix.into(),
        }
    }
}

impl Default for SuffixTranslator {
    fn default() -> Self {
        SuffixTranslator::new(" (oversatt)")
    }
}

impl Translate for SuffixTranslator {
    fn translate(&self, text: &str) -> String {
        format!("{}{}", text, self.suffix)
    }
}

/// Rewrite every translatable `text_block` in a consolidated stream.
pub fn translate_stream(tokens: Vec<Token>, translator: &dyn Translate) -> Vec<Token> {
    let mut translated = Vec::with_capacity(tokens.len());
    let mut in_table = false;

    for token in tokens {
        if token.kind == TokenKind::Environment
            && (token.value.contains("tabular") || token.value.contains("table"))
        {
            in_table = token.value.starts_with("\\begin");
        }

        if token.kind == TokenKind::TextBlock && !suppressed(&token, in_table) {
            let result = translator.translate(&token.value);
            translated.extend(split_text_block(&token, &result));
        } else {
            translated.push(token);
        }
    }

    translated
}

/// Table cells that open with a control sequence are plumbing, not prose.
fn suppressed(token: &Token, in_table: bool) -> bool {
    in_table && token.value.trim_start().starts_with('\\')
}

fn split_text_block(block: &Token, translated: &str) -> Vec<Token> {
    let original_words = block.value.split_whitespace().count();
    let translated_words: Vec<&str> = translated.split_whitespace().collect();

    if translated_words.len() == original_words {
        let mut start = block.span.0;
        translated_words
            .into_iter()
            .map(|word| {
                let mut token =
                    Token::new(TokenKind::Text, word, block.line, (start, start + word.len()));
                token.block = block.block;
                start += word.len() + 1;
                token
            })
            .collect()
    } else {
        let mut token = Token::new(TokenKind::Text, translated, block.line, block.span);
        token.block = block.block;
        vec![token]
    }
}

/// Tokenize, consolidate, translate, and reconstruct a whole document.
pub fn translate_document(source: &str, translator: &dyn Translate) -> String {
    let consolidated = consolidate(tokenize(source));
    detokenize(&translate_stream(consolidated, translator))
}
