//! # texlate-tokenizer
//!
//! A lexical decomposition library for LaTeX documents, built for translation
//! workflows: a document is flattened into a position-exact token stream,
//! runs of plain text are grouped into translatable units, a translation
//! capability rewrites those units, and the stream is folded back into a
//! document.
//!
//! The token stream is the central artifact. Before any text is merged or
//! rewritten, the spans of the stream partition the source exactly, so
//! concatenating token values reproduces the input byte for byte. Every pass
//! (block stamping, consolidation, translation) consumes a stream and
//! produces a stream; nothing is parsed into a tree.
//!
//! For comprehensive behavior tests see the `tests/` directory; the unit
//! tests next to each module cover the individual passes.

#![allow(rustdoc::invalid_html_tags)]

pub mod latex;

pub use latex::consolidation::consolidate;
pub use latex::lexing::tokenize;
pub use latex::token::formatting::detokenize;
pub use latex::token::{Token, TokenKind};
pub use latex::translation::{
    translate_document, translate_stream, NoopTranslator, SuffixTranslator, Translate,
};
