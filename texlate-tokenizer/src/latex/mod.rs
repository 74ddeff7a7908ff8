//! LaTeX tokenization, block tracking, and translation round-trip.
//!
//! The passes compose in a fixed order:
//!
//!     source text
//!       -> lexing       (scan + classify + expand arguments + stamp blocks)
//!       -> consolidation (merge adjacent text tokens into text blocks)
//!       -> translation   (rewrite text blocks through a Translate capability)
//!       -> formatting    (fold token values back into a document)
//!
//! Lexing output alone is already the externally consumed artifact; the
//! later passes are only needed for the translation round-trip.

pub mod blocks;
pub mod consolidation;
pub mod lexing;
pub mod token;
pub mod translation;
