//! Block tracking
//!
//! A single forward pass stamps every token with the id of the innermost
//! open environment. The state is an explicit stack-plus-counter accumulator
//! rather than anything global, so the pass is reentrant and testable on its
//! own.
//!
//! Only `\begin`/`\end` environment tokens move the stack. An opener is
//! stamped after its push and so belongs to the block it creates; a closer
//! is stamped after its pop and belongs to the parent block. Popping past
//! the document root is a guarded no-op.

use crate::latex::token::{Token, TokenKind};

/// Nesting accumulator for the stamping pass.
#[derive(Debug)]
pub struct BlockTracker {
    stack: Vec<usize>,
    next_id: usize,
}

impl BlockTracker {
    pub fn new() -> Self {
        BlockTracker {
            stack: vec![0],
            next_id: 0,
        }
    }

    /// Id of the innermost open block; 0 at the document root.
    pub fn current(&self) -> usize {
        self.stack.last().copied().unwrap_or(0)
    }

    fn enter(&mut self) {
        self.next_id += 1;
        self.stack.push(self.next_id);
    }

    fn leave(&mut self) {
        if self.stack.len() > 1 {
            self.stack.pop();
        }
    }

    /// Stamp a token stream with block ids in one pass.
    pub fn stamp(&mut self, tokens: Vec<Token>) -> Vec<Token> {
        tokens
            .into_iter()
            .map(|mut token| {
                if token.kind == TokenKind::Environment {
                    if token.value.starts_with("\\begin") {
                        self.enter();
                    } else if token.value.starts_with("\\end") {
                        self.leave();
                    }
                }
                token.block = self.current();
                token
            })
            .collect()
    }
}

impl Default for BlockTracker {
    fn default() -> Self {
        BlockTracker::new()
    }
}
