//! Navigation layer for doc-comment annotation parsers.
//!
//! Inputs: a [`TokenStream`](crate::lexer::TokenStream) that includes horizontal whitespace
//! and an explicit end-of-input token.
//! Offsets are UTF-8 byte offsets into the original source, recovered from token text.
//! The cursor skips whitespace for the current token, but offsets still count it.
//!
//! Responsibility: sequencing, backtracking and the unexpected-token diagnostic only.
//! Grammar rules and AST construction live with the caller.

use thiserror::Error;

use crate::lexer::TokenKind;

mod tokenstream;
pub use tokenstream::TokenIterator;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Unexpected token '{found}', expected {expected} at offset {offset}")]
    UnexpectedToken {
        found: String,
        found_kind: TokenKind,
        expected: TokenKind,
        offset: usize,
    },
}

impl ParseError {
    /// Text of the token the cursor was on when the error was raised.
    pub fn current_token_value(&self) -> &str {
        match self {
            ParseError::UnexpectedToken { found, .. } => found,
        }
    }

    pub fn current_token_type(&self) -> TokenKind {
        match self {
            ParseError::UnexpectedToken { found_kind, .. } => *found_kind,
        }
    }

    /// Byte offset of the unexpected token.
    pub fn current_offset(&self) -> usize {
        match self {
            ParseError::UnexpectedToken { offset, .. } => *offset,
        }
    }

    pub fn expected_token_type(&self) -> TokenKind {
        match self {
            ParseError::UnexpectedToken { expected, .. } => *expected,
        }
    }
}
