//! Token cursor for doc-comment annotation parsers.
//!
//! Pipeline: external lexer → [`TokenStream`] → [`TokenIterator`] → caller's grammar.
//! All offsets are UTF-8 byte offsets into the original source, derived from token text.

mod lexer;
mod parser;
mod tests;

pub use lexer::{Token, TokenKind, TokenStream, TokenStreamError};
pub use parser::{ParseError, TokenIterator};
