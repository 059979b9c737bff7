//! Token vocabulary shared with the external lexer.
//!
//! Lexing itself happens upstream; this module only defines what a lexed stream looks like
//! and checks that a stream handed to the parser is well formed.

mod token;

pub use token::{Token, TokenKind, TokenStream, TokenStreamError};
