use tracing_subscriber::EnvFilter;

use crate::lexer::{Token, TokenKind, TokenStream};

/// Builds a stream from `(kind, text)` pairs and appends the end sentinel.
pub fn stream(tokens: &[(TokenKind, &str)]) -> TokenStream {
    let mut tokens: Vec<Token> = tokens
        .iter()
        .map(|&(kind, text)| Token::new(kind, text))
        .collect();
    tokens.push(Token::end());
    TokenStream::new(tokens).unwrap()
}

/// `RUST_LOG=docblock=trace cargo test` shows cursor events.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn test_stream_appends_end() {
    let s = stream(&[(TokenKind::Identifier, "int")]);
    assert_eq!(s.len(), 2);
    assert_eq!(s.tokens()[1], Token::end());
}
