use tracing::{debug, trace};

use crate::lexer::{Token, TokenKind, TokenStream};
use crate::parser::ParseError;

/// Cursor over a [`TokenStream`] for recursive-descent parsers.
///
/// # Position semantics
/// - The current token is never [`TokenKind::HorizontalWs`]: every advance that lands on
///   whitespace steps once more. The stream guarantees whitespace tokens are never adjacent.
/// - The cursor never moves past the [`TokenKind::End`] sentinel; advancing on it is a no-op.
/// - [`TokenIterator::join_until`] is the one exception: it walks raw tokens and may stop on
///   whitespace if whitespace is one of its terminators.
///
/// # Backtracking
/// Save points form a stack. Every [`push_save_point`](Self::push_save_point) must be matched
/// by exactly one [`drop_save_point`](Self::drop_save_point) or
/// [`rollback`](Self::rollback), in reverse order. Only the index is saved; the stream is
/// shared.
#[derive(Debug, Clone)]
pub struct TokenIterator<'a> {
    stream: &'a TokenStream,
    index: usize,
    save_points: Vec<usize>,
}

impl<'a> TokenIterator<'a> {
    pub fn new(stream: &'a TokenStream) -> Self {
        Self::with_index(stream, 0)
    }

    /// Starts at `index`, clamped to the sentinel.
    pub fn with_index(stream: &'a TokenStream, index: usize) -> Self {
        let mut cursor = TokenIterator {
            stream,
            index: index.min(stream.end_index()),
            save_points: Vec::new(),
        };
        cursor.skip_horizontal_ws();
        cursor
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current_token(&self) -> &'a Token {
        &self.stream.tokens()[self.index]
    }

    pub fn current_token_value(&self) -> &'a str {
        &self.current_token().text
    }

    pub fn current_token_type(&self) -> TokenKind {
        self.current_token().kind
    }

    /// The raw token just before the cursor, which may be skipped whitespace.
    ///
    /// `None` only at index 0.
    pub fn prev_token_value(&self) -> Option<&'a str> {
        self.prev_token().map(|t| t.text.as_str())
    }

    pub fn prev_token_type(&self) -> Option<TokenKind> {
        self.prev_token().map(|t| t.kind)
    }

    pub fn is_current_token_value(&self, value: &str) -> bool {
        self.current_token_value() == value
    }

    pub fn is_current_token_type(&self, kind: TokenKind) -> bool {
        self.current_token_type() == kind
    }

    pub fn is_at_end(&self) -> bool {
        self.is_current_token_type(TokenKind::End)
    }

    /// Byte offset of the current token in the source.
    ///
    /// Linear in the cursor position; meant for diagnostics, not for the parsing loop.
    pub fn current_token_offset(&self) -> usize {
        self.stream.tokens()[..self.index]
            .iter()
            .map(|t| t.text.len())
            .sum()
    }

    /// Consumes the current token if it has the given kind.
    ///
    /// On mismatch the cursor does not move, so an outer save point can still roll back.
    pub fn consume_token_type(&mut self, kind: TokenKind) -> Result<(), ParseError> {
        if !self.is_current_token_type(kind) {
            return Err(self.unexpected(kind));
        }
        self.next();
        Ok(())
    }

    pub fn try_consume_token_value(&mut self, value: &str) -> bool {
        if !self.is_current_token_value(value) {
            return false;
        }
        self.next();
        true
    }

    pub fn try_consume_token_type(&mut self, kind: TokenKind) -> bool {
        if !self.is_current_token_type(kind) {
            return false;
        }
        self.next();
        true
    }

    /// Whether whitespace was skipped right before the current token.
    pub fn try_consume_horizontal_whitespace(&self) -> bool {
        self.prev_token().is_some_and(Token::is_horizontal_ws)
    }

    /// Concatenates raw token text, whitespace included, up to the first token whose kind is
    /// in `terminators` or the end of input.
    pub fn join_until(&mut self, terminators: &[TokenKind]) -> String {
        let start = self.index;
        let mut joined = String::new();
        while !self.is_at_end() && !terminators.contains(&self.current_token_type()) {
            joined.push_str(self.current_token_value());
            self.index += 1;
        }
        trace!(start, end = self.index, len = joined.len(), "join_until");
        joined
    }

    /// Advances past the current token, whatever it is.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) {
        if self.index < self.stream.end_index() {
            self.index += 1;
            self.skip_horizontal_ws();
        }
    }

    pub fn push_save_point(&mut self) {
        self.save_points.push(self.index);
        trace!(
            index = self.index,
            depth = self.save_points.len(),
            "push save point"
        );
    }

    /// Forgets the innermost save point, keeping the current position.
    ///
    /// # Panics
    /// If there is no save point.
    #[track_caller]
    pub fn drop_save_point(&mut self) {
        let saved = self.pop_save_point("drop_save_point");
        trace!(
            saved,
            index = self.index,
            depth = self.save_points.len(),
            "drop save point"
        );
    }

    /// Returns to the innermost save point and forgets it.
    ///
    /// # Panics
    /// If there is no save point.
    #[track_caller]
    pub fn rollback(&mut self) {
        let saved = self.pop_save_point("rollback");
        trace!(
            from = self.index,
            to = saved,
            depth = self.save_points.len(),
            "rollback"
        );
        self.index = saved;
    }

    pub fn save_point_depth(&self) -> usize {
        self.save_points.len()
    }

    /// Runs `parse` speculatively: its progress is kept on `Ok` and undone on `Err`.
    pub fn attempt<T, E>(
        &mut self,
        parse: impl FnOnce(&mut Self) -> Result<T, E>,
    ) -> Result<T, E> {
        self.push_save_point();
        match parse(self) {
            Ok(value) => {
                self.drop_save_point();
                Ok(value)
            }
            Err(err) => {
                self.rollback();
                Err(err)
            }
        }
    }

    fn prev_token(&self) -> Option<&'a Token> {
        self.index
            .checked_sub(1)
            .and_then(|i| self.stream.get(i))
    }

    fn skip_horizontal_ws(&mut self) {
        if self.current_token().is_horizontal_ws() {
            self.index += 1;
        }
    }

    #[track_caller]
    fn pop_save_point(&mut self, op: &str) -> usize {
        match self.save_points.pop() {
            Some(saved) => saved,
            None => panic!("{op} called without a matching push_save_point"),
        }
    }

    fn unexpected(&self, expected: TokenKind) -> ParseError {
        let err = ParseError::UnexpectedToken {
            found: self.current_token_value().to_owned(),
            found_kind: self.current_token_type(),
            expected,
            offset: self.current_token_offset(),
        };
        debug!(
            expected = ?expected,
            found = ?self.current_token_type(),
            offset = err.current_offset(),
            "unexpected token"
        );
        err
    }
}
