//! Doc-comment tokens and the end-terminated token stream.
//!
//! Token text is the exact source substring, so byte offsets are recovered by summing
//! text lengths. The stream always ends with a single [`TokenKind::End`] sentinel whose
//! text is empty.

use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /* Type operators */
    /// `&` in by-reference parameters
    Reference,
    /// `|`
    Union,
    /// `&` between intersected types
    Intersection,
    /// `?`
    Nullable,

    /* Delimiters */
    /// `(`
    OpenParentheses,
    /// `)`
    CloseParentheses,
    /// `<`
    OpenAngleBracket,
    /// `>`
    CloseAngleBracket,
    /// `[`
    OpenSquareBracket,
    /// `]`
    CloseSquareBracket,
    /// `{`
    OpenCurlyBracket,
    /// `}`
    CloseCurlyBracket,

    /* Punctuation */
    /// `,`
    Comma,
    /// `:`
    Colon,
    /// `...`
    Variadic,
    /// `::`
    DoubleColon,
    /// `=>`
    DoubleArrow,
    /// `=`
    Equal,

    /* Comment structure */
    /// `/**`
    OpenPhpDoc,
    /// `*/`
    ClosePhpDoc,
    /// `@param`, `@return`, ...
    PhpDocTag,
    /// Line break inside a doc comment, including the leading `*`.
    PhpDocEol,

    /* Literals and names */
    Float,
    Integer,
    SingleQuotedString,
    DoubleQuotedString,
    Identifier,
    /// `$this`
    ThisVariable,
    Variable,

    /// Spaces and tabs between tokens. Never observed as the current token of a cursor.
    HorizontalWs,
    /// Anything the lexer could not classify.
    Other,
    /// End of input sentinel.
    End,
}

impl TokenKind {
    /// Human-readable name used in "expected ..." diagnostics.
    pub fn label(self) -> &'static str {
        use TokenKind::*;

        match self {
            Reference => "'&'",
            Union => "'|'",
            Intersection => "'&'",
            Nullable => "'?'",

            OpenParentheses => "'('",
            CloseParentheses => "')'",
            OpenAngleBracket => "'<'",
            CloseAngleBracket => "'>'",
            OpenSquareBracket => "'['",
            CloseSquareBracket => "']'",
            OpenCurlyBracket => "'{'",
            CloseCurlyBracket => "'}'",

            Comma => "','",
            Colon => "':'",
            Variadic => "'...'",
            DoubleColon => "'::'",
            DoubleArrow => "'=>'",
            Equal => "'='",

            OpenPhpDoc => "'/**'",
            ClosePhpDoc => "'*/'",
            PhpDocTag => "doc tag",
            PhpDocEol => "end of line",

            Float => "float",
            Integer => "integer",
            SingleQuotedString => "single-quoted string",
            DoubleQuotedString => "double-quoted string",
            Identifier => "type",
            ThisVariable => "'$this'",
            Variable => "variable",

            HorizontalWs => "horizontal whitespace",
            Other => "other",
            End => "end of input",
        }
    }

    pub fn is_horizontal_ws(self) -> bool {
        matches!(self, TokenKind::HorizontalWs)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A token with the exact source text it covers.
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Token {
            kind,
            text: text.into(),
        }
    }

    /// The end-of-stream sentinel.
    pub fn end() -> Self {
        Token::new(TokenKind::End, "")
    }

    pub fn is_horizontal_ws(&self) -> bool {
        self.kind.is_horizontal_ws()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenStreamError {
    #[error("token stream must end with an end-of-input token")]
    MissingEnd,
    #[error("end-of-input token at index {index} is not the last token")]
    MisplacedEnd { index: usize },
    #[error("consecutive horizontal whitespace tokens at index {index}")]
    ConsecutiveWhitespace { index: usize },
}

/// An immutable, validated sequence of tokens terminated by exactly one
/// [`TokenKind::End`] sentinel.
///
/// Two horizontal whitespace tokens are never adjacent; cursors rely on this to elide
/// whitespace with a single extra step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenStream {
    tokens: Vec<Token>,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Result<Self, TokenStreamError> {
        let last = match tokens.last() {
            Some(tok) if tok.kind == TokenKind::End => tokens.len() - 1,
            _ => return Err(TokenStreamError::MissingEnd),
        };

        if let Some(index) = tokens[..last]
            .iter()
            .position(|t| t.kind == TokenKind::End)
        {
            return Err(TokenStreamError::MisplacedEnd { index });
        }

        if let Some(index) = tokens
            .windows(2)
            .position(|w| w[0].is_horizontal_ws() && w[1].is_horizontal_ws())
        {
            return Err(TokenStreamError::ConsecutiveWhitespace { index: index + 1 });
        }

        Ok(TokenStream { tokens })
    }

    /// Number of tokens, including the sentinel.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Always `false`: a valid stream holds at least the sentinel.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Index of the [`TokenKind::End`] sentinel.
    pub fn end_index(&self) -> usize {
        self.tokens.len() - 1
    }

    /// Byte length of the source the stream was lexed from.
    pub fn source_len(&self) -> usize {
        self.tokens.iter().map(|t| t.text.len()).sum()
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
