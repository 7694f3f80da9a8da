//! Logos-based lexer for scripting headers
//!
//! Lossless: every byte of the input ends up in exactly one token, so a
//! parser can slice the original text between any two token offsets.

use logos::Logos;
use text_size::{TextRange, TextSize};

/// Token classes the line grammars care about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Whitespace,
    Newline,
    LineComment,
    BlockComment,
    Ident,
    Number,
    CharLiteral,
    StringLiteral,
    /// `@interface`, `@property`, `@end`, ...
    AtKeyword,
    Minus,
    Plus,
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Lt,
    Gt,
    Colon,
    Semicolon,
    Comma,
    Eq,
    Star,
    Caret,
    Amp,
    /// Input no rule accepts
    Error,
}

impl TokenKind {
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            Self::Whitespace | Self::Newline | Self::LineComment | Self::BlockComment
        )
    }
}

/// A token with its kind, text, and position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub offset: TextSize,
}

impl Token<'_> {
    pub fn range(&self) -> TextRange {
        TextRange::at(self.offset, TextSize::of(self.text))
    }

    pub fn end(&self) -> TextSize {
        self.range().end()
    }
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let text = self.inner.slice();
        let offset = TextSize::new(self.inner.span().start as u32);

        let kind = match logos_token {
            Ok(t) => t.into(),
            Err(()) => TokenKind::Error,
        };

        Some(Token { kind, text, offset })
    }
}

/// Tokenize an entire string into a Vec
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

/// Logos token enum - maps to TokenKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
enum LogosToken {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    #[regex(r"[ \t\r\f]+")]
    Whitespace,

    #[token("\n")]
    Newline,

    #[regex(r"//[^\n]*")]
    LineComment,

    #[regex(r"/\*([^*]|\*+[^*/])*\*+/")]
    BlockComment,

    // =========================================================================
    // LITERALS
    // =========================================================================
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,

    #[regex(r"[0-9][A-Za-z0-9_.]*")]
    Number,

    /// Four-char codes such as `'kPSP'`; may contain spaces (`'cCD '`)
    #[regex(r"'[^'\n]*'")]
    CharLiteral,

    #[regex(r#""([^"\\\n]|\\.)*""#)]
    StringLiteral,

    #[regex(r"@[A-Za-z_][A-Za-z0-9_]*")]
    AtKeyword,

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    #[token("-")]
    Minus,
    #[token("+")]
    Plus,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token(":")]
    Colon,
    #[token(";")]
    Semicolon,
    #[token(",")]
    Comma,
    #[token("=")]
    Eq,
    #[token("*")]
    Star,
    #[token("^")]
    Caret,
    #[token("&")]
    Amp,
}

impl From<LogosToken> for TokenKind {
    fn from(token: LogosToken) -> Self {
        match token {
            LogosToken::Whitespace => Self::Whitespace,
            LogosToken::Newline => Self::Newline,
            LogosToken::LineComment => Self::LineComment,
            LogosToken::BlockComment => Self::BlockComment,
            LogosToken::Ident => Self::Ident,
            LogosToken::Number => Self::Number,
            LogosToken::CharLiteral => Self::CharLiteral,
            LogosToken::StringLiteral => Self::StringLiteral,
            LogosToken::AtKeyword => Self::AtKeyword,
            LogosToken::Minus => Self::Minus,
            LogosToken::Plus => Self::Plus,
            LogosToken::LParen => Self::LParen,
            LogosToken::RParen => Self::RParen,
            LogosToken::LBrace => Self::LBrace,
            LogosToken::RBrace => Self::RBrace,
            LogosToken::LBracket => Self::LBracket,
            LogosToken::RBracket => Self::RBracket,
            LogosToken::Lt => Self::Lt,
            LogosToken::Gt => Self::Gt,
            LogosToken::Colon => Self::Colon,
            LogosToken::Semicolon => Self::Semicolon,
            LogosToken::Comma => Self::Comma,
            LogosToken::Eq => Self::Eq,
            LogosToken::Star => Self::Star,
            LogosToken::Caret => Self::Caret,
            LogosToken::Amp => Self::Amp,
        }
    }
}
