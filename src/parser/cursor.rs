//! Token cursor shared by the line and block grammars
//!
//! Offsets are relative to the text the cursor was built from; callers
//! shift errors into document coordinates.

use text_size::{TextRange, TextSize};

use super::lexer::{Token, TokenKind, tokenize};

pub(crate) struct Cursor<'a> {
    source: &'a str,
    tokens: Vec<Token<'a>>,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        Self {
            source,
            tokens: tokenize(source),
            pos: 0,
        }
    }

    // =========================================================================
    // Token inspection
    // =========================================================================

    pub(crate) fn current(&self) -> Option<&Token<'a>> {
        self.tokens.get(self.pos)
    }

    pub(crate) fn current_kind(&self) -> Option<TokenKind> {
        self.current().map(|t| t.kind)
    }

    pub(crate) fn at(&self, kind: TokenKind) -> bool {
        self.current_kind() == Some(kind)
    }

    pub(crate) fn at_eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Offset of the current token, or the end of the source at EOF
    pub(crate) fn offset(&self) -> TextSize {
        self.current()
            .map(|t| t.offset)
            .unwrap_or_else(|| TextSize::of(self.source))
    }

    /// Range of the current token, empty at EOF
    pub(crate) fn current_range(&self) -> TextRange {
        self.current()
            .map(|t| t.range())
            .unwrap_or_else(|| TextRange::empty(TextSize::of(self.source)))
    }

    /// Source text between two offsets
    pub(crate) fn slice(&self, start: TextSize, end: TextSize) -> &'a str {
        &self.source[TextRange::new(start, end)]
    }

    // =========================================================================
    // Backtracking
    // =========================================================================

    pub(crate) fn checkpoint(&self) -> usize {
        self.pos
    }

    pub(crate) fn rewind(&mut self, checkpoint: usize) {
        self.pos = checkpoint;
    }

    // =========================================================================
    // Token consumption
    // =========================================================================

    pub(crate) fn bump(&mut self) -> Option<Token<'a>> {
        let token = self.tokens.get(self.pos).copied()?;
        self.pos += 1;
        Some(token)
    }

    pub(crate) fn eat(&mut self, kind: TokenKind) -> Option<Token<'a>> {
        if self.at(kind) { self.bump() } else { None }
    }

    /// Skip whitespace, newlines and comments
    pub(crate) fn skip_trivia(&mut self) {
        while self.current().is_some_and(|t| t.kind.is_trivia()) {
            self.pos += 1;
        }
    }

    /// Skip spaces and tabs only
    pub(crate) fn skip_whitespace(&mut self) {
        while self.at(TokenKind::Whitespace) {
            self.pos += 1;
        }
    }

    /// Consume tokens up to (not including) the first `kind`; returns the
    /// text consumed, or `None` if `kind` never appears
    pub(crate) fn take_until(&mut self, kind: TokenKind) -> Option<&'a str> {
        let stop = self.tokens[self.pos.min(self.tokens.len())..]
            .iter()
            .position(|t| t.kind == kind)?;
        let start = self.offset();
        self.pos += stop;
        Some(self.slice(start, self.offset()))
    }
}
