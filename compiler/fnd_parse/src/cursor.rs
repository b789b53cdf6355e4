//! Token cursor for navigating the token stream.

#[cfg(test)]
mod tests;

use fnd_ir::{Position, Token, TokenList};

/// Forward-only cursor over a [`TokenList`].
///
/// Invariant: the position is always a valid index. The last token is
/// always the stream-end sentinel and [`TokenCursor::eat`] never moves
/// past it.
#[derive(Clone, Debug)]
pub struct TokenCursor<'t> {
    tokens: &'t TokenList,
    pos: usize,
}

impl<'t> TokenCursor<'t> {
    pub fn new(tokens: &'t TokenList) -> Self {
        TokenCursor { tokens, pos: 0 }
    }

    /// Index of the current token.
    #[inline]
    pub fn index(&self) -> usize {
        self.pos
    }

    /// The current token, without advancing.
    #[inline]
    pub fn peek(&self) -> &'t Token {
        self.tokens.get(self.pos).unwrap_or_else(|| self.tokens.last())
    }

    /// The token after the current one (the sentinel at the end).
    #[inline]
    pub fn peek_next(&self) -> &'t Token {
        self.tokens
            .get(self.pos + 1)
            .unwrap_or_else(|| self.tokens.last())
    }

    /// Return the current token and advance, saturating at stream end.
    pub fn eat(&mut self) -> &'t Token {
        let token = self.peek();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.peek().position
    }

    /// Whether the current token is the stream-end sentinel.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.peek().kind.is_stream_end()
    }

    /// Whether the current token is a newline, `;`, or stream end.
    #[inline]
    pub fn at_terminator(&self) -> bool {
        self.peek().kind.is_terminator()
    }
}
