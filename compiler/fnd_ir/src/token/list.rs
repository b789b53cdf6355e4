//! Token list that always ends with the stream-end sentinel.

use std::ops::Index;

use super::{Token, TokenKind};
use crate::Position;

/// An ordered token sequence terminated by [`TokenKind::STREAM_END`].
///
/// The sentinel is guaranteed by construction: every constructor appends
/// one when the input does not already end with it, and [`TokenList::push`]
/// inserts before it.
#[derive(Clone, PartialEq, Debug)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    /// A list holding only the sentinel.
    pub fn new() -> Self {
        TokenList {
            tokens: vec![Token::new(TokenKind::STREAM_END, Position::START)],
        }
    }

    /// Wrap `tokens`, appending a sentinel at the position of the last
    /// token if one is missing.
    pub fn from_tokens(mut tokens: Vec<Token>) -> Self {
        if !matches!(tokens.last(), Some(t) if t.kind.is_stream_end()) {
            let position = tokens.last().map_or(Position::START, |t| t.position);
            tokens.push(Token::new(TokenKind::STREAM_END, position));
        }
        TokenList { tokens }
    }

    /// Insert a token before the sentinel.
    pub fn push(&mut self, token: Token) {
        let end = self.tokens.len() - 1;
        self.tokens.insert(end, token);
    }

    /// Move the sentinel to `position` (the end of the source).
    pub fn set_end_position(&mut self, position: Position) {
        if let Some(end) = self.tokens.last_mut() {
            end.position = position;
        }
    }

    /// Number of tokens, sentinel included.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// The stream-end sentinel.
    #[inline]
    pub fn last(&self) -> &Token {
        &self.tokens[self.tokens.len() - 1]
    }

    #[inline]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn kinds(&self) -> impl Iterator<Item = &TokenKind> {
        self.tokens.iter().map(|t| &t.kind)
    }
}

impl Default for TokenList {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<usize> for TokenList {
    type Output = Token;

    #[inline]
    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
