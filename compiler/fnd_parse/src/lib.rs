//! Expression parser for the Foundations language.
//!
//! A single-pass, stack-based precedence parser. Each operator occurrence is
//! classified as binary, prefix, or postfix from the stack top and one token
//! of lookahead, without backtracking. See [`Parser::parse_expression`].
//!
//! Errors are collected as diagnostics. A failed expression leaves the
//! cursor on the next statement terminator so parsing can resume.

mod cursor;
mod error;
mod expr;
pub mod recovery;
mod stack;

use fnd_diagnostic::DiagnosticList;
use fnd_ir::{Token, TokenList};

pub use cursor::TokenCursor;
pub use error::ParseFailure;

/// Expression parser over a lexed token list.
///
/// One instance parses expressions one at a time; calls must not overlap.
pub struct Parser<'t> {
    cursor: TokenCursor<'t>,
    diagnostics: DiagnosticList,
}

impl<'t> Parser<'t> {
    pub fn new(tokens: &'t TokenList) -> Self {
        Parser {
            cursor: TokenCursor::new(tokens),
            diagnostics: DiagnosticList::new(),
        }
    }

    /// The current token.
    #[inline]
    pub fn peek(&self) -> &'t Token {
        self.cursor.peek()
    }

    /// Return the current token and advance (saturating at stream end).
    #[inline]
    pub fn eat(&mut self) -> &'t Token {
        self.cursor.eat()
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.cursor.is_at_end()
    }

    /// Diagnostics reported so far.
    pub fn diagnostics(&self) -> &DiagnosticList {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> DiagnosticList {
        self.diagnostics
    }
}
