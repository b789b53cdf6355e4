//! Lexer for the Foundations expression language.
//!
//! Converts source text into a [`TokenList`] plus a [`DiagnosticList`] in a
//! single forward pass. Problems are reported as diagnostics and lexing
//! continues; the token list always ends with the stream-end sentinel.
//!
//! Input is expected to use `\n` line endings (the driver normalizes them).
//! A `\r` that survives is treated as ordinary whitespace.

mod cursor;
mod delimiters;
mod keywords;
mod number;
mod string;

use fnd_diagnostic::{Diagnostic, DiagnosticList, ErrorCode};
use fnd_ir::{Literal, Position, Terminator, Token, TokenKind, TokenList};
use tracing::{debug, trace};

use cursor::SourceCursor;
use delimiters::match_delimiter;

/// Everything the lexer produced.
#[derive(Clone, Debug, PartialEq)]
pub struct LexOutput {
    pub tokens: TokenList,
    pub diagnostics: DiagnosticList,
}

impl LexOutput {
    #[inline]
    pub fn has_errors(&self) -> bool {
        self.diagnostics.has_errors()
    }
}

/// Lex `source` to completion.
pub fn lex(source: &str) -> LexOutput {
    Lexer::new(source).run()
}

/// Single-pass lexer state.
///
/// Owns the token and diagnostic lists until [`Lexer::run`] hands them back.
pub struct Lexer<'a> {
    cursor: SourceCursor<'a>,
    tokens: TokenList,
    diagnostics: DiagnosticList,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Lexer {
            cursor: SourceCursor::new(source),
            tokens: TokenList::new(),
            diagnostics: DiagnosticList::new(),
        }
    }

    /// Lex the whole buffer.
    pub fn run(mut self) -> LexOutput {
        while !self.cursor.is_eof() {
            self.step();
        }
        self.tokens.set_end_position(self.cursor.position());
        debug!(
            tokens = self.tokens.len(),
            errors = self.diagnostics.error_count(),
            warnings = self.diagnostics.warning_count(),
            "lexing finished"
        );
        LexOutput {
            tokens: self.tokens,
            diagnostics: self.diagnostics,
        }
    }

    /// Lex one token (or skip one run of whitespace). Always consumes input.
    fn step(&mut self) {
        let Some(c) = self.cursor.peek() else {
            return;
        };
        let start = self.cursor.position();

        match c {
            '\n' => {
                self.cursor.bump();
                self.emit(TokenKind::Terminator(Terminator::Newline), start);
            }
            ';' => {
                self.cursor.bump();
                self.emit(TokenKind::Terminator(Terminator::Semicolon), start);
            }
            c if c.is_whitespace() => {
                self.cursor.eat_while(|c| c != '\n' && c.is_whitespace());
            }
            _ => {
                if let Some((delimiter, len)) = match_delimiter(self.cursor.rest()) {
                    self.cursor.bump_n(len);
                    self.emit(delimiter.into_kind(), start);
                } else if is_ident_start(c) {
                    self.lex_identifier();
                } else if c.is_ascii_digit() {
                    self.lex_number();
                } else if c == '"' || c == '\'' {
                    self.lex_string();
                } else {
                    self.cursor.bump();
                    self.report(
                        ErrorCode::UnrecognizableChar,
                        start,
                        format!("unrecognizable character `{}`", c.escape_debug()),
                    );
                }
            }
        }
    }

    fn lex_identifier(&mut self) {
        let start = self.cursor.position();
        let text = self.cursor.eat_while(is_ident_continue);
        let kind = keywords::lookup(text)
            .unwrap_or_else(|| TokenKind::Literal(Literal::Identifier(text.to_owned())));
        self.emit(kind, start);
    }

    /// Skip the rest of an abandoned literal.
    fn skip_literal_tail(&mut self) {
        self.cursor.eat_while(is_ident_continue);
    }

    fn emit(&mut self, kind: TokenKind, position: Position) {
        trace!(
            line = position.line,
            column = position.column,
            kind = %kind,
            "token"
        );
        self.tokens.push(Token::new(kind, position));
    }

    fn report(&mut self, code: ErrorCode, position: Position, message: impl Into<String>) {
        let diagnostic = Diagnostic::new(code, position, message);
        debug!(
            code = %diagnostic.code,
            severity = %diagnostic.severity,
            line = position.line,
            column = position.column,
            message = %diagnostic.message,
            "lexer diagnostic"
        );
        self.diagnostics.push(diagnostic);
    }
}

#[inline]
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

#[inline]
fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
