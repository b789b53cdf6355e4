//! String literals.


use fnd_diagnostic::ErrorCode;
use fnd_ir::{Literal, Position, TokenKind};

use crate::Lexer;

/// Result of decoding one escape sequence.
enum Escape {
    Char(char),
    /// Line continuation, or a backslash at end of input.
    Nothing,
    /// Reported; the literal is abandoned.
    Invalid,
}

impl Lexer<'_> {
    /// Lex a `'` or `"` delimited string.
    ///
    /// An escape error abandons the token but still scans to the closing
    /// quote. A raw line break reports an error and resumes lexing just
    /// after the opening quote.
    pub(crate) fn lex_string(&mut self) {
        let start = self.cursor.position();
        let Some(quote) = self.cursor.bump() else {
            return;
        };
        let resume = self.cursor;
        let mut value = String::new();
        let mut valid = true;

        loop {
            match self.cursor.peek() {
                None => {
                    self.report(
                        ErrorCode::StringParse,
                        start,
                        "unterminated string literal: reached end of input",
                    );
                    return;
                }
                Some('\n') => {
                    self.report(
                        ErrorCode::StringParse,
                        start,
                        "unterminated string literal: line break before closing quote",
                    );
                    self.cursor = resume;
                    return;
                }
                Some(c) if c == quote => {
                    self.cursor.bump();
                    break;
                }
                Some('\\') => {
                    let backslash = self.cursor.position();
                    self.cursor.bump();
                    match self.lex_escape(backslash) {
                        Escape::Char(c) => value.push(c),
                        Escape::Nothing => {}
                        Escape::Invalid => valid = false,
                    }
                }
                Some(c) => {
                    self.cursor.bump();
                    value.push(c);
                }
            }
        }

        if valid {
            self.emit(TokenKind::Literal(Literal::String(value)), start);
        }
    }

    /// Decode the escape after a consumed `\`.
    fn lex_escape(&mut self, backslash: Position) -> Escape {
        let Some(c) = self.cursor.peek() else {
            return Escape::Nothing;
        };
        self.cursor.bump();
        match c {
            'n' => Escape::Char('\n'),
            'r' => Escape::Char('\r'),
            '0' => Escape::Char('\0'),
            'x' => self.lex_hex_escape(backslash),
            '\n' => Escape::Nothing,
            other => Escape::Char(other),
        }
    }

    /// `\xHH`; a non-hex character is left unconsumed.
    fn lex_hex_escape(&mut self, backslash: Position) -> Escape {
        let mut code = 0u32;
        for _ in 0..2 {
            let Some(digit) = self.cursor.peek().and_then(|c| c.to_digit(16)) else {
                self.report(
                    ErrorCode::EscapeParse,
                    backslash,
                    "`\\x` escape needs exactly two hex digits",
                );
                return Escape::Invalid;
            };
            self.cursor.bump();
            code = code * 16 + digit;
        }
        char::from_u32(code).map_or(Escape::Invalid, Escape::Char)
    }
}
