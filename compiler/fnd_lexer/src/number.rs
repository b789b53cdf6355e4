//! Numeric literals.
//!
//! Integers may be hex (`0x`), binary (`0b`), octal (leading `0`), or
//! decimal, with `_` separators anywhere after the first digit. Decimal
//! literals followed by `.` or `e` are floats.


use std::num::IntErrorKind;

use fnd_diagnostic::ErrorCode;
use fnd_ir::{Literal, Position, TokenKind};

use crate::{is_ident_continue, Lexer};

impl Lexer<'_> {
    pub(crate) fn lex_number(&mut self) {
        let start = self.cursor.position();
        let mut digits = String::new();

        let radix = if self.cursor.peek() == Some('0') {
            match self.cursor.peek_second() {
                Some('x' | 'X') => {
                    self.cursor.bump_n(2);
                    16
                }
                Some('b' | 'B') => {
                    self.cursor.bump_n(2);
                    2
                }
                Some(c) if c.is_ascii_digit() || c == '_' => {
                    self.cursor.bump();
                    digits.push('0');
                    8
                }
                Some(c) if c != 'e' && is_ident_continue(c) => {
                    self.cursor.bump_n(2);
                    self.report(
                        ErrorCode::BadBaseIdentifier,
                        start,
                        format!("`0{c}` is not a radix prefix; expected `0x`, `0b`, or an octal digit"),
                    );
                    self.skip_literal_tail();
                    return;
                }
                _ => 10,
            }
        } else {
            10
        };

        self.scan_digits(radix, &mut digits);

        if radix == 10 && matches!(self.cursor.peek(), Some('.' | 'e')) {
            self.lex_float(start, digits);
            return;
        }

        if let Some(c) = self.cursor.peek().filter(|&c| is_ident_continue(c)) {
            self.report(
                ErrorCode::IntegerParse,
                self.cursor.position(),
                format!("invalid digit `{c}` for base {radix}"),
            );
            self.skip_literal_tail();
            return;
        }

        let value = match u64::from_str_radix(&digits, radix) {
            Ok(value) => value,
            Err(err) if *err.kind() == IntErrorKind::PosOverflow => {
                self.report(
                    ErrorCode::IntegerOverflow,
                    start,
                    "integer literal does not fit in 64 bits; using u64::MAX",
                );
                u64::MAX
            }
            Err(_) => {
                self.report(
                    ErrorCode::IntegerParse,
                    start,
                    format!("base-{radix} literal has no digits"),
                );
                return;
            }
        };
        self.emit(TokenKind::Literal(Literal::Integer(value)), start);
    }

    /// Fraction and exponent of a decimal literal; `text` holds the integer digits.
    fn lex_float(&mut self, start: Position, mut text: String) {
        if self.cursor.peek() == Some('.') {
            self.cursor.bump();
            text.push('.');
            let fraction_start = text.len();
            self.scan_digits(10, &mut text);
            if text.len() == fraction_start {
                text.push('0');
            }
        }

        if self.cursor.peek() == Some('e') {
            let exponent = self.cursor.position();
            self.cursor.bump();
            text.push('e');
            if let Some(sign @ ('+' | '-')) = self.cursor.peek() {
                self.cursor.bump();
                text.push(sign);
            }
            let digits_start = text.len();
            self.scan_digits(10, &mut text);
            if text.len() == digits_start {
                self.report(ErrorCode::FloatParse, exponent, "float exponent has no digits");
                self.skip_literal_tail();
                return;
            }
        }

        if let Some(c) = self.cursor.peek().filter(|&c| is_ident_continue(c)) {
            self.report(
                ErrorCode::FloatParse,
                self.cursor.position(),
                format!("unexpected `{c}` in float literal"),
            );
            self.skip_literal_tail();
            return;
        }

        let Ok(mut value) = text.parse::<f64>() else {
            self.report(
                ErrorCode::FloatParse,
                start,
                format!("`{text}` is not a valid float"),
            );
            return;
        };
        if value.is_infinite() {
            self.report(
                ErrorCode::FloatOverflow,
                start,
                "float literal does not fit in 64 bits; using f64::MAX",
            );
            value = f64::MAX;
        }

        let literal = match exact_f32(value) {
            Some(narrow) => Literal::Float32(narrow),
            None => Literal::Float64(value),
        };
        self.emit(TokenKind::Literal(literal), start);
    }

    /// Append digits valid in `radix`, skipping `_` separators.
    fn scan_digits(&mut self, radix: u32, out: &mut String) {
        while let Some(c) = self.cursor.peek() {
            if c == '_' {
                self.cursor.bump();
            } else if c.is_digit(radix) {
                self.cursor.bump();
                out.push(c);
            } else {
                break;
            }
        }
    }
}

/// `value` as `f32`, if it survives the round trip unchanged.
#[allow(clippy::float_cmp, clippy::cast_possible_truncation)]
fn exact_f32(value: f64) -> Option<f32> {
    let narrow = value as f32;
    (f64::from(narrow) == value).then_some(narrow)
}
