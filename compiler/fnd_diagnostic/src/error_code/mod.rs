//! Numeric diagnostic codes.
//!
//! `0x1xxx` codes are errors (the literal or expression is abandoned),
//! `0x2xxx` codes are warnings (a substitute value is used).

#[cfg(test)]
mod tests;

use std::fmt;

use crate::Severity;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(u16)]
pub enum ErrorCode {
    // Lexer errors
    /// `0` followed by a letter that does not select a radix
    BadBaseIdentifier = 0x1001,
    /// Integer literal with no digits or an out-of-radix digit
    IntegerParse = 0x1002,
    /// Float literal with a malformed exponent
    FloatParse = 0x1003,
    /// String literal not closed before a newline or end of input
    StringParse = 0x1004,
    /// Malformed escape sequence in a string literal
    EscapeParse = 0x1005,
    /// Character that starts no token
    UnrecognizableChar = 0x1006,

    // Parser errors
    /// Two operands with no operator between them
    OperatorExpected = 0x1007,
    /// Opening group directly after an operand
    BinaryOperatorExpected = 0x1008,
    /// Operator in operand position with no prefix role
    PrefixExpected = 0x1009,
    /// Operator after an operand with no usable binary or postfix role
    PostfixExpected = 0x100A,
    /// Operator with a missing operand, or an empty group
    ExpressionExpected = 0x100B,
    /// `(` never closed before the end of the expression
    UnclosedDelimiter = 0x100C,
    /// Token that cannot appear in an expression
    UnexpectedToken = 0x100D,

    // Warnings
    /// Float literal too large; `f64::MAX` substituted
    FloatOverflow = 0x2000,
    /// Integer literal too large; `u64::MAX` substituted
    IntegerOverflow = 0x2001,
}

impl ErrorCode {
    /// Every code, in numeric order.
    pub const ALL: [ErrorCode; 15] = [
        ErrorCode::BadBaseIdentifier,
        ErrorCode::IntegerParse,
        ErrorCode::FloatParse,
        ErrorCode::StringParse,
        ErrorCode::EscapeParse,
        ErrorCode::UnrecognizableChar,
        ErrorCode::OperatorExpected,
        ErrorCode::BinaryOperatorExpected,
        ErrorCode::PrefixExpected,
        ErrorCode::PostfixExpected,
        ErrorCode::ExpressionExpected,
        ErrorCode::UnclosedDelimiter,
        ErrorCode::UnexpectedToken,
        ErrorCode::FloatOverflow,
        ErrorCode::IntegerOverflow,
    ];

    #[inline]
    pub const fn value(self) -> u16 {
        self as u16
    }

    /// Default severity: warnings live in the `0x2xxx` range.
    #[inline]
    pub const fn severity(self) -> Severity {
        if self.value() >= 0x2000 {
            Severity::Warning
        } else {
            Severity::Error
        }
    }

    /// Whether the code comes from the lexer or the parser.
    #[inline]
    pub const fn is_lexer(self) -> bool {
        matches!(
            self,
            ErrorCode::BadBaseIdentifier
                | ErrorCode::IntegerParse
                | ErrorCode::FloatParse
                | ErrorCode::StringParse
                | ErrorCode::EscapeParse
                | ErrorCode::UnrecognizableChar
                | ErrorCode::FloatOverflow
                | ErrorCode::IntegerOverflow
        )
    }

    pub fn from_value(value: u16) -> Option<ErrorCode> {
        Self::ALL.into_iter().find(|code| code.value() == value)
    }

    /// Short description used as the default message.
    pub const fn description(self) -> &'static str {
        match self {
            ErrorCode::BadBaseIdentifier => "bad base identifier",
            ErrorCode::IntegerParse => "malformed integer literal",
            ErrorCode::FloatParse => "malformed float literal",
            ErrorCode::StringParse => "unterminated string literal",
            ErrorCode::EscapeParse => "malformed escape sequence",
            ErrorCode::UnrecognizableChar => "unrecognizable character",
            ErrorCode::OperatorExpected => "operator expected",
            ErrorCode::BinaryOperatorExpected => "binary operator expected",
            ErrorCode::PrefixExpected => "prefix operator expected",
            ErrorCode::PostfixExpected => "postfix operator expected",
            ErrorCode::ExpressionExpected => "expression expected",
            ErrorCode::UnclosedDelimiter => "unclosed delimiter",
            ErrorCode::UnexpectedToken => "unexpected token",
            ErrorCode::FloatOverflow => "float literal overflows f64",
            ErrorCode::IntegerOverflow => "integer literal overflows u64",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#06X}", self.value())
    }
}
