//! Lexical token model.
//!
//! A [`TokenKind`] is one variant per token category, each carrying a
//! category-specific payload. Category tests are discriminant matches, so
//! "is this an operator?" never inspects the payload.

mod list;


use std::fmt;

use crate::Position;

pub use list::TokenList;

/// A token: its kind (with payload) and where it starts.
#[derive(Clone, PartialEq, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub position: Position,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, position: Position) -> Self {
        Token { kind, position }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.position, self.kind.describe())
    }
}

/// The five token categories.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenCategory {
    Operator,
    TypeKeyword,
    Literal,
    Bracket,
    Terminator,
}

/// Token kind, partitioned by category.
#[derive(Clone, PartialEq, Debug)]
pub enum TokenKind {
    /// Symbolic operators and keyword operators (`and`, `or`, ...).
    Operator(Operator),
    /// Built-in type names (`int`, `u8`, `f64`, ...).
    TypeKeyword(TypeKeyword),
    /// Literal values and identifiers.
    Literal(Literal),
    Bracket(Bracket),
    /// Statement boundaries, including the end-of-stream sentinel.
    Terminator(Terminator),
}

impl TokenKind {
    /// End-of-stream sentinel.
    pub const STREAM_END: TokenKind = TokenKind::Terminator(Terminator::StreamEnd);

    #[inline]
    pub fn category(&self) -> TokenCategory {
        match self {
            TokenKind::Operator(_) => TokenCategory::Operator,
            TokenKind::TypeKeyword(_) => TokenCategory::TypeKeyword,
            TokenKind::Literal(_) => TokenCategory::Literal,
            TokenKind::Bracket(_) => TokenCategory::Bracket,
            TokenKind::Terminator(_) => TokenCategory::Terminator,
        }
    }

    #[inline]
    pub fn is_operator(&self) -> bool {
        matches!(self, TokenKind::Operator(_))
    }

    #[inline]
    pub fn is_type_keyword(&self) -> bool {
        matches!(self, TokenKind::TypeKeyword(_))
    }

    #[inline]
    pub fn is_literal(&self) -> bool {
        matches!(self, TokenKind::Literal(_))
    }

    #[inline]
    pub fn is_bracket(&self) -> bool {
        matches!(self, TokenKind::Bracket(_))
    }

    /// Newline, `;`, or end of stream.
    #[inline]
    pub fn is_terminator(&self) -> bool {
        matches!(self, TokenKind::Terminator(_))
    }

    #[inline]
    pub fn is_stream_end(&self) -> bool {
        matches!(self, TokenKind::Terminator(Terminator::StreamEnd))
    }

    /// The operator, if this is an operator token.
    #[inline]
    pub fn as_operator(&self) -> Option<Operator> {
        match self {
            TokenKind::Operator(op) => Some(*op),
            _ => None,
        }
    }

    /// Human-readable description for token dumps and diagnostics.
    pub fn describe(&self) -> String {
        match self {
            TokenKind::Operator(op) => format!("operator `{}`", op.spelling()),
            TokenKind::TypeKeyword(ty) => format!("type `{}`", ty.spelling()),
            TokenKind::Literal(lit) => match lit {
                Literal::Integer(v) => format!("integer {v}"),
                Literal::Float32(v) => format!("f32 {v:?}"),
                Literal::Float64(v) => format!("f64 {v:?}"),
                Literal::String(s) => format!("string {s:?}"),
                Literal::Identifier(name) => format!("identifier `{name}`"),
            },
            TokenKind::Bracket(b) => format!("bracket `{}`", b.spelling()),
            TokenKind::Terminator(t) => t.display_name().to_owned(),
        }
    }
}

/// Renders the token as it would appear in source (strings re-quoted).
impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Operator(op) => f.write_str(op.spelling()),
            TokenKind::TypeKeyword(ty) => f.write_str(ty.spelling()),
            TokenKind::Literal(lit) => fmt::Display::fmt(lit, f),
            TokenKind::Bracket(b) => f.write_str(b.spelling()),
            TokenKind::Terminator(t) => f.write_str(t.display_name()),
        }
    }
}

/// Operators, symbolic and keyword.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Operator {
    // Assignment
    /// `=`
    Assign,
    /// `+=`
    AddAssign,
    /// `-=`
    SubAssign,
    /// `*=`
    MulAssign,
    /// `/=`
    DivAssign,
    /// `%=`
    RemAssign,
    /// `&=`
    AndAssign,
    /// `^=`
    XorAssign,
    /// `|=`
    OrAssign,
    /// `<<=`
    ShlAssign,
    /// `>>=`
    ShrAssign,

    // Comparison
    /// `==`
    Equal,
    /// `~=`
    NotEqual,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `<=`
    LessEqual,
    /// `>=`
    GreaterEqual,

    // Arithmetic and bitwise
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `%`
    Percent,
    /// `|`
    Pipe,
    /// `&`
    Ampersand,
    /// `^`
    Caret,
    /// `~`
    Tilde,
    /// `<<`
    Shl,
    /// `>>`
    Shr,

    // Unary
    /// `++`
    Increment,
    /// `--`
    Decrement,
    /// `!` (dereference)
    Bang,
    /// `!>` (address-of)
    AddressOf,

    // Access and punctuation
    /// `.`
    Dot,
    /// `,`
    Comma,
    /// `?`
    Question,
    /// `:`
    Colon,
    /// `->`
    Arrow,
    /// `??`
    NullCoalesce,
    /// `@`
    PolyType,

    // Keyword operators
    /// `and`
    And,
    /// `or`
    Or,
    /// `xor`
    Xor,
    /// `not`
    Not,
    /// `decides`
    Decides,
}

impl Operator {
    /// Source spelling of the operator.
    pub const fn spelling(self) -> &'static str {
        match self {
            Operator::Assign => "=",
            Operator::AddAssign => "+=",
            Operator::SubAssign => "-=",
            Operator::MulAssign => "*=",
            Operator::DivAssign => "/=",
            Operator::RemAssign => "%=",
            Operator::AndAssign => "&=",
            Operator::XorAssign => "^=",
            Operator::OrAssign => "|=",
            Operator::ShlAssign => "<<=",
            Operator::ShrAssign => ">>=",
            Operator::Equal => "==",
            Operator::NotEqual => "~=",
            Operator::Less => "<",
            Operator::Greater => ">",
            Operator::LessEqual => "<=",
            Operator::GreaterEqual => ">=",
            Operator::Plus => "+",
            Operator::Minus => "-",
            Operator::Star => "*",
            Operator::Slash => "/",
            Operator::Percent => "%",
            Operator::Pipe => "|",
            Operator::Ampersand => "&",
            Operator::Caret => "^",
            Operator::Tilde => "~",
            Operator::Shl => "<<",
            Operator::Shr => ">>",
            Operator::Increment => "++",
            Operator::Decrement => "--",
            Operator::Bang => "!",
            Operator::AddressOf => "!>",
            Operator::Dot => ".",
            Operator::Comma => ",",
            Operator::Question => "?",
            Operator::Colon => ":",
            Operator::Arrow => "->",
            Operator::NullCoalesce => "??",
            Operator::PolyType => "@",
            Operator::And => "and",
            Operator::Or => "or",
            Operator::Xor => "xor",
            Operator::Not => "not",
            Operator::Decides => "decides",
        }
    }
}

/// Built-in type keywords.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeKeyword {
    Int,
    Uint,
    S8,
    S16,
    S32,
    S64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
    Bool,
}

impl TypeKeyword {
    pub const fn spelling(self) -> &'static str {
        match self {
            TypeKeyword::Int => "int",
            TypeKeyword::Uint => "uint",
            TypeKeyword::S8 => "s8",
            TypeKeyword::S16 => "s16",
            TypeKeyword::S32 => "s32",
            TypeKeyword::S64 => "s64",
            TypeKeyword::U8 => "u8",
            TypeKeyword::U16 => "u16",
            TypeKeyword::U32 => "u32",
            TypeKeyword::U64 => "u64",
            TypeKeyword::F32 => "f32",
            TypeKeyword::F64 => "f64",
            TypeKeyword::Bool => "bool",
        }
    }
}

/// Literal values. Identifiers are value tokens too.
#[derive(Clone, PartialEq, Debug)]
pub enum Literal {
    Integer(u64),
    /// A float whose value survives a round trip through `f32`.
    Float32(f32),
    Float64(f64),
    /// Unescaped string contents.
    String(String),
    Identifier(String),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Integer(v) => write!(f, "{v}"),
            Literal::Float32(v) => write!(f, "{v:?}"),
            Literal::Float64(v) => write!(f, "{v:?}"),
            Literal::String(s) => write!(f, "{s:?}"),
            Literal::Identifier(name) => f.write_str(name),
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Bracket {
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
}

impl Bracket {
    pub const fn spelling(self) -> &'static str {
        match self {
            Bracket::LParen => "(",
            Bracket::RParen => ")",
            Bracket::LBracket => "[",
            Bracket::RBracket => "]",
            Bracket::LBrace => "{",
            Bracket::RBrace => "}",
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Terminator {
    /// A line break.
    Newline,
    /// `;`
    Semicolon,
    /// End-of-stream sentinel; always the last token of a [`TokenList`].
    StreamEnd,
}

impl Terminator {
    pub const fn display_name(self) -> &'static str {
        match self {
            Terminator::Newline => "newline",
            Terminator::Semicolon => ";",
            Terminator::StreamEnd => "end of input",
        }
    }
}
