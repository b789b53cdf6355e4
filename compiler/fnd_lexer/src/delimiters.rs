//! Operator and bracket spellings, matched longest-first.

#[cfg(test)]
mod tests;

use fnd_ir::{Bracket, Operator, TokenKind};

/// A symbolic token: operator or bracket.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub(crate) enum Delimiter {
    Operator(Operator),
    Bracket(Bracket),
}

impl Delimiter {
    #[inline]
    pub(crate) fn into_kind(self) -> TokenKind {
        match self {
            Delimiter::Operator(op) => TokenKind::Operator(op),
            Delimiter::Bracket(b) => TokenKind::Bracket(b),
        }
    }
}

const fn op(o: Operator) -> Delimiter {
    Delimiter::Operator(o)
}

const fn br(b: Bracket) -> Delimiter {
    Delimiter::Bracket(b)
}

/// Delimiter spellings in match order.
///
/// Invariant: no entry is a proper prefix of a later entry, so the first
/// match is the longest one.
pub(crate) const DELIMITERS: &[(&str, Delimiter)] = &[
    ("<<=", op(Operator::ShlAssign)),
    (">>=", op(Operator::ShrAssign)),
    ("->", op(Operator::Arrow)),
    ("??", op(Operator::NullCoalesce)),
    ("++", op(Operator::Increment)),
    ("--", op(Operator::Decrement)),
    ("+=", op(Operator::AddAssign)),
    ("-=", op(Operator::SubAssign)),
    ("*=", op(Operator::MulAssign)),
    ("/=", op(Operator::DivAssign)),
    ("%=", op(Operator::RemAssign)),
    ("&=", op(Operator::AndAssign)),
    ("^=", op(Operator::XorAssign)),
    ("|=", op(Operator::OrAssign)),
    ("<=", op(Operator::LessEqual)),
    (">=", op(Operator::GreaterEqual)),
    ("==", op(Operator::Equal)),
    ("~=", op(Operator::NotEqual)),
    ("<<", op(Operator::Shl)),
    (">>", op(Operator::Shr)),
    ("!>", op(Operator::AddressOf)),
    ("*", op(Operator::Star)),
    ("/", op(Operator::Slash)),
    ("+", op(Operator::Plus)),
    ("-", op(Operator::Minus)),
    ("=", op(Operator::Assign)),
    ("~", op(Operator::Tilde)),
    ("|", op(Operator::Pipe)),
    ("&", op(Operator::Ampersand)),
    ("^", op(Operator::Caret)),
    ("!", op(Operator::Bang)),
    ("%", op(Operator::Percent)),
    (".", op(Operator::Dot)),
    (",", op(Operator::Comma)),
    ("?", op(Operator::Question)),
    (":", op(Operator::Colon)),
    ("<", op(Operator::Less)),
    (">", op(Operator::Greater)),
    ("@", op(Operator::PolyType)),
    ("(", br(Bracket::LParen)),
    (")", br(Bracket::RParen)),
    ("[", br(Bracket::LBracket)),
    ("]", br(Bracket::RBracket)),
    ("{", br(Bracket::LBrace)),
    ("}", br(Bracket::RBrace)),
];

/// Longest delimiter at the start of `text`, with its length in characters.
pub(crate) fn match_delimiter(text: &str) -> Option<(Delimiter, usize)> {
    DELIMITERS
        .iter()
        .find(|(spelling, _)| text.starts_with(spelling))
        .map(|&(spelling, delimiter)| (delimiter, spelling.chars().count()))
}
