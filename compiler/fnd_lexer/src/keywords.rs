//! Keyword table.
//!
//! Keywords are matched by exact, case-sensitive equality against the whole
//! identifier lexeme, so table order does not matter.

#[cfg(test)]
mod tests;

use std::sync::OnceLock;

use fnd_ir::{Operator, TokenKind, TypeKeyword};
use rustc_hash::FxHashMap;

const TYPE_KEYWORDS: &[TypeKeyword] = &[
    TypeKeyword::Int,
    TypeKeyword::Uint,
    TypeKeyword::S8,
    TypeKeyword::S16,
    TypeKeyword::S32,
    TypeKeyword::S64,
    TypeKeyword::U8,
    TypeKeyword::U16,
    TypeKeyword::U32,
    TypeKeyword::U64,
    TypeKeyword::F32,
    TypeKeyword::F64,
    TypeKeyword::Bool,
];

const OPERATOR_KEYWORDS: &[Operator] = &[
    Operator::And,
    Operator::Or,
    Operator::Xor,
    Operator::Not,
    Operator::Decides,
];

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum Keyword {
    Type(TypeKeyword),
    Operator(Operator),
}

static KEYWORDS: OnceLock<FxHashMap<&'static str, Keyword>> = OnceLock::new();

fn table() -> &'static FxHashMap<&'static str, Keyword> {
    KEYWORDS.get_or_init(|| {
        let mut map = FxHashMap::default();
        for &ty in TYPE_KEYWORDS {
            map.insert(ty.spelling(), Keyword::Type(ty));
        }
        for &op in OPERATOR_KEYWORDS {
            map.insert(op.spelling(), Keyword::Operator(op));
        }
        map
    })
}

/// Token kind for `text` if it is a keyword.
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    table().get(text).map(|keyword| match *keyword {
        Keyword::Type(ty) => TokenKind::TypeKeyword(ty),
        Keyword::Operator(op) => TokenKind::Operator(op),
    })
}
