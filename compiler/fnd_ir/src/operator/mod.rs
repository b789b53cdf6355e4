//! Operator precedence metadata.
//!
//! One lexical operator may play up to three roles: binary, prefix, and
//! postfix. Each role has its own precedence table; associativity is shared
//! by every operator on a level.
//!
//! Levels run from [`level::LOWEST`] (below every real operator) upward;
//! a higher level binds tighter.


use crate::Operator;

/// Precedence level. Higher binds tighter.
pub type Level = u8;

/// Named precedence levels.
pub mod level {
    use super::Level;

    /// Below every real level; the final reduction of an expression uses it.
    pub const LOWEST: Level = 0;
    pub const ASSIGNMENT: Level = 1;
    pub const LOGICAL_OR: Level = 2;
    pub const LOGICAL_XOR: Level = 3;
    pub const LOGICAL_AND: Level = 4;
    pub const COMPARISON: Level = 5;
    pub const BITWISE: Level = 6;
    pub const ADDITIVE: Level = 7;
    pub const MULTIPLICATIVE: Level = 8;
    pub const PREFIX: Level = 9;
    pub const POSTFIX: Level = 10;
    pub const MEMBER: Level = 11;
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Associativity {
    LeftToRight,
    RightToLeft,
}

impl Associativity {
    #[inline]
    pub fn is_left(self) -> bool {
        self == Associativity::LeftToRight
    }
}

/// Associativity per level, indexed by [`Level`].
const LEVEL_ASSOCIATIVITY: [Associativity; 12] = [
    Associativity::LeftToRight, // LOWEST
    Associativity::RightToLeft, // ASSIGNMENT
    Associativity::LeftToRight, // LOGICAL_OR
    Associativity::LeftToRight, // LOGICAL_XOR
    Associativity::LeftToRight, // LOGICAL_AND
    Associativity::LeftToRight, // COMPARISON
    Associativity::LeftToRight, // BITWISE
    Associativity::LeftToRight, // ADDITIVE
    Associativity::LeftToRight, // MULTIPLICATIVE
    Associativity::RightToLeft, // PREFIX
    Associativity::LeftToRight, // POSTFIX
    Associativity::LeftToRight, // MEMBER
];

/// Associativity of `level`. Levels past the table are left-to-right.
#[inline]
pub fn associativity(level: Level) -> Associativity {
    LEVEL_ASSOCIATIVITY
        .get(usize::from(level))
        .copied()
        .unwrap_or(Associativity::LeftToRight)
}

/// The syntactic role an operator occurrence plays.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum OperatorRole {
    Binary,
    Prefix,
    Postfix,
}

impl OperatorRole {
    pub const fn name(self) -> &'static str {
        match self {
            OperatorRole::Binary => "binary",
            OperatorRole::Prefix => "prefix",
            OperatorRole::Postfix => "postfix",
        }
    }
}

impl Operator {
    /// Level in the binary table, or `None` if the operator has no binary role.
    pub const fn binary_level(self) -> Option<Level> {
        match self {
            Operator::Assign
            | Operator::AddAssign
            | Operator::SubAssign
            | Operator::MulAssign
            | Operator::DivAssign
            | Operator::RemAssign
            | Operator::AndAssign
            | Operator::XorAssign
            | Operator::OrAssign
            | Operator::ShlAssign
            | Operator::ShrAssign => Some(level::ASSIGNMENT),
            Operator::Or => Some(level::LOGICAL_OR),
            Operator::Xor => Some(level::LOGICAL_XOR),
            Operator::And => Some(level::LOGICAL_AND),
            Operator::Equal
            | Operator::NotEqual
            | Operator::Less
            | Operator::Greater
            | Operator::LessEqual
            | Operator::GreaterEqual => Some(level::COMPARISON),
            Operator::Pipe | Operator::Caret | Operator::Ampersand | Operator::Shl | Operator::Shr => {
                Some(level::BITWISE)
            }
            Operator::Plus | Operator::Minus => Some(level::ADDITIVE),
            Operator::Star | Operator::Slash | Operator::Percent => Some(level::MULTIPLICATIVE),
            Operator::Dot => Some(level::MEMBER),
            _ => None,
        }
    }

    /// Level in the prefix table, or `None` if the operator has no prefix role.
    pub const fn prefix_level(self) -> Option<Level> {
        match self {
            Operator::Minus
            | Operator::Plus
            | Operator::Tilde
            | Operator::Bang
            | Operator::AddressOf
            | Operator::Not
            | Operator::Increment
            | Operator::Decrement => Some(level::PREFIX),
            _ => None,
        }
    }

    /// Level in the postfix table, or `None` if the operator has no postfix role.
    pub const fn postfix_level(self) -> Option<Level> {
        match self {
            Operator::Increment | Operator::Decrement => Some(level::POSTFIX),
            _ => None,
        }
    }

    /// Level for `role`, or `None` if the operator is not declared in that table.
    pub const fn level(self, role: OperatorRole) -> Option<Level> {
        match role {
            OperatorRole::Binary => self.binary_level(),
            OperatorRole::Prefix => self.prefix_level(),
            OperatorRole::Postfix => self.postfix_level(),
        }
    }

    #[inline]
    pub const fn is_prefix_capable(self) -> bool {
        self.prefix_level().is_some()
    }

    /// Lexed but without any parser role (`->`, `??`, `@`, `decides`, ...).
    pub const fn is_reserved(self) -> bool {
        self.binary_level().is_none() && self.prefix_level().is_none() && self.postfix_level().is_none()
    }
}
