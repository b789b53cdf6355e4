//! Shared data model for the Foundations compiler front end.
//!
//! Everything the lexer produces and the parser consumes lives here:
//!
//! - [`Position`]: 1-based line/column source locations
//! - [`Token`], [`TokenKind`], [`TokenList`]: the lexical model, one sum type
//!   per token category
//! - [`Operator`] precedence metadata for the binary, prefix, and postfix roles
//! - [`SyntaxNode`]: the owned expression tree built by the parser

mod node;
mod operator;
mod position;
mod token;

pub use node::{NodeKind, SyntaxNode};
pub use operator::{associativity, level, Associativity, Level, OperatorRole};
pub use position::Position;
pub use token::{
    Bracket, Literal, Operator, Terminator, Token, TokenCategory, TokenKind, TokenList,
    TypeKeyword,
};
