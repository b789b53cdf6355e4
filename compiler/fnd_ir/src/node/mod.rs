//! Expression syntax tree.
//!
//! Nodes own their children in source order; the parser builds trees bottom
//! up, so a node is complete and immutable once it has been created.


use std::fmt::{self, Write};

use crate::{OperatorRole, Position, Token, TokenKind};

/// What a [`SyntaxNode`] represents.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum NodeKind {
    /// One per parsed expression; holds zero or one child.
    Root,
    /// Literal or identifier leaf.
    Value,
    /// Type keyword leaf.
    Type,
    /// An operator whose operands have not been attached yet.
    Operator(OperatorRole),
    /// A fully reduced operator application.
    OperatorTree(OperatorRole),
    /// A parenthesized sub-expression; holds exactly one child.
    Group,
}

impl NodeKind {
    pub const fn name(self) -> &'static str {
        match self {
            NodeKind::Root => "Root",
            NodeKind::Value => "Value",
            NodeKind::Type => "Type",
            NodeKind::Operator(OperatorRole::Binary) => "BinaryOperator",
            NodeKind::Operator(OperatorRole::Prefix) => "PrefixOperator",
            NodeKind::Operator(OperatorRole::Postfix) => "PostfixOperator",
            NodeKind::OperatorTree(OperatorRole::Binary) => "BinaryTree",
            NodeKind::OperatorTree(OperatorRole::Prefix) => "PrefixTree",
            NodeKind::OperatorTree(OperatorRole::Postfix) => "PostfixTree",
            NodeKind::Group => "Group",
        }
    }
}

/// A node of the expression tree.
///
/// `token` is the kind of the token the node was built from (the operator
/// for operator trees, `(` for groups) and carries any literal payload.
/// Roots have no source token.
#[derive(Clone, PartialEq, Debug)]
pub struct SyntaxNode {
    pub kind: NodeKind,
    pub token: Option<TokenKind>,
    pub position: Position,
    pub children: Vec<SyntaxNode>,
}

impl SyntaxNode {
    /// A root holding `child`; `None` marks an empty or failed expression.
    pub fn root(position: Position, child: Option<SyntaxNode>) -> Self {
        SyntaxNode {
            kind: NodeKind::Root,
            token: None,
            position,
            children: child.into_iter().collect(),
        }
    }

    /// Leaf for a literal, identifier, or type keyword token.
    pub fn leaf(token: Token) -> Self {
        let kind = if token.kind.is_type_keyword() {
            NodeKind::Type
        } else {
            NodeKind::Value
        };
        SyntaxNode {
            kind,
            token: Some(token.kind),
            position: token.position,
            children: Vec::new(),
        }
    }

    /// An operator waiting for its operands.
    pub fn operator(token: Token, role: OperatorRole) -> Self {
        SyntaxNode {
            kind: NodeKind::Operator(role),
            token: Some(token.kind),
            position: token.position,
            children: Vec::new(),
        }
    }

    /// Turn an operator leaf into a tree over `operands`.
    ///
    /// The tree keeps the operator's token and position.
    pub fn into_tree(self, operands: Vec<SyntaxNode>) -> Self {
        let kind = match self.kind {
            NodeKind::Operator(role) => NodeKind::OperatorTree(role),
            other => other,
        };
        SyntaxNode {
            kind,
            token: self.token,
            position: self.position,
            children: operands,
        }
    }

    /// A parenthesized group opened by `open`.
    pub fn group(open: Token, inner: SyntaxNode) -> Self {
        SyntaxNode {
            kind: NodeKind::Group,
            token: Some(open.kind),
            position: open.position,
            children: vec![inner],
        }
    }

    /// First child; the expression of a root or group.
    #[inline]
    pub fn child(&self) -> Option<&SyntaxNode> {
        self.children.first()
    }

    /// Whether this is a value or a completed tree (usable as an operand).
    #[inline]
    pub fn is_operand(&self) -> bool {
        matches!(
            self.kind,
            NodeKind::Value | NodeKind::Type | NodeKind::OperatorTree(_) | NodeKind::Group
        )
    }

    /// Indented multi-line rendering, one node per line.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.dump_into(&mut out, 0);
        out
    }

    fn dump_into(&self, out: &mut String, depth: usize) {
        let _ = write!(out, "{:indent$}{}", "", self.kind.name(), indent = depth * 2);
        if let Some(token) = &self.token {
            let _ = write!(out, " `{token}`");
        }
        let _ = writeln!(out, " @ {}", self.position);
        for child in &self.children {
            child.dump_into(out, depth + 1);
        }
    }
}

/// S-expression rendering: `(+ 1 (* 2 3))`, `(- x)`, `(x ++)`.
impl fmt::Display for SyntaxNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            NodeKind::Root => match self.child() {
                Some(child) => write!(f, "{child}"),
                None => f.write_str("<empty>"),
            },
            NodeKind::Value | NodeKind::Type | NodeKind::Operator(_) => match &self.token {
                Some(token) => write!(f, "{token}"),
                None => Ok(()),
            },
            NodeKind::OperatorTree(role) => {
                let op = self.token.as_ref().map(ToString::to_string).unwrap_or_default();
                f.write_str("(")?;
                if role == OperatorRole::Postfix {
                    for child in &self.children {
                        write!(f, "{child} ")?;
                    }
                    f.write_str(&op)?;
                } else {
                    f.write_str(&op)?;
                    for child in &self.children {
                        write!(f, " {child}")?;
                    }
                }
                f.write_str(")")
            }
            NodeKind::Group => {
                f.write_str("(paren")?;
                for child in &self.children {
                    write!(f, " {child}")?;
                }
                f.write_str(")")
            }
        }
    }
}
