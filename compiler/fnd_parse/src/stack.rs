//! Operand/operator stack for one expression.
//!
//! Operators are shifted with their resolved role and level; the stack is
//! reduced whenever an incoming operator binds no tighter than the last one
//! (respecting associativity), and once more at the end of the expression.
//! Parenthesized groups are delimited by a marker entry: reductions never
//! cross the innermost open marker.


use fnd_diagnostic::{Diagnostic, ErrorCode};
use fnd_ir::{associativity, level, Level, OperatorRole, Position, SyntaxNode, Token};
use smallvec::SmallVec;
use tracing::trace;

#[derive(Debug)]
pub(crate) enum Entry {
    /// A value, type, completed tree, or group.
    Operand(SyntaxNode),
    /// An operator still waiting for operands.
    Operator {
        node: SyntaxNode,
        role: OperatorRole,
        level: Level,
    },
    /// An open `(`, remembering the level that was current before it.
    GroupOpen { open: Token, saved_level: Level },
}

impl Entry {
    /// Operands and pending postfix operators (whose operand is already
    /// on the stack) can be followed by a binary or postfix operator.
    fn is_value_like(&self) -> bool {
        matches!(
            self,
            Entry::Operand(_)
                | Entry::Operator {
                    role: OperatorRole::Postfix,
                    ..
                }
        )
    }

    fn operator_level(&self) -> Option<Level> {
        match self {
            Entry::Operator { level, .. } => Some(*level),
            _ => None,
        }
    }

    fn position(&self) -> Position {
        match self {
            Entry::Operand(node) | Entry::Operator { node, .. } => node.position,
            Entry::GroupOpen { open, .. } => open.position,
        }
    }
}

pub(crate) struct ExprStack {
    entries: SmallVec<[Entry; 16]>,
    current_level: Level,
}

impl ExprStack {
    pub(crate) fn new() -> Self {
        ExprStack {
            entries: SmallVec::new(),
            current_level: level::LOWEST,
        }
    }

    #[inline]
    pub(crate) fn current_level(&self) -> Level {
        self.current_level
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the top entry can be the left side of a binary or postfix
    /// operator. False for an empty stack or an open group.
    pub(crate) fn top_is_value_like(&self) -> bool {
        self.entries.last().is_some_and(Entry::is_value_like)
    }

    pub(crate) fn push_operand(&mut self, node: SyntaxNode) {
        trace!(node = %node, depth = self.entries.len(), "shift operand");
        self.entries.push(Entry::Operand(node));
    }

    /// Shift an operator, reducing first when it binds no tighter than the
    /// current level. Prefix operators never reduce: their operand has not
    /// been seen yet.
    pub(crate) fn push_operator(
        &mut self,
        node: SyntaxNode,
        role: OperatorRole,
        level: Level,
    ) -> Result<(), Diagnostic> {
        if role != OperatorRole::Prefix {
            let left = associativity(level).is_left();
            if level < self.current_level || (level == self.current_level && left) {
                self.resolve(level, left)?;
            }
            // A pending postfix already has its operand; fold it before it
            // becomes the operand of a tighter operator.
            if matches!(
                self.entries.last(),
                Some(Entry::Operator {
                    role: OperatorRole::Postfix,
                    ..
                })
            ) {
                self.reduce_once(self.floor())?;
            }
        }
        trace!(
            op = %node,
            role = role.name(),
            level,
            depth = self.entries.len(),
            "shift operator"
        );
        self.entries.push(Entry::Operator { node, role, level });
        self.current_level = level;
        Ok(())
    }

    /// Open a group: reductions inside it start again from the lowest level.
    pub(crate) fn open_group(&mut self, open: Token) {
        trace!(depth = self.entries.len(), "open group");
        self.entries.push(Entry::GroupOpen {
            open,
            saved_level: self.current_level,
        });
        self.current_level = level::LOWEST;
    }

    /// Close the innermost group, replacing its marker and contents with a
    /// single group operand.
    pub(crate) fn close_group(&mut self, close: &Token) -> Result<(), Diagnostic> {
        let Some(marker) = self.innermost_group() else {
            return Err(Diagnostic::new(
                ErrorCode::UnexpectedToken,
                close.position,
                "unmatched `)`",
            ));
        };
        self.resolve(level::LOWEST, true)?;

        if self.entries.len() == marker + 1 {
            return Err(Diagnostic::new(
                ErrorCode::ExpressionExpected,
                close.position,
                "expected an expression inside parentheses",
            ));
        }
        let inner = match self.entries.pop() {
            Some(Entry::Operand(node)) => node,
            Some(entry) => return Err(dangling(&entry)),
            None => return Err(internal(close.position)),
        };
        let Some(Entry::GroupOpen { open, saved_level }) = self.entries.pop() else {
            return Err(internal(close.position));
        };

        trace!(depth = self.entries.len(), "close group");
        self.entries.push(Entry::Operand(SyntaxNode::group(open, inner)));
        self.current_level = saved_level;
        Ok(())
    }

    /// Collapse everything into a single operand at the end of an expression.
    ///
    /// Returns `None` for an empty expression.
    pub(crate) fn finish(mut self) -> Result<Option<SyntaxNode>, Diagnostic> {
        if let Some(marker) = self.innermost_group() {
            let position = self.entries[marker].position();
            return Err(Diagnostic::new(
                ErrorCode::UnclosedDelimiter,
                position,
                "`(` is never closed",
            ));
        }
        self.resolve(level::LOWEST, true)?;
        match self.entries.pop() {
            None => Ok(None),
            Some(Entry::Operand(node)) => Ok(Some(node)),
            Some(entry) => Err(dangling(&entry)),
        }
    }

    /// Reduce the region above the innermost group marker while its nearest
    /// operator binds tighter than `level` (or equally, when `left`).
    pub(crate) fn resolve(&mut self, level: Level, left: bool) -> Result<(), Diagnostic> {
        loop {
            let floor = self.floor();
            let region = &self.entries[floor..];
            if region.len() <= 1 {
                return Ok(());
            }
            let Some(top_level) = region.iter().rev().find_map(Entry::operator_level) else {
                let position = region[region.len() - 1].position();
                return Err(Diagnostic::new(
                    ErrorCode::OperatorExpected,
                    position,
                    "expected an operator between operands",
                ));
            };
            if top_level < level || (top_level == level && !left) {
                return Ok(());
            }
            self.reduce_once(floor)?;
        }
    }

    /// Apply one operator to its operands at the top of the stack.
    fn reduce_once(&mut self, floor: usize) -> Result<(), Diagnostic> {
        let len = self.entries.len();
        if len < floor + 2 {
            return Ok(());
        }

        let shape = (&self.entries[len - 2], &self.entries[len - 1]);
        match shape {
            (
                Entry::Operand(_),
                Entry::Operator {
                    role: OperatorRole::Postfix,
                    ..
                },
            ) => {
                let (op, operand) = self.pop_operator_operand()?;
                self.push_tree(op, vec![operand], OperatorRole::Postfix);
                Ok(())
            }
            (_, top @ Entry::Operator { .. }) => Err(dangling(top)),
            (
                Entry::Operator {
                    role: OperatorRole::Prefix,
                    ..
                },
                Entry::Operand(_),
            ) => {
                let (operand, op) = self.pop_operand_operator()?;
                self.push_tree(op, vec![operand], OperatorRole::Prefix);
                Ok(())
            }
            (
                Entry::Operator {
                    role: OperatorRole::Binary,
                    ..
                },
                Entry::Operand(_),
            ) => {
                if len < floor + 3 || !matches!(self.entries[len - 3], Entry::Operand(_)) {
                    let position = self.entries[len - 2].position();
                    return Err(Diagnostic::new(
                        ErrorCode::ExpressionExpected,
                        position,
                        "binary operator has no left operand",
                    ));
                }
                let (right, op) = self.pop_operand_operator()?;
                let Some(Entry::Operand(left)) = self.entries.pop() else {
                    return Err(internal(op.position));
                };
                self.push_tree(op, vec![left, right], OperatorRole::Binary);
                Ok(())
            }
            (_, top) => Err(Diagnostic::new(
                ErrorCode::OperatorExpected,
                top.position(),
                "expected an operator before this operand",
            )),
        }
    }

    /// Pop `[.., operand, operator]`.
    fn pop_operator_operand(&mut self) -> Result<(SyntaxNode, SyntaxNode), Diagnostic> {
        let position = self.entries.last().map_or_else(Position::default, Entry::position);
        match (self.entries.pop(), self.entries.pop()) {
            (Some(Entry::Operator { node: op, .. }), Some(Entry::Operand(operand))) => {
                Ok((op, operand))
            }
            _ => Err(internal(position)),
        }
    }

    /// Pop `[.., operator, operand]`.
    fn pop_operand_operator(&mut self) -> Result<(SyntaxNode, SyntaxNode), Diagnostic> {
        let position = self.entries.last().map_or_else(Position::default, Entry::position);
        match (self.entries.pop(), self.entries.pop()) {
            (Some(Entry::Operand(operand)), Some(Entry::Operator { node: op, .. })) => {
                Ok((operand, op))
            }
            _ => Err(internal(position)),
        }
    }

    fn push_tree(&mut self, op: SyntaxNode, operands: Vec<SyntaxNode>, role: OperatorRole) {
        let tree = op.into_tree(operands);
        trace!(tree = %tree, role = role.name(), "reduce");
        self.entries.push(Entry::Operand(tree));
    }

    fn innermost_group(&self) -> Option<usize> {
        self.entries
            .iter()
            .rposition(|entry| matches!(entry, Entry::GroupOpen { .. }))
    }

    /// First index above the innermost open group.
    fn floor(&self) -> usize {
        self.innermost_group().map_or(0, |marker| marker + 1)
    }
}

/// An operator left without its operand.
fn dangling(entry: &Entry) -> Diagnostic {
    let message = match entry {
        Entry::Operator { node, role, .. } => format!(
            "{} operator `{}` is missing an operand",
            role.name(),
            node.token.as_ref().map(ToString::to_string).unwrap_or_default()
        ),
        _ => "expected an expression".to_owned(),
    };
    Diagnostic::new(ErrorCode::ExpressionExpected, entry.position(), message)
}

/// A stack shape the shift rules never produce.
fn internal(position: Position) -> Diagnostic {
    Diagnostic::new(
        ErrorCode::OperatorExpected,
        position,
        "malformed expression",
    )
}
