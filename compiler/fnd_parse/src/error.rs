//! Failure result of a single expression.

use fnd_diagnostic::{Diagnostic, ErrorCode};
use fnd_ir::{Position, SyntaxNode};

/// Why an expression was abandoned.
///
/// The same diagnostic is also recorded in the parser's diagnostic list.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{diagnostic}")]
pub struct ParseFailure {
    pub diagnostic: Diagnostic,
    /// Where the abandoned expression started.
    pub start: Position,
}

impl ParseFailure {
    pub(crate) fn new(diagnostic: Diagnostic, start: Position) -> Self {
        ParseFailure { diagnostic, start }
    }

    #[inline]
    pub fn code(&self) -> ErrorCode {
        self.diagnostic.code
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.diagnostic.position
    }

    /// The tree reported for a failed expression: a root with no child.
    pub fn root(&self) -> SyntaxNode {
        SyntaxNode::root(self.start, None)
    }
}
