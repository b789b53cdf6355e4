//! Operator role classification and the per-expression shift loop.

#[cfg(test)]
mod tests;

use fnd_diagnostic::{Diagnostic, ErrorCode};
use fnd_ir::{Bracket, Operator, OperatorRole, Position, SyntaxNode, TokenKind};
use tracing::{debug, trace};

use crate::stack::ExprStack;
use crate::{recovery, ParseFailure, Parser};

impl Parser<'_> {
    /// Parse one expression, stopping at (not consuming) the next
    /// newline, `;`, or stream end.
    ///
    /// On success returns a root whose child is the reduced expression, or
    /// no child if the expression is empty. On failure the diagnostic is
    /// recorded and the cursor is left on the next terminator.
    pub fn parse_expression(&mut self) -> Result<SyntaxNode, ParseFailure> {
        let start = self.cursor.position();
        let mut stack = ExprStack::new();

        loop {
            let token = self.cursor.peek();
            let step = match &token.kind {
                TokenKind::Terminator(_) => break,
                TokenKind::Literal(_) | TokenKind::TypeKeyword(_) => {
                    stack.push_operand(SyntaxNode::leaf(self.cursor.eat().clone()));
                    Ok(())
                }
                TokenKind::Operator(op) => self.shift_operator(&mut stack, *op),
                TokenKind::Bracket(bracket) => self.shift_bracket(&mut stack, *bracket),
            };
            if let Err(diagnostic) = step {
                return Err(self.fail(start, diagnostic));
            }
        }

        match stack.finish() {
            Ok(child) => Ok(SyntaxNode::root(start, child)),
            Err(diagnostic) => Err(self.fail(start, diagnostic)),
        }
    }

    /// Classify the operator under the cursor and shift it.
    ///
    /// After an operand, the binary role wins when the next token can start
    /// an operand; otherwise the postfix role is tried. Anywhere else only
    /// the prefix role applies.
    fn shift_operator(&mut self, stack: &mut ExprStack, op: Operator) -> Result<(), Diagnostic> {
        let position = self.cursor.position();
        let next = &self.cursor.peek_next().kind;
        let operand_follows = !matches!(next.as_operator(), Some(n) if !n.is_prefix_capable());

        let (role, level) = if stack.top_is_value_like() {
            match (op.binary_level(), op.postfix_level()) {
                (Some(level), _) if operand_follows && !next.is_terminator() => {
                    (OperatorRole::Binary, level)
                }
                (_, Some(level)) => (OperatorRole::Postfix, level),
                _ => {
                    return Err(Diagnostic::new(
                        ErrorCode::PostfixExpected,
                        position,
                        format!(
                            "`{}` cannot follow an operand here; it is not a postfix operator",
                            op.spelling()
                        ),
                    ))
                }
            }
        } else {
            match op.prefix_level() {
                Some(level) if operand_follows => (OperatorRole::Prefix, level),
                Some(_) => {
                    return Err(Diagnostic::new(
                        ErrorCode::PrefixExpected,
                        position,
                        format!("prefix `{}` must be followed by an operand, found `{next}`", op.spelling()),
                    ))
                }
                None => {
                    return Err(Diagnostic::new(
                        ErrorCode::PrefixExpected,
                        position,
                        format!("`{}` is not a prefix operator", op.spelling()),
                    ))
                }
            }
        };

        trace!(
            op = op.spelling(),
            role = role.name(),
            level,
            current = stack.current_level(),
            "classified operator"
        );
        let token = self.cursor.eat().clone();
        stack.push_operator(SyntaxNode::operator(token, role), role, level)
    }

    fn shift_bracket(&mut self, stack: &mut ExprStack, bracket: Bracket) -> Result<(), Diagnostic> {
        match bracket {
            Bracket::LParen if stack.top_is_value_like() => Err(Diagnostic::new(
                ErrorCode::BinaryOperatorExpected,
                self.cursor.position(),
                "expected a binary operator before `(`",
            )),
            Bracket::LParen => {
                stack.open_group(self.cursor.eat().clone());
                Ok(())
            }
            Bracket::RParen => {
                let close = self.cursor.eat();
                stack.close_group(close)
            }
            other => Err(Diagnostic::new(
                ErrorCode::UnexpectedToken,
                self.cursor.position(),
                format!("`{}` cannot appear in an expression", other.spelling()),
            )),
        }
    }

    /// Record `diagnostic` and resynchronize to the next terminator.
    fn fail(&mut self, start: Position, diagnostic: Diagnostic) -> ParseFailure {
        debug!(
            code = %diagnostic.code,
            line = diagnostic.position.line,
            column = diagnostic.position.column,
            message = %diagnostic.message,
            "expression abandoned"
        );
        recovery::synchronize(&mut self.cursor);
        self.diagnostics.push(diagnostic.clone());
        ParseFailure::new(diagnostic, start)
    }
}
