//! Error recovery for the parser.
//!
//! After a failed expression the cursor is moved to the next statement
//! terminator so the caller can resume with the next expression.

#[cfg(test)]
mod tests;

use tracing::debug;

use crate::TokenCursor;

/// Advance to the next terminator-category token (newline, `;`, or stream
/// end) and return the number of tokens skipped.
///
/// A cursor already on a terminator does not move, so recovery never
/// skips a statement boundary.
pub fn synchronize(cursor: &mut TokenCursor<'_>) -> usize {
    let mut skipped = 0;
    while !cursor.at_terminator() {
        cursor.eat();
        skipped += 1;
    }
    debug!(
        skipped,
        landed = %cursor.peek().kind,
        line = cursor.position().line,
        "resynchronized"
    );
    skipped
}
