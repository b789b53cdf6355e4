//! Character cursor with line/column tracking.

#[cfg(test)]
mod tests;

use fnd_ir::Position;

/// Forward-only cursor over the source text.
///
/// `Copy` so callers can take a cheap snapshot and later restore it
/// (the string scanner does this to resume after an unterminated literal).
#[derive(Copy, Clone, Debug)]
pub(crate) struct SourceCursor<'a> {
    source: &'a str,
    offset: usize,
    line: u32,
    column: u32,
}

impl<'a> SourceCursor<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        SourceCursor {
            source,
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    /// Position of the next character.
    #[inline]
    pub(crate) fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    /// Unconsumed text.
    #[inline]
    pub(crate) fn rest(&self) -> &'a str {
        &self.source[self.offset..]
    }

    /// Source text from `start` up to the cursor.
    #[inline]
    pub(crate) fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.offset]
    }

    #[inline]
    pub(crate) fn is_eof(&self) -> bool {
        self.offset >= self.source.len()
    }

    #[inline]
    pub(crate) fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// The character after the next one.
    #[inline]
    pub(crate) fn peek_second(&self) -> Option<char> {
        self.rest().chars().nth(1)
    }

    /// Consume one character. A newline moves to column 1 of the next line.
    pub(crate) fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.offset += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    /// Consume `count` characters (fewer at end of input).
    pub(crate) fn bump_n(&mut self, count: usize) {
        for _ in 0..count {
            if self.bump().is_none() {
                break;
            }
        }
    }

    /// Consume while `pred` holds; returns the consumed text.
    pub(crate) fn eat_while(&mut self, mut pred: impl FnMut(char) -> bool) -> &'a str {
        let start = self.offset;
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            self.bump();
        }
        self.slice_from(start)
    }
}
