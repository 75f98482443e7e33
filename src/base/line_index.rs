//! Offset → line/column conversion.
//!
//! Diagnostics and fixes are anchored on byte offsets ([`TextRange`]); hosts
//! and the grouping policy need line numbers. [`LineIndex`] is built once per
//! source text and answers both lookups from a newline table.

use text_size::{TextRange, TextSize};

/// A line/column position (0-indexed, column in UTF-8 bytes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineCol {
    pub line: u32,
    pub col: u32,
}

/// Maps byte offsets to line numbers.
///
/// Lines are 0-indexed and delimited by `\n` (a `\r\n` sequence therefore
/// terminates a line at its `\n`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    /// Byte offsets of every `\n` in the indexed text.
    newlines: Vec<TextSize>,
}

impl LineIndex {
    /// Build the index for `text`.
    pub fn new(text: &str) -> Self {
        let newlines = text
            .bytes()
            .enumerate()
            .filter(|&(_, b)| b == b'\n')
            .map(|(i, _)| TextSize::new(i as u32))
            .collect();
        Self { newlines }
    }

    /// The line containing `offset`.
    ///
    /// An offset pointing one past a `\n` is on the following line; an
    /// offset pointing at a `\n` is still on the line the `\n` terminates.
    pub fn line_of(&self, offset: TextSize) -> u32 {
        self.newlines.partition_point(|&nl| nl < offset) as u32
    }

    /// The line/column of `offset` (column counted in UTF-8 bytes).
    pub fn line_col(&self, offset: TextSize) -> LineCol {
        let line = self.line_of(offset);
        let line_start = if line == 0 {
            TextSize::new(0)
        } else {
            self.newlines[line as usize - 1] + TextSize::new(1)
        };
        LineCol {
            line,
            col: u32::from(offset - line_start),
        }
    }

    /// Number of lines in the indexed text (at least 1, even when empty).
    pub fn line_count(&self) -> u32 {
        self.newlines.len() as u32 + 1
    }

    /// The line span covered by `range`.
    ///
    /// `range` must not end immediately after a line break; import
    /// statements always end on a token, so this holds for every range the
    /// analysis produces.
    pub fn line_range(&self, range: TextRange) -> LineRange {
        LineRange {
            start: self.line_of(range.start()),
            end: self.line_of(range.end()),
        }
    }
}

/// The lines a statement occupies (0-indexed, both ends inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineRange {
    pub start: u32,
    pub end: u32,
}

impl LineRange {
    pub fn new(start: u32, end: u32) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    /// A range confined to a single line.
    pub fn on_line(line: u32) -> Self {
        Self { start: line, end: line }
    }
}
