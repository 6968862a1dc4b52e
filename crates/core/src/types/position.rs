use serde::{Deserialize, Serialize};

/// Represents a position in a text document using 0-based line and character indices
///
/// Characters are counted in Unicode scalar values; scanning itself works on
/// byte offsets, so editors and the CLI go through these conversions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub character: u32,
}

impl Position {
    pub fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }

    /// Position of a byte offset; offsets past the end map to the end of the text
    pub fn from_offset(source: &str, offset: usize) -> Self {
        let mut offset = offset.min(source.len());
        while !source.is_char_boundary(offset) {
            offset -= 1;
        }

        let before = &source[..offset];
        let line = before.matches('\n').count();
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        let character = before[line_start..].chars().count();

        Self::new(line as u32, character as u32)
    }

    /// Byte offset of this position, or `None` when the line does not exist
    ///
    /// A character past the end of its line clamps to the line end.
    pub fn to_offset(&self, source: &str) -> Option<usize> {
        let mut line_start = 0;
        for _ in 0..self.line {
            line_start += source[line_start..].find('\n')? + 1;
        }

        let line_end = source[line_start..]
            .find('\n')
            .map_or(source.len(), |i| line_start + i);
        let line_text = &source[line_start..line_end];

        let column = line_text
            .char_indices()
            .nth(self.character as usize)
            .map_or(line_text.len(), |(i, _)| i);

        Some(line_start + column)
    }
}
