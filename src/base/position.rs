//! Line/column tracking for editor requests
//!
//! Editors address the cursor by line and column, the syntax tree by byte
//! offset. `LineIndex` converts between the two.

use text_size::TextSize;

/// A position in source code (0-indexed for LSP compatibility)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineCol {
    pub line: u32,
    /// Byte column within the line
    pub col: u32,
}

impl LineCol {
    pub fn new(line: u32, col: u32) -> Self {
        Self { line, col }
    }
}

/// Maps line/column positions to byte offsets for one text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    /// Offset of the first byte of every line
    line_starts: Vec<TextSize>,
    len: TextSize,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![TextSize::new(0)];
        for (offset, byte) in text.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(TextSize::new(offset as u32 + 1));
            }
        }
        Self {
            line_starts,
            len: TextSize::of(text),
        }
    }

    /// Convert a line/column position into a byte offset.
    ///
    /// Returns `None` if the line does not exist or the column runs past the
    /// end of that line.
    pub fn offset(&self, pos: LineCol) -> Option<TextSize> {
        let start = *self.line_starts.get(pos.line as usize)?;
        let end = self
            .line_starts
            .get(pos.line as usize + 1)
            .map(|next| *next - TextSize::new(1))
            .unwrap_or(self.len);
        let offset = u32::from(start).checked_add(pos.col).map(TextSize::new)?;
        (offset <= end).then_some(offset)
    }
}
