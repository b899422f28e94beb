use std::ops::Range;

use anyhow::Result;

/// Kind of document a host hands over. Only `Text` carries editable paragraphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Text,
    Spreadsheet,
    Presentation,
    Drawing,
}

/// Editing capability of a paragraph-like block.
///
/// Ranges are code point ranges into the string returned by [`text`](Self::text).
pub trait EditableBlock {
    fn text(&self) -> String;

    /// Attach `ruby` to the characters in `range`.
    fn set_ruby(&mut self, range: Range<usize>, ruby: &str) -> Result<()>;

    /// Replace the characters in `range` with `with`; an empty string deletes.
    fn replace(&mut self, range: Range<usize>, with: &str) -> Result<()>;
}

pub enum Block<'a> {
    Paragraph(&'a mut dyn EditableBlock),
    /// A text block the host will not let us edit.
    ReadOnly { reason: String },
    /// Tables, frames and other non-paragraph content; skipped.
    Foreign { kind: &'static str },
}

pub trait Document {
    fn kind(&self) -> DocumentKind;

    fn block_count(&self) -> usize;

    fn block(&mut self, index: usize) -> Block<'_>;

    /// Hand input focus back to the main editing surface.
    fn restore_focus(&mut self) {}
}
