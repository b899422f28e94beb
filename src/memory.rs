use std::ops::Range;

use anyhow::{Result, bail};

use crate::document::{Block, Document, DocumentKind, EditableBlock};

/// A ruby annotation over a code point range of a paragraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ruby {
    pub range: Range<usize>,
    pub text: String,
}

/// Plain paragraph text with ruby annotations that follow edits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RubyParagraph {
    chars: Vec<char>,
    // Sorted by start, never overlapping.
    ruby: Vec<Ruby>,
}

impl RubyParagraph {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            ruby: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn ruby(&self) -> &[Ruby] {
        &self.ruby
    }

    /// Text split into plain and ruby-carrying pieces, in order.
    pub fn pieces(&self) -> Vec<Piece<'_>> {
        let mut pieces = Vec::new();
        let mut cursor = 0;

        for ruby in &self.ruby {
            if cursor < ruby.range.start {
                pieces.push(Piece::Plain(self.slice(cursor..ruby.range.start)));
            }

            pieces.push(Piece::Ruby {
                base: self.slice(ruby.range.clone()),
                ruby: &ruby.text,
            });

            cursor = ruby.range.end;
        }

        if cursor < self.chars.len() {
            pieces.push(Piece::Plain(self.slice(cursor..self.chars.len())));
        }

        pieces
    }

    fn slice(&self, range: Range<usize>) -> String {
        self.chars[range].iter().collect()
    }

    fn check_range(&self, range: &Range<usize>) -> Result<()> {
        if range.start > range.end || range.end > self.chars.len() {
            bail!(
                "Range {:?} is outside paragraph of length {}",
                range,
                self.chars.len()
            );
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Piece<'a> {
    Plain(String),
    Ruby { base: String, ruby: &'a str },
}

fn overlaps(a: &Range<usize>, b: &Range<usize>) -> bool {
    a.start < b.end && b.start < a.end
}

impl EditableBlock for RubyParagraph {
    fn text(&self) -> String {
        self.chars.iter().collect()
    }

    fn set_ruby(&mut self, range: Range<usize>, ruby: &str) -> Result<()> {
        self.check_range(&range)?;

        if range.is_empty() {
            bail!("Cannot attach ruby to an empty range at {}", range.start);
        }

        self.ruby.retain(|r| !overlaps(&r.range, &range));

        let at = self
            .ruby
            .partition_point(|r| r.range.start < range.start);

        self.ruby.insert(
            at,
            Ruby {
                range,
                text: ruby.to_string(),
            },
        );

        Ok(())
    }

    fn replace(&mut self, range: Range<usize>, with: &str) -> Result<()> {
        self.check_range(&range)?;

        let inserted: Vec<char> = with.chars().collect();
        let removed = range.len();
        let inserted_len = inserted.len();

        self.chars.splice(range.clone(), inserted);

        self.ruby.retain(|r| !overlaps(&r.range, &range));

        for ruby in &mut self.ruby {
            if ruby.range.start >= range.end {
                ruby.range.start = ruby.range.start - removed + inserted_len;
                ruby.range.end = ruby.range.end - removed + inserted_len;
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemoryBlock {
    Paragraph(RubyParagraph),
    ReadOnly(String),
    Table(Vec<String>),
}

/// A document held entirely in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryDocument {
    kind: DocumentKind,
    blocks: Vec<MemoryBlock>,
    focused: bool,
}

impl MemoryDocument {
    pub fn new(kind: DocumentKind, blocks: Vec<MemoryBlock>) -> Self {
        Self {
            kind,
            blocks,
            focused: false,
        }
    }

    /// One paragraph per line.
    pub fn from_text(text: &str) -> Self {
        let blocks = text
            .lines()
            .map(|line| MemoryBlock::Paragraph(RubyParagraph::new(line)))
            .collect();

        Self::new(DocumentKind::Text, blocks)
    }

    pub fn blocks(&self) -> &[MemoryBlock] {
        &self.blocks
    }

    pub fn paragraphs(&self) -> impl Iterator<Item = &RubyParagraph> {
        self.blocks.iter().filter_map(|block| match block {
            MemoryBlock::Paragraph(paragraph) => Some(paragraph),
            _ => None,
        })
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }
}

impl Document for MemoryDocument {
    fn kind(&self) -> DocumentKind {
        self.kind
    }

    fn block_count(&self) -> usize {
        self.blocks.len()
    }

    fn block(&mut self, index: usize) -> Block<'_> {
        match &mut self.blocks[index] {
            MemoryBlock::Paragraph(paragraph) => Block::Paragraph(paragraph),
            MemoryBlock::ReadOnly(_) => Block::ReadOnly {
                reason: "paragraph is protected".to_string(),
            },
            MemoryBlock::Table(_) => Block::Foreign { kind: "table" },
        }
    }

    fn restore_focus(&mut self) {
        self.focused = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_shifts_later_ruby() {
        let mut paragraph = RubyParagraph::new("彼（かれ）は本");

        paragraph.set_ruby(6..7, "ほん").unwrap();
        paragraph.set_ruby(0..1, "かれ").unwrap();
        paragraph.replace(1..5, "").unwrap();

        assert_eq!(paragraph.text(), "彼は本");
        assert_eq!(
            paragraph.ruby(),
            &[
                Ruby {
                    range: 0..1,
                    text: "かれ".into()
                },
                Ruby {
                    range: 2..3,
                    text: "ほん".into()
                },
            ]
        );
    }

    #[test]
    fn replace_drops_overlapping_ruby() {
        let mut paragraph = RubyParagraph::new("漢字です");

        paragraph.set_ruby(0..2, "かんじ").unwrap();
        paragraph.replace(1..3, "X").unwrap();

        assert_eq!(paragraph.text(), "漢Xす");
        assert!(paragraph.ruby().is_empty());
    }

    #[test]
    fn set_ruby_replaces_overlap() {
        let mut paragraph = RubyParagraph::new("東京");

        paragraph.set_ruby(0..2, "とうきょう").unwrap();
        paragraph.set_ruby(1..2, "きょう").unwrap();

        assert_eq!(paragraph.ruby().len(), 1);
        assert_eq!(paragraph.ruby()[0].range, 1..2);
    }

    #[test]
    fn out_of_bounds_edits_fail() {
        let mut paragraph = RubyParagraph::new("本");

        assert!(paragraph.replace(0..3, "").is_err());
        assert!(paragraph.set_ruby(1..2, "ほん").is_err());
        assert!(paragraph.set_ruby(0..0, "ほん").is_err());
    }

    #[test]
    fn pieces_interleave_plain_and_ruby() {
        let mut paragraph = RubyParagraph::new("彼は学校に");

        paragraph.set_ruby(2..4, "がっこう").unwrap();

        assert_eq!(
            paragraph.pieces(),
            vec![
                Piece::Plain("彼は".into()),
                Piece::Ruby {
                    base: "学校".into(),
                    ruby: "がっこう"
                },
                Piece::Plain("に".into()),
            ]
        );
    }

    #[test]
    fn from_text_makes_one_paragraph_per_line() {
        let document = MemoryDocument::from_text("一行目\n二行目\n");

        assert_eq!(document.block_count(), 2);
        assert_eq!(document.kind(), DocumentKind::Text);
        assert_eq!(document.paragraphs().count(), 2);
    }
}
