//! Turn inline `word（かな）` readings into ruby attached to each kanji run.
//!
//! A host hands over a [`Document`]; [`convert_document`] walks its blocks,
//! finds bracket annotations with a [`Scanner`], splits each reading across
//! the word's kanji runs with [`segment`], and rewrites the block through the
//! host's [`EditableBlock`] capability.

pub mod chars;
pub mod document;
pub mod error;
pub mod memory;
pub mod mutator;
pub mod reading;
pub mod render;
pub mod scanner;
pub mod segmenter;

use tracing::{debug, info};

pub use crate::{
    document::{Block, Document, DocumentKind, EditableBlock},
    error::{Error, Result},
    memory::{MemoryBlock, MemoryDocument, Ruby, RubyParagraph},
    reading::ReadingStyle,
    scanner::{Grammar, Match, Scanner},
    segmenter::{Assignment, KanjiRun, SegmentPolicy, segment},
};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ConvertOptions {
    pub grammar: Grammar,
    pub policy: SegmentPolicy,
    pub reading_style: ReadingStyle,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionReport {
    pub blocks_visited: usize,
    pub blocks_skipped: usize,
    pub matches_converted: usize,
    pub matches_skipped: usize,
}

/// Convert every bracket annotation in `document`.
///
/// Fails before touching anything when the document is not a text document.
/// A block without the editing capability, or a host edit failure, stops the
/// run; blocks converted before it stay converted.
pub fn convert_document(
    document: &mut impl Document,
    options: &ConvertOptions,
) -> Result<ConversionReport> {
    let kind = document.kind();

    if kind != DocumentKind::Text {
        return Err(Error::UnsupportedDocument { kind });
    }

    let scanner = Scanner::new(options.grammar);
    let mut report = ConversionReport::default();

    for index in 0..document.block_count() {
        match document.block(index) {
            Block::Paragraph(block) => {
                let outcome = mutator::convert_block(block, index, &scanner, options)?;

                report.blocks_visited += 1;
                report.matches_converted += outcome.converted;
                report.matches_skipped += outcome.skipped;
            }
            Block::ReadOnly { reason } => {
                return Err(Error::CapabilityMissing { index, reason });
            }
            Block::Foreign { kind } => {
                debug!(block = index, kind, "Skipping non-paragraph block");
                report.blocks_skipped += 1;
            }
        }
    }

    info!(
        "Converted {} annotations in {} blocks",
        report.matches_converted, report.blocks_visited
    );

    document.restore_focus();

    Ok(report)
}
