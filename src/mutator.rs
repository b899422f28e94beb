use tracing::{debug, warn};

use crate::{
    ConvertOptions,
    document::EditableBlock,
    error::{Error, Result},
    scanner::{Match, Scanner},
    segmenter::{Assignment, segment},
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlockOutcome {
    pub converted: usize,
    pub skipped: usize,
}

/// Convert every bracket annotation in `block`, rightmost first.
///
/// Each round re-reads the block and scans only the text in front of the
/// last converted word, so every offset handed to the host reflects all
/// earlier edits.
pub fn convert_block(
    block: &mut dyn EditableBlock,
    index: usize,
    scanner: &Scanner,
    options: &ConvertOptions,
) -> Result<BlockOutcome> {
    let mut outcome = BlockOutcome::default();
    let mut limit: Option<usize> = None;

    loop {
        let text = block.text();
        let prefix: String = match limit {
            Some(limit) => text.chars().take(limit).collect(),
            None => text,
        };

        let Some(found) = scanner.scan(&prefix).pop() else {
            break;
        };

        limit = Some(found.word_start);

        let assignments = match segment(&found.word, &found.reading, &options.policy) {
            Ok(assignments) => assignments,
            Err(err) => {
                warn!(block = index, "Skipping {}: {}", found.word, err);
                outcome.skipped += 1;
                continue;
            }
        };

        let assignments: Vec<Assignment> = assignments
            .into_iter()
            .map(|a| Assignment {
                reading: options.reading_style.apply(&a.reading),
                span: a.span,
            })
            .collect();

        debug!(
            block = index,
            word = %found.word,
            reading = %found.reading,
            spans = assignments.len(),
            "Converting annotation"
        );

        apply_match(block, &found, &assignments)
            .map_err(|source| Error::Host { index, source })?;

        outcome.converted += 1;
    }

    Ok(outcome)
}

/// Annotate the spans of one match, then delete its bracketed reading.
///
/// `found` must describe the block's current text.
pub fn apply_match(
    block: &mut dyn EditableBlock,
    found: &Match,
    assignments: &[Assignment],
) -> anyhow::Result<()> {
    for assignment in assignments.iter().rev() {
        let start = found.word_start + assignment.span.offset;
        let end = found.word_start + assignment.span.end();

        block.set_ruby(start..end, &assignment.reading)?;
    }

    block.replace(found.word_end..found.bracket_end, "")
}
