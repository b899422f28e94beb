//! Positional split of a bracket reading across the kanji runs of its word.
//!
//! This is a best-effort heuristic, not a dictionary aligner. Irregular
//! readings (okurigana-heavy verbs, jukujikun) can be split at the wrong
//! boundary, and when the reading runs out early the trailing kanji runs
//! receive no ruby at all.

use crate::{
    chars::is_kanji,
    error::{Error, Result},
};

/// Longest slice a single-kanji run may take.
pub const DEFAULT_SINGLE_KANJI_CAP: usize = 4;
/// A single-kanji run stops growing once fewer than this many kana per kanji
/// would remain for the runs after it.
pub const DEFAULT_RATIO_THRESHOLD: f64 = 1.5;
/// Smallest slice a multi-kanji run is given.
pub const DEFAULT_MIN_MULTI_SLICE: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentPolicy {
    pub single_kanji_cap: usize,
    pub ratio_threshold: f64,
    pub min_multi_slice: usize,
}

impl Default for SegmentPolicy {
    fn default() -> Self {
        Self {
            single_kanji_cap: DEFAULT_SINGLE_KANJI_CAP,
            ratio_threshold: DEFAULT_RATIO_THRESHOLD,
            min_multi_slice: DEFAULT_MIN_MULTI_SLICE,
        }
    }
}

/// A maximal kanji run, in code points relative to the start of its word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KanjiRun {
    pub offset: usize,
    pub len: usize,
}

impl KanjiRun {
    pub fn end(&self) -> usize {
        self.offset + self.len
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub span: KanjiRun,
    pub reading: String,
}

pub fn kanji_runs(word: &str) -> Vec<KanjiRun> {
    let mut runs = Vec::new();
    let mut current: Option<KanjiRun> = None;

    for (i, ch) in word.chars().enumerate() {
        if is_kanji(ch) {
            match current.as_mut() {
                Some(run) => run.len += 1,
                None => current = Some(KanjiRun { offset: i, len: 1 }),
            }
        } else if let Some(run) = current.take() {
            runs.push(run);
        }
    }

    if let Some(run) = current {
        runs.push(run);
    }

    runs
}

pub fn segment(word: &str, reading: &str, policy: &SegmentPolicy) -> Result<Vec<Assignment>> {
    let runs = kanji_runs(word);
    let kana: Vec<char> = reading.chars().collect();

    if runs.is_empty() || kana.is_empty() {
        return Err(Error::MalformedMatch {
            word: word.to_string(),
            reading: reading.to_string(),
        });
    }

    let total = kana.len();
    let mut assignments = Vec::with_capacity(runs.len());
    let mut k = 0;

    for (i, run) in runs.iter().enumerate() {
        if k >= total {
            break;
        }

        let kanji_after: usize = runs[i + 1..].iter().map(|r| r.len).sum();

        let end = if run.len == 1 {
            single_kanji_end(k, total, kanji_after, policy)
        } else {
            let remaining_kanji = run.len + kanji_after;
            let remaining_kana = total - k;
            let share = remaining_kana * run.len / remaining_kanji;

            // At least one kana while any remain, whatever the policy minimum.
            k + share.max(policy.min_multi_slice).max(1).min(remaining_kana)
        };

        assignments.push(Assignment {
            span: *run,
            reading: kana[k..end].iter().collect(),
        });

        k = end;
    }

    Ok(assignments)
}

/// Exclusive end of the slice for a single-kanji run starting at `start`.
fn single_kanji_end(
    start: usize,
    total: usize,
    kanji_after: usize,
    policy: &SegmentPolicy,
) -> usize {
    let limit = start
        .saturating_add(policy.single_kanji_cap.max(1))
        .min(total);
    let mut current_end = start;

    while current_end < limit {
        let taken_end = current_end + 1;

        if kanji_after > 0 {
            let remaining_kana = total - current_end - 1;
            let ratio = remaining_kana as f64 / kanji_after as f64;

            if ratio < policy.ratio_threshold {
                return taken_end;
            }
        }

        current_end = taken_end;
    }

    current_end
}
