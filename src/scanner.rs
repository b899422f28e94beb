use std::str::FromStr;

use facet::Facet;
use regex::Regex;

use crate::chars::{HIRAGANA_RANGE, KANJI_RANGE, KATAKANA_RANGE, class_body};

/// Which base-phrase grammar the scanner accepts in front of a bracket.
#[derive(Facet, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum Grammar {
    /// `Kanji+ Kana*`, full-width or ASCII brackets.
    #[default]
    Broad,
    /// Any mix of kanji and kana with at least one kanji, full-width brackets only.
    Strict,
}

impl FromStr for Grammar {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "broad" => Ok(Grammar::Broad),
            "strict" => Ok(Grammar::Strict),
            other => Err(format!("Unknown grammar: {other}")),
        }
    }
}

/// A `word（reading）` occurrence. Offsets are in code points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub word: String,
    pub reading: String,
    pub word_start: usize,
    pub word_end: usize,
    pub bracket_end: usize,
}

impl Match {
    pub fn bracket_len(&self) -> usize {
        self.bracket_end - self.word_end
    }
}

pub struct Scanner {
    grammar: Grammar,
    pattern: Regex,
}

impl Scanner {
    pub fn new(grammar: Grammar) -> Self {
        let kanji = class_body(&KANJI_RANGE);
        let kana = format!(
            "{}{}ー",
            class_body(&HIRAGANA_RANGE),
            class_body(&KATAKANA_RANGE)
        );

        let source = match grammar {
            Grammar::Broad => {
                format!("([{kanji}]+[{kana}]*)[（(]([{kana}]+)[）)]")
            }
            Grammar::Strict => {
                format!("([{kana}]*[{kanji}][{kanji}{kana}]*)（([{kana}]+)）")
            }
        };

        // Built from fixed character classes only.
        let pattern = Regex::new(&source).expect("furigana pattern is valid");

        Self { grammar, pattern }
    }

    pub fn grammar(&self) -> Grammar {
        self.grammar
    }

    /// Non-overlapping matches in `text`, leftmost first.
    pub fn scan(&self, text: &str) -> Vec<Match> {
        let mut matches = Vec::new();

        // Byte offsets from the regex are turned into code point offsets by
        // walking the text once, left to right.
        let mut byte_cursor = 0;
        let mut char_cursor = 0;

        for caps in self.pattern.captures_iter(text) {
            let (Some(whole), Some(word), Some(reading)) = (caps.get(0), caps.get(1), caps.get(2))
            else {
                continue;
            };

            char_cursor += text[byte_cursor..whole.start()].chars().count();
            byte_cursor = whole.start();

            let word_start = char_cursor;
            let word_end = word_start + word.as_str().chars().count();
            let bracket_end = word_start + whole.as_str().chars().count();

            char_cursor = bracket_end;
            byte_cursor = whole.end();

            matches.push(Match {
                word: word.as_str().to_string(),
                reading: reading.as_str().to_string(),
                word_start,
                word_end,
                bracket_end,
            });
        }

        matches
    }

    pub fn has_match(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new(Grammar::default())
    }
}
