use std::ops::RangeInclusive;

// CJK Unified Ideographs
pub const KANJI_RANGE: RangeInclusive<u32> = 0x4e00..=0x9fff;
pub const HIRAGANA_RANGE: RangeInclusive<u32> = 0x3040..=0x309f;
// Includes the prolonged sound mark (U+30FC)
pub const KATAKANA_RANGE: RangeInclusive<u32> = 0x30a0..=0x30ff;
pub const PROLONGED_SOUND_MARK: char = 'ー';

/// Coarse script class of a single character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Kanji,
    Kana,
    Other,
}

impl CharClass {
    pub fn of(ch: char) -> Self {
        let cp = ch as u32;

        if KANJI_RANGE.contains(&cp) {
            CharClass::Kanji
        } else if HIRAGANA_RANGE.contains(&cp)
            || KATAKANA_RANGE.contains(&cp)
            || ch == PROLONGED_SOUND_MARK
        {
            CharClass::Kana
        } else {
            CharClass::Other
        }
    }
}

pub fn is_kanji(ch: char) -> bool {
    CharClass::of(ch) == CharClass::Kanji
}

pub fn is_kana(ch: char) -> bool {
    CharClass::of(ch) == CharClass::Kana
}

/// Regex character class body for `range`, e.g. `\x{4e00}-\x{9fff}`.
pub(crate) fn class_body(range: &RangeInclusive<u32>) -> String {
    format!("\\x{{{:04x}}}-\\x{{{:04x}}}", range.start(), range.end())
}
