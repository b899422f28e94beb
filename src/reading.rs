use std::str::FromStr;

use facet::Facet;
#[cfg(feature = "romaji")]
use wana_kana::ConvertJapanese;

/// How an assigned reading slice is written into the ruby text.
#[derive(Facet, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum ReadingStyle {
    /// Exactly as written inside the brackets.
    #[default]
    Kana,
    /// Katakana folded to hiragana.
    #[cfg(feature = "romaji")]
    Hiragana,
    #[cfg(feature = "romaji")]
    Romaji,
}

impl FromStr for ReadingStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "kana" => Ok(ReadingStyle::Kana),
            #[cfg(feature = "romaji")]
            "hiragana" => Ok(ReadingStyle::Hiragana),
            #[cfg(feature = "romaji")]
            "romaji" => Ok(ReadingStyle::Romaji),
            other => Err(format!("Unknown reading style: {other}")),
        }
    }
}

impl ReadingStyle {
    pub fn apply(&self, reading: &str) -> String {
        match self {
            ReadingStyle::Kana => reading.to_string(),
            #[cfg(feature = "romaji")]
            ReadingStyle::Hiragana => reading.to_hiragana(),
            #[cfg(feature = "romaji")]
            ReadingStyle::Romaji => {
                let romaji = reading.to_romaji();

                // A lone prolonged sound mark has no romanization of its own.
                if romaji.is_empty() || romaji == "-" {
                    reading.to_string()
                } else {
                    romaji
                }
            }
        }
    }
}
