use crate::memory::{Piece, RubyParagraph};

use super::MarkupRenderer;

/// Aozora Bunko notation: `｜base《reading》`.
pub struct AozoraRenderer;

impl MarkupRenderer for AozoraRenderer {
    fn render_paragraph(&self, paragraph: &RubyParagraph) -> String {
        let mut out = String::new();

        for piece in paragraph.pieces() {
            match piece {
                Piece::Plain(text) => out.push_str(&text),
                Piece::Ruby { base, ruby } => {
                    out.push('｜');
                    out.push_str(&base);
                    out.push('《');
                    out.push_str(ruby);
                    out.push('》');
                }
            }
        }

        out
    }

    fn extension(&self) -> &'static str {
        "txt"
    }
}
