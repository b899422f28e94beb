use crate::memory::{Piece, RubyParagraph};

use super::MarkupRenderer;

pub struct HtmlRenderer;

fn escape(text: &str, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}

impl MarkupRenderer for HtmlRenderer {
    fn render_paragraph(&self, paragraph: &RubyParagraph) -> String {
        let mut out = String::from("<p>");

        for piece in paragraph.pieces() {
            match piece {
                Piece::Plain(text) => escape(&text, &mut out),
                Piece::Ruby { base, ruby } => {
                    out.push_str("<ruby>");
                    escape(&base, &mut out);
                    // <rp> keeps the reading readable where ruby is unsupported.
                    out.push_str("<rp>（</rp><rt>");
                    escape(ruby, &mut out);
                    out.push_str("</rt><rp>）</rp></ruby>");
                }
            }
        }

        out.push_str("</p>");
        out
    }

    fn extension(&self) -> &'static str {
        "html"
    }
}
