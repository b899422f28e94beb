pub mod aozora;
pub mod html;

use std::str::FromStr;

use facet::Facet;

use crate::memory::{MemoryBlock, MemoryDocument, RubyParagraph};

pub use aozora::AozoraRenderer;
pub use html::HtmlRenderer;

/// Serializes converted paragraphs into a ruby-aware markup.
pub trait MarkupRenderer {
    fn render_paragraph(&self, paragraph: &RubyParagraph) -> String;

    /// File extension (without the dot) for rendered output.
    fn extension(&self) -> &'static str;
}

#[derive(Facet, Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum OutputFormat {
    Html,
    Aozora,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "html" => Ok(OutputFormat::Html),
            "aozora" => Ok(OutputFormat::Aozora),
            other => Err(format!("Unknown output format: {other}")),
        }
    }
}

impl OutputFormat {
    pub fn renderer(&self) -> Box<dyn MarkupRenderer> {
        match self {
            OutputFormat::Html => Box::new(HtmlRenderer),
            OutputFormat::Aozora => Box::new(AozoraRenderer),
        }
    }
}

/// Render every block of `document`, one line per paragraph.
///
/// Read-only paragraphs and table cells carry no ruby and come out as plain
/// paragraphs, one per cell.
pub fn render_document(document: &MemoryDocument, renderer: &dyn MarkupRenderer) -> String {
    let mut out = String::new();
    let mut push = |paragraph: &RubyParagraph| {
        out.push_str(&renderer.render_paragraph(paragraph));
        out.push('\n');
    };

    for block in document.blocks() {
        match block {
            MemoryBlock::Paragraph(paragraph) => push(paragraph),
            MemoryBlock::ReadOnly(text) => push(&RubyParagraph::new(text)),
            MemoryBlock::Table(cells) => {
                for cell in cells {
                    push(&RubyParagraph::new(cell));
                }
            }
        }
    }

    out
}
