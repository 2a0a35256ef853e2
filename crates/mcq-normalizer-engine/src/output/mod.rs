use mcq_normalizer_config::OptionCapacity;
use serde::Serialize;

use crate::segmenting::Segmentation;

/// Letters used for option slots, in order.
pub const OPTION_LETTERS: [char; 5] = ['a', 'b', 'c', 'd', 'e'];

/// Rendered as its own line when the document is written as plain text.
pub const SECTION_BREAK_TEXT: &str = "\u{c}";

/// One unit handed to the document writer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum OutputBlock {
    Paragraph(String),
    /// Section/page break before the non-MCQ tail.
    SectionBreak,
}

/// The normalized document, ready to be written out in order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NormalizedDocument {
    pub blocks: Vec<OutputBlock>,
}

impl NormalizedDocument {
    fn paragraph(&mut self, text: impl Into<String>) {
        self.blocks.push(OutputBlock::Paragraph(text.into()));
    }

    /// Paragraph texts in order, skipping section breaks.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.blocks.iter().filter_map(|b| match b {
            OutputBlock::Paragraph(text) => Some(text.as_str()),
            OutputBlock::SectionBreak => None,
        })
    }

    /// Plain-text rendering: one paragraph per line, a form feed for the
    /// section break.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for block in &self.blocks {
            match block {
                OutputBlock::Paragraph(text) => out.push_str(text),
                OutputBlock::SectionBreak => out.push_str(SECTION_BREAK_TEXT),
            }
            out.push('\n');
        }
        out
    }
}

/// Write questions out explicitly, followed by the untouched tail.
///
/// Each question becomes `Question N) text`, one `x. option` line per slot,
/// `Answer: x` when an answer is known, and a blank line.
pub fn assemble(segmentation: &Segmentation, capacity: OptionCapacity) -> NormalizedDocument {
    let mut doc = NormalizedDocument::default();

    for question in &segmentation.questions {
        doc.paragraph(format!("Question {}) {}", question.number, question.text));

        let slots = question
            .options
            .iter()
            .map(String::as_str)
            .chain(std::iter::repeat(""));
        for (letter, option) in OPTION_LETTERS.iter().take(capacity.slots()).zip(slots) {
            doc.paragraph(format!("{letter}. {option}"));
        }

        if let Some(answer) = segmentation.answer_for(question) {
            doc.paragraph(format!("Answer: {answer}"));
        }
        doc.paragraph("");
    }

    if !segmentation.tail.is_empty() {
        doc.blocks.push(OutputBlock::SectionBreak);
        for line in &segmentation.tail {
            doc.paragraph(line.clone());
        }
    }

    doc
}
