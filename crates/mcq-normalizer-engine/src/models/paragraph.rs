use crate::numbering::NumberingDefinitions;

/// List metadata attached to a paragraph: which list it belongs to and how
/// deeply it is indented within that list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NumberingRef {
    pub list_id: u32,
    /// Zero-based indent level
    pub level: u8,
}

impl NumberingRef {
    pub fn new(list_id: u32, level: u8) -> Self {
        Self { list_id, level }
    }

    /// List id 0 is how word processors mark "numbering removed" on a
    /// paragraph whose style would otherwise number it.
    pub fn is_removed(&self) -> bool {
        self.list_id == 0
    }
}

/// A single paragraph as delivered by the document reader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    pub text: String,
    pub numbering: Option<NumberingRef>,
}

impl Paragraph {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            numbering: None,
        }
    }

    pub fn numbered(text: impl Into<String>, list_id: u32, level: u8) -> Self {
        Self {
            text: text.into(),
            numbering: Some(NumberingRef::new(list_id, level)),
        }
    }

    /// Numbering that should actually render a prefix.
    pub fn effective_numbering(&self) -> Option<NumberingRef> {
        self.numbering.filter(|n| !n.is_removed())
    }
}

/// Everything the normalizer needs from an input document: its paragraphs in
/// order and the list style definitions they refer to.
#[derive(Debug, Clone, Default)]
pub struct SourceDocument {
    pub paragraphs: Vec<Paragraph>,
    pub numbering: NumberingDefinitions,
}

impl SourceDocument {
    pub fn new(paragraphs: Vec<Paragraph>, numbering: NumberingDefinitions) -> Self {
        Self {
            paragraphs,
            numbering,
        }
    }

    /// Build a document of plain paragraphs, one per line.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            paragraphs: lines.into_iter().map(Paragraph::plain).collect(),
            numbering: NumberingDefinitions::default(),
        }
    }
}
