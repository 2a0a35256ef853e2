//! # List Numbering
//!
//! Word processors render list prefixes ("1.", "b)", "iv.", "•") from list
//! metadata rather than storing them as text. This module rebuilds those
//! prefixes so later stages can work on plain lines.
//!
//! ## Modules
//!
//! - **`styles`**: `NumberFormat`, `ListLevelStyle`, the `StyleLookup` seam and
//!   `NumberingDefinitions` (list instance -> abstract definition -> level)
//! - **`counters`**: `ListCounters`, per-list per-level running counts with
//!   restart-on-shallower-level semantics
//! - **`render`**: counter value to decimal/letter/roman text, bullet glyphs
//! - **`resolver`**: `resolve_prefix`, one numbered paragraph to its prefix
//!
//! ## Key Invariants
//!
//! - Counter state is explicit and owned by a single document pass
//! - Every numbered paragraph advances exactly one counter by exactly one
//! - Resolution never fails; missing styles degrade to `"N. "`

pub mod counters;
pub mod render;
pub mod resolver;
pub mod styles;

pub use counters::ListCounters;
pub use resolver::resolve_prefix;
pub use styles::{ListLevelStyle, NumberFormat, NumberingDefinitions, StyleLookup};

use crate::models::Paragraph;

/// Flatten paragraphs into lines with their list prefixes written out.
///
/// Paragraphs holding soft line breaks become several lines; the prefix goes
/// on the first.
pub fn flatten_paragraphs<S>(paragraphs: &[Paragraph], styles: &S) -> Vec<String>
where
    S: StyleLookup + ?Sized,
{
    let mut counters = ListCounters::new();
    let mut lines = Vec::with_capacity(paragraphs.len());

    for p in paragraphs {
        let text = match p.effective_numbering() {
            Some(numbering) => {
                let prefix = resolve_prefix(numbering, styles, &mut counters);
                format!("{prefix}{}", p.text)
            }
            None => p.text.clone(),
        };
        push_split_lines(&text, &mut lines);
    }

    lines
}

fn push_split_lines(text: &str, lines: &mut Vec<String>) {
    let text = text.replace("\r\n", "\n");
    lines.extend(text.split(['\n', '\r', '\u{b}']).map(str::to_string));
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn defs() -> NumberingDefinitions {
        NumberingDefinitions::new().with_list(
            1,
            [
                (0, ListLevelStyle::new(NumberFormat::Decimal, "%1.")),
                (1, ListLevelStyle::new(NumberFormat::LowerLetter, "%2.")),
            ],
        )
    }

    #[test]
    fn prefixes_numbered_paragraphs_only() {
        let paragraphs = vec![
            Paragraph::plain("Chemistry Quiz"),
            Paragraph::numbered("Symbol for gold?", 1, 0),
            Paragraph::numbered("Au", 1, 1),
            Paragraph::numbered("Ag", 1, 1),
            Paragraph::numbered("Symbol for iron?", 1, 0),
            Paragraph::numbered("Fe", 1, 1),
        ];

        let lines = flatten_paragraphs(&paragraphs, &defs());

        assert_eq!(
            lines,
            vec![
                "Chemistry Quiz",
                "1. Symbol for gold?",
                "a. Au",
                "b. Ag",
                "2. Symbol for iron?",
                "a. Fe",
            ]
        );
    }

    #[test]
    fn ignores_gaps_in_source_numbering() {
        // Literal numbers typed by the author are not what the list renders
        let paragraphs = vec![
            Paragraph::numbered("first", 1, 0),
            Paragraph::plain(""),
            Paragraph::numbered("second", 1, 0),
            Paragraph::numbered("third", 1, 0),
        ];

        let lines = flatten_paragraphs(&paragraphs, &defs());

        assert_eq!(lines, vec!["1. first", "", "2. second", "3. third"]);
    }

    #[test]
    fn removed_numbering_renders_plain() {
        let paragraphs = vec![Paragraph::numbered("plain after all", 0, 0)];
        assert_eq!(flatten_paragraphs(&paragraphs, &defs()), vec!["plain after all"]);
    }

    #[test]
    fn soft_breaks_split_into_lines() {
        let paragraphs = vec![Paragraph::numbered("Which gas?\r\na) O2\nb) N2", 1, 0)];

        let lines = flatten_paragraphs(&paragraphs, &defs());

        assert_eq!(lines, vec!["1. Which gas?", "a) O2", "b) N2"]);
    }
}
