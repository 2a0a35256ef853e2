// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
use mcq_normalizer_engine::models::{Paragraph, SourceDocument};
use mcq_normalizer_engine::numbering::{ListLevelStyle, NumberFormat, NumberingDefinitions};

#[allow(dead_code)]
pub fn generate_quiz_lines(questions: usize) -> Vec<String> {
    let mut lines = vec!["Weekly Quiz".to_string(), String::new()];

    for q in 1..=questions {
        lines.push(format!("{q}. Which of these statements about topic {q} is correct?"));
        for letter in ['a', 'b', 'c', 'd'] {
            lines.push(format!("{letter}) Statement {letter} for question {q}"));
        }
        lines.push(String::new());
    }

    lines.push("Answer Key".to_string());
    for q in 1..=questions {
        lines.push(format!("{q}. {}", ['a', 'b', 'c', 'd'][q % 4]));
    }

    lines.push("Essay Questions".to_string());
    lines.push("1. Summarise the week.".to_string());
    lines
}

#[allow(dead_code)]
pub fn generate_list_document(questions: usize, depth: u8) -> SourceDocument {
    let formats = [
        NumberFormat::Decimal,
        NumberFormat::LowerLetter,
        NumberFormat::LowerRoman,
        NumberFormat::UpperLetter,
    ];
    let levels = (0..depth).map(|level| {
        let format = formats[level as usize % formats.len()].clone();
        (level, ListLevelStyle::new(format, format!("%{}.", level + 1)))
    });
    let numbering = NumberingDefinitions::new().with_list(1, levels);

    let mut paragraphs = Vec::new();
    for q in 0..questions {
        paragraphs.push(Paragraph::numbered(format!("Question body {q}"), 1, 0));
        for level in 1..depth {
            for option in 0..3 {
                paragraphs.push(Paragraph::numbered(format!("Item {option}"), 1, level));
            }
        }
    }

    SourceDocument::new(paragraphs, numbering)
}
