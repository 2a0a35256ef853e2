//! # MCQ Segmentation
//!
//! Splits the flattened lines of a quiz document into questions, an answer
//! key and a verbatim tail.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line becomes a `LineKind`
//!    from an ordered table of named rules (`CLASSIFIERS`)
//! 2. **Question Construction** (`builder`): `QuestionBuilder` walks the
//!    classified lines up to the answer key or the first section marker
//! 3. **Answer Key** (`answers`): lines after the "Answer Key" heading are
//!    read into an `AnswerKey`
//!
//! ## Document Regions
//!
//! ```text
//! preamble / questions ... | Answer Key ... | Essay Questions ... (tail)
//! ```
//!
//! The tail starts at the first section marker, or at the first line of a
//! wrapped question whose joined text reads as one. It is never scanned for
//! questions or answers.

pub mod answers;
pub mod builder;
pub mod classify;

pub use answers::parse_answer_key;
pub use builder::{QuestionBuilder, Step};
pub use classify::{CLASSIFIERS, LineClass, LineKind, McqLineClassifier};

use mcq_normalizer_config::Config;
use crate::models::{AnswerKey, Question};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segmentation {
    pub questions: Vec<Question>,
    pub answers: AnswerKey,
    /// Whether an "Answer Key" heading was present at all.
    pub answer_key_found: bool,
    /// Lines from the first section marker to the end, untouched.
    pub tail: Vec<String>,
}

impl Segmentation {
    /// Answer for a question: the answer key entry, else the inline answer.
    pub fn answer_for(&self, question: &Question) -> Option<char> {
        self.answers.get(question.number).or(question.answer)
    }
}

pub fn segment(lines: &[String], config: &Config) -> Segmentation {
    let classifier = McqLineClassifier::with_extra_markers(&config.extra_section_markers);
    let kinds: Vec<LineKind> = lines.iter().map(|l| classifier.classify(l).kind).collect();

    let marker_line = kinds
        .iter()
        .position(|k| matches!(k, LineKind::SectionMarker));

    let mut builder = QuestionBuilder::new(config.option_capacity.slots(), &classifier);
    for kind in &kinds[..marker_line.unwrap_or(lines.len())] {
        if builder.push(kind) == Step::Stop {
            break;
        }
    }
    let tail_start = builder.section_start().or(marker_line);
    let questions = builder.finish();

    let mcq_end = tail_start.unwrap_or(lines.len());
    let key_start = kinds[..mcq_end]
        .iter()
        .position(|k| matches!(k, LineKind::AnswerKeyMarker));

    let answers = match key_start {
        Some(i) => parse_answer_key(&lines[i + 1..mcq_end], &classifier),
        None => AnswerKey::default(),
    };

    let tail = tail_start.map(|i| lines[i..].to_vec()).unwrap_or_default();

    Segmentation {
        questions,
        answers,
        answer_key_found: key_start.is_some(),
        tail,
    }
}
