use crate::models::Question;

use super::classify::{LineKind, McqLineClassifier};

/// How the open question was introduced. Decides what a numbered line means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Heading {
    /// `Question 1) ...`: numbered lines that follow are options.
    Keyword,
    /// `1. ...`: the next numbered line is the next question.
    Numbered,
}

#[derive(Debug)]
struct OpenQuestion {
    question: Question,
    heading: Heading,
    /// Index of the line that opened the question.
    first_line: usize,
    /// Set once an option was dropped for lack of capacity; its continuation
    /// lines are dropped with it.
    overflowed: bool,
}

#[derive(Debug)]
enum State {
    NoOpenQuestion,
    QuestionOpen(OpenQuestion),
    Done,
}

/// Whether the builder wants more lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Stop,
}

/// State machine that assembles questions from classified lines.
///
/// Feeds on the multiple-choice part of a document and stops at the first
/// section marker or answer-key heading. A question whose wrapped text only
/// reads as a section marker once joined (`true` / `or false?`) is not kept:
/// the non-MCQ section starts at its first line, see [`Self::section_start`].
pub struct QuestionBuilder<'a> {
    classifier: &'a McqLineClassifier,
    capacity: usize,
    state: State,
    next_number: usize,
    /// Index of the next line pushed.
    position: usize,
    section_start: Option<usize>,
    out: Vec<Question>,
}

impl<'a> QuestionBuilder<'a> {
    pub fn new(capacity: usize, classifier: &'a McqLineClassifier) -> Self {
        Self {
            classifier,
            capacity,
            state: State::NoOpenQuestion,
            next_number: 1,
            position: 0,
            section_start: None,
            out: vec![],
        }
    }

    pub fn push(&mut self, line: &LineKind) -> Step {
        if matches!(self.state, State::Done) {
            return Step::Stop;
        }
        let index = self.position;
        self.position += 1;
        self.dispatch(line, index)
    }

    /// Line index where a joined question turned out to open a non-MCQ
    /// section.
    pub fn section_start(&self) -> Option<usize> {
        self.section_start
    }

    pub fn finish(mut self) -> Vec<Question> {
        // EOF flush
        self.close_question();
        self.out
    }

    fn dispatch(&mut self, line: &LineKind, index: usize) -> Step {
        match self.state {
            State::Done => Step::Stop,
            State::NoOpenQuestion => self.push_without_question(line, index),
            State::QuestionOpen(_) => self.push_into_question(line, index),
        }
    }

    fn push_without_question(&mut self, line: &LineKind, index: usize) -> Step {
        match line {
            LineKind::SectionMarker | LineKind::AnswerKeyMarker => {
                self.state = State::Done;
                Step::Stop
            }
            LineKind::QuestionHeading { text } => {
                self.open_question(text, Heading::Keyword, index);
                Step::Continue
            }
            LineKind::NumberedItem { text } => {
                self.open_question(text, Heading::Numbered, index);
                Step::Continue
            }
            LineKind::LetterOption { letter, text } => {
                log::debug!("ignoring option {letter}) {text:?} outside any question");
                Step::Continue
            }
            LineKind::Blank | LineKind::InlineAnswer { .. } | LineKind::Text(_) => Step::Continue,
        }
    }

    fn push_into_question(&mut self, line: &LineKind, index: usize) -> Step {
        let State::QuestionOpen(open) = &mut self.state else {
            return Step::Continue;
        };
        let capacity = self.capacity;

        match line {
            LineKind::Blank => {}
            LineKind::SectionMarker | LineKind::AnswerKeyMarker => {
                self.close_question();
                self.state = State::Done;
                return Step::Stop;
            }
            LineKind::QuestionHeading { .. } => return self.reopen_with(line, index),
            LineKind::NumberedItem { .. } if open.heading == Heading::Numbered => {
                return self.reopen_with(line, index);
            }
            LineKind::NumberedItem { text } | LineKind::LetterOption { text, .. } => {
                add_option(open, text, capacity);
            }
            LineKind::InlineAnswer { letter } => open.question.answer = Some(*letter),
            LineKind::Text(text) => {
                if continue_last(open, text, self.classifier) == Joined::SectionMarker {
                    return self.split_section();
                }
            }
        }
        Step::Continue
    }

    /// Close the open question and process `line` again with nothing open.
    fn reopen_with(&mut self, line: &LineKind, index: usize) -> Step {
        self.close_question();
        self.dispatch(line, index)
    }

    /// Drop the open question and stop; the non-MCQ section starts at its
    /// first line.
    fn split_section(&mut self) -> Step {
        if let State::QuestionOpen(open) = std::mem::replace(&mut self.state, State::Done) {
            log::debug!(
                "question {} reads as a section heading once joined, starting the tail there",
                open.question.number
            );
            self.next_number = open.question.number;
            self.section_start = Some(open.first_line);
        }
        Step::Stop
    }

    fn open_question(&mut self, text: &str, heading: Heading, first_line: usize) {
        let question = Question::new(self.next_number, text);
        self.next_number += 1;
        self.state = State::QuestionOpen(OpenQuestion {
            question,
            heading,
            first_line,
            overflowed: false,
        });
    }

    fn close_question(&mut self) {
        let prev = std::mem::replace(&mut self.state, State::NoOpenQuestion);
        match prev {
            State::QuestionOpen(mut open) => {
                open.question.options.resize(self.capacity, String::new());
                self.out.push(open.question);
            }
            other => self.state = other, // keep Done
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Joined {
    Text,
    SectionMarker,
}

fn add_option(open: &mut OpenQuestion, text: &str, capacity: usize) {
    if open.question.options.len() < capacity {
        open.question.options.push(text.to_string());
        open.overflowed = false;
    } else {
        log::debug!(
            "question {} already has {capacity} options, dropping {text:?}",
            open.question.number
        );
        open.overflowed = true;
    }
}

/// Append a wrapped line to the last option, or to the question text when
/// no option has been seen yet.
fn continue_last(open: &mut OpenQuestion, text: &str, classifier: &McqLineClassifier) -> Joined {
    if open.overflowed {
        return Joined::Text;
    }
    let target = match open.question.options.last_mut() {
        Some(option) => option,
        None => &mut open.question.text,
    };
    if !target.is_empty() {
        target.push(' ');
    }
    target.push_str(text);

    if classifier.is_section_marker(target) {
        Joined::SectionMarker
    } else {
        Joined::Text
    }
}
