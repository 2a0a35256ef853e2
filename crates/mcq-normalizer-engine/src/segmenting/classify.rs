use std::sync::OnceLock;

use regex::Regex;

/// What a single line looks like, judged from the line alone.
///
/// This is phase 1 of segmentation: each line is classified independently;
/// whether a numbered line is an option or a new question is decided later
/// by the builder, which knows what is open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// Empty or whitespace only.
    Blank,
    /// Start of an essay/true-false/short-answer section.
    SectionMarker,
    /// The "Answer Key" heading.
    AnswerKeyMarker,
    /// `Question 3) text`, `Question: text`
    QuestionHeading { text: String },
    /// `Answer: b` written next to a question.
    InlineAnswer { letter: char },
    /// `a. text`, `(b) text`, `E)`
    LetterOption { letter: char, text: String },
    /// `3. text`, `12) text`
    NumberedItem { text: String },
    /// Anything else.
    Text(String),
}

/// Result of classifying one line, with the name of the rule that matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineClass {
    pub rule: &'static str,
    pub kind: LineKind,
}

pub type Rule = fn(&McqLineClassifier, &str) -> Option<LineKind>;

/// Classification rules in precedence order. The first rule that matches wins.
pub const CLASSIFIERS: &[(&str, Rule)] = &[
    ("blank", McqLineClassifier::blank),
    ("section_marker", McqLineClassifier::section_marker),
    ("answer_key_marker", McqLineClassifier::answer_key_marker),
    ("question_heading", McqLineClassifier::question_heading),
    ("inline_answer", McqLineClassifier::inline_answer),
    ("letter_option", McqLineClassifier::letter_option),
    ("numbered_item", McqLineClassifier::numbered_item),
    ("text", McqLineClassifier::text),
];

fn section_marker_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)essay|true\s*or\s*false|true\s*/\s*false|short\s*answer|long\s*answer")
            .expect("Invalid section marker regex")
    })
}

fn answer_key_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)^answer\s*keys?\b").expect("Invalid answer key regex"))
}

fn question_heading_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^question\s*(?:\d{1,6})?\b\s*[.):\-]?\s*(.*)$")
            .expect("Invalid question heading regex")
    })
}

fn inline_answer_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^(?:correct\s+)?(?:answer|ans)\s*[:.\-)]\s*\(?([a-e])\)?\.?$")
            .expect("Invalid inline answer regex")
    })
}

fn letter_option_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\(?([a-eA-E])[.)](?:\s+(.*))?$").expect("Invalid letter option regex")
    })
}

fn numbered_item_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\d{1,6}[.)]\s*([^\s\p{P}].*)$").expect("Invalid numbered item regex")
    })
}

/// Classifies flattened lines of a quiz document.
#[derive(Debug, Clone, Default)]
pub struct McqLineClassifier {
    /// Lowercased extra section phrases from configuration.
    extra_markers: Vec<String>,
}

impl McqLineClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_extra_markers<I, S>(markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            extra_markers: markers
                .into_iter()
                .map(|m| m.as_ref().trim().to_lowercase())
                .filter(|m| !m.is_empty())
                .collect(),
        }
    }

    /// Classify a line by running [`CLASSIFIERS`] in order.
    pub fn classify(&self, line: &str) -> LineClass {
        let trimmed = line.trim();
        for &(rule, classify) in CLASSIFIERS {
            if let Some(kind) = classify(self, trimmed) {
                return LineClass { rule, kind };
            }
        }
        // `text` always matches; kept for exhaustiveness.
        LineClass {
            rule: "text",
            kind: LineKind::Text(trimmed.to_string()),
        }
    }

    pub fn is_section_marker(&self, line: &str) -> bool {
        self.section_marker(line.trim()).is_some()
    }

    fn blank(&self, line: &str) -> Option<LineKind> {
        line.is_empty().then_some(LineKind::Blank)
    }

    fn section_marker(&self, line: &str) -> Option<LineKind> {
        if section_marker_regex().is_match(line) {
            return Some(LineKind::SectionMarker);
        }
        if self.extra_markers.is_empty() {
            return None;
        }
        let lower = line.to_lowercase();
        self.extra_markers
            .iter()
            .any(|m| lower.contains(m.as_str()))
            .then_some(LineKind::SectionMarker)
    }

    fn answer_key_marker(&self, line: &str) -> Option<LineKind> {
        answer_key_regex()
            .is_match(line)
            .then_some(LineKind::AnswerKeyMarker)
    }

    fn question_heading(&self, line: &str) -> Option<LineKind> {
        let caps = question_heading_regex().captures(line)?;
        let text = caps.get(1).map_or("", |m| m.as_str()).trim().to_string();
        Some(LineKind::QuestionHeading { text })
    }

    fn inline_answer(&self, line: &str) -> Option<LineKind> {
        let caps = inline_answer_regex().captures(line)?;
        let letter = first_char_lower(caps.get(1)?.as_str())?;
        Some(LineKind::InlineAnswer { letter })
    }

    fn letter_option(&self, line: &str) -> Option<LineKind> {
        let caps = letter_option_regex().captures(line)?;
        let letter = first_char_lower(caps.get(1)?.as_str())?;
        let text = caps.get(2).map_or("", |m| m.as_str()).trim().to_string();
        Some(LineKind::LetterOption { letter, text })
    }

    fn numbered_item(&self, line: &str) -> Option<LineKind> {
        let caps = numbered_item_regex().captures(line)?;
        let text = caps.get(1)?.as_str().trim().to_string();
        Some(LineKind::NumberedItem { text })
    }

    fn text(&self, line: &str) -> Option<LineKind> {
        Some(LineKind::Text(line.to_string()))
    }
}

fn first_char_lower(s: &str) -> Option<char> {
    s.chars().next().map(|c| c.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn rule_for(line: &str) -> &'static str {
        McqLineClassifier::new().classify(line).rule
    }

    #[rstest]
    #[case("", "blank")]
    #[case("   \t", "blank")]
    #[case("Essay Type Questions", "section_marker")]
    #[case("SECTION B: TRUE OR FALSE", "section_marker")]
    #[case("True/False", "section_marker")]
    #[case("Short Answer Questions", "section_marker")]
    #[case("long answer", "section_marker")]
    #[case("Answer Key", "answer_key_marker")]
    #[case("ANSWER KEY:", "answer_key_marker")]
    #[case("Answer keys", "answer_key_marker")]
    #[case("Question 1) Capital of France?", "question_heading")]
    #[case("Question: Which is largest?", "question_heading")]
    #[case("question12. Pick one", "question_heading")]
    #[case("Answer: b", "inline_answer")]
    #[case("Ans - (C)", "inline_answer")]
    #[case("a. Paris", "letter_option")]
    #[case("(B) Lyon", "letter_option")]
    #[case("e.", "letter_option")]
    #[case("3. What is the boiling point?", "numbered_item")]
    #[case("12) Pick the odd one out", "numbered_item")]
    #[case("1.", "text")]
    #[case("1) ...", "text")]
    #[case("Questions follow below", "text")]
    #[case("a.m. is before noon", "text")]
    #[case("f. not an option letter", "text")]
    #[case("Answers are discussed in class", "text")]
    fn classifier_precedence(#[case] line: &str, #[case] expected: &str) {
        assert_eq!(rule_for(line), expected);
    }

    #[test]
    fn section_marker_beats_question_heading() {
        // A question mentioning an essay still ends the multiple-choice part
        assert_eq!(rule_for("Question 9) Write an essay on rivers"), "section_marker");
    }

    #[test]
    fn question_heading_strips_marker() {
        let c = McqLineClassifier::new();
        assert_eq!(
            c.classify("Question 1) Capital of France?").kind,
            LineKind::QuestionHeading {
                text: "Capital of France?".to_string()
            }
        );
        assert_eq!(
            c.classify("  Question: Largest planet?").kind,
            LineKind::QuestionHeading {
                text: "Largest planet?".to_string()
            }
        );
    }

    #[test]
    fn options_are_lowercased_and_trimmed() {
        let c = McqLineClassifier::new();
        assert_eq!(
            c.classify("C)   Nice ").kind,
            LineKind::LetterOption {
                letter: 'c',
                text: "Nice".to_string()
            }
        );
        assert_eq!(
            c.classify("e. ").kind,
            LineKind::LetterOption {
                letter: 'e',
                text: String::new()
            }
        );
    }

    #[test]
    fn numbered_item_strips_number() {
        let c = McqLineClassifier::new();
        assert_eq!(
            c.classify("7. Which metal is liquid?").kind,
            LineKind::NumberedItem {
                text: "Which metal is liquid?".to_string()
            }
        );
    }

    #[test]
    fn extra_markers_extend_vocabulary() {
        let c = McqLineClassifier::with_extra_markers(["Match the Following", " "]);
        assert_eq!(c.classify("Part C - match the following").kind, LineKind::SectionMarker);
        assert!(c.is_section_marker("  Essay  "));
        assert!(!c.is_section_marker("a. Paris"));
    }

    #[test]
    fn every_rule_name_is_unique() {
        let mut names: Vec<_> = CLASSIFIERS.iter().map(|(n, _)| *n).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), CLASSIFIERS.len());
    }
}
