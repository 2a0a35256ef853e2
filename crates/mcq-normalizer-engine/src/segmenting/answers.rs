use std::sync::OnceLock;

use regex::Regex;

use crate::models::AnswerKey;

use super::classify::McqLineClassifier;

fn single_letter_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(?i)\(?([a-e])\)?\.?$").expect("Invalid answer letter regex"))
}

fn numbered_answer_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)(\d+)[.)]?\s*\(?([a-e])\b").expect("Invalid numbered answer regex")
    })
}

fn answer_run_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^(?:\d+[.)]?\s*\(?[a-e]\)?\.?\s*)+$").expect("Invalid answer run regex")
    })
}

fn isolated_letter_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)\b([a-e])\b").expect("Invalid isolated letter regex"))
}

/// Read answers from the lines that follow an "Answer Key" heading.
///
/// Each line is tried in order as a lone letter (`b`) and then as a numbered
/// entry (`3. b`, `3) B`, or several entries on one line: `1. a  2. c`).
/// Answers are taken in the order they appear. Reading stops at the first
/// section marker.
///
/// If no line matches, every isolated `a`-`e` token in the region is taken
/// in order instead, which covers unlabeled lists such as `b, d, a`.
pub fn parse_answer_key(lines: &[String], classifier: &McqLineClassifier) -> AnswerKey {
    let mut key = AnswerKey::default();
    let mut region: Vec<&str> = Vec::new();

    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if classifier.is_section_marker(line) {
            break;
        }
        region.push(line);

        if let Some(answer) = single_letter(line) {
            key.push(answer);
            continue;
        }
        for answer in numbered_answers(line) {
            key.push(answer);
        }
    }

    if key.is_empty() && !region.is_empty() {
        let fallback = isolated_letters(&region.join("\n"));
        if !fallback.is_empty() {
            log::debug!(
                "answer key has no numbered entries, assigning {} bare letters in order",
                fallback.len()
            );
        }
        key = AnswerKey::new(fallback);
    }

    key
}

fn single_letter(line: &str) -> Option<char> {
    let caps = single_letter_regex().captures(line)?;
    letter(caps.get(1)?.as_str())
}

/// Letters from `N. x` entries, only when the line starts with one.
///
/// A line made up entirely of entries (`1. a  2. c`) gives one letter per
/// entry; otherwise only the leading entry counts and the rest is a note.
fn numbered_answers(line: &str) -> Vec<char> {
    let re = numbered_answer_regex();
    let Some(first) = re.captures(line) else {
        return vec![];
    };
    if first.get(0).is_none_or(|m| m.start() != 0) {
        return vec![];
    }
    if !answer_run_regex().is_match(line) {
        return first
            .get(2)
            .and_then(|m| letter(m.as_str()))
            .into_iter()
            .collect();
    }
    re.captures_iter(line)
        .filter_map(|caps| letter(caps.get(2)?.as_str()))
        .collect()
}

fn letter(s: &str) -> Option<char> {
    s.chars().next().map(|c| c.to_ascii_lowercase())
}

fn isolated_letters(text: &str) -> Vec<char> {
    isolated_letter_regex()
        .captures_iter(text)
        .filter_map(|caps| letter(caps.get(1)?.as_str()))
        .collect()
}
