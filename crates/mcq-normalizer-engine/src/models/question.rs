/// A multiple-choice question recovered from the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// 1-based, assigned in parse order
    pub number: usize,
    pub text: String,
    /// Always exactly the configured number of slots once the question is closed.
    pub options: Vec<String>,
    /// Answer given next to the question itself (`Answer: b`), if any.
    pub answer: Option<char>,
}

impl Question {
    pub fn new(number: usize, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
            options: Vec::new(),
            answer: None,
        }
    }
}

/// Answers read from the answer-key section, in question order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerKey(Vec<char>);

impl AnswerKey {
    pub fn new(answers: Vec<char>) -> Self {
        Self(answers)
    }

    pub fn push(&mut self, answer: char) {
        self.0.push(answer.to_ascii_lowercase());
    }

    /// Answer for a 1-based question number.
    pub fn get(&self, question_number: usize) -> Option<char> {
        question_number
            .checked_sub(1)
            .and_then(|i| self.0.get(i))
            .copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[char] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_key_is_indexed_by_question_number() {
        let mut key = AnswerKey::default();
        key.push('B');
        key.push('d');

        assert_eq!(key.get(0), None);
        assert_eq!(key.get(1), Some('b'));
        assert_eq!(key.get(2), Some('d'));
        assert_eq!(key.get(3), None);
    }
}
