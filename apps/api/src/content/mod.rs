//! Static, read-only data collaborators: the quiz question bank and the mentor directory.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod mentors;
pub mod questions;

pub use mentors::{default_mentors, Mentor};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContentError {
    #[error("question bank is empty")]
    EmptyBank,

    #[error("question {0} has no text")]
    BlankQuestion(usize),

    #[error("question {0} must offer at least two options")]
    TooFewOptions(usize),
}

/// A single multiple-choice quiz question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub text: String,
    pub options: Vec<String>,
}

impl Question {
    pub fn new(text: impl Into<String>, options: &[&str]) -> Self {
        Self {
            text: text.into(),
            options: options.iter().map(|o| o.to_string()).collect(),
        }
    }

    pub fn has_option(&self, option: &str) -> bool {
        self.options.iter().any(|o| o == option)
    }
}

/// Immutable, validated set of quiz questions. Cheap to clone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Arc<[Question]>,
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> Result<Self, ContentError> {
        if questions.is_empty() {
            return Err(ContentError::EmptyBank);
        }
        for (index, question) in questions.iter().enumerate() {
            if question.text.trim().is_empty() {
                return Err(ContentError::BlankQuestion(index));
            }
            if question.options.len() < 2 {
                return Err(ContentError::TooFewOptions(index));
            }
        }
        Ok(Self {
            questions: questions.into(),
        })
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_bank_rejected() {
        assert_eq!(QuestionBank::new(vec![]), Err(ContentError::EmptyBank));
    }

    #[test]
    fn test_single_option_question_rejected() {
        let result = QuestionBank::new(vec![
            Question::new("Pick one", &["A", "B"]),
            Question::new("Pick another", &["Only"]),
        ]);
        assert_eq!(result, Err(ContentError::TooFewOptions(1)));
    }

    #[test]
    fn test_blank_question_rejected() {
        let result = QuestionBank::new(vec![Question::new("  ", &["A", "B"])]);
        assert_eq!(result, Err(ContentError::BlankQuestion(0)));
    }

    #[test]
    fn test_has_option_is_exact_match() {
        let question = Question::new("Favourite subject?", &["Math", "Biology"]);
        assert!(question.has_option("Math"));
        assert!(!question.has_option("math"));
    }
}
