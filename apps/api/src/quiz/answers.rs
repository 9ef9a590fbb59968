use std::collections::BTreeMap;

use serde::Serialize;

use super::QuizError;
use crate::content::QuestionBank;

/// Per-question recorded choices, keyed by 0-based question index.
pub type AnswerSet = BTreeMap<usize, String>;

/// An answer set holding exactly one valid option per question of its bank.
///
/// Only constructible through validation, so holding one is proof the quiz was completed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FinalizedAnswers {
    answers: AnswerSet,
}

impl FinalizedAnswers {
    pub fn new(bank: &QuestionBank, answers: AnswerSet) -> Result<Self, QuizError> {
        if let Some(&index) = answers.keys().find(|&&i| i >= bank.len()) {
            return Err(QuizError::AnswerOutOfRange(index));
        }
        for (index, question) in bank.questions().iter().enumerate() {
            match answers.get(&index) {
                None => return Err(QuizError::IncompleteAnswers(index)),
                Some(answer) if !question.has_option(answer) => {
                    return Err(QuizError::UnknownOption(answer.clone()))
                }
                Some(_) => {}
            }
        }
        Ok(Self { answers })
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    #[cfg(test)]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.answers.get(&index).map(String::as_str)
    }

    /// Answers in question order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.answers.iter().map(|(i, a)| (*i, a.as_str()))
    }
}
