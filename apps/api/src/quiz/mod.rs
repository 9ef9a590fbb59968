//! Quiz state machine: one answer per question, sequential navigation, and a single
//! hand-off of the finalized answer set when the last question is committed.

use thiserror::Error;

pub mod answers;
pub mod machine;

pub use answers::{AnswerSet, FinalizedAnswers};
pub use machine::{Advance, QuizMachine, QuizSnapshot};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QuizError {
    #[error("select an option before continuing")]
    NoSelection,

    #[error("already at the first question")]
    AtFirstQuestion,

    #[error("the quiz is already completed")]
    AlreadyCompleted,

    #[error("the quiz is not open")]
    NotInQuiz,

    #[error("'{0}' is not an option for this question")]
    UnknownOption(String),

    #[error("question {0} has not been answered")]
    IncompleteAnswers(usize),

    #[error("answer recorded for unknown question {0}")]
    AnswerOutOfRange(usize),
}

impl QuizError {
    /// Navigation attempted from a state that does not allow it.
    pub fn is_invalid_transition(&self) -> bool {
        matches!(
            self,
            QuizError::NoSelection
                | QuizError::AtFirstQuestion
                | QuizError::AlreadyCompleted
                | QuizError::NotInQuiz
        )
    }
}
