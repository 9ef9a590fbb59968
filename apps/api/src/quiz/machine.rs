use serde::Serialize;
use tracing::debug;

use super::{AnswerSet, FinalizedAnswers, QuizError};
use crate::content::QuestionBank;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "index", rename_all = "snake_case")]
pub enum QuizState {
    AtQuestion(usize),
    Completed,
}

/// Result of a successful `advance`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    Next(usize),
    Completed(FinalizedAnswers),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub current: usize,
    pub total: usize,
}

impl Progress {
    /// `(i + 1) / N`, in `(0, 1]`.
    pub fn fraction(&self) -> f32 {
        self.current as f32 / self.total as f32
    }

    pub fn percent(&self) -> u8 {
        (self.fraction() * 100.0).round() as u8
    }
}

/// Everything a view needs to render the current question.
#[derive(Debug, Clone, Serialize)]
pub struct QuizSnapshot {
    pub state: QuizState,
    pub index: usize,
    pub total: usize,
    pub question: String,
    pub options: Vec<String>,
    pub selected: Option<String>,
    pub can_advance: bool,
    pub can_retreat: bool,
    pub is_last: bool,
    pub progress_percent: u8,
}

#[derive(Debug, Clone)]
pub struct QuizMachine {
    bank: QuestionBank,
    state: QuizState,
    answers: AnswerSet,
    pending: Option<String>,
}

impl QuizMachine {
    pub fn new(bank: QuestionBank) -> Self {
        Self {
            bank,
            state: QuizState::AtQuestion(0),
            answers: AnswerSet::new(),
            pending: None,
        }
    }

    fn current_index(&self) -> Result<usize, QuizError> {
        match self.state {
            QuizState::AtQuestion(i) => Ok(i),
            QuizState::Completed => Err(QuizError::AlreadyCompleted),
        }
    }

    /// Records `option` as the pending choice for the current question. Does not advance.
    pub fn select_option(&mut self, option: &str) -> Result<(), QuizError> {
        let index = self.current_index()?;
        let question = self
            .bank
            .get(index)
            .ok_or(QuizError::AnswerOutOfRange(index))?;
        if !question.has_option(option) {
            return Err(QuizError::UnknownOption(option.to_string()));
        }
        self.pending = Some(option.to_string());
        Ok(())
    }

    /// Commits the pending choice and moves forward. On the last question this
    /// completes the quiz and hands off the finalized answers.
    pub fn advance(&mut self) -> Result<Advance, QuizError> {
        let index = self.current_index()?;
        let choice = self
            .pending
            .take()
            .or_else(|| self.answers.get(&index).cloned())
            .ok_or(QuizError::NoSelection)?;
        self.answers.insert(index, choice);

        if index + 1 < self.bank.len() {
            let next = index + 1;
            self.state = QuizState::AtQuestion(next);
            self.pending = self.answers.get(&next).cloned();
            debug!("Quiz advanced to question {}/{}", next + 1, self.bank.len());
            return Ok(Advance::Next(next));
        }

        let finalized = FinalizedAnswers::new(&self.bank, self.answers.clone())?;
        self.state = QuizState::Completed;
        debug!("Quiz completed with {} answers", finalized.len());
        Ok(Advance::Completed(finalized))
    }

    /// Steps back one question, restoring its recorded answer as the pending choice.
    /// A recorded answer at the question being left stays recorded; an uncommitted
    /// pending choice there is dropped.
    pub fn retreat(&mut self) -> Result<usize, QuizError> {
        let index = self.current_index()?;
        if index == 0 {
            return Err(QuizError::AtFirstQuestion);
        }
        let previous = index - 1;
        self.state = QuizState::AtQuestion(previous);
        self.pending = self.answers.get(&previous).cloned();
        Ok(previous)
    }

    pub fn progress(&self) -> Progress {
        let current = match self.state {
            QuizState::AtQuestion(i) => i + 1,
            QuizState::Completed => self.bank.len(),
        };
        Progress {
            current,
            total: self.bank.len(),
        }
    }

    pub fn snapshot(&self) -> QuizSnapshot {
        let index = match self.state {
            QuizState::AtQuestion(i) => i,
            QuizState::Completed => self.bank.len() - 1,
        };
        let question = self.bank.get(index);
        let in_progress = matches!(self.state, QuizState::AtQuestion(_));
        QuizSnapshot {
            state: self.state,
            index,
            total: self.bank.len(),
            question: question.map(|q| q.text.clone()).unwrap_or_default(),
            options: question.map(|q| q.options.clone()).unwrap_or_default(),
            selected: self.pending.clone(),
            can_advance: in_progress && self.pending.is_some(),
            can_retreat: in_progress && index > 0,
            is_last: index + 1 == self.bank.len(),
            progress_percent: self.progress().percent(),
        }
    }
}

#[cfg(test)]
impl QuizMachine {
    pub fn state(&self) -> QuizState {
        self.state
    }

    pub fn pending(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Question;

    fn two_question_bank() -> QuestionBank {
        QuestionBank::new(vec![
            Question::new("Favourite subject?", &["Math", "Art", "History"]),
            Question::new("Free time?", &["Team sports", "Reading"]),
        ])
        .unwrap()
    }

    fn three_question_bank() -> QuestionBank {
        QuestionBank::new(vec![
            Question::new("Q1", &["a", "b"]),
            Question::new("Q2", &["c", "d"]),
            Question::new("Q3", &["e", "f"]),
        ])
        .unwrap()
    }

    #[test]
    fn test_starts_at_first_question_with_no_answers() {
        let quiz = QuizMachine::new(two_question_bank());
        assert_eq!(quiz.state(), QuizState::AtQuestion(0));
        assert!(quiz.answers().is_empty());
        assert!(quiz.pending().is_none());
    }

    #[test]
    fn test_advance_without_selection_is_invalid() {
        let mut quiz = QuizMachine::new(two_question_bank());
        let err = quiz.advance().unwrap_err();
        assert_eq!(err, QuizError::NoSelection);
        assert!(err.is_invalid_transition());
        assert_eq!(quiz.state(), QuizState::AtQuestion(0));
    }

    #[test]
    fn test_retreat_at_first_question_is_invalid() {
        let mut quiz = QuizMachine::new(two_question_bank());
        assert_eq!(quiz.retreat(), Err(QuizError::AtFirstQuestion));
    }

    #[test]
    fn test_select_does_not_advance() {
        let mut quiz = QuizMachine::new(two_question_bank());
        quiz.select_option("Math").unwrap();
        assert_eq!(quiz.state(), QuizState::AtQuestion(0));
        assert!(quiz.answers().is_empty());
    }

    #[test]
    fn test_last_selection_wins() {
        let mut quiz = QuizMachine::new(two_question_bank());
        quiz.select_option("Math").unwrap();
        quiz.select_option("Art").unwrap();
        quiz.select_option("History").unwrap();
        quiz.advance().unwrap();
        assert_eq!(quiz.answers().get(&0).map(String::as_str), Some("History"));
        assert_eq!(quiz.answers().len(), 1);
    }

    #[test]
    fn test_unknown_option_rejected() {
        let mut quiz = QuizMachine::new(two_question_bank());
        assert_eq!(
            quiz.select_option("Reading"),
            Err(QuizError::UnknownOption("Reading".to_string()))
        );
        assert!(quiz.pending().is_none());
    }

    #[test]
    fn test_completes_with_one_answer_per_question() {
        let mut quiz = QuizMachine::new(two_question_bank());
        quiz.select_option("Math").unwrap();
        assert_eq!(quiz.advance().unwrap(), Advance::Next(1));
        quiz.select_option("Team sports").unwrap();

        match quiz.advance().unwrap() {
            Advance::Completed(answers) => {
                assert_eq!(answers.len(), 2);
                assert_eq!(answers.get(0), Some("Math"));
                assert_eq!(answers.get(1), Some("Team sports"));
            }
            other => panic!("expected completion, got {other:?}"),
        }
        assert_eq!(quiz.state(), QuizState::Completed);
    }

    #[test]
    fn test_no_navigation_after_completion() {
        let mut quiz = QuizMachine::new(two_question_bank());
        quiz.select_option("Math").unwrap();
        quiz.advance().unwrap();
        quiz.select_option("Reading").unwrap();
        quiz.advance().unwrap();

        assert_eq!(quiz.advance(), Err(QuizError::AlreadyCompleted));
        assert_eq!(quiz.retreat(), Err(QuizError::AlreadyCompleted));
        assert_eq!(quiz.select_option("Math"), Err(QuizError::AlreadyCompleted));
    }

    #[test]
    fn test_retreat_restores_previous_answer_and_keeps_current() {
        let mut quiz = QuizMachine::new(three_question_bank());
        quiz.select_option("b").unwrap();
        quiz.advance().unwrap();
        quiz.select_option("c").unwrap();
        quiz.advance().unwrap();

        assert_eq!(quiz.retreat(), Ok(1));
        assert_eq!(quiz.pending(), Some("c"));
        assert_eq!(quiz.retreat(), Ok(0));
        assert_eq!(quiz.pending(), Some("b"));
        assert_eq!(quiz.answers().get(&1).map(String::as_str), Some("c"));

        // Forward again: the next question is pre-seeded with its recorded answer.
        assert_eq!(quiz.advance(), Ok(Advance::Next(1)));
        assert_eq!(quiz.pending(), Some("c"));
    }

    #[test]
    fn test_advance_uses_recorded_answer_when_nothing_pending() {
        let mut quiz = QuizMachine::new(three_question_bank());
        quiz.select_option("a").unwrap();
        quiz.advance().unwrap();
        quiz.retreat().unwrap();
        // Pending is pre-seeded, but clear it to exercise the recorded-answer fallback.
        quiz.pending = None;
        assert_eq!(quiz.advance(), Ok(Advance::Next(1)));
        assert_eq!(quiz.answers().get(&0).map(String::as_str), Some("a"));
    }

    #[test]
    fn test_back_and_forth_still_yields_complete_set() {
        let mut quiz = QuizMachine::new(three_question_bank());
        quiz.select_option("a").unwrap();
        quiz.advance().unwrap();
        quiz.select_option("d").unwrap();
        quiz.retreat().unwrap();
        quiz.select_option("b").unwrap();
        quiz.advance().unwrap();
        // "d" was never committed, so question 2 starts empty again.
        assert_eq!(quiz.pending(), None);
        quiz.select_option("d").unwrap();
        quiz.advance().unwrap();
        quiz.select_option("f").unwrap();

        let Advance::Completed(answers) = quiz.advance().unwrap() else {
            panic!("expected completion");
        };
        let collected: Vec<_> = answers.iter().collect();
        assert_eq!(collected, vec![(0, "b"), (1, "d"), (2, "f")]);
    }

    #[test]
    fn test_progress_tracks_position() {
        let mut quiz = QuizMachine::new(three_question_bank());
        assert_eq!(quiz.progress(), Progress { current: 1, total: 3 });
        assert_eq!(quiz.progress().percent(), 33);
        quiz.select_option("a").unwrap();
        quiz.advance().unwrap();
        assert_eq!(quiz.progress().percent(), 67);
        quiz.select_option("c").unwrap();
        quiz.advance().unwrap();
        assert_eq!(quiz.progress().percent(), 100);
    }

    #[test]
    fn test_snapshot_reflects_controls() {
        let mut quiz = QuizMachine::new(two_question_bank());
        let snap = quiz.snapshot();
        assert!(!snap.can_advance);
        assert!(!snap.can_retreat);
        assert!(!snap.is_last);
        assert_eq!(snap.options.len(), 3);

        quiz.select_option("Art").unwrap();
        quiz.advance().unwrap();
        let snap = quiz.snapshot();
        assert_eq!(snap.question, "Free time?");
        assert!(snap.can_retreat);
        assert!(snap.is_last);
        assert!(!snap.can_advance);
    }
}
