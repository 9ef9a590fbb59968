use super::{Question, QuestionBank};

impl QuestionBank {
    /// The built-in career-interest quiz.
    pub fn default_bank() -> Self {
        Self::new(default_questions()).expect("built-in question bank must be valid")
    }
}

fn default_questions() -> Vec<Question> {
    vec![
        Question::new(
            "Which school subject do you enjoy the most?",
            &[
                "Math",
                "Science",
                "Languages and literature",
                "Art and design",
                "Social studies",
            ],
        ),
        Question::new(
            "How do you prefer to spend your free time?",
            &[
                "Solving puzzles or coding",
                "Reading or writing",
                "Team sports",
                "Drawing, music or crafts",
                "Helping out in the community",
            ],
        ),
        Question::new(
            "Which kind of work environment sounds best to you?",
            &[
                "A quiet office or lab",
                "Outdoors or on the move",
                "A busy team workspace",
                "Working from home",
            ],
        ),
        Question::new(
            "What kind of problem would you most like to solve?",
            &[
                "Building technology people use every day",
                "Keeping people healthy",
                "Helping businesses grow",
                "Teaching and guiding others",
                "Protecting the environment",
            ],
        ),
        Question::new(
            "How do you usually make decisions?",
            &[
                "With data and careful analysis",
                "By trusting my instincts",
                "By talking it over with others",
                "By following proven rules",
            ],
        ),
        Question::new(
            "Which skill would you most like to get better at?",
            &[
                "Programming",
                "Public speaking",
                "Managing money",
                "Creative design",
                "Leading a team",
            ],
        ),
        Question::new(
            "What matters most to you in a future job?",
            &[
                "A high salary",
                "Job security",
                "Making a difference",
                "Creative freedom",
                "Working close to home",
            ],
        ),
    ]
}
