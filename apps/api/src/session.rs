//! Session — explicit state and transitions for the whole interactive flow.
//!
//! `Session::handle` is synchronous and side-effect free apart from its own state:
//! anything that has to leave the process (the recommendation call, writing the
//! theme) is returned as a `Command` for the caller to execute. Outcomes come back
//! in as events.

use serde::Serialize;
use tracing::{debug, info};

use crate::content::{Mentor, QuestionBank};
use crate::navigation::{resolve_route, Navigation, Route};
use crate::preferences::Theme;
use crate::quiz::{Advance, FinalizedAnswers, QuizError, QuizMachine, QuizSnapshot};
use crate::recommendation::{
    CareerPath, Orchestrator, RecommendationError, RecommendationResult, RecommendationState,
    VisitId,
};

#[derive(Debug, Clone)]
pub enum Event {
    Navigate(String),
    SelectOption(String),
    Advance,
    Retreat,
    ToggleTheme,
    RecommendationResolved {
        visit: VisitId,
        outcome: Result<RecommendationResult, RecommendationError>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    FetchRecommendations {
        visit: VisitId,
        answers: FinalizedAnswers,
    },
    /// Write the session's current theme to the preference store.
    PersistTheme,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum ViewModel {
    Home,
    Quiz {
        quiz: QuizSnapshot,
    },
    Dashboard {
        #[serde(flatten)]
        dashboard: DashboardView,
    },
    Mentors {
        mentors: Vec<Mentor>,
    },
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DashboardView {
    Loading,
    Failed { code: String, message: String },
    Ready { careers: Vec<CareerPath> },
}

/// Full render payload: the route to show, the view for it, and the theme.
#[derive(Debug, Clone, Serialize)]
pub struct Screen {
    pub route: &'static str,
    pub redirected: bool,
    pub theme: Theme,
    #[serde(flatten)]
    pub view: ViewModel,
}

pub struct Session {
    bank: QuestionBank,
    mentors: Vec<Mentor>,
    recommendations_enabled: bool,
    route: Route,
    redirected: bool,
    quiz: QuizMachine,
    answers: Option<FinalizedAnswers>,
    orchestrator: Orchestrator,
    theme: Theme,
}

impl Session {
    pub fn new(
        bank: QuestionBank,
        mentors: Vec<Mentor>,
        recommendations_enabled: bool,
        theme: Theme,
    ) -> Self {
        Self {
            quiz: QuizMachine::new(bank.clone()),
            bank,
            mentors,
            recommendations_enabled,
            route: Route::Home,
            redirected: false,
            answers: None,
            orchestrator: Orchestrator::new(),
            theme,
        }
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn mentors(&self) -> &[Mentor] {
        &self.mentors
    }

    #[cfg(test)]
    pub fn answers(&self) -> Option<&FinalizedAnswers> {
        self.answers.as_ref()
    }

    #[cfg(test)]
    pub fn recommendations(&self) -> &RecommendationState {
        self.orchestrator.state()
    }

    pub fn quiz(&self) -> &QuizMachine {
        &self.quiz
    }

    /// Applies one event. Quiz errors are returned unchanged and leave state untouched.
    pub fn handle(&mut self, event: Event) -> Result<Vec<Command>, QuizError> {
        match event {
            Event::Navigate(token) => Ok(self.navigate(Route::parse(&token))),
            Event::SelectOption(option) => {
                self.require_quiz_view()?;
                self.quiz.select_option(&option)?;
                Ok(vec![])
            }
            Event::Advance => {
                self.require_quiz_view()?;
                match self.quiz.advance()? {
                    Advance::Next(_) => Ok(vec![]),
                    Advance::Completed(answers) => {
                        info!("Quiz completed; submitting {} answers", answers.len());
                        self.answers = Some(answers);
                        Ok(self.navigate(Route::Dashboard))
                    }
                }
            }
            Event::Retreat => {
                self.require_quiz_view()?;
                self.quiz.retreat()?;
                Ok(vec![])
            }
            Event::ToggleTheme => {
                self.theme = self.theme.toggled();
                debug!("Theme toggled to {}", self.theme);
                Ok(vec![Command::PersistTheme])
            }
            Event::RecommendationResolved { visit, outcome } => {
                self.orchestrator.resolve(visit, outcome);
                Ok(vec![])
            }
        }
    }

    fn require_quiz_view(&self) -> Result<(), QuizError> {
        if self.route == Route::Quiz {
            Ok(())
        } else {
            Err(QuizError::NotInQuiz)
        }
    }

    fn navigate(&mut self, requested: Route) -> Vec<Command> {
        let Navigation { route, redirected } = resolve_route(requested, self.answers.is_some());
        self.redirected = redirected;
        if redirected {
            info!(
                "Redirecting {} to {}: no finalized answers",
                requested.token(),
                route.token()
            );
        }

        let previous = self.route;
        self.route = route;

        // Re-navigating to the current view keeps it as is: no quiz reset and no
        // second request for an in-flight dashboard visit.
        if previous == route {
            return vec![];
        }
        if previous == Route::Dashboard {
            self.orchestrator.abandon();
        }

        match route {
            Route::Quiz => {
                self.quiz = QuizMachine::new(self.bank.clone());
                vec![]
            }
            Route::Dashboard => self.start_visit(),
            Route::Home | Route::Mentors => vec![],
        }
    }

    fn start_visit(&mut self) -> Vec<Command> {
        let Some(answers) = self.answers.clone() else {
            return vec![];
        };
        if !self.recommendations_enabled {
            self.orchestrator
                .begin_failed(RecommendationError::ConfigurationMissing);
            return vec![];
        }
        let visit = self.orchestrator.begin();
        debug!("Dashboard visit {visit} started");
        vec![Command::FetchRecommendations { visit, answers }]
    }

    pub fn view(&self) -> ViewModel {
        match self.route {
            Route::Home => ViewModel::Home,
            Route::Quiz => ViewModel::Quiz {
                quiz: self.quiz.snapshot(),
            },
            Route::Mentors => ViewModel::Mentors {
                mentors: self.mentors.clone(),
            },
            Route::Dashboard => ViewModel::Dashboard {
                dashboard: match self.orchestrator.state() {
                    // Idle never coexists with the dashboard route; render as loading.
                    RecommendationState::Idle | RecommendationState::Loading => {
                        DashboardView::Loading
                    }
                    RecommendationState::Failed { error } => DashboardView::Failed {
                        code: error.code().to_string(),
                        message: error.user_message().to_string(),
                    },
                    RecommendationState::Ready { result } => DashboardView::Ready {
                        careers: result.careers.clone(),
                    },
                },
            },
        }
    }

    /// Renders the current screen. A redirect is reported by the first render after it.
    pub fn screen(&mut self) -> Screen {
        Screen {
            route: self.route.token(),
            redirected: std::mem::take(&mut self.redirected),
            theme: self.theme,
            view: self.view(),
        }
    }
}
