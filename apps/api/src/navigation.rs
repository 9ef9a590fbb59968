//! View routing: maps a route token to a view and guards the dashboard.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Home,
    Quiz,
    Dashboard,
    Mentors,
}

impl Route {
    /// Parses a route token. Accepts `/quiz`, `#/quiz`, `quiz` and trailing slashes.
    /// Empty and unrecognized tokens map to `Home`.
    pub fn parse(token: &str) -> Self {
        let path = token.trim().trim_start_matches('#').trim_matches('/');
        match path {
            "quiz" => Route::Quiz,
            "dashboard" => Route::Dashboard,
            "mentors" => Route::Mentors,
            _ => Route::Home,
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Quiz => "/quiz",
            Route::Dashboard => "/dashboard",
            Route::Mentors => "/mentors",
        }
    }
}

/// Outcome of resolving a requested route against the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Navigation {
    pub route: Route,
    /// True when the requested route was refused and the user sent elsewhere.
    pub redirected: bool,
}

/// The dashboard is only reachable with a finalized answer set; otherwise the
/// navigation is redirected to `Home`.
pub fn resolve_route(requested: Route, has_finalized_answers: bool) -> Navigation {
    if requested == Route::Dashboard && !has_finalized_answers {
        return Navigation {
            route: Route::Home,
            redirected: true,
        };
    }
    Navigation {
        route: requested,
        redirected: false,
    }
}
