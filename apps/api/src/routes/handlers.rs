//! Axum route handlers for the view, quiz, content and preference APIs.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::content::{Mentor, Question};
use crate::errors::AppError;
use crate::preferences::Theme;
use crate::quiz::QuizSnapshot;
use crate::session::{Event, Screen};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct NavigateRequest {
    pub route: String,
}

#[derive(Debug, Deserialize)]
pub struct SelectOptionRequest {
    pub option: String,
}

#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub questions: Vec<Question>,
}

#[derive(Debug, Serialize)]
pub struct MentorsResponse {
    pub mentors: Vec<Mentor>,
}

#[derive(Debug, Serialize)]
pub struct PreferencesResponse {
    pub theme: Theme,
}

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub route: &'static str,
    pub quiz: QuizSnapshot,
}

// ────────────────────────────────────────────────────────────────────────────
// Views
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/view
pub async fn handle_get_view(State(state): State<AppState>) -> Json<Screen> {
    Json(state.screen().await)
}

/// POST /api/v1/navigate
///
/// Resolves a route token. `/dashboard` without a completed quiz lands on `/`
/// with `redirected: true`; later renders report `false`.
pub async fn handle_navigate(
    State(state): State<AppState>,
    Json(request): Json<NavigateRequest>,
) -> Result<Json<Screen>, AppError> {
    let screen = state.dispatch(Event::Navigate(request.route)).await?;
    Ok(Json(screen))
}

// ────────────────────────────────────────────────────────────────────────────
// Quiz
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/quiz
pub async fn handle_get_quiz(State(state): State<AppState>) -> Json<QuizResponse> {
    let session = state.session.lock().await;
    Json(QuizResponse {
        route: session.route().token(),
        quiz: session.quiz().snapshot(),
    })
}

/// POST /api/v1/quiz/select
pub async fn handle_select_option(
    State(state): State<AppState>,
    Json(request): Json<SelectOptionRequest>,
) -> Result<Json<Screen>, AppError> {
    if request.option.trim().is_empty() {
        return Err(AppError::Validation("option cannot be empty".to_string()));
    }
    let screen = state.dispatch(Event::SelectOption(request.option)).await?;
    Ok(Json(screen))
}

/// POST /api/v1/quiz/advance
///
/// On the last question this completes the quiz and moves to the dashboard,
/// whose recommendations start loading in the background.
pub async fn handle_advance(State(state): State<AppState>) -> Result<Json<Screen>, AppError> {
    Ok(Json(state.dispatch(Event::Advance).await?))
}

/// POST /api/v1/quiz/retreat
pub async fn handle_retreat(State(state): State<AppState>) -> Result<Json<Screen>, AppError> {
    Ok(Json(state.dispatch(Event::Retreat).await?))
}

// ────────────────────────────────────────────────────────────────────────────
// Static content
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/questions
pub async fn handle_get_questions(State(state): State<AppState>) -> Json<QuestionsResponse> {
    Json(QuestionsResponse {
        questions: state.bank.questions().to_vec(),
    })
}

/// GET /api/v1/mentors
pub async fn handle_get_mentors(State(state): State<AppState>) -> Json<MentorsResponse> {
    let session = state.session.lock().await;
    Json(MentorsResponse {
        mentors: session.mentors().to_vec(),
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Preferences
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/preferences
pub async fn handle_get_preferences(State(state): State<AppState>) -> Json<PreferencesResponse> {
    let session = state.session.lock().await;
    Json(PreferencesResponse {
        theme: session.theme(),
    })
}

/// POST /api/v1/preferences/theme/toggle
pub async fn handle_toggle_theme(
    State(state): State<AppState>,
) -> Result<Json<PreferencesResponse>, AppError> {
    let screen = state.dispatch(Event::ToggleTheme).await?;
    Ok(Json(PreferencesResponse {
        theme: screen.theme,
    }))
}
