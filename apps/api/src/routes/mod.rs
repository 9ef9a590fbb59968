pub mod handlers;
pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Views
        .route("/api/v1/view", get(handlers::handle_get_view))
        .route("/api/v1/navigate", post(handlers::handle_navigate))
        // Quiz
        .route("/api/v1/quiz", get(handlers::handle_get_quiz))
        .route("/api/v1/quiz/select", post(handlers::handle_select_option))
        .route("/api/v1/quiz/advance", post(handlers::handle_advance))
        .route("/api/v1/quiz/retreat", post(handlers::handle_retreat))
        // Static content
        .route("/api/v1/questions", get(handlers::handle_get_questions))
        .route("/api/v1/mentors", get(handlers::handle_get_mentors))
        // Preferences
        .route("/api/v1/preferences", get(handlers::handle_get_preferences))
        .route(
            "/api/v1/preferences/theme/toggle",
            post(handlers::handle_toggle_theme),
        )
        .with_state(state)
}
