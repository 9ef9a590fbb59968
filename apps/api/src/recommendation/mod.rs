//! Recommendation Request Orchestrator.
//!
//! Flow: finalized answers → prompt → one structured-output call through
//! `GenerationService` → parse + validate → `RecommendationResult`.
//! No retries: every failure is terminal for that attempt and maps to a
//! user-facing message.

use chrono::Utc;
use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use crate::content::QuestionBank;
use crate::llm_client::{GenerationRequest, GenerationService, LlmError, MODEL};
use crate::quiz::FinalizedAnswers;

pub mod models;
pub mod orchestrator;
pub mod prompts;

pub use models::{parse_recommendations, CareerPath, RecommendationResult};
pub use orchestrator::{Orchestrator, RecommendationState, VisitId};

#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum RecommendationError {
    #[error("generation service credential is not configured")]
    ConfigurationMissing,

    #[error("generation service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("generation request failed: {0}")]
    RequestError(String),

    #[error("generation service returned a malformed response: {0}")]
    MalformedResponse(String),
}

impl RecommendationError {
    /// Message shown to the user. Each failure class reads differently so a
    /// contract violation can be told apart from an unreachable service.
    pub fn user_message(&self) -> &'static str {
        match self {
            RecommendationError::ConfigurationMissing => {
                "AI service is not available. Please check API key configuration."
            }
            RecommendationError::ServiceUnavailable(_) => {
                "The AI service could not be reached. Please try again later."
            }
            RecommendationError::RequestError(_) => {
                "Could not generate recommendations. Please try again later."
            }
            RecommendationError::MalformedResponse(_) => {
                "Unexpected response from AI. Try again."
            }
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            RecommendationError::ConfigurationMissing => "CONFIGURATION_MISSING",
            RecommendationError::ServiceUnavailable(_) => "SERVICE_UNAVAILABLE",
            RecommendationError::RequestError(_) => "REQUEST_ERROR",
            RecommendationError::MalformedResponse(_) => "MALFORMED_RESPONSE",
        }
    }
}

impl From<LlmError> for RecommendationError {
    fn from(err: LlmError) -> Self {
        if err.is_unavailable() {
            RecommendationError::ServiceUnavailable(err.to_string())
        } else if err.is_malformed() {
            RecommendationError::MalformedResponse(err.to_string())
        } else {
            RecommendationError::RequestError(err.to_string())
        }
    }
}

/// Performs exactly one generation call for `answers` and validates the result.
pub async fn request_recommendations(
    service: &dyn GenerationService,
    bank: &QuestionBank,
    answers: &FinalizedAnswers,
) -> Result<RecommendationResult, RecommendationError> {
    let request_id = Uuid::new_v4();
    let request = GenerationRequest {
        model: MODEL.to_string(),
        prompt: prompts::build_recommendation_prompt(bank, answers),
        output_schema: prompts::career_schema(),
    };

    info!("Requesting recommendations (request {request_id}, model {MODEL})");
    let text = service.generate(&request).await.map_err(|e| {
        warn!("Recommendation request {request_id} failed: {e}");
        RecommendationError::from(e)
    })?;

    let careers = parse_recommendations(&text).map_err(|e| {
        warn!("Recommendation request {request_id} returned invalid payload: {e}");
        e
    })?;

    info!(
        "Recommendation request {request_id} produced {} careers",
        careers.len()
    );
    Ok(RecommendationResult {
        careers,
        request_id,
        generated_at: Utc::now(),
    })
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::llm_client::{GenerationRequest, GenerationService, LlmError};

    /// Generation service returning a canned payload or error, recording each request.
    pub struct MockGenerationService {
        reply: Box<dyn Fn() -> Result<String, LlmError> + Send + Sync>,
        pub calls: AtomicUsize,
        pub prompts: Mutex<Vec<String>>,
    }

    impl MockGenerationService {
        pub fn replying(text: &str) -> Self {
            let text = text.to_string();
            Self::with(move || Ok(text.clone()))
        }

        pub fn failing_with(status: u16) -> Self {
            Self::with(move || {
                Err(LlmError::Api {
                    status,
                    message: "mock failure".to_string(),
                })
            })
        }

        pub fn with(reply: impl Fn() -> Result<String, LlmError> + Send + Sync + 'static) -> Self {
            Self {
                reply: Box::new(reply),
                calls: AtomicUsize::new(0),
                prompts: Mutex::new(Vec::new()),
            }
        }

        pub fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl GenerationService for MockGenerationService {
        async fn generate(&self, request: &GenerationRequest) -> Result<String, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.prompts.lock().unwrap().push(request.prompt.clone());
            (self.reply)()
        }
    }
}
