use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::RecommendationError;
use crate::llm_client::strip_json_fences;

/// One recommended career path as returned by the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerPath {
    pub title: String,
    pub description: String,
    pub skills: Vec<String>,
}

/// Wire shape of the model output. Every field is required.
#[derive(Debug, Deserialize)]
struct CareerPayload {
    careers: Vec<CareerPath>,
}

/// Validated recommendations for one dashboard visit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationResult {
    pub careers: Vec<CareerPath>,
    pub request_id: Uuid,
    pub generated_at: DateTime<Utc>,
}

/// Parses and validates the model's text payload.
///
/// Rejects: unparsable JSON, missing `careers`, an empty `careers` array, and any
/// career missing a field or carrying a blank title or description.
pub fn parse_recommendations(text: &str) -> Result<Vec<CareerPath>, RecommendationError> {
    let payload: CareerPayload = serde_json::from_str(strip_json_fences(text))
        .map_err(|e| RecommendationError::MalformedResponse(e.to_string()))?;

    if payload.careers.is_empty() {
        return Err(RecommendationError::MalformedResponse(
            "careers array is empty".to_string(),
        ));
    }

    for (i, career) in payload.careers.iter().enumerate() {
        if career.title.trim().is_empty() {
            return Err(RecommendationError::MalformedResponse(format!(
                "career {i} has a blank title"
            )));
        }
        if career.description.trim().is_empty() {
            return Err(RecommendationError::MalformedResponse(format!(
                "career {i} has a blank description"
            )));
        }
    }

    Ok(payload.careers)
}
