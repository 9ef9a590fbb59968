use serde::Serialize;
use tracing::{debug, info, warn};

use super::{RecommendationError, RecommendationResult};

/// Identifies one dashboard visit. Strictly increasing per orchestrator.
pub type VisitId = u64;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RecommendationState {
    /// No dashboard visit in progress.
    Idle,
    Loading,
    Failed { error: RecommendationError },
    Ready { result: RecommendationResult },
}

impl RecommendationState {
    pub fn is_loading(&self) -> bool {
        matches!(self, RecommendationState::Loading)
    }
}

/// Tri-state recommendation result for the current dashboard visit.
///
/// Every visit gets a fresh `VisitId`; an outcome is only applied when it carries
/// the current id and the state is still `Loading`. Late responses from an
/// abandoned or superseded visit are dropped.
#[derive(Debug, Clone)]
pub struct Orchestrator {
    state: RecommendationState,
    current: Option<VisitId>,
    next_visit: VisitId,
}

impl Default for Orchestrator {
    fn default() -> Self {
        Self::new()
    }
}

impl Orchestrator {
    pub fn new() -> Self {
        Self {
            state: RecommendationState::Idle,
            current: None,
            next_visit: 1,
        }
    }

    pub fn state(&self) -> &RecommendationState {
        &self.state
    }

    #[cfg(test)]
    pub fn current_visit(&self) -> Option<VisitId> {
        self.current
    }

    /// Starts a new visit in `Loading`, superseding any previous one.
    pub fn begin(&mut self) -> VisitId {
        let visit = self.next_visit;
        self.next_visit += 1;
        if let Some(previous) = self.current.replace(visit) {
            debug!("Visit {previous} superseded by visit {visit}");
        }
        self.state = RecommendationState::Loading;
        visit
    }

    /// Starts a new visit that fails immediately, without a request.
    pub fn begin_failed(&mut self, error: RecommendationError) -> VisitId {
        let visit = self.begin();
        warn!("Visit {visit} failed before any request: {error}");
        self.state = RecommendationState::Failed { error };
        visit
    }

    /// Applies the outcome of `visit`'s request. Returns whether it was applied.
    pub fn resolve(
        &mut self,
        visit: VisitId,
        outcome: Result<RecommendationResult, RecommendationError>,
    ) -> bool {
        if self.current != Some(visit) || !self.state.is_loading() {
            info!(
                "Dropping stale recommendation outcome for visit {visit} (current: {:?})",
                self.current
            );
            return false;
        }
        self.state = match outcome {
            Ok(result) => RecommendationState::Ready { result },
            Err(error) => RecommendationState::Failed { error },
        };
        true
    }

    /// Ends the current visit; its result, pending or not, is discarded.
    pub fn abandon(&mut self) {
        if let Some(visit) = self.current.take() {
            debug!("Visit {visit} abandoned");
        }
        self.state = RecommendationState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use super::*;
    use crate::recommendation::CareerPath;

    fn result(title: &str) -> RecommendationResult {
        RecommendationResult {
            careers: vec![CareerPath {
                title: title.to_string(),
                description: "desc".to_string(),
                skills: vec![],
            }],
            request_id: Uuid::new_v4(),
            generated_at: Utc::now(),
        }
    }

    #[test]
    fn test_begin_enters_loading() {
        let mut orch = Orchestrator::new();
        assert_eq!(orch.state(), &RecommendationState::Idle);
        let visit = orch.begin();
        assert_eq!(orch.current_visit(), Some(visit));
        assert!(orch.state().is_loading());
    }

    #[test]
    fn test_resolve_current_visit_becomes_ready() {
        let mut orch = Orchestrator::new();
        let visit = orch.begin();
        assert!(orch.resolve(visit, Ok(result("Engineer"))));
        match orch.state() {
            RecommendationState::Ready { result } => assert_eq!(result.careers[0].title, "Engineer"),
            other => panic!("expected Ready, got {other:?}"),
        }
    }

    #[test]
    fn test_resolve_failure_becomes_failed() {
        let mut orch = Orchestrator::new();
        let visit = orch.begin();
        let err = RecommendationError::MalformedResponse("missing careers".into());
        assert!(orch.resolve(visit, Err(err.clone())));
        assert_eq!(orch.state(), &RecommendationState::Failed { error: err });
    }

    #[test]
    fn test_stale_visit_is_dropped() {
        let mut orch = Orchestrator::new();
        let old = orch.begin();
        let new = orch.begin();
        assert!(!orch.resolve(old, Ok(result("Old"))));
        assert!(orch.state().is_loading());
        assert!(orch.resolve(new, Ok(result("New"))));
    }

    #[test]
    fn test_outcome_after_abandon_is_dropped() {
        let mut orch = Orchestrator::new();
        let visit = orch.begin();
        orch.abandon();
        assert!(!orch.resolve(visit, Ok(result("Late"))));
        assert_eq!(orch.state(), &RecommendationState::Idle);
    }

    #[test]
    fn test_second_outcome_for_same_visit_is_dropped() {
        let mut orch = Orchestrator::new();
        let visit = orch.begin();
        assert!(orch.resolve(visit, Ok(result("First"))));
        assert!(!orch.resolve(visit, Ok(result("Second"))));
        match orch.state() {
            RecommendationState::Ready { result } => assert_eq!(result.careers[0].title, "First"),
            other => panic!("expected Ready, got {other:?}"),
        }
    }

    #[test]
    fn test_begin_failed_has_no_loading_phase() {
        let mut orch = Orchestrator::new();
        let visit = orch.begin_failed(RecommendationError::ConfigurationMissing);
        assert_eq!(
            orch.state(),
            &RecommendationState::Failed {
                error: RecommendationError::ConfigurationMissing
            }
        );
        assert!(!orch.resolve(visit, Ok(result("Late"))));
    }
}
