use std::sync::Arc;

use crate::ats::scorer::ResumeScorer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable resume scorer. Default: RuleBasedScorer.
    pub scorer: Arc<dyn ResumeScorer>,
}
