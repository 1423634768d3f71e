//! Pluggable resume scorer.
//!
//! Default: `RuleBasedScorer` (pure-Rust, deterministic, no I/O).
//! `AppState` holds an `Arc<dyn ResumeScorer>`, so a different backend can be
//! swapped in at startup without touching the handlers.

use async_trait::async_trait;
use tracing::debug;

use crate::ats::{analyze, AtsAnalysis, ResumeInput, ScoringOptions};
use crate::errors::AppError;

#[async_trait]
pub trait ResumeScorer: Send + Sync {
    async fn score(&self, input: &ResumeInput) -> Result<AtsAnalysis, AppError>;

    /// Short backend label, surfaced in logs.
    fn backend(&self) -> &'static str;
}

pub struct RuleBasedScorer {
    options: ScoringOptions,
}

impl RuleBasedScorer {
    pub fn new(options: ScoringOptions) -> Self {
        Self { options }
    }
}

#[async_trait]
impl ResumeScorer for RuleBasedScorer {
    async fn score(&self, input: &ResumeInput) -> Result<AtsAnalysis, AppError> {
        let canonical = input.normalize();
        let analysis = analyze(&canonical, &self.options);
        debug!(
            score = analysis.score,
            completeness = analysis.section_completeness,
            keyword_density = analysis.keyword_density,
            "resume scored"
        );
        Ok(analysis)
    }

    fn backend(&self) -> &'static str {
        "rule_based"
    }
}
