//! Axum route handlers for the ATS API.
//!
//! Bodies are taken as raw JSON so layout detection and the "null means
//! absent" rule run in the normalizer, not in the extractor.

use axum::{extract::State, Json};
use serde_json::Value;
use tracing::info;

use crate::ats::keywords::{analyze_keywords, KeywordReport};
use crate::ats::{AtsAnalysis, ResumeInput};
use crate::errors::AppError;
use crate::state::AppState;

/// POST /api/v1/ats/analyze
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<AtsAnalysis>, AppError> {
    let input = ResumeInput::from_value(body)?;
    let analysis = state.scorer.score(&input).await?;
    info!(
        backend = state.scorer.backend(),
        score = analysis.score,
        suggestions = analysis.suggestions.len(),
        "ATS analysis complete"
    );
    Ok(Json(analysis))
}

/// POST /api/v1/ats/keywords
pub async fn handle_keywords(Json(body): Json<Value>) -> Result<Json<KeywordReport>, AppError> {
    let input = ResumeInput::from_value(body)?;
    Ok(Json(analyze_keywords(&input.normalize())))
}
