//! Axum route handlers for the Scoring API.

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::scoring::{compute_score, ScoreBreakdown};
use crate::state::AppState;

/// Upper bound on accepted text, résumé and job description combined.
const MAX_TEXT_BYTES: usize = 1024 * 1024;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRequest {
    /// Plain résumé text, already extracted from any binary format upstream.
    /// May be empty; the engine degrades to minimum scores rather than fail.
    #[serde(default)]
    pub resume_text: String,
    /// Optional. Blank or missing switches the engine to formatting-only
    /// analysis.
    #[serde(default)]
    pub job_description: String,
}

/// POST /api/v1/score
///
/// Scores a résumé against a job description and returns the breakdown with
/// improvement tips.
pub async fn handle_score(
    State(state): State<AppState>,
    Json(request): Json<ScoreRequest>,
) -> Result<Json<ScoreBreakdown>, AppError> {
    if request.resume_text.len() + request.job_description.len() > MAX_TEXT_BYTES {
        return Err(AppError::Validation(
            "resumeText and jobDescription exceed the 1 MiB limit".to_string(),
        ));
    }

    let breakdown = compute_score(
        &request.resume_text,
        &request.job_description,
        &state.config.weights,
        state.skill_matcher.as_ref(),
    );

    info!(
        "Scored resume ({} bytes) against JD ({} bytes): overall {:.1} [{}]",
        request.resume_text.len(),
        request.job_description.len(),
        breakdown.overall,
        state.skill_matcher.name()
    );

    Ok(Json(breakdown))
}
