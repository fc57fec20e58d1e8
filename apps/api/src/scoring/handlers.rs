//! Axum route handlers for the Scoring API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::scoring::pipeline::analyze_resume;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeResumeRequest {
    pub resume_text: String,
    pub job_description: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResumeResponse {
    pub score: u32,
    pub strengths: String,
    pub improvements: String,
    pub keyword_match: String,
}

/// POST /api/v1/resume/analyze
///
/// Validates inputs before any backend call, then runs the scoring
/// pipeline. Malformed backend output surfaces as a structured error, not a
/// defaulted score.
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeResumeRequest>,
) -> Result<Json<AnalyzeResumeResponse>, AppError> {
    if request.resume_text.trim().is_empty() {
        return Err(AppError::Validation(
            "resume_text cannot be empty".to_string(),
        ));
    }
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }

    let analysis = analyze_resume(
        state.llm.as_ref(),
        &request.resume_text,
        &request.job_description,
    )
    .await?;

    Ok(Json(AnalyzeResumeResponse {
        score: analysis.score,
        strengths: analysis.strengths,
        improvements: analysis.improvements,
        keyword_match: analysis.keyword_match,
    }))
}
