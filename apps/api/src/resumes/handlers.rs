//! Axum route handlers for the Resume API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};

use crate::errors::AppError;
use crate::models::resume::{ResumeInput, ResumeOutput};
use crate::resumes::parser::parse_resume;
use crate::state::AppState;

/// POST /api/v1/resumes/parse
///
/// Receives raw resume text and returns a structured JSON analysis.
/// Malformed bodies are rejected before the model provider is called.
pub async fn handle_parse_resume(
    State(state): State<AppState>,
    payload: Result<Json<ResumeInput>, JsonRejection>,
) -> Result<Json<ResumeOutput>, AppError> {
    let Json(input) = payload.map_err(|e| AppError::Validation(e.body_text()))?;

    let output = parse_resume(&input.resume_text, state.provider.as_ref()).await?;

    Ok(Json(output))
}
