//! Axum route handler for the match endpoint.

use axum::extract::{Multipart, State};
use axum::Json;
use bytes::Bytes;

use crate::errors::AppError;
use crate::extraction::pdf;
use crate::matching::matcher::{match_resume_with_job, MatchReport};
use crate::state::AppState;

/// POST /api/v1/match
///
/// Accepts a multipart form with `resume` and `job` PDF fields and returns
/// the full match report.
pub async fn handle_match(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<MatchReport>, AppError> {
    let mut resume_pdf: Option<Bytes> = None;
    let mut job_pdf: Option<Bytes> = None;

    // Fields may arrive in any order; collect both in one pass.
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart payload: {e}")))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read '{name}' field: {e}")))?;
        match name.as_str() {
            "resume" => resume_pdf = Some(data),
            "job" => job_pdf = Some(data),
            _ => {}
        }
    }

    let resume_pdf = resume_pdf.ok_or_else(|| AppError::MissingInputFile("resume".to_string()))?;
    let job_pdf = job_pdf.ok_or_else(|| AppError::MissingInputFile("job".to_string()))?;

    let resume_text = pdf::extract_text(&resume_pdf)?;
    let job_text = pdf::extract_text(&job_pdf)?;

    let report =
        match_resume_with_job(&resume_text, &job_text, &state.llm, state.matcher.as_ref()).await;

    Ok(Json(report))
}
