//! Axum route handlers for resume upload and retrieval.

use axum::extract::{Multipart, Path, Query, State};
use axum::Json;
use bytes::Bytes;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::types::Json as SqlJson;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::extraction::enrich::{apply_enrichment, extract_skills_and_experience};
use crate::extraction::highlight::highlight_sections;
use crate::extraction::{extract_resume_info, pdf, ExtractedResume};
use crate::models::resume::ResumeRow;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub id: Uuid,
    pub file_name: String,
    #[serde(flatten)]
    pub resume: ExtractedResume,
}

#[derive(Debug, Deserialize)]
pub struct ResumeQuery {
    /// When set, action verbs in every bullet are wrapped in `<mark>` tags.
    #[serde(default)]
    pub highlight: bool,
}

/// POST /api/v1/resumes
///
/// Accepts a multipart form with a `resume` PDF field. Extracts the text,
/// runs the rule-based extractors, enriches skills/experience via the LLM
/// (keeping the heuristic values on failure), and persists the record.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let (file_name, data) = read_file_field(&mut multipart, "resume")
        .await?
        .ok_or_else(|| AppError::MissingInputFile("resume".to_string()))?;

    let text = pdf::extract_text(&data)?;
    let mut extracted = extract_resume_info(&text);

    match extract_skills_and_experience(&text, &state.llm).await {
        Ok(enrichment) => apply_enrichment(&mut extracted, enrichment),
        Err(e) => warn!("LLM skill extraction failed, keeping heuristic values: {e}"),
    }

    let id = Uuid::new_v4();
    sqlx::query(
        "INSERT INTO resumes \
         (id, file_name, full_name, email, phone, skills, experience, sections, text_content, uploaded_at) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)",
    )
    .bind(id)
    .bind(&file_name)
    .bind(&extracted.full_name)
    .bind(&extracted.email)
    .bind(&extracted.phone)
    .bind(&extracted.skills)
    .bind(&extracted.experience)
    .bind(SqlJson(&extracted.sections))
    .bind(&text)
    .bind(Utc::now())
    .execute(&state.db)
    .await?;

    info!("Stored resume {id} ({file_name})");

    Ok(Json(UploadResponse {
        id,
        file_name,
        resume: extracted,
    }))
}

/// GET /api/v1/resumes/:id
///
/// Returns the stored resume record. With `?highlight=true` the action-verb
/// highlighter runs over every bullet before the response is built.
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Path(resume_id): Path<Uuid>,
    Query(params): Query<ResumeQuery>,
) -> Result<Json<ResumeRow>, AppError> {
    let mut resume = sqlx::query_as::<_, ResumeRow>("SELECT * FROM resumes WHERE id = $1")
        .bind(resume_id)
        .fetch_optional(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Resume {resume_id} not found")))?;

    if params.highlight {
        highlight_sections(&mut resume.sections.0);
    }

    Ok(Json(resume))
}

/// Reads the named file field from a multipart form, returning the client
/// file name and the raw bytes. Other fields ahead of it are skipped.
async fn read_file_field(
    multipart: &mut Multipart,
    name: &str,
) -> Result<Option<(String, Bytes)>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart payload: {e}")))?
    {
        if field.name() != Some(name) {
            continue;
        }
        let file_name = field.file_name().unwrap_or(name).to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read '{name}' field: {e}")))?;
        return Ok(Some((file_name, data)));
    }
    Ok(None)
}
