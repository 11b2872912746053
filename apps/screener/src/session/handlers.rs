use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::{ResumeRecord, ResumeSection};
use crate::qa::{Answer, QaEngine};
use crate::session::ingest::{detect_format, read_resume};
use crate::session::pipeline::process_resume;
use crate::session::store::{Session, SessionInfo};
use crate::state::AppState;

/// Multipart field carrying the resume file.
pub const UPLOAD_FIELD: &str = "file";

#[derive(Debug, Deserialize)]
pub struct ResumeTextRequest {
    pub resume_text: String,
}

#[derive(Debug, Serialize)]
pub struct ResumeTextResponse {
    pub resume_text: String,
}

#[derive(Debug, Serialize)]
pub struct ProcessResumeResponse {
    pub resume: ResumeRecord,
    pub chunk_count: usize,
}

#[derive(Debug, Serialize)]
pub struct SectionResponse {
    pub section: ResumeSection,
    pub title: &'static str,
    pub is_empty: bool,
    pub content: serde_json::Value,
}

#[derive(Debug, Deserialize)]
pub struct QuestionRequest {
    pub question: String,
}

fn section_response(record: &ResumeRecord, section: ResumeSection) -> SectionResponse {
    SectionResponse {
        section,
        title: section.title(),
        is_empty: record.section_is_empty(section),
        content: record.section_value(section),
    }
}

async fn find_session(state: &AppState, id: Uuid) -> Result<Session, AppError> {
    state
        .sessions
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))
}

async fn ingest_text(
    state: &AppState,
    id: Uuid,
    resume_text: String,
) -> Result<ProcessResumeResponse, AppError> {
    let processed = process_resume(
        resume_text,
        state.llm.as_ref(),
        state.embedder.as_ref(),
        &state.splitter,
    )
    .await?;

    let response = ProcessResumeResponse {
        resume: processed.record.clone(),
        chunk_count: processed.knowledge_base.len(),
    };

    if !state.sessions.replace_resume(id, processed).await {
        return Err(AppError::NotFound(format!("Session {id} not found")));
    }
    info!("Session {id}: resume processed");
    Ok(response)
}

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> (StatusCode, Json<SessionInfo>) {
    let info = state.sessions.create().await;
    info!("Session {} created", info.session_id);
    (StatusCode::CREATED, Json(info))
}

/// DELETE /api/v1/sessions/:id
pub async fn handle_delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if !state.sessions.remove(id).await {
        return Err(AppError::NotFound(format!("Session {id} not found")));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/sessions/:id/resume
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<Json<ProcessResumeResponse>, AppError> {
    find_session(&state, id).await?;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let content_type = field.content_type().map(str::to_string);
        let file_name = field.file_name().map(str::to_string);
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Invalid file: {e}")))?;

        let format = detect_format(content_type.as_deref(), file_name.as_deref(), &data);
        info!("Session {id}: received {format:?} upload ({} bytes)", data.len());

        let resume_text = read_resume(format, data).await?;
        return Ok(Json(ingest_text(&state, id, resume_text).await?));
    }

    Err(AppError::Validation(format!(
        "Multipart field '{UPLOAD_FIELD}' is required"
    )))
}

/// POST /api/v1/sessions/:id/resume/text
pub async fn handle_submit_resume_text(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ResumeTextRequest>,
) -> Result<Json<ProcessResumeResponse>, AppError> {
    find_session(&state, id).await?;
    Ok(Json(ingest_text(&state, id, req.resume_text).await?))
}

/// GET /api/v1/sessions/:id/resume
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ResumeRecord>, AppError> {
    let session = find_session(&state, id).await?;
    let resume = session
        .resume
        .ok_or_else(|| AppError::NotFound(format!("No resume processed for session {id}")))?;
    Ok(Json(resume.record.clone()))
}

/// GET /api/v1/sessions/:id/resume/text
pub async fn handle_get_resume_text(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ResumeTextResponse>, AppError> {
    let session = find_session(&state, id).await?;
    let resume = session
        .resume
        .ok_or_else(|| AppError::NotFound(format!("No resume processed for session {id}")))?;
    Ok(Json(ResumeTextResponse {
        resume_text: resume.resume_text.clone(),
    }))
}

/// GET /api/v1/sessions/:id/resume/sections
pub async fn handle_list_sections(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<SectionResponse>>, AppError> {
    let session = find_session(&state, id).await?;
    let resume = session
        .resume
        .ok_or_else(|| AppError::NotFound(format!("No resume processed for session {id}")))?;

    let sections = ResumeSection::ALL
        .into_iter()
        .map(|section| section_response(&resume.record, section))
        .collect();
    Ok(Json(sections))
}

/// GET /api/v1/sessions/:id/resume/sections/:section
pub async fn handle_get_section(
    State(state): State<AppState>,
    Path((id, section)): Path<(Uuid, ResumeSection)>,
) -> Result<Json<SectionResponse>, AppError> {
    let session = find_session(&state, id).await?;
    let resume = session
        .resume
        .ok_or_else(|| AppError::NotFound(format!("No resume processed for session {id}")))?;

    Ok(Json(section_response(&resume.record, section)))
}

/// POST /api/v1/sessions/:id/questions
pub async fn handle_ask_question(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<QuestionRequest>,
) -> Result<Json<Answer>, AppError> {
    let question = req.question.trim();
    if question.is_empty() {
        return Err(AppError::Validation("Question must not be empty".to_string()));
    }

    let session = find_session(&state, id).await?;
    let engine = QaEngine {
        llm: state.llm.as_ref(),
        embedder: state.embedder.as_ref(),
        tenure_reference: state.config.tenure_reference_date,
    };

    let knowledge_base = session.resume.as_ref().map(|r| &r.knowledge_base);
    Ok(Json(engine.answer(question, knowledge_base).await))
}
