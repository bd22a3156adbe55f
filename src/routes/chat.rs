//! Chat routes
//!
//! Upload a document to open a session, then ask questions against it.

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::upload::read_upload;
use crate::chat::{Message, SessionInfo};
use crate::chunk::chunk_pages;
use crate::error::{AppError, Result};
use crate::extract::extract_document;
use crate::state::AppState;

/// Create the chat router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/sessions", post(create_session))
        .route("/sessions/:id", get(get_session).delete(delete_session))
        .route(
            "/sessions/:id/messages",
            post(ask).get(get_transcript).delete(clear_transcript),
        )
}

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    pub question: String,
}

#[derive(Debug, Serialize)]
pub struct SourceRef {
    pub page: usize,
    pub score: usize,
}

#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub answer: String,
    pub sources: Vec<SourceRef>,
}

#[derive(Debug, Serialize)]
pub struct TranscriptResponse {
    pub messages: Vec<Message>,
}

fn session_not_found(id: &str) -> AppError {
    AppError::NotFound(format!("Chat session not found: {}", id))
}

/// POST /api/v1/chat/sessions
///
/// Extract and chunk the uploaded PDF and open a session over it.
async fn create_session(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<SessionInfo>)> {
    let upload = read_upload(multipart).await?;
    let options = state.config().extract_options();

    let extracted =
        extract_document(state.engine(), upload.data, upload.file_name.clone(), &options).await?;
    let chunks = chunk_pages(&extracted.pages, state.config().pipeline.max_chars_per_chunk);

    let info = state
        .sessions()
        .create(upload.file_name, extracted.pages.len(), chunks)
        .await;

    tracing::info!(
        "Opened chat session {} for '{}' ({} chunks)",
        info.session_id,
        info.document_name,
        info.chunk_count
    );

    Ok((StatusCode::CREATED, Json(info)))
}

/// GET /api/v1/chat/sessions/:id
async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SessionInfo>> {
    state
        .sessions()
        .info(&id)
        .await
        .map(Json)
        .ok_or_else(|| session_not_found(&id))
}

/// DELETE /api/v1/chat/sessions/:id
async fn delete_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    if state.sessions().remove(&id).await {
        tracing::info!("Closed chat session {}", id);
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(session_not_found(&id))
    }
}

/// POST /api/v1/chat/sessions/:id/messages
async fn ask(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<AskRequest>,
) -> Result<Json<AskResponse>> {
    let question = request.question.as_str();
    if question.trim().is_empty() {
        return Err(AppError::BadRequest("Question must not be empty".to_string()));
    }

    let pipeline = &state.config().pipeline;
    let answer = state
        .sessions()
        .ask(
            &id,
            question,
            pipeline.retrieval_top_k,
            pipeline.answer_snippet_chars,
        )
        .await
        .ok_or_else(|| session_not_found(&id))?;

    Ok(Json(AskResponse {
        answer: answer.text,
        sources: answer
            .sources
            .iter()
            .map(|s| SourceRef {
                page: s.chunk.page,
                score: s.score,
            })
            .collect(),
    }))
}

/// GET /api/v1/chat/sessions/:id/messages
async fn get_transcript(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TranscriptResponse>> {
    let messages = state
        .sessions()
        .transcript(&id)
        .await
        .ok_or_else(|| session_not_found(&id))?;

    Ok(Json(TranscriptResponse { messages }))
}

/// DELETE /api/v1/chat/sessions/:id/messages
async fn clear_transcript(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    if state.sessions().clear_transcript(&id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(session_not_found(&id))
    }
}
