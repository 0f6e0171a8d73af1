//! Question handlers, nested under a subject

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::{acknowledge, json_payload, path_params};
use crate::{
    models::{NewQuestion, QuestionPatch, INVALID_QUESTION_DATA},
    state::AppState,
    Result,
};

/// GET /api/subjects/:subject_id/questions
pub async fn list_questions(
    State(state): State<AppState>,
    Path(subject_id): Path<String>,
) -> Result<Response> {
    let questions = state.catalog_service.list_questions(&subject_id).await?;
    Ok((StatusCode::OK, Json(questions)).into_response())
}

/// POST /api/subjects/:subject_id/questions
pub async fn create_question(
    State(state): State<AppState>,
    Path(subject_id): Path<String>,
    payload: std::result::Result<Json<NewQuestion>, JsonRejection>,
) -> Result<Response> {
    let payload = json_payload(payload, INVALID_QUESTION_DATA)?;
    state
        .catalog_service
        .create_question(&subject_id, payload)
        .await?;
    Ok(acknowledge("Question added successfully"))
}

/// PUT /api/subjects/:subject_id/questions/:question_id
pub async fn edit_question(
    State(state): State<AppState>,
    path: std::result::Result<Path<(String, i64)>, PathRejection>,
    payload: std::result::Result<Json<QuestionPatch>, JsonRejection>,
) -> Result<Response> {
    let (subject_id, question_id) = path_params(path)?;
    let patch = json_payload(payload, INVALID_QUESTION_DATA)?;
    state
        .catalog_service
        .edit_question(&subject_id, question_id, patch)
        .await?;
    Ok(acknowledge("Question updated successfully"))
}

/// DELETE /api/subjects/:subject_id/questions/:question_id
pub async fn delete_question(
    State(state): State<AppState>,
    path: std::result::Result<Path<(String, i64)>, PathRejection>,
) -> Result<Response> {
    let (subject_id, question_id) = path_params(path)?;
    state
        .catalog_service
        .delete_question(&subject_id, question_id)
        .await?;
    Ok(acknowledge("Question deleted successfully"))
}
