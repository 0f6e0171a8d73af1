use crate::api::handlers::{questions, subjects, system};
use crate::state::AppState;
use axum::{routing::get, Router};

/// Routes mounted under `/api`.
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/test", get(system::test_connection))
        .route(
            "/subjects",
            get(subjects::list_subjects).post(subjects::create_subject),
        )
        .route(
            "/subjects/:subject_id/questions",
            get(questions::list_questions).post(questions::create_question),
        )
        .route(
            "/subjects/:subject_id/questions/:question_id",
            axum::routing::put(questions::edit_question).delete(questions::delete_question),
        )
}
