//! Store trait definition

use crate::{
    models::{Question, Subject},
    Result,
};
use async_trait::async_trait;

/// Document-style access to the subject collection.
///
/// Each call is a single store round trip. There is no multi-call
/// transaction, so callers that read a subject and write it back can race
/// with other writers.
#[async_trait]
pub trait SubjectStore: Send + Sync {
    /// All subjects in creation order.
    async fn list_subjects(&self) -> Result<Vec<Subject>>;

    /// Find one subject by id.
    async fn find_subject(&self, id: &str) -> Result<Option<Subject>>;

    /// Insert a new subject. Fails with `Error::Conflict` if the id is taken.
    async fn insert_subject(&self, subject: &Subject) -> Result<()>;

    /// Replace the whole `questions` array. Returns `false` if no subject matched.
    async fn set_questions(&self, id: &str, questions: &[Question]) -> Result<bool>;

    /// Atomically append one question. Returns `false` if no subject matched.
    async fn push_question(&self, id: &str, question: &Question) -> Result<bool>;

    /// Connectivity check.
    async fn ping(&self) -> Result<()>;

    /// Release underlying resources. Called once at shutdown.
    async fn close(&self) {}
}
