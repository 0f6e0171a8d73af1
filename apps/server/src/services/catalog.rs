//! Catalog service - subject and question state transitions
//!
//! Known races, kept on purpose:
//! - `edit_question` and `delete_question` read the whole `questions` array
//!   and write it back. Two concurrent writers on the same subject are
//!   last-writer-wins.
//! - `create_question` appends atomically, but the new id is computed from a
//!   separate read. Concurrent creates on one subject can pick the same id.

use std::sync::Arc;

use crate::{
    db::SubjectStore,
    models::{NewQuestion, NewSubject, Question, QuestionPatch, Subject},
    Error, Result,
};

const SUBJECT_NOT_FOUND: &str = "Subject not found";
const QUESTION_NOT_FOUND: &str = "Question not found";

pub struct CatalogService {
    store: Arc<dyn SubjectStore>,
}

impl CatalogService {
    pub fn new(store: Arc<dyn SubjectStore>) -> Self {
        Self { store }
    }

    /// All subjects with their questions, in creation order.
    pub async fn list_subjects(&self) -> Result<Vec<Subject>> {
        let subjects = self.store.list_subjects().await?;
        tracing::debug!(count = subjects.len(), "Listed subjects");
        Ok(subjects)
    }

    /// Create an empty subject (POST /api/subjects)
    pub async fn create_subject(&self, payload: NewSubject) -> Result<Subject> {
        let (id, name) = payload.into_parts()?;

        if self.store.find_subject(&id).await?.is_some() {
            return Err(Error::Conflict("Subject already exists".to_string()));
        }

        let subject = Subject::new(id, name);
        self.store.insert_subject(&subject).await?;

        tracing::info!(subject_id = %subject.id, name = %subject.name, "Subject created");
        Ok(subject)
    }

    /// Questions of one subject, verbatim.
    pub async fn list_questions(&self, subject_id: &str) -> Result<Vec<Question>> {
        let subject = self.require_subject(subject_id).await?;
        tracing::debug!(subject_id, count = subject.questions.len(), "Listed questions");
        Ok(subject.questions)
    }

    /// Append a question (POST /api/subjects/{subject_id}/questions)
    ///
    /// The subject is created with a placeholder name if it does not exist.
    pub async fn create_question(&self, subject_id: &str, payload: NewQuestion) -> Result<Question> {
        let draft = payload.into_draft()?;

        let subject = match self.store.find_subject(subject_id).await? {
            Some(subject) => subject,
            None => self.auto_create_subject(subject_id).await?,
        };

        let question = draft.with_id(subject.next_question_id());

        if !self.store.push_question(subject_id, &question).await? {
            return Err(Error::Internal(format!(
                "Subject '{subject_id}' disappeared while appending a question"
            )));
        }

        tracing::info!(subject_id, question_id = question.id, "Question created");
        Ok(question)
    }

    /// Merge supplied fields into one question (PUT .../questions/{question_id})
    pub async fn edit_question(
        &self,
        subject_id: &str,
        question_id: i64,
        patch: QuestionPatch,
    ) -> Result<Question> {
        let mut subject = self.require_subject(subject_id).await?;

        let Some(position) = subject.question_position(question_id) else {
            return Err(Error::NotFound(QUESTION_NOT_FOUND.to_string()));
        };

        let target = &mut subject.questions[position];
        patch.apply_to(target);
        let updated = target.clone();

        self.write_questions(subject_id, &subject.questions).await?;

        tracing::info!(subject_id, question_id, "Question updated");
        Ok(updated)
    }

    /// Remove a question (DELETE .../questions/{question_id})
    pub async fn delete_question(&self, subject_id: &str, question_id: i64) -> Result<()> {
        let subject = self.require_subject(subject_id).await?;

        let before = subject.questions.len();
        let remaining: Vec<Question> = subject
            .questions
            .into_iter()
            .filter(|q| q.id != question_id)
            .collect();

        if remaining.len() == before {
            return Err(Error::NotFound(QUESTION_NOT_FOUND.to_string()));
        }

        self.write_questions(subject_id, &remaining).await?;

        tracing::info!(
            subject_id,
            question_id,
            removed = before - remaining.len(),
            "Question deleted"
        );
        Ok(())
    }

    /// Store connectivity check used by the diagnostic endpoint.
    pub async fn check_store(&self) -> Result<()> {
        self.store.ping().await
    }

    async fn require_subject(&self, subject_id: &str) -> Result<Subject> {
        self.store
            .find_subject(subject_id)
            .await?
            .ok_or_else(|| Error::NotFound(SUBJECT_NOT_FOUND.to_string()))
    }

    async fn auto_create_subject(&self, subject_id: &str) -> Result<Subject> {
        let subject = Subject::placeholder(subject_id);
        match self.store.insert_subject(&subject).await {
            Ok(()) => {
                tracing::info!(subject_id, name = %subject.name, "Subject auto-created");
                Ok(subject)
            }
            // Lost a race with another creator; use whatever is stored now.
            Err(Error::Conflict(_)) => self.require_subject(subject_id).await,
            Err(e) => Err(e),
        }
    }

    async fn write_questions(&self, subject_id: &str, questions: &[Question]) -> Result<()> {
        if !self.store.set_questions(subject_id, questions).await? {
            return Err(Error::NotFound(SUBJECT_NOT_FOUND.to_string()));
        }
        Ok(())
    }
}
