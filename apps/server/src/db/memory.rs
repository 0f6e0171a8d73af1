//! Process-local `SubjectStore`
//!
//! Keeps subjects in insertion order behind an async `RwLock`. Every trait
//! call takes the lock once, matching the per-call atomicity of the
//! Postgres store.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    db::traits::SubjectStore,
    models::{Question, Subject},
    Error, Result,
};

#[derive(Default)]
pub struct InMemorySubjectStore {
    subjects: RwLock<Vec<Subject>>,
}

impl InMemorySubjectStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SubjectStore for InMemorySubjectStore {
    async fn list_subjects(&self) -> Result<Vec<Subject>> {
        Ok(self.subjects.read().await.clone())
    }

    async fn find_subject(&self, id: &str) -> Result<Option<Subject>> {
        let subjects = self.subjects.read().await;
        Ok(subjects.iter().find(|s| s.id == id).cloned())
    }

    async fn insert_subject(&self, subject: &Subject) -> Result<()> {
        let mut subjects = self.subjects.write().await;
        if subjects.iter().any(|s| s.id == subject.id) {
            return Err(Error::Conflict("Subject already exists".to_string()));
        }
        subjects.push(subject.clone());
        Ok(())
    }

    async fn set_questions(&self, id: &str, questions: &[Question]) -> Result<bool> {
        let mut subjects = self.subjects.write().await;
        match subjects.iter_mut().find(|s| s.id == id) {
            Some(subject) => {
                subject.questions = questions.to_vec();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn push_question(&self, id: &str, question: &Question) -> Result<bool> {
        let mut subjects = self.subjects.write().await;
        match subjects.iter_mut().find(|s| s.id == id) {
            Some(subject) => {
                subject.questions.push(question.clone());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}
