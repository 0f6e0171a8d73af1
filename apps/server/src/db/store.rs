//! PostgreSQL-backed `SubjectStore` implementation
//!
//! Each subject is one row; its questions live inline in a JSONB array so a
//! subject reads back exactly as the API serves it.

use async_trait::async_trait;
use sqlx::{postgres::PgRow, types::Json, PgPool, Row};

use crate::{
    db::traits::SubjectStore,
    models::{Question, Subject},
    Error, Result,
};

#[derive(Clone)]
pub struct PostgresSubjectStore {
    pool: PgPool,
}

impl PostgresSubjectStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn subject_from_row(row: PgRow) -> Result<Subject> {
    let Json(questions): Json<Vec<Question>> = row.try_get("questions")?;
    Ok(Subject {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        questions,
    })
}

#[async_trait]
impl SubjectStore for PostgresSubjectStore {
    async fn list_subjects(&self) -> Result<Vec<Subject>> {
        let rows = sqlx::query("SELECT id, name, questions FROM subjects ORDER BY seq ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(Error::Database)?;

        rows.into_iter().map(subject_from_row).collect()
    }

    async fn find_subject(&self, id: &str) -> Result<Option<Subject>> {
        let row = sqlx::query("SELECT id, name, questions FROM subjects WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(Error::Database)?;

        row.map(subject_from_row).transpose()
    }

    async fn insert_subject(&self, subject: &Subject) -> Result<()> {
        let result = sqlx::query("INSERT INTO subjects (id, name, questions) VALUES ($1, $2, $3)")
            .bind(&subject.id)
            .bind(&subject.name)
            .bind(Json(&subject.questions))
            .execute(&self.pool)
            .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(Error::Conflict("Subject already exists".to_string()))
            }
            Err(e) => Err(Error::Database(e)),
        }
    }

    async fn set_questions(&self, id: &str, questions: &[Question]) -> Result<bool> {
        let result = sqlx::query("UPDATE subjects SET questions = $2 WHERE id = $1")
            .bind(id)
            .bind(Json(questions))
            .execute(&self.pool)
            .await
            .map_err(Error::Database)?;

        Ok(result.rows_affected() > 0)
    }

    async fn push_question(&self, id: &str, question: &Question) -> Result<bool> {
        // Single statement, so concurrent appends to one subject never drop
        // each other's questions.
        let result = sqlx::query(
            "UPDATE subjects
             SET questions = questions || jsonb_build_array($2::jsonb)
             WHERE id = $1",
        )
        .bind(id)
        .bind(Json(question))
        .execute(&self.pool)
        .await
        .map_err(Error::Database)?;

        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(Error::Database)?;
        Ok(())
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
