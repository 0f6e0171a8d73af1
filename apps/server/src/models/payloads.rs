//! Request bodies accepted by the catalog endpoints
//!
//! Each payload declares which fields are required. Defaults for new
//! questions are applied once, when a [`NewQuestion`] becomes a
//! [`QuestionDraft`].

use serde::{Deserialize, Deserializer};
use validator::Validate;

use super::catalog::{Question, DEFAULT_DIFFICULTY};
use crate::{Error, Result};

pub(crate) const SUBJECT_FIELDS_REQUIRED: &str = "id and name required";
pub(crate) const INVALID_QUESTION_DATA: &str = "Invalid question data";

/// Body of `POST /api/subjects`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct NewSubject {
    #[validate(required)]
    pub id: Option<String>,
    #[validate(required)]
    pub name: Option<String>,
}

impl NewSubject {
    /// Returns `(id, name)` once both are present.
    pub fn into_parts(self) -> Result<(String, String)> {
        if let Err(errors) = self.validate() {
            tracing::debug!(%errors, "Rejected subject payload");
            return Err(Error::Validation(SUBJECT_FIELDS_REQUIRED.to_string()));
        }
        match (self.id, self.name) {
            (Some(id), Some(name)) => Ok((id, name)),
            _ => Err(Error::Validation(SUBJECT_FIELDS_REQUIRED.to_string())),
        }
    }
}

/// Body of `POST /api/subjects/{subject_id}/questions`.
///
/// `options` must be a list of strings when present. Other types fail
/// deserialization; an explicit `null` deserializes to `Some(None)` and is
/// rejected by [`NewQuestion::into_draft`].
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct NewQuestion {
    #[validate(required, length(min = 1))]
    pub question: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub options: Option<Option<Vec<String>>>,
    pub correct: Option<i64>,
    pub difficulty: Option<String>,
    pub explanation: Option<String>,
}

impl NewQuestion {
    pub fn into_draft(self) -> Result<QuestionDraft> {
        if let Err(errors) = self.validate() {
            tracing::debug!(%errors, "Rejected question payload");
            return Err(Error::Validation(INVALID_QUESTION_DATA.to_string()));
        }
        let Some(question) = self.question else {
            return Err(Error::Validation(INVALID_QUESTION_DATA.to_string()));
        };
        let options = match self.options {
            None => Vec::new(),
            Some(Some(options)) => options,
            Some(None) => {
                tracing::debug!("Rejected question payload with null options");
                return Err(Error::Validation(INVALID_QUESTION_DATA.to_string()));
            }
        };

        Ok(QuestionDraft {
            question,
            options,
            correct: self.correct.unwrap_or(0),
            difficulty: self
                .difficulty
                .unwrap_or_else(|| DEFAULT_DIFFICULTY.to_string()),
            explanation: self.explanation.unwrap_or_default(),
        })
    }
}

/// Marks a field as present, so `null` becomes `Some(None)` while a missing
/// field stays `None` through `#[serde(default)]`.
fn present<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// A validated question with defaults applied, waiting for its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDraft {
    pub question: String,
    pub options: Vec<String>,
    pub correct: i64,
    pub difficulty: String,
    pub explanation: String,
}

impl QuestionDraft {
    pub fn with_id(self, id: i64) -> Question {
        Question {
            id,
            question: self.question,
            options: self.options,
            correct: self.correct,
            difficulty: self.difficulty,
            explanation: self.explanation,
        }
    }
}

/// Body of `PUT /api/subjects/{subject_id}/questions/{question_id}`.
///
/// Supplied fields replace the stored value, including empty strings, empty
/// lists and `0`. Absent (or `null`) fields keep the stored value.
///
/// An explicit `null` is deliberately not "present" here: stored questions
/// have no nullable fields, so `null` keeps the current value instead of
/// overriding it as other supplied values do.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuestionPatch {
    pub question: Option<String>,
    pub options: Option<Vec<String>>,
    pub correct: Option<i64>,
    pub difficulty: Option<String>,
    pub explanation: Option<String>,
}

impl QuestionPatch {
    pub fn apply_to(self, target: &mut Question) {
        if let Some(question) = self.question {
            target.question = question;
        }
        if let Some(options) = self.options {
            target.options = options;
        }
        if let Some(correct) = self.correct {
            target.correct = correct;
        }
        if let Some(difficulty) = self.difficulty {
            target.difficulty = difficulty;
        }
        if let Some(explanation) = self.explanation {
            target.explanation = explanation;
        }
    }
}
