use serde::{Deserialize, Serialize};

pub const DEFAULT_DIFFICULTY: &str = "easy";

/// A named category owning an ordered list of questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl Subject {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            questions: Vec::new(),
        }
    }

    /// Subject created implicitly when a question is posted to an unknown id.
    pub fn placeholder(id: &str) -> Self {
        Self::new(id, format!("Subject {id}"))
    }

    /// Position of the first question with `question_id`, if any.
    pub fn question_position(&self, question_id: i64) -> Option<usize> {
        self.questions.iter().position(|q| q.id == question_id)
    }

    pub fn next_question_id(&self) -> i64 {
        next_question_id(&self.questions)
    }
}

/// A multiple-choice quiz item.
///
/// `id` is unique within the owning subject only. `correct` indexes into
/// `options` but is not range-checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub options: Vec<String>,
    pub correct: i64,
    pub difficulty: String,
    pub explanation: String,
}

/// `max(existing ids) + 1`, or `1` for an empty list.
///
/// Only the remaining questions count, so deleting the highest id frees it
/// for the next insert.
pub fn next_question_id(questions: &[Question]) -> i64 {
    questions.iter().map(|q| q.id).max().map_or(1, |max| max + 1)
}
