//! Catalog domain types and request payloads

mod catalog;
mod payloads;

pub use catalog::{next_question_id, Question, Subject, DEFAULT_DIFFICULTY};
pub use payloads::{NewQuestion, NewSubject, QuestionDraft, QuestionPatch};
pub(crate) use payloads::{INVALID_QUESTION_DATA, SUBJECT_FIELDS_REQUIRED};
