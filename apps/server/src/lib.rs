//! Quizbank - subject and quiz question catalog service
//!
//! Subjects own an ordered list of multiple-choice questions. The HTTP layer
//! in [`api`] forwards requests to [`services::CatalogService`], which applies
//! the catalog rules on top of a pluggable [`db::SubjectStore`].

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod state;

pub use config::Config;
pub use error::{Error, Result};
