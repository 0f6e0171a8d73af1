//! Persistence layer
//!
//! [`SubjectStore`] exposes the document primitives the catalog needs.
//! [`PostgresSubjectStore`] is the production backend; [`InMemorySubjectStore`]
//! serves tests and database-less runs.

pub mod memory;
pub mod store;
pub mod traits;

pub use memory::InMemorySubjectStore;
pub use store::PostgresSubjectStore;
pub use traits::SubjectStore;
