//! Business logic layer
//!
//! Services apply catalog rules on top of the store primitives.

pub mod catalog;

pub use catalog::CatalogService;
