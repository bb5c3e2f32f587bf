//! Shared cross-layer types

pub mod types;

pub use types::pagination::PaginatedResult;
