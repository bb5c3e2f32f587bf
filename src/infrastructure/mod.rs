//! Infrastructure layer: database, entities and repository implementations

pub mod database;

pub use database::{init_database, DatabaseConfig};
