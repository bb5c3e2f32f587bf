//! # Tienda Service
//!
//! REST backend for a small product catalog: user accounts with login and
//! product management (create, paginated listing, random showcase, delete).
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Core business entities, errors and repository traits
//! - **application**: Business logic services (product and user use-cases)
//! - **infrastructure**: External concerns (database, entities, migrations)
//! - **interfaces**: REST API with Swagger documentation
//! - **shared**: Cross-layer types (pagination)

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod shared;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig};

// Re-export API router
pub use interfaces::http::create_api_router;
