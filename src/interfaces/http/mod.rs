//! HTTP REST API interfaces
//!
//! - `common`: Response envelope and pagination DTOs
//! - `modules`: Request handlers per resource
//! - `router`: API router with Swagger documentation

pub mod common;
pub mod modules;
pub mod router;

pub use router::create_api_router;
