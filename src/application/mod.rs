//! Application layer: use-case services

pub mod services;

pub use services::{ProductService, UserService};
