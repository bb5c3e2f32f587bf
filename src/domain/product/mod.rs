//! Product aggregate
//!
//! Contains the Product entity and its repository interface.

pub mod model;
pub mod repository;

pub use model::{NewProduct, Product, MIN_PRODUCT_IMAGES};
pub use repository::ProductRepository;
