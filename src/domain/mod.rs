//! Domain layer: entities, repository traits and errors

pub mod error;
pub mod product;
pub mod user;

pub use error::{DomainError, DomainResult};
pub use product::{NewProduct, Product, ProductRepository};
pub use user::{NewUser, User, UserRepository};
