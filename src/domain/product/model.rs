//! Product domain entity

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Minimum number of images a product must carry to be published.
pub const MIN_PRODUCT_IMAGES: usize = 5;

/// A catalog product
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i32,
    /// Product name, unique across the catalog
    pub name: String,
    pub location: Option<String>,
    pub price: Option<Decimal>,
    /// Ordered image URLs; at least [`MIN_PRODUCT_IMAGES`] entries
    pub images: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a product (id is assigned by the store)
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub location: Option<String>,
    pub price: Option<Decimal>,
    pub images: Vec<String>,
}
