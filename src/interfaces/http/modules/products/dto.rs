//! Product DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{NewProduct, Product};

/// Product API representation
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProductDto {
    /// Store-assigned product ID
    pub id: i32,
    /// Unique product name
    pub name: String,
    pub location: Option<String>,
    /// Price in the shop currency
    pub price: Option<Decimal>,
    /// Ordered image URLs (at least 5)
    pub images: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductDto {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            name: p.name,
            location: p.location,
            price: p.price,
            images: p.images,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

/// Create product request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateProductRequest {
    /// Product name (must be unique)
    pub name: String,
    pub location: Option<String>,
    pub price: Option<Decimal>,
    /// Image URLs; a product needs at least 5
    #[serde(default)]
    pub images: Vec<String>,
}

impl From<CreateProductRequest> for NewProduct {
    fn from(r: CreateProductRequest) -> Self {
        Self {
            name: r.name,
            location: r.location,
            price: r.price,
            images: r.images,
        }
    }
}
