//! Product entity for database

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};

/// Ordered product image URLs, stored as a JSON array column
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct ImageList(pub Vec<String>);

/// Product model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Product name, unique across the catalog
    #[sea_orm(unique)]
    pub name: String,

    pub location: Option<String>,

    /// Price in the shop currency
    #[sea_orm(column_type = "Decimal(Some((16, 2)))", nullable)]
    pub price: Option<Decimal>,

    /// Image URLs (JSON array)
    #[sea_orm(column_type = "Json")]
    pub images: ImageList,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
