//! SeaORM implementation of ProductRepository

use async_trait::async_trait;
use chrono::Utc;
use log::info;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set, SqlErr,
};

use crate::domain::{DomainError, DomainResult, NewProduct, Product, ProductRepository};
use crate::infrastructure::database::entities::product::{self, ImageList};
use crate::shared::PaginatedResult;

// ── Conversion helpers ──────────────────────────────────────────

fn db_err(e: sea_orm::DbErr) -> DomainError {
    if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
        return DomainError::Conflict(format!("products.name: {}", e));
    }
    DomainError::Validation(format!("Database error: {}", e))
}

fn entity_to_domain(model: product::Model) -> Product {
    Product {
        id: model.id,
        name: model.name,
        location: model.location,
        price: model.price,
        images: model.images.0,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── SeaOrmProductRepository ─────────────────────────────────────

pub struct SeaOrmProductRepository {
    db: DatabaseConnection,
}

impl SeaOrmProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for SeaOrmProductRepository {
    async fn save(&self, p: NewProduct) -> DomainResult<Product> {
        let now = Utc::now();
        let model = product::ActiveModel {
            id: NotSet,
            name: Set(p.name),
            location: Set(p.location),
            price: Set(p.price),
            images: Set(ImageList(p.images)),
            created_at: Set(now),
            updated_at: Set(now),
        };
        let result = model.insert(&self.db).await.map_err(db_err)?;
        info!("Product saved: {} ({})", result.name, result.id);
        Ok(entity_to_domain(result))
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Product>> {
        let model = product::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }

    async fn find_by_name(&self, name: &str) -> DomainResult<Option<Product>> {
        let model = product::Entity::find()
            .filter(product::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }

    async fn find_all(&self) -> DomainResult<Vec<Product>> {
        let models = product::Entity::find()
            .order_by_asc(product::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn find_page(&self, page: u64, size: u64) -> DomainResult<PaginatedResult<Product>> {
        if size == 0 {
            // Degenerate query; no items, but the total must stay truthful.
            let total = product::Entity::find()
                .count(&self.db)
                .await
                .map_err(db_err)?;
            return Ok(PaginatedResult::new(Vec::new(), total, page, size));
        }

        let paginator = product::Entity::find()
            .order_by_asc(product::Column::Id)
            .paginate(&self.db, size);

        let total = paginator.num_items().await.map_err(db_err)?;
        let models = paginator.fetch_page(page).await.map_err(db_err)?;
        let items = models.into_iter().map(entity_to_domain).collect();

        Ok(PaginatedResult::new(items, total, page, size))
    }

    async fn exists_by_id(&self, id: i32) -> DomainResult<bool> {
        let count = product::Entity::find_by_id(id)
            .count(&self.db)
            .await
            .map_err(db_err)?;
        Ok(count > 0)
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let result = product::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        if result.rows_affected == 0 {
            return Err(DomainError::NotFound {
                entity: "Producto",
                field: "id",
                value: id.to_string(),
            });
        }
        info!("Product deleted: {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use rust_decimal::Decimal;

    use super::*;

    #[test]
    fn entity_to_domain_unwraps_image_list() {
        let now = Utc::now();
        let model = product::Model {
            id: 3,
            name: "Silla".to_string(),
            location: None,
            price: Some(Decimal::new(4500, 2)),
            images: ImageList(vec!["a.jpg".to_string(), "b.jpg".to_string()]),
            created_at: now,
            updated_at: now,
        };

        let product = entity_to_domain(model);
        assert_eq!(product.id, 3);
        assert_eq!(product.name, "Silla");
        assert_eq!(product.images, vec!["a.jpg", "b.jpg"]);
        assert_eq!(product.price, Some(Decimal::new(4500, 2)));
    }
}
