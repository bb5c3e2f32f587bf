//! Product repository interface

use async_trait::async_trait;

use super::model::{NewProduct, Product};
use crate::domain::DomainResult;
use crate::shared::PaginatedResult;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn save(&self, product: NewProduct) -> DomainResult<Product>;

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Product>>;
    async fn find_by_name(&self, name: &str) -> DomainResult<Option<Product>>;
    async fn find_all(&self) -> DomainResult<Vec<Product>>;
    /// Offset/limit pagination; `page` is 0-based.
    async fn find_page(&self, page: u64, size: u64) -> DomainResult<PaginatedResult<Product>>;

    async fn exists_by_id(&self, id: i32) -> DomainResult<bool>;
    async fn delete(&self, id: i32) -> DomainResult<()>;
}
