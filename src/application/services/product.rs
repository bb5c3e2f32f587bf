//! Product service — application-layer orchestration
//!
//! All product business rules live here. HTTP handlers should be thin
//! wrappers that delegate to this service.

use std::sync::Arc;

use rand::seq::SliceRandom;
use tracing::info;

use crate::domain::{
    DomainError, DomainResult, NewProduct, Product, ProductRepository,
    product::MIN_PRODUCT_IMAGES,
};
use crate::shared::PaginatedResult;

/// Product service — orchestrates all catalog use-cases.
///
/// Generic over `R: ProductRepository` so it stays decoupled from the
/// concrete persistence layer.
pub struct ProductService<R: ProductRepository> {
    repo: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Validate and persist a new product.
    ///
    /// A product needs at least [`MIN_PRODUCT_IMAGES`] images and a name not
    /// already taken. The name pre-check races with concurrent creates; the
    /// unique index on `products.name` is the backstop.
    pub async fn create(&self, product: NewProduct) -> DomainResult<Product> {
        if product.images.len() < MIN_PRODUCT_IMAGES {
            return Err(DomainError::Validation(
                "El producto debe tener al menos 5 imágenes".into(),
            ));
        }

        if self.repo.find_by_name(&product.name).await?.is_some() {
            return Err(DomainError::Validation("El nombre ya está en uso".into()));
        }

        let created = self.repo.save(product).await?;
        info!("Product created: {} (id={})", created.name, created.id);
        Ok(created)
    }

    pub async fn get_by_id(&self, id: i32) -> DomainResult<Option<Product>> {
        self.repo.find_by_id(id).await
    }

    /// One page of the catalog; `page` is 0-based.
    pub async fn get_page(&self, page: u64, size: u64) -> DomainResult<PaginatedResult<Product>> {
        self.repo.find_page(page, size).await
    }

    /// Up to `count` products in random order.
    ///
    /// Loads the full catalog and shuffles it, so each call is O(total
    /// products). Acceptable while the catalog stays small.
    pub async fn get_random(&self, count: usize) -> DomainResult<Vec<Product>> {
        let mut all = self.repo.find_all().await?;
        all.shuffle(&mut rand::thread_rng());
        all.truncate(count);
        Ok(all)
    }

    pub async fn get_all(&self) -> DomainResult<Vec<Product>> {
        self.repo.find_all().await
    }

    /// Delete a product by id. Deleting an absent id is an error, so a
    /// second delete of the same id fails rather than no-ops.
    pub async fn delete(&self, id: i32) -> DomainResult<()> {
        if !self.repo.exists_by_id(id).await? {
            return Err(DomainError::NotFound {
                entity: "Producto",
                field: "id",
                value: id.to_string(),
            });
        }
        self.repo.delete(id).await?;
        info!("Product deleted: id={}", id);
        Ok(())
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::Utc;

    use super::*;

    /// In-memory stand-in for the SeaORM repository.
    struct InMemoryProducts {
        rows: Mutex<Vec<Product>>,
        next_id: Mutex<i32>,
    }

    impl InMemoryProducts {
        fn new() -> Self {
            Self {
                rows: Mutex::new(Vec::new()),
                next_id: Mutex::new(1),
            }
        }
    }

    #[async_trait]
    impl ProductRepository for InMemoryProducts {
        async fn save(&self, product: NewProduct) -> DomainResult<Product> {
            let mut next_id = self.next_id.lock().unwrap();
            let now = Utc::now();
            let created = Product {
                id: *next_id,
                name: product.name,
                location: product.location,
                price: product.price,
                images: product.images,
                created_at: now,
                updated_at: now,
            };
            *next_id += 1;
            self.rows.lock().unwrap().push(created.clone());
            Ok(created)
        }

        async fn find_by_id(&self, id: i32) -> DomainResult<Option<Product>> {
            Ok(self.rows.lock().unwrap().iter().find(|p| p.id == id).cloned())
        }

        async fn find_by_name(&self, name: &str) -> DomainResult<Option<Product>> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .find(|p| p.name == name)
                .cloned())
        }

        async fn find_all(&self) -> DomainResult<Vec<Product>> {
            Ok(self.rows.lock().unwrap().clone())
        }

        async fn find_page(&self, page: u64, size: u64) -> DomainResult<PaginatedResult<Product>> {
            let rows = self.rows.lock().unwrap();
            let items: Vec<Product> = rows
                .iter()
                .skip((page * size) as usize)
                .take(size as usize)
                .cloned()
                .collect();
            Ok(PaginatedResult::new(items, rows.len() as u64, page, size))
        }

        async fn exists_by_id(&self, id: i32) -> DomainResult<bool> {
            Ok(self.rows.lock().unwrap().iter().any(|p| p.id == id))
        }

        async fn delete(&self, id: i32) -> DomainResult<()> {
            let mut rows = self.rows.lock().unwrap();
            let before = rows.len();
            rows.retain(|p| p.id != id);
            if rows.len() == before {
                return Err(DomainError::NotFound {
                    entity: "Producto",
                    field: "id",
                    value: id.to_string(),
                });
            }
            Ok(())
        }
    }

    fn service() -> ProductService<InMemoryProducts> {
        ProductService::new(Arc::new(InMemoryProducts::new()))
    }

    fn new_product(name: &str, image_count: usize) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            location: Some("Madrid".to_string()),
            price: None,
            images: (0..image_count).map(|i| format!("img-{i}.jpg")).collect(),
        }
    }

    #[tokio::test]
    async fn create_rejects_too_few_images() {
        let svc = service();
        let err = svc.create(new_product("Silla", 3)).await.unwrap_err();
        match err {
            DomainError::Validation(msg) => {
                assert_eq!(msg, "El producto debe tener al menos 5 imágenes")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn create_rejects_four_images_accepts_five() {
        let svc = service();
        assert!(svc.create(new_product("Cuatro", 4)).await.is_err());
        assert!(svc.create(new_product("Cinco", 5)).await.is_ok());
    }

    #[tokio::test]
    async fn create_rejects_duplicate_name() {
        let svc = service();
        svc.create(new_product("Silla", 5)).await.unwrap();

        let err = svc.create(new_product("Silla", 7)).await.unwrap_err();
        match err {
            DomainError::Validation(msg) => assert_eq!(msg, "El nombre ya está en uso"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn create_assigns_id_and_get_by_id_roundtrips() {
        let svc = service();
        let created = svc.create(new_product("Silla", 5)).await.unwrap();
        assert_eq!(created.id, 1);

        let fetched = svc.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn get_by_id_missing_returns_none() {
        let svc = service();
        assert!(svc.get_by_id(99).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_then_get_yields_nothing() {
        let svc = service();
        let created = svc.create(new_product("Silla", 5)).await.unwrap();

        svc.delete(created.id).await.unwrap();
        assert!(svc.get_by_id(created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_twice_fails_second_time() {
        let svc = service();
        let created = svc.create(new_product("Silla", 5)).await.unwrap();

        svc.delete(created.id).await.unwrap();
        let err = svc.delete(created.id).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn delete_unknown_id_fails() {
        let svc = service();
        assert!(matches!(
            svc.delete(42).await.unwrap_err(),
            DomainError::NotFound { .. }
        ));
    }

    #[tokio::test]
    async fn random_sample_is_bounded_and_distinct() {
        let svc = service();
        for i in 0..8 {
            svc.create(new_product(&format!("Producto {i}"), 5))
                .await
                .unwrap();
        }

        // More than available: returns the whole catalog
        let sample = svc.get_random(10).await.unwrap();
        assert_eq!(sample.len(), 8);

        // Fewer than available: exactly `count`, no duplicates, all from catalog
        let sample = svc.get_random(3).await.unwrap();
        assert_eq!(sample.len(), 3);
        let ids: HashSet<i32> = sample.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), 3);
        for p in &sample {
            assert!(svc.get_by_id(p.id).await.unwrap().is_some());
        }
    }

    #[tokio::test]
    async fn random_sample_on_empty_catalog() {
        let svc = service();
        assert!(svc.get_random(10).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn pagination_slices_catalog() {
        let svc = service();
        for i in 0..25 {
            svc.create(new_product(&format!("Producto {i}"), 5))
                .await
                .unwrap();
        }

        let page = svc.get_page(0, 10).await.unwrap();
        assert_eq!(page.items.len(), 10);
        assert_eq!(page.total, 25);
        assert_eq!(page.total_pages, 3);

        let last = svc.get_page(2, 10).await.unwrap();
        assert_eq!(last.items.len(), 5);

        let beyond = svc.get_page(5, 10).await.unwrap();
        assert!(beyond.items.is_empty());
    }

    #[tokio::test]
    async fn pagination_zero_size_reports_true_total() {
        let svc = service();
        for i in 0..3 {
            svc.create(new_product(&format!("Producto {i}"), 5))
                .await
                .unwrap();
        }

        let page = svc.get_page(0, 0).await.unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total, 3);
        assert_eq!(page.total_pages, 0);
    }

    #[tokio::test]
    async fn get_all_returns_everything() {
        let svc = service();
        svc.create(new_product("A", 5)).await.unwrap();
        svc.create(new_product("B", 5)).await.unwrap();
        assert_eq!(svc.get_all().await.unwrap().len(), 2);
    }
}
