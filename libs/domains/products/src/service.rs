//! Product Service - Business logic layer

use async_trait::async_trait;
use axum_helpers::Violation;
use std::sync::Arc;
use tracing::instrument;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, TEXT_EMPTY_MESSAGE};
use crate::repository::ProductRepository;

/// Operations the HTTP layer depends on.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductService: Send + Sync {
    async fn find_all_products(&self) -> ProductResult<Vec<Product>>;

    async fn find_product_by_id(&self, id: i64) -> ProductResult<Option<Product>>;

    /// Persist `product`, assigning an id when it has none
    async fn save_product(&self, product: Product) -> ProductResult<Product>;

    /// Fails with `NotFound` when no product has this id
    async fn delete_product_by_id(&self, id: i64) -> ProductResult<()>;
}

/// [`ProductService`] backed by a [`ProductRepository`].
pub struct CatalogService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> CatalogService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }
}

#[async_trait]
impl<R: ProductRepository> ProductService for CatalogService<R> {
    #[instrument(skip(self))]
    async fn find_all_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.find_all().await
    }

    #[instrument(skip(self))]
    async fn find_product_by_id(&self, id: i64) -> ProductResult<Option<Product>> {
        self.repository.find_by_id(id).await
    }

    #[instrument(skip(self, product), fields(product_id = ?product.id))]
    async fn save_product(&self, product: Product) -> ProductResult<Product> {
        // Every stored product must have text, whichever layer called us
        if product.text.is_empty() {
            return Err(ProductError::Validation(vec![Violation::new(
                "text",
                TEXT_EMPTY_MESSAGE,
            )]));
        }

        let saved = self.repository.save(product).await?;
        if saved.id.is_none() {
            return Err(ProductError::Internal(
                "repository returned a product without id".to_string(),
            ));
        }
        Ok(saved)
    }

    #[instrument(skip(self))]
    async fn delete_product_by_id(&self, id: i64) -> ProductResult<()> {
        if self.repository.delete_by_id(id).await? {
            Ok(())
        } else {
            Err(ProductError::NotFound(id))
        }
    }
}
