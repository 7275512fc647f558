use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::error::{ProductError, ProductResult};
use crate::models::Product;

/// Repository trait for Product persistence
///
/// `save` has upsert semantics: without an id a new one is assigned, with an
/// id the stored product is replaced or created under that id.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products, ordered by id
    async fn find_all(&self) -> ProductResult<Vec<Product>>;

    async fn find_by_id(&self, id: i64) -> ProductResult<Option<Product>>;

    /// Persist a product; the returned product always has an id
    async fn save(&self, product: Product) -> ProductResult<Product>;

    /// Returns `false` when nothing was deleted
    async fn delete_by_id(&self, id: i64) -> ProductResult<bool>;
}

#[derive(Debug)]
struct Store {
    products: BTreeMap<i64, Product>,
    /// `None` once an id of `i64::MAX` has been handed out
    next_id: Option<i64>,
}

/// In-process repository used when no database is configured.
#[derive(Debug)]
pub struct InMemoryProductRepository {
    store: RwLock<Store>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Store {
                products: BTreeMap::new(),
                next_id: Some(1),
            }),
        }
    }
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_all(&self) -> ProductResult<Vec<Product>> {
        let store = self.store.read().await;
        Ok(store.products.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> ProductResult<Option<Product>> {
        let store = self.store.read().await;
        Ok(store.products.get(&id).cloned())
    }

    async fn save(&self, product: Product) -> ProductResult<Product> {
        let mut store = self.store.write().await;

        let id = match product.id {
            Some(id) => {
                if store.next_id.is_some_and(|next| id >= next) {
                    store.next_id = id.checked_add(1);
                }
                id
            }
            None => {
                let id = store.next_id.ok_or_else(|| {
                    ProductError::Internal("product id sequence exhausted".to_string())
                })?;
                store.next_id = id.checked_add(1);
                id
            }
        };

        let saved = Product {
            id: Some(id),
            text: product.text,
        };
        store.products.insert(id, saved.clone());

        tracing::debug!(product_id = id, "Saved product in memory");
        Ok(saved)
    }

    async fn delete_by_id(&self, id: i64) -> ProductResult<bool> {
        let mut store = self.store.write().await;
        Ok(store.products.remove(&id).is_some())
    }
}
