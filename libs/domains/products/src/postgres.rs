use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr, EntityTrait,
    QueryOrder, Statement,
};

use crate::{entity, error::ProductResult, models::Product, repository::ProductRepository};

/// Moves the `products.id` sequence past an explicitly inserted id so later
/// generated ids cannot collide with it.
const SYNC_ID_SEQUENCE: &str = "SELECT setval(pg_get_serial_sequence('products', 'id'), \
     GREATEST($1, (SELECT MAX(id) FROM products)))";

pub struct PgProductRepository {
    db: DatabaseConnection,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn sync_id_sequence(&self, id: i64) -> Result<(), DbErr> {
        let stmt = Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            SYNC_ID_SEQUENCE,
            [id.into()],
        );
        self.db.execute_raw(stmt).await?;
        Ok(())
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn find_all(&self) -> ProductResult<Vec<Product>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Product::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> ProductResult<Option<Product>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Product::from))
    }

    async fn save(&self, product: Product) -> ProductResult<Product> {
        let active_model: entity::ActiveModel = product.clone().into();

        let model = match product.id {
            None => active_model.insert(&self.db).await?,
            Some(id) => match active_model.clone().update(&self.db).await {
                Ok(model) => model,
                // No row with this id yet: keep the caller's id
                Err(DbErr::RecordNotUpdated) => {
                    tracing::debug!(product_id = id, "No row updated, inserting with explicit id");
                    let model = active_model.insert(&self.db).await?;
                    self.sync_id_sequence(model.id).await?;
                    model
                }
                Err(e) => return Err(e.into()),
            },
        };

        tracing::info!(product_id = model.id, "Saved product");
        Ok(model.into())
    }

    async fn delete_by_id(&self, id: i64) -> ProductResult<bool> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected > 0 {
            tracing::info!(product_id = id, "Deleted product");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
