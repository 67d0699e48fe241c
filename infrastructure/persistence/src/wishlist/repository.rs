use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::{CustomerId, ProductId, ShopDomain};
use business::domain::wishlist::model::WishlistEntry;
use business::domain::wishlist::repository::WishlistRepository;

use super::entity::WishlistEntryEntity;

pub struct WishlistRepositoryPostgres {
    pool: PgPool,
}

impl WishlistRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn database_error(err: sqlx::Error) -> RepositoryError {
    tracing::error!("Wishlist query failed: {err}");
    RepositoryError::DatabaseError
}

/// Unique violations on `wishlist_entries_membership_key` surface as `Duplicated`.
fn insert_error(err: sqlx::Error) -> RepositoryError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            RepositoryError::Duplicated
        }
        _ => database_error(err),
    }
}

#[async_trait]
impl WishlistRepository for WishlistRepositoryPostgres {
    async fn find_by_customer(
        &self,
        shop: &ShopDomain,
        customer_id: &CustomerId,
    ) -> Result<Vec<WishlistEntry>, RepositoryError> {
        let entities = sqlx::query_as::<_, WishlistEntryEntity>(
            "SELECT id, shop, customer_id, product_id, created_at FROM wishlist_entries WHERE shop = $1 AND customer_id = $2 ORDER BY created_at DESC",
        )
        .bind(shop.as_str())
        .bind(customer_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(entities
            .into_iter()
            .filter_map(|e| e.into_domain())
            .collect())
    }

    async fn find(
        &self,
        shop: &ShopDomain,
        customer_id: &CustomerId,
        product_id: &ProductId,
    ) -> Result<Option<WishlistEntry>, RepositoryError> {
        let entity = sqlx::query_as::<_, WishlistEntryEntity>(
            "SELECT id, shop, customer_id, product_id, created_at FROM wishlist_entries WHERE shop = $1 AND customer_id = $2 AND product_id = $3",
        )
        .bind(shop.as_str())
        .bind(customer_id.as_str())
        .bind(product_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(entity.and_then(|e| e.into_domain()))
    }

    async fn insert(&self, entry: &WishlistEntry) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO wishlist_entries (id, shop, customer_id, product_id, created_at)
            VALUES ($1, $2, $3, $4, $5)"#,
        )
        .bind(entry.id)
        .bind(entry.shop.as_str())
        .bind(entry.customer_id.as_str())
        .bind(entry.product_id.as_str())
        .bind(entry.created_at)
        .execute(&self.pool)
        .await
        .map_err(insert_error)?;

        Ok(())
    }

    async fn delete(
        &self,
        shop: &ShopDomain,
        customer_id: &CustomerId,
        product_id: &ProductId,
    ) -> Result<u64, RepositoryError> {
        let result = sqlx::query(
            "DELETE FROM wishlist_entries WHERE shop = $1 AND customer_id = $2 AND product_id = $3",
        )
        .bind(shop.as_str())
        .bind(customer_id.as_str())
        .bind(product_id.as_str())
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(result.rows_affected())
    }

    async fn delete_by_customer(
        &self,
        shop: &ShopDomain,
        customer_id: &CustomerId,
    ) -> Result<u64, RepositoryError> {
        let result =
            sqlx::query("DELETE FROM wishlist_entries WHERE shop = $1 AND customer_id = $2")
                .bind(shop.as_str())
                .bind(customer_id.as_str())
                .execute(&self.pool)
                .await
                .map_err(database_error)?;

        Ok(result.rows_affected())
    }

    async fn delete_by_shop(&self, shop: &ShopDomain) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM wishlist_entries WHERE shop = $1")
            .bind(shop.as_str())
            .execute(&self.pool)
            .await
            .map_err(database_error)?;

        Ok(result.rows_affected())
    }
}
