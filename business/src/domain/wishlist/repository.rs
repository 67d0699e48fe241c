use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::{CustomerId, ProductId, ShopDomain};

use super::model::WishlistEntry;

/// Storage port for wishlist entries.
///
/// `insert` must report an already-present tuple as `RepositoryError::Duplicated`.
#[async_trait]
pub trait WishlistRepository: Send + Sync {
    async fn find_by_customer(
        &self,
        shop: &ShopDomain,
        customer_id: &CustomerId,
    ) -> Result<Vec<WishlistEntry>, RepositoryError>;
    async fn find(
        &self,
        shop: &ShopDomain,
        customer_id: &CustomerId,
        product_id: &ProductId,
    ) -> Result<Option<WishlistEntry>, RepositoryError>;
    async fn insert(&self, entry: &WishlistEntry) -> Result<(), RepositoryError>;
    async fn delete(
        &self,
        shop: &ShopDomain,
        customer_id: &CustomerId,
        product_id: &ProductId,
    ) -> Result<u64, RepositoryError>;
    async fn delete_by_customer(
        &self,
        shop: &ShopDomain,
        customer_id: &CustomerId,
    ) -> Result<u64, RepositoryError>;
    async fn delete_by_shop(&self, shop: &ShopDomain) -> Result<u64, RepositoryError>;
}
