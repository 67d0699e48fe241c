use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::{CustomerId, ProductId, ShopDomain};
use crate::domain::wishlist::model::WishlistEntry;
use crate::domain::wishlist::repository::WishlistRepository;

/// Repository backed by a vector, enforcing the composite unique key the way
/// the database constraint does.
#[derive(Default)]
pub struct InMemoryWishlistRepository {
    entries: Mutex<Vec<WishlistEntry>>,
}

impl InMemoryWishlistRepository {
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn snapshot(&self) -> Vec<WishlistEntry> {
        self.entries.lock().unwrap().clone()
    }
}

#[async_trait]
impl WishlistRepository for InMemoryWishlistRepository {
    async fn find_by_customer(
        &self,
        shop: &ShopDomain,
        customer_id: &CustomerId,
    ) -> Result<Vec<WishlistEntry>, RepositoryError> {
        let entries = self.entries.lock().unwrap();
        Ok(entries
            .iter()
            .rev()
            .filter(|e| &e.shop == shop && &e.customer_id == customer_id)
            .cloned()
            .collect())
    }

    async fn find(
        &self,
        shop: &ShopDomain,
        customer_id: &CustomerId,
        product_id: &ProductId,
    ) -> Result<Option<WishlistEntry>, RepositoryError> {
        let entries = self.entries.lock().unwrap();
        Ok(entries
            .iter()
            .find(|e| e.matches(shop, customer_id, product_id))
            .cloned())
    }

    async fn insert(&self, entry: &WishlistEntry) -> Result<(), RepositoryError> {
        let mut entries = self.entries.lock().unwrap();
        if entries
            .iter()
            .any(|e| e.matches(&entry.shop, &entry.customer_id, &entry.product_id))
        {
            return Err(RepositoryError::Duplicated);
        }
        entries.push(entry.clone());
        Ok(())
    }

    async fn delete(
        &self,
        shop: &ShopDomain,
        customer_id: &CustomerId,
        product_id: &ProductId,
    ) -> Result<u64, RepositoryError> {
        let mut entries = self.entries.lock().unwrap();
        let before = entries.len();
        entries.retain(|e| !e.matches(shop, customer_id, product_id));
        Ok((before - entries.len()) as u64)
    }

    async fn delete_by_customer(
        &self,
        shop: &ShopDomain,
        customer_id: &CustomerId,
    ) -> Result<u64, RepositoryError> {
        let mut entries = self.entries.lock().unwrap();
        let before = entries.len();
        entries.retain(|e| !(&e.shop == shop && &e.customer_id == customer_id));
        Ok((before - entries.len()) as u64)
    }

    async fn delete_by_shop(&self, shop: &ShopDomain) -> Result<u64, RepositoryError> {
        let mut entries = self.entries.lock().unwrap();
        let before = entries.len();
        entries.retain(|e| &e.shop != shop);
        Ok((before - entries.len()) as u64)
    }
}
