use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::model::{MembershipKey, WishlistEntry};
use crate::domain::wishlist::repository::WishlistRepository;
use crate::domain::wishlist::use_cases::add::{AddToWishlistParams, AddToWishlistUseCase};

pub struct AddToWishlistUseCaseImpl {
    pub repository: Arc<dyn WishlistRepository>,
    pub logger: Arc<dyn Logger>,
}

impl AddToWishlistUseCaseImpl {
    /// The row reported as duplicated was removed before it could be read.
    /// Inserting once more stores it again; a second conflict means another
    /// add won, and that row is returned.
    async fn insert_after_concurrent_remove(
        &self,
        entry: WishlistEntry,
    ) -> Result<WishlistEntry, WishlistError> {
        self.logger.warn(&format!(
            "Wishlist entry for product {} vanished after a conflict, inserting again",
            entry.product_id
        ));

        match self.repository.insert(&entry).await {
            Ok(()) => Ok(entry),
            Err(RepositoryError::Duplicated) => self
                .repository
                .find(&entry.shop, &entry.customer_id, &entry.product_id)
                .await?
                .ok_or(WishlistError::Repository(RepositoryError::NotFound)),
            Err(err) => {
                self.logger
                    .error(&format!("Failed to store wishlist entry: {}", err));
                Err(err.into())
            }
        }
    }
}

#[async_trait]
impl AddToWishlistUseCase for AddToWishlistUseCaseImpl {
    async fn execute(&self, params: AddToWishlistParams) -> Result<WishlistEntry, WishlistError> {
        let key = MembershipKey::parse(params.customer_id, params.product_id)?;
        let shop = params.tenant.shop;

        self.logger.info(&format!(
            "Adding product {} to wishlist of customer {} in {}",
            key.product_id, key.customer_id, shop
        ));

        let entry = WishlistEntry::new(shop, key.customer_id, key.product_id);
        match self.repository.insert(&entry).await {
            Ok(()) => {
                self.logger
                    .info(&format!("Wishlist entry created: {}", entry.id));
                Ok(entry)
            }
            // The unique constraint already holds this tuple: the add is a no-op.
            Err(RepositoryError::Duplicated) => {
                self.logger.info(&format!(
                    "Product {} already in wishlist of customer {}, skipping",
                    entry.product_id, entry.customer_id
                ));
                let existing = self
                    .repository
                    .find(&entry.shop, &entry.customer_id, &entry.product_id)
                    .await?;
                match existing {
                    Some(existing) => Ok(existing),
                    None => self.insert_after_concurrent_remove(entry).await,
                }
            }
            Err(err) => {
                self.logger
                    .error(&format!("Failed to store wishlist entry: {}", err));
                Err(err.into())
            }
        }
    }
}
