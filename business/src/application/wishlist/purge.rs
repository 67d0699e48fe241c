use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::repository::WishlistRepository;
use crate::domain::wishlist::use_cases::purge::{
    PurgeScope, PurgeWishlistParams, PurgeWishlistUseCase,
};

/// Handles privacy redaction: drops every entry of a customer or a shop.
pub struct PurgeWishlistUseCaseImpl {
    pub repository: Arc<dyn WishlistRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl PurgeWishlistUseCase for PurgeWishlistUseCaseImpl {
    async fn execute(&self, params: PurgeWishlistParams) -> Result<u64, WishlistError> {
        let shop = &params.tenant.shop;
        let count = match &params.scope {
            PurgeScope::Customer(customer_id) => {
                self.logger.info(&format!(
                    "Redacting wishlist of customer {} in {}",
                    customer_id, shop
                ));
                self.repository.delete_by_customer(shop, customer_id).await?
            }
            PurgeScope::Shop => {
                self.logger
                    .info(&format!("Redacting all wishlist entries of {}", shop));
                self.repository.delete_by_shop(shop).await?
            }
        };

        self.logger
            .info(&format!("Redacted {} wishlist entries", count));
        Ok(count)
    }
}
