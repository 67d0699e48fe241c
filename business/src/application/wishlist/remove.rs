use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::model::MembershipKey;
use crate::domain::wishlist::repository::WishlistRepository;
use crate::domain::wishlist::use_cases::remove::{
    RemoveFromWishlistParams, RemoveFromWishlistUseCase,
};

pub struct RemoveFromWishlistUseCaseImpl {
    pub repository: Arc<dyn WishlistRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveFromWishlistUseCase for RemoveFromWishlistUseCaseImpl {
    async fn execute(&self, params: RemoveFromWishlistParams) -> Result<(), WishlistError> {
        let key = MembershipKey::parse(params.customer_id, params.product_id)?;
        let shop = &params.tenant.shop;

        self.logger.info(&format!(
            "Removing product {} from wishlist of customer {} in {}",
            key.product_id, key.customer_id, shop
        ));

        let removed = self
            .repository
            .delete(shop, &key.customer_id, &key.product_id)
            .await
            .inspect_err(|err| {
                self.logger
                    .error(&format!("Failed to delete wishlist entry: {}", err))
            })?;

        if removed == 0 {
            self.logger.debug("Wishlist entry was already absent");
        }
        Ok(())
    }
}
