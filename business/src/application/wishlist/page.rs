use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::CustomerId;
use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::repository::WishlistRepository;
use crate::domain::wishlist::services::{ProductCatalog, ProductSummary};
use crate::domain::wishlist::use_cases::page::{GetWishlistPageParams, GetWishlistPageUseCase};

pub struct GetWishlistPageUseCaseImpl {
    pub repository: Arc<dyn WishlistRepository>,
    pub catalog: Arc<dyn ProductCatalog>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetWishlistPageUseCase for GetWishlistPageUseCaseImpl {
    async fn execute(
        &self,
        params: GetWishlistPageParams,
    ) -> Result<Vec<ProductSummary>, WishlistError> {
        let customer_id =
            CustomerId::parse(params.customer_id).ok_or(WishlistError::CustomerIdMissing)?;
        let shop = &params.tenant.shop;

        let entries = self.repository.find_by_customer(shop, &customer_id).await?;

        let mut products = Vec::with_capacity(entries.len());
        for entry in entries {
            match self.catalog.find_by_id(shop, &entry.product_id).await {
                Ok(product) => products.push(product),
                Err(err) => self.logger.warn(&format!(
                    "Skipping wishlist product {}: {}",
                    entry.product_id, err
                )),
            }
        }

        self.logger.info(&format!(
            "Resolved {} wishlist products for customer {}",
            products.len(),
            customer_id
        ));
        Ok(products)
    }
}
