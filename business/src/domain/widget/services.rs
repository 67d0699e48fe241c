use async_trait::async_trait;

use crate::domain::shared::value_objects::{CustomerId, ProductId};
use crate::domain::wishlist::services::{CatalogError, ProductSummary};

use super::errors::WidgetError;

/// Client-side access to the wishlist HTTP API.
#[async_trait]
pub trait WishlistGateway: Send + Sync {
    async fn list(&self, customer_id: &CustomerId) -> Result<Vec<ProductId>, WidgetError>;
    async fn add(&self, customer_id: &CustomerId, product_id: &ProductId)
    -> Result<(), WidgetError>;
    async fn remove(
        &self,
        customer_id: &CustomerId,
        product_id: &ProductId,
    ) -> Result<(), WidgetError>;
}

/// Storefront product metadata addressed by handle.
#[async_trait]
pub trait ProductMetadataSource: Send + Sync {
    async fn find_by_handle(&self, handle: &str) -> Result<ProductSummary, CatalogError>;
}
