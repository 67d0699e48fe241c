use async_trait::async_trait;

use crate::domain::shared::value_objects::{ProductId, ShopDomain};

/// Display data for a catalog product.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductSummary {
    pub id: ProductId,
    pub title: String,
    pub handle: String,
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog.not_found")]
    NotFound,
    #[error("catalog.unavailable")]
    Unavailable,
}

/// Read-only product catalog of a shop.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    async fn find_by_id(
        &self,
        shop: &ShopDomain,
        product_id: &ProductId,
    ) -> Result<ProductSummary, CatalogError>;
}
