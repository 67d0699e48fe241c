use async_trait::async_trait;

use crate::domain::shared::value_objects::TenantContext;
use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::services::ProductSummary;

pub struct GetWishlistPageParams {
    pub tenant: TenantContext,
    pub customer_id: Option<String>,
}

/// Resolves a customer's wishlist into displayable products.
#[async_trait]
pub trait GetWishlistPageUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetWishlistPageParams,
    ) -> Result<Vec<ProductSummary>, WishlistError>;
}
