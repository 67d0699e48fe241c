use async_trait::async_trait;

use crate::domain::shared::value_objects::TenantContext;
use crate::domain::wishlist::errors::WishlistError;

pub struct RemoveFromWishlistParams {
    pub tenant: TenantContext,
    pub customer_id: Option<String>,
    pub product_id: Option<String>,
}

#[async_trait]
pub trait RemoveFromWishlistUseCase: Send + Sync {
    async fn execute(&self, params: RemoveFromWishlistParams) -> Result<(), WishlistError>;
}
