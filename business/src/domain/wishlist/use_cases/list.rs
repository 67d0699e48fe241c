use async_trait::async_trait;

use crate::domain::shared::value_objects::TenantContext;
use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::model::WishlistEntry;

pub struct ListWishlistParams {
    pub tenant: TenantContext,
    pub customer_id: Option<String>,
}

#[async_trait]
pub trait ListWishlistUseCase: Send + Sync {
    async fn execute(&self, params: ListWishlistParams)
    -> Result<Vec<WishlistEntry>, WishlistError>;
}
