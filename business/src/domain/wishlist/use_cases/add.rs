use async_trait::async_trait;

use crate::domain::shared::value_objects::TenantContext;
use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::model::WishlistEntry;

pub struct AddToWishlistParams {
    pub tenant: TenantContext,
    pub customer_id: Option<String>,
    pub product_id: Option<String>,
}

/// Adds a product to a customer's wishlist. Adding a product that is
/// already present succeeds and returns the stored entry.
#[async_trait]
pub trait AddToWishlistUseCase: Send + Sync {
    async fn execute(&self, params: AddToWishlistParams) -> Result<WishlistEntry, WishlistError>;
}
