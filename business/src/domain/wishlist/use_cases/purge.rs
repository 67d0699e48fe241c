use async_trait::async_trait;

use crate::domain::shared::value_objects::{CustomerId, TenantContext};
use crate::domain::wishlist::errors::WishlistError;

/// What a privacy redaction request covers.
#[derive(Debug, Clone, PartialEq)]
pub enum PurgeScope {
    Customer(CustomerId),
    Shop,
}

pub struct PurgeWishlistParams {
    pub tenant: TenantContext,
    pub scope: PurgeScope,
}

#[async_trait]
pub trait PurgeWishlistUseCase: Send + Sync {
    async fn execute(&self, params: PurgeWishlistParams) -> Result<u64, WishlistError>;
}
