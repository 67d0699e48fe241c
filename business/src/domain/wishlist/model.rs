use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::WishlistError;
use crate::domain::shared::value_objects::{CustomerId, ProductId, ShopDomain};

/// A (shop, customer, product) membership record.
#[derive(Debug, Clone, PartialEq)]
pub struct WishlistEntry {
    pub id: Uuid,
    pub shop: ShopDomain,
    pub customer_id: CustomerId,
    pub product_id: ProductId,
    pub created_at: DateTime<Utc>,
}

impl WishlistEntry {
    pub fn new(shop: ShopDomain, customer_id: CustomerId, product_id: ProductId) -> Self {
        Self {
            id: Uuid::new_v4(),
            shop,
            customer_id,
            product_id,
            created_at: Utc::now(),
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        shop: ShopDomain,
        customer_id: CustomerId,
        product_id: ProductId,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            shop,
            customer_id,
            product_id,
            created_at,
        }
    }

    /// Whether this entry identifies the given tuple.
    pub fn matches(&self, shop: &ShopDomain, customer_id: &CustomerId, product_id: &ProductId) -> bool {
        &self.shop == shop && &self.customer_id == customer_id && &self.product_id == product_id
    }
}

/// Validated identifiers of one membership tuple within a tenant.
#[derive(Debug, Clone, PartialEq)]
pub struct MembershipKey {
    pub customer_id: CustomerId,
    pub product_id: ProductId,
}

impl MembershipKey {
    /// Validates raw request identifiers. The customer is checked first.
    pub fn parse(
        customer_id: Option<String>,
        product_id: Option<String>,
    ) -> Result<Self, WishlistError> {
        let customer_id = CustomerId::parse(customer_id).ok_or(WishlistError::CustomerIdMissing)?;
        let product_id = ProductId::parse(product_id).ok_or(WishlistError::ProductIdMissing)?;
        Ok(Self {
            customer_id,
            product_id,
        })
    }
}
