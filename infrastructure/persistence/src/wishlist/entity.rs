use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::shared::value_objects::{CustomerId, ProductId, ShopDomain};
use business::domain::wishlist::model::WishlistEntry;

#[derive(Debug, FromRow)]
pub struct WishlistEntryEntity {
    pub id: Uuid,
    pub shop: String,
    pub customer_id: String,
    pub product_id: String,
    pub created_at: DateTime<Utc>,
}

impl WishlistEntryEntity {
    /// Rows with blank identifiers violate the schema and are dropped.
    pub fn into_domain(self) -> Option<WishlistEntry> {
        Some(WishlistEntry::from_repository(
            self.id,
            ShopDomain::new(self.shop),
            CustomerId::parse(Some(self.customer_id))?,
            ProductId::parse(Some(self.product_id))?,
            self.created_at,
        ))
    }
}
