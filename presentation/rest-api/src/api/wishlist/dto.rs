use chrono::{DateTime, Utc};
use poem_openapi::Object;
use serde_json::Value;

use business::domain::wishlist::model::WishlistEntry;

/// Body of add and remove requests.
///
/// Identifiers are accepted as JSON strings or numbers.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct MembershipRequest {
    /// Shopper identifier
    pub customer_id: Option<Value>,
    /// Product identifier
    pub product_id: Option<Value>,
}

impl MembershipRequest {
    pub fn customer_id(&self) -> Option<String> {
        identifier_from_json(self.customer_id.as_ref())
    }

    pub fn product_id(&self) -> Option<String> {
        identifier_from_json(self.product_id.as_ref())
    }
}

/// Stringifies a JSON identifier. Anything other than a string or a number
/// counts as missing.
pub fn identifier_from_json(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct WishlistEntryResponse {
    pub id: String,
    pub shop: String,
    pub customer_id: String,
    pub product_id: String,
    pub created_at: DateTime<Utc>,
}

impl From<WishlistEntry> for WishlistEntryResponse {
    fn from(entry: WishlistEntry) -> Self {
        Self {
            id: entry.id.to_string(),
            shop: entry.shop.to_string(),
            customer_id: entry.customer_id.to_string(),
            product_id: entry.product_id.to_string(),
            created_at: entry.created_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct WishlistItemsResponse {
    pub success: bool,
    pub items: Vec<WishlistEntryResponse>,
}

#[derive(Debug, Clone, Object)]
pub struct WishlistEntryCreatedResponse {
    pub success: bool,
    pub entry: WishlistEntryResponse,
}

#[derive(Debug, Clone, Object)]
pub struct SuccessResponse {
    pub success: bool,
}
