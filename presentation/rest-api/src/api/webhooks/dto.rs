use serde::Deserialize;
use serde_json::Value;

use crate::api::wishlist::dto::identifier_from_json;

/// Customer reference inside a privacy webhook payload.
#[derive(Debug, Deserialize)]
pub struct WebhookCustomer {
    pub id: Option<Value>,
}

/// Payload shared by `customers/redact`, `customers/data_request` and
/// `shop/redact`.
#[derive(Debug, Deserialize)]
pub struct PrivacyWebhookPayload {
    pub shop_domain: Option<String>,
    pub customer: Option<WebhookCustomer>,
}

impl PrivacyWebhookPayload {
    pub fn customer_id(&self) -> Option<String> {
        identifier_from_json(self.customer.as_ref()?.id.as_ref())
    }
}

/// Privacy topics this app subscribes to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PrivacyTopic {
    CustomersDataRequest,
    CustomersRedact,
    ShopRedact,
}

impl PrivacyTopic {
    pub fn parse(topic: &str) -> Option<Self> {
        match topic.trim() {
            "customers/data_request" => Some(Self::CustomersDataRequest),
            "customers/redact" => Some(Self::CustomersRedact),
            "shop/redact" => Some(Self::ShopRedact),
            _ => None,
        }
    }
}
