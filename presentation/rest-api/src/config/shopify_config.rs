use std::env;

/// Credentials of the Shopify app.
///
/// Environment variables:
/// - SHOPIFY_API_KEY: app client id, the audience of session tokens (required)
/// - SHOPIFY_API_SECRET: app client secret, signs session tokens, app proxy
///   requests and webhooks (required)
/// - SHOPIFY_ADMIN_ACCESS_TOKEN: Admin API token for catalog lookups (required)
/// - SHOPIFY_API_VERSION: Admin API version (default: "2024-10")
#[derive(Debug, Clone)]
pub struct ShopifyConfig {
    pub api_key: String,
    pub api_secret: String,
    pub admin_access_token: String,
    pub api_version: String,
}

impl ShopifyConfig {
    pub fn from_env() -> Self {
        Self {
            api_key: env::var("SHOPIFY_API_KEY").expect("SHOPIFY_API_KEY must be set"),
            api_secret: env::var("SHOPIFY_API_SECRET").expect("SHOPIFY_API_SECRET must be set"),
            admin_access_token: env::var("SHOPIFY_ADMIN_ACCESS_TOKEN")
                .expect("SHOPIFY_ADMIN_ACCESS_TOKEN must be set"),
            api_version: env::var("SHOPIFY_API_VERSION").unwrap_or_else(|_| "2024-10".to_string()),
        }
    }
}
