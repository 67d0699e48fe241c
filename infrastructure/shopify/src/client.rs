use reqwest::Client;

const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

/// Shared Shopify HTTP client configuration.
pub struct ShopifyClient {
    pub client: Client,
    pub access_token: String,
    pub api_version: String,
}

impl ShopifyClient {
    pub fn new(access_token: String, api_version: String) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .unwrap_or_default();

        Self {
            client,
            access_token,
            api_version,
        }
    }

    pub fn access_token_header(&self) -> (&'static str, &str) {
        (ACCESS_TOKEN_HEADER, &self.access_token)
    }

    /// Admin REST URL of a single product, restricted to display fields.
    pub fn product_url(&self, shop: &str, product_id: &str) -> String {
        format!(
            "https://{}/admin/api/{}/products/{}.json?fields=id,title,handle",
            shop, self.api_version, product_id
        )
    }
}

/// Strips the `gid://shopify/Product/` prefix of a global id, if present.
pub fn numeric_product_id(product_id: &str) -> &str {
    product_id
        .rsplit_once('/')
        .map(|(_, id)| id)
        .unwrap_or(product_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_admin_product_url() {
        let client = ShopifyClient::new("token".to_string(), "2024-10".to_string());

        assert_eq!(
            client.product_url("shop1.myshopify.com", "42"),
            "https://shop1.myshopify.com/admin/api/2024-10/products/42.json?fields=id,title,handle"
        );
    }

    #[test]
    fn should_strip_global_id_prefix() {
        assert_eq!(numeric_product_id("gid://shopify/Product/42"), "42");
        assert_eq!(numeric_product_id("42"), "42");
    }
}
