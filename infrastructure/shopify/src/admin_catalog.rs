use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;

use business::domain::shared::value_objects::{ProductId, ShopDomain};
use business::domain::wishlist::services::{CatalogError, ProductCatalog, ProductSummary};

use crate::client::{ShopifyClient, numeric_product_id};

#[derive(Deserialize)]
struct AdminProductResponse {
    product: AdminProduct,
}

#[derive(Deserialize)]
struct AdminProduct {
    id: serde_json::Value,
    title: String,
    handle: String,
}

/// Product catalog backed by the Shopify Admin REST API.
pub struct ShopifyAdminCatalog {
    client: ShopifyClient,
}

impl ShopifyAdminCatalog {
    pub fn new(client: ShopifyClient) -> Self {
        Self { client }
    }

    fn parse_product(body: &str) -> Result<ProductSummary, CatalogError> {
        let data: AdminProductResponse =
            serde_json::from_str(body).map_err(|_| CatalogError::Unavailable)?;
        let id = match data.product.id {
            serde_json::Value::Number(n) => n.to_string(),
            serde_json::Value::String(s) => s,
            _ => return Err(CatalogError::Unavailable),
        };

        Ok(ProductSummary {
            id: ProductId::parse(Some(id)).ok_or(CatalogError::Unavailable)?,
            title: data.product.title,
            handle: data.product.handle,
        })
    }
}

#[async_trait]
impl ProductCatalog for ShopifyAdminCatalog {
    async fn find_by_id(
        &self,
        shop: &ShopDomain,
        product_id: &ProductId,
    ) -> Result<ProductSummary, CatalogError> {
        let url = self
            .client
            .product_url(shop.as_str(), numeric_product_id(product_id.as_str()));
        let (header, token) = self.client.access_token_header();

        let response = self
            .client
            .client
            .get(url)
            .header(header, token)
            .send()
            .await
            .map_err(|_| CatalogError::Unavailable)?;

        match response.status() {
            StatusCode::NOT_FOUND => return Err(CatalogError::NotFound),
            status if !status.is_success() => return Err(CatalogError::Unavailable),
            _ => {}
        }

        let body = response
            .text()
            .await
            .map_err(|_| CatalogError::Unavailable)?;
        Self::parse_product(&body)
    }
}
