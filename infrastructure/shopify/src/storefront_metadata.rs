use async_trait::async_trait;
use serde::Deserialize;

use business::domain::shared::value_objects::ProductId;
use business::domain::widget::services::ProductMetadataSource;
use business::domain::wishlist::services::{CatalogError, ProductSummary};

/// Subset of the storefront `/products/<handle>.js` payload.
#[derive(Deserialize)]
struct StorefrontProduct {
    id: u64,
    title: String,
    handle: String,
}

/// Reads product metadata from the public storefront, by handle.
pub struct StorefrontProductSource {
    client: reqwest::Client,
    storefront_origin: String,
}

impl StorefrontProductSource {
    pub fn new(client: reqwest::Client, storefront_origin: impl Into<String>) -> Self {
        Self {
            client,
            storefront_origin: storefront_origin.into().trim_end_matches('/').to_string(),
        }
    }

    fn product_url(&self, handle: &str) -> String {
        format!("{}/products/{}.js", self.storefront_origin, handle)
    }

    fn parse_product(body: &str) -> Result<ProductSummary, CatalogError> {
        let product: StorefrontProduct =
            serde_json::from_str(body).map_err(|_| CatalogError::Unavailable)?;
        Ok(ProductSummary {
            id: ProductId::parse(Some(product.id.to_string())).ok_or(CatalogError::Unavailable)?,
            title: product.title,
            handle: product.handle,
        })
    }
}

#[async_trait]
impl ProductMetadataSource for StorefrontProductSource {
    async fn find_by_handle(&self, handle: &str) -> Result<ProductSummary, CatalogError> {
        let response = self
            .client
            .get(self.product_url(handle))
            .send()
            .await
            .map_err(|_| CatalogError::Unavailable)?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound);
        }
        if !response.status().is_success() {
            return Err(CatalogError::Unavailable);
        }

        let body = response
            .text()
            .await
            .map_err(|_| CatalogError::Unavailable)?;
        Self::parse_product(&body)
    }
}
