use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use business::domain::shared::value_objects::{CustomerId, ProductId};
use business::domain::widget::errors::WidgetError;
use business::domain::widget::services::WishlistGateway;

#[derive(Deserialize)]
struct ListResponse {
    success: bool,
    #[serde(default)]
    items: Vec<ListItem>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListItem {
    product_id: serde_json::Value,
}

/// Widget-side client of the `/api/wishlist` endpoints.
pub struct WishlistApiGateway {
    client: reqwest::Client,
    base_url: String,
    session_token: Option<String>,
}

impl WishlistApiGateway {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session_token: None,
        }
    }

    pub fn with_session_token(mut self, token: impl Into<String>) -> Self {
        self.session_token = Some(token.into());
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/api/wishlist", self.base_url)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.session_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    fn parse_list(body: &str) -> Result<Vec<ProductId>, WidgetError> {
        let data: ListResponse =
            serde_json::from_str(body).map_err(|e| WidgetError::Gateway(e.to_string()))?;
        if !data.success {
            return Err(WidgetError::Gateway("wishlist.list_failed".to_string()));
        }

        Ok(data
            .items
            .into_iter()
            .filter_map(|item| match item.product_id {
                serde_json::Value::String(s) => ProductId::parse(Some(s)),
                serde_json::Value::Number(n) => ProductId::parse(Some(n.to_string())),
                _ => None,
            })
            .collect())
    }

    async fn mutate(
        &self,
        method: reqwest::Method,
        customer_id: &CustomerId,
        product_id: &ProductId,
    ) -> Result<(), WidgetError> {
        let body = json!({
            "customerId": customer_id.as_str(),
            "productId": product_id.as_str(),
        });

        let response = self
            .authorize(self.client.request(method, self.endpoint()))
            .json(&body)
            .send()
            .await
            .map_err(|e| WidgetError::Gateway(e.to_string()))?;

        if !response.status().is_success() {
            return Err(WidgetError::Gateway(response.status().to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl WishlistGateway for WishlistApiGateway {
    async fn list(&self, customer_id: &CustomerId) -> Result<Vec<ProductId>, WidgetError> {
        let response = self
            .authorize(self.client.get(self.endpoint()))
            .query(&[("customerId", customer_id.as_str())])
            .send()
            .await
            .map_err(|e| WidgetError::Gateway(e.to_string()))?;

        if !response.status().is_success() {
            return Err(WidgetError::Gateway(response.status().to_string()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| WidgetError::Gateway(e.to_string()))?;
        Self::parse_list(&body)
    }

    async fn add(
        &self,
        customer_id: &CustomerId,
        product_id: &ProductId,
    ) -> Result<(), WidgetError> {
        self.mutate(reqwest::Method::POST, customer_id, product_id)
            .await
    }

    async fn remove(
        &self,
        customer_id: &CustomerId,
        product_id: &ProductId,
    ) -> Result<(), WidgetError> {
        self.mutate(reqwest::Method::DELETE, customer_id, product_id)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_product_ids_from_list_response() {
        let body = r#"{"success":true,"items":[
            {"id":"a","shop":"shop1","customerId":"cust1","productId":"prod42","createdAt":"2025-01-01T00:00:00Z"},
            {"id":"b","shop":"shop1","customerId":"cust1","productId":7,"createdAt":"2025-01-01T00:00:00Z"}
        ]}"#;

        let ids = WishlistApiGateway::parse_list(body).unwrap();

        assert_eq!(ids.len(), 2);
        assert_eq!(ids[0].as_str(), "prod42");
        assert_eq!(ids[1].as_str(), "7");
    }

    #[test]
    fn should_reject_unsuccessful_list_response() {
        let result = WishlistApiGateway::parse_list(r#"{"success":false}"#);

        assert!(matches!(result, Err(WidgetError::Gateway(_))));
    }

    #[test]
    fn should_build_endpoint_from_base_url() {
        let gateway = WishlistApiGateway::new(reqwest::Client::new(), "https://app.example/");

        assert_eq!(gateway.endpoint(), "https://app.example/api/wishlist");
    }
}
