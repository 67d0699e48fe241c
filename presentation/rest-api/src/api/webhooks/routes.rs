use std::sync::Arc;

use poem_openapi::{OpenApi, param::Header, payload::Json};

use business::domain::shared::value_objects::{CustomerId, ShopDomain, TenantContext};
use business::domain::wishlist::use_cases::list::{ListWishlistParams, ListWishlistUseCase};
use business::domain::wishlist::use_cases::purge::{
    PurgeScope, PurgeWishlistParams, PurgeWishlistUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::verify_webhook;
use crate::api::tags::ApiTags;
use crate::api::webhooks::dto::{PrivacyTopic, PrivacyWebhookPayload};
use crate::api::wishlist::dto::SuccessResponse;

pub struct WebhookApi {
    api_secret: String,
    list_use_case: Arc<dyn ListWishlistUseCase>,
    purge_use_case: Arc<dyn PurgeWishlistUseCase>,
}

impl WebhookApi {
    pub fn new(
        api_secret: String,
        list_use_case: Arc<dyn ListWishlistUseCase>,
        purge_use_case: Arc<dyn PurgeWishlistUseCase>,
    ) -> Self {
        Self {
            api_secret,
            list_use_case,
            purge_use_case,
        }
    }

    async fn handle(
        &self,
        topic: PrivacyTopic,
        tenant: TenantContext,
        payload: PrivacyWebhookPayload,
    ) -> PrivacyWebhookResponse {
        let customer_id = CustomerId::parse(payload.customer_id());

        let scope = match (topic, customer_id) {
            (PrivacyTopic::ShopRedact, _) => PurgeScope::Shop,
            (PrivacyTopic::CustomersRedact, Some(customer_id)) => PurgeScope::Customer(customer_id),
            (PrivacyTopic::CustomersDataRequest, Some(customer_id)) => {
                return self.report(tenant, customer_id).await;
            }
            (_, None) => {
                return PrivacyWebhookResponse::BadRequest(Json(ErrorResponse::new(
                    "ValidationError",
                    "wishlist.customer_id_missing",
                )));
            }
        };

        let params = PurgeWishlistParams { tenant, scope };
        match self.purge_use_case.execute(params).await {
            Ok(_) => PrivacyWebhookResponse::Ok(Json(SuccessResponse { success: true })),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                PrivacyWebhookResponse::InternalError(json)
            }
        }
    }

    async fn report(&self, tenant: TenantContext, customer_id: CustomerId) -> PrivacyWebhookResponse {
        let shop = tenant.shop.clone();
        let params = ListWishlistParams {
            tenant,
            customer_id: Some(customer_id.to_string()),
        };

        match self.list_use_case.execute(params).await {
            Ok(entries) => {
                let product_ids: Vec<&str> =
                    entries.iter().map(|e| e.product_id.as_str()).collect();
                tracing::info!(
                    shop = %shop,
                    customer = %customer_id,
                    products = ?product_ids,
                    "Customer data request"
                );
                PrivacyWebhookResponse::Ok(Json(SuccessResponse { success: true }))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                PrivacyWebhookResponse::InternalError(json)
            }
        }
    }
}

/// Mandatory Shopify privacy webhooks
#[OpenApi]
impl WebhookApi {
    /// Receive a privacy webhook
    ///
    /// Handles `customers/redact`, `shop/redact` and `customers/data_request`.
    /// The raw body must carry a valid `X-Shopify-Hmac-Sha256` signature.
    #[oai(
        path = "/api/webhooks/privacy",
        method = "post",
        tag = "ApiTags::Webhooks"
    )]
    async fn privacy(
        &self,
        #[oai(name = "X-Shopify-Topic")] topic: Header<String>,
        #[oai(name = "X-Shopify-Hmac-Sha256")] hmac: Header<String>,
        #[oai(name = "X-Shopify-Shop-Domain")] shop_domain: Header<Option<String>>,
        // Raw bytes: the HMAC covers the body exactly as sent
        body: Vec<u8>,
    ) -> PrivacyWebhookResponse {
        if let Err(e) = verify_webhook(&body, &hmac.0, &self.api_secret) {
            tracing::warn!("Rejected webhook: {e}");
            return PrivacyWebhookResponse::Unauthorized(Json(ErrorResponse::new(
                "Unauthorized",
                "auth.invalid_hmac",
            )));
        }

        let Some(topic) = PrivacyTopic::parse(&topic.0) else {
            return PrivacyWebhookResponse::BadRequest(Json(ErrorResponse::new(
                "ValidationError",
                "webhook.unsupported_topic",
            )));
        };

        let payload: PrivacyWebhookPayload = match serde_json::from_slice(&body) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!("Malformed webhook payload: {e}");
                return PrivacyWebhookResponse::BadRequest(Json(ErrorResponse::new(
                    "ValidationError",
                    "webhook.malformed_payload",
                )));
            }
        };

        let Some(shop) = payload.shop_domain.clone().or(shop_domain.0) else {
            return PrivacyWebhookResponse::BadRequest(Json(ErrorResponse::new(
                "ValidationError",
                "webhook.shop_missing",
            )));
        };

        self.handle(topic, TenantContext::new(ShopDomain::new(shop)), payload)
            .await
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum PrivacyWebhookResponse {
    #[oai(status = 200)]
    Ok(Json<SuccessResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
