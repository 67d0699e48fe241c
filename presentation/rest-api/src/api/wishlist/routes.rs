use std::sync::Arc;

use poem_openapi::{OpenApi, param::Query, payload::Json};

use business::domain::wishlist::use_cases::add::{AddToWishlistParams, AddToWishlistUseCase};
use business::domain::wishlist::use_cases::list::{ListWishlistParams, ListWishlistUseCase};
use business::domain::wishlist::use_cases::remove::{
    RemoveFromWishlistParams, RemoveFromWishlistUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::ShopifySessionBearer;
use crate::api::tags::ApiTags;
use crate::api::wishlist::dto::{
    MembershipRequest, SuccessResponse, WishlistEntryCreatedResponse, WishlistItemsResponse,
};

pub struct WishlistApi {
    list_use_case: Arc<dyn ListWishlistUseCase>,
    add_use_case: Arc<dyn AddToWishlistUseCase>,
    remove_use_case: Arc<dyn RemoveFromWishlistUseCase>,
}

impl WishlistApi {
    pub fn new(
        list_use_case: Arc<dyn ListWishlistUseCase>,
        add_use_case: Arc<dyn AddToWishlistUseCase>,
        remove_use_case: Arc<dyn RemoveFromWishlistUseCase>,
    ) -> Self {
        Self {
            list_use_case,
            add_use_case,
            remove_use_case,
        }
    }
}

/// Wishlist membership API
///
/// Every endpoint requires a Shopify session token; the shop is taken from it.
#[OpenApi]
impl WishlistApi {
    /// List a customer's wishlist
    #[oai(path = "/api/wishlist", method = "get", tag = "ApiTags::Wishlist")]
    async fn list(
        &self,
        auth: ShopifySessionBearer,
        #[oai(name = "customerId")] customer_id: Query<Option<String>>,
    ) -> ListWishlistResponse {
        let params = ListWishlistParams {
            tenant: auth.0,
            customer_id: customer_id.0,
        };

        match self.list_use_case.execute(params).await {
            Ok(entries) => ListWishlistResponse::Ok(Json(WishlistItemsResponse {
                success: true,
                items: entries.into_iter().map(Into::into).collect(),
            })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => ListWishlistResponse::BadRequest(json),
                    _ => ListWishlistResponse::InternalError(json),
                }
            }
        }
    }

    /// Add a product to a wishlist
    ///
    /// Adding a product that is already present succeeds and returns the
    /// stored entry.
    #[oai(path = "/api/wishlist", method = "post", tag = "ApiTags::Wishlist")]
    async fn add(
        &self,
        auth: ShopifySessionBearer,
        body: Json<MembershipRequest>,
    ) -> AddToWishlistResponse {
        let params = AddToWishlistParams {
            tenant: auth.0,
            customer_id: body.0.customer_id(),
            product_id: body.0.product_id(),
        };

        match self.add_use_case.execute(params).await {
            Ok(entry) => AddToWishlistResponse::Ok(Json(WishlistEntryCreatedResponse {
                success: true,
                entry: entry.into(),
            })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => AddToWishlistResponse::BadRequest(json),
                    _ => AddToWishlistResponse::InternalError(json),
                }
            }
        }
    }

    /// Remove a product from a wishlist
    ///
    /// Removing a product that is not present also succeeds.
    #[oai(path = "/api/wishlist", method = "delete", tag = "ApiTags::Wishlist")]
    async fn remove(
        &self,
        auth: ShopifySessionBearer,
        body: Json<MembershipRequest>,
    ) -> RemoveFromWishlistResponse {
        let params = RemoveFromWishlistParams {
            tenant: auth.0,
            customer_id: body.0.customer_id(),
            product_id: body.0.product_id(),
        };

        match self.remove_use_case.execute(params).await {
            Ok(()) => RemoveFromWishlistResponse::Ok(Json(SuccessResponse { success: true })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => RemoveFromWishlistResponse::BadRequest(json),
                    _ => RemoveFromWishlistResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListWishlistResponse {
    #[oai(status = 200)]
    Ok(Json<WishlistItemsResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddToWishlistResponse {
    #[oai(status = 200)]
    Ok(Json<WishlistEntryCreatedResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum RemoveFromWishlistResponse {
    #[oai(status = 200)]
    Ok(Json<SuccessResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
