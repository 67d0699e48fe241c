use std::sync::Arc;

use askama::Template;
use poem_openapi::{
    OpenApi,
    payload::{Html, Json},
};

use business::domain::wishlist::services::ProductSummary;
use business::domain::wishlist::use_cases::page::{GetWishlistPageParams, GetWishlistPageUseCase};
use business::domain::wishlist::use_cases::remove::{
    RemoveFromWishlistParams, RemoveFromWishlistUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::AppProxySignature;
use crate::api::tags::ApiTags;
use crate::api::wishlist::dto::{MembershipRequest, SuccessResponse};

const WISHLIST_PAGE_PATH: &str = "/apps/wishlist";
const LOGIN_PATH: &str = "/account/login";

#[derive(Template)]
#[template(path = "wishlist_page.html")]
struct WishlistPageTemplate<'a> {
    customer_id: &'a str,
    endpoint: &'a str,
    products: &'a [ProductSummary],
}

fn login_redirect() -> String {
    let return_url: String =
        url::form_urlencoded::byte_serialize(WISHLIST_PAGE_PATH.as_bytes()).collect();
    format!("{LOGIN_PATH}?return_url={return_url}")
}

fn render_page(customer_id: &str, products: &[ProductSummary]) -> Result<String, askama::Error> {
    WishlistPageTemplate {
        customer_id,
        endpoint: WISHLIST_PAGE_PATH,
        products,
    }
    .render()
}

/// Storefront wishlist page served through the Shopify app proxy.
pub struct WishlistPageApi {
    page_use_case: Arc<dyn GetWishlistPageUseCase>,
    remove_use_case: Arc<dyn RemoveFromWishlistUseCase>,
}

impl WishlistPageApi {
    pub fn new(
        page_use_case: Arc<dyn GetWishlistPageUseCase>,
        remove_use_case: Arc<dyn RemoveFromWishlistUseCase>,
    ) -> Self {
        Self {
            page_use_case,
            remove_use_case,
        }
    }
}

#[OpenApi]
impl WishlistPageApi {
    /// Render the logged-in customer's wishlist
    ///
    /// Anonymous visitors are redirected to the login page.
    #[oai(path = "/apps/wishlist", method = "get", tag = "ApiTags::Storefront")]
    async fn page(&self, auth: AppProxySignature) -> WishlistPageResponse {
        let Some(customer_id) = auth.0.logged_in_customer_id else {
            return WishlistPageResponse::Redirect(login_redirect());
        };

        let params = GetWishlistPageParams {
            tenant: auth.0.tenant,
            customer_id: Some(customer_id.clone()),
        };

        let products = match self.page_use_case.execute(params).await {
            Ok(products) => products,
            Err(err) => {
                let (status, json) = err.into_error_response();
                return match status.as_u16() {
                    400 => WishlistPageResponse::BadRequest(json),
                    _ => WishlistPageResponse::InternalError(json),
                };
            }
        };

        match render_page(&customer_id, &products) {
            Ok(html) => WishlistPageResponse::Ok(Html(html)),
            Err(e) => {
                tracing::error!("Failed to render wishlist page: {e}");
                WishlistPageResponse::InternalError(Json(ErrorResponse::new(
                    "InternalError",
                    "wishlist.page_render_failed",
                )))
            }
        }
    }

    /// Remove a product from the wishlist page
    ///
    /// Same body contract as `DELETE /api/wishlist`; the customer must be the
    /// one logged in to the storefront.
    #[oai(path = "/apps/wishlist", method = "delete", tag = "ApiTags::Storefront")]
    async fn remove(
        &self,
        auth: AppProxySignature,
        body: Json<MembershipRequest>,
    ) -> PageRemoveResponse {
        let customer_id = body.0.customer_id();
        if customer_id.is_some() && customer_id != auth.0.logged_in_customer_id {
            return PageRemoveResponse::Forbidden(Json(ErrorResponse::new(
                "Forbidden",
                "wishlist.customer_mismatch",
            )));
        }

        let params = RemoveFromWishlistParams {
            tenant: auth.0.tenant,
            customer_id,
            product_id: body.0.product_id(),
        };

        match self.remove_use_case.execute(params).await {
            Ok(()) => PageRemoveResponse::Ok(Json(SuccessResponse { success: true })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => PageRemoveResponse::BadRequest(json),
                    _ => PageRemoveResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum WishlistPageResponse {
    #[oai(status = 200)]
    Ok(Html<String>),
    #[oai(status = 302)]
    Redirect(#[oai(header = "Location")] String),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum PageRemoveResponse {
    #[oai(status = 200)]
    Ok(Json<SuccessResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
