use std::sync::Arc;

use logger::TracingLogger;
use persistence::wishlist::repository::WishlistRepositoryPostgres;
use shopify::admin_catalog::ShopifyAdminCatalog;
use shopify::client::ShopifyClient;

use business::application::wishlist::add::AddToWishlistUseCaseImpl;
use business::application::wishlist::list::ListWishlistUseCaseImpl;
use business::application::wishlist::page::GetWishlistPageUseCaseImpl;
use business::application::wishlist::purge::PurgeWishlistUseCaseImpl;
use business::application::wishlist::remove::RemoveFromWishlistUseCaseImpl;

use crate::api::health::routes::HealthApi;
use crate::api::page::routes::WishlistPageApi;
use crate::api::webhooks::routes::WebhookApi;
use crate::api::wishlist::routes::WishlistApi;
use crate::config::shopify_config::ShopifyConfig;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub wishlist_api: WishlistApi,
    pub page_api: WishlistPageApi,
    pub webhook_api: WebhookApi,
}

impl DependencyContainer {
    pub async fn new(pool: sqlx::PgPool, shopify_config: &ShopifyConfig) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let health_api = HealthApi::new();

        // Infrastructure adapters
        let repository = Arc::new(WishlistRepositoryPostgres::new(pool));
        let catalog = Arc::new(ShopifyAdminCatalog::new(ShopifyClient::new(
            shopify_config.admin_access_token.clone(),
            shopify_config.api_version.clone(),
        )));

        // Wishlist use cases
        let list_use_case = Arc::new(ListWishlistUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let add_use_case = Arc::new(AddToWishlistUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let remove_use_case = Arc::new(RemoveFromWishlistUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let page_use_case = Arc::new(GetWishlistPageUseCaseImpl {
            repository: repository.clone(),
            catalog,
            logger: logger.clone(),
        });
        let purge_use_case = Arc::new(PurgeWishlistUseCaseImpl {
            repository,
            logger,
        });

        let wishlist_api =
            WishlistApi::new(list_use_case.clone(), add_use_case, remove_use_case.clone());
        let page_api = WishlistPageApi::new(page_use_case, remove_use_case);
        let webhook_api = WebhookApi::new(
            shopify_config.api_secret.clone(),
            list_use_case,
            purge_use_case,
        );

        Ok(Self {
            health_api,
            wishlist_api,
            page_api,
            webhook_api,
        })
    }
}
