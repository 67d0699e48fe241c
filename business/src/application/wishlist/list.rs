use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::CustomerId;
use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::model::WishlistEntry;
use crate::domain::wishlist::repository::WishlistRepository;
use crate::domain::wishlist::use_cases::list::{ListWishlistParams, ListWishlistUseCase};

pub struct ListWishlistUseCaseImpl {
    pub repository: Arc<dyn WishlistRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListWishlistUseCase for ListWishlistUseCaseImpl {
    async fn execute(
        &self,
        params: ListWishlistParams,
    ) -> Result<Vec<WishlistEntry>, WishlistError> {
        let customer_id =
            CustomerId::parse(params.customer_id).ok_or(WishlistError::CustomerIdMissing)?;
        let shop = &params.tenant.shop;

        self.logger.info(&format!(
            "Listing wishlist for customer {} in {}",
            customer_id, shop
        ));
        let entries = self.repository.find_by_customer(shop, &customer_id).await?;
        self.logger
            .debug(&format!("Retrieved {} wishlist entries", entries.len()));
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::{ProductId, ShopDomain, TenantContext};
    use mockall::mock;

    mock! {
        pub WishlistRepo {}

        #[async_trait]
        impl WishlistRepository for WishlistRepo {
            async fn find_by_customer(&self, shop: &ShopDomain, customer_id: &CustomerId) -> Result<Vec<WishlistEntry>, RepositoryError>;
            async fn find(&self, shop: &ShopDomain, customer_id: &CustomerId, product_id: &ProductId) -> Result<Option<WishlistEntry>, RepositoryError>;
            async fn insert(&self, entry: &WishlistEntry) -> Result<(), RepositoryError>;
            async fn delete(&self, shop: &ShopDomain, customer_id: &CustomerId, product_id: &ProductId) -> Result<u64, RepositoryError>;
            async fn delete_by_customer(&self, shop: &ShopDomain, customer_id: &CustomerId) -> Result<u64, RepositoryError>;
            async fn delete_by_shop(&self, shop: &ShopDomain) -> Result<u64, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn tenant() -> TenantContext {
        TenantContext::new(ShopDomain::new("shop1"))
    }

    fn entry(product: &str) -> WishlistEntry {
        WishlistEntry::new(
            ShopDomain::new("shop1"),
            CustomerId::parse(Some("cust1".to_string())).unwrap(),
            ProductId::parse(Some(product.to_string())).unwrap(),
        )
    }

    #[tokio::test]
    async fn should_return_customer_entries() {
        let mut mock_repo = MockWishlistRepo::new();
        mock_repo
            .expect_find_by_customer()
            .withf(|shop, customer_id| shop.as_str() == "shop1" && customer_id.as_str() == "cust1")
            .returning(|_, _| Ok(vec![entry("prod1"), entry("prod2")]));

        let use_case = ListWishlistUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ListWishlistParams {
                tenant: tenant(),
                customer_id: Some("cust1".to_string()),
            })
            .await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn should_reject_without_store_access_when_customer_missing() {
        // No expectations: any repository call panics.
        let mock_repo = MockWishlistRepo::new();

        let use_case = ListWishlistUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ListWishlistParams {
                tenant: tenant(),
                customer_id: None,
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            WishlistError::CustomerIdMissing
        ));
    }

    #[tokio::test]
    async fn should_surface_storage_failure() {
        let mut mock_repo = MockWishlistRepo::new();
        mock_repo
            .expect_find_by_customer()
            .returning(|_, _| Err(RepositoryError::DatabaseError));

        let use_case = ListWishlistUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ListWishlistParams {
                tenant: tenant(),
                customer_id: Some("cust1".to_string()),
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            WishlistError::Repository(RepositoryError::DatabaseError)
        ));
    }
}
