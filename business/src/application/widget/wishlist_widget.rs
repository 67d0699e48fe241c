use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::ProductId;
use crate::domain::widget::discovery::{DiscoveryStrategy, ProductCard};
use crate::domain::widget::errors::WidgetError;
use crate::domain::widget::model::{
    AccountNavLink, Affordance, AffordanceState, AffordanceView, ToggleOutcome, WidgetConfig,
};
use crate::domain::widget::services::{ProductMetadataSource, WishlistGateway};

/// Heart toggles for the product cards of one storefront page.
///
/// Affordances are keyed by card, so scanning the same page again never
/// mounts a second heart on a card. No lock is held across a request: a
/// second click while the first is in flight issues its own request.
pub struct WishlistWidget {
    config: WidgetConfig,
    gateway: Arc<dyn WishlistGateway>,
    metadata: Arc<dyn ProductMetadataSource>,
    logger: Arc<dyn Logger>,
    affordances: RwLock<BTreeMap<String, Affordance>>,
}

impl WishlistWidget {
    pub fn new(
        config: WidgetConfig,
        gateway: Arc<dyn WishlistGateway>,
        metadata: Arc<dyn ProductMetadataSource>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            config,
            gateway,
            metadata,
            logger,
            affordances: RwLock::new(BTreeMap::new()),
        }
    }

    /// Discovers cards, renders their affordances and syncs initial state.
    pub async fn mount(&self, cards: &[ProductCard]) -> Vec<AffordanceView> {
        self.discover(cards).await;
        self.sync().await;
        self.views().await
    }

    /// Mounts an affordance on every card not seen before whose product can be
    /// resolved. Returns the number of newly mounted affordances.
    pub async fn discover(&self, cards: &[ProductCard]) -> usize {
        let mut mounted = 0;
        for card in cards {
            if self.affordances.read().await.contains_key(&card.card_id) {
                continue;
            }

            let product_id = match self.resolve(card).await {
                Ok(product_id) => product_id,
                Err(_) => {
                    self.logger.debug(&format!(
                        "No product found for card {}, skipping",
                        card.card_id
                    ));
                    continue;
                }
            };

            let mut affordances = self.affordances.write().await;
            if !affordances.contains_key(&card.card_id) {
                affordances.insert(
                    card.card_id.clone(),
                    Affordance {
                        card_id: card.card_id.clone(),
                        product_id,
                        state: AffordanceState::Unknown,
                    },
                );
                mounted += 1;
            }
        }
        mounted
    }

    async fn resolve(&self, card: &ProductCard) -> Result<ProductId, WidgetError> {
        match &self.config.discovery {
            DiscoveryStrategy::DataAttribute => {
                ProductId::parse(card.product_id_attribute.clone()).ok_or(WidgetError::DiscoveryMiss)
            }
            DiscoveryStrategy::LinkLookup(table) => card
                .product_handle()
                .and_then(|handle| table.get(&handle).cloned())
                .ok_or(WidgetError::DiscoveryMiss),
            DiscoveryStrategy::MetadataFetch => {
                let handle = card.product_handle().ok_or(WidgetError::DiscoveryMiss)?;
                self.metadata
                    .find_by_handle(&handle)
                    .await
                    .map(|product| product.id)
                    .map_err(|_| WidgetError::DiscoveryMiss)
            }
        }
    }

    /// Sets every affordance from the server's membership list. Anonymous
    /// visitors and failed fetches leave the affordances untouched.
    pub async fn sync(&self) {
        let Some(customer_id) = &self.config.customer_id else {
            return;
        };

        let members: HashSet<ProductId> = match self.gateway.list(customer_id).await {
            Ok(product_ids) => product_ids.into_iter().collect(),
            Err(err) => {
                self.logger
                    .warn(&format!("Wishlist sync failed, keeping defaults: {}", err));
                return;
            }
        };

        let mut affordances = self.affordances.write().await;
        for affordance in affordances.values_mut() {
            affordance.state = AffordanceState::from_membership(members.contains(&affordance.product_id));
        }
    }

    /// Handles a click on the affordance of `card_id`.
    ///
    /// The displayed state changes only once the request succeeded; every
    /// card showing the same product follows.
    pub async fn toggle(&self, card_id: &str) -> Result<ToggleOutcome, WidgetError> {
        let Some(customer_id) = &self.config.customer_id else {
            return Ok(ToggleOutcome::RedirectToLogin(self.config.login_url()));
        };

        let (product_id, current) = {
            let affordances = self.affordances.read().await;
            let affordance = affordances.get(card_id).ok_or(WidgetError::DiscoveryMiss)?;
            (affordance.product_id.clone(), affordance.state)
        };

        if current.is_filled() {
            self.gateway.remove(customer_id, &product_id).await?;
        } else {
            self.gateway.add(customer_id, &product_id).await?;
        }

        let target = current.toggled();
        let mut affordances = self.affordances.write().await;
        for affordance in affordances
            .values_mut()
            .filter(|a| a.product_id == product_id)
        {
            affordance.state = target;
        }
        Ok(ToggleOutcome::Updated(target))
    }

    pub async fn state(&self, card_id: &str) -> Option<AffordanceState> {
        self.affordances.read().await.get(card_id).map(|a| a.state)
    }

    pub async fn views(&self) -> Vec<AffordanceView> {
        self.affordances
            .read()
            .await
            .values()
            .map(|a| AffordanceView::render(a, &self.config))
            .collect()
    }

    pub fn account_nav_link(&self) -> AccountNavLink {
        AccountNavLink {
            label: self.config.account_link_label.clone(),
            href: self.config.wishlist_page_path.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::domain::shared::value_objects::CustomerId;
    use crate::domain::wishlist::services::{CatalogError, ProductSummary};
    use async_trait::async_trait;
    use mockall::mock;

    mock! {
        pub Gateway {}

        #[async_trait]
        impl WishlistGateway for Gateway {
            async fn list(&self, customer_id: &CustomerId) -> Result<Vec<ProductId>, WidgetError>;
            async fn add(&self, customer_id: &CustomerId, product_id: &ProductId) -> Result<(), WidgetError>;
            async fn remove(&self, customer_id: &CustomerId, product_id: &ProductId) -> Result<(), WidgetError>;
        }
    }

    mock! {
        pub Metadata {}

        #[async_trait]
        impl ProductMetadataSource for Metadata {
            async fn find_by_handle(&self, handle: &str) -> Result<ProductSummary, CatalogError>;
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

    fn product(id: &str) -> ProductId {
        ProductId::parse(Some(id.to_string())).unwrap()
    }

    fn customer() -> Option<CustomerId> {
        CustomerId::parse(Some("cust1".to_string()))
    }

    fn attribute_card(card_id: &str, product_id: Option<&str>) -> ProductCard {
        ProductCard {
            card_id: card_id.to_string(),
            product_id_attribute: product_id.map(String::from),
            link_path: None,
        }
    }

    fn link_card(card_id: &str, link_path: &str) -> ProductCard {
        ProductCard {
            card_id: card_id.to_string(),
            product_id_attribute: None,
            link_path: Some(link_path.to_string()),
        }
    }

    fn widget(
        customer_id: Option<CustomerId>,
        discovery: DiscoveryStrategy,
        gateway: MockGateway,
        metadata: MockMetadata,
    ) -> WishlistWidget {
        WishlistWidget::new(
            WidgetConfig::new(
                customer_id,
                "https://shop1.example/collections/all",
                "https://cdn.example/ext",
                discovery,
            ),
            Arc::new(gateway),
            Arc::new(metadata),
            mock_logger(),
        )
    }

    #[tokio::test]
    async fn should_mount_once_per_card_and_skip_unresolvable() {
        let widget = widget(
            None,
            DiscoveryStrategy::DataAttribute,
            MockGateway::new(),
            MockMetadata::new(),
        );
        let cards = vec![
            attribute_card("a", Some("1")),
            attribute_card("b", None),
            attribute_card("c", Some("")),
        ];

        assert_eq!(widget.discover(&cards).await, 1);
        assert_eq!(widget.discover(&cards).await, 0);
        assert_eq!(widget.views().await.len(), 1);
        assert_eq!(widget.state("a").await, Some(AffordanceState::Unknown));
    }

    #[tokio::test]
    async fn should_resolve_products_through_lookup_table() {
        let table = HashMap::from([("linen-shirt".to_string(), product("101"))]);
        let widget = widget(
            None,
            DiscoveryStrategy::LinkLookup(table),
            MockGateway::new(),
            MockMetadata::new(),
        );

        let mounted = widget
            .discover(&[
                link_card("a", "/products/linen-shirt"),
                link_card("b", "/products/unknown-handle"),
            ])
            .await;

        assert_eq!(mounted, 1);
        assert_eq!(widget.views().await[0].product_id, "101");
    }

    #[tokio::test]
    async fn should_resolve_products_through_metadata_fetch() {
        let mut metadata = MockMetadata::new();
        metadata
            .expect_find_by_handle()
            .returning(|handle| match handle {
                "linen-shirt" => Ok(ProductSummary {
                    id: product("101"),
                    title: "Linen Shirt".to_string(),
                    handle: handle.to_string(),
                }),
                _ => Err(CatalogError::Unavailable),
            });
        let widget = widget(
            None,
            DiscoveryStrategy::MetadataFetch,
            MockGateway::new(),
            metadata,
        );

        let mounted = widget
            .discover(&[
                link_card("a", "/products/linen-shirt"),
                link_card("b", "/products/broken"),
                link_card("c", "/pages/about"),
            ])
            .await;

        assert_eq!(mounted, 1);
    }

    #[tokio::test]
    async fn should_sync_initial_state_for_identified_customer() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_list()
            .returning(|_| Ok(vec![ProductId::parse(Some("1".to_string())).unwrap()]));
        let widget = widget(
            customer(),
            DiscoveryStrategy::DataAttribute,
            gateway,
            MockMetadata::new(),
        );

        let views = widget
            .mount(&[attribute_card("a", Some("1")), attribute_card("b", Some("2"))])
            .await;

        assert_eq!(views.len(), 2);
        assert_eq!(widget.state("a").await, Some(AffordanceState::Filled));
        assert_eq!(widget.state("b").await, Some(AffordanceState::Empty));
        assert!(views[0].icon_url.ends_with("heart-full.svg"));
        assert!(views.iter().all(|v| v.stop_propagation));
    }

    #[tokio::test]
    async fn should_keep_default_state_when_sync_fails() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_list()
            .returning(|_| Err(WidgetError::Gateway("timeout".to_string())));
        let widget = widget(
            customer(),
            DiscoveryStrategy::DataAttribute,
            gateway,
            MockMetadata::new(),
        );

        let views = widget.mount(&[attribute_card("a", Some("1"))]).await;

        assert_eq!(widget.state("a").await, Some(AffordanceState::Unknown));
        assert!(!views[0].filled);
    }

    #[tokio::test]
    async fn should_not_fetch_membership_for_anonymous_visitor() {
        // No list expectation: a call would panic.
        let widget = widget(
            None,
            DiscoveryStrategy::DataAttribute,
            MockGateway::new(),
            MockMetadata::new(),
        );

        widget.mount(&[attribute_card("a", Some("1"))]).await;

        assert_eq!(widget.state("a").await, Some(AffordanceState::Unknown));
    }

    #[tokio::test]
    async fn should_redirect_anonymous_visitor_to_login() {
        let widget = widget(
            None,
            DiscoveryStrategy::DataAttribute,
            MockGateway::new(),
            MockMetadata::new(),
        );
        widget.discover(&[attribute_card("a", Some("1"))]).await;

        let outcome = widget.toggle("a").await.unwrap();

        assert_eq!(
            outcome,
            ToggleOutcome::RedirectToLogin(
                "/account/login?return_url=https%3A%2F%2Fshop1.example%2Fcollections%2Fall"
                    .to_string()
            )
        );
        assert_eq!(widget.state("a").await, Some(AffordanceState::Unknown));
    }

    #[tokio::test]
    async fn should_add_then_remove_on_successive_clicks() {
        let mut gateway = MockGateway::new();
        gateway.expect_list().returning(|_| Ok(vec![]));
        gateway.expect_add().times(1).returning(|_, _| Ok(()));
        gateway.expect_remove().times(1).returning(|_, _| Ok(()));
        let widget = widget(
            customer(),
            DiscoveryStrategy::DataAttribute,
            gateway,
            MockMetadata::new(),
        );
        widget.mount(&[attribute_card("a", Some("1"))]).await;

        let first = widget.toggle("a").await.unwrap();
        assert_eq!(first, ToggleOutcome::Updated(AffordanceState::Filled));

        let second = widget.toggle("a").await.unwrap();
        assert_eq!(second, ToggleOutcome::Updated(AffordanceState::Empty));
    }

    #[tokio::test]
    async fn should_keep_state_when_toggle_request_fails() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_list()
            .returning(|_| Ok(vec![ProductId::parse(Some("1".to_string())).unwrap()]));
        gateway
            .expect_remove()
            .returning(|_, _| Err(WidgetError::Gateway("500".to_string())));
        let widget = widget(
            customer(),
            DiscoveryStrategy::DataAttribute,
            gateway,
            MockMetadata::new(),
        );
        widget.mount(&[attribute_card("a", Some("1"))]).await;

        let result = widget.toggle("a").await;

        assert!(matches!(result.unwrap_err(), WidgetError::Gateway(_)));
        assert_eq!(widget.state("a").await, Some(AffordanceState::Filled));
    }

    #[tokio::test]
    async fn should_update_every_card_showing_the_same_product() {
        let mut gateway = MockGateway::new();
        gateway.expect_list().returning(|_| Ok(vec![]));
        gateway.expect_add().returning(|_, _| Ok(()));
        let widget = widget(
            customer(),
            DiscoveryStrategy::DataAttribute,
            gateway,
            MockMetadata::new(),
        );
        widget
            .mount(&[
                attribute_card("featured", Some("1")),
                attribute_card("grid", Some("1")),
            ])
            .await;

        widget.toggle("featured").await.unwrap();

        assert_eq!(widget.state("grid").await, Some(AffordanceState::Filled));
    }

    #[tokio::test]
    async fn should_reject_toggle_on_unmounted_card() {
        let widget = widget(
            customer(),
            DiscoveryStrategy::DataAttribute,
            MockGateway::new(),
            MockMetadata::new(),
        );

        let result = widget.toggle("missing").await;

        assert!(matches!(result.unwrap_err(), WidgetError::DiscoveryMiss));
    }

    #[tokio::test]
    async fn should_link_account_navigation_to_wishlist_page() {
        let widget = widget(
            None,
            DiscoveryStrategy::DataAttribute,
            MockGateway::new(),
            MockMetadata::new(),
        );

        let link = widget.account_nav_link();

        assert_eq!(link.href, "/apps/wishlist");
        assert_eq!(link.label, "My Wishlist");
    }
}
