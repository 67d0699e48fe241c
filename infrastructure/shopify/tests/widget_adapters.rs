use std::sync::Arc;
use std::time::Duration;

use business::application::widget::wishlist_widget::WishlistWidget;
use business::domain::shared::value_objects::CustomerId;
use business::domain::widget::discovery::{DiscoveryStrategy, ProductCard};
use business::domain::widget::errors::WidgetError;
use business::domain::widget::model::{AffordanceState, ToggleOutcome, WidgetConfig};
use logger::TracingLogger;
use shopify::storefront_metadata::StorefrontProductSource;
use shopify::wishlist_gateway::WishlistApiGateway;

// Nothing listens on the discard port.
const UNREACHABLE: &str = "http://127.0.0.1:9";

fn widget(customer: Option<&str>, discovery: DiscoveryStrategy) -> WishlistWidget {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(2))
        .build()
        .unwrap();
    let config = WidgetConfig::new(
        customer.and_then(|c| CustomerId::parse(Some(c.to_string()))),
        "/collections/all",
        "https://cdn.example",
        discovery,
    );

    WishlistWidget::new(
        config,
        Arc::new(WishlistApiGateway::new(client.clone(), UNREACHABLE).with_session_token("jwt")),
        Arc::new(StorefrontProductSource::new(client, UNREACHABLE)),
        Arc::new(TracingLogger),
    )
}

fn card(id: &str, product: Option<&str>, link: Option<&str>) -> ProductCard {
    ProductCard {
        card_id: id.to_string(),
        product_id_attribute: product.map(String::from),
        link_path: link.map(String::from),
    }
}

#[tokio::test]
async fn should_keep_default_state_when_wishlist_api_is_down() {
    let widget = widget(Some("cust1"), DiscoveryStrategy::DataAttribute);

    let views = widget.mount(&[card("c1", Some("prod42"), None)]).await;

    assert_eq!(views.len(), 1);
    assert_eq!(widget.state("c1").await, Some(AffordanceState::Unknown));
}

#[tokio::test]
async fn should_leave_state_unchanged_when_toggle_request_fails() {
    let widget = widget(Some("cust1"), DiscoveryStrategy::DataAttribute);
    widget.mount(&[card("c1", Some("prod42"), None)]).await;

    let result = widget.toggle("c1").await;

    assert!(matches!(result, Err(WidgetError::Gateway(_))));
    assert_eq!(widget.state("c1").await, Some(AffordanceState::Unknown));
}

#[tokio::test]
async fn should_skip_cards_when_metadata_cannot_be_fetched() {
    let widget = widget(Some("cust1"), DiscoveryStrategy::MetadataFetch);

    let views = widget
        .mount(&[card("c1", None, Some("/products/linen-shirt"))])
        .await;

    assert!(views.is_empty());
}

#[tokio::test]
async fn should_redirect_anonymous_visitor_without_calling_the_api() {
    let widget = widget(None, DiscoveryStrategy::DataAttribute);
    widget.mount(&[card("c1", Some("prod42"), None)]).await;

    let outcome = widget.toggle("c1").await.unwrap();

    assert_eq!(
        outcome,
        ToggleOutcome::RedirectToLogin("/account/login?return_url=%2Fcollections%2Fall".to_string())
    );
}
