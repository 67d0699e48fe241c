use serde::Serialize;

use crate::domain::shared::value_objects::{CustomerId, ProductId};

use super::discovery::DiscoveryStrategy;

const HEART_FULL: &str = "heart-full.svg";
const HEART_EMPTY: &str = "heart-empty.svg";

/// Membership state shown by one affordance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AffordanceState {
    Unknown,
    Empty,
    Filled,
}

impl AffordanceState {
    pub fn from_membership(is_member: bool) -> Self {
        if is_member {
            AffordanceState::Filled
        } else {
            AffordanceState::Empty
        }
    }

    /// `Unknown` renders the same as `Empty`.
    pub fn is_filled(self) -> bool {
        self == AffordanceState::Filled
    }

    pub fn toggled(self) -> Self {
        AffordanceState::from_membership(!self.is_filled())
    }
}

/// Explicit widget configuration, supplied at initialisation.
#[derive(Debug, Clone)]
pub struct WidgetConfig {
    /// Logged-in customer, `None` for anonymous visitors.
    pub customer_id: Option<CustomerId>,
    /// URL of the page the widget runs on, used as the login return URL.
    pub page_url: String,
    /// Base URL of the theme extension assets.
    pub asset_base_url: String,
    pub login_path: String,
    pub wishlist_page_path: String,
    pub account_link_label: String,
    pub discovery: DiscoveryStrategy,
}

impl WidgetConfig {
    pub fn new(
        customer_id: Option<CustomerId>,
        page_url: impl Into<String>,
        asset_base_url: impl Into<String>,
        discovery: DiscoveryStrategy,
    ) -> Self {
        Self {
            customer_id,
            page_url: page_url.into(),
            asset_base_url: asset_base_url.into(),
            login_path: "/account/login".to_string(),
            wishlist_page_path: "/apps/wishlist".to_string(),
            account_link_label: "My Wishlist".to_string(),
            discovery,
        }
    }

    pub fn icon_url(&self, state: AffordanceState) -> String {
        let icon = if state.is_filled() {
            HEART_FULL
        } else {
            HEART_EMPTY
        };
        format!("{}/assets/{}", self.asset_base_url.trim_end_matches('/'), icon)
    }

    /// Login URL carrying a return URL back to the current page.
    pub fn login_url(&self) -> String {
        let return_url: String =
            url::form_urlencoded::byte_serialize(self.page_url.as_bytes()).collect();
        format!("{}?return_url={}", self.login_path, return_url)
    }
}

/// A mounted affordance on one product card.
#[derive(Debug, Clone, PartialEq)]
pub struct Affordance {
    pub card_id: String,
    pub product_id: ProductId,
    pub state: AffordanceState,
}

/// Corner placement so the affordance does not cover the card's link target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Placement {
    pub bottom_px: u16,
    pub right_px: u16,
    pub z_index: u16,
}

impl Default for Placement {
    fn default() -> Self {
        Self {
            bottom_px: 8,
            right_px: 8,
            z_index: 2,
        }
    }
}

/// Render instruction for one affordance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AffordanceView {
    pub card_id: String,
    pub product_id: String,
    pub icon_url: String,
    pub filled: bool,
    pub placement: Placement,
    /// Clicks on the affordance never reach the card's own link.
    pub stop_propagation: bool,
}

impl AffordanceView {
    pub fn render(affordance: &Affordance, config: &WidgetConfig) -> Self {
        Self {
            card_id: affordance.card_id.clone(),
            product_id: affordance.product_id.as_str().to_string(),
            icon_url: config.icon_url(affordance.state),
            filled: affordance.state.is_filled(),
            placement: Placement::default(),
            stop_propagation: true,
        }
    }
}

/// Wishlist entry for the account navigation menu.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountNavLink {
    pub label: String,
    pub href: String,
}

/// Result of a click on an affordance.
#[derive(Debug, Clone, PartialEq)]
pub enum ToggleOutcome {
    RedirectToLogin(String),
    Updated(AffordanceState),
}
