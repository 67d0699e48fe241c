pub mod admin_catalog;
pub mod client;
pub mod storefront_metadata;
pub mod wishlist_gateway;
