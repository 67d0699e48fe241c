use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::shared::value_objects::ProductId;

static PRODUCT_PATH: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"/products/([A-Za-z0-9][A-Za-z0-9_\-]*)").ok());

/// How the widget resolves a product card to a product identifier.
#[derive(Debug, Clone)]
pub enum DiscoveryStrategy {
    /// The card carries the id in a `data-product-id` attribute.
    DataAttribute,
    /// The card links to `/products/<handle>`; handles map to ids locally.
    LinkLookup(HashMap<String, ProductId>),
    /// The card links to `/products/<handle>`; metadata is fetched by handle.
    MetadataFetch,
}

/// Snapshot of one product-bearing element on the page.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCard {
    /// Stable identity of the element within the page.
    pub card_id: String,
    pub product_id_attribute: Option<String>,
    pub link_path: Option<String>,
}

impl ProductCard {
    /// Product handle taken from the card's link, if it points at a product.
    pub fn product_handle(&self) -> Option<String> {
        let path = self.link_path.as_deref()?;
        let re = PRODUCT_PATH.as_ref()?;
        re.captures(path)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(link_path: Option<&str>) -> ProductCard {
        ProductCard {
            card_id: "card-1".to_string(),
            product_id_attribute: None,
            link_path: link_path.map(String::from),
        }
    }

    #[test]
    fn should_extract_handle_from_product_link() {
        assert_eq!(
            card(Some("/products/linen-shirt")).product_handle(),
            Some("linen-shirt".to_string())
        );
    }

    #[test]
    fn should_extract_handle_from_collection_scoped_link_with_query() {
        assert_eq!(
            card(Some("/collections/summer/products/linen-shirt?variant=123")).product_handle(),
            Some("linen-shirt".to_string())
        );
    }

    #[test]
    fn should_ignore_links_that_are_not_products() {
        assert_eq!(card(Some("/collections/summer")).product_handle(), None);
        assert_eq!(card(None).product_handle(), None);
    }
}
