use serde::{Deserialize, Serialize};

/// Represents a merchant shop domain (e.g. `example.myshopify.com`).
/// Every wishlist query and mutation is scoped to one shop.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShopDomain(String);

impl ShopDomain {
    /// Creates a new ShopDomain, normalising case and surrounding whitespace.
    pub fn new(domain: impl Into<String>) -> Self {
        Self(domain.into().trim().to_ascii_lowercase())
    }

    /// Extracts the shop from a URL such as `https://example.myshopify.com`.
    pub fn from_url(raw: &str) -> Option<Self> {
        let parsed = url::Url::parse(raw).ok()?;
        parsed.host_str().map(Self::new)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ShopDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ShopDomain {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Identifier of a shopper. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CustomerId(String);

impl CustomerId {
    /// Returns `None` when the identifier is absent or blank.
    pub fn parse(raw: Option<String>) -> Option<Self> {
        raw.map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a catalog product. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProductId(String);

impl ProductId {
    /// Returns `None` when the identifier is absent or blank.
    pub fn parse(raw: Option<String>) -> Option<Self> {
        raw.map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Tenant context supplied by the authenticated session.
/// Threaded explicitly into every store call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenantContext {
    pub shop: ShopDomain,
}

impl TenantContext {
    pub fn new(shop: ShopDomain) -> Self {
        Self { shop }
    }
}
