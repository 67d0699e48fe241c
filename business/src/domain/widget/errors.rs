#[derive(Debug, thiserror::Error)]
pub enum WidgetError {
    /// The element carries no resolvable product identifier.
    #[error("widget.discovery_miss")]
    DiscoveryMiss,
    /// The viewer is not a logged-in customer.
    #[error("widget.unauthenticated")]
    Unauthenticated,
    #[error("widget.gateway: {0}")]
    Gateway(String),
}
