#[derive(Debug, thiserror::Error)]
pub enum WishlistError {
    #[error("wishlist.customer_id_missing")]
    CustomerIdMissing,
    #[error("wishlist.product_id_missing")]
    ProductIdMissing,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
