use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::wishlist::errors::WishlistError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for WishlistError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            WishlistError::CustomerIdMissing => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "wishlist.customer_id_missing",
            ),
            WishlistError::ProductIdMissing => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "wishlist.product_id_missing",
            ),
            WishlistError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "StorageError",
                "repository.persistence",
            ),
        };

        (status, Json(ErrorResponse::new(name, message)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::RepositoryError;

    #[test]
    fn should_map_missing_identifiers_to_bad_request() {
        let (status, json) = WishlistError::CustomerIdMissing.into_error_response();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(!json.0.success);
        assert_eq!(json.0.name, "ValidationError");
        assert_eq!(json.0.message, "wishlist.customer_id_missing");

        let (status, _) = WishlistError::ProductIdMissing.into_error_response();
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn should_map_storage_failure_to_internal_error() {
        let (status, json) =
            WishlistError::Repository(RepositoryError::DatabaseError).into_error_response();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json.0.name, "StorageError");
    }
}
