use poem::http::StatusCode;
use poem::{Endpoint, EndpointExt, IntoEndpoint, Response};
use poem_openapi::error::{ContentTypeError, ParseRequestPayloadError};
use poem_openapi::{Object, payload::Json};

#[derive(Object, Debug)]
pub struct ErrorResponse {
    /// Always `false`
    pub success: bool,
    pub name: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(name: &str, message: &str) -> Self {
        Self {
            success: false,
            name: name.to_string(),
            message: message.to_string(),
        }
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

fn invalid_body(message: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::new("ValidationError", message)),
    )
}

/// Answers request bodies the framework cannot parse with the JSON error body
/// instead of its plain-text default.
pub fn with_json_payload_errors<E>(endpoint: E) -> impl Endpoint<Output = Response>
where
    E: IntoEndpoint,
    E::Endpoint: 'static,
{
    endpoint
        .into_endpoint()
        .catch_error(|err: ParseRequestPayloadError| async move {
            tracing::debug!("Rejected request body: {err}");
            invalid_body("request.malformed_body")
        })
        .catch_error(|err: ContentTypeError| async move {
            tracing::debug!("Rejected request content type: {err}");
            invalid_body("request.unsupported_content_type")
        })
}
