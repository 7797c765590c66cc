//! HTTP error mapping to `{"error", "message"}` bodies

use super::dto::ErrorResponse;
use crate::contract::UrlShortenerError;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

pub const INVALID_URL: &str = "INVALID_URL";
pub const INVALID_REQUEST: &str = "INVALID_REQUEST";
pub const NOT_FOUND: &str = "NOT_FOUND";
pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";

const INTERNAL_MESSAGE: &str = "An unexpected error occurred.";

/// An error ready to be rendered as an HTTP response
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ErrorResponse,
}

impl ApiError {
    pub fn new(status: StatusCode, error: &str, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ErrorResponse {
                error: error.to_string(),
                message: message.into(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

/// Map domain errors to HTTP errors
pub fn map_domain_error(error: UrlShortenerError) -> ApiError {
    match error {
        UrlShortenerError::InvalidUrl { message } => {
            ApiError::new(StatusCode::BAD_REQUEST, INVALID_URL, message)
        }

        e @ UrlShortenerError::NotFound { .. } => {
            ApiError::new(StatusCode::NOT_FOUND, NOT_FOUND, e.to_string())
        }

        e @ (UrlShortenerError::CodeSpaceExhausted { .. } | UrlShortenerError::Internal) => {
            tracing::error!(error = %e, "Unhandled error");
            ApiError::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                INTERNAL_ERROR,
                INTERNAL_MESSAGE,
            )
        }
    }
}

/// Map body extraction failures. A missing JSON content type keeps its 415,
/// every other malformed body is a 400.
pub fn map_json_rejection(rejection: JsonRejection) -> ApiError {
    let status = match &rejection {
        JsonRejection::MissingJsonContentType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        _ => StatusCode::BAD_REQUEST,
    };
    ApiError::new(status, INVALID_REQUEST, rejection.body_text())
}
