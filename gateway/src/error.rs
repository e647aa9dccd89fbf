//! Renders every failure as the uniform JSON error body.

use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use clientes_core::AppError;
use serde_json::json;
use thiserror::Error;
use tracing::{debug, error, warn};

/// Anything a handler can fail with: a typed service error, or a
/// framework-level failure that gets a fixed body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    App(#[from] AppError),

    #[error("bad request")]
    BadRequest,

    #[error("resource not found")]
    NotFound,

    #[error("method not allowed")]
    MethodNotAllowed,

    #[error("internal server error")]
    Internal,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::App(err) => {
                StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            ApiError::BadRequest => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            ApiError::App(err) => err.to_body(),
            other => json!({ "message": other.to_string() }),
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!(%status, error = %self, "request failed");
        } else if status.is_server_error() {
            warn!(%status, error = %self, "upstream failure");
        } else {
            debug!(%status, error = %self, "request rejected");
        }

        (status, Json(body)).into_response()
    }
}

/// Response for a handler that panicked; the panic text is logged, never sent.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    error!(panic = detail, "handler panicked");
    ApiError::Internal.into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_errors_keep_their_status() {
        assert_eq!(ApiError::from(AppError::validation("x")).status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::from(AppError::upstream("x")).status(), StatusCode::BAD_GATEWAY);
        assert_eq!(
            ApiError::from(AppError::connectivity("x")).status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn framework_errors_have_fixed_messages() {
        assert_eq!(ApiError::BadRequest.to_string(), "bad request");
        assert_eq!(ApiError::NotFound.to_string(), "resource not found");
        assert_eq!(ApiError::Internal.to_string(), "internal server error");
    }

    #[test]
    fn panic_renders_internal_error() {
        let response = panic_response(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
