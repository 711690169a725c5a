//! Caller-facing error mapping for the login endpoint.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// Rejections surfaced by the login endpoint.
///
/// External failures deliberately collapse into `AuthenticationFailed`:
/// the response never discloses whether the CPF was unknown, the password
/// wrong, or the provider unavailable.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request body lacked a CPF or a password.
    #[error("CPF and password are required")]
    MissingCredentials,

    /// The CPF failed structural validation.
    #[error("Invalid CPF")]
    InvalidCpf,

    /// The identity provider rejected the credentials or failed.
    #[error("Incorrect CPF or password")]
    AuthenticationFailed,
}

impl ApiError {
    /// Returns the HTTP status code for this rejection.
    #[must_use]
    pub const fn http_status(&self) -> StatusCode {
        match self {
            Self::MissingCredentials | Self::InvalidCpf => StatusCode::BAD_REQUEST,
            Self::AuthenticationFailed => StatusCode::UNAUTHORIZED,
        }
    }
}

/// JSON body carrying a caller-facing message.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// Human-readable outcome description.
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = MessageResponse {
            message: self.to_string(),
        };
        (self.http_status(), Json(body)).into_response()
    }
}
