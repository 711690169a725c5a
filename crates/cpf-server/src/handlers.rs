//! Login endpoint handler.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use cpf_auth::{cpf, secret_hash};
use cpf_provider::{AuthRequest, AuthTokens};

use crate::error::ApiError;
use crate::state::AppState;

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// CPF as typed by the user; formatting characters are tolerated.
    #[serde(default)]
    pub cpf: Option<String>,
    /// Account password.
    #[serde(default)]
    pub password: Option<String>,
}

/// Successful login response body.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    /// Outcome description.
    pub message: String,
    /// Access token issued by the identity provider.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

/// POST `/auth/login`
///
/// Validates the CPF locally, derives the provider's `SECRET_HASH`, and
/// forwards the credentials.
///
/// # Responses
///
/// - 200 OK: authentication succeeded; body carries the access token
/// - 400 Bad Request: missing fields or structurally invalid CPF
/// - 401 Unauthorized: any provider-side failure, one generic message
pub async fn login(State(state): State<AppState>, Json(request): Json<LoginRequest>) -> Response {
    match handle_login(&state, request).await {
        Ok(tokens) => (
            StatusCode::OK,
            Json(LoginResponse {
                message: "Authentication successful".to_string(),
                token: tokens.access_token,
            }),
        )
            .into_response(),
        Err(err) => err.into_response(),
    }
}

/// Runs the login sequence: field presence, CPF checksum, hash derivation,
/// provider call.
async fn handle_login(state: &AppState, request: LoginRequest) -> Result<AuthTokens, ApiError> {
    let (Some(cpf_value), Some(password)) =
        (none_if_empty(request.cpf), none_if_empty(request.password))
    else {
        return Err(ApiError::MissingCredentials);
    };

    if !cpf::is_valid(&cpf_value) {
        return Err(ApiError::InvalidCpf);
    }

    let cognito = &state.config.cognito;
    let hash = secret_hash::derive(&cpf_value, &cognito.client_id, &cognito.client_secret);

    // The username goes to the provider exactly as supplied, not
    // digit-stripped.
    let authn = AuthRequest {
        username: cpf_value,
        password,
        secret_hash: hash,
        client_id: cognito.client_id.clone(),
        user_pool_id: cognito.user_pool_id.clone(),
    };

    state.provider.authenticate(&authn).await.map_err(|err| {
        tracing::error!(error = %err, "authentication rejected by identity provider");
        ApiError::AuthenticationFailed
    })
}

/// Treats an absent and an empty field the same way.
fn none_if_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
